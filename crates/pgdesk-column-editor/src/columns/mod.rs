//! Column list operations
//!
//! Pure functions over an ordered column list. Each mutation returns a new
//! list; nothing is changed in place.

mod list;


pub use list::*;
