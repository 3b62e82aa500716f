//! Foreign key assignment
//!
//! The selector state behind the relation modal, and the translation of its
//! outcome into a column update.

mod selector;


pub use selector::*;
