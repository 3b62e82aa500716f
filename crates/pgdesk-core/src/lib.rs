//! pgdesk Core - schema metadata shared by the pgdesk crates
//!
//! This crate holds the backend-facing types the table editor works with:
//!
//! - `PostgresTable` / `PostgresColumn` - table and column metadata
//! - `PostgresRelationship` - a foreign key between two columns
//! - `PostgresType` - user-defined types (enums are offered as column formats)
//! - `SchemaSnapshot` - the metadata bundle loaded from JSON

mod error;
mod metadata;
mod schema;

pub use error::*;
pub use metadata::*;
pub use schema::*;
