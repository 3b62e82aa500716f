//! Models for column management
//!
//! The column field edited by the panel, partial updates to it, the
//! bulk-import payload and the column type catalogue.

mod column_changes;
mod column_field;
mod data_types;
mod import_content;
mod table_identity;

pub use column_changes::ColumnChanges;
pub use column_field::ColumnField;
pub use data_types::{
    column_type_options, ColumnTypeCategory, ColumnTypeOption, POSTGRES_DATA_TYPES,
};
pub use import_content::ImportContent;
pub use table_identity::TableIdentity;
