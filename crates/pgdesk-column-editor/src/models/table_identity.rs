//! Identity of the table whose columns are being edited

use pgdesk_core::PostgresTable;
use serde::{Deserialize, Serialize};

/// Schema and name of the owning table.
///
/// Either may be empty while a new table is still being named.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableIdentity {
    pub schema: String,
    pub name: String,
}

impl TableIdentity {
    pub fn new(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            name: name.into(),
        }
    }
}

impl From<&PostgresTable> for TableIdentity {
    fn from(table: &PostgresTable) -> Self {
        Self::new(table.schema.clone(), table.name.clone())
    }
}
