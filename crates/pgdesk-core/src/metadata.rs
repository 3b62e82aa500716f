//! Loading schema metadata snapshots

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{PgdeskError, PostgresTable, PostgresType, Result};

/// Tables and types of a database, as handed to the table editor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaSnapshot {
    pub tables: Vec<PostgresTable>,
    pub types: Vec<PostgresType>,
}

impl SchemaSnapshot {
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: Self = serde_json::from_str(json)?;
        snapshot.validate()?;
        tracing::debug!(
            tables = snapshot.tables.len(),
            types = snapshot.types.len(),
            "loaded schema snapshot"
        );
        Ok(snapshot)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Each table must appear once, and its primary keys must name its own columns
    fn validate(&self) -> Result<()> {
        for (i, table) in self.tables.iter().enumerate() {
            let duplicate = self.tables[..i]
                .iter()
                .any(|t| t.schema == table.schema && t.name == table.name);
            if duplicate {
                return Err(PgdeskError::Schema(format!(
                    "table {} listed more than once",
                    table.qualified_name()
                )));
            }

            if let Some(pk) = table
                .primary_keys
                .iter()
                .find(|pk| table.column(&pk.name).is_none())
            {
                return Err(PgdeskError::Schema(format!(
                    "primary key {} is not a column of {}",
                    pk.name,
                    table.qualified_name()
                )));
            }
        }
        Ok(())
    }

    /// Look up a table by schema and name
    pub fn table(&self, schema: &str, name: &str) -> Result<&PostgresTable> {
        self.tables
            .iter()
            .find(|t| t.schema == schema && t.name == name)
            .ok_or_else(|| PgdeskError::NotFound(format!("table {}.{}", schema, name)))
    }

    /// Enum types only; these are the user types offered as column formats
    pub fn enum_types(&self) -> Vec<PostgresType> {
        self.types.iter().filter(|t| t.is_enum()).cloned().collect()
    }
}
