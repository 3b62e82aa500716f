//! Column field model

use pgdesk_core::{PostgresColumn, PostgresRelationship, PostgresTable};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ColumnChanges;

/// A column as edited in the table editor.
///
/// The owning editor holds the authoritative list; the column management
/// panel only ever hands back replacement lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnField {
    /// Stable identifier used for updates, removal and drag keys
    pub id: Uuid,
    /// Column name
    pub name: String,
    /// Comment/description
    pub comment: String,
    /// Type name without array marker (e.g. "int8", "text", an enum name)
    pub format: String,
    /// Default value, either a literal or a SQL expression
    pub default_value: Option<String>,
    /// Check constraint expression
    pub check: Option<String>,
    pub is_nullable: bool,
    pub is_unique: bool,
    pub is_identity: bool,
    /// Whether the column holds an array of `format`
    pub is_array: bool,
    pub is_primary_key: bool,
    /// Whether the column does not exist in the database yet
    pub is_new_column: bool,
    /// Relationship to another table's column
    pub foreign_key: Option<PostgresRelationship>,
}

impl ColumnField {
    /// Generate a fresh column with default values
    pub fn generate() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            comment: String::new(),
            format: String::new(),
            default_value: None,
            check: None,
            is_nullable: true,
            is_unique: false,
            is_identity: false,
            is_array: false,
            is_primary_key: false,
            is_new_column: true,
            foreign_key: None,
        }
    }

    /// Create a new column with a specific name and format
    pub fn named(name: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            format: format.into(),
            ..Self::generate()
        }
    }

    /// Create from an existing column of `table`
    pub fn from_postgres_column(column: &PostgresColumn, table: &PostgresTable) -> Self {
        let is_array = column.data_type == "ARRAY";
        let format = if is_array {
            column
                .format
                .strip_prefix('_')
                .unwrap_or(&column.format)
                .to_string()
        } else {
            column.format.clone()
        };

        Self {
            id: Uuid::new_v4(),
            name: column.name.clone(),
            comment: column.comment.clone().unwrap_or_default(),
            format,
            default_value: column.default_value.clone(),
            check: None,
            is_nullable: column.is_nullable,
            is_unique: column.is_unique,
            is_identity: column.is_identity,
            is_array,
            is_primary_key: table.is_primary_key_column(&column.name),
            is_new_column: false,
            foreign_key: table.relationship_for(&column.name).cloned(),
        }
    }

    /// Build the field list for every column of `table`, in ordinal order
    pub fn from_postgres_table(table: &PostgresTable) -> Vec<Self> {
        let mut columns: Vec<&PostgresColumn> = table.columns.iter().collect();
        columns.sort_by_key(|c| c.ordinal_position);
        columns
            .into_iter()
            .map(|c| Self::from_postgres_column(c, table))
            .collect()
    }

    /// Apply a partial update.
    ///
    /// A rename is carried into the attached foreign key's source column.
    pub fn apply(&mut self, changes: ColumnChanges) {
        let renamed = changes.name.is_some();
        let ColumnChanges {
            name,
            comment,
            format,
            default_value,
            check,
            is_nullable,
            is_unique,
            is_identity,
            is_array,
            is_primary_key,
            foreign_key,
        } = changes;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(comment) = comment {
            self.comment = comment;
        }
        if let Some(format) = format {
            self.format = format;
        }
        if let Some(default_value) = default_value {
            self.default_value = default_value;
        }
        if let Some(check) = check {
            self.check = check;
        }
        if let Some(is_nullable) = is_nullable {
            self.is_nullable = is_nullable;
        }
        if let Some(is_unique) = is_unique {
            self.is_unique = is_unique;
        }
        if let Some(is_identity) = is_identity {
            self.is_identity = is_identity;
        }
        if let Some(is_array) = is_array {
            self.is_array = is_array;
        }
        if let Some(is_primary_key) = is_primary_key {
            self.is_primary_key = is_primary_key;
        }
        if let Some(foreign_key) = foreign_key {
            self.foreign_key = foreign_key;
        }

        if renamed {
            if let Some(foreign_key) = self.foreign_key.as_mut() {
                foreign_key.source_column_name = self.name.clone();
            }
        }
    }

    /// Builder: set as primary key
    pub fn primary_key(mut self) -> Self {
        self.is_primary_key = true;
        self.is_nullable = false;
        self
    }

    /// Builder: set default value
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Builder: attach a foreign key
    pub fn references(mut self, foreign_key: PostgresRelationship) -> Self {
        self.foreign_key = Some(foreign_key);
        self
    }

    /// Type name as shown in the type column, e.g. `int8[]` for arrays
    pub fn display_format(&self) -> String {
        if self.is_array {
            format!("{}[]", self.format)
        } else {
            self.format.clone()
        }
    }
}
