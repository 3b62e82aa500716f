//! Schema metadata types
//!
//! These mirror the shape returned by postgres-meta, so a snapshot can be
//! deserialized straight from its JSON.

use serde::{Deserialize, Serialize};

/// Table information, including its columns and relationships
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostgresTable {
    pub id: i64,
    pub schema: String,
    pub name: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub columns: Vec<PostgresColumn>,
    #[serde(default)]
    pub primary_keys: Vec<PostgresPrimaryKey>,
    #[serde(default)]
    pub relationships: Vec<PostgresRelationship>,
}

impl PostgresTable {
    pub fn new(id: i64, schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            schema: schema.into(),
            name: name.into(),
            comment: None,
            columns: Vec::new(),
            primary_keys: Vec::new(),
            relationships: Vec::new(),
        }
    }

    /// Builder: add a column, assigning its ordinal position and table ids
    pub fn with_column(mut self, column: PostgresColumn) -> Self {
        let ordinal = self.columns.len() + 1;
        let mut column = column;
        column.table_id = self.id;
        column.schema = self.schema.clone();
        column.table = self.name.clone();
        column.ordinal_position = ordinal;
        column.id = format!("{}.{}", self.id, ordinal);
        self.columns.push(column);
        self
    }

    /// Builder: mark an existing column as (part of) the primary key
    pub fn with_primary_key(mut self, column_name: impl Into<String>) -> Self {
        self.primary_keys.push(PostgresPrimaryKey {
            schema: self.schema.clone(),
            table_name: self.name.clone(),
            name: column_name.into(),
            table_id: self.id,
        });
        self
    }

    /// Builder: add a relationship
    pub fn with_relationship(mut self, relationship: PostgresRelationship) -> Self {
        self.relationships.push(relationship);
        self
    }

    /// `schema.name`
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.schema, self.name)
    }

    pub fn column(&self, name: &str) -> Option<&PostgresColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn is_primary_key_column(&self, column_name: &str) -> bool {
        self.primary_keys.iter().any(|pk| pk.name == column_name)
    }

    /// The relationship whose source is the given column of this table, if any
    pub fn relationship_for(&self, column_name: &str) -> Option<&PostgresRelationship> {
        self.relationships.iter().find(|r| {
            r.source_schema == self.schema
                && r.source_table_name == self.name
                && r.source_column_name == column_name
        })
    }
}

/// Column information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostgresColumn {
    pub table_id: i64,
    pub schema: String,
    pub table: String,
    /// `"<table_id>.<ordinal_position>"`
    pub id: String,
    pub ordinal_position: usize,
    pub name: String,
    #[serde(default)]
    pub default_value: Option<String>,
    pub data_type: String,
    /// Underlying type name (`int8`, `text`, an enum name, ...)
    pub format: String,
    #[serde(default)]
    pub is_identity: bool,
    #[serde(default = "default_true")]
    pub is_nullable: bool,
    #[serde(default = "default_true")]
    pub is_updatable: bool,
    #[serde(default)]
    pub is_unique: bool,
    #[serde(default)]
    pub enums: Vec<String>,
    #[serde(default)]
    pub comment: Option<String>,
}

fn default_true() -> bool {
    true
}

impl PostgresColumn {
    /// Create a detached column; table ids are filled in by `PostgresTable::with_column`
    pub fn new(name: impl Into<String>, format: impl Into<String>) -> Self {
        let format = format.into();
        Self {
            table_id: 0,
            schema: String::new(),
            table: String::new(),
            id: String::new(),
            ordinal_position: 0,
            name: name.into(),
            default_value: None,
            data_type: format.clone(),
            format,
            is_identity: false,
            is_nullable: true,
            is_updatable: true,
            is_unique: false,
            enums: Vec::new(),
            comment: None,
        }
    }

    /// Builder: set default value expression
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Builder: set as not null
    pub fn not_null(mut self) -> Self {
        self.is_nullable = false;
        self
    }

    /// Builder: set as unique
    pub fn unique(mut self) -> Self {
        self.is_unique = true;
        self
    }

    /// Builder: set as identity
    pub fn identity(mut self) -> Self {
        self.is_identity = true;
        self.is_nullable = false;
        self
    }
}

/// Primary key member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostgresPrimaryKey {
    pub schema: String,
    pub table_name: String,
    /// Column name
    pub name: String,
    pub table_id: i64,
}

/// Foreign key relationship from a source column to a target column
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostgresRelationship {
    pub id: i64,
    pub constraint_name: String,
    pub source_schema: String,
    pub source_table_name: String,
    pub source_column_name: String,
    pub target_table_schema: String,
    pub target_table_name: String,
    pub target_column_name: String,
}

impl PostgresRelationship {
    /// `schema.table.column` of the referenced column
    pub fn target_path(&self) -> String {
        format!(
            "{}.{}.{}",
            self.target_table_schema, self.target_table_name, self.target_column_name
        )
    }

    /// Whether this relationship points at the given table/column
    pub fn targets(&self, table: &PostgresTable, column: &PostgresColumn) -> bool {
        self.target_table_schema == table.schema
            && self.target_table_name == table.name
            && self.target_column_name == column.name
    }
}

/// User-defined type information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostgresType {
    pub id: i64,
    pub name: String,
    pub schema: String,
    pub format: String,
    /// Enum labels; empty for non-enum types
    #[serde(default)]
    pub enums: Vec<String>,
    #[serde(default)]
    pub comment: Option<String>,
}

impl PostgresType {
    /// Create an enum type
    pub fn enumeration<I, S>(id: i64, schema: impl Into<String>, name: impl Into<String>, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        Self {
            id,
            format: name.clone(),
            name,
            schema: schema.into(),
            enums: labels.into_iter().map(Into::into).collect(),
            comment: None,
        }
    }

    pub fn is_enum(&self) -> bool {
        !self.enums.is_empty()
    }
}
