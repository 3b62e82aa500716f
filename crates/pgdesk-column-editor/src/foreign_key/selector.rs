//! Foreign key selector state

use pgdesk_core::{PostgresColumn, PostgresRelationship, PostgresTable};
use thiserror::Error;

use crate::models::{ColumnChanges, ColumnField, TableIdentity};

/// Errors raised while picking a foreign key target
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ForeignKeySelectionError {
    #[error("Unknown table: {schema}.{name}")]
    UnknownTable { schema: String, name: String },

    #[error("Unknown column {column} on table {table}")]
    UnknownColumn { table: String, column: String },

    #[error("No table selected")]
    NoTableSelected,

    #[error("Select a column of {0} to reference")]
    NoColumnSelected(String),
}

/// A referenced table and one of its columns
#[derive(Debug, Clone, PartialEq)]
pub struct ForeignKeyTarget {
    pub table: PostgresTable,
    pub column: PostgresColumn,
}

/// What the user confirmed in the selector
#[derive(Debug, Clone, PartialEq)]
pub enum ForeignKeyDecision {
    /// Reference the given target
    Assign(ForeignKeyTarget),
    /// Drop the column's relation
    Remove,
}

impl ForeignKeyDecision {
    /// The update to apply to the edited column.
    ///
    /// Assigning builds a fresh relationship, adopts the target column's
    /// format and clears the default value. Removing only clears the
    /// relationship.
    pub fn into_changes(self, table: Option<&TableIdentity>, column: &ColumnField) -> ColumnChanges {
        match self {
            ForeignKeyDecision::Assign(target) => {
                let relationship = build_relationship(table, column, &target);
                ColumnChanges::new()
                    .foreign_key(Some(relationship))
                    .format(target.column.format)
                    .clear_default_value()
            }
            ForeignKeyDecision::Remove => ColumnChanges::new().foreign_key(None),
        }
    }
}

/// Build the relationship record from `column` of the owning table to `target`
pub fn build_relationship(
    table: Option<&TableIdentity>,
    column: &ColumnField,
    target: &ForeignKeyTarget,
) -> PostgresRelationship {
    PostgresRelationship {
        id: 0,
        constraint_name: String::new(),
        source_schema: table.map(|t| t.schema.clone()).unwrap_or_default(),
        source_table_name: table.map(|t| t.name.clone()).unwrap_or_default(),
        source_column_name: column.name.clone(),
        target_table_schema: target.table.schema.clone(),
        target_table_name: target.table.name.clone(),
        target_column_name: target.column.name.clone(),
    }
}

/// State of the relation modal for a single column
#[derive(Debug, Clone)]
pub struct ForeignKeySelector {
    column: ColumnField,
    tables: Vec<PostgresTable>,
    selected_table: Option<usize>,
    selected_column: Option<usize>,
}

impl ForeignKeySelector {
    /// Open the selector for `column`, pre-selecting its current target if
    /// that target is among `tables`
    pub fn open(column: ColumnField, tables: Vec<PostgresTable>) -> Self {
        let mut selector = Self {
            column,
            tables,
            selected_table: None,
            selected_column: None,
        };

        if let Some(fk) = selector.column.foreign_key.clone() {
            if selector
                .select_table(&fk.target_table_schema, &fk.target_table_name)
                .and_then(|_| selector.select_column(&fk.target_column_name))
                .is_err()
            {
                tracing::debug!(
                    referenced = %fk.target_path(),
                    "existing foreign key target is not among the candidate tables"
                );
                selector.clear_selection();
            }
        }

        selector
    }

    /// The column whose relation is being edited
    pub fn column(&self) -> &ColumnField {
        &self.column
    }

    /// Candidate tables
    pub fn tables(&self) -> &[PostgresTable] {
        &self.tables
    }

    pub fn selected_table(&self) -> Option<&PostgresTable> {
        self.selected_table.and_then(|ix| self.tables.get(ix))
    }

    pub fn selected_column(&self) -> Option<&PostgresColumn> {
        let table = self.selected_table()?;
        self.selected_column.and_then(|ix| table.columns.get(ix))
    }

    /// Columns of the selected table, empty until a table is chosen
    pub fn available_columns(&self) -> &[PostgresColumn] {
        self.selected_table()
            .map(|t| t.columns.as_slice())
            .unwrap_or(&[])
    }

    /// Whether `column` of the selected table is what the edited column
    /// references today
    pub fn is_current_target(&self, column: &PostgresColumn) -> bool {
        match (self.column.foreign_key.as_ref(), self.selected_table()) {
            (Some(fk), Some(table)) => fk.targets(table, column),
            _ => false,
        }
    }

    /// Choose the referenced table. Resets the column choice.
    pub fn select_table(&mut self, schema: &str, name: &str) -> Result<(), ForeignKeySelectionError> {
        let ix = self
            .tables
            .iter()
            .position(|t| t.schema == schema && t.name == name)
            .ok_or_else(|| ForeignKeySelectionError::UnknownTable {
                schema: schema.to_string(),
                name: name.to_string(),
            })?;

        self.selected_table = Some(ix);
        self.selected_column = None;
        Ok(())
    }

    /// Choose the referenced column of the selected table
    pub fn select_column(&mut self, name: &str) -> Result<(), ForeignKeySelectionError> {
        let table = self
            .selected_table()
            .ok_or(ForeignKeySelectionError::NoTableSelected)?;
        let ix = table
            .columns
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| ForeignKeySelectionError::UnknownColumn {
                table: table.qualified_name(),
                column: name.to_string(),
            })?;

        self.selected_column = Some(ix);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected_table = None;
        self.selected_column = None;
    }

    /// Resolve the current selection.
    ///
    /// No table means the relation is removed. A table without a column is
    /// incomplete and rejected.
    pub fn confirm(&self) -> Result<ForeignKeyDecision, ForeignKeySelectionError> {
        let Some(table) = self.selected_table() else {
            return Ok(ForeignKeyDecision::Remove);
        };
        let column = self
            .selected_column()
            .ok_or_else(|| ForeignKeySelectionError::NoColumnSelected(table.qualified_name()))?;

        Ok(ForeignKeyDecision::Assign(ForeignKeyTarget {
            table: table.clone(),
            column: column.clone(),
        }))
    }
}
