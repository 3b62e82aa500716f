//! Partial column updates

use pgdesk_core::PostgresRelationship;

/// A partial update to a `ColumnField`.
///
/// `None` leaves a field untouched. Fields that are themselves optional on
/// the column are doubly wrapped so a change can clear them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnChanges {
    pub name: Option<String>,
    pub comment: Option<String>,
    pub format: Option<String>,
    pub default_value: Option<Option<String>>,
    pub check: Option<Option<String>>,
    pub is_nullable: Option<bool>,
    pub is_unique: Option<bool>,
    pub is_identity: Option<bool>,
    pub is_array: Option<bool>,
    pub is_primary_key: Option<bool>,
    pub foreign_key: Option<Option<PostgresRelationship>>,
}

impl ColumnChanges {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(Some(value.into()));
        self
    }

    pub fn clear_default_value(mut self) -> Self {
        self.default_value = Some(None);
        self
    }

    pub fn check(mut self, expression: Option<String>) -> Self {
        self.check = Some(expression);
        self
    }

    pub fn nullable(mut self, is_nullable: bool) -> Self {
        self.is_nullable = Some(is_nullable);
        self
    }

    pub fn unique(mut self, is_unique: bool) -> Self {
        self.is_unique = Some(is_unique);
        self
    }

    pub fn identity(mut self, is_identity: bool) -> Self {
        self.is_identity = Some(is_identity);
        self
    }

    pub fn array(mut self, is_array: bool) -> Self {
        self.is_array = Some(is_array);
        self
    }

    pub fn primary_key(mut self, is_primary_key: bool) -> Self {
        self.is_primary_key = Some(is_primary_key);
        self
    }

    pub fn foreign_key(mut self, foreign_key: Option<PostgresRelationship>) -> Self {
        self.foreign_key = Some(foreign_key);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
