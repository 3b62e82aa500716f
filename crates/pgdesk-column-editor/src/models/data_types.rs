//! Column type catalogue

use pgdesk_core::PostgresType;

/// Category of column type for grouping in the type picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnTypeCategory {
    Number,
    Json,
    Text,
    Time,
    Bool,
    Other,
    Enum,
}

impl ColumnTypeCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            ColumnTypeCategory::Number => "Number",
            ColumnTypeCategory::Json => "JSON",
            ColumnTypeCategory::Text => "Text",
            ColumnTypeCategory::Time => "Date/Time",
            ColumnTypeCategory::Bool => "Boolean",
            ColumnTypeCategory::Other => "Other",
            ColumnTypeCategory::Enum => "Enumerated types",
        }
    }
}

/// One entry of the type picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnTypeOption {
    /// Format stored on the column
    pub name: String,
    pub description: String,
    pub category: ColumnTypeCategory,
}

impl ColumnTypeOption {
    /// Picker entry text: `int8 · Number`
    pub fn label(&self) -> String {
        format!("{} · {}", self.name, self.category.display_name())
    }
}

/// Built-in formats: `(name, description, category)`
pub const POSTGRES_DATA_TYPES: &[(&str, &str, ColumnTypeCategory)] = &[
    ("int2", "Signed two-byte integer", ColumnTypeCategory::Number),
    ("int4", "Signed four-byte integer", ColumnTypeCategory::Number),
    ("int8", "Signed eight-byte integer", ColumnTypeCategory::Number),
    ("float4", "Single precision floating-point number (4 bytes)", ColumnTypeCategory::Number),
    ("float8", "Double precision floating-point number (8 bytes)", ColumnTypeCategory::Number),
    ("numeric", "Exact numeric of selectable precision", ColumnTypeCategory::Number),
    ("json", "Textual JSON data", ColumnTypeCategory::Json),
    ("jsonb", "Binary JSON data, decomposed", ColumnTypeCategory::Json),
    ("text", "Variable-length character string", ColumnTypeCategory::Text),
    ("varchar", "Variable-length character string", ColumnTypeCategory::Text),
    ("uuid", "Universally unique identifier", ColumnTypeCategory::Text),
    ("date", "Calendar date (year, month, day)", ColumnTypeCategory::Time),
    ("time", "Time of day (no time zone)", ColumnTypeCategory::Time),
    ("timetz", "Time of day, including time zone", ColumnTypeCategory::Time),
    ("timestamp", "Date and time (no time zone)", ColumnTypeCategory::Time),
    ("timestamptz", "Date and time, including time zone", ColumnTypeCategory::Time),
    ("bool", "Logical boolean (true/false)", ColumnTypeCategory::Bool),
    ("bytea", "Variable-length binary string", ColumnTypeCategory::Other),
];

/// Built-in formats followed by the given enum types
pub fn column_type_options(enum_types: &[PostgresType]) -> Vec<ColumnTypeOption> {
    let builtin = POSTGRES_DATA_TYPES
        .iter()
        .map(|(name, description, category)| ColumnTypeOption {
            name: name.to_string(),
            description: description.to_string(),
            category: *category,
        });

    let enums = enum_types
        .iter()
        .filter(|t| t.is_enum())
        .map(|t| ColumnTypeOption {
            name: t.format.clone(),
            description: t.comment.clone().unwrap_or_else(|| t.enums.join(", ")),
            category: ColumnTypeCategory::Enum,
        });

    builtin.chain(enums).collect()
}
