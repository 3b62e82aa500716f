//! Bulk import payload

use serde::{Deserialize, Serialize};

/// Spreadsheet content staged for import into a new table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportContent {
    /// Source file name, if the content came from a file
    pub file_name: Option<String>,
    /// All headers found in the source
    pub headers: Vec<String>,
    /// Parsed rows, one cell per header
    pub rows: Vec<Vec<String>>,
    /// Total row count of the source
    pub row_count: usize,
    /// Headers chosen to become columns
    pub selected_headers: Vec<String>,
}

impl ImportContent {
    /// Nothing staged: every field still holds its default.
    ///
    /// Any populated field makes the payload count as content, including a
    /// file name with no parsed rows yet. Owners with nothing staged pass
    /// either `None` or `ImportContent::default()`.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(ImportContent::default().is_empty());
    }

    #[test]
    fn test_any_populated_field_is_content() {
        let file_only = ImportContent {
            file_name: Some("users.csv".into()),
            ..Default::default()
        };
        assert!(!file_only.is_empty());

        let headers_only = ImportContent {
            headers: vec!["email".into()],
            ..Default::default()
        };
        assert!(!headers_only.is_empty());

        let count_only = ImportContent {
            row_count: 3,
            ..Default::default()
        };
        assert!(!count_only.is_empty());
    }

    #[test]
    fn test_empty_json_object_is_empty() {
        let content: ImportContent = serde_json::from_str("{}").unwrap();
        assert!(content.is_empty());
    }
}
