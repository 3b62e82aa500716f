//! Banners shown above the column list

use crate::models::{ColumnField, ImportContent};

/// How prominently a notice is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeSeverity {
    Warning,
    Info,
}

/// Primary key state worth telling the user about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryKeyNotice {
    /// No column is flagged as primary key
    Missing,
    /// More than one column is flagged; they form a composite key
    Composite,
}

impl PrimaryKeyNotice {
    /// Notice for the given columns, if any.
    ///
    /// The composite notice is informational and can be switched off.
    pub fn for_columns(columns: &[ColumnField], show_composite: bool) -> Option<Self> {
        match columns.iter().filter(|c| c.is_primary_key).count() {
            0 => Some(PrimaryKeyNotice::Missing),
            1 => None,
            _ if show_composite => Some(PrimaryKeyNotice::Composite),
            _ => None,
        }
    }

    pub fn severity(&self) -> NoticeSeverity {
        match self {
            PrimaryKeyNotice::Missing => NoticeSeverity::Warning,
            PrimaryKeyNotice::Composite => NoticeSeverity::Info,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PrimaryKeyNotice::Missing => "Warning: No primary keys selected",
            PrimaryKeyNotice::Composite => "Composite primary key selected",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PrimaryKeyNotice::Missing => {
                "Tables require at least one column as a primary key in order to uniquely \
                 identify each row. Without a primary key, you will not be able to update or \
                 delete rows from the table."
            }
            PrimaryKeyNotice::Composite => {
                "The columns that you've selected will be grouped as a primary key, and will \
                 serve as the unique identifier for the rows in your table"
            }
        }
    }
}

/// Summary line shown while import content is staged
pub fn import_summary(content: &ImportContent, column_count: usize) -> String {
    format!(
        "Your table will be created with {} rows and the following {} columns.",
        format_thousands(content.row_count),
        column_count
    )
}

/// `1234567` -> `"1,234,567"`
pub fn format_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(pk_flags: &[bool]) -> Vec<ColumnField> {
        pk_flags
            .iter()
            .enumerate()
            .map(|(i, pk)| {
                let column = ColumnField::named(format!("c{}", i), "int8");
                if *pk { column.primary_key() } else { column }
            })
            .collect()
    }

    #[test]
    fn test_missing_primary_key_warns() {
        let notice = PrimaryKeyNotice::for_columns(&columns(&[false, false]), true);
        assert_eq!(notice, Some(PrimaryKeyNotice::Missing));
        assert_eq!(notice.unwrap().severity(), NoticeSeverity::Warning);
    }

    #[test]
    fn test_empty_list_warns() {
        assert_eq!(
            PrimaryKeyNotice::for_columns(&[], false),
            Some(PrimaryKeyNotice::Missing)
        );
    }

    #[test]
    fn test_single_primary_key_is_quiet() {
        assert_eq!(PrimaryKeyNotice::for_columns(&columns(&[true, false]), true), None);
    }

    #[test]
    fn test_composite_primary_key_informs() {
        let notice = PrimaryKeyNotice::for_columns(&columns(&[true, true, false]), true).unwrap();
        assert_eq!(notice, PrimaryKeyNotice::Composite);
        assert_eq!(notice.severity(), NoticeSeverity::Info);
        assert_eq!(notice.title(), "Composite primary key selected");
    }

    #[test]
    fn test_composite_notice_can_be_disabled() {
        assert_eq!(PrimaryKeyNotice::for_columns(&columns(&[true, true]), false), None);
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_import_summary() {
        let content = ImportContent {
            row_count: 12500,
            ..Default::default()
        };
        assert_eq!(
            import_summary(&content, 4),
            "Your table will be created with 12,500 rows and the following 4 columns."
        );
    }
}
