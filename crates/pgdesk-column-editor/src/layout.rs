//! Column list header layout

/// What a header cell sits above
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCellKind {
    DragHandle,
    Name,
    Type,
    DefaultValue,
    Primary,
    Spacer,
    Configure,
    Remove,
}

/// One cell of the header row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderCell {
    pub kind: HeaderCellKind,
    pub label: Option<&'static str>,
    /// Fraction of the row width, 0.0..=1.0
    pub width: f32,
    /// Tooltip next to the label
    pub hint: Option<&'static str>,
}

impl HeaderCell {
    fn blank(kind: HeaderCellKind, width: f32) -> Self {
        Self {
            kind,
            label: None,
            width,
            hint: None,
        }
    }

    fn labelled(kind: HeaderCellKind, label: &'static str, width: f32) -> Self {
        Self {
            kind,
            label: Some(label),
            width,
            hint: None,
        }
    }
}

pub const DEFAULT_VALUE_HINT: &str = "Can be either a value or a SQL expression";

/// Header cells for the column list.
///
/// New records get a drag handle and a narrower default value cell. Staged
/// import content trades the remove cell for a spacer.
pub fn header_cells(is_new_record: bool, has_import_content: bool) -> Vec<HeaderCell> {
    let mut cells = Vec::with_capacity(8);

    if is_new_record {
        cells.push(HeaderCell::blank(HeaderCellKind::DragHandle, 0.05));
    }
    cells.push(HeaderCell::labelled(HeaderCellKind::Name, "Name", 0.25));
    cells.push(HeaderCell::labelled(HeaderCellKind::Type, "Type", 0.25));
    cells.push(HeaderCell {
        hint: Some(DEFAULT_VALUE_HINT),
        ..HeaderCell::labelled(
            HeaderCellKind::DefaultValue,
            "Default Value",
            if is_new_record { 0.25 } else { 0.30 },
        )
    });
    cells.push(HeaderCell::labelled(HeaderCellKind::Primary, "Primary", 0.10));
    cells.push(HeaderCell::blank(
        HeaderCellKind::Spacer,
        if has_import_content { 0.10 } else { 0.0 },
    ));
    cells.push(HeaderCell::blank(HeaderCellKind::Configure, 0.05));
    if !has_import_content {
        cells.push(HeaderCell::blank(HeaderCellKind::Remove, 0.05));
    }

    cells
}
