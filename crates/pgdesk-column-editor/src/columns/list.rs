//! Add, remove, update and reorder operations

use uuid::Uuid;

use crate::models::{ColumnChanges, ColumnField};

/// The two independently sortable groups of a column list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnGroup {
    PrimaryKeys,
    Others,
}

impl ColumnGroup {
    pub fn of(column: &ColumnField) -> Self {
        if column.is_primary_key {
            ColumnGroup::PrimaryKeys
        } else {
            ColumnGroup::Others
        }
    }

    /// Element id of the drop area for this group
    pub fn droppable_id(&self) -> &'static str {
        match self {
            ColumnGroup::PrimaryKeys => "pk_columns_droppable",
            ColumnGroup::Others => "other_columns_droppable",
        }
    }
}

/// Outcome of a drag within one group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragResult {
    /// Index within the group the column was picked up from
    pub source: usize,
    /// Index within the group it was dropped at; `None` when dropped outside the list
    pub destination: Option<usize>,
}

impl DragResult {
    pub fn moved(source: usize, destination: usize) -> Self {
        Self {
            source,
            destination: Some(destination),
        }
    }

    pub fn cancelled(source: usize) -> Self {
        Self {
            source,
            destination: None,
        }
    }
}

/// Split into `(primary_keys, others)`, each keeping its relative order
pub fn partition_columns(columns: &[ColumnField]) -> (Vec<ColumnField>, Vec<ColumnField>) {
    columns.iter().cloned().partition(|c| c.is_primary_key)
}

/// Append `column` to the list
pub fn add_column(columns: &[ColumnField], column: ColumnField) -> Vec<ColumnField> {
    let mut updated = columns.to_vec();
    updated.push(column);
    updated
}

/// Drop the column with the given id
pub fn remove_column(columns: &[ColumnField], id: Uuid) -> Vec<ColumnField> {
    columns.iter().filter(|c| c.id != id).cloned().collect()
}

/// Apply `changes` to the column with the given id
pub fn update_column(columns: &[ColumnField], id: Uuid, changes: &ColumnChanges) -> Vec<ColumnField> {
    columns
        .iter()
        .map(|column| {
            if column.id == id {
                let mut column = column.clone();
                column.apply(changes.clone());
                column
            } else {
                column.clone()
            }
        })
        .collect()
}

/// Move a column within `group`, then rebuild the list as primary keys
/// followed by the other columns.
///
/// Returns `None` when the drag ended outside the list or its source index
/// does not exist in the group.
pub fn sort_columns(
    columns: &[ColumnField],
    group: ColumnGroup,
    drag: DragResult,
) -> Option<Vec<ColumnField>> {
    let destination = drag.destination?;
    let (mut primary_keys, mut others) = partition_columns(columns);

    let members = match group {
        ColumnGroup::PrimaryKeys => &mut primary_keys,
        ColumnGroup::Others => &mut others,
    };

    if drag.source >= members.len() {
        tracing::warn!(
            ?group,
            source = drag.source,
            len = members.len(),
            "ignoring drag from a position outside the group"
        );
        return None;
    }

    let moved = members.remove(drag.source);
    let destination = destination.min(members.len());
    members.insert(destination, moved);

    primary_keys.extend(others);
    Some(primary_keys)
}

/// Find a column by id
pub fn find_column(columns: &[ColumnField], id: Uuid) -> Option<&ColumnField> {
    columns.iter().find(|c| c.id == id)
}
