//! Events emitted by column management

use crate::models::ColumnField;

/// Events emitted by `ColumnManagement` and the column management panel
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnManagementEvent {
    /// The column list changed.
    /// The parent should replace its list and push it back down.
    ColumnsUpdated { columns: Vec<ColumnField> },

    /// User wants to pick (or re-edit) spreadsheet content to import.
    SelectImportData,

    /// User wants to discard the staged import content.
    ClearImportContent,
}

/// Receiver for the changes requested by `ColumnManagement`
pub trait ColumnManagementDelegate {
    /// A new column list replacing the current one
    fn columns_updated(&mut self, columns: Vec<ColumnField>);

    fn select_import_data(&mut self) {}

    fn clear_import_content(&mut self) {}
}

/// Delegate that records every request as an event, in order
#[derive(Debug, Default)]
pub struct EventBuffer {
    events: Vec<ColumnManagementEvent>,
}

impl EventBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[ColumnManagementEvent] {
        &self.events
    }

    pub fn take(&mut self) -> Vec<ColumnManagementEvent> {
        std::mem::take(&mut self.events)
    }

    /// Columns of the most recent update, if any
    pub fn last_columns(&self) -> Option<&[ColumnField]> {
        self.events.iter().rev().find_map(|event| match event {
            ColumnManagementEvent::ColumnsUpdated { columns } => Some(columns.as_slice()),
            _ => None,
        })
    }
}

impl ColumnManagementDelegate for EventBuffer {
    fn columns_updated(&mut self, columns: Vec<ColumnField>) {
        self.events.push(ColumnManagementEvent::ColumnsUpdated { columns });
    }

    fn select_import_data(&mut self) {
        self.events.push(ColumnManagementEvent::SelectImportData);
    }

    fn clear_import_content(&mut self) {
        self.events.push(ColumnManagementEvent::ClearImportContent);
    }
}
