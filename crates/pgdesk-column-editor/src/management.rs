//! Column management controller
//!
//! Framework-independent state behind the column management panel. The
//! column list is owned by the caller: every mutation is handed to a
//! `ColumnManagementDelegate` as a new list, and the caller pushes the
//! accepted list back with `set_columns`. The only state kept here is the
//! column whose foreign key is being edited.

use pgdesk_core::{PostgresTable, PostgresType};
use uuid::Uuid;

use crate::columns::{self, ColumnGroup, DragResult};
use crate::events::ColumnManagementDelegate;
use crate::foreign_key::{ForeignKeySelectionError, ForeignKeySelector};
use crate::layout::{header_cells, HeaderCell};
use crate::models::{
    column_type_options, ColumnChanges, ColumnField, ColumnTypeOption, ImportContent,
    TableIdentity,
};
use crate::notices::{import_summary, PrimaryKeyNotice};
use crate::settings::ColumnEditorSettings;

/// Inputs supplied by the table editor
#[derive(Debug, Clone, Default)]
pub struct ColumnManagementProps {
    /// Table being edited; `None` or partially filled for a new table
    pub table: Option<TableIdentity>,
    /// All tables, used as foreign key targets
    pub tables: Vec<PostgresTable>,
    /// Enum types offered as column formats
    pub enum_types: Vec<PostgresType>,
    /// Spreadsheet content staged for import
    pub import_content: Option<ImportContent>,
    /// Whether the table does not exist yet
    pub is_new_record: bool,
}

pub struct ColumnManagement {
    props: ColumnManagementProps,
    columns: Vec<ColumnField>,
    settings: ColumnEditorSettings,
    relation_editor: Option<ForeignKeySelector>,
}

impl ColumnManagement {
    pub fn new(
        props: ColumnManagementProps,
        columns: Vec<ColumnField>,
        settings: ColumnEditorSettings,
    ) -> Self {
        Self {
            props,
            columns,
            settings,
            relation_editor: None,
        }
    }

    pub fn props(&self) -> &ColumnManagementProps {
        &self.props
    }

    pub fn set_props(&mut self, props: ColumnManagementProps) {
        self.props = props;
    }

    pub fn settings(&self) -> &ColumnEditorSettings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: ColumnEditorSettings) {
        self.settings = settings;
    }

    pub fn columns(&self) -> &[ColumnField] {
        &self.columns
    }

    /// Replace the column list with the one accepted by the owner.
    ///
    /// Closes the relation editor if its column no longer exists.
    pub fn set_columns(&mut self, columns: Vec<ColumnField>) {
        self.columns = columns;
        if let Some(editor) = &self.relation_editor {
            let id = editor.column().id;
            if columns::find_column(&self.columns, id).is_none() {
                tracing::debug!(%id, "column under relation edit was removed");
                self.relation_editor = None;
            }
        }
    }

    /// `(primary_keys, others)` in render order
    pub fn grouped_columns(&self) -> (Vec<ColumnField>, Vec<ColumnField>) {
        columns::partition_columns(&self.columns)
    }

    pub fn has_import_content(&self) -> bool {
        self.props
            .import_content
            .as_ref()
            .is_some_and(|content| !content.is_empty())
    }

    /// Import actions are offered only while creating a table
    pub fn shows_import_actions(&self) -> bool {
        self.props.is_new_record
    }

    /// Columns come from the import while content is staged
    pub fn can_add_column(&self) -> bool {
        !self.has_import_content()
    }

    pub fn primary_key_notice(&self) -> Option<PrimaryKeyNotice> {
        PrimaryKeyNotice::for_columns(&self.columns, self.settings.show_composite_key_notice)
    }

    pub fn import_summary(&self) -> Option<String> {
        self.props
            .import_content
            .as_ref()
            .filter(|content| !content.is_empty())
            .map(|content| import_summary(content, self.columns.len()))
    }

    pub fn header_cells(&self) -> Vec<HeaderCell> {
        header_cells(self.props.is_new_record, self.has_import_content())
    }

    pub fn type_options(&self) -> Vec<ColumnTypeOption> {
        column_type_options(&self.props.enum_types)
    }

    pub fn add_column(&self, delegate: &mut dyn ColumnManagementDelegate) {
        let column = self.settings.generate_column_field();
        tracing::debug!(id = %column.id, "adding column");
        delegate.columns_updated(columns::add_column(&self.columns, column));
    }

    pub fn remove_column(&self, id: Uuid, delegate: &mut dyn ColumnManagementDelegate) {
        tracing::debug!(%id, "removing column");
        delegate.columns_updated(columns::remove_column(&self.columns, id));
    }

    pub fn update_column(
        &self,
        id: Uuid,
        changes: ColumnChanges,
        delegate: &mut dyn ColumnManagementDelegate,
    ) {
        if changes.is_empty() {
            return;
        }
        tracing::debug!(%id, ?changes, "updating column");
        delegate.columns_updated(columns::update_column(&self.columns, id, &changes));
    }

    /// Reorder within one group. Nothing is reported when the drop landed
    /// outside the list.
    pub fn sort_columns(
        &self,
        group: ColumnGroup,
        drag: DragResult,
        delegate: &mut dyn ColumnManagementDelegate,
    ) {
        if let Some(columns) = columns::sort_columns(&self.columns, group, drag) {
            tracing::debug!(?group, ?drag, "reordered columns");
            delegate.columns_updated(columns);
        }
    }

    /// Open the relation editor for a column, replacing any editor already
    /// open. Returns `false` if the column is unknown.
    pub fn edit_relation(&mut self, id: Uuid) -> bool {
        let Some(column) = columns::find_column(&self.columns, id) else {
            tracing::warn!(%id, "cannot edit relation of unknown column");
            return false;
        };
        self.relation_editor = Some(ForeignKeySelector::open(
            column.clone(),
            self.props.tables.clone(),
        ));
        true
    }

    pub fn relation_editor(&self) -> Option<&ForeignKeySelector> {
        self.relation_editor.as_ref()
    }

    pub fn relation_editor_mut(&mut self) -> Option<&mut ForeignKeySelector> {
        self.relation_editor.as_mut()
    }

    /// Close the relation editor without touching the column
    pub fn cancel_relation(&mut self) {
        self.relation_editor = None;
    }

    /// Apply the relation editor's selection to its column and close it.
    ///
    /// An incomplete selection keeps the editor open and reports nothing.
    pub fn save_relation(
        &mut self,
        delegate: &mut dyn ColumnManagementDelegate,
    ) -> Result<(), ForeignKeySelectionError> {
        let Some(editor) = self.relation_editor.as_ref() else {
            return Ok(());
        };
        let decision = editor.confirm()?;
        let column = editor.column().clone();
        let changes = decision.into_changes(self.props.table.as_ref(), &column);

        self.relation_editor = None;
        self.update_column(column.id, changes, delegate);
        Ok(())
    }

    pub fn select_import_data(&self, delegate: &mut dyn ColumnManagementDelegate) {
        delegate.select_import_data();
    }

    pub fn clear_import_content(&self, delegate: &mut dyn ColumnManagementDelegate) {
        delegate.clear_import_content();
    }
}
