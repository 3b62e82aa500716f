//! Column Management Panel
//!
//! GPUI view over `ColumnManagement`. Renders the primary key and other
//! column groups as two separate drop areas, the primary key notices, the
//! import actions and the relation modal. Every change is emitted as a
//! `ColumnManagementEvent`; the parent applies it and calls `set_columns`.
//!
//! Each row edits its column in place: name and default value inputs, a
//! type picker filled from the type options, and primary key / nullable
//! checkboxes. The widget state lives in one `RowEditor` per column id and
//! is brought in line with the column list on every `set_columns`.

use std::collections::HashMap;

use gpui::*;
use gpui_component::{
    input::{InputEvent, InputState},
    select::{SelectEvent, SelectItem, SelectState},
    v_flex, ActiveTheme, IndexPath,
};
use uuid::Uuid;

#[path = "ui/mod.rs"]
mod ui;

#[cfg(all(test, feature = "gpui"))]
#[path = "panel_tests.rs"]
mod tests;

use crate::columns::{self, ColumnGroup, DragResult};
use crate::events::{ColumnManagementEvent, EventBuffer};
use crate::management::{ColumnManagement, ColumnManagementProps};
use crate::models::{ColumnChanges, ColumnField, ColumnTypeOption};
use crate::settings::ColumnEditorSettings;

impl SelectItem for ColumnTypeOption {
    type Value = String;

    fn title(&self) -> SharedString {
        self.label().into()
    }

    fn value(&self) -> &Self::Value {
        &self.name
    }
}

/// Drag payload for a column row
#[derive(Clone)]
pub(crate) struct DraggedColumn {
    entity_id: EntityId,
    group: ColumnGroup,
    index: usize,
    name: SharedString,
}

impl Render for DraggedColumn {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();

        div()
            .px_3()
            .py_1()
            .rounded(theme.radius)
            .bg(theme.popover)
            .border_1()
            .border_color(theme.drag_border)
            .text_sm()
            .text_color(theme.popover_foreground)
            .child(self.name.clone())
    }
}

/// Input widgets of one column row
pub(crate) struct RowEditor {
    name_input: Entity<InputState>,
    default_input: Entity<InputState>,
    type_select: Entity<SelectState<Vec<ColumnTypeOption>>>,
    _subscriptions: Vec<Subscription>,
}

impl RowEditor {
    fn new(
        column: &ColumnField,
        type_options: Vec<ColumnTypeOption>,
        window: &mut Window,
        cx: &mut Context<ColumnManagementPanel>,
    ) -> Self {
        let id = column.id;

        let name_input = cx.new(|cx| {
            let mut state = InputState::new(window, cx).placeholder("column_name");
            state.set_value(column.name.clone(), window, cx);
            state
        });

        let default_input = cx.new(|cx| {
            let mut state = InputState::new(window, cx).placeholder("NULL");
            if let Some(ref default) = column.default_value {
                state.set_value(default.clone(), window, cx);
            }
            state
        });

        let selected_index = type_position(&type_options, &column.format);
        let type_select = cx.new(|cx| {
            SelectState::new(type_options, selected_index, window, cx).searchable(true)
        });

        let subscriptions = vec![
            cx.subscribe(&name_input, move |this, input, event: &InputEvent, cx| {
                if matches!(event, InputEvent::Change) {
                    let name = input.read(cx).value().to_string();
                    this.handle_rename(id, name, cx);
                }
            }),
            cx.subscribe(&default_input, move |this, input, event: &InputEvent, cx| {
                if matches!(event, InputEvent::Change) {
                    let value = input.read(cx).value().to_string();
                    this.handle_default_value_change(id, value, cx);
                }
            }),
            cx.subscribe(
                &type_select,
                move |this, _, event: &SelectEvent<Vec<ColumnTypeOption>>, cx| {
                    if let SelectEvent::Confirm(Some(format)) = event {
                        this.handle_format_change(id, format.clone(), cx);
                    }
                },
            ),
        ];

        Self {
            name_input,
            default_input,
            type_select,
            _subscriptions: subscriptions,
        }
    }

    /// Show what the column holds now, leaving widgets that already agree alone
    fn sync(
        &self,
        column: &ColumnField,
        type_options: &[ColumnTypeOption],
        window: &mut Window,
        cx: &mut App,
    ) {
        if self.name_input.read(cx).value().as_ref() != column.name {
            self.name_input.update(cx, |state, cx| {
                state.set_value(column.name.clone(), window, cx);
            });
        }

        let default_value = column.default_value.clone().unwrap_or_default();
        if self.default_input.read(cx).value().as_ref() != default_value {
            self.default_input.update(cx, |state, cx| {
                state.set_value(default_value, window, cx);
            });
        }

        if self.type_select.read(cx).selected_value() != Some(&column.format) {
            let selected_index = type_position(type_options, &column.format);
            self.type_select.update(cx, |state, cx| {
                state.set_selected_index(selected_index, window, cx);
            });
        }
    }
}

fn type_position(type_options: &[ColumnTypeOption], format: &str) -> Option<IndexPath> {
    type_options
        .iter()
        .position(|option| option.name == format)
        .map(|i| IndexPath::default().row(i))
}

pub struct ColumnManagementPanel {
    focus_handle: FocusHandle,
    management: ColumnManagement,
    /// Message for an incomplete relation selection
    relation_error: Option<SharedString>,
    /// Row widgets keyed by column id
    row_editors: HashMap<Uuid, RowEditor>,
}

impl ColumnManagementPanel {
    pub fn new(
        props: ColumnManagementProps,
        columns: Vec<ColumnField>,
        settings: ColumnEditorSettings,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let mut panel = Self {
            focus_handle: cx.focus_handle(),
            management: ColumnManagement::new(props, columns, settings),
            relation_error: None,
            row_editors: HashMap::new(),
        };
        panel.sync_row_editors(window, cx);
        panel
    }

    pub fn management(&self) -> &ColumnManagement {
        &self.management
    }

    /// Push the column list accepted by the parent
    pub fn set_columns(
        &mut self,
        columns: Vec<ColumnField>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.management.set_columns(columns);
        if self.management.relation_editor().is_none() {
            self.relation_error = None;
        }
        self.sync_row_editors(window, cx);
        cx.notify();
    }

    /// Replace the props. Type pickers are rebuilt since enum types may differ.
    pub fn set_props(
        &mut self,
        props: ColumnManagementProps,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.management.set_props(props);
        self.row_editors.clear();
        self.sync_row_editors(window, cx);
        cx.notify();
    }

    /// Request an edit of one column
    pub fn update_column(&mut self, id: Uuid, changes: ColumnChanges, cx: &mut Context<Self>) {
        self.dispatch(cx, |management, events| {
            management.update_column(id, changes, events)
        });
    }

    /// Drop editors of removed columns and create them for new ones
    fn sync_row_editors(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let current = self.management.columns().to_vec();
        self.row_editors
            .retain(|id, _| columns::find_column(&current, *id).is_some());

        let type_options = self.management.type_options();
        for column in &current {
            match self.row_editors.get(&column.id) {
                Some(editor) => editor.sync(column, &type_options, window, cx),
                None => {
                    let editor = RowEditor::new(column, type_options.clone(), window, cx);
                    self.row_editors.insert(column.id, editor);
                }
            }
        }
    }

    /// Run an operation and emit whatever it reported
    fn dispatch(
        &mut self,
        cx: &mut Context<Self>,
        operation: impl FnOnce(&mut ColumnManagement, &mut EventBuffer),
    ) {
        let mut events = EventBuffer::new();
        operation(&mut self.management, &mut events);
        for event in events.take() {
            cx.emit(event);
        }
    }

    fn column(&self, id: Uuid) -> Option<&ColumnField> {
        columns::find_column(self.management.columns(), id)
    }

    fn handle_add_column(&mut self, cx: &mut Context<Self>) {
        self.dispatch(cx, |management, events| management.add_column(events));
    }

    fn handle_remove_column(&mut self, id: Uuid, cx: &mut Context<Self>) {
        self.dispatch(cx, |management, events| management.remove_column(id, events));
    }

    fn handle_rename(&mut self, id: Uuid, name: String, cx: &mut Context<Self>) {
        if self.column(id).is_some_and(|column| column.name != name) {
            self.update_column(id, ColumnChanges::new().name(name), cx);
        }
    }

    /// An emptied input clears the default
    fn handle_default_value_change(&mut self, id: Uuid, value: String, cx: &mut Context<Self>) {
        let Some(column) = self.column(id) else {
            return;
        };
        let changes = match (value.is_empty(), column.default_value.as_deref()) {
            (true, None) => return,
            (true, Some(_)) => ColumnChanges::new().clear_default_value(),
            (false, Some(current)) if current == value => return,
            (false, _) => ColumnChanges::new().default_value(value),
        };
        self.update_column(id, changes, cx);
    }

    fn handle_format_change(&mut self, id: Uuid, format: String, cx: &mut Context<Self>) {
        if self.column(id).is_some_and(|column| column.format != format) {
            self.update_column(id, ColumnChanges::new().format(format), cx);
        }
    }

    fn handle_set_nullable(&mut self, id: Uuid, is_nullable: bool, cx: &mut Context<Self>) {
        if self.column(id).is_some_and(|column| column.is_nullable != is_nullable) {
            self.update_column(id, ColumnChanges::new().nullable(is_nullable), cx);
        }
    }

    fn handle_set_primary_key(&mut self, id: Uuid, is_primary_key: bool, cx: &mut Context<Self>) {
        if self.column(id).is_some_and(|column| column.is_primary_key != is_primary_key) {
            self.update_column(id, ColumnChanges::new().primary_key(is_primary_key), cx);
        }
    }

    fn handle_drop(
        &mut self,
        dragged: &DraggedColumn,
        group: ColumnGroup,
        index: usize,
        cx: &mut Context<Self>,
    ) {
        if dragged.entity_id != cx.entity_id() || dragged.group != group {
            return;
        }
        if dragged.index == index {
            return;
        }
        let drag = DragResult::moved(dragged.index, index);
        self.dispatch(cx, |management, events| {
            management.sort_columns(group, drag, events)
        });
    }

    fn handle_edit_relation(&mut self, id: Uuid, cx: &mut Context<Self>) {
        if self.management.edit_relation(id) {
            self.relation_error = None;
            cx.notify();
        }
    }

    fn handle_select_relation_table(
        &mut self,
        schema: SharedString,
        name: SharedString,
        cx: &mut Context<Self>,
    ) {
        if let Some(editor) = self.management.relation_editor_mut() {
            self.relation_error = editor
                .select_table(&schema, &name)
                .err()
                .map(|err| err.to_string().into());
            cx.notify();
        }
    }

    fn handle_select_relation_column(&mut self, name: SharedString, cx: &mut Context<Self>) {
        if let Some(editor) = self.management.relation_editor_mut() {
            self.relation_error = editor
                .select_column(&name)
                .err()
                .map(|err| err.to_string().into());
            cx.notify();
        }
    }

    fn handle_clear_relation(&mut self, cx: &mut Context<Self>) {
        if let Some(editor) = self.management.relation_editor_mut() {
            editor.clear_selection();
            self.relation_error = None;
            cx.notify();
        }
    }

    fn handle_save_relation(&mut self, cx: &mut Context<Self>) {
        let mut events = EventBuffer::new();
        match self.management.save_relation(&mut events) {
            Ok(()) => self.relation_error = None,
            Err(err) => {
                tracing::warn!("Foreign key selection incomplete: {}", err);
                self.relation_error = Some(err.to_string().into());
            }
        }
        for event in events.take() {
            cx.emit(event);
        }
        cx.notify();
    }

    fn handle_cancel_relation(&mut self, cx: &mut Context<Self>) {
        self.management.cancel_relation();
        self.relation_error = None;
        cx.notify();
    }

    fn handle_select_import_data(&mut self, cx: &mut Context<Self>) {
        cx.emit(ColumnManagementEvent::SelectImportData);
    }

    fn handle_clear_import_content(&mut self, cx: &mut Context<Self>) {
        cx.emit(ColumnManagementEvent::ClearImportContent);
    }
}

impl Render for ColumnManagementPanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let (primary_keys, others) = self.management.grouped_columns();

        let title_bar = ui::header::render_title_bar(self, cx).into_any_element();
        let notices = ui::notices::render_notices(self, cx).into_any_element();
        let header = ui::header::render_column_header(self, cx).into_any_element();
        let primary_key_group = (!primary_keys.is_empty()).then(|| {
            ui::column_row::render_group(self, ColumnGroup::PrimaryKeys, primary_keys, cx)
                .into_any_element()
        });
        let other_group =
            ui::column_row::render_group(self, ColumnGroup::Others, others, cx).into_any_element();
        let add_button = self
            .management
            .can_add_column()
            .then(|| ui::header::render_add_column_button(cx).into_any_element());
        let relation_modal = self
            .management
            .relation_editor()
            .is_some()
            .then(|| ui::relation_modal::render_relation_modal(self, cx).into_any_element());

        let theme = cx.theme();

        v_flex()
            .id("column-management-panel")
            .key_context("ColumnManagementPanel")
            .track_focus(&self.focus_handle)
            .relative()
            .size_full()
            .gap_4()
            .p_3()
            .bg(theme.background)
            .text_color(theme.foreground)
            .child(title_bar)
            .child(notices)
            .child(
                v_flex()
                    .gap_2()
                    .child(header)
                    .children(primary_key_group)
                    .child(other_group),
            )
            .children(add_button)
            .children(relation_modal)
    }
}

impl Focusable for ColumnManagementPanel {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl EventEmitter<ColumnManagementEvent> for ColumnManagementPanel {}
