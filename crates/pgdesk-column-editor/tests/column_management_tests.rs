//! Integration tests for ColumnManagement
//!
//! Drives the controller the way the table editor does: every reported
//! column list is pushed back with `set_columns` before the next action.

mod common;

use pgdesk_column_editor::{
    ColumnChanges, ColumnEditorSettings, ColumnField, ColumnGroup, ColumnManagement,
    ColumnManagementDelegate, ColumnManagementEvent, DragResult, EventBuffer, ForeignKeySelectionError,
    ImportContent, PrimaryKeyNotice,
};
use pretty_assertions::assert_eq;

use common::{management, names, props};

/// Applies every update straight back, like an owning editor would
fn apply(management: &mut ColumnManagement, events: &mut EventBuffer) {
    if let Some(columns) = events.last_columns() {
        management.set_columns(columns.to_vec());
    }
    events.take();
}

fn column_id(management: &ColumnManagement, name: &str) -> uuid::Uuid {
    management
        .columns()
        .iter()
        .find(|c| c.name == name)
        .map(|c| c.id)
        .expect("column should exist")
}

// ============ Grouping ============

#[test]
fn columns_are_grouped_primary_keys_first() {
    let management = management(true);
    let (pks, others) = management.grouped_columns();
    assert_eq!(names(&pks), vec!["id", "tenant_id"]);
    assert_eq!(names(&others), vec!["title", "status", "created_at"]);
}

// ============ Add / remove ============

#[test]
fn add_column_reports_one_more_column() {
    let mut management = management(true);
    let mut events = EventBuffer::new();
    let before = management.columns().len();

    management.add_column(&mut events);
    let updated = events.last_columns().unwrap().to_vec();
    assert_eq!(updated.len(), before + 1);

    let added = updated.last().unwrap();
    assert!(added.is_new_column);
    assert!(added.name.is_empty());

    apply(&mut management, &mut events);
    assert_eq!(management.columns().len(), before + 1);
}

#[test]
fn add_column_uses_settings() {
    let mut management = management(true);
    management.set_settings(ColumnEditorSettings {
        new_column_format: "text".into(),
        ..Default::default()
    });
    let mut events = EventBuffer::new();

    management.add_column(&mut events);
    assert_eq!(events.last_columns().unwrap().last().unwrap().format, "text");
}

#[test]
fn remove_column_reports_list_without_it() {
    let management = management(true);
    let mut events = EventBuffer::new();
    let target = column_id(&management, "status");

    management.remove_column(target, &mut events);
    let updated = events.last_columns().unwrap();
    assert_eq!(updated.len(), management.columns().len() - 1);
    assert!(updated.iter().all(|c| c.id != target));
}

#[test]
fn component_does_not_mutate_its_snapshot() {
    let management = management(true);
    let before = management.columns().to_vec();
    let mut events = EventBuffer::new();

    management.add_column(&mut events);
    management.remove_column(before[0].id, &mut events);

    assert_eq!(management.columns(), before.as_slice());
    assert_eq!(events.events().len(), 2);
}

// ============ Update ============

#[test]
fn empty_changes_report_nothing() {
    let management = management(true);
    let mut events = EventBuffer::new();
    management.update_column(column_id(&management, "title"), ColumnChanges::new(), &mut events);
    assert!(events.events().is_empty());
}

#[test]
fn marking_a_primary_key_regroups_on_next_render() {
    let mut management = management(true);
    let mut events = EventBuffer::new();

    management.update_column(
        column_id(&management, "created_at"),
        ColumnChanges::new().primary_key(true),
        &mut events,
    );
    apply(&mut management, &mut events);

    let (pks, _) = management.grouped_columns();
    assert_eq!(names(&pks), vec!["id", "tenant_id", "created_at"]);
}

// ============ Sorting ============

#[test]
fn sorting_primary_keys_leaves_others_alone() {
    let mut management = management(true);
    let mut events = EventBuffer::new();
    let (_, others_before) = management.grouped_columns();

    management.sort_columns(ColumnGroup::PrimaryKeys, DragResult::moved(0, 1), &mut events);
    apply(&mut management, &mut events);

    let (pks, others) = management.grouped_columns();
    assert_eq!(names(&pks), vec!["tenant_id", "id"]);
    assert_eq!(others, others_before);
    assert_eq!(
        names(management.columns()),
        vec!["tenant_id", "id", "title", "status", "created_at"]
    );
}

#[test]
fn sorting_others_leaves_primary_keys_alone() {
    let mut management = management(true);
    let mut events = EventBuffer::new();
    let (pks_before, _) = management.grouped_columns();

    management.sort_columns(ColumnGroup::Others, DragResult::moved(2, 0), &mut events);
    apply(&mut management, &mut events);

    let (pks, others) = management.grouped_columns();
    assert_eq!(pks, pks_before);
    assert_eq!(names(&others), vec!["created_at", "title", "status"]);
}

#[test]
fn dropping_outside_the_list_reports_nothing() {
    let management = management(true);
    let mut events = EventBuffer::new();
    management.sort_columns(ColumnGroup::Others, DragResult::cancelled(1), &mut events);
    assert!(events.events().is_empty());
}

// ============ Foreign keys ============

#[test]
fn assigning_a_foreign_key_sets_format_and_clears_default() {
    let mut management = management(true);
    let mut events = EventBuffer::new();
    let status = column_id(&management, "status");

    assert!(management.edit_relation(status));
    let editor = management.relation_editor_mut().unwrap();
    editor.select_table("public", "users").unwrap();
    editor.select_column("id").unwrap();
    management.save_relation(&mut events).unwrap();

    assert!(management.relation_editor().is_none());
    let updated = events.last_columns().unwrap();
    let column = updated.iter().find(|c| c.id == status).unwrap();
    let fk = column.foreign_key.as_ref().unwrap();
    assert_eq!(fk.source_schema, "public");
    assert_eq!(fk.source_table_name, "posts");
    assert_eq!(fk.source_column_name, "status");
    assert_eq!(fk.target_path(), "public.users.id");
    assert_eq!(column.format, "uuid");
    assert_eq!(column.default_value, None);
}

#[test]
fn cancelling_the_relation_editor_changes_nothing() {
    let mut management = management(true);
    let mut events = EventBuffer::new();
    let status = column_id(&management, "status");

    management.edit_relation(status);
    management
        .relation_editor_mut()
        .unwrap()
        .select_table("public", "users")
        .unwrap();
    management.cancel_relation();
    management.save_relation(&mut events).unwrap();

    assert!(management.relation_editor().is_none());
    assert!(events.events().is_empty());
}

#[test]
fn incomplete_selection_keeps_editor_open() {
    let mut management = management(true);
    let mut events = EventBuffer::new();

    management.edit_relation(column_id(&management, "status"));
    management
        .relation_editor_mut()
        .unwrap()
        .select_table("public", "users")
        .unwrap();

    let err = management.save_relation(&mut events).unwrap_err();
    assert_eq!(err, ForeignKeySelectionError::NoColumnSelected("public.users".into()));
    assert!(management.relation_editor().is_some());
    assert!(events.events().is_empty());
}

#[test]
fn only_one_column_is_edited_at_a_time() {
    let mut management = management(true);
    let title = column_id(&management, "title");
    let status = column_id(&management, "status");

    management.edit_relation(title);
    management.edit_relation(status);
    assert_eq!(management.relation_editor().unwrap().column().id, status);
}

#[test]
fn editing_unknown_column_is_refused() {
    let mut management = management(true);
    assert!(!management.edit_relation(uuid::Uuid::new_v4()));
    assert!(management.relation_editor().is_none());
}

#[test]
fn removing_the_edited_column_closes_the_editor() {
    let mut management = management(true);
    let mut events = EventBuffer::new();
    let status = column_id(&management, "status");

    management.edit_relation(status);
    management.remove_column(status, &mut events);
    apply(&mut management, &mut events);

    assert!(management.relation_editor().is_none());
}

#[test]
fn renaming_carries_into_the_foreign_key() {
    let mut management = management(true);
    let mut events = EventBuffer::new();
    let tenant = column_id(&management, "tenant_id");

    management.edit_relation(tenant);
    let editor = management.relation_editor_mut().unwrap();
    editor.select_table("public", "users").unwrap();
    editor.select_column("id").unwrap();
    management.save_relation(&mut events).unwrap();
    apply(&mut management, &mut events);

    management.update_column(tenant, ColumnChanges::new().name("owner_id"), &mut events);
    let column = events
        .last_columns()
        .unwrap()
        .iter()
        .find(|c| c.id == tenant)
        .unwrap()
        .clone();
    assert_eq!(column.foreign_key.unwrap().source_column_name, "owner_id");
}

#[test]
fn removing_a_relation_keeps_format_and_default() {
    let mut management = management(true);
    let mut events = EventBuffer::new();
    let tenant = column_id(&management, "tenant_id");

    management.edit_relation(tenant);
    let editor = management.relation_editor_mut().unwrap();
    editor.select_table("public", "users").unwrap();
    editor.select_column("email").unwrap();
    management.save_relation(&mut events).unwrap();
    apply(&mut management, &mut events);

    management.update_column(tenant, ColumnChanges::new().default_value("gen_random_uuid()"), &mut events);
    apply(&mut management, &mut events);

    management.edit_relation(tenant);
    assert_eq!(
        management.relation_editor().unwrap().selected_column().map(|c| c.name.as_str()),
        Some("email")
    );
    management.relation_editor_mut().unwrap().clear_selection();
    management.save_relation(&mut events).unwrap();

    let column = events
        .last_columns()
        .unwrap()
        .iter()
        .find(|c| c.id == tenant)
        .unwrap()
        .clone();
    assert!(column.foreign_key.is_none());
    assert_eq!(column.format, "text");
    assert_eq!(column.default_value.as_deref(), Some("gen_random_uuid()"));
}

// ============ Notices, import, layout ============

#[test]
fn notices_follow_primary_key_count() {
    let mut management = management(false);
    assert_eq!(management.primary_key_notice(), Some(PrimaryKeyNotice::Composite));

    let single: Vec<ColumnField> = management
        .columns()
        .iter()
        .cloned()
        .map(|mut c| {
            c.is_primary_key = c.name == "id";
            c
        })
        .collect();
    management.set_columns(single);
    assert_eq!(management.primary_key_notice(), None);

    let none: Vec<ColumnField> = management
        .columns()
        .iter()
        .cloned()
        .map(|mut c| {
            c.is_primary_key = false;
            c
        })
        .collect();
    management.set_columns(none);
    assert_eq!(management.primary_key_notice(), Some(PrimaryKeyNotice::Missing));
}

#[test]
fn import_content_controls_actions() {
    let content = ImportContent {
        file_name: Some("posts.csv".into()),
        headers: vec!["title".into()],
        row_count: 1500,
        ..Default::default()
    };
    let mut management = management(true);
    assert!(management.can_add_column());
    assert!(management.import_summary().is_none());

    management.set_props(props(true, Some(content)));
    assert!(management.has_import_content());
    assert!(!management.can_add_column());
    assert_eq!(
        management.import_summary().as_deref(),
        Some("Your table will be created with 1,500 rows and the following 5 columns.")
    );
}

#[test]
fn empty_import_content_counts_as_none() {
    let mut management = management(true);
    management.set_props(props(true, Some(ImportContent::default())));
    assert!(!management.has_import_content());
    assert!(management.can_add_column());
}

#[test]
fn file_name_alone_counts_as_import_content() {
    let content = ImportContent {
        file_name: Some("posts.csv".into()),
        ..Default::default()
    };
    let mut management = management(true);
    management.set_props(props(true, Some(content)));
    assert!(management.has_import_content());
    assert!(!management.can_add_column());
    assert_eq!(
        management.import_summary().as_deref(),
        Some("Your table will be created with 0 rows and the following 5 columns.")
    );
}

#[test]
fn import_actions_only_for_new_records() {
    assert!(management(true).shows_import_actions());
    assert!(!management(false).shows_import_actions());
}

#[test]
fn import_requests_reach_the_delegate() {
    let management = management(true);
    let mut events = EventBuffer::new();
    management.select_import_data(&mut events);
    management.clear_import_content(&mut events);
    assert_eq!(
        events.events(),
        &[
            ColumnManagementEvent::SelectImportData,
            ColumnManagementEvent::ClearImportContent
        ]
    );
}

#[test]
fn type_options_include_enum_types() {
    let management = management(true);
    let options = management.type_options();
    assert!(options.iter().any(|o| o.name == "int8"));
    assert_eq!(options.last().map(|o| o.name.as_str()), Some("status"));
}

// ============ Custom delegates ============

struct CountingDelegate {
    updates: usize,
    last_len: usize,
}

impl ColumnManagementDelegate for CountingDelegate {
    fn columns_updated(&mut self, columns: Vec<ColumnField>) {
        self.updates += 1;
        self.last_len = columns.len();
    }
}

#[test]
fn default_delegate_methods_ignore_import_requests() {
    let management = management(true);
    let mut delegate = CountingDelegate {
        updates: 0,
        last_len: 0,
    };

    management.select_import_data(&mut delegate);
    management.clear_import_content(&mut delegate);
    management.add_column(&mut delegate);

    assert_eq!(delegate.updates, 1);
    assert_eq!(delegate.last_len, management.columns().len() + 1);
}
