//! Shared fixtures for column management tests

#![allow(dead_code)]

use pgdesk_column_editor::{
    ColumnEditorSettings, ColumnField, ColumnManagement, ColumnManagementProps, ImportContent,
    TableIdentity,
};
use pgdesk_core::{PostgresColumn, PostgresTable, PostgresType, SchemaSnapshot};

pub const SNAPSHOT_JSON: &str = indoc::indoc! {r#"
    {
      "tables": [
        {
          "id": 100,
          "schema": "public",
          "name": "users",
          "columns": [
            { "table_id": 100, "schema": "public", "table": "users", "id": "100.1",
              "ordinal_position": 1, "name": "id", "data_type": "uuid", "format": "uuid",
              "is_nullable": false },
            { "table_id": 100, "schema": "public", "table": "users", "id": "100.2",
              "ordinal_position": 2, "name": "email", "data_type": "text", "format": "text",
              "is_unique": true }
          ],
          "primary_keys": [
            { "schema": "public", "table_name": "users", "name": "id", "table_id": 100 }
          ]
        }
      ],
      "types": [
        { "id": 7, "name": "status", "schema": "public", "format": "status",
          "enums": ["draft", "published"] }
      ]
    }
"#};

pub fn snapshot() -> SchemaSnapshot {
    SchemaSnapshot::from_json(SNAPSHOT_JSON).expect("fixture snapshot should parse")
}

/// The `posts` table being edited: id + tenant_id keys, three other columns
pub fn posts_table() -> PostgresTable {
    PostgresTable::new(200, "public", "posts")
        .with_column(PostgresColumn::new("id", "int8").identity())
        .with_column(PostgresColumn::new("title", "text").not_null())
        .with_column(PostgresColumn::new("tenant_id", "uuid"))
        .with_column(PostgresColumn::new("status", "status").with_default("'draft'::status"))
        .with_column(PostgresColumn::new("created_at", "timestamptz").with_default("now()"))
        .with_primary_key("id")
        .with_primary_key("tenant_id")
}

pub fn props(is_new_record: bool, import_content: Option<ImportContent>) -> ColumnManagementProps {
    let snapshot = snapshot();
    ColumnManagementProps {
        table: Some(TableIdentity::from(&posts_table())),
        tables: snapshot.tables.clone(),
        enum_types: snapshot.enum_types(),
        import_content,
        is_new_record,
    }
}

pub fn management(is_new_record: bool) -> ColumnManagement {
    ColumnManagement::new(
        props(is_new_record, None),
        ColumnField::from_postgres_table(&posts_table()),
        ColumnEditorSettings::default(),
    )
}

pub fn enum_types() -> Vec<PostgresType> {
    snapshot().enum_types()
}

pub fn names(columns: &[ColumnField]) -> Vec<String> {
    columns.iter().map(|c| c.name.clone()).collect()
}
