//! Column Management for pgdesk
//!
//! The column list section of the table editor: view, add, remove, reorder
//! and configure the columns of a table definition before it is saved.
//!
//! ## Features
//!
//! - Primary key columns grouped ahead of the other columns
//! - Reordering within a group (never across groups)
//! - Foreign key assignment through a single-column relation editor
//! - Primary key notices and spreadsheet import actions
//! - Optional GPUI panel (`gpui` feature)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pgdesk_column_editor::{ColumnManagement, ColumnManagementProps, EventBuffer};
//!
//! let mut management = ColumnManagement::new(props, columns, settings);
//! let mut events = EventBuffer::new();
//! management.add_column(&mut events);
//! // The owner applies the reported list and pushes it back
//! management.set_columns(events.last_columns().unwrap().to_vec());
//! ```

pub mod columns;
pub mod events;
pub mod foreign_key;
pub mod layout;
pub mod models;
pub mod notices;
pub mod settings;

mod management;
#[cfg(feature = "gpui")]
mod panel;

// Re-exports for convenience
pub use columns::{ColumnGroup, DragResult};
pub use events::{ColumnManagementDelegate, ColumnManagementEvent, EventBuffer};
pub use foreign_key::{
    ForeignKeyDecision, ForeignKeySelectionError, ForeignKeySelector, ForeignKeyTarget,
};
pub use management::{ColumnManagement, ColumnManagementProps};
pub use models::{ColumnChanges, ColumnField, ImportContent, TableIdentity};
pub use notices::PrimaryKeyNotice;
#[cfg(feature = "gpui")]
pub use panel::ColumnManagementPanel;
pub use settings::ColumnEditorSettings;
