//! Column editor settings
//!
//! Persisted as JSON under the user's config directory.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::models::ColumnField;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnEditorSettings {
    /// Format given to newly added columns; empty leaves the type unset
    pub new_column_format: String,
    /// Whether newly added columns allow NULL
    pub new_columns_nullable: bool,
    /// Show the informational banner for composite primary keys
    pub show_composite_key_notice: bool,
}

impl Default for ColumnEditorSettings {
    fn default() -> Self {
        Self {
            new_column_format: String::new(),
            new_columns_nullable: true,
            show_composite_key_notice: true,
        }
    }
}

impl ColumnEditorSettings {
    /// A fresh column for the "Add column" action
    pub fn generate_column_field(&self) -> ColumnField {
        let mut column = ColumnField::generate();
        column.format = self.new_column_format.clone();
        column.is_nullable = self.new_columns_nullable;
        column
    }

    /// Load from the default location, falling back to defaults when absent
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::settings_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read column editor settings from {:?}", path))?;
        serde_json::from_str(&content).with_context(|| "Failed to parse column editor settings JSON")
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::settings_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::info!("Saved column editor settings to {:?}", path);
        Ok(())
    }

    pub fn settings_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not find config directory")?;
        Ok(config_dir.join("pgdesk").join("column_editor.json"))
    }
}
