//! User settings for tally
//!
//! Stores the defaults for the render toggles and the layout. Every render
//! call still receives them explicitly through [`RenderOptions`].

use serde::{Deserialize, Serialize};

use super::paths::TallyPaths;
use super::render::{RenderOptions, SortKey};
use crate::error::TallyError;
use crate::models::DEFAULT_TABLE;
use crate::reports::Layout;

/// User settings for tally
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Whether reports show the ID column
    #[serde(default = "default_show_ids")]
    pub show_ids: bool,

    /// Category ordering in reports
    #[serde(default)]
    pub sort_key: SortKey,

    /// Side-by-side or stacked report layout
    #[serde(default)]
    pub layout: Layout,

    /// Table receiving entries added without an explicit table
    #[serde(default = "default_table")]
    pub default_table: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_show_ids() -> bool {
    true
}

fn default_table() -> String {
    DEFAULT_TABLE.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            show_ids: default_show_ids(),
            sort_key: SortKey::default(),
            layout: Layout::default(),
            default_table: default_table(),
        }
    }
}

impl Settings {
    /// Render options matching these settings
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            show_ids: self.show_ids,
            sort_key: self.sort_key,
        }
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &TallyPaths) -> Result<Self, TallyError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                TallyError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                TallyError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TallyPaths) -> Result<(), TallyError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            TallyError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            TallyError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.show_ids);
        assert_eq!(settings.sort_key, SortKey::Value);
        assert_eq!(settings.layout, Layout::SideBySide);
        assert_eq!(settings.default_table, "standard");
        assert_eq!(settings.render_options(), RenderOptions::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.show_ids = false;
        settings.sort_key = SortKey::Name;
        settings.layout = Layout::Stacked;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert!(!loaded.show_ids);
        assert_eq!(loaded.sort_key, SortKey::Name);
        assert_eq!(loaded.layout, Layout::Stacked);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"sort_key": "name"}"#).unwrap();
        assert!(settings.show_ids);
        assert_eq!(settings.sort_key, SortKey::Name);
        assert_eq!(settings.schema_version, 1);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, TallyError::Config(_)));
    }
}
