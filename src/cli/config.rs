//! Config CLI command
//!
//! Shows paths and settings, and persists new report defaults.

use clap::{Args, ValueEnum};

use crate::config::{Settings, TallyPaths};
use crate::error::TallyResult;
use crate::reports::Layout;

use super::report::SortArg;

/// Report layout as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LayoutArg {
    SideBySide,
    Stacked,
}

impl From<LayoutArg> for Layout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::SideBySide => Layout::SideBySide,
            LayoutArg::Stacked => Layout::Stacked,
        }
    }
}

/// Arguments of the config command
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Default category ordering of reports
    #[arg(long, value_enum)]
    pub sort: Option<SortArg>,

    /// Default report layout
    #[arg(long, value_enum)]
    pub layout: Option<LayoutArg>,

    /// Show the ID column by default
    #[arg(long, conflicts_with = "hide_ids")]
    pub show_ids: bool,

    /// Hide the ID column by default
    #[arg(long)]
    pub hide_ids: bool,

    /// Table receiving entries added without --table
    #[arg(long)]
    pub default_table: Option<String>,
}

impl ConfigArgs {
    /// Apply the given options, returning whether anything was set
    pub fn apply(&self, settings: &mut Settings) -> bool {
        let mut changed = false;
        if let Some(sort) = self.sort {
            settings.sort_key = sort.into();
            changed = true;
        }
        if let Some(layout) = self.layout {
            settings.layout = layout.into();
            changed = true;
        }
        if self.show_ids || self.hide_ids {
            settings.show_ids = self.show_ids;
            changed = true;
        }
        if let Some(table) = &self.default_table {
            settings.default_table = table.trim().to_string();
            changed = true;
        }
        changed
    }
}

/// Handle the config command
pub fn handle_config_command(
    paths: &TallyPaths,
    mut settings: Settings,
    args: ConfigArgs,
) -> TallyResult<()> {
    if args.apply(&mut settings) {
        settings.save(paths)?;
        println!("Settings saved to {}", paths.settings_file().display());
        println!();
    }

    println!("tally configuration");
    println!("===================");
    println!("Config directory: {}", paths.base_dir().display());
    println!("Data directory:   {}", paths.data_dir().display());
    println!("Log file:         {}", paths.log_file().display());
    println!();
    println!("Settings:");
    println!("  Show IDs:      {}", settings.show_ids);
    println!("  Sort key:      {}", settings.sort_key);
    println!("  Layout:        {:?}", settings.layout);
    println!("  Default table: {}", settings.default_table);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SortKey;
    use tempfile::TempDir;

    #[test]
    fn test_no_options_changes_nothing() {
        let mut settings = Settings::default();
        assert!(!ConfigArgs::default().apply(&mut settings));
        assert!(settings.show_ids);
    }

    #[test]
    fn test_options_are_saved() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_base_dir(temp_dir.path().join("tally"));

        let args = ConfigArgs {
            sort: Some(SortArg::Name),
            layout: Some(LayoutArg::Stacked),
            hide_ids: true,
            ..Default::default()
        };
        handle_config_command(&paths, Settings::default(), args).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.sort_key, SortKey::Name);
        assert_eq!(loaded.layout, Layout::Stacked);
        assert!(!loaded.show_ids);
        assert!(paths.data_dir().exists());

        let args = ConfigArgs {
            show_ids: true,
            ..Default::default()
        };
        handle_config_command(&paths, loaded, args).unwrap();
        let loaded = Settings::load_or_create(&paths).unwrap();
        assert!(loaded.show_ids);
        assert_eq!(loaded.sort_key, SortKey::Name);
    }
}
