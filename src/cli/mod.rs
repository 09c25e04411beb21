//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the storage and report layers.

pub mod config;
pub mod entry;
pub mod report;

pub use config::{handle_config_command, ConfigArgs, LayoutArg};
pub use entry::{
    describe_entry, handle_add_command, handle_copy_command, handle_get_command,
    handle_remove_command, AddArgs, CopyArgs, EntryLocation,
};
pub use report::{handle_report_command, render_period_report, ReportArgs, SortArg};
