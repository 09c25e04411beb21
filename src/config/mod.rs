//! Configuration module for tally
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence
//! - Render toggles passed into every report render

pub mod paths;
pub mod render;
pub mod settings;

pub use paths::TallyPaths;
pub use render::{RenderOptions, SortKey};
pub use settings::Settings;
