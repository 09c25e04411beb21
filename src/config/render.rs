//! Render toggles
//!
//! The ID column and the category sort order are the only knobs of the
//! report renderer. They travel with every render call as a value so that
//! rendering stays reentrant.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order in which categories of a listing are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Ascending by canonical (lower-cased) category name
    #[serde(alias = "by_name")]
    Name,
    /// Ascending by absolute category subtotal
    #[default]
    #[serde(alias = "by_value")]
    Value,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Name => write!(f, "name"),
            SortKey::Value => write!(f, "value"),
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "value" => Ok(SortKey::Value),
            other => Err(format!("unknown sort key '{}' (expected name or value)", other)),
        }
    }
}

/// Options passed into every render call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Whether the ID column is part of the layout
    pub show_ids: bool,
    /// Category ordering
    pub sort_key: SortKey,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_ids: true,
            sort_key: SortKey::default(),
        }
    }
}

impl RenderOptions {
    /// Builder-style toggle for the ID column
    pub fn with_ids(mut self, show_ids: bool) -> Self {
        self.show_ids = show_ids;
        self
    }

    /// Builder-style sort key override
    pub fn sorted_by(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self
    }
}
