//! Category model
//!
//! A category groups entries under a name. Lookups go through the canonical
//! key (trimmed, lower-cased) while the display name keeps the casing it was
//! first created with.

use std::fmt;

use super::entry::Entry;
use super::money::Money;
use crate::config::RenderOptions;
use crate::display::layout;

/// Reserved name of the category used when none is given
pub const DEFAULT_CATEGORY: &str = "unspecified";

/// Canonical lookup key for a category name
pub fn canonical_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// A named, ordered collection of entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    key: String,
    display_name: String,
    entries: Vec<Entry>,
}

impl Category {
    /// Create an empty category
    ///
    /// A blank name falls back to [`DEFAULT_CATEGORY`].
    pub fn new(name: impl AsRef<str>) -> Self {
        let trimmed = name.as_ref().trim();
        let display_name = if trimmed.is_empty() {
            DEFAULT_CATEGORY
        } else {
            trimmed
        };

        Self {
            key: canonical_key(display_name),
            display_name: display_name.to_string(),
            entries: Vec::new(),
        }
    }

    /// Create a category already holding the given entries
    pub fn with_entries(name: impl AsRef<str>, entries: impl IntoIterator<Item = Entry>) -> Self {
        let mut category = Self::new(name);
        category.entries.extend(entries);
        category
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }

    /// Append an entry; insertion order is kept
    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Sum of absolute entry values
    pub fn subtotal(&self) -> Money {
        self.entries.iter().map(|e| e.value().abs()).sum()
    }

    /// Signed sum of entry values
    pub fn signed_total(&self) -> Money {
        self.entries.iter().map(|e| e.value()).sum()
    }

    /// Header line followed by one indented line per entry
    pub fn render_lines(&self, opts: &RenderOptions) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.entries.len() + 1);
        lines.push(layout::category_line(
            &self.display_name,
            self.subtotal(),
            opts,
        ));
        lines.extend(self.entries.iter().map(|entry| {
            layout::entry_line(entry.name(), entry.value(), entry.date(), entry.id(), opts)
        }));
        lines
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render_lines(&RenderOptions::default()).join("\n"))
    }
}
