//! Listing of categorized entries
//!
//! A listing collects entries into case-insensitively merged categories and
//! renders them as a fixed-width text block:
//!
//! ```text
//!               Listing
//! Name               Value    Date  ID
//! Groceries             66.60
//!   Aldi                66.60 11-08   0
//! ```

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;
use tracing::debug;

use crate::config::RenderOptions;
use crate::display::layout;
use crate::error::{TallyError, TallyResult};
use crate::models::{canonical_key, Category, Entry, EntryId, EntryRecord, Money, DEFAULT_CATEGORY};

pub use crate::config::SortKey;

/// Something that can be added to a listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingItem {
    /// A single entry
    Leaf(Entry),
    /// A category whose entries are merged into the matching category
    Group(Category),
}

impl From<Entry> for ListingItem {
    fn from(entry: Entry) -> Self {
        ListingItem::Leaf(entry)
    }
}

impl From<Category> for ListingItem {
    fn from(category: Category) -> Self {
        ListingItem::Group(category)
    }
}

impl TryFrom<&Value> for ListingItem {
    type Error = TallyError;

    /// Interpret an untyped value
    ///
    /// Objects with an `entries` array are groups, objects with `name`,
    /// `value` and `date` are entries. Everything else is rejected.
    fn try_from(raw: &Value) -> Result<Self, Self::Error> {
        let object = raw
            .as_object()
            .ok_or_else(|| invalid_kind(raw))?;

        if let Some(entries) = object.get("entries") {
            let entries = entries.as_array().ok_or_else(|| invalid_kind(raw))?;
            let name = match object.get("name") {
                None => DEFAULT_CATEGORY,
                Some(name) => name.as_str().ok_or_else(|| invalid_kind(raw))?,
            };
            let entries = entries
                .iter()
                .map(leaf_from_value)
                .collect::<Option<Vec<_>>>()
                .ok_or_else(|| invalid_kind(raw))?;
            return Ok(ListingItem::Group(Category::with_entries(name, entries)));
        }

        leaf_from_value(raw)
            .map(ListingItem::Leaf)
            .ok_or_else(|| invalid_kind(raw))
    }
}

fn invalid_kind(raw: &Value) -> TallyError {
    TallyError::InvalidEntryKind(raw.to_string())
}

fn leaf_from_value(raw: &Value) -> Option<Entry> {
    let object = raw.as_object()?;
    let name = object.get("name")?.as_str()?;
    let value = object.get("value")?.as_f64()?;
    let date = object.get("date")?.as_str()?;
    let id = match object.get("id") {
        Some(id) => id.as_u64()?,
        None => 0,
    };
    Some(Entry::new(name, Money::from_decimal(value), date).with_id(EntryId::new(id)))
}

/// Named collection of categories
#[derive(Debug, Clone)]
pub struct Listing {
    title: String,
    /// First-insertion order
    categories: Vec<Category>,
    /// Canonical key → position in `categories`
    index: HashMap<String, usize>,
}

impl Default for Listing {
    fn default() -> Self {
        Self::new("Listing")
    }
}

impl Listing {
    /// Create an empty listing
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            categories: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Build a listing from identified records
    ///
    /// Records without a category land in the default category.
    pub fn from_elements<I>(title: impl Into<String>, elements: I) -> Self
    where
        I: IntoIterator<Item = (EntryId, EntryRecord)>,
    {
        let mut listing = Self::new(title);
        for (id, record) in elements {
            let entry = record.to_entry(id);
            listing.add_entry(entry, record.category.as_deref());
        }
        debug!(
            title = %listing.title,
            categories = listing.len(),
            "built listing from elements"
        );
        listing
    }

    /// Heading rendered centered above the column header
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Add an entry or merge a category
    ///
    /// Entries go to the category named by `category` (looked up trimmed and
    /// case-insensitively, default category when absent or blank). Groups are
    /// merged into the category matching their own name and `category` is
    /// ignored for them.
    pub fn add_entry(&mut self, item: impl Into<ListingItem>, category: Option<&str>) {
        match item.into() {
            ListingItem::Leaf(entry) => {
                self.category_mut(category.unwrap_or(DEFAULT_CATEGORY))
                    .push(entry);
            }
            ListingItem::Group(group) => {
                let target = self.category_mut(group.display_name());
                for entry in group.into_entries() {
                    target.push(entry);
                }
            }
        }
    }

    /// Add an untyped value, rejecting anything that is not an entry or a group
    ///
    /// The listing is left untouched when the value is rejected.
    pub fn add_raw_entry(&mut self, raw: &Value, category: Option<&str>) -> TallyResult<()> {
        let item = ListingItem::try_from(raw)?;
        self.add_entry(item, category);
        Ok(())
    }

    fn category_mut(&mut self, name: &str) -> &mut Category {
        let mut key = canonical_key(name);
        if key.is_empty() {
            key = DEFAULT_CATEGORY.to_string();
        }

        let position = match self.index.get(&key) {
            Some(&position) => position,
            None => {
                let position = self.categories.len();
                self.categories.push(Category::new(name));
                self.index.insert(key, position);
                position
            }
        };
        &mut self.categories[position]
    }

    /// Canonical keys of all categories
    ///
    /// Meant for membership tests; the order is not the render order.
    pub fn category_keys(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(Category::key)
    }

    /// Case-insensitive category lookup
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.index
            .get(&canonical_key(name))
            .map(|&position| &self.categories[position])
    }

    /// True when a category of that name exists, ignoring case
    pub fn contains_category(&self, name: &str) -> bool {
        self.category(name).is_some()
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// True when no entry has been added yet
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Signed sum over every entry of every category
    pub fn total_value(&self) -> Money {
        self.categories.iter().map(Category::signed_total).sum()
    }

    /// Sum of the absolute category subtotals
    pub fn absolute_total(&self) -> Money {
        self.categories.iter().map(Category::subtotal).sum()
    }

    /// Categories in render order; ties keep insertion order
    pub fn sorted_categories(&self, sort_key: SortKey) -> Vec<&Category> {
        let mut categories: Vec<&Category> = self.categories.iter().collect();
        match sort_key {
            SortKey::Name => categories.sort_by(|a, b| a.key().cmp(b.key())),
            SortKey::Value => categories.sort_by_key(|c| c.subtotal()),
        }
        categories
    }

    /// Title, column header and category blocks, one string per line
    pub fn render_lines(&self, opts: &RenderOptions) -> Vec<String> {
        let width = layout::block_width(opts);
        let mut lines = vec![
            layout::centered(&self.title, width),
            layout::header_line(opts),
        ];
        for category in self.sorted_categories(opts.sort_key) {
            lines.extend(category.render_lines(opts));
        }
        lines
    }

    /// Render to a newline-joined block
    pub fn render(&self, opts: &RenderOptions) -> String {
        self.render_lines(opts).join("\n")
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(&RenderOptions::default()))
    }
}
