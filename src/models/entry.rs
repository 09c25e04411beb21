//! A single financial transaction

use std::fmt;

use super::ids::EntryId;
use super::money::Money;

/// One transaction: name, signed amount, `MM-DD` date and identifier
///
/// Entries are never modified once built; categories only append them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    name: String,
    value: Money,
    date: String,
    id: EntryId,
}

impl Entry {
    /// Create an entry with identifier 0
    pub fn new(name: impl Into<String>, value: Money, date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value,
            date: date.into(),
            id: EntryId::default(),
        }
    }

    /// Same entry carrying the given identifier
    pub fn with_id(mut self, id: EntryId) -> Self {
        self.id = id;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Signed value as stored
    pub fn value(&self) -> Money {
        self.value
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn id(&self) -> EntryId {
        self.id
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} ({})", self.name, self.value, self.date, self.id)
    }
}
