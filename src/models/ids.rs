//! Strongly-typed entry identifier
//!
//! Identifiers are assigned by the period store and shared by every
//! occurrence of a recurring record.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Non-negative identifier of a stored entry
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EntryId(u64);

impl EntryId {
    /// Create an ID from a raw number
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the underlying number
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// The identifier following this one, `None` once the range is used up
    pub const fn checked_next(&self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(raw) => Some(Self(raw)),
            None => None,
        }
    }
}

impl From<u64> for EntryId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl FromStr for EntryId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() so the ID column can be right-aligned
        f.pad(&self.0.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_id_display_and_parse() {
        let id: EntryId = "42".parse().unwrap();
        assert_eq!(id, EntryId::new(42));
        assert_eq!(format!("{:>3}", id), " 42");
        assert!("-1".parse::<EntryId>().is_err());
    }

    #[test]
    fn test_id_as_json_map_key() {
        let mut map = BTreeMap::new();
        map.insert(EntryId::new(999), "money");
        map.insert(EntryId::new(1), "food");

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"1":"food","999":"money"}"#);

        let back: BTreeMap<EntryId, String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back[&EntryId::new(999)], "money");
    }

    #[test]
    fn test_checked_next() {
        assert_eq!(EntryId::default().checked_next(), Some(EntryId::new(1)));
        assert_eq!(EntryId::new(u64::MAX).checked_next(), None);
    }
}
