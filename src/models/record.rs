//! Raw entry records as stored per period
//!
//! A period holds several tables. Each table maps an identifier to either a
//! single record or, for recurring entries, a list of records sharing that
//! identifier.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::entry::Entry;
use super::ids::EntryId;
use super::money::Money;

/// Table receiving one-off entries
pub const DEFAULT_TABLE: &str = "standard";

/// Table receiving recurring entries
pub const RECURRENT_TABLE: &str = "recurrent";

/// Attributes of one stored entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRecord {
    pub name: String,

    /// Signed amount, written as a decimal JSON number
    #[serde(with = "super::money::as_decimal")]
    pub value: Money,

    /// `MM-DD`
    pub date: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl EntryRecord {
    pub fn new(name: impl Into<String>, value: Money, date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value,
            date: date.into(),
            category: None,
        }
    }

    /// Same record filed under a category
    pub fn in_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Build the entry this record describes
    pub fn to_entry(&self, id: EntryId) -> Entry {
        Entry::new(self.name.clone(), self.value, self.date.clone()).with_id(id)
    }
}

/// Value stored under one identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordSet {
    /// A one-off entry
    Single(EntryRecord),
    /// Every occurrence of a recurring entry
    Recurring(Vec<EntryRecord>),
}

impl RecordSet {
    /// Iterate the occurrences held by this set
    pub fn records(&self) -> std::slice::Iter<'_, EntryRecord> {
        match self {
            RecordSet::Single(record) => std::slice::from_ref(record).iter(),
            RecordSet::Recurring(records) => records.iter(),
        }
    }

    pub fn is_recurring(&self) -> bool {
        matches!(self, RecordSet::Recurring(_))
    }

    /// Append an occurrence; a single record turns into a recurring set
    pub fn push(&mut self, record: EntryRecord) {
        match self {
            RecordSet::Recurring(records) => records.push(record),
            RecordSet::Single(first) => {
                let first = first.clone();
                *self = RecordSet::Recurring(vec![first, record]);
            }
        }
    }
}

impl From<EntryRecord> for RecordSet {
    fn from(record: EntryRecord) -> Self {
        RecordSet::Single(record)
    }
}

/// Identifier → records of one table
pub type Table = BTreeMap<EntryId, RecordSet>;

/// Table name → table
pub type Tables = BTreeMap<String, Table>;

/// Empty standard and recurrent tables
pub fn default_tables() -> Tables {
    let mut tables = Tables::new();
    tables.insert(DEFAULT_TABLE.to_string(), Table::new());
    tables.insert(RECURRENT_TABLE.to_string(), Table::new());
    tables
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_and_recurring_deserialize() {
        let json = r#"{
            "standard": {
                "1": {"name": "food", "value": -100.01, "date": "03-03", "category": "groceries"}
            },
            "recurrent": {
                "42": [{"name": "gold", "value": 4321, "date": "01-01", "category": "bank"},
                       {"name": "gold", "value": 4321, "date": "02-01", "category": "bank"}]
            }
        }"#;

        let tables: Tables = serde_json::from_str(json).unwrap();
        let food = &tables["standard"][&EntryId::new(1)];
        assert!(!food.is_recurring());
        assert_eq!(food.records().next().unwrap().value.cents(), -10001);

        let gold = &tables["recurrent"][&EntryId::new(42)];
        assert!(gold.is_recurring());
        assert_eq!(gold.records().count(), 2);
    }

    #[test]
    fn test_missing_category_is_none() {
        let record: EntryRecord =
            serde_json::from_str(r#"{"name": "money", "value": 299.99, "date": "03-03"}"#).unwrap();
        assert_eq!(record.category, None);

        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("category"));
    }

    #[test]
    fn test_missing_value_is_rejected() {
        let result = serde_json::from_str::<RecordSet>(r#"{"name": "money", "date": "03-03"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_push_turns_single_into_recurring() {
        let rent = EntryRecord::new("rent", Money::from_cents(-50000), "01-01");
        let mut set = RecordSet::from(rent.clone());
        assert!(!set.is_recurring());

        set.push(EntryRecord::new("rent", Money::from_cents(-50000), "02-01"));
        assert!(set.is_recurring());
        let dates: Vec<&str> = set.records().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, vec!["01-01", "02-01"]);

        set.push(EntryRecord::new("rent", Money::from_cents(-50000), "03-01"));
        assert_eq!(set.records().len(), 3);
        assert_eq!(set.records().next(), Some(&rent));
    }

    #[test]
    fn test_to_entry() {
        let record = EntryRecord::new("lunch", Money::from_cents(-2000), "04-01").in_category("food");
        let entry = record.to_entry(EntryId::new(3));
        assert_eq!(entry.name(), "lunch");
        assert_eq!(entry.id().get(), 3);
    }
}
