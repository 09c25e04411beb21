//! Period store
//!
//! Each period (a year by default) is one JSON file holding the tables of
//! that period:
//!
//! ```json
//! {
//!   "standard": { "1": {"name": "food", "value": -100.01, "date": "03-03"} },
//!   "recurrent": { "42": [{"name": "gold", "value": 4321, "date": "01-01"}] }
//! }
//! ```

use std::path::PathBuf;

use chrono::{Datelike, Local, NaiveDate};
use tracing::debug;

use crate::config::TallyPaths;
use crate::error::{TallyError, TallyResult};
use crate::models::{default_tables, EntryId, EntryRecord, RecordSet, Table, Tables};

use super::file_io::{read_json, write_json_atomic};

/// Date format of entry records
pub const PERIOD_DATE_FORMAT: &str = "%m-%d";

/// Name of the current period (the current year)
pub fn default_period_name() -> String {
    Local::now().year().to_string()
}

/// Today's date in record format
pub fn today() -> String {
    Local::now().format(PERIOD_DATE_FORMAT).to_string()
}

/// Check a record before it is stored
pub fn validate_record(record: &EntryRecord) -> TallyResult<()> {
    if record.name.trim().is_empty() {
        return Err(TallyError::Validation("Entry name cannot be empty".into()));
    }

    // Checked against a leap year so that 02-29 is accepted
    NaiveDate::parse_from_str(&format!("2000-{}", record.date), "%Y-%m-%d").map_err(|_| {
        TallyError::Validation(format!(
            "Invalid date '{}' (expected MM-DD)",
            record.date
        ))
    })?;

    Ok(())
}

/// Check that a period name can be used as a file name inside the data directory
pub fn validate_period_name(period: &str) -> TallyResult<()> {
    let escapes = period.contains("..") || period.contains(|c: char| c == '/' || c == '\\');
    if period.trim().is_empty() || escapes {
        return Err(TallyError::Validation(format!(
            "Invalid period name '{}'",
            period
        )));
    }
    Ok(())
}

fn next_id(table: &Table) -> TallyResult<EntryId> {
    let last = table.keys().next_back().copied().unwrap_or_default();
    last.checked_next()
        .ok_or_else(|| TallyError::Storage(format!("No identifier left after {}", last)))
}

/// JSON file store with one file per period
#[derive(Debug, Clone)]
pub struct PeriodStore {
    paths: TallyPaths,
}

impl PeriodStore {
    pub fn new(paths: TallyPaths) -> Self {
        Self { paths }
    }

    fn file(&self, period: &str) -> TallyResult<PathBuf> {
        validate_period_name(period)?;
        Ok(self.paths.period_file(period))
    }

    /// Load the tables of a period; a missing period has empty default tables
    pub fn load(&self, period: &str) -> TallyResult<Tables> {
        match read_json::<Tables>(&self.file(period)?)? {
            Some(tables) => {
                debug!(period, tables = tables.len(), "loaded period");
                Ok(tables)
            }
            None => {
                debug!(period, "period file missing, using empty tables");
                Ok(default_tables())
            }
        }
    }

    /// Persist the tables of a period
    pub fn save(&self, period: &str, tables: &Tables) -> TallyResult<()> {
        write_json_atomic(&self.file(period)?, tables)?;
        debug!(period, "saved period");
        Ok(())
    }

    fn insert(&self, period: &str, table: &str, set: RecordSet) -> TallyResult<EntryId> {
        for record in set.records() {
            validate_record(record)?;
        }

        let mut tables = self.load(period)?;
        let entries = tables.entry(table.to_string()).or_default();
        let id = next_id(entries)?;
        entries.insert(id, set);

        self.save(period, &tables)?;
        debug!(period, table, %id, "stored entry");
        Ok(id)
    }

    /// Validate and store a one-off record, returning its new identifier
    ///
    /// Identifiers are allocated per table, starting at 1.
    pub fn add_entry(&self, period: &str, table: &str, record: EntryRecord) -> TallyResult<EntryId> {
        self.insert(period, table, RecordSet::Single(record))
    }

    /// Store the first occurrence of a recurring record
    pub fn add_recurring_entry(
        &self,
        period: &str,
        table: &str,
        record: EntryRecord,
    ) -> TallyResult<EntryId> {
        self.insert(period, table, RecordSet::Recurring(vec![record]))
    }

    /// Append an occurrence to the records stored under `id`
    ///
    /// Returns the number of occurrences now sharing the identifier.
    pub fn add_occurrence(
        &self,
        period: &str,
        table: &str,
        id: EntryId,
        record: EntryRecord,
    ) -> TallyResult<usize> {
        validate_record(&record)?;

        let mut tables = self.load(period)?;
        let set = tables
            .get_mut(table)
            .ok_or_else(|| TallyError::table_not_found(table))?
            .get_mut(&id)
            .ok_or_else(|| TallyError::entry_not_found(id.to_string()))?;
        set.push(record);
        let occurrences = set.records().len();

        self.save(period, &tables)?;
        Ok(occurrences)
    }

    /// The records stored under an identifier
    pub fn get_entry(&self, period: &str, table: &str, id: EntryId) -> TallyResult<RecordSet> {
        let mut tables = self.load(period)?;
        tables
            .remove(table)
            .ok_or_else(|| TallyError::table_not_found(table))?
            .remove(&id)
            .ok_or_else(|| TallyError::entry_not_found(id.to_string()))
    }

    /// Copy the records stored under `id` into another period
    ///
    /// The copy lands in the same table of the destination and gets a fresh
    /// identifier there.
    pub fn copy_entry(
        &self,
        source: &str,
        destination: &str,
        table: &str,
        id: EntryId,
    ) -> TallyResult<EntryId> {
        let set = self.get_entry(source, table, id)?;
        self.insert(destination, table, set)
    }

    /// Remove the records stored under an identifier
    pub fn remove_entry(&self, period: &str, table: &str, id: EntryId) -> TallyResult<RecordSet> {
        let mut tables = self.load(period)?;
        let entries = tables
            .get_mut(table)
            .ok_or_else(|| TallyError::table_not_found(table))?;
        let removed = entries
            .remove(&id)
            .ok_or_else(|| TallyError::entry_not_found(id.to_string()))?;

        self.save(period, &tables)?;
        Ok(removed)
    }

    /// Names of all stored periods, sorted
    pub fn list_periods(&self) -> TallyResult<Vec<String>> {
        let dir = self.paths.data_dir();
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut periods = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                periods.push(stem.to_string());
            }
        }
        periods.sort();
        Ok(periods)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, DEFAULT_TABLE, RECURRENT_TABLE};
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, PeriodStore) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());
        (temp_dir, PeriodStore::new(paths))
    }

    #[test]
    fn test_missing_period_has_default_tables() {
        let (_temp_dir, store) = create_test_store();
        let tables = store.load("1999").unwrap();
        assert!(tables[DEFAULT_TABLE].is_empty());
        assert!(tables[RECURRENT_TABLE].is_empty());
    }

    #[test]
    fn test_add_entry_allocates_increasing_ids() {
        let (_temp_dir, store) = create_test_store();

        let first = store
            .add_entry("2024", DEFAULT_TABLE, EntryRecord::new("food", Money::from_cents(-100), "03-03"))
            .unwrap();
        let second = store
            .add_entry("2024", DEFAULT_TABLE, EntryRecord::new("money", Money::from_cents(500), "03-04"))
            .unwrap();

        assert_eq!(first, EntryId::new(1));
        assert_eq!(second, EntryId::new(2));

        let tables = store.load("2024").unwrap();
        assert_eq!(tables[DEFAULT_TABLE].len(), 2);
    }

    #[test]
    fn test_add_entry_rejects_bad_date() {
        let (_temp_dir, store) = create_test_store();
        let err = store
            .add_entry("2024", DEFAULT_TABLE, EntryRecord::new("food", Money::zero(), "13-01"))
            .unwrap_err();
        assert!(matches!(err, TallyError::Validation(_)));

        assert!(validate_record(&EntryRecord::new("leap", Money::zero(), "02-29")).is_ok());
        assert!(validate_record(&EntryRecord::new(" ", Money::zero(), "01-01")).is_err());
    }

    #[test]
    fn test_remove_entry() {
        let (_temp_dir, store) = create_test_store();
        let id = store
            .add_entry("2024", DEFAULT_TABLE, EntryRecord::new("food", Money::from_cents(-100), "03-03"))
            .unwrap();

        let removed = store.remove_entry("2024", DEFAULT_TABLE, id).unwrap();
        assert_eq!(removed.records().next().unwrap().name, "food");
        assert!(store.load("2024").unwrap()[DEFAULT_TABLE].is_empty());

        let err = store.remove_entry("2024", DEFAULT_TABLE, id).unwrap_err();
        assert!(err.is_not_found());
        let err = store.remove_entry("2024", "nope", id).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_list_periods() {
        let (_temp_dir, store) = create_test_store();
        assert!(store.list_periods().unwrap().is_empty());

        store.save("2024", &default_tables()).unwrap();
        store.save("2023", &default_tables()).unwrap();

        assert_eq!(store.list_periods().unwrap(), vec!["2023", "2024"]);
    }

    #[test]
    fn test_default_period_name_is_a_year() {
        let name = default_period_name();
        assert_eq!(name.len(), 4);
        assert!(name.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_recurring_entries_share_an_id() {
        let (_temp_dir, store) = create_test_store();
        let rent = |date: &str| EntryRecord::new("rent", Money::from_cents(-50000), date);

        let id = store.add_recurring_entry("2024", RECURRENT_TABLE, rent("01-01")).unwrap();
        assert_eq!(store.add_occurrence("2024", RECURRENT_TABLE, id, rent("02-01")).unwrap(), 2);

        let set = store.get_entry("2024", RECURRENT_TABLE, id).unwrap();
        assert!(set.is_recurring());
        assert_eq!(set.records().map(|r| r.date.as_str()).collect::<Vec<_>>(), ["01-01", "02-01"]);

        let err = store
            .add_occurrence("2024", RECURRENT_TABLE, id, rent("02-30"))
            .unwrap_err();
        assert!(matches!(err, TallyError::Validation(_)));
        let err = store
            .add_occurrence("2024", RECURRENT_TABLE, EntryId::new(9), rent("03-01"))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_get_entry() {
        let (_temp_dir, store) = create_test_store();
        let record = EntryRecord::new("lunch", Money::from_cents(-2000), "04-01").in_category("food");
        let id = store.add_entry("2024", DEFAULT_TABLE, record.clone()).unwrap();

        assert_eq!(store.get_entry("2024", DEFAULT_TABLE, id).unwrap(), RecordSet::Single(record));
        assert!(store.get_entry("2024", DEFAULT_TABLE, EntryId::new(2)).unwrap_err().is_not_found());
        assert!(store.get_entry("2024", "nope", id).unwrap_err().is_not_found());
    }

    #[test]
    fn test_copy_entry_to_other_period() {
        let (_temp_dir, store) = create_test_store();
        let record = EntryRecord::new("salary", Money::from_cents(300000), "01-31");
        let id = store.add_entry("2023", DEFAULT_TABLE, record.clone()).unwrap();
        store
            .add_entry("2024", DEFAULT_TABLE, EntryRecord::new("bonus", Money::from_cents(1000), "01-02"))
            .unwrap();

        let copied = store.copy_entry("2023", "2024", DEFAULT_TABLE, id).unwrap();
        assert_eq!(copied, EntryId::new(2));
        assert_eq!(store.get_entry("2024", DEFAULT_TABLE, copied).unwrap(), RecordSet::Single(record));
        assert_eq!(store.load("2023").unwrap()[DEFAULT_TABLE].len(), 1);

        let err = store.copy_entry("2023", "2024", DEFAULT_TABLE, EntryId::new(5)).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_exhausted_ids_are_a_storage_error() {
        let (_temp_dir, store) = create_test_store();
        let mut tables = default_tables();
        tables.get_mut(DEFAULT_TABLE).unwrap().insert(
            EntryId::new(u64::MAX),
            EntryRecord::new("last", Money::zero(), "12-31").into(),
        );
        store.save("2024", &tables).unwrap();

        let err = store
            .add_entry("2024", DEFAULT_TABLE, EntryRecord::new("one more", Money::zero(), "12-31"))
            .unwrap_err();
        assert!(matches!(err, TallyError::Storage(_)));
        assert_eq!(store.load("2024").unwrap()[DEFAULT_TABLE].len(), 1);
    }

    #[test]
    fn test_period_names_stay_inside_data_dir() {
        let (temp_dir, store) = create_test_store();
        let record = EntryRecord::new("food", Money::from_cents(-100), "03-03");

        for period in ["../x", "a/b", "a\\b", "..", "", "  "] {
            let err = store.add_entry(period, DEFAULT_TABLE, record.clone()).unwrap_err();
            assert!(matches!(err, TallyError::Validation(_)), "accepted {:?}", period);
            assert!(store.load(period).is_err());
        }
        assert!(!temp_dir.path().join("x.json").exists());
        assert!(validate_period_name("2024-q1").is_ok());
    }
}
