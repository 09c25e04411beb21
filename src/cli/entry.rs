//! Entry CLI commands
//!
//! Adding, showing, copying and removing entries of a period.

use clap::Args;

use crate::config::Settings;
use crate::error::{TallyError, TallyResult};
use crate::models::{EntryId, EntryRecord, Money, RecordSet, RECURRENT_TABLE};
use crate::storage::{default_period_name, today, PeriodStore};

/// Arguments of the add command
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Entry name
    pub name: String,

    /// Signed amount (e.g. "-12.50" for an expense)
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    /// Date as MM-DD (defaults to today)
    #[arg(short, long)]
    pub date: Option<String>,

    /// Category name
    #[arg(short, long)]
    pub category: Option<String>,

    /// Target table (defaults to the configured default table, or the
    /// recurrent table for recurring entries)
    #[arg(short, long)]
    pub table: Option<String>,

    /// Target period (defaults to the current year)
    #[arg(short, long, env = "TALLY_PERIOD")]
    pub period: Option<String>,

    /// Start a new recurring entry
    #[arg(long, conflicts_with = "occurrence_of")]
    pub recurring: bool,

    /// Add another occurrence to the entry with this identifier
    #[arg(long, value_name = "ID")]
    pub occurrence_of: Option<EntryId>,
}

impl AddArgs {
    fn target_table(&self, settings: &Settings) -> String {
        match &self.table {
            Some(table) => table.clone(),
            None if self.recurring || self.occurrence_of.is_some() => RECURRENT_TABLE.to_string(),
            None => settings.default_table.clone(),
        }
    }
}

/// Where an existing entry lives
#[derive(Args, Debug)]
pub struct EntryLocation {
    /// Identifier of the entry
    pub id: EntryId,

    /// Table holding the entry (defaults to the configured default table)
    #[arg(short, long)]
    pub table: Option<String>,

    /// Period holding the entry (defaults to the current year)
    #[arg(short, long, env = "TALLY_PERIOD")]
    pub period: Option<String>,
}

impl EntryLocation {
    fn resolve(self, settings: &Settings) -> (EntryId, String, String) {
        let period = self.period.unwrap_or_else(default_period_name);
        let table = self.table.unwrap_or_else(|| settings.default_table.clone());
        (self.id, table, period)
    }
}

/// Arguments of the copy command
#[derive(Args, Debug)]
pub struct CopyArgs {
    /// Identifier of the entry
    pub id: EntryId,

    /// Period to copy from
    #[arg(long)]
    pub from: String,

    /// Period to copy to
    #[arg(long)]
    pub to: String,

    /// Table holding the entry (defaults to the configured default table)
    #[arg(short, long)]
    pub table: Option<String>,
}

/// Handle the add command
pub fn handle_add_command(store: &PeriodStore, settings: &Settings, args: AddArgs) -> TallyResult<()> {
    let value = Money::parse(&args.value)
        .map_err(|e| TallyError::Validation(format!("Invalid value: {}", e)))?;

    let table = args.target_table(settings);
    let period = args.period.clone().unwrap_or_else(default_period_name);

    let mut record = EntryRecord::new(args.name, value, args.date.unwrap_or_else(today));
    if let Some(category) = args.category {
        record = record.in_category(category);
    }

    if let Some(id) = args.occurrence_of {
        let occurrences = store.add_occurrence(&period, &table, id, record)?;
        println!(
            "Added occurrence {} of entry {} in {}/{}",
            occurrences, id, period, table
        );
    } else {
        let id = if args.recurring {
            store.add_recurring_entry(&period, &table, record)?
        } else {
            store.add_entry(&period, &table, record)?
        };
        println!("Added entry {} to {}/{}", id, period, table);
    }

    Ok(())
}

/// Multi-line description of the records stored under one identifier
pub fn describe_entry(id: EntryId, set: &RecordSet) -> String {
    let mut lines = vec![if set.is_recurring() {
        format!("Entry {} (recurring, {} occurrences)", id, set.records().len())
    } else {
        format!("Entry {}", id)
    }];

    for record in set.records() {
        lines.push(format!("  Name:     {}", record.name));
        lines.push(format!("  Value:    {}", record.value));
        lines.push(format!("  Date:     {}", record.date));
        if let Some(category) = &record.category {
            lines.push(format!("  Category: {}", category));
        }
    }
    lines.join("\n")
}

/// Handle the get command
pub fn handle_get_command(
    store: &PeriodStore,
    settings: &Settings,
    args: EntryLocation,
) -> TallyResult<()> {
    let (id, table, period) = args.resolve(settings);
    let set = store.get_entry(&period, &table, id)?;
    println!("{}", describe_entry(id, &set));
    Ok(())
}

/// Handle the copy command
pub fn handle_copy_command(store: &PeriodStore, settings: &Settings, args: CopyArgs) -> TallyResult<()> {
    let table = args.table.unwrap_or_else(|| settings.default_table.clone());
    let copied = store.copy_entry(&args.from, &args.to, &table, args.id)?;
    println!(
        "Copied entry {} from {}/{} to entry {} in {}/{}",
        args.id, args.from, table, copied, args.to, table
    );
    Ok(())
}

/// Handle the remove command
pub fn handle_remove_command(
    store: &PeriodStore,
    settings: &Settings,
    args: EntryLocation,
) -> TallyResult<()> {
    let (id, table, period) = args.resolve(settings);

    let removed = store.remove_entry(&period, &table, id)?;
    let names: Vec<&str> = removed.records().map(|r| r.name.as_str()).collect();
    println!("Removed entry {} ({}) from {}/{}", id, names.join(", "), period, table);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add_args(table: Option<&str>, recurring: bool, occurrence_of: Option<u64>) -> AddArgs {
        AddArgs {
            name: "rent".into(),
            value: "-500".into(),
            date: None,
            category: None,
            table: table.map(str::to_string),
            period: None,
            recurring,
            occurrence_of: occurrence_of.map(EntryId::new),
        }
    }

    #[test]
    fn test_recurring_entries_default_to_recurrent_table() {
        let settings = Settings::default();
        assert_eq!(add_args(None, false, None).target_table(&settings), "standard");
        assert_eq!(add_args(None, true, None).target_table(&settings), "recurrent");
        assert_eq!(add_args(None, false, Some(3)).target_table(&settings), "recurrent");
        assert_eq!(add_args(Some("misc"), true, None).target_table(&settings), "misc");
    }

    #[test]
    fn test_describe_entry() {
        let single = RecordSet::from(
            EntryRecord::new("lunch", Money::from_cents(-2000), "04-01").in_category("food"),
        );
        assert_eq!(
            describe_entry(EntryId::new(3), &single),
            "Entry 3\n  Name:     lunch\n  Value:    -20.00\n  Date:     04-01\n  Category: food"
        );

        let mut recurring = RecordSet::Recurring(vec![EntryRecord::new(
            "gold",
            Money::from_cents(432100),
            "01-01",
        )]);
        recurring.push(EntryRecord::new("gold", Money::from_cents(432100), "02-01"));
        let text = describe_entry(EntryId::new(42), &recurring);
        assert!(text.starts_with("Entry 42 (recurring, 2 occurrences)\n"));
        assert!(text.ends_with("  Date:     02-01"));
    }
}
