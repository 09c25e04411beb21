//! Earnings / Expenses report
//!
//! Classifies the entries of every table of a period by sign and renders the
//! two resulting listings either next to each other or one above the other.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::RenderOptions;
use crate::display::layout;
use crate::models::{EntryId, EntryRecord, Money, Tables};

use super::listing::Listing;

/// Separator between the left and right column of a side-by-side report
const COLUMN_SEPARATOR: &str = " | ";

/// How the two listings are arranged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    /// Earnings left, expenses right, followed by a totals row
    #[default]
    SideBySide,
    /// Earnings block, a rule, then the expenses block
    Stacked,
}

/// Entries of a period split into earnings and expenses
#[derive(Debug, Clone)]
pub struct EarningsExpensesReport {
    pub earnings: Listing,
    pub expenses: Listing,
}

impl EarningsExpensesReport {
    /// Classify every record of every table
    ///
    /// Strictly positive values are earnings, everything else is an expense.
    /// Recurring sets expand into one entry per occurrence, all sharing the
    /// set's identifier. Both listings store absolute values.
    pub fn from_tables(tables: &Tables) -> Self {
        let mut earnings = Listing::new("Earnings");
        let mut expenses = Listing::new("Expenses");

        for (id, record) in flatten(tables) {
            let bucket = if record.value.is_positive() {
                &mut earnings
            } else {
                &mut expenses
            };
            let entry = EntryRecord {
                value: record.value.abs(),
                ..record.clone()
            }
            .to_entry(id);
            bucket.add_entry(entry, record.category.as_deref());
        }

        debug!(
            tables = tables.len(),
            earnings = earnings.len(),
            expenses = expenses.len(),
            "classified period entries"
        );

        Self { earnings, expenses }
    }

    /// True when neither bucket holds a category
    pub fn is_empty(&self) -> bool {
        self.earnings.is_empty() && self.expenses.is_empty()
    }

    /// Absolute total of all earnings
    pub fn total_earnings(&self) -> Money {
        self.earnings.absolute_total()
    }

    /// Absolute total of all expenses
    pub fn total_expenses(&self) -> Money {
        self.expenses.absolute_total()
    }

    /// Render the report; empty string when there is nothing to show
    pub fn render(&self, opts: &RenderOptions, layout: Layout) -> String {
        if self.is_empty() {
            return String::new();
        }

        let earnings = self.earnings.render_lines(opts);
        let expenses = self.expenses.render_lines(opts);

        match layout {
            Layout::SideBySide => self.side_by_side(earnings, expenses, opts),
            Layout::Stacked => stacked(earnings, expenses, opts),
        }
    }

    fn side_by_side(
        &self,
        mut earnings: Vec<String>,
        mut expenses: Vec<String>,
        opts: &RenderOptions,
    ) -> String {
        let width = layout::block_width(opts);
        let rows = earnings.len().max(expenses.len());
        earnings.resize(rows, String::new());
        expenses.resize(rows, String::new());

        let mut lines: Vec<String> = earnings
            .iter()
            .zip(&expenses)
            .map(|(left, right)| {
                format!("{:<width$}{}{}", left, COLUMN_SEPARATOR, right, width = width)
            })
            .collect();

        lines.push("=".repeat(2 * width + COLUMN_SEPARATOR.len()));
        lines.push(format!(
            "{}{}{}",
            layout::category_line("Total", self.total_earnings(), opts),
            COLUMN_SEPARATOR,
            layout::category_line("Total", self.total_expenses(), opts)
        ));
        lines.join("\n")
    }
}

fn stacked(earnings: Vec<String>, expenses: Vec<String>, opts: &RenderOptions) -> String {
    let mut lines = earnings;
    lines.push(String::new());
    lines.push("-".repeat(layout::block_width(opts)));
    lines.push(String::new());
    lines.extend(expenses);
    lines.join("\n")
}

/// Every (identifier, record) pair of every table, recurring sets expanded
fn flatten(tables: &Tables) -> impl Iterator<Item = (EntryId, &EntryRecord)> {
    tables.values().flat_map(|table| {
        table
            .iter()
            .flat_map(|(id, set)| set.records().map(move |record| (*id, record)))
    })
}

/// Render the earnings/expenses report of a period
pub fn report(tables: &Tables, opts: &RenderOptions, layout: Layout) -> String {
    EarningsExpensesReport::from_tables(tables).render(opts, layout)
}
