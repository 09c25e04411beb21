//! Reports module for tally
//!
//! Provides the category listing and the earnings/expenses report built
//! from the tables of a period.

pub mod earnings_expenses;
pub mod listing;

pub use earnings_expenses::{report, EarningsExpensesReport, Layout};
pub use listing::{Listing, ListingItem, SortKey};
