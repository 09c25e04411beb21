//! tally - personal finance tracker
//!
//! This library turns the raw entry records of a period into a categorized,
//! fixed-width earnings/expenses report.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Paths, settings and the render toggles
//! - `error`: Custom error types
//! - `models`: Entries, categories, money and the raw record format
//! - `display`: Fixed-width column layout
//! - `reports`: Listings and the earnings/expenses report
//! - `storage`: JSON period store
//! - `cli`: Command handlers for the `tally` binary
//!
//! # Example
//!
//! ```rust
//! use tally::config::RenderOptions;
//! use tally::models::{Entry, Money};
//! use tally::reports::Listing;
//!
//! let mut listing = Listing::default();
//! listing.add_entry(Entry::new("Aldi", Money::from_decimal(66.6), "11-08"), Some("Groceries"));
//! let text = listing.render(&RenderOptions::default());
//! assert!(text.contains("Groceries             66.60"));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{TallyError, TallyResult};
pub use reports::{report, Layout, Listing};
