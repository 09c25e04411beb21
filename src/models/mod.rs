//! Core data models for tally
//!
//! Entries, categories and the raw records the period store hands to the
//! report renderer.

pub mod category;
pub mod entry;
pub mod ids;
pub mod money;
pub mod record;

pub use category::{canonical_key, Category, DEFAULT_CATEGORY};
pub use entry::Entry;
pub use ids::EntryId;
pub use money::Money;
pub use record::{
    default_tables, EntryRecord, RecordSet, Table, Tables, DEFAULT_TABLE, RECURRENT_TABLE,
};
