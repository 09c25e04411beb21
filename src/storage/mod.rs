//! Storage layer for tally
//!
//! Provides JSON file storage of periods with atomic writes and automatic
//! directory creation.

pub mod file_io;
pub mod periods;

pub use file_io::{read_json, write_json_atomic};
pub use periods::{
    default_period_name, today, validate_period_name, validate_record, PeriodStore,
    PERIOD_DATE_FORMAT,
};
