//! Display formatting for terminal output
//!
//! Fixed-width column helpers shared by categories, listings and reports.

pub mod layout;

pub use layout::{block_width, title_case};
