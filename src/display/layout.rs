//! Fixed-width column layout for listings
//!
//! Every line of a listing block is built from the same columns:
//!
//! ```text
//! Name               Value    Date  ID
//! Groceries             66.60
//!   Aldi                66.60 11-08   0
//! ```
//!
//! Columns are separated by a single space. When the ID column is disabled it
//! is dropped from every line, not blanked.

use crate::config::RenderOptions;
use crate::models::{EntryId, Money};

/// Width of an entry name (after the indent)
pub const NAME_WIDTH: usize = 16;
/// Indent of entry lines below their category line
pub const INDENT: usize = 2;
/// Width of a category name, which also holds the indented entry name
pub const CATEGORY_NAME_WIDTH: usize = NAME_WIDTH + INDENT;
pub const VALUE_WIDTH: usize = 8;
pub const DATE_WIDTH: usize = 5;
pub const ID_WIDTH: usize = 3;

/// Total width of every line of a listing block
pub fn block_width(opts: &RenderOptions) -> usize {
    let width = CATEGORY_NAME_WIDTH + 1 + VALUE_WIDTH + 1 + DATE_WIDTH;
    if opts.show_ids {
        width + 1 + ID_WIDTH
    } else {
        width
    }
}

/// Center a title in a field of the given width
pub fn centered(title: &str, width: usize) -> String {
    format!("{:^width$}", title, width = width)
}

/// Column header line naming the active columns
pub fn header_line(opts: &RenderOptions) -> String {
    let mut line = format!(
        "{:<nw$} {:<vw$} {:<dw$}",
        "Name",
        "Value",
        "Date",
        nw = CATEGORY_NAME_WIDTH,
        vw = VALUE_WIDTH,
        dw = DATE_WIDTH
    );
    if opts.show_ids {
        line.push_str(&format!(" {:<iw$}", "ID", iw = ID_WIDTH));
    }
    line
}

/// Category header line: name and absolute subtotal, blank date (and ID)
pub fn category_line(name: &str, subtotal: Money, opts: &RenderOptions) -> String {
    let mut line = format!(
        "{:<nw$} {:>vw$} {:dw$}",
        title_case(name),
        subtotal.abs(),
        "",
        nw = CATEGORY_NAME_WIDTH,
        vw = VALUE_WIDTH,
        dw = DATE_WIDTH
    );
    if opts.show_ids {
        line.push_str(&format!(" {:iw$}", "", iw = ID_WIDTH));
    }
    line
}

/// Indented entry line: name, absolute value, date (and ID)
pub fn entry_line(name: &str, value: Money, date: &str, id: EntryId, opts: &RenderOptions) -> String {
    let mut line = format!(
        "{:indent$}{:<nw$} {:>vw$} {:<dw$}",
        "",
        title_case(name),
        value.abs(),
        date,
        indent = INDENT,
        nw = NAME_WIDTH,
        vw = VALUE_WIDTH,
        dw = DATE_WIDTH
    );
    if opts.show_ids {
        line.push_str(&format!(" {:>iw$}", id, iw = ID_WIDTH));
    }
    line
}

/// Capitalize the first letter of every word and lower-case the rest
///
/// A word starts at any letter not preceded by another letter.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}
