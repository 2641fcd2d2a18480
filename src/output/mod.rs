//! Output formatting for the report.
//!
//! This module handles formatting and writing the report:
//! - [`csv`] - Semicolon-separated Latin-1 files
//! - [`terminal`] - Terminal output with colors

mod csv;
mod terminal;

pub use csv::{
    encode_latin1, escape_field, inventory_file_name, to_csv, write_report, SUMMARY_FILE_NAME,
};
pub use terminal::{format_field, print_denylist, print_summary};
