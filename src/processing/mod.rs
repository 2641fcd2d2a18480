//! Export processing logic.
//!
//! This module contains the report pipeline, leaves first:
//! - [`parser`] - Header check and device rows
//! - [`filter`] - Removal of denylisted device types
//! - [`zones`] - Grouping by zone
//! - [`compact`] - Address range compaction
//! - [`report`] - Summary and inventory assembly

mod compact;
mod filter;
mod parser;
mod report;
mod zones;

// Re-export public functions
pub use compact::{compact_addresses, render_ranges};
pub use filter::filter_records;
pub use parser::{parse_records, split_fields, split_rows, FIRST_DATA_ROW, MARKER_ROW};
pub use report::{
    build_inventory, build_summary, process, process_with, ReportOptions,
    DEFAULT_ADDRESS_PREFIX,
};
pub use zones::{group_by_zone, ZoneGroup};
