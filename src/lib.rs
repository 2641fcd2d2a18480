//! Zone summary for security panel configuration exports.
//!
//! The pipeline reads a semicolon-separated export, drops denylisted device
//! types, groups devices per zone and collapses each zone's addresses into
//! ranges. The same filtered records also yield one inventory row per device.
//!
//! ```
//! use zone_summary::models::{Denylist, LookupTable};
//! use zone_summary::processing::FIRST_DATA_ROW;
//!
//! let mut lines = vec!["Title".to_string(), "Rapport konfiguration".to_string()];
//! lines.extend((3..FIRST_DATA_ROW).map(|_| String::new()));
//! lines.push("1;12;1.1;OPT".to_string());
//! lines.push("1;12;1.2;OPT".to_string());
//!
//! let report = zone_summary::process(
//!     lines.join("\n").as_bytes(),
//!     &Denylist::new(),
//!     &LookupTable::new(),
//! )
//! .unwrap();
//! assert_eq!(report.summary[0].compacted_addresses, "1.1-1.2");
//! ```

pub mod cli;
pub mod error;
pub mod input;
pub mod models;
pub mod output;
pub mod processing;

use std::path::Path;

pub use error::ReportError;
pub use models::Report;
pub use processing::{process, process_with, ReportOptions};

/// Load the configuration files and process one export file.
///
/// # Arguments
/// * `export` - The `.csv` export
/// * `invalid_types` - Denylist file
/// * `lookup` - Lookup table file
pub fn process_file(
    export: &Path,
    invalid_types: &Path,
    lookup: &Path,
    options: &ReportOptions,
) -> Result<Report, ReportError> {
    let denylist = input::read_denylist(invalid_types)?;
    let lookup = input::read_lookup_table(lookup)?;
    let raw = input::read_export(export)?;
    process_with(&raw, &denylist, &lookup, options)
}
