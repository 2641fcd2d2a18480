//! Domain models for the zone summary.
//!
//! This module contains the core data structures used throughout the application:
//! - [`DeviceRecord`] - One device row from the configuration export
//! - [`Address`] and [`AddressRange`] - Dotted device addresses and compacted ranges
//! - [`Denylist`] and [`LookupTable`] - Read-only configuration injected into the pipeline
//! - [`ReportRow`], [`InventoryRow`] and [`Report`] - Pipeline output

mod address;
mod lookup;
mod record;
mod report;

// Re-export public types
pub use address::{Address, AddressRange};
pub use lookup::{Denylist, LookupEntry, LookupTable, NOT_FOUND};
pub use record::DeviceRecord;
pub use report::{InventoryRow, Report, ReportRow};
