//! Address range compaction.
//!
//! Collapses runs of consecutive positions into `start-end` notation.

use crate::models::{Address, AddressRange};
use itertools::Itertools;

/// Compact sorted addresses into single addresses and contiguous spans.
///
/// The input must already be sorted (see [`crate::processing::ZoneGroup::sorted_addresses`]),
/// nothing is reordered here. An address extends the open run when it is on the
/// same panel and its position is exactly one above the run's end.
///
/// # Examples
/// ```
/// use zone_summary::models::Address;
/// use zone_summary::processing::{compact_addresses, render_ranges};
/// let addresses: Vec<Address> = ["3.1", "3.2", "3.5"]
///     .iter()
///     .filter_map(|a| Address::parse(a))
///     .collect();
/// assert_eq!(render_ranges(&compact_addresses(&addresses)), "3.1-3.2, 3.5");
/// ```
pub fn compact_addresses(addresses: &[Address]) -> Vec<AddressRange> {
    let mut ranges = Vec::new();
    let mut iter = addresses.iter();
    let Some(first) = iter.next() else {
        return ranges;
    };

    let mut start = first;
    let mut end = first;
    for address in iter {
        if end.is_followed_by(address) {
            end = address;
        } else {
            ranges.push(close_run(start, end));
            start = address;
            end = address;
        }
    }
    ranges.push(close_run(start, end));
    ranges
}

fn close_run(start: &Address, end: &Address) -> AddressRange {
    if start == end {
        AddressRange::Single(start.clone())
    } else {
        AddressRange::Span {
            start: start.clone(),
            end: end.clone(),
        }
    }
}

/// Join ranges as shown in the report, `1.1-1.3, 1.7`.
pub fn render_ranges(ranges: &[AddressRange]) -> String {
    ranges.iter().join(", ")
}
