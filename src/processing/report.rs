//! Report assembly.
//!
//! Runs parse, filter and grouping once and projects the result into the zone
//! summary and the inventory rows.

use super::compact::{compact_addresses, render_ranges};
use super::filter::filter_records;
use super::parser::parse_records;
use super::zones::group_by_zone;
use crate::error::ReportError;
use crate::models::{
    Denylist, DeviceRecord, InventoryRow, LookupTable, Report, ReportRow, NOT_FOUND,
};

/// Default prefix of the inventory address code.
pub const DEFAULT_ADDRESS_PREFIX: &str = "=";

/// Options for the inventory projection.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Put in front of object code and address in [`InventoryRow::address_code`].
    pub address_prefix: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions {
            address_prefix: DEFAULT_ADDRESS_PREFIX.to_string(),
        }
    }
}

/// Process a raw export with default options.
///
/// # Arguments
/// * `raw` - Export file content, Latin-1
/// * `denylist` - Device types to leave out
/// * `lookup` - Article number and object code per device type
///
/// # Returns
/// * `Ok(Report)` - Zone summary and inventory rows
/// * `Err` - On a structural or address error, no partial report
pub fn process(
    raw: &[u8],
    denylist: &Denylist,
    lookup: &LookupTable,
) -> Result<Report, ReportError> {
    process_with(raw, denylist, lookup, &ReportOptions::default())
}

/// Process a raw export, see [`process`].
pub fn process_with(
    raw: &[u8],
    denylist: &Denylist,
    lookup: &LookupTable,
    options: &ReportOptions,
) -> Result<Report, ReportError> {
    log::info!("#Start process() {} bytes", raw.len());
    let records = filter_records(parse_records(raw)?, denylist);

    let summary = build_summary(&records)?;
    let inventory = build_inventory(&records, lookup, options);

    log::info!(
        "# Report has {} zones and {} inventory rows",
        summary.len(),
        inventory.len()
    );
    Ok(Report { summary, inventory })
}

/// One row per zone, first-seen order.
pub fn build_summary(records: &[DeviceRecord]) -> Result<Vec<ReportRow>, ReportError> {
    group_by_zone(records)
        .iter()
        .map(|group| -> Result<ReportRow, ReportError> {
            let sorted = group.sorted_addresses()?;
            let ranges = compact_addresses(&sorted);
            log::trace!(
                "zone {} {} addresses -> {} ranges",
                group.zone,
                sorted.len(),
                ranges.len()
            );
            Ok(ReportRow {
                zone: group.zone.clone(),
                compacted_addresses: render_ranges(&ranges),
            })
        })
        .collect()
}

/// One row per record, device type resolved against the lookup table.
pub fn build_inventory(
    records: &[DeviceRecord],
    lookup: &LookupTable,
    options: &ReportOptions,
) -> Vec<InventoryRow> {
    records
        .iter()
        .map(|record| {
            let (article_number, object_code) = match lookup.get(&record.device_type) {
                Some(entry) => (entry.article_number.as_str(), entry.object_code.as_str()),
                None => {
                    log::debug!(
                        "No lookup entry for device type {:?} at {}",
                        record.device_type,
                        record.address
                    );
                    (NOT_FOUND, NOT_FOUND)
                }
            };
            InventoryRow {
                quantity: 1,
                address_code: format!(
                    "{}{}{}",
                    options.address_prefix, object_code, record.address
                ),
                zone: record.zone.clone(),
                customer_text: record.customer_text.clone(),
                article_number: article_number.to_string(),
            }
        })
        .collect()
}
