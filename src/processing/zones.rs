//! Zone aggregation.
//!
//! Groups device records into their zone for the summary.

use crate::error::ReportError;
use crate::models::{Address, DeviceRecord};
use std::collections::HashMap;

/// Addresses of one zone in encounter order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneGroup {
    pub zone: String,
    pub addresses: Vec<String>,
}

impl ZoneGroup {
    pub fn new(zone: &str) -> ZoneGroup {
        ZoneGroup {
            zone: zone.to_string(),
            addresses: vec![],
        }
    }

    /// Parsed addresses sorted for compaction, numeric on the second segment.
    ///
    /// # Returns
    /// * `Ok(Vec<Address>)` - Sorted by (position, full string)
    /// * `Err(ReportError::SegmentParse)` - On the first malformed address
    pub fn sorted_addresses(&self) -> Result<Vec<Address>, ReportError> {
        let mut parsed = self
            .addresses
            .iter()
            .map(|a| {
                Address::parse(a).ok_or_else(|| ReportError::SegmentParse {
                    zone: self.zone.clone(),
                    address: a.clone(),
                })
            })
            .collect::<Result<Vec<Address>, ReportError>>()?;
        parsed.sort();
        Ok(parsed)
    }
}

/// Group records by zone, zones in first-seen order.
///
/// # Arguments
/// * `records` - Filtered device records
///
/// # Returns
/// One [`ZoneGroup`] per distinct zone
pub fn group_by_zone(records: &[DeviceRecord]) -> Vec<ZoneGroup> {
    let mut groups: Vec<ZoneGroup> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let i = *index.entry(record.zone.as_str()).or_insert_with(|| {
            groups.push(ZoneGroup::new(&record.zone));
            groups.len() - 1
        });
        groups[i].addresses.push(record.address.clone());
    }

    log::debug!("Grouped {} records into {} zones", records.len(), groups.len());
    groups
}
