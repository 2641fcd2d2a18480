//! Device type filtering.
//!
//! Handles removing records whose device type is denylisted.

use crate::models::{Denylist, DeviceRecord};

/// Drop records with a denylisted device type, keeping order.
///
/// # Arguments
/// * `records` - Parsed device records
/// * `denylist` - Device types to exclude
///
/// # Returns
/// The remaining records
pub fn filter_records(mut records: Vec<DeviceRecord>, denylist: &Denylist) -> Vec<DeviceRecord> {
    let before = records.len();
    records.retain(|r| !denylist.contains(&r.device_type));
    log::debug!(
        "Removed {} of {} records with invalid device type",
        before - records.len(),
        before
    );
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(zone: &str, address: &str, device_type: &str) -> DeviceRecord {
        DeviceRecord {
            zone: zone.to_string(),
            address: address.to_string(),
            device_type: device_type.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_filter_records_keeps_order() {
        let records = vec![
            record("1", "1.1", "OPT"),
            record("1", "1.2", "SIREN"),
            record("2", "1.3", "HEAT"),
            record("1", "1.4", "OPT"),
        ];
        let denylist: Denylist = ["SIREN"].into_iter().collect();
        let result = filter_records(records, &denylist);
        let addresses: Vec<&str> = result.iter().map(|r| r.address.as_str()).collect();
        assert_eq!(addresses, vec!["1.1", "1.3", "1.4"]);
    }

    #[test]
    fn test_filter_records_empty_denylist() {
        let records = vec![record("1", "1.1", "OPT"), record("1", "1.2", "")];
        let result = filter_records(records.clone(), &Denylist::new());
        assert_eq!(result, records);
    }

    #[test]
    fn test_filter_records_all_removed() {
        let records = vec![record("1", "1.1", "OPT"), record("2", "1.2", "OPT")];
        let denylist: Denylist = ["OPT"].into_iter().collect();
        assert!(filter_records(records, &denylist).is_empty());
    }
}
