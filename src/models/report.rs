//! Output rows of the pipeline.

use serde::Serialize;

/// One zone of the summary ("sektionsförteckning").
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub zone: String,
    /// Compacted addresses, e.g. `1.1-1.4, 1.9`.
    pub compacted_addresses: String,
}

impl ReportRow {
    /// Column values in file order.
    pub fn fields(&self) -> Vec<String> {
        vec![self.zone.clone(), self.compacted_addresses.clone()]
    }
}

/// One device for the inventory import.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct InventoryRow {
    /// Always 1, one row per device.
    pub quantity: u32,
    /// Prefix, object code and raw address concatenated.
    pub address_code: String,
    pub zone: String,
    pub customer_text: String,
    pub article_number: String,
}

impl InventoryRow {
    /// Column values in file order.
    pub fn fields(&self) -> Vec<String> {
        vec![
            self.quantity.to_string(),
            self.address_code.clone(),
            self.zone.clone(),
            self.customer_text.clone(),
            self.article_number.clone(),
        ]
    }
}

/// Both projections of one processed export.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub summary: Vec<ReportRow>,
    pub inventory: Vec<InventoryRow>,
}
