//! Device record parsed from a configuration export row.

use serde::Serialize;

/// A single device row from the export, column order as in the file.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct DeviceRecord {
    /// Fire/intrusion panel the device is wired to.
    pub panel: String,
    /// Zone ("sektion") the device reports into.
    pub zone: String,
    /// Dotted address, `<loop>.<position>`.
    pub address: String,
    /// Device type code, matched against the denylist and lookup table.
    pub device_type: String,
    pub input_function: String,
    pub protocol: String,
    /// Free text entered by the installer, usually the room name.
    pub customer_text: String,
}
