//! CSV output for the zone summary and inventory rows.
//!
//! Files use `;` as delimiter, `\r\n` line endings and Latin-1, matching the export.

use crate::error::ReportError;
use crate::models::Report;
use chrono::NaiveDate;
use itertools::Itertools;
use std::path::{Path, PathBuf};

/// File name of the zone summary.
pub const SUMMARY_FILE_NAME: &str = "sektionsforteckning.csv";

/// File name of the inventory rows for a given day.
pub fn inventory_file_name(date: NaiveDate) -> String {
    format!("inventory_{}.csv", date.format("%Y-%m-%d"))
}

/// Quote a field if it contains the delimiter, a quote or a line break.
pub fn escape_field(input: &str) -> String {
    if input.contains([';', '"', '\n', '\r']) {
        let escaped = input.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        input.to_string()
    }
}

/// Render rows as semicolon-separated text.
pub fn to_csv<R, F>(rows: R) -> String
where
    R: IntoIterator<Item = F>,
    F: IntoIterator<Item = String>,
{
    rows.into_iter()
        .map(|row| {
            let line = row.into_iter().map(|f| escape_field(&f)).join(";");
            line + "\r\n"
        })
        .collect()
}

/// Encode as Latin-1, characters outside the range become `?`.
pub fn encode_latin1(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| u8::try_from(c).unwrap_or(b'?'))
        .collect()
}

/// Write both report files into `output_dir`, creating it if needed.
///
/// # Returns
/// * `Ok((summary_path, inventory_path))` - The written files
pub fn write_report(
    report: &Report,
    output_dir: &Path,
    date: NaiveDate,
) -> Result<(PathBuf, PathBuf), ReportError> {
    std::fs::create_dir_all(output_dir).map_err(|e| ReportError::io(output_dir, e))?;

    let summary_path = output_dir.join(SUMMARY_FILE_NAME);
    let summary = to_csv(report.summary.iter().map(|r| r.fields()));
    write_latin1(&summary_path, &summary)?;
    log::info!(
        "Wrote {} zones to {}",
        report.summary.len(),
        summary_path.display()
    );

    let inventory_path = output_dir.join(inventory_file_name(date));
    let inventory = to_csv(report.inventory.iter().map(|r| r.fields()));
    write_latin1(&inventory_path, &inventory)?;
    log::info!(
        "Wrote {} inventory rows to {}",
        report.inventory.len(),
        inventory_path.display()
    );

    Ok((summary_path, inventory_path))
}

fn write_latin1(path: &Path, text: &str) -> Result<(), ReportError> {
    std::fs::write(path, encode_latin1(text)).map_err(|e| ReportError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InventoryRow, ReportRow};

    fn report() -> Report {
        Report {
            summary: vec![
                ReportRow {
                    zone: "12".to_string(),
                    compacted_addresses: "1.1-1.3, 1.7".to_string(),
                },
                ReportRow {
                    zone: "5".to_string(),
                    compacted_addresses: "1.9".to_string(),
                },
            ],
            inventory: vec![InventoryRow {
                quantity: 1,
                address_code: "=RD1.3".to_string(),
                zone: "12".to_string(),
                customer_text: "Kök; norr".to_string(),
                article_number: "100-2001".to_string(),
            }],
        }
    }

    #[test]
    fn test_escape_field() {
        assert_eq!(escape_field("1.1-1.3, 1.7"), "1.1-1.3, 1.7");
        assert_eq!(escape_field("a;b"), "\"a;b\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_field(""), "");
    }

    #[test]
    fn test_to_csv() {
        let csv = to_csv(report().summary.iter().map(|r| r.fields()));
        assert_eq!(csv, "12;1.1-1.3, 1.7\r\n5;1.9\r\n");
        let csv = to_csv(report().inventory.iter().map(|r| r.fields()));
        assert_eq!(csv, "1;=RD1.3;12;\"Kök; norr\";100-2001\r\n");
    }

    #[test]
    fn test_encode_latin1() {
        assert_eq!(encode_latin1("Kök"), vec![0x4B, 0xF6, 0x6B]);
        assert_eq!(encode_latin1("€1"), vec![b'?', b'1']);
    }

    #[test]
    fn test_inventory_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(inventory_file_name(date), "inventory_2024-03-01.csv");
    }

    #[test]
    fn test_write_report() {
        let dir = tempfile::tempdir().expect("Error creating temp dir");
        let output_dir = dir.path().join("processed_files");
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

        let (summary_path, inventory_path) =
            write_report(&report(), &output_dir, date).expect("Error writing report");

        assert_eq!(summary_path, output_dir.join(SUMMARY_FILE_NAME));
        assert_eq!(
            std::fs::read(&summary_path).unwrap(),
            b"12;1.1-1.3, 1.7\r\n5;1.9\r\n".to_vec()
        );
        let inventory = std::fs::read(&inventory_path).unwrap();
        assert_eq!(inventory, encode_latin1("1;=RD1.3;12;\"Kök; norr\";100-2001\r\n"));
    }
}
