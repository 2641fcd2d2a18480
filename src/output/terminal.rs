//! Terminal output utilities.
//!
//! Provides formatting helpers and the colored summary table.

use crate::models::{Denylist, Report};
use colored::Colorize;

/// Format a value as a quoted, left-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted string padded to `width`
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let quoted = format!("\"{}\"", value.to_string());
    // pad on chars, not bytes, zone names may hold å/ä/ö
    let len = quoted.chars().count();
    if len >= width {
        quoted
    } else {
        format!("{quoted}{}", " ".repeat(width - len))
    }
}

/// Print the zone summary to stdout.
pub fn print_summary(report: &Report) {
    let width = report
        .summary
        .iter()
        .map(|r| r.zone.chars().count() + 2)
        .max()
        .unwrap_or(0)
        .max(8);

    println!("{} {}", format_field("Sektion", width).bold(), "Adresser".bold());
    for row in &report.summary {
        println!(
            "{} {}",
            format_field(&row.zone, width).cyan(),
            row.compacted_addresses
        );
    }
    println!(
        "#{}# {} zones, {} devices",
        "DONE".on_green(),
        report.summary.len(),
        report.inventory.len()
    );
}

/// Print the invalid device types, one per line.
pub fn print_denylist(denylist: &Denylist) {
    println!("{} ({})", "Invalid device types".bold(), denylist.len());
    for device_type in denylist.iter() {
        println!("  - {device_type}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("12", 8), "\"12\"    ");
    }

    #[test]
    fn test_format_field_exact() {
        assert_eq!(format_field("test", 6), "\"test\"");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("long_value", 5), "\"long_value\"");
    }

    #[test]
    fn test_format_field_non_ascii() {
        assert_eq!(format_field("Kök", 7), "\"Kök\"  ");
    }

    #[test]
    fn test_format_field_number() {
        assert_eq!(format_field(42, 6), "\"42\"  ");
    }
}
