//! Parsing of the semicolon-delimited configuration export.
//!
//! Header contract (1-based rows):
//! - row 1: title, ignored
//! - row 2: marker row, first field must be [`MARKER_LITERAL`]
//! - rows 3..=12: metadata, skipped unconditionally
//! - row 13 onward: device rows
//!
//! Rows are counted as CSV records, so a quoted field holding a line break
//! stays one row.

use crate::error::{ReportError, MARKER_LITERAL};
use crate::input::decode;
use crate::models::DeviceRecord;

/// Row holding the marker literal.
pub const MARKER_ROW: usize = 2;
/// First device row.
pub const FIRST_DATA_ROW: usize = 13;
/// panel, zone, address and device type are required.
const MIN_FIELDS: usize = 4;

/// Parse a raw Latin-1 export into device records.
///
/// # Returns
/// * `Ok(Vec<DeviceRecord>)` - Records in file order, short rows dropped
/// * `Err(ReportError::StructuralFormat)` - If the marker row is missing or wrong
pub fn parse_records(raw: &[u8]) -> Result<Vec<DeviceRecord>, ReportError> {
    let text = decode(raw);
    let mut lines = split_rows(&text).into_iter();

    for _ in 1..MARKER_ROW {
        lines.next();
    }
    let found = lines
        .next()
        .and_then(|line| split_fields(line).into_iter().next())
        .map(|f| f.trim().to_string())
        .unwrap_or_default();
    if found != MARKER_LITERAL {
        log::warn!("Marker row {MARKER_ROW} found: {found:?}");
        return Err(ReportError::StructuralFormat { found });
    }

    for _ in MARKER_ROW + 1..FIRST_DATA_ROW {
        lines.next();
    }

    let mut records = Vec::new();
    let mut skipped = 0;
    for (i, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_record(&split_fields(line)) {
            Some(record) => records.push(record),
            None => {
                skipped += 1;
                log::debug!("Skip row {}: no usable fields {:?}", FIRST_DATA_ROW + i, line);
            }
        }
    }
    log::info!("Parsed {} device rows, skipped {}", records.len(), skipped);
    Ok(records)
}

/// Build a record from split fields.
///
/// `None` when required columns are missing or zone, address or device type is
/// blank, e.g. `;;;;;;` padding at the end of the export.
fn parse_record(fields: &[String]) -> Option<DeviceRecord> {
    if fields.len() < MIN_FIELDS {
        return None;
    }
    let zone = strip_quotes(&fields[1]);
    let address = strip_quotes(&fields[2]);
    let device_type = strip_quotes(&fields[3]);
    if zone.is_empty() || address.is_empty() || device_type.is_empty() {
        return None;
    }
    let optional = |i: usize| fields.get(i).map(|f| f.trim().to_string()).unwrap_or_default();
    Some(DeviceRecord {
        panel: fields[0].trim().to_string(),
        zone,
        address,
        device_type,
        input_function: optional(4),
        protocol: optional(5),
        customer_text: optional(6),
    })
}

fn strip_quotes(field: &str) -> String {
    field.trim().trim_matches('"').trim().to_string()
}

/// Split text into rows on line breaks outside quoted fields, dropping `\r`.
///
/// Quotes follow the same rule as [`split_fields`].
pub fn split_rows(text: &str) -> Vec<&str> {
    let mut rows = Vec::new();
    let mut row_start = 0;
    let mut in_quotes = false;
    let mut field_start = true;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek().map(|&(_, next)| next) == Some('"') {
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' if field_start => in_quotes = true,
            '\n' if !in_quotes => {
                let row = &text[row_start..i];
                rows.push(row.strip_suffix('\r').unwrap_or(row));
                row_start = i + 1;
                field_start = true;
                continue;
            }
            _ => {}
        }
        field_start = c == ';';
    }
    let row = &text[row_start..];
    rows.push(row.strip_suffix('\r').unwrap_or(row));
    rows
}

/// Split one line on `;`, honouring `"quoted; fields"` and `""` escapes.
///
/// A quote only opens a quoted section at the very start of a field, any other
/// quote is kept as text.
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' if field.is_empty() => in_quotes = true,
            ';' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    fields.push(field);
    fields
}
