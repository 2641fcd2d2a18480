//! Export and configuration file readers.

use super::latin1;
use crate::error::ReportError;
use crate::models::{Denylist, LookupTable};
use std::path::Path;

/// Extensions accepted for uploaded exports.
const ALLOWED_EXTENSIONS: [&str; 1] = ["csv"];

/// True if the file name has an accepted extension (case-insensitive).
pub fn is_allowed_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| ALLOWED_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Read the raw bytes of a configuration export.
///
/// # Returns
/// * `Ok(Vec<u8>)` - File content, still Latin-1 encoded
/// * `Err` - If the extension is not `.csv` or the file can't be read
pub fn read_export(path: &Path) -> Result<Vec<u8>, ReportError> {
    if !is_allowed_file(path) {
        return Err(ReportError::UnsupportedFile {
            path: path.to_path_buf(),
        });
    }
    let bytes = std::fs::read(path).map_err(|e| ReportError::io(path, e))?;
    log::info!("Read export {} ({} bytes)", path.display(), bytes.len());
    Ok(bytes)
}

/// Read the invalid types file, one device type per line.
pub fn read_denylist(path: &Path) -> Result<Denylist, ReportError> {
    let text = read_latin1(path)?;
    let denylist = Denylist::from_lines(&text);
    log::info!(
        "Loaded {} invalid device types from {}",
        denylist.len(),
        path.display()
    );
    Ok(denylist)
}

/// Read the `deviceType;articleNumber;objectCode` lookup file.
pub fn read_lookup_table(path: &Path) -> Result<LookupTable, ReportError> {
    let text = read_latin1(path)?;
    let table = LookupTable::parse(&text);
    log::info!(
        "Loaded {} lookup entries from {}",
        table.len(),
        path.display()
    );
    Ok(table)
}

fn read_latin1(path: &Path) -> Result<String, ReportError> {
    let bytes = std::fs::read(path).map_err(|e| ReportError::io(path, e))?;
    Ok(latin1::decode(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_allowed_file() {
        assert!(is_allowed_file(Path::new("export.csv")));
        assert!(is_allowed_file(Path::new("dir/EXPORT.CSV")));
        assert!(!is_allowed_file(Path::new("export.txt")));
        assert!(!is_allowed_file(Path::new("csv")));
        assert!(!is_allowed_file(Path::new("export.csv.bak")));
    }

    #[test]
    fn test_read_export_rejects_extension() {
        let err = read_export(Path::new("src/tests/test_data/invalid_types.txt")).unwrap_err();
        assert!(matches!(err, ReportError::UnsupportedFile { .. }));
    }

    #[test]
    fn test_read_export_missing_file() {
        let err = read_export(Path::new("src/tests/test_data/does_not_exist.csv")).unwrap_err();
        assert!(matches!(err, ReportError::Io { .. }));
    }

    #[test]
    fn test_read_denylist() {
        let denylist = read_denylist(Path::new("src/tests/test_data/invalid_types.txt"))
            .expect("Error reading invalid types");
        assert_eq!(denylist.len(), 3);
        assert!(denylist.contains("IO-MODUL"));
        assert!(denylist.contains("SIRÉN"));
        assert!(denylist.contains("LARMDON"));
    }

    #[test]
    fn test_read_lookup_table() {
        let table = read_lookup_table(Path::new("src/tests/test_data/lookup.txt"))
            .expect("Error reading lookup table");
        assert_eq!(table.len(), 3);
        let entry = table.get("OPT-DET").expect("OPT-DET missing");
        assert_eq!(entry.article_number, "100-2001");
        assert_eq!(entry.object_code, "RD");
    }
}
