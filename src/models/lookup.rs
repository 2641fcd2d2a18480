//! Read-only configuration injected into the pipeline.
//!
//! Both tables are loaded once by the application and only ever borrowed
//! by the processing code.

use crate::processing::split_fields;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Placeholder for article number and object code when a device type has no lookup entry.
pub const NOT_FOUND: &str = "Not Found";

/// Device types excluded from the report ("invalid types").
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Denylist {
    /// File order, without duplicates.
    types: Vec<String>,
    index: HashSet<String>,
}

impl Denylist {
    pub fn new() -> Denylist {
        Denylist::default()
    }

    /// Build from text with one device type per line. Blank lines are ignored.
    pub fn from_lines(text: &str) -> Denylist {
        text.lines().collect()
    }

    /// Exact match on the trimmed device type.
    pub fn contains(&self, device_type: &str) -> bool {
        self.index.contains(device_type.trim())
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Denylisted types in file order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Denylist {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut denylist = Denylist::default();
        for t in iter {
            let t = t.as_ref().trim();
            if !t.is_empty() && denylist.index.insert(t.to_string()) {
                denylist.types.push(t.to_string());
            }
        }
        denylist
    }
}

/// Inventory identifiers for one device type.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LookupEntry {
    pub article_number: String,
    pub object_code: String,
}

/// Device type to inventory identifiers.
#[derive(Debug, Clone, Default)]
pub struct LookupTable {
    entries: HashMap<String, LookupEntry>,
}

impl LookupTable {
    pub fn new() -> LookupTable {
        LookupTable::default()
    }

    /// Parse `deviceType;articleNumber;objectCode` lines.
    ///
    /// Lines with fewer than three fields are skipped, later duplicates win.
    pub fn parse(text: &str) -> LookupTable {
        let mut table = LookupTable::new();
        for (i, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let fields: Vec<String> = split_fields(line)
                .iter()
                .map(|f| f.trim().trim_matches('"').trim().to_string())
                .collect();
            if fields.len() < 3 {
                log::warn!("Skip lookup line {}: expected 3 fields, got {:?}", i + 1, line);
                continue;
            }
            table.insert(&fields[0], &fields[1], &fields[2]);
        }
        log::debug!("Lookup table has {} device types", table.len());
        table
    }

    pub fn insert(&mut self, device_type: &str, article_number: &str, object_code: &str) {
        self.entries.insert(
            device_type.trim().to_string(),
            LookupEntry {
                article_number: article_number.to_string(),
                object_code: object_code.to_string(),
            },
        );
    }

    pub fn get(&self, device_type: &str) -> Option<&LookupEntry> {
        self.entries.get(device_type.trim())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
