//! Reading the export and the configuration files.
//!
//! This module handles everything that touches the file system on the way in:
//! - [`latin1`] - Decoding of the fixed Latin-1 text encoding
//! - [`files`] - Export, denylist and lookup table readers

mod files;
mod latin1;

// Re-export public functions
pub use files::{is_allowed_file, read_denylist, read_export, read_lookup_table};
pub use latin1::decode;
