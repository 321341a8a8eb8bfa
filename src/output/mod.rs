//! Output module for persisting the enriched listing
//!
//! The whole run produces a single JSON array that replaces the previous
//! file. There is no merging with earlier runs and no schema versioning.

mod json;

pub use json::{read_records, write_records};
