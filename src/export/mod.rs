//! Export module for the expense dashboard
//!
//! Exports the current view in several formats:
//! - CSV: one row per expense (spreadsheet-compatible)
//! - JSON: expenses plus summary, machine-readable
//! - YAML: the same document, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_view_csv;
pub use json::{export_view_json, ViewExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_view_yaml;
