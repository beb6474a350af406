//! FILENAME: export/src/lib.rs
//! CSV serialization of pivot results.
//!
//! Writes a computed `PivotResult` as a comma-delimited table: header row,
//! one body row per row key, and an optional totals band. Cells hold raw
//! numbers (no currency symbols, no separators) so the file re-parses
//! cleanly; the on-screen formatting lives in the pivot engine's view
//! layer, not here.

mod csv_writer;
mod error;

pub use csv_writer::{pivot_to_csv_string, write_pivot_csv};
pub use error::ExportError;
