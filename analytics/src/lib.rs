//! FILENAME: analytics/src/lib.rs
//! Boundary layer for the asset pivot panel.
//!
//! The frontend talks to this crate and nothing below it: requests arrive
//! as loosely-typed DTOs, get parsed into the engine's closed configuration
//! types, and leave again as render-ready responses. Unknown dimension or
//! aggregation tokens fail the request here; past this layer the
//! configuration is a closed enum and cannot be wrong.

pub mod convert;
pub mod operations;
pub mod types;

pub use operations::{compute_pivot_table, export_pivot_csv, panel_options};
pub use types::{
    OptionItem, PanelOptions, PivotCellData, PivotExportResponse, PivotQueryRequest,
    PivotRowData, PivotTableResponse,
};
