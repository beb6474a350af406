//! FILENAME: analytics/src/types.rs
//! Request and response DTOs for the pivot panel.
//!
//! All DTOs serialize camelCase for the frontend. Requests carry plain
//! strings where the engine has enums; `convert` owns the translation.

use serde::{Deserialize, Serialize};

// ============================================================================
// REQUESTS
// ============================================================================

/// Pivot panel state as posted by the asset listing page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PivotQueryRequest {
    /// Dimension token for the row axis: "category", "status", "branch",
    /// "vendor" or "employee".
    pub row_dimension: String,

    /// Dimension token for the column axis.
    pub column_dimension: String,

    /// Aggregation token: "count", "sum_book_value", "sum_acq_cost",
    /// "avg_book_value" or "avg_estimate_life".
    pub aggregation: String,

    /// Whether to include the totals row and column. Defaults to true.
    pub show_totals: Option<bool>,
}

// ============================================================================
// RESPONSES
// ============================================================================

/// One cell of the rendered table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PivotCellData {
    /// Raw value, null for a key pair no record resolved to.
    pub value: Option<f64>,

    /// Display string, an em-dash for absent cells.
    pub formatted_value: String,

    /// "Data", "RowTotal", "ColumnTotal" or "GrandTotal".
    pub cell_type: String,
}

/// One rendered row with its header label.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PivotRowData {
    pub label: String,
    pub is_totals_row: bool,
    pub cells: Vec<PivotCellData>,
}

/// Response containing the rendered pivot table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PivotTableResponse {
    /// Corner header, the row dimension's display label.
    pub corner_label: String,

    /// Caption for the value area, the aggregation's display label.
    pub value_caption: String,

    /// Column headers in display order, "Total" last when totals are on.
    pub column_headers: Vec<String>,

    pub rows: Vec<PivotRowData>,

    /// Distinct row keys in the data area, totals excluded.
    pub row_count: usize,

    /// Distinct column keys in the data area, totals excluded.
    pub column_count: usize,
}

/// Response for the CSV download endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PivotExportResponse {
    /// Suggested download name, `pivot-table-<date>.csv`.
    pub file_name: String,

    /// The CSV payload.
    pub content: String,
}

// ============================================================================
// PICKER OPTIONS
// ============================================================================

/// A selectable token with its display label.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionItem {
    pub token: String,
    pub label: String,
}

/// Everything the panel's pickers need to render.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelOptions {
    pub dimensions: Vec<OptionItem>,
    pub aggregations: Vec<OptionItem>,
}

// ============================================================================
// TESTS
// ============================================================================
