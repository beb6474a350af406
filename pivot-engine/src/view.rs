//! FILENAME: pivot-engine/src/view.rs
//! Pivot view - renderable output for the frontend.
//!
//! This module turns a `PivotResult` into a flat table structure the panel
//! can render without touching the matrix itself: ordered column headers,
//! one row per row key, and an optional totals band. Every cell carries
//! both the raw value and its pre-formatted display string.

use serde::{Deserialize, Serialize};

use crate::definition::PivotConfiguration;
use crate::engine::PivotResult;
use crate::format::{format_cell, format_value};

/// Header label of the totals row and column.
pub const TOTAL_LABEL: &str = "Total";

// ============================================================================
// VIEW CELLS
// ============================================================================

/// What a view cell represents, mostly a styling hint for the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PivotCellKind {
    /// Aggregated value for one (row, column) key pair.
    Data,
    /// Sum of one body row.
    RowTotal,
    /// Sum of one body column.
    ColumnTotal,
    /// Sum of the whole matrix.
    GrandTotal,
}

/// A single cell in the rendered table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PivotViewCell {
    /// Raw value, `None` for a key pair no record resolved to.
    pub value: Option<f64>,

    /// Pre-formatted display string; absent values render as an em-dash.
    pub formatted: String,

    pub kind: PivotCellKind,
}

impl PivotViewCell {
    /// Data cell, formatted under the configured aggregation.
    pub fn data(value: Option<f64>, config: &PivotConfiguration) -> Self {
        PivotViewCell {
            value,
            formatted: format_cell(value, config.aggregation),
            kind: PivotCellKind::Data,
        }
    }

    /// Totals cell. Totals always hold a value, even if it is 0.
    pub fn total(value: f64, kind: PivotCellKind, config: &PivotConfiguration) -> Self {
        PivotViewCell {
            value: Some(value),
            formatted: format_value(value, config.aggregation),
            kind,
        }
    }
}

/// One rendered row: a header label plus its cells in column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PivotViewRow {
    pub label: String,
    pub cells: Vec<PivotViewCell>,
    pub is_totals_row: bool,
}

// ============================================================================
// TABLE VIEW
// ============================================================================

/// The fully rendered pivot table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PivotTableView {
    /// Corner header, the row dimension's label.
    pub corner_label: String,

    /// Caption for the value area, the aggregation's label.
    pub value_caption: String,

    /// Column headers in display order, with `TOTAL_LABEL` appended when
    /// totals are shown and the result is non-empty.
    pub column_headers: Vec<String>,

    /// Body rows in row-key order, the totals row last when shown.
    pub rows: Vec<PivotViewRow>,
}

impl PivotTableView {
    /// True when there is nothing to draw but a "no data" state.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Build the renderable table for `result` under `config`.
///
/// An empty result produces headers only and never a totals band, whatever
/// `show_totals` says.
pub fn build_view(result: &PivotResult, config: &PivotConfiguration) -> PivotTableView {
    let with_totals = config.show_totals && !result.is_empty();

    let mut column_headers = result.column_keys.clone();
    if with_totals {
        column_headers.push(TOTAL_LABEL.to_string());
    }

    let mut rows = Vec::with_capacity(result.row_keys.len() + 1);
    for row_key in &result.row_keys {
        let mut cells: Vec<PivotViewCell> = result
            .column_keys
            .iter()
            .map(|column_key| PivotViewCell::data(result.value(row_key, column_key), config))
            .collect();
        if with_totals {
            cells.push(PivotViewCell::total(
                result.row_total(row_key),
                PivotCellKind::RowTotal,
                config,
            ));
        }
        rows.push(PivotViewRow {
            label: row_key.clone(),
            cells,
            is_totals_row: false,
        });
    }

    if with_totals {
        let mut cells: Vec<PivotViewCell> = result
            .column_keys
            .iter()
            .map(|column_key| {
                PivotViewCell::total(
                    result.column_total(column_key),
                    PivotCellKind::ColumnTotal,
                    config,
                )
            })
            .collect();
        cells.push(PivotViewCell::total(
            result.grand_total(),
            PivotCellKind::GrandTotal,
            config,
        ));
        rows.push(PivotViewRow {
            label: TOTAL_LABEL.to_string(),
            cells,
            is_totals_row: true,
        });
    }

    PivotTableView {
        corner_label: config.row_dimension.label().to_string(),
        value_caption: config.aggregation.label().to_string(),
        column_headers,
        rows,
    }
}

// ============================================================================
// TESTS
// ============================================================================
