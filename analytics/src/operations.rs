//! FILENAME: analytics/src/operations.rs
//! Pivot panel operations: compute, export, picker options.

use chrono::{Local, NaiveDate};
use export::pivot_to_csv_string;
use model::AssetRecord;
use pivot_engine::{build_view, compute_pivot, AggregationKind, Dimension};

use crate::convert::{
    aggregation_to_string, dimension_to_string, request_to_configuration, view_to_response,
};
use crate::types::{
    OptionItem, PanelOptions, PivotExportResponse, PivotQueryRequest, PivotTableResponse,
};

// ============================================================================
// PANEL OPERATIONS
// ============================================================================

/// Compute the rendered pivot table for the panel.
///
/// Fails only on an unparseable request; data problems (missing relations,
/// junk numeric fields, zero records) all produce a normal response.
pub fn compute_pivot_table(
    records: &[AssetRecord],
    request: &PivotQueryRequest,
) -> Result<PivotTableResponse, String> {
    let config = request_to_configuration(request)?;
    log::debug!(
        target: "pivot",
        "computing {} x {} ({}) over {} records",
        dimension_to_string(config.row_dimension),
        dimension_to_string(config.column_dimension),
        aggregation_to_string(config.aggregation),
        records.len()
    );

    let result = compute_pivot(records, &config);
    let view = build_view(&result, &config);
    Ok(view_to_response(
        &view,
        result.row_keys.len(),
        result.column_keys.len(),
    ))
}

/// Serialize the pivot as a CSV download payload.
pub fn export_pivot_csv(
    records: &[AssetRecord],
    request: &PivotQueryRequest,
) -> Result<PivotExportResponse, String> {
    let config = request_to_configuration(request)?;
    let result = compute_pivot(records, &config);
    let content = pivot_to_csv_string(&result, &config).map_err(|e| e.to_string())?;
    let file_name = export_file_name(Local::now().date_naive());
    log::debug!(
        target: "pivot",
        "exported {} bytes as {}",
        content.len(),
        file_name
    );
    Ok(PivotExportResponse { file_name, content })
}

/// Download name for an export generated on `date`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("pivot-table-{}.csv", date.format("%Y-%m-%d"))
}

/// Options for the panel's dimension and aggregation pickers.
pub fn panel_options() -> PanelOptions {
    PanelOptions {
        dimensions: Dimension::ALL
            .into_iter()
            .map(|dimension| OptionItem {
                token: dimension_to_string(dimension),
                label: dimension.label().to_string(),
            })
            .collect(),
        aggregations: AggregationKind::ALL
            .into_iter()
            .map(|aggregation| OptionItem {
                token: aggregation_to_string(aggregation),
                label: aggregation.label().to_string(),
            })
            .collect(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
