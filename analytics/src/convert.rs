//! FILENAME: analytics/src/convert.rs
//! Translation between boundary DTOs and engine types.

use pivot_engine::{
    AggregationKind, Dimension, PivotConfiguration, PivotTableView, PivotViewCell,
};

use crate::types::{PivotCellData, PivotQueryRequest, PivotRowData, PivotTableResponse};

// ============================================================================
// TOKEN PARSING
// ============================================================================

/// Parse a dimension token from the panel.
///
/// Unknown tokens are a caller bug, not a data problem, so they fail the
/// request instead of silently defaulting.
pub fn dimension_from_string(s: &str) -> Result<Dimension, String> {
    match s.trim().to_lowercase().as_str() {
        "category" => Ok(Dimension::Category),
        "status" => Ok(Dimension::Status),
        "branch" => Ok(Dimension::Branch),
        "vendor" => Ok(Dimension::Vendor),
        "employee" => Ok(Dimension::Employee),
        _ => Err(format!("Unknown dimension: '{}'", s)),
    }
}

pub fn dimension_to_string(dimension: Dimension) -> String {
    match dimension {
        Dimension::Category => "category".to_string(),
        Dimension::Status => "status".to_string(),
        Dimension::Branch => "branch".to_string(),
        Dimension::Vendor => "vendor".to_string(),
        Dimension::Employee => "employee".to_string(),
    }
}

/// Parse an aggregation token from the panel.
pub fn aggregation_from_string(s: &str) -> Result<AggregationKind, String> {
    match s.trim().to_lowercase().as_str() {
        "count" => Ok(AggregationKind::Count),
        "sum_book_value" => Ok(AggregationKind::SumBookValue),
        "sum_acq_cost" => Ok(AggregationKind::SumAcqCost),
        "avg_book_value" | "avg" => Ok(AggregationKind::AvgBookValue),
        "avg_estimate_life" => Ok(AggregationKind::AvgEstimateLife),
        _ => Err(format!("Unknown aggregation: '{}'", s)),
    }
}

pub fn aggregation_to_string(aggregation: AggregationKind) -> String {
    match aggregation {
        AggregationKind::Count => "count".to_string(),
        AggregationKind::SumBookValue => "sum_book_value".to_string(),
        AggregationKind::SumAcqCost => "sum_acq_cost".to_string(),
        AggregationKind::AvgBookValue => "avg_book_value".to_string(),
        AggregationKind::AvgEstimateLife => "avg_estimate_life".to_string(),
    }
}

/// Build the engine configuration from a panel request.
pub fn request_to_configuration(request: &PivotQueryRequest) -> Result<PivotConfiguration, String> {
    Ok(PivotConfiguration {
        row_dimension: dimension_from_string(&request.row_dimension)?,
        column_dimension: dimension_from_string(&request.column_dimension)?,
        aggregation: aggregation_from_string(&request.aggregation)?,
        show_totals: request.show_totals.unwrap_or(true),
    })
}

// ============================================================================
// RESPONSE MAPPING
// ============================================================================

fn cell_to_data(cell: &PivotViewCell) -> PivotCellData {
    PivotCellData {
        value: cell.value,
        formatted_value: cell.formatted.clone(),
        cell_type: format!("{:?}", cell.kind),
    }
}

/// Flatten a rendered view into the panel response.
///
/// `row_count` and `column_count` describe the data area only; the totals
/// band never counts toward them.
pub fn view_to_response(
    view: &PivotTableView,
    row_count: usize,
    column_count: usize,
) -> PivotTableResponse {
    let rows: Vec<PivotRowData> = view
        .rows
        .iter()
        .map(|row| PivotRowData {
            label: row.label.clone(),
            is_totals_row: row.is_totals_row,
            cells: row.cells.iter().map(cell_to_data).collect(),
        })
        .collect();

    PivotTableResponse {
        corner_label: view.corner_label.clone(),
        value_caption: view.value_caption.clone(),
        column_headers: view.column_headers.clone(),
        rows,
        row_count,
        column_count,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_parsing() {
        assert_eq!(dimension_from_string("category"), Ok(Dimension::Category));
        assert_eq!(dimension_from_string(" Branch "), Ok(Dimension::Branch));
        assert_eq!(dimension_from_string("EMPLOYEE"), Ok(Dimension::Employee));
        assert!(dimension_from_string("warehouse").is_err());
        assert!(dimension_from_string("").is_err());
    }

    #[test]
    fn test_aggregation_parsing() {
        assert_eq!(aggregation_from_string("count"), Ok(AggregationKind::Count));
        assert_eq!(
            aggregation_from_string("sum_acq_cost"),
            Ok(AggregationKind::SumAcqCost)
        );
        assert_eq!(
            aggregation_from_string("avg"),
            Ok(AggregationKind::AvgBookValue)
        );
        assert!(aggregation_from_string("median").is_err());
    }

    #[test]
    fn test_tokens_round_trip() {
        for dimension in Dimension::ALL {
            let token = dimension_to_string(dimension);
            assert_eq!(dimension_from_string(&token), Ok(dimension));
        }
        for aggregation in AggregationKind::ALL {
            let token = aggregation_to_string(aggregation);
            assert_eq!(aggregation_from_string(&token), Ok(aggregation));
        }
    }

    #[test]
    fn test_request_to_configuration() {
        let request = PivotQueryRequest {
            row_dimension: "branch".into(),
            column_dimension: "status".into(),
            aggregation: "sum_book_value".into(),
            show_totals: None,
        };
        let config = request_to_configuration(&request).unwrap();
        assert_eq!(config.row_dimension, Dimension::Branch);
        assert_eq!(config.column_dimension, Dimension::Status);
        assert_eq!(config.aggregation, AggregationKind::SumBookValue);
        assert!(config.show_totals);

        let bad = PivotQueryRequest {
            row_dimension: "warehouse".into(),
            column_dimension: "status".into(),
            aggregation: "count".into(),
            show_totals: None,
        };
        let err = request_to_configuration(&bad).unwrap_err();
        assert!(err.contains("warehouse"));
    }
}
