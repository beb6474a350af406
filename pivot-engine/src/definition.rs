//! FILENAME: pivot-engine/src/definition.rs
//! Pivot configuration - the serializable description of a computation.
//!
//! This module contains the types that DESCRIBE a pivot table. They are:
//! - Closed enums, so an unknown axis or aggregation cannot be represented
//!   past the request boundary
//! - Serializable, for persisting panel state and sending it over the wire
//! - Immutable snapshots of user intent

use model::AssetRecord;
use serde::{Deserialize, Serialize};

// ============================================================================
// DIMENSIONS
// ============================================================================

/// A grouping axis over inventory records.
///
/// Each dimension reads one related entity off the record. Records are
/// never dropped for missing data; resolution falls back to a
/// per-dimension default group instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Category,
    Status,
    Branch,
    Vendor,
    Employee,
}

impl Dimension {
    /// Every dimension, in display order.
    pub const ALL: [Dimension; 5] = [
        Dimension::Category,
        Dimension::Status,
        Dimension::Branch,
        Dimension::Vendor,
        Dimension::Employee,
    ];

    /// Axis label, used as the corner header of the table.
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Category => "Category",
            Dimension::Status => "Status",
            Dimension::Branch => "Branch",
            Dimension::Vendor => "Vendor",
            Dimension::Employee => "Employee",
        }
    }

    /// Group label for records with no usable name on this axis.
    ///
    /// The wording differs per dimension because these fallbacks surface
    /// directly as row and column headers.
    pub fn default_label(&self) -> &'static str {
        match self {
            Dimension::Category => "Uncategorized",
            Dimension::Status => "Unknown",
            Dimension::Branch => "Unassigned",
            Dimension::Vendor => "No Vendor",
            Dimension::Employee => "Unassigned",
        }
    }

    /// The group key for `record` on this axis.
    ///
    /// Never fails: a missing relation, a null name, or an empty name all
    /// resolve to `default_label`. Whitespace-only names count as present.
    pub fn resolve<'a>(&self, record: &'a AssetRecord) -> &'a str {
        let related = match self {
            Dimension::Category => record.category.as_ref(),
            Dimension::Status => record.status.as_ref(),
            Dimension::Branch => record.branch.as_ref(),
            Dimension::Vendor => record.vendor.as_ref(),
            Dimension::Employee => record.employee.as_ref(),
        };
        match related.and_then(|r| r.name.as_deref()) {
            Some(name) if !name.is_empty() => name,
            _ => self.default_label(),
        }
    }
}

// ============================================================================
// VALUE FIELDS
// ============================================================================

/// Numeric source column an aggregation reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueField {
    BookValue,
    AcquisitionCost,
    EstimatedLife,
}

impl ValueField {
    /// Numeric reading of this column on `record`, malformed input as zero.
    pub fn extract(&self, record: &AssetRecord) -> f64 {
        match self {
            ValueField::BookValue => record.book_value.numeric_or_zero(),
            ValueField::AcquisitionCost => record.acquisition_cost.numeric_or_zero(),
            ValueField::EstimatedLife => record.estimated_life_years.numeric_or_zero(),
        }
    }
}

// ============================================================================
// AGGREGATION
// ============================================================================

/// Supported reductions of a record bucket to a single number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregationKind {
    Count,
    SumBookValue,
    SumAcqCost,
    AvgBookValue,
    AvgEstimateLife,
}

impl Default for AggregationKind {
    fn default() -> Self {
        AggregationKind::Count
    }
}

impl AggregationKind {
    /// Every aggregation, in display order.
    pub const ALL: [AggregationKind; 5] = [
        AggregationKind::Count,
        AggregationKind::SumBookValue,
        AggregationKind::SumAcqCost,
        AggregationKind::AvgBookValue,
        AggregationKind::AvgEstimateLife,
    ];

    /// Caption shown above the value area of the panel.
    pub fn label(&self) -> &'static str {
        match self {
            AggregationKind::Count => "Asset Count",
            AggregationKind::SumBookValue => "Total Book Value",
            AggregationKind::SumAcqCost => "Total Acquisition Cost",
            AggregationKind::AvgBookValue => "Average Book Value",
            AggregationKind::AvgEstimateLife => "Average Estimated Life",
        }
    }

    /// The source column this aggregation reads, `None` for `Count`.
    pub fn value_field(&self) -> Option<ValueField> {
        match self {
            AggregationKind::Count => None,
            AggregationKind::SumBookValue | AggregationKind::AvgBookValue => {
                Some(ValueField::BookValue)
            }
            AggregationKind::SumAcqCost => Some(ValueField::AcquisitionCost),
            AggregationKind::AvgEstimateLife => Some(ValueField::EstimatedLife),
        }
    }

    /// True for the mean-producing kinds.
    pub fn is_average(&self) -> bool {
        matches!(
            self,
            AggregationKind::AvgBookValue | AggregationKind::AvgEstimateLife
        )
    }
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Immutable description of one pivot computation.
///
/// Row and column dimension may be equal; the result is then a diagonal
/// matrix, which the engine handles like any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PivotConfiguration {
    /// Dimension whose groups become rows.
    pub row_dimension: Dimension,

    /// Dimension whose groups become columns.
    pub column_dimension: Dimension,

    /// How each bucket is reduced to a number.
    pub aggregation: AggregationKind,

    /// Whether the view and the export carry a totals row and column.
    pub show_totals: bool,
}

impl PivotConfiguration {
    /// Configuration with totals enabled, the panel's default.
    pub fn new(row: Dimension, column: Dimension, aggregation: AggregationKind) -> Self {
        PivotConfiguration {
            row_dimension: row,
            column_dimension: column,
            aggregation,
            show_totals: true,
        }
    }
}

impl Default for PivotConfiguration {
    fn default() -> Self {
        PivotConfiguration::new(Dimension::Category, Dimension::Status, AggregationKind::Count)
    }
}

// ============================================================================
// TESTS
// ============================================================================
