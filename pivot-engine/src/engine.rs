//! FILENAME: pivot-engine/src/engine.rs
//! Grouping and aggregation - the computation core.
//!
//! One pass over the records builds nested row -> column -> bucket maps,
//! where a bucket is the list of record indices sharing one key pair.
//! Buckets are created lazily on first insert, so every bucket that exists
//! holds at least one record. A second pass reduces each bucket to a number
//! and freezes the result into `PivotResult`.
//!
//! The whole computation is a pure function of `(records, config)`: no I/O,
//! no shared state, and a fresh result allocation per call, so callers may
//! memoize on that pair.

use model::AssetRecord;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::definition::{AggregationKind, Dimension, PivotConfiguration, ValueField};

/// Indices into the source record slice sharing one (row, column) key pair.
///
/// Most buckets in real inventories are small; eight inline slots keep the
/// common case off the heap.
type RecordBucket = SmallVec<[u32; 8]>;

// ============================================================================
// GROUPING
// ============================================================================

/// Distribute record indices into row -> column -> bucket maps.
///
/// Single pass, insert-or-create per record. Every record lands in exactly
/// one bucket; missing dimension data resolves to the dimension's default
/// label rather than dropping the record.
fn group_records(
    records: &[AssetRecord],
    row_dimension: Dimension,
    column_dimension: Dimension,
) -> FxHashMap<String, FxHashMap<String, RecordBucket>> {
    let mut buckets: FxHashMap<String, FxHashMap<String, RecordBucket>> = FxHashMap::default();

    for (index, record) in records.iter().enumerate() {
        let row_key = row_dimension.resolve(record);
        let column_key = column_dimension.resolve(record);
        buckets
            .entry(row_key.to_owned())
            .or_default()
            .entry(column_key.to_owned())
            .or_default()
            .push(index as u32);
    }

    buckets
}

// ============================================================================
// AGGREGATION
// ============================================================================

fn sum_field(records: &[AssetRecord], bucket: &[u32], field: ValueField) -> f64 {
    bucket
        .iter()
        .map(|&index| field.extract(&records[index as usize]))
        .sum()
}

/// Reduce one bucket to its summary number.
///
/// Average kinds divide by the bucket length with no zero guard: buckets
/// only exist once a record has been inserted, so the length is at least 1.
fn aggregate_bucket(records: &[AssetRecord], bucket: &[u32], kind: AggregationKind) -> f64 {
    match kind {
        AggregationKind::Count => bucket.len() as f64,
        AggregationKind::SumBookValue => sum_field(records, bucket, ValueField::BookValue),
        AggregationKind::SumAcqCost => sum_field(records, bucket, ValueField::AcquisitionCost),
        AggregationKind::AvgBookValue => {
            sum_field(records, bucket, ValueField::BookValue) / bucket.len() as f64
        }
        AggregationKind::AvgEstimateLife => {
            sum_field(records, bucket, ValueField::EstimatedLife) / bucket.len() as f64
        }
    }
}

// ============================================================================
// PIVOT RESULT
// ============================================================================

/// The frozen output of one pivot computation.
///
/// `row_keys` and `column_keys` are sorted by Unicode code point and free
/// of duplicates. The matrix is sparse: a key pair with no records has no
/// entry, and readers treat it as 0 through `value_or_zero`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PivotResult {
    /// row key -> column key -> aggregated value. Only populated pairs.
    pub matrix: FxHashMap<String, FxHashMap<String, f64>>,

    /// Every distinct row key, sorted.
    pub row_keys: Vec<String>,

    /// Every distinct column key observed across all rows, sorted.
    pub column_keys: Vec<String>,
}

impl PivotResult {
    /// The result of pivoting zero records.
    pub fn empty() -> Self {
        PivotResult {
            matrix: FxHashMap::default(),
            row_keys: Vec::new(),
            column_keys: Vec::new(),
        }
    }

    /// True when the computation saw no records at all.
    pub fn is_empty(&self) -> bool {
        self.row_keys.is_empty()
    }

    /// The aggregated value for a populated key pair.
    pub fn value(&self, row_key: &str, column_key: &str) -> Option<f64> {
        self.matrix.get(row_key)?.get(column_key).copied()
    }

    /// The aggregated value with absent pairs read as 0.
    pub fn value_or_zero(&self, row_key: &str, column_key: &str) -> f64 {
        self.value(row_key, column_key).unwrap_or(0.0)
    }

    /// Sum of one row across all column keys.
    ///
    /// Totals are plain matrix sums regardless of aggregation kind, so a
    /// totals cell over average cells is a sum of averages, never a
    /// re-average.
    pub fn row_total(&self, row_key: &str) -> f64 {
        self.column_keys
            .iter()
            .map(|column_key| self.value_or_zero(row_key, column_key))
            .sum()
    }

    /// Sum of one column across all row keys.
    pub fn column_total(&self, column_key: &str) -> f64 {
        self.row_keys
            .iter()
            .map(|row_key| self.value_or_zero(row_key, column_key))
            .sum()
    }

    /// Sum of every cell in the matrix.
    pub fn grand_total(&self) -> f64 {
        self.row_keys.iter().map(|row_key| self.row_total(row_key)).sum()
    }
}

// ============================================================================
// COMPUTATION ENTRY POINT
// ============================================================================

/// Compute the pivot matrix for `records` under `config`.
pub fn compute_pivot(records: &[AssetRecord], config: &PivotConfiguration) -> PivotResult {
    let buckets = group_records(records, config.row_dimension, config.column_dimension);

    let mut matrix: FxHashMap<String, FxHashMap<String, f64>> =
        FxHashMap::with_capacity_and_hasher(buckets.len(), Default::default());
    let mut row_keys: Vec<String> = Vec::with_capacity(buckets.len());
    let mut column_key_set: FxHashSet<String> = FxHashSet::default();

    for (row_key, columns) in buckets {
        let mut cells: FxHashMap<String, f64> =
            FxHashMap::with_capacity_and_hasher(columns.len(), Default::default());
        for (column_key, bucket) in columns {
            let value = aggregate_bucket(records, &bucket, config.aggregation);
            if !column_key_set.contains(&column_key) {
                column_key_set.insert(column_key.clone());
            }
            cells.insert(column_key, value);
        }
        row_keys.push(row_key.clone());
        matrix.insert(row_key, cells);
    }

    // Sorting by String comparison is code-point order under UTF-8.
    row_keys.sort_unstable();
    let mut column_keys: Vec<String> = column_key_set.into_iter().collect();
    column_keys.sort_unstable();

    PivotResult {
        matrix,
        row_keys,
        column_keys,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use model::{FieldValue, Related};

    fn record(category: Option<&str>, status: Option<&str>) -> AssetRecord {
        let mut record = AssetRecord::new();
        record.category = category.map(Related::named);
        record.status = status.map(Related::named);
        record
    }

    /// Four records over category x status with one uncategorized row.
    fn sample_records() -> Vec<AssetRecord> {
        vec![
            record(Some("Laptop"), Some("Available")),
            record(Some("Laptop"), Some("Assigned")),
            record(Some("Monitor"), Some("Available")),
            record(None, Some("Available")),
        ]
    }

    fn count_config() -> PivotConfiguration {
        PivotConfiguration::new(Dimension::Category, Dimension::Status, AggregationKind::Count)
    }

    #[test]
    fn test_count_matrix() {
        let result = compute_pivot(&sample_records(), &count_config());

        assert_eq!(result.row_keys, vec!["Laptop", "Monitor", "Uncategorized"]);
        assert_eq!(result.column_keys, vec!["Assigned", "Available"]);

        assert_eq!(result.value("Laptop", "Available"), Some(1.0));
        assert_eq!(result.value("Laptop", "Assigned"), Some(1.0));
        assert_eq!(result.value("Monitor", "Available"), Some(1.0));
        assert_eq!(result.value("Uncategorized", "Available"), Some(1.0));

        // Unpopulated pairs are absent from the matrix and read as 0.
        assert_eq!(result.value("Monitor", "Assigned"), None);
        assert_eq!(result.value_or_zero("Monitor", "Assigned"), 0.0);

        assert_eq!(result.grand_total(), 4.0);
    }

    #[test]
    fn test_sum_with_junk_values() {
        let mut records = sample_records();
        records[0].acquisition_cost = FieldValue::Number(100.0);
        records[1].acquisition_cost = FieldValue::Number(200.0);
        records[2].acquisition_cost = FieldValue::Number(300.0);
        records[3].acquisition_cost = FieldValue::Text("bad".into());

        let config = PivotConfiguration::new(
            Dimension::Category,
            Dimension::Status,
            AggregationKind::SumAcqCost,
        );
        let result = compute_pivot(&records, &config);

        // The junk record still occupies its bucket, contributing 0.
        assert_eq!(result.row_total("Laptop"), 300.0);
        assert_eq!(result.row_total("Monitor"), 300.0);
        assert_eq!(result.row_total("Uncategorized"), 0.0);
        assert_eq!(result.value("Uncategorized", "Available"), Some(0.0));
        assert_eq!(result.grand_total(), 600.0);
    }

    #[test]
    fn test_average_divides_by_bucket_size() {
        let mut a = record(Some("Laptop"), Some("Available"));
        a.estimated_life_years = FieldValue::Number(3.0);
        let mut b = record(Some("Laptop"), Some("Available"));
        b.estimated_life_years = FieldValue::Number(5.0);

        let config = PivotConfiguration::new(
            Dimension::Category,
            Dimension::Status,
            AggregationKind::AvgEstimateLife,
        );
        let result = compute_pivot(&[a, b], &config);
        assert_eq!(result.value("Laptop", "Available"), Some(4.0));
    }

    #[test]
    fn test_average_counts_junk_as_zero_member() {
        // Three records, one with an unparseable book value: the average
        // divides by 3, not 2.
        let mut records = vec![
            record(Some("Laptop"), Some("Available")),
            record(Some("Laptop"), Some("Available")),
            record(Some("Laptop"), Some("Available")),
        ];
        records[0].book_value = FieldValue::Number(100.0);
        records[1].book_value = FieldValue::Number(200.0);
        records[2].book_value = FieldValue::Text("n/a".into());

        let config = PivotConfiguration::new(
            Dimension::Category,
            Dimension::Status,
            AggregationKind::AvgBookValue,
        );
        let result = compute_pivot(&records, &config);
        assert_eq!(result.value("Laptop", "Available"), Some(100.0));
    }

    #[test]
    fn test_empty_input() {
        let result = compute_pivot(&[], &count_config());
        assert!(result.is_empty());
        assert!(result.row_keys.is_empty());
        assert!(result.column_keys.is_empty());
        assert_eq!(result.grand_total(), 0.0);
        assert_eq!(result, PivotResult::empty());
    }

    #[test]
    fn test_grouping_completeness() {
        // Sum of count cells equals the input length: no record dropped
        // or duplicated by grouping.
        let records = sample_records();
        for row in Dimension::ALL {
            for column in Dimension::ALL {
                let config = PivotConfiguration::new(row, column, AggregationKind::Count);
                let result = compute_pivot(&records, &config);
                assert_eq!(result.grand_total(), records.len() as f64);
            }
        }
    }

    #[test]
    fn test_totals_commutativity() {
        let mut records = sample_records();
        for (index, record) in records.iter_mut().enumerate() {
            record.book_value = FieldValue::Number(100.0 * (index as f64 + 1.0));
        }

        for kind in AggregationKind::ALL {
            let config =
                PivotConfiguration::new(Dimension::Category, Dimension::Status, kind);
            let result = compute_pivot(&records, &config);

            let by_rows: f64 = result
                .row_keys
                .iter()
                .map(|row_key| result.row_total(row_key))
                .sum();
            let by_columns: f64 = result
                .column_keys
                .iter()
                .map(|column_key| result.column_total(column_key))
                .sum();

            assert!((by_rows - result.grand_total()).abs() < 1e-9);
            assert!((by_columns - result.grand_total()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_idempotence() {
        let records = sample_records();
        let config = count_config();
        assert_eq!(
            compute_pivot(&records, &config),
            compute_pivot(&records, &config)
        );
    }

    #[test]
    fn test_default_label_stability() {
        // A record missing the active row dimension always lands under the
        // documented fallback, never under an empty key.
        let records = vec![AssetRecord::new()];
        for row in Dimension::ALL {
            let config = PivotConfiguration::new(row, Dimension::Status, AggregationKind::Count);
            let result = compute_pivot(&records, &config);
            assert_eq!(result.row_keys, vec![row.default_label()]);
            assert!(!result.row_keys.iter().any(|key| key.is_empty()));
        }
    }

    #[test]
    fn test_same_dimension_on_both_axes() {
        // category x category degenerates to a diagonal matrix.
        let records = sample_records();
        let config = PivotConfiguration::new(
            Dimension::Category,
            Dimension::Category,
            AggregationKind::Count,
        );
        let result = compute_pivot(&records, &config);

        assert_eq!(result.row_keys, result.column_keys);
        assert_eq!(result.value("Laptop", "Laptop"), Some(2.0));
        assert_eq!(result.value("Laptop", "Monitor"), None);
        assert_eq!(result.grand_total(), 4.0);
    }

    #[test]
    fn test_duplicate_key_names_collapse() {
        // Two distinct vendors sharing a display name share a group.
        let mut a = AssetRecord::new();
        a.vendor = Some(Related { id: Some(1), name: Some("Globex".into()) });
        let mut b = AssetRecord::new();
        b.vendor = Some(Related { id: Some(2), name: Some("Globex".into()) });

        let config =
            PivotConfiguration::new(Dimension::Vendor, Dimension::Status, AggregationKind::Count);
        let result = compute_pivot(&[a, b], &config);
        assert_eq!(result.row_keys, vec!["Globex"]);
        assert_eq!(result.value("Globex", "Unknown"), Some(2.0));
    }

    #[test]
    fn test_key_order_is_code_point_order() {
        let records = vec![
            record(Some("zebra"), Some("Active")),
            record(Some("Apple"), Some("Active")),
            record(Some("apple"), Some("Active")),
            record(Some("Zebra"), Some("Active")),
        ];
        let result = compute_pivot(&records, &count_config());
        // Uppercase sorts before lowercase by code point.
        assert_eq!(result.row_keys, vec!["Apple", "Zebra", "apple", "zebra"]);
    }
}
