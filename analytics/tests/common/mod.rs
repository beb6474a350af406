//! FILENAME: tests/common/mod.rs
//! Shared fixtures for analytics integration tests.

use analytics::PivotQueryRequest;
use model::{AssetRecord, FieldValue, Related};

/// A small office inventory with the usual data problems: missing
/// relations, a junk cost string, absent numeric fields.
pub struct InventoryFixture;

impl InventoryFixture {
    /// (category, status, branch, vendor, employee, acq_cost, book_value, life)
    ///
    /// Empty strings mean "absent". Numeric fields arrive as strings the
    /// way the store serves them; coercion is the engine's job.
    pub fn data() -> Vec<(
        &'static str, &'static str, &'static str, &'static str,
        &'static str, &'static str, &'static str, &'static str,
    )> {
        vec![
            ("Laptop",  "Assigned",  "Oslo",   "Lenovo", "Dana Reeve",  "1899.00", "1200.50", "5"),
            ("Laptop",  "Assigned",  "Berlin", "Lenovo", "Mila Kovacs", "1899.00", "1150.00", "5"),
            ("Laptop",  "Available", "Oslo",   "Dell",   "",            "1499.00", "980.25",  "4"),
            ("Desktop", "Available", "Berlin", "Dell",   "",            "1120.00", "640.00",  "6"),
            ("Desktop", "In Repair", "Oslo",   "HP",     "Jonas Berg",  "990.00",  "410.75",  "6"),
            ("Monitor", "Assigned",  "Lisbon", "Dell",   "Dana Reeve",  "340.00",  "190.00",  "7"),
            ("Monitor", "Available", "Lisbon", "",       "",            "bad",     "175.50",  "7"),
            ("Phone",   "Assigned",  "Berlin", "Apple",  "Mila Kovacs", "1099.00", "520.00",  "3"),
            ("Phone",   "Retired",   "Oslo",   "Apple",  "",            "899.00",  "",        "3"),
            ("",        "Available", "Lisbon", "",       "",            "",        "60.00",   ""),
            ("Printer", "In Repair", "Berlin", "HP",     "Jonas Berg",  "450.00",  "120.00",  "8"),
            ("Tablet",  "Assigned",  "Oslo",   "Apple",  "Dana Reeve",  "799.00",  "430.00",  "4"),
        ]
    }

    pub fn records() -> Vec<AssetRecord> {
        Self::data()
            .into_iter()
            .enumerate()
            .map(|(index, row)| {
                let (category, status, branch, vendor, employee, acq, book, life) = row;
                let mut record = AssetRecord::new();
                record.id = Some(index as u64 + 1);
                record.asset_tag = Some(format!("AST-{:04}", index + 1));
                record.category = relation(category);
                record.status = relation(status);
                record.branch = relation(branch);
                record.vendor = relation(vendor);
                record.employee = relation(employee);
                record.acquisition_cost = field(acq);
                record.book_value = field(book);
                record.estimated_life_years = field(life);
                record
            })
            .collect()
    }
}

fn relation(name: &str) -> Option<Related> {
    if name.is_empty() {
        None
    } else {
        Some(Related::named(name))
    }
}

fn field(raw: &str) -> FieldValue {
    if raw.is_empty() {
        FieldValue::Empty
    } else {
        FieldValue::Text(raw.to_string())
    }
}

/// Request with totals left at the default.
pub fn request(row: &str, column: &str, aggregation: &str) -> PivotQueryRequest {
    PivotQueryRequest {
        row_dimension: row.to_string(),
        column_dimension: column.to_string(),
        aggregation: aggregation.to_string(),
        show_totals: None,
    }
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {} but got {}",
        expected,
        actual
    );
}
