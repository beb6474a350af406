//! FILENAME: pivot-engine/src/format.rs
//! Display formatting for aggregated values.
//!
//! The formatter and the aggregator match over the same `AggregationKind`,
//! so adding a kind without deciding its presentation fails to compile.
//! On-screen cells get human formatting; the CSV export bypasses this
//! module and uses `raw_value` so the file stays machine-re-parseable.

use crate::definition::AggregationKind;

/// Placeholder for a key pair no record resolved to.
///
/// An absent cell renders as an em-dash, never as "0": zero means "records
/// here, summing to nothing", the dash means "no records here at all".
pub const EMPTY_CELL: &str = "\u{2014}";

// ============================================================================
// VALUE FORMATTING
// ============================================================================

/// Format a computed value for on-screen display under `kind`.
pub fn format_value(value: f64, kind: AggregationKind) -> String {
    match kind {
        AggregationKind::Count => add_thousands_separator(&format!("{:.0}", value)),
        AggregationKind::SumBookValue
        | AggregationKind::SumAcqCost
        | AggregationKind::AvgBookValue => format_currency(value),
        AggregationKind::AvgEstimateLife => format!("{:.1} years", value),
    }
}

/// Format a matrix cell, with absent pairs rendered as `EMPTY_CELL`.
pub fn format_cell(value: Option<f64>, kind: AggregationKind) -> String {
    match value {
        Some(value) => format_value(value, kind),
        None => EMPTY_CELL.to_string(),
    }
}

/// Render a value for the CSV export: no separators, no symbols, integers
/// without a decimal point.
pub fn raw_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

// ============================================================================
// HELPERS
// ============================================================================

/// Currency with a dollar prefix, two decimals, and accounting-style
/// negatives: `-1234.5` renders as `($1,234.50)`.
fn format_currency(value: f64) -> String {
    let formatted = add_thousands_separator(&format!("{:.2}", value.abs()));
    if value < 0.0 {
        format!("(${})", formatted)
    } else {
        format!("${}", formatted)
    }
}

/// Insert thousands separators into a plain decimal string.
fn add_thousands_separator(s: &str) -> String {
    let parts: Vec<&str> = s.split('.').collect();
    let integer_part = parts[0];
    let decimal_part = parts.get(1);

    let negative = integer_part.starts_with('-');
    let digits: String = integer_part.chars().filter(|c| c.is_ascii_digit()).collect();

    let mut result = String::new();
    let len = digits.len();

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    if negative {
        result = format!("-{}", result);
    }

    if let Some(decimal) = decimal_part {
        result.push('.');
        result.push_str(decimal);
    }

    result
}

// ============================================================================
// TESTS
// ============================================================================
