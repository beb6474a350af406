//! FILENAME: model/src/value.rs
//! Loosely-typed field values.
//!
//! Inventory payloads carry numeric columns as numbers, numeric strings,
//! junk strings, or nothing at all, depending on which import path created
//! the row. `FieldValue` captures each shape as-is and funnels them all
//! through a single coercion rule.

use serde::{Deserialize, Serialize};

// ============================================================================
// FIELD VALUE
// ============================================================================

/// A raw field value as deserialized from a record payload.
///
/// Untagged: a JSON number becomes `Number`, a JSON string becomes `Text`
/// (even when it looks numeric), a JSON bool becomes `Boolean`, and `null`
/// or an absent field becomes `Empty`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
    Boolean(bool),
    Empty,
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Empty
    }
}

impl FieldValue {
    /// Numeric reading of this value, if it has one.
    ///
    /// Text coerces only when the whole trimmed string parses as a number:
    /// `"300.50"` does, `"12abc"` and `""` do not. Booleans never coerce.
    /// Non-finite numbers count as absent.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) if n.is_finite() => Some(*n),
            FieldValue::Number(_) => None,
            FieldValue::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            FieldValue::Boolean(_) => None,
            FieldValue::Empty => None,
        }
    }

    /// Numeric reading with malformed input flattened to zero.
    ///
    /// Aggregation call sites use this: a junk value contributes nothing
    /// to a sum, but the record still counts toward its bucket.
    pub fn numeric_or_zero(&self) -> f64 {
        self.as_number().unwrap_or(0.0)
    }

    /// True when the value is structurally absent (`null` or missing field).
    pub fn is_empty(&self) -> bool {
        matches!(self, FieldValue::Empty)
    }
}

// ============================================================================
// TESTS
// ============================================================================
