//! FILENAME: model/src/record.rs
//! Inventory records and their related entities.
//!
//! `AssetRecord` mirrors the row shape the backing store serves: a few
//! identity fields, one optional related entity per reference column, and
//! loosely-typed numeric columns. Every field is optional because list
//! endpoints routinely omit whatever a row does not have.

use crate::value::FieldValue;
use serde::{Deserialize, Serialize};

// ============================================================================
// RELATED ENTITY
// ============================================================================

/// A related entity reference (category, status label, branch, vendor,
/// assigned employee) as embedded in a record payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Related {
    #[serde(default)]
    pub id: Option<u64>,

    #[serde(default)]
    pub name: Option<String>,
}

impl Related {
    /// Reference with a display name and no id. Mostly useful in tests
    /// and fixtures; real payloads carry both.
    pub fn named(name: impl Into<String>) -> Self {
        Related {
            id: None,
            name: Some(name.into()),
        }
    }
}

// ============================================================================
// ASSET RECORD
// ============================================================================

/// One inventory row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetRecord {
    #[serde(default)]
    pub id: Option<u64>,

    #[serde(default)]
    pub asset_tag: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub category: Option<Related>,

    #[serde(default)]
    pub status: Option<Related>,

    #[serde(default)]
    pub branch: Option<Related>,

    #[serde(default)]
    pub vendor: Option<Related>,

    #[serde(default)]
    pub employee: Option<Related>,

    /// Purchase price. Arrives as a number, a numeric string, or junk.
    #[serde(default)]
    pub acquisition_cost: FieldValue,

    /// Current depreciated value.
    #[serde(default)]
    pub book_value: FieldValue,

    /// Expected service life in years.
    #[serde(default)]
    pub estimated_life_years: FieldValue,
}

impl AssetRecord {
    /// A record with every field absent.
    pub fn new() -> Self {
        Self::default()
    }
}

// ============================================================================
// TESTS
// ============================================================================
