//! FILENAME: pivot-engine/src/lib.rs
//! Pivot aggregation core for asset analytics.
//!
//! This crate turns a flat slice of inventory records into a summarized
//! two-dimensional table. It depends on `model` only for the record types;
//! everything else is self-contained.
//!
//! Layers:
//! - `definition`: Serializable configuration (what the pivot IS)
//! - `engine`: Grouping and aggregation (HOW we compute)
//! - `format`: Display formatting for computed values (HOW we print)
//! - `view`: Renderable output for the frontend (WHAT we display)

pub mod definition;
pub mod engine;
pub mod format;
pub mod view;

pub use definition::*;
pub use view::*;
pub use engine::{compute_pivot, PivotResult};
pub use format::{format_cell, format_value, raw_value};
