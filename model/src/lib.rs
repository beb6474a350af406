//! FILENAME: model/src/lib.rs
//! Shared data model for the asset analytics workspace.
//!
//! This crate defines the shape of inventory data as it arrives from the
//! backing store: `AssetRecord` rows with optional related entities and
//! loosely-typed numeric fields. It has no computation of its own; the
//! pivot engine and the export layer both build on these types.

pub mod record;
pub mod value;

pub use record::{AssetRecord, Related};
pub use value::FieldValue;
