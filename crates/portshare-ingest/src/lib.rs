#![deny(warnings)]
#![allow(missing_docs)]
//! Homepass ingestion for the portshare allocation engine.
//!
//! This crate is the input adapter: it scans a group's data directory for
//! GeoJSON homepass files, counts point features per subdivision, normalizes
//! subdivision display names, and drives whole-plan runs through the
//! allocation engine. A failed group is skipped and logged, never fatal to
//! the run; only a plan where every group fails surfaces as an error.

/// GeoJSON feature counting
pub mod geojson;
/// Subdivision display-name normalization
pub mod names;
/// Plan pipeline: config × source → per-group allocation reports
pub mod pipeline;
/// The homepass source seam and its filesystem implementation
pub mod source;

pub use geojson::count_features;
pub use names::display_name;
pub use pipeline::{run_plan, GroupReport, GroupTotals, PlanOutcome};
pub use source::{GeoJsonSource, HomepassSource};
