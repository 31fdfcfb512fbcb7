//! GeoJSON feature counting
//!
//! The engine only needs the number of homepass point features per file;
//! geometry is never interpreted. Accepted shapes: a FeatureCollection, a
//! bare array of features, or a single Feature/geometry object (count 1).

use serde_json::Value;
use std::fs;
use std::path::Path;

use portshare_core::{PortshareError, PortshareResult};

const GEOMETRY_TYPES: [&str; 7] = [
    "Point",
    "MultiPoint",
    "LineString",
    "MultiLineString",
    "Polygon",
    "MultiPolygon",
    "GeometryCollection",
];

/// Counts the homepass features in one GeoJSON file.
pub fn count_features(path: &Path) -> PortshareResult<u64> {
    let raw = fs::read_to_string(path)
        .map_err(|e| PortshareError::parse(path, format!("cannot read file: {e}")))?;
    let document: Value = serde_json::from_str(&raw)
        .map_err(|e| PortshareError::parse(path, format!("invalid JSON: {e}")))?;
    feature_count(&document)
        .ok_or_else(|| PortshareError::parse(path, "not a recognizable GeoJSON document"))
}

fn feature_count(document: &Value) -> Option<u64> {
    match document {
        Value::Array(features) => Some(features.len() as u64),
        Value::Object(map) => {
            if let Some(Value::Array(features)) = map.get("features") {
                return Some(features.len() as u64);
            }
            match map.get("type").and_then(Value::as_str) {
                Some("Feature") => Some(1),
                Some(kind) if GEOMETRY_TYPES.contains(&kind) => Some(1),
                _ => None,
            }
        }
        _ => None,
    }
}
