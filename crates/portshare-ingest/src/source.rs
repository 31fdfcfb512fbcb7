//! Homepass source seam
//!
//! `HomepassSource` is the boundary between the pipeline and whatever holds
//! the homepass data. The production implementation scans a directory of
//! `.geojson` files; tests substitute canned sources.

use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use portshare_core::{PortshareError, PortshareResult};
use portshare_types::SubdivisionInput;

use crate::geojson::count_features;
use crate::names::display_name;

/// Produces the subdivision inputs for one group.
///
/// Implementations are stateless and thread-safe.
pub trait HomepassSource: Send + Sync {
    /// Scans one group's data-source location.
    ///
    /// Fails with [`PortshareError::DataSourceUnavailable`] when the location
    /// does not exist and [`PortshareError::DataSourceEmpty`] when it holds
    /// no readable data. Both are recoverable: the caller skips the group.
    fn scan_group(&self, data_dir: &Path, group_name: &str)
        -> PortshareResult<Vec<SubdivisionInput>>;
}

/// Filesystem source reading `.geojson` files from a group directory.
///
/// One file is one subdivision: the display name comes from the file stem,
/// the homepass count from the feature count. A malformed file is logged
/// and skipped; only a directory with no usable file at all fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct GeoJsonSource;

impl HomepassSource for GeoJsonSource {
    fn scan_group(
        &self,
        data_dir: &Path,
        group_name: &str,
    ) -> PortshareResult<Vec<SubdivisionInput>> {
        let entries = fs::read_dir(data_dir).map_err(|_| {
            PortshareError::DataSourceUnavailable { path: data_dir.to_path_buf() }
        })?;

        let mut files: Vec<_> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("geojson"))
            })
            .collect();
        if files.is_empty() {
            return Err(PortshareError::DataSourceEmpty { path: data_dir.to_path_buf() });
        }
        // directory listing order is platform-defined; sort for determinism
        files.sort();

        let mut inputs = Vec::with_capacity(files.len());
        for path in &files {
            let homepass = match count_features(path) {
                Ok(count) => count,
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "skipping unreadable homepass file");
                    continue;
                }
            };
            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
            let name = display_name(stem, group_name);
            debug!(name = %name, homepass, "counted homepass file");
            inputs.push(SubdivisionInput::new(name, homepass as i64));
        }

        if inputs.is_empty() {
            return Err(PortshareError::DataSourceEmpty { path: data_dir.to_path_buf() });
        }
        Ok(inputs)
    }
}
