//! Structured error handling for the portshare engine and adapters
//!
//! This module provides the error taxonomy shared by the engine, the
//! configuration layer and the ingest adapters. Engine input violations are
//! fatal to a single `allocate` call; data-source failures are recoverable
//! at the granularity of one group and must never abort a whole plan run.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for all portshare operations
#[derive(Error, Debug, Clone)]
pub enum PortshareError {
    /// Malformed engine parameters: negative counts or budget, non-positive
    /// capacity, fraction outside the unit interval. Never clamped.
    #[error("invalid input: {message}")]
    InvalidInput {
        message: String,
        parameter: &'static str,
    },

    /// Plan configuration schema violations
    #[error("configuration error: {message}")]
    Configuration {
        message: String,
        area: Option<String>,
        group: Option<String>,
    },

    /// The configured data directory for a group does not exist
    #[error("data source unavailable: {}", .path.display())]
    DataSourceUnavailable { path: PathBuf },

    /// The data directory exists but holds no readable .geojson files
    #[error("data source empty: no .geojson files in {}", .path.display())]
    DataSourceEmpty { path: PathBuf },

    /// A single data file could not be parsed
    #[error("parse error in {}: {message}", .path.display())]
    Parse { message: String, path: PathBuf },

    /// Every configured group failed to load; nothing to report
    #[error("no data available: every configured group failed to load")]
    NoData,
}

impl PortshareError {
    /// Error category for logging and metrics
    pub fn category(&self) -> &'static str {
        match self {
            PortshareError::InvalidInput { .. } => "invalid_input",
            PortshareError::Configuration { .. } => "configuration",
            PortshareError::DataSourceUnavailable { .. } => "data_source_unavailable",
            PortshareError::DataSourceEmpty { .. } => "data_source_empty",
            PortshareError::Parse { .. } => "parse",
            PortshareError::NoData => "no_data",
        }
    }

    /// Whether the surrounding system may skip the failing unit and continue.
    ///
    /// Data-source failures are scoped to one group (or one file) and the
    /// rest of the plan still renders; input and configuration errors need
    /// fixing and abort the call that raised them.
    pub fn is_recoverable(&self) -> bool {
        match self {
            PortshareError::InvalidInput { .. } => false,
            PortshareError::Configuration { .. } => false,
            PortshareError::DataSourceUnavailable { .. } => true,
            PortshareError::DataSourceEmpty { .. } => true,
            PortshareError::Parse { .. } => true,
            PortshareError::NoData => false,
        }
    }
}

/// Result type alias for portshare operations
pub type PortshareResult<T> = Result<T, PortshareError>;

/// Convenience constructors for common error scenarios
impl PortshareError {
    /// Create an invalid-input error naming the offending parameter
    pub fn invalid_input(parameter: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidInput { message: message.into(), parameter }
    }

    /// Create a configuration error without area/group context
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration { message: message.into(), area: None, group: None }
    }

    /// Create a configuration error scoped to one area and group
    pub fn configuration_in(
        area: impl Into<String>,
        group: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            area: Some(area.into()),
            group: Some(group.into()),
        }
    }

    /// Create a parse error for one data file
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse { message: message.into(), path: path.into() }
    }
}
