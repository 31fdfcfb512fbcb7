//! Plan configuration
//!
//! The plan maps area names to groups of subdivisions, each group carrying
//! the data directory holding its homepass files and the total port budget
//! available to it. The configuration is an explicit, validated structure
//! loaded at startup (JSON via serde), not a process-global literal.

use portshare_types::{
    AllocationParams, DEFAULT_OBTAINABLE_FRACTION, DEFAULT_UNIT_CAPACITY,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PortshareError, PortshareResult};

/// One group of subdivisions sharing a data directory and a port budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupConfig {
    /// Directory holding the group's homepass `.geojson` files
    pub data_dir: PathBuf,
    /// Total distribution ports available to the group
    pub total_budget: i64,
}

/// The full plan: engine parameters plus area → group configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanConfig {
    /// Homepasses served by one port
    #[serde(default = "default_unit_capacity")]
    pub unit_capacity: i64,
    /// Fraction of the serviceable market assumed obtainable
    #[serde(default = "default_obtainable_fraction")]
    pub obtainable_fraction: f64,
    /// Area name → group name → group configuration
    pub areas: BTreeMap<String, BTreeMap<String, GroupConfig>>,
}

fn default_unit_capacity() -> i64 {
    DEFAULT_UNIT_CAPACITY
}

fn default_obtainable_fraction() -> f64 {
    DEFAULT_OBTAINABLE_FRACTION
}

impl PlanConfig {
    /// Loads and validates a plan from a JSON file.
    pub fn from_json_file(path: &Path) -> PortshareResult<Self> {
        let raw = fs::read_to_string(path).map_err(|e| {
            PortshareError::configuration(format!("cannot read {}: {e}", path.display()))
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|e| {
            PortshareError::configuration(format!("malformed plan {}: {e}", path.display()))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the plan schema: at least one area, non-empty names and data
    /// directories, non-negative budgets, positive capacity, fraction in
    /// `[0, 1]`.
    pub fn validate(&self) -> PortshareResult<()> {
        if self.unit_capacity <= 0 {
            return Err(PortshareError::configuration(format!(
                "unit capacity must be positive, got {}",
                self.unit_capacity
            )));
        }
        if !self.obtainable_fraction.is_finite()
            || !(0.0..=1.0).contains(&self.obtainable_fraction)
        {
            return Err(PortshareError::configuration(format!(
                "obtainable fraction must be within [0, 1], got {}",
                self.obtainable_fraction
            )));
        }
        if self.areas.is_empty() {
            return Err(PortshareError::configuration("no areas configured"));
        }
        for (area, groups) in &self.areas {
            if area.trim().is_empty() {
                return Err(PortshareError::configuration("empty area name"));
            }
            if groups.is_empty() {
                return Err(PortshareError::Configuration {
                    message: "area has no groups".to_string(),
                    area: Some(area.clone()),
                    group: None,
                });
            }
            for (group, cfg) in groups {
                if group.trim().is_empty() {
                    return Err(PortshareError::Configuration {
                        message: "empty group name".to_string(),
                        area: Some(area.clone()),
                        group: None,
                    });
                }
                if cfg.data_dir.as_os_str().is_empty() {
                    return Err(PortshareError::configuration_in(
                        area.as_str(),
                        group.as_str(),
                        "empty data directory",
                    ));
                }
                if cfg.total_budget < 0 {
                    return Err(PortshareError::configuration_in(
                        area.as_str(),
                        group.as_str(),
                        format!("negative total budget {}", cfg.total_budget),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Allocation parameters for one group under this plan.
    pub fn params_for(&self, group: &GroupConfig) -> AllocationParams {
        AllocationParams {
            total_budget: group.total_budget,
            unit_capacity: self.unit_capacity,
            obtainable_fraction: self.obtainable_fraction,
        }
    }
}
