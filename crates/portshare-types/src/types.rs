use serde::{Deserialize, Serialize};
use std::fmt;

/// Default number of homepasses served by one allocated distribution port.
pub const DEFAULT_UNIT_CAPACITY: i64 = 16;

/// Default fraction of the serviceable market assumed realistically obtainable.
pub const DEFAULT_OBTAINABLE_FRACTION: f64 = 0.3;

/// One subdivision as produced by the input adapter: a display name and the
/// raw homepass point count attributed to it.
///
/// The count is signed so that malformed adapter output is representable and
/// can be rejected by the engine instead of silently wrapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubdivisionInput {
    /// Canonical display name of the subdivision
    pub name: String,
    /// Raw homepass point count (must be non-negative)
    pub homepass: i64,
}

impl SubdivisionInput {
    /// Creates a new input record.
    pub fn new(name: impl Into<String>, homepass: i64) -> Self {
        Self { name: name.into(), homepass }
    }
}

/// A fully-populated subdivision record produced by one allocation pass.
///
/// Records are created fresh on every pass and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubdivisionRecord {
    /// Canonical display name of the subdivision
    pub name: String,
    /// Raw homepass point count
    pub homepass: u64,
    /// Distribution ports allocated to this subdivision
    pub allocated_units: u64,
    /// Serviceable market size: `allocated_units * unit_capacity`
    pub capacity_metric: u64,
    /// Obtainable market size: `round(capacity_metric * obtainable_fraction)`
    pub obtainable_metric: u64,
    /// 1-based competition rank within the group (minimum-rank ties)
    pub rank: u32,
    /// Qualitative potential tier derived from the obtainable metric
    pub category: PotentialCategory,
}

/// Qualitative potential tier of a subdivision, derived from its obtainable
/// metric relative to the mean of the strictly-positive obtainable metrics
/// in its group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PotentialCategory {
    /// Obtainable metric strictly above the positive-mean of the group
    HighPotential,
    /// Positive obtainable metric at or below the positive-mean
    LowPotential,
    /// Obtainable metric of zero
    NoPotential,
}

impl PotentialCategory {
    /// Human-readable label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            PotentialCategory::HighPotential => "High Potential",
            PotentialCategory::LowPotential => "Low Potential",
            PotentialCategory::NoPotential => "No Potential",
        }
    }
}

impl fmt::Display for PotentialCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Action recommendation for a subdivision, derived from its category and
/// the ratio of obtainable to serviceable market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Recommendation {
    /// High potential with a large unobtained share: promote / expand coverage
    ExpandCoverage,
    /// High potential and most of the serviceable market already obtainable
    GoodPerformance,
    /// Low potential: needs a differentiated local strategy
    LocalStrategy,
    /// No obtainable market: not a priority
    NotPriority,
}

impl Recommendation {
    /// Human-readable label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Recommendation::ExpandCoverage => "Promote / Expand Coverage",
            Recommendation::GoodPerformance => "Good Performance",
            Recommendation::LocalStrategy => "Local Strategy",
            Recommendation::NotPriority => "Not a Priority",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parameters of one allocation pass, shared by every subdivision in a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationParams {
    /// Total number of distribution ports available to the group
    pub total_budget: i64,
    /// Homepasses served by one port
    pub unit_capacity: i64,
    /// Fraction of the serviceable market assumed obtainable
    pub obtainable_fraction: f64,
}

impl AllocationParams {
    /// Parameters for the given budget with the default capacity and fraction.
    pub fn new(total_budget: i64) -> Self {
        Self {
            total_budget,
            unit_capacity: DEFAULT_UNIT_CAPACITY,
            obtainable_fraction: DEFAULT_OBTAINABLE_FRACTION,
        }
    }

    /// Overrides the unit capacity.
    pub fn with_unit_capacity(mut self, unit_capacity: i64) -> Self {
        self.unit_capacity = unit_capacity;
        self
    }

    /// Overrides the obtainable fraction.
    pub fn with_obtainable_fraction(mut self, obtainable_fraction: f64) -> Self {
        self.obtainable_fraction = obtainable_fraction;
        self
    }
}
