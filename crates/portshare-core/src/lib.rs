#![deny(warnings)]
#![allow(missing_docs)]
//! Core functionality for the portshare allocation engine.
//!
//! This crate implements the deterministic largest-remainder allocation of a
//! fixed port budget across subdivisions, the derived market-sizing metrics
//! (SAM/SOM), competition ranking, potential categorization, and the
//! recommendation classifier. It also owns the validated plan configuration
//! and an explicit, caller-owned memoization layer.

/// Caller-owned memoization of allocation passes
pub mod cache;
/// Validated plan configuration (areas, groups, budgets)
pub mod config;
/// The largest-remainder allocation engine
pub mod engine;
/// Structured error taxonomy for all portshare operations
pub mod error;
/// Recommendation classifier over allocated records
pub mod recommend;

pub use cache::{AllocationCache, AllocationCacheKey, CacheStats};
pub use config::{GroupConfig, PlanConfig};
pub use engine::allocate;
pub use error::{PortshareError, PortshareResult};
pub use recommend::recommend;
