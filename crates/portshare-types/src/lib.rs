//! Portshare Types
//!
//! This crate defines the core types shared between the portshare crates
//! (`portshare-core`, `portshare-ingest` and the CLI). It holds the
//! subdivision data model and the fixed enumerations for potential
//! categories and recommendations, and eliminates circular dependencies
//! between the engine and adapter crates.

#![deny(warnings)]
#![deny(clippy::all)]
#![deny(missing_docs)]

mod types;

pub use types::{
    AllocationParams, PotentialCategory, Recommendation, SubdivisionInput, SubdivisionRecord,
    DEFAULT_OBTAINABLE_FRACTION, DEFAULT_UNIT_CAPACITY,
};
