//! Largest-remainder allocation of a fixed port budget across subdivisions
//!
//! Given per-subdivision homepass counts and one shared budget of
//! distribution ports, the engine distributes integer port units
//! proportionally (floor baseline plus ranked-remainder assignment), derives
//! the serviceable (SAM) and obtainable (SOM) market metrics, assigns
//! competition ranks and potential categories. The whole pass is a pure
//! function of its inputs: no shared state, deterministic for a given input
//! order, safe to invoke concurrently.

use portshare_types::{AllocationParams, PotentialCategory, SubdivisionInput, SubdivisionRecord};
use std::cmp::Ordering;
use tracing::{debug, instrument};

use crate::error::{PortshareError, PortshareResult};

/// Runs one allocation pass over a group of subdivisions.
///
/// The result vector is ordered descending by `obtainable_metric` (stable,
/// so ties keep input order); when every obtainable metric is zero the input
/// order is kept and ranks run 1..N.
///
/// Fails with [`PortshareError::InvalidInput`] on a negative homepass count
/// or budget, a non-positive unit capacity, or an obtainable fraction
/// outside `[0, 1]`. An empty input yields an empty result, not an error.
#[instrument(skip(records), fields(subdivisions = records.len()))]
pub fn allocate(
    records: &[SubdivisionInput],
    params: &AllocationParams,
) -> PortshareResult<Vec<SubdivisionRecord>> {
    validate(records, params)?;
    if records.is_empty() {
        return Ok(Vec::new());
    }

    let counts: Vec<u64> = records.iter().map(|r| r.homepass as u64).collect();
    let units = distribute_units(&counts, params.total_budget as u64);
    debug!(
        total_budget = params.total_budget,
        total_homepass = counts.iter().sum::<u64>(),
        "distributed port units"
    );

    let unit_capacity = params.unit_capacity as u64;
    let populated = records
        .iter()
        .zip(units)
        .map(|(input, allocated_units)| {
            let capacity_metric = allocated_units * unit_capacity;
            let obtainable_metric = round_obtainable(capacity_metric, params.obtainable_fraction);
            SubdivisionRecord {
                name: input.name.clone(),
                homepass: input.homepass as u64,
                allocated_units,
                capacity_metric,
                obtainable_metric,
                rank: 0,
                category: PotentialCategory::NoPotential,
            }
        })
        .collect();

    Ok(rank_and_categorize(populated))
}

fn validate(records: &[SubdivisionInput], params: &AllocationParams) -> PortshareResult<()> {
    for record in records {
        if record.homepass < 0 {
            return Err(PortshareError::invalid_input(
                "homepass",
                format!("negative homepass count {} for '{}'", record.homepass, record.name),
            ));
        }
    }
    if params.total_budget < 0 {
        return Err(PortshareError::invalid_input(
            "total_budget",
            format!("negative total budget {}", params.total_budget),
        ));
    }
    if params.unit_capacity <= 0 {
        return Err(PortshareError::invalid_input(
            "unit_capacity",
            format!("unit capacity must be positive, got {}", params.unit_capacity),
        ));
    }
    let fraction = params.obtainable_fraction;
    if !fraction.is_finite() || !(0.0..=1.0).contains(&fraction) {
        return Err(PortshareError::invalid_input(
            "obtainable_fraction",
            format!("obtainable fraction must be within [0, 1], got {fraction}"),
        ));
    }
    Ok(())
}

/// Integer apportionment by the largest-remainder method.
///
/// Every subdivision gets the floor of its exact proportional share; the
/// leftover units go one each to the subdivisions with the largest
/// fractional remainders, ties broken by higher homepass count and then by
/// input order (the sort is stable).
fn distribute_units(counts: &[u64], total_budget: u64) -> Vec<u64> {
    let total_raw: u64 = counts.iter().sum();
    if total_budget == 0 || total_raw == 0 {
        return vec![0; counts.len()];
    }

    let mut allocated = Vec::with_capacity(counts.len());
    let mut remainders = Vec::with_capacity(counts.len());
    for &count in counts {
        let share = count as f64 / total_raw as f64 * total_budget as f64;
        let floor = share.floor();
        allocated.push(floor as u64);
        remainders.push(share - floor);
    }

    let assigned: u64 = allocated.iter().sum();
    let leftover = total_budget.saturating_sub(assigned) as usize;

    let mut order: Vec<usize> = (0..counts.len()).collect();
    order.sort_by(|&a, &b| {
        remainders[b]
            .partial_cmp(&remainders[a])
            .unwrap_or(Ordering::Equal)
            .then(counts[b].cmp(&counts[a]))
    });
    // leftover < n holds mathematically; the cap guards float-precision drift
    for &index in order.iter().take(leftover.min(counts.len())) {
        allocated[index] += 1;
    }

    allocated
}

/// SOM rounding: half-to-even, matching the upstream banker's rounding.
fn round_obtainable(capacity_metric: u64, fraction: f64) -> u64 {
    (capacity_metric as f64 * fraction).round_ties_even() as u64
}

/// Orders records, assigns competition ranks and potential categories.
fn rank_and_categorize(mut records: Vec<SubdivisionRecord>) -> Vec<SubdivisionRecord> {
    if records.iter().all(|r| r.obtainable_metric == 0) {
        // Deliberate special case: distinct ranks in input order rather than
        // everything tying at rank 1.
        for (index, record) in records.iter_mut().enumerate() {
            record.rank = index as u32 + 1;
            record.category = PotentialCategory::NoPotential;
        }
        return records;
    }

    records.sort_by(|a, b| b.obtainable_metric.cmp(&a.obtainable_metric));

    let positive: Vec<u64> =
        records.iter().map(|r| r.obtainable_metric).filter(|&m| m > 0).collect();
    let mean_positive = positive.iter().sum::<u64>() as f64 / positive.len() as f64;

    let ranks: Vec<u32> = records
        .iter()
        .map(|record| {
            let greater = records
                .iter()
                .filter(|other| other.obtainable_metric > record.obtainable_metric)
                .count();
            greater as u32 + 1
        })
        .collect();

    for (record, rank) in records.iter_mut().zip(ranks) {
        record.rank = rank;
        record.category = if record.obtainable_metric == 0 {
            PotentialCategory::NoPotential
        } else if record.obtainable_metric as f64 > mean_positive {
            PotentialCategory::HighPotential
        } else {
            PotentialCategory::LowPotential
        };
    }

    records
}
