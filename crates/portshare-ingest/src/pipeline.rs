//! Plan pipeline
//!
//! Runs the allocation engine over every group in a plan: scan the group's
//! homepass data, allocate the port budget, attach a recommendation per
//! subdivision. A group whose data source fails is logged and skipped; the
//! run only errors when no group survives.

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{info, instrument, warn};

use portshare_core::{allocate, recommend, PlanConfig, PortshareError, PortshareResult};
use portshare_types::{Recommendation, SubdivisionRecord};

use crate::source::HomepassSource;

/// One subdivision in a rendered report: the populated record plus its
/// recommendation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    /// The fully-populated allocation record
    #[serde(flatten)]
    pub record: SubdivisionRecord,
    /// Action recommendation derived from the record
    pub recommendation: Recommendation,
}

/// Allocation result of one group, ordered as the engine ranks it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupReport {
    /// Area the group belongs to
    pub area: String,
    /// Group name
    pub group: String,
    /// Ranked subdivisions with recommendations
    pub rows: Vec<ReportRow>,
}

/// Aggregate market split of a group, for the report chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroupTotals {
    /// Total homepass count
    pub homepass: u64,
    /// Total serviceable market (SAM)
    pub capacity_metric: u64,
    /// Total obtainable market (SOM)
    pub obtainable_metric: u64,
}

impl GroupReport {
    /// Sums the homepass/SAM/SOM columns.
    pub fn totals(&self) -> GroupTotals {
        let mut totals = GroupTotals { homepass: 0, capacity_metric: 0, obtainable_metric: 0 };
        for row in &self.rows {
            totals.homepass += row.record.homepass;
            totals.capacity_metric += row.record.capacity_metric;
            totals.obtainable_metric += row.record.obtainable_metric;
        }
        totals
    }
}

/// Every group that survived one plan run, keyed by group name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanOutcome {
    /// Group name → report
    pub groups: BTreeMap<String, GroupReport>,
}

/// Runs the whole plan against a homepass source.
///
/// Recoverable per-group failures (missing or empty data directories,
/// directories where every file is unreadable) are logged and the group is
/// skipped. Returns [`PortshareError::NoData`] when nothing survives, so
/// callers surface a clear "no data available" condition instead of an
/// empty report.
#[instrument(skip(config, source))]
pub fn run_plan(
    config: &PlanConfig,
    source: &dyn HomepassSource,
) -> PortshareResult<PlanOutcome> {
    config.validate()?;

    let mut groups = BTreeMap::new();
    for (area, group_map) in &config.areas {
        for (group, group_config) in group_map {
            let inputs = match source.scan_group(&group_config.data_dir, group) {
                Ok(inputs) => inputs,
                Err(err) if err.is_recoverable() => {
                    warn!(area = %area, group = %group, error = %err, "skipping group");
                    continue;
                }
                Err(err) => return Err(err),
            };

            let records = allocate(&inputs, &config.params_for(group_config))?;
            let rows: Vec<ReportRow> = records
                .into_iter()
                .map(|record| {
                    let recommendation = recommend(
                        record.category,
                        record.obtainable_metric,
                        record.capacity_metric,
                    );
                    ReportRow { record, recommendation }
                })
                .collect();

            info!(
                area = %area,
                group = %group,
                subdivisions = rows.len(),
                total_budget = group_config.total_budget,
                "allocated group"
            );
            groups.insert(
                group.clone(),
                GroupReport { area: area.clone(), group: group.clone(), rows },
            );
        }
    }

    if groups.is_empty() {
        return Err(PortshareError::NoData);
    }
    Ok(PlanOutcome { groups })
}
