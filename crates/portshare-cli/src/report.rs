//! Text report rendering
//!
//! Renders a plan outcome as fixed-width tables, one per group: rank, name,
//! homepass, allocated ports, SAM, SOM, category and recommendation, plus
//! the aggregate homepass/SAM/SOM split the original dashboard charts.

use chrono::{DateTime, Utc};
use portshare_ingest::{GroupReport, PlanOutcome};
use std::fmt::Write;

/// Renders the whole outcome as plain text.
pub fn render_text(outcome: &PlanOutcome, generated_at: DateTime<Utc>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Homepass market report — generated {}",
        generated_at.format("%Y-%m-%d %H:%M UTC")
    );
    for report in outcome.groups.values() {
        out.push('\n');
        out.push_str(&render_group(report));
    }
    out
}

fn render_group(report: &GroupReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} / {} ==", report.area, report.group);
    let _ = writeln!(
        out,
        "{:<5} {:<24} {:>9} {:>6} {:>7} {:>7}  {:<15} {}",
        "Rank", "Subdivision", "Homepass", "Ports", "SAM", "SOM", "Category", "Recommendation"
    );
    for row in &report.rows {
        let record = &row.record;
        let _ = writeln!(
            out,
            "{:<5} {:<24} {:>9} {:>6} {:>7} {:>7}  {:<15} {}",
            record.rank,
            record.name,
            record.homepass,
            record.allocated_units,
            record.capacity_metric,
            record.obtainable_metric,
            record.category.label(),
            row.recommendation.label()
        );
    }

    let totals = report.totals();
    let split_base = totals.homepass + totals.capacity_metric + totals.obtainable_metric;
    if split_base > 0 {
        let percent = |value: u64| value as f64 / split_base as f64 * 100.0;
        let _ = writeln!(
            out,
            "Totals: homepass {} ({:.1}%), SAM {} ({:.1}%), SOM {} ({:.1}%)",
            totals.homepass,
            percent(totals.homepass),
            totals.capacity_metric,
            percent(totals.capacity_metric),
            totals.obtainable_metric,
            percent(totals.obtainable_metric)
        );
    } else {
        let _ = writeln!(out, "Totals: no market data above zero");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use portshare_core::{GroupConfig, PlanConfig, PortshareError};
    use portshare_ingest::{run_plan, HomepassSource};
    use portshare_types::SubdivisionInput;
    use std::collections::BTreeMap;
    use std::path::Path;

    struct FixedSource;

    impl HomepassSource for FixedSource {
        fn scan_group(
            &self,
            _data_dir: &Path,
            _group_name: &str,
        ) -> Result<Vec<SubdivisionInput>, PortshareError> {
            Ok(vec![SubdivisionInput::new("Tlogomas", 60), SubdivisionInput::new("Dinoyo", 40)])
        }
    }

    fn outcome() -> PlanOutcome {
        let mut groups = BTreeMap::new();
        groups.insert(
            "lowokwaru".to_string(),
            GroupConfig { data_dir: "data/Lowokwaru".into(), total_budget: 10 },
        );
        let mut areas = BTreeMap::new();
        areas.insert("Kota Malang".to_string(), groups);
        let config = PlanConfig { unit_capacity: 16, obtainable_fraction: 0.3, areas };
        run_plan(&config, &FixedSource).unwrap()
    }

    #[test]
    fn text_report_carries_all_columns() {
        let generated = Utc.with_ymd_and_hms(2026, 8, 25, 9, 0, 0).unwrap();
        let text = render_text(&outcome(), generated);

        assert!(text.contains("generated 2026-08-25 09:00 UTC"));
        assert!(text.contains("== Kota Malang / lowokwaru =="));
        assert!(text.contains("Tlogomas"));
        assert!(text.contains("High Potential"));
        assert!(text.contains("Promote / Expand Coverage"));
        // totals: homepass 100, SAM 160, SOM 48 of 308
        assert!(text.contains("Totals: homepass 100 (32.5%), SAM 160 (51.9%), SOM 48 (15.6%)"));
    }

    #[test]
    fn ranked_order_is_preserved() {
        let generated = Utc.with_ymd_and_hms(2026, 8, 25, 9, 0, 0).unwrap();
        let text = render_text(&outcome(), generated);
        let tlogomas = text.find("Tlogomas").unwrap();
        let dinoyo = text.find("Dinoyo").unwrap();
        assert!(tlogomas < dinoyo);
    }
}
