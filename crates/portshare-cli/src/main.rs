//! Portshare CLI
//!
//! Loads a plan configuration, runs the allocation pipeline over the
//! configured homepass data directories, and renders per-group market
//! reports as text or JSON.

use anyhow::bail;
use chrono::Utc;
use clap::{Parser, Subcommand};
use portshare_core::PlanConfig;
use portshare_ingest::{run_plan, GeoJsonSource};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod report;

/// Homepass market allocation and reporting
#[derive(Parser)]
#[command(name = "portshare")]
#[command(about = "Allocates distribution port budgets over homepass data and reports market potential")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Run the plan and render per-group reports
    Report {
        /// Plan configuration file (JSON)
        #[arg(short, long)]
        config: PathBuf,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Restrict the run to one area
        #[arg(long)]
        area: Option<String>,

        /// Restrict the run to one group
        #[arg(long)]
        group: Option<String>,
    },

    /// Validate the plan configuration and exit
    Check {
        /// Plan configuration file (JSON)
        #[arg(short, long)]
        config: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    match cli.command {
        Command::Report { config, format, area, group } => {
            run_report(&config, &format, area.as_deref(), group.as_deref())
        }
        Command::Check { config } => {
            let plan = PlanConfig::from_json_file(&config)?;
            let groups: usize = plan.areas.values().map(|g| g.len()).sum();
            info!(areas = plan.areas.len(), groups, "plan configuration is valid");
            println!(
                "ok: {} area(s), {} group(s), unit capacity {}, obtainable fraction {}",
                plan.areas.len(),
                groups,
                plan.unit_capacity,
                plan.obtainable_fraction
            );
            Ok(())
        }
    }
}

fn run_report(
    config: &PathBuf,
    format: &str,
    area: Option<&str>,
    group: Option<&str>,
) -> anyhow::Result<()> {
    let mut plan = PlanConfig::from_json_file(config)?;
    restrict(&mut plan, area, group)?;

    let outcome = run_plan(&plan, &GeoJsonSource)?;
    match format {
        "text" => print!("{}", report::render_text(&outcome, Utc::now())),
        "json" => println!("{}", serde_json::to_string_pretty(&outcome)?),
        other => bail!("unknown format '{other}', expected text or json"),
    }
    Ok(())
}

/// Narrows the plan to one area and/or one group.
fn restrict(plan: &mut PlanConfig, area: Option<&str>, group: Option<&str>) -> anyhow::Result<()> {
    if let Some(area) = area {
        plan.areas.retain(|name, _| name == area);
        if plan.areas.is_empty() {
            bail!("area '{area}' is not configured");
        }
    }
    if let Some(group) = group {
        for groups in plan.areas.values_mut() {
            groups.retain(|name, _| name == group);
        }
        plan.areas.retain(|_, groups| !groups.is_empty());
        if plan.areas.is_empty() {
            bail!("group '{group}' is not configured");
        }
    }
    Ok(())
}
