//! # Measure Subcommands
//!
//! ```bash
//! retrofit compat "Wet underfloor heating" "Radiator panels"
//! retrofit measures --category Renewables
//! retrofit measures --matrix
//! retrofit plan plan.json
//! retrofit plan --id 1e0e7511-9e40-4b13-8c52-4f9c26c41c55 --data-dir ./data
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde_json::json;

use retrofit_api::{DirectoryStore, HomeService};
use retrofit_core::Labelled;
use retrofit_measures::{
    assess_plan, ImprovementCategory, ImprovementMeasure, MeasureCatalog, RetrofitPlan,
};

use crate::config::CliConfig;
use crate::{print_json, report_api_error};

/// Parse a vocabulary value by label (`Air source heat pump`) or by
/// symbol (`AIR_SOURCE_HEAT_PUMP`).
pub fn parse_labelled<T: Labelled>(raw: &str) -> Result<T, String> {
    let raw = raw.trim();
    T::from_label(raw)
        .or_else(|| T::from_symbol(raw))
        .or_else(|| T::from_symbol(&raw.to_uppercase().replace(&[' ', '-'][..], "_")))
        .ok_or_else(|| format!("unknown value {raw:?}"))
}

/// Arguments for `compat`.
#[derive(Args, Debug)]
pub struct CompatArgs {
    /// Measure being applied.
    #[arg(value_parser = parse_labelled::<ImprovementMeasure>)]
    pub measure: ImprovementMeasure,

    /// Measure it is combined with.
    #[arg(value_parser = parse_labelled::<ImprovementMeasure>)]
    pub other: ImprovementMeasure,
}

/// Arguments for `measures`.
#[derive(Args, Debug)]
pub struct MeasuresArgs {
    /// Only this category.
    #[arg(long, value_parser = parse_labelled::<ImprovementCategory>)]
    pub category: Option<ImprovementCategory>,

    /// Print the merged compatibility matrix instead.
    #[arg(long, conflicts_with = "category")]
    pub matrix: bool,
}

/// Arguments for `plan`.
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Planner result JSON file.
    #[arg(required_unless_present = "id", conflicts_with = "id")]
    pub path: Option<PathBuf>,

    /// Simulation id of a stored planner result.
    #[arg(long)]
    pub id: Option<String>,

    /// Record store root (overrides the config file).
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}

/// Execute `compat`.
pub fn run_compat(args: &CompatArgs) -> Result<u8> {
    let catalog = MeasureCatalog::global();
    match catalog.compatibility(args.measure, args.other) {
        Some(severity) => println!("{severity}"),
        None => println!("no recorded interaction"),
    }
    Ok(0)
}

/// Execute `measures`.
pub fn run_measures(args: &MeasuresArgs) -> Result<u8> {
    let catalog = MeasureCatalog::global();
    if args.matrix {
        print_json(catalog.matrix())?;
        return Ok(0);
    }
    match args.category {
        Some(category) => {
            for measure in catalog.measures(category) {
                println!("{measure}");
            }
        }
        None => {
            for (category, measures) in catalog.categories() {
                if measures.is_empty() {
                    continue;
                }
                let names: Vec<_> = measures.iter().map(|m| m.label()).collect();
                println!("{category}: {}", names.join(", "));
            }
        }
    }
    Ok(0)
}

/// Execute `plan`.
pub fn run_plan(args: &PlanArgs, config: &CliConfig) -> Result<u8> {
    let plan = match (&args.path, &args.id) {
        (Some(path), _) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            serde_json::from_str::<RetrofitPlan>(&content)
                .with_context(|| format!("invalid planner result in {}", path.display()))?
        }
        (None, Some(id)) => {
            let root = config.data_dir(args.data_dir.as_deref());
            match HomeService::new(DirectoryStore::new(root)).retrofit_plan(id) {
                Ok(plan) => plan,
                Err(e) => return report_api_error(&e),
            }
        }
        (None, None) => anyhow::bail!("either a plan file or --id is required"),
    };

    let assessment = assess_plan(&plan, MeasureCatalog::global(), &config.recommendations);
    print_json(&json!({
        "simulation_id": plan.simulation_id,
        "findings": assessment.findings,
        "worst_compatibility": assessment.worst_compatibility(),
        "cumulative_change": plan.cumulative_change(),
    }))?;

    if assessment.has_blocking() {
        tracing::info!(findings = assessment.findings.len(), "plan cannot go ahead as written");
        return Ok(1);
    }
    Ok(0)
}
