//! # Banding Subcommands
//!
//! ```bash
//! retrofit age-band --year 1936 --jurisdiction england_and_wales
//! retrofit age-band --until 2002 --jurisdiction scotland
//! retrofit rating 64
//! retrofit check-tables
//! ```

use anyhow::Result;
use clap::Args;

use retrofit_banding::{
    check_age_table, check_rating_table, classify_age, classify_age_from_range, classify_score,
};
use retrofit_codes::tables;
use retrofit_core::{Jurisdiction, YearRange};
use retrofit_measures::{MeasureCatalog, BASELINE, SUPPLEMENTARY};

/// Arguments for `age-band`.
#[derive(Args, Debug)]
pub struct AgeBandArgs {
    /// Exact construction year.
    #[arg(long, conflicts_with_all = ["since", "until"])]
    pub year: Option<i32>,

    /// First year of a construction range.
    #[arg(long)]
    pub since: Option<i32>,

    /// Last year of a construction range ("built before" when alone).
    #[arg(long)]
    pub until: Option<i32>,

    /// Jurisdiction: england_and_wales, scotland, northern_ireland or park_home.
    #[arg(long, short, default_value = "england_and_wales")]
    pub jurisdiction: Jurisdiction,
}

/// Arguments for `rating`.
#[derive(Args, Debug)]
pub struct RatingArgs {
    /// Energy-efficiency score.
    pub score: u32,
}

/// Execute `age-band`.
pub fn run_age_band(args: &AgeBandArgs) -> Result<u8> {
    let result = match args.year {
        Some(year) => classify_age(year, args.jurisdiction),
        None => {
            let range = YearRange::Span {
                lower: args.since,
                upper: args.until,
            };
            classify_age_from_range(&range, args.jurisdiction)
        }
    };
    match result {
        Ok(band) => {
            let span = band
                .years(args.jurisdiction)
                .map(|s| s.to_string())
                .unwrap_or_default();
            println!("{band}\t{span}");
            Ok(0)
        }
        Err(e) if e.is_table_defect() => Err(e.into()),
        Err(e) => {
            eprintln!("error: {e}");
            Ok(1)
        }
    }
}

/// Execute `rating`.
pub fn run_rating(args: &RatingArgs) -> Result<u8> {
    let band = classify_score(args.score)?;
    let range = band.score_range();
    println!("{band}\t{}-{}", range.start(), range.end());
    Ok(0)
}

/// Execute `check-tables`.
pub fn run_check_tables() -> Result<u8> {
    let mut defects: Vec<String> = check_age_table()
        .into_iter()
        .chain(check_rating_table())
        .map(|d| d.to_string())
        .collect();

    defects.extend(code_table_defects());

    if let Err(e) = MeasureCatalog::build(&BASELINE, &SUPPLEMENTARY) {
        defects.push(format!("measure catalog: {e}"));
    }

    if defects.is_empty() {
        println!("all tables consistent");
        return Ok(0);
    }
    for defect in &defects {
        println!("{defect}");
    }
    tracing::warn!(count = defects.len(), "table defects found");
    Ok(1)
}

/// Code tables whose codes are not strictly ascending. Names that resolve
/// to no value are documented legacy codes and only logged.
fn code_table_defects() -> Vec<String> {
    macro_rules! audit {
        ($($table:expr),+ $(,)?) => {{
            let mut out = Vec::new();
            $(
                let entries = $table.entries();
                for (code, name) in entries {
                    if $table.resolve(*code).is_none() {
                        tracing::debug!(field = $table.field(), code, name, "code has no value");
                    }
                }
                if !entries.windows(2).all(|w| w[0].0 < w[1].0) {
                    out.push(format!("{}: codes are not strictly ascending", $table.field()));
                }
            )+
            out
        }};
    }
    audit!(
        tables::METER_TYPE,
        tables::PROPERTY_TYPE,
        tables::BUILT_FORM,
        tables::GLAZED_AREA,
        tables::EFFICIENCY_RATING,
        tables::MULTIPLE_GLAZING_TYPE,
        tables::FLAT_LEVEL,
        tables::HEAT_LOSS_CORRIDOR,
        tables::ORIENTATION,
        tables::OVERSHADING,
        tables::IMPROVEMENT_TYPE,
    )
}
