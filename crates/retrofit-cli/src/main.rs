//! # retrofit CLI entry point
//!
//! Parses command-line arguments, loads the optional configuration file,
//! installs logging and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use retrofit_cli::banding::{run_age_band, run_check_tables, run_rating, AgeBandArgs, RatingArgs};
use retrofit_cli::codes::{run_decode, run_translate, DecodeArgs, TranslateArgs};
use retrofit_cli::config::{CliConfig, LogFormat};
use retrofit_cli::dwelling::{run_home, run_promote, HomeArgs, PromoteArgs};
use retrofit_cli::measures::{
    run_compat, run_measures, run_plan, CompatArgs, MeasuresArgs, PlanArgs,
};
use retrofit_cli::{logging, EXIT_FAILURE};

/// Dwelling retrofit toolkit.
///
/// Classifies construction years and energy scores, decodes assessment
/// exports, validates dwelling records and checks improvement plans
/// against the measure compatibility rules.
#[derive(Parser, Debug)]
#[command(name = "retrofit", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log output format (overrides the config file).
    #[arg(long, value_enum, global = true)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify a construction year or range into an age band.
    AgeBand(AgeBandArgs),

    /// Classify an energy-efficiency score into a rating band.
    Rating(RatingArgs),

    /// Audit the built-in banding, code and measure tables.
    CheckTables,

    /// Decode one raw assessment code.
    Decode(DecodeArgs),

    /// Translate a raw assessment export into a dwelling record.
    Translate(TranslateArgs),

    /// Validate a dwelling record and promote it to a complete one.
    Promote(PromoteArgs),

    /// Look up a stored dwelling record by UPRN.
    Home(HomeArgs),

    /// Show how two improvement measures interact.
    Compat(CompatArgs),

    /// List improvement measures by category.
    Measures(MeasuresArgs),

    /// Check a planner result against the measure rules.
    Plan(PlanArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logging is not up yet, so a bad config file goes straight to stderr.
    let config = match CliConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e:#}");
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    let format = cli.log_format.or(config.log_format).unwrap_or_default();
    logging::init(cli.verbose, format);

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "retrofit CLI starting");

    let result = match &cli.command {
        Commands::AgeBand(args) => run_age_band(args),
        Commands::Rating(args) => run_rating(args),
        Commands::CheckTables => run_check_tables(),
        Commands::Decode(args) => run_decode(args),
        Commands::Translate(args) => run_translate(args),
        Commands::Promote(args) => run_promote(args),
        Commands::Home(args) => run_home(args, &config),
        Commands::Compat(args) => run_compat(args),
        Commands::Measures(args) => run_measures(args),
        Commands::Plan(args) => run_plan(args, &config),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
