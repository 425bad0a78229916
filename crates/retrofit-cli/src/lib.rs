//! # retrofit-cli — Command-Line Interface
//!
//! Provides the `retrofit` command over the banding tables, the code
//! translation layer, dwelling promotion and the measure catalog.
//!
//! ## Subcommands
//!
//! - `retrofit age-band` / `retrofit rating`: classify a construction year
//!   or an energy-efficiency score.
//! - `retrofit check-tables`: audit every built-in table.
//! - `retrofit decode` / `retrofit translate`: decode raw assessment codes.
//! - `retrofit promote` / `retrofit home`: validate and promote dwelling
//!   records, from a file or the record store.
//! - `retrofit compat` / `retrofit measures` / `retrofit plan`: query the
//!   measure catalog and check planner results.
//!
//! ## Exit Codes
//!
//! `0` on success, `1` when the input was rejected, `2` on an operational
//! failure (unreadable file, store I/O, defective built-in table).

pub mod banding;
pub mod codes;
pub mod config;
pub mod dwelling;
pub mod logging;
pub mod measures;

use anyhow::Result;
use serde::Serialize;

use retrofit_api::ApiError;

/// Exit status for an operational failure.
pub const EXIT_FAILURE: u8 = 2;

/// Write `value` to stdout as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print an API error body to stdout and pick the exit status: `1` for a
/// rejected request, [`EXIT_FAILURE`] for an internal error.
pub fn report_api_error(err: &ApiError) -> Result<u8> {
    print_json(&err.body())?;
    Ok(if err.status_code() >= 500 {
        EXIT_FAILURE
    } else {
        1
    })
}
