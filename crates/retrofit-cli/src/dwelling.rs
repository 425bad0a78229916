//! # Dwelling Subcommands
//!
//! ```bash
//! retrofit promote partial.json
//! retrofit promote partial.json --all
//! retrofit home 906205784 --complete --data-dir ./data
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use retrofit_api::{ApiError, DirectoryStore, HomeService};
use retrofit_core::RetrofitError;
use retrofit_dwelling::DwellingPartial;

use crate::config::CliConfig;
use crate::{print_json, report_api_error};

/// Arguments for `promote`.
#[derive(Args, Debug)]
pub struct PromoteArgs {
    /// Dwelling record JSON file.
    pub path: PathBuf,

    /// List every field-constraint violation instead of stopping at the
    /// first failure.
    #[arg(long)]
    pub all: bool,
}

/// Arguments for `home`.
#[derive(Args, Debug)]
pub struct HomeArgs {
    /// Unique property reference number.
    pub uprn: String,

    /// Promote the stored record to a complete one.
    #[arg(long)]
    pub complete: bool,

    /// Record store root (overrides the config file).
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}

/// Execute `promote`.
pub fn run_promote(args: &PromoteArgs) -> Result<u8> {
    let content = std::fs::read_to_string(&args.path)
        .with_context(|| format!("failed to read {}", args.path.display()))?;
    let partial: DwellingPartial = match serde_json::from_str(&content) {
        Ok(partial) => partial,
        Err(e) => return report_api_error(&ApiError::from(RetrofitError::Serialization(e))),
    };

    if args.all {
        let violations = partial.constraint_violations();
        if !violations.is_empty() {
            let listed: Vec<_> = violations
                .iter()
                .map(|v| {
                    serde_json::json!({
                        "field": v.field_path(),
                        "kind": v.kind(),
                        "message": v.to_string(),
                    })
                })
                .collect();
            print_json(&serde_json::json!({ "constraint_violations": listed }))?;
            return Ok(1);
        }
    }

    match partial.promote() {
        Ok(dwelling) => {
            print_json(&dwelling)?;
            Ok(0)
        }
        Err(e) => {
            tracing::info!(field = %e.field_path(), "promotion failed");
            report_api_error(&ApiError::from(e))
        }
    }
}

/// Execute `home`.
pub fn run_home(args: &HomeArgs, config: &CliConfig) -> Result<u8> {
    let root = config.data_dir(args.data_dir.as_deref());
    let service = HomeService::new(DirectoryStore::new(root));
    let served = if args.complete {
        service.complete_home(&args.uprn).and_then(to_body)
    } else {
        service.home_details(&args.uprn).and_then(to_body)
    };
    match served {
        Ok(body) => {
            print_json(&body)?;
            Ok(0)
        }
        Err(e) => report_api_error(&e),
    }
}

fn to_body<T: serde::Serialize>(response: T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(response).map_err(|e| RetrofitError::from(e).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn stored_record() -> serde_json::Value {
        json!({"uprn": "906205784", "total_floor_area": 84})
    }

    #[test]
    fn promote_reports_constraint_failures() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("home.json");
        std::fs::write(&path, json!({"room_height": 7.0}).to_string()).unwrap();

        let first = PromoteArgs {
            path: path.clone(),
            all: false,
        };
        assert_eq!(run_promote(&first).unwrap(), 1);
        let all = PromoteArgs { path, all: true };
        assert_eq!(run_promote(&all).unwrap(), 1);
    }

    #[test]
    fn promote_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("home.json");
        std::fs::write(&path, "{ not json").unwrap();
        let args = PromoteArgs { path, all: false };
        assert_eq!(run_promote(&args).unwrap(), 1);
    }

    #[test]
    fn home_lookup_outcomes() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("home")).unwrap();
        std::fs::write(
            dir.path().join("home/906205784.json"),
            stored_record().to_string(),
        )
        .unwrap();
        let config = CliConfig {
            data_dir: Some(dir.path().to_path_buf()),
            ..CliConfig::default()
        };

        let found = HomeArgs {
            uprn: "906205784".into(),
            complete: false,
            data_dir: None,
        };
        assert_eq!(run_home(&found, &config).unwrap(), 0);

        let missing = HomeArgs {
            uprn: "100".into(),
            complete: false,
            data_dir: None,
        };
        assert_eq!(run_home(&missing, &config).unwrap(), 1);

        let invalid = HomeArgs {
            uprn: "12a".into(),
            complete: true,
            data_dir: None,
        };
        assert_eq!(run_home(&invalid, &config).unwrap(), 1);
    }
}
