//! # Home and Plan Services
//!
//! Request handlers without the transport: each takes the identifier a
//! client supplied, validates it, fetches the raw record from a
//! [`RecordStore`] and parses it. Every failure comes back as an
//! [`ApiError`] ready to be rendered.
//!
//! Store keys are `home/<uprn>` for dwelling records and
//! `plan/<simulation id>` for planner results.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use retrofit_core::{RetrofitError, Uprn};
use retrofit_dwelling::{Dwelling, DwellingPartial};
use retrofit_measures::RetrofitPlan;

use crate::error::ApiError;
use crate::store::RecordStore;

/// Explanation attached to a 404 for an unknown UPRN.
pub const UPRN_NOT_FOUND: &str = "The UPRN can not be found. It may be incorrect, or the \
building may be too recent for its UPRN to have been published.";

/// Explanation attached to a 404 for an unknown simulation id.
pub const PLAN_NOT_FOUND: &str = "No retrofit plan exists for this simulation id.";

/// Body of a home lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeDetailsResponse {
    /// The dwelling as recorded, possibly incomplete.
    pub home: DwellingPartial,
}

/// Body of a complete-home lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompleteHomeResponse {
    /// The promoted dwelling.
    pub home: Dwelling,
}

/// Store key of the dwelling record for `uprn`.
pub fn home_key(uprn: &Uprn) -> String {
    format!("home/{uprn}")
}

/// Store key of the planner result for `id`.
pub fn plan_key(id: &Uuid) -> String {
    format!("plan/{}", id.hyphenated())
}

/// Serves dwelling records and planner results from a store.
#[derive(Debug, Clone)]
pub struct HomeService<S> {
    store: S,
}

impl<S: RecordStore> HomeService<S> {
    /// A service over `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The dwelling record for `uprn`, with per-field constraints checked.
    pub fn home_details(&self, uprn: &str) -> Result<HomeDetailsResponse, ApiError> {
        let uprn = parse_uprn(uprn)?;
        let bytes = self.fetch(&home_key(&uprn), UPRN_NOT_FOUND)?;
        let home: DwellingPartial =
            serde_json::from_slice(&bytes).map_err(RetrofitError::Serialization)?;
        home.check_constraints()?;
        tracing::debug!(uprn = %uprn, "home details served");
        Ok(HomeDetailsResponse { home })
    }

    /// The dwelling record for `uprn`, promoted to a complete record.
    pub fn complete_home(&self, uprn: &str) -> Result<CompleteHomeResponse, ApiError> {
        let HomeDetailsResponse { home } = self.home_details(uprn)?;
        let home = home.promote().map_err(|e| {
            tracing::info!(uprn, field = %e.field_path(), "home is incomplete");
            ApiError::from(e)
        })?;
        Ok(CompleteHomeResponse { home })
    }

    /// The planner result stored for `simulation_id`.
    pub fn retrofit_plan(&self, simulation_id: &str) -> Result<RetrofitPlan, ApiError> {
        let id = Uuid::parse_str(simulation_id.trim()).map_err(|e| {
            ApiError::invalid_field("invalid_identifier", "simulation_id", e.to_string())
        })?;
        let bytes = self.fetch(&plan_key(&id), PLAN_NOT_FOUND)?;
        let plan: RetrofitPlan =
            serde_json::from_slice(&bytes).map_err(RetrofitError::Serialization)?;
        if plan.simulation_id != id {
            tracing::error!(
                requested = %id,
                stored = %plan.simulation_id,
                "plan stored under wrong key"
            );
            return Err(ApiError::Internal(format!(
                "plan stored under {id} has simulation id {}",
                plan.simulation_id
            )));
        }
        Ok(plan)
    }

    fn fetch(&self, key: &str, explanation: &str) -> Result<Vec<u8>, ApiError> {
        self.store.fetch_by_key(key).map_err(|e| match e {
            RetrofitError::NotFound { key } => ApiError::not_found(key, explanation),
            other => other.into(),
        })
    }
}

fn parse_uprn(raw: &str) -> Result<Uprn, ApiError> {
    Uprn::new(raw.trim()).map_err(|e| {
        ApiError::invalid_field("invalid_identifier", "uprn", e.to_string())
    })
}
