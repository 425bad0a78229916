//! # retrofit-measures — Improvement Compatibility Engine
//!
//! The catalog of retrofit measures and the rules for combining them:
//!
//! - [`rules`]: the baseline regulatory rule set and the in-house
//!   supplementary rule set.
//! - [`catalog`]: merges the two into the category map and the directed
//!   compatibility matrix, published once through
//!   [`MeasureCatalog::global`].
//! - [`specification`] / [`improvement`]: what an improvement changes and
//!   how a recommendation presents it.
//! - [`plan`]: staged plans (IOE and MTIP) and [`assess_plan`], which
//!   checks a plan against the catalog.
//!
//! ## Crate Policy
//!
//! - The catalog is immutable after construction.
//! - A missing compatibility entry means no recorded interaction, never an
//!   error.

#![deny(missing_docs)]

pub mod catalog;
pub mod improvement;
pub mod measure;
pub mod plan;
pub mod rules;
pub mod specification;

pub use catalog::{
    build_category_map, build_compatibility_matrix, query_compatibility, CatalogError,
    CategoryMap, CompatibilityMatrix, MeasureCatalog,
};
pub use improvement::{
    FundingAmount, Improvement, ImprovementDetails, ImprovementFunding, RecommendationsSettings,
};
pub use measure::{
    Compatibility, Disruption, ImprovementCategory, ImprovementMeasure, InstallationTimeframe,
};
pub use plan::{
    assess_plan, ConsumptionSummary, EnergyProfile, GenerationSummary, ImprovementEnergyProfile,
    PlanAssessment, PlanFinding, PlanSection, PlannedImprovement, RetrofitPlan,
};
pub use rules::{RuleSet, BASELINE, SUPPLEMENTARY};
pub use specification::{ImprovementSpecification, Specifications};
