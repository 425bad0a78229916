//! # Staged Retrofit Plans
//!
//! A plan reports the energy impact of improvements in two ways:
//!
//! - **Improvement option evaluation (IOE)**: each option is applied on
//!   its own to the baseline dwelling.
//! - **Medium-term improvement plan (MTIP)**: stages are applied in order,
//!   each on top of everything before it.
//!
//! Energy figures come from an external simulation and are carried as
//! opaque summaries. [`assess_plan`] checks a plan against the measure
//! catalog: declared categories, excluded measures, and compatibility
//! between measures that end up installed together.

use std::collections::BTreeMap;
use std::ops::AddAssign;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use retrofit_banding::EfficiencyRatingBand;
use retrofit_core::{DomesticEnergyEndUse, EnergySource};
use retrofit_dwelling::Dwelling;

use crate::catalog::MeasureCatalog;
use crate::improvement::{Improvement, ImprovementDetails, RecommendationsSettings};
use crate::measure::{Compatibility, ImprovementCategory, ImprovementMeasure};

// ─── Energy Summaries ───────────────────────────────────────────────

/// Annual consumption figures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsumptionSummary {
    /// Delivered energy (kWh).
    pub energy: f64,
    /// Emissions (kgCO2e).
    pub co2e: f64,
    /// Running cost (GBP).
    pub operating_cost: f64,
}

impl AddAssign for ConsumptionSummary {
    fn add_assign(&mut self, rhs: Self) {
        self.energy += rhs.energy;
        self.co2e += rhs.co2e;
        self.operating_cost += rhs.operating_cost;
    }
}

/// Annual on-site generation figures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSummary {
    /// Energy generated (kWh).
    pub energy_generated: f64,
    /// Generated energy used on site (kWh).
    pub energy_self_consumed: f64,
    /// Generated energy exported (kWh).
    pub energy_exported: f64,
    /// Emissions avoided (kgCO2e).
    pub co2e_reduction: f64,
    /// Running cost avoided (GBP).
    pub operating_cost_reduction_total: f64,
    /// Export income (GBP).
    pub export_revenue: f64,
}

impl AddAssign for GenerationSummary {
    fn add_assign(&mut self, rhs: Self) {
        self.energy_generated += rhs.energy_generated;
        self.energy_self_consumed += rhs.energy_self_consumed;
        self.energy_exported += rhs.energy_exported;
        self.co2e_reduction += rhs.co2e_reduction;
        self.operating_cost_reduction_total += rhs.operating_cost_reduction_total;
        self.export_revenue += rhs.export_revenue;
    }
}

/// Simulated annual energy profile of a dwelling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnergyProfile {
    /// Totals over all fuels and end uses.
    pub annual_energy_total: ConsumptionSummary,
    /// Breakdown by fuel.
    pub annual_energy_sources: BTreeMap<EnergySource, ConsumptionSummary>,
    /// Breakdown by end use.
    pub annual_energy_end_use: BTreeMap<DomesticEnergyEndUse, ConsumptionSummary>,
    /// On-site generation.
    pub annual_energy_generation: GenerationSummary,
    /// Predicted rating band.
    pub predicted_epc_rating: Option<EfficiencyRatingBand>,
    /// Predicted rating score.
    pub predicted_epc_score: Option<u32>,
}

/// Sums every consumption and generation figure. The predicted rating and
/// score are not additive and keep the left-hand value.
impl AddAssign<&EnergyProfile> for EnergyProfile {
    fn add_assign(&mut self, rhs: &EnergyProfile) {
        self.annual_energy_total += rhs.annual_energy_total;
        for (source, summary) in &rhs.annual_energy_sources {
            *self.annual_energy_sources.entry(*source).or_default() += *summary;
        }
        for (end_use, summary) in &rhs.annual_energy_end_use {
            *self.annual_energy_end_use.entry(*end_use).or_default() += *summary;
        }
        self.annual_energy_generation += rhs.annual_energy_generation;
    }
}

// ─── Plan Model ─────────────────────────────────────────────────────

/// An improvement as listed in a plan, with or without presentation
/// details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlannedImprovement {
    /// With details.
    Detailed(ImprovementDetails),
    /// Measure, specification and costs only.
    Basic(Improvement),
}

impl PlannedImprovement {
    /// The underlying improvement.
    pub fn improvement(&self) -> &Improvement {
        match self {
            Self::Detailed(details) => &details.improvement,
            Self::Basic(improvement) => improvement,
        }
    }
}

impl From<Improvement> for PlannedImprovement {
    fn from(improvement: Improvement) -> Self {
        Self::Basic(improvement)
    }
}

impl From<ImprovementDetails> for PlannedImprovement {
    fn from(details: ImprovementDetails) -> Self {
        Self::Detailed(details)
    }
}

/// A set of improvements applied together and the simulated result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImprovementEnergyProfile {
    /// Improvements in the set.
    pub improvements: Vec<PlannedImprovement>,
    /// The dwelling with the set applied.
    #[serde(default)]
    pub improved_home: Option<Dwelling>,
    /// Energy profile with the set applied.
    pub energy_profile: EnergyProfile,
    /// Difference from the reference: the baseline for IOE, the previous
    /// stage for MTIP. Reductions are negative.
    pub relative_energy_change: EnergyProfile,
    /// Payback range in years; `(None, None)` when the set never pays back.
    #[serde(default)]
    pub payback_years: (Option<u32>, Option<u32>),
}

impl ImprovementEnergyProfile {
    /// Measures in the set, in listed order.
    pub fn measures(&self) -> impl Iterator<Item = ImprovementMeasure> + '_ {
        self.improvements.iter().map(|p| p.improvement().measure)
    }
}

/// Result of a retrofit planning run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrofitPlan {
    /// Identifier of the simulation run.
    pub simulation_id: Uuid,
    /// Energy profile of the dwelling as it stands.
    pub baseline_energy_profile: EnergyProfile,
    /// The dwelling as it stands.
    #[serde(default)]
    pub baseline_home: Option<Dwelling>,
    /// Options, each evaluated alone against the baseline.
    #[serde(default)]
    pub improvement_option_evaluation: Vec<ImprovementEnergyProfile>,
    /// Stages, each applied on top of the previous ones.
    #[serde(default)]
    pub improvement_plan: Vec<ImprovementEnergyProfile>,
}

impl RetrofitPlan {
    /// An empty plan for `baseline` with a fresh simulation id.
    pub fn new(baseline_energy_profile: EnergyProfile) -> Self {
        Self {
            simulation_id: Uuid::new_v4(),
            baseline_energy_profile,
            baseline_home: None,
            improvement_option_evaluation: Vec::new(),
            improvement_plan: Vec::new(),
        }
    }

    /// Total change across all MTIP stages.
    pub fn cumulative_change(&self) -> EnergyProfile {
        let mut total = EnergyProfile::default();
        for stage in &self.improvement_plan {
            total += &stage.relative_energy_change;
        }
        total
    }

    /// Energy profile after the last MTIP stage, or the baseline when the
    /// plan has no stages.
    pub fn final_profile(&self) -> &EnergyProfile {
        self.improvement_plan
            .last()
            .map_or(&self.baseline_energy_profile, |s| &s.energy_profile)
    }
}

// ─── Assessment ─────────────────────────────────────────────────────

/// Which list of a plan a finding refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanSection {
    /// `improvement_option_evaluation`.
    OptionEvaluation,
    /// `improvement_plan`.
    Plan,
}

impl PlanSection {
    /// Field name of the list on a plan.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OptionEvaluation => "improvement_option_evaluation",
            Self::Plan => "improvement_plan",
        }
    }
}

impl std::fmt::Display for PlanSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One problem found in a plan. `entry` is the option or stage index.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "finding", rename_all = "snake_case")]
pub enum PlanFinding {
    /// The declared category differs from the catalog's.
    CategoryMismatch {
        /// Section.
        section: PlanSection,
        /// Option or stage index.
        entry: usize,
        /// The measure.
        measure: ImprovementMeasure,
        /// Category given in the plan.
        declared: ImprovementCategory,
        /// Category in the catalog, if the catalog knows the measure.
        expected: Option<ImprovementCategory>,
    },
    /// The measure is excluded by the recommendation settings.
    ExcludedMeasure {
        /// Section.
        section: PlanSection,
        /// Option or stage index.
        entry: usize,
        /// The measure.
        measure: ImprovementMeasure,
    },
    /// A specification or cost range is out of range.
    InvalidImprovement {
        /// Section.
        section: PlanSection,
        /// Option or stage index.
        entry: usize,
        /// The measure.
        measure: ImprovementMeasure,
        /// Offending field.
        field: String,
        /// Why it was rejected.
        reason: String,
    },
    /// Two measures installed together have a recorded interaction.
    Compatibility {
        /// Section.
        section: PlanSection,
        /// Option or stage index where `measure` is applied.
        entry: usize,
        /// The measure whose row records the interaction.
        measure: ImprovementMeasure,
        /// The other measure.
        other: ImprovementMeasure,
        /// Option or stage index where `other` is applied.
        other_entry: usize,
        /// Severity.
        severity: Compatibility,
    },
}

/// Every finding for a plan, in section then entry order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlanAssessment {
    /// Findings.
    pub findings: Vec<PlanFinding>,
}

impl PlanAssessment {
    /// Whether nothing was found.
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// The most severe compatibility finding, if any.
    pub fn worst_compatibility(&self) -> Option<Compatibility> {
        self.findings
            .iter()
            .filter_map(|f| match f {
                PlanFinding::Compatibility { severity, .. } => Some(*severity),
                _ => None,
            })
            .max()
    }

    /// Whether any pair of measures must not be combined.
    pub fn has_incompatible(&self) -> bool {
        self.worst_compatibility() == Some(Compatibility::Incompatible)
    }

    /// Whether the plan cannot go ahead as written. Compatibility findings
    /// below [`Compatibility::Incompatible`] are advisory.
    pub fn has_blocking(&self) -> bool {
        self.findings.iter().any(|f| match f {
            PlanFinding::Compatibility { severity, .. } => {
                *severity == Compatibility::Incompatible
            }
            _ => true,
        })
    }
}

/// Check `plan` against `catalog` and `settings`.
///
/// IOE options are checked in isolation. Each MTIP stage is checked
/// against itself and every measure applied in earlier stages, in both
/// directions.
pub fn assess_plan(
    plan: &RetrofitPlan,
    catalog: &MeasureCatalog,
    settings: &RecommendationsSettings,
) -> PlanAssessment {
    let mut findings = Vec::new();

    for (entry, option) in plan.improvement_option_evaluation.iter().enumerate() {
        let section = PlanSection::OptionEvaluation;
        check_entries(section, entry, option, catalog, settings, &mut findings);
        let applied: Vec<_> = option.measures().map(|m| (entry, m)).collect();
        check_within(section, &applied, catalog, &mut findings);
    }

    let mut installed: Vec<(usize, ImprovementMeasure)> = Vec::new();
    for (entry, stage) in plan.improvement_plan.iter().enumerate() {
        check_entries(PlanSection::Plan, entry, stage, catalog, settings, &mut findings);
        let current: Vec<_> = stage.measures().map(|m| (entry, m)).collect();
        check_within(PlanSection::Plan, &current, catalog, &mut findings);
        check_across(PlanSection::Plan, &current, &installed, catalog, &mut findings);
        check_across(PlanSection::Plan, &installed, &current, catalog, &mut findings);
        installed.extend(current);
    }

    tracing::debug!(
        simulation_id = %plan.simulation_id,
        findings = findings.len(),
        "plan assessed"
    );
    PlanAssessment { findings }
}

fn check_entries(
    section: PlanSection,
    entry: usize,
    profile: &ImprovementEnergyProfile,
    catalog: &MeasureCatalog,
    settings: &RecommendationsSettings,
    findings: &mut Vec<PlanFinding>,
) {
    for planned in &profile.improvements {
        let improvement = planned.improvement();
        let measure = improvement.measure;

        let expected = catalog.category_of(measure);
        if expected != Some(improvement.category) {
            findings.push(PlanFinding::CategoryMismatch {
                section,
                entry,
                measure,
                declared: improvement.category,
                expected,
            });
        }
        if settings.excludes(measure) {
            findings.push(PlanFinding::ExcludedMeasure {
                section,
                entry,
                measure,
            });
        }
        for violation in improvement.violations() {
            findings.push(PlanFinding::InvalidImprovement {
                section,
                entry,
                measure,
                field: violation.field_path(),
                reason: violation.to_string(),
            });
        }
    }
}

/// Every ordered pair of distinct positions within one list.
fn check_within(
    section: PlanSection,
    applied: &[(usize, ImprovementMeasure)],
    catalog: &MeasureCatalog,
    findings: &mut Vec<PlanFinding>,
) {
    for (i, &left) in applied.iter().enumerate() {
        for (j, &right) in applied.iter().enumerate() {
            if i != j {
                record_pair(section, left, right, catalog, findings);
            }
        }
    }
}

/// Every ordered pair with the measure from `left` and the other from `right`.
fn check_across(
    section: PlanSection,
    left: &[(usize, ImprovementMeasure)],
    right: &[(usize, ImprovementMeasure)],
    catalog: &MeasureCatalog,
    findings: &mut Vec<PlanFinding>,
) {
    for &l in left {
        for &r in right {
            record_pair(section, l, r, catalog, findings);
        }
    }
}

fn record_pair(
    section: PlanSection,
    (entry, measure): (usize, ImprovementMeasure),
    (other_entry, other): (usize, ImprovementMeasure),
    catalog: &MeasureCatalog,
    findings: &mut Vec<PlanFinding>,
) {
    if let Some(severity) = catalog.compatibility(measure, other) {
        findings.push(PlanFinding::Compatibility {
            section,
            entry,
            measure,
            other,
            other_entry,
            severity,
        });
    }
}
