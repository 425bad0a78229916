//! Improvements as they appear in recommendations and plans.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use retrofit_core::ValidationError;

use crate::catalog::MeasureCatalog;
use crate::measure::{
    Compatibility, Disruption, ImprovementCategory, ImprovementMeasure, InstallationTimeframe,
};
use crate::specification::Specifications;

/// A measure applied to a dwelling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Improvement {
    /// Category of the measure.
    pub category: ImprovementCategory,
    /// The measure.
    pub measure: ImprovementMeasure,
    /// What the measure changes, when modelled.
    #[serde(default)]
    pub specification: Option<Specifications>,
    /// Capital cost range (GBP), scaled to the dwelling.
    #[serde(default)]
    pub capital_cost: Option<(u32, u32)>,
    /// Embodied carbon range (kgCO2e).
    #[serde(default)]
    pub embodied_carbon: Option<(u32, u32)>,
}

impl Improvement {
    /// An improvement without specification or costs.
    pub fn new(category: ImprovementCategory, measure: ImprovementMeasure) -> Self {
        Self {
            category,
            measure,
            specification: None,
            capital_cost: None,
            embodied_carbon: None,
        }
    }

    /// `"{category} {measure}"`.
    pub fn description(&self) -> String {
        format!("{} {}", self.category, self.measure)
    }

    /// Range violations in the specifications and cost ranges.
    pub fn violations(&self) -> Vec<ValidationError> {
        let mut out = Vec::new();
        match &self.specification {
            Some(Specifications::One(spec)) => out.extend(spec.violations("specification")),
            Some(Specifications::Many(specs)) => {
                for (i, spec) in specs.iter().enumerate() {
                    out.extend(spec.violations(&format!("specification[{i}]")));
                }
            }
            None => {}
        }
        for (field, range) in [
            ("capital_cost", self.capital_cost),
            ("embodied_carbon", self.embodied_carbon),
        ] {
            if let Some((low, high)) = range {
                if low > high {
                    out.push(ValidationError::constraint(
                        field,
                        format!("lower bound {low} exceeds upper bound {high}"),
                    ));
                }
            }
        }
        out
    }
}

/// A funding scheme available for an improvement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImprovementFunding {
    /// Grant amount (GBP), fixed or a range.
    pub amount: FundingAmount,
    /// Scheme name.
    pub title: String,
    /// Scheme description.
    pub description: String,
}

/// A fixed amount or an inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FundingAmount {
    /// A fixed amount.
    Fixed(u32),
    /// A range.
    Range(u32, u32),
}

/// An improvement with the information a recommendation presents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImprovementDetails {
    /// The improvement.
    #[serde(flatten)]
    pub improvement: Improvement,
    /// Whether further models run for the improvement.
    #[serde(default = "default_run_model")]
    pub run_model: bool,
    /// Funding options.
    #[serde(default)]
    pub funding: Vec<ImprovementFunding>,
    /// Disruption to occupants during installation.
    pub installation_disruption: Disruption,
    /// Time on site.
    pub installation_time: InstallationTimeframe,
    /// Whether the improvement is relevant to neighbouring properties.
    #[serde(default)]
    pub community_potential: Option<bool>,
    /// Measures that must be carried out before or alongside this one.
    #[serde(default)]
    pub required_measures: Vec<ImprovementMeasure>,
    /// Measures with a recorded interaction, and its severity.
    /// Measures without an interaction are not listed.
    #[serde(default)]
    pub compatibility: BTreeMap<ImprovementMeasure, Compatibility>,
    /// Limitations to consider before recommending the improvement.
    #[serde(default)]
    pub notes: Vec<String>,
}

fn default_run_model() -> bool {
    true
}

impl ImprovementDetails {
    /// Details for `measure` with its category and compatibility row taken
    /// from `catalog`. `None` when the catalog has no category for it.
    pub fn from_catalog(
        catalog: &MeasureCatalog,
        measure: ImprovementMeasure,
        installation_disruption: Disruption,
        installation_time: InstallationTimeframe,
    ) -> Option<Self> {
        let category = catalog.category_of(measure)?;
        Some(Self {
            improvement: Improvement::new(category, measure),
            run_model: true,
            funding: Vec::new(),
            installation_disruption,
            installation_time,
            community_potential: None,
            required_measures: Vec::new(),
            compatibility: catalog.matrix().row(measure),
            notes: Vec::new(),
        })
    }

    /// `"{category} {measure}"`.
    pub fn description(&self) -> String {
        self.improvement.description()
    }
}

/// Recommendation engine settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationsSettings {
    /// Measures unsuitable for the dwelling or unacceptable to the
    /// occupant.
    pub exclude_improvement_measures: Vec<ImprovementMeasure>,
}

impl RecommendationsSettings {
    /// Whether `measure` is excluded.
    pub fn excludes(&self, measure: ImprovementMeasure) -> bool {
        self.exclude_improvement_measures.contains(&measure)
    }
}
