//! # Measure Catalog
//!
//! Merges the baseline and supplementary rule sets into the immutable
//! tables the planner reads: the category map, the reverse
//! measure-to-category index and the directed compatibility matrix.
//!
//! ## Merge Rules
//!
//! - Categories: supplementary measures are unioned into the baseline
//!   category of the same name. A supplementary category absent from the
//!   baseline is a build error. So is a measure listed under two
//!   categories.
//! - Compatibility: each supplementary entry overwrites the baseline entry
//!   for the same ordered pair and nothing else. The matrix is never
//!   symmetrized, so the reverse pair keeps whatever the tables say.
//!
//! The global catalog is built once on first use and only read afterwards.

use std::collections::{BTreeMap, BTreeSet};

use lazy_static::lazy_static;
use serde::Serialize;
use thiserror::Error;

use crate::measure::{Compatibility, ImprovementCategory, ImprovementMeasure};
use crate::rules::{RuleSet, BASELINE, SUPPLEMENTARY};

/// Category name to the measures it contains.
pub type CategoryMap = BTreeMap<ImprovementCategory, BTreeSet<ImprovementMeasure>>;

/// A rule set could not be merged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A supplementary rule names a category the baseline does not define.
    #[error("supplementary rules reference unknown category {category}")]
    UnknownCategory {
        /// The unknown category.
        category: ImprovementCategory,
    },

    /// One measure appears under two categories.
    #[error("{measure} is listed under both {first} and {second}")]
    DuplicateMeasure {
        /// The measure.
        measure: ImprovementMeasure,
        /// Category it was first seen in.
        first: ImprovementCategory,
        /// Category it was seen in again.
        second: ImprovementCategory,
    },
}

// ─── Category Map ───────────────────────────────────────────────────

/// Merge the category rules of `supplementary` into `baseline`.
pub fn build_category_map(
    baseline: &RuleSet<'_>,
    supplementary: &RuleSet<'_>,
) -> Result<CategoryMap, CatalogError> {
    let mut map = CategoryMap::new();
    for (category, measures) in baseline.categories {
        map.entry(*category)
            .or_default()
            .extend(measures.iter().copied());
    }

    for (category, measures) in supplementary.categories {
        let Some(existing) = map.get_mut(category) else {
            tracing::warn!(category = %category, "supplementary rule for unknown category");
            return Err(CatalogError::UnknownCategory {
                category: *category,
            });
        };
        existing.extend(measures.iter().copied());
    }

    Ok(map)
}

fn index_categories(
    map: &CategoryMap,
) -> Result<BTreeMap<ImprovementMeasure, ImprovementCategory>, CatalogError> {
    let mut index = BTreeMap::new();
    for (category, measures) in map {
        for measure in measures {
            if let Some(first) = index.insert(*measure, *category) {
                return Err(CatalogError::DuplicateMeasure {
                    measure: *measure,
                    first,
                    second: *category,
                });
            }
        }
    }
    Ok(index)
}

// ─── Compatibility Matrix ───────────────────────────────────────────

/// Directed compatibility matrix: measure → (other measure → severity).
///
/// An absent entry means no recorded interaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CompatibilityMatrix {
    entries: BTreeMap<ImprovementMeasure, BTreeMap<ImprovementMeasure, Compatibility>>,
}

impl CompatibilityMatrix {
    /// An empty matrix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Severity recorded for `measure` combined with `other`.
    pub fn get(
        &self,
        measure: ImprovementMeasure,
        other: ImprovementMeasure,
    ) -> Option<Compatibility> {
        self.entries
            .get(&measure)
            .and_then(|row| row.get(&other))
            .copied()
    }

    /// Record a severity for the ordered pair, replacing any previous one.
    pub fn set(
        &mut self,
        measure: ImprovementMeasure,
        other: ImprovementMeasure,
        severity: Compatibility,
    ) -> Option<Compatibility> {
        self.entries
            .entry(measure)
            .or_default()
            .insert(other, severity)
    }

    /// Every recorded interaction of `measure`, keyed by the other measure.
    pub fn row(&self, measure: ImprovementMeasure) -> BTreeMap<ImprovementMeasure, Compatibility> {
        self.entries.get(&measure).cloned().unwrap_or_default()
    }

    /// Number of recorded ordered pairs.
    pub fn len(&self) -> usize {
        self.entries.values().map(BTreeMap::len).sum()
    }

    /// Whether no pair is recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate all entries in `(measure, other, severity)` order.
    pub fn iter(
        &self,
    ) -> impl Iterator<Item = (ImprovementMeasure, ImprovementMeasure, Compatibility)> + '_ {
        self.entries
            .iter()
            .flat_map(|(a, row)| row.iter().map(move |(b, s)| (*a, *b, *s)))
    }
}

/// Merge the compatibility rules of both sets. Supplementary entries win
/// for their exact ordered pair.
pub fn build_compatibility_matrix(
    baseline: &RuleSet<'_>,
    supplementary: &RuleSet<'_>,
) -> CompatibilityMatrix {
    let mut matrix = CompatibilityMatrix::new();
    for &(a, b, severity) in baseline.compatibility {
        matrix.set(a, b, severity);
    }
    for &(a, b, severity) in supplementary.compatibility {
        if let Some(previous) = matrix.set(a, b, severity) {
            if previous != severity {
                tracing::debug!(
                    measure = %a,
                    other = %b,
                    from = %previous,
                    to = %severity,
                    "supplementary rule overrides baseline"
                );
            }
        }
    }
    matrix
}

/// Severity recorded for `a` combined with `b`, if any.
pub fn query_compatibility(
    matrix: &CompatibilityMatrix,
    a: ImprovementMeasure,
    b: ImprovementMeasure,
) -> Option<Compatibility> {
    matrix.get(a, b)
}

// ─── Catalog Handle ─────────────────────────────────────────────────

/// The merged, read-only measure tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeasureCatalog {
    categories: CategoryMap,
    #[serde(skip)]
    category_of: BTreeMap<ImprovementMeasure, ImprovementCategory>,
    compatibility: CompatibilityMatrix,
}

lazy_static! {
    static ref GLOBAL: MeasureCatalog = {
        let catalog = MeasureCatalog::build(&BASELINE, &SUPPLEMENTARY)
            .expect("BUG: built-in measure rules failed to merge");
        tracing::info!(
            categories = catalog.categories.len(),
            measures = catalog.category_of.len(),
            interactions = catalog.compatibility.len(),
            "measure catalog built"
        );
        catalog
    };
}

impl MeasureCatalog {
    /// Merge two rule sets into a catalog.
    pub fn build(
        baseline: &RuleSet<'_>,
        supplementary: &RuleSet<'_>,
    ) -> Result<Self, CatalogError> {
        let categories = build_category_map(baseline, supplementary)?;
        let category_of = index_categories(&categories)?;
        let compatibility = build_compatibility_matrix(baseline, supplementary);
        Ok(Self {
            categories,
            category_of,
            compatibility,
        })
    }

    /// The catalog built from the built-in rule sets.
    pub fn global() -> &'static MeasureCatalog {
        &GLOBAL
    }

    /// The merged category map.
    pub fn categories(&self) -> &CategoryMap {
        &self.categories
    }

    /// Measures in `category`, empty when the category is not defined.
    pub fn measures(
        &self,
        category: ImprovementCategory,
    ) -> impl Iterator<Item = ImprovementMeasure> + '_ {
        self.categories
            .get(&category)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// The category `measure` belongs to.
    pub fn category_of(&self, measure: ImprovementMeasure) -> Option<ImprovementCategory> {
        self.category_of.get(&measure).copied()
    }

    /// The merged compatibility matrix.
    pub fn matrix(&self) -> &CompatibilityMatrix {
        &self.compatibility
    }

    /// Severity recorded for `a` combined with `b`.
    pub fn compatibility(
        &self,
        a: ImprovementMeasure,
        b: ImprovementMeasure,
    ) -> Option<Compatibility> {
        query_compatibility(&self.compatibility, a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use retrofit_core::Labelled;
    use ImprovementCategory as C;
    use ImprovementMeasure as M;

    #[test]
    fn supplementary_measures_join_existing_categories() {
        let map = build_category_map(&BASELINE, &SUPPLEMENTARY).unwrap();
        assert!(map[&C::Renewables].contains(&M::Battery));
        assert!(map[&C::Renewables].contains(&M::SolarPhotovoltaics));
        assert!(map[&C::Distribution].contains(&M::WetUnderFloorHeating));
        assert!(map[&C::Distribution].contains(&M::RadiatorPanels));
        assert!(map[&C::Custom].is_empty());
    }

    #[test]
    fn untouched_categories_pass_through() {
        let merged = build_category_map(&BASELINE, &SUPPLEMENTARY).unwrap();
        let plain = build_category_map(&BASELINE, &RuleSet {
            categories: &[],
            compatibility: &[],
        })
        .unwrap();
        assert_eq!(merged[&C::Walls], plain[&C::Walls]);
        assert_eq!(merged[&C::Heating], plain[&C::Heating]);
    }

    #[test]
    fn unknown_category_fails_the_build() {
        let baseline = RuleSet {
            categories: &[(C::Walls, &[M::CavityWallInsulation])],
            compatibility: &[],
        };
        let supplementary = RuleSet {
            categories: &[(C::Renewables, &[M::Battery])],
            compatibility: &[],
        };
        assert_eq!(
            build_category_map(&baseline, &supplementary),
            Err(CatalogError::UnknownCategory {
                category: C::Renewables
            })
        );
        assert!(MeasureCatalog::build(&baseline, &supplementary).is_err());
    }

    #[test]
    fn measure_in_two_categories_fails_the_build() {
        let baseline = RuleSet {
            categories: &[(C::Walls, &[M::CavityWallInsulation]), (C::Roofs, &[])],
            compatibility: &[],
        };
        let supplementary = RuleSet {
            categories: &[(C::Roofs, &[M::CavityWallInsulation])],
            compatibility: &[],
        };
        assert_eq!(
            MeasureCatalog::build(&baseline, &supplementary),
            Err(CatalogError::DuplicateMeasure {
                measure: M::CavityWallInsulation,
                first: C::Walls,
                second: C::Roofs,
            })
        );
    }

    #[test]
    fn supplementary_overrides_exact_pair_only() {
        let baseline = RuleSet {
            categories: &[],
            compatibility: &[
                (M::Battery, M::SolarPhotovoltaics, Compatibility::Incompatible),
                (M::SolarPhotovoltaics, M::Battery, Compatibility::Incompatible),
            ],
        };
        let matrix = build_compatibility_matrix(&baseline, &SUPPLEMENTARY);
        assert_eq!(
            query_compatibility(&matrix, M::Battery, M::SolarPhotovoltaics),
            Some(Compatibility::SpecificationRequired)
        );
        assert_eq!(
            query_compatibility(&matrix, M::SolarPhotovoltaics, M::Battery),
            Some(Compatibility::Incompatible)
        );
    }

    #[test]
    fn reverse_direction_is_not_symmetrized() {
        let catalog = MeasureCatalog::global();
        assert_eq!(
            catalog.compatibility(M::Battery, M::SolarPhotovoltaics),
            Some(Compatibility::SpecificationRequired)
        );
        assert_eq!(catalog.compatibility(M::SolarPhotovoltaics, M::Battery), None);
        assert_eq!(
            catalog.compatibility(M::WetUnderFloorHeating, M::RadiatorPanels),
            Some(Compatibility::NeedConstructionDetail)
        );
        assert_eq!(catalog.compatibility(M::RadiatorPanels, M::WetUnderFloorHeating), None);
    }

    #[test]
    fn baseline_rules_survive_merge() {
        let catalog = MeasureCatalog::global();
        assert_eq!(
            catalog.compatibility(M::BoilerReplacement, M::AirSourceHeatPump),
            Some(Compatibility::Incompatible)
        );
        assert_eq!(
            catalog.compatibility(M::AirSourceHeatPump, M::BoilerReplacement),
            Some(Compatibility::Incompatible)
        );
        assert_eq!(catalog.compatibility(M::LowEnergyLighting, M::Battery), None);
    }

    #[test]
    fn every_measure_has_one_category() {
        let catalog = MeasureCatalog::global();
        for &measure in M::all() {
            assert!(
                catalog.category_of(measure).is_some(),
                "{measure} has no category"
            );
        }
        assert_eq!(catalog.category_of(M::Battery), Some(C::Renewables));
        assert_eq!(catalog.measures(C::Floors).count(), 2);
    }

    #[test]
    fn row_lists_outgoing_interactions() {
        let row = MeasureCatalog::global().matrix().row(M::WetUnderFloorHeating);
        assert_eq!(row.len(), 4);
        assert_eq!(
            row.get(&M::BoilerReplacement),
            Some(&Compatibility::SpecificationRequired)
        );
        assert!(MeasureCatalog::global().matrix().row(M::WindTurbine).is_empty());
    }

    #[test]
    fn matrix_serializes_by_label() {
        let mut matrix = CompatibilityMatrix::new();
        matrix.set(M::Battery, M::SolarPhotovoltaics, Compatibility::SpecificationRequired);
        assert_eq!(
            serde_json::to_value(&matrix).unwrap(),
            serde_json::json!({
                "Battery": {"Solar photovoltaics": "compatible specification required"}
            })
        );
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn measure() -> impl Strategy<Value = ImprovementMeasure> {
            prop::sample::select(M::all())
        }

        proptest! {
            #[test]
            fn query_matches_last_rule_for_pair(a in measure(), b in measure()) {
                let expected = SUPPLEMENTARY
                    .compatibility
                    .iter()
                    .chain(BASELINE.compatibility.iter().rev())
                    .find(|(x, y, _)| *x == a && *y == b)
                    .map(|(_, _, s)| *s);
                prop_assert_eq!(MeasureCatalog::global().compatibility(a, b), expected);
            }

            #[test]
            fn set_touches_only_its_pair(a in measure(), b in measure()) {
                let mut matrix = build_compatibility_matrix(&BASELINE, &SUPPLEMENTARY);
                let before = matrix.clone();
                matrix.set(a, b, Compatibility::Incompatible);
                for (x, y, severity) in before.iter() {
                    if (x, y) != (a, b) {
                        prop_assert_eq!(matrix.get(x, y), Some(severity));
                    }
                }
            }
        }
    }
}
