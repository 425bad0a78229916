//! # Rule Tables
//!
//! Two rule sets feed the catalog:
//!
//! - [`BASELINE`]: the regulatory categories and compliance-risk matrix.
//! - [`SUPPLEMENTARY`]: in-house additions. They may add measures to
//!   existing categories and add or override compatibility entries.
//!
//! Compatibility entries are directed `(measure, other, severity)`
//! triples. A symmetric interaction is listed in both directions.

use crate::measure::{Compatibility, ImprovementCategory, ImprovementMeasure};

use Compatibility::{Incompatible, NeedConstructionDetail, SpecificationRequired};
use ImprovementCategory as C;
use ImprovementMeasure as M;

/// A category and the measures it contains.
pub type CategoryRule<'a> = (ImprovementCategory, &'a [ImprovementMeasure]);

/// A directed compatibility entry.
pub type CompatibilityRule = (ImprovementMeasure, ImprovementMeasure, Compatibility);

/// One set of category and compatibility rules.
#[derive(Debug, Clone, Copy)]
pub struct RuleSet<'a> {
    /// Category membership.
    pub categories: &'a [CategoryRule<'a>],
    /// Directed compatibility entries.
    pub compatibility: &'a [CompatibilityRule],
}

/// Regulatory baseline.
pub const BASELINE: RuleSet<'static> = RuleSet {
    categories: &[
        (
            C::Walls,
            &[
                M::CavityWallInsulation,
                M::ExternalWallInsulation,
                M::InternalWallInsulation,
                M::PartyWallInsulation,
            ],
        ),
        (
            C::Roofs,
            &[
                M::LoftInsulation,
                M::FlatRoofInsulation,
                M::RoomInRoofInsulation,
                M::PitchedRoofInsulation,
            ],
        ),
        (C::Floors, &[M::SuspendedFloorInsulation, M::SolidFloorInsulation]),
        (
            C::WindowsAndDoors,
            &[
                M::DoubleGlazing,
                M::TripleGlazing,
                M::SecondaryGlazing,
                M::ExternalDoors,
            ],
        ),
        (
            C::Ventilation,
            &[
                M::DraughtProofing,
                M::MechanicalVentilationHeatRecovery,
                M::ExtractVentilation,
            ],
        ),
        (
            C::Heating,
            &[
                M::BoilerReplacement,
                M::AirSourceHeatPump,
                M::GroundSourceHeatPump,
                M::BiomassBoiler,
                M::HighHeatRetentionStorageHeaters,
            ],
        ),
        (C::Distribution, &[M::RadiatorPanels]),
        (C::Controls, &[M::HeatingControls, M::ZoneControl]),
        (
            C::HotWater,
            &[
                M::HotWaterCylinderInsulation,
                M::HotWaterCylinderThermostat,
                M::WasteWaterHeatRecovery,
            ],
        ),
        (C::Lighting, &[M::LowEnergyLighting]),
        (C::Renewables, &[M::SolarPhotovoltaics, M::SolarThermal, M::WindTurbine]),
        (C::Custom, &[]),
    ],
    compatibility: &[
        // Walls
        (M::CavityWallInsulation, M::ExternalWallInsulation, SpecificationRequired),
        (M::ExternalWallInsulation, M::CavityWallInsulation, SpecificationRequired),
        (M::ExternalWallInsulation, M::InternalWallInsulation, NeedConstructionDetail),
        (M::InternalWallInsulation, M::ExternalWallInsulation, NeedConstructionDetail),
        (M::ExternalWallInsulation, M::DoubleGlazing, NeedConstructionDetail),
        (M::DoubleGlazing, M::ExternalWallInsulation, NeedConstructionDetail),
        (M::ExternalWallInsulation, M::TripleGlazing, NeedConstructionDetail),
        (M::TripleGlazing, M::ExternalWallInsulation, NeedConstructionDetail),
        (M::InternalWallInsulation, M::RadiatorPanels, NeedConstructionDetail),
        // Roofs
        (M::LoftInsulation, M::RoomInRoofInsulation, NeedConstructionDetail),
        (M::RoomInRoofInsulation, M::LoftInsulation, NeedConstructionDetail),
        (M::PitchedRoofInsulation, M::SolarPhotovoltaics, NeedConstructionDetail),
        (M::SolarPhotovoltaics, M::PitchedRoofInsulation, NeedConstructionDetail),
        // Air-tightness needs controlled ventilation.
        (M::DraughtProofing, M::MechanicalVentilationHeatRecovery, SpecificationRequired),
        (M::MechanicalVentilationHeatRecovery, M::DraughtProofing, SpecificationRequired),
        (M::DraughtProofing, M::ExtractVentilation, SpecificationRequired),
        (M::ExtractVentilation, M::DraughtProofing, SpecificationRequired),
        (M::MechanicalVentilationHeatRecovery, M::ExtractVentilation, Incompatible),
        (M::ExtractVentilation, M::MechanicalVentilationHeatRecovery, Incompatible),
        // One primary heat generator.
        (M::BoilerReplacement, M::AirSourceHeatPump, Incompatible),
        (M::AirSourceHeatPump, M::BoilerReplacement, Incompatible),
        (M::BoilerReplacement, M::GroundSourceHeatPump, Incompatible),
        (M::GroundSourceHeatPump, M::BoilerReplacement, Incompatible),
        (M::BoilerReplacement, M::BiomassBoiler, Incompatible),
        (M::BiomassBoiler, M::BoilerReplacement, Incompatible),
        (M::AirSourceHeatPump, M::GroundSourceHeatPump, Incompatible),
        (M::GroundSourceHeatPump, M::AirSourceHeatPump, Incompatible),
        (M::HighHeatRetentionStorageHeaters, M::BoilerReplacement, Incompatible),
        (M::BoilerReplacement, M::HighHeatRetentionStorageHeaters, Incompatible),
        (M::HighHeatRetentionStorageHeaters, M::AirSourceHeatPump, Incompatible),
        (M::AirSourceHeatPump, M::HighHeatRetentionStorageHeaters, Incompatible),
        (M::HighHeatRetentionStorageHeaters, M::RadiatorPanels, Incompatible),
        // Low flow temperatures.
        (M::AirSourceHeatPump, M::RadiatorPanels, SpecificationRequired),
        (M::GroundSourceHeatPump, M::RadiatorPanels, SpecificationRequired),
        (M::AirSourceHeatPump, M::HeatingControls, SpecificationRequired),
        (M::GroundSourceHeatPump, M::HeatingControls, SpecificationRequired),
        (M::AirSourceHeatPump, M::HotWaterCylinderInsulation, SpecificationRequired),
        // Roof space and cylinder sizing.
        (M::SolarPhotovoltaics, M::SolarThermal, SpecificationRequired),
        (M::SolarThermal, M::SolarPhotovoltaics, SpecificationRequired),
        (M::SolarThermal, M::HotWaterCylinderInsulation, SpecificationRequired),
        (M::SolarThermal, M::HotWaterCylinderThermostat, SpecificationRequired),
    ],
};

/// In-house additions.
pub const SUPPLEMENTARY: RuleSet<'static> = RuleSet {
    categories: &[
        (C::Renewables, &[M::Battery]),
        (C::Distribution, &[M::WetUnderFloorHeating]),
    ],
    compatibility: &[
        (M::Battery, M::SolarPhotovoltaics, SpecificationRequired),
        (M::WetUnderFloorHeating, M::RadiatorPanels, NeedConstructionDetail),
        (M::WetUnderFloorHeating, M::AirSourceHeatPump, SpecificationRequired),
        (M::WetUnderFloorHeating, M::GroundSourceHeatPump, SpecificationRequired),
        (M::WetUnderFloorHeating, M::BoilerReplacement, SpecificationRequired),
    ],
};
