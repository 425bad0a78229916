//! # Heating and Hot-Water Systems
//!
//! Appliances carry an optional, tagged set of appliance-specific
//! properties keyed by `system_type`. Heating systems accept boiler and
//! heat-pump properties; hot-water systems additionally accept immersion
//! heater and range cooker properties.
//!
//! Efficiency is recorded per end use (`"Space heating"`, `"Hot water"`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use retrofit_core::{
    DomesticEnergyEndUse, Efficiency, EnergySource, HeatingSystemEmitter, HeatingSystemSource,
    HotWaterSource, InsulationMaterial,
};

use crate::constraints::Checker;

/// Boiler details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoilerProperties {
    /// Condensing boiler.
    pub condensing: Option<bool>,
    /// Combination boiler.
    pub combination: Option<bool>,
    /// Back boiler.
    pub back_boiler: Option<bool>,
}

/// Heat-pump details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatPumpProperties {
    /// Estimated heat output required for the dwelling (kW).
    pub output_power: Option<f64>,
}

/// Immersion-heater details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImmersionHeaterProperties {
    /// Power rating (kW).
    #[serde(default = "ImmersionHeaterProperties::default_power")]
    pub power: f64,
}

impl ImmersionHeaterProperties {
    /// Typical domestic immersion element rating.
    pub const DEFAULT_POWER_KW: f64 = 3.0;

    fn default_power() -> f64 {
        Self::DEFAULT_POWER_KW
    }
}

impl Default for ImmersionHeaterProperties {
    fn default() -> Self {
        Self {
            power: Self::DEFAULT_POWER_KW,
        }
    }
}

/// Range-cooker details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeCookerProperties {
    /// Automatic ignition.
    pub automatic_ignition: Option<bool>,
}

/// Appliance properties of a space-heating system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "system_type", rename_all = "snake_case")]
pub enum HeatingSourceProperties {
    /// A boiler.
    Boiler(BoilerProperties),
    /// A heat pump.
    HeatPump(HeatPumpProperties),
}

/// Appliance properties of a hot-water system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "system_type", rename_all = "snake_case")]
pub enum HotWaterSourceProperties {
    /// A boiler.
    Boiler(BoilerProperties),
    /// A heat pump.
    HeatPump(HeatPumpProperties),
    /// An immersion heater.
    ImmersionHeater(ImmersionHeaterProperties),
    /// A range cooker.
    RangeCooker(RangeCookerProperties),
}

/// A space-heating system.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatingSystem {
    /// Heat source.
    pub source: Option<HeatingSystemSource>,
    /// Appliance properties.
    pub source_properties: Option<HeatingSourceProperties>,
    /// Fuel.
    pub energy_source: Option<EnergySource>,
    /// Efficiency by end use.
    pub efficiency: BTreeMap<DomesticEnergyEndUse, Efficiency>,
    /// Appliance age in years; 0 for new.
    pub age: u32,
    /// Heat emitters.
    pub emitters: Vec<HeatingSystemEmitter>,
}

impl HeatingSystem {
    /// Whether the system circulates heated liquid to its emitters.
    ///
    /// `None` when the recorded data does not decide it. The rules are
    /// ordered; the warm-air-only check must run before the emitter
    /// check for heat pumps and community schemes.
    pub fn is_wet(&self) -> Option<bool> {
        use HeatingSystemSource as S;

        let source = self.source?;

        if source == S::Boiler {
            return Some(true);
        }

        if matches!(
            source,
            S::ElectricUnderfloorHeaters
                | S::CeilingHeating
                | S::StorageHeaters
                | S::ExhaustAirMevSourceHeatPump
                | S::PortableHeaters
        ) {
            return Some(false);
        }

        if self.emitters == [HeatingSystemEmitter::WarmAir] {
            return Some(false);
        }

        let hydronic_emitters = self.emitters.iter().any(|e| {
            matches!(
                e,
                HeatingSystemEmitter::Radiators | HeatingSystemEmitter::Underfloor
            )
        });
        // Room heaters here have a back-boiler coil feeding radiators.
        let hydronic_source = matches!(
            source,
            S::AirSourceHeatPump
                | S::GroundSourceHeatPump
                | S::WaterSourceHeatPump
                | S::CommunityScheme
                | S::CommunitySchemeRecoveredHeatFromBoilers
                | S::RoomHeaters
        );
        if hydronic_emitters && hydronic_source {
            return Some(true);
        }

        None
    }

    /// Efficiency for `end_use`, if recorded.
    pub fn efficiency_for(&self, end_use: DomesticEnergyEndUse) -> Option<&Efficiency> {
        self.efficiency.get(&end_use)
    }
}

/// Hot-water storage cylinder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotWaterTank {
    /// Volume (litres).
    pub volume: Option<u32>,
    /// Insulation thickness (mm).
    pub insulation_thickness: Option<u32>,
    /// Insulation material.
    pub insulation_material: Option<InsulationMaterial>,
    /// Whether the cylinder has a thermostat.
    pub has_thermostat: Option<bool>,
}

/// A hot-water system.
///
/// When `source` is a reference to the main or secondary heating system,
/// `energy_source` and the hot-water efficiency may be left out and are
/// taken from the first system of the referenced list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotWaterSystem {
    /// Heat source, or a reference to a heating-system list.
    pub source: Option<HotWaterSource>,
    /// Appliance properties.
    pub source_properties: Option<HotWaterSourceProperties>,
    /// Fuel.
    pub energy_source: Option<EnergySource>,
    /// Efficiency by end use.
    pub efficiency: BTreeMap<DomesticEnergyEndUse, Efficiency>,
    /// Appliance age in years; 0 for new.
    pub age: u32,
    /// Storage cylinder, if any.
    pub storage: Option<HotWaterTank>,
}

impl HotWaterSystem {
    /// Efficiency for `end_use`, if recorded.
    pub fn efficiency_for(&self, end_use: DomesticEnergyEndUse) -> Option<&Efficiency> {
        self.efficiency.get(&end_use)
    }

    /// Whether the source points at a heating-system list.
    pub fn is_from_heating_system(&self) -> bool {
        self.source.map_or(false, |s| s.is_reference())
    }

    pub(crate) fn check(&self, path: &str, c: &mut Checker) {
        if let Some(HotWaterSourceProperties::ImmersionHeater(props)) = &self.source_properties {
            c.require(
                props.power > 0.0,
                format!("{path}.source_properties.power"),
                "must be greater than 0",
            );
        }
        if let Some(volume) = self.storage.as_ref().and_then(|t| t.volume) {
            c.require(
                volume > 0,
                format!("{path}.storage.volume"),
                "must be greater than 0",
            );
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn emitters() -> impl Strategy<Value = Vec<HeatingSystemEmitter>> {
        prop::collection::vec(prop::sample::select(HeatingSystemEmitter::ALL.to_vec()), 0..4)
    }

    fn source() -> impl Strategy<Value = HeatingSystemSource> {
        prop::sample::select(HeatingSystemSource::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn wet_requires_hydronic_emitters_unless_boiler(
            source in source(),
            emitters in emitters(),
        ) {
            let system = HeatingSystem {
                source: Some(source),
                emitters: emitters.clone(),
                ..Default::default()
            };
            if system.is_wet() == Some(true) && source != HeatingSystemSource::Boiler {
                prop_assert!(emitters.iter().any(|e| *e != HeatingSystemEmitter::WarmAir));
            }
        }
    }
}
