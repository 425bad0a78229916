//! # Dwelling Records
//!
//! Two shapes of the same record:
//!
//! - [`DwellingPartial`]: every attribute optional. Used while assembling
//!   data from assessments, surveys and user input.
//! - [`Dwelling`]: the complete, simulatable record. A documented subset
//!   of attributes is mandatory and the cross-field invariants checked by
//!   [`promote`](crate::promote) hold.
//!
//! Attributes that stay optional on both shapes live in
//! [`DwellingDetails`], flattened into each, so a complete record always
//! converts back into a partial one without loss.
//!
//! A `Dwelling` can only be obtained through promotion; deserializing one
//! runs the promotion.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Deserializer, Serialize};

use retrofit_banding::{classify_score, AgeBand, EfficiencyRatingBand};
use retrofit_core::{
    BuiltForm, ClassificationError, Country, DomesticEnergyEndUse, Efficiency, EnergySource,
    FlatLevel, HeatLossCorridor, HeatingControlMethod, ImprovementType, Jurisdiction, Level,
    MeterType, PropertyType, Uprn, ValidationError,
};

use crate::constraints::Checker;
use crate::fabric::{Door, Floor, Glazing, Location, Roof, UkAddress, Wall};
use crate::heating::{HeatingSystem, HotWaterSystem};
use crate::solar::SolarPvArray;

// ─── Shared optional attributes ──────────────────────────────────────

/// Attributes optional on both the partial and the complete record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DwellingDetails {
    /// Property reference; used to look up the location when unknown.
    pub uprn: Option<Uprn>,
    /// Postal address; used to look up the location when no UPRN is known.
    pub address: Option<UkAddress>,
    /// Assessment country.
    pub country: Option<Country>,
    /// Storey of a flat.
    pub flat_level: Option<FlatLevel>,
    /// Ground floor, if the dwelling has one.
    pub floor: Option<Floor>,
    /// Roof, if the dwelling has one.
    pub roof: Option<Roof>,
    /// Electricity meter type.
    pub meter_type: Option<MeterType>,
    /// Corridor or stairwell adjoining a flat.
    pub heat_loss_corridor: Option<HeatLossCorridor>,
    /// Listed building.
    pub is_listed_building: Option<bool>,
    /// Inside a conservation area.
    pub is_in_conservation_area: Option<bool>,
    /// Number of habitable rooms.
    pub habitable_room_count: Option<u32>,
    /// Number of heated rooms.
    pub heated_room_count: Option<u32>,
    /// Percentage of windows draught-proofed.
    pub draught_proofed_window_percentage: Option<u32>,
    /// Percentage of doors draught-proofed.
    pub draught_proofed_door_percentage: Option<u32>,
    /// Secondary heating systems; at least one when present.
    pub secondary_heating_systems: Option<Vec<HeatingSystem>>,
    /// Controls of the main heating systems.
    pub heating_systems_controls: Option<Vec<HeatingControlMethod>>,
    /// Photovoltaic arrays.
    pub solar_pv: Option<Vec<SolarPvArray>>,
    /// Roof area available for new arrays (m²).
    pub available_pv_array_size: Option<f64>,
    /// Energy source of each end use.
    pub end_use_energy_sources: BTreeMap<DomesticEnergyEndUse, EnergySource>,
    /// Improvements suggested on the certificate.
    pub epc_suggested_improvements: Option<BTreeSet<ImprovementType>>,
    /// Certificate rating band.
    pub epc_rating: Option<EfficiencyRatingBand>,
    /// Certificate score, 0 to 100.
    pub epc_score: Option<u32>,
}

impl DwellingDetails {
    fn check(&self, c: &mut Checker) {
        if let Some(address) = &self.address {
            address.check("address", c);
        }
        if let Some(floor) = &self.floor {
            floor.check("floor", c);
        }
        if let Some(roof) = &self.roof {
            roof.check("roof", c);
        }
        if let Some(n) = self.habitable_room_count {
            c.require(n > 0, "habitable_room_count", "must be greater than 0");
        }
        if let Some(n) = self.heated_room_count {
            c.require(n > 0, "heated_room_count", "must be greater than 0");
        }
        c.percentage(
            self.draught_proofed_window_percentage.map(f64::from),
            "draught_proofed_window_percentage",
        );
        c.percentage(
            self.draught_proofed_door_percentage.map(f64::from),
            "draught_proofed_door_percentage",
        );
        c.non_empty(
            self.secondary_heating_systems.as_deref(),
            "secondary_heating_systems",
        );
        for (i, array) in self.solar_pv.iter().flatten().enumerate() {
            array.check(&format!("solar_pv[{i}]"), c);
        }
    }
}

// ─── Partial record ──────────────────────────────────────────────────

/// A dwelling record with every attribute optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DwellingPartial {
    /// Geographic location.
    pub location: Option<Location>,
    /// Dwelling type.
    pub property_type: Option<PropertyType>,
    /// Attachment to neighbours.
    pub built_form: Option<BuiltForm>,
    /// Construction-age band.
    pub age_band: Option<AgeBand>,
    /// Angle from north of the front door, below 360.
    pub north_angle: Option<u16>,
    /// Total floor area (m²).
    pub total_floor_area: Option<u32>,
    /// Interior room height (m), 2 to under 5.
    pub room_height: Option<f64>,
    /// Building levels.
    pub levels: Option<Vec<Level>>,
    /// External walls.
    pub wall: Option<Wall>,
    /// Number of external walls.
    pub external_wall_count: Option<u32>,
    /// Footprint (m²).
    pub footprint: Option<f64>,
    /// Windows.
    pub glazing: Option<Glazing>,
    /// Number of windows in external walls.
    pub window_count: Option<u32>,
    /// External doors.
    pub doors: Option<Vec<Door>>,
    /// Mains gas connection present.
    pub is_mains_gas_present: Option<bool>,
    /// Main heating systems.
    pub main_heating_systems: Option<Vec<HeatingSystem>>,
    /// Hot-water systems.
    pub hot_water_systems: Option<Vec<HotWaterSystem>>,
    /// Fixed lighting outlets.
    pub fixed_lighting_outlets_count: Option<u32>,
    /// Fixed lighting outlets with low-energy lamps.
    pub low_energy_lighting_outlets_count: Option<u32>,
    /// Percentage of outlets with low-energy lamps.
    pub low_energy_lighting_percentage: Option<f64>,
    /// Attributes optional on both shapes.
    #[serde(flatten)]
    pub details: DwellingDetails,
}

impl DwellingPartial {
    /// Every field-constraint violation, in field order.
    pub fn constraint_violations(&self) -> Vec<ValidationError> {
        let mut c = Checker::default();
        if let Some(location) = &self.location {
            location.check("location", &mut c);
        }
        if let Some(angle) = self.north_angle {
            c.require(angle < 360, "north_angle", "must be less than 360");
        }
        if let Some(area) = self.total_floor_area {
            c.require(area > 0, "total_floor_area", "must be greater than 0");
        }
        if let Some(height) = self.room_height {
            c.require(
                (2.0..5.0).contains(&height),
                "room_height",
                "must be at least 2 and less than 5",
            );
        }
        c.non_empty(self.levels.as_deref(), "levels");
        if let Some(count) = self.external_wall_count {
            c.require(count > 0, "external_wall_count", "must be greater than 0");
        }
        if let Some(footprint) = self.footprint {
            c.require(footprint > 0.0, "footprint", "must be greater than 0");
        }
        if let Some(glazing) = &self.glazing {
            glazing.check("glazing", &mut c);
        }
        c.non_empty(self.doors.as_deref(), "doors");
        c.non_empty(self.main_heating_systems.as_deref(), "main_heating_systems");
        c.non_empty(self.hot_water_systems.as_deref(), "hot_water_systems");
        for (i, system) in self.hot_water_systems.iter().flatten().enumerate() {
            system.check(&format!("hot_water_systems[{i}]"), &mut c);
        }
        c.percentage(
            self.low_energy_lighting_percentage,
            "low_energy_lighting_percentage",
        );
        self.details.check(&mut c);
        c.finish()
    }

    /// Check field constraints, reporting the first violation.
    pub fn check_constraints(&self) -> Result<(), ValidationError> {
        match self.constraint_violations().into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Promote to a complete record. See [`promote`](crate::promote).
    pub fn promote(self) -> Result<Dwelling, ValidationError> {
        crate::promote::promote(self)
    }
}

// ─── Complete record ─────────────────────────────────────────────────

/// Where a hot-water system's effective efficiency came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EfficiencyOrigin {
    /// The hot-water system's own efficiency map.
    Own,
    /// The first main heating system.
    MainSystem,
    /// The first secondary heating system.
    SecondarySystem,
}

/// Effective hot-water efficiency of one hot-water system.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotWaterEfficiency {
    /// The efficiency in effect.
    pub efficiency: Efficiency,
    /// Where it was taken from.
    pub origin: EfficiencyOrigin,
}

/// A complete dwelling record.
///
/// Fields are public for reading and adjustment; after mutating, call
/// [`Dwelling::revalidate`] to re-establish the invariants.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dwelling {
    /// Geographic location.
    pub location: Location,
    /// Dwelling type.
    pub property_type: PropertyType,
    /// Attachment to neighbours.
    pub built_form: BuiltForm,
    /// Construction-age band.
    pub age_band: AgeBand,
    /// Angle from north of the front door, below 360.
    pub north_angle: u16,
    /// Total floor area (m²).
    pub total_floor_area: u32,
    /// Interior room height (m).
    pub room_height: f64,
    /// Building levels; at least one.
    pub levels: Vec<Level>,
    /// External walls.
    pub wall: Wall,
    /// Number of external walls.
    pub external_wall_count: u32,
    /// Footprint (m²).
    pub footprint: f64,
    /// Windows; `glazing_ratio` is always present.
    pub glazing: Glazing,
    /// Number of windows in external walls.
    pub window_count: u32,
    /// External doors; at least one.
    pub doors: Vec<Door>,
    /// Mains gas connection present.
    pub is_mains_gas_present: bool,
    /// Main heating systems; at least one.
    pub main_heating_systems: Vec<HeatingSystem>,
    /// Hot-water systems; at least one.
    pub hot_water_systems: Vec<HotWaterSystem>,
    /// Fixed lighting outlets.
    pub fixed_lighting_outlets_count: u32,
    /// Fixed lighting outlets with low-energy lamps.
    pub low_energy_lighting_outlets_count: u32,
    /// Percentage of outlets with low-energy lamps.
    pub low_energy_lighting_percentage: f64,
    /// Attributes optional on both shapes.
    #[serde(flatten)]
    pub details: DwellingDetails,
    #[serde(skip)]
    pub(crate) resolved_hot_water: Vec<HotWaterEfficiency>,
}

impl Dwelling {
    /// Effective hot-water efficiency of `hot_water_systems[index]`.
    pub fn hot_water_efficiency(&self, index: usize) -> Option<&HotWaterEfficiency> {
        self.resolved_hot_water.get(index)
    }

    /// Banding jurisdiction: park homes use their own table, other
    /// dwellings that of their country. `None` when the country is unknown.
    pub fn jurisdiction(&self) -> Option<Jurisdiction> {
        match self.property_type {
            PropertyType::ParkHome => Some(Jurisdiction::ParkHome),
            _ => self.details.country.map(Jurisdiction::from_country),
        }
    }

    /// Efficiency rating: the recorded band, else the band of the
    /// recorded score.
    pub fn rating(&self) -> Result<Option<EfficiencyRatingBand>, ClassificationError> {
        match (self.details.epc_rating, self.details.epc_score) {
            (Some(band), _) => Ok(Some(band)),
            (None, Some(score)) => classify_score(score).map(Some),
            (None, None) => Ok(None),
        }
    }

    /// Demote to a partial record. Never loses data.
    pub fn into_partial(self) -> DwellingPartial {
        DwellingPartial {
            location: Some(self.location),
            property_type: Some(self.property_type),
            built_form: Some(self.built_form),
            age_band: Some(self.age_band),
            north_angle: Some(self.north_angle),
            total_floor_area: Some(self.total_floor_area),
            room_height: Some(self.room_height),
            levels: Some(self.levels),
            wall: Some(self.wall),
            external_wall_count: Some(self.external_wall_count),
            footprint: Some(self.footprint),
            glazing: Some(self.glazing),
            window_count: Some(self.window_count),
            doors: Some(self.doors),
            is_mains_gas_present: Some(self.is_mains_gas_present),
            main_heating_systems: Some(self.main_heating_systems),
            hot_water_systems: Some(self.hot_water_systems),
            fixed_lighting_outlets_count: Some(self.fixed_lighting_outlets_count),
            low_energy_lighting_outlets_count: Some(self.low_energy_lighting_outlets_count),
            low_energy_lighting_percentage: Some(self.low_energy_lighting_percentage),
            details: self.details,
        }
    }

    /// Re-run promotion, e.g. after mutating fields.
    pub fn revalidate(self) -> Result<Dwelling, ValidationError> {
        crate::promote::promote(self.into_partial())
    }
}

impl<'de> Deserialize<'de> for Dwelling {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let partial = DwellingPartial::deserialize(deserializer)?;
        crate::promote::promote(partial).map_err(serde::de::Error::custom)
    }
}
