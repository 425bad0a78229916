//! # Building Fabric
//!
//! Walls, floors, roofs, glazing and doors, plus the address and location
//! of the dwelling. Every attribute is optional: assessments record
//! different subsets, and missing fabric data is filled by assumptions
//! downstream.

use serde::{Deserialize, Serialize};

use retrofit_core::{
    FloorInsulationPosition, FloorType, GlazedArea, InsulationMaterial, MultipleGlazingType,
    RoofInsulationPosition, RoofType, WallInsulationType, WallType,
    WindowConstruction, WindowGlazingGap, WindowGlazingType, YearRange,
};

use crate::constraints::Checker;

/// Insulation attributes shared by every opaque fabric element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fabric {
    /// Whether the insulation is as built.
    pub is_as_built: Option<bool>,
    /// Whether the element has insulation.
    pub has_insulation: Option<bool>,
    /// Whether the insulation data is an assumption.
    pub is_insulation_assumed: Option<bool>,
    /// Insulation thickness (mm).
    pub insulation_thickness: Option<u32>,
    /// U-value (W/m²K).
    pub average_thermal_transmittance: Option<f64>,
}

/// External walls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Wall {
    /// Shared insulation attributes.
    #[serde(flatten)]
    pub fabric: Fabric,
    /// Construction.
    pub wall_type: Option<WallType>,
    /// Wall thickness (mm).
    pub wall_thickness: Option<u32>,
    /// External wall surface area (m²).
    pub surface_area: Option<u32>,
    /// External wall perimeter (m).
    pub perimeter: Option<u32>,
    /// Insulation position.
    pub insulation_position: Option<WallInsulationType>,
    /// Insulation material, if insulated.
    pub insulation_material: Option<InsulationMaterial>,
}

/// Ground floor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Floor {
    /// Shared insulation attributes.
    #[serde(flatten)]
    pub fabric: Fabric,
    /// Construction. Only solid, suspended and conservatory floors are
    /// recorded here; exposure is carried by the two flags below.
    pub floor_type: Option<FloorType>,
    /// Exposed to external air below.
    pub external_air_below: Option<bool>,
    /// Above an unheated space.
    pub unheated_space_below: Option<bool>,
    /// Insulation position.
    pub insulation_position: Option<FloorInsulationPosition>,
}

/// Roof.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Roof {
    /// Shared insulation attributes.
    #[serde(flatten)]
    pub fabric: Fabric,
    /// Construction.
    pub roof_type: Option<RoofType>,
    /// Total surface area including pitched-roof windows (m²).
    pub surface_area: Option<f64>,
    /// Pitch in degrees, pitched roofs only.
    pub pitch: Option<u32>,
    /// Insulation position.
    pub insulation_position: Option<RoofInsulationPosition>,
}

/// Windows, described in aggregate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Glazing {
    /// Glazing type.
    pub glazing_type: Option<WindowGlazingType>,
    /// Multiple-glazing type as defined by the assessment.
    pub multiple_glazing_type: Option<MultipleGlazingType>,
    /// Percentage of windows that are multiple glazed.
    pub multiple_glazing_percentage: Option<u32>,
    /// U-value (W/m²K).
    pub average_thermal_transmittance: Option<f64>,
    /// When the windows were installed.
    pub installation_year_range: Option<YearRange>,
    /// Frame material.
    pub windows_construction: Option<WindowConstruction>,
    /// Gap between panes.
    pub glazing_gap: Option<WindowGlazingGap>,
    /// Ranged estimate of glazed area.
    pub sap_glazed_area: Option<GlazedArea>,
    /// Glazing-to-wall ratio, 0 to 1. Mandatory on a complete record.
    pub glazing_ratio: Option<f64>,
}

/// An external door.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Door {
    /// U-value (W/m²K).
    pub average_thermal_transmittance: Option<f64>,
    /// Whether the door is insulated.
    pub is_insulated: Option<bool>,
    /// Whether the insulation data is an assumption.
    pub is_insulation_assumed: Option<bool>,
    /// Opens directly to outside rather than onto a corridor.
    pub direct_to_outside: Option<bool>,
}

/// Postal address in the United Kingdom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UkAddress {
    /// One to three address lines; the first must be non-empty.
    pub lines: Vec<String>,
    /// Post town.
    pub town: String,
    /// Postcode.
    pub postcode: String,
    /// Always "United Kingdom".
    #[serde(default = "UkAddress::default_country")]
    pub country: String,
}

impl UkAddress {
    fn default_country() -> String {
        "United Kingdom".to_string()
    }
}

impl std::fmt::Display for UkAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<&str> = self
            .lines
            .iter()
            .map(String::as_str)
            .chain([self.town.as_str(), self.postcode.as_str(), self.country.as_str()])
            .filter(|p| !p.is_empty())
            .collect();
        f.write_str(&parts.join(", "))
    }
}

/// Geographic point, serialized as a GeoJSON `Point`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "GeoJsonPoint", into = "GeoJsonPoint")]
pub struct Location {
    /// Longitude in degrees.
    pub longitude: f64,
    /// Latitude in degrees.
    pub latitude: f64,
}

#[derive(Serialize, Deserialize)]
#[serde(tag = "type")]
enum GeoJsonPoint {
    Point { coordinates: [f64; 2] },
}

impl From<GeoJsonPoint> for Location {
    fn from(GeoJsonPoint::Point { coordinates }: GeoJsonPoint) -> Self {
        Self {
            longitude: coordinates[0],
            latitude: coordinates[1],
        }
    }
}

impl From<Location> for GeoJsonPoint {
    fn from(value: Location) -> Self {
        GeoJsonPoint::Point {
            coordinates: [value.longitude, value.latitude],
        }
    }
}

// ─── Field constraints ───────────────────────────────────────────────

impl Location {
    pub(crate) fn check(&self, path: &str, c: &mut Checker) {
        c.require(
            (-180.0..=180.0).contains(&self.longitude),
            format!("{path}.coordinates[0]"),
            "longitude must be between -180 and 180",
        );
        c.require(
            (-90.0..=90.0).contains(&self.latitude),
            format!("{path}.coordinates[1]"),
            "latitude must be between -90 and 90",
        );
    }
}

impl UkAddress {
    pub(crate) fn check(&self, path: &str, c: &mut Checker) {
        c.require(
            (1..=3).contains(&self.lines.len()),
            format!("{path}.lines"),
            "must contain between 1 and 3 lines",
        );
        c.require(
            self.lines.first().map_or(true, |l| !l.is_empty()),
            format!("{path}.lines[0]"),
            "first line of address must not be empty",
        );
        c.require(!self.town.is_empty(), format!("{path}.town"), "must not be empty");
        c.require(
            !self.postcode.is_empty(),
            format!("{path}.postcode"),
            "must not be empty",
        );
        c.require(
            self.country == "United Kingdom",
            format!("{path}.country"),
            "must be \"United Kingdom\"",
        );
    }
}

impl Floor {
    pub(crate) fn check(&self, path: &str, c: &mut Checker) {
        if let Some(floor_type) = self.floor_type {
            c.require(
                matches!(
                    floor_type,
                    FloorType::Solid | FloorType::Suspended | FloorType::Conservatory
                ),
                format!("{path}.floor_type"),
                format!("\"{floor_type}\" is not a ground-floor construction"),
            );
        }
    }
}

impl Roof {
    pub(crate) fn check(&self, path: &str, c: &mut Checker) {
        if let Some(area) = self.surface_area {
            c.require(area > 0.0, format!("{path}.surface_area"), "must be greater than 0");
        }
        if let Some(pitch) = self.pitch {
            c.require(pitch <= 90, format!("{path}.pitch"), "must be between 0 and 90");
        }
    }
}

impl Glazing {
    pub(crate) fn check(&self, path: &str, c: &mut Checker) {
        if let Some(pct) = self.multiple_glazing_percentage {
            c.require(
                pct <= 100,
                format!("{path}.multiple_glazing_percentage"),
                "must be between 0 and 100",
            );
        }
        if let Some(ratio) = self.glazing_ratio {
            c.require(
                (0.0..=1.0).contains(&ratio),
                format!("{path}.glazing_ratio"),
                "must be between 0 and 1",
            );
        }
    }
}
