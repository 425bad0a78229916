//! # Improvement Specifications
//!
//! What an improvement changes about the dwelling: a target U-value, a
//! new glazing type, a replacement heating system. Each shape is one
//! variant of [`ImprovementSpecification`], selected on the wire by its
//! `specification_type` tag, so a variant carries only the fields that
//! make sense for it.

use serde::{Deserialize, Serialize};

use retrofit_core::{
    HeatingControlMethod, InsulationMaterial, MeterType, ValidationError, WindowConstruction,
    WindowGlazingGap, WindowGlazingType,
};
use retrofit_dwelling::{HeatingSystem, HotWaterTank, SolarPvArray};

/// Insulation target for walls, roofs or floors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsulationSpecification {
    /// Target U-value (W/m²K).
    pub u_value: Option<f64>,
    /// Insulation thickness (mm).
    pub insulation_thickness: Option<u32>,
    /// Insulation material.
    pub insulation_material: Option<InsulationMaterial>,
}

/// Window replacement target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSpecification {
    /// Target U-value (W/m²K).
    #[serde(default)]
    pub u_value: Option<f64>,
    /// Glazing type of the windows being replaced. All windows when absent.
    #[serde(default)]
    pub from_window_type: Option<WindowGlazingType>,
    /// Glazing type fitted.
    pub to_window_type: WindowGlazingType,
    /// Share of windows multiple-glazed afterwards, 0 to 100.
    pub multiple_glazing_percentage: u32,
    /// Frame construction.
    #[serde(default)]
    pub windows_construction: Option<WindowConstruction>,
    /// Glazing gap.
    #[serde(default)]
    pub windows_glazing_gap: Option<WindowGlazingGap>,
}

/// Lighting target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingSpecification {
    /// Share of fixed outlets with low-energy lamps, 0 to 100.
    pub low_energy_lighting_percentage: Option<f64>,
}

/// External door target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DoorSpecification {
    /// Target U-value (W/m²K).
    pub u_value: Option<f64>,
}

/// Draught-proofing target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraughtProofingSpecification {
    /// Share of windows and doors draught-proofed, 0 to 100.
    pub draught_proofed_percentage: u32,
}

/// Heating controls fitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatingControlSpecification {
    /// Control methods or devices used by the main heating systems.
    pub control_methods: Vec<HeatingControlMethod>,
}

/// Electricity meter serving the main heating systems.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatingMeterSpecification {
    /// Meter type.
    pub meter_type: MeterType,
}

/// The specification of one improvement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "specification_type", rename_all = "snake_case")]
pub enum ImprovementSpecification {
    /// Insulation.
    #[serde(rename = "insulation_improvement")]
    Insulation(InsulationSpecification),
    /// Windows.
    #[serde(rename = "window_improvement")]
    Window(WindowSpecification),
    /// Lighting.
    #[serde(rename = "efficient_lighting")]
    Lighting(LightingSpecification),
    /// Doors.
    #[serde(rename = "door_improvement")]
    Door(DoorSpecification),
    /// Draught-proofing.
    DraughtProofing(DraughtProofingSpecification),
    /// A replacement heating system.
    HeatingSystem(HeatingSystem),
    /// Heating controls.
    HeatingControlSystem(HeatingControlSpecification),
    /// A hot-water cylinder.
    HotWaterTank(HotWaterTank),
    /// Heating meter.
    HeatingMeterType(HeatingMeterSpecification),
    /// A photovoltaic array.
    SolarPvArray(SolarPvArray),
}

impl ImprovementSpecification {
    /// The `specification_type` tag of the variant.
    pub fn type_tag(&self) -> &'static str {
        match self {
            Self::Insulation(_) => "insulation_improvement",
            Self::Window(_) => "window_improvement",
            Self::Lighting(_) => "efficient_lighting",
            Self::Door(_) => "door_improvement",
            Self::DraughtProofing(_) => "draught_proofing",
            Self::HeatingSystem(_) => "heating_system",
            Self::HeatingControlSystem(_) => "heating_control_system",
            Self::HotWaterTank(_) => "hot_water_tank",
            Self::HeatingMeterType(_) => "heating_meter_type",
            Self::SolarPvArray(_) => "solar_pv_array",
        }
    }

    /// Range violations, with field paths under `path`.
    pub fn violations(&self, path: &str) -> Vec<ValidationError> {
        let percentage = |value: f64, field: &str| {
            (!(0.0..=100.0).contains(&value)).then(|| {
                ValidationError::constraint(format!("{path}.{field}"), "must be between 0 and 100")
            })
        };
        match self {
            Self::Window(w) => percentage(
                f64::from(w.multiple_glazing_percentage),
                "multiple_glazing_percentage",
            )
            .into_iter()
            .collect(),
            Self::Lighting(l) => l
                .low_energy_lighting_percentage
                .and_then(|v| percentage(v, "low_energy_lighting_percentage"))
                .into_iter()
                .collect(),
            Self::DraughtProofing(d) => percentage(
                f64::from(d.draught_proofed_percentage),
                "draught_proofed_percentage",
            )
            .into_iter()
            .collect(),
            Self::HotWaterTank(t) if t.volume == Some(0) => vec![ValidationError::constraint(
                format!("{path}.volume"),
                "must be greater than 0",
            )],
            Self::SolarPvArray(array) => array.violations(path),
            Self::HotWaterTank(_)
            | Self::Insulation(_)
            | Self::Door(_)
            | Self::HeatingSystem(_)
            | Self::HeatingControlSystem(_)
            | Self::HeatingMeterType(_) => Vec::new(),
        }
    }
}

/// One specification or several, as an improvement may carry either.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Specifications {
    /// A single specification.
    One(ImprovementSpecification),
    /// Several specifications applied together.
    Many(Vec<ImprovementSpecification>),
}

impl Specifications {
    /// The specifications as a slice.
    pub fn as_slice(&self) -> &[ImprovementSpecification] {
        match self {
            Self::One(spec) => std::slice::from_ref(spec),
            Self::Many(specs) => specs,
        }
    }
}
