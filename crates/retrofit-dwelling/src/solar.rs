//! Solar photovoltaic arrays.

use serde::{Deserialize, Serialize};

use retrofit_core::SolarPvTracking;

use crate::constraints::Checker;

/// A photovoltaic array on the dwelling.
///
/// Split arrays sharing one inverter are recorded as separate arrays, each
/// with the full inverter capacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolarPvArray {
    /// Peak power (kWp).
    pub peak_power: f64,
    /// AC inverter capacity (kW). Defaults to the peak power when absent.
    #[serde(default)]
    pub inverter_power: Option<f64>,
    /// Degrees from horizontal, 0 to 90.
    #[serde(default = "SolarPvArray::default_tilt")]
    pub tilt: u16,
    /// Degrees clockwise from north, below 360.
    #[serde(default = "SolarPvArray::default_azimuth")]
    pub azimuth: u16,
    /// Sun tracking, if fitted.
    #[serde(default)]
    pub tracking: Option<SolarPvTracking>,
    /// System age in years.
    #[serde(default)]
    pub age: u32,
}

impl SolarPvArray {
    /// Default tilt for a pitched-roof array.
    pub const DEFAULT_TILT: u16 = 35;
    /// Due south.
    pub const DEFAULT_AZIMUTH: u16 = 180;

    fn default_tilt() -> u16 {
        Self::DEFAULT_TILT
    }

    fn default_azimuth() -> u16 {
        Self::DEFAULT_AZIMUTH
    }

    /// A new south-facing array at the default tilt.
    pub fn new(peak_power: f64) -> Self {
        Self {
            peak_power,
            inverter_power: None,
            tilt: Self::DEFAULT_TILT,
            azimuth: Self::DEFAULT_AZIMUTH,
            tracking: None,
            age: 0,
        }
    }

    /// Effective inverter capacity (kW).
    pub fn effective_inverter_power(&self) -> f64 {
        self.inverter_power.unwrap_or(self.peak_power)
    }

    /// Every range violation of the array, with field paths under `path`.
    pub fn violations(&self, path: &str) -> Vec<retrofit_core::ValidationError> {
        let mut c = Checker::default();
        self.check(path, &mut c);
        c.finish()
    }

    pub(crate) fn check(&self, path: &str, c: &mut Checker) {
        c.require(
            self.peak_power > 0.0,
            format!("{path}.peak_power"),
            "must be greater than 0",
        );
        if let Some(inverter) = self.inverter_power {
            c.require(
                inverter > 0.0,
                format!("{path}.inverter_power"),
                "must be greater than 0",
            );
        }
        c.require(self.tilt <= 90, format!("{path}.tilt"), "must be between 0 and 90");
        c.require(
            self.azimuth < 360,
            format!("{path}.azimuth"),
            "must be less than 360",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_face_south() {
        let array: SolarPvArray = serde_json::from_value(json!({"peak_power": 3.5})).unwrap();
        assert_eq!(array, SolarPvArray::new(3.5));
        assert_eq!(array.effective_inverter_power(), 3.5);
    }

    #[test]
    fn out_of_range_angles_are_flagged() {
        let array = SolarPvArray {
            tilt: 95,
            azimuth: 360,
            ..SolarPvArray::new(0.0)
        };
        let mut c = Checker::default();
        array.check("solar_pv[0]", &mut c);
        let paths: Vec<String> = c.finish().iter().map(|e| e.field_path()).collect();
        assert_eq!(
            paths,
            vec!["solar_pv[0].peak_power", "solar_pv[0].tilt", "solar_pv[0].azimuth"]
        );
    }
}
