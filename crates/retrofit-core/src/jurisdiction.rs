//! # Banding Jurisdictions
//!
//! The regulatory authorities whose tables assign construction-age bands.
//! Three are national assessment schemes. Park homes are built to their own
//! standards and form a fourth, pseudo-jurisdiction regardless of where
//! they stand.

use serde::{Deserialize, Serialize};

use crate::vocabulary::epc::{Country, PropertyType};

/// Authority whose age-band table applies to a dwelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Jurisdiction {
    /// England and Wales.
    EnglandAndWales,
    /// Scotland.
    Scotland,
    /// Northern Ireland.
    NorthernIreland,
    /// Park homes, in any country.
    ParkHome,
}

impl Jurisdiction {
    /// Every jurisdiction, in table column order.
    pub const ALL: [Jurisdiction; 4] = [
        Jurisdiction::EnglandAndWales,
        Jurisdiction::Scotland,
        Jurisdiction::NorthernIreland,
        Jurisdiction::ParkHome,
    ];

    /// Return all jurisdictions.
    pub fn all() -> &'static [Jurisdiction] {
        &Self::ALL
    }

    /// Human-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EnglandAndWales => "England and Wales",
            Self::Scotland => "Scotland",
            Self::NorthernIreland => "Northern Ireland",
            Self::ParkHome => "park home",
        }
    }

    /// snake_case name used on the wire and on the command line.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::EnglandAndWales => "england_and_wales",
            Self::Scotland => "scotland",
            Self::NorthernIreland => "northern_ireland",
            Self::ParkHome => "park_home",
        }
    }

    /// The national jurisdiction of an assessment country.
    pub fn from_country(country: Country) -> Self {
        match country {
            Country::EnglandAndWales => Self::EnglandAndWales,
            Country::Scotland => Self::Scotland,
            Country::NorthernIreland => Self::NorthernIreland,
        }
    }

    /// Jurisdiction governing a dwelling: park homes use their own table,
    /// everything else the table of its country.
    pub fn for_dwelling(country: Country, property_type: Option<PropertyType>) -> Self {
        match property_type {
            Some(PropertyType::ParkHome) => Self::ParkHome,
            _ => Self::from_country(country),
        }
    }
}

impl std::fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Jurisdiction {
    type Err = crate::error::RetrofitError;

    /// Accepts the display name or the snake_case wire name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|j| j.wire_name() == s || j.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| crate::error::RetrofitError::UnknownValue {
                kind: "jurisdiction",
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn park_home_overrides_country() {
        assert_eq!(
            Jurisdiction::for_dwelling(Country::Scotland, Some(PropertyType::ParkHome)),
            Jurisdiction::ParkHome
        );
        assert_eq!(
            Jurisdiction::for_dwelling(Country::Scotland, Some(PropertyType::Flat)),
            Jurisdiction::Scotland
        );
        assert_eq!(
            Jurisdiction::for_dwelling(Country::NorthernIreland, None),
            Jurisdiction::NorthernIreland
        );
    }

    #[test]
    fn parses_both_spellings() {
        assert_eq!(
            "england_and_wales".parse::<Jurisdiction>().unwrap(),
            Jurisdiction::EnglandAndWales
        );
        assert_eq!(
            "Park Home".parse::<Jurisdiction>().unwrap(),
            Jurisdiction::ParkHome
        );
        assert!("wales".parse::<Jurisdiction>().is_err());
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&Jurisdiction::NorthernIreland).unwrap();
        assert_eq!(json, "\"northern_ireland\"");
    }
}
