//! # Raw Assessment Import
//!
//! Translates one exported assessment, as flat string fields, into a
//! [`DwellingPartial`]. Coded fields go through the code tables, the
//! construction age is banded for the dwelling's jurisdiction, and the
//! rating band is derived from the score.
//!
//! Nothing in the raw data is fatal. Codes and numbers that cannot be
//! read are left absent and listed in [`Translation::unmapped`]. The only
//! error is a banding-table defect.

use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use retrofit_banding::{classify_age, classify_age_from_range, classify_score};
use retrofit_core::{
    ClassificationError, EfficiencyRating, Jurisdiction, Labelled, Overshading, PropertyType,
    Uprn, YearRange,
};
use retrofit_dwelling::{DwellingPartial, Glazing, UkAddress};

use crate::country::decode_country;
use crate::table::{CodeTable, Decoded, NOT_DETERMINED};
use crate::tables;

/// One assessment as exported: every value a string, codes not decoded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawAssessment {
    /// Property reference.
    pub uprn: Option<String>,
    /// First address line.
    pub address1: Option<String>,
    /// Second address line.
    pub address2: Option<String>,
    /// Third address line.
    pub address3: Option<String>,
    /// Post town.
    pub posttown: Option<String>,
    /// Postcode.
    pub postcode: Option<String>,
    /// `EAW`, `SCT` or `NIR`.
    pub country_code: Option<String>,
    /// Property type code.
    pub property_type: Option<String>,
    /// Built form code.
    pub built_form: Option<String>,
    /// Construction year, when known exactly.
    pub construction_year: Option<String>,
    /// Construction period, when only a range is known.
    pub construction_year_range: Option<YearRange>,
    /// Total floor area (m²).
    pub total_floor_area: Option<String>,
    /// Room height (m).
    pub floor_height: Option<String>,
    /// Habitable rooms.
    pub number_habitable_rooms: Option<String>,
    /// Heated rooms.
    pub number_heated_rooms: Option<String>,
    /// `Y` or `N`.
    pub mains_gas_flag: Option<String>,
    /// Meter type code.
    pub meter_type: Option<String>,
    /// Glazed area code.
    pub glazed_area: Option<String>,
    /// Multiple glazing type code.
    pub multiple_glazing_type: Option<String>,
    /// Percentage of windows multiple glazed.
    pub multi_glaze_proportion: Option<String>,
    /// Flat level code; `99` when not a flat.
    pub flat_level: Option<String>,
    /// Heat-loss corridor code.
    pub heat_loss_corridor: Option<String>,
    /// Orientation code of the front elevation.
    pub orientation: Option<String>,
    /// Overshading code.
    pub overshading: Option<String>,
    /// Fixed lighting outlets.
    pub fixed_lighting_outlets_count: Option<String>,
    /// Fixed outlets with low-energy lamps.
    pub low_energy_fixed_light_count: Option<String>,
    /// Percentage of outlets with low-energy lamps.
    pub low_energy_lighting: Option<String>,
    /// Current score.
    pub energy_rating_current: Option<String>,
    /// Element efficiency codes keyed by element name, e.g. `walls`.
    pub element_ratings: BTreeMap<String, String>,
    /// Suggested improvement codes.
    pub improvements: Vec<String>,
}

/// A raw value that could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnmappedCode {
    /// Exported field name.
    pub field: String,
    /// The raw value.
    pub value: String,
}

/// Result of importing one assessment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Translation {
    /// The dwelling as far as the assessment describes it.
    pub record: DwellingPartial,
    /// Overshading, which the dwelling record does not carry.
    pub overshading: Option<Overshading>,
    /// Decoded element efficiency ratings.
    pub element_ratings: BTreeMap<String, EfficiencyRating>,
    /// Every value left absent because it could not be read.
    pub unmapped: Vec<UnmappedCode>,
}

#[derive(Default)]
struct Reader {
    unmapped: Vec<UnmappedCode>,
}

impl Reader {
    fn miss(&mut self, field: &str, value: &str) {
        self.unmapped.push(UnmappedCode {
            field: field.to_string(),
            value: value.to_string(),
        });
    }

    fn code<T: Labelled>(&mut self, table: &CodeTable<T>, raw: Option<&String>) -> Option<T> {
        let raw = raw?;
        match table.lookup(raw) {
            Decoded::Value(v) => Some(v),
            Decoded::Absent => None,
            Decoded::Unmapped => {
                self.miss(table.field(), raw);
                None
            }
        }
    }

    fn number<T: FromStr>(&mut self, field: &str, raw: Option<&String>) -> Option<T> {
        let raw = raw?.trim();
        if raw.is_empty() || raw == NOT_DETERMINED {
            return None;
        }
        match raw.parse() {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(field, value = raw, "unparsable number");
                self.miss(field, raw);
                None
            }
        }
    }

    fn flag(&mut self, field: &str, raw: Option<&String>) -> Option<bool> {
        match raw.map(|s| s.trim()) {
            None | Some("") | Some(NOT_DETERMINED) => None,
            Some("Y") => Some(true),
            Some("N") => Some(false),
            Some(other) => {
                tracing::warn!(field, value = other, "unreadable flag");
                self.miss(field, other);
                None
            }
        }
    }
}

/// Import a raw assessment.
pub fn translate_assessment(raw: &RawAssessment) -> Result<Translation, ClassificationError> {
    let mut r = Reader::default();
    let mut record = DwellingPartial::default();

    record.details.uprn = raw.uprn.as_deref().and_then(|s| match Uprn::new(s.trim()) {
        Ok(uprn) => Some(uprn),
        Err(err) => {
            tracing::warn!(uprn = s, error = %err, "ignoring invalid UPRN");
            r.miss("uprn", s);
            None
        }
    });
    record.details.address = address(raw);
    record.details.country = raw.country_code.as_deref().and_then(|code| {
        let country = decode_country(code);
        if country.is_none() && code.trim() != NOT_DETERMINED {
            r.miss("country_code", code);
        }
        country
    });

    record.property_type = r.code(&tables::PROPERTY_TYPE, raw.property_type.as_ref());
    record.built_form = r.code(&tables::BUILT_FORM, raw.built_form.as_ref());
    record.age_band = age_band(raw, &record, &mut r)?;

    record.total_floor_area =
        match r.number::<f64>("total_floor_area", raw.total_floor_area.as_ref()) {
            Some(area) if !area.is_finite() || area > f64::from(u32::MAX) => {
                r.miss("total_floor_area", &area.to_string());
                None
            }
            Some(area) if area >= 0.5 => Some(area.round() as u32),
            _ => None,
        };
    record.room_height = r.number("floor_height", raw.floor_height.as_ref());
    record.details.habitable_room_count =
        r.number("number_habitable_rooms", raw.number_habitable_rooms.as_ref());
    record.details.heated_room_count =
        r.number("number_heated_rooms", raw.number_heated_rooms.as_ref());
    record.is_mains_gas_present = r.flag("mains_gas_flag", raw.mains_gas_flag.as_ref());
    record.details.meter_type = r.code(&tables::METER_TYPE, raw.meter_type.as_ref());
    record.details.flat_level = r.code(&tables::FLAT_LEVEL, raw.flat_level.as_ref());
    record.details.heat_loss_corridor =
        r.code(&tables::HEAT_LOSS_CORRIDOR, raw.heat_loss_corridor.as_ref());
    record.north_angle = r
        .code(&tables::ORIENTATION, raw.orientation.as_ref())
        .map(|o| o.angle());

    let glazing = Glazing {
        sap_glazed_area: r.code(&tables::GLAZED_AREA, raw.glazed_area.as_ref()),
        multiple_glazing_type: r.code(
            &tables::MULTIPLE_GLAZING_TYPE,
            raw.multiple_glazing_type.as_ref(),
        ),
        multiple_glazing_percentage: r
            .number("multi_glaze_proportion", raw.multi_glaze_proportion.as_ref()),
        ..Glazing::default()
    };
    if glazing != Glazing::default() {
        record.glazing = Some(glazing);
    }

    record.fixed_lighting_outlets_count = r.number(
        "fixed_lighting_outlets_count",
        raw.fixed_lighting_outlets_count.as_ref(),
    );
    record.low_energy_lighting_outlets_count = r.number(
        "low_energy_fixed_light_count",
        raw.low_energy_fixed_light_count.as_ref(),
    );
    record.low_energy_lighting_percentage =
        r.number("low_energy_lighting", raw.low_energy_lighting.as_ref());

    let score = r.number::<u32>("energy_rating_current", raw.energy_rating_current.as_ref());
    if let Some(score) = score {
        record.details.epc_score = Some(score);
        record.details.epc_rating = Some(classify_score(score)?);
    }

    let improvements: BTreeSet<_> = raw
        .improvements
        .iter()
        .filter_map(|code| r.code(&tables::IMPROVEMENT_TYPE, Some(code)))
        .collect();
    if !improvements.is_empty() {
        record.details.epc_suggested_improvements = Some(improvements);
    }

    let overshading = r.code(&tables::OVERSHADING, raw.overshading.as_ref());

    let mut element_ratings = BTreeMap::new();
    for (element, code) in &raw.element_ratings {
        match tables::EFFICIENCY_RATING.lookup(code) {
            Decoded::Value(rating) => {
                element_ratings.insert(element.clone(), rating);
            }
            Decoded::Absent => {}
            Decoded::Unmapped => r.miss(&format!("element_ratings.{element}"), code),
        }
    }

    tracing::debug!(unmapped = r.unmapped.len(), "assessment translated");
    Ok(Translation {
        record,
        overshading,
        element_ratings,
        unmapped: r.unmapped,
    })
}

fn address(raw: &RawAssessment) -> Option<UkAddress> {
    let first = raw.address1.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
    let lines = [Some(first), raw.address2.as_deref(), raw.address3.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();
    Some(UkAddress {
        lines,
        town: raw.posttown.as_deref().unwrap_or_default().trim().to_string(),
        postcode: raw.postcode.as_deref().unwrap_or_default().trim().to_string(),
        country: "United Kingdom".to_string(),
    })
}

/// Band the construction age for the dwelling's jurisdiction.
///
/// An exact year wins over a range. Without a country only park homes can
/// be banded.
fn age_band(
    raw: &RawAssessment,
    record: &DwellingPartial,
    r: &mut Reader,
) -> Result<Option<retrofit_banding::AgeBand>, ClassificationError> {
    let jurisdiction = match (record.details.country, record.property_type) {
        (_, Some(PropertyType::ParkHome)) => Jurisdiction::ParkHome,
        (Some(country), property_type) => Jurisdiction::for_dwelling(country, property_type),
        (None, _) => {
            tracing::debug!("no country; construction age left unbanded");
            return Ok(None);
        }
    };

    if let Some(year) = r.number::<i32>("construction_year", raw.construction_year.as_ref()) {
        return classify_age(year, jurisdiction).map(Some);
    }
    match &raw.construction_year_range {
        None => Ok(None),
        Some(range) => match classify_age_from_range(range, jurisdiction) {
            Ok(band) => Ok(Some(band)),
            Err(err) if err.is_table_defect() => Err(err),
            Err(err) => {
                tracing::warn!(error = %err, "construction year range not usable");
                r.miss("construction_year_range", &format!("{range:?}"));
                Ok(None)
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use retrofit_banding::{AgeBand, EfficiencyRatingBand};
    use retrofit_core::{
        BuiltForm, Country, FlatLevel, GlazedArea, ImprovementType, MeterType,
    };
    use serde_json::json;

    fn raw() -> RawAssessment {
        serde_json::from_value(json!({
            "uprn": "100023336956",
            "address1": "1 Mill Lane",
            "address2": "",
            "posttown": "York",
            "postcode": "YO1 7HH",
            "country_code": "EAW",
            "property_type": "0",
            "built_form": "2",
            "construction_year": "1936",
            "total_floor_area": "84.6",
            "floor_height": "2.45",
            "number_habitable_rooms": "5",
            "mains_gas_flag": "Y",
            "meter_type": "2",
            "glazed_area": "1",
            "multiple_glazing_type": "2",
            "multi_glaze_proportion": "100",
            "flat_level": "99",
            "orientation": "5",
            "overshading": "2",
            "energy_rating_current": "64",
            "element_ratings": {"walls": "2", "roof": "ND", "windows": "7"},
            "improvements": ["5", "21", "33", "ND"]
        }))
        .unwrap()
    }

    #[test]
    fn translates_coded_fields() {
        let t = translate_assessment(&raw()).unwrap();
        let rec = &t.record;
        assert_eq!(rec.property_type, Some(PropertyType::House));
        assert_eq!(rec.built_form, Some(BuiltForm::SemiDetached));
        assert_eq!(rec.age_band, Some(AgeBand::C));
        assert_eq!(rec.total_floor_area, Some(85));
        assert_eq!(rec.north_angle, Some(180));
        assert_eq!(rec.is_mains_gas_present, Some(true));
        assert_eq!(rec.details.country, Some(Country::EnglandAndWales));
        assert_eq!(rec.details.meter_type, Some(MeterType::SingleRate));
        assert_eq!(rec.details.flat_level, None);
        assert_eq!(rec.details.epc_rating, Some(EfficiencyRatingBand::D));
        assert_eq!(
            rec.glazing.as_ref().and_then(|g| g.sap_glazed_area),
            Some(GlazedArea::Typical)
        );
        assert_eq!(t.overshading, Some(Overshading::Modest));
        assert_eq!(t.element_ratings.get("walls"), Some(&EfficiencyRating::Poor));
        assert!(!t.element_ratings.contains_key("roof"));
    }

    #[test]
    fn address_skips_blank_lines() {
        let t = translate_assessment(&raw()).unwrap();
        let address = t.record.details.address.unwrap();
        assert_eq!(address.lines, vec!["1 Mill Lane".to_string()]);
        assert_eq!(address.town, "York");
    }

    #[test]
    fn improvements_collapse_aliases_and_record_unknowns() {
        let t = translate_assessment(&raw()).unwrap();
        let improvements = t.record.details.epc_suggested_improvements.unwrap();
        assert_eq!(
            improvements.into_iter().collect::<Vec<_>>(),
            vec![
                ImprovementType::IncreaseLoftInsulationTo270Mm,
                ImprovementType::ReplaceBoilerWithNewCondensingBoiler,
            ]
        );
        assert!(t.unmapped.contains(&UnmappedCode {
            field: "improvement_type".into(),
            value: "33".into()
        }));
    }

    #[test]
    fn unmapped_values_are_listed_not_fatal() {
        let mut input = raw();
        input.meter_type = Some("3".into());
        input.floor_height = Some("tall".into());
        input.flat_level = Some("1".into());
        let t = translate_assessment(&input).unwrap();
        assert_eq!(t.record.details.meter_type, None);
        assert_eq!(t.record.room_height, None);
        assert_eq!(t.record.details.flat_level, Some(FlatLevel::GroundFloor));
        let fields: Vec<&str> = t.unmapped.iter().map(|u| u.field.as_str()).collect();
        assert!(fields.contains(&"meter_type"));
        assert!(fields.contains(&"floor_height"));
        assert!(fields.contains(&"element_ratings.windows"));
    }

    #[test]
    fn non_finite_floor_area_is_unmapped() {
        for value in ["inf", "NaN", "1e12"] {
            let mut input = raw();
            input.total_floor_area = Some(value.into());
            let t = translate_assessment(&input).unwrap();
            assert_eq!(t.record.total_floor_area, None, "{value}");
            assert!(
                t.unmapped.iter().any(|u| u.field == "total_floor_area"),
                "{value}"
            );
        }

        let mut input = raw();
        input.total_floor_area = Some("0.2".into());
        let t = translate_assessment(&input).unwrap();
        assert_eq!(t.record.total_floor_area, None);
        assert!(!t.unmapped.iter().any(|u| u.field == "total_floor_area"));
    }

    #[test]
    fn range_bands_when_year_missing() {
        let mut input = raw();
        input.construction_year = None;
        input.country_code = Some("SCT".into());
        input.construction_year_range = Some(YearRange::until(1919));
        let t = translate_assessment(&input).unwrap();
        assert_eq!(t.record.age_band, Some(AgeBand::A));

        input.construction_year_range = Some(YearRange::Empty);
        let t = translate_assessment(&input).unwrap();
        assert_eq!(t.record.age_band, None);
        assert!(t.unmapped.iter().any(|u| u.field == "construction_year_range"));
    }

    #[test]
    fn park_homes_band_without_country() {
        let mut input = raw();
        input.country_code = None;
        input.property_type = Some("4".into());
        let t = translate_assessment(&input).unwrap();
        assert_eq!(t.record.age_band, Some(AgeBand::F));

        input.property_type = Some("0".into());
        let t = translate_assessment(&input).unwrap();
        assert_eq!(t.record.age_band, None);
    }

    #[test]
    fn translated_record_satisfies_constraints() {
        let t = translate_assessment(&raw()).unwrap();
        assert_eq!(t.record.check_constraints(), Ok(()));
    }
}
