//! Raw assessment import feeding dwelling promotion.

use serde_json::{json, Value};

use retrofit_banding::{AgeBand, EfficiencyRatingBand};
use retrofit_codes::{encode_country, tables, translate_assessment, Decoded, RawAssessment};
use retrofit_core::{Country, ImprovementType, Jurisdiction, Labelled};
use retrofit_dwelling::{promote, DwellingPartial};

fn raw() -> RawAssessment {
    serde_json::from_value(json!({
        "uprn": "100023336956",
        "address1": "1 Mill Lane",
        "posttown": "York",
        "postcode": "YO1 7HH",
        "country_code": "EAW",
        "property_type": "0",
        "built_form": "2",
        "construction_year": "1936",
        "total_floor_area": "84.6",
        "floor_height": "2.45",
        "mains_gas_flag": "Y",
        "meter_type": "2",
        "glazed_area": "1",
        "multiple_glazing_type": "2",
        "multi_glaze_proportion": "100",
        "flat_level": "99",
        "orientation": "5",
        "energy_rating_current": "64",
        "improvements": ["5", "21", "33"]
    }))
    .unwrap()
}

/// Survey data the assessment does not carry.
fn survey() -> Value {
    json!({
        "location": {"type": "Point", "coordinates": [-1.08, 53.96]},
        "levels": ["GROUND_FLOOR", "MID_FLOOR"],
        "wall": {"wall_type": "cavity wall"},
        "external_wall_count": 2,
        "footprint": 42.0,
        "window_count": 9,
        "doors": [{}],
        "main_heating_systems": [{
            "source": "boiler",
            "energy_source": "mains gas",
            "efficiency": {"Space heating": 0.84, "Hot water": 0.78},
            "emitters": ["radiators"]
        }],
        "hot_water_systems": [{"source": "from main system"}],
        "fixed_lighting_outlets_count": 12,
        "low_energy_lighting_outlets_count": 12,
        "low_energy_lighting_percentage": 100.0
    })
}

/// Fill every field the import left empty from `extra`.
fn merge(imported: &DwellingPartial, extra: Value) -> DwellingPartial {
    let mut value = serde_json::to_value(imported).unwrap();
    let object = value.as_object_mut().unwrap();
    for (key, v) in extra.as_object().unwrap() {
        if object.get(key).map_or(true, Value::is_null) {
            object.insert(key.clone(), v.clone());
        }
    }
    serde_json::from_value(value).unwrap()
}

#[test]
fn imported_record_is_partial_until_surveyed() {
    let translation = translate_assessment(&raw()).unwrap();
    assert_eq!(translation.unmapped.len(), 1);
    assert_eq!(translation.unmapped[0].field, "improvement_type");

    let record = translation.record;
    record.check_constraints().unwrap();
    let err = promote(record.clone()).unwrap_err();
    assert_eq!(err.kind(), "missing_field");

    // The glazing ratio is never part of an assessment export.
    let mut merged = merge(&record, survey());
    assert_eq!(
        promote(merged.clone()).unwrap_err().to_string(),
        "glazing.glazing_ratio must be defined on a complete dwelling record"
    );

    if let Some(glazing) = merged.glazing.as_mut() {
        glazing.glazing_ratio = Some(0.2);
    }
    let dwelling = promote(merged).unwrap();
    assert_eq!(dwelling.age_band, AgeBand::C);
    assert_eq!(dwelling.jurisdiction(), Some(Jurisdiction::EnglandAndWales));
    assert_eq!(dwelling.rating().unwrap(), Some(EfficiencyRatingBand::D));
    assert_eq!(
        dwelling
            .details
            .epc_suggested_improvements
            .as_ref()
            .map(|s| s.len()),
        Some(2)
    );
}

#[test]
fn scottish_assessment_bands_against_scottish_table() {
    let mut input = raw();
    input.country_code = Some(encode_country(Country::Scotland).to_string());
    let translation = translate_assessment(&input).unwrap();
    let band = translation.record.age_band.unwrap();
    assert!(band.contains(1936, Jurisdiction::Scotland));
}

#[test]
fn legacy_aliases_decode_to_the_same_value() {
    // Every code either resolves, or is a documented gap; aliases with a
    // numeric suffix resolve to their base value.
    for (code, name) in tables::IMPROVEMENT_TYPE.entries() {
        let decoded = tables::IMPROVEMENT_TYPE.lookup(&code.to_string());
        match ImprovementType::from_symbol(name) {
            Some(exact) => assert_eq!(decoded, Decoded::Value(exact)),
            None => {
                let base = name.trim_end_matches(|c: char| c.is_ascii_digit());
                assert_eq!(decoded.value(), ImprovementType::from_symbol(base));
            }
        }
    }
    assert_eq!(tables::IMPROVEMENT_TYPE.lookup("ND"), Decoded::Absent);
    assert_eq!(tables::FLAT_LEVEL.lookup("99"), Decoded::Absent);
}
