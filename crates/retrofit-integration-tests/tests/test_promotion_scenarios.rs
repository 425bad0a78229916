//! Dwelling promotion end to end, from JSON records.

use serde_json::{json, Value};

use retrofit_core::{Efficiency, HeatingSystemList, ValidationError};
use retrofit_dwelling::{promote, Dwelling, DwellingPartial, EfficiencyOrigin, HeatingSystem};

fn record() -> Value {
    json!({
        "location": {"type": "Point", "coordinates": [-1.55, 53.8]},
        "property_type": "house",
        "built_form": "semi-Detached",
        "age_band": "E",
        "north_angle": 90,
        "total_floor_area": 85,
        "room_height": 2.4,
        "levels": ["GROUND_FLOOR", "MID_FLOOR"],
        "wall": {"wall_type": "cavity wall"},
        "external_wall_count": 3,
        "footprint": 45.0,
        "glazing": {"glazing_ratio": 0.18},
        "window_count": 8,
        "doors": [{}],
        "is_mains_gas_present": true,
        "main_heating_systems": [{
            "source": "boiler",
            "energy_source": "mains gas",
            "efficiency": {"Space heating": 0.89, "Hot water": 0.8},
            "emitters": ["radiators"]
        }],
        "hot_water_systems": [{"source": "from main system"}],
        "fixed_lighting_outlets_count": 10,
        "low_energy_lighting_outlets_count": 6,
        "low_energy_lighting_percentage": 60.0,
        "country": "England and Wales"
    })
}

fn promote_value(value: Value) -> Result<Dwelling, ValidationError> {
    let partial: DwellingPartial = serde_json::from_value(value).unwrap();
    promote(partial)
}

#[test]
fn hot_water_from_main_system_inherits_its_efficiency() {
    let dwelling = promote_value(record()).unwrap();
    let resolved = dwelling.hot_water_efficiency(0).unwrap();
    assert_eq!(resolved.origin, EfficiencyOrigin::MainSystem);
    assert_eq!(resolved.efficiency, Efficiency::Flat(0.8));
}

#[test]
fn main_system_without_hot_water_entry_is_unresolved() {
    let mut value = record();
    value["main_heating_systems"][0]["efficiency"] = json!({"Space heating": 0.89});
    let err = promote_value(value).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::UnresolvedHotWaterEfficiency { index: 0, .. }
    ));
}

#[test]
fn boiler_without_emitters_is_wet_and_rejected() {
    let mut value = record();
    value["main_heating_systems"][0]["emitters"] = json!([]);
    let system: HeatingSystem =
        serde_json::from_value(value["main_heating_systems"][0].clone()).unwrap();
    assert_eq!(system.is_wet(), Some(true));

    assert_eq!(
        promote_value(value).unwrap_err(),
        ValidationError::MissingEmitters {
            list: HeatingSystemList::Main,
            index: 0
        }
    );
}

#[test]
fn heat_pump_with_warm_air_only_is_dry() {
    let system: HeatingSystem = serde_json::from_value(json!({
        "source": "air source heat pump",
        "energy_source": "electric",
        "efficiency": {"Space heating": 2.8},
        "emitters": ["warm air"]
    }))
    .unwrap();
    assert_eq!(system.is_wet(), Some(false));

    let mut value = record();
    value["main_heating_systems"] = json!([system]);
    value["hot_water_systems"] = json!([{
        "source": "immersion",
        "energy_source": "electric",
        "efficiency": {"Hot water": 1.0}
    }]);
    let dwelling = promote_value(value).unwrap();
    assert_eq!(
        dwelling.hot_water_efficiency(0).unwrap().origin,
        EfficiencyOrigin::Own
    );
}

#[test]
fn first_missing_field_is_named() {
    let mut value = record();
    value.as_object_mut().unwrap().remove("total_floor_area");
    let err = promote_value(value).unwrap_err();
    assert_eq!(err.kind(), "missing_field");
    assert_eq!(err.field_path(), "total_floor_area");
}

#[test]
fn glazing_type_without_ratio_is_incomplete() {
    let mut value = record();
    value["glazing"] = json!({});
    assert_eq!(
        promote_value(value).unwrap_err(),
        ValidationError::IncompleteGlazing
    );
}

#[test]
fn field_constraints_fail_before_completeness() {
    let mut value = record();
    value["room_height"] = json!(5.5);
    value.as_object_mut().unwrap().remove("total_floor_area");
    let err = promote_value(value).unwrap_err();
    assert_eq!(err.kind(), "constraint_violation");
    assert_eq!(err.field_path(), "room_height");
}

#[test]
fn promotion_is_idempotent_through_json() {
    let once = promote_value(record()).unwrap();
    let again = promote(once.clone().into_partial()).unwrap();
    assert_eq!(once, again);

    let wire = serde_json::to_value(&once).unwrap();
    let reread: Dwelling = serde_json::from_value(wire).unwrap();
    assert_eq!(reread, once);
}
