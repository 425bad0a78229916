//! # Promotion
//!
//! Turns a [`DwellingPartial`] into a [`Dwelling`], or reports the first
//! reason it cannot. Checks run in a fixed order and stop at the first
//! failure:
//!
//! 1. Field constraints on the partial record.
//! 2. Mandatory fields, in declaration order.
//! 3. Glazing ratio.
//! 4. Main heating systems, then secondary ones: source, energy source,
//!    space-heating efficiency, and emitters for wet systems.
//! 5. Standalone hot-water systems: energy source and hot-water efficiency.
//! 6. Hot-water systems fed by a heating system: the referenced list must
//!    exist and its first system must carry a hot-water efficiency, unless
//!    the hot-water system records its own.
//!
//! Promotion never rewrites the input systems. The effective hot-water
//! efficiencies are stored beside them, so promoting a demoted record
//! yields the same record.

use retrofit_core::{
    DomesticEnergyEndUse, HeatingSystemList, ValidationError,
};

use crate::heating::{HeatingSystem, HotWaterSystem};
use crate::record::{Dwelling, DwellingPartial, EfficiencyOrigin, HotWaterEfficiency};

const COMPLETE: &str = "must be defined on a complete dwelling record";

macro_rules! required {
    ($partial:ident . $field:ident) => {
        $partial.$field.ok_or(ValidationError::MissingField {
            field: stringify!($field),
        })?
    };
}

/// Promote a partial record to a complete one.
pub fn promote(partial: DwellingPartial) -> Result<Dwelling, ValidationError> {
    partial.check_constraints()?;
    tracing::debug!("field constraints satisfied");

    let mut dwelling = Dwelling {
        location: required!(partial.location),
        property_type: required!(partial.property_type),
        built_form: required!(partial.built_form),
        age_band: required!(partial.age_band),
        north_angle: required!(partial.north_angle),
        total_floor_area: required!(partial.total_floor_area),
        room_height: required!(partial.room_height),
        levels: required!(partial.levels),
        wall: required!(partial.wall),
        external_wall_count: required!(partial.external_wall_count),
        footprint: required!(partial.footprint),
        glazing: required!(partial.glazing),
        window_count: required!(partial.window_count),
        doors: required!(partial.doors),
        is_mains_gas_present: required!(partial.is_mains_gas_present),
        main_heating_systems: required!(partial.main_heating_systems),
        hot_water_systems: required!(partial.hot_water_systems),
        fixed_lighting_outlets_count: required!(partial.fixed_lighting_outlets_count),
        low_energy_lighting_outlets_count: required!(partial.low_energy_lighting_outlets_count),
        low_energy_lighting_percentage: required!(partial.low_energy_lighting_percentage),
        details: partial.details,
        resolved_hot_water: Vec::new(),
    };
    tracing::debug!("mandatory fields present");

    if dwelling.glazing.glazing_ratio.is_none() {
        return Err(ValidationError::IncompleteGlazing);
    }

    check_heating_list(&dwelling.main_heating_systems, HeatingSystemList::Main)?;
    if let Some(secondary) = &dwelling.details.secondary_heating_systems {
        check_heating_list(secondary, HeatingSystemList::Secondary)?;
    }
    tracing::debug!("heating systems complete");

    for (index, system) in dwelling.hot_water_systems.iter().enumerate() {
        check_hot_water_system(index, system)?;
    }
    tracing::debug!("hot-water systems complete");

    dwelling.resolved_hot_water = dwelling
        .hot_water_systems
        .iter()
        .enumerate()
        .map(|(index, system)| resolve_hot_water(&dwelling, index, system))
        .collect::<Result<_, _>>()?;
    tracing::debug!(
        systems = dwelling.resolved_hot_water.len(),
        "hot-water efficiencies resolved"
    );

    Ok(dwelling)
}

fn check_heating_list(
    systems: &[HeatingSystem],
    list: HeatingSystemList,
) -> Result<(), ValidationError> {
    for (index, system) in systems.iter().enumerate() {
        let incomplete = |field: &'static str, reason: String| {
            ValidationError::IncompleteHeatingSystem {
                list,
                index,
                field,
                reason,
            }
        };

        if system.source.is_none() {
            return Err(incomplete("source", COMPLETE.to_string()));
        }
        if system.energy_source.is_none() {
            return Err(incomplete("energy_source", COMPLETE.to_string()));
        }
        if system
            .efficiency_for(DomesticEnergyEndUse::SpaceHeating)
            .is_none()
        {
            return Err(incomplete(
                "efficiency",
                format!(
                    "must contain '{}' on a complete dwelling record",
                    DomesticEnergyEndUse::SpaceHeating
                ),
            ));
        }
        if system.is_wet() == Some(true) && system.emitters.is_empty() {
            return Err(ValidationError::MissingEmitters { list, index });
        }
    }
    Ok(())
}

fn check_hot_water_system(index: usize, system: &HotWaterSystem) -> Result<(), ValidationError> {
    let Some(source) = system.source else {
        return Err(ValidationError::IncompleteHotWaterSystem {
            index,
            field: "source",
            reason: COMPLETE.to_string(),
        });
    };
    if source.is_reference() {
        return Ok(());
    }
    if system.energy_source.is_none() {
        return Err(ValidationError::IncompleteHotWaterSystem {
            index,
            field: "energy_source",
            reason: format!("{COMPLETE}, unless source is from main/secondary system"),
        });
    }
    if system.efficiency_for(DomesticEnergyEndUse::HotWater).is_none() {
        return Err(ValidationError::IncompleteHotWaterSystem {
            index,
            field: "efficiency",
            reason: format!(
                "must contain '{}' on a complete dwelling record, \
                 unless source is from main/secondary system",
                DomesticEnergyEndUse::HotWater
            ),
        });
    }
    Ok(())
}

fn resolve_hot_water(
    dwelling: &Dwelling,
    index: usize,
    system: &HotWaterSystem,
) -> Result<HotWaterEfficiency, ValidationError> {
    if let Some(own) = system.efficiency_for(DomesticEnergyEndUse::HotWater) {
        return Ok(HotWaterEfficiency {
            efficiency: own.clone(),
            origin: EfficiencyOrigin::Own,
        });
    }

    // Standalone systems without their own efficiency were rejected above.
    let list = system
        .source
        .and_then(|s| s.referenced_list())
        .unwrap_or(HeatingSystemList::Main);

    let (systems, origin) = match list {
        HeatingSystemList::Main => (
            Some(dwelling.main_heating_systems.as_slice()),
            EfficiencyOrigin::MainSystem,
        ),
        HeatingSystemList::Secondary => (
            dwelling.details.secondary_heating_systems.as_deref(),
            EfficiencyOrigin::SecondarySystem,
        ),
    };

    let Some(systems) = systems else {
        return Err(ValidationError::UnresolvedHotWaterEfficiency {
            index,
            reason: format!("{list} is not defined, but source is '{}'", source_label(system)),
        });
    };

    systems
        .first()
        .and_then(|first| first.efficiency_for(DomesticEnergyEndUse::HotWater))
        .map(|efficiency| {
            tracing::debug!(index, %list, "hot-water efficiency taken from heating system");
            HotWaterEfficiency {
                efficiency: efficiency.clone(),
                origin,
            }
        })
        .ok_or_else(|| ValidationError::UnresolvedHotWaterEfficiency {
            index,
            reason: format!(
                "source is '{}' but neither hot_water_systems[{index}].efficiency \
                 nor {list}[0].efficiency contains '{}'",
                source_label(system),
                DomesticEnergyEndUse::HotWater
            ),
        })
}

fn source_label(system: &HotWaterSystem) -> String {
    system.source.map(|s| s.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use retrofit_core::{
        Efficiency, EnergySource, HeatingSystemEmitter, HeatingSystemSource, HotWaterSource,
    };
    use serde_json::json;

    fn space_heating(value: f64) -> std::collections::BTreeMap<DomesticEnergyEndUse, Efficiency> {
        [(DomesticEnergyEndUse::SpaceHeating, Efficiency::Flat(value))].into()
    }

    fn boiler() -> HeatingSystem {
        HeatingSystem {
            source: Some(HeatingSystemSource::Boiler),
            energy_source: Some(EnergySource::MainsGas),
            efficiency: space_heating(0.89),
            emitters: vec![HeatingSystemEmitter::Radiators],
            ..Default::default()
        }
    }

    fn partial() -> DwellingPartial {
        serde_json::from_value(json!({
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
            "main_heating_systems": [],
            "hot_water_systems": [],
            "fixed_lighting_outlets_count": 10,
            "low_energy_lighting_outlets_count": 6,
            "low_energy_lighting_percentage": 60.0,
            "country": "England and Wales"
        }))
        .map(|mut p: DwellingPartial| {
            p.main_heating_systems = Some(vec![boiler()]);
            p.hot_water_systems = Some(vec![HotWaterSystem {
                source: Some(HotWaterSource::FromMainSystem),
                ..Default::default()
            }]);
            p
        })
        .unwrap()
    }

    fn with_hot_water_on_boiler(mut p: DwellingPartial) -> DwellingPartial {
        if let Some(systems) = p.main_heating_systems.as_mut() {
            systems[0]
                .efficiency
                .insert(DomesticEnergyEndUse::HotWater, Efficiency::Flat(0.8));
        }
        p
    }

    #[test]
    fn resolves_from_main_system() {
        let dwelling = promote(with_hot_water_on_boiler(partial())).unwrap();
        let resolved = dwelling.hot_water_efficiency(0).unwrap();
        assert_eq!(resolved.efficiency, Efficiency::Flat(0.8));
        assert_eq!(resolved.origin, EfficiencyOrigin::MainSystem);
        // Input systems are untouched.
        assert!(dwelling.hot_water_systems[0].efficiency.is_empty());
    }

    #[test]
    fn unresolved_when_main_system_lacks_hot_water() {
        let err = promote(partial()).unwrap_err();
        assert_eq!(err.kind(), "unresolved_hot_water_efficiency");
        assert_eq!(err.field_path(), "hot_water_systems[0].efficiency");
    }

    #[test]
    fn own_efficiency_takes_precedence() {
        let mut p = partial();
        if let Some(systems) = p.hot_water_systems.as_mut() {
            systems[0]
                .efficiency
                .insert(DomesticEnergyEndUse::HotWater, Efficiency::Flat(0.7));
        }
        let dwelling = promote(p).unwrap();
        assert_eq!(
            dwelling.hot_water_efficiency(0).unwrap().origin,
            EfficiencyOrigin::Own
        );
    }

    #[test]
    fn missing_secondary_list_is_unresolved() {
        let mut p = with_hot_water_on_boiler(partial());
        p.hot_water_systems = Some(vec![HotWaterSystem {
            source: Some(HotWaterSource::FromSecondarySystem),
            ..Default::default()
        }]);
        let err = promote(p).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::UnresolvedHotWaterEfficiency { index: 0, .. }
        ));
        assert!(err.to_string().contains("secondary_heating_systems is not defined"));
    }

    #[test]
    fn resolves_from_secondary_system() {
        let mut p = partial();
        let mut secondary = boiler();
        secondary
            .efficiency
            .insert(DomesticEnergyEndUse::HotWater, Efficiency::Flat(0.75));
        p.details.secondary_heating_systems = Some(vec![secondary]);
        p.hot_water_systems = Some(vec![HotWaterSystem {
            source: Some(HotWaterSource::FromSecondarySystem),
            ..Default::default()
        }]);
        let dwelling = promote(p).unwrap();
        assert_eq!(
            dwelling.hot_water_efficiency(0).unwrap().origin,
            EfficiencyOrigin::SecondarySystem
        );
    }

    #[test]
    fn boiler_without_emitters_is_rejected() {
        let mut p = with_hot_water_on_boiler(partial());
        if let Some(systems) = p.main_heating_systems.as_mut() {
            systems[0].emitters.clear();
        }
        assert_eq!(
            promote(p).unwrap_err(),
            ValidationError::MissingEmitters {
                list: HeatingSystemList::Main,
                index: 0
            }
        );
    }

    #[test]
    fn undecided_wetness_does_not_need_emitters() {
        let mut p = with_hot_water_on_boiler(partial());
        if let Some(systems) = p.main_heating_systems.as_mut() {
            systems[0].source = Some(HeatingSystemSource::CommunityScheme);
            systems[0].emitters.clear();
        }
        assert!(promote(p).is_ok());
    }

    #[test]
    fn first_missing_field_is_reported() {
        let mut p = with_hot_water_on_boiler(partial());
        p.built_form = None;
        p.doors = None;
        assert_eq!(
            promote(p).unwrap_err(),
            ValidationError::MissingField {
                field: "built_form"
            }
        );
    }

    #[test]
    fn glazing_without_ratio_is_incomplete() {
        let mut p = with_hot_water_on_boiler(partial());
        if let Some(glazing) = p.glazing.as_mut() {
            glazing.glazing_ratio = None;
        }
        assert_eq!(promote(p).unwrap_err(), ValidationError::IncompleteGlazing);
    }

    #[test]
    fn heating_checks_run_in_field_order() {
        let mut p = with_hot_water_on_boiler(partial());
        if let Some(systems) = p.main_heating_systems.as_mut() {
            systems[0].energy_source = None;
            systems[0].efficiency.clear();
        }
        assert_eq!(
            promote(p).unwrap_err().field_path(),
            "main_heating_systems[0].energy_source"
        );
    }

    #[test]
    fn secondary_systems_are_checked() {
        let mut p = with_hot_water_on_boiler(partial());
        p.details.secondary_heating_systems = Some(vec![HeatingSystem {
            source: Some(HeatingSystemSource::RoomHeaters),
            ..Default::default()
        }]);
        assert_eq!(
            promote(p).unwrap_err().field_path(),
            "secondary_heating_systems[0].energy_source"
        );
    }

    #[test]
    fn standalone_hot_water_needs_fuel_and_efficiency() {
        let mut p = with_hot_water_on_boiler(partial());
        p.hot_water_systems = Some(vec![HotWaterSystem {
            source: Some(HotWaterSource::Immersion),
            ..Default::default()
        }]);
        assert_eq!(
            promote(p.clone()).unwrap_err().field_path(),
            "hot_water_systems[0].energy_source"
        );

        if let Some(systems) = p.hot_water_systems.as_mut() {
            systems[0].energy_source = Some(EnergySource::Electric);
        }
        assert_eq!(
            promote(p).unwrap_err().field_path(),
            "hot_water_systems[0].efficiency"
        );
    }

    #[test]
    fn constraint_violations_come_first() {
        let mut p = partial();
        p.north_angle = Some(360);
        p.built_form = None;
        let err = promote(p).unwrap_err();
        assert_eq!(err.kind(), "constraint_violation");
        assert_eq!(err.field_path(), "north_angle");
    }

    #[test]
    fn promotion_is_idempotent() {
        let once = promote(with_hot_water_on_boiler(partial())).unwrap();
        let twice = once.clone().revalidate().unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn complete_record_deserializes_through_promotion() {
        let dwelling = promote(with_hot_water_on_boiler(partial())).unwrap();
        let value = serde_json::to_value(&dwelling).unwrap();
        let back: Dwelling = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(back, dwelling);

        let mut broken = value;
        broken["glazing"] = json!({});
        assert!(serde_json::from_value::<Dwelling>(broken).is_err());
    }

    #[test]
    fn jurisdiction_follows_country_and_park_homes() {
        let mut dwelling = promote(with_hot_water_on_boiler(partial())).unwrap();
        assert_eq!(
            dwelling.jurisdiction(),
            Some(retrofit_core::Jurisdiction::EnglandAndWales)
        );
        dwelling.property_type = retrofit_core::PropertyType::ParkHome;
        assert_eq!(dwelling.jurisdiction(), Some(retrofit_core::Jurisdiction::ParkHome));
    }

    #[test]
    fn rating_falls_back_to_score() {
        let mut dwelling = promote(with_hot_water_on_boiler(partial())).unwrap();
        assert_eq!(dwelling.rating().unwrap(), None);
        dwelling.details.epc_score = Some(72);
        assert_eq!(
            dwelling.rating().unwrap(),
            Some(retrofit_banding::EfficiencyRatingBand::C)
        );
    }
}
