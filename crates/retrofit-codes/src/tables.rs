//! Built-in code tables for exported assessment fields.
//!
//! Names are the legacy symbolic names carried by the export schema. Where
//! a name has no counterpart in the target vocabulary the code is kept in
//! the table so it is recognized, and decodes as unmapped.

use retrofit_core::{
    BuiltForm, EfficiencyRating, FlatLevel, GlazedArea, HeatLossCorridor, ImprovementType,
    MeterType, MultipleGlazingType, Orientation, Overshading, PropertyType,
};

use crate::table::CodeTable;

/// Electricity meter type.
pub const METER_TYPE: CodeTable<MeterType> = CodeTable::new(
    "meter_type",
    &[
        (1, "DUAL_RATE"),
        (2, "SINGLE_RATE"),
        (4, "DUAL_RATE_24_HOUR"),
        (5, "OFF_PEAK_18_HOUR"),
    ],
);

/// Dwelling type.
pub const PROPERTY_TYPE: CodeTable<PropertyType> = CodeTable::new(
    "property_type",
    &[
        (0, "HOUSE"),
        (1, "BUNGALOW"),
        (2, "FLAT"),
        (3, "MAISONETTE"),
        (4, "PARK_HOME"),
    ],
);

/// Attachment to neighbouring dwellings.
pub const BUILT_FORM: CodeTable<BuiltForm> = CodeTable::new(
    "built_form",
    &[
        (1, "DETACHED"),
        (2, "SEMI_DETACHED"),
        (3, "END_TERRACE"),
        (4, "MID_TERRACE"),
        (5, "ENCLOSED_END_TERRACE"),
        (6, "ENCLOSED_MID_TERRACE"),
    ],
);

/// Ranged glazed-area estimate.
pub const GLAZED_AREA: CodeTable<GlazedArea> = CodeTable::new(
    "glazed_area",
    &[
        (1, "TYPICAL"),
        (2, "MORE_THAN_TYPICAL"),
        (3, "LESS_THAN_TYPICAL"),
        (4, "MUCH_MORE_THAN_TYPICAL"),
        (5, "MUCH_LESS_THAN_TYPICAL"),
    ],
);

/// Element efficiency rating.
pub const EFFICIENCY_RATING: CodeTable<EfficiencyRating> = CodeTable::new(
    "efficiency_rating",
    &[
        (0, "NA"),
        (1, "VERY_POOR"),
        (2, "POOR"),
        (3, "AVERAGE"),
        (4, "GOOD"),
        (5, "VERY_GOOD"),
    ],
);

/// Multiple-glazing type.
pub const MULTIPLE_GLAZING_TYPE: CodeTable<MultipleGlazingType> = CodeTable::new(
    "multiple_glazing_type",
    &[
        (1, "DOUBLE_GLAZING_INSTALLED_BEFORE_2002"),
        (2, "DOUBLE_GLAZING_INSTALLED_DURING_OR_AFTER_2002"),
        (3, "DOUBLE_GLAZING_UNKNOWN_INSTALL_DATE"),
        (4, "SECONDARY_GLAZING"),
        (5, "SINGLE_GLAZING"),
        (6, "TRIPLE_GLAZING"),
        (7, "DOUBLE_GLAZING_KNOWN_DATA"),
        (8, "TRIPLE_GLAZING_KNOWN_DATA"),
    ],
);

/// Storey of a flat. `"99"` means the field does not apply.
pub const FLAT_LEVEL: CodeTable<FlatLevel> = CodeTable::new(
    "flat_level",
    &[
        (0, "BASEMENT"),
        (1, "GROUND_FLOOR"),
        (2, "MID_FLOOR"),
        (3, "TOP_FLOOR"),
    ],
)
.with_sentinels(&["99"]);

/// Corridor adjoining a flat.
pub const HEAT_LOSS_CORRIDOR: CodeTable<HeatLossCorridor> = CodeTable::new(
    "heat_loss_corridor",
    &[
        (0, "NO_CORRIDOR"),
        (1, "HEATED_CORRIDOR"),
        (2, "UNHEATED_CORRIDOR"),
    ],
);

/// Compass orientation.
pub const ORIENTATION: CodeTable<Orientation> = CodeTable::new(
    "orientation",
    &[
        (1, "NORTH"),
        (2, "NORTH_EAST"),
        (3, "EAST"),
        (4, "SOUTH_EAST"),
        (5, "SOUTH"),
        (6, "SOUTH_WEST"),
        (7, "WEST"),
        (8, "NORTH_WEST"),
    ],
);

/// Overshading of glazing or panels.
pub const OVERSHADING: CodeTable<Overshading> = CodeTable::new(
    "overshading",
    &[
        (1, "NONE_OR_VERY_LITTLE"),
        (2, "MODEST"),
        (3, "SIGNIFICANT"),
        (4, "HEAVY"),
    ],
);

/// Suggested improvement. Code 33 was withdrawn.
pub const IMPROVEMENT_TYPE: CodeTable<ImprovementType> = CodeTable::new(
    "improvement_type",
    &[
        (1, "INSULATE_HOT_WATER_CYLINDER_WITH_80_MM_JACKET"),
        (2, "INCREASE_HOT_WATER_CYLINDER_INSULATION"),
        (3, "ADDITIONAL_80_MM_JACKET_TO_HOT_WATER_CYLINDER"),
        (4, "HOT_WATER_CYLINDER_THERMOSTAT"),
        (5, "INCREASE_LOFT_INSULATION_TO_270_MM"),
        (6, "CAVITY_WALL_INSULATION"),
        (7, "INTERNAL_OR_EXTERNAL_WALL_INSULATION"),
        (8, "DOUBLE_GLAZING"),
        (9, "SECONDARY_GLAZING"),
        (10, "DRAUGHTPROOFING"),
        (11, "HEATING_CONTROLS_PROGRAMMER_ROOM_THERMOSTAT_AND_TRVS"),
        (12, "HEATING_CONTROLS_ROOM_THERMOSTAT_AND_TRVS"),
        (13, "HEATING_CONTROLS_THERMOSTATIC_RADIATOR_VALVES"),
        (14, "HEATING_CONTROLS_ROOM_THERMOSTAT"),
        (15, "HEATING_CONTROLS_PROGRAMMER_AND_TRVS"),
        (16, "TIME_AND_TEMPERATURE_ZONE_CONTROL"),
        (17, "HEATING_CONTROLS_PROGRAMMER_AND_ROOM_THERMOSTAT"),
        (18, "HEATING_CONTROLS_ROOM_THERMOSTAT1"),
        (19, "SOLAR_WATER_HEATING"),
        (20, "REPLACE_BOILER_WITH_NEW_CONDENSING_BOILER"),
        (21, "REPLACE_BOILER_WITH_NEW_CONDENSING_BOILER1"),
        (22, "BIOMASS_BOILER"),
        (23, "WOOD_PELLET_STOVE_WITH_BOILER_AND_RADIATORS"),
        (24, "FAN_ASSISTED_STORAGE_HEATERS_AND_DUAL_IMMERSION_CYLINDER"),
        (25, "FAN_ASSISTED_STORAGE_HEATERS"),
        (26, "REPLACEMENT_WARM_AIR_UNIT"),
        (27, "GAS_CONDENSING_BOILER"),
        (28, "OIL_CONDENSING_BOILER"),
        (29, "CHANGE_HEATING_TO_GAS_CONDENSING_BOILER1"),
        (30, "FAN_ASSISTED_STORAGE_HEATERS_AND_DUAL_IMMERSION_CYLINDER1"),
        (31, "FANASSISTED_STORAGE_HEATERS"),
        (32, "CHANGE_HEATING_TO_GAS_CONDENSING_BOILER12"),
        (34, "SOLAR_PV_25"),
        (35, "LOW_ENERGY_LIGHTING"),
        (36, "REPLACE_HEATING_UNIT_WITH_CONDENSING_UNIT"),
        (37, "CONDENSING_BOILER_SEPARATE_FROM_THE_RANGE_COOKER"),
        (38, "CONDENSING_BOILER_SEPARATE_FROM_THE_RANGE_COOKER1"),
        (39, "WOOD_PELLET_STOVE_WITH_BOILER_AND_RADIATORS1"),
        (40, "ROOM_HEATERS_TO_CONDENSING_BOILER"),
        (41, "CHANGE_ROOM_HEATERS_TO_CONDENSING_BOILER1"),
        (42, "REPLACE_HEATING_UNIT_WITH_MAINS_GAS_CONDENSING_UNIT"),
        (43, "CONDENSING_OIL_BOILER_WITH_RADIATORS1"),
        (44, "WIND_TURBINE"),
        (45, "FLAT_ROOF_INSULATION"),
        (46, "ROOM_IN_ROOF_INSULATION"),
        (47, "FLOOR_INSULATION"),
        (48, "HIGH_PERFORMANCE_EXTERNAL_DOORS"),
        (49, "MIXER_SHOWER_HEAT_RECOVERY"),
        (50, "BOILER_FLUE_GAS_HEAT_RECOVERY"),
        (51, "AIR_OR_GROUND_SOURCE_HEAT_PUMP"),
        (52, "AIR_OR_GROUND_SOURCE_HEAT_PUMP_WITH_UNDERFLOOR_HEATING"),
        (53, "MICRO_CHP"),
        (54, "BIOMASS_BOILER_EXEMPTED_APPLIANCE_IF_IN_SMOKE_CONTROL_AREA"),
        (55, "EXTERNAL_INSULATION_WITH_CAVITY_WALL_INSULATION"),
        (56, "REPLACEMENT_GLAZING_UNITS"),
        (57, "FLOOR_INSULATION_SUSPENDED_FLOOR"),
        (58, "FLOOR_INSULATION_SOLID_FLOOR"),
        (59, "HIGH_HEAT_RETENTION_STORAGE_HEATERS_AND_DUAL_IMMERSION_CYLINDER"),
        (60, "HIGH_HEAT_RETENTION_STORAGE_HEATERS"),
        (61, "HIGH_HEAT_RETENTION_STORAGE_HEATERS_AND_DUAL_IMMERSION_CYLINDER1"),
        (62, "HIGH_HEAT_RETENTION_STORAGE_HEATERS1"),
        (63, "PARTY_WALL_INSULATION"),
    ],
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Decoded;

    fn ascending(entries: &[(u8, &str)]) -> bool {
        entries.windows(2).all(|w| w[0].0 < w[1].0)
    }

    #[test]
    fn tables_are_in_code_order() {
        assert!(ascending(METER_TYPE.entries()));
        assert!(ascending(PROPERTY_TYPE.entries()));
        assert!(ascending(BUILT_FORM.entries()));
        assert!(ascending(GLAZED_AREA.entries()));
        assert!(ascending(EFFICIENCY_RATING.entries()));
        assert!(ascending(MULTIPLE_GLAZING_TYPE.entries()));
        assert!(ascending(FLAT_LEVEL.entries()));
        assert!(ascending(HEAT_LOSS_CORRIDOR.entries()));
        assert!(ascending(ORIENTATION.entries()));
        assert!(ascending(OVERSHADING.entries()));
        assert!(ascending(IMPROVEMENT_TYPE.entries()));
    }

    #[test]
    fn one_to_one_tables_cover_their_vocabulary() {
        for &(code, _) in PROPERTY_TYPE.entries() {
            assert!(PROPERTY_TYPE.resolve(code).is_some(), "property type {code}");
        }
        for &(code, _) in MULTIPLE_GLAZING_TYPE.entries() {
            assert!(MULTIPLE_GLAZING_TYPE.resolve(code).is_some(), "glazing {code}");
        }
        for &(code, _) in ORIENTATION.entries() {
            assert!(ORIENTATION.resolve(code).is_some(), "orientation {code}");
        }
    }

    #[test]
    fn meter_type_skips_code_three() {
        assert_eq!(METER_TYPE.decode("2"), Some(MeterType::SingleRate));
        assert_eq!(METER_TYPE.decode("4"), Some(MeterType::DualRate24Hour));
        assert_eq!(METER_TYPE.lookup("3"), Decoded::Unmapped);
    }

    #[test]
    fn flat_level_ninety_nine_is_absent() {
        assert_eq!(FLAT_LEVEL.lookup("99"), Decoded::Absent);
        assert_eq!(FLAT_LEVEL.decode("3"), Some(FlatLevel::TopFloor));
    }

    #[test]
    fn improvement_aliases_strip_suffix() {
        assert_eq!(
            IMPROVEMENT_TYPE.decode("21"),
            Some(ImprovementType::ReplaceBoilerWithNewCondensingBoiler)
        );
        assert_eq!(
            IMPROVEMENT_TYPE.decode("62"),
            Some(ImprovementType::HighHeatRetentionStorageHeaters)
        );
        assert_eq!(
            IMPROVEMENT_TYPE.decode("39"),
            Some(ImprovementType::WoodPelletStoveWithBoilerAndRadiators)
        );
        // Exact name wins before any stripping.
        assert_eq!(IMPROVEMENT_TYPE.decode("34"), Some(ImprovementType::SolarPv25));
    }

    #[test]
    fn improvement_names_without_counterpart_are_unmapped() {
        for code in ["11", "18", "29", "31", "32", "37", "53", "55"] {
            assert_eq!(IMPROVEMENT_TYPE.lookup(code), Decoded::Unmapped, "code {code}");
        }
        assert_eq!(IMPROVEMENT_TYPE.lookup("33"), Decoded::Unmapped);
        assert_eq!(
            IMPROVEMENT_TYPE.lookup("63"),
            Decoded::Value(ImprovementType::PartyWallInsulation)
        );
    }

    #[test]
    fn encode_returns_lowest_aliasing_code() {
        assert_eq!(
            IMPROVEMENT_TYPE.encode(ImprovementType::ReplaceBoilerWithNewCondensingBoiler),
            Some(20)
        );
        assert_eq!(IMPROVEMENT_TYPE.encode(ImprovementType::UpgradeHeatingControls), None);
        assert_eq!(GLAZED_AREA.encode(GlazedArea::MuchLessThanTypical), Some(5));
    }
}
