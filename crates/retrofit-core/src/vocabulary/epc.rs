//! # Assessment Vocabulary
//!
//! Values recorded by national energy-performance assessments: property
//! form, fabric, glazing, heating, and the assessor's suggested
//! improvements. Wire labels match the assessment register exports.

use crate::labelled_enum;

labelled_enum! {
    /// Country of an energy-performance assessment.
    pub enum Country: "country" {
        /// England and Wales share one assessment scheme.
        EnglandAndWales => ("ENGLAND_AND_WALES", "England and Wales"),
        /// Northern Ireland.
        NorthernIreland => ("NORTHERN_IRELAND", "Northern Ireland"),
        /// Scotland.
        Scotland => ("SCOTLAND", "Scotland"),
    }
}

labelled_enum! {
    /// Dwelling type.
    pub enum PropertyType: "property type" {
        /// Bungalow.
        Bungalow => ("BUNGALOW", "bungalow"),
        /// Flat.
        Flat => ("FLAT", "flat"),
        /// House.
        House => ("HOUSE", "house"),
        /// Maisonette.
        Maisonette => ("MAISONETTE", "maisonette"),
        /// Park home; banded by its own construction standards.
        ParkHome => ("PARK_HOME", "park home"),
    }
}

labelled_enum! {
    /// How the dwelling attaches to its neighbours.
    pub enum BuiltForm: "built form" {
        /// Detached.
        Detached => ("DETACHED", "detached"),
        /// Enclosed end-terrace.
        EnclosedEndTerrace => ("ENCLOSED_END_TERRACE", "enclosed End-Terrace"),
        /// Enclosed mid-terrace.
        EnclosedMidTerrace => ("ENCLOSED_MID_TERRACE", "enclosed Mid-Terrace"),
        /// End-terrace.
        EndTerrace => ("END_TERRACE", "end-Terrace"),
        /// Mid-terrace.
        MidTerrace => ("MID_TERRACE", "mid-Terrace"),
        /// Semi-detached.
        SemiDetached => ("SEMI_DETACHED", "semi-Detached"),
    }
}

labelled_enum! {
    /// Electricity meter type.
    pub enum MeterType: "meter type" {
        /// Dual rate.
        DualRate => ("DUAL_RATE", "dual"),
        /// Dual rate, 24 hour heating tariff.
        DualRate24Hour => ("DUAL_RATE_24_HOUR", "dual (24 hour)"),
        /// Off-peak 18 hour.
        OffPeak18Hour => ("OFF_PEAK_18_HOUR", "off-peak 18 hour"),
        /// Single rate.
        SingleRate => ("SINGLE_RATE", "Single"),
    }
}

labelled_enum! {
    /// Ranged estimate of total glazed area.
    pub enum GlazedArea: "glazed area" {
        /// Less than typical.
        LessThanTypical => ("LESS_THAN_TYPICAL", "Less than typical"),
        /// Much less than typical.
        MuchLessThanTypical => ("MUCH_LESS_THAN_TYPICAL", "Much less than typical"),
        /// Typical.
        Typical => ("TYPICAL", "Typical"),
        /// More than typical.
        MoreThanTypical => ("MORE_THAN_TYPICAL", "More than typical"),
        /// Much more than typical.
        MuchMoreThanTypical => ("MUCH_MORE_THAN_TYPICAL", "Much more than typical"),
    }
}

labelled_enum! {
    /// Assessor's qualitative efficiency rating of an element.
    pub enum EfficiencyRating: "efficiency rating" {
        /// Not applicable.
        Na => ("NA", "not applicable"),
        /// Very poor.
        VeryPoor => ("VERY_POOR", "very poor"),
        /// Poor.
        Poor => ("POOR", "poor"),
        /// Average.
        Average => ("AVERAGE", "average"),
        /// Good.
        Good => ("GOOD", "good"),
        /// Very good.
        VeryGood => ("VERY_GOOD", "very good"),
    }
}

labelled_enum! {
    /// Multiple-glazing type, following the assessment definition.
    pub enum MultipleGlazingType: "multiple glazing type" {
        /// Double glazing installed during or after 2002.
        DoubleGlazingInstalledDuringOrAfter2002 => (
            "DOUBLE_GLAZING_INSTALLED_DURING_OR_AFTER_2002",
            "double glazing installed during or after 2002"
        ),
        /// Double glazing installed before 2002.
        DoubleGlazingInstalledBefore2002 => (
            "DOUBLE_GLAZING_INSTALLED_BEFORE_2002",
            "double glazing installed before 2002"
        ),
        /// Double glazing with measured data.
        DoubleGlazingKnownData => ("DOUBLE_GLAZING_KNOWN_DATA", "double, known data"),
        /// Double glazing, install date unknown.
        DoubleGlazingUnknownInstallDate => (
            "DOUBLE_GLAZING_UNKNOWN_INSTALL_DATE",
            "double glazing, unknown install date"
        ),
        /// Secondary glazing.
        SecondaryGlazing => ("SECONDARY_GLAZING", "secondary glazing"),
        /// Single glazing.
        SingleGlazing => ("SINGLE_GLAZING", "single glazing"),
        /// Triple glazing.
        TripleGlazing => ("TRIPLE_GLAZING", "triple glazing"),
        /// Triple glazing with measured data.
        TripleGlazingKnownData => ("TRIPLE_GLAZING_KNOWN_DATA", "triple, known data"),
    }
}

labelled_enum! {
    /// Storey of a flat within its building.
    pub enum FlatLevel: "flat level" {
        /// Basement.
        Basement => ("BASEMENT", "basement"),
        /// Ground floor.
        GroundFloor => ("GROUND_FLOOR", "ground floor"),
        /// Mid floor.
        MidFloor => ("MID_FLOOR", "mid floor"),
        /// Top floor.
        TopFloor => ("TOP_FLOOR", "top floor"),
    }
}

labelled_enum! {
    /// Corridor or stairwell adjoining a flat.
    pub enum HeatLossCorridor: "heat loss corridor" {
        /// Heated corridor.
        HeatedCorridor => ("HEATED_CORRIDOR", "heated corridor"),
        /// No corridor.
        NoCorridor => ("NO_CORRIDOR", "no corridor"),
        /// Unheated corridor.
        UnheatedCorridor => ("UNHEATED_CORRIDOR", "unheated corridor"),
    }
}

labelled_enum! {
    /// Compass orientation.
    pub enum Orientation: "orientation" {
        /// North.
        North => ("NORTH", "north"),
        /// North east.
        NorthEast => ("NORTH_EAST", "north east"),
        /// East.
        East => ("EAST", "east"),
        /// South east.
        SouthEast => ("SOUTH_EAST", "south east"),
        /// South.
        South => ("SOUTH", "south"),
        /// South west.
        SouthWest => ("SOUTH_WEST", "south west"),
        /// West.
        West => ("WEST", "west"),
        /// North west.
        NorthWest => ("NORTH_WEST", "north west"),
    }
}

impl Orientation {
    /// Angle clockwise from north, in degrees.
    pub fn angle(&self) -> u16 {
        match self {
            Self::North => 0,
            Self::NorthEast => 45,
            Self::East => 90,
            Self::SouthEast => 135,
            Self::South => 180,
            Self::SouthWest => 225,
            Self::West => 270,
            Self::NorthWest => 315,
        }
    }
}

labelled_enum! {
    /// Overshading of glazing and solar collectors.
    pub enum Overshading: "overshading" {
        /// None or very little.
        NoneOrVeryLittle => ("NONE_OR_VERY_LITTLE", "none or very little"),
        /// Modest.
        Modest => ("MODEST", "modest"),
        /// Significant.
        Significant => ("SIGNIFICANT", "significant"),
        /// Heavy.
        Heavy => ("HEAVY", "heavy"),
    }
}

labelled_enum! {
    /// External wall construction.
    pub enum WallType: "wall type" {
        /// Cavity wall.
        CavityWall => ("CAVITY_WALL", "cavity wall"),
        /// Cob.
        Cob => ("COB", "cob"),
        /// Granite or whinstone.
        GraniteOrWhinstone => ("GRANITE_OR_WHINSTONE", "granite or whinstone"),
        /// Park home wall.
        ParkHomeWall => ("PARK_HOME_WALL", "park home wall"),
        /// Sandstone or limestone.
        SandstoneOrLimestone => ("SANDSTONE_OR_LIMESTONE", "sandstone or limestone"),
        /// Solid brick.
        SolidBrick => ("SOLID_BRICK", "solid brick"),
        /// System built.
        SystemBuilt => ("SYSTEM_BUILT", "system built"),
        /// Timber frame.
        TimberFrame => ("TIMBER_FRAME", "timber frame"),
    }
}

impl WallType {
    /// Solid masonry walls.
    pub fn is_solid(&self) -> bool {
        match self {
            Self::SolidBrick | Self::SandstoneOrLimestone | Self::GraniteOrWhinstone => true,
            Self::CavityWall
            | Self::Cob
            | Self::ParkHomeWall
            | Self::SystemBuilt
            | Self::TimberFrame => false,
        }
    }
}

labelled_enum! {
    /// Wall insulation present.
    pub enum WallInsulationType: "wall insulation type" {
        /// External insulation.
        ExternalInsulation => ("EXTERNAL_INSULATION", "external insulation"),
        /// Filled cavity.
        FilledCavity => ("FILLED_CAVITY", "filled cavity"),
        /// Filled cavity and external insulation.
        FilledCavityAndExternalInsulation => (
            "FILLED_CAVITY_AND_EXTERNAL_INSULATION",
            "filled cavity and external insulation"
        ),
        /// Filled cavity and internal insulation.
        FilledCavityAndInternalInsulation => (
            "FILLED_CAVITY_AND_INTERNAL_INSULATION",
            "filled cavity and internal insulation"
        ),
        /// Insulated, position unknown.
        Insulated => ("INSULATED", "insulated"),
        /// Internal insulation.
        InternalInsulation => ("INTERNAL_INSULATION", "internal insulation"),
        /// No insulation.
        NoInsulation => ("NO_INSULATION", "no insulation"),
        /// Partial insulation.
        PartialInsulation => ("PARTIAL_INSULATION", "partial insulation"),
    }
}

labelled_enum! {
    /// Roof construction.
    pub enum RoofType: "roof type" {
        /// Flat roof.
        Flat => ("FLAT", "flat"),
        /// Pitched roof.
        Pitched => ("PITCHED", "pitched"),
        /// Room(s) in the roof.
        RoofRoom => ("ROOF_ROOM", "roof room(s)"),
        /// Thatched.
        Thatched => ("THATCHED", "thatched"),
        /// Another dwelling above.
        DwellingAbove => ("DWELLING_ABOVE", "another dwelling/premises above"),
    }
}

labelled_enum! {
    /// Lowest floor construction.
    pub enum FloorType: "floor type" {
        /// Conservatory.
        Conservatory => ("CONSERVATORY", "conservatory"),
        /// Solid.
        Solid => ("SOLID", "solid"),
        /// Suspended.
        Suspended => ("SUSPENDED", "suspended"),
        /// Exposed to external air.
        ToExternalAir => ("TO_EXTERNAL_AIR", "to external air"),
        /// Above an unheated space.
        ToUnheatedSpace => ("TO_UNHEATED_SPACE", "to unheated space"),
        /// Another dwelling below.
        DwellingBelow => ("DWELLING_BELOW", "another dwelling/premises below"),
    }
}

labelled_enum! {
    /// Primary heat source of a space-heating system.
    pub enum HeatingSystemSource: "heating system source" {
        /// Air source heat pump.
        AirSourceHeatPump => ("AIR_SOURCE_HEAT_PUMP", "air source heat pump"),
        /// Boiler.
        Boiler => ("BOILER", "boiler"),
        /// Ceiling heating.
        CeilingHeating => ("CEILING_HEATING", "ceiling heating"),
        /// Community scheme.
        CommunityScheme => ("COMMUNITY_SCHEME", "community scheme"),
        /// Exhaust air MEV source heat pump.
        ExhaustAirMevSourceHeatPump => (
            "EXHAUST_AIR_MEV_SOURCE_HEAT_PUMP",
            "exhaust air MEV source heat pump"
        ),
        /// Ground source heat pump.
        GroundSourceHeatPump => ("GROUND_SOURCE_HEAT_PUMP", "ground source heat pump"),
        /// Micro-cogeneration.
        MicroCogeneration => ("MICRO_COGENERATION", "micro-cogeneration"),
        /// Portable heaters.
        PortableHeaters => ("PORTABLE_HEATERS", "portable heaters"),
        /// Electric underfloor heating.
        ElectricUnderfloorHeaters => ("ELECTRIC_UNDERFLOOR_HEATERS", "electric underfloor heating"),
        /// Room heaters.
        RoomHeaters => ("ROOM_HEATERS", "room heaters"),
        /// Storage heaters.
        StorageHeaters => ("STORAGE_HEATERS", "storage heaters"),
        /// Heat pump of unknown type. The label keeps the register's spelling.
        UnknownHeatPump => ("UNKNOWN_HEAT_PUMP", "unkown heat pump"),
        /// Water source heat pump.
        WaterSourceHeatPump => ("WATER_SOURCE_HEAT_PUMP", "water source heat pump"),
        /// Community scheme recovering heat from boilers.
        CommunitySchemeRecoveredHeatFromBoilers => (
            "COMMUNITY_SCHEME_RECOVERED_HEAT_FROM_BOILERS",
            "community scheme recovered heat from boilers"
        ),
    }
}

labelled_enum! {
    /// Heat emitter of a space-heating system.
    pub enum HeatingSystemEmitter: "heating system emitter" {
        /// Radiators.
        Radiators => ("RADIATORS", "radiators"),
        /// Underfloor pipework.
        Underfloor => ("UNDERFLOOR", "underfloor"),
        /// Warm air ducts.
        WarmAir => ("WARM_AIR", "warm air"),
    }
}

labelled_enum! {
    /// Heating control device or method.
    pub enum HeatingControlMethod: "heating control method" {
        /// Thermostatic radiator valves.
        Trv => ("TRV", "trv"),
        /// Bypass.
        Bypass => ("BYPASS", "bypass"),
        /// No controls.
        None => ("NONE", "none"),
        /// Boiler energy manager.
        BoilerEnergyManager => ("BOILER_ENERGY_MANAGER", "boiler energy manager"),
        /// Two or more room thermostats.
        MultiroomThermostat => ("MULTIROOM_THERMOSTAT", "two or more room thermostats"),
        /// Charging linked to use of community heating.
        ChargingSystemLinkedToUseOfCommunityHeating => (
            "CHARGING_SYSTEM_LINKED_TO_USE_OF_COMMUNITY_HEATING",
            "charging system linked to use of community heating"
        ),
        /// Appliance thermostats.
        ApplianceThermostats => ("APPLIANCE_THERMOSTATS", "appliance thermostats"),
        /// Unit charging.
        UnitCharging => ("UNIT_CHARGING", "unit charging"),
        /// Single room thermostat.
        SingleroomThermostat => ("SINGLEROOM_THERMOSTAT", "single room thermostat"),
        /// Programmer.
        Programmer => ("PROGRAMMER", "programmer"),
        /// Time and temperature zone control.
        TimeAndTemperatureZoneControl => (
            "TIME_AND_TEMPERATURE_ZONE_CONTROL",
            "time and temperature zone control"
        ),
        /// Flow switch.
        FlowSwitch => ("FLOW_SWITCH", "flow switch"),
        /// Celect-type controls.
        CelectControls => ("CELECT_CONTROLS", "celect controls"),
        /// Controls for high heat retention storage heaters.
        ControlsForHighHeatRetentionStorageHeaters => (
            "CONTROLS_FOR_HIGH_HEAT_RETENTION_STORAGE_HEATERS",
            "controls for high heat retention storage heaters"
        ),
        /// Manual charge control.
        ManualChargeControl => ("MANUAL_CHARGE_CONTROL", "manual charge control"),
        /// Flat rate charging.
        FlatRateCharging => ("FLAT_RATE_CHARGING", "flat rate charging"),
        /// Automatic charge control.
        AutomaticChargeControl => ("AUTOMATIC_CHARGE_CONTROL", "auto charge control"),
    }
}

labelled_enum! {
    /// Improvement suggested on an energy-performance certificate.
    pub enum ImprovementType: "improvement type" {
        /// Add an additional 80mm jacket to the hot water cylinder.
        Additional80MmJacketToHotWaterCylinder => (
            "ADDITIONAL_80_MM_JACKET_TO_HOT_WATER_CYLINDER",
            "add additional 80mm jacket to hot water cylinder"
        ),
        /// Air or ground source heat pump.
        AirOrGroundSourceHeatPump => (
            "AIR_OR_GROUND_SOURCE_HEAT_PUMP",
            "air or ground source heat pump"
        ),
        /// Air or ground source heat pump with underfloor heating.
        AirOrGroundSourceHeatPumpWithUnderfloorHeating => (
            "AIR_OR_GROUND_SOURCE_HEAT_PUMP_WITH_UNDERFLOOR_HEATING",
            "air or ground source heat pump with underfloor heating"
        ),
        /// Replace boiler with biomass boiler.
        BiomassBoiler => ("BIOMASS_BOILER", "replace boiler with biomass boiler"),
        /// Flue gas heat recovery with boiler.
        BoilerFlueGasHeatRecovery => (
            "BOILER_FLUE_GAS_HEAT_RECOVERY",
            "flue gas heat recovery device in conjunction with boiler"
        ),
        /// Cavity wall insulation.
        CavityWallInsulation => ("CAVITY_WALL_INSULATION", "cavity wall insulation"),
        /// Condensing boiler.
        CondensingBoiler => ("CONDENSING_BOILER", "condensing boiler"),
        /// Replace single glazing with low-E double glazing.
        DoubleGlazing => (
            "DOUBLE_GLAZING",
            "replace single glazed windows with low-E double glazed windows"
        ),
        /// Draughtproofing.
        Draughtproofing => ("DRAUGHTPROOFING", "draughtproofing"),
        /// Fan-assisted storage heaters.
        FanAssistedStorageHeaters => ("FAN_ASSISTED_STORAGE_HEATERS", "fan-assisted storage heaters"),
        /// Fan-assisted storage heaters and dual immersion cylinder.
        FanAssistedStorageHeatersAndDualImmersionCylinder => (
            "FAN_ASSISTED_STORAGE_HEATERS_AND_DUAL_IMMERSION_CYLINDER",
            "fan-assisted storage heaters and dual immersion cylinder"
        ),
        /// Flat roof insulation.
        FlatRoofInsulation => ("FLAT_ROOF_INSULATION", "flat roof insulation"),
        /// Floor insulation.
        FloorInsulation => ("FLOOR_INSULATION", "floor insulation"),
        /// Solid floor insulation.
        FloorInsulationSolidFloor => ("FLOOR_INSULATION_SOLID_FLOOR", "floor insulation (solid floor)"),
        /// Suspended floor insulation.
        FloorInsulationSuspendedFloor => (
            "FLOOR_INSULATION_SUSPENDED_FLOOR",
            "floor insulation (suspended floor)"
        ),
        /// Change heating to gas condensing boiler.
        GasCondensingBoiler => ("GAS_CONDENSING_BOILER", "change heating to gas condensing boiler"),
        /// High heat retention storage heaters.
        HighHeatRetentionStorageHeaters => (
            "HIGH_HEAT_RETENTION_STORAGE_HEATERS",
            "high heat retention storage heaters"
        ),
        /// High heat retention storage heaters and dual immersion cylinder.
        HighHeatRetentionStorageHeatersAndDualImmersionCylinder => (
            "HIGH_HEAT_RETENTION_STORAGE_HEATERS_AND_DUAL_IMMERSION_CYLINDER",
            "high heat retention storage heaters and dual immersion cylinder"
        ),
        /// High performance external doors.
        HighPerformanceExternalDoors => (
            "HIGH_PERFORMANCE_EXTERNAL_DOORS",
            "high performance external doors"
        ),
        /// Hot water cylinder thermostat.
        HotWaterCylinderThermostat => ("HOT_WATER_CYLINDER_THERMOSTAT", "hot water cylinder thermostat"),
        /// Increase hot water cylinder insulation.
        IncreaseHotWaterCylinderInsulation => (
            "INCREASE_HOT_WATER_CYLINDER_INSULATION",
            "increase hot water cylinder insulation"
        ),
        /// Increase loft insulation to 270mm.
        IncreaseLoftInsulationTo270Mm => (
            "INCREASE_LOFT_INSULATION_TO_270_MM",
            "increase loft insulation to 270mm"
        ),
        /// Insulate hot water cylinder with 80mm jacket.
        InsulateHotWaterCylinderWith80MmJacket => (
            "INSULATE_HOT_WATER_CYLINDER_WITH_80_MM_JACKET",
            "insulate hot water cylinder with 80mm jacket"
        ),
        /// Internal or external wall insulation.
        InternalOrExternalWallInsulation => (
            "INTERNAL_OR_EXTERNAL_WALL_INSULATION",
            "internal or external wall insulation"
        ),
        /// Low energy lighting for all fixed outlets.
        LowEnergyLighting => ("LOW_ENERGY_LIGHTING", "low energy lighting for all fixed outlets"),
        /// Heat recovery for mixer showers.
        MixerShowerHeatRecovery => ("MIXER_SHOWER_HEAT_RECOVERY", "heat recovery system for mixer showers"),
        /// Condensing oil boiler with radiators.
        OilCondensingBoiler => ("OIL_CONDENSING_BOILER", "condensing oil boiler with radiators"),
        /// Party wall insulation.
        PartyWallInsulation => ("PARTY_WALL_INSULATION", "party wall insulation"),
        /// Replace boiler with new condensing boiler.
        ReplaceBoilerWithNewCondensingBoiler => (
            "REPLACE_BOILER_WITH_NEW_CONDENSING_BOILER",
            "replace boiler with new condensing boiler"
        ),
        /// Replace heating unit with condensing unit.
        ReplaceHeatingUnitWithCondensingUnit => (
            "REPLACE_HEATING_UNIT_WITH_CONDENSING_UNIT",
            "replace heating unit with condensing unit"
        ),
        /// Replacement glazing units.
        ReplacementGlazingUnits => ("REPLACEMENT_GLAZING_UNITS", "replacement glazing units"),
        /// Replacement warm air unit.
        ReplacementWarmAirUnit => ("REPLACEMENT_WARM_AIR_UNIT", "replacement warm air unit"),
        /// Change room heaters to condensing boiler.
        RoomHeatersToCondensingBoiler => (
            "ROOM_HEATERS_TO_CONDENSING_BOILER",
            "change room heaters to condensing boiler"
        ),
        /// Room-in-roof insulation.
        RoomInRoofInsulation => ("ROOM_IN_ROOF_INSULATION", "room-in-roof insulation"),
        /// Secondary glazing to single glazed windows.
        SecondaryGlazing => ("SECONDARY_GLAZING", "secondary glazing to single glazed windows"),
        /// Solar photovoltaic panels, 2.5 kWp.
        SolarPv25 => ("SOLAR_PV_25", "solar photovoltaic panels, 2.5 kWp"),
        /// Solar water heating.
        SolarWaterHeating => ("SOLAR_WATER_HEATING", "Solar water heating"),
        /// Time and temperature zone control.
        TimeAndTemperatureZoneControl => (
            "TIME_AND_TEMPERATURE_ZONE_CONTROL",
            "time and temperature zone control"
        ),
        /// Upgrade heating controls.
        UpgradeHeatingControls => ("UPGRADE_HEATING_CONTROLS", "upgrade heating controls"),
        /// Wind turbine.
        WindTurbine => ("WIND_TURBINE", "wind turbine"),
        /// Wood pellet stove with boiler and radiators.
        WoodPelletStoveWithBoilerAndRadiators => (
            "WOOD_PELLET_STOVE_WITH_BOILER_AND_RADIATORS",
            "wood pellet stove with boiler and radiators"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::Labelled;
    use std::collections::HashSet;

    fn assert_unique<T: Labelled>() {
        let mut labels = HashSet::new();
        let mut symbols = HashSet::new();
        for value in T::all() {
            assert!(labels.insert(value.label()), "duplicate {} label", T::KIND);
            assert!(symbols.insert(value.symbol()), "duplicate {} symbol", T::KIND);
        }
    }

    #[test]
    fn labels_and_symbols_unique() {
        assert_unique::<Country>();
        assert_unique::<PropertyType>();
        assert_unique::<BuiltForm>();
        assert_unique::<MeterType>();
        assert_unique::<GlazedArea>();
        assert_unique::<EfficiencyRating>();
        assert_unique::<MultipleGlazingType>();
        assert_unique::<FlatLevel>();
        assert_unique::<HeatLossCorridor>();
        assert_unique::<Orientation>();
        assert_unique::<Overshading>();
        assert_unique::<WallType>();
        assert_unique::<WallInsulationType>();
        assert_unique::<RoofType>();
        assert_unique::<FloorType>();
        assert_unique::<HeatingSystemSource>();
        assert_unique::<HeatingSystemEmitter>();
        assert_unique::<HeatingControlMethod>();
        assert_unique::<ImprovementType>();
    }

    #[test]
    fn orientation_angles_step_by_45() {
        for (i, orientation) in Orientation::ALL.iter().enumerate() {
            assert_eq!(orientation.angle() as usize, i * 45);
        }
    }

    #[test]
    fn solid_walls() {
        let solid: Vec<_> = WallType::ALL.iter().filter(|w| w.is_solid()).collect();
        assert_eq!(
            solid,
            vec![
                &WallType::GraniteOrWhinstone,
                &WallType::SandstoneOrLimestone,
                &WallType::SolidBrick
            ]
        );
    }

    #[test]
    fn improvement_type_count() {
        assert_eq!(ImprovementType::ALL.len(), 41);
    }

    #[test]
    fn register_spelling_is_preserved() {
        let parsed: HeatingSystemSource = "unkown heat pump".parse().unwrap();
        assert_eq!(parsed, HeatingSystemSource::UnknownHeatPump);
        assert_eq!(MeterType::SingleRate.as_str(), "Single");
    }
}
