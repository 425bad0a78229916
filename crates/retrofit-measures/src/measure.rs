//! Improvement categories, measures and the qualitative scales attached
//! to them.

use retrofit_core::labelled_enum;

labelled_enum! {
    /// Grouping of improvement measures.
    pub enum ImprovementCategory: "improvement category" {
        /// Wall insulation.
        Walls => ("WALLS", "Wall insulation"),
        /// Roof insulation.
        Roofs => ("ROOFS", "Roof insulation"),
        /// Floor insulation.
        Floors => ("FLOORS", "Floor insulation"),
        /// Windows and doors.
        WindowsAndDoors => ("WINDOWS_AND_DOORS", "Windows and doors"),
        /// Ventilation and air-tightness.
        Ventilation => ("VENTILATION", "Ventilation and air-tightness"),
        /// Heat generators.
        Heating => ("HEATING", "Heating systems"),
        /// Heat emitters and pipework.
        Distribution => ("DISTRIBUTION", "Heat distribution"),
        /// Heating controls.
        Controls => ("CONTROLS", "Heating controls"),
        /// Hot water storage and recovery.
        HotWater => ("HOT_WATER", "Hot water"),
        /// Lighting.
        Lighting => ("LIGHTING", "Lighting"),
        /// On-site generation and storage.
        Renewables => ("RENEWABLES", "Renewables"),
        /// Improvements outside the standard categories.
        Custom => ("CUSTOM", "Custom improvements"),
    }
}

labelled_enum! {
    /// A single retrofit measure.
    pub enum ImprovementMeasure: "improvement measure" {
        /// Cavity wall insulation.
        CavityWallInsulation => ("CAVITY_WALL_INSULATION", "Cavity wall insulation"),
        /// External wall insulation.
        ExternalWallInsulation => ("EXTERNAL_WALL_INSULATION", "External wall insulation"),
        /// Internal wall insulation.
        InternalWallInsulation => ("INTERNAL_WALL_INSULATION", "Internal wall insulation"),
        /// Party wall insulation.
        PartyWallInsulation => ("PARTY_WALL_INSULATION", "Party wall insulation"),
        /// Loft insulation at joist level.
        LoftInsulation => ("LOFT_INSULATION", "Loft insulation"),
        /// Flat roof insulation.
        FlatRoofInsulation => ("FLAT_ROOF_INSULATION", "Flat roof insulation"),
        /// Room-in-roof insulation.
        RoomInRoofInsulation => ("ROOM_IN_ROOF_INSULATION", "Room-in-roof insulation"),
        /// Insulation at rafter level.
        PitchedRoofInsulation => ("PITCHED_ROOF_INSULATION", "Pitched roof insulation"),
        /// Suspended floor insulation.
        SuspendedFloorInsulation => ("SUSPENDED_FLOOR_INSULATION", "Suspended floor insulation"),
        /// Solid floor insulation.
        SolidFloorInsulation => ("SOLID_FLOOR_INSULATION", "Solid floor insulation"),
        /// Double glazing.
        DoubleGlazing => ("DOUBLE_GLAZING", "Double glazing"),
        /// Triple glazing.
        TripleGlazing => ("TRIPLE_GLAZING", "Triple glazing"),
        /// Secondary glazing.
        SecondaryGlazing => ("SECONDARY_GLAZING", "Secondary glazing"),
        /// Insulated external doors.
        ExternalDoors => ("EXTERNAL_DOORS", "Energy-efficient external doors"),
        /// Draught-proofing.
        DraughtProofing => ("DRAUGHT_PROOFING", "Draught-proofing and air-tightness"),
        /// Mechanical ventilation with heat recovery.
        MechanicalVentilationHeatRecovery => (
            "MECHANICAL_VENTILATION_HEAT_RECOVERY",
            "Mechanical ventilation with heat recovery"
        ),
        /// Continuous extract ventilation.
        ExtractVentilation => ("EXTRACT_VENTILATION", "Extract ventilation"),
        /// Boiler replacement.
        BoilerReplacement => ("BOILER_REPLACEMENT", "Boiler replacement"),
        /// Air source heat pump.
        AirSourceHeatPump => ("AIR_SOURCE_HEAT_PUMP", "Air source heat pump"),
        /// Ground source heat pump.
        GroundSourceHeatPump => ("GROUND_SOURCE_HEAT_PUMP", "Ground source heat pump"),
        /// Biomass boiler.
        BiomassBoiler => ("BIOMASS_BOILER", "Biomass boiler"),
        /// High heat retention storage heaters.
        HighHeatRetentionStorageHeaters => (
            "HIGH_HEAT_RETENTION_STORAGE_HEATERS",
            "High heat retention storage heaters"
        ),
        /// Radiator upgrades.
        RadiatorPanels => ("RADIATOR_PANELS", "Radiator panels"),
        /// Wet underfloor heating.
        WetUnderFloorHeating => ("WET_UNDER_FLOOR_HEATING", "Wet underfloor heating"),
        /// Programmer, room thermostat and TRVs.
        HeatingControls => ("HEATING_CONTROLS", "Heating controls"),
        /// Time and temperature zone control.
        ZoneControl => ("ZONE_CONTROL", "Time and temperature zone control"),
        /// Cylinder jacket or foam.
        HotWaterCylinderInsulation => (
            "HOT_WATER_CYLINDER_INSULATION",
            "Hot water cylinder insulation"
        ),
        /// Cylinder thermostat.
        HotWaterCylinderThermostat => (
            "HOT_WATER_CYLINDER_THERMOSTAT",
            "Hot water cylinder thermostat"
        ),
        /// Shower waste water heat recovery.
        WasteWaterHeatRecovery => ("WASTE_WATER_HEAT_RECOVERY", "Waste water heat recovery"),
        /// Low-energy lamps in all fixed outlets.
        LowEnergyLighting => ("LOW_ENERGY_LIGHTING", "Low energy lighting"),
        /// Solar photovoltaics.
        SolarPhotovoltaics => ("SOLAR_PHOTOVOLTAICS", "Solar photovoltaics"),
        /// Solar water heating.
        SolarThermal => ("SOLAR_THERMAL", "Solar thermal"),
        /// Small wind turbine.
        WindTurbine => ("WIND_TURBINE", "Wind turbine"),
        /// Home battery storage.
        Battery => ("BATTERY", "Battery"),
    }
}

labelled_enum! {
    /// Risk flag when two measures are combined. Ordered from least to
    /// most severe.
    pub enum Compatibility: "compatibility" {
        /// Construction details must be checked.
        NeedConstructionDetail => ("NEED_CONSTRUCTION_DETAIL", "need construction detail"),
        /// Compatible only with a matching specification.
        SpecificationRequired => ("SPECIFICATION_REQUIRED", "compatible specification required"),
        /// Must not be combined.
        Incompatible => ("INCOMPATIBLE", "these measures are not compatible"),
    }
}

labelled_enum! {
    /// Disruption to occupants while an improvement is installed.
    pub enum Disruption: "disruption" {
        /// Low.
        Low => ("LOW", "Low"),
        /// Medium.
        Medium => ("MEDIUM", "Medium"),
        /// High.
        High => ("HIGH", "High"),
    }
}

labelled_enum! {
    /// Time on site to install an improvement, excluding lead times.
    pub enum InstallationTimeframe: "installation timeframe" {
        /// A day.
        ADay => ("A_DAY", "A day"),
        /// A few days.
        AFewDays => ("A_FEW_DAYS", "A few days"),
        /// A week.
        AWeek => ("A_WEEK", "A week"),
        /// A few weeks.
        AFewWeeks => ("A_FEW_WEEKS", "A few weeks"),
    }
}
