//! Energy sources, end uses, and hot-water sources.

use crate::error::HeatingSystemList;
use crate::labelled_enum;

labelled_enum! {
    /// Fuel or energy carrier consumed by an appliance.
    pub enum EnergySource: "energy source" {
        /// B30K blended kerosene.
        B30k => ("B30K", "B30K"),
        /// Bioethanol.
        Bioethanol => ("BIOETHANOL", "bioethanol"),
        /// Bottled LPG.
        BottledLpg => ("BOTTLED_LPG", "bottled LPG"),
        /// Coal.
        Coal => ("COAL", "coal"),
        /// Dual fuel, mineral and wood.
        DualFuelMineralWood => ("DUAL_FUEL_MINERAL_WOOD", "dual fuel (mineral and wood)"),
        /// Electricity.
        Electric => ("ELECTRIC", "electric"),
        /// Liquid biofuel.
        LiquidBiofuel => ("LIQUID_BIOFUEL", "liquid biofuel"),
        /// Liquefied natural gas.
        Lng => ("LNG", "LNG"),
        /// Liquefied petroleum gas.
        Lpg => ("LPG", "LPG"),
        /// Mains gas.
        MainsGas => ("MAINS_GAS", "mains gas"),
        /// Heating oil.
        Oil => ("OIL", "oil"),
        /// Rapeseed oil.
        RapeseedOil => ("RAPESEED_OIL", "rapeseed oil"),
        /// Smokeless fuel.
        SmokelessFuel => ("SMOKELESS_FUEL", "smokeless fuel"),
        /// Wood chips.
        WoodChips => ("WOOD_CHIPS", "wood chips"),
        /// Wood logs.
        WoodLogs => ("WOOD_LOGS", "wood logs"),
        /// Wood pellets.
        WoodPellets => ("WOOD_PELLETS", "wood pellets"),
        /// Anthracite.
        Anthracite => ("ANTHRACITE", "anthracite"),
        /// Biomass. Retained for older records.
        Biomass => ("BIOMASS", "biomass"),
        /// Biogas.
        Biogas => ("BIOGAS", "biogas"),
        /// B30D blended diesel.
        B30d => ("B30D", "B30D"),
    }
}

impl EnergySource {
    /// Gaseous fuels.
    pub fn is_gas(&self) -> bool {
        matches!(
            self,
            Self::BottledLpg | Self::MainsGas | Self::Lng | Self::Lpg
        )
    }

    /// Liquid fuels burnt in oil appliances.
    pub fn is_oil(&self) -> bool {
        matches!(
            self,
            Self::B30k | Self::Oil | Self::RapeseedOil | Self::Bioethanol | Self::LiquidBiofuel
        )
    }

    /// Solid fuels.
    ///
    /// Anthracite and biomass are not in this group; the grouping mirrors
    /// the heating-fuel classes used for appliance efficiency defaults.
    pub fn is_solid(&self) -> bool {
        matches!(
            self,
            Self::Coal
                | Self::DualFuelMineralWood
                | Self::SmokelessFuel
                | Self::WoodChips
                | Self::WoodPellets
                | Self::WoodLogs
        )
    }
}

labelled_enum! {
    /// Domestic energy end-use categories, grouped from national
    /// energy-consumption statistics. Keys of an appliance's efficiency map.
    pub enum DomesticEnergyEndUse: "energy end use" {
        /// Space heating.
        SpaceHeating => ("SPACE_HEATING", "Space heating"),
        /// Hot water.
        HotWater => ("HOT_WATER", "Hot water"),
        /// Lighting.
        Lighting => ("LIGHTING", "Lighting"),
        /// Cooking.
        Cooking => ("COOKING", "Cooking"),
        /// Cold and wet appliances.
        ColdAndWetAppliances => ("COLD_AND_WET_APPLIANCES", "Cold and wet appliances"),
        /// Electronics and other.
        ElectronicsAndOther => ("ELECTRONICS_AND_OTHER", "Electronics and other"),
    }
}

labelled_enum! {
    /// Heat source of a hot-water system.
    pub enum HotWaterSource: "hot water source" {
        /// Air source heat pump.
        AirSourceHeatPump => ("AIR_SOURCE_HEAT_PUMP", "air source heat pump"),
        /// Boiler.
        Boiler => ("BOILER", "boiler"),
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
        /// Room heaters.
        RoomHeaters => ("ROOM_HEATERS", "room heaters"),
        /// Heat pump of unknown type. The label keeps the register's spelling.
        UnknownHeatPump => ("UNKNOWN_HEAT_PUMP", "unkown heat pump"),
        /// Water source heat pump.
        WaterSourceHeatPump => ("WATER_SOURCE_HEAT_PUMP", "water source heat pump"),
        /// Immersion heater.
        Immersion => ("IMMERSION", "immersion"),
        /// Instantaneous heater at the point of use.
        InstantaneousAtPointOfUse => (
            "INSTANTANEOUS_AT_POINT_OF_USE",
            "instantaneous at point of use"
        ),
        /// Several small tank heaters.
        Multipoint => ("MULTIPOINT", "multipoint"),
        /// Range cooker.
        RangeCooker => ("RANGE_COOKER", "range cooker"),
        /// Supplied by the dwelling's main heating system.
        FromMainSystem => ("FROM_MAIN_SYSTEM", "from main system"),
        /// Supplied by the dwelling's secondary heating system.
        FromSecondarySystem => ("FROM_SECONDARY_SYSTEM", "from secondary system"),
        /// Circulator built into a warm air system.
        CirculatorWarmAir => (
            "CIRCULATOR_WARM_AIR",
            "from a circulator built into a warm air system"
        ),
    }
}

impl HotWaterSource {
    /// The heating-system list this source points at, if it is a reference.
    pub fn referenced_list(&self) -> Option<HeatingSystemList> {
        match self {
            Self::FromMainSystem => Some(HeatingSystemList::Main),
            Self::FromSecondarySystem => Some(HeatingSystemList::Secondary),
            _ => None,
        }
    }

    /// Whether the source refers to a heating system rather than naming an
    /// appliance.
    pub fn is_reference(&self) -> bool {
        self.referenced_list().is_some()
    }
}

labelled_enum! {
    /// Storey classification used for per-level fabric.
    pub enum Level: "level" {
        /// Ground floor.
        GroundFloor => ("GROUND_FLOOR", "GROUND_FLOOR"),
        /// Intermediate floor.
        MidFloor => ("MID_FLOOR", "MID_FLOOR"),
        /// Roof.
        Roof => ("ROOF", "ROOF"),
        /// Room in the roof.
        RoofRoom => ("ROOF_ROOM", "ROOF_ROOM"),
        /// Ground floor under an exterior roof.
        GroundFloorExteriorRoof => ("GROUND_FLOOR_EXTERIOR_ROOF", "GROUND_FLOOR_EXTERIOR_ROOF"),
        /// Lowest floor under an exterior roof.
        LowestFloorExteriorRoof => ("LOWEST_FLOOR_EXTERIOR_ROOF", "LOWEST_FLOOR_EXTERIOR_ROOF"),
        /// Lowest floor under an interior roof.
        LowestFloorInteriorRoof => ("LOWEST_FLOOR_INTERIOR_ROOF", "LOWEST_FLOOR_INTERIOR_ROOF"),
    }
}

labelled_enum! {
    /// Sun-tracking mode of a photovoltaic array.
    pub enum SolarPvTracking: "solar pv tracking" {
        /// Single horizontal axis.
        Horizontal => ("HORIZONTAL", "horizontal"),
        /// Dual axis.
        DualAxis => ("DUAL_AXIS", "dual"),
    }
}

impl SolarPvTracking {
    /// Numeric tracking code used by PV yield models.
    pub fn model_code(&self) -> u8 {
        match self {
            Self::Horizontal => 1,
            Self::DualAxis => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fuel_groups_are_disjoint() {
        for source in EnergySource::ALL {
            let groups = [source.is_gas(), source.is_oil(), source.is_solid()];
            assert!(
                groups.iter().filter(|g| **g).count() <= 1,
                "{source} is in more than one fuel group"
            );
        }
    }

    #[test]
    fn electric_is_in_no_fuel_group() {
        let e = EnergySource::Electric;
        assert!(!e.is_gas() && !e.is_oil() && !e.is_solid());
        assert!(EnergySource::MainsGas.is_gas());
        assert!(EnergySource::RapeseedOil.is_oil());
        assert!(EnergySource::WoodLogs.is_solid());
        assert!(!EnergySource::Anthracite.is_solid());
    }

    #[test]
    fn only_from_system_sources_are_references() {
        let refs: Vec<_> = HotWaterSource::ALL
            .iter()
            .filter(|s| s.is_reference())
            .collect();
        assert_eq!(
            refs,
            vec![
                &HotWaterSource::FromMainSystem,
                &HotWaterSource::FromSecondarySystem
            ]
        );
        assert_eq!(
            HotWaterSource::FromSecondarySystem.referenced_list(),
            Some(HeatingSystemList::Secondary)
        );
    }

    #[test]
    fn end_use_labels_match_wire_format() {
        let json = serde_json::to_string(&DomesticEnergyEndUse::HotWater).unwrap();
        assert_eq!(json, "\"Hot water\"");
    }
}
