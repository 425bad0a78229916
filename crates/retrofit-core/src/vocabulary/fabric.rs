//! Insulation and window vocabularies used by fabric records and
//! improvement specifications.

use crate::labelled_enum;

labelled_enum! {
    /// Insulation materials (SAP 10 Table 14).
    pub enum InsulationMaterial: "insulation material" {
        /// Mineral wool.
        MineralWool => ("MINERAL_WOOL", "mineral wool"),
        /// Rock wool.
        RockWool => ("ROCK_WOOL", "rock wool"),
        /// Fibre glass.
        FibreGlass => ("FIBRE_GLASS", "fibre glass"),
        /// Expanded polystyrene.
        Eps => ("EPS", "EPS (expanded polystyrene)"),
        /// Extruded polystyrene.
        Xps => ("XPS", "XPS (extruded polystyrene)"),
        /// Polyurethane foam. The label keeps the register's spelling.
        Pur => ("PUR", "PUR (polyurethene foam)"),
        /// Polyisocyanurate.
        Pir => ("PIR", "PIR (polyisocyanurate)"),
        /// Phenolic foam.
        PhenolicFoam => ("PHENOLIC_FOAM", "phenolic foam"),
    }
}

labelled_enum! {
    /// Position of floor insulation.
    pub enum FloorInsulationPosition: "floor insulation position" {
        /// Above the slab.
        AboveSlab => ("ABOVE_SLAB", "Above Slab"),
        /// At the joists.
        AtJoists => ("AT_JOISTS", "At Joists"),
        /// Between the joists.
        BetweenJoists => ("BETWEEN_JOISTS", "Between Joists"),
    }
}

labelled_enum! {
    /// Position of roof insulation.
    pub enum RoofInsulationPosition: "roof insulation position" {
        /// Between joists, or unknown.
        BetweenJoists => ("BETWEEN_JOISTS", "Unknown, Between Joists"),
        /// At the rafters.
        AtRafters => ("AT_RAFTERS", "At Rafters"),
        /// Flat roof insulation.
        FlatRoof => ("FLAT_ROOF", "Flat Roof Insulation"),
    }
}

labelled_enum! {
    /// Glazing type of a window.
    pub enum WindowGlazingType: "window glazing type" {
        /// Double glazing.
        DoubleGlazing => ("DOUBLE_GLAZING", "double glazing"),
        /// Triple glazing.
        TripleGlazing => ("TRIPLE_GLAZING", "triple glazing"),
        /// Secondary glazing.
        SecondaryGlazing => ("SECONDARY_GLAZING", "secondary glazing"),
        /// Single glazing.
        SingleGlazing => ("SINGLE_GLAZING", "single glazing"),
        /// Not recorded.
        NotDefined => ("NOT_DEFINED", "not defined"),
    }
}

labelled_enum! {
    /// Window frame material.
    pub enum WindowConstruction: "window construction" {
        /// uPVC frame.
        Pvc => ("PVC", "PVC"),
        /// Timber frame.
        Wood => ("WOOD", "Wood"),
        /// Metal frame.
        Metal => ("METAL", "Metal"),
    }
}

labelled_enum! {
    /// Gap between panes, in millimetres.
    pub enum WindowGlazingGap: "window glazing gap" {
        /// 6mm.
        Small => ("SMALL", "6"),
        /// 12mm.
        Medium => ("MEDIUM", "12"),
        /// 16mm or more.
        Large => ("LARGE", "16 or more"),
    }
}
