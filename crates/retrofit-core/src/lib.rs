//! # retrofit-core — Foundational Types for the Retrofit Engine
//!
//! This crate is the leaf of the workspace dependency graph. It defines the
//! closed vocabularies that describe a dwelling, the regulatory
//! jurisdictions used as banding keys, year ranges, efficiency values, and
//! the error taxonomy shared by every other crate.
//!
//! ## Key Design Principles
//!
//! 1. **Closed vocabularies.** Every enumerated survey value is a Rust enum
//!    declared through [`labelled_enum!`]. Each value carries its wire label
//!    (the string seen in JSON) and its symbolic name (the SCREAMING_SNAKE
//!    name used by legacy code tables). No bare strings cross a crate
//!    boundary.
//!
//! 2. **Behaviour on the value set.** Derived groupings such as
//!    [`EnergySource::is_gas`] or [`WallType::is_solid`] are methods with
//!    exhaustive matches, not lookups in side tables.
//!
//! 3. **One validation category.** Every invariant violation a dwelling can
//!    hit is a [`ValidationError`] variant with a field path and a reason,
//!    so the boundary layer can map the whole category to one status.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `retrofit-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

#![deny(missing_docs)]

pub mod efficiency;
pub mod error;
pub mod identity;
pub mod jurisdiction;
pub mod range;
pub mod vocabulary;

#[doc(hidden)]
pub use serde as __serde;

// Re-export primary types for ergonomic imports.
pub use efficiency::{Efficiency, EfficiencyError, MonthNumber};
pub use error::{
    ClassificationError, HeatingSystemList, RetrofitError, RetrofitResult, ValidationError,
};
pub use identity::Uprn;
pub use jurisdiction::Jurisdiction;
pub use range::YearRange;
pub use vocabulary::energy::{
    DomesticEnergyEndUse, EnergySource, HotWaterSource, Level, SolarPvTracking,
};
pub use vocabulary::epc::{
    BuiltForm, Country, EfficiencyRating, FlatLevel, FloorType, GlazedArea, HeatLossCorridor,
    HeatingControlMethod, HeatingSystemEmitter, HeatingSystemSource, ImprovementType, MeterType,
    MultipleGlazingType, Orientation, Overshading, PropertyType, RoofType, WallInsulationType,
    WallType,
};
pub use vocabulary::fabric::{
    FloorInsulationPosition, InsulationMaterial, RoofInsulationPosition, WindowConstruction,
    WindowGlazingGap, WindowGlazingType,
};
pub use vocabulary::Labelled;
