//! # retrofit-dwelling — Dwelling Records and Promotion
//!
//! Models a dwelling as surveyed: fabric, heating and hot-water systems,
//! photovoltaic arrays, and the descriptive attributes of an energy
//! assessment. Records come in two shapes:
//!
//! - [`DwellingPartial`] accepts whatever subset of data is known and
//!   checks only per-field ranges.
//! - [`Dwelling`] is the complete record a building-physics simulation
//!   needs. It is produced only by [`promote`], which checks completeness
//!   and the cross-field rules on heating systems and hot-water supply.
//!
//! Promotion reports the first failure as a
//! [`ValidationError`](retrofit_core::ValidationError) naming the exact
//! field path, e.g. `main_heating_systems[0].emitters`.

#![deny(missing_docs)]

mod constraints;
pub mod fabric;
pub mod heating;
pub mod promote;
pub mod record;
pub mod solar;

pub use fabric::{Door, Fabric, Floor, Glazing, Location, Roof, UkAddress, Wall};
pub use heating::{
    BoilerProperties, HeatPumpProperties, HeatingSourceProperties, HeatingSystem,
    HotWaterSourceProperties, HotWaterSystem, HotWaterTank, ImmersionHeaterProperties,
    RangeCookerProperties,
};
pub use promote::promote;
pub use record::{Dwelling, DwellingDetails, DwellingPartial, EfficiencyOrigin, HotWaterEfficiency};
pub use solar::SolarPvArray;
