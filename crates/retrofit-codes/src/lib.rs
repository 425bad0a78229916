//! # retrofit-codes — Code Translation Layer
//!
//! Raw assessment exports carry compact integer codes. This crate maps
//! them to the closed vocabularies of `retrofit-core`:
//!
//! - [`CodeTable`]: one exported field's codes, with lenient decoding
//!   (`"ND"` and field sentinels are absent, suffixed legacy aliases fall
//!   back to their base name, anything else is unmapped) and
//!   [`CodeTable::encode`] for the reverse direction.
//! - [`tables`]: the built-in tables.
//! - [`decode_country`] / [`encode_country`]: `EAW`, `SCT`, `NIR`.
//! - [`translate_assessment`]: a whole raw assessment into a
//!   [`DwellingPartial`](retrofit_dwelling::DwellingPartial).
//!
//! Unmapped codes are absent data. They are logged at `warn` and never
//! surface as errors.

pub mod assessment;
pub mod country;
pub mod table;
pub mod tables;

pub use assessment::{translate_assessment, RawAssessment, Translation, UnmappedCode};
pub use country::{decode_country, encode_country};
pub use table::{CodeTable, Decoded, NOT_DETERMINED};
