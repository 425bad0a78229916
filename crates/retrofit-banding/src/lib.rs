//! # retrofit-banding — Regulatory Banding Tables
//!
//! Static lookup tables used by national energy-performance assessments:
//!
//! - **Age bands** (`age.rs`): `(year, jurisdiction) → AgeBand`. Thirteen
//!   ordered bands A to M, each with an inclusive year span per
//!   jurisdiction, or no span where the band does not apply.
//!
//! - **Rating bands** (`rating.rs`): `score → EfficiencyRatingBand`. Seven
//!   contiguous score ranges A to G; scores above 100 count as 100.
//!
//! - **Table audit** (`audit.rs`): checks that each jurisdiction's spans
//!   neither overlap nor leave gaps, and that the score ranges partition
//!   0 to 100.
//!
//! ## Failure Semantics
//!
//! Every legitimate input classifies. `BandNotFound` and
//! `ScoreOutOfRange` therefore signal a defect in the tables and callers
//! should abort the operation. `InvalidRange` is the only error caused by
//! caller input.
//!
//! All tables are `const` data: no initialization, no locking, safe to
//! share across any number of threads.

pub mod age;
pub mod audit;
pub mod rating;

pub use age::{classify_age, classify_age_from_range, AgeBand, YearSpan};
pub use audit::{check_age_table, check_rating_table, TableDefect};
pub use rating::{classify_score, EfficiencyRatingBand, MAX_SCORE};
