//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used throughout the retrofit engine. All errors
//! use `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Classification errors separate table defects (`BandNotFound`,
//!   `ScoreOutOfRange`) from caller errors (`InvalidRange`).
//! - Validation errors carry the exact field path that failed, e.g.
//!   `main_heating_systems[0].emitters`, plus a human-readable reason.
//! - Unmapped legacy codes are not errors and have no variant here.

use thiserror::Error;

use crate::jurisdiction::Jurisdiction;

/// Top-level error type for the retrofit engine.
#[derive(Error, Debug)]
pub enum RetrofitError {
    /// Band or score classification failed.
    #[error("classification error: {0}")]
    Classification(#[from] ClassificationError),

    /// A dwelling record violates a completeness or consistency invariant.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A string did not name any value of a closed vocabulary.
    #[error("unknown {kind} value: {value:?}")]
    UnknownValue {
        /// Vocabulary name.
        kind: &'static str,
        /// The rejected input.
        value: String,
    },

    /// An identifier failed its format check.
    #[error("invalid {kind}: {reason}")]
    InvalidIdentifier {
        /// Identifier name.
        kind: &'static str,
        /// Why the identifier was rejected.
        reason: String,
    },

    /// The requested record does not exist.
    #[error("record not found: {key}")]
    NotFound {
        /// Lookup key of the missing record.
        key: String,
    },

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used across the workspace.
pub type RetrofitResult<T> = Result<T, RetrofitError>;

/// Error raised by the banding tables.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassificationError {
    /// No age band covers the year. Indicates a gap in the age-band table.
    #[error("no age band contains year {year} for {jurisdiction}")]
    BandNotFound {
        /// The year that failed to classify.
        year: i32,
        /// Jurisdiction whose column was scanned.
        jurisdiction: Jurisdiction,
    },

    /// No rating band covers the score. Indicates a gap in the rating table.
    #[error("no efficiency rating band contains score {score}")]
    ScoreOutOfRange {
        /// The score that failed to classify.
        score: u32,
    },

    /// The caller supplied a year range that cannot be classified.
    #[error("invalid year range: {reason}")]
    InvalidRange {
        /// Why the range is unusable.
        reason: &'static str,
    },
}

impl ClassificationError {
    /// Whether the error signals a defect in a static table rather than
    /// bad caller input.
    pub fn is_table_defect(&self) -> bool {
        match self {
            Self::BandNotFound { .. } | Self::ScoreOutOfRange { .. } => true,
            Self::InvalidRange { .. } => false,
        }
    }
}

/// Which heating-system list of a dwelling an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeatingSystemList {
    /// `main_heating_systems`.
    Main,
    /// `secondary_heating_systems`.
    Secondary,
}

impl HeatingSystemList {
    /// Field name of the list on a dwelling record.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Main => "main_heating_systems",
            Self::Secondary => "secondary_heating_systems",
        }
    }
}

impl std::fmt::Display for HeatingSystemList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dwelling record failed promotion or a field constraint.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A field mandatory on a complete record is absent.
    #[error("{field} must be defined on a complete dwelling record")]
    MissingField {
        /// Name of the absent field.
        field: &'static str,
    },

    /// Glazing is present but its glazing-to-wall ratio is not.
    #[error("glazing.glazing_ratio must be defined on a complete dwelling record")]
    IncompleteGlazing,

    /// A heating system lacks its source, energy source, or space-heating
    /// efficiency.
    #[error("{list}[{index}].{field}: {reason}")]
    IncompleteHeatingSystem {
        /// List containing the system.
        list: HeatingSystemList,
        /// Position within the list.
        index: usize,
        /// The incomplete attribute.
        field: &'static str,
        /// Human-readable reason.
        reason: String,
    },

    /// A wet heating system declares no emitters.
    #[error("{list}[{index}].emitters should be defined for a wet heating system")]
    MissingEmitters {
        /// List containing the system.
        list: HeatingSystemList,
        /// Position within the list.
        index: usize,
    },

    /// A standalone hot-water system lacks its energy source or hot-water
    /// efficiency.
    #[error("hot_water_systems[{index}].{field}: {reason}")]
    IncompleteHotWaterSystem {
        /// Position within `hot_water_systems`.
        index: usize,
        /// The incomplete attribute.
        field: &'static str,
        /// Human-readable reason.
        reason: String,
    },

    /// A hot-water system references a heating system that cannot supply a
    /// hot-water efficiency.
    #[error("hot_water_systems[{index}].efficiency: {reason}")]
    UnresolvedHotWaterEfficiency {
        /// Position within `hot_water_systems`.
        index: usize,
        /// Human-readable reason.
        reason: String,
    },

    /// A field value lies outside its permitted range.
    #[error("{field}: {reason}")]
    ConstraintViolation {
        /// Path of the offending field.
        field: String,
        /// Human-readable reason.
        reason: String,
    },
}

impl ValidationError {
    /// Build a constraint violation for `field`.
    pub fn constraint(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ConstraintViolation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Dotted/indexed path of the field that failed.
    pub fn field_path(&self) -> String {
        match self {
            Self::MissingField { field } => (*field).to_string(),
            Self::IncompleteGlazing => "glazing.glazing_ratio".to_string(),
            Self::IncompleteHeatingSystem {
                list, index, field, ..
            } => format!("{list}[{index}].{field}"),
            Self::MissingEmitters { list, index } => format!("{list}[{index}].emitters"),
            Self::IncompleteHotWaterSystem { index, field, .. } => {
                format!("hot_water_systems[{index}].{field}")
            }
            Self::UnresolvedHotWaterEfficiency { index, .. } => {
                format!("hot_water_systems[{index}].efficiency")
            }
            Self::ConstraintViolation { field, .. } => field.clone(),
        }
    }

    /// Stable snake_case tag for the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "missing_field",
            Self::IncompleteGlazing => "incomplete_glazing",
            Self::IncompleteHeatingSystem { .. } => "incomplete_heating_system",
            Self::MissingEmitters { .. } => "missing_emitters",
            Self::IncompleteHotWaterSystem { .. } => "incomplete_hot_water_system",
            Self::UnresolvedHotWaterEfficiency { .. } => "unresolved_hot_water_efficiency",
            Self::ConstraintViolation { .. } => "constraint_violation",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_path_indexes_heating_list() {
        let err = ValidationError::MissingEmitters {
            list: HeatingSystemList::Secondary,
            index: 2,
        };
        assert_eq!(err.field_path(), "secondary_heating_systems[2].emitters");
        assert_eq!(err.kind(), "missing_emitters");
    }

    #[test]
    fn display_names_field_and_reason() {
        let err = ValidationError::IncompleteHotWaterSystem {
            index: 0,
            field: "energy_source",
            reason: "must be defined unless source is from main/secondary system".into(),
        };
        assert_eq!(
            err.to_string(),
            "hot_water_systems[0].energy_source: must be defined unless source is from main/secondary system"
        );
    }

    #[test]
    fn table_defects_are_distinguished() {
        assert!(ClassificationError::ScoreOutOfRange { score: 5 }.is_table_defect());
        assert!(ClassificationError::BandNotFound {
            year: 1900,
            jurisdiction: Jurisdiction::Scotland,
        }
        .is_table_defect());
        assert!(!ClassificationError::InvalidRange { reason: "empty" }.is_table_defect());
    }

    #[test]
    fn validation_error_wraps_into_top_level() {
        let err: RetrofitError = ValidationError::IncompleteGlazing.into();
        assert!(matches!(err, RetrofitError::Validation(_)));
        assert!(err.to_string().starts_with("validation error:"));
    }
}
