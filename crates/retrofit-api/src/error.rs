//! # API Error
//!
//! Maps engine errors to a status code and a structured error body:
//!
//! ```json
//! {"error": {"code": 400, "kind": "missing_emitters", "message": "...", "field": "main_heating_systems[0].emitters"}}
//! ```
//!
//! Validation failures and unusable input map to 400, a missing record to
//! 404, and anything else (I/O failures, table defects) to 500.

use serde_json::{json, Value};
use thiserror::Error;

use retrofit_core::{RetrofitError, ValidationError};

/// Status code of a rejected request.
pub const BAD_REQUEST: u16 = 400;
/// Status code of a missing record.
pub const NOT_FOUND: u16 = 404;
/// Status code of an internal failure.
pub const INTERNAL_SERVER_ERROR: u16 = 500;

/// Request-level error with a status code and a structured body.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request or the record it names is invalid.
    #[error("{message}")]
    BadRequest {
        /// Stable snake_case tag.
        kind: &'static str,
        /// Human-readable message.
        message: String,
        /// Field path at fault, when known.
        field: Option<String>,
    },

    /// The requested record does not exist.
    #[error("{message}")]
    NotFound {
        /// Store key that was looked up.
        key: String,
        /// Human-readable message.
        message: String,
    },

    /// The request could not be served.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// A 400 error without a field path.
    pub fn bad_request(kind: &'static str, message: impl Into<String>) -> Self {
        Self::BadRequest {
            kind,
            message: message.into(),
            field: None,
        }
    }

    /// A 400 error at `field`.
    pub fn invalid_field(
        kind: &'static str,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::BadRequest {
            kind,
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// A 404 error for `key` with `message` as the explanation.
    pub fn not_found(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NotFound {
            key: key.into(),
            message: message.into(),
        }
    }

    /// HTTP status code.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::BadRequest { .. } => BAD_REQUEST,
            Self::NotFound { .. } => NOT_FOUND,
            Self::Internal(_) => INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable snake_case tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::BadRequest { kind, .. } => *kind,
            Self::NotFound { .. } => "not_found",
            Self::Internal(_) => "internal",
        }
    }

    /// Field path at fault, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::BadRequest { field, .. } => field.as_deref(),
            Self::NotFound { .. } | Self::Internal(_) => None,
        }
    }

    /// The JSON error body.
    pub fn body(&self) -> Value {
        let mut error = json!({
            "code": self.status_code(),
            "kind": self.kind(),
            "message": self.to_string(),
        });
        if let Some(field) = self.field() {
            error["field"] = Value::from(field);
        }
        json!({ "error": error })
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::invalid_field(err.kind(), err.field_path(), err.to_string())
    }
}

impl From<RetrofitError> for ApiError {
    fn from(err: RetrofitError) -> Self {
        match err {
            RetrofitError::Validation(e) => e.into(),
            RetrofitError::NotFound { key } => {
                let message = format!("record not found: {key}");
                Self::NotFound { key, message }
            }
            RetrofitError::InvalidIdentifier { .. } => {
                Self::bad_request("invalid_identifier", err.to_string())
            }
            RetrofitError::UnknownValue { .. } => {
                Self::bad_request("unknown_value", err.to_string())
            }
            RetrofitError::Serialization(e) => Self::bad_request("invalid_record", e.to_string()),
            RetrofitError::Classification(e) if !e.is_table_defect() => {
                Self::bad_request("invalid_range", e.to_string())
            }
            RetrofitError::Classification(_) | RetrofitError::Io(_) => {
                tracing::error!(error = %err, "internal failure");
                Self::Internal(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use retrofit_core::{ClassificationError, HeatingSystemList, Jurisdiction};

    #[test]
    fn validation_maps_to_400_with_field() {
        let err: ApiError = ValidationError::MissingEmitters {
            list: HeatingSystemList::Main,
            index: 0,
        }
        .into();
        assert_eq!(err.status_code(), 400);
        let body = err.body();
        assert_eq!(body["error"]["code"], 400);
        assert_eq!(body["error"]["kind"], "missing_emitters");
        assert_eq!(body["error"]["field"], "main_heating_systems[0].emitters");
    }

    #[test]
    fn not_found_maps_to_404_without_field() {
        let err: ApiError = RetrofitError::NotFound {
            key: "home/1".into(),
        }
        .into();
        assert_eq!(err.status_code(), 404);
        let body = err.body();
        assert_eq!(body["error"]["kind"], "not_found");
        assert!(body["error"].get("field").is_none());
    }

    #[test]
    fn table_defects_are_internal() {
        let err: ApiError = RetrofitError::Classification(ClassificationError::BandNotFound {
            year: 1800,
            jurisdiction: Jurisdiction::Scotland,
        })
        .into();
        assert_eq!(err.status_code(), 500);

        let err: ApiError = RetrofitError::Classification(ClassificationError::InvalidRange {
            reason: "both bounds are absent",
        })
        .into();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.kind(), "invalid_range");
    }

    #[test]
    fn malformed_json_is_a_bad_request() {
        let parse_error = serde_json::from_str::<Value>("{").unwrap_err();
        let err: ApiError = RetrofitError::Serialization(parse_error).into();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.kind(), "invalid_record");
    }
}
