//! # Property Identifiers
//!
//! Newtype wrapper for the Unique Property Reference Number, the key under
//! which dwelling records are stored and requested. A `Uprn` can only be
//! obtained through validation, so any code holding one may use it as a
//! storage key without re-checking.

use serde::{Deserialize, Serialize};

use crate::error::RetrofitError;

/// Unique Property Reference Number: 1 to 12 ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Uprn(String);

impl Uprn {
    /// Maximum number of digits in a UPRN.
    pub const MAX_DIGITS: usize = 12;

    /// Validate and wrap a UPRN.
    pub fn new(value: impl Into<String>) -> Result<Self, RetrofitError> {
        let value = value.into();
        if value.is_empty() || value.len() > Self::MAX_DIGITS {
            return Err(RetrofitError::InvalidIdentifier {
                kind: "UPRN",
                reason: format!(
                    "expected 1 to {} digits, got {} characters",
                    Self::MAX_DIGITS,
                    value.len()
                ),
            });
        }
        if !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RetrofitError::InvalidIdentifier {
                kind: "UPRN",
                reason: format!("{value:?} contains non-digit characters"),
            });
        }
        Ok(Self(value))
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Uprn {
    type Error = RetrofitError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Uprn> for String {
    fn from(value: Uprn) -> Self {
        value.0
    }
}

impl std::str::FromStr for Uprn {
    type Err = RetrofitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Display for Uprn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_digit_strings() {
        let uprn = Uprn::new("100023336956").unwrap();
        assert_eq!(uprn.as_str(), "100023336956");
        assert_eq!("7".parse::<Uprn>().unwrap().to_string(), "7");
    }

    #[test]
    fn rejects_malformed() {
        for bad in ["", "1000233369561", "12a4", " 123", "-1"] {
            assert!(
                matches!(
                    Uprn::new(bad),
                    Err(RetrofitError::InvalidIdentifier { kind: "UPRN", .. })
                ),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn serde_validates() {
        let uprn: Uprn = serde_json::from_str("\"123456\"").unwrap();
        assert_eq!(serde_json::to_string(&uprn).unwrap(), "\"123456\"");
        assert!(serde_json::from_str::<Uprn>("\"abc\"").is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn digit_strings_round_trip(s in "[0-9]{1,12}") {
            let uprn = Uprn::new(s.clone()).unwrap();
            prop_assert_eq!(uprn.as_str(), s.as_str());
        }

        #[test]
        fn non_digits_rejected(s in "[0-9]{0,5}[a-zA-Z ][0-9]{0,5}") {
            prop_assert!(Uprn::new(s).is_err());
        }
    }
}
