//! # Year Ranges
//!
//! Construction-year ranges as they arrive from upstream systems. Either
//! bound may be open. Three encodings are accepted:
//!
//! - `[lower, upper]` or `[lower, upper, bounds]`,
//! - `{"lower": .., "upper": .., "bounds": ..}` with `bounds` optional,
//! - `{"empty": true}` for an explicitly empty range.
//!
//! The `bounds` string is checked but not retained: classification treats
//! both bounds as inclusive years.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A construction-year range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YearRange {
    /// A range with optional bounds. `None` is open in that direction.
    Span {
        /// First year, if bounded below.
        lower: Option<i32>,
        /// Last year, if bounded above.
        upper: Option<i32>,
    },
    /// An explicitly empty range.
    Empty,
}

impl YearRange {
    /// A closed range.
    pub fn between(lower: i32, upper: i32) -> Self {
        Self::Span {
            lower: Some(lower),
            upper: Some(upper),
        }
    }

    /// Open below.
    pub fn until(upper: i32) -> Self {
        Self::Span {
            lower: None,
            upper: Some(upper),
        }
    }

    /// Open above.
    pub fn since(lower: i32) -> Self {
        Self::Span {
            lower: Some(lower),
            upper: None,
        }
    }

    /// Lower bound, if any.
    pub fn lower(&self) -> Option<i32> {
        match self {
            Self::Span { lower, .. } => *lower,
            Self::Empty => None,
        }
    }

    /// Upper bound, if any.
    pub fn upper(&self) -> Option<i32> {
        match self {
            Self::Span { upper, .. } => *upper,
            Self::Empty => None,
        }
    }

    /// Whether the range is explicitly empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

const BOUNDS: [&str; 4] = ["[)", "[]", "(]", "()"];

#[derive(Deserialize)]
#[serde(untagged)]
enum RawRange {
    Pair(Option<i32>, Option<i32>),
    Detailed(Option<i32>, Option<i32>, String),
    Empty {
        empty: bool,
    },
    Object {
        lower: Option<i32>,
        upper: Option<i32>,
        #[serde(default)]
        bounds: Option<String>,
    },
}

impl<'de> Deserialize<'de> for YearRange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        let (lower, upper, bounds) = match RawRange::deserialize(deserializer)? {
            RawRange::Empty { empty: true } => return Ok(Self::Empty),
            RawRange::Empty { empty: false } => (None, None, None),
            RawRange::Pair(lower, upper) => (lower, upper, None),
            RawRange::Detailed(lower, upper, bounds) => (lower, upper, Some(bounds)),
            RawRange::Object {
                lower,
                upper,
                bounds,
            } => (lower, upper, bounds),
        };
        if let Some(bounds) = bounds {
            if !BOUNDS.contains(&bounds.as_str()) {
                return Err(D::Error::custom(format!(
                    "invalid range bounds {bounds:?}, expected one of {BOUNDS:?}"
                )));
            }
        }
        if let (Some(l), Some(u)) = (lower, upper) {
            if l > u {
                return Err(D::Error::custom(format!(
                    "range lower bound {l} exceeds upper bound {u}"
                )));
            }
        }
        Ok(Self::Span { lower, upper })
    }
}

impl Serialize for YearRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        match self {
            Self::Span { lower, upper } => (lower, upper).serialize(serializer),
            Self::Empty => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("empty", &true)?;
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_every_encoding() {
        let cases = [
            (json!([1900, 1929]), YearRange::between(1900, 1929)),
            (json!([null, 2002]), YearRange::until(2002)),
            (json!([2023, null, "[)"]), YearRange::since(2023)),
            (
                json!({"lower": 1950, "upper": 1966, "bounds": "[]"}),
                YearRange::between(1950, 1966),
            ),
            (json!({"lower": null, "upper": 1899}), YearRange::until(1899)),
            (json!({"empty": true}), YearRange::Empty),
        ];
        for (input, expected) in cases {
            let parsed: YearRange = serde_json::from_value(input.clone()).unwrap();
            assert_eq!(parsed, expected, "input {input}");
        }
    }

    #[test]
    fn rejects_malformed() {
        for bad in [
            json!([1990, 1980]),
            json!([1990, 2000, "<>"]),
            json!([1990]),
            json!("1990-2000"),
        ] {
            assert!(
                serde_json::from_value::<YearRange>(bad.clone()).is_err(),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn serializes_compactly() {
        assert_eq!(
            serde_json::to_value(YearRange::until(2002)).unwrap(),
            json!([null, 2002])
        );
        assert_eq!(
            serde_json::to_value(YearRange::Empty).unwrap(),
            json!({"empty": true})
        );
    }

    #[test]
    fn accessors() {
        let r = YearRange::between(1930, 1949);
        assert_eq!((r.lower(), r.upper()), (Some(1930), Some(1949)));
        assert!(!r.is_empty());
        assert!(YearRange::Empty.is_empty());
        assert_eq!(YearRange::Empty.lower(), None);
    }
}
