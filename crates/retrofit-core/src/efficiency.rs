//! # Appliance Efficiency
//!
//! An appliance's efficiency for one end use is one of three shapes:
//!
//! - a single flat ratio, `2.8`;
//! - a summer/winter pair, `[0.82, 0.88]`;
//! - twelve monthly ratios keyed by month number, `{"1": 2.1, ..., "12": 2.3}`.
//!
//! Every ratio must be strictly positive and the monthly form must cover
//! exactly months 1 to 12. Malformed shapes are rejected while
//! deserializing, so an [`Efficiency`] value is always well-formed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A calendar month number, 1 to 12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthNumber(u8);

impl MonthNumber {
    /// Validate a month number.
    pub fn new(month: u8) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self(month))
    }

    /// The month as an integer.
    pub fn get(self) -> u8 {
        self.0
    }

    /// January to December.
    pub fn all() -> impl Iterator<Item = MonthNumber> {
        (1..=12).map(MonthNumber)
    }
}

/// Why an efficiency value was rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EfficiencyError {
    /// A ratio was zero or negative.
    #[error("efficiency values must be greater than zero, got: {value}")]
    NotPositive {
        /// The rejected ratio.
        value: f64,
    },

    /// The monthly form did not have exactly twelve entries.
    #[error("expected exactly 12 monthly efficiencies, got: {count}")]
    WrongMonthCount {
        /// Number of entries supplied.
        count: usize,
    },

    /// The monthly form used a key outside 1 to 12.
    #[error("month {month:?} is not a valid month number")]
    InvalidMonth {
        /// The offending key.
        month: String,
    },
}

/// Efficiency of an appliance for one end use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawEfficiency", into = "RawEfficiency")]
pub enum Efficiency {
    /// One ratio for the whole year.
    Flat(f64),
    /// Separate summer and winter ratios.
    SummerWinter {
        /// Summer ratio.
        summer: f64,
        /// Winter ratio.
        winter: f64,
    },
    /// One ratio per calendar month.
    Monthly(BTreeMap<MonthNumber, f64>),
}

impl Efficiency {
    /// A validated flat efficiency.
    pub fn flat(value: f64) -> Result<Self, EfficiencyError> {
        positive(value).map(Self::Flat)
    }

    /// A validated summer/winter efficiency.
    pub fn summer_winter(summer: f64, winter: f64) -> Result<Self, EfficiencyError> {
        Ok(Self::SummerWinter {
            summer: positive(summer)?,
            winter: positive(winter)?,
        })
    }

    /// A validated monthly efficiency.
    pub fn monthly(values: BTreeMap<u8, f64>) -> Result<Self, EfficiencyError> {
        if values.len() != 12 {
            return Err(EfficiencyError::WrongMonthCount {
                count: values.len(),
            });
        }
        let mut months = BTreeMap::new();
        for (month, value) in values {
            let month = MonthNumber::new(month).ok_or(EfficiencyError::InvalidMonth {
                month: month.to_string(),
            })?;
            months.insert(month, positive(value)?);
        }
        Ok(Self::Monthly(months))
    }

    /// Ratio in effect for `month`.
    ///
    /// Summer covers April to September.
    pub fn for_month(&self, month: MonthNumber) -> f64 {
        match self {
            Self::Flat(value) => *value,
            Self::SummerWinter { summer, winter } => {
                if (4..=9).contains(&month.get()) {
                    *summer
                } else {
                    *winter
                }
            }
            // Construction guarantees all twelve months are present.
            Self::Monthly(values) => values.get(&month).copied().unwrap_or(f64::NAN),
        }
    }
}

fn positive(value: f64) -> Result<f64, EfficiencyError> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(EfficiencyError::NotPositive { value })
    }
}

// Untagged content is buffered, so JSON object keys arrive as strings.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawEfficiency {
    Flat(f64),
    SummerWinter(f64, f64),
    Monthly(BTreeMap<String, f64>),
}

impl TryFrom<RawEfficiency> for Efficiency {
    type Error = EfficiencyError;

    fn try_from(raw: RawEfficiency) -> Result<Self, Self::Error> {
        match raw {
            RawEfficiency::Flat(value) => Self::flat(value),
            RawEfficiency::SummerWinter(summer, winter) => Self::summer_winter(summer, winter),
            RawEfficiency::Monthly(values) => {
                let mut months = BTreeMap::new();
                for (key, value) in values {
                    let month = key
                        .trim()
                        .parse::<u8>()
                        .map_err(|_| EfficiencyError::InvalidMonth { month: key.clone() })?;
                    months.insert(month, value);
                }
                Self::monthly(months)
            }
        }
    }
}

impl From<Efficiency> for RawEfficiency {
    fn from(value: Efficiency) -> Self {
        match value {
            Efficiency::Flat(v) => RawEfficiency::Flat(v),
            Efficiency::SummerWinter { summer, winter } => {
                RawEfficiency::SummerWinter(summer, winter)
            }
            Efficiency::Monthly(values) => {
                let values = values
                    .into_iter()
                    .map(|(m, v)| (m.get().to_string(), v))
                    .collect();
                RawEfficiency::Monthly(values)
            }
        }
    }
}
