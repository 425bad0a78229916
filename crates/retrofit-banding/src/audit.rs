//! # Table Audit
//!
//! Structural checks over the static banding tables. For every
//! jurisdiction the defined age spans, taken in band order, must start open
//! below, end open above, and abut exactly. The rating ranges must
//! partition `0..=MAX_SCORE`.
//!
//! Both checks return every defect found rather than stopping at the
//! first, so a single run reports the whole state of a table.

use thiserror::Error;

use retrofit_core::Jurisdiction;

use crate::age::{self, AgeBand, YearSpan};
use crate::rating::{self, EfficiencyRatingBand, MAX_SCORE};

/// A structural defect in a banding table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableDefect {
    /// No band is defined at all for a jurisdiction.
    #[error("{jurisdiction}: no age bands defined")]
    NoBands {
        /// Affected jurisdiction.
        jurisdiction: Jurisdiction,
    },

    /// A span's first year is after its last.
    #[error("{jurisdiction}: band {band} span {span} is inverted")]
    InvertedSpan {
        /// Affected jurisdiction.
        jurisdiction: Jurisdiction,
        /// Band holding the span.
        band: AgeBand,
        /// The span.
        span: YearSpan,
    },

    /// The earliest band does not extend to the distant past.
    #[error("{jurisdiction}: earliest band {band} is not open below")]
    NotOpenBelow {
        /// Affected jurisdiction.
        jurisdiction: Jurisdiction,
        /// The earliest defined band.
        band: AgeBand,
    },

    /// The latest band does not extend indefinitely.
    #[error("{jurisdiction}: latest band {band} is not open above")]
    NotOpenAbove {
        /// Affected jurisdiction.
        jurisdiction: Jurisdiction,
        /// The latest defined band.
        band: AgeBand,
    },

    /// Two consecutive bands share years.
    #[error("{jurisdiction}: bands {earlier} and {later} overlap")]
    AgeOverlap {
        /// Affected jurisdiction.
        jurisdiction: Jurisdiction,
        /// Earlier band.
        earlier: AgeBand,
        /// Later band.
        later: AgeBand,
    },

    /// Years between two consecutive bands are unassigned.
    #[error("{jurisdiction}: gap between bands {earlier} and {later}")]
    AgeGap {
        /// Affected jurisdiction.
        jurisdiction: Jurisdiction,
        /// Earlier band.
        earlier: AgeBand,
        /// Later band.
        later: AgeBand,
    },

    /// A score classifies into no band.
    #[error("score {score} is not covered by any rating band")]
    ScoreUncovered {
        /// The uncovered score.
        score: u32,
    },

    /// A score classifies into more than one band.
    #[error("score {score} is covered by {count} rating bands")]
    ScoreOverlap {
        /// The contested score.
        score: u32,
        /// Number of bands containing it.
        count: usize,
    },

    /// Bands are not listed from best to worst.
    #[error("rating band {band} is out of order")]
    RatingOrder {
        /// The misplaced band.
        band: EfficiencyRatingBand,
    },
}

/// Check every jurisdiction's column of the age-band table.
pub fn check_age_table() -> Vec<TableDefect> {
    let mut defects = Vec::new();
    for &jurisdiction in Jurisdiction::all() {
        check_age_column(jurisdiction, &mut defects);
    }
    defects
}

fn check_age_column(jurisdiction: Jurisdiction, defects: &mut Vec<TableDefect>) {
    let spans: Vec<(AgeBand, YearSpan)> = age::table()
        .iter()
        .filter_map(|(band, row)| age::column_span(row, jurisdiction).map(|s| (*band, s)))
        .collect();

    let (Some(&(first_band, first)), Some(&(last_band, last))) = (spans.first(), spans.last())
    else {
        defects.push(TableDefect::NoBands { jurisdiction });
        return;
    };

    if first.first.is_some() {
        defects.push(TableDefect::NotOpenBelow {
            jurisdiction,
            band: first_band,
        });
    }
    if last.last.is_some() {
        defects.push(TableDefect::NotOpenAbove {
            jurisdiction,
            band: last_band,
        });
    }

    for &(band, span) in &spans {
        if let (Some(a), Some(b)) = (span.first, span.last) {
            if a > b {
                defects.push(TableDefect::InvertedSpan {
                    jurisdiction,
                    band,
                    span,
                });
            }
        }
    }

    for pair in spans.windows(2) {
        let (earlier, prev) = pair[0];
        let (later, next) = pair[1];
        match (prev.last, next.first) {
            (Some(end), Some(start)) if start == end.saturating_add(1) => {}
            (Some(end), Some(start)) if start <= end => defects.push(TableDefect::AgeOverlap {
                jurisdiction,
                earlier,
                later,
            }),
            (Some(_), Some(_)) => defects.push(TableDefect::AgeGap {
                jurisdiction,
                earlier,
                later,
            }),
            // An open bound in the middle of the column always overlaps
            // its neighbour.
            _ => defects.push(TableDefect::AgeOverlap {
                jurisdiction,
                earlier,
                later,
            }),
        }
    }
}

/// Check that the rating bands partition `0..=MAX_SCORE` from A down to G.
pub fn check_rating_table() -> Vec<TableDefect> {
    let mut defects = Vec::new();
    let table = rating::table();

    for score in 0..=MAX_SCORE {
        let count = table.iter().filter(|(_, r)| r.contains(&score)).count();
        match count {
            1 => {}
            0 => defects.push(TableDefect::ScoreUncovered { score }),
            count => defects.push(TableDefect::ScoreOverlap { score, count }),
        }
    }

    for pair in table.windows(2) {
        if pair[0].1.start() <= pair[1].1.start() {
            defects.push(TableDefect::RatingOrder { band: pair[1].0 });
        }
    }
    defects
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_age_table_is_sound() {
        assert_eq!(check_age_table(), vec![]);
    }

    #[test]
    fn built_in_rating_table_is_sound() {
        assert_eq!(check_rating_table(), vec![]);
    }

    #[test]
    fn defect_messages_name_the_bands() {
        let defect = TableDefect::AgeGap {
            jurisdiction: Jurisdiction::Scotland,
            earlier: AgeBand::D,
            later: AgeBand::E,
        };
        assert_eq!(defect.to_string(), "Scotland: gap between bands D and E");
    }
}
