//! # Efficiency Rating Bands
//!
//! SAP 10.2 Table 13. Seven contiguous score ranges; A is nominally open
//! above but scores are capped at [`MAX_SCORE`] before lookup.

use std::ops::RangeInclusive;

use retrofit_core::{labelled_enum, ClassificationError};

/// Highest score the table distinguishes. Larger scores are treated as this.
pub const MAX_SCORE: u32 = 100;

labelled_enum! {
    /// Energy-efficiency rating band.
    pub enum EfficiencyRatingBand: "efficiency rating band" {
        /// 92 and above.
        A => ("A", "A"),
        /// 81 to 91.
        B => ("B", "B"),
        /// 69 to 80.
        C => ("C", "C"),
        /// 55 to 68.
        D => ("D", "D"),
        /// 39 to 54.
        E => ("E", "E"),
        /// 21 to 38.
        F => ("F", "F"),
        /// 0 to 20.
        G => ("G", "G"),
    }
}

const RATING_TABLE: [(EfficiencyRatingBand, RangeInclusive<u32>); 7] = [
    (EfficiencyRatingBand::A, 92..=MAX_SCORE),
    (EfficiencyRatingBand::B, 81..=91),
    (EfficiencyRatingBand::C, 69..=80),
    (EfficiencyRatingBand::D, 55..=68),
    (EfficiencyRatingBand::E, 39..=54),
    (EfficiencyRatingBand::F, 21..=38),
    (EfficiencyRatingBand::G, 0..=20),
];

impl EfficiencyRatingBand {
    /// Inclusive score range of the band.
    pub fn score_range(&self) -> RangeInclusive<u32> {
        RATING_TABLE
            .iter()
            .find(|(band, _)| band == self)
            .map(|(_, range)| range.clone())
            .unwrap_or(1..=0)
    }
}

/// Classify an assessment score. Scores above [`MAX_SCORE`] are capped.
///
/// Fails with `ScoreOutOfRange` only if the table has a gap.
pub fn classify_score(score: u32) -> Result<EfficiencyRatingBand, ClassificationError> {
    let capped = score.min(MAX_SCORE);
    RATING_TABLE
        .iter()
        .find(|(_, range)| range.contains(&capped))
        .map(|(band, _)| *band)
        .ok_or(ClassificationError::ScoreOutOfRange { score })
}

pub(crate) fn table() -> &'static [(EfficiencyRatingBand, RangeInclusive<u32>)] {
    &RATING_TABLE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_edges() {
        let cases = [
            (0, EfficiencyRatingBand::G),
            (20, EfficiencyRatingBand::G),
            (21, EfficiencyRatingBand::F),
            (38, EfficiencyRatingBand::F),
            (39, EfficiencyRatingBand::E),
            (55, EfficiencyRatingBand::D),
            (68, EfficiencyRatingBand::D),
            (69, EfficiencyRatingBand::C),
            (81, EfficiencyRatingBand::B),
            (91, EfficiencyRatingBand::B),
            (92, EfficiencyRatingBand::A),
            (100, EfficiencyRatingBand::A),
        ];
        for (score, band) in cases {
            assert_eq!(classify_score(score).unwrap(), band, "score {score}");
        }
    }

    #[test]
    fn scores_above_100_are_capped_into_a() {
        assert_eq!(classify_score(101).unwrap(), EfficiencyRatingBand::A);
        assert_eq!(classify_score(u32::MAX).unwrap(), EfficiencyRatingBand::A);
    }

    #[test]
    fn score_range_matches_table() {
        assert_eq!(EfficiencyRatingBand::C.score_range(), 69..=80);
        assert_eq!(EfficiencyRatingBand::A.score_range(), 92..=100);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn every_score_has_exactly_one_band(score in 0u32..=MAX_SCORE) {
            let band = classify_score(score).unwrap();
            prop_assert!(band.score_range().contains(&score));
            let matching = EfficiencyRatingBand::ALL
                .iter()
                .filter(|b| b.score_range().contains(&score))
                .count();
            prop_assert_eq!(matching, 1);
        }
    }
}
