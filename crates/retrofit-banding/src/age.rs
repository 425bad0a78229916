//! # Construction-Age Bands
//!
//! Each band maps, per jurisdiction, to an inclusive year span or to
//! nothing when the band is not used by that jurisdiction. Classification
//! scans bands in canonical order A to M and returns the first span
//! containing the year.

use serde::Serialize;

use retrofit_core::{labelled_enum, ClassificationError, Jurisdiction, YearRange};

labelled_enum! {
    /// Construction-age band used by national assessment schemes.
    pub enum AgeBand: "age band" {
        /// Oldest band.
        A => ("A", "A"),
        /// Band B.
        B => ("B", "B"),
        /// Band C.
        C => ("C", "C"),
        /// Band D.
        D => ("D", "D"),
        /// Band E.
        E => ("E", "E"),
        /// Band F.
        F => ("F", "F"),
        /// Band G.
        G => ("G", "G"),
        /// Band H.
        H => ("H", "H"),
        /// Band I.
        I => ("I", "I"),
        /// Band J.
        J => ("J", "J"),
        /// Band K.
        K => ("K", "K"),
        /// Band L.
        L => ("L", "L"),
        /// Newest band.
        M => ("M", "M"),
    }
}

/// Inclusive span of construction years. `None` is open in that direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct YearSpan {
    /// First year in the span.
    pub first: Option<i32>,
    /// Last year in the span.
    pub last: Option<i32>,
}

impl YearSpan {
    const fn new(first: Option<i32>, last: Option<i32>) -> Self {
        Self { first, last }
    }

    /// Whether `year` falls inside the span.
    pub fn contains(&self, year: i32) -> bool {
        self.first.map_or(true, |f| f <= year) && self.last.map_or(true, |l| year <= l)
    }
}

impl std::fmt::Display for YearSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.first, self.last) {
            (Some(a), Some(b)) => write!(f, "{a}-{b}"),
            (None, Some(b)) => write!(f, "before {}", b + 1),
            (Some(a), None) => write!(f, "{a} onwards"),
            (None, None) => f.write_str("any year"),
        }
    }
}

const fn span(first: i32, last: i32) -> Option<YearSpan> {
    Some(YearSpan::new(Some(first), Some(last)))
}

const fn until(last: i32) -> Option<YearSpan> {
    Some(YearSpan::new(None, Some(last)))
}

const fn since(first: i32) -> Option<YearSpan> {
    Some(YearSpan::new(Some(first), None))
}

/// Columns: England and Wales, Scotland, Northern Ireland, park home.
/// Same order as [`Jurisdiction::ALL`].
type Row = [Option<YearSpan>; 4];

const AGE_BAND_TABLE: [(AgeBand, Row); 13] = [
    (AgeBand::A, [until(1899), until(1918), until(1918), None]),
    (AgeBand::B, [span(1900, 1929), span(1919, 1929), span(1919, 1929), None]),
    (AgeBand::C, [span(1930, 1949), span(1930, 1949), span(1930, 1949), None]),
    (AgeBand::D, [span(1950, 1966), span(1950, 1964), span(1950, 1973), None]),
    (AgeBand::E, [span(1967, 1975), span(1965, 1975), span(1974, 1977), None]),
    (
        AgeBand::F,
        [span(1976, 1982), span(1976, 1983), span(1978, 1985), until(1982)],
    ),
    (
        AgeBand::G,
        [span(1983, 1990), span(1984, 1991), span(1986, 1991), span(1983, 1995)],
    ),
    (AgeBand::H, [span(1991, 1995), span(1992, 1998), span(1992, 1999), None]),
    (
        AgeBand::I,
        [span(1996, 2002), span(1999, 2002), span(2000, 2006), span(1996, 2005)],
    ),
    (AgeBand::J, [span(2003, 2006), span(2003, 2007), None, None]),
    (
        AgeBand::K,
        [span(2007, 2011), span(2008, 2011), span(2007, 2013), since(2006)],
    ),
    // Northern Ireland's L is published as "2014 onwards", which collides
    // with M; it is closed at 2022 here.
    (AgeBand::L, [span(2012, 2022), span(2012, 2023), span(2014, 2022), None]),
    (AgeBand::M, [since(2023), since(2024), since(2023), None]),
];

fn column(jurisdiction: Jurisdiction) -> usize {
    match jurisdiction {
        Jurisdiction::EnglandAndWales => 0,
        Jurisdiction::Scotland => 1,
        Jurisdiction::NorthernIreland => 2,
        Jurisdiction::ParkHome => 3,
    }
}

impl AgeBand {
    /// The band's year span in `jurisdiction`, or `None` where the band is
    /// not applicable.
    pub fn years(&self, jurisdiction: Jurisdiction) -> Option<YearSpan> {
        AGE_BAND_TABLE
            .iter()
            .find(|(band, _)| band == self)
            .and_then(|(_, row)| row[column(jurisdiction)])
    }

    /// Whether `year` lies in this band for `jurisdiction`.
    pub fn contains(&self, year: i32, jurisdiction: Jurisdiction) -> bool {
        self.years(jurisdiction)
            .map_or(false, |span| span.contains(year))
    }
}

/// Classify a construction year.
///
/// Fails with `BandNotFound` only if the table has a gap.
pub fn classify_age(year: i32, jurisdiction: Jurisdiction) -> Result<AgeBand, ClassificationError> {
    let col = column(jurisdiction);
    AGE_BAND_TABLE
        .iter()
        .find(|(_, row)| row[col].map_or(false, |span| span.contains(year)))
        .map(|(band, _)| *band)
        .ok_or(ClassificationError::BandNotFound { year, jurisdiction })
}

/// Classify a construction-year range.
///
/// Uses the lower bound when present. A range open below means "built
/// before the upper bound", so the year before the upper bound is used.
pub fn classify_age_from_range(
    range: &YearRange,
    jurisdiction: Jurisdiction,
) -> Result<AgeBand, ClassificationError> {
    match range {
        YearRange::Empty => Err(ClassificationError::InvalidRange {
            reason: "range is explicitly empty",
        }),
        YearRange::Span {
            lower: Some(lower), ..
        } => classify_age(*lower, jurisdiction),
        YearRange::Span {
            lower: None,
            upper: Some(upper),
        } => classify_age(upper.saturating_sub(1), jurisdiction),
        YearRange::Span {
            lower: None,
            upper: None,
        } => Err(ClassificationError::InvalidRange {
            reason: "both bounds are absent",
        }),
    }
}

pub(crate) fn table() -> &'static [(AgeBand, Row)] {
    &AGE_BAND_TABLE
}

pub(crate) fn column_span(row: &Row, jurisdiction: Jurisdiction) -> Option<YearSpan> {
    row[column(jurisdiction)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries_england_and_wales() {
        let ew = Jurisdiction::EnglandAndWales;
        assert_eq!(classify_age(1899, ew).unwrap(), AgeBand::A);
        assert_eq!(classify_age(1900, ew).unwrap(), AgeBand::B);
        assert_eq!(classify_age(1966, ew).unwrap(), AgeBand::D);
        assert_eq!(classify_age(1967, ew).unwrap(), AgeBand::E);
        assert_eq!(classify_age(2022, ew).unwrap(), AgeBand::L);
        assert_eq!(classify_age(2023, ew).unwrap(), AgeBand::M);
        assert_eq!(classify_age(i32::MIN, ew).unwrap(), AgeBand::A);
        assert_eq!(classify_age(i32::MAX, ew).unwrap(), AgeBand::M);
    }

    #[test]
    fn jurisdictions_differ() {
        assert_eq!(classify_age(1910, Jurisdiction::EnglandAndWales).unwrap(), AgeBand::B);
        assert_eq!(classify_age(1910, Jurisdiction::Scotland).unwrap(), AgeBand::A);
        assert_eq!(classify_age(2005, Jurisdiction::NorthernIreland).unwrap(), AgeBand::I);
        assert_eq!(classify_age(2023, Jurisdiction::Scotland).unwrap(), AgeBand::L);
    }

    #[test]
    fn park_home_uses_sparse_column() {
        let ph = Jurisdiction::ParkHome;
        assert_eq!(classify_age(1950, ph).unwrap(), AgeBand::F);
        assert_eq!(classify_age(1990, ph).unwrap(), AgeBand::G);
        assert_eq!(classify_age(2000, ph).unwrap(), AgeBand::I);
        assert_eq!(classify_age(2024, ph).unwrap(), AgeBand::K);
        assert_eq!(AgeBand::A.years(ph), None);
        assert!(!AgeBand::M.contains(2030, ph));
    }

    #[test]
    fn range_open_below_uses_year_before_upper() {
        let ew = Jurisdiction::EnglandAndWales;
        // 2002 is band I, but "before 2002" means 2001, also band I.
        assert_eq!(
            classify_age_from_range(&YearRange::until(2002), ew).unwrap(),
            AgeBand::I
        );
        // Upper bound on a band boundary: before 1996 means 1995, band H.
        assert_eq!(
            classify_age_from_range(&YearRange::until(1996), ew).unwrap(),
            AgeBand::H
        );
        assert_eq!(
            classify_age_from_range(&YearRange::between(1950, 1990), ew).unwrap(),
            AgeBand::D
        );
        assert_eq!(
            classify_age_from_range(&YearRange::since(2030), ew).unwrap(),
            AgeBand::M
        );
    }

    #[test]
    fn unusable_ranges_are_invalid() {
        let unbounded = YearRange::Span {
            lower: None,
            upper: None,
        };
        for range in [unbounded, YearRange::Empty] {
            let err = classify_age_from_range(&range, Jurisdiction::Scotland).unwrap_err();
            assert!(matches!(err, ClassificationError::InvalidRange { .. }));
            assert!(!err.is_table_defect());
        }
    }

    #[test]
    fn span_display() {
        let england = Jurisdiction::EnglandAndWales;
        assert_eq!(AgeBand::A.years(england).unwrap().to_string(), "before 1900");
        assert_eq!(AgeBand::C.years(Jurisdiction::Scotland).unwrap().to_string(), "1930-1949");
        assert_eq!(AgeBand::M.years(Jurisdiction::Scotland).unwrap().to_string(), "2024 onwards");
    }

    #[test]
    fn serde_uses_letter() {
        assert_eq!(serde_json::to_string(&AgeBand::K).unwrap(), "\"K\"");
    }
}
