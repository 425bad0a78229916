//! # Code Tables
//!
//! A [`CodeTable`] maps the integer codes of one exported field to the
//! symbolic names of a closed vocabulary. Decoding is lenient:
//!
//! - `"ND"` (not determined) and any table-specific sentinel decode to
//!   absent without attempting a parse.
//! - A code resolves by exact symbol first. Several legacy codes alias the
//!   same value under a name with a disambiguating numeric suffix, so a
//!   failed exact match is retried with trailing digits stripped.
//! - Anything else (unparsable text, unknown code, a name with no
//!   counterpart) is unmapped. Unmapped codes are absent data, never
//!   errors; they are logged at `warn`.

use std::marker::PhantomData;

use lazy_static::lazy_static;
use regex::Regex;

use retrofit_core::Labelled;

/// Sentinel for "not determined", valid in every field.
pub const NOT_DETERMINED: &str = "ND";

lazy_static! {
    /// Disambiguating suffix on aliased legacy names.
    static ref TRAILING_DIGITS: Regex =
        Regex::new(r"[0-9]+$").expect("BUG: trailing-digit pattern must compile");
}

/// Outcome of decoding one raw code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoded<T> {
    /// The code names a value.
    Value(T),
    /// The code is a documented "no value" sentinel.
    Absent,
    /// The code could not be mapped.
    Unmapped,
}

impl<T> Decoded<T> {
    /// The decoded value, if any.
    pub fn value(self) -> Option<T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Absent | Self::Unmapped => None,
        }
    }

    /// Whether the code failed to map.
    pub fn is_unmapped(&self) -> bool {
        matches!(self, Self::Unmapped)
    }
}

/// Integer codes of one exported field.
#[derive(Debug)]
pub struct CodeTable<T> {
    field: &'static str,
    entries: &'static [(u8, &'static str)],
    sentinels: &'static [&'static str],
    _target: PhantomData<fn() -> T>,
}

impl<T> CodeTable<T> {
    /// A table over `entries`, each a code and the legacy symbolic name it
    /// carries. Entries must be in ascending code order.
    pub const fn new(field: &'static str, entries: &'static [(u8, &'static str)]) -> Self {
        Self {
            field,
            entries,
            sentinels: &[],
            _target: PhantomData,
        }
    }

    /// Additional raw strings that decode to absent.
    pub const fn with_sentinels(mut self, sentinels: &'static [&'static str]) -> Self {
        self.sentinels = sentinels;
        self
    }

    /// Exported field name, used in diagnostics.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Every code and its legacy name.
    pub fn entries(&self) -> &'static [(u8, &'static str)] {
        self.entries
    }

    /// Legacy name of `code`.
    pub fn name_of(&self, code: u8) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, name)| *name)
    }
}

impl<T: Labelled> CodeTable<T> {
    /// Decode a raw exported string.
    pub fn lookup(&self, raw: &str) -> Decoded<T> {
        let raw = raw.trim();
        if raw == NOT_DETERMINED || self.sentinels.contains(&raw) {
            return Decoded::Absent;
        }
        let Ok(code) = raw.parse::<u8>() else {
            tracing::warn!(field = self.field, code = raw, "unparsable code");
            return Decoded::Unmapped;
        };
        match self.resolve(code) {
            Some(value) => Decoded::Value(value),
            None => {
                tracing::warn!(field = self.field, code, "unmapped code");
                Decoded::Unmapped
            }
        }
    }

    /// Decode a raw exported string, treating unmapped codes as absent.
    pub fn decode(&self, raw: &str) -> Option<T> {
        self.lookup(raw).value()
    }

    /// Map an integer code to its value without logging.
    pub fn resolve(&self, code: u8) -> Option<T> {
        let name = self.name_of(code)?;
        T::from_symbol(name).or_else(|| T::from_symbol(&TRAILING_DIGITS.replace(name, "")))
    }

    /// The lowest code that decodes to `value`.
    pub fn encode(&self, value: T) -> Option<u8> {
        self.entries
            .iter()
            .map(|(code, _)| *code)
            .find(|code| self.resolve(*code) == Some(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use retrofit_core::FlatLevel;

    const LEVELS: CodeTable<FlatLevel> = CodeTable::new(
        "flat_level",
        &[(0, "BASEMENT"), (1, "GROUND_FLOOR"), (2, "GROUND_FLOOR2"), (3, "ATTIC")],
    )
    .with_sentinels(&["99"]);

    #[test]
    fn sentinels_are_absent_not_unmapped() {
        assert_eq!(LEVELS.lookup("ND"), Decoded::Absent);
        assert_eq!(LEVELS.lookup("99"), Decoded::Absent);
        assert_eq!(LEVELS.lookup(" ND "), Decoded::Absent);
    }

    #[test]
    fn exact_then_stripped_lookup() {
        assert_eq!(LEVELS.decode("1"), Some(FlatLevel::GroundFloor));
        assert_eq!(LEVELS.decode("2"), Some(FlatLevel::GroundFloor));
    }

    #[test]
    fn unknown_names_and_codes_are_unmapped() {
        assert_eq!(LEVELS.lookup("3"), Decoded::Unmapped);
        assert_eq!(LEVELS.lookup("42"), Decoded::Unmapped);
        assert_eq!(LEVELS.lookup("first"), Decoded::Unmapped);
        assert_eq!(LEVELS.lookup("-1"), Decoded::Unmapped);
    }

    #[test]
    fn encode_picks_lowest_alias() {
        assert_eq!(LEVELS.encode(FlatLevel::GroundFloor), Some(1));
        assert_eq!(LEVELS.encode(FlatLevel::TopFloor), None);
    }
}
