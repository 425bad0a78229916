//! Assessment country codes.

use retrofit_core::Country;

const COUNTRY_CODES: [(&str, Country); 3] = [
    ("EAW", Country::EnglandAndWales),
    ("SCT", Country::Scotland),
    ("NIR", Country::NorthernIreland),
];

/// Decode a three-letter country code. Unknown codes are absent.
pub fn decode_country(code: &str) -> Option<Country> {
    let code = code.trim();
    let found = COUNTRY_CODES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, country)| *country);
    if found.is_none() && code != crate::table::NOT_DETERMINED {
        tracing::warn!(field = "country_code", code, "unmapped code");
    }
    found
}

/// The three-letter code of `country`.
pub fn encode_country(country: Country) -> &'static str {
    COUNTRY_CODES
        .iter()
        .find(|(_, c)| *c == country)
        .map_or("", |(code, _)| *code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use retrofit_core::Labelled;

    #[test]
    fn codes_round_trip() {
        for &country in Country::all() {
            assert_eq!(decode_country(encode_country(country)), Some(country));
        }
    }

    #[test]
    fn unknown_codes_are_absent() {
        assert_eq!(decode_country("WLS"), None);
        assert_eq!(decode_country("ND"), None);
        assert_eq!(decode_country(" SCT "), Some(Country::Scotland));
    }
}
