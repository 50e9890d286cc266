//! IATA code resolution from free-text airport names.
//!
//! Place lookups return airport names, not codes. A code is recovered by,
//! in order:
//! 1. a 3-character parenthesized token, e.g. `"Barajas (MAD)"`
//! 2. a known city or landmark name in the text, e.g. `"El Prat"`

use crate::domain::IataCode;

/// Known-location rules, evaluated top to bottom. First match wins.
///
/// Keywords are lowercase. Accented spellings are listed explicitly next to
/// their unaccented forms; no keyword is a substring of another rule's
/// keyword, so order only matters for names mentioning two cities.
const CODE_RULES: &[(&str, &str)] = &[
    ("madrid", "MAD"),
    ("barajas", "MAD"),
    ("barcelona", "BCN"),
    ("el prat", "BCN"),
    ("málaga", "AGP"),
    ("malaga", "AGP"),
    ("sevilla", "SVQ"),
    ("seville", "SVQ"),
    ("valencia", "VLC"),
    ("bilbao", "BIO"),
    ("granada", "GRX"),
    ("tel aviv", "TLV"),
    ("ben gurion", "TLV"),
];

/// Resolve an airport's IATA code from its name.
///
/// Returns `None` when neither a parenthesized code nor a known location
/// is found.
///
/// # Examples
///
/// ```
/// use travel_server::airports::resolve_code;
///
/// assert_eq!(resolve_code("Madrid-Barajas Airport (MAD)").unwrap().as_str(), "MAD");
/// assert_eq!(resolve_code("Barcelona Airport (bcn)").unwrap().as_str(), "BCN");
/// assert_eq!(resolve_code("Aeropuerto de Málaga").unwrap().as_str(), "AGP");
/// assert!(resolve_code("Unknown Airport").is_none());
/// ```
pub fn resolve_code(name: &str) -> Option<IataCode> {
    parenthesized_code(name).or_else(|| known_location_code(name))
}

/// Extract a code from the first parenthesized token, if it is exactly
/// three letters (any case).
fn parenthesized_code(name: &str) -> Option<IataCode> {
    let open = name.find('(')?;
    let inner = &name[open + 1..];
    let close = inner.find(')')?;
    let token = inner[..close].trim();

    if token.chars().count() != 3 {
        return None;
    }

    IataCode::parse_normalized(token).ok()
}

fn known_location_code(name: &str) -> Option<IataCode> {
    let name = name.to_lowercase();

    CODE_RULES
        .iter()
        .find(|(keyword, _)| name.contains(keyword))
        .and_then(|(_, code)| IataCode::parse(code).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(name: &str) -> String {
        resolve_code(name)
            .map(|c| c.as_str().to_string())
            .unwrap_or_default()
    }

    #[test]
    fn parenthesized_uppercase() {
        assert_eq!(code("Madrid-Barajas Airport (MAD)"), "MAD");
        assert_eq!(code("Ben Gurion International (TLV)"), "TLV");
    }

    #[test]
    fn parenthesized_any_case_is_normalized() {
        assert_eq!(code("Barcelona Airport (bcn)"), "BCN");
        assert_eq!(code("Some Field (Xyz)"), "XYZ");
    }

    #[test]
    fn parenthesized_token_is_trimmed() {
        assert_eq!(code("Somewhere Intl ( ABC )"), "ABC");
    }

    #[test]
    fn parenthesized_code_wins_over_name() {
        // Name mentions Madrid but the explicit code says otherwise
        assert_eq!(code("Madrid Torrejón (TOJ)"), "TOJ");
    }

    #[test]
    fn wrong_length_token_is_not_a_code() {
        assert_eq!(code("Airport (TOOLONG)"), "");
        assert_eq!(code("Airport (AB)"), "");
        assert_eq!(code("Airport ()"), "");
    }

    #[test]
    fn wrong_length_token_falls_through_to_name() {
        assert_eq!(code("Seville Airport (SVQX)"), "SVQ");
    }

    #[test]
    fn non_letter_token_falls_through() {
        assert_eq!(code("Valencia Airport (V1C)"), "VLC");
        assert_eq!(code("Regional Airport (123)"), "");
    }

    #[test]
    fn unbalanced_parenthesis() {
        assert_eq!(code("Bilbao Airport (BIO"), "BIO");
        assert_eq!(code("Airport (XYZ"), "");
    }

    #[test]
    fn known_locations() {
        assert_eq!(code("Adolfo Suárez Madrid–Barajas"), "MAD");
        assert_eq!(code("Aeropuerto de Barajas"), "MAD");
        assert_eq!(code("Josep Tarradellas Barcelona-El Prat"), "BCN");
        assert_eq!(code("El Prat"), "BCN");
        assert_eq!(code("Málaga-Costa del Sol"), "AGP");
        assert_eq!(code("Malaga Airport"), "AGP");
        assert_eq!(code("Aeropuerto de Sevilla"), "SVQ");
        assert_eq!(code("Seville Airport"), "SVQ");
        assert_eq!(code("Valencia Airport"), "VLC");
        assert_eq!(code("Bilbao Airport"), "BIO");
        assert_eq!(code("Federico García Lorca Granada-Jaén"), "GRX");
        assert_eq!(code("Tel Aviv Sde Dov"), "TLV");
        assert_eq!(code("Ben Gurion Airport"), "TLV");
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(code("MÁLAGA AIRPORT"), "AGP");
        assert_eq!(code("GRANADA"), "GRX");
    }

    #[test]
    fn unknown_name() {
        assert_eq!(code("Unknown Airport"), "");
        assert_eq!(code(""), "");
    }

    #[test]
    fn no_rule_shadows_another() {
        // Every keyword resolves to its own code, so reordering the
        // disjoint rules cannot change any result.
        for (keyword, expected) in CODE_RULES {
            assert_eq!(&code(keyword), expected, "keyword {keyword:?}");
        }
    }

    #[test]
    fn rule_codes_are_valid() {
        for (_, c) in CODE_RULES {
            assert!(IataCode::parse(c).is_ok(), "invalid code {c}");
        }
    }
}
