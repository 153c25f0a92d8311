//! Campaign-attribution query-string parsing.
//!
//! Extracts marketing-attribution key/value pairs (UTM parameters and Google
//! click identifiers) from a URL query string. Unrecognized keys are excluded
//! silently; they are never an error.

use std::collections::BTreeMap;

/// Query-key prefixes recognized as campaign attribution.
///
/// `gclid` and `gbraid` usually appear as bare keys; prefix matching covers
/// both the bare and the suffixed forms.
pub const RECOGNIZED_PREFIXES: &[&str] = &["utm_", "gad_", "gclid", "gbraid"];

/// Parsed campaign parameters, keyed by the original query key.
pub type AttributionParams = BTreeMap<String, String>;

/// Whether a query key carries campaign attribution.
#[must_use]
pub fn is_recognized(key: &str) -> bool {
    RECOGNIZED_PREFIXES.iter().any(|p| key.starts_with(p))
}

/// Parse a query string into its recognized attribution parameters.
///
/// Pure and deterministic: a leading `?` is tolerated, values are
/// percent-decoded, and an input without recognized keys yields an empty map.
#[must_use]
pub fn parse(query: &str) -> AttributionParams {
    let query = query.strip_prefix('?').unwrap_or(query);
    url::form_urlencoded::parse(query.as_bytes())
        .filter(|(key, _)| is_recognized(key))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognized_keys_kept_others_excluded() {
        let params = parse("?utm_source=moogle&utm_medium=organic&foo=bar");
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("utm_source").map(String::as_str), Some("moogle"));
        assert_eq!(
            params.get("utm_medium").map(String::as_str),
            Some("organic")
        );
        assert!(!params.contains_key("foo"));
    }

    #[test]
    fn test_no_recognized_keys_yields_empty_map() {
        assert!(parse("foo=bar&baz=qux").is_empty());
        assert!(parse("").is_empty());
        assert!(parse("?").is_empty());
    }

    #[test]
    fn test_bare_click_ids() {
        let params = parse("gclid=abc123&gbraid=xyz&gad_source=1");
        assert_eq!(params.get("gclid").map(String::as_str), Some("abc123"));
        assert_eq!(params.get("gbraid").map(String::as_str), Some("xyz"));
        assert_eq!(params.get("gad_source").map(String::as_str), Some("1"));
    }

    #[test]
    fn test_values_are_percent_decoded() {
        let params = parse("utm_campaign=spring%20sale");
        assert_eq!(
            params.get("utm_campaign").map(String::as_str),
            Some("spring sale")
        );
    }

    #[test]
    fn test_deterministic_for_same_input() {
        let input = "utm_source=moogle&gclid=1&utm_medium=organic";
        assert_eq!(parse(input), parse(input));
    }
}
