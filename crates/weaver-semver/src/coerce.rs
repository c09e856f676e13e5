//! Best-effort version extraction from arbitrary text

use lazy_static::lazy_static;
use regex::Regex;

use crate::version::{canonical_number, Version};

lazy_static! {
    // First `major[.minor[.patch]]` run anywhere in the text
    static ref COERCE_RE: Regex = Regex::new(r"([0-9]+)(?:\.([0-9]+))?(?:\.([0-9]+))?").unwrap();
}

/// Extract the first `major[.minor[.patch]]` run from `text`.
///
/// Missing components become `0`, leading zeros are dropped and anything
/// after the patch component (extra components, pre-release, build) is
/// discarded. Returns `None` for empty input or text without digits.
pub fn coerce(text: &str) -> Option<Version> {
    let caps = COERCE_RE.captures(text)?;

    let component = |index: usize| {
        caps.get(index)
            .map_or_else(|| "0".to_string(), |m| canonical_number(m.as_str()))
    };

    Some(Version::from_parts(component(1), component(2), component(3), None, None))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coerced(text: &str) -> Option<String> {
        coerce(text).map(|v| v.to_string())
    }

    #[test]
    fn test_coerce() {
        assert_eq!(coerced("v1.2.3").as_deref(), Some("1.2.3"));
        assert_eq!(coerced("42.6.7.9.3-alpha").as_deref(), Some("42.6.7"));
        assert_eq!(coerced("version1.1").as_deref(), Some("1.1.0"));
        assert_eq!(coerced("001").as_deref(), Some("1.0.0"));
        assert_eq!(coerced("1.2.3-beta+build").as_deref(), Some("1.2.3"));
        assert_eq!(coerced("v2").as_deref(), Some("2.0.0"));
        assert_eq!(coerced("007.08.009").as_deref(), Some("7.8.9"));
    }

    #[test]
    fn test_coerce_first_match_only() {
        assert_eq!(coerced("a1.2b3.4").as_deref(), Some("1.2.0"));
        assert_eq!(coerced("release 4 of 5.6").as_deref(), Some("4.0.0"));
    }

    #[test]
    fn test_coerce_absent() {
        assert_eq!(coerced(""), None);
        assert_eq!(coerced("   "), None);
        assert_eq!(coerced("version"), None);
        assert_eq!(coerced("x.y.z"), None);
    }

    #[test]
    fn test_coerce_ignores_non_ascii_digits() {
        assert_eq!(coerced("v\u{661}.\u{662}.\u{663}"), None);
        assert_eq!(coerced("\u{661}\u{662}3.4"), Some("3.4.0".to_string()));

        let version = coerce("\u{661}7.\u{662}").unwrap();
        assert!(version.major().bytes().all(|b| b.is_ascii_digit()));
        assert_eq!(version.to_string(), "7.0.0");
    }

    #[test]
    fn test_coerce_huge_number() {
        assert_eq!(
            coerced("99999999999999999999999.1").as_deref(),
            Some("99999999999999999999999.1.0")
        );
    }
}
