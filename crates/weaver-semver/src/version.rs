//! Version grammar, parsing and cleaning

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use thiserror::Error;

/// Longest input accepted by [`parse`].
///
/// See <https://semver.org/#does-semver-have-a-size-limit-on-the-version-string>
pub const MAX_VERSION_LENGTH: usize = 256;

/// Error type for version parsing and manipulation
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseError {
    #[error("Version string is longer than {} characters", MAX_VERSION_LENGTH)]
    VersionLargerThanMaxLength,
    #[error("Invalid version string")]
    InvalidInput,
    #[error("Invalid major version")]
    InvalidMajor,
    #[error("Invalid minor version")]
    InvalidMinor,
    #[error("Invalid patch version")]
    InvalidPatch,
    #[error("Invalid release type")]
    InvalidReleaseType,
    #[error("Invalid pre-release version")]
    InvalidPrerelease,
}

/// A parsed semantic version.
///
/// Numeric components are kept as canonical digit strings, so arbitrarily
/// long components survive parsing. Equality, ordering and hashing follow
/// SemVer precedence: build metadata never participates.
#[derive(Debug, Clone)]
pub struct Version {
    major: String,
    minor: String,
    patch: String,
    pre_release: Option<String>,
    build: Option<String>,
}

impl Version {
    pub(crate) fn from_parts(
        major: impl Into<String>,
        minor: impl Into<String>,
        patch: impl Into<String>,
        pre_release: Option<String>,
        build: Option<String>,
    ) -> Self {
        Version {
            major: major.into(),
            minor: minor.into(),
            patch: patch.into(),
            pre_release,
            build,
        }
    }

    /// The `0.0.0` version, the lowest release in the universe.
    pub fn zero() -> Self {
        Self::from_parts("0", "0", "0", None, None)
    }

    pub fn major(&self) -> &str {
        &self.major
    }

    pub fn minor(&self) -> &str {
        &self.minor
    }

    pub fn patch(&self) -> &str {
        &self.patch
    }

    pub fn pre_release(&self) -> Option<&str> {
        self.pre_release.as_deref()
    }

    pub fn build(&self) -> Option<&str> {
        self.build.as_deref()
    }

    /// Check if this version carries a pre-release tag
    pub fn is_prerelease(&self) -> bool {
        self.pre_release.is_some()
    }

    /// Same version without pre-release and build metadata
    pub fn release(&self) -> Version {
        Self::from_parts(self.major.clone(), self.minor.clone(), self.patch.clone(), None, None)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.pre_release {
            write!(f, "-{}", pre)?;
        }
        if let Some(build) = &self.build {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.pre_release.hash(state);
    }
}

/// Byte cursor over a trimmed version string.
struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Scanner { input, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, byte: u8) -> Result<(), ParseError> {
        if self.eat(byte) {
            Ok(())
        } else {
            Err(ParseError::InvalidInput)
        }
    }

    fn is_done(&self) -> bool {
        self.pos == self.input.len()
    }

    /// A numeric component: `0` or a digit run without leading zero.
    fn number(&mut self) -> Result<&'a str, ParseError> {
        let start = self.pos;
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
        let digits = &self.input[start..self.pos];
        if digits.is_empty() || (digits.len() > 1 && digits.starts_with('0')) {
            return Err(ParseError::InvalidInput);
        }
        Ok(digits)
    }

    /// A dot separated identifier list. Numeric identifiers must not carry a
    /// leading zero when `strict_numeric` is set.
    fn identifiers(&mut self, strict_numeric: bool) -> Result<&'a str, ParseError> {
        let start = self.pos;
        loop {
            let ident_start = self.pos;
            while matches!(self.peek(), Some(b) if is_identifier_byte(b)) {
                self.pos += 1;
            }
            let ident = &self.input[ident_start..self.pos];
            if ident.is_empty() {
                return Err(ParseError::InvalidInput);
            }
            if strict_numeric && has_leading_zero(ident) {
                return Err(ParseError::InvalidInput);
            }
            if !self.eat(b'.') {
                break;
            }
        }
        Ok(&self.input[start..self.pos])
    }
}

fn is_identifier_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-'
}

fn has_leading_zero(ident: &str) -> bool {
    ident.len() > 1 && ident.starts_with('0') && is_numeric(ident)
}

/// Check if a string is a non-empty run of ASCII digits
pub(crate) fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Strip leading zeros from a digit run, keeping a lone `0`.
pub(crate) fn canonical_number(digits: &str) -> String {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Check a dot separated identifier list against the pre-release grammar
pub(crate) fn is_valid_pre_release(pre: &str) -> bool {
    let mut scanner = Scanner::new(pre);
    scanner.identifiers(true).is_ok() && scanner.is_done()
}

fn trim_whitespace(input: &str) -> &str {
    input.trim_matches(|c: char| c.is_ascii_whitespace())
}

/// Parse a full `major.minor.patch[-pre_release][+build]` version.
///
/// Surrounding whitespace is ignored. Missing components are never filled
/// in; use [`crate::coerce`] for lenient extraction.
pub fn parse(input: &str) -> Result<Version, ParseError> {
    if input.len() > MAX_VERSION_LENGTH {
        return Err(ParseError::VersionLargerThanMaxLength);
    }

    let mut scanner = Scanner::new(trim_whitespace(input));

    let major = scanner.number()?;
    scanner.expect(b'.')?;
    let minor = scanner.number()?;
    scanner.expect(b'.')?;
    let patch = scanner.number()?;

    let pre_release = if scanner.eat(b'-') {
        Some(scanner.identifiers(true)?.to_string())
    } else {
        None
    };

    let build = if scanner.eat(b'+') {
        Some(scanner.identifiers(false)?.to_string())
    } else {
        None
    };

    if !scanner.is_done() {
        return Err(ParseError::InvalidInput);
    }

    Ok(Version::from_parts(major, minor, patch, pre_release, build))
}

/// Check if a version string parses
pub fn validate(input: &str) -> bool {
    parse(input).is_ok()
}

/// Parse a version after trimming whitespace and a leading run of `=` and
/// `v` characters. Range operators are not stripped.
pub fn clean(input: &str) -> Result<Version, ParseError> {
    let trimmed = trim_whitespace(input);
    let stripped = trimmed.trim_start_matches(|c| c == '=' || c == 'v');

    match stripped.as_bytes().first() {
        Some(b) if b.is_ascii_digit() => parse(stripped),
        _ => Err(ParseError::InvalidInput),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(v: &Version) -> (&str, &str, &str, Option<&str>, Option<&str>) {
        (v.major(), v.minor(), v.patch(), v.pre_release(), v.build())
    }

    #[test]
    fn test_parse_spec_examples() {
        let cases = [
            ("1.0.0", ("1", "0", "0", None, None)),
            ("1.0.0-alpha", ("1", "0", "0", Some("alpha"), None)),
            ("1.0.0-alpha.1", ("1", "0", "0", Some("alpha.1"), None)),
            ("1.0.0-0.3.7", ("1", "0", "0", Some("0.3.7"), None)),
            ("1.0.0-x.7.z.92", ("1", "0", "0", Some("x.7.z.92"), None)),
            ("1.0.0-x-y-z.--", ("1", "0", "0", Some("x-y-z.--"), None)),
            ("1.0.0-alpha+001", ("1", "0", "0", Some("alpha"), Some("001"))),
            ("1.0.0+20130313144700", ("1", "0", "0", None, Some("20130313144700"))),
            ("1.0.0-beta+exp.sha.5114f85", ("1", "0", "0", Some("beta"), Some("exp.sha.5114f85"))),
            ("1.0.0+21AF26D3----117B344092BD", ("1", "0", "0", None, Some("21AF26D3----117B344092BD"))),
        ];

        for (input, expected) in cases {
            let version = parse(input).unwrap();
            assert_eq!(parts(&version), expected, "parsing {}", input);
        }
    }

    #[test]
    fn test_parse_zero_components() {
        let version = parse("0.0.0").unwrap();
        assert_eq!(parts(&version), ("0", "0", "0", None, None));
        assert!(validate("0.10.0"));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse("  1.2.3\t").unwrap().to_string(), "1.2.3");
        assert_eq!(parse("\n1.2.3-beta ").unwrap().to_string(), "1.2.3-beta");
    }

    #[test]
    fn test_parse_leading_zero() {
        assert_eq!(parse("01.0.0").unwrap_err(), ParseError::InvalidInput);
        assert_eq!(parse("1.01.0").unwrap_err(), ParseError::InvalidInput);
        assert_eq!(parse("1.0.01").unwrap_err(), ParseError::InvalidInput);
        assert_eq!(parse("1.0.0-01").unwrap_err(), ParseError::InvalidInput);
        // Mixed identifiers and build metadata are exempt
        assert!(validate("1.0.0-01a"));
        assert!(validate("1.0.0+001"));
    }

    #[test]
    fn test_parse_missing_components() {
        assert_eq!(parse("1").unwrap_err(), ParseError::InvalidInput);
        assert_eq!(parse("1.2").unwrap_err(), ParseError::InvalidInput);
        assert_eq!(parse("1.2.").unwrap_err(), ParseError::InvalidInput);
        assert_eq!(parse("").unwrap_err(), ParseError::InvalidInput);
    }

    #[test]
    fn test_parse_fails() {
        let invalid = [
            "a.b.c",
            "1.2.3x",
            "1.2.3.4",
            "v1.2.3",
            "1.2.3-",
            "1.2.3+",
            "1.2.3-+build",
            "1.2.3-alpha.",
            "1.2.3-alpha..1",
            "1.2.3-al_pha",
            "1.2.3+build+meta",
            "1.2.3 4",
            "-1.2.3",
        ];
        for input in invalid {
            assert!(!validate(input), "{} should be invalid", input);
        }
    }

    #[test]
    fn test_parse_max_length() {
        let long = format!("1.2.3-{}", "a".repeat(MAX_VERSION_LENGTH));
        assert_eq!(parse(&long).unwrap_err(), ParseError::VersionLargerThanMaxLength);

        let fits = format!("1.2.3-{}", "a".repeat(MAX_VERSION_LENGTH - 6));
        assert!(validate(&fits));
    }

    #[test]
    fn test_display_round_trip() {
        for input in ["1.2.3", "1.2.3-rc.1", "1.2.3+build.7", "10.20.30-a.b-c+d.e"] {
            let version = parse(input).unwrap();
            assert_eq!(version.to_string(), input);
            assert_eq!(parse(&version.to_string()).unwrap(), version);
        }
    }

    #[test]
    fn test_from_str() {
        let version: Version = "3.4.5-beta".parse().unwrap();
        assert_eq!(version.pre_release(), Some("beta"));
        assert!("3.4".parse::<Version>().is_err());
    }

    #[test]
    fn test_clean() {
        assert_eq!(clean("1.2.3").unwrap().to_string(), "1.2.3");
        assert_eq!(clean(" 1.2.3 ").unwrap().to_string(), "1.2.3");
        assert_eq!(clean(" =v1.2.3 ").unwrap().to_string(), "1.2.3");
        assert_eq!(clean("v1.2.3").unwrap().to_string(), "1.2.3");
        assert_eq!(clean("  v1.2.3-beta+build ").unwrap().to_string(), "1.2.3-beta+build");
    }

    #[test]
    fn test_clean_rejects_range_operators() {
        for input in [">1.2.3", "~1.2.3", "<=1.2.3", "^1.2.3", "1.2", "", "   ", "v"] {
            assert_eq!(clean(input).unwrap_err(), ParseError::InvalidInput, "{}", input);
        }
    }

    #[test]
    fn test_canonical_number() {
        assert_eq!(canonical_number("007"), "7");
        assert_eq!(canonical_number("000"), "0");
        assert_eq!(canonical_number("120"), "120");
    }

    #[test]
    fn test_is_valid_pre_release() {
        assert!(is_valid_pre_release("alpha.1"));
        assert!(is_valid_pre_release("0"));
        assert!(!is_valid_pre_release("01"));
        assert!(!is_valid_pre_release("alpha..1"));
        assert!(!is_valid_pre_release(""));
    }
}
