//! Partial versions used as comparator operands (`1`, `1.2`, `1.x`, `v1.2.3-beta`)

use lazy_static::lazy_static;
use regex::Regex;

use crate::increment::bump;
use crate::version::{canonical_number, is_valid_pre_release, ParseError, Version};

lazy_static! {
    static ref PARTIAL_RE: Regex = Regex::new(
        r"^v?([0-9]+|[xX*])(?:\.([0-9]+|[xX*]))?(?:\.([0-9]+|[xX*]))?(?:-([0-9A-Za-z.-]+))?(?:\+([0-9A-Za-z.-]+))?$"
    )
    .unwrap();
}

const COMPONENT_ERRORS: [ParseError; 3] = [ParseError::InvalidMajor, ParseError::InvalidMinor, ParseError::InvalidPatch];

/// A version whose trailing components may be missing or wildcards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Partial {
    /// Given numeric components, canonical, cut at the first wildcard
    components: Vec<String>,
    pre_release: Option<String>,
    build: Option<String>,
}

impl Partial {
    pub(crate) fn parse(token: &str) -> Option<Partial> {
        let caps = PARTIAL_RE.captures(token)?;

        let mut components = Vec::with_capacity(3);
        for index in 1..=3 {
            match caps.get(index).map(|m| m.as_str()) {
                Some(digits) if digits.bytes().all(|b| b.is_ascii_digit()) => {
                    components.push(canonical_number(digits))
                }
                _ => break,
            }
        }

        let pre_release = caps.get(4).map(|m| m.as_str().to_string());
        if let Some(pre) = &pre_release {
            if !is_valid_pre_release(pre) {
                return None;
            }
        }

        let build = caps.get(5).map(|m| m.as_str().to_string());
        if let Some(build) = &build {
            if build.split('.').any(str::is_empty) {
                return None;
            }
        }

        Some(Partial {
            components,
            pre_release,
            build,
        })
    }

    /// Number of given numeric components
    pub(crate) fn precision(&self) -> usize {
        self.components.len()
    }

    pub(crate) fn is_any(&self) -> bool {
        self.components.is_empty()
    }

    pub(crate) fn is_full(&self) -> bool {
        self.components.len() == 3
    }

    /// Lowest version described, missing components filled with zero
    pub(crate) fn floor(&self) -> Version {
        let component = |index: usize| self.components.get(index).cloned().unwrap_or_else(|| "0".to_string());
        Version::from_parts(
            component(0),
            component(1),
            component(2),
            self.pre_release.clone(),
            self.build.clone(),
        )
    }

    /// Bump the component at `index`, zero the ones after it and attach the
    /// `-0` pre-release floor.
    pub(crate) fn bump_at(&self, index: usize) -> Result<Version, ParseError> {
        let mut parts = ["0".to_string(), "0".to_string(), "0".to_string()];
        for (slot, component) in parts.iter_mut().zip(&self.components).take(index) {
            *slot = component.clone();
        }
        let current = self.components.get(index).map(String::as_str).unwrap_or("0");
        parts[index] = bump(current, COMPONENT_ERRORS[index])?;

        let [major, minor, patch] = parts;
        Ok(Version::from_parts(major, minor, patch, Some("0".to_string()), None))
    }

    /// Exclusive upper bound of `^partial`: bump the first non-zero given
    /// component, or the last given one when all are zero.
    pub(crate) fn caret_upper(&self) -> Result<Option<Version>, ParseError> {
        if self.is_any() {
            return Ok(None);
        }
        let index = self
            .components
            .iter()
            .position(|c| c != "0")
            .unwrap_or(self.components.len() - 1);
        self.bump_at(index).map(Some)
    }

    /// Exclusive upper bound of `~partial`
    pub(crate) fn tilde_upper(&self) -> Result<Option<Version>, ParseError> {
        match self.precision() {
            0 => Ok(None),
            1 => self.bump_at(0).map(Some),
            _ => self.bump_at(1).map(Some),
        }
    }

    /// Exclusive upper bound of a partial used as an x-range (`1.2` → `<1.3.0-0`)
    pub(crate) fn x_range_upper(&self) -> Result<Option<Version>, ParseError> {
        match self.precision() {
            0 => Ok(None),
            n => self.bump_at(n - 1).map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partial(token: &str) -> Partial {
        Partial::parse(token).unwrap()
    }

    fn upper(bound: Result<Option<Version>, ParseError>) -> Option<String> {
        bound.unwrap().map(|v| v.to_string())
    }

    #[test]
    fn test_parse_partials() {
        assert_eq!(partial("1").precision(), 1);
        assert_eq!(partial("1.2").precision(), 2);
        assert_eq!(partial("v1.2.3").precision(), 3);
        assert!(partial("1.2.3").is_full());
        assert_eq!(partial("1.x").precision(), 1);
        assert_eq!(partial("1.*.3").precision(), 1);
        assert!(partial("x").is_any());
        assert!(partial("*").is_any());
        assert!(partial("X.X").is_any());
    }

    #[test]
    fn test_parse_rejects() {
        assert!(Partial::parse("").is_none());
        assert!(Partial::parse("a.b").is_none());
        assert!(Partial::parse("1.2.3.4").is_none());
        assert!(Partial::parse("1.2.3-01").is_none());
        assert!(Partial::parse("1.2.3-beta..1").is_none());
        assert!(Partial::parse("1.2.3+").is_none());
        assert!(Partial::parse(">1.2.3").is_none());
        assert!(Partial::parse("\u{661}").is_none());
        assert!(Partial::parse("\u{661}.2.3").is_none());
        assert!(Partial::parse("1.\u{662}").is_none());
    }

    #[test]
    fn test_floor() {
        assert_eq!(partial("1").floor().to_string(), "1.0.0");
        assert_eq!(partial("01.2").floor().to_string(), "1.2.0");
        assert_eq!(partial("1.x").floor().to_string(), "1.0.0");
        assert_eq!(partial("1.2.3-beta+b").floor().to_string(), "1.2.3-beta+b");
        assert_eq!(partial("*").floor().to_string(), "0.0.0");
    }

    #[test]
    fn test_caret_upper() {
        assert_eq!(upper(partial("1.2.3").caret_upper()).as_deref(), Some("2.0.0-0"));
        assert_eq!(upper(partial("0.2.3").caret_upper()).as_deref(), Some("0.3.0-0"));
        assert_eq!(upper(partial("0.0.3").caret_upper()).as_deref(), Some("0.0.4-0"));
        assert_eq!(upper(partial("0.0.0").caret_upper()).as_deref(), Some("0.0.1-0"));
        assert_eq!(upper(partial("0.0").caret_upper()).as_deref(), Some("0.1.0-0"));
        assert_eq!(upper(partial("0").caret_upper()).as_deref(), Some("1.0.0-0"));
        assert_eq!(upper(partial("1.x").caret_upper()).as_deref(), Some("2.0.0-0"));
        assert_eq!(upper(partial("x").caret_upper()), None);
    }

    #[test]
    fn test_tilde_upper() {
        assert_eq!(upper(partial("1.2.3").tilde_upper()).as_deref(), Some("1.3.0-0"));
        assert_eq!(upper(partial("1.2").tilde_upper()).as_deref(), Some("1.3.0-0"));
        assert_eq!(upper(partial("1").tilde_upper()).as_deref(), Some("2.0.0-0"));
        assert_eq!(upper(partial("0.0.1").tilde_upper()).as_deref(), Some("0.1.0-0"));
        assert_eq!(upper(partial("*").tilde_upper()), None);
    }

    #[test]
    fn test_x_range_upper() {
        assert_eq!(upper(partial("1.2").x_range_upper()).as_deref(), Some("1.3.0-0"));
        assert_eq!(upper(partial("1").x_range_upper()).as_deref(), Some("2.0.0-0"));
        assert_eq!(upper(partial("1.2.3").x_range_upper()).as_deref(), Some("1.2.4-0"));
    }

    #[test]
    fn test_bump_overflow() {
        let max = format!("{}.0.0", u64::MAX);
        assert_eq!(partial(&max).caret_upper().unwrap_err(), ParseError::InvalidMajor);
    }
}
