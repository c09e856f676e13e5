//! Semver facade providing high-level version operations

use std::cmp::Ordering;

use crate::constraint::{Range, RangeError};
use crate::version::{clean, validate};
use crate::{Comparator, Version};

/// Main facade for semantic versioning operations
pub struct Semver;

impl Semver {
    /// Check if a string is a strict SemVer 2.0.0 version
    pub fn validate(version: &str) -> bool {
        validate(version)
    }

    /// Check if a version satisfies a range
    pub fn satisfies(version: &str, range: &str) -> bool {
        let range = match Range::parse(range) {
            Ok(r) => r,
            Err(_) => return false,
        };
        Self::satisfies_range(version, &range)
    }

    /// Lowest version admitted by a range
    pub fn minimum(range: &str) -> Option<Version> {
        Range::parse(range).ok()?.minimum()
    }

    /// Parse a range and return a reusable representation.
    pub fn parse_range(range: &str) -> Result<Range, RangeError> {
        Range::parse(range)
    }

    /// Check a version against a pre-parsed range.
    pub fn satisfies_range(version: &str, range: &Range) -> bool {
        match clean(version) {
            Ok(v) => range.matches(&v),
            Err(_) => false,
        }
    }

    /// Return all versions that satisfy the given range
    pub fn satisfied_by(versions: &[&str], range: &str) -> Vec<String> {
        let range = match Range::parse(range) {
            Ok(r) => r,
            Err(_) => return Vec::new(),
        };

        versions
            .iter()
            .filter(|v| Self::satisfies_range(v, &range))
            .map(|v| v.to_string())
            .collect()
    }

    /// Highest version that satisfies the range
    pub fn max_satisfying(versions: &[&str], range: &str) -> Option<String> {
        Self::rsort(&Self::satisfied_by_refs(versions, range)).into_iter().next()
    }

    /// Lowest version that satisfies the range
    pub fn min_satisfying(versions: &[&str], range: &str) -> Option<String> {
        Self::sort(&Self::satisfied_by_refs(versions, range)).into_iter().next()
    }

    fn satisfied_by_refs<'a>(versions: &[&'a str], range: &str) -> Vec<&'a str> {
        let range = match Range::parse(range) {
            Ok(r) => r,
            Err(_) => return Vec::new(),
        };
        versions
            .iter()
            .copied()
            .filter(|v| Self::satisfies_range(v, &range))
            .collect()
    }

    /// Sort versions in ascending order
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        // Unparseable entries are dropped
        let mut parsed: Vec<(Version, usize)> = versions
            .iter()
            .enumerate()
            .filter_map(|(i, v)| Some((clean(v).ok()?, i)))
            .collect();

        parsed.sort_by(|(a, _), (b, _)| {
            let cmp: Ordering = Comparator::compare(a, b);
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });

        // Return original versions in sorted order
        parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect()
    }
}
