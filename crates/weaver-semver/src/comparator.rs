//! Version precedence
//!
//! Implements <https://semver.org/#spec-item-11>. Build metadata never takes
//! part in ordering or equality.

use std::cmp::Ordering;

use crate::version::{is_numeric, Version};

/// Comparator for parsed versions
pub struct Comparator;

impl Comparator {
    /// Total precedence order between two versions
    pub fn compare(version1: &Version, version2: &Version) -> Ordering {
        compare_numeric(version1.major(), version2.major())
            .then_with(|| compare_numeric(version1.minor(), version2.minor()))
            .then_with(|| compare_numeric(version1.patch(), version2.patch()))
            .then_with(|| compare_pre_release(version1.pre_release(), version2.pre_release()))
    }

    /// Check if version1 > version2
    pub fn greater_than(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, version2) == Ordering::Greater
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, version2) != Ordering::Less
    }

    /// Check if version1 < version2
    pub fn less_than(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, version2) == Ordering::Less
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, version2) != Ordering::Greater
    }

    /// Check if version1 == version2
    pub fn equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, version2) == Ordering::Equal
    }

    /// Check if version1 != version2
    pub fn not_equal_to(version1: &Version, version2: &Version) -> bool {
        !Self::equal_to(version1, version2)
    }
}

/// Digit strings without leading zeros: longer is greater, equal lengths
/// compare bytewise.
fn compare_numeric(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn compare_pre_release(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) if a == b => Ordering::Equal,
        (Some(a), Some(b)) => {
            let mut a_parts = a.split('.');
            let mut b_parts = b.split('.');
            loop {
                match (a_parts.next(), b_parts.next()) {
                    (Some(x), Some(y)) => match compare_identifier(x, y) {
                        Ordering::Equal => continue,
                        other => return other,
                    },
                    // A shorter identifier list ranks lower
                    (None, Some(_)) => return Ordering::Less,
                    (Some(_), None) => return Ordering::Greater,
                    (None, None) => return Ordering::Equal,
                }
            }
        }
    }
}

/// Numeric identifiers rank below alphanumeric ones.
fn compare_identifier(a: &str, b: &str) -> Ordering {
    match (is_numeric(a), is_numeric(b)) {
        (true, true) => compare_numeric(a, b),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.as_bytes().cmp(b.as_bytes()),
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        Comparator::equal_to(self, other)
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        Comparator::compare(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    fn v(input: &str) -> Version {
        parse(input).unwrap()
    }

    #[test]
    fn test_greater_than() {
        assert!(Comparator::greater_than(&v("1.25.0"), &v("1.24.0")));
        assert!(!Comparator::greater_than(&v("1.25.0"), &v("1.25.0")));
        assert!(!Comparator::greater_than(&v("1.25.0"), &v("1.26.0")));
        assert!(Comparator::greater_than(&v("10.0.0"), &v("9.99.99")));
    }

    #[test]
    fn test_greater_than_or_equal_to() {
        assert!(Comparator::greater_than_or_equal_to(&v("1.25.0"), &v("1.24.0")));
        assert!(Comparator::greater_than_or_equal_to(&v("1.25.0"), &v("1.25.0")));
        assert!(!Comparator::greater_than_or_equal_to(&v("1.25.0"), &v("1.26.0")));
    }

    #[test]
    fn test_less_than() {
        assert!(!Comparator::less_than(&v("1.25.0"), &v("1.24.0")));
        assert!(!Comparator::less_than(&v("1.25.0"), &v("1.25.0")));
        assert!(Comparator::less_than(&v("1.25.0"), &v("1.26.0")));
        assert!(Comparator::less_than(&v("1.0.0-rc.1"), &v("1.0.0")));
    }

    #[test]
    fn test_less_than_or_equal_to() {
        assert!(!Comparator::less_than_or_equal_to(&v("1.25.0"), &v("1.24.0")));
        assert!(Comparator::less_than_or_equal_to(&v("1.25.0"), &v("1.25.0")));
        assert!(Comparator::less_than_or_equal_to(&v("1.25.0"), &v("1.26.0")));
    }

    #[test]
    fn test_equal_to() {
        assert!(!Comparator::equal_to(&v("1.25.0"), &v("1.24.0")));
        assert!(Comparator::equal_to(&v("1.25.0"), &v("1.25.0")));
        assert!(Comparator::equal_to(&v("1.0.0+a"), &v("1.0.0+b")));
        assert!(Comparator::not_equal_to(&v("1.0.0-a"), &v("1.0.0-b")));
    }

    #[test]
    fn test_spec_precedence_chain() {
        let chain = [
            "1.0.0-alpha",
            "1.0.0-alpha.1",
            "1.0.0-alpha.beta",
            "1.0.0-beta",
            "1.0.0-beta.2",
            "1.0.0-beta.11",
            "1.0.0-rc.1",
            "1.0.0",
            "2.0.0",
            "2.1.0",
            "2.1.1",
        ];
        for pair in chain.windows(2) {
            assert!(v(pair[0]) < v(pair[1]), "{} < {}", pair[0], pair[1]);
            assert!(v(pair[1]) > v(pair[0]), "{} > {}", pair[1], pair[0]);
        }
    }

    #[test]
    fn test_numeric_identifier_below_alphanumeric() {
        assert!(v("1.0.0-1") < v("1.0.0-alpha"));
        assert!(v("1.0.0-2") < v("1.0.0-10"));
        assert!(v("1.0.0-0") < v("1.0.0-beta"));
    }

    #[test]
    fn test_alphanumeric_prefix_is_lesser() {
        assert!(v("1.0.0-beta") < v("1.0.0-betaa"));
        assert!(v("1.0.0-Beta") < v("1.0.0-beta"));
    }

    #[test]
    fn test_long_components() {
        assert!(v("1.0.99999999999999999999999") > v("1.0.9999999999999999999999"));
        assert!(v("123456789012345678901234567890.0.0") > v("2.0.0"));
    }

    #[test]
    fn test_sorting() {
        let mut versions = vec![v("1.0.0"), v("0.1.0"), v("1.0.0-rc.1"), v("0.0.1")];
        versions.sort();
        let sorted: Vec<String> = versions.iter().map(|v| v.to_string()).collect();
        assert_eq!(sorted, vec!["0.0.1", "0.1.0", "1.0.0-rc.1", "1.0.0"]);
    }
}
