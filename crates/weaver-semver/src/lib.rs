//! Semantic Versioning 2.0.0 library
//!
//! This crate provides strict version parsing and validation, precedence
//! comparison, coercion of loose version text, release increments and the
//! lowest version admitted by a range expression.
//!
//! ```
//! use weaver_semver::{minimum, parse, ReleaseType};
//!
//! let version = parse("1.2.3-beta.1").unwrap();
//! assert_eq!(version.pre_release(), Some("beta.1"));
//! assert_eq!(weaver_semver::inc(&version, ReleaseType::Patch).unwrap().to_string(), "1.2.3");
//! assert_eq!(minimum("^1.2 || >=0.9.0 <1.0.0").unwrap().to_string(), "0.9.0");
//! ```

mod coerce;
mod comparator;
pub mod constraint;
mod increment;
mod semver;
mod version;

pub use coerce::coerce;
pub use comparator::Comparator;
pub use constraint::{
    Constraint, ConstraintInterface, MatchAllConstraint, MatchNoneConstraint, MultiConstraint, Operator, Range,
    RangeError,
};
pub use increment::{dec, decrement, inc, increment, ReleaseType};
pub use semver::Semver;
pub use version::{clean, parse, validate, ParseError, Version, MAX_VERSION_LENGTH};

/// Check if `version` (cleaned of a leading `v` or `=`) falls inside `range`
pub fn satisfies(version: &str, range: &str) -> bool {
    Semver::satisfies(version, range)
}

/// Lowest version admitted by `range`, or `None` when it admits nothing
pub fn minimum(range: &str) -> Option<Version> {
    Semver::minimum(range)
}
