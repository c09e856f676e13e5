//! MultiConstraint - conjunction of comparators forming one range branch

use std::fmt;

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use super::partial::Partial;
use super::{Constraint, ConstraintInterface, Operator};
use crate::coerce::coerce;
use crate::increment::{inc, ReleaseType};
use crate::version::ParseError;
use crate::Version;

lazy_static! {
    // `>= 1.2.3` and `>=1.2.3` tokenize the same way
    static ref OPERATOR_SPACE_RE: Regex = Regex::new(r"(>=|<=|>|<|=|\^|~)\s+").unwrap();
}

#[derive(Debug, Clone, Copy)]
enum Prefix {
    Comparison(Operator),
    Equal,
    Caret,
    Tilde,
    Bare,
}

const PREFIXES: [(&str, Prefix); 7] = [
    (">=", Prefix::Comparison(Operator::GreaterThanOrEqual)),
    ("<=", Prefix::Comparison(Operator::LessThanOrEqual)),
    (">", Prefix::Comparison(Operator::GreaterThan)),
    ("<", Prefix::Comparison(Operator::LessThan)),
    ("=", Prefix::Equal),
    ("^", Prefix::Caret),
    ("~", Prefix::Tilde),
];

fn split_operator(token: &str) -> (Prefix, &str) {
    for (symbol, prefix) in PREFIXES {
        if let Some(operand) = token.strip_prefix(symbol) {
            return match prefix {
                Prefix::Equal => (prefix, operand.trim_start_matches('=')),
                _ => (prefix, operand),
            };
        }
    }
    (Prefix::Bare, token)
}

/// A set of comparators that must all hold (one `||` branch of a range)
#[derive(Debug, Clone, Default)]
pub struct MultiConstraint {
    lower: Vec<Constraint>,
    upper: Vec<Constraint>,
    fixed_minimum: Option<Version>,
    pretty_string: Option<String>,
}

impl MultiConstraint {
    /// Create a new MultiConstraint from lower and upper bounds
    pub fn new(lower: Vec<Constraint>, upper: Vec<Constraint>) -> Self {
        MultiConstraint {
            lower,
            upper,
            fixed_minimum: None,
            pretty_string: None,
        }
    }

    /// Lower-bound constraints (`>`, `>=`, `=`)
    pub fn lower(&self) -> &[Constraint] {
        &self.lower
    }

    /// Upper-bound constraints (`<`, `<=`)
    pub fn upper(&self) -> &[Constraint] {
        &self.upper
    }

    fn push(&mut self, constraint: Constraint) {
        if constraint.operator().is_upper() {
            self.upper.push(constraint);
        } else {
            self.lower.push(constraint);
        }
    }

    /// A partial used without operator: a full version pins exactly,
    /// anything shorter spans its x-range.
    fn push_x_range(&mut self, partial: &Partial) -> Result<(), ParseError> {
        if partial.is_full() {
            self.push(Constraint::new(Operator::Equal, partial.floor()));
            return Ok(());
        }
        if let Some(upper) = partial.x_range_upper()? {
            self.push(Constraint::new(Operator::GreaterThanOrEqual, partial.floor()));
            self.push(Constraint::new(Operator::LessThan, upper));
        }
        Ok(())
    }

    fn push_with_upper(&mut self, partial: &Partial, upper: Option<Version>) {
        self.push(Constraint::new(Operator::GreaterThanOrEqual, partial.floor()));
        if let Some(upper) = upper {
            self.push(Constraint::new(Operator::LessThan, upper));
        }
    }

    /// Parse a whitespace-separated list of comparators.
    ///
    /// Returns `None` when a token cannot be understood, or when a branch made
    /// only of bare versions contains no digits at all.
    pub(crate) fn parse(branch: &str) -> Option<Self> {
        let normalized = OPERATOR_SPACE_RE.replace_all(branch.trim(), "$1");
        let mut multi = MultiConstraint::default();
        let mut has_operator = false;
        let mut unparsed_bare = false;

        for token in normalized.split_whitespace() {
            let (prefix, operand) = split_operator(token);
            if let Prefix::Bare = prefix {
                match Partial::parse(operand) {
                    Some(partial) => multi.push_x_range(&partial).ok()?,
                    None => unparsed_bare = true,
                }
                continue;
            }

            has_operator = true;
            let partial = Partial::parse(operand)?;
            match prefix {
                Prefix::Comparison(operator) => multi.push(Constraint::new(operator, partial.floor())),
                Prefix::Equal => multi.push_x_range(&partial).ok()?,
                Prefix::Caret => {
                    let upper = partial.caret_upper().ok()?;
                    multi.push_with_upper(&partial, upper);
                }
                Prefix::Tilde => {
                    let upper = partial.tilde_upper().ok()?;
                    multi.push_with_upper(&partial, upper);
                }
                Prefix::Bare => {}
            }
        }

        if has_operator {
            return if unparsed_bare { None } else { Some(multi) };
        }

        // Bare versions only: the minimum is whatever coerce finds
        let coerced = coerce(branch)?;
        if unparsed_bare {
            multi.lower = vec![Constraint::new(Operator::Equal, coerced.clone())];
            multi.upper.clear();
        }
        multi.fixed_minimum = Some(coerced);
        Some(multi)
    }

    /// Build the `A - B` form. `A` is inclusive; `B` is inclusive when it is a
    /// full version, otherwise everything below its next x-range.
    pub(crate) fn hyphen(from: &str, to: &str) -> Option<Self> {
        let start = Partial::parse(from)?;
        let end = Partial::parse(to)?;

        let mut multi = MultiConstraint::default();
        multi.push(Constraint::new(Operator::GreaterThanOrEqual, start.floor()));
        if end.is_full() {
            multi.push(Constraint::new(Operator::LessThanOrEqual, end.floor()));
        } else if let Some(upper) = end.x_range_upper().ok()? {
            multi.push(Constraint::new(Operator::LessThan, upper));
        }
        multi.fixed_minimum = Some(coerce(from)?);
        Some(multi)
    }

    fn constraints(&self) -> impl Iterator<Item = &Constraint> {
        self.lower.iter().chain(self.upper.iter())
    }

    /// Greatest lower bound, where `>v` counts as the next patch after `v`
    fn floor(&self) -> Option<Version> {
        let mut candidate: Option<Version> = None;
        for constraint in &self.lower {
            let floor = match constraint.operator() {
                Operator::GreaterThan => inc(constraint.version(), ReleaseType::Patch).ok()?,
                _ => constraint.version().clone(),
            };
            if candidate.as_ref().map_or(true, |current| floor > *current) {
                candidate = Some(floor);
            }
        }
        Some(candidate.unwrap_or_else(Version::zero))
    }
}

fn is_zero_release(version: &Version) -> bool {
    !version.is_prerelease() && version.release() == Version::zero()
}

fn is_zero_pre_release(version: &Version) -> bool {
    version.is_prerelease() && version.release() == Version::zero()
}

impl ConstraintInterface for MultiConstraint {
    fn matches(&self, version: &Version) -> bool {
        self.constraints().all(|constraint| constraint.matches(version))
    }

    fn minimum(&self) -> Option<Version> {
        if let Some(fixed) = &self.fixed_minimum {
            return Some(fixed.clone());
        }

        let mut candidate = self.floor()?;

        // Nothing at or above 0.0.0 fits below 0.0.0-pre; the lowest
        // pre-release does.
        let below_zero = self.upper.iter().any(|constraint| {
            constraint.operator() == Operator::LessThan && is_zero_pre_release(constraint.version())
        });
        if below_zero && is_zero_release(&candidate) {
            candidate = Version::from_parts("0", "0", "0", Some("0".to_string()), None);
        }

        if !self.matches(&candidate) {
            trace!("range {} has no minimum, {} is out of bounds", self, candidate);
            return None;
        }

        trace!("range {} resolves to {}", self, candidate);
        Some(candidate)
    }

    fn pretty_string(&self) -> String {
        self.pretty_string.clone().unwrap_or_else(|| self.to_string())
    }

    fn set_pretty_string(&mut self, pretty: Option<String>) {
        self.pretty_string = pretty;
    }

    fn clone_box(&self) -> Box<dyn ConstraintInterface> {
        Box::new(self.clone())
    }
}

impl fmt::Display for MultiConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.constraints().map(|c| c.to_string()).collect();
        if parts.is_empty() {
            return write!(f, "*");
        }
        write!(f, "{}", parts.join(" "))
    }
}
