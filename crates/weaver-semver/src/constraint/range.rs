//! Range - disjunction of constraint branches separated by `||`

use std::fmt;

use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;
use thiserror::Error;

use super::partial::Partial;
use super::{ConstraintInterface, MatchAllConstraint, MatchNoneConstraint, MultiConstraint};
use crate::Version;

lazy_static! {
    static ref OR_RE: Regex = Regex::new(r"\s*\|\|\s*").unwrap();
    static ref HYPHEN_RE: Regex = Regex::new(r"^([0-9]+(?:\.[0-9]+){0,2})\s+-\s+([0-9]+(?:\.[0-9]+){0,2})$").unwrap();
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("Range expression is empty")]
    Empty,
}

/// A parsed range expression
#[derive(Debug, Clone)]
pub struct Range {
    constraints: Vec<Box<dyn ConstraintInterface>>,
    pretty_string: String,
}

impl Range {
    /// Parse a range expression.
    ///
    /// Branches that cannot be understood become [`MatchNoneConstraint`]
    /// instead of failing the whole range.
    pub fn parse(input: &str) -> Result<Self, RangeError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(RangeError::Empty);
        }

        if trimmed == "*" {
            return Ok(Range {
                constraints: vec![Box::new(MatchAllConstraint::new())],
                pretty_string: input.to_string(),
            });
        }

        let constraints = OR_RE
            .split(trimmed)
            .map(|branch| {
                let mut constraint = Self::parse_branch(branch);
                constraint.set_pretty_string(Some(branch.to_string()));
                constraint
            })
            .collect();

        Ok(Range {
            constraints,
            pretty_string: input.to_string(),
        })
    }

    fn parse_branch(branch: &str) -> Box<dyn ConstraintInterface> {
        let branch = branch.trim();
        if branch.is_empty() {
            debug!("Empty range branch");
            return Box::new(MatchNoneConstraint::new());
        }

        let wildcard_only = branch
            .split_whitespace()
            .all(|token| Partial::parse(token).map_or(false, |partial| partial.is_any()));
        if wildcard_only {
            return Box::new(MatchAllConstraint::new());
        }

        let parsed = match HYPHEN_RE.captures(branch) {
            Some(caps) => MultiConstraint::hyphen(&caps[1], &caps[2]),
            None => MultiConstraint::parse(branch),
        };

        match parsed {
            Some(multi) => Box::new(multi),
            None => {
                debug!("Unable to parse range branch \"{}\"", branch);
                Box::new(MatchNoneConstraint::new())
            }
        }
    }

    /// The branches of this range
    pub fn constraints(&self) -> &[Box<dyn ConstraintInterface>] {
        &self.constraints
    }

    /// The input this range was parsed from
    pub fn pretty_string(&self) -> &str {
        &self.pretty_string
    }

    /// Lowest version any branch admits. Ties keep the earliest branch.
    pub fn minimum(&self) -> Option<Version> {
        let mut best: Option<Version> = None;
        for constraint in &self.constraints {
            let Some(candidate) = constraint.minimum() else {
                continue;
            };
            trace!("branch \"{}\" minimum {}", constraint.pretty_string(), candidate);
            if best.as_ref().map_or(true, |current| candidate < *current) {
                best = Some(candidate);
            }
        }
        best
    }

    /// Check if any branch admits `version`
    pub fn matches(&self, version: &Version) -> bool {
        self.constraints.iter().any(|constraint| constraint.matches(version))
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let branches: Vec<String> = self.constraints.iter().map(|c| c.to_string()).collect();
        write!(f, "{}", branches.join(" || "))
    }
}
