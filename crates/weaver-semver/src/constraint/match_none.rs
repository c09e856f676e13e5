//! MatchNoneConstraint - matches no version

use std::fmt;

use super::ConstraintInterface;
use crate::Version;

/// A constraint that never matches, used for branches that fail to parse
#[derive(Debug, Clone)]
pub struct MatchNoneConstraint {
    pretty_string: Option<String>,
}

impl MatchNoneConstraint {
    /// Create a new MatchNoneConstraint
    pub fn new() -> Self {
        MatchNoneConstraint {
            pretty_string: None,
        }
    }
}

impl Default for MatchNoneConstraint {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstraintInterface for MatchNoneConstraint {
    fn matches(&self, _version: &Version) -> bool {
        false
    }

    fn minimum(&self) -> Option<Version> {
        None
    }

    fn pretty_string(&self) -> String {
        self.pretty_string.clone().unwrap_or_else(|| "[]".to_string())
    }

    fn set_pretty_string(&mut self, pretty: Option<String>) {
        self.pretty_string = pretty;
    }

    fn clone_box(&self) -> Box<dyn ConstraintInterface> {
        Box::new(self.clone())
    }

    fn is_match_none(&self) -> bool {
        true
    }
}

impl fmt::Display for MatchNoneConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[]")
    }
}
