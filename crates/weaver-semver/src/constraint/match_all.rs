//! MatchAllConstraint - matches any version

use std::fmt;

use super::ConstraintInterface;
use crate::Version;

/// A constraint that matches any version
#[derive(Debug, Clone)]
pub struct MatchAllConstraint {
    pretty_string: Option<String>,
}

impl MatchAllConstraint {
    /// Create a new MatchAllConstraint
    pub fn new() -> Self {
        MatchAllConstraint {
            pretty_string: None,
        }
    }
}

impl Default for MatchAllConstraint {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstraintInterface for MatchAllConstraint {
    fn matches(&self, _version: &Version) -> bool {
        true
    }

    fn minimum(&self) -> Option<Version> {
        Some(Version::zero())
    }

    fn pretty_string(&self) -> String {
        self.pretty_string.clone().unwrap_or_else(|| "*".to_string())
    }

    fn set_pretty_string(&mut self, pretty: Option<String>) {
        self.pretty_string = pretty;
    }

    fn clone_box(&self) -> Box<dyn ConstraintInterface> {
        Box::new(self.clone())
    }

    fn is_match_all(&self) -> bool {
        true
    }
}

impl fmt::Display for MatchAllConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "*")
    }
}
