//! Constraint interface trait

use crate::Version;

/// Trait for the branches of a parsed range
pub trait ConstraintInterface: std::fmt::Debug + std::fmt::Display + Send + Sync {
    /// Check if `version` satisfies this constraint
    fn matches(&self, version: &Version) -> bool;

    /// Lowest version satisfying this constraint, if any
    fn minimum(&self) -> Option<Version>;

    /// Get the pretty string representation
    fn pretty_string(&self) -> String;

    /// Set the pretty string representation
    fn set_pretty_string(&mut self, pretty: Option<String>);

    /// Clone this constraint into a boxed trait object
    fn clone_box(&self) -> Box<dyn ConstraintInterface>;

    /// Check if this is a MatchAllConstraint
    fn is_match_all(&self) -> bool {
        false
    }

    /// Check if this is a MatchNoneConstraint
    fn is_match_none(&self) -> bool {
        false
    }
}

impl Clone for Box<dyn ConstraintInterface> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
