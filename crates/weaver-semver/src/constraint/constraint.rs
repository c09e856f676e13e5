//! Single version constraint implementation

use std::fmt;

use super::Operator;
use crate::{Comparator, Version};

/// A single version constraint (e.g., ">=1.0.0")
#[derive(Debug, Clone)]
pub struct Constraint {
    operator: Operator,
    version: Version,
}

impl Constraint {
    /// Create a new constraint
    pub fn new(operator: Operator, version: Version) -> Self {
        Constraint { operator, version }
    }

    /// Get the bound version
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Get the operator
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Check if `candidate` satisfies this constraint
    pub fn matches(&self, candidate: &Version) -> bool {
        match self.operator {
            Operator::Equal => Comparator::equal_to(candidate, &self.version),
            Operator::GreaterThan => Comparator::greater_than(candidate, &self.version),
            Operator::GreaterThanOrEqual => Comparator::greater_than_or_equal_to(candidate, &self.version),
            Operator::LessThan => Comparator::less_than(candidate, &self.version),
            Operator::LessThanOrEqual => Comparator::less_than_or_equal_to(candidate, &self.version),
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator, self.version)
    }
}
