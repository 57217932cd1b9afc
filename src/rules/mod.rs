//! Rule table
//!
//! The rule table maps exact transaction descriptions to a known category.
//! It is built once from already-parsed rows and is read-only afterwards.

pub mod loader;

use std::collections::HashSet;
use std::fmt;

use crate::error::{ReimburseError, ReimburseResult};
use crate::models::Tag;

pub use loader::{load_rules, parse_rules};

/// Category a rule can assign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleCategory {
    Joint,
    Personal,
}

impl RuleCategory {
    /// Parse the category column ("joint"/"personal", any case)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "joint" => Some(Self::Joint),
            "personal" => Some(Self::Personal),
            _ => None,
        }
    }

    /// The tag a matching transaction receives
    pub fn tag(&self) -> Tag {
        match self {
            Self::Joint => Tag::Joint,
            Self::Personal => Tag::Personal,
        }
    }
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Joint => write!(f, "joint"),
            Self::Personal => write!(f, "personal"),
        }
    }
}

/// One row of the rule table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleRow {
    pub category: RuleCategory,
    pub description: String,
}

impl RuleRow {
    pub fn new(category: RuleCategory, description: impl Into<String>) -> Self {
        Self {
            category,
            description: description.into(),
        }
    }
}

/// Description lookup table with disjoint joint and personal sets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    joint: HashSet<String>,
    personal: HashSet<String>,
}

impl RuleSet {
    /// Build a rule set from rows in source order
    ///
    /// # Errors
    ///
    /// Returns [`ReimburseError::ConflictingRule`] if a description appears
    /// under both categories.
    pub fn from_rows<I>(rows: I) -> ReimburseResult<Self>
    where
        I: IntoIterator<Item = RuleRow>,
    {
        let mut rules = Self::default();

        for row in rows {
            let (own, other) = match row.category {
                RuleCategory::Joint => (&mut rules.joint, &rules.personal),
                RuleCategory::Personal => (&mut rules.personal, &rules.joint),
            };
            if other.contains(&row.description) {
                return Err(ReimburseError::conflicting_rule(row.description));
            }
            own.insert(row.description);
        }

        log::debug!(
            "Built rule set: {} joint, {} personal",
            rules.joint.len(),
            rules.personal.len()
        );
        Ok(rules)
    }

    /// Category for an exact description match
    pub fn lookup(&self, description: &str) -> Option<RuleCategory> {
        if self.joint.contains(description) {
            Some(RuleCategory::Joint)
        } else if self.personal.contains(description) {
            Some(RuleCategory::Personal)
        } else {
            None
        }
    }

    pub fn joint_count(&self) -> usize {
        self.joint.len()
    }

    pub fn personal_count(&self) -> usize {
        self.personal.len()
    }

    pub fn is_empty(&self) -> bool {
        self.joint.is_empty() && self.personal.is_empty()
    }
}
