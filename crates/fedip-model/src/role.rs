use serde::{Deserialize, Serialize};

use crate::level::Level;

/// A role title split into its seniority level and base role.
///
/// Titles that share a `base` belong to the same sub-bucket when a flat
/// family is grouped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedRole {
    pub level: Level,
    pub base: String,
}

impl ParsedRole {
    pub fn new(level: Level, base: impl Into<String>) -> Self {
        Self {
            level,
            base: base.into(),
        }
    }

    /// A base-tier role (no recognised prefix).
    pub fn base_tier(base: impl Into<String>) -> Self {
        Self::new(Level::Base, base)
    }
}
