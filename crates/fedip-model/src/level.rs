//! Seniority level vocabulary.
//!
//! The variants are declared in display rank order, from the most junior
//! (`Trainee`) to the most senior (`Cxio`), with the unprefixed base tier in
//! between. Derived `Ord` therefore sorts by rank.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// A seniority level recognised in role titles.
///
/// `Manager` is part of the rank order only; no title prefix produces it.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Level {
    Trainee,
    Apprentice,
    Associate,
    Junior,
    /// Unprefixed titles, serialised as the empty string.
    #[default]
    #[serde(rename = "")]
    Base,
    Qualified,
    Senior,
    Lead,
    Principal,
    Manager,
    #[serde(rename = "Head of")]
    HeadOf,
    #[serde(rename = "Assistant Director of")]
    AssistantDirectorOf,
    #[serde(rename = "Director of")]
    DirectorOf,
    Chief,
    #[serde(rename = "CXIO")]
    Cxio,
}

impl Level {
    /// All levels in rank order.
    pub const ALL: [Level; 15] = [
        Level::Trainee,
        Level::Apprentice,
        Level::Associate,
        Level::Junior,
        Level::Base,
        Level::Qualified,
        Level::Senior,
        Level::Lead,
        Level::Principal,
        Level::Manager,
        Level::HeadOf,
        Level::AssistantDirectorOf,
        Level::DirectorOf,
        Level::Chief,
        Level::Cxio,
    ];

    /// The token exactly as it appears at the start of a title.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trainee => "Trainee",
            Self::Apprentice => "Apprentice",
            Self::Associate => "Associate",
            Self::Junior => "Junior",
            Self::Base => "",
            Self::Qualified => "Qualified",
            Self::Senior => "Senior",
            Self::Lead => "Lead",
            Self::Principal => "Principal",
            Self::Manager => "Manager",
            Self::HeadOf => "Head of",
            Self::AssistantDirectorOf => "Assistant Director of",
            Self::DirectorOf => "Director of",
            Self::Chief => "Chief",
            Self::Cxio => "CXIO",
        }
    }

    /// Position in the rank order (0 = most junior).
    #[must_use]
    pub fn rank(self) -> usize {
        self as usize
    }

    /// Resolves a token case-insensitively, collapsing inner whitespace.
    ///
    /// The empty string resolves to [`Level::Base`].
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        let collapsed = token.split_whitespace().collect::<Vec<_>>().join(" ");
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(&collapsed))
    }

    #[must_use]
    pub fn is_base(self) -> bool {
        self == Self::Base
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| ModelError::UnknownLevel(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declaration_order_is_rank_order() {
        for (idx, level) in Level::ALL.iter().enumerate() {
            assert_eq!(level.rank(), idx);
        }
        assert!(Level::Junior < Level::Base);
        assert!(Level::Base < Level::Qualified);
        assert!(Level::AssistantDirectorOf < Level::DirectorOf);
    }

    #[test]
    fn tokens_resolve_case_insensitively() {
        assert_eq!(Level::from_token("head  OF"), Some(Level::HeadOf));
        assert_eq!(Level::from_token("cxio"), Some(Level::Cxio));
        assert_eq!(Level::from_token(""), Some(Level::Base));
        assert_eq!(Level::from_token("Overlord"), None);
        assert!("Overlord".parse::<Level>().is_err());
    }
}
