//! Role-title parser.
//!
//! A title is classified by an ordered list of rules; the first rule that
//! matches decides the level and the base. Matching is case-insensitive and
//! never fails: a title no rule recognises is a base-tier role.
//!
//! Rule order:
//!
//! 1. One prefix rule per level token, in the order of [`PREFIX_ORDER`]. Each
//!    matches `^<token>\b\s*` and removes the token from the base.
//! 2. At Chief's position in that order sits the dedicated Chief rule
//!    (`^Chief\s+(.+)$`). It keeps "Chief" in the base, so Chief titles form
//!    their own buckets apart from the same suffix without "Chief".
//! 3. An introducer rule for "Head of", "Assistant Director of" and
//!    "Director of" followed by whitespace and a remainder. Inner spacing must
//!    be a single space; "Head  of X" is a base-tier title.
//!
//! A trailing " - Management" is dropped before any rule runs. Parenthetical
//! specialisations such as "(Operations)" are left in the base.

use std::borrow::Cow;
use std::sync::LazyLock;

use fedip_model::{Level, ParsedRole};
use regex::Regex;

/// Prefix tokens in match order.
///
/// "Assistant Director of" precedes "Director of" so the longer introducer
/// wins.
pub const PREFIX_ORDER: [Level; 13] = [
    Level::Trainee,
    Level::Apprentice,
    Level::Associate,
    Level::Junior,
    Level::Senior,
    Level::Lead,
    Level::Principal,
    Level::HeadOf,
    Level::AssistantDirectorOf,
    Level::DirectorOf,
    Level::Chief,
    Level::Qualified,
    Level::Cxio,
];

static MANAGEMENT_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+-\s*Management$").expect("Invalid suffix regex"));

static ROLE_RULES: LazyLock<Vec<RoleRule>> = LazyLock::new(build_rules);

enum RoleRule {
    /// Strips the level token from the base.
    Prefix { level: Level, pattern: Regex },
    /// Tags the title as Chief but keeps the token in the base.
    Chief { pattern: Regex },
    /// Introducer phrases followed by a remainder.
    Introducer { pattern: Regex },
}

impl RoleRule {
    fn apply(&self, title: &str) -> Option<ParsedRole> {
        match self {
            Self::Prefix { level, pattern } => {
                let matched = pattern.find(title)?;
                Some(ParsedRole::new(*level, title[matched.end()..].trim()))
            }
            Self::Chief { pattern } => {
                let caps = pattern.captures(title)?;
                Some(ParsedRole::new(Level::Chief, format!("Chief {}", &caps[1])))
            }
            Self::Introducer { pattern } => {
                let caps = pattern.captures(title)?;
                let level = Level::from_token(&caps[1])?;
                Some(ParsedRole::new(level, caps[2].trim()))
            }
        }
    }
}

fn build_rules() -> Vec<RoleRule> {
    let mut rules: Vec<RoleRule> = PREFIX_ORDER
        .iter()
        .map(|&level| match level {
            Level::Chief => RoleRule::Chief {
                pattern: Regex::new(r"(?i)^Chief\s+(.+)$").expect("Invalid Chief regex"),
            },
            _ => RoleRule::Prefix {
                level,
                pattern: Regex::new(&format!(r"(?i)^{}\b\s*", regex::escape(level.as_str())))
                    .expect("Invalid prefix regex"),
            },
        })
        .collect();
    rules.push(RoleRule::Introducer {
        pattern: Regex::new(r"(?i)^(Head of|Assistant Director of|Director of)\s+(.+)$")
            .expect("Invalid introducer regex"),
    });
    rules
}

/// Trims a title and drops a trailing " - Management".
pub fn strip_management_suffix(raw: &str) -> Cow<'_, str> {
    MANAGEMENT_SUFFIX.replace(raw.trim(), "")
}

/// Splits role titles into level and base.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleParser;

impl RoleParser {
    pub fn new() -> Self {
        Self
    }

    /// Classifies a single title. Total: every input yields a `ParsedRole`.
    pub fn parse(&self, raw: &str) -> ParsedRole {
        let title = strip_management_suffix(raw);
        ROLE_RULES
            .iter()
            .find_map(|rule| rule.apply(&title))
            .unwrap_or_else(|| ParsedRole::base_tier(title.into_owned()))
    }

    pub fn parse_all<S: AsRef<str>>(&self, titles: &[S]) -> Vec<ParsedRole> {
        titles.iter().map(|t| self.parse(t.as_ref())).collect()
    }
}

/// Shorthand for `RoleParser::new().parse(raw)`.
pub fn parse_role(raw: &str) -> ParsedRole {
    RoleParser::new().parse(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(raw: &str) -> (Level, String) {
        let role = parse_role(raw);
        (role.level, role.base)
    }

    #[test]
    fn prefix_tokens_are_stripped() {
        assert_eq!(
            parsed("Senior Data Analyst"),
            (Level::Senior, "Data Analyst".to_string())
        );
        assert_eq!(
            parsed("  trainee   Clinical Scientist "),
            (Level::Trainee, "Clinical Scientist".to_string())
        );
        assert_eq!(parsed("CXIO"), (Level::Cxio, String::new()));
    }

    #[test]
    fn word_boundary_is_required() {
        assert_eq!(
            parsed("Leadership Coach"),
            (Level::Base, "Leadership Coach".to_string())
        );
        assert_eq!(
            parsed("Seniority Analyst"),
            (Level::Base, "Seniority Analyst".to_string())
        );
    }

    #[test]
    fn management_suffix_is_dropped() {
        assert_eq!(
            parsed("Head of Digital - Management"),
            (Level::HeadOf, "Digital".to_string())
        );
        assert_eq!(
            parsed("Programme Manager -management"),
            (Level::Base, "Programme Manager".to_string())
        );
        // No space before the dash: not the suffix.
        assert_eq!(
            parsed("Data-Management"),
            (Level::Base, "Data-Management".to_string())
        );
    }

    #[test]
    fn parentheticals_stay_in_base() {
        assert_eq!(
            parsed("Lead Analyst (Operations)"),
            (Level::Lead, "Analyst (Operations)".to_string())
        );
    }

    #[test]
    fn irregular_introducer_spacing_is_base_tier() {
        assert_eq!(
            parsed("Head  of Nursing"),
            (Level::Base, "Head  of Nursing".to_string())
        );
        assert_eq!(
            parsed("assistant\tdirector of Platforms"),
            (Level::Base, "assistant\tdirector of Platforms".to_string())
        );
        assert_eq!(
            parsed("director of\tPlatforms"),
            (Level::DirectorOf, "Platforms".to_string())
        );
    }

    #[test]
    fn chief_keeps_its_token() {
        assert_eq!(
            parsed("chief nursing information officer"),
            (Level::Chief, "Chief nursing information officer".to_string())
        );
        // Bare "Chief" does not satisfy the Chief rule.
        assert_eq!(parsed("Chief"), (Level::Base, "Chief".to_string()));
    }
}
