//! Display rank of seniority levels.
//!
//! The rank only orders roles for presentation; it never decides what a
//! user is eligible for.

use fedip_model::Level;

/// Rank of a parsed level (0 = most junior).
pub fn level_rank(level: Level) -> usize {
    level.rank()
}

/// Rank of a level given as its token text.
///
/// The token must match exactly; anything else ranks as the base tier.
pub fn rank_token(token: &str) -> usize {
    Level::ALL
        .into_iter()
        .find(|level| level.as_str() == token)
        .unwrap_or(Level::Base)
        .rank()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tokens_rank_by_position() {
        assert_eq!(rank_token("Trainee"), 0);
        assert_eq!(rank_token(""), 4);
        assert_eq!(rank_token("Manager"), 9);
        assert_eq!(rank_token("Assistant Director of"), 11);
        assert_eq!(rank_token("CXIO"), 14);
    }

    #[test]
    fn unknown_tokens_rank_as_base() {
        assert_eq!(rank_token("Overlord"), rank_token(""));
        assert_eq!(rank_token("senior"), level_rank(Level::Base));
    }
}
