use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Number of positions inspected on each side of a keyword occurrence.
pub const WINDOW_SIZE: usize = 4;

// Negation particles of the source language act as prefix triggers:
// "nicht", "nicht_mehr", "kein", "keineswegs", "niemals", "unschön" all
// mark their lemma as negated.
static NEGATION_TRIGGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:nicht|kein|nie|un)").unwrap());

/// A lemma captured near a keyword occurrence, with the features that
/// drive its contribution to the window score. Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextToken {
    lemma: String,
    distance_weight: i32,
    negated: bool,
    emphasized: bool,
}

impl ContextToken {
    /// Builds a token from its lemma and signed offset to the keyword
    /// (negative when positioned before it, positive after). Window
    /// extraction never visits offsets beyond [`WINDOW_SIZE`], so the
    /// weight is always in `1..=WINDOW_SIZE`.
    pub fn new(lemma: impl Into<String>, offset: isize) -> Self {
        let lemma = lemma.into();
        let negated = NEGATION_TRIGGER.is_match(&lemma);
        let emphasized = lemma.starts_with('#');

        Self {
            lemma,
            distance_weight: offset_to_weight(offset),
            negated,
            emphasized,
        }
    }

    pub fn lemma(&self) -> &str {
        &self.lemma
    }

    pub fn distance_weight(&self) -> i32 {
        self.distance_weight
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    pub fn is_emphasized(&self) -> bool {
        self.emphasized
    }
}

/// Proximity weight: `WINDOW_SIZE` for the adjacent positions, falling
/// linearly to 1 at the window edge.
fn offset_to_weight(offset: isize) -> i32 {
    let distance = offset.unsigned_abs() as i32;
    WINDOW_SIZE as i32 - (distance - 1).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_is_symmetric_and_non_increasing() {
        for (offset, expected) in [(1, 4), (2, 3), (3, 2), (4, 1)] {
            assert_eq!(ContextToken::new("x", offset).distance_weight(), expected);
            assert_eq!(ContextToken::new("x", -offset).distance_weight(), expected);
        }
    }

    #[test]
    fn test_negation_trigger_prefixes() {
        for lemma in ["nicht", "nicht_gut", "kein", "keineswegs", "niemals", "unzufrieden"] {
            assert!(ContextToken::new(lemma, 1).is_negated(), "{} should negate", lemma);
        }
        for lemma in ["gut", "schlecht", "einkaufen", "knie"] {
            assert!(!ContextToken::new(lemma, 1).is_negated(), "{} should not negate", lemma);
        }
    }

    #[test]
    fn test_hashtag_marks_emphasis() {
        assert!(ContextToken::new("#merkel", 1).is_emphasized());
        assert!(!ContextToken::new("merkel", 1).is_emphasized());
    }
}
