//! Mark and outcome types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The two sides of the game.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Mark {
    /// The human player, rendered as `x`. Moves first.
    Human,
    /// The engine, rendered as `o`.
    Ai,
}

impl Mark {
    /// Both marks in index order (Human=0, Ai=1)
    pub const BOTH: [Mark; 2] = [Mark::Human, Mark::Ai];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Mark::Human => 0,
            Mark::Ai => 1,
        }
    }

    /// Returns the opposing mark
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Mark {
        match self {
            Mark::Human => Mark::Ai,
            Mark::Ai => Mark::Human,
        }
    }

    /// Parse a mark from its board character
    #[must_use]
    pub fn from_char(c: char) -> Option<Mark> {
        match c.to_ascii_lowercase() {
            'x' => Some(Mark::Human),
            'o' => Some(Mark::Ai),
            _ => None,
        }
    }

    /// Convert the mark to its board character (`x` or `o`)
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Mark::Human => 'x',
            Mark::Ai => 'o',
        }
    }

    /// Scoring sign for evaluation (+1 for the engine, -1 for the human)
    #[inline]
    #[must_use]
    pub(crate) const fn sign(self) -> i32 {
        match self {
            Mark::Human => -1,
            Mark::Ai => 1,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Result of terminal-state detection on a board.
///
/// `Win(Mark::Ai)` takes precedence over `Win(Mark::Human)`, and both take
/// precedence over `Draw`; a board that is neither won nor full is `Ongoing`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    /// One side owns a complete line
    Win(Mark),
    /// Board full, no line
    Draw,
    /// Game still in progress
    Ongoing,
}

impl Outcome {
    /// Returns true once the game has ended
    #[inline]
    #[must_use]
    pub const fn is_decided(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win(mark) => write!(f, "Player {mark} wins!"),
            Outcome::Draw => write!(f, "It's a draw!"),
            Outcome::Ongoing => write!(f, "in progress"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_chars_round_trip() {
        for mark in Mark::BOTH {
            assert_eq!(Mark::from_char(mark.to_char()), Some(mark));
        }
        assert_eq!(Mark::from_char('X'), Some(Mark::Human));
        assert_eq!(Mark::from_char('q'), None);
    }

    #[test]
    fn opponent_is_involutive() {
        for mark in Mark::BOTH {
            assert_eq!(mark.opponent().opponent(), mark);
        }
    }

    #[test]
    fn outcome_display_matches_status_text() {
        assert_eq!(Outcome::Win(Mark::Human).to_string(), "Player x wins!");
        assert_eq!(Outcome::Win(Mark::Ai).to_string(), "Player o wins!");
        assert_eq!(Outcome::Draw.to_string(), "It's a draw!");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let json = serde_json::to_string(&Outcome::Win(Mark::Ai)).unwrap();
        let back: Outcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Outcome::Win(Mark::Ai));
    }
}
