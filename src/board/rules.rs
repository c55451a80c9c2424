//! Terminal-state detection.

use super::state::{Board, FULL_MASK};
use super::types::{Mark, Outcome};
use super::LINE_MASKS;

impl Board {
    /// Returns true if `mark` owns any complete line
    #[must_use]
    pub fn has_line(&self, mark: Mark) -> bool {
        let occupancy = self.marks[mark.index()];
        LINE_MASKS.iter().any(|&line| occupancy & line == line)
    }

    /// Returns true if no cell is empty
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.occupied() == FULL_MASK
    }

    /// Classify the position.
    ///
    /// The engine's line is checked before the human's; a board with
    /// lines for both sides is unreachable under legal play, but the
    /// precedence keeps the detector deterministic regardless.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        if self.has_line(Mark::Ai) {
            Outcome::Win(Mark::Ai)
        } else if self.has_line(Mark::Human) {
            Outcome::Win(Mark::Human)
        } else if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::Ongoing
        }
    }
}
