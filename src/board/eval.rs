//! Heuristic position evaluation.

use super::search::constants::{LINE_WEIGHT, MARK_WEIGHT};
use super::state::Board;
use super::LINES;

impl Board {
    /// Score the position for the engine: positive favors the engine,
    /// negative the human.
    ///
    /// Per line: a line fully owned by one side scores the full line
    /// weight; otherwise each marked cell on the line contributes the
    /// single-mark weight. Cells shared between lines count once per
    /// line, so central cells weigh more than edge cells. Only consulted
    /// when the depth bound cuts the search off before a decided
    /// position; the double counting determines move ordering there and
    /// must stay as is.
    #[must_use]
    pub(crate) fn evaluate(&self) -> i32 {
        let mut score = 0;
        for line in &LINES {
            let marks = [self.mark_at(line[0]), self.mark_at(line[1]), self.mark_at(line[2])];
            match marks {
                [Some(a), Some(b), Some(c)] if a == b && b == c => {
                    score += a.sign() * LINE_WEIGHT;
                }
                _ => {
                    for mark in marks.into_iter().flatten() {
                        score += mark.sign() * MARK_WEIGHT;
                    }
                }
            }
        }
        score
    }
}
