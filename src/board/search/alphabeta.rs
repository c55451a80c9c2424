//! Minimax recursion with alpha-beta pruning.

use super::constants::{DRAW_SCORE, INFINITY, WIN_SCORE};
use super::SearchParams;
use crate::board::state::{Board, CELL_COUNT};
use crate::board::types::{Mark, Outcome};

/// Context threaded through one selector invocation
pub(crate) struct SearchContext<'a> {
    pub(crate) params: &'a SearchParams,
    pub(crate) nodes: u64,
}

impl SearchContext<'_> {
    /// Depth-bounded minimax over the remaining empty cells.
    ///
    /// `maximizing` is true when the engine chooses at this node, false
    /// for the human's simulated reply. Decided positions return the
    /// exact terminal score; positions cut off by the depth bound return
    /// the heuristic. Candidate cells are tried in ascending index order
    /// and a branch is abandoned as soon as `beta <= alpha`.
    pub(crate) fn alphabeta(
        &mut self,
        board: &mut Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes += 1;

        match board.outcome() {
            Outcome::Win(mark) => return mark.sign() * WIN_SCORE,
            Outcome::Draw => return DRAW_SCORE,
            Outcome::Ongoing => {}
        }
        if depth >= self.params.max_depth {
            return board.evaluate();
        }

        if maximizing {
            let mut best = -INFINITY;
            for index in 0..CELL_COUNT {
                if !board.is_empty_cell(index) {
                    continue;
                }
                let score = board.with_mark(index, Mark::Ai, |b| {
                    self.alphabeta(b, depth + 1, alpha, beta, false)
                });
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = INFINITY;
            for index in 0..CELL_COUNT {
                if !board.is_empty_cell(index) {
                    continue;
                }
                let score = board.with_mark(index, Mark::Human, |b| {
                    self.alphabeta(b, depth + 1, alpha, beta, true)
                });
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}
