//! Move selection for the engine side.
//!
//! Implements depth-bounded minimax with alpha-beta pruning over the
//! 9-cell game tree, with a heuristic evaluation for positions the depth
//! bound cuts off before they are decided. No transposition table and no
//! move ordering beyond ascending cell index; the tree is small enough
//! that pruning alone keeps the worst case cheap.
//!
//! Ties between equally scored moves go to the lowest cell index: the
//! best-move update uses a strict comparison, so a later candidate never
//! replaces an earlier one with the same score. Selection is fully
//! deterministic.

mod alphabeta;
pub(crate) mod constants;

use alphabeta::SearchContext;
use constants::INFINITY;
pub use constants::MAX_DEPTH;

use super::error::SearchError;
use super::state::{Board, CELL_COUNT};
use super::types::Mark;

/// Depth-bound configuration for move selection
#[derive(Clone, Debug)]
pub struct SearchParams {
    /// Maximum ply depth, counted from the selector invocation; the
    /// root's children are searched at depth 1. The heuristic is only
    /// reachable when this is less than the number of empty cells.
    pub max_depth: u32,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            max_depth: MAX_DEPTH,
        }
    }
}

/// Result of a completed move selection
#[derive(Debug, Clone, Copy)]
pub struct SearchReport {
    /// The chosen cell index
    pub index: usize,
    /// Minimax score of the chosen move
    pub score: i32,
    /// Nodes visited, after pruning
    pub nodes: u64,
}

/// Pick the engine's move on `board` with the default full-depth bound.
///
/// The board must be undecided with at least one empty cell, and it must
/// be the engine's turn. The board is left exactly as passed in; the
/// caller applies the returned index itself.
pub fn select_move(board: &mut Board) -> Result<usize, SearchError> {
    select_move_with(board, &SearchParams::default()).map(|report| report.index)
}

/// Pick the engine's move with an explicit depth bound.
pub fn select_move_with(board: &mut Board, params: &SearchParams) -> Result<SearchReport, SearchError> {
    let outcome = board.outcome();
    if outcome.is_decided() {
        return Err(SearchError::GameOver { outcome });
    }

    let before = *board;
    let mut ctx = SearchContext { params, nodes: 0 };
    let mut alpha = -INFINITY;
    let mut best_score = -INFINITY;
    let mut best_index = None;

    for index in 0..CELL_COUNT {
        if !board.is_empty_cell(index) {
            continue;
        }
        let score = board.with_mark(index, Mark::Ai, |b| ctx.alphabeta(b, 1, alpha, INFINITY, false));
        if score > best_score {
            best_score = score;
            best_index = Some(index);
        }
        alpha = alpha.max(best_score);
    }

    debug_assert_eq!(*board, before);

    match best_index {
        Some(index) => {
            #[cfg(feature = "logging")]
            log::debug!(
                "selected cell {index} score {best_score} nodes {nodes}",
                nodes = ctx.nodes
            );
            Ok(SearchReport {
                index,
                score: best_score,
                nodes: ctx.nodes,
            })
        }
        // Unreachable: an ongoing board has at least one empty cell.
        None => Err(SearchError::GameOver { outcome }),
    }
}
