//! Search constants and score weights.

// ============================================================================
// TERMINAL SCORES
// ============================================================================

/// Exact score for a decided win, as reported by the terminal detector.
/// Dominates any heuristic score (those are bounded by 8 * `LINE_WEIGHT`).
pub(crate) const WIN_SCORE: i32 = 1000;

/// Exact score for a drawn board
pub(crate) const DRAW_SCORE: i32 = 0;

// ============================================================================
// HEURISTIC WEIGHTS
// ============================================================================

/// Weight of a line fully owned by one side
pub(crate) const LINE_WEIGHT: i32 = 100;

/// Weight of a single mark on a contested line
pub(crate) const MARK_WEIGHT: i32 = 10;

// ============================================================================
// SEARCH LIMITS
// ============================================================================

/// Default depth bound: the full 9-ply game tree
pub const MAX_DEPTH: u32 = 9;

/// Alpha-beta window bound
pub(crate) const INFINITY: i32 = i32::MAX;
