//! The eight winning lines and their derived occupancy masks.

use once_cell::sync::Lazy;

/// The 8 index triples that win the game: three rows, three columns,
/// two diagonals. Row-major cell indexing, 0 at the top-left.
pub(crate) const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Per-line occupancy bitmasks derived from [`LINES`]. A mark owns a line
/// iff its occupancy mask contains the line mask.
pub(crate) static LINE_MASKS: Lazy<[u16; 8]> = Lazy::new(|| {
    let mut masks = [0u16; 8];
    for (mask, line) in masks.iter_mut().zip(LINES.iter()) {
        for &cell in line {
            *mask |= 1 << cell;
        }
    }
    masks
});
