//! Compact board notation parsing and rendering.
//!
//! A position is written as 9 cell characters in row-major order:
//! `x`, `o`, or `.` (a space is also accepted for an empty cell), e.g.
//! `"xx..o...."` for a board with `x` on cells 0 and 1 and `o` on 4.

use std::fmt;
use std::str::FromStr;

use super::error::BoardParseError;
use super::state::{Board, CELL_COUNT};
use super::types::Mark;

impl Board {
    /// Render the position as compact 9-character notation
    #[must_use]
    pub fn to_marks(&self) -> String {
        (0..CELL_COUNT)
            .map(|i| self.mark_at(i).map_or('.', Mark::to_char))
            .collect()
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != CELL_COUNT {
            return Err(BoardParseError::InvalidLength { len: chars.len() });
        }

        let mut board = Board::new();
        for (index, &c) in chars.iter().enumerate() {
            match c {
                '.' | ' ' => {}
                _ => match Mark::from_char(c) {
                    Some(mark) => board.place(index, mark),
                    None => return Err(BoardParseError::InvalidCell { char: c, index }),
                },
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f, "---+---+---")?;
            }
            let cell = |i: usize| self.mark_at(i).map_or(' ', Mark::to_char);
            writeln!(
                f,
                " {} | {} | {} ",
                cell(row * 3),
                cell(row * 3 + 1),
                cell(row * 3 + 2)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardParseError;

    #[test]
    fn parses_marks_and_blanks() {
        let board: Board = "xx..o....".parse().unwrap();
        assert_eq!(board.mark_at(0), Some(Mark::Human));
        assert_eq!(board.mark_at(1), Some(Mark::Human));
        assert_eq!(board.mark_at(4), Some(Mark::Ai));
        assert_eq!(board.mark_at(2), None);
    }

    #[test]
    fn accepts_spaces_for_empty_cells() {
        let dotted: Board = "x...o...x".parse().unwrap();
        let spaced: Board = "x   o   x".parse().unwrap();
        assert_eq!(dotted, spaced);
    }

    #[test]
    fn rejects_wrong_length() {
        let err = "xx".parse::<Board>().unwrap_err();
        assert_eq!(err, BoardParseError::InvalidLength { len: 2 });
    }

    #[test]
    fn rejects_unknown_cell_character() {
        let err = "xx..q....".parse::<Board>().unwrap_err();
        assert_eq!(err, BoardParseError::InvalidCell { char: 'q', index: 4 });
    }

    #[test]
    fn to_marks_round_trips() {
        let notation = "xo..x..ox";
        let board: Board = notation.parse().unwrap();
        assert_eq!(board.to_marks(), notation);
    }

    #[test]
    fn display_renders_grid() {
        let board: Board = "x...o...x".parse().unwrap();
        let grid = board.to_string();
        assert!(grid.contains(" x |   |   "));
        assert!(grid.contains("   | o |   "));
        assert!(grid.contains("---+---+---"));
    }
}
