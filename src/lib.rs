pub mod board;
pub mod cli;

pub use board::{select_move, select_move_with, Board, Mark, Outcome, SearchParams};
