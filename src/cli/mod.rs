//! Interactive terminal front end.
//!
//! Owns the live board and drives play: the human enters a cell index,
//! the engine answers after a short thinking pause. This layer renders
//! state and applies moves; move choice itself lives in [`crate::board`].

use std::fmt::Write as _;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use crate::board::{select_move_with, Board, Mark, SearchParams};

/// Pause before the engine replies so the human's own move is visible
/// first. Presentation only; the chosen move does not depend on it.
const AI_MOVE_DELAY: Duration = Duration::from_millis(500);

/// A parsed line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play the human mark on a cell
    Play(usize),
    /// Start a new game
    New,
    /// Leave the program
    Quit,
    Unknown(String),
}

/// Parse one line of input. Returns `None` for a blank line.
#[must_use]
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let cmd = match trimmed {
        "new" => Command::New,
        "quit" | "exit" => Command::Quit,
        _ => match trimmed.parse::<usize>() {
            Ok(index) => Command::Play(index),
            Err(_) => Command::Unknown(trimmed.to_string()),
        },
    };

    Some(cmd)
}

/// Run the interactive game loop on stdin/stdout.
pub fn run() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_loop(stdin.lock(), stdout.lock(), AI_MOVE_DELAY)
}

/// Game loop over generic streams, so tests can script a whole session.
pub fn run_loop(input: impl BufRead, mut out: impl Write, ai_delay: Duration) -> io::Result<()> {
    let mut board = Board::new();
    let mut in_progress = true;
    let params = SearchParams::default();

    writeln!(out, "Cells are numbered 0-8, left to right, top to bottom.")?;
    writeln!(out, "Commands: 0-8 to play, new, quit.")?;
    write!(out, "{board}")?;
    writeln!(out, "Player {}'s turn", Mark::Human)?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        let Some(cmd) = parse_command(&line) else {
            continue;
        };

        match cmd {
            Command::Quit => break,
            Command::New => {
                board = Board::new();
                in_progress = true;
                write!(out, "{board}")?;
                writeln!(out, "Player {}'s turn", Mark::Human)?;
            }
            Command::Unknown(text) => {
                writeln!(out, "Unknown command '{text}'")?;
            }
            Command::Play(_) if !in_progress => {
                writeln!(out, "Game over - type new to play again")?;
            }
            Command::Play(index) => {
                if let Err(e) = board.play(index, Mark::Human) {
                    writeln!(out, "{e}")?;
                    out.flush()?;
                    continue;
                }

                let outcome = board.outcome();
                if outcome.is_decided() {
                    write!(out, "{board}")?;
                    writeln!(out, "{outcome}")?;
                    in_progress = false;
                } else {
                    writeln!(out, "Player {}'s turn", Mark::Ai)?;
                    out.flush()?;
                    thread::sleep(ai_delay);
                    writeln!(out, "{}", engine_turn(&mut board, &params, &mut in_progress))?;
                }
            }
        }
        out.flush()?;
    }

    Ok(())
}

/// Let the engine move, returning the text to show for the turn.
fn engine_turn(board: &mut Board, params: &SearchParams, in_progress: &mut bool) -> String {
    let mut text = String::new();

    let report = match select_move_with(board, params) {
        Ok(report) => report,
        Err(e) => {
            *in_progress = false;
            return format!("engine error: {e}");
        }
    };

    let _ = writeln!(
        text,
        "Engine plays cell {} (score {}, {} nodes)",
        report.index, report.score, report.nodes
    );

    if let Err(e) = board.play(report.index, Mark::Ai) {
        *in_progress = false;
        let _ = write!(text, "engine error: {e}");
        return text;
    }

    let _ = write!(text, "{board}");
    let outcome = board.outcome();
    if outcome.is_decided() {
        let _ = write!(text, "\n{outcome}");
        *in_progress = false;
    } else {
        let _ = write!(text, "\nPlayer {}'s turn", Mark::Human);
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_command_play() {
        assert_eq!(parse_command("4"), Some(Command::Play(4)));
        assert_eq!(parse_command(" 8 "), Some(Command::Play(8)));
    }

    #[test]
    fn parse_command_keywords() {
        assert_eq!(parse_command("new"), Some(Command::New));
        assert_eq!(parse_command("quit"), Some(Command::Quit));
        assert_eq!(parse_command("exit"), Some(Command::Quit));
    }

    #[test]
    fn parse_command_blank_and_unknown() {
        assert_eq!(parse_command("   "), None);
        assert_eq!(
            parse_command("help"),
            Some(Command::Unknown("help".to_string()))
        );
    }

    #[test]
    fn scripted_game_reaches_engine_reply() {
        let input = b"4\nquit\n" as &[u8];
        let mut output = Vec::new();
        run_loop(input, &mut output, Duration::ZERO).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Player x's turn"));
        assert!(text.contains("Engine plays cell"));
    }

    #[test]
    fn scripted_game_rejects_occupied_cell() {
        let input = b"4\n4\nquit\n" as &[u8];
        let mut output = Vec::new();
        run_loop(input, &mut output, Duration::ZERO).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("already occupied") || text.contains("Cell 4"));
    }

    #[test]
    fn new_command_resets_board() {
        let input = b"4\nnew\n4\nquit\n" as &[u8];
        let mut output = Vec::new();
        run_loop(input, &mut output, Duration::ZERO).unwrap();

        let text = String::from_utf8(output).unwrap();
        // After the reset, cell 4 is playable again.
        assert!(!text.contains("already occupied"));
    }
}
