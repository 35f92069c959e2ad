//! Command language of the terminal player.
//!
//! Squares are typed 1-based as `row col` or `row,col`, matching how the board and
//! hints are displayed.

use thiserror::Error;

use crate::core::position::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Position),
    Hint,
    Reset,
    Resize(usize),
    /// Follow hints to the end of the tour.
    Auto,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("empty input")]
    Empty,

    #[error("malformed square {0:?}: expected `row col` or `row,col`")]
    Malformed(String),

    #[error("square ({row}, {col}) is off a {size}x{size} board")]
    OutOfRange { row: i64, col: i64, size: usize },

    #[error("unknown command {0:?} (type `help`)")]
    UnknownCommand(String),
}

/// Parse one line of player input against a `size`×`size` board.
pub fn parse_command(line: &str, size: usize) -> Result<Command, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(InputError::Empty);
    }

    let mut words = line.split_whitespace();
    let head = words.next().unwrap_or_default().to_ascii_lowercase();
    match head.as_str() {
        "hint" | "h" => return Ok(Command::Hint),
        "reset" | "r" => return Ok(Command::Reset),
        "auto" | "a" => return Ok(Command::Auto),
        "help" | "?" => return Ok(Command::Help),
        "quit" | "q" | "exit" => return Ok(Command::Quit),
        "size" => {
            let arg = words
                .next()
                .ok_or_else(|| InputError::Malformed(line.to_string()))?;
            return arg
                .parse::<usize>()
                .map(Command::Resize)
                .map_err(|_| InputError::Malformed(line.to_string()));
        }
        _ => {}
    }

    if line.starts_with(|c: char| c.is_ascii_digit() || c == '-' || c == '+') {
        parse_square(line, size).map(Command::Move)
    } else {
        Err(InputError::UnknownCommand(head))
    }
}

/// Parse a 1-based square and convert it to a 0-based [`Position`].
pub fn parse_square(text: &str, size: usize) -> Result<Position, InputError> {
    let malformed = || InputError::Malformed(text.trim().to_string());

    let parts: Vec<&str> = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect();
    let [row, col] = parts.as_slice() else {
        return Err(malformed());
    };
    let row: i64 = row.parse().map_err(|_| malformed())?;
    let col: i64 = col.parse().map_err(|_| malformed())?;

    let n = size as i64;
    if !(1..=n).contains(&row) || !(1..=n).contains(&col) {
        return Err(InputError::OutOfRange { row, col, size });
    }
    Ok(Position::new((row - 1) as i32, (col - 1) as i32))
}

pub const HELP: &str = "\
Commands:
  <row> <col>   move the knight (1-based, `3 2` or `3,2`)
  hint          show the Warnsdorff recommendation
  auto          follow hints until the tour ends
  reset         start over
  size <n>      start over on an n x n board
  help          show this text
  quit          leave";
