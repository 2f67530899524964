use std::io::{BufRead, Write};
use std::num::ParseIntError;
use std::str::FromStr;

use tracing::warn;

use super::{ConsoleError, MoveReader};
use crate::game::{GridIndex, Player};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ParseMoveError {
    #[error("expected row and column, found {found} value(s)")]
    WrongShape { found: usize },
    #[error("invalid coordinate: {0}")]
    InvalidNumber(#[from] ParseIntError),
}

/// Accepts two zero-based numbers separated by whitespace and/or a comma,
/// e.g. `"1 2"` or `"1,2"`.
impl FromStr for GridIndex {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();
        let [row, col] = parts.as_slice() else {
            return Err(ParseMoveError::WrongShape { found: parts.len() });
        };
        Ok(GridIndex::new(row.parse()?, col.parse()?))
    }
}

pub fn parse_move(line: &str) -> Result<GridIndex, ParseMoveError> {
    line.parse()
}

/// Reads one move per line from `input` and writes prompts to `output`.
/// Malformed lines are reported and read again.
pub struct LineMoveReader<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineMoveReader<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> MoveReader for LineMoveReader<R, W> {
    fn read_move(&mut self, player: &Player) -> Result<GridIndex, ConsoleError> {
        loop {
            write!(
                self.output,
                "{} ({}), enter row and column: ",
                player.name(),
                player.piece()
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(ConsoleError::InputClosed);
            }
            match parse_move(&line) {
                Ok(idx) => return Ok(idx),
                Err(err) => {
                    warn!(input = line.trim(), %err, "malformed move");
                    writeln!(self.output, "Invalid input: {}", err)?;
                }
            }
        }
    }
}
