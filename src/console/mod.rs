//! Line-based terminal front end: move parsing, prompting and the turn loop.

mod input;
mod runner;

use crate::game::{GameError, GridIndex, Player};

pub use input::{parse_move, LineMoveReader, ParseMoveError};
pub use runner::run_game;

#[derive(thiserror::Error, Debug)]
pub enum ConsoleError {
    #[error("input closed before the game finished")]
    InputClosed,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Game(#[from] GameError),
}

/// Source of moves for the active player.
///
/// Blocks until a well-formed move is available. Implementations never hand
/// malformed coordinates to the game; range and occupancy are checked by the board.
#[cfg_attr(test, mockall::automock)]
pub trait MoveReader {
    fn read_move(&mut self, player: &Player) -> Result<GridIndex, ConsoleError>;
}
