use std::io::Write;

use tracing::{info, instrument};

use super::{ConsoleError, MoveReader};
use crate::game::{FinishedState, Game, GameState, MoveOutcome, TicTacToe};

/// Plays `game` to the end, pulling moves from `reader` and writing the board,
/// retry notices and the final result to `out`.
#[instrument(skip_all, fields(size = game.board().size()))]
pub fn run_game<M, W>(
    game: &mut TicTacToe,
    reader: &mut M,
    out: &mut W,
) -> Result<FinishedState, ConsoleError>
where
    M: MoveReader,
    W: Write,
{
    loop {
        write!(out, "{}", game.board())?;
        match game.begin_turn()? {
            GameState::Finished(result) => {
                match result {
                    FinishedState::Win(position) => {
                        writeln!(out, "{} wins!", game.player(position)?)?
                    }
                    FinishedState::Draw => writeln!(out, "It's a draw!")?,
                }
                info!(?result, "game finished");
                return Ok(result);
            }
            GameState::Turn(position) => {
                let player = game.player(position)?.clone();
                let index = reader.read_move(&player)?;
                if let MoveOutcome::Rejected(_) = game.update(index)? {
                    writeln!(out, "Cell {} is not available, try again.", index)?;
                }
            }
        }
    }
}
