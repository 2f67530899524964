pub mod grid;
pub mod tic_tac_toe;

mod error;
mod turn_order;

pub use error::GameError;
pub use grid::GridIndex;
pub use tic_tac_toe::{Board, MoveOutcome, Piece, Player, TicTacToe};
pub use turn_order::TurnOrder;

pub type GameResult<T> = Result<T, GameError>;
pub type PlayerPosition = u32;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FinishedState {
    Win(PlayerPosition),
    Draw,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GameState {
    Turn(PlayerPosition),
    Finished(FinishedState),
}

/// Turn-based game driven one move at a time.
///
/// Implementors own a [`TurnOrder`] and a [`GameState`]; the provided methods keep
/// the two in sync when a turn ends or the game finishes.
pub trait Game: Sized {
    const NUM_PLAYERS: u8;
    type TurnData;
    type Outcome;

    fn update(&mut self, data: Self::TurnData) -> GameResult<Self::Outcome>;

    fn turn_order_mut(&mut self) -> &mut TurnOrder<PlayerPosition>;

    fn state(&self) -> GameState;
    fn set_state(&mut self, state: GameState);

    fn is_finished(&self) -> bool {
        matches!(self.state(), GameState::Finished(_))
    }

    fn set_draw(&mut self) -> GameState {
        self.set_state(GameState::Finished(FinishedState::Draw));
        self.state()
    }

    fn set_winner(&mut self, id: PlayerPosition) -> GameState {
        self.set_state(GameState::Finished(FinishedState::Win(id)));
        self.state()
    }

    fn get_current_player(&mut self) -> GameResult<PlayerPosition> {
        self.turn_order_mut()
            .current()
            .copied()
            .ok_or(GameError::PlayerPoolCorrupted)
    }

    fn switch_player(&mut self) -> GameResult<GameState> {
        let next_player = *self
            .turn_order_mut()
            .advance()
            .ok_or(GameError::PlayerPoolCorrupted)?;
        self.set_state(GameState::Turn(next_player));
        Ok(self.state())
    }
}
