mod board;

use std::fmt::{Display, Formatter};

use tracing::{info, warn};

use crate::game::{
    FinishedState, Game, GameError, GameResult, GameState, GridIndex, PlayerPosition, TurnOrder,
};

pub use board::{Board, Cell, Line, DEFAULT_BOARD_SIZE, MIN_BOARD_SIZE};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Piece {
    X,
    O,
}

impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Piece::X => f.write_str("X"),
            Piece::O => f.write_str("O"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    name: String,
    piece: Piece,
}

impl Player {
    pub fn new(name: impl Into<String>, piece: Piece) -> Self {
        Self {
            name: name.into(),
            piece,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn piece(&self) -> Piece {
        self.piece
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Result of a single move request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MoveOutcome {
    /// The piece was stored; carries the state after win evaluation.
    Placed(GameState),
    /// Nothing was stored. Either the cell was out of range or occupied and the
    /// same player moves again, or the board had no free cells and the game is a draw.
    Rejected(GameState),
}

impl MoveOutcome {
    pub fn state(&self) -> GameState {
        match self {
            MoveOutcome::Placed(state) | MoveOutcome::Rejected(state) => *state,
        }
    }

    pub fn is_placed(&self) -> bool {
        matches!(self, MoveOutcome::Placed(_))
    }
}

#[derive(Debug)]
pub struct TicTacToe {
    players: [Player; 2],
    turn_order: TurnOrder<PlayerPosition>,
    state: GameState,
    board: Board,
}

impl TicTacToe {
    /// Sets up a game on an empty `size` x `size` board.
    /// The first player plays [`Piece::X`] and moves first.
    pub fn new(
        name_x: impl Into<String>,
        name_o: impl Into<String>,
        size: usize,
    ) -> GameResult<Self> {
        let (name_x, name_o) = (name_x.into(), name_o.into());
        if name_x == name_o {
            return Err(GameError::DuplicatePlayerName(name_x));
        }
        let board = Board::new(size)?;
        Ok(Self {
            players: [Player::new(name_x, Piece::X), Player::new(name_o, Piece::O)],
            turn_order: TurnOrder::new((0..Self::NUM_PLAYERS as PlayerPosition).collect()),
            state: GameState::Turn(0),
            board,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn player(&self, position: PlayerPosition) -> GameResult<&Player> {
        self.players
            .get(position as usize)
            .ok_or(GameError::PlayerNotFound)
    }

    pub fn get_player_by_piece(&self, piece: Piece) -> GameResult<&Player> {
        self.players
            .iter()
            .find(|player| player.piece == piece)
            .ok_or(GameError::PlayerNotFound)
    }

    /// Player expected to move, [`None`] once the game is finished.
    pub fn current_player(&self) -> Option<&Player> {
        match self.state {
            GameState::Turn(position) => self.players.get(position as usize),
            GameState::Finished(_) => None,
        }
    }

    pub fn winner(&self) -> Option<&Player> {
        match self.state {
            GameState::Finished(FinishedState::Win(position)) => {
                self.players.get(position as usize)
            }
            _ => None,
        }
    }

    /// Resolves the draw condition before a move is requested.
    /// Returns [`FinishedState::Draw`] when no free cells remain.
    pub fn begin_turn(&mut self) -> GameResult<GameState> {
        if !self.is_finished() && self.board.empty_cells().is_empty() {
            info!("no free cells left, game ends in a draw");
            return Ok(self.set_draw());
        }
        Ok(self.state)
    }

    pub fn make_move(&mut self, row: usize, col: usize) -> GameResult<MoveOutcome> {
        self.update(GridIndex::new(row, col))
    }

    fn update_state(
        &mut self,
        placed: GridIndex,
        position: PlayerPosition,
        piece: Piece,
    ) -> GameResult<GameState> {
        let line = self
            .board
            .lines_through(placed)
            .find(|line| self.board.line_is(*line, piece));
        if let Some(line) = line {
            info!(?line, winner = position, "line completed");
            return Ok(self.set_winner(position));
        }

        self.switch_player()
    }
}

impl Game for TicTacToe {
    const NUM_PLAYERS: u8 = 2;
    type TurnData = GridIndex;
    type Outcome = MoveOutcome;

    fn update(&mut self, data: Self::TurnData) -> GameResult<Self::Outcome> {
        if self.is_finished() {
            return Err(GameError::GameIsFinished);
        }
        if let GameState::Finished(_) = self.begin_turn()? {
            return Ok(MoveOutcome::Rejected(self.state));
        }

        let position = self.get_current_player()?;
        let piece = self.player(position)?.piece;
        if !self.board.place(data.row(), data.col(), piece) {
            warn!(cell = %data, player = position, "cell is out of range or occupied");
            return Ok(MoveOutcome::Rejected(self.state));
        }

        let state = self.update_state(data, position, piece)?;
        Ok(MoveOutcome::Placed(state))
    }

    fn turn_order_mut(&mut self) -> &mut TurnOrder<PlayerPosition> {
        &mut self.turn_order
    }

    fn state(&self) -> GameState {
        self.state
    }

    fn set_state(&mut self, state: GameState) {
        self.state = state;
    }
}
