#[derive(thiserror::Error, Debug, PartialEq)]
pub enum GameError {
    #[error("invalid board size (expected: at least {min}, found: {found})")]
    InvalidBoardSize { min: usize, found: usize },
    #[error("duplicate player name encountered: {0}")]
    DuplicatePlayerName(String),
    #[error("player not found")]
    PlayerNotFound,
    #[error("can't make turn on a finished game")]
    GameIsFinished,
    #[error("failed to switch players in the pool")]
    PlayerPoolCorrupted,
}

impl GameError {
    pub fn invalid_board_size(min: usize, found: usize) -> Self {
        Self::InvalidBoardSize { min, found }
    }
}
