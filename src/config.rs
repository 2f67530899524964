use clap::Parser;

use crate::game::tic_tac_toe::DEFAULT_BOARD_SIZE;
use crate::game::{GameResult, TicTacToe};

/// Play Tic-Tac-Toe in the terminal
#[derive(Parser, Debug, PartialEq)]
#[command(name = "tic-tac-toe", version)]
pub struct Config {
    /// Side length of the square board (at least 3)
    #[arg(short, long, env = "TTT_BOARD_SIZE", default_value_t = DEFAULT_BOARD_SIZE)]
    pub size: usize,

    /// Name of the player who plays X and moves first
    #[arg(long, env = "TTT_PLAYER_X", default_value = "Player 1")]
    pub player_x: String,

    /// Name of the player who plays O
    #[arg(long, env = "TTT_PLAYER_O", default_value = "Player 2")]
    pub player_o: String,
}

impl Config {
    /// Parses the command line. Values missing there are taken from the
    /// environment, which is populated from `.env` if the file exists.
    pub fn load() -> Self {
        dotenv::dotenv().ok();
        Self::parse()
    }

    pub fn new_game(&self) -> GameResult<TicTacToe> {
        TicTacToe::new(self.player_x.as_str(), self.player_o.as_str(), self.size)
    }
}
