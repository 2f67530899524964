extern crate tic_tac_toe;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use tic_tac_toe::config::Config;
use tic_tac_toe::console::{run_game, LineMoveReader};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load();

    // stdout is the game display, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut game = config.new_game()?;
    info!(
        size = config.size,
        x = %config.player_x,
        o = %config.player_o,
        "starting game"
    );

    let mut reader = LineMoveReader::new(io::stdin().lock(), io::stdout());
    run_game(&mut game, &mut reader, &mut io::stdout())?;
    Ok(())
}
