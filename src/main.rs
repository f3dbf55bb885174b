use std::error::Error;
use std::fs::File;
use std::sync::Arc;

mod app;
mod config;
mod game;
mod ui;

pub use config::{
    ANIM_MS, CELL_H, CELL_W, CONTROLS_H, GOAL_BOX_H, GOAL_BOX_W, GOAL_H, GOAL_INSET, GOAL_W,
    INFO_H, LOG_PATH_ENV, MATCH_OPACITY, MIN_COLS, MIN_ROWS, MISS_OPACITY, PLAY_BOX_H, PLAY_BOX_W,
    PLAY_H, PLAY_W, SIDEBAR_W, STAGGER_MS, TILE_COPIES, WIN_PAUSE_MS,
};
pub use game::{Board, Coord, Direction, Game, Tile};

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();
    app::run()
}

// Logs go to a file so the alternate screen stays clean; enabled only when
// SLIDE_LOG names a path. Filtering honors RUST_LOG.
fn init_logging() {
    let Ok(path) = std::env::var(LOG_PATH_ENV) else {
        return;
    };
    let Ok(file) = File::create(path) else {
        return;
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();
}
