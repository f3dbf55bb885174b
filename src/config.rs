// Shared game/UI constants.
pub const PLAY_W: usize = 5;
pub const PLAY_H: usize = 5;
pub const GOAL_W: usize = 3;
pub const GOAL_H: usize = 3;
// The goal pattern compares against the play grid's interior, one cell in.
pub const GOAL_INSET: i32 = 1;
pub const TILE_COPIES: usize = 4;

pub const ANIM_MS: u64 = 250;
pub const STAGGER_MS: u64 = 25; // per-cell delay increment for deal/clear sweeps
pub const WIN_PAUSE_MS: u64 = 400;

pub const MATCH_OPACITY: f32 = 1.0;
pub const MISS_OPACITY: f32 = 0.4;

pub const CELL_W: usize = 6; // character box per tile, incl. gutters
pub const CELL_H: usize = 3;
pub const PLAY_BOX_W: u16 = (PLAY_W * CELL_W + 2) as u16;
pub const PLAY_BOX_H: u16 = (PLAY_H * CELL_H + 2) as u16;
pub const GOAL_BOX_W: u16 = (GOAL_W * CELL_W + 2) as u16;
pub const GOAL_BOX_H: u16 = (GOAL_H * CELL_H + 2) as u16;
pub const SIDEBAR_W: u16 = GOAL_BOX_W;
pub const INFO_H: u16 = 5;
pub const CONTROLS_H: u16 = 5;
pub const MIN_COLS: u16 = PLAY_BOX_W + SIDEBAR_W + 4;
pub const MIN_ROWS: u16 = GOAL_BOX_H + INFO_H + CONTROLS_H + 2;

pub const LOG_PATH_ENV: &str = "SLIDE_LOG";
