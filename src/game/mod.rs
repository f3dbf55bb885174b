pub mod board;
pub mod coord;
pub mod effects;
pub mod layout;
pub mod state;

pub use board::{Board, Cell};
pub use coord::{Coord, Direction};
pub use effects::{Fx, FxKind};
pub use layout::{generate_goal, generate_layout, Tile, PALETTE};
pub use state::Game;
