use std::mem;
use std::time::Duration;

use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::game::{generate_goal, generate_layout, Board, Coord, Direction, Tile};
use crate::{
    GOAL_H, GOAL_INSET, GOAL_W, MATCH_OPACITY, MISS_OPACITY, PLAY_H, PLAY_W, STAGGER_MS,
    WIN_PAUSE_MS,
};

/// Round sequencing. Any phase other than `Idle` has a batch of transitions
/// (or a pause) in flight; the next phase begins when that batch settles.
enum Phase {
    Idle,
    /// Chain links in slot-outward order: each `(origin, dest)` pair moves
    /// origin's tile into dest once the slide transitions finish.
    Sliding { chain: Vec<(Coord, Coord)> },
    HidingPlay,
    HidingGoal,
    Pausing { left: Duration },
    ShowingGoal,
    ShowingPlay,
}

pub struct Game {
    pub board: Board,
    pub goal_board: Board,
    pub wins: u64,
    pub moves: u64,
    pub goal_layout: Vec<Tile>,
    rng: StdRng,
    phase: Phase,
}

impl Game {
    pub fn new(rng: StdRng) -> Self {
        let board = Board::with_decorator(PLAY_W, PLAY_H, |c| {
            c.x == 0 || c.y == 0 || c.x == PLAY_W as i32 - 1 || c.y == PLAY_H as i32 - 1
        });
        let goal_board = Board::new(GOAL_W, GOAL_H);
        Self {
            board,
            goal_board,
            wins: 0,
            moves: 0,
            goal_layout: Vec::new(),
            rng,
            phase: Phase::Idle,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.phase, Phase::Idle)
    }

    pub fn status(&self) -> &'static str {
        match self.phase {
            Phase::Idle => "READY",
            Phase::Sliding { .. } => "SLIDING",
            Phase::HidingPlay | Phase::HidingGoal | Phase::Pausing { .. } => "SOLVED",
            Phase::ShowingGoal | Phase::ShowingPlay => "DEALING",
        }
    }

    /// Begins a fresh round: deal a new goal pattern, then a new play layout,
    /// then set the initial match highlighting. Input stays disabled until
    /// the whole sequence settles.
    pub fn restart(&mut self) {
        self.phase = self.begin_restart();
    }

    /// A completed activation gesture on a play-grid cell.
    pub fn on_activate(&mut self, coord: Coord) {
        if self.board.disable_input || !self.is_idle() {
            return;
        }
        let (empty, _) = self
            .board
            .find(|symbol, _| symbol.is_empty())
            .expect("play grid always holds one empty slot");
        let delta_x = empty.x - coord.x;
        let delta_y = empty.y - coord.y;
        if delta_x == 0 && delta_y == 0 {
            return; // activated the empty slot itself
        }
        if delta_x != 0 && delta_y != 0 {
            return; // diagonal to the slot
        }
        // Exactly one delta is nonzero, so this is the slot distance.
        let count = (delta_x + delta_y).abs();
        let (step_x, step_y) = (delta_x.signum(), delta_y.signum());
        let direction = Direction::from_delta(step_x, step_y)
            .expect("activation shares a row or column with the slot");
        debug!(?coord, ?empty, count, "sliding chain");

        // Enumerate the chain from the slot outward and start every slide
        // together; the copies run when the batch settles.
        let mut chain = Vec::with_capacity(count as usize);
        for n in 0..count {
            let origin = empty.offset(-step_x * (n + 1), -step_y * (n + 1));
            let dest = origin.offset(step_x, step_y);
            self.board.animate_move(origin, direction);
            chain.push((origin, dest));
        }
        self.board.disable_input = true;
        self.phase = Phase::Sliding { chain };
    }

    /// For every goal cell, lights the matching play-grid interior cell and
    /// dims the rest. Symbols are never touched.
    pub fn highlight_matches(&mut self) {
        let goal = &self.goal_board;
        let board = &mut self.board;
        goal.for_each(|symbol, g, _| {
            let c = play_cell(g);
            let opacity = if board.get(c) == symbol {
                MATCH_OPACITY
            } else {
                MISS_OPACITY
            };
            board.set(c, None, Some(opacity));
        });
    }

    /// Advances animation clocks and steps the round state machine whenever
    /// the in-flight batch of transitions has settled.
    pub fn tick(&mut self, dt: Duration) {
        self.board.tick(dt);
        self.goal_board.tick(dt);

        self.phase = match mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Sliding { chain } if self.board.idle() => self.finish_chain(&chain),
            Phase::HidingPlay if self.board.idle() => self.hide_goal_grid(),
            Phase::HidingGoal if self.goal_board.idle() => Phase::Pausing {
                left: Duration::from_millis(WIN_PAUSE_MS),
            },
            Phase::Pausing { left } => match left.checked_sub(dt) {
                Some(left) if !left.is_zero() => Phase::Pausing { left },
                _ => self.begin_restart(),
            },
            Phase::ShowingGoal if self.goal_board.idle() => self.reveal_play_grid(),
            Phase::ShowingPlay if self.board.idle() => {
                self.highlight_matches();
                self.board.disable_input = false;
                Phase::Idle
            }
            other => other,
        };
    }

    fn finish_chain(&mut self, chain: &[(Coord, Coord)]) -> Phase {
        // Slot-outward order keeps each origin unread until its own copy.
        for &(origin, dest) in chain {
            let symbol = self.board.get(origin);
            self.board.set(dest, Some(symbol), None);
            self.board.set(origin, Some(Tile::Empty), None);
        }
        self.moves += 1;
        self.highlight_matches();
        if self.is_won() {
            self.wins += 1;
            info!(wins = self.wins, moves = self.moves, "pattern matched");
            let cells = self.board.map(|_, c, index| (c, index));
            for (c, index) in cells {
                self.board.animate_hide(c, stagger(index));
            }
            Phase::HidingPlay
        } else {
            self.board.disable_input = false;
            Phase::Idle
        }
    }

    fn hide_goal_grid(&mut self) -> Phase {
        let cells = self.goal_board.map(|_, c, index| (c, index));
        for (c, index) in cells {
            self.goal_board.animate_hide(c, stagger(index));
        }
        Phase::HidingGoal
    }

    fn begin_restart(&mut self) -> Phase {
        self.board.disable_input = true;
        self.goal_layout = generate_goal(&mut self.rng);
        info!(wins = self.wins, "new round");
        let cells = self.goal_board.map(|_, c, index| (c, index));
        for (c, index) in cells {
            self.goal_board
                .animate_show(c, self.goal_layout[index], stagger(index));
        }
        Phase::ShowingGoal
    }

    fn reveal_play_grid(&mut self) -> Phase {
        let layout = generate_layout(&mut self.rng);
        let cells = self.board.map(|_, c, index| (c, index));
        for (c, index) in cells {
            self.board.set(c, None, Some(MISS_OPACITY));
            self.board.animate_show(c, layout[index], stagger(index));
        }
        Phase::ShowingPlay
    }

    fn is_won(&self) -> bool {
        self.goal_board
            .find(|symbol, g| self.board.get(play_cell(g)) != symbol)
            .is_none()
    }
}

/// Play-grid interior cell a goal cell compares against.
fn play_cell(g: Coord) -> Coord {
    g.offset(GOAL_INSET, GOAL_INSET)
}

fn stagger(index: usize) -> Duration {
    Duration::from_millis(STAGGER_MS * index as u64)
}
