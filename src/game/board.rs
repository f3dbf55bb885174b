use std::time::Duration;

use crate::game::coord::{self, Coord, Direction};
use crate::game::effects::{Fx, FxKind};
use crate::game::Tile;
use crate::ANIM_MS;

/// One display cell: current symbol, symbol opacity, and a construction-time
/// style hint marking the darkened border ring.
#[derive(Clone, Copy, Debug)]
pub struct Cell {
    pub symbol: Tile,
    pub opacity: f32,
    pub dimmed: bool,
}

/// A W×H grid of display cells with in-flight visual transitions.
///
/// The board holds display state only; it never enforces game rules. Callers
/// mutate symbols through `set` or by letting a transition's completion
/// effect run (a `Shrink` clears its cell).
pub struct Board {
    pub width: usize,
    pub height: usize,
    /// While set, activation gestures on this board are ignored entirely.
    pub disable_input: bool,
    cells: Vec<Cell>,
    fx: Vec<Fx>,
}

impl Board {
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_decorator(width, height, |_| false)
    }

    /// `dim` marks cells that render darkened for the board's lifetime.
    pub fn with_decorator(width: usize, height: usize, dim: impl Fn(Coord) -> bool) -> Self {
        let cells = (0..width * height)
            .map(|index| Cell {
                symbol: Tile::Empty,
                opacity: 1.0,
                dimmed: dim(coord::from_index(index, width)),
            })
            .collect();
        Self {
            width,
            height,
            disable_input: false,
            cells,
            fx: Vec::new(),
        }
    }

    pub fn to_index(&self, c: Coord) -> usize {
        coord::to_index(c, self.width)
    }

    pub fn from_index(&self, index: usize) -> Coord {
        coord::from_index(index, self.width)
    }

    pub fn get(&self, c: Coord) -> Tile {
        self.cells[self.to_index(c)].symbol
    }

    pub fn cell(&self, c: Coord) -> &Cell {
        &self.cells[self.to_index(c)]
    }

    /// `None` symbol leaves the cell's symbol untouched (opacity-only update).
    pub fn set(&mut self, c: Coord, symbol: Option<Tile>, opacity: Option<f32>) {
        let idx = self.to_index(c);
        if let Some(symbol) = symbol {
            self.cells[idx].symbol = symbol;
        }
        if let Some(opacity) = opacity {
            self.cells[idx].opacity = opacity;
        }
    }

    // Traversal runs column by column (outer x, inner y); the index argument
    // is the linear row-major index `x + y*width`.
    pub fn for_each(&self, mut f: impl FnMut(Tile, Coord, usize)) {
        for x in 0..self.width {
            for y in 0..self.height {
                let c = Coord::new(x as i32, y as i32);
                f(self.get(c), c, x + y * self.width);
            }
        }
    }

    pub fn map<T>(&self, mut f: impl FnMut(Tile, Coord, usize) -> T) -> Vec<T> {
        let mut out = Vec::with_capacity(self.cells.len());
        self.for_each(|symbol, c, index| out.push(f(symbol, c, index)));
        out
    }

    /// First cell satisfying `pred`, in traversal order.
    pub fn find(&self, pred: impl Fn(Tile, Coord) -> bool) -> Option<(Coord, Tile)> {
        for x in 0..self.width {
            for y in 0..self.height {
                let c = Coord::new(x as i32, y as i32);
                let symbol = self.get(c);
                if pred(symbol, c) {
                    return Some((c, symbol));
                }
            }
        }
        None
    }

    /// Sets the symbol and grows it in from nothing once `delay` has passed.
    pub fn animate_show(&mut self, c: Coord, symbol: Tile, delay: Duration) {
        let idx = self.to_index(c);
        self.cells[idx].symbol = symbol;
        self.fx.push(Fx::new(c, FxKind::Grow, delay, anim_duration()));
    }

    /// Shrinks the tile away once `delay` has passed; the cell is cleared to
    /// `Empty` when the transition completes.
    pub fn animate_hide(&mut self, c: Coord, delay: Duration) {
        self.fx.push(Fx::new(c, FxKind::Shrink, delay, anim_duration()));
    }

    /// Starts a one-cell translation. The symbol stays put; callers move cell
    /// contents once the batch has settled.
    pub fn animate_move(&mut self, c: Coord, direction: Direction) {
        assert!(!self.get(c).is_empty(), "cannot slide empty cell {c:?}");
        self.fx
            .push(Fx::new(c, FxKind::Slide(direction), Duration::ZERO, anim_duration()));
    }

    /// Advances all transition clocks, dropping finished transitions after
    /// applying their completion effects.
    pub fn tick(&mut self, dt: Duration) {
        let mut i = 0;
        while i < self.fx.len() {
            self.fx[i].elapsed += dt;
            if self.fx[i].done() {
                let fx = self.fx.remove(i);
                if fx.kind == FxKind::Shrink {
                    let idx = self.to_index(fx.coord);
                    self.cells[idx].symbol = Tile::Empty;
                }
            } else {
                i += 1;
            }
        }
    }

    pub fn idle(&self) -> bool {
        self.fx.is_empty()
    }

    pub fn fx_at(&self, c: Coord) -> Option<&Fx> {
        self.fx.iter().find(|fx| fx.coord == c)
    }
}

fn anim_duration() -> Duration {
    Duration::from_millis(ANIM_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick_all(board: &mut Board) {
        while !board.idle() {
            board.tick(Duration::from_millis(50));
        }
    }

    #[test]
    fn traversal_runs_columns_first_with_linear_indices() {
        let board = Board::new(3, 2);
        let mut seen = Vec::new();
        board.for_each(|_, c, index| seen.push((c.x, c.y, index)));
        assert_eq!(
            seen,
            vec![(0, 0, 0), (0, 1, 3), (1, 0, 1), (1, 1, 4), (2, 0, 2), (2, 1, 5)]
        );
    }

    #[test]
    fn find_returns_first_match_in_traversal_order() {
        let mut board = Board::new(3, 3);
        board.set(Coord::new(2, 0), Some(Tile::Red), None);
        board.set(Coord::new(0, 2), Some(Tile::Red), None);
        // (0,2) wins: column 0 is scanned before column 2.
        let hit = board.find(|symbol, _| symbol == Tile::Red);
        assert_eq!(hit, Some((Coord::new(0, 2), Tile::Red)));
    }

    #[test]
    fn set_updates_symbol_and_opacity_independently() {
        let mut board = Board::new(2, 2);
        let c = Coord::new(1, 1);
        board.set(c, Some(Tile::Blue), None);
        board.set(c, None, Some(0.4));
        assert_eq!(board.get(c), Tile::Blue);
        assert_eq!(board.cell(c).opacity, 0.4);
        board.set(c, Some(Tile::Green), Some(1.0));
        assert_eq!(board.get(c), Tile::Green);
        assert_eq!(board.cell(c).opacity, 1.0);
    }

    #[test]
    fn hide_clears_symbol_only_once_transition_completes() {
        let mut board = Board::new(2, 1);
        let c = Coord::new(0, 0);
        board.set(c, Some(Tile::White), None);
        board.animate_hide(c, Duration::ZERO);
        board.tick(Duration::from_millis(10));
        assert_eq!(board.get(c), Tile::White);
        tick_all(&mut board);
        assert_eq!(board.get(c), Tile::Empty);
    }

    #[test]
    fn show_sets_symbol_up_front() {
        let mut board = Board::new(2, 1);
        let c = Coord::new(1, 0);
        board.animate_show(c, Tile::Orange, Duration::from_millis(100));
        assert_eq!(board.get(c), Tile::Orange);
        assert!(!board.idle());
        tick_all(&mut board);
        assert_eq!(board.get(c), Tile::Orange);
    }

    #[test]
    #[should_panic(expected = "cannot slide")]
    fn sliding_an_empty_cell_is_a_bug() {
        let mut board = Board::new(2, 1);
        board.animate_move(Coord::new(0, 0), Direction::Right);
    }

    #[test]
    fn move_leaves_cell_contents_alone() {
        let mut board = Board::new(2, 1);
        let c = Coord::new(0, 0);
        board.set(c, Some(Tile::Red), None);
        board.animate_move(c, Direction::Right);
        tick_all(&mut board);
        assert_eq!(board.get(c), Tile::Red);
        assert_eq!(board.get(Coord::new(1, 0)), Tile::Empty);
    }

    #[test]
    fn decorator_marks_dimmed_cells() {
        let board = Board::with_decorator(3, 3, |c| c.x == 0);
        assert!(board.cell(Coord::new(0, 1)).dimmed);
        assert!(!board.cell(Coord::new(1, 1)).dimmed);
    }
}
