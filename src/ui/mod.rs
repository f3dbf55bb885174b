mod render;

pub use render::draw_game;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::game::Coord;
use crate::{
    CELL_H, CELL_W, CONTROLS_H, GOAL_BOX_H, INFO_H, PLAY_BOX_H, PLAY_BOX_W, PLAY_H, PLAY_W,
    SIDEBAR_W,
};

pub struct ScreenLayout {
    pub play: Rect,
    pub goal: Rect,
    pub info: Rect,
    pub controls: Rect,
}

/// Fixed-size screen regions, shared by drawing and mouse hit-testing.
pub fn screen_layout(area: Rect) -> ScreenLayout {
    let inner = Layout::default()
        .constraints([Constraint::Min(0)])
        .margin(1)
        .split(area)[0];

    // Play grid centered left, sidebar right.
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(PLAY_BOX_W),
            Constraint::Length(2),
            Constraint::Length(SIDEBAR_W),
            Constraint::Min(0),
        ])
        .split(inner);

    let play = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(PLAY_BOX_H),
            Constraint::Min(0),
        ])
        .split(cols[1])[1];

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(GOAL_BOX_H),
            Constraint::Length(INFO_H),
            Constraint::Length(CONTROLS_H),
            Constraint::Min(0),
        ])
        .split(cols[3]);

    ScreenLayout {
        play,
        goal: side[1],
        info: side[2],
        controls: side[3],
    }
}

/// Maps a terminal click position onto a play-grid cell, skipping the border.
pub fn play_cell_at(layout: &ScreenLayout, column: u16, row: u16) -> Option<Coord> {
    let play = layout.play;
    if column <= play.x || row <= play.y {
        return None;
    }
    let x = (column - play.x - 1) as usize / CELL_W;
    let y = (row - play.y - 1) as usize / CELL_H;
    if x >= PLAY_W || y >= PLAY_H {
        return None;
    }
    Some(Coord::new(x as i32, y as i32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicks_map_to_cells_inside_the_border() {
        let layout = screen_layout(Rect::new(0, 0, 80, 30));
        let play = layout.play;

        assert_eq!(play_cell_at(&layout, play.x, play.y), None);
        assert_eq!(
            play_cell_at(&layout, play.x + 1, play.y + 1),
            Some(Coord::new(0, 0))
        );
        assert_eq!(
            play_cell_at(&layout, play.x + 1 + CELL_W as u16, play.y + 1),
            Some(Coord::new(1, 0))
        );
        assert_eq!(
            play_cell_at(
                &layout,
                play.x + play.width - 2,
                play.y + play.height - 2
            ),
            Some(Coord::new(PLAY_W as i32 - 1, PLAY_H as i32 - 1))
        );
        // Clicks past the inner cells land on the border or outside.
        assert_eq!(
            play_cell_at(&layout, play.x + play.width - 1, play.y + 1),
            None
        );
    }
}
