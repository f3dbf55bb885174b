use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

use crate::game::{Board, Coord, FxKind, Game, Tile};
use crate::ui::screen_layout;
use crate::{CELL_H, CELL_W, MIN_COLS, MIN_ROWS};

pub fn draw_game(frame: &mut Frame, game: &Game) {
    let area = frame.size();

    if area.width < MIN_COLS || area.height < MIN_ROWS {
        let msg = Paragraph::new(format!("RESIZE TERMINAL (min {MIN_COLS}x{MIN_ROWS})"))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("SLIDE"));
        frame.render_widget(msg, area);
        return;
    }

    // Outer "cabinet" frame.
    let cabinet = Block::default()
        .title("SLIDE")
        .border_type(BorderType::Thick)
        .borders(Borders::ALL)
        .title_alignment(Alignment::Left);
    frame.render_widget(cabinet, area);

    let layout = screen_layout(area);
    draw_board(frame, &game.board, layout.play, "PLAY");
    draw_board(frame, &game.goal_board, layout.goal, "GOAL");
    draw_info(frame, game, layout.info);
    draw_controls(frame, layout.controls);
}

fn draw_board(frame: &mut Frame, board: &Board, area: Rect, title: &str) {
    let block = Block::default().title(title).borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let w = board.width * CELL_W;
    let h = board.height * CELL_H;
    let mut canvas = vec![vec![(' ', Style::default()); w]; h];
    board.for_each(|symbol, c, _| plot_tile(&mut canvas, board, c, symbol));

    let lines: Vec<Line> = canvas
        .into_iter()
        .map(|row| {
            Line::from(
                row.into_iter()
                    .map(|(ch, style)| Span::styled(ch.to_string(), style))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

// Paints one tile into the character canvas, applying its transition frame:
// grow/shrink scale the block about its center, slide offsets it toward the
// neighbor cell.
fn plot_tile(canvas: &mut [Vec<(char, Style)>], board: &Board, c: Coord, symbol: Tile) {
    let mut scale = 1.0f32;
    let mut offset = (0i32, 0i32);
    if let Some(fx) = board.fx_at(c) {
        let p = fx.progress();
        match fx.kind {
            FxKind::Grow => scale = p,
            FxKind::Shrink => scale = 1.0 - p,
            FxKind::Slide(direction) => {
                let (dx, dy) = direction.delta();
                offset = (
                    (dx as f32 * p * CELL_W as f32).round() as i32,
                    (dy as f32 * p * CELL_H as f32).round() as i32,
                );
            }
        }
    }
    if symbol.is_empty() || scale <= 0.0 {
        return;
    }

    let full_w = CELL_W - 2; // one gutter column each side
    let full_h = CELL_H - 1; // gutter row below
    let bw = (full_w as f32 * scale).round() as usize;
    let bh = (full_h as f32 * scale).round() as usize;
    if bw == 0 || bh == 0 {
        return;
    }

    let cell = board.cell(c);
    let style = tile_style(symbol, cell.opacity, cell.dimmed);
    let x0 = c.x * CELL_W as i32 + ((CELL_W - bw) / 2) as i32 + offset.0;
    let y0 = c.y * CELL_H as i32 + ((full_h - bh) / 2) as i32 + offset.1;
    for row in 0..bh {
        for col in 0..bw {
            let x = x0 + col as i32;
            let y = y0 + row as i32;
            if x >= 0
                && y >= 0
                && (y as usize) < canvas.len()
                && (x as usize) < canvas[y as usize].len()
            {
                canvas[y as usize][x as usize] = ('█', style);
            }
        }
    }
}

fn tile_style(symbol: Tile, opacity: f32, dimmed: bool) -> Style {
    let color = match symbol {
        Tile::Empty => return Style::default(),
        Tile::Red => Color::Red,
        Tile::Yellow => Color::Yellow,
        Tile::Blue => Color::Blue,
        Tile::White => Color::White,
        Tile::Green => Color::Green,
        Tile::Orange => Color::Rgb(255, 153, 51),
    };
    let mut style = Style::default().fg(color);
    if opacity < 1.0 || dimmed {
        style = style.add_modifier(Modifier::DIM);
    }
    style
}

fn draw_info(frame: &mut Frame, game: &Game, area: Rect) {
    let block = Block::default().title("INFO").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::raw(format!("{:<8} {}", "WINS:", game.wins)),
        Line::raw(format!("{:<8} {}", "MOVES:", game.moves)),
        Line::raw(format!("{:<8} {}", "STATUS:", game.status())),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Left), inner);
}

fn draw_controls(frame: &mut Frame, area: Rect) {
    let block = Block::default().title("CONTROLS").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::raw("click  slide tile"),
        Line::raw("r      new round"),
        Line::raw("q/esc  quit"),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Left), inner);
}
