//! Terminal rendering for the Flappy Bird board.
//!
//! The logical board (360×640 by default) is scaled into whatever cells the
//! play area has. Entities are rasterised onto a cell grid back to front:
//! background, pipes, then the bird.

use super::game_common::{
    create_game_layout, render_game_over_banner, render_info_panel_frame, render_status_bar,
};
use crate::core::game_loop::Snapshot;
use crate::flappy::types::{Bird, Bounds, Sprite};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const INFO_PANEL_WIDTH: u16 = 20;

/// Glyph and style for a sprite handle. Unknown art never fails: every
/// handle has a plain fallback cell.
fn sprite_cell(sprite: Sprite) -> (&'static str, Style) {
    match sprite {
        Sprite::Background => (" ", Style::default()),
        Sprite::Bird => (
            "●",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Sprite::TopPipe => ("█", Style::default().fg(Color::Green)),
        Sprite::BottomPipe => ("█", Style::default().fg(Color::LightGreen)),
    }
}

/// Bird glyph leans with its velocity.
fn bird_glyph(bird: &Bird) -> &'static str {
    if bird.velocity_y < -50.0 {
        "▲"
    } else if bird.velocity_y > 300.0 {
        "▼"
    } else {
        "►"
    }
}

/// Cell grid: `None` is background.
pub struct Raster {
    pub width: usize,
    pub height: usize,
    cells: Vec<Option<Sprite>>,
}

impl Raster {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    pub fn get(&self, col: usize, row: usize) -> Option<Sprite> {
        self.cells.get(row * self.width + col).copied().flatten()
    }

    /// Fill every cell a logical rectangle covers. Anything on the board
    /// covers at least one cell so a small terminal never hides the bird.
    fn fill(&mut self, bounds: &Bounds, scale_x: f64, scale_y: f64, sprite: Sprite) {
        let col0 = (bounds.x * scale_x).floor() as i64;
        let row0 = (bounds.y * scale_y).floor() as i64;
        let col1 = ((bounds.right() * scale_x).ceil() as i64).max(col0 + 1);
        let row1 = ((bounds.bottom() * scale_y).ceil() as i64).max(row0 + 1);

        let col_start = col0.max(0) as usize;
        let row_start = row0.max(0) as usize;
        let col_end = col1.clamp(0, self.width as i64) as usize;
        let row_end = row1.clamp(0, self.height as i64) as usize;

        for row in row_start..row_end {
            for col in col_start..col_end {
                self.cells[row * self.width + col] = Some(sprite);
            }
        }
    }
}

/// Rasterise a snapshot into a `width`×`height` cell grid.
pub fn rasterize(snapshot: &Snapshot, width: usize, height: usize) -> Raster {
    let mut raster = Raster::new(width, height);
    if width == 0 || height == 0 || snapshot.board_width <= 0.0 || snapshot.board_height <= 0.0 {
        return raster;
    }

    let scale_x = width as f64 / snapshot.board_width;
    let scale_y = height as f64 / snapshot.board_height;

    for pipe in &snapshot.pipes {
        raster.fill(&pipe.bounds(), scale_x, scale_y, pipe.sprite);
    }
    raster.fill(&snapshot.bird.bounds(), scale_x, scale_y, snapshot.bird.sprite);
    raster
}

/// Render the whole game screen.
pub fn render_flappy(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let layout = create_game_layout(frame, area, " Flappy Bird ", Color::Cyan, INFO_PANEL_WIDTH);

    render_play_area(frame, layout.content, snapshot);
    render_status_bar_content(frame, layout.status_bar, snapshot);
    render_info_panel(frame, layout.info_panel, snapshot);

    if snapshot.is_game_over() {
        render_game_over_banner(
            frame,
            layout.content,
            &format!("Game Over: {}", snapshot.display_score()),
            "Press SPACE",
        );
    }
}

/// Board with bird and pipes, plus the running score at the top.
fn render_play_area(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    let raster = rasterize(snapshot, width, height);
    let bird_char = bird_glyph(&snapshot.bird);

    let mut lines = Vec::with_capacity(height);
    for row in 0..height {
        let spans: Vec<Span> = (0..width)
            .map(|col| {
                let sprite = raster.get(col, row).unwrap_or(Sprite::Background);
                let (glyph, style) = sprite_cell(sprite);
                let glyph = if sprite == Sprite::Bird { bird_char } else { glyph };
                Span::styled(glyph, style)
            })
            .collect();
        lines.push(Line::from(spans));
    }
    frame.render_widget(Paragraph::new(lines), area);

    if !snapshot.is_game_over() && area.height > 1 {
        let score = Paragraph::new(Span::styled(
            snapshot.display_score().to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(
            score,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let controls = [("[Space/Up/Enter]", "Jump"), ("[q/Esc]", "Quit")];
    if snapshot.is_game_over() {
        render_status_bar(frame, area, "Crashed! Jump to retry", Color::Red, &controls);
    } else {
        render_status_bar(
            frame,
            area,
            &format!("Score: {}", snapshot.display_score()),
            Color::Green,
            &controls,
        );
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let label = Style::default().fg(Color::DarkGray);
    let lines = vec![
        Line::from(vec![
            Span::styled(" Score: ", label),
            Span::styled(
                snapshot.display_score().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Best: ", label),
            Span::styled(
                (snapshot.best_score as u32).to_string(),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Rounds: ", label),
            Span::styled(
                snapshot.rounds_played.to_string(),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Pipes: ", label),
            Span::styled(
                snapshot.pipes.len().to_string(),
                Style::default().fg(Color::Green),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
