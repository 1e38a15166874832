//! Terminal UI. Reads snapshots only; never touches live game state.

pub mod flappy_scene;
pub mod game_common;

use crate::core::game_loop::Snapshot;
use ratatui::Frame;

/// Draw one frame of the game screen.
pub fn draw_ui(frame: &mut Frame, snapshot: &Snapshot) {
    let area = frame.size();
    flappy_scene::render_flappy(frame, area, snapshot);
}
