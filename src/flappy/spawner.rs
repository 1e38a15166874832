//! Pipe pair spawning.

use super::types::{Pipe, Sprite};
use crate::core::config::GameConfig;
use rand::Rng;

/// Random top-pipe offset: `origin - h/4 - r * h/2` with `r` in `[0, 1)`.
pub fn random_top_y<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> f64 {
    let r: f64 = rng.gen();
    config.pipe_origin_y - config.pipe_height / 4.0 - r * (config.pipe_height / 2.0)
}

/// Build a top/bottom pair whose top pipe sits at `top_y`. The bottom pipe
/// starts one pipe height plus the opening below it.
pub fn pair_at(config: &GameConfig, top_y: f64) -> [Pipe; 2] {
    let bottom_y = top_y + config.pipe_height + config.opening_space();
    [
        Pipe::new(config, top_y, Sprite::TopPipe),
        Pipe::new(config, bottom_y, Sprite::BottomPipe),
    ]
}

/// Spawn a pair at a random offset, just off the right edge.
pub fn spawn_pair<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> [Pipe; 2] {
    pair_at(config, random_top_y(config, rng))
}
