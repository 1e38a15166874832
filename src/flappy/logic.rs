//! Update step: gravity, pipe scrolling, scoring, collision and pruning.

use super::types::{Bird, Pipe, TickResult, World};
use crate::core::config::GameConfig;
use crate::core::constants::SCORE_PER_PIPE;

/// Clamp Δt into `[0, max]`. NaN and negative values become 0 so a bad
/// clock reading freezes the frame instead of corrupting it.
pub fn clamp_delta(dt: f64, max: f64) -> f64 {
    if dt.is_nan() || dt <= 0.0 {
        0.0
    } else {
        dt.min(max)
    }
}

/// Bird and pipe rectangles overlap. Touching edges do not count.
pub fn collides(bird: &Bird, pipe: &Pipe) -> bool {
    bird.bounds().overlaps(&pipe.bounds())
}

/// Advance the world by `dt` seconds.
///
/// The caller decides what a game-over result means; the world itself has no
/// notion of phase and will keep integrating if ticked again.
pub fn update(world: &mut World, config: &GameConfig, dt: f64) -> TickResult {
    let dt = clamp_delta(dt, config.max_delta);
    let mut result = TickResult::default();

    // Bird
    let bird = &mut world.bird;
    bird.velocity_y += config.gravity * dt;
    bird.y += bird.velocity_y * dt;
    bird.y = bird.y.max(0.0);

    for pipe in &mut world.pipes {
        pipe.x -= config.pipe_speed * dt;

        if !pipe.passed && world.bird.x > pipe.x + pipe.width {
            pipe.passed = true;
            world.score += SCORE_PER_PIPE;
            result.pipes_passed += 1;
        }

        if collides(&world.bird, pipe) {
            result.collided = true;
        }
    }

    let before = world.pipes.len();
    world.pipes.retain(|p| !p.is_off_screen());
    result.pruned = before - world.pipes.len();

    if world.bird.y > config.board_height {
        result.hit_floor = true;
    }

    result.game_over = result.collided || result.hit_floor;
    result
}
