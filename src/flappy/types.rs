//! Flappy Bird data structures.
//!
//! Plain data records for the bird, the pipes and the round phase. Nothing
//! here knows about time or randomness; see `logic` and `spawner`.

use crate::core::config::GameConfig;

/// Opaque image handle. The renderer decides what each one looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Background,
    Bird,
    TopPipe,
    BottomPipe,
}

/// Axis-aligned rectangle, origin top-left, y growing downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Strict overlap test. Rectangles that only share an edge do not
    /// overlap.
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

/// The player's bird. `x` is fixed for the whole round.
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Vertical velocity in px/s (positive = downward).
    pub velocity_y: f64,
    pub sprite: Sprite,
}

impl Bird {
    /// A bird at the configured start position, at rest.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.bird_start_x(),
            y: config.bird_start_y(),
            width: config.bird_width,
            height: config.bird_height,
            velocity_y: 0.0,
            sprite: Sprite::Bird,
        }
    }

    /// Put the bird back at its start position, at rest.
    pub fn reset(&mut self, config: &GameConfig) {
        *self = Self::new(config);
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }
}

/// One half of a pipe pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    /// Horizontal position, decreasing as the pipe scrolls left.
    pub x: f64,
    /// Fixed at spawn.
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Set once the bird clears this pipe. Never reset.
    pub passed: bool,
    pub sprite: Sprite,
}

impl Pipe {
    pub fn new(config: &GameConfig, y: f64, sprite: Sprite) -> Self {
        Self {
            x: config.board_width,
            y,
            width: config.pipe_width,
            height: config.pipe_height,
            passed: false,
            sprite,
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }

    /// Fully past the left edge of the board.
    pub fn is_off_screen(&self) -> bool {
        self.x + self.width < 0.0
    }
}

/// Entity state the update step works on.
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    pub bird: Bird,
    /// Spawn order; pruned from the front as pipes leave the board.
    pub pipes: Vec<Pipe>,
    /// +0.5 per pipe passed, so one full point per gap.
    pub score: f64,
}

impl World {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            bird: Bird::new(config),
            pipes: Vec::new(),
            score: 0.0,
        }
    }

    pub fn reset(&mut self, config: &GameConfig) {
        self.bird.reset(config);
        self.pipes.clear();
        self.score = 0.0;
    }
}

/// Round phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    GameOver,
}

/// What a jump input did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpOutcome {
    /// Impulse applied to a running round.
    Flapped,
    /// A finished round was reset and a new one started.
    Restarted,
}

/// Everything one tick of the update step observed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickResult {
    /// Pipes newly marked as passed this tick
    pub pipes_passed: u32,
    /// Pipes removed for leaving the board
    pub pruned: usize,
    /// Bird overlapped a pipe
    pub collided: bool,
    /// Bird fell past the bottom of the board
    pub hit_floor: bool,
    /// Round ended this tick
    pub game_over: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f64, y: f64, width: f64, height: f64) -> Bounds {
        Bounds {
            x,
            y,
            width,
            height,
        }
    }

    #[test]
    fn test_overlap_detected() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&rect(10.0, 0.0, 5.0, 5.0)));
        assert!(!a.overlaps(&rect(0.0, 10.0, 5.0, 5.0)));
        assert!(!a.overlaps(&rect(-5.0, 0.0, 5.0, 5.0)));
        assert!(!a.overlaps(&rect(0.0, -5.0, 5.0, 5.0)));
    }

    #[test]
    fn test_new_bird_at_start() {
        let config = GameConfig::default();
        let bird = Bird::new(&config);
        assert_eq!(bird.x, 45.0);
        assert_eq!(bird.y, 320.0);
        assert_eq!(bird.width, 34.0);
        assert_eq!(bird.height, 24.0);
        assert_eq!(bird.velocity_y, 0.0);
        assert_eq!(bird.sprite, Sprite::Bird);
    }

    #[test]
    fn test_bird_reset() {
        let config = GameConfig::default();
        let mut bird = Bird::new(&config);
        bird.y = 12.0;
        bird.velocity_y = 300.0;
        bird.reset(&config);
        assert_eq!(bird, Bird::new(&config));
    }

    #[test]
    fn test_new_pipe_starts_off_right_edge() {
        let config = GameConfig::default();
        let pipe = Pipe::new(&config, -200.0, Sprite::TopPipe);
        assert_eq!(pipe.x, config.board_width);
        assert_eq!(pipe.y, -200.0);
        assert!(!pipe.passed);
        assert!(!pipe.is_off_screen());
    }

    #[test]
    fn test_pipe_off_screen_boundary() {
        let config = GameConfig::default();
        let mut pipe = Pipe::new(&config, 0.0, Sprite::BottomPipe);
        // Right edge exactly at 0 is still on the board
        pipe.x = -pipe.width;
        assert!(!pipe.is_off_screen());
        pipe.x = -pipe.width - 0.01;
        assert!(pipe.is_off_screen());
    }
}
