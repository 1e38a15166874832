//! Round state machine.
//!
//! `FlappyGame` owns the world and the round phase. It is driven from the
//! outside: something calls `tick` with elapsed time, `spawn_pipes` on the
//! spawner period and `jump` on player input. The session runtime does this
//! from threads; tests do it directly.

use crate::core::config::GameConfig;
use crate::flappy::logic::update;
use crate::flappy::spawner::spawn_pair;
use crate::flappy::types::{Bird, JumpOutcome, Phase, Pipe, TickResult, World};
use rand::Rng;

/// One game: the current round plus in-memory history.
#[derive(Debug, Clone)]
pub struct FlappyGame {
    config: GameConfig,
    world: World,
    phase: Phase,
    /// Rounds finished so far
    rounds_played: u32,
    /// Best score of any finished round. Never written to disk.
    best_score: f64,
}

/// Read-only copy of everything the renderer needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub board_width: f64,
    pub board_height: f64,
    pub bird: Bird,
    pub pipes: Vec<Pipe>,
    pub score: f64,
    pub phase: Phase,
    pub best_score: f64,
    pub rounds_played: u32,
}

impl Snapshot {
    /// Whole points for display; half points are a pipe into the gap.
    pub fn display_score(&self) -> u32 {
        self.score as u32
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }
}

impl FlappyGame {
    pub fn new(config: GameConfig) -> Self {
        let world = World::new(&config);
        Self {
            config,
            world,
            phase: Phase::Running,
            rounds_played: 0,
            best_score: 0.0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable access for scripted setups.
    #[doc(hidden)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn score(&self) -> f64 {
        self.world.score
    }

    pub fn best_score(&self) -> f64 {
        self.best_score
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Advance a running round by `dt` seconds. No-op once the round is over.
    pub fn tick(&mut self, dt: f64) -> TickResult {
        if self.phase == Phase::GameOver {
            return TickResult::default();
        }

        let result = update(&mut self.world, &self.config, dt);
        if result.game_over {
            self.finish_round();
        }
        result
    }

    /// Append a fresh pipe pair. Refused (returns false) once the round is
    /// over.
    pub fn spawn_pipes<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if self.phase == Phase::GameOver {
            return false;
        }
        self.world.pipes.extend(spawn_pair(&self.config, rng));
        true
    }

    /// Player input: flap while running, restart once over.
    pub fn jump(&mut self) -> JumpOutcome {
        match self.phase {
            Phase::Running => {
                self.world.bird.velocity_y = self.config.jump_velocity;
                JumpOutcome::Flapped
            }
            Phase::GameOver => {
                self.reset();
                JumpOutcome::Restarted
            }
        }
    }

    /// Start a new round: no pipes, zero score, bird back at rest.
    pub fn reset(&mut self) {
        self.world.reset(&self.config);
        self.phase = Phase::Running;
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board_width: self.config.board_width,
            board_height: self.config.board_height,
            bird: self.world.bird.clone(),
            pipes: self.world.pipes.clone(),
            score: self.world.score,
            phase: self.phase,
            best_score: self.best_score,
            rounds_played: self.rounds_played,
        }
    }

    fn finish_round(&mut self) {
        self.phase = Phase::GameOver;
        self.rounds_played += 1;
        if self.world.score > self.best_score {
            self.best_score = self.world.score;
        }
    }
}
