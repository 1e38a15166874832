//! A playable session: one shared game plus its driver threads.

use super::driver::{lock_game, run_spawner_driver, run_tick_driver, SessionEvent};
use crate::core::config::GameConfig;
use crate::core::game_loop::{FlappyGame, Snapshot};
use crate::flappy::types::JumpOutcome;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;
use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

/// Handles for the two threads of one round.
struct Drivers {
    tick_stop: Sender<()>,
    spawner_stop: Sender<()>,
    tick: JoinHandle<()>,
    spawner: JoinHandle<()>,
}

impl Drivers {
    /// Signal both loops and wait for them. Send errors just mean the loop
    /// already exited on its own.
    fn shutdown(self) {
        let _ = self.tick_stop.send(());
        let _ = self.spawner_stop.send(());
        if self.tick.join().is_err() {
            log::error!("Tick driver panicked");
        }
        if self.spawner.join().is_err() {
            log::error!("Spawner driver panicked");
        }
    }
}

/// Owns the shared game and at most one set of drivers at a time.
pub struct Session {
    game: Arc<Mutex<FlappyGame>>,
    events: Sender<SessionEvent>,
    drivers: Option<Drivers>,
    /// Rounds started, used to vary a fixed seed between rounds.
    rounds_started: u64,
}

impl Session {
    pub fn new(config: GameConfig, events: Sender<SessionEvent>) -> Self {
        Self {
            game: Arc::new(Mutex::new(FlappyGame::new(config))),
            events,
            drivers: None,
            rounds_started: 0,
        }
    }

    /// Launch the drivers for the current round. Does nothing if they are
    /// already launched.
    pub fn start(&mut self) -> io::Result<()> {
        if self.drivers.is_some() {
            return Ok(());
        }

        let config = lock_game(&self.game).config().clone();
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(self.rounds_started)),
            None => StdRng::from_entropy(),
        };

        let (tick_stop, tick_stop_rx) = mpsc::channel();
        let (spawner_stop, spawner_stop_rx) = mpsc::channel();

        let spawner = {
            let game = Arc::clone(&self.game);
            let interval = config.spawn_interval();
            thread::Builder::new()
                .name("flappy-spawner".to_string())
                .spawn(move || run_spawner_driver(game, spawner_stop_rx, interval, rng))?
        };

        let tick = {
            let game = Arc::clone(&self.game);
            let events = self.events.clone();
            let spawner_stop = spawner_stop.clone();
            let frame = config.frame_duration();
            thread::Builder::new()
                .name("flappy-tick".to_string())
                .spawn(move || run_tick_driver(game, events, tick_stop_rx, spawner_stop, frame))
        };
        let tick = match tick {
            Ok(handle) => handle,
            Err(e) => {
                let _ = spawner_stop.send(());
                let _ = spawner.join();
                return Err(e);
            }
        };

        self.rounds_started += 1;
        log::info!("Round {} started", self.rounds_started);
        self.drivers = Some(Drivers {
            tick_stop,
            spawner_stop,
            tick,
            spawner,
        });
        Ok(())
    }

    /// Halt both drivers and wait for them to exit. Safe to call repeatedly.
    pub fn stop(&mut self) {
        if let Some(drivers) = self.drivers.take() {
            drivers.shutdown();
            log::debug!("Drivers stopped");
        }
    }

    /// True while driver threads are launched for the current round. They
    /// exit by themselves at game over but stay counted until `stop`.
    pub fn has_drivers(&self) -> bool {
        self.drivers.is_some()
    }

    /// Player jump input. A running round gets the impulse; a finished one
    /// has its drivers fully stopped before the reset and a fresh pair
    /// launched after it.
    pub fn jump(&mut self) -> io::Result<JumpOutcome> {
        {
            let mut game = lock_game(&self.game);
            if game.is_running() {
                return Ok(game.jump());
            }
        }

        self.stop();
        let outcome = lock_game(&self.game).jump();
        self.start()?;
        let _ = self.events.send(SessionEvent::Restarted);
        Ok(outcome)
    }

    /// Consistent copy of the game, never taken mid-tick.
    pub fn snapshot(&self) -> Snapshot {
        lock_game(&self.game).snapshot()
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.stop();
    }
}
