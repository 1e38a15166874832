//! Driver threads for a running round.
//!
//! Two loops share one `FlappyGame` behind a mutex. The tick driver measures
//! wall-clock Δt and advances physics about once per frame. The spawner
//! driver adds a pipe pair every spawn interval. Each loop sleeps with
//! `recv_timeout` on its own stop channel, so a stop message (or the sender
//! being dropped) wakes it immediately.

use crate::core::game_loop::FlappyGame;
use rand::rngs::StdRng;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// Notifications for whoever draws the game.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionEvent {
    /// A tick completed; state is consistent and worth drawing.
    Redraw,
    /// The round ended with this score.
    GameOver { score: f64 },
    /// A new round started after a game over.
    Restarted,
}

/// Lock the shared game. A poisoned lock still holds plain numeric state,
/// so keep going with it.
pub fn lock_game(game: &Mutex<FlappyGame>) -> MutexGuard<'_, FlappyGame> {
    game.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Returns true when the loop should keep sleeping-then-working.
fn wait_or_stop(stop: &Receiver<()>, period: Duration) -> bool {
    matches!(stop.recv_timeout(period), Err(RecvTimeoutError::Timeout))
}

/// Physics loop. Exits on stop or when the round ends; on game over it also
/// tells the spawner to stop.
pub fn run_tick_driver(
    game: Arc<Mutex<FlappyGame>>,
    events: Sender<SessionEvent>,
    stop: Receiver<()>,
    spawner_stop: Sender<()>,
    frame: Duration,
) {
    let mut last_tick = Instant::now();

    loop {
        let now = Instant::now();
        let dt = now.duration_since(last_tick).as_secs_f64();
        last_tick = now;

        let (result, score) = {
            let mut game = lock_game(&game);
            let result = game.tick(dt);
            (result, game.score())
        };

        let _ = events.send(SessionEvent::Redraw);

        if result.game_over {
            log::info!(
                "Round over: score {} (collided: {}, floor: {})",
                score as u32,
                result.collided,
                result.hit_floor
            );
            let _ = spawner_stop.send(());
            let _ = events.send(SessionEvent::GameOver { score });
            break;
        }

        if !wait_or_stop(&stop, frame) {
            break;
        }
    }

    log::debug!("Tick driver exited");
}

/// Pipe spawning loop, independent of the tick rate.
pub fn run_spawner_driver(
    game: Arc<Mutex<FlappyGame>>,
    stop: Receiver<()>,
    interval: Duration,
    mut rng: StdRng,
) {
    while wait_or_stop(&stop, interval) {
        let spawned = lock_game(&game).spawn_pipes(&mut rng);
        if !spawned {
            break;
        }
        log::debug!("Spawned pipe pair");
    }

    log::debug!("Spawner driver exited");
}
