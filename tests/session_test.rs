//! Integration test: real-time session
//!
//! Runs the tick and spawner drivers on real threads with short intervals and
//! checks gravity, spawning, game over and the stop-then-restart sequence.

use flappy::{GameConfig, JumpOutcome, Phase, Session, SessionEvent};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

const WAIT: Duration = Duration::from_secs(5);

fn fast_config() -> GameConfig {
    GameConfig {
        frame_ms: 2,
        spawn_interval_ms: 20,
        seed: Some(42),
        ..GameConfig::default()
    }
}

fn start(config: GameConfig) -> (Session, Receiver<SessionEvent>) {
    let (tx, rx) = mpsc::channel();
    let mut session = Session::new(config, tx);
    session.start().unwrap();
    (session, rx)
}

/// Block until a game-over event arrives.
fn wait_for_game_over(events: &Receiver<SessionEvent>) -> f64 {
    let deadline = Instant::now() + WAIT;
    while Instant::now() < deadline {
        if let Ok(SessionEvent::GameOver { score }) = events.recv_timeout(WAIT) {
            return score;
        }
    }
    panic!("no game over within {:?}", WAIT);
}

#[test]
fn test_bird_falls_in_real_time() {
    let (mut session, events) = start(GameConfig::default());
    assert_eq!(events.recv_timeout(WAIT).unwrap(), SessionEvent::Redraw);

    thread::sleep(Duration::from_millis(150));
    let snapshot = session.snapshot();
    assert!(snapshot.bird.y > 320.0);
    assert!(snapshot.bird.velocity_y > 0.0);
    session.stop();
}

#[test]
fn test_spawner_adds_pairs_on_its_own_period() {
    let config = GameConfig {
        // Slow the bird down so the round outlives the wait
        gravity: 1.0,
        ..fast_config()
    };
    let (mut session, _events) = start(config);

    thread::sleep(Duration::from_millis(150));
    session.stop();
    let snapshot = session.snapshot();
    assert!(snapshot.pipes.len() >= 2);
    assert!(snapshot.pipes.iter().all(|p| p.x <= snapshot.board_width));
}

#[test]
fn test_game_over_halts_round() {
    let config = GameConfig {
        gravity: 20_000.0,
        ..fast_config()
    };
    let (mut session, events) = start(config);

    wait_for_game_over(&events);
    let over = session.snapshot();
    assert_eq!(over.phase, Phase::GameOver);
    assert_eq!(over.rounds_played, 1);

    // Drivers have exited on their own; nothing moves any more
    thread::sleep(Duration::from_millis(60));
    assert_eq!(session.snapshot(), over);
    session.stop();
}

#[test]
fn test_jump_after_game_over_restarts() {
    let config = GameConfig {
        gravity: 20_000.0,
        ..fast_config()
    };
    let (mut session, events) = start(config);
    wait_for_game_over(&events);

    assert_eq!(session.jump().unwrap(), JumpOutcome::Restarted);
    assert!(session.has_drivers());

    // The restart is announced and the new round is live
    let deadline = Instant::now() + WAIT;
    let mut saw_restart = false;
    while Instant::now() < deadline && !saw_restart {
        if let Ok(SessionEvent::Restarted) = events.recv_timeout(WAIT) {
            saw_restart = true;
        }
    }
    assert!(saw_restart);

    // Heavy gravity ends the second round too
    let deadline = Instant::now() + WAIT;
    while session.snapshot().rounds_played < 2 {
        assert!(Instant::now() < deadline, "second round never ended");
        thread::sleep(Duration::from_millis(5));
    }
    assert_eq!(session.snapshot().phase, Phase::GameOver);
    session.stop();
    assert!(!session.has_drivers());
}

#[test]
fn test_jump_while_running_sets_impulse() {
    let config = GameConfig {
        // Weak enough that a few ticks barely dent the impulse
        gravity: 1.0,
        ..fast_config()
    };
    let (mut session, _events) = start(config);

    assert_eq!(session.jump().unwrap(), JumpOutcome::Flapped);
    let velocity = session.snapshot().bird.velocity_y;
    assert!(velocity < -160.0 && velocity >= -170.0, "velocity was {}", velocity);
    session.stop();
}

#[test]
fn test_dropping_session_stops_drivers() {
    let (session, events) = start(fast_config());
    let _ = events.recv_timeout(WAIT);
    drop(session);

    // Every sender clone lived in a driver; once they are joined the
    // channel disconnects after draining.
    let deadline = Instant::now() + WAIT;
    loop {
        match events.recv_timeout(Duration::from_millis(50)) {
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
            _ if Instant::now() > deadline => panic!("drivers still running"),
            _ => {}
        }
    }
}
