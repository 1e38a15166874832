//! Flappy - terminal Flappy Bird.
//!
//! The simulation (`flappy`, `core`) is plain data plus pure update
//! functions; `runtime` drives it in real time from threads and `ui` draws
//! read-only snapshots of it.

pub mod build_info;
pub mod core;
pub mod flappy;
pub mod input;
pub mod runtime;
pub mod ui;

pub use crate::core::config::GameConfig;
pub use crate::core::game_loop::{FlappyGame, Snapshot};
pub use crate::flappy::types::{Bird, JumpOutcome, Phase, Pipe, Sprite, TickResult, World};
pub use crate::runtime::{Session, SessionEvent};
