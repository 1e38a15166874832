//! Flappy Bird simulation.
//!
//! A bird falls under gravity, the player makes it jump, pipe pairs scroll in
//! from the right and the player scores by passing through the gaps. Hitting
//! a pipe or falling past the floor ends the round.

pub mod logic;
pub mod spawner;
pub mod types;

pub use logic::*;
pub use spawner::*;
pub use types::*;
