//! Real-time session runtime: driver threads around the round state machine.

pub mod driver;
pub mod session;

pub use driver::SessionEvent;
pub use session::Session;
