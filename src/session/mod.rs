//! Per-room game state machine.
//!
//! ## Core
//!
//! - [`Session`]: Turn order, move legality, concealment, and win detection
//! - [`Status`]: NEW → IN_PROGRESS → COMPLETE
//! - [`Setup`]: Starting squares and ticket issue
//!
//! ## Moves
//!
//! - [`Move`] / [`Leg`]: A single or double move request
//! - [`History`] / [`Record`]: Committed moves per turn
//! - [`Outcome`] / [`Reason`]: Who won and why
//!
//! ## Observers
//!
//! - [`Event`]: Notifications fanned out to registered players
//! - [`Observers`]: Player-to-sink registrations owned by the session
//!
//! A session performs no locking. The host must run one mutating
//! operation to completion before dispatching the next for the same room.
mod error;
mod event;
mod history;
mod moves;
mod observers;
mod outcome;
mod session;
mod setup;
mod status;

pub use error::*;
pub use event::*;
pub use history::*;
pub use moves::*;
pub use observers::*;
pub use outcome::*;
pub use session::*;
pub use setup::*;
pub use status::*;
