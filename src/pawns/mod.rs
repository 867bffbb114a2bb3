//! The six tokens on the board and the teams that control them.
//!
//! - [`Role`]: Pawn identity and the fixed move order
//! - [`Pawn`]: Location, owner, and tickets of one token
//! - [`Side`] / [`Team`]: Mr. X or the detectives, with player assignment
mod pawn;
mod role;
mod team;

pub use pawn::*;
pub use role::*;
pub use team::*;
