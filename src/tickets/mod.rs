//! Depletable movement resources.
//!
//! - [`Ticket`]: Ticket types, one per transport plus the double-move ticket
//! - [`Count`]: Finite amount or unlimited supply
//! - [`Ledger`]: Per-pawn ticket counts
mod ledger;
mod ticket;

pub use ledger::*;
pub use ticket::*;
