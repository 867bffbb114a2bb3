//! Ticket-constrained search over a [`Graph`](crate::Graph).
//!
//! Every operation takes the caller's [`Ledger`](crate::Ledger) by value and
//! threads copies of it through the search, so concurrent callers never
//! share state.
//!
//! - [`Search`]: Cheapest and shortest paths, reachability, deduction
//! - [`Path`] / [`Step`] / [`Paths`]: Search results
//! - [`equal_cost`] / [`avoid_black`]: Stock cost functions
mod cost;
mod path;
mod search;

pub use cost::*;
pub use path::*;
pub use search::*;
