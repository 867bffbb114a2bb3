//! Interactive board explorer.
//!
//! Runs search queries against the London board and plays seeded random
//! games, one command per line.
mod explorer;
mod query;

pub use explorer::*;
pub use query::*;
