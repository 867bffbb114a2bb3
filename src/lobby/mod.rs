//! Room registry.
//!
//! - [`Store`]: Create, fetch, and delete rooms by name
//! - [`Lobby`]: In-memory store that prunes abandoned rooms
//! - [`Listing`]: Summary of a room for game lists
mod listing;
mod lobby;
mod store;

pub use listing::*;
pub use lobby::*;
pub use store::*;
