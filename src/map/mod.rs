//! The transport network the game is played on.
//!
//! - [`Transport`]: Mode of travel shared by routes and tickets
//! - [`Modes`]: Set of transports a route supports
//! - [`Graph`]: Validated, read-only adjacency over board locations
//! - [`LONDON`]: Raw adjacency table of the standard board
mod graph;
mod london;
mod modes;
mod transport;

pub use graph::*;
pub use london::*;
pub use modes::*;
pub use transport::*;
