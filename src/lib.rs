//! Rules engine and search primitives for a hidden-movement manhunt.
//!
//! One concealed player, Mr. X, flees across the London transport network
//! while five detectives try to land on the square he occupies. Every move
//! spends a ticket for the mode of transport used.
//!
//! ## Board
//!
//! - [`Graph`]: Read-only transport network over ~199 locations
//! - [`Transport`] / [`Modes`]: Transport vocabulary and per-route mode sets
//!
//! ## Tickets and Pawns
//!
//! - [`Ledger`]: Depletable ticket counts owned by one pawn
//! - [`Pawn`] / [`Role`]: The six tokens on the board
//! - [`Team`] / [`Side`]: Player-to-pawn assignment for each side
//!
//! ## Rooms
//!
//! - [`Session`]: Turn-based state machine for a single room
//! - [`Lobby`]: Named room store
//!
//! ## Search
//!
//! - [`Search`]: Ticket-constrained cheapest/shortest paths, reachability,
//!   and location deduction
pub mod lobby;
pub mod map;
pub mod pawns;
pub mod search;
pub mod session;
pub mod tickets;
#[cfg(feature = "cli")]
pub mod cli;

pub use lobby::*;
pub use map::*;
pub use pawns::*;
pub use search::*;
pub use session::*;
pub use tickets::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Node id on the board (1-based).
pub type Location = u8;
/// Turn counter, 1 through [`MAX_TURNS`] while a game is running.
pub type Turn = u8;
/// Accumulated path cost as reported by a cost function.
pub type Cost = f32;
/// Player account name as authenticated by the session layer.
pub type Username = String;

// ============================================================================
// GAME RULES
// ============================================================================
/// Mr. X wins once he survives this many turns.
pub const MAX_TURNS: Turn = 24;
/// Turns on which Mr. X's location is revealed to everyone.
pub const SURFACING_TURNS: [Turn; 5] = [3, 8, 13, 18, 24];
/// Pool of starting squares; six are drawn without replacement per game.
pub const STARTING_LOCATIONS: [Location; 17] = [
    13, 26, 29, 34, 50, 53, 91, 103, 112, 117, 132, 138, 141, 155, 174, 197, 198,
];
/// Longest accepted room name, after trimming.
pub const MAX_NAME_LENGTH: usize = 40;

// ============================================================================
// TICKET ALLOTMENTS
// ============================================================================
/// Black tickets issued to Mr. X.
pub const X_BLACK_TICKETS: u8 = 5;
/// Double-move tickets issued to Mr. X.
pub const X_DOUBLE_TICKETS: u8 = 2;
/// Taxi tickets issued to each detective.
pub const DETECTIVE_TAXI_TICKETS: u8 = 10;
/// Bus tickets issued to each detective.
pub const DETECTIVE_BUS_TICKETS: u8 = 8;
/// Underground tickets issued to each detective.
pub const DETECTIVE_UNDERGROUND_TICKETS: u8 = 4;

/// True if Mr. X must reveal himself on this turn.
pub fn is_surfacing(turn: Turn) -> bool {
    SURFACING_TURNS.contains(&turn)
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Starts the `explore` logger: INFO and above on the terminal, everything
/// down to DEBUG in `logs/manhunt-<unix-seconds>.log`.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    let path = log_file(stamp);
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(&path).expect("create manhunt log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("install manhunt logger");
    log::info!("[explore] logging to {}", path);
}
#[cfg(feature = "cli")]
fn log_file(stamp: u64) -> String {
    format!("logs/manhunt-{}.log", stamp)
}
