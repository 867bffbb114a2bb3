use super::*;
use crate::InsufficientTicket;
use crate::Ledger;
use crate::Location;
use crate::Ticket;
use crate::Username;

/// A token on the board.
///
/// The owning player is `None` until a team assignment hands the pawn to
/// someone, and again whenever its team loses all players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pawn {
    role: Role,
    location: Location,
    player: Option<Username>,
    ledger: Ledger,
}

impl Pawn {
    pub fn new(role: Role, location: Location, ledger: Ledger) -> Self {
        Self {
            role,
            location,
            player: None,
            ledger,
        }
    }
    pub fn role(&self) -> Role {
        self.role
    }
    pub fn location(&self) -> Location {
        self.location
    }
    pub fn player(&self) -> Option<&Username> {
        self.player.as_ref()
    }
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }
    /// True if this pawn belongs to the given player.
    pub fn is_owned_by(&self, player: &str) -> bool {
        self.player.as_deref() == Some(player)
    }
    pub fn relocate(&mut self, location: Location) {
        self.location = location;
    }
    pub fn assign(&mut self, player: Option<Username>) {
        self.player = player;
    }
    /// Spends one ticket from this pawn's ledger.
    pub fn spend<T>(&mut self, ticket: T) -> Result<(), InsufficientTicket>
    where
        T: Into<Ticket>,
    {
        self.ledger.consume(ticket)
    }
}

impl std::fmt::Display for Pawn {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:<6} @{:>3} {}",
            self.role,
            self.location,
            self.player.as_deref().unwrap_or("-")
        )
    }
}
