use super::*;
use crate::InsufficientTicket;
use crate::Role;
use crate::Side;
use crate::Username;

/// Errors returned by room and move operations.
///
/// Every rejection leaves the session exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Room name is empty, too long, or contains a forbidden character.
    InvalidName(String),
    /// A room with this name already exists.
    NameTaken(String),
    /// No room with this name.
    NoSuchRoom(String),
    /// Starting squares are unknown to the board or not distinct.
    InvalidSetup(String),
    /// Operation not allowed in the room's current status.
    WrongStatus(Status),
    AlreadyJoined(Username),
    /// Player is not part of the room, or of the team they named.
    UnknownPlayer(Username),
    /// Rejoining a running game requires being on its roster.
    NotPermitted(Username),
    /// Every seat on both teams is taken.
    GameFull,
    TeamFull(Side),
    /// The pawn is not the current mover.
    NotYourTurn(Role),
    /// The pawn belongs to someone else.
    NotYourPawn(Role),
    IllegalMove(Move),
    InsufficientTicket(InsufficientTicket),
}

impl From<InsufficientTicket> for GameError {
    fn from(e: InsufficientTicket) -> Self {
        Self::InsufficientTicket(e)
    }
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName(s) => write!(f, "invalid room name {:?}", s),
            Self::NameTaken(s) => write!(f, "room {:?} already exists", s),
            Self::NoSuchRoom(s) => write!(f, "no room named {:?}", s),
            Self::InvalidSetup(s) => write!(f, "invalid setup: {}", s),
            Self::WrongStatus(s) => write!(f, "not allowed while the game is {}", s),
            Self::AlreadyJoined(p) => write!(f, "{} already joined", p),
            Self::UnknownPlayer(p) => write!(f, "{} is not in this game", p),
            Self::NotPermitted(p) => write!(f, "{} may not join a game in progress", p),
            Self::GameFull => write!(f, "game is full"),
            Self::TeamFull(s) => write!(f, "{} team is full", s),
            Self::NotYourTurn(r) => write!(f, "it is not {}'s turn", r),
            Self::NotYourPawn(r) => write!(f, "{} is controlled by another player", r),
            Self::IllegalMove(m) => write!(f, "illegal move: {}", m),
            Self::InsufficientTicket(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Ticket;
    use crate::Transport;
    #[test]
    fn display_names_the_problem() {
        let e = GameError::IllegalMove(Move::single(Role::Red, 8, Transport::Bus));
        assert_eq!(e.to_string(), "illegal move: Red 8 bus");
        let e = GameError::WrongStatus(Status::Complete);
        assert_eq!(e.to_string(), "not allowed while the game is complete");
    }
    #[test]
    fn ticket_errors_convert() {
        let e = GameError::from(InsufficientTicket(Ticket::Double));
        assert!(matches!(e, GameError::InsufficientTicket(_)));
    }
}
