use super::*;
use crate::Ledger;
use crate::Location;
use crate::Role;
use crate::Side;
use crate::Transport;
use crate::Turn;
use crate::Username;
use serde::Serialize;

/// Notifications a session sends to its observers.
///
/// Events carrying Mr. X's location are built per viewer, so a detective's
/// copy has `location: None` whenever the square is concealed.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    PlayerJoined { player: Username, side: Side },
    PlayerLeft { player: Username },
    PlayerRejoined { player: Username },
    /// Team, readiness, or pawn assignment of a player changed.
    PlayerModified {
        player: Username,
        side: Side,
        ready: bool,
        pawns: Vec<Role>,
    },
    GameStart,
    /// Board snapshot as seen by the recipient.
    PawnInfo { pawns: Vec<PawnView> },
    TurnNumber { turn: Turn },
    /// The pawn that must move next.
    Mover { pawn: Role },
    Moved {
        pawn: Role,
        #[serde(skip_serializing_if = "Option::is_none")]
        location: Option<Location>,
        transport: Transport,
    },
    /// The pawn has no legal move and is skipped this turn.
    Stuck { pawn: Role },
    GameOver { winner: Side, reason: String },
    /// Full move history as seen by the recipient.
    History { turns: Vec<Vec<Record>> },
}

impl Event {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("serialize event")
    }
}

/// One pawn as it appears to a particular viewer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PawnView {
    pub pawn: Role,
    pub player: Option<Username>,
    pub location: Option<Location>,
    pub tickets: Ledger,
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PlayerJoined { player, side } => write!(f, "{} joined {}", player, side),
            Self::PlayerLeft { player } => write!(f, "{} left", player),
            Self::PlayerRejoined { player } => write!(f, "{} rejoined", player),
            Self::PlayerModified { player, side, ready, .. } => {
                write!(f, "{} on {} ready={}", player, side, ready)
            }
            Self::GameStart => write!(f, "game start"),
            Self::PawnInfo { pawns } => write!(f, "pawn info ({})", pawns.len()),
            Self::TurnNumber { turn } => write!(f, "turn {}", turn),
            Self::Mover { pawn } => write!(f, "{} to move", pawn),
            Self::Moved {
                pawn,
                location: Some(location),
                transport,
            } => write!(f, "{} -> {} by {}", pawn, location, transport),
            Self::Moved {
                pawn,
                location: None,
                transport,
            } => write!(f, "{} -> ? by {}", pawn, transport),
            Self::Stuck { pawn } => write!(f, "{} is stuck", pawn),
            Self::GameOver { winner, reason } => write!(f, "{} win: {}", winner, reason),
            Self::History { turns } => write!(f, "history ({} turns)", turns.len()),
        }
    }
}
