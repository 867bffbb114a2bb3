use crate::Session;
use crate::Status;
use serde::Serialize;

/// What a game list shows about one room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Listing {
    pub name: String,
    pub status: Status,
    pub players: usize,
}

impl From<&Session> for Listing {
    fn from(session: &Session) -> Self {
        Self {
            name: session.name().to_string(),
            status: session.status(),
            players: session.players().len(),
        }
    }
}

impl std::fmt::Display for Listing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:<40} {:<12} {}", self.name, self.status, self.players)
    }
}
