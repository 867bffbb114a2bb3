use serde::Serialize;

/// Lifecycle of a room. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Accepting players and votes.
    New,
    /// Moves are being played.
    InProgress,
    /// A side has won; only observer detach is still accepted.
    Complete,
}

impl Status {
    pub fn is_new(&self) -> bool {
        matches!(self, Self::New)
    }
    pub fn is_running(&self) -> bool {
        matches!(self, Self::InProgress)
    }
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::New => write!(f, "new"),
            Self::InProgress => write!(f, "in progress"),
            Self::Complete => write!(f, "complete"),
        }
    }
}
