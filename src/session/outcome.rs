use crate::Location;
use crate::MAX_TURNS;
use crate::Role;
use crate::Side;
use serde::Serialize;

/// Why the game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Reason {
    /// A detective landed on Mr. X, or Mr. X landed on a detective.
    Caught { by: Role, at: Location },
    /// Mr. X survived the final turn.
    Evaded,
    /// No detective had a legal move.
    Cornered,
}

impl Reason {
    pub fn winner(&self) -> Side {
        match self {
            Self::Caught { .. } => Side::Detectives,
            Self::Evaded | Self::Cornered => Side::MrX,
        }
    }
}

impl std::fmt::Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Caught { by, at } => write!(
                f,
                "Mr. X was caught by the {} Detective at location {}. The detectives win!",
                by, at
            ),
            Self::Evaded => write!(
                f,
                "Mr. X evaded the detectives for {} turns. Mr. X wins!",
                MAX_TURNS
            ),
            Self::Cornered => write!(
                f,
                "All detectives are stuck: none of them is able to move. Mr. X wins!"
            ),
        }
    }
}

/// Final result of a completed game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub winner: Side,
    pub reason: Reason,
}

impl From<Reason> for Outcome {
    fn from(reason: Reason) -> Self {
        Self {
            winner: reason.winner(),
            reason,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn winners_follow_reason() {
        assert_eq!(Outcome::from(Reason::Evaded).winner, Side::MrX);
        assert_eq!(Outcome::from(Reason::Cornered).winner, Side::MrX);
        let caught = Outcome::from(Reason::Caught { by: Role::Blue, at: 99 });
        assert_eq!(caught.winner, Side::Detectives);
        assert_eq!(
            caught.to_string(),
            "Mr. X was caught by the Blue Detective at location 99. The detectives win!"
        );
    }
    #[test]
    fn reasons_mention_cause() {
        assert!(Reason::Evaded.to_string().contains("evaded"));
        assert!(Reason::Cornered.to_string().contains("stuck"));
    }
}
