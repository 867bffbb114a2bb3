use crate::Transport;
use serde::Deserialize;
use serde::Serialize;

/// A ticket type held in a [`Ledger`](crate::Ledger).
///
/// Four of the five types pay for one hop on the matching transport;
/// `Double` is spent once when Mr. X makes two moves in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ticket {
    Taxi,
    Bus,
    Underground,
    Black,
    Double,
}

impl Ticket {
    pub const fn all() -> [Self; 5] {
        [
            Self::Taxi,
            Self::Bus,
            Self::Underground,
            Self::Black,
            Self::Double,
        ]
    }
    /// Slot of this ticket inside a ledger.
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl From<Transport> for Ticket {
    fn from(transport: Transport) -> Self {
        match transport {
            Transport::Taxi => Self::Taxi,
            Transport::Bus => Self::Bus,
            Transport::Underground => Self::Underground,
            Transport::Black => Self::Black,
        }
    }
}

impl TryFrom<&str> for Ticket {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "double" | "d" => Ok(Self::Double),
            other => Transport::try_from(other).map(Self::from),
        }
    }
}

impl std::fmt::Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Taxi => write!(f, "taxi"),
            Self::Bus => write!(f, "bus"),
            Self::Underground => write!(f, "underground"),
            Self::Black => write!(f, "black"),
            Self::Double => write!(f, "double"),
        }
    }
}
