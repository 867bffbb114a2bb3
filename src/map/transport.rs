use serde::Deserialize;
use serde::Serialize;

/// A mode of travel.
///
/// Routes are labelled with the transports that serve them, and each
/// transport has a matching ticket type. `Black` doubles as the boat
/// service on the river and as Mr. X's wildcard ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    Taxi,
    Bus,
    Underground,
    Black,
}

impl Transport {
    /// Every transport, cheapest-looking first.
    pub const fn all() -> [Self; 4] {
        [Self::Taxi, Self::Bus, Self::Underground, Self::Black]
    }
    /// Bit used to represent this transport inside [`Modes`](crate::Modes).
    pub const fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl TryFrom<&str> for Transport {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "taxi" | "t" => Ok(Self::Taxi),
            "bus" | "b" => Ok(Self::Bus),
            "underground" | "tube" | "u" => Ok(Self::Underground),
            "black" | "boat" | "x" => Ok(Self::Black),
            _ => Err(anyhow::anyhow!("invalid transport {:?}", s)),
        }
    }
}

impl std::fmt::Display for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Taxi => write!(f, "taxi"),
            Self::Bus => write!(f, "bus"),
            Self::Underground => write!(f, "underground"),
            Self::Black => write!(f, "black"),
        }
    }
}
