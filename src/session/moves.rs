use crate::Location;
use crate::Role;
use crate::Transport;
use serde::Deserialize;
use serde::Serialize;

/// One hop: where the pawn goes and which ticket pays for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Leg {
    pub destination: Location,
    pub transport: Transport,
}

impl From<(Location, Transport)> for Leg {
    fn from((destination, transport): (Location, Transport)) -> Self {
        Self {
            destination,
            transport,
        }
    }
}

impl std::fmt::Display for Leg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.destination, self.transport)
    }
}

/// A move request for one pawn: a single leg, or two legs paid for with
/// a double-move ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pawn: Role,
    first: Leg,
    second: Option<Leg>,
}

impl Move {
    pub fn single(pawn: Role, destination: Location, transport: Transport) -> Self {
        Self {
            pawn,
            first: Leg::from((destination, transport)),
            second: None,
        }
    }
    pub fn double(
        pawn: Role,
        destination: Location,
        transport: Transport,
        then: Location,
        via: Transport,
    ) -> Self {
        Self {
            pawn,
            first: Leg::from((destination, transport)),
            second: Some(Leg::from((then, via))),
        }
    }
    pub fn pawn(&self) -> Role {
        self.pawn
    }
    pub fn first(&self) -> Leg {
        self.first
    }
    pub fn second(&self) -> Option<Leg> {
        self.second
    }
    pub fn is_double(&self) -> bool {
        self.second.is_some()
    }
    /// Legs in the order they are committed.
    pub fn legs(&self) -> impl Iterator<Item = Leg> {
        std::iter::once(self.first).chain(self.second)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.second {
            None => write!(f, "{} {}", self.pawn, self.first),
            Some(second) => write!(f, "{} {} {}", self.pawn, self.first, second),
        }
    }
}
