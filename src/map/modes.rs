use super::*;

/// The set of transports serving a single route.
///
/// Stored as a bit set over [`Transport::bit`]. A route always carries at
/// least one mode; [`Graph`] rejects empty sets when it is built.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Modes(u8);

impl Modes {
    pub const NONE: Self = Self(0);
    pub const TAXI: Self = Self(Transport::Taxi.bit());
    pub const BUS: Self = Self(Transport::Bus.bit());
    pub const UNDERGROUND: Self = Self(Transport::Underground.bit());
    pub const BLACK: Self = Self(Transport::Black.bit());

    /// Both sets combined.
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
    /// True if the route declares this transport.
    pub fn contains(&self, transport: Transport) -> bool {
        self.0 & transport.bit() != 0
    }
    /// True if a ticket of this type may be spent on the route.
    ///
    /// A black ticket is accepted on every route regardless of the
    /// declared modes.
    pub fn admits(&self, transport: Transport) -> bool {
        self.contains(transport) || transport == Transport::Black
    }
    /// Declared transports in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = Transport> + '_ {
        Transport::all().into_iter().filter(|t| self.contains(*t))
    }
    /// Ticket types that may be spent on the route.
    pub fn admitted(&self) -> impl Iterator<Item = Transport> + '_ {
        Transport::all().into_iter().filter(|t| self.admits(*t))
    }
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }
}

impl From<Transport> for Modes {
    fn from(transport: Transport) -> Self {
        Self(transport.bit())
    }
}

impl FromIterator<Transport> for Modes {
    fn from_iter<I: IntoIterator<Item = Transport>>(iter: I) -> Self {
        iter.into_iter()
            .map(Modes::from)
            .fold(Self::NONE, Self::union)
    }
}

impl std::fmt::Display for Modes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            self.iter()
                .map(|t| t.to_string())
                .collect::<Vec<_>>()
                .join("/")
        )
    }
}
