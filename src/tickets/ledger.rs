use super::*;
use serde::Serialize;
use serde::Serializer;
use serde::ser::SerializeMap;

/// Amount of one ticket type a pawn holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Count {
    Finite(u8),
    Unlimited,
}

impl Count {
    /// True for a finite count of zero.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Finite(0))
    }
    /// Count after spending one ticket, or `None` if there is nothing to spend.
    pub fn decrement(self) -> Option<Self> {
        match self {
            Self::Unlimited => Some(Self::Unlimited),
            Self::Finite(0) => None,
            Self::Finite(n) => Some(Self::Finite(n - 1)),
        }
    }
}

impl From<u8> for Count {
    fn from(n: u8) -> Self {
        Self::Finite(n)
    }
}

impl Serialize for Count {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Finite(n) => serializer.serialize_u8(*n),
            Self::Unlimited => serializer.serialize_str("unlimited"),
        }
    }
}

impl std::fmt::Display for Count {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Finite(n) => write!(f, "{}", n),
            Self::Unlimited => write!(f, "unlimited"),
        }
    }
}

/// Ticket counts owned by a single pawn.
///
/// `Ledger` is a small `Copy` value so that search code can carry a snapshot
/// per explored state and branch without any save/restore bookkeeping: use
/// [`spent`](Self::spent) to derive the ledger that results from a move.
/// Session code mutates its pawns' ledgers in place with
/// [`consume`](Self::consume).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ledger([Count; 5]);

impl Default for Ledger {
    fn default() -> Self {
        Self::empty()
    }
}

/// Constructors for common ticket sets.
impl Ledger {
    /// No tickets at all.
    pub fn empty() -> Self {
        Self([Count::Finite(0); 5])
    }
    /// Unlimited taxi, bus, underground, and black tickets; no doubles.
    pub fn unlimited() -> Self {
        Self::unlimited_noblack().with(Ticket::Black, Count::Unlimited)
    }
    /// Unlimited taxi, bus, and underground tickets; no black or doubles.
    pub fn unlimited_noblack() -> Self {
        Self::empty()
            .with(Ticket::Taxi, Count::Unlimited)
            .with(Ticket::Bus, Count::Unlimited)
            .with(Ticket::Underground, Count::Unlimited)
    }
    /// Standard issue for Mr. X.
    pub fn mr_x() -> Self {
        Self::unlimited_noblack()
            .with(Ticket::Black, crate::X_BLACK_TICKETS)
            .with(Ticket::Double, crate::X_DOUBLE_TICKETS)
    }
    /// Standard issue for each detective.
    pub fn detective() -> Self {
        Self::empty()
            .with(Ticket::Taxi, crate::DETECTIVE_TAXI_TICKETS)
            .with(Ticket::Bus, crate::DETECTIVE_BUS_TICKETS)
            .with(Ticket::Underground, crate::DETECTIVE_UNDERGROUND_TICKETS)
    }
    /// Same ledger with one count replaced.
    pub fn with<C>(mut self, ticket: Ticket, count: C) -> Self
    where
        C: Into<Count>,
    {
        self.set(ticket, count);
        self
    }
}

/// Queries and updates.
impl Ledger {
    pub fn amount(&self, ticket: Ticket) -> Count {
        self.0[ticket.index()]
    }
    pub fn set<C>(&mut self, ticket: Ticket, count: C)
    where
        C: Into<Count>,
    {
        self.0[ticket.index()] = count.into();
    }
    /// True if at least one ticket of this type (or an unlimited supply) is held.
    pub fn has<T>(&self, ticket: T) -> bool
    where
        T: Into<Ticket>,
    {
        !self.amount(ticket.into()).is_empty()
    }
    /// Spends one ticket. Unlimited supplies are unaffected.
    pub fn consume<T>(&mut self, ticket: T) -> Result<(), InsufficientTicket>
    where
        T: Into<Ticket>,
    {
        let ticket = ticket.into();
        let slot = &mut self.0[ticket.index()];
        *slot = slot.decrement().ok_or(InsufficientTicket(ticket))?;
        Ok(())
    }
    /// The ledger that remains after spending one ticket, leaving `self`
    /// untouched. `None` if the ticket is not held.
    pub fn spent<T>(&self, ticket: T) -> Option<Self>
    where
        T: Into<Ticket>,
    {
        let mut next = *self;
        next.consume(ticket).ok().map(|_| next)
    }
}

impl TryFrom<&str> for Count {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim() {
            "unlimited" | "*" | "-1" => Ok(Self::Unlimited),
            n => Ok(Self::Finite(n.parse()?)),
        }
    }
}

/// Parses a preset (`x`, `detective`, `unlimited`, `noblack`, `empty`) or a
/// comma-separated list such as `taxi=3,bus=*,black=1`. Unlisted tickets
/// are zero.
impl TryFrom<&str> for Ledger {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "x" | "mrx" => Ok(Self::mr_x()),
            "detective" | "det" => Ok(Self::detective()),
            "unlimited" => Ok(Self::unlimited()),
            "noblack" => Ok(Self::unlimited_noblack()),
            "empty" | "" => Ok(Self::empty()),
            list => list.split(',').try_fold(Self::empty(), |ledger, entry| {
                let (ticket, count) = entry
                    .split_once('=')
                    .ok_or_else(|| anyhow::anyhow!("expected ticket=count, got {:?}", entry))?;
                Ok(ledger.with(Ticket::try_from(ticket)?, Count::try_from(count)?))
            }),
        }
    }
}

impl Serialize for Ledger {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for ticket in Ticket::all() {
            map.serialize_entry(&ticket, &self.amount(ticket))?;
        }
        map.end()
    }
}

impl std::fmt::Display for Ledger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            Ticket::all()
                .iter()
                .map(|t| format!("{} {}", t, self.amount(*t)))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

/// Attempted to spend a ticket the ledger does not hold.
///
/// Only reachable when a caller commits a move without validating it first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsufficientTicket(pub Ticket);

impl std::fmt::Display for InsufficientTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tried to spend a {} ticket that is not held", self.0)
    }
}

impl std::error::Error for InsufficientTicket {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Transport;
    #[test]
    fn parse_ledgers() {
        assert_eq!(Ledger::try_from("x").unwrap(), Ledger::mr_x());
        let ledger = Ledger::try_from("taxi=3, bus=*").unwrap();
        assert_eq!(ledger.amount(Ticket::Taxi), Count::Finite(3));
        assert_eq!(ledger.amount(Ticket::Bus), Count::Unlimited);
        assert_eq!(ledger.amount(Ticket::Black), Count::Finite(0));
        assert!(Ledger::try_from("taxi").is_err());
        assert!(Ledger::try_from("taxi=many").is_err());
        assert!(Ledger::try_from("rocket=1").is_err());
    }
    #[test]
    fn finite_ticket_runs_out_after_exactly_n() {
        let mut ledger = Ledger::empty().with(Ticket::Bus, 3);
        for _ in 0..3 {
            assert!(ledger.has(Ticket::Bus));
            assert!(ledger.consume(Ticket::Bus).is_ok());
        }
        assert!(!ledger.has(Ticket::Bus));
        assert_eq!(
            ledger.consume(Ticket::Bus),
            Err(InsufficientTicket(Ticket::Bus))
        );
        assert_eq!(ledger.amount(Ticket::Bus), Count::Finite(0));
    }
    #[test]
    fn unlimited_never_runs_out() {
        let mut ledger = Ledger::unlimited();
        for _ in 0..1000 {
            ledger.consume(Transport::Taxi).unwrap();
        }
        assert!(ledger.has(Transport::Taxi));
        assert_eq!(ledger.amount(Ticket::Taxi), Count::Unlimited);
        assert!(!ledger.has(Ticket::Double));
    }
    #[test]
    fn spent_leaves_original_alone() {
        let ledger = Ledger::detective();
        let after = ledger.spent(Transport::Underground).unwrap();
        assert_eq!(ledger.amount(Ticket::Underground), Count::Finite(4));
        assert_eq!(after.amount(Ticket::Underground), Count::Finite(3));
        assert!(ledger.spent(Transport::Black).is_none());
    }
    #[test]
    fn standard_issue() {
        let x = Ledger::mr_x();
        assert_eq!(x.amount(Ticket::Black), Count::Finite(5));
        assert_eq!(x.amount(Ticket::Double), Count::Finite(2));
        assert_eq!(x.amount(Ticket::Bus), Count::Unlimited);
        let d = Ledger::detective();
        assert_eq!(d.amount(Ticket::Taxi), Count::Finite(10));
        assert!(!d.has(Ticket::Black));
        assert!(!d.has(Ticket::Double));
    }
    #[test]
    fn serializes_as_map() {
        let json = serde_json::to_value(Ledger::mr_x()).unwrap();
        assert_eq!(json["taxi"], "unlimited");
        assert_eq!(json["black"], 5);
        assert_eq!(json["double"], 2);
    }
}
