use super::*;
use crate::Location;
use petgraph::graphmap::UnGraphMap;
use std::sync::Arc;
use std::sync::LazyLock;

/// The standard board, validated once on first use.
static BOARD: LazyLock<Arc<Graph>> = LazyLock::new(|| {
    Arc::new(Graph::try_from(&LONDON[..]).expect("built-in London table is consistent"))
});

/// Read-only transport network.
///
/// Wraps an undirected petgraph map keyed by location, with the route's
/// [`Modes`] as the edge weight. Because every edge is stored once, the
/// symmetry invariant (a→b and b→a carry identical modes) holds by
/// construction; the adjacency table it was built from is checked for the
/// same property in [`Graph::try_from`].
#[derive(Debug, Clone)]
pub struct Graph {
    inner: UnGraphMap<Location, Modes>,
}

impl Graph {
    /// Shared handle to the standard London board.
    pub fn london() -> Arc<Self> {
        BOARD.clone()
    }
    /// Routes leaving a location as (neighbor, modes) pairs, in table order.
    /// Unknown locations have no routes.
    pub fn routes(&self, location: Location) -> impl Iterator<Item = (Location, Modes)> + '_ {
        self.inner
            .contains_node(location)
            .then(|| self.inner.edges(location))
            .into_iter()
            .flatten()
            .map(|(_, neighbor, modes)| (neighbor, *modes))
    }
    /// Modes of the route between two locations, if one exists.
    pub fn modes(&self, from: Location, to: Location) -> Option<Modes> {
        self.inner.edge_weight(from, to).copied()
    }
    /// True if the location is a node of this board.
    pub fn contains(&self, location: Location) -> bool {
        self.inner.contains_node(location)
    }
    /// Every location in ascending order.
    pub fn locations(&self) -> Vec<Location> {
        let mut locations = self.inner.nodes().collect::<Vec<_>>();
        locations.sort_unstable();
        locations
    }
    /// Number of locations.
    pub fn len(&self) -> usize {
        self.inner.node_count()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Number of distinct routes.
    pub fn route_count(&self) -> usize {
        self.inner.edge_count()
    }
}

/// Builds a board from an adjacency table where row `n` lists the routes of
/// location `n`. Row 0 is a placeholder and must be empty.
impl TryFrom<&[&[(Location, Modes)]]> for Graph {
    type Error = MapError;
    fn try_from(table: &[&[(Location, Modes)]]) -> Result<Self, Self::Error> {
        verify(table)?;
        let mut inner = UnGraphMap::with_capacity(table.len(), table.len() * 3);
        for location in 1..table.len() {
            inner.add_node(location as Location);
        }
        for (from, routes) in table.iter().enumerate().skip(1) {
            for &(to, modes) in routes.iter() {
                inner.add_edge(from as Location, to, modes);
            }
        }
        log::debug!(
            "[graph] built board with {} locations and {} routes",
            inner.node_count(),
            inner.edge_count()
        );
        Ok(Self { inner })
    }
}

/// Checks that an adjacency table describes a consistent undirected board.
pub fn verify(table: &[&[(Location, Modes)]]) -> Result<(), MapError> {
    if table.len() > Location::MAX as usize + 1 {
        return Err(MapError::TooLarge(table.len()));
    }
    if let Some(&(to, _)) = table.first().and_then(|row| row.first()) {
        return Err(MapError::OutOfRange { from: 0, to });
    }
    for (from, routes) in table.iter().enumerate().skip(1) {
        let from = from as Location;
        for &(to, modes) in routes.iter() {
            if to == 0 || to as usize >= table.len() {
                return Err(MapError::OutOfRange { from, to });
            }
            if to == from {
                return Err(MapError::SelfLoop(from));
            }
            if modes.is_empty() {
                return Err(MapError::EmptyModes { from, to });
            }
            match table[to as usize].iter().find(|(back, _)| *back == from) {
                None => return Err(MapError::Asymmetric { from, to }),
                Some((_, reverse)) if *reverse != modes => {
                    return Err(MapError::Mismatched { from, to });
                }
                Some(_) => {}
            }
        }
    }
    Ok(())
}

/// Inconsistencies detected while building a [`Graph`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    TooLarge(usize),
    OutOfRange { from: Location, to: Location },
    SelfLoop(Location),
    EmptyModes { from: Location, to: Location },
    Asymmetric { from: Location, to: Location },
    Mismatched { from: Location, to: Location },
}

impl std::fmt::Display for MapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooLarge(n) => write!(f, "table has {} rows, too many locations", n),
            Self::OutOfRange { from, to } => write!(f, "route {}->{} leaves the board", from, to),
            Self::SelfLoop(at) => write!(f, "location {} routes to itself", at),
            Self::EmptyModes { from, to } => write!(f, "route {}->{} has no transport", from, to),
            Self::Asymmetric { from, to } => write!(f, "route {}->{} has no reverse", from, to),
            Self::Mismatched { from, to } => {
                write!(f, "route {}->{} differs from its reverse", from, to)
            }
        }
    }
}

impl std::error::Error for MapError {}
