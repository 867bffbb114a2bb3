use crate::Cost;
use crate::Location;
use crate::Transport;
use serde::Serialize;
use std::collections::BTreeMap;

/// One hop of a path: the square arrived at and the ticket spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Step {
    pub location: Location,
    pub transport: Transport,
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.transport, self.location)
    }
}

/// Ordered steps from a source (excluded) to a destination, with the cost
/// accumulated along the way. The path from a square to itself is empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Path {
    steps: Vec<Step>,
    cost: Cost,
}

impl Path {
    pub fn new(steps: Vec<Step>, cost: Cost) -> Self {
        Self { steps, cost }
    }
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
    pub fn cost(&self) -> Cost {
        self.cost
    }
    pub fn hops(&self) -> usize {
        self.steps.len()
    }
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
    /// Last square of the path, if it goes anywhere.
    pub fn destination(&self) -> Option<Location> {
        self.steps.last().map(|s| s.location)
    }
    /// The first step to take.
    pub fn first(&self) -> Option<&Step> {
        self.steps.first()
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let steps = self
            .steps
            .iter()
            .map(Step::to_string)
            .collect::<Vec<_>>()
            .join(" -> ");
        write!(f, "[{}] ({} hops, cost {:.2})", steps, self.hops(), self.cost)
    }
}

/// Best path to every reached square. Squares missing from the map have
/// no path under the ticket constraint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paths(BTreeMap<Location, Path>);

impl Paths {
    pub fn get(&self, destination: Location) -> Option<&Path> {
        self.0.get(&destination)
    }
    pub fn take(mut self, destination: Location) -> Option<Path> {
        self.0.remove(&destination)
    }
    pub fn contains(&self, destination: Location) -> bool {
        self.0.contains_key(&destination)
    }
    /// Number of reached squares, source included.
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = (Location, &Path)> + '_ {
        self.0.iter().map(|(l, p)| (*l, p))
    }
    /// Hop count to every reached square.
    pub fn hops(&self) -> BTreeMap<Location, usize> {
        self.iter().map(|(l, p)| (l, p.hops())).collect()
    }
}

impl FromIterator<(Location, Path)> for Paths {
    fn from_iter<I: IntoIterator<Item = (Location, Path)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn empty_path_has_no_hops() {
        let path = Path::default();
        assert_eq!(path.hops(), 0);
        assert_eq!(path.cost(), 0.);
        assert_eq!(path.destination(), None);
    }
    #[test]
    fn path_display() {
        let path = Path::new(
            vec![
                Step {
                    location: 8,
                    transport: Transport::Taxi,
                },
                Step {
                    location: 19,
                    transport: Transport::Taxi,
                },
            ],
            2.,
        );
        assert_eq!(path.destination(), Some(19));
        assert_eq!(path.to_string(), "[taxi 8 -> taxi 19] (2 hops, cost 2.00)");
    }
}
