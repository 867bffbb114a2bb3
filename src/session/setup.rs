use crate::Graph;
use crate::Ledger;
use crate::Location;
use crate::Pawn;
use crate::Role;
use crate::STARTING_LOCATIONS;
use rand::Rng;

/// Starting squares and ticket issue for the six pawns, indexed by
/// [`Role::index`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setup {
    locations: [Location; 6],
    ledgers: [Ledger; 6],
}

impl Setup {
    /// Six distinct squares drawn from the starting pool, standard tickets.
    pub fn random<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let picks = rand::seq::index::sample(rng, STARTING_LOCATIONS.len(), 6);
        let mut locations = [0; 6];
        for (slot, pick) in locations.iter_mut().zip(picks.iter()) {
            *slot = STARTING_LOCATIONS[pick];
        }
        Self::fixed(locations)
    }
    /// Given squares, standard tickets.
    pub fn fixed(locations: [Location; 6]) -> Self {
        Self {
            locations,
            ledgers: Role::all().map(|role| match role {
                Role::X => Ledger::mr_x(),
                _ => Ledger::detective(),
            }),
        }
    }
    /// Overrides one pawn's ticket issue.
    pub fn with_ledger(mut self, role: Role, ledger: Ledger) -> Self {
        self.ledgers[role.index()] = ledger;
        self
    }
    pub fn location(&self, role: Role) -> Location {
        self.locations[role.index()]
    }
    pub fn ledger(&self, role: Role) -> &Ledger {
        &self.ledgers[role.index()]
    }
    /// Checks that every square is on the board and no two pawns share one.
    pub fn validate(&self, graph: &Graph) -> Result<(), String> {
        if let Some(missing) = self.locations.iter().find(|l| !graph.contains(**l)) {
            return Err(format!("location {} is not on the board", missing));
        }
        for (i, a) in self.locations.iter().enumerate() {
            if self.locations[i + 1..].contains(a) {
                return Err(format!("location {} is used twice", a));
            }
        }
        Ok(())
    }
    pub fn pawns(&self) -> [Pawn; 6] {
        Role::all().map(|role| Pawn::new(role, self.location(role), *self.ledger(role)))
    }
}

impl Default for Setup {
    fn default() -> Self {
        Self::random(&mut rand::rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Count;
    use crate::Ticket;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    #[test]
    fn random_setup_draws_distinct_pool_squares() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..32 {
            let setup = Setup::random(&mut rng);
            assert!(setup.validate(&Graph::london()).is_ok());
            assert!(Role::all()
                .iter()
                .all(|r| STARTING_LOCATIONS.contains(&setup.location(*r))));
        }
    }
    #[test]
    fn standard_issue() {
        let setup = Setup::fixed([13, 26, 29, 34, 50, 53]);
        assert_eq!(setup.ledger(Role::X).amount(Ticket::Double), Count::Finite(2));
        assert_eq!(setup.ledger(Role::Red).amount(Ticket::Bus), Count::Finite(8));
        let setup = setup.with_ledger(Role::Red, Ledger::empty());
        assert!(!setup.ledger(Role::Red).has(Ticket::Taxi));
    }
    #[test]
    fn rejects_bad_squares() {
        let london = Graph::london();
        assert!(Setup::fixed([13, 13, 29, 34, 50, 53]).validate(&london).is_err());
        assert!(Setup::fixed([13, 0, 29, 34, 50, 53]).validate(&london).is_err());
        assert!(Setup::fixed([13, 201, 29, 34, 50, 53]).validate(&london).is_err());
    }
}
