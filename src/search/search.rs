use super::*;
use crate::Cost;
use crate::Graph;
use crate::Ledger;
use crate::Location;
use crate::Record;
use crate::Role;
use crate::Transport;
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::collections::HashSet;

/// Pure search routines bound to one board.
///
/// Ticket semantics match the game: spending a finite ticket decrements
/// the copy carried along that branch, unlimited tickets are never spent,
/// and a black ticket may be spent on any route.
#[derive(Debug, Clone, Copy)]
pub struct Search<'g> {
    graph: &'g Graph,
}

impl<'g> From<&'g Graph> for Search<'g> {
    fn from(graph: &'g Graph) -> Self {
        Self { graph }
    }
}

impl Graph {
    pub fn search(&self) -> Search<'_> {
        Search::from(self)
    }
}

impl<'g> Search<'g> {
    /// Moves out of `from` that the ledger can pay for, with the ledger
    /// left afterwards.
    fn moves(
        &self,
        from: Location,
        ledger: Ledger,
    ) -> impl Iterator<Item = (Location, Transport, Ledger)> + 'g {
        let graph = self.graph;
        graph.routes(from).flat_map(move |(to, modes)| {
            Transport::all()
                .into_iter()
                .filter(move |t| modes.admits(*t))
                .filter_map(move |t| ledger.spent(t).map(|rest| (to, t, rest)))
        })
    }
    /// Rebuilds the path to `destination` by walking predecessors back to
    /// `source`.
    fn trace(
        source: Location,
        destination: Location,
        previous: &BTreeMap<Location, (Location, Transport)>,
        cost: Cost,
    ) -> Path {
        let mut steps = Vec::new();
        let mut at = destination;
        while at != source {
            match previous.get(&at) {
                Some(&(from, transport)) if steps.len() < previous.len() => {
                    steps.push(Step {
                        location: at,
                        transport,
                    });
                    at = from;
                }
                _ => break,
            }
        }
        steps.reverse();
        Path::new(steps, cost)
    }
}

/// cheapest paths
impl<'g> Search<'g> {
    /// Least-cost path to every square reachable under the ticket
    /// constraint.
    ///
    /// Dijkstra with O(V²) extraction. Each square keeps the ledger left by
    /// its current best path, and the cost function sees that ledger when
    /// pricing the next hop. A relaxation must strictly lower the known
    /// cost.
    pub fn cheapest<F>(&self, source: Location, ledger: Ledger, cost: F) -> Paths
    where
        F: Fn(&Ledger, Transport) -> Cost,
    {
        if !self.graph.contains(source) {
            return Paths::default();
        }
        let mut unvisited = self.graph.locations().into_iter().collect::<BTreeSet<_>>();
        let mut costs = BTreeMap::<Location, Cost>::from([(source, 0.)]);
        let mut ledgers = BTreeMap::from([(source, ledger)]);
        let mut previous = BTreeMap::new();
        while let Some(u) = unvisited
            .iter()
            .filter_map(|l| costs.get(l).map(|c| (*l, *c)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(l, _)| l)
        {
            unvisited.remove(&u);
            let base = costs[&u];
            let held = ledgers[&u];
            for (v, transport, rest) in self.moves(u, held) {
                let through = base + cost(&held, transport);
                if costs.get(&v).is_none_or(|known| through < *known) {
                    costs.insert(v, through);
                    ledgers.insert(v, rest);
                    previous.insert(v, (u, transport));
                }
            }
        }
        costs
            .into_iter()
            .map(|(v, c)| (v, Self::trace(source, v, &previous, c)))
            .collect()
    }
    /// Least-cost path to one square, if any.
    pub fn cheapest_to<F>(
        &self,
        source: Location,
        destination: Location,
        ledger: Ledger,
        cost: F,
    ) -> Option<Path>
    where
        F: Fn(&Ledger, Transport) -> Cost,
    {
        self.cheapest(source, ledger, cost).take(destination)
    }
}

/// shortest paths
impl<'g> Search<'g> {
    /// Fewest-hop path to every square reachable under the ticket
    /// constraint.
    ///
    /// Breadth-first in whole wavefronts. When a square is reached more
    /// than once within the same wavefront, the cost function decides
    /// which path to keep; it never trades hops for cost.
    pub fn shortest<F>(&self, source: Location, ledger: Ledger, cost: F) -> Paths
    where
        F: Fn(&Ledger, Transport) -> Cost,
    {
        if !self.graph.contains(source) {
            return Paths::default();
        }
        let mut visited = BTreeSet::from([source]);
        let mut costs = BTreeMap::<Location, Cost>::from([(source, 0.)]);
        let mut ledgers = BTreeMap::from([(source, ledger)]);
        let mut previous = BTreeMap::new();
        let mut frontier = vec![source];
        while !frontier.is_empty() {
            let mut wave = BTreeSet::new();
            for u in frontier {
                let base = costs[&u];
                let held = ledgers[&u];
                for (v, transport, rest) in self.moves(u, held) {
                    if visited.contains(&v) {
                        continue;
                    }
                    let through = base + cost(&held, transport);
                    if !wave.contains(&v) || through < costs[&v] {
                        costs.insert(v, through);
                        ledgers.insert(v, rest);
                        previous.insert(v, (u, transport));
                        wave.insert(v);
                    }
                }
            }
            visited.extend(wave.iter().copied());
            frontier = wave.into_iter().collect();
        }
        costs
            .into_iter()
            .map(|(v, c)| (v, Self::trace(source, v, &previous, c)))
            .collect()
    }
    /// Fewest-hop path to one square, if any.
    pub fn shortest_to<F>(
        &self,
        source: Location,
        destination: Location,
        ledger: Ledger,
        cost: F,
    ) -> Option<Path>
    where
        F: Fn(&Ledger, Transport) -> Cost,
    {
        self.shortest(source, ledger, cost).take(destination)
    }
    /// Hop count of the shortest affordable path, if any.
    pub fn distance(&self, source: Location, destination: Location, ledger: Ledger) -> Option<usize> {
        self.shortest_to(source, destination, ledger, equal_cost)
            .map(|p| p.hops())
    }
    /// Hop count to every reachable square.
    pub fn distances(&self, source: Location, ledger: Ledger) -> BTreeMap<Location, usize> {
        self.shortest(source, ledger, equal_cost).hops()
    }
}

/// reachability
impl<'g> Search<'g> {
    /// Squares the pawn could occupy after exactly `turns` turns.
    ///
    /// Branches are tracked as (square, remaining tickets) so that running
    /// out of tickets on one route never hides another. `eliminated[t]`
    /// lists squares that may not be entered on turn `t`; missing entries
    /// forbid nothing. A branch with no affordable move waits in place
    /// unless `force_move` is set, in which case it is dropped.
    pub fn reachable(
        &self,
        source: Location,
        turns: usize,
        ledger: Ledger,
        eliminated: &[BTreeSet<Location>],
        force_move: bool,
    ) -> BTreeSet<Location> {
        let mut states = HashSet::from([(source, ledger)]);
        for turn in 0..turns {
            let banned = eliminated.get(turn);
            let mut next = HashSet::new();
            for (at, held) in states {
                let mut moved = false;
                for (to, _, rest) in self.moves(at, held) {
                    if banned.is_some_and(|b| b.contains(&to)) {
                        continue;
                    }
                    moved = true;
                    next.insert((to, rest));
                }
                if !moved && !force_move {
                    next.insert((at, held));
                }
            }
            states = next;
        }
        states.into_iter().map(|(at, _)| at).collect()
    }
    /// Squares a pawn could be on after spending the observed tickets in
    /// order, starting from `source`.
    ///
    /// Each step expands only along routes that admit the observed ticket;
    /// an observed black ticket matches every route.
    pub fn possible(
        &self,
        source: Location,
        observed: &[Transport],
        eliminated: &[BTreeSet<Location>],
    ) -> BTreeSet<Location> {
        observed
            .iter()
            .enumerate()
            .fold(BTreeSet::from([source]), |squares, (turn, transport)| {
                let banned = eliminated.get(turn);
                squares
                    .iter()
                    .flat_map(|at| self.graph.routes(*at))
                    .filter(|(_, modes)| modes.admits(*transport))
                    .map(|(to, _)| to)
                    .filter(|to| !banned.is_some_and(|b| b.contains(to)))
                    .collect()
            })
    }
    /// Where Mr. X may be, judging by a concealed move log.
    ///
    /// Starts from his last revealed square and replays the tickets he has
    /// spent since, ruling out squares detectives stood on the turn before.
    /// Returns `None` if he has never been seen.
    pub fn deduce(&self, history: &[Vec<Record>]) -> Option<BTreeSet<Location>> {
        let (seen, origin) = history.iter().enumerate().rev().find_map(|(turn, records)| {
            records
                .iter()
                .filter(|r| r.pawn == Role::X)
                .filter_map(|r| r.location)
                .last()
                .map(|at| (turn, at))
        })?;
        let mut occupied = BTreeMap::<Role, Location>::new();
        let mut observed = Vec::new();
        let mut eliminated: Vec<BTreeSet<Location>> = Vec::new();
        for (turn, records) in history.iter().enumerate() {
            for record in records.iter().filter(|r| r.pawn == Role::X) {
                if turn > seen {
                    if let Some(transport) = record.transport {
                        observed.push(transport);
                        eliminated.push(occupied.values().copied().collect());
                    }
                }
            }
            for record in records.iter().filter(|r| r.pawn != Role::X) {
                if let Some(at) = record.location {
                    occupied.insert(record.pawn, at);
                }
            }
        }
        Some(self.possible(origin, &observed, &eliminated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::History;
    use crate::Modes;
    use crate::Ticket;
    use crate::is_surfacing;

    /// 1 - 2 - 3 by taxi, 1 = 3 by bus, 3 ~ 4 by underground.
    fn small() -> Graph {
        let table: [&[(Location, Modes)]; 5] = [
            &[],
            &[(2, Modes::TAXI), (3, Modes::BUS)],
            &[(1, Modes::TAXI), (3, Modes::TAXI)],
            &[(2, Modes::TAXI), (1, Modes::BUS), (4, Modes::UNDERGROUND)],
            &[(3, Modes::UNDERGROUND)],
        ];
        Graph::try_from(&table[..]).unwrap()
    }
    fn noblack() -> Ledger {
        Ledger::unlimited_noblack()
    }

    #[test]
    fn cheapest_path_to_self_is_empty() {
        let london = Graph::london();
        for ledger in [Ledger::empty(), Ledger::mr_x(), Ledger::detective()] {
            let path = london.search().cheapest_to(13, 13, ledger, equal_cost).unwrap();
            assert!(path.is_empty());
            assert_eq!(path.cost(), 0.);
        }
    }
    #[test]
    fn single_taxi_ticket_reaches_one_hop() {
        let london = Graph::london();
        let search = london.search();
        let ledger = Ledger::empty().with(Ticket::Taxi, 1);
        let path = search.cheapest_to(1, 8, ledger, equal_cost).unwrap();
        assert_eq!(
            path.steps(),
            &[Step {
                location: 8,
                transport: Transport::Taxi
            }]
        );
        // 58 and 46 are bus-only from 1
        assert!(search.cheapest_to(1, 58, ledger, equal_cost).is_none());
        assert!(search.cheapest_to(1, 46, ledger, equal_cost).is_none());
        // two taxi hops are unaffordable
        assert!(search.cheapest_to(1, 19, ledger, equal_cost).is_none());
    }
    #[test]
    fn cheapest_prefers_lower_cost_over_fewer_hops() {
        let graph = small();
        let search = graph.search();
        let pricey_bus = |_: &Ledger, t: Transport| match t {
            Transport::Bus => 5.,
            _ => 1.,
        };
        let path = search.cheapest_to(1, 3, noblack(), pricey_bus).unwrap();
        assert_eq!(path.hops(), 2);
        assert_eq!(path.cost(), 2.);
        let path = search.shortest_to(1, 3, noblack(), pricey_bus).unwrap();
        assert_eq!(path.hops(), 1);
        assert_eq!(path.cost(), 5.);
    }
    #[test]
    fn cheapest_respects_depletion_along_path() {
        let graph = small();
        let ledger = Ledger::empty().with(Ticket::Taxi, 1).with(Ticket::Underground, 1);
        let paths = graph.search().cheapest(1, ledger, equal_cost);
        assert!(paths.contains(2));
        assert!(!paths.contains(3));
        assert!(!paths.contains(4));
        let ledger = ledger.with(Ticket::Bus, 1);
        let path = graph.search().cheapest_to(1, 4, ledger, equal_cost).unwrap();
        assert_eq!(path.hops(), 2);
        assert_eq!(path.first().map(|s| s.transport), Some(Transport::Bus));
    }
    #[test]
    fn black_ticket_rides_any_route() {
        let graph = small();
        let ledger = Ledger::empty().with(Ticket::Black, 1);
        let path = graph.search().cheapest_to(1, 3, ledger, equal_cost).unwrap();
        assert_eq!(path.steps()[0].transport, Transport::Black);
        let path = graph.search().cheapest_to(1, 2, noblack(), avoid_black).unwrap();
        assert_eq!(path.steps()[0].transport, Transport::Taxi);
    }
    #[test]
    fn shortest_breaks_ties_by_cost() {
        let london = Graph::london();
        // 1 -> 46 has bus and underground; bus is cheaper
        let path = london.search().shortest_to(1, 46, noblack(), equal_cost).unwrap();
        assert_eq!(path.hops(), 1);
        assert_eq!(path.steps()[0].transport, Transport::Bus);
    }
    #[test]
    fn distances_on_london() {
        let london = Graph::london();
        let search = london.search();
        assert_eq!(search.distance(1, 1, noblack()), Some(0));
        assert_eq!(search.distance(1, 8, noblack()), Some(1));
        assert_eq!(search.distance(1, 19, noblack()), Some(2));
        assert_eq!(search.distance(1, 19, Ledger::empty()), None);
        let all = search.distances(1, noblack());
        assert_eq!(all.len(), london.len());
        assert_eq!(all.get(&1), Some(&0));
    }
    #[test]
    fn shortest_from_unknown_square_is_empty() {
        let london = Graph::london();
        assert!(london.search().shortest(0, noblack(), equal_cost).is_empty());
        assert!(london.search().cheapest(0, noblack(), equal_cost).is_empty());
    }
    #[test]
    fn reachable_in_zero_turns_is_source() {
        let london = Graph::london();
        let reach = london.search().reachable(13, 0, Ledger::mr_x(), &[], true);
        assert_eq!(reach, BTreeSet::from([13]));
    }
    #[test]
    fn reachable_excludes_eliminated() {
        let london = Graph::london();
        let ledger = noblack().with(Ticket::Black, 5);
        let reach = london
            .search()
            .reachable(1, 1, ledger, &[BTreeSet::from([8])], true);
        assert!(!reach.contains(&8));
        assert!(reach.contains(&9));
        assert!(reach.contains(&46));
    }
    #[test]
    fn reachable_tracks_ledgers_per_branch() {
        let graph = small();
        let ledger = Ledger::empty().with(Ticket::Taxi, 1).with(Ticket::Bus, 1);
        let reach = graph.search().reachable(1, 2, ledger, &[], true);
        // taxi to 2 leaves only a bus ticket, bus to 3 leaves a taxi back to 2
        assert_eq!(reach, BTreeSet::from([2]));
        assert!(graph.search().reachable(1, 3, ledger, &[], true).is_empty());
        let reach = graph.search().reachable(1, 3, ledger, &[], false);
        assert_eq!(reach, BTreeSet::from([2]));
    }
    #[test]
    fn forced_moves_drop_stalled_branches() {
        let graph = small();
        let ledger = Ledger::empty().with(Ticket::Underground, 1);
        assert!(graph.search().reachable(3, 2, ledger, &[], true).is_empty());
        assert_eq!(
            graph.search().reachable(3, 2, ledger, &[], false),
            BTreeSet::from([4])
        );
    }
    #[test]
    fn possible_with_no_observations_is_source() {
        let london = Graph::london();
        assert_eq!(london.search().possible(13, &[], &[]), BTreeSet::from([13]));
    }
    #[test]
    fn possible_follows_observed_modes() {
        let london = Graph::london();
        let search = london.search();
        let after = search.possible(1, &[Transport::Taxi], &[]);
        assert_eq!(after, BTreeSet::from([8, 9]));
        let after = search.possible(1, &[Transport::Underground], &[]);
        assert_eq!(after, BTreeSet::from([46]));
        let after = search.possible(1, &[Transport::Taxi], &[BTreeSet::from([8])]);
        assert_eq!(after, BTreeSet::from([9]));
        let after = search.possible(1, &[Transport::Black], &[]);
        assert_eq!(after, BTreeSet::from([8, 9, 46, 58]));
        let after = search.possible(1, &[Transport::Taxi, Transport::Taxi], &[]);
        assert_eq!(after, BTreeSet::from([1, 18, 19, 20]));
    }
    #[test]
    fn deduce_from_concealed_history() {
        let london = Graph::london();
        let mut history = History::new([(Role::X, 1), (Role::Red, 20)]);
        history.record(1, Role::X, 9, Transport::Taxi);
        history.record(1, Role::Red, 19, Transport::Taxi);
        history.record(2, Role::X, 20, Transport::Taxi);
        let hidden = history.conceal(is_surfacing);
        assert_eq!(london.search().deduce(&hidden), None);
        let known = history.conceal(|turn| turn == 0);
        // 1 -> {8, 9} -> taxi neighbours of 8 and 9, minus Red's 19 on turn 1
        assert_eq!(
            london.search().deduce(&known),
            Some(BTreeSet::from([1, 18, 20]))
        );
    }
}
