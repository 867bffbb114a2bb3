use super::*;
use crate::*;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use std::collections::BTreeSet;
use std::io::Write;
use std::sync::Arc;

pub struct Explorer(Arc<Graph>);

impl From<Arc<Graph>> for Explorer {
    fn from(graph: Arc<Graph>) -> Self {
        Self(graph)
    }
}

impl Default for Explorer {
    fn default() -> Self {
        Self(Graph::london())
    }
}

impl Explorer {
    pub fn run(&self) -> anyhow::Result<()> {
        log::info!("entering explorer");
        loop {
            print!("> ");
            std::io::stdout().flush()?;
            let ref mut input = String::new();
            if std::io::stdin().read_line(input)? == 0 {
                break Ok(());
            }
            match input.trim() {
                "" => continue,
                "quit" => break Ok(()),
                "exit" => break Ok(()),
                _ => match self.handle(input) {
                    Err(e) => eprintln!("{}", e),
                    Ok(output) => println!("{}", output),
                },
            }
        }
    }
    /// Runs one command line and returns what it prints.
    pub fn handle(&self, input: &str) -> anyhow::Result<String> {
        let search = self.0.search();
        match Query::try_parse_from(std::iter::once("> ").chain(input.split_whitespace()))? {
            Query::Routes { location } => Ok(self
                .0
                .routes(location)
                .map(|(to, modes)| format!(" - {:>3} {}", to, modes))
                .collect::<Vec<String>>()
                .join("\n")),
            Query::Cheapest {
                from,
                to,
                tickets,
                avoid_black: true,
            } => Ok(Self::show(search.cheapest_to(
                from,
                to,
                Ledger::try_from(tickets.as_str())?,
                crate::avoid_black,
            ))),
            Query::Cheapest { from, to, tickets, .. } => Ok(Self::show(search.cheapest_to(
                from,
                to,
                Ledger::try_from(tickets.as_str())?,
                equal_cost,
            ))),
            Query::Shortest { from, to, tickets } => Ok(Self::show(search.shortest_to(
                from,
                to,
                Ledger::try_from(tickets.as_str())?,
                equal_cost,
            ))),
            Query::Distance { from, to, tickets } => Ok(search
                .distance(from, to, Ledger::try_from(tickets.as_str())?)
                .map(|d| d.to_string())
                .unwrap_or_else(|| "unreachable".to_string())),
            Query::Reach {
                from,
                turns,
                tickets,
                avoid,
                wait,
            } => {
                let avoid = avoid.into_iter().collect::<BTreeSet<Location>>();
                let eliminated = vec![avoid; turns];
                let ledger = Ledger::try_from(tickets.as_str())?;
                Ok(Self::list(search.reachable(from, turns, ledger, &eliminated, !wait)))
            }
            Query::Deduce { from, tickets } => {
                let observed = tickets
                    .iter()
                    .map(|t| Transport::try_from(t.as_str()))
                    .collect::<anyhow::Result<Vec<Transport>>>()?;
                Ok(Self::list(search.possible(from, &observed, &[])))
            }
            Query::Verify => {
                map::verify(&map::LONDON[..])?;
                Ok(format!(
                    "{} locations, {} routes, consistent",
                    self.0.len(),
                    self.0.route_count()
                ))
            }
            Query::Simulate { seed, json } => self.simulate(seed, json),
        }
    }
    /// Plays random legal single moves for every pawn until the game ends.
    fn simulate(&self, seed: u64, json: bool) -> anyhow::Result<String> {
        let ref mut rng = SmallRng::seed_from_u64(seed);
        let mut session = Session::new("simulation", self.0.clone(), Setup::random(rng))?;
        let (tx, _inbox) = tokio::sync::mpsc::unbounded_channel();
        let (cops, mut seen) = tokio::sync::mpsc::unbounded_channel();
        session.join("x", tx)?;
        session.join("detectives", cops)?;
        session.vote("x", true)?;
        session.vote("detectives", true)?;
        while session.status() == Status::InProgress {
            let mover = session.mover();
            let Some(leg) = session.destinations(mover).choose(rng).copied() else {
                log::warn!("{} has nowhere to go", mover);
                break;
            };
            session.apply(&Move::single(mover, leg.destination, leg.transport))?;
        }
        let mut lines = Vec::new();
        while let Ok(event) = seen.try_recv() {
            lines.push(match json {
                true => event.to_json(),
                false => event.to_string(),
            });
        }
        lines.push(
            session
                .outcome()
                .map(Outcome::to_string)
                .unwrap_or_else(|| "no result".to_string()),
        );
        Ok(lines.join("\n"))
    }
    fn show(path: Option<Path>) -> String {
        path.map(|p| p.to_string())
            .unwrap_or_else(|| "no path".to_string())
    }
    fn list(locations: BTreeSet<Location>) -> String {
        format!(
            "{} locations: {}",
            locations.len(),
            locations
                .iter()
                .map(Location::to_string)
                .collect::<Vec<String>>()
                .join(" ")
        )
    }
}
