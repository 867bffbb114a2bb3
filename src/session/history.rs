use crate::Location;
use crate::Role;
use crate::Transport;
use crate::Turn;
use serde::Serialize;

/// One committed placement or move.
///
/// `transport` is `None` for the initial placements of turn 0. `location`
/// is `None` only in views where it has been concealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Record {
    pub pawn: Role,
    pub location: Option<Location>,
    pub transport: Option<Transport>,
}

/// Append-only move log, indexed by turn number.
///
/// Turn 0 holds the starting squares. A double move contributes one record
/// to each of two consecutive turns.
#[derive(Debug, Clone, Default)]
pub struct History(Vec<Vec<Record>>);

impl History {
    pub fn new<I>(placements: I) -> Self
    where
        I: IntoIterator<Item = (Role, Location)>,
    {
        Self(vec![
            placements
                .into_iter()
                .map(|(pawn, location)| Record {
                    pawn,
                    location: Some(location),
                    transport: None,
                })
                .collect(),
        ])
    }
    /// Makes sure the turn has a (possibly empty) slot.
    pub fn open(&mut self, turn: Turn) {
        while self.0.len() <= turn as usize {
            self.0.push(Vec::new());
        }
    }
    pub fn record(&mut self, turn: Turn, pawn: Role, location: Location, transport: Transport) {
        self.open(turn);
        self.0[turn as usize].push(Record {
            pawn,
            location: Some(location),
            transport: Some(transport),
        });
    }
    pub fn turns(&self) -> &[Vec<Record>] {
        &self.0
    }
    pub fn turn(&self, turn: Turn) -> &[Record] {
        self.0.get(turn as usize).map(Vec::as_slice).unwrap_or(&[])
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Tickets a pawn has spent, in order.
    pub fn tickets(&self, pawn: Role) -> Vec<Transport> {
        self.0
            .iter()
            .flatten()
            .filter(|r| r.pawn == pawn)
            .filter_map(|r| r.transport)
            .collect()
    }
    /// Copy of the log with Mr. X's square blanked wherever `visible`
    /// returns false for that turn.
    pub fn conceal<F>(&self, visible: F) -> Vec<Vec<Record>>
    where
        F: Fn(Turn) -> bool,
    {
        self.0
            .iter()
            .enumerate()
            .map(|(turn, records)| {
                let shown = visible(turn as Turn);
                records
                    .iter()
                    .map(|r| match r.pawn {
                        Role::X if !shown => Record {
                            location: None,
                            ..*r
                        },
                        _ => *r,
                    })
                    .collect()
            })
            .collect()
    }
}
