use super::*;
use crate::Event;
use crate::GameError;
use crate::Graph;
use crate::Session;
use crate::Setup;
use crate::Status;
use crate::room_name;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;

/// In-memory room registry sharing one board across every room.
#[derive(Debug)]
pub struct Lobby {
    graph: Arc<Graph>,
    rooms: BTreeMap<String, Session>,
}

impl Default for Lobby {
    fn default() -> Self {
        Self::new(Graph::london())
    }
}

impl Lobby {
    pub fn new(graph: Arc<Graph>) -> Self {
        Self {
            graph,
            rooms: BTreeMap::new(),
        }
    }
    pub fn len(&self) -> usize {
        self.rooms.len()
    }
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
    /// Opens a room and seats its creator.
    pub fn open(
        &mut self,
        name: &str,
        setup: Setup,
        creator: &str,
        sink: UnboundedSender<Event>,
    ) -> Result<&mut Session, GameError> {
        let name = room_name(name)?;
        if self.rooms.contains_key(&name) {
            return Err(GameError::NameTaken(name));
        }
        let mut session = Session::new(&name, self.graph.clone(), setup)?;
        session.join(creator, sink)?;
        self.create(session)?;
        self.fetch_mut(&name)
            .ok_or(GameError::NoSuchRoom(name))
    }
    /// Joins an existing room.
    pub fn join(
        &mut self,
        name: &str,
        player: &str,
        sink: UnboundedSender<Event>,
    ) -> Result<&mut Session, GameError> {
        let session = self
            .fetch_mut(name)
            .ok_or_else(|| GameError::NoSuchRoom(name.to_string()))?;
        session.join(player, sink)?;
        Ok(session)
    }
    /// Removes a player from a room, then prunes the room if it is
    /// abandoned. Returns true if the room was deleted.
    pub fn leave(&mut self, name: &str, player: &str) -> Result<bool, GameError> {
        self.fetch_mut(name)
            .ok_or_else(|| GameError::NoSuchRoom(name.to_string()))?
            .leave(player)?;
        Ok(self.prune(name))
    }
    /// Deletes the room if nobody is attached and it is not mid-game.
    pub fn prune(&mut self, name: &str) -> bool {
        let abandoned = self
            .rooms
            .get(name)
            .map(|s| s.observers().is_empty() && s.status() != Status::InProgress)
            .unwrap_or(false);
        if abandoned {
            log::info!("[lobby] pruned room {}", name);
            self.rooms.remove(name);
        }
        abandoned
    }
    /// Rooms in name order.
    pub fn listing(&self) -> Vec<Listing> {
        self.rooms.values().map(Listing::from).collect()
    }
}

impl Store for Lobby {
    fn create(&mut self, session: Session) -> Result<(), GameError> {
        if self.rooms.contains_key(session.name()) {
            return Err(GameError::NameTaken(session.name().to_string()));
        }
        log::info!("[lobby] opened room {}", session.name());
        self.rooms.insert(session.name().to_string(), session);
        Ok(())
    }
    fn fetch(&self, name: &str) -> Option<&Session> {
        self.rooms.get(name)
    }
    fn fetch_mut(&mut self, name: &str) -> Option<&mut Session> {
        self.rooms.get_mut(name)
    }
    fn delete(&mut self, name: &str) -> Option<Session> {
        self.rooms.remove(name)
    }
}
