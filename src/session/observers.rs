use super::*;
use crate::Username;
use tokio::sync::mpsc::UnboundedSender;

/// Registered event sinks, one per connected player.
///
/// A player who rejoins replaces their previous sink. Delivery failures are
/// logged and otherwise ignored; a closed receiver never blocks the game.
#[derive(Debug, Default)]
pub struct Observers {
    sinks: Vec<(Username, UnboundedSender<Event>)>,
}

impl Observers {
    pub fn attach(&mut self, player: &str, sink: UnboundedSender<Event>) {
        match self.sinks.iter_mut().find(|(p, _)| p == player) {
            Some((_, old)) => *old = sink,
            None => self.sinks.push((player.to_string(), sink)),
        }
    }
    /// Returns true if the player had a sink.
    pub fn detach(&mut self, player: &str) -> bool {
        let before = self.sinks.len();
        self.sinks.retain(|(p, _)| p != player);
        self.sinks.len() < before
    }
    pub fn contains(&self, player: &str) -> bool {
        self.sinks.iter().any(|(p, _)| p == player)
    }
    pub fn len(&self) -> usize {
        self.sinks.len()
    }
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
    /// Sends an event to a specific player.
    pub fn unicast(&self, player: &str, event: Event) {
        log::debug!("[observers] unicast to {}: {}", player, event);
        match self
            .sinks
            .iter()
            .find(|(p, _)| p == player)
            .map(|(_, inbox)| inbox.send(event))
        {
            Some(Ok(())) => {}
            Some(Err(e)) => log::warn!("[observers] unicast to {} failed: {:?}", player, e),
            None => log::debug!("[observers] unicast to {}: not attached", player),
        }
    }
    /// Sends the same event to every player.
    pub fn broadcast(&self, event: Event) {
        log::debug!("[observers] broadcast: {}", event);
        self.broadcast_with(|_| event.clone());
    }
    /// Sends each player the event built for them.
    pub fn broadcast_with<F>(&self, view: F)
    where
        F: Fn(&str) -> Event,
    {
        self.sinks.iter().for_each(|(player, inbox)| {
            if let Err(e) = inbox.send(view(player)) {
                log::warn!("[observers] broadcast to {} failed: {:?}", player, e);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Role;
    use tokio::sync::mpsc::unbounded_channel;
    #[test]
    fn attach_replaces_existing_sink() {
        let mut observers = Observers::default();
        let (tx1, mut rx1) = unbounded_channel();
        let (tx2, mut rx2) = unbounded_channel();
        observers.attach("ann", tx1);
        observers.attach("ann", tx2);
        assert_eq!(observers.len(), 1);
        observers.broadcast(Event::GameStart);
        assert!(rx1.try_recv().is_err());
        assert_eq!(rx2.try_recv().unwrap(), Event::GameStart);
    }
    #[test]
    fn unicast_reaches_only_target() {
        let mut observers = Observers::default();
        let (tx1, mut rx1) = unbounded_channel();
        let (tx2, mut rx2) = unbounded_channel();
        observers.attach("ann", tx1);
        observers.attach("bob", tx2);
        observers.unicast("bob", Event::Mover { pawn: Role::X });
        assert!(rx1.try_recv().is_err());
        assert_eq!(rx2.try_recv().unwrap(), Event::Mover { pawn: Role::X });
    }
    #[test]
    fn closed_receivers_are_tolerated() {
        let mut observers = Observers::default();
        let (tx, rx) = unbounded_channel();
        observers.attach("ann", tx);
        drop(rx);
        observers.broadcast(Event::GameStart);
        assert!(observers.detach("ann"));
        assert!(!observers.detach("ann"));
        assert!(observers.is_empty());
    }
}
