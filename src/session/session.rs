use super::*;
use crate::Graph;
use crate::InsufficientTicket;
use crate::Location;
use crate::Ledger;
use crate::MAX_NAME_LENGTH;
use crate::MAX_TURNS;
use crate::Pawn;
use crate::Role;
use crate::Side;
use crate::Team;
use crate::Ticket;
use crate::Transport;
use crate::Turn;
use crate::Username;
use crate::is_surfacing;
use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;

/// Checks a room name: non-empty, at most [`MAX_NAME_LENGTH`] characters,
/// and free of newlines, tabs, and double quotes.
pub fn room_name(name: &str) -> Result<String, GameError> {
    let name = name.trim();
    let ok = !name.is_empty()
        && name.chars().count() <= MAX_NAME_LENGTH
        && !name.contains(['\n', '\t', '"']);
    ok.then(|| name.to_string())
        .ok_or_else(|| GameError::InvalidName(name.to_string()))
}

/// One room: roster, teams, pawns, and the turn state machine.
///
/// Lobby operations ([`join`](Self::join), [`leave`](Self::leave),
/// [`set_team`](Self::set_team), [`vote`](Self::vote)) are accepted while
/// the room is NEW. Moves are accepted while it is IN_PROGRESS. Once
/// COMPLETE, only [`leave`](Self::leave) does anything.
///
/// Every state change is announced to the attached [`Observers`]. Mr. X's
/// square is withheld from everyone but his controller, except on
/// surfacing turns and after the game ends.
#[derive(Debug)]
pub struct Session {
    name: String,
    graph: Arc<Graph>,
    status: Status,
    turn: Turn,
    mover: Role,
    pawns: [Pawn; 6],
    teams: [Team; 2],
    players: Vec<Username>,
    ready: BTreeSet<Username>,
    history: History,
    observers: Observers,
    outcome: Option<Outcome>,
}

impl Session {
    pub fn new(name: &str, graph: Arc<Graph>, setup: Setup) -> Result<Self, GameError> {
        let name = room_name(name)?;
        setup.validate(&graph).map_err(GameError::InvalidSetup)?;
        let pawns = setup.pawns();
        log::debug!("[room {}] created", name);
        Ok(Self {
            history: History::new(pawns.iter().map(|p| (p.role(), p.location()))),
            teams: Side::all().map(Team::from),
            name,
            graph,
            status: Status::New,
            turn: 1,
            mover: Role::X,
            pawns,
            players: Vec::new(),
            ready: BTreeSet::new(),
            observers: Observers::default(),
            outcome: None,
        })
    }
}

/// read-only accessors
impl Session {
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn graph(&self) -> &Graph {
        &self.graph
    }
    pub fn status(&self) -> Status {
        self.status
    }
    pub fn turn(&self) -> Turn {
        self.turn
    }
    pub fn mover(&self) -> Role {
        self.mover
    }
    pub fn pawn(&self, role: Role) -> &Pawn {
        &self.pawns[role.index()]
    }
    pub fn pawns(&self) -> &[Pawn; 6] {
        &self.pawns
    }
    pub fn team(&self, side: Side) -> &Team {
        &self.teams[side.index()]
    }
    /// Roster in join order.
    pub fn players(&self) -> &[Username] {
        &self.players
    }
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }
    /// Unconcealed move log.
    pub fn history(&self) -> &History {
        &self.history
    }
    pub fn observers(&self) -> &Observers {
        &self.observers
    }
    pub fn is_ready(&self, player: &str) -> bool {
        self.ready.contains(player)
    }
    pub fn side_of(&self, player: &str) -> Option<Side> {
        Side::all()
            .into_iter()
            .find(|side| self.team(*side).contains(player))
    }
    pub fn pawns_for(&self, player: &str) -> Vec<Role> {
        self.side_of(player)
            .map(|side| self.team(side).pawns_for(player))
            .unwrap_or_default()
    }
    fn is_member(&self, player: &str) -> bool {
        self.players.iter().any(|p| p == player)
    }
}

/// lobby
impl Session {
    /// Adds a player to the room, or re-attaches one who dropped out of a
    /// running game.
    ///
    /// New players go to the team with fewer players, Mr. X's on a tie.
    pub fn join(&mut self, player: &str, sink: UnboundedSender<Event>) -> Result<(), GameError> {
        match self.status {
            Status::New => {
                if self.is_member(player) {
                    return Err(GameError::AlreadyJoined(player.to_string()));
                }
                let side = Side::all()
                    .into_iter()
                    .filter(|side| !self.team(*side).is_full())
                    .min_by_key(|side| self.team(*side).players().len())
                    .ok_or(GameError::GameFull)?;
                self.teams[side.index()].add_player(player)?;
                self.players.push(player.to_string());
                self.observers.attach(player, sink);
                self.assign();
                log::info!("[room {}] {} joined {}", self.name, player, side);
                self.observers.broadcast(Event::PlayerJoined {
                    player: player.to_string(),
                    side,
                });
                self.announce_team(side);
                Ok(())
            }
            Status::InProgress => {
                if !self.is_member(player) {
                    return Err(GameError::NotPermitted(player.to_string()));
                }
                log::info!("[room {}] {} rejoined", self.name, player);
                self.observers.broadcast(Event::PlayerRejoined {
                    player: player.to_string(),
                });
                self.observers.attach(player, sink);
                self.sync(player);
                Ok(())
            }
            Status::Complete => Err(GameError::WrongStatus(self.status)),
        }
    }
    /// Removes a player.
    ///
    /// Before the game starts the player gives up their seat. During play
    /// only their observer is detached, so they may rejoin. After the game
    /// they are dropped from the roster.
    pub fn leave(&mut self, player: &str) -> Result<(), GameError> {
        if !self.is_member(player) {
            return Err(GameError::UnknownPlayer(player.to_string()));
        }
        match self.status {
            Status::New => {
                let side = self.side_of(player);
                if let Some(side) = side {
                    self.teams[side.index()].remove_player(player)?;
                }
                self.players.retain(|p| p != player);
                self.ready.remove(player);
                self.assign();
                self.observers.detach(player);
                self.observers.broadcast(Event::PlayerLeft {
                    player: player.to_string(),
                });
                if let Some(side) = side {
                    self.announce_team(side);
                }
            }
            Status::InProgress => {
                self.observers.detach(player);
                self.observers.broadcast(Event::PlayerLeft {
                    player: player.to_string(),
                });
            }
            Status::Complete => {
                self.players.retain(|p| p != player);
                self.observers.detach(player);
                self.observers.broadcast(Event::PlayerLeft {
                    player: player.to_string(),
                });
            }
        }
        log::info!("[room {}] {} left", self.name, player);
        Ok(())
    }
    /// Moves a player to the other team. Pawns on both teams are reassigned.
    pub fn set_team(&mut self, player: &str, side: Side) -> Result<(), GameError> {
        self.require(Status::New)?;
        let from = self
            .side_of(player)
            .ok_or_else(|| GameError::UnknownPlayer(player.to_string()))?;
        if from == side {
            return Ok(());
        }
        self.teams[side.index()].add_player(player)?;
        self.teams[from.index()].remove_player(player)?;
        self.assign();
        log::debug!("[room {}] {} moved to {}", self.name, player, side);
        self.announce_team(from);
        self.announce_team(side);
        Ok(())
    }
    /// Records a start vote. The game starts as soon as both teams have a
    /// player and every player has voted to start.
    pub fn vote(&mut self, player: &str, ready: bool) -> Result<(), GameError> {
        self.require(Status::New)?;
        if !self.is_member(player) {
            return Err(GameError::UnknownPlayer(player.to_string()));
        }
        match ready {
            true => self.ready.insert(player.to_string()),
            false => self.ready.remove(player),
        };
        if let Some(event) = self.modified(player) {
            self.observers.broadcast(event);
        }
        let staffed = self.teams.iter().all(|t| !t.players().is_empty());
        let unanimous = self.players.iter().all(|p| self.ready.contains(p));
        if staffed && unanimous {
            self.start();
        }
        Ok(())
    }
    fn start(&mut self) {
        self.status = Status::InProgress;
        self.turn = 1;
        self.mover = Role::X;
        log::info!("[room {}] game started", self.name);
        self.observers.broadcast(Event::GameStart);
        self.announce_pawns();
        self.observers
            .broadcast(Event::TurnNumber { turn: self.turn });
        self.observers
            .broadcast(Event::Mover { pawn: self.mover });
    }
    fn require(&self, status: Status) -> Result<(), GameError> {
        match self.status == status {
            true => Ok(()),
            false => Err(GameError::WrongStatus(self.status)),
        }
    }
    /// Copies team ownership onto the pawns.
    fn assign(&mut self) {
        for pawn in self.pawns.iter_mut() {
            let owner = self.teams[pawn.role().side().index()]
                .owner(pawn.role())
                .cloned();
            pawn.assign(owner);
        }
    }
}

/// legality
impl Session {
    /// True if the move could be committed now, ignoring who requests it.
    pub fn is_legal(&self, mv: &Move) -> bool {
        self.status == Status::InProgress && mv.pawn() == self.mover && self.allows(mv)
    }
    /// Checks a move requested by a player without committing it.
    pub fn check(&self, player: &str, mv: &Move) -> Result<(), GameError> {
        self.require(Status::InProgress)?;
        if mv.pawn() != self.mover {
            return Err(GameError::NotYourTurn(mv.pawn()));
        }
        if !self.pawn(mv.pawn()).is_owned_by(player) {
            return Err(GameError::NotYourPawn(mv.pawn()));
        }
        match self.allows(mv) {
            true => Ok(()),
            false => Err(GameError::IllegalMove(*mv)),
        }
    }
    /// Every single leg the pawn could take from where it stands.
    pub fn destinations(&self, role: Role) -> Vec<Leg> {
        let pawn = self.pawn(role);
        let blocked = self.blocked(role);
        self.graph
            .routes(pawn.location())
            .filter(|(to, _)| !blocked.contains(to))
            .flat_map(|(to, modes)| {
                modes
                    .admitted()
                    .map(move |transport| Leg::from((to, transport)))
                    .collect::<Vec<_>>()
            })
            .filter(|leg| self.affords(role, pawn.location(), pawn.ledger(), leg).is_some())
            .collect()
    }
    /// True if the pawn has no legal single move.
    pub fn is_stuck(&self, role: Role) -> bool {
        self.destinations(role).is_empty()
    }
    fn allows(&self, mv: &Move) -> bool {
        let role = mv.pawn();
        let pawn = self.pawn(role);
        if mv.is_double() && (!pawn.ledger().has(Ticket::Double) || self.turn >= MAX_TURNS) {
            return false;
        }
        let blocked = self.blocked(role);
        if mv.legs().any(|leg| blocked.contains(&leg.destination)) {
            return false;
        }
        let first = mv.first();
        match self.affords(role, pawn.location(), pawn.ledger(), &first) {
            None => false,
            Some(ledger) => match mv.second() {
                None => true,
                Some(second) => self
                    .affords(role, first.destination, &ledger, &second)
                    .is_some(),
            },
        }
    }
    /// Ledger left after taking the leg from `from`, if the leg is allowed.
    fn affords(&self, role: Role, from: Location, ledger: &Ledger, leg: &Leg) -> Option<Ledger> {
        if role.is_detective() && leg.transport == Transport::Black {
            return None;
        }
        self.graph
            .modes(from, leg.destination)
            .filter(|modes| modes.admits(leg.transport))
            .and_then(|_| ledger.spent(leg.transport))
    }
    /// Squares the pawn may not enter: its teammates' squares.
    fn blocked(&self, role: Role) -> Vec<Location> {
        match role.is_detective() {
            false => Vec::new(),
            true => Role::detectives()
                .into_iter()
                .filter(|r| *r != role)
                .map(|r| self.pawn(r).location())
                .collect(),
        }
    }
}

/// play
impl Session {
    /// Validates and commits a move on behalf of a player.
    pub fn play(&mut self, player: &str, mv: Move) -> Result<(), GameError> {
        self.check(player, &mv)?;
        self.apply(&mv)
    }
    /// Commits a move without checking ownership or legality.
    ///
    /// Every ticket the move needs is checked before anything changes. Each leg spends its ticket, moves the pawn, is logged, and is
    /// announced, and then a capture check runs. The second leg of a double
    /// move belongs to the next turn and also spends the double ticket. It
    /// is skipped if the first leg ended the game.
    pub fn apply(&mut self, mv: &Move) -> Result<(), GameError> {
        self.require(Status::InProgress)?;
        let role = mv.pawn();
        mv.second()
            .map(|_| Ticket::Double)
            .into_iter()
            .chain(mv.legs().map(|leg| Ticket::from(leg.transport)))
            .try_fold(*self.pawn(role).ledger(), |ledger, ticket| {
                ledger.spent(ticket).ok_or(InsufficientTicket(ticket))
            })?;
        self.commit(role, mv.first())?;
        if self.capture() {
            return Ok(());
        }
        if let Some(second) = mv.second() {
            self.pawns[role.index()].spend(Ticket::Double)?;
            self.turn += 1;
            self.history.open(self.turn);
            self.observers
                .broadcast(Event::TurnNumber { turn: self.turn });
            self.commit(role, second)?;
            if self.capture() {
                return Ok(());
            }
        }
        self.advance();
        Ok(())
    }
    fn commit(&mut self, role: Role, leg: Leg) -> Result<(), GameError> {
        let pawn = &mut self.pawns[role.index()];
        pawn.spend(leg.transport)?;
        pawn.relocate(leg.destination);
        self.history
            .record(self.turn, role, leg.destination, leg.transport);
        log::debug!("[room {}] turn {} {} {}", self.name, self.turn, role, leg);
        let turn = self.turn;
        let controller = self.pawn(Role::X).player().cloned();
        self.observers.broadcast_with(|viewer| Event::Moved {
            pawn: role,
            location: (role != Role::X
                || is_surfacing(turn)
                || controller.as_deref() == Some(viewer))
            .then_some(leg.destination),
            transport: leg.transport,
        });
        Ok(())
    }
    /// Ends the game if a detective shares Mr. X's square.
    fn capture(&mut self) -> bool {
        let at = self.pawn(Role::X).location();
        match Role::detectives()
            .into_iter()
            .find(|r| self.pawn(*r).location() == at)
        {
            Some(by) => {
                self.finish(Reason::Caught { by, at });
                true
            }
            None => false,
        }
    }
    /// Hands the move to the next pawn that can move.
    ///
    /// Wrapping back to Mr. X starts a new turn, or ends the game if the
    /// final turn is over. Arriving at the first detective with every
    /// detective stuck ends the game. Other stuck detectives are skipped.
    fn advance(&mut self) {
        loop {
            self.mover = self.mover.next();
            match self.mover {
                Role::X if self.turn >= MAX_TURNS => return self.finish(Reason::Evaded),
                Role::X => {
                    self.turn += 1;
                    self.history.open(self.turn);
                    self.observers
                        .broadcast(Event::TurnNumber { turn: self.turn });
                    break;
                }
                Role::Red if Role::detectives().iter().all(|r| self.is_stuck(*r)) => {
                    return self.finish(Reason::Cornered);
                }
                role if self.is_stuck(role) => {
                    log::debug!("[room {}] {} is stuck", self.name, role);
                    self.observers.broadcast(Event::Stuck { pawn: role });
                }
                _ => break,
            }
        }
        self.observers
            .broadcast(Event::Mover { pawn: self.mover });
    }
    fn finish(&mut self, reason: Reason) {
        let outcome = Outcome::from(reason);
        self.status = Status::Complete;
        log::info!("[room {}] game over: {}", self.name, outcome);
        self.observers.broadcast(Event::GameOver {
            winner: outcome.winner,
            reason: outcome.to_string(),
        });
        self.outcome = Some(outcome);
    }
}

/// views
impl Session {
    /// True if the viewer may see Mr. X's square as of the given turn.
    fn reveals(&self, viewer: &str, turn: Turn) -> bool {
        self.status == Status::Complete
            || is_surfacing(turn)
            || self.pawn(Role::X).is_owned_by(viewer)
    }
    /// The board as the viewer is allowed to see it.
    pub fn view(&self, viewer: &str) -> Vec<PawnView> {
        let reveal = self.reveals(viewer, self.turn);
        self.pawns
            .iter()
            .map(|pawn| PawnView {
                pawn: pawn.role(),
                player: pawn.player().cloned(),
                location: (pawn.role() != Role::X || reveal).then_some(pawn.location()),
                tickets: *pawn.ledger(),
            })
            .collect()
    }
    /// The move log as the viewer is allowed to see it.
    pub fn history_for(&self, viewer: &str) -> Vec<Vec<Record>> {
        self.history.conceal(|turn| self.reveals(viewer, turn))
    }
    /// Sends the viewer everything needed to resume a running game.
    pub fn sync(&self, player: &str) {
        self.observers.unicast(
            player,
            Event::PawnInfo {
                pawns: self.view(player),
            },
        );
        self.observers
            .unicast(player, Event::TurnNumber { turn: self.turn });
        self.observers
            .unicast(player, Event::Mover { pawn: self.mover });
        self.replay(player);
    }
    /// Sends the viewer the full move log.
    pub fn replay(&self, player: &str) {
        self.observers.unicast(
            player,
            Event::History {
                turns: self.history_for(player),
            },
        );
    }
    fn announce_pawns(&self) {
        self.observers.broadcast_with(|viewer| Event::PawnInfo {
            pawns: self.view(viewer),
        });
    }
    fn announce_team(&self, side: Side) {
        self.team(side)
            .players()
            .iter()
            .filter_map(|p| self.modified(p))
            .for_each(|event| self.observers.broadcast(event));
    }
    fn modified(&self, player: &str) -> Option<Event> {
        self.side_of(player).map(|side| Event::PlayerModified {
            player: player.to_string(),
            side,
            ready: self.is_ready(player),
            pawns: self.team(side).pawns_for(player),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Count;
    use crate::Modes;
    use tokio::sync::mpsc::UnboundedReceiver;
    use tokio::sync::mpsc::unbounded_channel;

    /// X on 13, then Red 26, Yellow 29, Green 34, Blue 50, Black 53.
    const SQUARES: [Location; 6] = [13, 26, 29, 34, 50, 53];

    fn sink() -> UnboundedSender<Event> {
        unbounded_channel().0
    }
    fn drain(rx: &mut UnboundedReceiver<Event>) -> Vec<Event> {
        std::iter::from_fn(|| rx.try_recv().ok()).collect()
    }
    /// "x" plays Mr. X, "cops" plays every detective.
    fn running(
        graph: Arc<Graph>,
        setup: Setup,
    ) -> (Session, UnboundedReceiver<Event>, UnboundedReceiver<Event>) {
        let mut session = Session::new("test", graph, setup).unwrap();
        let (tx, x) = unbounded_channel();
        session.join("x", tx).unwrap();
        let (tx, cops) = unbounded_channel();
        session.join("cops", tx).unwrap();
        session.vote("x", true).unwrap();
        session.vote("cops", true).unwrap();
        assert_eq!(session.status(), Status::InProgress);
        (session, x, cops)
    }
    /// Builds a taxi-only board from undirected pairs.
    fn board(size: usize, pairs: &[(Location, Location)]) -> Arc<Graph> {
        let mut rows = vec![Vec::new(); size + 1];
        for &(a, b) in pairs {
            rows[a as usize].push((b, Modes::TAXI));
            rows[b as usize].push((a, Modes::TAXI));
        }
        let table = rows.iter().map(Vec::as_slice).collect::<Vec<_>>();
        Arc::new(Graph::try_from(&table[..]).unwrap())
    }
    fn lobby() -> Session {
        Session::new("room", Graph::london(), Setup::fixed(SQUARES)).unwrap()
    }

    #[test]
    fn room_names() {
        assert!(room_name("friday night").is_ok());
        assert!(room_name("").is_err());
        assert!(room_name("tab\there").is_err());
        assert!(room_name("new\nline").is_err());
        assert!(room_name("say \"hi\"").is_err());
        assert!(room_name(&"a".repeat(40)).is_ok());
        assert!(room_name(&"a".repeat(41)).is_err());
        assert_eq!(room_name("  lobby  ").unwrap(), "lobby");
        assert!(room_name("   ").is_err());
    }
    #[test]
    fn new_session_waits_for_players() {
        let session = lobby();
        assert_eq!(session.status(), Status::New);
        assert_eq!(session.turn(), 1);
        assert_eq!(session.mover(), Role::X);
        assert_eq!(session.history().turn(0).len(), 6);
        let duplicate = Setup::fixed([1, 1, 2, 3, 4, 5]);
        assert!(matches!(
            Session::new("room", Graph::london(), duplicate),
            Err(GameError::InvalidSetup(_))
        ));
        assert!(matches!(
            Session::new("", Graph::london(), Setup::fixed(SQUARES)),
            Err(GameError::InvalidName(_))
        ));
    }
    #[test]
    fn join_balances_teams() {
        let mut session = lobby();
        session.join("ann", sink()).unwrap();
        session.join("bob", sink()).unwrap();
        session.join("cat", sink()).unwrap();
        assert_eq!(session.side_of("ann"), Some(Side::MrX));
        assert_eq!(session.side_of("bob"), Some(Side::Detectives));
        assert_eq!(session.side_of("cat"), Some(Side::Detectives));
        assert_eq!(session.pawns_for("bob"), vec![Role::Red, Role::Yellow, Role::Green]);
        assert_eq!(session.pawns_for("cat"), vec![Role::Blue, Role::Black]);
        assert!(session.pawn(Role::X).is_owned_by("ann"));
        assert!(session.pawn(Role::Black).is_owned_by("cat"));
        assert_eq!(
            session.join("ann", sink()),
            Err(GameError::AlreadyJoined("ann".to_string()))
        );
    }
    #[test]
    fn join_rejects_full_game() {
        let mut session = lobby();
        for name in ["a", "b", "c", "d", "e", "f"] {
            session.join(name, sink()).unwrap();
        }
        assert_eq!(session.join("g", sink()), Err(GameError::GameFull));
    }
    #[test]
    fn vote_starts_only_when_unanimous_and_staffed() {
        let mut session = lobby();
        let (tx, mut rx) = unbounded_channel();
        session.join("ann", tx).unwrap();
        session.vote("ann", true).unwrap();
        assert_eq!(session.status(), Status::New);
        session.join("bob", sink()).unwrap();
        session.vote("ann", false).unwrap();
        session.vote("bob", true).unwrap();
        assert_eq!(session.status(), Status::New);
        session.vote("ann", true).unwrap();
        assert_eq!(session.status(), Status::InProgress);
        let events = drain(&mut rx);
        assert!(events.contains(&Event::GameStart));
        assert!(events.contains(&Event::TurnNumber { turn: 1 }));
        assert!(events.contains(&Event::Mover { pawn: Role::X }));
        assert_eq!(
            session.vote("ann", true),
            Err(GameError::WrongStatus(Status::InProgress))
        );
    }
    #[test]
    fn set_team_reassigns_pawns() {
        let mut session = lobby();
        session.join("ann", sink()).unwrap();
        session.join("bob", sink()).unwrap();
        assert_eq!(
            session.set_team("bob", Side::MrX),
            Err(GameError::TeamFull(Side::MrX))
        );
        session.set_team("ann", Side::Detectives).unwrap();
        assert_eq!(session.pawns_for("bob"), vec![Role::Red, Role::Yellow, Role::Green]);
        assert_eq!(session.pawns_for("ann"), vec![Role::Blue, Role::Black]);
        assert!(session.pawn(Role::X).player().is_none());
        session.set_team("bob", Side::MrX).unwrap();
        assert!(session.pawn(Role::X).is_owned_by("bob"));
        assert_eq!(session.pawns_for("ann").len(), 5);
    }
    #[test]
    fn leave_before_start_frees_seat() {
        let mut session = lobby();
        session.join("ann", sink()).unwrap();
        session.leave("ann").unwrap();
        assert!(session.players().is_empty());
        assert!(session.pawn(Role::X).player().is_none());
        assert_eq!(
            session.leave("ann"),
            Err(GameError::UnknownPlayer("ann".to_string()))
        );
    }
    #[test]
    fn rejoin_requires_roster_membership() {
        let (mut session, _, _) = running(Graph::london(), Setup::fixed(SQUARES));
        session.leave("cops").unwrap();
        assert!(!session.observers().contains("cops"));
        assert_eq!(session.players().len(), 2);
        assert_eq!(
            session.join("eve", sink()),
            Err(GameError::NotPermitted("eve".to_string()))
        );
        let (tx, mut rx) = unbounded_channel();
        session.join("cops", tx).unwrap();
        let events = drain(&mut rx);
        assert!(matches!(events.first(), Some(Event::PawnInfo { .. })));
        assert!(matches!(events.last(), Some(Event::History { .. })));
    }
    #[test]
    fn moves_require_turn_and_ownership() {
        let (mut session, _, _) = running(Graph::london(), Setup::fixed(SQUARES));
        let mv = Move::single(Role::Red, 27, Transport::Taxi);
        assert_eq!(session.check("cops", &mv), Err(GameError::NotYourTurn(Role::Red)));
        let mv = Move::single(Role::X, 14, Transport::Taxi);
        assert_eq!(session.check("cops", &mv), Err(GameError::NotYourPawn(Role::X)));
        let mv = Move::single(Role::X, 14, Transport::Underground);
        assert_eq!(session.check("x", &mv), Err(GameError::IllegalMove(mv)));
        let mv = Move::single(Role::X, 14, Transport::Taxi);
        assert!(session.play("x", mv).is_ok());
        assert_eq!(session.mover(), Role::Red);
        assert_eq!(session.turn(), 1);
    }
    #[test]
    fn mr_x_may_use_black_on_any_route() {
        let (session, _, _) = running(Graph::london(), Setup::fixed(SQUARES));
        assert!(session.is_legal(&Move::single(Role::X, 14, Transport::Black)));
        assert!(!session.is_legal(&Move::single(Role::X, 99, Transport::Black)));
    }
    #[test]
    fn detectives_never_use_black() {
        let setup = Setup::fixed(SQUARES).with_ledger(Role::Red, Ledger::unlimited());
        let (mut session, _, _) = running(Graph::london(), setup);
        session.play("x", Move::single(Role::X, 14, Transport::Taxi)).unwrap();
        assert!(!session.is_legal(&Move::single(Role::Red, 39, Transport::Black)));
        assert!(session.is_legal(&Move::single(Role::Red, 39, Transport::Taxi)));
    }
    #[test]
    fn detectives_may_not_share_a_square() {
        let (mut session, _, _) = running(Graph::london(), Setup::fixed([13, 26, 39, 34, 50, 53]));
        session.play("x", Move::single(Role::X, 14, Transport::Taxi)).unwrap();
        assert!(!session.is_legal(&Move::single(Role::Red, 39, Transport::Taxi)));
        assert!(
            session
                .destinations(Role::Red)
                .iter()
                .all(|leg| leg.destination != 39)
        );
        session.play("cops", Move::single(Role::Red, 27, Transport::Taxi)).unwrap();
        let squares = Role::detectives().map(|r| session.pawn(r).location());
        let distinct = squares.iter().collect::<BTreeSet<_>>();
        assert_eq!(distinct.len(), squares.len());
    }
    #[test]
    fn mr_x_is_concealed_from_detectives() {
        let (mut session, mut x, mut cops) = running(Graph::london(), Setup::fixed(SQUARES));
        drain(&mut x);
        drain(&mut cops);
        session.play("x", Move::single(Role::X, 14, Transport::Taxi)).unwrap();
        let seen = |events: Vec<Event>| {
            events.into_iter().find_map(|e| match e {
                Event::Moved { location, .. } => Some(location),
                _ => None,
            })
        };
        assert_eq!(seen(drain(&mut x)), Some(Some(14)));
        assert_eq!(seen(drain(&mut cops)), Some(None));
        assert_eq!(session.view("cops")[0].location, None);
        assert_eq!(session.view("x")[0].location, Some(14));
        assert_eq!(session.view("cops")[1].location, Some(26));
        let history = session.history_for("cops");
        assert_eq!(history[0][0].location, None);
        assert_eq!(history[1][0].location, None);
        assert_eq!(history[1][0].transport, Some(Transport::Taxi));
    }
    #[test]
    fn double_move_spans_two_turns() {
        let (mut session, _, mut cops) = running(Graph::london(), Setup::fixed(SQUARES));
        let mv = Move::double(Role::X, 14, Transport::Taxi, 15, Transport::Taxi);
        session.play("x", mv).unwrap();
        assert_eq!(session.turn(), 2);
        assert_eq!(session.mover(), Role::Red);
        assert_eq!(session.pawn(Role::X).location(), 15);
        assert_eq!(
            session.pawn(Role::X).ledger().amount(Ticket::Double),
            Count::Finite(1)
        );
        assert_eq!(session.history().turn(1)[0].location, Some(14));
        assert_eq!(session.history().turn(2)[0].location, Some(15));
        assert!(drain(&mut cops).contains(&Event::TurnNumber { turn: 2 }));
    }
    #[test]
    fn double_move_needs_ticket() {
        let setup = Setup::fixed(SQUARES).with_ledger(Role::X, Ledger::unlimited());
        let (mut session, _, _) = running(Graph::london(), setup);
        let mv = Move::double(Role::X, 14, Transport::Taxi, 15, Transport::Taxi);
        assert!(!session.is_legal(&mv));
        assert_eq!(
            session.apply(&mv),
            Err(GameError::InsufficientTicket(InsufficientTicket(Ticket::Double)))
        );
        assert_eq!(session.pawn(Role::X).location(), 13);
    }
    #[test]
    fn unaffordable_second_leg_changes_nothing() {
        let setup = Setup::fixed(SQUARES)
            .with_ledger(Role::X, Ledger::try_from("taxi=1,double=2").unwrap());
        let (mut session, _, mut cops) = running(Graph::london(), setup);
        drain(&mut cops);
        let mv = Move::double(Role::X, 14, Transport::Taxi, 15, Transport::Taxi);
        assert!(!session.is_legal(&mv));
        assert_eq!(
            session.apply(&mv),
            Err(GameError::InsufficientTicket(InsufficientTicket(Ticket::Taxi)))
        );
        assert_eq!(session.pawn(Role::X).location(), 13);
        assert_eq!(session.turn(), 1);
        assert_eq!(session.mover(), Role::X);
        assert_eq!(
            session.pawn(Role::X).ledger().amount(Ticket::Double),
            Count::Finite(2)
        );
        assert_eq!(session.pawn(Role::X).ledger().amount(Ticket::Taxi), Count::Finite(1));
        assert!(session.history().turn(1).is_empty());
        assert!(drain(&mut cops).is_empty());
    }
    #[test]
    fn capture_on_first_leg_skips_second() {
        let graph = board(6, &[(1, 2), (2, 3), (3, 4), (4, 5), (5, 6)]);
        let (mut session, _, _) = running(graph, Setup::fixed([2, 4, 6, 1, 5, 3]));
        let mv = Move::double(Role::X, 3, Transport::Taxi, 4, Transport::Taxi);
        assert!(session.is_legal(&mv));
        session.play("x", mv).unwrap();
        assert_eq!(session.status(), Status::Complete);
        let outcome = session.outcome().unwrap();
        assert_eq!(outcome.winner, Side::Detectives);
        assert_eq!(outcome.reason, Reason::Caught { by: Role::Black, at: 3 });
        assert_eq!(
            session.pawn(Role::X).ledger().amount(Ticket::Double),
            Count::Finite(2)
        );
        assert_eq!(session.history().len(), 2);
    }
    #[test]
    fn detective_moving_onto_mr_x_wins() {
        let (mut session, _, mut cops) = running(Graph::london(), Setup::fixed([13, 26, 29, 22, 50, 53]));
        session.play("x", Move::single(Role::X, 23, Transport::Bus)).unwrap();
        session.play("cops", Move::single(Role::Red, 27, Transport::Taxi)).unwrap();
        session.play("cops", Move::single(Role::Yellow, 15, Transport::Bus)).unwrap();
        session.play("cops", Move::single(Role::Green, 23, Transport::Taxi)).unwrap();
        assert_eq!(session.status(), Status::Complete);
        assert_eq!(
            session.outcome().map(|o| o.reason),
            Some(Reason::Caught { by: Role::Green, at: 23 })
        );
        assert!(drain(&mut cops).iter().any(|e| matches!(
            e,
            Event::GameOver { winner: Side::Detectives, .. }
        )));
        assert_eq!(session.history_for("cops")[1][0].location, Some(23));
        assert_eq!(
            session.apply(&Move::single(Role::Blue, 49, Transport::Taxi)),
            Err(GameError::WrongStatus(Status::Complete))
        );
        assert_eq!(
            session.join("eve", sink()),
            Err(GameError::WrongStatus(Status::Complete))
        );
        session.leave("x").unwrap();
        assert_eq!(session.players(), ["cops".to_string()]);
        assert_eq!(
            drain(&mut cops),
            vec![Event::PlayerLeft { player: "x".to_string() }]
        );
    }
    #[test]
    fn stuck_detectives_are_skipped() {
        let graph = board(10, &[(1, 2), (2, 3), (4, 5), (6, 7), (8, 9)]);
        let setup = Setup::fixed([1, 10, 4, 6, 8, 9])
            .with_ledger(Role::Blue, Ledger::empty())
            .with_ledger(Role::Black, Ledger::empty());
        let (mut session, _, mut cops) = running(graph, setup);
        drain(&mut cops);
        assert!(session.is_stuck(Role::Red));
        assert!(!session.is_stuck(Role::Yellow));
        session.play("x", Move::single(Role::X, 2, Transport::Taxi)).unwrap();
        assert_eq!(session.mover(), Role::Yellow);
        let events = drain(&mut cops);
        assert!(events.contains(&Event::Stuck { pawn: Role::Red }));
        assert!(events.contains(&Event::Mover { pawn: Role::Yellow }));
        session.play("cops", Move::single(Role::Yellow, 5, Transport::Taxi)).unwrap();
        session.play("cops", Move::single(Role::Green, 7, Transport::Taxi)).unwrap();
        assert_eq!(session.mover(), Role::X);
        assert_eq!(session.turn(), 2);
        let events = drain(&mut cops);
        assert!(events.contains(&Event::Stuck { pawn: Role::Blue }));
        assert!(events.contains(&Event::Stuck { pawn: Role::Black }));
        assert!(events.contains(&Event::TurnNumber { turn: 2 }));
    }
    #[test]
    fn all_detectives_stuck_hands_mr_x_the_win() {
        let graph = board(7, &[(1, 2)]);
        let (mut session, _, mut cops) = running(graph, Setup::fixed([1, 3, 4, 5, 6, 7]));
        session.play("x", Move::single(Role::X, 2, Transport::Taxi)).unwrap();
        assert_eq!(session.status(), Status::Complete);
        let outcome = session.outcome().unwrap();
        assert_eq!(outcome.winner, Side::MrX);
        assert_eq!(outcome.reason, Reason::Cornered);
        assert!(drain(&mut cops).iter().any(|e| matches!(
            e,
            Event::GameOver { winner: Side::MrX, reason } if reason.contains("stuck")
        )));
    }
    #[test]
    fn mr_x_wins_after_final_turn() {
        let graph = board(9, &[(1, 2), (4, 5)]);
        let setup = Setup::fixed([1, 4, 6, 7, 8, 9]).with_ledger(Role::Red, Ledger::unlimited_noblack());
        let (mut session, _, mut cops) = running(graph, setup);
        for turn in 1..=MAX_TURNS {
            assert_eq!(session.turn(), turn);
            let (x, red) = if turn % 2 == 1 { (2, 5) } else { (1, 4) };
            session.play("x", Move::single(Role::X, x, Transport::Taxi)).unwrap();
            session.play("cops", Move::single(Role::Red, red, Transport::Taxi)).unwrap();
        }
        assert_eq!(session.status(), Status::Complete);
        assert_eq!(session.turn(), MAX_TURNS);
        let outcome = session.outcome().unwrap();
        assert_eq!(outcome.winner, Side::MrX);
        assert_eq!(outcome.reason, Reason::Evaded);
        assert!(drain(&mut cops).iter().any(|e| matches!(
            e,
            Event::GameOver { winner: Side::MrX, reason } if reason.contains("evaded")
        )));
    }
    #[test]
    fn double_move_is_refused_on_final_turn() {
        let graph = board(9, &[(1, 2), (2, 3), (4, 5)]);
        let setup = Setup::fixed([1, 4, 6, 7, 8, 9]).with_ledger(Role::Red, Ledger::unlimited_noblack());
        let (mut session, _, _) = running(graph, setup);
        for turn in 1..MAX_TURNS {
            let (x, red) = if turn % 2 == 1 { (2, 5) } else { (1, 4) };
            session.play("x", Move::single(Role::X, x, Transport::Taxi)).unwrap();
            session.play("cops", Move::single(Role::Red, red, Transport::Taxi)).unwrap();
        }
        assert_eq!(session.turn(), MAX_TURNS);
        assert_eq!(session.pawn(Role::X).location(), 2);
        let mv = Move::double(Role::X, 3, Transport::Taxi, 2, Transport::Taxi);
        assert!(!session.is_legal(&mv));
        assert!(session.is_legal(&Move::single(Role::X, 3, Transport::Taxi)));
    }
}
