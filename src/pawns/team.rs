use super::*;
use crate::GameError;
use crate::Username;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// The two opposing sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    MrX,
    Detectives,
}

impl Side {
    pub const fn all() -> [Self; 2] {
        [Self::MrX, Self::Detectives]
    }
    pub const fn index(self) -> usize {
        self as usize
    }
    /// Pawns played by this side, in move order.
    pub fn roles(self) -> Vec<Role> {
        match self {
            Self::MrX => vec![Role::X],
            Self::Detectives => Role::detectives().to_vec(),
        }
    }
}

impl TryFrom<&str> for Side {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "mr. x" | "mrx" | "x" => Ok(Self::MrX),
            "detectives" | "detective" => Ok(Self::Detectives),
            _ => Err(anyhow::anyhow!("no such team {:?}", s)),
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MrX => write!(f, "Mr. X"),
            Self::Detectives => write!(f, "Detectives"),
        }
    }
}

/// Players on one side and which pawns each of them controls.
///
/// The pawn-to-player mapping is rebuilt from scratch on every membership
/// change: with P players and K pawns every player gets ⌊K/P⌋ pawns and the
/// first K mod P players, by join order, get one more.
#[derive(Debug, Clone)]
pub struct Team {
    side: Side,
    pawns: Vec<Role>,
    players: Vec<Username>,
    owners: BTreeMap<Role, Username>,
}

impl From<Side> for Team {
    fn from(side: Side) -> Self {
        Self {
            side,
            pawns: side.roles(),
            players: Vec::new(),
            owners: BTreeMap::new(),
        }
    }
}

impl Team {
    pub fn side(&self) -> Side {
        self.side
    }
    pub fn pawns(&self) -> &[Role] {
        &self.pawns
    }
    /// Players in join order.
    pub fn players(&self) -> &[Username] {
        &self.players
    }
    /// One seat per pawn.
    pub fn max_players(&self) -> usize {
        self.pawns.len()
    }
    pub fn is_full(&self) -> bool {
        self.players.len() >= self.max_players()
    }
    pub fn contains(&self, player: &str) -> bool {
        self.players.iter().any(|p| p == player)
    }
    pub fn owner(&self, role: Role) -> Option<&Username> {
        self.owners.get(&role)
    }
    pub fn pawns_for(&self, player: &str) -> Vec<Role> {
        self.owners
            .iter()
            .filter(|(_, owner)| owner.as_str() == player)
            .map(|(role, _)| *role)
            .collect()
    }
    pub fn add_player(&mut self, player: &str) -> Result<(), GameError> {
        if self.is_full() {
            return Err(GameError::TeamFull(self.side));
        }
        self.players.push(player.to_string());
        self.reassign();
        Ok(())
    }
    pub fn remove_player(&mut self, player: &str) -> Result<(), GameError> {
        let index = self
            .players
            .iter()
            .position(|p| p == player)
            .ok_or_else(|| GameError::UnknownPlayer(player.to_string()))?;
        self.players.remove(index);
        self.reassign();
        Ok(())
    }
    fn reassign(&mut self) {
        self.owners.clear();
        if self.players.is_empty() {
            return;
        }
        let base = self.pawns.len() / self.players.len();
        let extra = self.pawns.len() % self.players.len();
        let mut pawns = self.pawns.iter();
        for (i, player) in self.players.iter().enumerate() {
            let share = base + usize::from(i < extra);
            for role in pawns.by_ref().take(share) {
                self.owners.insert(*role, player.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn single_player_owns_everything() {
        let mut team = Team::from(Side::Detectives);
        team.add_player("ann").unwrap();
        assert_eq!(team.pawns_for("ann").len(), 5);
        assert!(Role::detectives().iter().all(|r| team.owner(*r).unwrap() == "ann"));
    }
    #[test]
    fn extra_pawns_go_to_earliest_joiners() {
        let mut team = Team::from(Side::Detectives);
        team.add_player("ann").unwrap();
        team.add_player("bob").unwrap();
        assert_eq!(team.pawns_for("ann"), vec![Role::Red, Role::Yellow, Role::Green]);
        assert_eq!(team.pawns_for("bob"), vec![Role::Blue, Role::Black]);
        team.add_player("cat").unwrap();
        assert_eq!(team.pawns_for("ann"), vec![Role::Red, Role::Yellow]);
        assert_eq!(team.pawns_for("bob"), vec![Role::Green, Role::Blue]);
        assert_eq!(team.pawns_for("cat"), vec![Role::Black]);
    }
    #[test]
    fn removal_rebuilds_assignment() {
        let mut team = Team::from(Side::Detectives);
        team.add_player("ann").unwrap();
        team.add_player("bob").unwrap();
        team.remove_player("ann").unwrap();
        assert_eq!(team.pawns_for("bob").len(), 5);
        assert!(team.pawns_for("ann").is_empty());
        team.remove_player("bob").unwrap();
        assert!(team.owner(Role::Red).is_none());
        assert!(team.remove_player("bob").is_err());
    }
    #[test]
    fn mr_x_team_holds_one_player() {
        let mut team = Team::from(Side::MrX);
        team.add_player("ann").unwrap();
        assert!(team.is_full());
        assert_eq!(team.add_player("bob"), Err(GameError::TeamFull(Side::MrX)));
        assert_eq!(team.pawns_for("ann"), vec![Role::X]);
    }
    #[test]
    fn parse_sides() {
        assert_eq!(Side::try_from("Mr. X").unwrap(), Side::MrX);
        assert_eq!(Side::try_from("detectives").unwrap(), Side::Detectives);
        assert!(Side::try_from("police").is_err());
    }
}
