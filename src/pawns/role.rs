use super::*;
use serde::Deserialize;
use serde::Serialize;

/// Identity of a pawn.
///
/// Declaration order is the move order within a turn: Mr. X first, then
/// the detectives from Red to Black, wrapping back to Mr. X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    X,
    Red,
    Yellow,
    Green,
    Blue,
    Black,
}

impl Role {
    pub const fn all() -> [Self; 6] {
        [
            Self::X,
            Self::Red,
            Self::Yellow,
            Self::Green,
            Self::Blue,
            Self::Black,
        ]
    }
    pub const fn detectives() -> [Self; 5] {
        [
            Self::Red,
            Self::Yellow,
            Self::Green,
            Self::Blue,
            Self::Black,
        ]
    }
    /// Position in [`Role::all`].
    pub const fn index(self) -> usize {
        self as usize
    }
    /// The pawn that moves after this one.
    pub fn next(self) -> Self {
        Self::all()[(self.index() + 1) % Self::all().len()]
    }
    pub fn side(self) -> Side {
        match self {
            Self::X => Side::MrX,
            _ => Side::Detectives,
        }
    }
    pub fn is_detective(self) -> bool {
        self.side() == Side::Detectives
    }
}

impl TryFrom<&str> for Role {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "x" | "mr. x" | "mrx" => Ok(Self::X),
            "red" => Ok(Self::Red),
            "yellow" => Ok(Self::Yellow),
            "green" => Ok(Self::Green),
            "blue" => Ok(Self::Blue),
            "black" => Ok(Self::Black),
            _ => Err(anyhow::anyhow!("no such pawn {:?}", s)),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::X => write!(f, "X"),
            Self::Red => write!(f, "Red"),
            Self::Yellow => write!(f, "Yellow"),
            Self::Green => write!(f, "Green"),
            Self::Blue => write!(f, "Blue"),
            Self::Black => write!(f, "Black"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn move_order_cycles() {
        assert_eq!(Role::X.next(), Role::Red);
        assert_eq!(Role::Red.next(), Role::Yellow);
        assert_eq!(Role::Blue.next(), Role::Black);
        assert_eq!(Role::Black.next(), Role::X);
        let mut role = Role::X;
        for _ in 0..6 {
            role = role.next();
        }
        assert_eq!(role, Role::X);
    }
    #[test]
    fn sides() {
        assert_eq!(Role::X.side(), Side::MrX);
        assert!(Role::detectives().iter().all(|r| r.is_detective()));
    }
    #[test]
    fn parse_roles() {
        assert_eq!(Role::try_from("RED").unwrap(), Role::Red);
        assert_eq!(Role::try_from("x").unwrap(), Role::X);
        assert!(Role::try_from("purple").is_err());
    }
}
