use serde::{Deserialize, Serialize};

/// A player's position in turn order. The first seat always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    /// Get the other seat
    pub fn other(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    /// Index into a two-element player array
    pub fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }

    /// Get seat name for display
    pub fn name(self) -> &'static str {
        match self {
            Seat::First => "Player 1",
            Seat::Second => "Player 2",
        }
    }
}

/// Who controls a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    #[default]
    Human,
    Computer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    color: String,
    kind: PlayerKind,
}

impl Player {
    pub fn new(color: impl Into<String>, kind: PlayerKind) -> Self {
        Player {
            color: color.into(),
            kind,
        }
    }

    pub fn human(color: impl Into<String>) -> Self {
        Self::new(color, PlayerKind::Human)
    }

    pub fn computer(color: impl Into<String>) -> Self {
        Self::new(color, PlayerKind::Computer)
    }

    /// Display color, as given at game start
    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    pub fn is_computer(&self) -> bool {
        self.kind == PlayerKind::Computer
    }
}
