use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CELL_COUNT: usize = 9;
pub const CENTER: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    A,
    B,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Player::A => 'X',
            Player::B => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    MarkA,
    MarkB,
}

impl Cell {
    pub fn of(player: Player) -> Cell {
        match player {
            Player::A => Cell::MarkA,
            Player::B => Cell::MarkB,
        }
    }

    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::MarkA => Some(Player::A),
            Cell::MarkB => Some(Player::B),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mode {
    #[serde(rename = "single")]
    SinglePlayer,
    #[default]
    #[serde(rename = "multi")]
    MultiPlayer,
}

impl Mode {
    /// In single player B belongs to the scripted opponent.
    pub fn is_opponent(self, player: Player) -> bool {
        self == Mode::SinglePlayer && player == Player::B
    }

    pub fn player_label(self, player: Player) -> &'static str {
        match (self, player) {
            (Mode::SinglePlayer, Player::A) => "You",
            (Mode::SinglePlayer, Player::B) => "AI",
            (Mode::MultiPlayer, Player::A) => "P1",
            (Mode::MultiPlayer, Player::B) => "P2",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::SinglePlayer => write!(f, "single player"),
            Mode::MultiPlayer => write!(f, "multi player"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    InProgress,
    Win { player: Player, line: [usize; 3] },
    Draw,
}

impl Outcome {
    pub fn is_in_progress(&self) -> bool {
        matches!(self, Outcome::InProgress)
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { player, .. } => Some(*player),
            _ => None,
        }
    }

    pub fn winning_line(&self) -> Option<[usize; 3]> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("cell {0} is outside the board")]
    OutOfRange(usize),
    #[error("cell {0} is already marked")]
    Occupied(usize),
    #[error("it is not {0}'s turn")]
    NotYourTurn(Player),
    #[error("game is already over")]
    GameOver,
}
