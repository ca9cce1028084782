use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::Player;

/// Outcome of the board as it stands. Derived from the cells after every
/// move, never set on its own.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    XWins,
    OWins,
    Draw,
}

impl GameStatus {
    pub fn won_by(player: Player) -> Self {
        match player {
            Player::X => GameStatus::XWins,
            Player::O => GameStatus::OWins,
        }
    }

    pub fn is_in_progress(&self) -> bool {
        matches!(self, GameStatus::InProgress)
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::XWins => Some(Player::X),
            GameStatus::OWins => Some(Player::O),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}

impl Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::XWins => write!(f, "X won"),
            GameStatus::OWins => write!(f, "O won"),
            GameStatus::Draw => write!(f, "draw"),
        }
    }
}
