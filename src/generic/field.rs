use serde::{Deserialize, Serialize};

use crate::Player;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Vacant,
    Occupied { player: Player },
}

impl Field {
    pub fn player(&self) -> Option<Player> {
        match self {
            Field::Vacant => None,
            Field::Occupied { player } => Some(*player),
        }
    }

    pub fn is_vacant(&self) -> bool {
        matches!(self, Field::Vacant)
    }
}
