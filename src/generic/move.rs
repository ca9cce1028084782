use crate::Player;
use serde::{Deserialize, Serialize};

/// Row-major position of a cell, 0 is top left and 8 is bottom right.
pub type CellIndex = usize;
pub type Coordinates = (usize, usize);

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub index: CellIndex,
    pub player: Player,
}

impl Move {
    pub fn new(index: CellIndex, player: Player) -> Self {
        Self { index, player }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn serializes_index_and_player() {
        let json = serde_json::to_string(&Move::new(4, Player::O)).unwrap();
        assert_eq!(json, r#"{"index":4,"player":"O"}"#);
        let parsed: Move = serde_json::from_str(r#"{"index":8,"player":"X"}"#).unwrap();
        assert_eq!(parsed, Move::new(8, Player::X));
    }
}
