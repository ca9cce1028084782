use log::debug;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::{
    generic::boards::{check_board, winning_line},
    CellIndex, Coordinates, Field, GameStatus, Move, Player,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMove {
    FieldOccupied,
    GameEnded,
    OutOfBounds,
    NotYourTurn,
}

impl Display for InvalidMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidMove::FieldOccupied => write!(f, "the field is already occupied"),
            InvalidMove::GameEnded => write!(f, "the game has already ended"),
            InvalidMove::OutOfBounds => write!(f, "the field is not on the board"),
            InvalidMove::NotYourTurn => write!(f, "it is not this player's turn"),
        }
    }
}

/// The nine cells of a game, stored as a 3x3 matrix and addressed by
/// row-major [`CellIndex`].
///
/// A board validates moves on its own, without a [`crate::GameState`]
/// around it: whose turn it is follows from the marks already placed, so a
/// board built from arbitrary moves still holds X-count minus O-count in
/// {0, 1}. `GameState` keeps its own turn flag and always agrees with
/// [`Board::get_next_player`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Board {
    pub data: Array2<Field>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub const SIZE: Coordinates = (3, 3);
    pub const CELLS: usize = Self::SIZE.0 * Self::SIZE.1;

    pub fn new() -> Self {
        Self {
            data: Array2::from_elem(Self::SIZE, Field::Vacant),
        }
    }

    /// Returns the row and column of a cell index, or None if the index is
    /// not on the board.
    /// Example: 5 -> (1, 2)
    pub fn coordinates_of(index: CellIndex) -> Option<Coordinates> {
        if index >= Self::CELLS {
            return None;
        }
        Some((index / Self::SIZE.1, index % Self::SIZE.1))
    }

    pub fn get(&self, index: CellIndex) -> Option<Field> {
        Self::coordinates_of(index).map(|coordinates| self.data[coordinates])
    }

    /// All fields in row-major order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.data.iter().copied()
    }

    pub fn count(&self, player: Player) -> usize {
        self.fields()
            .filter(|field| *field == Field::Occupied { player })
            .count()
    }

    /// X moves first and turns alternate, so whoever has fewer marks is next.
    pub fn get_next_player(&self) -> Player {
        if self.count(Player::X) > self.count(Player::O) {
            Player::O
        } else {
            Player::X
        }
    }

    pub fn get_state(&self) -> GameStatus {
        check_board(&self.data)
    }

    pub fn get_winning_line(&self) -> Option<[CellIndex; 3]> {
        winning_line(&self.data)
    }

    pub fn get_allowed_moves(&self) -> Vec<CellIndex> {
        if !self.get_state().is_in_progress() {
            return Vec::new();
        }
        let allowed_moves: Vec<CellIndex> = self
            .fields()
            .enumerate()
            .filter(|(_, field)| field.is_vacant())
            .map(|(index, _)| index)
            .collect();
        debug!("allowed moves: {}", allowed_moves.len());
        allowed_moves
    }

    pub fn insert_move(&mut self, new_move: Move) -> Result<(), InvalidMove> {
        self.validate_move(new_move)?;
        self.render_move(&new_move)
    }

    pub fn validate_move(&self, new_move: Move) -> Result<(), InvalidMove> {
        // GameEnded
        if !self.get_state().is_in_progress() {
            return Err(InvalidMove::GameEnded);
        }
        // OutOfBounds
        let field = self.get(new_move.index).ok_or(InvalidMove::OutOfBounds)?;
        // FieldOccupied
        if !field.is_vacant() {
            return Err(InvalidMove::FieldOccupied);
        }
        // NotYourTurn
        if self.get_next_player() != new_move.player {
            return Err(InvalidMove::NotYourTurn);
        }
        Ok(())
    }

    fn render_move(&mut self, m: &Move) -> Result<(), InvalidMove> {
        let coordinates = Self::coordinates_of(m.index).ok_or(InvalidMove::OutOfBounds)?;
        self.data[coordinates] = Field::Occupied { player: m.player };
        Ok(())
    }

    pub fn clear(&mut self) {
        self.data.fill(Field::Vacant);
    }
}
