use log::{debug, info};

use crate::{Board, CellIndex, Field, GameStatus, InvalidMove, Move, Player};

/// A single game of tic-tac-toe: the board, whose turn it is and how the game
/// stands. This is the whole state behind the playing screen and has no
/// knowledge of how it is displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    turn: Player,
    status: GameStatus,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Player::X,
            status: GameStatus::InProgress,
        }
    }

    /// Places the current player's mark on the given cell.
    ///
    /// Taps on occupied cells, on cells outside the board, or after the game
    /// has ended are ignored. Returns whether the board changed.
    pub fn play_move(&mut self, index: CellIndex) -> bool {
        match self.try_play_move(index) {
            Ok(_) => true,
            Err(reason) => {
                debug!("ignoring move on cell {}: {}", index, reason);
                false
            }
        }
    }

    /// Same as [`GameState::play_move`], but reports why a move was rejected.
    pub fn try_play_move(&mut self, index: CellIndex) -> Result<Move, InvalidMove> {
        if !self.status.is_in_progress() {
            return Err(InvalidMove::GameEnded);
        }
        let new_move = Move::new(index, self.turn);
        self.board.insert_move(new_move)?;

        self.status = self.board.get_state();
        if self.status.is_in_progress() {
            self.turn = self.turn.other();
        } else {
            info!("game over: {}", self.status);
        }
        Ok(new_move)
    }

    pub fn reset(&mut self) {
        self.board.clear();
        self.turn = Player::X;
        self.status = GameStatus::InProgress;
    }

    /// "X's turn" / "O's turn" while the game runs, then "X wins!", "O wins!"
    /// or "Draw".
    pub fn status_text(&self) -> String {
        match self.status {
            GameStatus::InProgress => format!("{}'s turn", self.turn),
            GameStatus::XWins => "X wins!".to_string(),
            GameStatus::OWins => "O wins!".to_string(),
            GameStatus::Draw => "Draw".to_string(),
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The player whose mark the next move places. After the game ended
    /// this is the player who made the last move.
    pub fn next_player(&self) -> Player {
        self.turn
    }

    pub fn cell(&self, index: CellIndex) -> Option<Field> {
        self.board.get(index)
    }

    pub fn cells(&self) -> impl Iterator<Item = Field> + '_ {
        self.board.fields()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn allowed_moves(&self) -> Vec<CellIndex> {
        if self.status.is_in_progress() {
            self.board.get_allowed_moves()
        } else {
            Vec::new()
        }
    }

    pub fn winning_line(&self) -> Option<[CellIndex; 3]> {
        self.status
            .winner()
            .and_then(|_| self.board.get_winning_line())
    }
}
