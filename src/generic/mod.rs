mod boards;
mod field;
mod game_state;
mod r#move;
mod player;
mod status;

pub use boards::{check_board, winning_line, Board, InvalidMove, WINNING_LINES};
pub use field::Field;
pub use game_state::GameState;
pub use player::Player;
pub use r#move::{CellIndex, Coordinates, Move};
pub use status::GameStatus;
