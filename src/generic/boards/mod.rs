mod board;
mod line_checker;

pub use board::{Board, InvalidMove};
pub use line_checker::{check_board, winning_line, WINNING_LINES};
