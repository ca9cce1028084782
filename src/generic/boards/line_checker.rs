use ndarray::Array2;

use crate::{Board, CellIndex, Field, GameStatus, Player};

/// Every line that ends the game when one player owns all three cells.
/// The order decides which line is reported when more than one is complete.
pub const WINNING_LINES: [[CellIndex; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct WinnerRegisterer {
    winner: Option<(Player, [CellIndex; 3])>,
}
impl WinnerRegisterer {
    pub fn register(&mut self, line: [CellIndex; 3], player: Option<Player>) {
        if let (None, Some(player)) = (self.winner, player) {
            self.winner = Some((player, line));
        }
    }
    pub fn get_winner(&self) -> Option<(Player, [CellIndex; 3])> {
        self.winner
    }
}

fn register_lines(matrix: &Array2<Field>) -> WinnerRegisterer {
    let mut winner_registerer = WinnerRegisterer::default();
    for line in WINNING_LINES {
        winner_registerer.register(line, get_winner_in_line(matrix, line));
    }
    winner_registerer
}

/// Checks if a 3x3 matrix of fields contains a winner
///
/// if one player has all fields of a winning line, they win. The first line
/// in [`WINNING_LINES`] that is complete decides the winner. A full matrix
/// without a complete line is a draw.
///
/// Usage:
/// ```
/// use ndarray::array;
/// use tictactoe_tap::{check_board, Field, GameStatus, Player};
///
/// let x = Field::Occupied { player: Player::X };
/// let o = Field::Occupied { player: Player::O };
/// let v = Field::Vacant;
///
/// // X X X <-- X wins
/// // O O .
/// // . . .
/// let matrix = array![[x, x, x], [o, o, v], [v, v, v]];
///
/// assert_eq!(check_board(&matrix), GameStatus::XWins);
/// ```
pub fn check_board(matrix: &Array2<Field>) -> GameStatus {
    if let Some((winner, _)) = register_lines(matrix).get_winner() {
        GameStatus::won_by(winner)
    } else if matrix.iter().all(|field| !field.is_vacant()) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

/// Returns the first complete line, if there is one.
pub fn winning_line(matrix: &Array2<Field>) -> Option<[CellIndex; 3]> {
    register_lines(matrix).get_winner().map(|(_, line)| line)
}

fn get_winner_in_line(matrix: &Array2<Field>, line: [CellIndex; 3]) -> Option<Player> {
    let mut fields = line
        .iter()
        .filter_map(|index| Board::coordinates_of(*index))
        .map(|coordinates| matrix.get(coordinates).copied().unwrap_or_default());

    let potential_winner = fields.next()?.player()?;
    if fields.all(|field| field == Field::Occupied { player: potential_winner }) {
        Some(potential_winner)
    } else {
        None
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use ndarray::array;

    const X: Field = Field::Occupied { player: Player::X };
    const O: Field = Field::Occupied { player: Player::O };
    const V: Field = Field::Vacant;

    #[test]
    fn line_checker() {
        // O X X
        // O O O <-- O wins
        // X O X
        let matrix = array![[O, X, X], [O, O, O], [X, O, X]];
        assert_eq!(check_board(&matrix), GameStatus::OWins);
        assert_eq!(winning_line(&matrix), Some([3, 4, 5]));
    }

    #[test]
    fn every_line_wins() {
        for line in WINNING_LINES {
            let mut matrix = Array2::from_elem(Board::SIZE, V);
            for index in line {
                matrix[Board::coordinates_of(index).unwrap()] = O;
            }
            assert_eq!(
                check_board(&matrix),
                GameStatus::OWins,
                "line {:?} was not detected",
                line
            );
            assert_eq!(winning_line(&matrix), Some(line));
        }
    }

    #[test]
    fn first_line_in_order_is_reported() {
        // X X X
        // X O O
        // X O O
        let matrix = array![[X, X, X], [X, O, O], [X, O, O]];
        assert_eq!(check_board(&matrix), GameStatus::XWins);
        assert_eq!(winning_line(&matrix), Some([0, 1, 2]));
    }

    #[test]
    fn full_board_without_line_is_draw() {
        // X O X
        // X O O
        // O X X
        let matrix = array![[X, O, X], [X, O, O], [O, X, X]];
        assert_eq!(check_board(&matrix), GameStatus::Draw);
        assert_eq!(winning_line(&matrix), None);
    }

    #[test]
    fn vacant_cells_never_win() {
        let matrix = Array2::from_elem(Board::SIZE, V);
        assert_eq!(check_board(&matrix), GameStatus::InProgress);

        // X X .
        // O O .
        // . . .
        let matrix = array![[X, X, V], [O, O, V], [V, V, V]];
        assert_eq!(check_board(&matrix), GameStatus::InProgress);
        assert_eq!(winning_line(&matrix), None);
    }
}
