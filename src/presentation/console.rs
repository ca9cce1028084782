use itertools::Itertools;
use std::io::Write;

use crate::{Board, CellIndex, Field, Theme, View};

/// Draws the board as text. Cells are buffered and the whole grid is written
/// together with the status line, so every change produces one frame.
pub struct ConsoleView<W: Write> {
    writer: W,
    theme: Theme,
    cells: [Field; Board::CELLS],
}

impl<W: Write> ConsoleView<W> {
    pub fn new(writer: W, theme: Theme) -> Self {
        Self {
            writer,
            theme,
            cells: [Field::Vacant; Board::CELLS],
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    // vacant cells show their index so the player knows what to type
    fn symbol(&self, index: CellIndex) -> String {
        match self.cells[index] {
            Field::Vacant => index.to_string(),
            Field::Occupied { player } => self.theme.symbol(player).to_string(),
        }
    }

    fn frame(&self, status: &str) -> String {
        let rows = (0..Board::CELLS)
            .chunks(Board::SIZE.1)
            .into_iter()
            .map(|row| format!(" {} ", row.map(|index| self.symbol(index)).join(" | ")))
            .join("\n---+---+---\n");
        format!("{}\n\n{}\n", rows, status)
    }
}

impl<W: Write> View for ConsoleView<W> {
    type ErrorKind = std::io::Error;

    fn render_cell(&mut self, index: CellIndex, field: Field) -> Result<(), Self::ErrorKind> {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = field;
        }
        Ok(())
    }

    fn render_status(&mut self, text: &str) -> Result<(), Self::ErrorKind> {
        let frame = self.frame(text);
        writeln!(self.writer, "{}", frame)?;
        self.writer.flush()
    }

    fn theme(&self) -> Theme {
        self.theme
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::GameController;

    fn output(view: ConsoleView<Vec<u8>>) -> String {
        String::from_utf8(view.into_inner()).unwrap()
    }

    #[test]
    fn draws_empty_board() {
        let controller = GameController::new(ConsoleView::new(Vec::new(), Theme::Classic)).unwrap();
        let expected = " 0 | 1 | 2 \n---+---+---\n 3 | 4 | 5 \n---+---+---\n 6 | 7 | 8 \n\nX's turn\n\n";
        assert_eq!(output(controller.into_view()), expected);
    }

    #[test]
    fn draws_marks_with_theme() {
        let mut controller =
            GameController::new(ConsoleView::new(Vec::new(), Theme::Seascape)).unwrap();
        controller.on_cell_tapped(0).unwrap();
        controller.on_cell_tapped(4).unwrap();

        let expected_frame = " ★ | 1 | 2 \n---+---+---\n 3 | ✿ | 5 \n---+---+---\n 6 | 7 | 8 \n\n★'s turn\n\n";
        assert!(output(controller.into_view()).ends_with(expected_frame));
    }

    #[test]
    fn one_frame_per_change() {
        let mut controller =
            GameController::new(ConsoleView::new(Vec::new(), Theme::Classic)).unwrap();
        controller.on_cell_tapped(0).unwrap();
        controller.on_cell_tapped(0).unwrap(); // ignored
        controller.on_reset_tapped().unwrap();

        let out = output(controller.into_view());
        assert_eq!(out.matches("---+---+---\n 6").count(), 3);
        assert!(out.ends_with("X's turn\n\n"));
    }
}
