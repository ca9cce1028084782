use log::debug;
use std::fmt::Debug;

use crate::{Board, CellIndex, Field, GameState};

pub mod console;
mod theme;

pub use console::ConsoleView;
pub use theme::{Theme, ThemeParseError};

/// Anything that can show a game: a terminal, a window, a web page.
///
/// The controller calls `render_cell` for every cell that changed and then
/// `render_status` once, after every change of the game.
pub trait View {
    type ErrorKind: Debug;

    fn render_cell(&mut self, index: CellIndex, field: Field) -> Result<(), Self::ErrorKind>;

    fn render_status(&mut self, text: &str) -> Result<(), Self::ErrorKind>;

    fn theme(&self) -> Theme {
        Theme::default()
    }
}

/// Connects the taps coming from a [`View`] to a [`GameState`] and keeps the
/// view up to date.
pub struct GameController<V: View> {
    game: GameState,
    view: V,
}

impl<V: View> GameController<V> {
    /// Creates a fresh game and draws it.
    pub fn new(view: V) -> Result<Self, V::ErrorKind> {
        let mut controller = Self {
            game: GameState::new(),
            view,
        };
        controller.render_all()?;
        Ok(controller)
    }

    /// Plays the tapped cell for the current player. Ignored taps render
    /// nothing. Returns whether the game changed.
    pub fn on_cell_tapped(&mut self, index: CellIndex) -> Result<bool, V::ErrorKind> {
        if !self.game.play_move(index) {
            return Ok(false);
        }
        if let Some(field) = self.game.cell(index) {
            self.view.render_cell(index, field)?;
        }
        self.render_status()?;
        Ok(true)
    }

    pub fn on_reset_tapped(&mut self) -> Result<(), V::ErrorKind> {
        debug!("resetting game");
        self.game.reset();
        self.render_all()
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    fn render_all(&mut self) -> Result<(), V::ErrorKind> {
        for index in 0..Board::CELLS {
            let field = self.game.cell(index).unwrap_or_default();
            self.view.render_cell(index, field)?;
        }
        self.render_status()
    }

    fn render_status(&mut self) -> Result<(), V::ErrorKind> {
        let text = self.view.theme().status_text(&self.game);
        self.view.render_status(&text)
    }
}
