use log::warn;
use std::{fmt::Display, str::FromStr};

use crate::{GameState, GameStatus, Player};

/// Symbols used to draw the two players' marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Classic,
    Seascape,
    Forest,
    Desert,
    Space,
    Sunset,
    Ocean,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeParseError {
    UnknownTheme(String),
}

impl Display for ThemeParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeParseError::UnknownTheme(name) => write!(f, "unknown theme: {}", name),
        }
    }
}

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "classic" => Ok(Theme::Classic),
            "seascape" => Ok(Theme::Seascape),
            "forest" => Ok(Theme::Forest),
            "desert" => Ok(Theme::Desert),
            "space" => Ok(Theme::Space),
            "sunset" => Ok(Theme::Sunset),
            "ocean" => Ok(Theme::Ocean),
            _ => Err(ThemeParseError::UnknownTheme(s.to_string())),
        }
    }
}

impl Theme {
    pub const ENV_VAR: &'static str = "TICTACTOE_THEME";

    // loads the theme from the environment or uses the default if not set
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(Self::ENV_VAR).ok())
    }

    fn from_env_value(value: Option<String>) -> Self {
        match value {
            Some(name) => Self::from_str(&name).unwrap_or_else(|e| {
                warn!("{}, falling back to {:?}", e, Self::default());
                Self::default()
            }),
            None => Self::default(),
        }
    }

    pub fn symbol(&self, player: Player) -> &'static str {
        let (x, o) = match self {
            Theme::Classic | Theme::Space => ("X", "O"),
            Theme::Seascape => ("★", "✿"),
            Theme::Forest => ("🐱", "🐶"),
            Theme::Desert => ("⚽", "🏀"),
            Theme::Sunset => ("♥", "♠"),
            Theme::Ocean => ("1", "2"),
        };
        match player {
            Player::X => x,
            Player::O => o,
        }
    }

    /// Status line for the game, spelled with this theme's symbols.
    pub fn status_text(&self, game: &GameState) -> String {
        match game.status() {
            GameStatus::InProgress => format!("{}'s turn", self.symbol(game.next_player())),
            GameStatus::XWins => format!("{} wins!", self.symbol(Player::X)),
            GameStatus::OWins => format!("{} wins!", self.symbol(Player::O)),
            GameStatus::Draw => "Draw".to_string(),
        }
    }
}
