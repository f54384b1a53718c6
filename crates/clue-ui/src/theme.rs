use clue_core::logic::matrix::CellState;
use serde::{Deserialize, Serialize};

/// Glyphs used to render cell knowledge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridTheme {
    pub held: char,
    pub not_held: char,
    pub unknown: char,
}

impl GridTheme {
    /// Loads a theme from its JSON form; `None` on malformed input.
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    pub fn glyph(&self, state: CellState) -> char {
        match state {
            CellState::Held => self.held,
            CellState::NotHeld => self.not_held,
            CellState::Unknown => self.unknown,
        }
    }
}

impl Default for GridTheme {
    fn default() -> Self {
        Self {
            held: '+',
            not_held: '-',
            unknown: '.',
        }
    }
}
