use crate::theme::GridTheme;
use clue_core::logic::matrix::KnowledgeMatrix;
use clue_core::model::card::Card;
use std::fmt::Write;

/// Renders knowledge matrices as a fixed-width text grid.
///
/// Output-only: the renderer consumes published snapshots and never calls
/// back into the engine.
#[derive(Debug, Clone, Default)]
pub struct GridRenderer {
    theme: GridTheme,
}

impl GridRenderer {
    pub fn new(theme: GridTheme) -> Self {
        Self { theme }
    }

    pub fn render(&self, matrix: &KnowledgeMatrix) -> String {
        let roster = matrix.roster();
        let mut out = String::new();
        let _ = write!(out, "{:<13}", "Card");
        for slot in roster.slots() {
            let _ = write!(out, "{:>9}", slot.to_string());
        }
        out.push('\n');
        for card in Card::ALL {
            let _ = write!(out, "{:<13}", card.to_string());
            for slot in roster.slots() {
                let _ = write!(out, "{:>9}", self.theme.glyph(matrix.cell(card, slot)));
            }
            out.push('\n');
        }
        out
    }

    /// One-way publication to the terminal.
    pub fn publish(&self, matrix: &KnowledgeMatrix) {
        println!("{}", self.render(matrix));
    }
}

/// The flat +1/-1/0 encoding for external displays, as JSON rows. This is
/// the only place the numeric form leaves the engine boundary.
pub fn numeric_json(matrix: &KnowledgeMatrix) -> String {
    serde_json::to_string(&matrix.to_numeric_rows()).unwrap_or_else(|_| String::from("[]"))
}
