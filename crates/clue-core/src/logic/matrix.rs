use crate::logic::classify::{Classification, TruthValue};
use crate::model::card::Card;
use crate::model::player::{PlayerSlot, Roster};
use serde::{Deserialize, Serialize};

/// Tri-state knowledge about one (card, player) cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Held,
    NotHeld,
    Unknown,
}

impl CellState {
    /// Flat encoding for the rendering boundary: +1 held, -1 not held,
    /// 0 unknown. The engine itself never consumes this form.
    pub const fn to_numeric(self) -> i8 {
        match self {
            CellState::Held => 1,
            CellState::NotHeld => -1,
            CellState::Unknown => 0,
        }
    }
}

/// Dense snapshot of classifier output: rows = cards, columns = players.
///
/// Rebuilt from scratch each turn and published as an immutable value;
/// consumers must never mutate one or feed it back into the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeMatrix {
    roster: Roster,
    cells: Vec<CellState>,
}

impl KnowledgeMatrix {
    /// The all-unknown matrix, in effect before the first classification.
    pub fn empty(roster: Roster) -> Self {
        Self {
            roster,
            cells: vec![CellState::Unknown; roster.column_count() * Card::COUNT],
        }
    }

    /// Pure translation of classifier output. Only meaningful for a
    /// consistent classification.
    pub fn from_classification(roster: Roster, classification: &Classification) -> Self {
        debug_assert!(classification.is_consistent(), "inconsistent classification");
        let mut matrix = Self::empty(roster);
        for slot in roster.slots() {
            for card in Card::ALL {
                let state = match classification.truth(slot, card) {
                    TruthValue::True => CellState::Held,
                    TruthValue::False => CellState::NotHeld,
                    TruthValue::Unknown | TruthValue::Inconsistent => CellState::Unknown,
                };
                matrix.cells[card.index() * roster.column_count() + slot.column()] = state;
            }
        }
        matrix
    }

    pub fn roster(&self) -> Roster {
        self.roster
    }

    pub fn column_count(&self) -> usize {
        self.roster.column_count()
    }

    pub fn cell(&self, card: Card, slot: PlayerSlot) -> CellState {
        self.cells[card.index() * self.roster.column_count() + slot.column()]
    }

    /// The column entailed to hold `card`, if any.
    pub fn holder(&self, card: Card) -> Option<PlayerSlot> {
        self.roster
            .slots()
            .find(|&slot| self.cell(card, slot) == CellState::Held)
    }

    /// Numeric rows for the display boundary.
    pub fn to_numeric_rows(&self) -> Vec<Vec<i8>> {
        Card::ALL
            .iter()
            .map(|&card| {
                self.roster
                    .slots()
                    .map(|slot| self.cell(card, slot).to_numeric())
                    .collect()
            })
            .collect()
    }
}
