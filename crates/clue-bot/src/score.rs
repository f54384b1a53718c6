use clue_core::logic::matrix::{CellState, KnowledgeMatrix};
use clue_core::model::guess::GuessTriple;
use clue_core::model::player::PlayerSlot;

/// Information-gain weights for resolving one unknown cell.
///
/// Envelope resolutions outrank ordinary player cells: pinning a card inside
/// or outside the solution is direct progress toward winning, while learning
/// an opponent's card only narrows the search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub base: f64,
    pub envelope_held: f64,
    pub envelope_absent: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            base: 1.0,
            envelope_held: 12.0,
            envelope_absent: 4.0,
        }
    }
}

impl ScoreWeights {
    fn cell_delta(&self, slot: PlayerSlot, revealed_held: bool) -> f64 {
        match (slot, revealed_held) {
            (PlayerSlot::Envelope, true) => self.envelope_held,
            (PlayerSlot::Envelope, false) => self.envelope_absent,
            _ => self.base,
        }
    }
}

/// Expected information gain of posing `triple`.
///
/// The accusation is modelled as a probe with two kinds of observable
/// outcome: some column reveals one of the three cards, or nobody responds.
/// One hypothesis is enumerated per still-unknown (card, column) cell, plus
/// the no-response hypothesis whenever no guessed card is already entailed
/// held somewhere. All enumerated outcomes are treated as equally likely; the
/// uniform distribution is an approximation, not a posterior. A triple with
/// nothing left to learn scores exactly zero.
pub fn score_guess(matrix: &KnowledgeMatrix, triple: &GuessTriple, weights: &ScoreWeights) -> f64 {
    let roster = matrix.roster();
    let cards = triple.cards();

    let mut deltas: Vec<f64> = Vec::new();
    for &card in &cards {
        for slot in roster.slots() {
            if matrix.cell(card, slot) == CellState::Unknown {
                deltas.push(weights.cell_delta(slot, true));
            }
        }
    }

    // The no-response outcome flips every open cell of all three cards to
    // not-held at once; it contradicts known facts as soon as any guessed
    // card has an entailed holder.
    let already_held = cards.iter().any(|&card| matrix.holder(card).is_some());
    if !already_held {
        let delta: f64 = cards
            .iter()
            .map(|&card| {
                roster
                    .slots()
                    .filter(|&slot| matrix.cell(card, slot) == CellState::Unknown)
                    .map(|slot| weights.cell_delta(slot, false))
                    .sum::<f64>()
            })
            .sum();
        deltas.push(delta);
    }

    if deltas.is_empty() {
        return 0.0;
    }
    deltas.iter().sum::<f64>() / deltas.len() as f64
}
