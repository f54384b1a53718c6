use crate::logic::store::ConstraintStore;
use crate::model::card::Card;
use crate::model::player::PlayerSlot;

/// Truth status of a single proposition under the accumulated facts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TruthValue {
    True,
    False,
    Unknown,
    Inconsistent,
}

/// Entailment results for the full (player, card) domain.
///
/// A single `Inconsistent` proposition means the store is jointly
/// unsatisfiable; `is_consistent` reports that as one flag so callers can
/// suppress publishing a matrix for the turn.
#[derive(Debug, Clone)]
pub struct Classification {
    values: Vec<TruthValue>,
    consistent: bool,
}

impl Classification {
    pub fn truth(&self, slot: PlayerSlot, card: Card) -> TruthValue {
        self.values[slot.column() * Card::COUNT + card.index()]
    }

    pub fn is_consistent(&self) -> bool {
        self.consistent
    }
}

/// Issues two isolated satisfiability queries per proposition, one assuming
/// it true and one assuming it false, and reads the entailed value off the
/// pair.
pub fn classify(store: &ConstraintStore) -> Classification {
    let mut values = vec![TruthValue::Unknown; store.var_count()];
    let mut consistent = true;
    for slot in store.roster().slots() {
        for card in Card::ALL {
            let lit = store.holds(slot, card);
            let sat_true = store.is_satisfiable(&[lit]);
            let sat_false = store.is_satisfiable(&[lit.negated()]);
            values[lit.var() as usize] = match (sat_true, sat_false) {
                (true, false) => TruthValue::True,
                (false, true) => TruthValue::False,
                (true, true) => TruthValue::Unknown,
                (false, false) => {
                    consistent = false;
                    TruthValue::Inconsistent
                }
            };
        }
    }
    Classification { values, consistent }
}
