use crate::logic::solver::{self, Lit, VarId};
use crate::model::card::Card;
use crate::model::player::{PlayerSlot, Roster};

/// Append-only store of clauses over "player holds card" propositions.
///
/// Propositions are laid out densely: one variable per (column, card) pair,
/// created once at setup and never destroyed. Clauses are only ever added;
/// contradictory input leaves the store permanently unsatisfiable.
#[derive(Debug, Clone)]
pub struct ConstraintStore {
    roster: Roster,
    clauses: Vec<Vec<Lit>>,
}

impl ConstraintStore {
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            clauses: Vec::new(),
        }
    }

    pub fn roster(&self) -> Roster {
        self.roster
    }

    pub fn var_count(&self) -> usize {
        self.roster.column_count() * Card::COUNT
    }

    /// The positive literal for "`slot` holds `card`".
    pub fn holds(&self, slot: PlayerSlot, card: Card) -> Lit {
        Lit::pos((slot.column() * Card::COUNT + card.index()) as VarId)
    }

    /// Appends a disjunction of signed propositions. Never fails, never
    /// retracts.
    pub fn add_clause(&mut self, clause: Vec<Lit>) {
        debug_assert!(!clause.is_empty(), "empty clause");
        self.clauses.push(clause);
    }

    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// Whether the accumulated clauses plus `assumptions` admit a model.
    ///
    /// Side-effect-free: each call is an isolated search, so the paired
    /// assume-true/assume-false queries issued by classification can never
    /// interfere with each other or with later calls. No timeout: the
    /// variable count is small enough that search always returns promptly.
    pub fn is_satisfiable(&self, assumptions: &[Lit]) -> bool {
        solver::solve(self.var_count(), &self.clauses, assumptions)
    }

    /// Whether the store forces `lit`: satisfiable assuming it, and
    /// unsatisfiable assuming its negation.
    pub fn is_entailed(&self, lit: Lit) -> bool {
        self.is_satisfiable(&[lit]) && !self.is_satisfiable(&[lit.negated()])
    }
}

#[cfg(test)]
mod tests {
    use super::ConstraintStore;
    use crate::model::card::Card;
    use crate::model::player::{PlayerSlot, Roster};

    fn store() -> ConstraintStore {
        ConstraintStore::new(Roster::new(3).expect("valid roster"))
    }

    #[test]
    fn propositions_get_distinct_variables() {
        let store = store();
        let mut vars = Vec::new();
        for slot in store.roster().slots() {
            for card in Card::ALL {
                vars.push(store.holds(slot, card).var());
            }
        }
        let count = vars.len();
        vars.sort_unstable();
        vars.dedup();
        assert_eq!(vars.len(), count);
        assert_eq!(count, store.var_count());
    }

    #[test]
    fn queries_leave_the_store_untouched() {
        let mut store = store();
        let lit = store.holds(PlayerSlot::Common, Card::Wrench);
        store.add_clause(vec![lit]);
        let clauses_before = store.clause_count();

        assert!(store.is_satisfiable(&[lit]));
        assert!(!store.is_satisfiable(&[lit.negated()]));
        assert!(store.is_satisfiable(&[lit]));
        assert_eq!(store.clause_count(), clauses_before);
    }

    #[test]
    fn entailment_needs_both_queries_to_agree() {
        let mut store = store();
        let wrench = store.holds(PlayerSlot::Common, Card::Wrench);
        let rope = store.holds(PlayerSlot::Common, Card::Rope);
        store.add_clause(vec![wrench]);

        assert!(store.is_entailed(wrench));
        assert!(!store.is_entailed(rope));
        assert!(!store.is_entailed(rope.negated()));
    }
}
