use crate::logic::ingest;
use crate::logic::store::ConstraintStore;
use crate::model::card::Card;
use crate::model::player::{PlayerSlot, Roster, Seat};

/// Closes out a seat once its full hand is pinned down.
///
/// Every seat carries a one-way finalized latch: once `hand_size` cards are
/// entailed held, the remaining cards are asserted absent and the seat is
/// never reprocessed. The latch cannot go stale because a fully known hand
/// cannot change.
#[derive(Debug, Clone)]
pub struct HandSizePropagator {
    hand_size: usize,
    finalized: Vec<bool>,
}

impl HandSizePropagator {
    pub fn new(roster: Roster, hand_size: usize) -> Self {
        Self {
            hand_size,
            finalized: vec![false; roster.seat_count() as usize],
        }
    }

    pub fn is_finalized(&self, seat: Seat) -> bool {
        self.finalized[seat.index()]
    }

    /// One pass over every still-open seat. Runs each turn before
    /// classification; idempotent through the latch.
    pub fn run(&mut self, store: &mut ConstraintStore) {
        let roster = store.roster();
        for seat in roster.seats() {
            if self.finalized[seat.index()] {
                continue;
            }
            let slot = PlayerSlot::Seat(seat);
            let held: Vec<Card> = Card::ALL
                .iter()
                .copied()
                .filter(|&card| store.is_entailed(store.holds(slot, card)))
                .collect();
            if held.len() >= self.hand_size {
                for card in Card::ALL {
                    if !held.contains(&card) {
                        ingest::assert_not_has(store, slot, card);
                    }
                }
                self.finalized[seat.index()] = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::HandSizePropagator;
    use crate::logic::store::ConstraintStore;
    use crate::model::card::Card;
    use crate::model::player::{PlayerSlot, Roster};

    #[test]
    fn full_hand_closes_the_column() {
        let roster = Roster::new(2).expect("valid roster");
        let mut store = ConstraintStore::new(roster);
        let seat = roster.seat(0).expect("seat");
        let slot = PlayerSlot::Seat(seat);
        store.add_clause(vec![store.holds(slot, Card::Green)]);

        let mut propagator = HandSizePropagator::new(roster, 1);
        propagator.run(&mut store);

        assert!(propagator.is_finalized(seat));
        assert!(store.is_entailed(store.holds(slot, Card::Rope).negated()));
        assert!(store.is_entailed(store.holds(slot, Card::Green)));
    }

    #[test]
    fn open_hand_is_left_alone() {
        let roster = Roster::new(2).expect("valid roster");
        let mut store = ConstraintStore::new(roster);
        let seat = roster.seat(0).expect("seat");
        store.add_clause(vec![store.holds(PlayerSlot::Seat(seat), Card::Green)]);

        let mut propagator = HandSizePropagator::new(roster, 2);
        propagator.run(&mut store);

        assert!(!propagator.is_finalized(seat));
        assert!(!store.is_entailed(store.holds(PlayerSlot::Seat(seat), Card::Rope).negated()));
    }

    #[test]
    fn second_pass_adds_nothing() {
        let roster = Roster::new(2).expect("valid roster");
        let mut store = ConstraintStore::new(roster);
        let seat = roster.seat(0).expect("seat");
        store.add_clause(vec![store.holds(PlayerSlot::Seat(seat), Card::Green)]);

        let mut propagator = HandSizePropagator::new(roster, 1);
        propagator.run(&mut store);
        let clauses_after_first = store.clause_count();
        propagator.run(&mut store);
        assert_eq!(store.clause_count(), clauses_after_first);
    }
}
