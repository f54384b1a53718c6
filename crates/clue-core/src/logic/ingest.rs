//! Lowers game facts into clauses on the constraint store.

use crate::logic::solver::Lit;
use crate::logic::store::ConstraintStore;
use crate::model::card::Card;
use crate::model::guess::GuessEvent;
use crate::model::player::{PlayerSlot, Seat};

/// Structural invariants, asserted once at setup and never retracted: every
/// card sits with exactly one column, and the envelope holds exactly one card
/// of each category.
pub(crate) fn seed_structural_rules(store: &mut ConstraintStore) {
    let roster = store.roster();
    for card in Card::ALL {
        let lits: Vec<Lit> = roster.slots().map(|slot| store.holds(slot, card)).collect();
        exactly_one(store, &lits);
    }
    for category in [&Card::PEOPLE[..], &Card::WEAPONS[..], &Card::LOCATIONS[..]] {
        let lits: Vec<Lit> = category
            .iter()
            .map(|&card| store.holds(PlayerSlot::Envelope, card))
            .collect();
        exactly_one(store, &lits);
    }
}

/// The common pile is fixed and fully visible at setup, so its column is
/// closed-world: every card not in the pile is asserted absent. No other
/// column ever gets this treatment.
pub(crate) fn seed_common_pile(store: &mut ConstraintStore, pile: &[Card]) {
    for card in Card::ALL {
        if pile.contains(&card) {
            assert_has(store, PlayerSlot::Common, card);
        } else {
            assert_not_has(store, PlayerSlot::Common, card);
        }
    }
}

/// The observer's own cards. Only positive facts: the hand-size propagator
/// closes out the rest of the column.
pub(crate) fn seed_local_hand(store: &mut ConstraintStore, hand: &[Card]) {
    for &card in hand {
        assert_has(store, PlayerSlot::Seat(Seat::LOCAL), card);
    }
}

pub(crate) fn assert_has(store: &mut ConstraintStore, slot: PlayerSlot, card: Card) {
    let lit = store.holds(slot, card);
    store.add_clause(vec![lit]);
}

pub(crate) fn assert_not_has(store: &mut ConstraintStore, slot: PlayerSlot, card: Card) {
    let lit = store.holds(slot, card).negated();
    store.add_clause(vec![lit]);
}

/// Everything a guess/response turn reveals:
/// - nobody responded: every other seat lacks all three cards;
/// - seats skipped between asker and responder lack all three cards;
/// - a responder with an unseen card holds at least one of the three;
/// - a responder whose card was shown to the observer holds that card.
pub(crate) fn apply_guess(store: &mut ConstraintStore, event: &GuessEvent) {
    let roster = store.roster();
    let cards = event.triple().cards();

    let Some(response) = event.response() else {
        for seat in roster.seats() {
            if seat != event.asker() {
                for &card in &cards {
                    assert_not_has(store, PlayerSlot::Seat(seat), card);
                }
            }
        }
        return;
    };

    for seat in roster.seats_between(event.asker(), response.responder()) {
        for &card in &cards {
            assert_not_has(store, PlayerSlot::Seat(seat), card);
        }
    }

    let responder = PlayerSlot::Seat(response.responder());
    match response.shown() {
        Some(card) => assert_has(store, responder, card),
        None => {
            let clause = cards.iter().map(|&card| store.holds(responder, card)).collect();
            store.add_clause(clause);
        }
    }
}

/// At-least-one plus pairwise at-most-one.
fn exactly_one(store: &mut ConstraintStore, lits: &[Lit]) {
    store.add_clause(lits.to_vec());
    for (i, &a) in lits.iter().enumerate() {
        for &b in &lits[i + 1..] {
            store.add_clause(vec![a.negated(), b.negated()]);
        }
    }
}
