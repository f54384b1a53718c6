use clue_core::logic::engine::KnowledgeState;
use clue_core::logic::matrix::{CellState, KnowledgeMatrix};
use clue_core::model::card::Card;
use clue_core::model::guess::{GuessEvent, GuessResponse, GuessTriple};
use clue_core::model::player::{PlayerSlot, Seat};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};

fn three_player_state() -> KnowledgeState {
    KnowledgeState::initialize(
        3,
        3,
        &[Card::Wrench],
        &[Card::Green, Card::Rope, Card::Office],
    )
    .expect("valid setup")
}

fn scarlet_dagger_bedroom() -> GuessTriple {
    GuessTriple::new(Card::Scarlet, Card::Dagger, Card::Bedroom).expect("valid triple")
}

#[test]
fn setup_facts_are_fully_classified() {
    let mut state = three_player_state();
    let (matrix, ok) = state.advance();
    assert!(ok);

    for card in Card::ALL {
        let expected = if card == Card::Wrench {
            CellState::Held
        } else {
            CellState::NotHeld
        };
        assert_eq!(matrix.cell(card, PlayerSlot::Common), expected);
    }

    let local = PlayerSlot::Seat(Seat::LOCAL);
    for card in [Card::Green, Card::Rope, Card::Office] {
        assert_eq!(matrix.cell(card, local), CellState::Held);
    }
}

#[test]
fn full_local_hand_closes_the_local_column() {
    let mut state = three_player_state();
    let (matrix, ok) = state.advance();
    assert!(ok);

    let local = PlayerSlot::Seat(Seat::LOCAL);
    for card in Card::ALL {
        let expected = if [Card::Green, Card::Rope, Card::Office].contains(&card) {
            CellState::Held
        } else {
            CellState::NotHeld
        };
        assert_eq!(matrix.cell(card, local), expected);
    }
}

#[test]
fn unanswered_guess_clears_every_other_seat() {
    let mut state = three_player_state();
    let roster = state.roster();
    let event = GuessEvent::new(Seat::LOCAL, None, scarlet_dagger_bedroom());
    state.record_guess(&event);

    let (matrix, ok) = state.advance();
    assert!(ok);

    for card in scarlet_dagger_bedroom().cards() {
        for seat in roster.seats() {
            if seat != Seat::LOCAL {
                assert_eq!(
                    matrix.cell(card, PlayerSlot::Seat(seat)),
                    CellState::NotHeld
                );
            }
        }
        // With the local hand and the common pile already ruled out, only
        // the envelope is left to hold all three.
        assert_eq!(matrix.cell(card, PlayerSlot::Envelope), CellState::Held);
    }
}

#[test]
fn undisclosed_response_collapses_once_facts_accumulate() {
    let mut state = three_player_state();
    let roster = state.roster();
    let asker = roster.seat(1).expect("seat");
    let responder = roster.seat(2).expect("seat");
    let event = GuessEvent::new(
        asker,
        Some(GuessResponse::undisclosed(responder)),
        scarlet_dagger_bedroom(),
    );
    state.record_guess(&event);

    let (matrix, ok) = state.advance();
    assert!(ok);
    let slot = PlayerSlot::Seat(responder);
    for card in scarlet_dagger_bedroom().cards() {
        assert_eq!(matrix.cell(card, slot), CellState::Unknown);
    }

    state.assert_not_has(slot, Card::Scarlet);
    state.assert_not_has(slot, Card::Dagger);
    let (matrix, ok) = state.advance();
    assert!(ok);
    assert_eq!(matrix.cell(Card::Bedroom, slot), CellState::Held);
    assert_eq!(matrix.cell(Card::Scarlet, slot), CellState::NotHeld);
    assert_eq!(matrix.cell(Card::Dagger, slot), CellState::NotHeld);
}

#[test]
fn classified_cells_never_flip_after_more_facts() {
    let mut state = three_player_state();
    let (before, ok) = state.advance();
    assert!(ok);

    let roster = state.roster();
    let event = GuessEvent::new(
        roster.seat(1).expect("seat"),
        Some(GuessResponse::undisclosed(roster.seat(2).expect("seat"))),
        GuessTriple::new(Card::White, Card::Pistol, Card::Kitchen).expect("valid triple"),
    );
    state.record_guess(&event);
    let (after, ok) = state.advance();
    assert!(ok);

    for card in Card::ALL {
        for slot in roster.slots() {
            let known = before.cell(card, slot);
            if known != CellState::Unknown {
                assert_eq!(after.cell(card, slot), known);
            }
        }
    }
}

#[test]
fn contradiction_keeps_the_stale_snapshot() {
    let mut state = three_player_state();
    let (good, ok) = state.advance();
    assert!(ok);

    // The common pile already holds the wrench; a second holder is absurd.
    let seat = state.roster().seat(1).expect("seat");
    state.assert_has(PlayerSlot::Seat(seat), Card::Wrench);

    let (stale, ok) = state.advance();
    assert!(!ok);
    assert_eq!(stale, good);
    assert_eq!(state.matrix(), &good);

    // The store is monotonic, so the contradiction never clears.
    let (still_stale, ok) = state.advance();
    assert!(!ok);
    assert_eq!(still_stale, good);
}

#[test]
fn fully_dealt_games_resolve_every_card_uniquely() {
    let mut seeds = SmallRng::seed_from_u64(42);
    for _ in 0..4 {
        let mut rng = SmallRng::seed_from_u64(seeds.next_u64());
        let person = Card::PEOPLE[rng.gen_range(0..Card::PEOPLE.len())];
        let weapon = Card::WEAPONS[rng.gen_range(0..Card::WEAPONS.len())];
        let location = Card::LOCATIONS[rng.gen_range(0..Card::LOCATIONS.len())];

        let mut rest: Vec<Card> = Card::ALL
            .iter()
            .copied()
            .filter(|&card| card != person && card != weapon && card != location)
            .collect();
        rest.shuffle(&mut rng);
        let hands: Vec<&[Card]> = rest.chunks(5).collect();
        let (local, second, third, common) = (hands[0], hands[1], hands[2], hands[3]);

        let mut state =
            KnowledgeState::initialize(3, 5, common, local).expect("valid setup");
        let roster = state.roster();
        for &card in second {
            state.assert_has(PlayerSlot::Seat(roster.seat(1).expect("seat")), card);
        }
        for &card in third {
            state.assert_has(PlayerSlot::Seat(roster.seat(2).expect("seat")), card);
        }

        let (matrix, ok) = state.advance();
        assert!(ok);
        assert_card_uniqueness(&matrix);
        assert_eq!(matrix.holder(person), Some(PlayerSlot::Envelope));
        assert_eq!(matrix.holder(weapon), Some(PlayerSlot::Envelope));
        assert_eq!(matrix.holder(location), Some(PlayerSlot::Envelope));
    }
}

fn assert_card_uniqueness(matrix: &KnowledgeMatrix) {
    for card in Card::ALL {
        let holders = matrix
            .roster()
            .slots()
            .filter(|&slot| matrix.cell(card, slot) == CellState::Held)
            .count();
        assert_eq!(holders, 1, "{card} must sit with exactly one column");
    }
}
