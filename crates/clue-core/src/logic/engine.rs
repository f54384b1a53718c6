use crate::logic::classify::classify;
use crate::logic::ingest;
use crate::logic::matrix::KnowledgeMatrix;
use crate::logic::propagate::HandSizePropagator;
use crate::logic::store::ConstraintStore;
use crate::model::card::Card;
use crate::model::guess::GuessEvent;
use crate::model::player::{PlayerSlot, Roster};
use std::fmt;

/// Why a game could not be set up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    InvalidSeatCount(u8),
    InvalidHandSize(usize),
    HandSizeMismatch { expected: usize, actual: usize },
    DuplicateCard(Card),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::InvalidSeatCount(count) => {
                write!(
                    f,
                    "{count} players is outside the supported range {}..={}",
                    Roster::MIN_SEATS,
                    Roster::MAX_SEATS
                )
            }
            SetupError::InvalidHandSize(size) => {
                write!(f, "a hand of {size} cards does not fit the deck")
            }
            SetupError::HandSizeMismatch { expected, actual } => {
                write!(f, "expected {expected} hand cards but got {actual}")
            }
            SetupError::DuplicateCard(card) => {
                write!(f, "{card} was entered more than once")
            }
        }
    }
}

impl std::error::Error for SetupError {}

/// Facade over the constraint store: ingest facts, run the turn sequence,
/// publish snapshots.
///
/// Single-writer by design: clause addition and the finalized latches carry
/// no synchronization of their own, so the ingest -> propagate -> classify
/// -> publish sequence must stay on one logical thread. Only the returned
/// matrices are meant to cross thread boundaries.
#[derive(Debug, Clone)]
pub struct KnowledgeState {
    store: ConstraintStore,
    propagator: HandSizePropagator,
    hand_size: usize,
    snapshot: KnowledgeMatrix,
}

impl KnowledgeState {
    /// Builds the store with its structural invariants, the common-pile
    /// closed world, and the observer's hand.
    pub fn initialize(
        seat_count: u8,
        hand_size: usize,
        common_pile: &[Card],
        local_hand: &[Card],
    ) -> Result<Self, SetupError> {
        let roster =
            Roster::new(seat_count).ok_or(SetupError::InvalidSeatCount(seat_count))?;
        if hand_size == 0 || hand_size * roster.seat_count() as usize + 3 > Card::COUNT {
            return Err(SetupError::InvalidHandSize(hand_size));
        }
        if local_hand.len() != hand_size {
            return Err(SetupError::HandSizeMismatch {
                expected: hand_size,
                actual: local_hand.len(),
            });
        }
        let mut seen: Vec<Card> = Vec::new();
        for &card in common_pile.iter().chain(local_hand) {
            if seen.contains(&card) {
                return Err(SetupError::DuplicateCard(card));
            }
            seen.push(card);
        }

        let mut store = ConstraintStore::new(roster);
        ingest::seed_structural_rules(&mut store);
        ingest::seed_common_pile(&mut store, common_pile);
        ingest::seed_local_hand(&mut store, local_hand);

        Ok(Self {
            propagator: HandSizePropagator::new(roster, hand_size),
            hand_size,
            snapshot: KnowledgeMatrix::empty(roster),
            store,
        })
    }

    pub fn roster(&self) -> Roster {
        self.store.roster()
    }

    pub fn hand_size(&self) -> usize {
        self.hand_size
    }

    /// The latest published snapshot.
    pub fn matrix(&self) -> &KnowledgeMatrix {
        &self.snapshot
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &ConstraintStore {
        &self.store
    }

    pub fn assert_has(&mut self, slot: PlayerSlot, card: Card) {
        ingest::assert_has(&mut self.store, slot, card);
    }

    pub fn assert_not_has(&mut self, slot: PlayerSlot, card: Card) {
        ingest::assert_not_has(&mut self.store, slot, card);
    }

    pub fn record_guess(&mut self, event: &GuessEvent) {
        ingest::apply_guess(&mut self.store, event);
    }

    /// Runs propagation and classification, then rebuilds the snapshot.
    ///
    /// On inconsistency the prior snapshot is returned unchanged with
    /// `false`: the contradictory clauses stay in the store (there is no
    /// rollback), so every later turn will keep reporting the contradiction
    /// until the process is restarted.
    pub fn advance(&mut self) -> (KnowledgeMatrix, bool) {
        self.propagator.run(&mut self.store);
        let classification = classify(&self.store);
        if !classification.is_consistent() {
            return (self.snapshot.clone(), false);
        }
        self.snapshot = KnowledgeMatrix::from_classification(self.store.roster(), &classification);
        (self.snapshot.clone(), true)
    }
}
