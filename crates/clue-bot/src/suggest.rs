use clue_core::logic::matrix::{CellState, KnowledgeMatrix};
use clue_core::model::card::Card;
use clue_core::model::guess::GuessTriple;
use clue_core::model::player::{PlayerSlot, Seat};
use rand::Rng;
use tracing::{Level, event};

use crate::score::{ScoreWeights, score_guess};

/// A ranked candidate accusation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Suggestion {
    pub triple: GuessTriple,
    pub score: f64,
}

/// Cards entailed held by an opponent seat are useless to ask about.
fn known_with_opponent(matrix: &KnowledgeMatrix, card: Card) -> bool {
    matrix.roster().seats().any(|seat| {
        seat != Seat::LOCAL && matrix.cell(card, PlayerSlot::Seat(seat)) == CellState::Held
    })
}

/// Enumerates and ranks candidate accusations.
///
/// Candidates are every person x weapon x reachable-location combination,
/// minus cards already entailed held by an opponent. Zero-score candidates
/// are dropped; an empty result means no informative guess is available.
/// `movable_locations` comes from the caller because reachability depends on
/// dice and board position, which the engine knows nothing about.
pub fn suggest_guesses(
    matrix: &KnowledgeMatrix,
    movable_locations: &[Card],
    top_n: usize,
    weights: &ScoreWeights,
) -> Vec<Suggestion> {
    let people: Vec<Card> = Card::PEOPLE
        .iter()
        .copied()
        .filter(|&card| !known_with_opponent(matrix, card))
        .collect();
    let weapons: Vec<Card> = Card::WEAPONS
        .iter()
        .copied()
        .filter(|&card| !known_with_opponent(matrix, card))
        .collect();
    let locations: Vec<Card> = movable_locations
        .iter()
        .copied()
        .filter(|&card| !known_with_opponent(matrix, card))
        .collect();

    let mut scored: Vec<Suggestion> = Vec::new();
    for &person in &people {
        for &weapon in &weapons {
            for &location in &locations {
                let Some(triple) = GuessTriple::new(person, weapon, location) else {
                    continue;
                };
                let score = score_guess(matrix, &triple, weights);
                if score > 0.0 {
                    scored.push(Suggestion { triple, score });
                }
            }
        }
    }

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(top_n);
    event!(
        Level::DEBUG,
        candidates = scored.len(),
        top_score = scored.first().map_or(0.0, |s| s.score),
        "ranked candidate guesses"
    );
    scored
}

/// Uniform choice among the candidates sharing the maximum score, so equal
/// options are not favored by enumeration order.
pub fn pick_best<'a, R: Rng>(suggestions: &'a [Suggestion], rng: &mut R) -> Option<&'a Suggestion> {
    let best = suggestions
        .iter()
        .map(|s| s.score)
        .fold(f64::NEG_INFINITY, f64::max);
    let ties: Vec<&Suggestion> = suggestions.iter().filter(|s| s.score == best).collect();
    if ties.is_empty() {
        return None;
    }
    Some(ties[rng.gen_range(0..ties.len())])
}
