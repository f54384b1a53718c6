pub mod score;
pub mod suggest;

pub use score::{ScoreWeights, score_guess};
pub use suggest::{Suggestion, pick_best, suggest_guesses};
