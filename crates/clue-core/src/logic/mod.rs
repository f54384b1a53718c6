//! The knowledge-representation and inference engine.
//!
//! This module is composed of:
//! - `solver`: a small DPLL satisfiability search over signed literals.
//! - `store`: the append-only clause store and its proposition layout.
//! - `ingest`: lowering of game facts into clauses.
//! - `propagate`: the hand-size closure pass with its per-seat latch.
//! - `classify`: entailment extraction for every proposition.
//! - `matrix`: the dense published snapshot consumed by displays and scoring.
//! - `engine`: the facade tying the turn sequence together.

mod ingest;

pub mod classify;
pub mod engine;
pub mod matrix;
pub mod propagate;
pub mod solver;
pub mod store;

pub use classify::{Classification, TruthValue, classify};
pub use engine::{KnowledgeState, SetupError};
pub use matrix::{CellState, KnowledgeMatrix};
pub use propagate::HandSizePropagator;
pub use solver::Lit;
pub use store::ConstraintStore;
