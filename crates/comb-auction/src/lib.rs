//! Combinatorial batch auction winner selection.
//!
//! Given a batch of candidate solutions, each proposing trades over directed
//! token pairs with an associated score, this crate deterministically picks a
//! set of mutually compatible winners. Solutions are first checked for
//! fairness against the best single-pair offers, then ranked by their declared
//! score and greedily selected so that no directed token pair is settled by
//! more than one winner.
//!
//! The whole pipeline is a pure function from an input batch to an output
//! batch: no I/O, no shared state, identical inputs always produce identical
//! output ordering and values.

pub mod aggregation;
pub mod arbitrator;
pub mod baseline;
pub mod error;
pub mod primitives;
pub mod replay;
pub mod solution;

// Re-export key types for convenience
pub use {
    aggregation::{PairScore, aggregate_pairs, unique_pairs},
    arbitrator::{Arbitrator, RankedSolution, Ranking},
    baseline::{baseline_flags, compute_baselines},
    error::Error,
    primitives::{Address, DirectedTokenPair, OrderUid, U256, pair_key},
    replay::counterfactual_winners,
    solution::{Solution, Trade},
};
