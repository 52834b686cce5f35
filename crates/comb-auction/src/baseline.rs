//! Baseline offers and the fairness filter.
//!
//! Let's call a solution whose trades aggregate to exactly one directed token
//! pair a baseline solution. The best baseline score per pair acts as a
//! fairness floor: a multi-pair solution is only admissible if none of its
//! aggregated legs underperforms the best pure single-leg offer for the same
//! directed pair.

use {
    crate::{
        aggregation::{self, PairScore},
        error::Error,
        primitives::{DirectedTokenPair, U256},
        solution::Solution,
    },
    indexmap::IndexMap,
    itertools::Itertools,
};

/// Returns the best aggregate score for each directed token pair across all
/// baseline solutions, in first-occurrence order of the pair.
///
/// Multi-pair and empty solutions never contribute to baselines.
pub fn compute_baselines(solutions: &[Solution]) -> Result<Vec<PairScore>, Error> {
    let aggregates = aggregate_all(solutions)?;
    Ok(baselines_from_aggregates(&aggregates)
        .into_iter()
        .map(|(pair, score)| PairScore { pair, score })
        .collect())
}

/// One pass/fail flag per solution, in input order.
///
/// Single-pair solutions always pass. All other solutions pass iff every one
/// of their aggregated pair scores is at least the baseline for that pair,
/// where a pair without a recorded baseline imposes no constraint. A solution
/// with no trades therefore passes vacuously.
pub fn baseline_flags(
    solutions: &[Solution],
    baselines: &[PairScore],
) -> Result<Vec<bool>, Error> {
    let aggregates = aggregate_all(solutions)?;
    let baselines: IndexMap<_, _> = baselines
        .iter()
        .map(|entry| (entry.pair.clone(), entry.score))
        .collect();
    Ok(flags_from_aggregates(&aggregates, &baselines))
}

/// Aggregates every solution of the batch, in input order.
pub(crate) fn aggregate_all(solutions: &[Solution]) -> Result<Vec<Vec<PairScore>>, Error> {
    solutions
        .iter()
        .map(|solution| aggregation::aggregate_pairs(&solution.trades))
        .collect()
}

pub(crate) fn baselines_from_aggregates(
    aggregates: &[Vec<PairScore>],
) -> IndexMap<DirectedTokenPair, U256> {
    let mut baselines = IndexMap::new();
    for aggregate in aggregates {
        let Ok(entry) = aggregate.iter().exactly_one() else {
            // baseline solutions trade exactly 1 directed token pair
            continue;
        };
        let current_best = baselines.entry(entry.pair.clone()).or_insert(U256::ZERO);
        if entry.score > *current_best {
            *current_best = entry.score;
        }
    }
    baselines
}

pub(crate) fn flags_from_aggregates(
    aggregates: &[Vec<PairScore>],
    baselines: &IndexMap<DirectedTokenPair, U256>,
) -> Vec<bool> {
    aggregates
        .iter()
        .map(|aggregate| {
            // Single-pair solutions pass unconditionally so the offers that
            // set the baselines cannot filter themselves out.
            aggregate.len() == 1
                || aggregate.iter().all(|entry| {
                    baselines
                        .get(&entry.pair)
                        .is_none_or(|baseline| entry.score >= *baseline)
                })
        })
        .collect()
}
