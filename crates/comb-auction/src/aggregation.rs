//! Per-solution aggregation of trade scores by directed token pair.

use {
    crate::{
        error::Error,
        primitives::{DirectedTokenPair, U256},
        solution::Trade,
    },
    indexmap::IndexMap,
};

/// Aggregate score of one directed token pair within a single solution.
///
/// Transient: produced during aggregation and baseline computation, never
/// persisted anywhere.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PairScore {
    pub pair: DirectedTokenPair,
    pub score: U256,
}

/// Returns the total score for each directed token pair of the trades.
/// E.g. for 3 trades like:
///     sell A for B with a score of 10
///     sell A for B with a score of 5
///     sell B for C with a score of 5
/// it will return:
///     (A, B) => 15
///     (B, C) => 5
///
/// Entries are ordered by the first occurrence of their pair in the input.
/// Summation is checked; exceeding 256 bits aborts with
/// [`Error::ArithmeticOverflow`] instead of wrapping.
pub fn aggregate_pairs(trades: &[Trade]) -> Result<Vec<PairScore>, Error> {
    let mut scores: IndexMap<DirectedTokenPair, U256> = IndexMap::new();
    for trade in trades {
        let entry = scores.entry(trade.pair()).or_insert(U256::ZERO);
        *entry = entry
            .checked_add(trade.score)
            .ok_or(Error::ArithmeticOverflow)?;
    }
    Ok(scores
        .into_iter()
        .map(|(pair, score)| PairScore { pair, score })
        .collect())
}

/// The distinct directed token pairs the trades touch, in first-occurrence
/// order.
pub fn unique_pairs(trades: &[Trade]) -> Result<Vec<DirectedTokenPair>, Error> {
    Ok(aggregate_pairs(trades)?
        .into_iter()
        .map(|entry| entry.pair)
        .collect())
}
