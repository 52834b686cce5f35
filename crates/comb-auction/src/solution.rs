//! Solution and trade data structures.
//!
//! These structs contain only the data needed for winner selection. Callers
//! decode their full batch representation into this minimal format before
//! invoking the arbitrator.

use {
    crate::primitives::{Address, DirectedTokenPair, OrderUid, U256, pair_key},
    serde::{Deserialize, Serialize},
};

/// A single directed trade leg proposed by a solution.
///
/// Immutable once constructed. The per-trade score only feeds the baseline
/// fairness computation; ranking uses the solution's declared score.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    /// Unique trade identifier.
    pub uid: OrderUid,

    /// Sell token address.
    pub sell_token: Address,

    /// Buy token address.
    pub buy_token: Address,

    /// Non-negative score contributed by this trade leg.
    pub score: U256,
}

impl Trade {
    /// The directed token pair this trade swaps.
    pub fn pair(&self) -> DirectedTokenPair {
        pair_key(self.sell_token, self.buy_token)
    }
}

/// A candidate solution submitted to the batch auction.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    /// Solution ID from the solver (unique per solver).
    pub id: u64,

    /// Solver's submission address.
    pub solver: Address,

    /// Solver-declared total score, used directly for ranking.
    ///
    /// The core trusts this value as-is and never recomputes it from the
    /// trade scores.
    pub score: U256,

    /// Trades executed by this solution, in submission order.
    ///
    /// The order only matters as the tie break for first-occurrence ordering
    /// during aggregation.
    pub trades: Vec<Trade>,
}
