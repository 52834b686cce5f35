//! Counterfactual replay of winner selection over a sequence of batches.
//!
//! Replays consecutive auction batches through the arbitrator while keeping
//! track of the orders settled by earlier winners: a trade whose order was
//! already settled is stripped from later solutions before selection runs, so
//! no order can win twice across the sequence.

use {
    crate::{
        arbitrator::Arbitrator,
        error::Error,
        primitives::{OrderUid, U256},
        solution::Solution,
    },
    std::collections::HashSet,
};

/// The order uids touched by any trade of the given solutions.
pub fn order_uids(solutions: &[Solution]) -> HashSet<OrderUid> {
    solutions
        .iter()
        .flat_map(|solution| solution.trades.iter().map(|trade| trade.uid))
        .collect()
}

/// Runs winner selection on each batch in order.
///
/// With `remove_executed_orders` enabled, trades whose order was settled by
/// an earlier batch's winners are stripped first and each stripped solution's
/// score is recomputed as the checked sum of its remaining trade scores.
/// Solutions whose recomputed score drops to zero are dropped from the batch;
/// a batch left without candidates simply yields no winners.
pub fn counterfactual_winners(
    batches: &[Vec<Solution>],
    arbitrator: &Arbitrator,
    remove_executed_orders: bool,
) -> Result<Vec<Vec<Solution>>, Error> {
    let mut winners_per_batch = Vec::with_capacity(batches.len());
    let mut settled: HashSet<OrderUid> = HashSet::new();

    for batch in batches {
        let candidates = if remove_executed_orders {
            let mut candidates = Vec::with_capacity(batch.len());
            for solution in batch {
                let stripped = remove_orders(solution, &settled)?;
                if stripped.score > U256::ZERO {
                    candidates.push(stripped);
                }
            }
            candidates
        } else {
            batch.clone()
        };

        if candidates.is_empty() {
            winners_per_batch.push(Vec::new());
            continue;
        }

        let winners = arbitrator.select_winners(&candidates)?;
        settled.extend(order_uids(&winners));
        winners_per_batch.push(winners);
    }

    Ok(winners_per_batch)
}

/// Removes the settled orders from a solution and recomputes its score from
/// the remaining trades.
fn remove_orders(solution: &Solution, settled: &HashSet<OrderUid>) -> Result<Solution, Error> {
    let trades: Vec<_> = solution
        .trades
        .iter()
        .filter(|trade| !settled.contains(&trade.uid))
        .cloned()
        .collect();
    let score = trades
        .iter()
        .try_fold(U256::ZERO, |acc, trade| acc.checked_add(trade.score))
        .ok_or(Error::ArithmeticOverflow)?;
    Ok(Solution {
        id: solution.id,
        solver: solution.solver,
        score,
        trades,
    })
}
