//! Winner selection arbitrator.
//!
//! Implements the filter -> rank -> select pipeline: discard solutions that
//! are unfair against the best single-pair offers, rank the remaining ones by
//! their declared score, then greedily pick solutions whose directed token
//! pair footprints do not overlap.

use {
    crate::{
        aggregation::PairScore,
        baseline,
        error::Error,
        primitives::DirectedTokenPair,
        solution::Solution,
    },
    itertools::{Either, Itertools},
    std::collections::HashSet,
};

/// Auction arbitrator responsible for selecting winning solutions.
#[derive(Clone, Copy, Debug, Default)]
pub struct Arbitrator {
    /// When enabled, every candidate considered during the greedy pick
    /// reserves its directed token pairs whether it was accepted or not, so a
    /// rejected candidate also blocks later candidates on its pairs.
    ///
    /// Disabled by default: only accepted winners reserve pairs.
    pub cumulative_filtering: bool,
}

impl Arbitrator {
    /// Runs the full selection pipeline and returns copies of the winning
    /// solutions in acceptance order.
    ///
    /// This is the sole operation callers need; everything else on this type
    /// exposes individual pipeline phases. Fails with [`Error::EmptyBatch`]
    /// for an empty input and [`Error::ArithmeticOverflow`] when aggregating
    /// any solution's trade scores overflows. All-or-nothing: on error no
    /// partial result is produced.
    pub fn select_winners(&self, solutions: &[Solution]) -> Result<Vec<Solution>, Error> {
        Ok(self.arbitrate(solutions)?.winners().cloned().collect())
    }

    /// Runs the pipeline and returns the full ranking: the solutions that
    /// failed the fairness check plus the kept ones in rank order with their
    /// winner marks.
    pub fn arbitrate(&self, solutions: &[Solution]) -> Result<Ranking, Error> {
        if solutions.is_empty() {
            return Err(Error::EmptyBatch);
        }

        let aggregates = baseline::aggregate_all(solutions)?;
        let baselines = baseline::baselines_from_aggregates(&aggregates);
        let kept = baseline::flags_from_aggregates(&aggregates, &baselines);

        let (eligible, filtered_out): (Vec<usize>, Vec<Solution>) = solutions
            .iter()
            .enumerate()
            .partition_map(|(index, solution)| match kept[index] {
                true => Either::Left(index),
                false => Either::Right(solution.clone()),
            });
        if !filtered_out.is_empty() {
            tracing::debug!(
                discarded = filtered_out.len(),
                "solutions failed the baseline fairness check"
            );
        }

        let order = rank_indices(solutions, eligible);
        let winner_indices = self.greedy_pick(solutions, &order, &aggregates);

        let ranked = order
            .into_iter()
            .map(|index| RankedSolution {
                is_winner: winner_indices.contains(&index),
                solution: solutions[index].clone(),
            })
            .collect();

        Ok(Ranking {
            filtered_out,
            ranked,
        })
    }

    /// Indices of the solutions with `kept[i] == true`, ordered by declared
    /// score descending. The sort is stable: solutions with equal scores stay
    /// in input order relative to each other.
    pub fn rank_by_score(&self, solutions: &[Solution], kept: &[bool]) -> Vec<usize> {
        let eligible = (0..solutions.len()).filter(|&index| kept[index]).collect();
        rank_indices(solutions, eligible)
    }

    /// Greedy conflict-free pick over the ranked solutions.
    ///
    /// Returns the original indices of the accepted solutions in acceptance
    /// order, which is rank order.
    pub fn pick_winners(
        &self,
        solutions: &[Solution],
        kept: &[bool],
    ) -> Result<Vec<usize>, Error> {
        let aggregates = baseline::aggregate_all(solutions)?;
        let order = self.rank_by_score(solutions, kept);
        let winners = self.greedy_pick(solutions, &order, &aggregates);
        Ok(order
            .into_iter()
            .filter(|index| winners.contains(index))
            .collect())
    }

    /// Returns the set of winning indices.
    /// Assumes `order` is sorted by score descending. A solution can only win
    /// if none of the directed token pairs of its aggregated footprint has
    /// been reserved by a previously accepted winner. A candidate is accepted
    /// or rejected as a whole; there is no partial acceptance.
    fn greedy_pick(
        &self,
        solutions: &[Solution],
        order: &[usize],
        aggregates: &[Vec<PairScore>],
    ) -> HashSet<usize> {
        let mut reserved: HashSet<DirectedTokenPair> = HashSet::new();
        let mut winners = HashSet::default();

        for &index in order {
            // Duplicate pairs already collapsed during aggregation, so a
            // solution can never conflict with itself. An empty footprint
            // never conflicts at all.
            let footprint: HashSet<DirectedTokenPair> = aggregates[index]
                .iter()
                .map(|entry| entry.pair.clone())
                .collect();

            let accepted = footprint.is_disjoint(&reserved);
            if accepted {
                winners.insert(index);
            } else {
                tracing::debug!(
                    solution = solutions[index].id,
                    "rejected solution conflicting on already reserved token pairs"
                );
            }
            if accepted || self.cumulative_filtering {
                reserved.extend(footprint);
            }
        }

        winners
    }
}

/// A solution with its selection outcome.
#[derive(Clone, Debug)]
pub struct RankedSolution {
    pub solution: Solution,
    pub is_winner: bool,
}

/// Final ranking of all solutions of one batch.
#[derive(Debug)]
pub struct Ranking {
    /// Solutions that failed the baseline fairness check, in input order.
    filtered_out: Vec<Solution>,
    /// Solutions that passed the fairness check, ordered by declared score
    /// descending (stable on ties).
    ranked: Vec<RankedSolution>,
}

impl Ranking {
    /// All winning solutions, in acceptance order.
    pub fn winners(&self) -> impl Iterator<Item = &Solution> {
        self.ranked
            .iter()
            .filter(|ranked| ranked.is_winner)
            .map(|ranked| &ranked.solution)
    }

    /// All solutions that passed the fairness check but did not win.
    pub fn non_winners(&self) -> impl Iterator<Item = &Solution> {
        self.ranked
            .iter()
            .filter(|ranked| !ranked.is_winner)
            .map(|ranked| &ranked.solution)
    }

    /// All solutions that failed the fairness check.
    pub fn filtered_out(&self) -> impl Iterator<Item = &Solution> {
        self.filtered_out.iter()
    }

    /// All solutions that passed the fairness check, in rank order.
    pub fn ranked(&self) -> impl Iterator<Item = &RankedSolution> {
        self.ranked.iter()
    }
}

fn rank_indices(solutions: &[Solution], mut eligible: Vec<usize>) -> Vec<usize> {
    // sort_by_key is stable, equal scores keep their input order
    eligible.sort_by_key(|&index| std::cmp::Reverse(solutions[index].score));
    eligible
}
