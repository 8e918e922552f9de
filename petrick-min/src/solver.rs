// Copyright (c) The petrick-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Exhaustive minimum-cardinality covering search.
//!
//! Combinations of implicant indexes are tried in order of increasing size, and within a size in
//! lexicographic order. The first combination covering every target wins, so the result always
//! has the fewest implicants possible, and ties go to the lexicographically smallest index tuple.
//! Literal counts play no part in the choice.
//!
//! The search is exponential in the number of implicants. Use a [`SearchLimit`] to bound it.

use crate::{chart::CoveringChart, implicant::PrimeImplicant, minterm::MintermSet};
use itertools::Itertools;
use log::{debug, trace};
use std::{error, fmt};

/// An upper bound on the number of combinations a search may examine.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchLimit {
    max_combinations: u64,
}

impl SearchLimit {
    #[inline]
    pub const fn new(max_combinations: u64) -> Self {
        Self { max_combinations }
    }

    #[inline]
    pub const fn max_combinations(self) -> u64 {
        self.max_combinations
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CoverOutcome {
    /// Indexes of the chosen implicants, ascending.
    Covered(Vec<usize>),
    /// No combination of implicants covers every target.
    Uncoverable,
}

impl CoverOutcome {
    /// The chosen indexes, or an empty slice if uncoverable.
    pub fn indexes(&self) -> &[usize] {
        match self {
            Self::Covered(indexes) => indexes,
            Self::Uncoverable => &[],
        }
    }

    #[inline]
    pub fn is_covered(&self) -> bool {
        matches!(self, Self::Covered(_))
    }
}

/// Returned when a search examines more combinations than its [`SearchLimit`] allows.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchLimitExceeded {
    pub limit: SearchLimit,
}

impl fmt::Display for SearchLimitExceeded {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "covering search exceeded {} combinations",
            self.limit.max_combinations
        )
    }
}

impl error::Error for SearchLimitExceeded {}

#[derive(Copy, Clone, Debug, Default)]
pub struct CoveringSolver {
    limit: Option<SearchLimit>,
}

impl CoveringSolver {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: Option<SearchLimit>) -> Self {
        self.limit = limit;
        self
    }

    pub fn solve(
        &self,
        chart: &CoveringChart,
        pis: &[PrimeImplicant],
    ) -> Result<CoverOutcome, SearchLimitExceeded> {
        // A target nothing covers can't be covered by any combination either.
        if let Some(minterm) = chart.uncoverable().next() {
            debug!("minterm {} is not covered by any implicant", minterm);
            return Ok(CoverOutcome::Uncoverable);
        }

        let targets: Vec<u32> = chart.minterms().collect();
        let mut examined = 0_u64;

        for size in 1..=pis.len() {
            trace!("trying combinations of size {}", size);
            for combination in (0..pis.len()).combinations(size) {
                examined += 1;
                if let Some(limit) = self.limit {
                    if examined > limit.max_combinations {
                        debug!(
                            "giving up after {} combinations (limit {})",
                            examined - 1,
                            limit.max_combinations
                        );
                        return Err(SearchLimitExceeded { limit });
                    }
                }

                let union = combination
                    .iter()
                    .fold(MintermSet::new(), |acc, &ix| acc.union(pis[ix].covered()));
                trace!("{:?} covers {}", combination, union);
                if union.contains_all(&targets) {
                    debug!(
                        "found cover {:?} after {} combinations",
                        combination, examined
                    );
                    return Ok(CoverOutcome::Covered(combination));
                }
            }
        }

        Ok(CoverOutcome::Uncoverable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::InputPolicy, expr::PiExpression};
    use proptest::prelude::*;

    fn pis(texts: &[&str]) -> Vec<PrimeImplicant> {
        texts
            .iter()
            .map(|text| PrimeImplicant::parse(text, InputPolicy::Lenient).unwrap())
            .collect()
    }

    fn solve(texts: &[&str], targets: &[u32]) -> CoverOutcome {
        let pis = pis(texts);
        let chart = CoveringChart::build(&pis, targets);
        CoveringSolver::new().solve(&chart, &pis).unwrap()
    }

    /// Checks every subset directly, returning the smallest lexicographically-first cover.
    fn brute_force(pis: &[PrimeImplicant], targets: &[u32]) -> Option<Vec<usize>> {
        (1_u32..(1 << pis.len()))
            .map(|mask| {
                (0..pis.len())
                    .filter(|ix| mask & (1 << ix) != 0)
                    .collect::<Vec<_>>()
            })
            .filter(|subset| {
                targets
                    .iter()
                    .all(|&m| subset.iter().any(|&ix| pis[ix].covered().contains(m)))
            })
            .min_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)))
    }

    #[test]
    fn test_single_implicant() {
        assert_eq!(
            solve(&["A'B", "A'C"], &[2, 6]),
            CoverOutcome::Covered(vec![1])
        );
    }

    #[test]
    fn test_minimum_cardinality() {
        // B'D' alone covers 0, 2, 8, 10; the singles need two implicants.
        let outcome = solve(&["A'B'C'D'", "A'B'CD'", "B'D'", "AB'C'D'"], &[0, 2, 8]);
        assert_eq!(outcome, CoverOutcome::Covered(vec![2]));

        let outcome = solve(&["A'B'", "AB'", "B'D'"], &[0, 1, 8, 9]);
        assert_eq!(outcome, CoverOutcome::Covered(vec![0, 1]));
    }

    #[test]
    fn test_tie_break_is_lexicographic() {
        // Both {0, 2} and {1, 2} cover; literal counts don't matter.
        let outcome = solve(&["A'B'C'D'", "A'B'C'", "D"], &[0, 1, 3]);
        assert_eq!(outcome, CoverOutcome::Covered(vec![0, 2]));

        // A one-literal implicant later in the list loses to an earlier, larger one of the same
        // cardinality.
        let outcome = solve(&["A'B'C'D' + A'B'C'D", "A'"], &[0, 1]);
        assert_eq!(outcome, CoverOutcome::Covered(vec![0]));
    }

    #[test]
    fn test_uncoverable() {
        let pis = pis(&["A'B", "AB"]);
        let chart = CoveringChart::build(&pis, &[1, 3]);
        assert_eq!(chart.covering(1), Some(&[][..]));
        let outcome = CoveringSolver::new().solve(&chart, &pis).unwrap();
        assert_eq!(outcome, CoverOutcome::Uncoverable);
        assert!(outcome.indexes().is_empty());
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(solve(&[], &[1]), CoverOutcome::Uncoverable);
        assert_eq!(solve(&[], &[]), CoverOutcome::Uncoverable);
        // An empty target list is covered by the first implicant alone.
        assert_eq!(solve(&["AB", "CD"], &[]), CoverOutcome::Covered(vec![0]));
    }

    #[test]
    fn test_search_limit() {
        // Every minterm needs its own implicant, so the cover is the full set.
        let texts: Vec<String> = (0..8).map(minterm_text).collect();
        let texts: Vec<&str> = texts.iter().map(|s| s.as_str()).collect();
        let pis = pis(&texts);
        let targets: Vec<u32> = (0..8).collect();
        let chart = CoveringChart::build(&pis, &targets);

        // 2^8 - 1 combinations in total; the last one is the cover.
        let exact = CoveringSolver::new()
            .with_limit(Some(SearchLimit::new(255)))
            .solve(&chart, &pis)
            .unwrap();
        assert_eq!(exact, CoverOutcome::Covered((0..8).collect()));

        let limit = SearchLimit::new(254);
        let err = CoveringSolver::new()
            .with_limit(Some(limit))
            .solve(&chart, &pis)
            .unwrap_err();
        assert_eq!(err, SearchLimitExceeded { limit });
    }

    fn minterm_text(minterm: u32) -> String {
        ['A', 'B', 'C', 'D']
            .iter()
            .enumerate()
            .map(|(ix, symbol)| {
                if (minterm >> (3 - ix)) & 1 == 1 {
                    symbol.to_string()
                } else {
                    format!("{}'", symbol)
                }
            })
            .collect()
    }

    proptest! {
        #[test]
        fn proptest_minimal_and_first(
            exprs in prop::collection::vec(any::<PiExpression>(), 0..7),
            targets in prop::collection::vec(0_u32..16, 0..6),
        ) {
            let pis: Vec<_> = exprs
                .into_iter()
                .map(|expr| PrimeImplicant::new(expr.to_string(), expr))
                .collect();
            let chart = CoveringChart::build(&pis, &targets);
            let outcome = CoveringSolver::new().solve(&chart, &pis).unwrap();
            match brute_force(&pis, &targets) {
                Some(expected) => prop_assert_eq!(outcome, CoverOutcome::Covered(expected)),
                None => prop_assert_eq!(outcome, CoverOutcome::Uncoverable),
            }
        }
    }
}
