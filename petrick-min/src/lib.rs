// Copyright (c) The petrick-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Minimum-cardinality prime implicant covers for multi-output boolean functions over four
//! variables, `A` through `D`.
//!
//! Given, for each output, a list of prime implicants and a list of target minterms, this crate
//! finds the smallest set of implicants covering every target. The search is exhaustive and breaks
//! ties by implicant order, not by literal count.
//!
//! ```
//! let report = petrick_min::solve("A'B, AB; A'C", "1,3; 2,6");
//! assert_eq!(
//!     report,
//!     "F0(Minterms: [1, 3]) → Minimum SOP: no covering combination found\n\
//!      F1(Minterms: [2, 6]) → Minimum SOP: A'C",
//! );
//! ```

pub mod batch;
pub mod chart;
pub mod config;
pub mod errors;
pub mod expr;
pub mod implicant;
pub mod literal;
pub mod minterm;
#[cfg(any(test, feature = "proptest1"))]
mod proptest_helpers;
pub mod report;
pub mod solver;

pub use batch::{two_line_fields, BatchInput, OutputProblem};
pub use config::{InputPolicy, SolveConfig};
pub use errors::SolveError;
pub use minterm::Target;
pub use report::{OutputReport, Report};
pub use solver::SearchLimit;

use solver::CoveringSolver;

/// Solves a batch leniently and without a search limit, returning the report text.
pub fn solve(pi_text: &str, minterms_text: &str) -> String {
    match try_solve(pi_text, minterms_text, &SolveConfig::default()) {
        Ok(report) => report.to_string(),
        Err(err) => unreachable!(
            "lenient parsing with no search limit never fails, but got: {}",
            err
        ),
    }
}

/// Solves a batch according to `config`.
pub fn try_solve(
    pi_text: &str,
    minterms_text: &str,
    config: &SolveConfig,
) -> Result<Report, SolveError> {
    let batch = BatchInput::parse(pi_text, minterms_text, config.policy)?;
    let solver = CoveringSolver::new().with_limit(config.search_limit);
    let outputs = batch
        .into_problems()
        .into_iter()
        .enumerate()
        .map(|(output_ix, problem)| problem.solve(output_ix, &solver))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Report::new(outputs))
}
