// Copyright (c) The petrick-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Splitting raw batch text into independent output problems.
//!
//! Prime implicant text looks like `A'B, AB; A'C` and minterm text like `1,3; 2,6`: groups are
//! separated by `;`, entries within a group by `,`. The nth prime implicant group is paired with
//! the nth minterm group.

use crate::{
    chart::CoveringChart,
    config::InputPolicy,
    errors::{MintermError, SolveError},
    implicant::PrimeImplicant,
    minterm::Target,
    report::OutputReport,
    solver::CoveringSolver,
};
use itertools::Itertools;
use log::debug;

/// One output function: the implicants to choose from and the minterms to cover.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputProblem {
    pub pis: Vec<PrimeImplicant>,
    /// Target minterms in input order, duplicates included.
    pub targets: Vec<Target>,
}

impl OutputProblem {
    pub fn new(pis: Vec<PrimeImplicant>, targets: Vec<Target>) -> Self {
        Self { pis, targets }
    }

    /// Builds the covering chart for this problem and searches it.
    pub fn solve(
        self,
        output_ix: usize,
        solver: &CoveringSolver,
    ) -> Result<OutputReport, SolveError> {
        debug!(
            "F{}: {} implicants, targets [{}]",
            output_ix,
            self.pis.len(),
            self.targets.iter().join(", ")
        );
        let values: Vec<u32> = self.targets.iter().map(Target::value).collect();
        let chart = CoveringChart::build(&self.pis, &values);
        let outcome = solver
            .solve(&chart, &self.pis)
            .map_err(|err| SolveError::ResourceExceeded {
                output_ix,
                limit: err.limit,
            })?;
        Ok(OutputReport::new(
            output_ix,
            self.pis,
            self.targets,
            chart,
            outcome,
        ))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchInput {
    problems: Vec<OutputProblem>,
}

impl BatchInput {
    pub fn parse(
        pi_text: &str,
        minterms_text: &str,
        policy: InputPolicy,
    ) -> Result<Self, SolveError> {
        let pi_groups: Vec<&str> = split_groups(pi_text).collect();
        let minterm_groups: Vec<&str> = split_groups(minterms_text).collect();

        if pi_groups.len() != minterm_groups.len() {
            match policy {
                InputPolicy::Lenient => debug!(
                    "{} implicant groups, {} minterm groups: only the first {} are used",
                    pi_groups.len(),
                    minterm_groups.len(),
                    pi_groups.len().min(minterm_groups.len())
                ),
                InputPolicy::Strict => {
                    return Err(SolveError::GroupCountMismatch {
                        pi_groups: pi_groups.len(),
                        minterm_groups: minterm_groups.len(),
                    })
                }
            }
        }

        let problems = pi_groups
            .into_iter()
            .zip(minterm_groups)
            .enumerate()
            .map(|(output_ix, (pi_group, minterm_group))| {
                let pis = pi_group
                    .split(',')
                    .map(|text| PrimeImplicant::parse(text.trim(), policy))
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|source| SolveError::Parse { output_ix, source })?;
                let targets = parse_minterms(minterm_group, policy)
                    .map_err(|source| SolveError::Minterm { output_ix, source })?;
                Ok(OutputProblem::new(pis, targets))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { problems })
    }

    #[inline]
    pub fn problems(&self) -> &[OutputProblem] {
        &self.problems
    }

    #[inline]
    pub fn into_problems(self) -> Vec<OutputProblem> {
        self.problems
    }
}

/// Splits uploaded file content into its prime implicant line and minterm line.
///
/// Returns `None` if the content has fewer than two lines, in which case callers fall back to
/// whatever text they had before.
pub fn two_line_fields(content: &str) -> Option<(&str, &str)> {
    let mut lines = content.trim().split('\n');
    let pi_text = lines.next()?;
    let minterms_text = lines.next()?;
    Some((
        pi_text.trim_end_matches('\r'),
        minterms_text.trim_end_matches('\r'),
    ))
}

fn split_groups(text: &str) -> impl Iterator<Item = &str> {
    text.trim().split(';').map(str::trim)
}

fn parse_minterms(group: &str, policy: InputPolicy) -> Result<Vec<Target>, MintermError> {
    let mut targets = Vec::new();
    for token in group.split(',').map(str::trim) {
        match (Target::parse_digits(token), policy) {
            (Some(target), InputPolicy::Strict) if !target.is_in_domain() => {
                return Err(MintermError::OutOfRange { target });
            }
            (Some(target), _) => targets.push(target),
            (None, InputPolicy::Lenient) => {
                debug!("dropping minterm token {:?}", token);
            }
            (None, InputPolicy::Strict) => {
                return Err(MintermError::NotANumber {
                    token: token.to_owned(),
                });
            }
        }
    }
    Ok(targets)
}
