// Copyright (c) The petrick-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use itertools::Itertools;
use petrick_min::OutputProblem;
use proptest::prelude::*;
use std::fmt;

/// A generated batch of output problems, printable in the two-line input format.
#[derive(Clone, Debug)]
pub struct FixtureBatch {
    problems: Vec<OutputProblem>,
}

impl FixtureBatch {
    /// Strategy for batches of 1 to `max_outputs` outputs, each with up to `max_pis` implicants
    /// and `max_targets` target minterms.
    pub fn strategy(
        max_outputs: usize,
        max_pis: usize,
        max_targets: usize,
    ) -> impl Strategy<Value = Self> {
        prop::collection::vec(
            any_with::<OutputProblem>(Some((max_pis, max_targets))),
            1..=max_outputs.max(1),
        )
        .prop_map(|problems| Self { problems })
    }

    #[inline]
    pub fn problems(&self) -> &[OutputProblem] {
        &self.problems
    }

    pub fn pi_text(&self) -> String {
        self.problems
            .iter()
            .map(|problem| problem.pis.iter().map(|pi| pi.text()).join(", "))
            .join("; ")
    }

    pub fn minterms_text(&self) -> String {
        self.problems
            .iter()
            .map(|problem| problem.targets.iter().join(","))
            .join("; ")
    }
}

impl fmt::Display for FixtureBatch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.pi_text())?;
        writeln!(f, "{}", self.minterms_text())
    }
}
