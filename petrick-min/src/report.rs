// Copyright (c) The petrick-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    chart::{ChartDisplay, CoveringChart},
    implicant::PrimeImplicant,
    minterm::Target,
    solver::CoverOutcome,
};
use itertools::Itertools;
use std::fmt;

/// Printed in place of a cover when no combination covers every target.
pub const NO_COVER_MESSAGE: &str = "no covering combination found";

/// The result of solving one output problem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputReport {
    output_ix: usize,
    pis: Vec<PrimeImplicant>,
    targets: Vec<Target>,
    chart: CoveringChart,
    outcome: CoverOutcome,
}

impl OutputReport {
    pub fn new(
        output_ix: usize,
        pis: Vec<PrimeImplicant>,
        targets: Vec<Target>,
        chart: CoveringChart,
        outcome: CoverOutcome,
    ) -> Self {
        Self {
            output_ix,
            pis,
            targets,
            chart,
            outcome,
        }
    }

    #[inline]
    pub fn output_ix(&self) -> usize {
        self.output_ix
    }

    #[inline]
    pub fn pis(&self) -> &[PrimeImplicant] {
        &self.pis
    }

    #[inline]
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    #[inline]
    pub fn chart(&self) -> &CoveringChart {
        &self.chart
    }

    #[inline]
    pub fn outcome(&self) -> &CoverOutcome {
        &self.outcome
    }

    /// The implicants making up the cover, in index order. Empty if uncoverable.
    pub fn cover(&self) -> impl Iterator<Item = &PrimeImplicant> + '_ {
        self.outcome.indexes().iter().map(move |&ix| &self.pis[ix])
    }

    #[inline]
    pub fn chart_display(&self) -> ChartDisplay<'_> {
        self.chart.display(&self.pis)
    }
}

impl fmt::Display for OutputReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "F{}(Minterms: [{}]) → Minimum SOP: ",
            self.output_ix,
            self.targets.iter().join(", ")
        )?;
        match &self.outcome {
            CoverOutcome::Covered(_) => write!(f, "{}", self.cover().join(" + ")),
            CoverOutcome::Uncoverable => write!(f, "{}", NO_COVER_MESSAGE),
        }
    }
}

/// Results for every output in a batch, in input order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    outputs: Vec<OutputReport>,
}

impl Report {
    pub fn new(outputs: Vec<OutputReport>) -> Self {
        Self { outputs }
    }

    #[inline]
    pub fn outputs(&self) -> &[OutputReport] {
        &self.outputs
    }
}

/// One line per output, separated by newlines.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.outputs.iter().join("\n"))
    }
}
