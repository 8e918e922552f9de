// Copyright (c) The petrick-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::implicant::PrimeImplicant;
use itertools::{Itertools, Position};
use std::{borrow::Cow, collections::BTreeMap, fmt};

/// Maps each target minterm to the indexes of the prime implicants covering it.
///
/// Index lists are ascending. An empty list means nothing in the implicant list covers that
/// minterm.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CoveringChart {
    entries: BTreeMap<u32, Vec<usize>>,
}

impl CoveringChart {
    pub fn build(pis: &[PrimeImplicant], targets: &[u32]) -> Self {
        let mut entries: BTreeMap<u32, Vec<usize>> =
            targets.iter().map(|&m| (m, Vec::new())).collect();
        for (pi_ix, pi) in pis.iter().enumerate() {
            for (&minterm, covering) in entries.iter_mut() {
                if pi.covered().contains(minterm) {
                    covering.push(pi_ix);
                }
            }
        }
        Self { entries }
    }

    /// Returns the implicants covering `minterm`, or `None` if it isn't a target.
    #[inline]
    pub fn covering(&self, minterm: u32) -> Option<&[usize]> {
        self.entries.get(&minterm).map(|v| v.as_slice())
    }

    /// Iterates over target minterms in ascending order.
    pub fn minterms(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.keys().copied()
    }

    pub fn entries(&self) -> impl Iterator<Item = (u32, &[usize])> + '_ {
        self.entries.iter().map(|(&m, v)| (m, v.as_slice()))
    }

    /// Target minterms that no implicant covers.
    pub fn uncoverable(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries
            .iter()
            .filter_map(|(&m, v)| v.is_empty().then(|| m))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn display<'a>(&'a self, pis: &'a [PrimeImplicant]) -> ChartDisplay<'a> {
        ChartDisplay::new(self, pis)
    }
}

/// Displays a chart one target minterm per row, followed by the implicants covering it.
#[derive(Clone, Debug)]
pub struct ChartDisplay<'a> {
    chart: &'a CoveringChart,
    pis: &'a [PrimeImplicant],
    row_separator: (Cow<'a, str>, bool),
}

impl<'a> ChartDisplay<'a> {
    pub fn new(chart: &'a CoveringChart, pis: &'a [PrimeImplicant]) -> Self {
        Self {
            chart,
            pis,
            row_separator: (Cow::Borrowed("\n"), true),
        }
    }

    pub fn with_row_separator(
        mut self,
        separator: impl Into<Cow<'a, str>>,
        print_last: bool,
    ) -> Self {
        self.row_separator = (separator.into(), print_last);
        self
    }
}

impl<'a> fmt::Display for ChartDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (separator, print_last) = &self.row_separator;
        for row in self.chart.entries().with_position() {
            let is_last = matches!(row, Position::Last(_) | Position::Only(_));
            let (minterm, covering) = row.into_inner();
            write!(f, "{:>2} |", minterm)?;
            if covering.is_empty() {
                write!(f, " (none)")?;
            }
            for &pi_ix in covering {
                write!(f, " {}:{}", pi_ix, self.pis[pi_ix])?;
            }
            if *print_last || !is_last {
                write!(f, "{}", separator)?;
            }
        }
        Ok(())
    }
}
