// Copyright (c) The petrick-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::solver::SearchLimit;

/// How input that falls outside the grammar or the domain is treated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputPolicy {
    /// Unsupported variables never match, non-numeric minterms are dropped, minterms above 15 are
    /// kept as uncoverable targets, and unpaired groups are ignored.
    Lenient,

    /// Every one of the cases above is an error.
    Strict,
}

impl Default for InputPolicy {
    fn default() -> Self {
        Self::Lenient
    }
}

/// Options for [`try_solve`](crate::try_solve).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SolveConfig {
    pub policy: InputPolicy,
    pub search_limit: Option<SearchLimit>,
}

impl SolveConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(mut self, policy: InputPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_search_limit(mut self, limit: SearchLimit) -> Self {
        self.search_limit = Some(limit);
        self
    }
}
