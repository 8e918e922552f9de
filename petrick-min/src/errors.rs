// Copyright (c) The petrick-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Errors returned by strict parsing and bounded covering searches.

use crate::{minterm::Target, solver::SearchLimit};
use std::{error, fmt};

/// A PI expression that strict parsing refused.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    expr: String,
    kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn new(expr: impl Into<String>, kind: ParseErrorKind) -> Self {
        Self {
            expr: expr.into(),
            kind,
        }
    }

    /// The expression text, with whitespace removed.
    #[inline]
    pub fn expr(&self) -> &str {
        &self.expr
    }

    #[inline]
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A character that doesn't name one of the domain variables.
    UnsupportedVariable { symbol: char, position: usize },
    /// A `'` that doesn't follow a variable.
    DanglingComplement { position: usize },
    /// A product term with no literals, e.g. the trailing term in `A+`.
    EmptyProductTerm { term_ix: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::UnsupportedVariable { symbol, position } => write!(
                f,
                "expression `{}`: unsupported variable `{}` at position {}",
                self.expr, symbol, position
            ),
            ParseErrorKind::DanglingComplement { position } => write!(
                f,
                "expression `{}`: `'` at position {} does not follow a variable",
                self.expr, position
            ),
            ParseErrorKind::EmptyProductTerm { term_ix } => write!(
                f,
                "expression `{}`: product term {} is empty",
                self.expr, term_ix
            ),
        }
    }
}

impl error::Error for ParseError {}

/// A minterm token that strict parsing refused.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MintermError {
    NotANumber { token: String },
    OutOfRange { target: Target },
}

impl fmt::Display for MintermError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::NotANumber { token } => write!(f, "minterm `{}` is not a number", token),
            Self::OutOfRange { target } => {
                write!(f, "minterm {} is outside the range 0..=15", target)
            }
        }
    }
}

impl error::Error for MintermError {}

/// Errors returned by [`try_solve`](crate::try_solve).
///
/// An output with no covering combination is not an error: see
/// [`CoverOutcome::Uncoverable`](crate::solver::CoverOutcome::Uncoverable).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveError {
    Parse {
        output_ix: usize,
        source: ParseError,
    },
    Minterm {
        output_ix: usize,
        source: MintermError,
    },
    GroupCountMismatch {
        pi_groups: usize,
        minterm_groups: usize,
    },
    ResourceExceeded {
        output_ix: usize,
        limit: SearchLimit,
    },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Parse { output_ix, .. } => {
                write!(f, "output F{}: invalid prime implicant", output_ix)
            }
            Self::Minterm { output_ix, .. } => {
                write!(f, "output F{}: invalid minterm", output_ix)
            }
            Self::GroupCountMismatch {
                pi_groups,
                minterm_groups,
            } => write!(
                f,
                "{} prime implicant groups but {} minterm groups",
                pi_groups, minterm_groups
            ),
            Self::ResourceExceeded { output_ix, limit } => write!(
                f,
                "output F{}: covering search exceeded {} combinations",
                output_ix,
                limit.max_combinations()
            ),
        }
    }
}

impl error::Error for SolveError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Parse { source, .. } => Some(source),
            Self::Minterm { source, .. } => Some(source),
            Self::GroupCountMismatch { .. } | Self::ResourceExceeded { .. } => None,
        }
    }
}
