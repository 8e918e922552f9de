// Copyright (c) The petrick-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{config::InputPolicy, errors::ParseError, expr::PiExpression, minterm::MintermSet};
use once_cell::sync::OnceCell;
use std::fmt;

/// A candidate prime implicant: its source text, its parsed form, and the minterms it covers.
#[derive(Clone, Debug)]
pub struct PrimeImplicant {
    text: String,
    expr: PiExpression,
    covered: OnceCell<MintermSet>,
}

impl PrimeImplicant {
    pub fn parse(text: &str, policy: InputPolicy) -> Result<Self, ParseError> {
        let expr = PiExpression::parse(text, policy)?;
        Ok(Self::new(text, expr))
    }

    pub fn new(text: impl Into<String>, expr: PiExpression) -> Self {
        Self {
            text: text.into(),
            expr,
            covered: OnceCell::new(),
        }
    }

    /// The text this implicant was parsed from, trimmed. This is what reports print.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn expr(&self) -> &PiExpression {
        &self.expr
    }

    /// The minterms covered by this implicant, computed on first use.
    #[inline]
    pub fn covered(&self) -> &MintermSet {
        self.covered.get_or_init(|| self.expr.covered_minterms())
    }
}

impl PartialEq for PrimeImplicant {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text && self.expr == other.expr
    }
}

impl Eq for PrimeImplicant {}

impl fmt::Display for PrimeImplicant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
