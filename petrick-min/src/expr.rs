// Copyright (c) The petrick-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prime implicant expressions in algebraic form, such as `A'B+AC`.

use crate::{
    config::InputPolicy,
    errors::{ParseError, ParseErrorKind},
    literal::Literal,
};
use itertools::Itertools;
use std::{fmt, iter::Peekable, str::CharIndices};

/// A conjunction of literals, kept in the order they were written.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ProductTerm {
    literals: Vec<Literal>,
}

impl ProductTerm {
    pub fn new(literals: impl IntoIterator<Item = Literal>) -> Self {
        Self {
            literals: literals.into_iter().collect(),
        }
    }

    #[inline]
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    /// An empty product term is the empty conjunction, which is always true.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }
}

impl fmt::Display for ProductTerm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for literal in &self.literals {
            write!(f, "{}", literal)?;
        }
        Ok(())
    }
}

/// A disjunction of product terms.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PiExpression {
    terms: Vec<ProductTerm>,
}

impl PiExpression {
    pub fn new(terms: impl IntoIterator<Item = ProductTerm>) -> Self {
        Self {
            terms: terms.into_iter().collect(),
        }
    }

    /// Parses `text` according to `policy`.
    ///
    /// With [`InputPolicy::Lenient`] this never fails.
    pub fn parse(text: &str, policy: InputPolicy) -> Result<Self, ParseError> {
        match policy {
            InputPolicy::Lenient => Ok(Self::parse_lenient(text)),
            InputPolicy::Strict => Self::parse_strict(text),
        }
    }

    /// Parses `text` without checking literals against the domain.
    ///
    /// Whitespace is removed, the rest is split on `+`, and each term is scanned left to right: a
    /// character followed by `'` is a complemented literal, any other character is an asserted
    /// literal.
    pub fn parse_lenient(text: &str) -> Self {
        let compact = compact(text);
        Self::new(
            compact
                .split('+')
                .map(|term| ProductTerm::new(Tokens::new(term).map(|(_, literal)| literal))),
        )
    }

    /// Parses `text`, rejecting unsupported variables, stray `'` characters and empty terms.
    pub fn parse_strict(text: &str) -> Result<Self, ParseError> {
        let compact = compact(text);
        let mut terms = Vec::new();
        let mut offset = 0;

        for (term_ix, term) in compact.split('+').enumerate() {
            if term.is_empty() {
                return Err(ParseError::new(
                    compact,
                    ParseErrorKind::EmptyProductTerm { term_ix },
                ));
            }

            let mut literals = Vec::new();
            for (pos, literal) in Tokens::new(term) {
                let symbol = literal.variable.symbol();
                let position = offset + pos;
                if symbol == '\'' {
                    return Err(ParseError::new(
                        compact,
                        ParseErrorKind::DanglingComplement { position },
                    ));
                }
                if !literal.variable.is_supported() {
                    return Err(ParseError::new(
                        compact,
                        ParseErrorKind::UnsupportedVariable { symbol, position },
                    ));
                }
                literals.push(literal);
            }

            terms.push(ProductTerm::new(literals));
            offset += term.len() + 1;
        }

        Ok(Self::new(terms))
    }

    #[inline]
    pub fn terms(&self) -> &[ProductTerm] {
        &self.terms
    }

    pub fn literal_count(&self) -> usize {
        self.terms.iter().map(|term| term.literals().len()).sum()
    }
}

impl fmt::Display for PiExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.terms.iter().join("+"))
    }
}

fn compact(text: &str) -> String {
    text.chars().filter(|ch| !ch.is_whitespace()).collect()
}

/// Scans one product term into literals, along with the byte offset each one starts at.
struct Tokens<'a> {
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Tokens<'a> {
    fn new(term: &'a str) -> Self {
        Self {
            chars: term.char_indices().peekable(),
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = (usize, Literal);

    fn next(&mut self) -> Option<Self::Item> {
        let (pos, ch) = self.chars.next()?;
        match self.chars.peek() {
            Some((_, '\'')) => {
                self.chars.next();
                Some((pos, Literal::complemented(ch)))
            }
            _ => Some((pos, Literal::asserted(ch))),
        }
    }
}
