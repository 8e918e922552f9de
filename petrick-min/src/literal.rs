// Copyright (c) The petrick-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt;

/// Number of variables in the domain.
pub const VARIABLE_COUNT: usize = 4;

/// Number of distinct minterms over the domain.
pub const MINTERM_COUNT: usize = 1 << VARIABLE_COUNT;

/// The domain variables, most significant bit first.
pub const DOMAIN: [Variable; VARIABLE_COUNT] = [
    Variable('A'),
    Variable('B'),
    Variable('C'),
    Variable('D'),
];

/// A single-character variable name.
///
/// Parsing accepts any character as a variable. Only the four characters in
/// [`DOMAIN`] have an index; every other variable is unsupported and never
/// matches an assignment.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable(char);

impl Variable {
    #[inline]
    pub const fn new(symbol: char) -> Self {
        Self(symbol)
    }

    #[inline]
    pub const fn symbol(self) -> char {
        self.0
    }

    /// Returns the position of this variable in [`DOMAIN`], if it is part of it.
    pub fn domain_ix(self) -> Option<usize> {
        DOMAIN.iter().position(|&v| v == self)
    }

    #[inline]
    pub fn is_supported(self) -> bool {
        self.domain_ix().is_some()
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Polarity {
    Asserted,
    Complemented,
}

impl Polarity {
    /// The polarity a variable has when its bit is `value`.
    #[inline]
    pub fn from_bit(value: bool) -> Self {
        match value {
            true => Self::Asserted,
            false => Self::Complemented,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    pub variable: Variable,
    pub polarity: Polarity,
}

impl Literal {
    #[inline]
    pub const fn asserted(symbol: char) -> Self {
        Self {
            variable: Variable::new(symbol),
            polarity: Polarity::Asserted,
        }
    }

    #[inline]
    pub const fn complemented(symbol: char) -> Self {
        Self {
            variable: Variable::new(symbol),
            polarity: Polarity::Complemented,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.polarity {
            Polarity::Asserted => write!(f, "{}", self.variable),
            Polarity::Complemented => write!(f, "{}'", self.variable),
        }
    }
}
