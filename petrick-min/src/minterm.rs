// Copyright (c) The petrick-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    expr::{PiExpression, ProductTerm},
    literal::{Literal, Polarity, DOMAIN, MINTERM_COUNT, VARIABLE_COUNT},
};
use arrayvec::ArrayVec;
use bitvec::prelude::*;
use itertools::Itertools;
use std::{fmt, hash};

type MintermBits = BitArray<[u16; 1], Lsb0>;

/// A set of minterms over the 4-variable domain.
///
/// Minterm `m` is stored at bit `m`; values outside `0..16` are never members.
#[derive(Copy, Clone)]
pub struct MintermSet {
    bits: MintermBits,
}

impl MintermSet {
    #[inline]
    pub fn new() -> Self {
        Self {
            bits: MintermBits::new([0]),
        }
    }

    /// The set of every minterm in the domain.
    pub fn full() -> Self {
        (0..MINTERM_COUNT as u32).collect()
    }

    /// Adds `minterm` to the set.
    ///
    /// Panics if `minterm` is not in the domain.
    pub fn insert(&mut self, minterm: u32) {
        assert!(
            (minterm as usize) < MINTERM_COUNT,
            "minterm {} must be in range 0..{}",
            minterm,
            MINTERM_COUNT
        );
        self.bits.set(minterm as usize, true);
    }

    #[inline]
    pub fn contains(&self, minterm: u32) -> bool {
        (minterm as usize) < MINTERM_COUNT && self.bits[minterm as usize]
    }

    pub fn contains_all<'a>(&self, minterms: impl IntoIterator<Item = &'a u32>) -> bool {
        minterms.into_iter().all(|&m| self.contains(m))
    }

    pub fn union(&self, other: &Self) -> Self {
        let mut res = *self;
        for ix in other.bits.iter_ones() {
            res.bits.set(ix, true);
        }
        res
    }

    #[inline]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.iter().all(|m| other.contains(m))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Iterates over members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.bits.iter_ones().map(|ix| ix as u32)
    }

    #[inline]
    fn raw(&self) -> u16 {
        self.bits.into_inner()[0]
    }
}

impl Default for MintermSet {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for MintermSet {
    fn eq(&self, other: &Self) -> bool {
        self.raw() == other.raw()
    }
}

impl Eq for MintermSet {}

impl hash::Hash for MintermSet {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.raw().hash(state);
    }
}

impl FromIterator<u32> for MintermSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let mut set = Self::new();
        for minterm in iter {
            set.insert(minterm);
        }
        set
    }
}

impl fmt::Debug for MintermSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for MintermSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}]", self.iter().join(", "))
    }
}

/// A target minterm as given in minterm text.
///
/// Any run of ASCII digits is a target, however large. Values that don't fit in a `u32` keep
/// their digits for display and are treated as `u32::MAX`, which no implicant covers.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Target {
    value: u32,
    overflow_digits: Option<Box<str>>,
}

impl Target {
    /// Parses a non-empty run of ASCII digits, returning `None` for anything else.
    pub fn parse_digits(token: &str) -> Option<Self> {
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let target = match token.parse::<u32>() {
            Ok(value) => Self::from(value),
            Err(_) => Self {
                value: u32::MAX,
                overflow_digits: Some(token.trim_start_matches('0').into()),
            },
        };
        Some(target)
    }

    /// The value used for covering. Saturates at `u32::MAX`.
    #[inline]
    pub fn value(&self) -> u32 {
        self.value
    }

    #[inline]
    pub fn is_in_domain(&self) -> bool {
        (self.value as usize) < MINTERM_COUNT
    }
}

impl From<u32> for Target {
    fn from(value: u32) -> Self {
        Self {
            value,
            overflow_digits: None,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.overflow_digits {
            Some(digits) => write!(f, "{}", digits),
            None => write!(f, "{}", self.value),
        }
    }
}

/// One complete assignment of the domain variables, as the set of literals it makes true.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    minterm: u32,
    literals: ArrayVec<Literal, VARIABLE_COUNT>,
}

impl Assignment {
    /// Decodes `minterm`, reading the first domain variable from the most significant bit.
    pub fn from_minterm(minterm: u32) -> Self {
        debug_assert!((minterm as usize) < MINTERM_COUNT);
        let literals = DOMAIN
            .iter()
            .enumerate()
            .map(|(ix, &variable)| {
                let bit = (minterm >> (VARIABLE_COUNT - 1 - ix)) & 1 == 1;
                Literal {
                    variable,
                    polarity: Polarity::from_bit(bit),
                }
            })
            .collect();
        Self { minterm, literals }
    }

    /// All 16 assignments, in minterm order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..MINTERM_COUNT as u32).map(Self::from_minterm)
    }

    #[inline]
    pub fn minterm(&self) -> u32 {
        self.minterm
    }

    #[inline]
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    #[inline]
    pub fn contains(&self, literal: &Literal) -> bool {
        self.literals.contains(literal)
    }

    /// A term matches if every one of its literals is made true by this assignment.
    pub fn satisfies_term(&self, term: &ProductTerm) -> bool {
        term.literals().iter().all(|literal| self.contains(literal))
    }

    pub fn satisfies(&self, expr: &PiExpression) -> bool {
        expr.terms().iter().any(|term| self.satisfies_term(term))
    }
}

impl PiExpression {
    /// Returns the minterms this expression covers.
    ///
    /// Literals over variables outside the domain never appear in an assignment, so a term
    /// containing one covers nothing.
    pub fn covered_minterms(&self) -> MintermSet {
        Assignment::all()
            .filter(|assignment| assignment.satisfies(self))
            .map(|assignment| assignment.minterm())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn covered(text: &str) -> Vec<u32> {
        PiExpression::parse_lenient(text)
            .covered_minterms()
            .iter()
            .collect()
    }

    #[test]
    fn test_assignment() {
        let assignment = Assignment::from_minterm(0b1010);
        assert_eq!(
            assignment.literals(),
            &[
                Literal::asserted('A'),
                Literal::complemented('B'),
                Literal::asserted('C'),
                Literal::complemented('D'),
            ]
        );
        assert_eq!(Assignment::all().count(), 16);
    }

    #[test]
    fn test_covered_minterms() {
        // A = 0, B = 1, anything for C and D.
        assert_eq!(covered("A'B"), vec![4, 5, 6, 7]);
        assert_eq!(covered("AB"), vec![12, 13, 14, 15]);
        assert_eq!(covered("A'C"), vec![2, 3, 6, 7]);
        assert_eq!(covered("A'B'C'D'"), vec![0]);
        assert_eq!(covered("AB'CD + A'BC'D'"), vec![4, 11]);
        assert_eq!(covered("D"), vec![1, 3, 5, 7, 9, 11, 13, 15]);
    }

    #[test]
    fn test_contradictions_and_tautologies() {
        assert!(covered("AA'").is_empty());
        assert_eq!(covered("A + A'"), (0..16).collect::<Vec<_>>());
        assert_eq!(
            PiExpression::parse_lenient("").covered_minterms(),
            MintermSet::full(),
            "the empty term is always true"
        );
    }

    #[test]
    fn test_unsupported_variables_never_match() {
        assert!(covered("AE").is_empty());
        assert!(covered("a").is_empty(), "lowercase is outside the domain");
        assert_eq!(covered("AE + B'C'D'"), vec![0, 8]);
    }

    #[test]
    fn test_minterm_set() {
        let mut set = MintermSet::new();
        assert!(set.is_empty());
        set.insert(3);
        set.insert(15);
        assert_eq!(set.len(), 2);
        assert!(set.contains(3));
        assert!(!set.contains(4));
        assert!(!set.contains(16), "values outside the domain are never members");
        assert!(set.contains_all(&[3, 15]));
        assert_eq!(set.to_string(), "[3, 15]");

        let other: MintermSet = [0, 3].into_iter().collect();
        let union = set.union(&other);
        assert_eq!(union.iter().collect::<Vec<_>>(), vec![0, 3, 15]);
        assert!(set.is_subset(&union));
        assert!(!union.is_subset(&set));
    }

    #[test]
    fn test_target_parse_digits() {
        let target = Target::parse_digits("007").unwrap();
        assert_eq!(target, Target::from(7));
        assert_eq!(target.to_string(), "7");
        assert!(target.is_in_domain());

        let target = Target::parse_digits("099999999999").unwrap();
        assert_eq!(target.value(), u32::MAX);
        assert_eq!(target.to_string(), "99999999999", "overflowing targets keep their digits");
        assert!(!target.is_in_domain());

        assert_eq!(Target::parse_digits("4294967295").unwrap().to_string(), "4294967295");
        for token in ["", "x", "-2", "+4", "1.0", "３"] {
            assert_eq!(Target::parse_digits(token), None, "{:?} is not a target", token);
        }
    }

    proptest! {
        #[test]
        fn proptest_covered_in_domain(expr: PiExpression) {
            let covered = expr.covered_minterms();
            prop_assert!(covered.iter().all(|m| m < 16));
            prop_assert!(covered.is_subset(&MintermSet::full()));
        }

        #[test]
        fn proptest_order_invariant(expr: PiExpression) {
            let reordered = PiExpression::new(expr.terms().iter().rev().map(|term| {
                ProductTerm::new(term.literals().iter().rev().copied())
            }));
            prop_assert_eq!(
                expr.covered_minterms(),
                reordered.covered_minterms(),
                "reordering literals and terms keeps the covered set"
            );
        }

        #[test]
        fn proptest_matches_truth_table(expr in any::<PiExpression>(), minterm in 0_u32..16) {
            // Evaluate directly from the bits, independent of assignment literal sets.
            let value = |symbol: char| {
                let ix = DOMAIN.iter().position(|v| v.symbol() == symbol).unwrap();
                (minterm >> (3 - ix)) & 1 == 1
            };
            let expected = expr.terms().iter().any(|term| {
                term.literals().iter().all(|literal| {
                    value(literal.variable.symbol()) == (literal.polarity == Polarity::Asserted)
                })
            });
            prop_assert_eq!(expr.covered_minterms().contains(minterm), expected);
        }
    }
}
