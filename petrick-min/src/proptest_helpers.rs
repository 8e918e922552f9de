// Copyright (c) The petrick-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    batch::OutputProblem,
    expr::{PiExpression, ProductTerm},
    implicant::PrimeImplicant,
    literal::{Literal, Polarity, DOMAIN, MINTERM_COUNT},
    minterm::Target,
};
use proptest::prelude::*;

impl Arbitrary for Literal {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        // Only variables in the domain, so that every generated literal can match.
        (prop::sample::select(DOMAIN.to_vec()), any::<bool>())
            .prop_map(|(variable, bit)| Literal {
                variable,
                polarity: Polarity::from_bit(bit),
            })
            .boxed()
    }
}

impl Arbitrary for ProductTerm {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        // Between 1 and 4 literals. Repeated and contradictory literals are allowed.
        prop::collection::vec(any::<Literal>(), 1..=4)
            .prop_map(ProductTerm::new)
            .boxed()
    }
}

impl Arbitrary for PiExpression {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop::collection::vec(any::<ProductTerm>(), 1..=3)
            .prop_map(PiExpression::new)
            .boxed()
    }
}

impl Arbitrary for OutputProblem {
    /// Maximum number of prime implicants and maximum number of targets.
    type Parameters = Option<(usize, usize)>;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
        let (max_pis, max_targets) = params.unwrap_or((6, 6));
        let pis = prop::collection::vec(any::<PiExpression>(), 1..=max_pis.max(1));
        let targets = prop::collection::vec(
            (0..MINTERM_COUNT as u32).prop_map(Target::from),
            1..=max_targets.max(1),
        );
        (pis, targets)
            .prop_map(|(exprs, targets)| {
                let pis = exprs
                    .into_iter()
                    .map(|expr| PrimeImplicant::new(expr.to_string(), expr))
                    .collect();
                OutputProblem::new(pis, targets)
            })
            .boxed()
    }
}
