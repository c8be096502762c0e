#![cfg(feature = "curried")]
//! Property-based tests for currying, composition and ranking laws.
//!
//! ## Curry Laws
//! - **Equivalence**: `curry3!(f)(a)(b)(c) == f(a, b, c)`, and the same for
//!   the runtime engine
//! - **Reuse**: a partial application gives the same answer however many
//!   sibling continuations were derived from it
//!
//! ## Composition Laws
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Identity**: `pipe!(identity, f) == f == pipe!(f, identity)`
//! - **Order**: `pipe!(f, g)(x) == g(f(x))`
//!
//! ## Ranking Laws
//! - **Argsort**: indexing by `argsort(xs)` yields the stable sort of `xs`
//! - **Flip**: `flip(flip(f)) == f`

use pointfree::compose::{Curried, Step, curry, flip, identity};
use pointfree::curried::{argsort, argsort_by, argsort_by_key, reduce, sort_by};
use pointfree::{compose, curry3, pipe};
use proptest::prelude::*;

fn combine(first: i32, second: i32, third: i32) -> i32 {
    first.wrapping_mul(31).wrapping_add(second).wrapping_sub(third)
}

fn next<F, M>(curried: &Curried<F, i32, M>, argument: i32) -> Curried<F, i32, M>
where
    F: pointfree::compose::Callable<i32, M>,
{
    match curried.apply(argument) {
        Ok(Step::Partial(next)) => next,
        _ => panic!("expected a partial application"),
    }
}

fn finish<F, M>(curried: &Curried<F, i32, M>, argument: i32) -> F::Output
where
    F: pointfree::compose::Callable<i32, M>,
{
    match curried.apply(argument) {
        Ok(Step::Complete(output)) => output,
        _ => panic!("expected a value"),
    }
}

// =============================================================================
// Curry Laws
// =============================================================================

proptest! {
    /// Equivalence: every curried form agrees with the direct call
    #[test]
    fn prop_curry_equivalence(a in any::<i32>(), b in any::<i32>(), c in any::<i32>()) {
        let expected = combine(a, b, c);

        prop_assert_eq!(curry3!(combine)(a)(b)(c), expected);

        let engine = curry(combine).unwrap();
        prop_assert_eq!(finish(&next(&next(&engine, a), b), c), expected);
    }

    /// Reuse: sibling continuations never leak into each other
    #[test]
    fn prop_partial_reuse_is_independent(
        a in any::<i32>(),
        siblings in prop::collection::vec(any::<i32>(), 1..8),
        last in any::<i32>(),
    ) {
        let engine = curry(combine).unwrap();
        let with_a = next(&engine, a);
        let macro_with_a = curry3!(combine)(a);

        for &sibling in &siblings {
            prop_assert_eq!(finish(&next(&with_a, sibling), last), combine(a, sibling, last));
            prop_assert_eq!(macro_with_a(sibling)(last), combine(a, sibling, last));
        }
        prop_assert_eq!(with_a.applied(), 1);
    }
}

// =============================================================================
// Composition Laws
// =============================================================================

proptest! {
    /// Associativity: compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)
    #[test]
    fn prop_compose_associativity(x in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);
        let function3 = |n: i32| n.wrapping_sub(3);

        let inner_right = compose!(function2, function3);
        let left_associative = compose!(function1, inner_right);

        let inner_left = compose!(function1, function2);
        let right_associative = compose!(inner_left, function3);

        prop_assert_eq!(left_associative(x), right_associative(x));
    }

    /// Identity: pipe!(identity, f) == f == pipe!(f, identity)
    #[test]
    fn prop_pipe_identity(x in any::<i64>()) {
        let function = |n: i64| n.wrapping_mul(7);

        prop_assert_eq!(pipe!(identity, function)(x), function(x));
        prop_assert_eq!(pipe!(function, identity)(x), function(x));
    }

    /// Order: pipe!(f, g)(x) == g(f(x)) == compose!(g, f)(x)
    #[test]
    fn prop_pipe_order(x in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        prop_assert_eq!(pipe!(function1, function2)(x), function2(function1(x)));
        prop_assert_eq!(pipe!(function1, function2)(x), compose!(function2, function1)(x));
    }

    /// Flip: flip(flip(f)) == f
    #[test]
    fn prop_double_flip(a in any::<i32>(), b in any::<i32>()) {
        let subtract = |x: i32, y: i32| x.wrapping_sub(y);
        prop_assert_eq!(flip(flip(subtract))(a, b), subtract(a, b));
        prop_assert_eq!(flip(subtract)(a, b), subtract(b, a));
    }
}

// =============================================================================
// Ranking Laws
// =============================================================================

proptest! {
    /// Indexing by argsort yields the sorted sequence
    #[test]
    fn prop_argsort_sorts(values in prop::collection::vec(any::<i16>(), 0..64)) {
        let ranked: Vec<i16> = argsort(&values).into_iter().map(|index| values[index]).collect();
        let mut sorted = values.clone();
        sorted.sort_unstable();

        prop_assert_eq!(ranked, sorted);
    }

    /// Argsort is stable and agrees with sort_by
    #[test]
    fn prop_argsort_by_is_stable(pairs in prop::collection::vec((0u8..4, any::<u32>()), 0..64)) {
        let ranked: Vec<(u8, u32)> = argsort_by_key(&pairs, |pair| pair.0)
            .into_iter()
            .map(|index| pairs[index])
            .collect();
        let mut stable = pairs.clone();
        stable.sort_by_key(|pair| pair.0);

        prop_assert_eq!(&ranked, &stable);
        prop_assert_eq!(&sort_by(|pair: &(u8, u32)| pair.0)(pairs.clone()), &stable);

        let indices = argsort_by(|pair: &(u8, u32)| pair.0)(pairs.clone());
        prop_assert_eq!(indices, argsort_by_key(&pairs, |pair| pair.0));
    }

    /// A seed of zero never changes a sum
    #[test]
    fn prop_reduce_zero_seed(values in prop::collection::vec(-1000i64..1000, 1..32)) {
        let sum = reduce(|accumulator: i64, value: i64| accumulator + value);
        let total = sum(values.clone());

        prop_assert_eq!(total(None), total(Some(0)));
        prop_assert_eq!(total(None), Ok(values.iter().sum::<i64>()));
    }
}
