//! Tests for the curried combinator set, argsort and the folding helpers.

#![cfg(feature = "curried")]

use pointfree::Error;
use pointfree::curried::{
    appended, argsort, argsort_by, argsort_by_key, argsort_with, ends_with, eq, exhaust, filter,
    fold1, foldr, foldr1, gt, gte, lt, lte, map, not_eq, reduce, sort_by, starts_with,
};
use pointfree::pipe;
use rstest::rstest;

// =============================================================================
// Predicates
// =============================================================================

#[rstest]
fn test_predicates_as_filters() {
    let values = vec![1, 2, 3, 4, 5];
    let count = |predicate: &dyn Fn(&i32) -> bool| values.iter().filter(|value| predicate(value)).count();

    assert_eq!(count(&eq(3)), 1);
    assert_eq!(count(&not_eq(3)), 4);
    assert_eq!(count(&lt(3)), 2);
    assert_eq!(count(&lte(3)), 3);
    assert_eq!(count(&gt(3)), 2);
    assert_eq!(count(&gte(3)), 3);
}

#[rstest]
fn test_string_predicates() {
    let files = vec!["main.rs", "lib.rs", "Cargo.toml", "README.md"];

    let rust: Vec<&str> = files.iter().copied().filter(ends_with(".rs")).collect();
    let capitalised: Vec<&str> = files.iter().copied().filter(starts_with("C")).collect();

    assert_eq!(rust, vec!["main.rs", "lib.rs"]);
    assert_eq!(capitalised, vec!["Cargo.toml"]);
}

// =============================================================================
// map / filter / reduce
// =============================================================================

#[rstest]
fn test_map_can_be_applied_to_many_sequences() {
    let square = map(|value: i32| value * value);

    assert_eq!(square(vec![1, 2, 3]).collect::<Vec<_>>(), vec![1, 4, 9]);
    assert_eq!(square(vec![4]).collect::<Vec<_>>(), vec![16]);
    assert_eq!(square(Vec::new()).count(), 0);
}

#[rstest]
fn test_filter_with_curried_predicate() {
    let positives = filter(gt(0));
    assert_eq!(positives(vec![-2, 5, 0, 7]).collect::<Vec<_>>(), vec![5, 7]);
}

#[rstest]
fn test_map_over_ranges() {
    let shifted = map(|value: u8| value + 1);
    assert_eq!(shifted(0..3).collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[rstest]
#[case(None, Ok(6))]
#[case(Some(0), Ok(6))]
#[case(Some(1), Ok(7))]
fn test_reduce_seeds(#[case] seed: Option<i32>, #[case] expected: Result<i32, Error>) {
    let sum = reduce(|accumulator: i32, value: i32| accumulator + value);
    assert_eq!(sum(vec![1, 2, 3])(seed), expected);
}

#[rstest]
fn test_reduce_on_empty_sequence_without_seed() {
    let product = reduce(|accumulator: i32, value: i32| accumulator * value);
    let error = product(Vec::new())(None).unwrap_err();

    assert!(error.is_empty_sequence());
    assert_eq!(error.to_string(), "reduce of an empty sequence with no initial value");
}

#[rstest]
fn test_reduce_over_strings() {
    let joined = reduce(|accumulator: String, value: String| format!("{accumulator},{value}"));
    let words = vec!["a".to_string(), "b".to_string(), "c".to_string()];

    assert_eq!(joined(words.clone())(None), Ok("a,b,c".to_string()));
    assert_eq!(joined(words)(Some(">".to_string())), Ok(">,a,b,c".to_string()));
}

#[rstest]
fn test_combinators_inside_pipe() {
    let evens_squared = pipe!(
        filter(|value: &i32| value % 2 == 0),
        map(|value: i32| value * value)
    );
    assert_eq!(evens_squared(vec![1, 2, 3, 4]).collect::<Vec<_>>(), vec![4, 16]);
    assert_eq!(evens_squared(vec![6]).collect::<Vec<_>>(), vec![36]);
}

// =============================================================================
// sort_by / argsort
// =============================================================================

#[rstest]
fn test_sort_by_second_component() {
    let by_second = sort_by(|pair: &(i32, i32)| pair.1);
    assert_eq!(
        by_second(vec![(5, 6), (1, 2), (3, 4)]),
        vec![(1, 2), (3, 4), (5, 6)]
    );
}

#[rstest]
fn test_argsort_by_second_component() {
    let by_second = argsort_by(|pair: &(i32, i32)| pair.1);
    assert_eq!(by_second(vec![(5, 6), (1, 2), (3, 4)]), vec![1, 2, 0]);
}

#[rstest]
#[case(vec![49, 52, 31], vec![2, 0, 1])]
#[case(vec![], vec![])]
#[case(vec![7, 7, 7], vec![0, 1, 2])]
fn test_argsort(#[case] values: Vec<i32>, #[case] expected: Vec<usize>) {
    assert_eq!(argsort(&values), expected);
}

#[rstest]
fn test_argsort_with_negated_key() {
    assert_eq!(argsort_by_key(&[49, 52, 31], |value: &i32| -value), vec![1, 0, 2]);
}

#[rstest]
fn test_argsort_with_comparator_on_floats() {
    let values = [0.5_f64, -2.0, 3.25, 0.0];
    assert_eq!(argsort_with(&values, f64::total_cmp), vec![1, 3, 0, 2]);
    assert_eq!(
        argsort_with(&values, |left, right| right.total_cmp(left)),
        vec![2, 0, 3, 1]
    );
}

// =============================================================================
// Folding helpers
// =============================================================================

#[rstest]
fn test_foldr_with_appended_reverses() {
    let reversed = foldr(
        |accumulator: Vec<i32>, value| appended(&accumulator, value),
        vec![1, 2, 3],
        Vec::new(),
    );
    assert_eq!(reversed, vec![3, 2, 1]);
}

#[rstest]
fn test_seedless_folds() {
    let concat = |accumulator: String, value: String| accumulator + &value;
    let parts = || vec!["a".to_string(), "b".to_string(), "c".to_string()];

    assert_eq!(fold1(concat, parts()), Ok("abc".to_string()));
    assert_eq!(foldr1(concat, parts()), Ok("cba".to_string()));
    assert!(fold1(concat, Vec::<String>::new()).unwrap_err().is_empty_sequence());
}

#[rstest]
fn test_exhaust_runs_side_effects() {
    let mut total = 0;
    exhaust(vec![1, 2, 3].into_iter().map(|value| total += value));
    assert_eq!(total, 6);
}
