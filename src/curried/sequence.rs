//! Curried sequence operations.

use std::iter::{Filter, Map};

use super::argsort::argsort_by_key;
use super::fold::fold1;
use crate::error::Error;

/// `map(f)(sequence)` lazily applies `f` to every element.
///
/// Nothing runs until the returned iterator is consumed. The curried
/// function itself can be applied to any number of sequences.
///
/// # Examples
///
/// ```
/// use pointfree::curried::map;
///
/// let lengths = map(|word: &str| word.len());
/// assert_eq!(lengths(vec!["a", "bcd"]).collect::<Vec<_>>(), vec![1, 3]);
/// assert_eq!(lengths(vec![]).count(), 0);
/// ```
pub fn map<I, B, F>(function: F) -> impl Fn(I) -> Map<I::IntoIter, F>
where
    I: IntoIterator,
    F: Fn(I::Item) -> B + Clone,
{
    move |sequence| sequence.into_iter().map(function.clone())
}

/// `filter(predicate)(sequence)` lazily keeps the elements `predicate`
/// accepts.
///
/// # Examples
///
/// ```
/// use pointfree::curried::{filter, gt};
///
/// let positive = filter(gt(0));
/// assert_eq!(positive(vec![-1, 2, 0, 3]).collect::<Vec<_>>(), vec![2, 3]);
/// ```
pub fn filter<I, F>(predicate: F) -> impl Fn(I) -> Filter<I::IntoIter, F>
where
    I: IntoIterator,
    F: Fn(&I::Item) -> bool + Clone,
{
    move |sequence| sequence.into_iter().filter(predicate.clone())
}

/// `reduce(f)(sequence)(seed)` folds `sequence` from the left.
///
/// - `seed == None`: the first element is the starting value; an empty
///   sequence is an [`Error::EmptySequence`].
/// - `seed == Some(initial)`: folding starts from `initial`, whatever its
///   value, and an empty sequence yields `initial`.
///
/// The sequence is cloned for each call of the innermost function, so the
/// function of the seed can be called repeatedly. That function is boxed,
/// which lets it be stored next to steps built from other sequences.
///
/// # Examples
///
/// ```
/// use pointfree::curried::reduce;
///
/// let sum = reduce(|accumulator: i32, value: i32| accumulator + value);
/// let sum_123 = sum(vec![1, 2, 3]);
///
/// assert_eq!(sum_123(None), Ok(6));
/// assert_eq!(sum_123(Some(0)), Ok(6));
/// assert_eq!(sum_123(Some(1)), Ok(7));
/// assert!(sum(Vec::new())(None).is_err());
/// ```
pub fn reduce<'a, I, T, F>(
    function: F,
) -> impl Fn(I) -> Box<dyn Fn(Option<T>) -> Result<T, Error> + 'a>
where
    I: IntoIterator<Item = T> + Clone + 'a,
    F: Fn(T, T) -> T + Clone + 'a,
{
    move |sequence| {
        let function = function.clone();
        let step: Box<dyn Fn(Option<T>) -> Result<T, Error> + 'a> =
            Box::new(move |seed: Option<T>| match seed {
                Some(initial) => Ok(sequence.clone().into_iter().fold(initial, &function)),
                None => fold1(&function, sequence.clone()).map_err(|_| Error::EmptySequence {
                    operation: "reduce",
                }),
            });
        step
    }
}

/// `sort_by(key)(sequence)` collects `sequence` sorted ascending by `key`.
///
/// The sort is stable: elements with equal keys keep their input order.
///
/// # Examples
///
/// ```
/// use pointfree::curried::sort_by;
///
/// let by_second = sort_by(|pair: &(i32, i32)| pair.1);
/// assert_eq!(by_second(vec![(5, 6), (1, 2), (3, 4)]), vec![(1, 2), (3, 4), (5, 6)]);
/// ```
pub fn sort_by<I, K, F>(key: F) -> impl Fn(I) -> Vec<I::Item>
where
    I: IntoIterator,
    K: Ord,
    F: Fn(&I::Item) -> K,
{
    move |sequence| {
        let mut elements: Vec<I::Item> = sequence.into_iter().collect();
        elements.sort_by_cached_key(&key);
        elements
    }
}

/// `argsort_by(key)(sequence)` returns the indices that sort `sequence`
/// ascending by `key`.
///
/// # Examples
///
/// ```
/// use pointfree::curried::argsort_by;
///
/// let by_second = argsort_by(|pair: &(i32, i32)| pair.1);
/// assert_eq!(by_second(vec![(5, 6), (1, 2), (3, 4)]), vec![1, 2, 0]);
/// ```
pub fn argsort_by<I, K, F>(key: F) -> impl Fn(I) -> Vec<usize>
where
    I: IntoIterator,
    K: Ord,
    F: Fn(&I::Item) -> K,
{
    move |sequence| {
        let elements: Vec<I::Item> = sequence.into_iter().collect();
        argsort_by_key(&elements, &key)
    }
}
