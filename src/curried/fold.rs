//! Folding helpers that complement [`Iterator::fold`].

use crate::error::Error;

/// Folds `sequence` from the right, starting at `seed`.
///
/// Elements are visited from the last to the first, and `function`
/// receives the accumulator first.
///
/// # Examples
///
/// ```
/// use pointfree::curried::{appended, foldr};
///
/// let reversed = foldr(|accumulator: Vec<i32>, value| appended(&accumulator, value), vec![1, 2, 3], Vec::new());
/// assert_eq!(reversed, vec![3, 2, 1]);
/// ```
pub fn foldr<I, A, F>(function: F, sequence: I, seed: A) -> A
where
    I: IntoIterator,
    I::IntoIter: DoubleEndedIterator,
    F: FnMut(A, I::Item) -> A,
{
    sequence.into_iter().rev().fold(seed, function)
}

/// Folds `sequence` from the right, starting at its last element.
///
/// # Errors
///
/// Returns [`Error::EmptySequence`] when `sequence` is empty.
///
/// # Examples
///
/// ```
/// use pointfree::curried::foldr1;
///
/// let subtract = |accumulator: i32, value: i32| accumulator - value;
/// assert_eq!(foldr1(subtract, vec![1, 2, 10]), Ok(7));
/// assert!(foldr1(subtract, Vec::new()).is_err());
/// ```
pub fn foldr1<I, F>(function: F, sequence: I) -> Result<I::Item, Error>
where
    I: IntoIterator,
    I::IntoIter: DoubleEndedIterator,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    sequence
        .into_iter()
        .rev()
        .reduce(function)
        .ok_or(Error::EmptySequence { operation: "foldr1" })
}

/// Folds `sequence` from the left, starting at its first element.
///
/// # Errors
///
/// Returns [`Error::EmptySequence`] when `sequence` is empty.
pub fn fold1<I, F>(function: F, sequence: I) -> Result<I::Item, Error>
where
    I: IntoIterator,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    sequence
        .into_iter()
        .reduce(function)
        .ok_or(Error::EmptySequence { operation: "fold1" })
}

/// Returns a copy of `elements` with `value` appended.
///
/// The input slice is left untouched.
#[must_use]
pub fn appended<T: Clone>(elements: &[T], value: T) -> Vec<T> {
    let mut copy = Vec::with_capacity(elements.len() + 1);
    copy.extend_from_slice(elements);
    copy.push(value);
    copy
}

/// Drives `iterator` to completion, discarding every item.
///
/// Useful for iterators run only for their side effects.
///
/// # Examples
///
/// ```
/// use std::cell::RefCell;
/// use pointfree::curried::exhaust;
///
/// let seen = RefCell::new(Vec::new());
/// exhaust((1..=3).map(|value| seen.borrow_mut().push(value)));
/// assert_eq!(seen.into_inner(), vec![1, 2, 3]);
/// ```
pub fn exhaust<I: IntoIterator>(iterator: I) {
    iterator.into_iter().for_each(drop);
}
