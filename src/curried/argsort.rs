//! Index ranking.
//!
//! Every variant is stable: indices of equal elements stay in ascending
//! order. Keys are computed exactly once per element.

use std::cmp::Ordering;

/// Returns the indices that would sort `elements` ascending.
///
/// # Examples
///
/// ```
/// use pointfree::curried::argsort;
///
/// assert_eq!(argsort(&[49, 52, 31]), vec![2, 0, 1]);
/// assert!(argsort::<i32>(&[]).is_empty());
/// ```
#[must_use]
pub fn argsort<T: Ord>(elements: &[T]) -> Vec<usize> {
    argsort_with(elements, T::cmp)
}

/// Returns the indices that would sort `elements` ascending by `key`.
///
/// # Examples
///
/// ```
/// use pointfree::curried::argsort_by_key;
///
/// assert_eq!(argsort_by_key(&[49, 52, 31], |value: &i32| -value), vec![1, 0, 2]);
/// ```
pub fn argsort_by_key<T, K, F>(elements: &[T], key: F) -> Vec<usize>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut ranked: Vec<(K, usize)> = elements
        .iter()
        .enumerate()
        .map(|(index, element)| (key(element), index))
        .collect();
    ranked.sort_by(|(left, _), (right, _)| left.cmp(right));
    ranked.into_iter().map(|(_, index)| index).collect()
}

/// Returns the indices that would sort `elements` according to `compare`.
///
/// Handy for types without a total order:
///
/// ```
/// use pointfree::curried::argsort_with;
///
/// let readings = [2.5_f64, -1.0, 0.0];
/// assert_eq!(argsort_with(&readings, f64::total_cmp), vec![1, 2, 0]);
/// ```
pub fn argsort_with<T, F>(elements: &[T], compare: F) -> Vec<usize>
where
    F: Fn(&T, &T) -> Ordering,
{
    let mut indices: Vec<usize> = (0..elements.len()).collect();
    indices.sort_by(|&left, &right| compare(&elements[left], &elements[right]));
    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec![3, 1, 2], vec![1, 2, 0])]
    #[case(vec![1], vec![0])]
    #[case(vec![2, 1, 2, 1], vec![1, 3, 0, 2])]
    fn test_argsort(#[case] elements: Vec<i32>, #[case] expected: Vec<usize>) {
        assert_eq!(argsort(&elements), expected);
    }

    #[rstest]
    fn test_argsort_by_key_keeps_ties_in_input_order() {
        let words = ["bb", "a", "cc", "d"];
        assert_eq!(argsort_by_key(&words, |word| word.len()), vec![1, 3, 0, 2]);
    }

    #[rstest]
    fn test_argsort_by_key_calls_key_once_per_element() {
        let calls = std::cell::Cell::new(0);
        let ranked = argsort_by_key(&[5, 4, 3, 2, 1], |value: &i32| {
            calls.set(calls.get() + 1);
            *value
        });

        assert_eq!(ranked, vec![4, 3, 2, 1, 0]);
        assert_eq!(calls.get(), 5);
    }

    #[rstest]
    fn test_argsort_indexes_back_into_sorted_order() {
        let elements = vec!["pear", "apple", "fig"];
        let sorted: Vec<&str> = argsort(&elements).into_iter().map(|index| elements[index]).collect();
        assert_eq!(sorted, vec!["apple", "fig", "pear"]);
    }
}
