//! Persistent (immutable) singly-linked list.
//!
//! [`PersistentList`] is a cons list with O(1) `cons`, `head`, `tail` and
//! `len`. It is the argument store of a partial application: each applied
//! argument is prepended, so the newest argument sits at the head and the
//! application order is recovered with [`PersistentList::to_vec_reversed`].
//!
//! ```text
//! list1: 2 -> 1 -> nil
//! list2 = list1.cons(3): 3 -> [2 -> 1 -> nil]  // shares [2, 1] with list1
//! ```

use std::fmt;
use std::iter::FromIterator;

use super::ReferenceCounter;

struct Node<T> {
    element: T,
    next: Option<ReferenceCounter<Self>>,
}

/// A persistent (immutable) singly-linked list.
///
/// | Operation          | Complexity |
/// |--------------------|------------|
/// | `new`              | O(1)       |
/// | `cons`             | O(1)       |
/// | `head`             | O(1)       |
/// | `tail`             | O(1)       |
/// | `len`              | O(1)       |
/// | `to_vec_reversed`  | O(n)       |
///
/// # Examples
///
/// ```rust
/// use pointfree::persistent::PersistentList;
///
/// let list = PersistentList::new().cons(3).cons(2).cons(1);
/// assert_eq!(list.head(), Some(&1));
/// assert_eq!(list.len(), 3);
/// ```
pub struct PersistentList<T> {
    head: Option<ReferenceCounter<Node<T>>>,
    length: usize,
}

impl<T> PersistentList<T> {
    /// Creates a new empty list.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: None,
            length: 0,
        }
    }

    /// Prepends an element, returning a new list that shares `self`'s nodes.
    ///
    /// `self` is left untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pointfree::persistent::PersistentList;
    ///
    /// let list = PersistentList::new().cons(1);
    /// let extended = list.cons(2);
    /// assert_eq!(list.len(), 1);
    /// assert_eq!(extended.len(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub fn cons(&self, element: T) -> Self {
        Self {
            head: Some(ReferenceCounter::new(Node {
                element,
                next: self.head.clone(),
            })),
            length: self.length + 1,
        }
    }

    /// Returns a reference to the first element of the list.
    #[inline]
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.element)
    }

    /// Returns the list without its first element.
    ///
    /// The tail of an empty list is empty.
    #[must_use]
    pub fn tail(&self) -> Self {
        self.head.as_ref().map_or_else(Self::new, |node| Self {
            head: node.next.clone(),
            length: self.length - 1,
        })
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the list has no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns an iterator from the head to the last element.
    #[must_use]
    pub fn iter(&self) -> PersistentListIterator<'_, T> {
        PersistentListIterator {
            current: self.head.as_ref(),
            remaining: self.length,
        }
    }
}

impl<T: Clone> PersistentList<T> {
    /// Clones the elements into a `Vec`, last element first.
    ///
    /// For a list built with `cons` this is the order the elements were
    /// added in.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pointfree::persistent::PersistentList;
    ///
    /// let list = PersistentList::new().cons(1).cons(2).cons(3);
    /// assert_eq!(list.to_vec_reversed(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn to_vec_reversed(&self) -> Vec<T> {
        let mut elements: Vec<T> = self.iter().cloned().collect();
        elements.reverse();
        elements
    }
}

/// An iterator over references to the elements of a [`PersistentList`].
pub struct PersistentListIterator<'a, T> {
    current: Option<&'a ReferenceCounter<Node<T>>>,
    remaining: usize,
}

impl<'a, T> Iterator for PersistentListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next.as_ref();
            self.remaining -= 1;
            &node.element
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for PersistentListIterator<'_, T> {}

impl<T> Clone for PersistentList<T> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            length: self.length,
        }
    }
}

// Unlinks uniquely owned nodes one by one so long lists do not recurse.
impl<T> Drop for PersistentList<T> {
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(node) = current {
            current = ReferenceCounter::try_unwrap(node)
                .ok()
                .and_then(|mut node| node.next.take());
        }
    }
}

impl<T> Default for PersistentList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a list whose head is the first element yielded.
impl<T> FromIterator<T> for PersistentList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut elements: Vec<T> = iter.into_iter().collect();
        let mut list = Self::new();
        while let Some(element) = elements.pop() {
            list = list.cons(element);
        }
        list
    }
}

impl<'a, T> IntoIterator for &'a PersistentList<T> {
    type Item = &'a T;
    type IntoIter = PersistentListIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for PersistentList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for PersistentList<T> {}

impl<T: fmt::Debug> fmt::Debug for PersistentList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}
