//! Persistent (immutable) data structures.
//!
//! - [`PersistentList`]: Persistent singly-linked list
//!
//! # Structural Sharing
//!
//! Prepending creates a new version that points at the old nodes instead of
//! copying them. Nodes are never mutated after construction, so two lists
//! that share a tail can be extended independently.
//!
//! ```rust
//! use pointfree::persistent::PersistentList;
//!
//! let base = PersistentList::new().cons(2).cons(1);
//! let left = base.cons(10);
//! let right = base.cons(20);
//!
//! assert_eq!(base.len(), 2);
//! assert_eq!(left.head(), Some(&10));
//! assert_eq!(right.head(), Some(&20));
//! ```

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod list;

pub use list::PersistentList;
pub use list::PersistentListIterator;
