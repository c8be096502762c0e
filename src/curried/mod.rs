//! Curried wrappers around common higher-order operations.
//!
//! Each wrapper takes its configuration first and returns a function of the
//! data, so it slots straight into `pipe!` or an iterator adaptor:
//!
//! ```
//! use pointfree::curried::{ends_with, filter, map, not_eq};
//!
//! let squares = map(|x: i32| x * x);
//! assert_eq!(squares(vec![1, 2, 3]).collect::<Vec<_>>(), vec![1, 4, 9]);
//! assert_eq!(squares(vec![2, 3, 4]).collect::<Vec<_>>(), vec![4, 9, 16]);
//!
//! let evens = filter(|x: &i32| x % 2 == 0);
//! assert_eq!(evens(0..10).collect::<Vec<_>>(), vec![0, 2, 4, 6, 8]);
//!
//! let files = vec!["a.rs", "b.toml", "c.rs"];
//! let rust: Vec<_> = files.into_iter().filter(ends_with(".rs")).collect();
//! assert_eq!(rust, vec!["a.rs", "c.rs"]);
//!
//! assert!(not_eq(4)(&7));
//! ```
//!
//! # Predicates
//!
//! - [`eq`], [`not_eq`], [`lt`], [`lte`], [`gt`], [`gte`]
//! - [`starts_with`], [`ends_with`]
//!
//! # Sequences
//!
//! - [`map`], [`filter`]: lazy, restartable only if the source is
//! - [`reduce`]: fold with an optional seed
//! - [`sort_by`], [`argsort_by`]: stable, ascending by key
//!
//! # Free functions
//!
//! - [`argsort`], [`argsort_by_key`], [`argsort_with`]
//! - [`foldr`], [`foldr1`], [`fold1`], [`appended`], [`exhaust`]

mod argsort;
mod fold;
mod predicate;
mod sequence;

pub use argsort::{argsort, argsort_by_key, argsort_with};
pub use fold::{appended, exhaust, fold1, foldr, foldr1};
pub use predicate::{ends_with, eq, gt, gte, lt, lte, not_eq, starts_with};
pub use sequence::{argsort_by, filter, map, reduce, sort_by};
