//! # pointfree
//!
//! Currying, pipelines and curried combinators for building point-free
//! transformation pipelines without hand-written nested closures.
//!
//! ## Overview
//!
//! - **Currying**: `curry2!`..`curry6!` and the `curry!` proc macro for
//!   compile-time arities, plus a runtime engine ([`compose::curry`]) that
//!   inspects a callable's arity and accumulates arguments one at a time
//! - **Composition**: `pipe!` (left to right), `compose!` (right to left),
//!   `try_pipe!` and the runtime [`compose::Pipeline`]
//! - **Curried combinators**: predicates, `map`, `filter`, `reduce`,
//!   `sort_by`, `argsort_by`
//! - **Persistent list**: the immutable argument store behind partial
//!   applications
//! - **Utilities**: an indenting logger, a timer, directory and timestamp
//!   helpers
//!
//! ## Feature Flags
//!
//! - `compose`: Currying and composition
//! - `persistent`: Persistent list
//! - `curried`: Curried combinators and argsort
//! - `derive`: The `curry!` proc macro
//! - `utils`: Logging, timer and filesystem/timestamp helpers
//! - `arc`: Share curried state through `Arc` instead of `Rc`
//! - `serde`: Serde support for [`utils::LogConfig`]
//! - `full`: Enable all features except `arc`
//!
//! ## Example
//!
//! ```rust
//! use pointfree::{curry3, pipe};
//! use pointfree::curried::gt;
//!
//! let volume = curry3!(|width: i32, height: i32, depth: i32| width * height * depth);
//! let flat = volume(10)(10);
//! assert_eq!(flat(1), 100);
//! assert_eq!(flat(2), 200);
//!
//! let scaled = pipe!(|value: i32| value * 2, |value: i32| value + 1);
//! assert_eq!(scaled(5), 11);
//!
//! let large: Vec<i32> = vec![1, 20, 3, 40].into_iter().filter(gt(15)).collect();
//! assert_eq!(large, vec![20, 40]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use pointfree::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::Error;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;

    #[cfg(feature = "curried")]
    pub use crate::curried::{argsort, argsort_by_key, argsort_with};
}

pub mod error;

pub use error::Error;

#[cfg(feature = "persistent")]
pub mod persistent;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "curried")]
pub mod curried;

#[cfg(feature = "utils")]
pub mod utils;

#[cfg(feature = "derive")]
pub use pointfree_derive::curry;
