//! Currying and function composition.
//!
//! # Overview
//!
//! - [`curry`]: Runtime currying engine driven by an inspected arity
//! - [`curry2!`] through [`curry6!`]: Compile-time curried builders per arity
//! - [`pipe!`]: Compose functions left-to-right into a new function
//! - [`try_pipe!`]: Left-to-right composition of fallible stages
//! - [`compose!`]: Compose functions right-to-left (mathematical composition)
//! - [`Pipeline`]: Left-to-right composition over a runtime list of stages
//!
//! # Helper Functions
//!
//! - [`identity`]: The identity function - returns its argument unchanged
//! - [`constant`]: Creates a function that always returns the same value
//! - [`flip`]: Swaps the arguments of a binary function
//!
//! # Examples
//!
//! ## Pipeline (left-to-right)
//!
//! ```
//! use pointfree::pipe;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! let transform = pipe!(double, add_one);
//! assert_eq!(transform(5), 11);
//! ```
//!
//! ## Currying with an inspected arity
//!
//! ```
//! use pointfree::compose::curry;
//!
//! let curried = curry(|a: i32, b: i32, c: i32| a * 100 + b * 10 + c).unwrap();
//! let partial = curried.apply(1).unwrap().into_partial().unwrap();
//! let partial = partial.apply(2).unwrap().into_partial().unwrap();
//!
//! assert_eq!(partial.apply(3).unwrap().into_complete(), Some(123));
//! assert_eq!(partial.apply(4).unwrap().into_complete(), Some(124));
//! ```
//!
//! # Laws
//!
//! - **Currying**: `curry(f)(a)(b)(c) == f(a, b, c)`
//! - **Pipe order**: `pipe!(f, g)(x) == g(f(x))`
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Double Flip Identity**: `flip(flip(f)) == f`

mod compose_macro;
mod curry;
mod curry_macro;
mod pipe_macro;
mod pipeline;
mod utils;

pub use curry::{Callable, Curried, Opaque, Step, WithArity, arity, curry, marker, opaque, with_arity};
pub use pipeline::Pipeline;
pub use utils::{constant, flip, identity};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::curry2;
pub use crate::curry3;
pub use crate::curry4;
pub use crate::curry5;
pub use crate::curry6;
pub use crate::pipe;
pub use crate::try_pipe;
