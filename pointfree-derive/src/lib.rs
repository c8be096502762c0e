//! Procedural macros for pointfree.
//!
//! # Available Function-like Macros
//!
//! - [`curry!`]: Converts a closure (or a path with an explicit arity) into
//!   curried form, counting the closure's parameters at compile time.
//!
//! # Example
//!
//! ```rust,ignore
//! use pointfree::curry;
//!
//! let add = curry!(|a: i32, b: i32| a + b);
//! assert_eq!(add(5)(3), 8);
//!
//! let add_five = add(5);
//! assert_eq!(add_five(10), 15);
//! assert_eq!(add_five(20), 25);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod curry;

use proc_macro::TokenStream;

/// Converts a closure into curried form.
///
/// The arity is read from the closure's parameter list. A function path
/// carries no inspectable parameter list, so it must be followed by an
/// explicit arity literal.
///
/// # Usage
///
/// ```rust,ignore
/// use pointfree::curry;
///
/// let curried = curry!(|a: i32, b: i32, c: i32| a + b + c);
/// assert_eq!(curried(1)(2)(3), 6);
///
/// fn add(a: i32, b: i32) -> i32 { a + b }
/// let curried_add = curry!(add, 2);
/// assert_eq!(curried_add(5)(3), 8);
/// ```
///
/// # Compile errors
///
/// - a closure without parameters, or an arity literal of `0`
/// - a bare path without an arity (`curry!(add)`)
/// - an arity that is not an integer literal
///
/// # Type constraints
///
/// Every argument except the last must implement `Clone`, since a
/// partial application can be applied again after it has produced a value.
/// The generated closures share state through `std::sync::Arc`, so they are
/// `Send + Sync` whenever the wrapped closure and the captured arguments are.
#[proc_macro]
pub fn curry(input: TokenStream) -> TokenStream {
    curry::curry_impl(input)
}
