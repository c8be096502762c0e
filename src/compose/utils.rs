//! Combinators that show up in point-free code.
//!
//! - [`identity`]: The identity function (I combinator)
//! - [`constant`]: Creates a function that always returns the same value (K combinator)
//! - [`flip`]: Swaps the arguments of a binary function (C combinator)

/// Returns the value unchanged.
///
/// The unit of composition: `pipe!(identity, f)` behaves like `f`.
///
/// # Examples
///
/// ```
/// use pointfree::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that ignores its input and returns a clone of `value`.
///
/// # Examples
///
/// ```
/// use pointfree::compose::constant;
///
/// let zeros: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// `flip(f)(b, a) == f(a, b)`. Combined with currying this fixes the
/// second argument of `f` first.
///
/// # Examples
///
/// ```
/// use pointfree::compose::flip;
/// use pointfree::curry2;
///
/// let power = |base: i32, exponent: u32| base.pow(exponent);
/// assert_eq!(flip(power)(2, 5), 25);
///
/// let square = curry2!(flip(power))(2);
/// assert_eq!(square(9), 81);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| function(first, second)
}
