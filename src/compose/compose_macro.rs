//! The `compose!` macro for right-to-left function composition.

/// Composes single-argument functions from right to left.
///
/// `compose!(f, g, h)` returns a function equivalent to `|x| f(g(h(x)))`,
/// the mathematical `f . g . h`. It is `pipe!` with the stages reversed.
///
/// # Examples
///
/// ```
/// use pointfree::{compose, pipe};
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// let composed = compose!(add_one, double);
/// assert_eq!(composed(5), 11);
///
/// let piped = pipe!(double, add_one);
/// assert_eq!(composed(7), piped(7));
/// ```
#[macro_export]
macro_rules! compose {
    () => {
        ::std::compile_error!("compose! requires at least one function")
    };

    ($function:expr $(,)?) => {
        $function
    };

    ($outer_function:expr, $($inner_functions:expr),+ $(,)?) => {{
        let outer = $outer_function;
        let inner = $crate::compose!($($inner_functions),+);
        move |input| outer(inner(input))
    }};
}
