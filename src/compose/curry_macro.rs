//! The curry macro family for converting multi-argument functions to curried form.
//!
//! `curry2!` through `curry6!` fix the arity at compile time, one macro per
//! arity, so no inspection happens at runtime. All of them expand through
//! [`__curry_chain!`](crate::__curry_chain), which emits one nested closure per
//! argument.
//!
//! Each level captures the function and the earlier arguments behind
//! `std::sync::Arc` and clones those handles when it is called, so:
//!
//! - The curried function can be called multiple times
//! - Partial applications can be reused with different arguments
//! - The closures are `Send + Sync` whenever the function and arguments are
//!
//! Every argument except the last must implement [`Clone`].

/// Builds the nested closure chain for the `curryN!` macros.
#[doc(hidden)]
#[macro_export]
macro_rules! __curry_chain {
    // Last argument: call the function with the captured arguments.
    ($function:ident; [$($bound:ident),*]; $last:ident) => {
        move |$last| {
            $function(
                $(::std::sync::Arc::unwrap_or_clone(::std::sync::Arc::clone(&$bound)),)*
                $last
            )
        }
    };

    // More arguments follow: capture this one and return the next closure.
    ($function:ident; [$($bound:ident),*]; $current:ident, $($rest:ident),+) => {
        move |$current| {
            let $function = ::std::sync::Arc::clone(&$function);
            $(let $bound = ::std::sync::Arc::clone(&$bound);)*
            let $current = ::std::sync::Arc::new($current);
            $crate::__curry_chain!($function; [$($bound,)* $current]; $($rest),+)
        }
    };
}

/// Converts a 2-argument function into a curried form.
///
/// # Examples
///
/// ```
/// use pointfree::curry2;
///
/// fn multiply(first: i32, second: i32) -> i32 { first * second }
///
/// let curried = curry2!(multiply);
/// let double = curried(2);
/// let triple = curried(3);
///
/// assert_eq!(double(5), 10);
/// assert_eq!(triple(5), 15);
/// ```
///
/// ```
/// use pointfree::curry2;
///
/// let curried_max = curry2!(|first: i32, second: i32| first.max(second));
/// let max9 = curried_max(9);
/// assert_eq!(max9(8), 9);
/// assert_eq!(max9(13), 13);
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::sync::Arc::new($function);
        $crate::__curry_chain!(function; []; first, second)
    }};
}

/// Converts a 3-argument function into a curried form.
///
/// # Examples
///
/// ```
/// use pointfree::curry3;
///
/// fn add_three(first: i32, second: i32, third: i32) -> i32 {
///     first + second + third
/// }
///
/// let curried = curry3!(add_three);
/// let with_nine = curried(9);
/// let with_nine_eight = with_nine(8);
///
/// assert_eq!(with_nine_eight(7), 24);
/// assert_eq!(with_nine_eight(6), 23);
/// assert_eq!(with_nine(5)(2), 16);
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = ::std::sync::Arc::new($function);
        $crate::__curry_chain!(function; []; first, second, third)
    }};
}

/// Converts a 4-argument function into a curried form.
///
/// ```
/// use pointfree::curry4;
///
/// let curried = curry4!(|a: i32, b: i32, c: i32, d: i32| a * b - c * d);
/// assert_eq!(curried(3)(4)(1)(2), 10);
/// ```
#[macro_export]
macro_rules! curry4 {
    ($function:expr $(,)?) => {{
        let function = ::std::sync::Arc::new($function);
        $crate::__curry_chain!(function; []; first, second, third, fourth)
    }};
}

/// Converts a 5-argument function into a curried form.
///
/// ```
/// use pointfree::curry5;
///
/// fn sum_five(a: i32, b: i32, c: i32, d: i32, e: i32) -> i32 {
///     a + b + c + d + e
/// }
///
/// assert_eq!(curry5!(sum_five)(1)(2)(3)(4)(5), 15);
/// ```
#[macro_export]
macro_rules! curry5 {
    ($function:expr $(,)?) => {{
        let function = ::std::sync::Arc::new($function);
        $crate::__curry_chain!(function; []; first, second, third, fourth, fifth)
    }};
}

/// Converts a 6-argument function into a curried form.
///
/// ```
/// use pointfree::curry6;
///
/// let labels = curry6!(|a: char, b: char, c: char, d: char, e: char, f: char| {
///     [a, b, c, d, e, f].iter().collect::<String>()
/// });
/// assert_eq!(labels('c')('u')('r')('r')('i')('d'), "currid");
/// ```
#[macro_export]
macro_rules! curry6 {
    ($function:expr $(,)?) => {{
        let function = ::std::sync::Arc::new($function);
        $crate::__curry_chain!(function; []; first, second, third, fourth, fifth, sixth)
    }};
}
