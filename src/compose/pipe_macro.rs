//! The `pipe!` and `try_pipe!` macros for left-to-right function composition.

/// Composes single-argument functions from left to right.
///
/// `pipe!(f, g, h)` returns a function equivalent to `|x| h(g(f(x)))`.
/// The stages are captured when the pipe is built; every call of the
/// returned function starts again from its own input.
///
/// # Syntax
///
/// - `pipe!(f)` - Returns `f` unchanged
/// - `pipe!(f, g)` - Returns `|x| g(f(x))`
/// - `pipe!(f, g, h, ...)` - Returns `|x| ...h(g(f(x)))`
/// - `pipe!()` - Compile error: a pipe needs at least one stage
///
/// # Relationship with compose!
///
/// `pipe!(f, g, h)` is equivalent to `compose!(h, g, f)`.
///
/// # Examples
///
/// ```
/// use pointfree::pipe;
///
/// fn square(x: i32) -> i32 { x * x }
/// fn double(x: i32) -> i32 { x * 2 }
/// fn add_one(x: i32) -> i32 { x + 1 }
///
/// // 3 -> square(3)=9 -> double(9)=18 -> add_one(18)=19
/// let transform = pipe!(square, double, add_one);
/// assert_eq!(transform(3), 19);
/// assert_eq!(transform(4), 33);
/// ```
///
/// ## Type conversion through a pipe
///
/// ```
/// use pointfree::pipe;
///
/// fn to_string(x: i32) -> String { x.to_string() }
/// fn get_length(s: String) -> usize { s.len() }
///
/// let digits = pipe!(to_string, get_length);
/// assert_eq!(digits(12345), 5);
/// ```
///
/// ## An empty pipe does not compile
///
/// ```compile_fail
/// use pointfree::pipe;
///
/// let nothing = pipe!();
/// ```
#[macro_export]
macro_rules! pipe {
    () => {
        ::std::compile_error!("pipe! requires at least one function")
    };

    ($function:expr $(,)?) => {
        $function
    };

    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let first = $first_function;
        let remaining = $crate::pipe!($($remaining_functions),+);
        move |input| remaining(first(input))
    }};
}

/// Composes fallible single-argument functions from left to right.
///
/// Every stage returns a `Result`. The first `Err` is returned unchanged
/// and the stages after it are not called.
///
/// # Examples
///
/// ```
/// use pointfree::try_pipe;
///
/// fn parse(text: &str) -> Result<i32, String> {
///     text.parse().map_err(|_| format!("not a number: {text}"))
/// }
/// fn halve(value: i32) -> Result<i32, String> {
///     if value % 2 == 0 { Ok(value / 2) } else { Err(format!("odd: {value}")) }
/// }
///
/// let parse_and_halve = try_pipe!(parse, halve);
/// assert_eq!(parse_and_halve("42"), Ok(21));
/// assert_eq!(parse_and_halve("7"), Err("odd: 7".to_string()));
/// assert_eq!(parse_and_halve("x"), Err("not a number: x".to_string()));
/// ```
#[macro_export]
macro_rules! try_pipe {
    () => {
        ::std::compile_error!("try_pipe! requires at least one function")
    };

    ($function:expr $(,)?) => {
        $function
    };

    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let first = $first_function;
        let remaining = $crate::try_pipe!($($remaining_functions),+);
        move |input| first(input).and_then(|value| remaining(value))
    }};
}
