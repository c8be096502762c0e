//! Curried comparison and string predicates.
//!
//! Each builder captures a value and returns a predicate over a reference
//! to the eventual input, which is the shape `Iterator::filter` expects.

/// `eq(value)(input)` is `*input == value`.
///
/// # Examples
///
/// ```
/// use pointfree::curried::eq;
///
/// assert!(eq(3)(&3));
/// assert!(!eq("a")(&"b"));
/// ```
pub fn eq<T>(value: T) -> impl Fn(&T) -> bool + Clone
where
    T: PartialEq + Clone,
{
    move |input| *input == value
}

/// `not_eq(value)(input)` is `*input != value`.
pub fn not_eq<T>(value: T) -> impl Fn(&T) -> bool + Clone
where
    T: PartialEq + Clone,
{
    move |input| *input != value
}

/// `lt(value)(input)` is `*input < value`.
///
/// # Examples
///
/// ```
/// use pointfree::curried::lt;
///
/// let small: Vec<i32> = vec![5, 1, 8, 3].into_iter().filter(lt(4)).collect();
/// assert_eq!(small, vec![1, 3]);
/// ```
pub fn lt<T>(value: T) -> impl Fn(&T) -> bool + Clone
where
    T: PartialOrd + Clone,
{
    move |input| *input < value
}

/// `lte(value)(input)` is `*input <= value`.
pub fn lte<T>(value: T) -> impl Fn(&T) -> bool + Clone
where
    T: PartialOrd + Clone,
{
    move |input| *input <= value
}

/// `gt(value)(input)` is `*input > value`.
pub fn gt<T>(value: T) -> impl Fn(&T) -> bool + Clone
where
    T: PartialOrd + Clone,
{
    move |input| *input > value
}

/// `gte(value)(input)` is `*input >= value`.
///
/// # Examples
///
/// ```
/// use pointfree::curried::gte;
///
/// assert!(gte(4)(&4));
/// assert!(gte(4)(&5));
/// assert!(!gte(4)(&3));
/// ```
pub fn gte<T>(value: T) -> impl Fn(&T) -> bool + Clone
where
    T: PartialOrd + Clone,
{
    move |input| *input >= value
}

/// `starts_with(prefix)(input)` is `input.starts_with(prefix)`.
///
/// The input may be any string-like type, so the predicate works for
/// `&str`, `String` and `&&str` items alike.
///
/// # Examples
///
/// ```
/// use pointfree::curried::starts_with;
///
/// assert!(starts_with("ab")("abc"));
/// assert!(!starts_with("c")("abc"));
///
/// let names = vec!["alpha".to_string(), "beta".to_string(), "alps".to_string()];
/// let al: Vec<&String> = names.iter().filter(|name| starts_with("al")(name)).collect();
/// assert_eq!(al.len(), 2);
/// ```
pub fn starts_with<P, S>(prefix: P) -> impl Fn(&S) -> bool + Clone
where
    P: AsRef<str> + Clone,
    S: AsRef<str> + ?Sized,
{
    move |input| input.as_ref().starts_with(prefix.as_ref())
}

/// `ends_with(suffix)(input)` is `input.ends_with(suffix)`.
///
/// # Examples
///
/// ```
/// use pointfree::curried::ends_with;
///
/// assert!(ends_with("bc")("abc"));
/// assert!(!ends_with("cab")("abc"));
/// ```
pub fn ends_with<P, S>(suffix: P) -> impl Fn(&S) -> bool + Clone
where
    P: AsRef<str> + Clone,
    S: AsRef<str> + ?Sized,
{
    move |input| input.as_ref().ends_with(suffix.as_ref())
}
