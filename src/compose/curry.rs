//! Runtime currying engine.
//!
//! [`curry`] asks a [`Callable`] for its arity and returns a [`Curried`]
//! value that accepts one argument per [`Curried::apply`]. Each application
//! returns a brand-new [`Curried`] whose argument list is the receiver's list
//! with one more element prepended; the receiver itself is never touched.
//! A partial application can therefore be applied again and again, and two
//! continuations derived from it never observe each other.
//!
//! # Arity inspection
//!
//! - Any `Fn` of 0 to 6 parameters of a single argument type reports its
//!   parameter count. The marker type parameter of [`Callable`] is the
//!   matching `fn` pointer type, which is how the compiler tells the
//!   implementations apart.
//! - [`with_arity`] wraps a `Fn(Vec<A>) -> R` together with a declared arity.
//! - [`opaque`] wraps a `Fn(Vec<A>) -> R` with no declared arity. Currying
//!   it fails with [`Error::UninspectableCallable`].
//!
//! # Examples
//!
//! ```
//! use pointfree::compose::{curry, opaque, with_arity};
//! use pointfree::Error;
//!
//! let curried = curry(|base: i64, exponent: i64| base.pow(exponent as u32)).unwrap();
//! let two_to_the = curried.apply(2).unwrap().into_partial().unwrap();
//! assert_eq!(two_to_the.apply(10).unwrap().into_complete(), Some(1024));
//!
//! let sum = with_arity(3, |values: Vec<i32>| values.iter().sum::<i32>());
//! assert_eq!(curry(sum).unwrap().arity(), 3);
//!
//! let unknown = opaque(|values: Vec<i32>| values.len());
//! assert!(matches!(curry(unknown), Err(Error::UninspectableCallable { .. })));
//! ```

use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;

use crate::error::Error;
use crate::persistent::{PersistentList, ReferenceCounter};

/// A function whose arity can be asked for and which can be invoked with
/// a complete argument list.
///
/// `Marker` only serves to keep the implementations for different
/// parameter counts apart; it is inferred at the call site.
pub trait Callable<A, Marker> {
    /// The value produced once every argument has been supplied.
    type Output;

    /// Returns the number of positional parameters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UninspectableCallable`] if the arity is unknown.
    fn arity(&self) -> Result<usize, Error>;

    /// Invokes the function with `arguments` spread positionally.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ArgumentCount`] if `arguments` does not match the
    /// arity.
    fn invoke(&self, arguments: Vec<A>) -> Result<Self::Output, Error>;
}

/// Marker types for the wrapper implementations of [`Callable`].
pub mod marker {
    use std::marker::PhantomData;

    /// Marker for [`WithArity`](super::WithArity).
    pub struct Declared<R>(PhantomData<fn() -> R>);

    /// Marker for [`Opaque`](super::Opaque).
    pub struct Uninspectable<R>(PhantomData<fn() -> R>);
}

macro_rules! argument_type {
    ($ignored:ident) => {
        A
    };
}

macro_rules! impl_callable_for_fn {
    ($($arity:literal => ($($argument:ident),*)),+ $(,)?) => {
        $(
            impl<Function, A, R> Callable<A, fn($(argument_type!($argument)),*) -> R> for Function
            where
                Function: Fn($(argument_type!($argument)),*) -> R,
            {
                type Output = R;

                #[inline]
                fn arity(&self) -> Result<usize, Error> {
                    Ok($arity)
                }

                fn invoke(&self, arguments: Vec<A>) -> Result<R, Error> {
                    let actual = arguments.len();
                    let [$($argument),*]: [A; $arity] =
                        arguments.try_into().map_err(|_| Error::ArgumentCount {
                            callable: type_name::<Function>(),
                            expected: $arity,
                            actual,
                        })?;
                    Ok(self($($argument),*))
                }
            }
        )+
    };
}

impl_callable_for_fn! {
    0 => (),
    1 => (first),
    2 => (first, second),
    3 => (first, second, third),
    4 => (first, second, third, fourth),
    5 => (first, second, third, fourth, fifth),
    6 => (first, second, third, fourth, fifth, sixth),
}

/// A function over an argument list with a caller-declared arity.
///
/// Created by [`with_arity`].
#[derive(Clone)]
pub struct WithArity<F> {
    arity: usize,
    function: F,
}

/// Declares the arity of a function that takes its arguments as a `Vec`.
///
/// The function always receives exactly `arity` arguments when invoked
/// through [`curry`].
///
/// # Examples
///
/// ```
/// use pointfree::compose::{curry, with_arity};
///
/// let joined = with_arity(2, |parts: Vec<String>| parts.join("-"));
/// let curried = curry(joined).unwrap();
/// let prefix = curried.apply("a".to_string()).unwrap().into_partial().unwrap();
/// assert_eq!(
///     prefix.apply("b".to_string()).unwrap().into_complete(),
///     Some("a-b".to_string())
/// );
/// ```
pub const fn with_arity<F>(arity: usize, function: F) -> WithArity<F> {
    WithArity { arity, function }
}

impl<A, R, F> Callable<A, marker::Declared<R>> for WithArity<F>
where
    F: Fn(Vec<A>) -> R,
{
    type Output = R;

    fn arity(&self) -> Result<usize, Error> {
        Ok(self.arity)
    }

    fn invoke(&self, arguments: Vec<A>) -> Result<R, Error> {
        if arguments.len() != self.arity {
            return Err(Error::ArgumentCount {
                callable: type_name::<F>(),
                expected: self.arity,
                actual: arguments.len(),
            });
        }
        Ok((self.function)(arguments))
    }
}

/// A function over an argument list whose arity cannot be inspected.
///
/// Created by [`opaque`].
#[derive(Clone)]
pub struct Opaque<F>(F);

/// Wraps a function whose arity is unknown.
///
/// It can still be invoked directly through [`Callable::invoke`], but
/// [`curry`] rejects it; declare an arity with [`with_arity`] instead.
pub const fn opaque<F>(function: F) -> Opaque<F> {
    Opaque(function)
}

impl<A, R, F> Callable<A, marker::Uninspectable<R>> for Opaque<F>
where
    F: Fn(Vec<A>) -> R,
{
    type Output = R;

    fn arity(&self) -> Result<usize, Error> {
        Err(Error::UninspectableCallable {
            callable: type_name::<F>(),
        })
    }

    fn invoke(&self, arguments: Vec<A>) -> Result<R, Error> {
        Ok((self.0)(arguments))
    }
}

/// Returns the number of positional parameters `function` declares.
///
/// # Errors
///
/// Returns [`Error::UninspectableCallable`] for an [`Opaque`] function.
///
/// # Examples
///
/// ```
/// use pointfree::compose::arity;
///
/// assert_eq!(arity(&|a: u8, b: u8, c: u8| a + b + c), Ok(3));
/// ```
pub fn arity<A, M, F>(function: &F) -> Result<usize, Error>
where
    F: Callable<A, M>,
{
    function.arity()
}

/// Curries `function` according to its inspected arity.
///
/// # Errors
///
/// - [`Error::InvalidArity`] if the function takes no arguments
/// - [`Error::UninspectableCallable`] if the arity cannot be determined
///
/// # Examples
///
/// ```
/// use pointfree::compose::curry;
/// use pointfree::Error;
///
/// let curried = curry(|a: i32, b: i32| a.max(b)).unwrap();
/// let at_least_nine = curried.apply(9).unwrap().into_partial().unwrap();
/// assert_eq!(at_least_nine.apply(8).unwrap().into_complete(), Some(9));
/// assert_eq!(at_least_nine.apply(13).unwrap().into_complete(), Some(13));
///
/// assert_eq!(
///     curry::<i32, _, _>(|| 42).err(),
///     Some(Error::InvalidArity { arity: 0 })
/// );
/// ```
pub fn curry<A, M, F>(function: F) -> Result<Curried<F, A, M>, Error>
where
    F: Callable<A, M>,
{
    let arity = function.arity()?;
    if arity == 0 {
        return Err(Error::InvalidArity { arity });
    }
    tracing::trace!(arity, callable = type_name::<F>(), "curried function");
    Ok(Curried {
        function: ReferenceCounter::new(function),
        arity,
        arguments: PersistentList::new(),
        marker: PhantomData,
    })
}

/// A curried function with zero or more arguments already applied.
///
/// The function and the applied arguments sit behind `Rc`, so sharing a
/// `Curried` across threads needs the `arc` feature, which switches them
/// to `Arc`. The `curry2!`..`curry6!` macros always use `Arc`.
pub struct Curried<F, A, M> {
    function: ReferenceCounter<F>,
    arity: usize,
    arguments: PersistentList<A>,
    marker: PhantomData<fn() -> M>,
}

impl<F, A, M> Curried<F, A, M> {
    /// Returns the arity of the wrapped function.
    #[inline]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// Returns how many arguments have been applied so far.
    #[inline]
    pub const fn applied(&self) -> usize {
        self.arguments.len()
    }

    /// Returns how many more arguments are needed to produce a value.
    #[inline]
    pub const fn remaining(&self) -> usize {
        self.arity - self.arguments.len()
    }
}

impl<F, A, M> Curried<F, A, M>
where
    F: Callable<A, M>,
    A: Clone,
{
    /// Applies one argument.
    ///
    /// Returns [`Step::Complete`] with the function's output when this was
    /// the last missing argument, and [`Step::Partial`] otherwise. `self` is
    /// unchanged either way.
    ///
    /// # Errors
    ///
    /// Propagates [`Callable::invoke`] errors. Whatever the wrapped function
    /// itself returns, including its own `Result`, is passed through inside
    /// [`Step::Complete`] untouched.
    pub fn apply(&self, argument: A) -> Result<Step<F, A, M>, Error> {
        let arguments = self.arguments.cons(argument);
        if arguments.len() < self.arity {
            return Ok(Step::Partial(Self {
                function: ReferenceCounter::clone(&self.function),
                arity: self.arity,
                arguments,
                marker: PhantomData,
            }));
        }
        tracing::trace!(arity = self.arity, "invoking curried function");
        self.function
            .invoke(arguments.to_vec_reversed())
            .map(Step::Complete)
    }
}

impl<F, A, M> Clone for Curried<F, A, M> {
    fn clone(&self) -> Self {
        Self {
            function: ReferenceCounter::clone(&self.function),
            arity: self.arity,
            arguments: self.arguments.clone(),
            marker: PhantomData,
        }
    }
}

impl<F, A: fmt::Debug, M> fmt::Debug for Curried<F, A, M> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Curried")
            .field("function", &type_name::<F>())
            .field("arity", &self.arity)
            .field("arguments", &self.arguments)
            .finish()
    }
}

/// The result of applying one argument to a [`Curried`] function.
pub enum Step<F, A, M>
where
    F: Callable<A, M>,
{
    /// More arguments are needed.
    Partial(Curried<F, A, M>),
    /// Every argument was supplied; this is the function's output.
    Complete(<F as Callable<A, M>>::Output),
}

impl<F, A, M> Step<F, A, M>
where
    F: Callable<A, M>,
{
    /// Returns `true` if the function produced its output.
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }

    /// Returns the partial application, if more arguments are needed.
    pub fn into_partial(self) -> Option<Curried<F, A, M>> {
        match self {
            Self::Partial(curried) => Some(curried),
            Self::Complete(_) => None,
        }
    }

    /// Returns the function's output, if every argument was supplied.
    pub fn into_complete(self) -> Option<<F as Callable<A, M>>::Output> {
        match self {
            Self::Partial(_) => None,
            Self::Complete(output) => Some(output),
        }
    }
}

impl<F, A, M> fmt::Debug for Step<F, A, M>
where
    F: Callable<A, M>,
    A: fmt::Debug,
    <F as Callable<A, M>>::Output: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Partial(curried) => formatter.debug_tuple("Partial").field(curried).finish(),
            Self::Complete(output) => formatter.debug_tuple("Complete").field(output).finish(),
        }
    }
}
