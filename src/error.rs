//! Error types shared by the currying engine, the pipeline and the
//! curried combinators.
//!
//! Every error is returned at the call that detects it. Nothing in this
//! crate catches or retries, so the caller owns all recovery decisions.
//!
//! # Examples
//!
//! ```rust
//! use pointfree::Error;
//!
//! let error = Error::InvalidArity { arity: 0 };
//! assert_eq!(
//!     error.to_string(),
//!     "curry expected a function with at least 1 argument, got arity 0"
//! );
//! ```

use thiserror::Error;

/// Errors raised by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// `curry` was given a function that takes no arguments.
    #[error("curry expected a function with at least 1 argument, got arity {arity}")]
    InvalidArity {
        /// The arity reported by the callable.
        arity: usize,
    },

    /// The arity of the callable cannot be determined.
    #[error(
        "cannot determine the arity of `{callable}`; wrap it with `with_arity` to declare one"
    )]
    UninspectableCallable {
        /// Type name of the callable.
        callable: &'static str,
    },

    /// A callable was invoked with the wrong number of arguments.
    #[error("`{callable}` expected {expected} arguments, got {actual}")]
    ArgumentCount {
        /// Type name of the callable.
        callable: &'static str,
        /// The declared arity.
        expected: usize,
        /// The number of arguments supplied.
        actual: usize,
    },

    /// A seedless fold was run over an empty sequence.
    #[error("{operation} of an empty sequence with no initial value")]
    EmptySequence {
        /// The operation that needed at least one element.
        operation: &'static str,
    },

    /// An argument violated a constraint.
    #[error("invalid argument `{argument}`: expected {expected}, got {actual}")]
    InvalidArgument {
        /// Name of the offending argument.
        argument: &'static str,
        /// The constraint the argument had to satisfy.
        expected: &'static str,
        /// What was supplied instead.
        actual: String,
    },
}

impl Error {
    /// Returns `true` for [`Error::EmptySequence`].
    pub const fn is_empty_sequence(&self) -> bool {
        matches!(self, Self::EmptySequence { .. })
    }
}
