//! Left-to-right composition over a list of stages chosen at runtime.
//!
//! [`pipe!`](crate::pipe) needs its stages at compile time. [`Pipeline`]
//! covers the case where the stages are only known at runtime: all of them
//! map `T` to `T`, are boxed, and run in insertion order.

use std::fmt;

use crate::error::Error;

type Stage<'a, T> = Box<dyn Fn(T) -> T + 'a>;

/// An ordered, non-empty list of `T -> T` stages applied left to right.
///
/// # Examples
///
/// ```
/// use pointfree::compose::Pipeline;
///
/// let pipeline = Pipeline::single(|x: i32| x * 2).then(|x| x + 1);
/// assert_eq!(pipeline.apply(5), 11);
/// assert_eq!(pipeline.apply(0), 1);
/// ```
pub struct Pipeline<'a, T> {
    stages: Vec<Stage<'a, T>>,
}

impl<'a, T> Pipeline<'a, T> {
    /// Builds a pipeline from the given stages.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `stages` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use pointfree::compose::Pipeline;
    ///
    /// let trim: Box<dyn Fn(String) -> String> = Box::new(|text: String| text.trim().to_string());
    /// let upper: Box<dyn Fn(String) -> String> = Box::new(|text: String| text.to_uppercase());
    /// let pipeline = Pipeline::new(vec![trim, upper]).unwrap();
    /// assert_eq!(pipeline.apply("  shout ".to_string()), "SHOUT");
    ///
    /// assert!(Pipeline::<i32>::new(Vec::new()).is_err());
    /// ```
    pub fn new(stages: Vec<Stage<'a, T>>) -> Result<Self, Error> {
        if stages.is_empty() {
            return Err(Error::InvalidArgument {
                argument: "stages",
                expected: "at least one stage",
                actual: "0 stages".to_string(),
            });
        }
        tracing::debug!(stages = stages.len(), "built pipeline");
        Ok(Self { stages })
    }

    /// Builds a pipeline with one stage.
    pub fn single<F>(stage: F) -> Self
    where
        F: Fn(T) -> T + 'a,
    {
        Self {
            stages: vec![Box::new(stage)],
        }
    }

    /// Appends a stage that runs after the existing ones.
    #[must_use]
    pub fn then<F>(mut self, stage: F) -> Self
    where
        F: Fn(T) -> T + 'a,
    {
        self.stages.push(Box::new(stage));
        self
    }

    /// Returns the number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Always `false`; a pipeline has at least one stage.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Runs `input` through every stage in order.
    pub fn apply(&self, input: T) -> T {
        self.stages.iter().fold(input, |value, stage| stage(value))
    }
}

impl<T> fmt::Debug for Pipeline<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Pipeline")
            .field("stages", &self.stages.len())
            .finish()
    }
}
