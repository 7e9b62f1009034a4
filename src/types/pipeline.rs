use core::fmt;
use std::borrow::Cow;

use smallvec::SmallVec;

use crate::traits::{FromFault, Step};
use crate::types::{Fault, Outcome};

type BoxedStep<T, E> = Box<dyn Step<T, T, E> + Send + Sync>;
type FaultHandler<E> = Box<dyn Fn(Fault) -> E + Send + Sync>;

// Inline capacity for registered steps; short pipelines keep the step list on the stack.
type StepVec<T, E> = SmallVec<[BoxedStep<T, E>; 4]>;

/// An ordered list of same-typed steps, executed fail-fast against an input.
///
/// `Pipeline` is built by moving it through [`add_step`](Self::add_step) and then run
/// with [`execute`](Self::execute). Execution borrows the pipeline, so the same step
/// list can be run again with a different input; each run starts from a fresh
/// `Outcome::success(initial)` and nothing is carried over between runs.
///
/// Steps run strictly in registration order. The first failure stops the run and is
/// returned as is; later steps are never invoked. A step that panics is converted to
/// a failure through the pipeline's fault handler.
///
/// # Type Parameters
///
/// * `T` - The value threaded through every step
/// * `E` - The failure type
///
/// # Examples
///
/// ```
/// use outcome_rail::{Outcome, Pipeline};
///
/// let pipeline = Pipeline::<i32, String>::new()
///     .add_step(|n: i32| {
///         if n > 0 {
///             Outcome::success(n)
///         } else {
///             Outcome::failure("Number must be positive".to_string())
///         }
///     })
///     .add_step(|n: i32| Outcome::success(n * 2));
///
/// assert_eq!(pipeline.execute(5), Outcome::success(10));
/// assert_eq!(pipeline.execute(-1), Outcome::failure("Number must be positive".to_string()));
/// ```
#[must_use]
pub struct Pipeline<T, E> {
    name: Option<Cow<'static, str>>,
    steps: StepVec<T, E>,
    on_fault: FaultHandler<E>,
}

impl<T, E> Pipeline<T, E>
where
    E: FromFault + 'static,
{
    /// Creates an empty pipeline whose captured panics become `E::from_fault`.
    #[inline]
    pub fn new() -> Self {
        Self::with_fault_handler(E::from_fault)
    }
}

impl<T, E> Default for Pipeline<T, E>
where
    E: FromFault + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> Pipeline<T, E> {
    /// Creates an empty pipeline that converts captured panics with `handler`.
    ///
    /// Use this when `E` does not implement [`FromFault`], or when one pipeline needs
    /// a different conversion than the error type's default.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, Pipeline};
    ///
    /// #[derive(Debug, PartialEq)]
    /// enum JobError {
    ///     Crashed,
    /// }
    ///
    /// let pipeline = Pipeline::with_fault_handler(|_| JobError::Crashed)
    ///     .add_step(|n: u8| -> Outcome<u8, JobError> { panic!("step {n} crashed") });
    ///
    /// assert_eq!(pipeline.execute(1), Outcome::failure(JobError::Crashed));
    /// ```
    pub fn with_fault_handler<H>(handler: H) -> Self
    where
        H: Fn(Fault) -> E + Send + Sync + 'static,
    {
        Self { name: None, steps: StepVec::new(), on_fault: Box::new(handler) }
    }

    /// Labels the pipeline. The name shows up in `Debug` output and, with the
    /// `tracing` feature, on the execution span.
    #[inline]
    pub fn with_name<N>(mut self, name: N) -> Self
    where
        N: Into<Cow<'static, str>>,
    {
        self.name = Some(name.into());
        self
    }

    /// Appends `step` to the end of the pipeline.
    ///
    /// Registration order is execution order. Steps are neither reordered nor
    /// deduplicated.
    ///
    /// # Arguments
    ///
    /// * `step` - A closure, function, or [`Step`] implementation
    #[inline]
    pub fn add_step<S>(mut self, step: S) -> Self
    where
        S: Step<T, T, E> + Send + Sync + 'static,
    {
        self.steps.push(Box::new(step));
        self
    }

    /// Binds `initial` to this pipeline so it can be executed without an argument.
    #[inline]
    pub fn seed(self, initial: T) -> SeededPipeline<T, E> {
        SeededPipeline { input: initial, pipeline: self }
    }

    /// The pipeline's label, if one was set.
    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Number of registered steps.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if no step has been registered.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Runs every step in order against `initial`, stopping at the first failure.
    ///
    /// An empty pipeline returns `Outcome::success(initial)`.
    #[track_caller]
    pub fn execute(&self, initial: T) -> Outcome<T, E> {
        #[cfg(feature = "tracing")]
        let span = crate::tracing_ext::execute_span(self.name(), self.steps.len());
        #[cfg(feature = "tracing")]
        let _entered = span.enter();

        let mut current = Outcome::success(initial);
        for (_index, step) in self.steps.iter().enumerate() {
            if current.is_failure() {
                #[cfg(feature = "tracing")]
                tracing::debug!(skipped_from = _index, "short-circuit");
                return current;
            }

            #[cfg(feature = "tracing")]
            tracing::trace!(step = _index, "running step");

            current = current.flat_map_with(|value| step.apply(value), |fault| (self.on_fault)(fault));
        }
        current
    }
}

impl<T, E> fmt::Debug for Pipeline<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("name", &self.name)
            .field("steps", &self.steps.len())
            .finish_non_exhaustive()
    }
}

/// A [`Pipeline`] with its input already bound.
///
/// Created by [`Outcome::builder`] or [`Pipeline::seed`]. Executing consumes the
/// seeded pipeline because the bound input is moved into the first step.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Outcome, Pipeline};
///
/// let result = Pipeline::<i32, String>::new()
///     .add_step(|n: i32| Outcome::success(n - 5))
///     .seed(10)
///     .execute();
///
/// assert_eq!(result.into_value(), 5);
/// ```
#[must_use]
pub struct SeededPipeline<T, E> {
    input: T,
    pipeline: Pipeline<T, E>,
}

impl<T, E> SeededPipeline<T, E>
where
    E: FromFault + 'static,
{
    /// Binds `initial` to a new, empty pipeline.
    #[inline]
    pub fn new(initial: T) -> Self {
        Pipeline::new().seed(initial)
    }
}

impl<T, E> SeededPipeline<T, E> {
    /// Appends `step`; see [`Pipeline::add_step`].
    #[inline]
    pub fn add_step<S>(self, step: S) -> Self
    where
        S: Step<T, T, E> + Send + Sync + 'static,
    {
        Self { input: self.input, pipeline: self.pipeline.add_step(step) }
    }

    /// The bound input.
    #[inline]
    pub fn input(&self) -> &T {
        &self.input
    }

    /// Splits into the bound input and the unbound pipeline.
    #[inline]
    pub fn into_parts(self) -> (T, Pipeline<T, E>) {
        (self.input, self.pipeline)
    }

    /// Runs the pipeline against the bound input.
    #[track_caller]
    #[inline]
    pub fn execute(self) -> Outcome<T, E> {
        self.pipeline.execute(self.input)
    }
}

impl<T, E> fmt::Debug for SeededPipeline<T, E>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeededPipeline")
            .field("input", &self.input)
            .field("pipeline", &self.pipeline)
            .finish()
    }
}
