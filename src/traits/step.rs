use crate::types::Outcome;

/// A unit of railway composition: turns an input into the next [`Outcome`].
///
/// Every `Fn(T) -> Outcome<R, E>` is a step, so closures and plain functions can be
/// registered directly. Implement the trait by hand when a step needs to carry its
/// own collaborators, such as a repository handle.
///
/// Steps take `&self` so a [`Pipeline`](crate::Pipeline) can run them again on
/// every execution.
///
/// # Type Parameters
///
/// * `T` - The input value type
/// * `R` - The success type of the produced outcome
/// * `E` - The failure type of the produced outcome
///
/// # Examples
///
/// ```
/// use outcome_rail::{Outcome, Pipeline, Step};
///
/// struct AtMost(u32);
///
/// impl Step<u32, u32, String> for AtMost {
///     fn apply(&self, input: u32) -> Outcome<u32, String> {
///         if input <= self.0 {
///             Outcome::success(input)
///         } else {
///             Outcome::failure(format!("{input} exceeds {}", self.0))
///         }
///     }
/// }
///
/// let pipeline = Pipeline::<u32, String>::new()
///     .add_step(AtMost(100))
///     .add_step(|n: u32| Outcome::success(n + 1));
///
/// assert_eq!(pipeline.execute(5).into_value(), 6);
/// assert_eq!(pipeline.execute(500).into_error(), "500 exceeds 100");
/// ```
pub trait Step<T, R, E> {
    /// Runs the step on `input`.
    fn apply(&self, input: T) -> Outcome<R, E>;
}

impl<T, R, E, F> Step<T, R, E> for F
where
    F: Fn(T) -> Outcome<R, E>,
{
    #[inline]
    fn apply(&self, input: T) -> Outcome<R, E> {
        self(input)
    }
}
