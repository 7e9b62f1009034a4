//! Conversion helpers between `Result` and [`Outcome`].
//!
//! These make it straightforward to adopt outcome-rail at the edges of an
//! existing codebase: wrap a collaborator's `Result` on the way in and hand a
//! plain `Result` back to callers that expect one.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::*;
//! use outcome_rail::Outcome;
//!
//! let outcome = result_to_outcome::<i32, &str>(Ok(42));
//! assert!(outcome.is_success());
//!
//! let result = outcome_to_result(Outcome::<i32, &str>::failure("failed"));
//! assert_eq!(result, Err("failed"));
//! ```

use crate::types::Outcome;

/// Converts a `Result` to an `Outcome`.
///
/// # Arguments
///
/// * `result` - The result to convert
///
/// # Returns
///
/// * `Outcome::Success(value)` if result is `Ok`
/// * `Outcome::Failure(error)` if result is `Err`
#[inline]
pub fn result_to_outcome<T, E>(result: Result<T, E>) -> Outcome<T, E> {
    Outcome::from(result)
}

/// Converts an `Outcome` to a `Result`.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::outcome_to_result;
/// use outcome_rail::Outcome;
///
/// assert_eq!(outcome_to_result(Outcome::<i32, &str>::success(1)), Ok(1));
/// ```
#[inline]
pub fn outcome_to_result<T, E>(outcome: Outcome<T, E>) -> Result<T, E> {
    outcome.into_result()
}

/// Collapses a nested outcome into a single level.
///
/// The outer failure wins; otherwise the inner outcome is returned as is.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::flatten;
/// use outcome_rail::Outcome;
///
/// let nested: Outcome<Outcome<i32, &str>, &str> = Outcome::success(Outcome::failure("inner"));
/// assert_eq!(flatten(nested), Outcome::failure("inner"));
/// ```
#[inline]
pub fn flatten<T, E>(nested: Outcome<Outcome<T, E>, E>) -> Outcome<T, E> {
    nested.flatten()
}
