//! Shorthand macros for building railway values.
//!
//! - [`macro@crate::rail`] - Evaluates a `Result`- or `Outcome`-producing expression
//!   with panic capture and returns an [`Outcome`](crate::Outcome).
//! - [`macro@crate::pipeline`] - Builds a [`Pipeline`](crate::Pipeline) from a list of
//!   steps, in order.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{pipeline, rail, Outcome};
//!
//! let parsed: Outcome<u8, String> = rail!("7".parse::<u8>().map_err(|e| e.to_string()));
//! assert_eq!(parsed, Outcome::success(7));
//!
//! let doubled = pipeline![|n: u8| Outcome::<u8, String>::success(n * 2)];
//! assert_eq!(doubled.execute(4).into_value(), 8);
//! ```

/// Evaluates an expression producing a `Result` or an [`Outcome`](crate::Outcome)
/// and returns an `Outcome`, converting a panic raised during evaluation into a
/// failure.
///
/// # Syntax
///
/// - `rail!(expr)` - Converts a panic through the error type's
///   [`FromFault`](crate::traits::FromFault) implementation
/// - `rail!(expr, on_fault = handler)` - Converts a panic with `handler`
///
/// # Examples
///
/// ```rust
/// use outcome_rail::{rail, Fault, Outcome};
///
/// let ok: Outcome<i32, Fault> = rail!(Ok::<i32, Fault>(1));
/// assert_eq!(ok.into_value(), 1);
///
/// let values: Vec<i32> = Vec::new();
/// let crashed: Outcome<i32, String> =
///     rail!(Ok::<i32, String>(values[3]), on_fault = |fault| format!("crashed: {}", fault.message()));
/// assert!(crashed.error().starts_with("crashed: index out of bounds"));
/// ```
#[macro_export]
macro_rules! rail {
    ($expr:expr, on_fault = $handler:expr $(,)?) => {
        $crate::Outcome::catching_with(|| $crate::Outcome::from($expr), $handler)
    };
    ($expr:expr $(,)?) => {
        $crate::Outcome::catching(|| $crate::Outcome::from($expr))
    };
}

/// Builds a [`Pipeline`](crate::Pipeline) from steps listed in execution order.
///
/// Expands to `Pipeline::new()` followed by one `add_step` per argument, so the
/// error type must implement [`FromFault`](crate::traits::FromFault).
///
/// # Examples
///
/// ```
/// use outcome_rail::{pipeline, Outcome};
///
/// fn validate(n: i32) -> Outcome<i32, String> {
///     if n > 0 {
///         Outcome::success(n)
///     } else {
///         Outcome::failure("Number must be positive".into())
///     }
/// }
///
/// let checked = pipeline![validate, |n: i32| Outcome::success(n * 2), |n: i32| Outcome::success(n - 5)];
///
/// assert_eq!(checked.len(), 3);
/// assert_eq!(checked.execute(10).into_value(), 15);
/// assert!(checked.execute(0).is_failure());
/// ```
#[macro_export]
macro_rules! pipeline {
    ($($step:expr),* $(,)?) => {
        $crate::Pipeline::new()$(.add_step($step))*
    };
}
