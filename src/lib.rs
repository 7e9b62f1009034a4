//! Railway-oriented composition of fallible steps.
//!
//! outcome-rail routes values along two tracks. A step either keeps the value on
//! the success track or switches it to the failure track, and once there it stays
//! there: every later step is skipped and the first error reaches the caller
//! untouched.
//!
//! Two ways to build a railway share the same short-circuit rule:
//!
//! - chain [`Outcome::map`] and [`Outcome::flat_map`] directly, letting the value
//!   change type at every stage;
//! - register same-typed steps on a [`Pipeline`] and [`execute`](Pipeline::execute)
//!   it, as many times as needed.
//!
//! Panics raised inside steps never escape: they are caught at the combinator
//! boundary as a [`Fault`] and converted into the outcome's own error type, either
//! through [`FromFault`](traits::FromFault) or an explicit handler.
//!
//! # Examples
//!
//! ## Type-changing chain
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! fn validate(n: i32) -> Outcome<i32, String> {
//!     if n > 0 {
//!         Outcome::success(n)
//!     } else {
//!         Outcome::failure("Number must be positive".to_string())
//!     }
//! }
//!
//! let message = Outcome::success(10)
//!     .flat_map(validate)
//!     .flat_map(|n| Outcome::success(f64::from(n) * 2.5))
//!     .map(|n| format!("The final result is: {n}"));
//!
//! assert_eq!(message.into_value(), "The final result is: 25");
//! ```
//!
//! ## Reusable pipeline
//!
//! ```
//! use outcome_rail::{Outcome, Pipeline};
//!
//! let pipeline = Pipeline::<i32, String>::new()
//!     .add_step(|n: i32| {
//!         if n > 0 {
//!             Outcome::success(n)
//!         } else {
//!             Outcome::failure("Number must be positive".to_string())
//!         }
//!     })
//!     .add_step(|n: i32| Outcome::success(n * 2));
//!
//! assert_eq!(pipeline.execute(5).into_value(), 10);
//! assert_eq!(pipeline.execute(-1).into_error(), "Number must be positive");
//! ```
//!
//! ## Captured panics
//!
//! ```
//! use outcome_rail::{Fault, Outcome};
//!
//! let outcome: Outcome<u32, Fault> =
//!     Outcome::success(()).flat_map(|()| -> Outcome<u32, Fault> { panic!("repository offline") });
//!
//! assert_eq!(outcome.error().message(), "repository offline");
//! ```

/// Conversions between `Result` and `Outcome`
pub mod convert;
/// Shorthand macros for railway values
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Core traits for railway composition
pub mod traits;
/// Outcome, Pipeline and Fault
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use traits::{FromFault, IntoOutcome, Step};
pub use types::{Fault, Outcome, Pipeline, SeededPipeline};
