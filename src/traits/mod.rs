//! Core traits for railway composition.
//!
//! - [`FromFault`]: explicit conversion of a captured panic into a domain error
//! - [`Step`]: a unit of composition, implemented for every `Fn(T) -> Outcome<R, E>`
//! - [`IntoOutcome`]: lifts `Result` values onto the railway
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{IntoOutcome, Step};
//! use outcome_rail::Outcome;
//!
//! fn parse(raw: &str) -> Outcome<i64, String> {
//!     raw.parse::<i64>().into_outcome_with(|err| err.to_string())
//! }
//!
//! assert_eq!(parse.apply("42"), Outcome::success(42));
//! ```

pub mod from_fault;
pub mod into_outcome;
pub mod step;

pub use from_fault::FromFault;
pub use into_outcome::IntoOutcome;
pub use step::Step;
