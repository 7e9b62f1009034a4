//! Railway value types.
//!
//! - [`Outcome`]: the two-track container and its combinators
//! - [`Pipeline`] / [`SeededPipeline`]: ordered, fail-fast step lists
//! - [`Fault`]: a panic captured at a combinator or step boundary
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Outcome, Pipeline};
//!
//! let pipeline = Pipeline::<i32, String>::new()
//!     .add_step(|n: i32| Outcome::success(n * 2))
//!     .add_step(|n: i32| Outcome::success(n - 5));
//!
//! assert_eq!(pipeline.execute(10).into_value(), 15);
//! ```

pub mod fault;
pub mod outcome;
pub mod pipeline;

pub use fault::Fault;
pub use outcome::Outcome;
pub use pipeline::{Pipeline, SeededPipeline};
