//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use outcome_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`rail!`], [`pipeline!`]
//! - **Types**: [`Outcome`], [`Pipeline`], [`SeededPipeline`], [`Fault`]
//! - **Traits**: [`FromFault`], [`Step`], [`IntoOutcome`]
//!
//! # Examples
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn read_port(raw: &str) -> Outcome<u16, String> {
//!     raw.parse::<u16>().into_outcome_with(|err| err.to_string())
//! }
//!
//! let port = Outcome::start("8080").flat_map(read_port).map(|p| p + 1);
//! assert_eq!(port.into_value(), 8081);
//! ```

// Macros
pub use crate::{pipeline, rail};

// Core types
pub use crate::types::{Fault, Outcome, Pipeline, SeededPipeline};

// Traits
pub use crate::traits::{FromFault, IntoOutcome, Step};
