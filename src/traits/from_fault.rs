//! Explicit conversion from a captured [`Fault`] into a domain error.
//!
//! Every combinator that can catch a panic needs to place something of the
//! outcome's error type on the failure track. Rather than assuming a common root
//! error type, outcome-rail asks the error type to say how it absorbs a fault.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::FromFault;
//! use outcome_rail::{Fault, Outcome};
//!
//! #[derive(Debug, PartialEq)]
//! enum SignupError {
//!     MissingName,
//!     Unexpected(String),
//! }
//!
//! impl FromFault for SignupError {
//!     fn from_fault(fault: Fault) -> Self {
//!         SignupError::Unexpected(fault.into_message())
//!     }
//! }
//!
//! let outcome: Outcome<u32, SignupError> =
//!     Outcome::success("x").map(|_: &str| -> u32 { panic!("disk full") });
//! assert_eq!(outcome.into_error(), SignupError::Unexpected("disk full".into()));
//! ```

use crate::types::Fault;

/// Conversion from a captured panic into an error value.
///
/// Implement this for the error type of your outcomes to use the plain
/// [`map`](crate::Outcome::map), [`flat_map`](crate::Outcome::flat_map) and
/// [`Pipeline::new`](crate::Pipeline::new). Error types that cannot or should not
/// implement it can still be used through the `*_with` variants, which take the
/// conversion as a closure.
pub trait FromFault {
    /// Builds an error value describing `fault`.
    fn from_fault(fault: Fault) -> Self;
}

impl FromFault for Fault {
    #[inline]
    fn from_fault(fault: Fault) -> Self {
        fault
    }
}

/// Keeps only the panic message.
impl FromFault for String {
    #[inline]
    fn from_fault(fault: Fault) -> Self {
        fault.into_message()
    }
}

impl FromFault for Box<dyn std::error::Error + Send + Sync> {
    #[inline]
    fn from_fault(fault: Fault) -> Self {
        Box::new(fault)
    }
}
