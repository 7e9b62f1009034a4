//! Extension trait for lifting `Result` values onto the railway.
//!
//! Collaborators usually speak `Result`. [`IntoOutcome`] lets a step hand their
//! answer straight back as an [`Outcome`], optionally lifting the error into the
//! step's own error type on the way.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::IntoOutcome;
//! use outcome_rail::Outcome;
//!
//! let port: Outcome<u16, String> = "8080"
//!     .parse::<u16>()
//!     .into_outcome_with(|err| err.to_string());
//! assert_eq!(port.into_value(), 8080);
//! ```

use crate::types::Outcome;

/// Conversion of `Result`-like values into [`Outcome`].
pub trait IntoOutcome<T, E> {
    /// Converts `Ok` to success and `Err` to failure.
    fn into_outcome(self) -> Outcome<T, E>;

    /// Converts, transforming the error with `f`.
    ///
    /// # Arguments
    ///
    /// * `f` - Lifts the collaborator's error into the outcome's error type
    fn into_outcome_with<NewE, F>(self, f: F) -> Outcome<T, NewE>
    where
        F: FnOnce(E) -> NewE;
}

impl<T, E> IntoOutcome<T, E> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        Outcome::from(self)
    }

    #[inline]
    fn into_outcome_with<NewE, F>(self, f: F) -> Outcome<T, NewE>
    where
        F: FnOnce(E) -> NewE,
    {
        match self {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(f(error)),
        }
    }
}
