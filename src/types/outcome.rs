use core::panic::Location;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::traits::{FromFault, Step};
use crate::types::fault::{capture, Fault};
use crate::types::pipeline::SeededPipeline;

/// A two-track result: either a success value or a failure value, never both.
///
/// `Outcome<T, E>` is the unit every railway operation produces. Once an outcome is on
/// the failure track it stays there: [`map`](Self::map) and [`flat_map`](Self::flat_map)
/// pass the same error through untouched and never call their closure.
///
/// Closures handed to the combinators may panic. The panic is caught at the combinator
/// boundary and turned into a failure of type `E`, either through the [`FromFault`]
/// implementation of `E` or through the handler given to the `*_with` variants.
///
/// # Type Parameters
///
/// * `T` - The success value type
/// * `E` - The failure value type
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// fn positive(n: i32) -> Outcome<i32, String> {
///     if n > 0 {
///         Outcome::success(n)
///     } else {
///         Outcome::failure("Number must be positive".to_string())
///     }
/// }
///
/// let ok = Outcome::success(10)
///     .flat_map(positive)
///     .map(|n| f64::from(n) * 2.5)
///     .map(|n| format!("The final result is: {n}"));
/// assert_eq!(ok.value(), "The final result is: 25");
///
/// let failed = Outcome::success(-3).flat_map(positive).map(|n| n * 2);
/// assert_eq!(failed.error(), "Number must be positive");
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Outcome<T, E> {
    Success(T),
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Wraps `value` on the success track.
    #[inline]
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wraps `error` on the failure track.
    #[inline]
    pub fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Entry point for a combinator chain. Same as [`success`](Self::success).
    #[inline]
    pub fn start(value: T) -> Self {
        Self::Success(value)
    }

    /// Returns `true` if this outcome holds a success value.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this outcome holds a failure value.
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Borrows the success value.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a failure. Reading the value of a failed outcome is a
    /// programming error; use [`ok`](Self::ok) or a `match` when either track is possible.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::success(3);
    /// assert_eq!(*outcome.value(), 3);
    /// ```
    #[must_use]
    #[track_caller]
    #[inline]
    pub fn value(&self) -> &T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => panic!("called `Outcome::value()` on a failure outcome"),
        }
    }

    /// Consumes the outcome and returns the success value.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a failure.
    #[must_use]
    #[track_caller]
    #[inline]
    pub fn into_value(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => panic!("called `Outcome::into_value()` on a failure outcome"),
        }
    }

    /// Borrows the failure value.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a success.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::failure("invalid");
    /// assert_eq!(*outcome.error(), "invalid");
    /// ```
    #[must_use]
    #[track_caller]
    #[inline]
    pub fn error(&self) -> &E {
        match self {
            Self::Failure(error) => error,
            Self::Success(_) => panic!("called `Outcome::error()` on a success outcome"),
        }
    }

    /// Consumes the outcome and returns the failure value.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a success.
    #[must_use]
    #[track_caller]
    #[inline]
    pub fn into_error(self) -> E {
        match self {
            Self::Failure(error) => error,
            Self::Success(_) => panic!("called `Outcome::into_error()` on a success outcome"),
        }
    }

    /// Converts to `Option<T>`, discarding any failure.
    #[must_use]
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Converts to `Option<E>`, discarding any success.
    #[must_use]
    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Borrows both tracks.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Converts into a standard `Result`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome: Outcome<u8, &str> = Outcome::failure("nope");
    /// assert_eq!(outcome.into_result(), Err("nope"));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// Transforms the success value, capturing a panic in `f` as a failure.
    ///
    /// If the outcome is already a failure, `f` is not called and the same error is
    /// returned with the success type changed to `R`.
    ///
    /// # Arguments
    ///
    /// * `f` - Transformation applied to the success value
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Fault, Outcome};
    ///
    /// let doubled: Outcome<i32, Fault> = Outcome::success(21).map(|n| n * 2);
    /// assert_eq!(doubled, Outcome::success(42));
    /// ```
    #[track_caller]
    #[inline]
    pub fn map<R, F>(self, f: F) -> Outcome<R, E>
    where
        F: FnOnce(T) -> R,
        E: FromFault,
    {
        self.map_with(f, E::from_fault)
    }

    /// Like [`map`](Self::map), but converts a captured panic with `on_fault` instead
    /// of the [`FromFault`] implementation of `E`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// #[derive(Debug, PartialEq)]
    /// enum AppError {
    ///     Crashed(String),
    /// }
    ///
    /// let outcome: Outcome<i32, AppError> = Outcome::success(0).map_with(
    ///     |n: i32| 10 / n,
    ///     |fault| AppError::Crashed(fault.into_message()),
    /// );
    /// assert!(matches!(outcome.into_error(), AppError::Crashed(_)));
    /// ```
    #[track_caller]
    pub fn map_with<R, F, H>(self, f: F, on_fault: H) -> Outcome<R, E>
    where
        F: FnOnce(T) -> R,
        H: FnOnce(Fault) -> E,
    {
        match self {
            Self::Success(value) => match capture(Location::caller(), move || f(value)) {
                Ok(mapped) => Outcome::Success(mapped),
                Err(fault) => Outcome::Failure(on_fault(fault)),
            },
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Chains a fallible step on the success value, capturing a panic in `f` as a failure.
    ///
    /// If the outcome is already a failure, `f` is not called and the same error is
    /// returned with the success type changed to `R`.
    ///
    /// # Arguments
    ///
    /// * `f` - Step producing the next outcome
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let parsed: Outcome<u16, String> = Outcome::success("8080").flat_map(|raw: &str| {
    ///     match raw.parse::<u16>() {
    ///         Ok(port) => Outcome::success(port),
    ///         Err(err) => Outcome::failure(err.to_string()),
    ///     }
    /// });
    /// assert_eq!(parsed.into_value(), 8080);
    /// ```
    #[track_caller]
    #[inline]
    pub fn flat_map<R, F>(self, f: F) -> Outcome<R, E>
    where
        F: FnOnce(T) -> Outcome<R, E>,
        E: FromFault,
    {
        self.flat_map_with(f, E::from_fault)
    }

    /// Alias for [`flat_map`](Self::flat_map).
    #[track_caller]
    #[inline]
    pub fn and_then<R, F>(self, f: F) -> Outcome<R, E>
    where
        F: FnOnce(T) -> Outcome<R, E>,
        E: FromFault,
    {
        self.flat_map_with(f, E::from_fault)
    }

    /// Like [`flat_map`](Self::flat_map), but converts a captured panic with `on_fault`
    /// instead of the [`FromFault`] implementation of `E`.
    #[track_caller]
    pub fn flat_map_with<R, F, H>(self, f: F, on_fault: H) -> Outcome<R, E>
    where
        F: FnOnce(T) -> Outcome<R, E>,
        H: FnOnce(Fault) -> E,
    {
        match self {
            Self::Success(value) => match capture(Location::caller(), move || f(value)) {
                Ok(next) => next,
                Err(fault) => Outcome::Failure(on_fault(fault)),
            },
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Applies a [`Step`] to the success value with the same rules as
    /// [`flat_map`](Self::flat_map).
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, Step};
    ///
    /// struct Trim;
    ///
    /// impl Step<String, String, String> for Trim {
    ///     fn apply(&self, input: String) -> Outcome<String, String> {
    ///         Outcome::success(input.trim().to_string())
    ///     }
    /// }
    ///
    /// let trimmed = Outcome::success("  hello world  ".to_string()).then_step(&Trim);
    /// assert_eq!(trimmed.value(), "hello world");
    /// ```
    #[track_caller]
    #[inline]
    pub fn then_step<R, S>(self, step: &S) -> Outcome<R, E>
    where
        S: Step<T, R, E> + ?Sized,
        E: FromFault,
    {
        self.flat_map_with(|value| step.apply(value), E::from_fault)
    }

    /// Transforms the failure value.
    ///
    /// This is an explicit boundary operation, typically used when one layer's error
    /// type is lifted into another's. A success passes through unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::failure("short");
    /// assert_eq!(outcome.map_error(str::len), Outcome::failure(5));
    /// ```
    #[inline]
    pub fn map_error<F, NewE>(self, f: F) -> Outcome<T, NewE>
    where
        F: FnOnce(E) -> NewE,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Runs `f` and returns its outcome, converting a panic into a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Fault, Outcome};
    ///
    /// let outcome: Outcome<(), Fault> = Outcome::catching(|| panic!("lost connection"));
    /// assert_eq!(outcome.error().message(), "lost connection");
    /// ```
    #[track_caller]
    #[inline]
    pub fn catching<F>(f: F) -> Self
    where
        F: FnOnce() -> Self,
        E: FromFault,
    {
        Self::catching_with(f, E::from_fault)
    }

    /// Like [`catching`](Self::catching), converting a panic with `on_fault`.
    #[track_caller]
    pub fn catching_with<F, H>(f: F, on_fault: H) -> Self
    where
        F: FnOnce() -> Self,
        H: FnOnce(Fault) -> E,
    {
        match capture(Location::caller(), f) {
            Ok(outcome) => outcome,
            Err(fault) => Self::Failure(on_fault(fault)),
        }
    }
}

impl<T, E> Outcome<T, E>
where
    E: FromFault + 'static,
{
    /// Starts a [`SeededPipeline`] bound to `initial`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let shouted = Outcome::<String, String>::builder("  hello world  ".to_string())
    ///     .add_step(|s: String| Outcome::success(s.trim().to_string()))
    ///     .add_step(|s: String| {
    ///         if s.is_empty() {
    ///             Outcome::failure("Input is empty".to_string())
    ///         } else {
    ///             Outcome::success(s.to_uppercase())
    ///         }
    ///     })
    ///     .execute();
    ///
    /// assert_eq!(shouted.value(), "HELLO WORLD");
    /// ```
    #[inline]
    pub fn builder(initial: T) -> SeededPipeline<T, E> {
        SeededPipeline::new(initial)
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        match self {
            Self::Success(inner) => inner,
            Self::Failure(error) => Outcome::Failure(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}
