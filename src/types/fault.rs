use core::any::Any;
use core::fmt::{self, Display};
use core::panic::Location;
use std::panic::{self, AssertUnwindSafe};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const NON_STRING_PAYLOAD: &str = "non-string panic payload";

/// A panic captured while running a step or combinator closure.
///
/// `Fault` is what the railway machinery produces when a closure handed to
/// [`Outcome::map`](crate::Outcome::map), [`Outcome::flat_map`](crate::Outcome::flat_map)
/// or [`Pipeline::execute`](crate::Pipeline::execute) unwinds. It is never stored in an
/// outcome directly: every boundary converts it into the outcome's error type through
/// [`FromFault`](crate::traits::FromFault) or an explicit handler closure.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Fault, Outcome};
///
/// let outcome: Outcome<i32, Fault> = Outcome::success(1).map(|_: i32| -> i32 {
///     panic!("collaborator exploded")
/// });
///
/// let fault = outcome.into_error();
/// assert_eq!(fault.message(), "collaborator exploded");
/// assert!(fault.location().is_some());
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fault {
    message: String,
    location: Option<String>,
    span: Option<String>,
}

impl Fault {
    /// Creates a fault with the given message and no location.
    ///
    /// Useful when a step wants to report an unexpected condition through the same
    /// conversion path as a captured panic.
    #[inline]
    pub fn new<M>(message: M) -> Self
    where
        M: Into<String>,
    {
        Self { message: message.into(), location: None, span: None }
    }

    /// Builds a fault from a panic payload returned by [`std::panic::catch_unwind`].
    ///
    /// `&'static str` and `String` payloads keep their text. Anything else is
    /// reported as a non-string payload.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => match payload.downcast_ref::<&'static str>() {
                Some(message) => (*message).to_owned(),
                None => NON_STRING_PAYLOAD.to_owned(),
            },
        };
        Self::new(message)
    }

    /// Records the source location of the combinator call that captured this fault.
    #[inline]
    pub fn at(mut self, location: &Location<'_>) -> Self {
        self.location = Some(format!("{}:{}:{}", location.file(), location.line(), location.column()));
        self
    }

    /// Records the name of the tracing span the fault was captured in.
    #[inline]
    pub fn in_span<S>(mut self, span: S) -> Self
    where
        S: Into<String>,
    {
        self.span = Some(span.into());
        self
    }

    /// The panic message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// `file:line:column` of the `map`/`flat_map`/`execute` call that caught the panic.
    #[inline]
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Name of the active tracing span at capture time.
    ///
    /// Always `None` unless the `tracing` feature is enabled and a span was entered.
    #[inline]
    pub fn span(&self) -> Option<&str> {
        self.span.as_deref()
    }

    /// Consumes the fault and returns its message.
    #[inline]
    pub fn into_message(self) -> String {
        self.message
    }
}

impl Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(location) = &self.location {
            write!(f, " (at {})", location)?;
        }
        if let Some(span) = &self.span {
            write!(f, " in span '{}'", span)?;
        }
        Ok(())
    }
}

impl std::error::Error for Fault {}

/// Runs `f`, turning an unwinding panic into a [`Fault`] tagged with `location`.
///
/// `f` owns everything it touches; nothing it captured is observed again after a
/// panic, so unwind safety is asserted here.
pub(crate) fn capture<R, F>(location: &'static Location<'static>, f: F) -> Result<R, Fault>
where
    F: FnOnce() -> R,
{
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
        let fault = Fault::from_panic(payload).at(location);

        #[cfg(feature = "tracing")]
        let fault = {
            let fault = crate::tracing_ext::instrument_fault(fault);
            tracing::warn!(fault = %fault, "captured panic in railway step");
            fault
        };

        fault
    })
}
