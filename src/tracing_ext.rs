//! Tracing integration for outcome-rail.
//!
//! With the `tracing` feature enabled, [`Pipeline::execute`](crate::Pipeline::execute)
//! runs inside a `pipeline.execute` span, steps and short-circuits are reported as
//! `trace`/`debug` events, and a captured [`Fault`] remembers the span it was
//! raised in. Failure payloads are never formatted: presenting the terminal error
//! stays the caller's job.
//!
//! # Feature Flag
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["tracing"] }
//! ```

use tracing::Span;

use crate::types::Fault;

/// Attaches the current span's name to `fault`.
///
/// Faults captured by the combinators already pass through here; call it directly
/// when building a [`Fault`] by hand inside an instrumented step.
///
/// # Example
///
/// ```rust,ignore
/// use outcome_rail::tracing_ext::instrument_fault;
/// use outcome_rail::Fault;
///
/// let span = tracing::info_span!("save_user");
/// let _entered = span.enter();
/// let fault = instrument_fault(Fault::new("connection reset"));
/// ```
pub fn instrument_fault(fault: Fault) -> Fault {
    match span_name(&Span::current()) {
        Some(name) => fault.in_span(name),
        None => fault,
    }
}

/// Name of `span`, or `None` for a disabled span.
fn span_name(span: &Span) -> Option<&'static str> {
    span.metadata().map(|metadata| metadata.name())
}

pub(crate) fn execute_span(name: Option<&str>, steps: usize) -> Span {
    tracing::debug_span!("pipeline.execute", pipeline = name.unwrap_or("unnamed"), steps)
}
