//! Tracing integration.
//!
//! The railway itself never logs. These helpers let a caller emit `tracing`
//! events at chosen points of a pipeline, behaving like a
//! [`tee`](crate::RopResult::tee) that observes both tracks.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! rop-rail = { version = "0.1", features = ["tracing"] }
//! ```

use tracing::Span;

use crate::rail::RopResult;

/// Emits a `tracing` event describing which track a result is on.
///
/// Failures are reported at `WARN` with the error count and the rendered
/// error set; successes at `TRACE`. The result is returned unchanged.
///
/// # Example
///
/// ```rust,ignore
/// use rop_rail::traits::TraceExt;
///
/// let car = build_car().trace_stage("assemble_car");
/// ```
pub trait TraceExt: Sized {
    /// Emits the event in the current span.
    fn trace_stage(self, stage: &'static str) -> Self;

    /// Emits the event inside `span`.
    fn trace_stage_in(self, span: &Span, stage: &'static str) -> Self {
        let _entered = span.enter();
        self.trace_stage(stage)
    }
}

impl<T> TraceExt for RopResult<T> {
    fn trace_stage(self, stage: &'static str) -> Self {
        match &self {
            RopResult::Success(_) => tracing::trace!(stage, "stage on success track"),
            RopResult::Failure(errors) => tracing::warn!(
                stage,
                error_count = errors.len(),
                errors = %errors,
                "stage on failure track"
            ),
        }
        self
    }
}
