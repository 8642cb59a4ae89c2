//! `TerminalReporter` — Presentation-layer implementation of `ProgressReporter`.
//!
//! Wraps `&OutputContext` so application services can emit progress events
//! without depending on any presentation type directly.

use crate::application::ports::ProgressReporter;
use crate::output::OutputContext;

/// Terminal progress reporter that wraps an `OutputContext`.
///
/// Every event is also recorded with `tracing`, so `--quiet` and `--json`
/// runs still leave a trail on stderr.
pub struct TerminalReporter<'a> {
    ctx: &'a OutputContext,
}

impl<'a> TerminalReporter<'a> {
    /// Create a new `TerminalReporter` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }
}

impl ProgressReporter for TerminalReporter<'_> {
    fn step(&self, message: &str) {
        tracing::debug!("{message}");
        self.ctx.step(message);
    }

    fn success(&self, message: &str) {
        tracing::debug!("{message}");
        self.ctx.success(message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
        self.ctx.warn(message);
    }
}
