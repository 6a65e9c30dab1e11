//! Per-run state shared by the commands.

use crate::config::Settings;
use std::time::{Duration, Instant};
use tracing::Span;

/// Settings and timing for one command invocation.
#[derive(Debug)]
pub struct RunContext {
    /// Effective settings
    pub settings: Settings,
    span: Span,
    started: Instant,
}

impl RunContext {
    /// Log the start of a run and open its span.
    pub fn start(command: &'static str, settings: Settings) -> Self {
        let span = tracing::info_span!("run", command);
        span.in_scope(|| tracing::info!("Analysis started"));
        Self {
            settings,
            span,
            started: Instant::now(),
        }
    }

    /// Span every log line of the run is recorded under.
    pub fn span(&self) -> &Span {
        &self.span
    }

    /// Time since the run started.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Log the end of the run with its total runtime.
    pub fn finish(self) -> Duration {
        let elapsed = self.elapsed();
        self.span.in_scope(|| {
            tracing::info!("Analysis finished");
            tracing::info!("Total runtime: {:.2}s", elapsed.as_secs_f64());
        });
        elapsed
    }
}
