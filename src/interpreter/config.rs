//! Execution settings

use std::time::Duration;

/// Nominal pause after each commit when a person is watching
pub const INTERACTIVE_PACING: Duration = Duration::from_millis(1);

/// How the engine runs a program.
///
/// The default is headless: no pacing, OS entropy for `?`, and no step limit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExecutionConfig {
    /// Pause after each commit so a display can repaint. Never needed for correctness.
    pub pacing: Duration,
    /// Seed for `?`; `None` draws from OS entropy
    pub seed: Option<u64>,
    /// Abort with an error after this many dispatched instructions
    pub step_limit: Option<u64>,
}

impl ExecutionConfig {
    /// Settings for a run shown in the terminal canvas
    pub fn interactive() -> Self {
        ExecutionConfig {
            pacing: INTERACTIVE_PACING,
            ..Self::default()
        }
    }

    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_step_limit(mut self, limit: u64) -> Self {
        self.step_limit = Some(limit);
        self
    }
}
