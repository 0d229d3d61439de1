//! Concrete progress observers.

use crate::constants::PROGRESS_REPORT_THRESHOLD;
use crate::observer::{FrozenObserver, ProgressObserver};
use crate::progress::ProgressUpdate;

/// Observer that discards all updates.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpObserver;

impl NoOpObserver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ProgressObserver for NoOpObserver {
    fn on_progress(&self, _update: &ProgressUpdate) {}

    fn freeze(&self) -> FrozenObserver {
        // Threshold 2.0 can never be crossed, so hot loops skip the
        // reporting path entirely.
        FrozenObserver::new(2.0)
    }
}

/// Observer that forwards updates to `tracing` at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl TracingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ProgressObserver for TracingObserver {
    fn on_progress(&self, update: &ProgressUpdate) {
        if update.done {
            tracing::debug!(algorithm = update.algorithm, "done");
        } else {
            tracing::debug!(
                algorithm = update.algorithm,
                progress = update.progress,
                step = update.current_step,
                total = update.total_steps,
                "progress"
            );
        }
    }

    fn freeze(&self) -> FrozenObserver {
        FrozenObserver::new(PROGRESS_REPORT_THRESHOLD)
    }
}
