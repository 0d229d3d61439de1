//! Calculator traits and the `FibCalculator` decorator.
//!
//! `Calculator` is the public trait consumed by the driver.
//! `CoreCalculator` is the internal trait implemented by algorithms;
//! the benchmark drives it directly so validation exercises the real
//! algorithm. `FibCalculator` is a decorator that adds the fast path
//! for indices whose Fibonacci number fits a `u64`.

use std::sync::Arc;

use fibmark_bignum::Number;

use crate::constants::{FIB_TABLE, MAX_FIB_U64};
use crate::observer::ProgressObserver;
use crate::progress::{CancellationToken, ProgressUpdate};

/// Error type for Fibonacci calculations.
#[derive(Debug, thiserror::Error)]
pub enum FibError {
    /// A calculation error occurred.
    #[error("calculation error: {0}")]
    Calculation(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Calculation was cancelled.
    #[error("calculation cancelled")]
    Cancelled,

    /// Calculation timed out.
    #[error("calculation timed out after {0}")]
    Timeout(String),

    /// Result does not match the linear reference.
    #[error("result mismatch against the linear reference")]
    Mismatch,
}

/// Public trait for Fibonacci calculators.
pub trait Calculator: Send + Sync {
    /// Calculate F(n).
    fn calculate(
        &self,
        cancel: &CancellationToken,
        observer: &dyn ProgressObserver,
        n: &Number,
    ) -> Result<Number, FibError>;

    /// Get the name of this calculator.
    fn name(&self) -> &'static str;
}

/// Internal trait for algorithm implementations.
/// Wrapped by `FibCalculator` which adds the fast path.
pub trait CoreCalculator: Send + Sync {
    /// Perform the core calculation for large n.
    fn calculate_core(
        &self,
        cancel: &CancellationToken,
        observer: &dyn ProgressObserver,
        n: &Number,
    ) -> Result<Number, FibError>;

    /// Get the name of this algorithm.
    fn name(&self) -> &'static str;
}

/// Decorator that wraps a `CoreCalculator` with the small-index fast
/// path.
pub struct FibCalculator {
    inner: Arc<dyn CoreCalculator>,
}

impl FibCalculator {
    /// Create a new `FibCalculator` wrapping the given core calculator.
    #[must_use]
    pub fn new(inner: Arc<dyn CoreCalculator>) -> Self {
        Self { inner }
    }

    /// Fast path for small n (n <= 93) using the precomputed table.
    fn calculate_small(n: u64) -> Number {
        Number::from(FIB_TABLE[n as usize])
    }
}

impl Calculator for FibCalculator {
    fn calculate(
        &self,
        cancel: &CancellationToken,
        observer: &dyn ProgressObserver,
        n: &Number,
    ) -> Result<Number, FibError> {
        // Fast path for small n
        if let Some(small) = n.to_u64().filter(|&v| v <= MAX_FIB_U64) {
            observer.on_progress(&ProgressUpdate::done(self.inner.name()));
            return Ok(Self::calculate_small(small));
        }

        // Check cancellation before starting
        if cancel.is_cancelled() {
            return Err(FibError::Cancelled);
        }

        self.inner.calculate_core(cancel, observer, n)
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}
