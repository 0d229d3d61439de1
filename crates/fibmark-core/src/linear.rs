//! Linear iteration.
//!
//! Repeats (a, b) <- (b, a + b) exactly n times. The only strategy
//! that performs no multiplication, which makes it the ground-truth
//! oracle the benchmark validates every other strategy against.

use fibmark_bignum::Number;

use crate::calculator::{CoreCalculator, FibError};
use crate::observer::ProgressObserver;
use crate::progress::{CancellationToken, ProgressUpdate};

/// O(n) addition-only calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearIteration;

impl LinearIteration {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl CoreCalculator for LinearIteration {
    fn calculate_core(
        &self,
        cancel: &CancellationToken,
        observer: &dyn ProgressObserver,
        n: &Number,
    ) -> Result<Number, FibError> {
        let mut a = Number::zero();
        let mut b = Number::from(1u64);

        let total = n.to_f64();
        let mut step = 0f64;
        let frozen = observer.freeze();

        let mut remaining = n.clone();
        while !remaining.is_zero() {
            cancel.check_cancelled()?;

            let sum = &a + &b;
            a = std::mem::replace(&mut b, sum);
            remaining.decrement();

            step += 1.0;
            let progress = step / total;
            if frozen.should_report(progress) {
                frozen.update(progress);
                observer.on_progress(&ProgressUpdate::new(
                    self.name(),
                    progress,
                    step as u64,
                    total as u64,
                ));
            }
        }

        observer.on_progress(&ProgressUpdate::done(self.name()));
        Ok(a)
    }

    fn name(&self) -> &'static str {
        "Linear"
    }
}
