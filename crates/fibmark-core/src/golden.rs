//! Golden-ratio iteration in Z[sqrt(5)] with implicit denominator 2.
//!
//! phi = (1 + sqrt(5)) / 2 is stored as the pair (a, b) meaning
//! (a + b*sqrt(5)) / 2. Multiplying two such halves doubles the
//! denominator, so each product is followed by a right shift of both
//! components. Fast exponentiation of phi yields F(n) in the sqrt(5)
//! component: phi^n = (L(n) + F(n)*sqrt(5)) / 2.

use std::marker::PhantomData;

use fibmark_bignum::{Digit, Multiplier, Nat, Number};

use crate::calculator::{CoreCalculator, FibError};
use crate::observer::ProgressObserver;
use crate::progress::{CancellationToken, ProgressUpdate};

/// An element a + b*sqrt(5) over big integers, denominator 2 implied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zrt5<D: Digit> {
    pub a: Nat<D>,
    pub b: Nat<D>,
}

impl<D: Digit> Zrt5<D> {
    /// phi itself: (1 + sqrt(5)) / 2.
    #[must_use]
    pub fn phi() -> Self {
        Self {
            a: Nat::from(1u64),
            b: Nat::from(1u64),
        }
    }

    /// Ring product:
    /// (a + b*sqrt(5))(a' + b'*sqrt(5)) = (aa' + 5bb') + (ab' + ba')*sqrt(5).
    #[must_use]
    pub fn mul<M: Multiplier<D>>(&self, o: &Self, m: &M) -> Self {
        let bb = m.multiply(&self.b, &o.b);
        let bb5 = &(&bb << 2) + &bb;
        Self {
            a: &m.multiply(&self.a, &o.a) + &bb5,
            b: &m.multiply(&self.a, &o.b) + &m.multiply(&self.b, &o.a),
        }
    }

    /// Divide both components by two, restoring the implicit
    /// denominator after a product of two halves.
    pub fn halve(&mut self) {
        self.a >>= 1;
        self.b >>= 1;
    }
}

/// Golden-ratio exponentiation calculator.
pub struct GoldenRatio<D: Digit, M: Multiplier<D>> {
    mul: M,
    _digit: PhantomData<D>,
}

impl<D: Digit, M: Multiplier<D>> GoldenRatio<D, M> {
    #[must_use]
    pub fn new(mul: M) -> Self {
        Self {
            mul,
            _digit: PhantomData,
        }
    }
}

impl<D: Digit, M: Multiplier<D>> CoreCalculator for GoldenRatio<D, M> {
    fn calculate_core(
        &self,
        cancel: &CancellationToken,
        observer: &dyn ProgressObserver,
        n: &Number,
    ) -> Result<Number, FibError> {
        if n.is_zero() {
            observer.on_progress(&ProgressUpdate::done(self.name()));
            return Ok(Number::zero());
        }

        // fib starts at phi^1, so the exponent loop runs on n - 1.
        let mut k = n.cast::<D>();
        k.decrement();
        let mut fib = Zrt5::<D>::phi();
        let mut step = fib.clone();

        let total_bits = k.bit_len().max(1) as u64;
        let mut done_bits = 0u64;
        let frozen = observer.freeze();

        while !k.is_zero() {
            cancel.check_cancelled()?;

            if k.is_odd() {
                fib = fib.mul(&step, &self.mul);
                fib.halve();
            }
            step = step.mul(&step, &self.mul);
            step.halve();
            k >>= 1;

            done_bits += 1;
            let progress = done_bits as f64 / total_bits as f64;
            if frozen.should_report(progress) {
                frozen.update(progress);
                observer.on_progress(&ProgressUpdate::new(
                    self.name(),
                    progress,
                    done_bits,
                    total_bits,
                ));
            }
        }

        observer.on_progress(&ProgressUpdate::done(self.name()));
        Ok(fib.b.cast())
    }

    fn name(&self) -> &'static str {
        "GoldenRatio"
    }
}
