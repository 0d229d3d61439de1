//! 2x2 matrix exponentiation.
//!
//! Uses the identity
//!
//! ```text
//! [[0 1][1 1]]^n = [[F(n-1) F(n)][F(n) F(n+1)]]
//! ```
//!
//! with binary square-and-multiply. Both the accumulator and the step
//! matrix start at the base matrix, so the loop computes base^(n+1)
//! whose top-left entry is F(n). The literal eight-multiplication
//! product keeps all entries non-negative.

use std::marker::PhantomData;

use fibmark_bignum::{Digit, Multiplier, Nat, Number};

use crate::calculator::{CoreCalculator, FibError};
use crate::observer::ProgressObserver;
use crate::progress::{CancellationToken, ProgressUpdate};

/// A 2x2 matrix of big integers under ring multiplication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mat2<D: Digit> {
    pub e00: Nat<D>,
    pub e01: Nat<D>,
    pub e10: Nat<D>,
    pub e11: Nat<D>,
}

impl<D: Digit> Mat2<D> {
    /// The Fibonacci base matrix [[0 1][1 1]].
    #[must_use]
    pub fn base() -> Self {
        Self {
            e00: Nat::zero(),
            e01: Nat::from(1u64),
            e10: Nat::from(1u64),
            e11: Nat::from(1u64),
        }
    }

    /// Literal matrix product using eight multiplications.
    #[must_use]
    pub fn mul<M: Multiplier<D>>(&self, o: &Self, m: &M) -> Self {
        Self {
            e00: &m.multiply(&self.e00, &o.e00) + &m.multiply(&self.e01, &o.e10),
            e01: &m.multiply(&self.e00, &o.e01) + &m.multiply(&self.e01, &o.e11),
            e10: &m.multiply(&self.e10, &o.e00) + &m.multiply(&self.e11, &o.e10),
            e11: &m.multiply(&self.e10, &o.e01) + &m.multiply(&self.e11, &o.e11),
        }
    }
}

/// Matrix exponentiation calculator over a chosen digit width and
/// multiplication backend.
pub struct MatrixExponentiation<D: Digit, M: Multiplier<D>> {
    mul: M,
    _digit: PhantomData<D>,
}

impl<D: Digit, M: Multiplier<D>> MatrixExponentiation<D, M> {
    #[must_use]
    pub fn new(mul: M) -> Self {
        Self {
            mul,
            _digit: PhantomData,
        }
    }
}

impl<D: Digit, M: Multiplier<D>> CoreCalculator for MatrixExponentiation<D, M> {
    fn calculate_core(
        &self,
        cancel: &CancellationToken,
        observer: &dyn ProgressObserver,
        n: &Number,
    ) -> Result<Number, FibError> {
        let mut k: Nat<D> = n.cast();
        let mut fib = Mat2::<D>::base();
        let mut step = fib.clone();

        let total_bits = k.bit_len() as u64;
        let mut done_bits = 0u64;
        let frozen = observer.freeze();

        while !k.is_zero() {
            cancel.check_cancelled()?;

            if k.is_odd() {
                fib = fib.mul(&step, &self.mul);
            }
            step = step.mul(&step, &self.mul);
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
        Ok(fib.e00.cast())
    }

    fn name(&self) -> &'static str {
        "Matrix"
    }
}
