//! Strassen-reduced 2x2 matrix exponentiation.
//!
//! Same exponentiation loop as the literal matrix strategy, but the
//! matrix product uses Strassen's seven multiplications:
//!
//! ```text
//! m0 = (a00 + a11)(b00 + b11)    m4 = (a00 + a01) b11
//! m1 = (a10 + a11) b00           m5 = (a10 - a00)(b00 + b01)
//! m2 = a00 (b01 - b11)           m6 = (a01 - a11)(b10 + b11)
//! m3 = a11 (b10 - b00)
//!
//! c00 = m0 + m3 - m4 + m6        c01 = m2 + m4
//! c10 = m1 + m3                  c11 = m0 - m1 + m2 + m5
//! ```
//!
//! The differences go negative, so entries are signed. The final
//! extraction of c00 must find a non-negative value; anything else is
//! a broken invariant.

use std::marker::PhantomData;

use fibmark_bignum::{Digit, Multiplier, Number};

use crate::calculator::{CoreCalculator, FibError};
use crate::observer::ProgressObserver;
use crate::progress::{CancellationToken, ProgressUpdate};
use crate::signed::Int;

/// A 2x2 matrix of signed big integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedMat2<D: Digit> {
    pub e00: Int<D>,
    pub e01: Int<D>,
    pub e10: Int<D>,
    pub e11: Int<D>,
}

impl<D: Digit> SignedMat2<D> {
    /// The Fibonacci base matrix [[0 1][1 1]].
    #[must_use]
    pub fn base() -> Self {
        Self {
            e00: Int::Zero,
            e01: Int::from(1u64),
            e10: Int::from(1u64),
            e11: Int::from(1u64),
        }
    }

    /// Seven-multiplication Strassen product.
    #[must_use]
    pub fn mul<M: Multiplier<D>>(&self, o: &Self, m: &M) -> Self {
        let m0 = (&self.e00 + &self.e11).mul(&(&o.e00 + &o.e11), m);
        let m1 = (&self.e10 + &self.e11).mul(&o.e00, m);
        let m2 = self.e00.mul(&(&o.e01 - &o.e11), m);
        let m3 = self.e11.mul(&(&o.e10 - &o.e00), m);
        let m4 = (&self.e00 + &self.e01).mul(&o.e11, m);
        let m5 = (&self.e10 - &self.e00).mul(&(&o.e00 + &o.e01), m);
        let m6 = (&self.e01 - &self.e11).mul(&(&o.e10 + &o.e11), m);
        Self {
            e00: &(&(&m0 + &m3) - &m4) + &m6,
            e01: &m2 + &m4,
            e10: &m1 + &m3,
            e11: &(&(&m0 - &m1) + &m2) + &m5,
        }
    }
}

/// Strassen matrix exponentiation calculator.
pub struct StrassenExponentiation<D: Digit, M: Multiplier<D>> {
    mul: M,
    _digit: PhantomData<D>,
}

impl<D: Digit, M: Multiplier<D>> StrassenExponentiation<D, M> {
    #[must_use]
    pub fn new(mul: M) -> Self {
        Self {
            mul,
            _digit: PhantomData,
        }
    }
}

impl<D: Digit, M: Multiplier<D>> CoreCalculator for StrassenExponentiation<D, M> {
    fn calculate_core(
        &self,
        cancel: &CancellationToken,
        observer: &dyn ProgressObserver,
        n: &Number,
    ) -> Result<Number, FibError> {
        let mut k = n.cast::<D>();
        let mut fib = SignedMat2::<D>::base();
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
        fib.e00
            .into_nat()
            .map(|value| value.cast())
            .ok_or_else(|| FibError::Calculation("negative Fibonacci matrix entry".into()))
    }

    fn name(&self) -> &'static str {
        "Strassen"
    }
}
