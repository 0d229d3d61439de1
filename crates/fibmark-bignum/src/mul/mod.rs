//! Multiplication backends.
//!
//! `Multiplier` is the narrow interface every backend implements on
//! the same `Nat` type. `Schoolbook` and `Karatsuba` work at any digit
//! width; `Dft` and `Fft` convolve byte-width digits through the
//! frequency domain and are implemented for `u8` only.

use crate::digit::Digit;
use crate::nat::Nat;

mod dft;
mod fft;
mod karatsuba;
mod schoolbook;
mod spectral;

pub use dft::Dft;
pub use fft::Fft;
pub use karatsuba::Karatsuba;
pub use schoolbook::Schoolbook;

/// Narrow interface for multiplication operations.
pub trait Multiplier<D: Digit>: Send + Sync {
    /// Multiply two big unsigned integers.
    fn multiply(&self, a: &Nat<D>, b: &Nat<D>) -> Nat<D>;

    /// Square a big unsigned integer (may be optimized over multiply).
    fn square(&self, a: &Nat<D>) -> Nat<D> {
        self.multiply(a, a)
    }

    /// Get the name of this multiplication backend.
    fn name(&self) -> &'static str;
}
