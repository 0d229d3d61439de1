//! # fibmark-bignum
//!
//! Arbitrary-precision unsigned integers over a variable-length
//! little-endian digit vector, parameterised by digit width.
//! Multiplication is pluggable: schoolbook, Karatsuba, direct DFT,
//! and Cooley-Tukey FFT backends all implement the same `Multiplier`
//! trait on the same `Nat` type.

pub mod digit;
pub mod mul;
pub mod nat;
pub mod window;

mod decimal;

// Re-exports
pub use decimal::ParseNatError;
pub use digit::Digit;
pub use mul::{Dft, Fft, Karatsuba, Multiplier, Schoolbook};
pub use nat::{Nat, Number};
