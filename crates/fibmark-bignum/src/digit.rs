//! The digit parameter of the big-integer representation.
//!
//! A digit is an unsigned integer of 8, 16 or 32 bits. 64-bit digits
//! are deliberately not supported: the arithmetic kernels accumulate
//! into a `u64` and need double-width headroom.

use std::fmt;

use num_traits::{PrimInt, WrappingAdd, WrappingSub};

/// One element of a big-integer digit vector.
///
/// Implemented for `u8`, `u16` and `u32`. The trait collects the
/// primitive-integer bounds the arithmetic kernels rely on plus
/// truncating conversions to and from the `u64` accumulator.
pub trait Digit:
    PrimInt + WrappingAdd + WrappingSub + Default + fmt::Debug + fmt::LowerHex + Send + Sync + 'static
{
    /// Width of the digit in bits.
    const BITS: u32;

    /// Truncate a `u64` accumulator to one digit.
    fn from_u64(v: u64) -> Self;

    /// Widen a digit into a `u64` accumulator. (Named to avoid the
    /// fallible `ToPrimitive::to_u64` reachable through `PrimInt`.)
    fn as_u64(self) -> u64;

    /// `1` when `b` holds, `0` otherwise. Used to fold a carry/borrow
    /// flag into digit arithmetic.
    #[inline]
    fn from_bool(b: bool) -> Self {
        if b {
            Self::one()
        } else {
            Self::zero()
        }
    }
}

macro_rules! impl_digit {
    ($ty:ty, $bits:expr) => {
        impl Digit for $ty {
            const BITS: u32 = $bits;

            #[inline]
            fn from_u64(v: u64) -> Self {
                v as $ty
            }

            #[inline]
            fn as_u64(self) -> u64 {
                u64::from(self)
            }
        }
    };
}

impl_digit!(u8, 8);
impl_digit!(u16, 16);
impl_digit!(u32, 32);
