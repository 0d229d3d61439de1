//! The owned big-integer value.
//!
//! `Nat<D>` holds a little-endian digit vector representing the
//! non-negative integer `sum(d[i] * 2^(BITS*i))`. The normalised-form
//! invariant holds after every public operation: the top digit, when
//! present, is non-zero, and zero is the empty vector.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};
use std::str::FromStr;

use crate::decimal::{self, ParseNatError};
use crate::digit::Digit;
use crate::window;

/// The digit width used at the library boundary.
pub type Number = Nat<u32>;

/// A big unsigned integer over digits of width `D::BITS`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Nat<D: Digit = u32> {
    digits: Vec<D>,
}

impl<D: Digit> Nat<D> {
    /// The value zero (no digits).
    #[must_use]
    pub fn zero() -> Self {
        Self { digits: Vec::new() }
    }

    /// Take ownership of a digit vector and normalise it.
    #[must_use]
    pub fn from_digits(digits: Vec<D>) -> Self {
        let mut n = Self { digits };
        n.full_reduce();
        n
    }

    /// The little-endian digit view.
    #[must_use]
    pub fn digits(&self) -> &[D] {
        &self.digits
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// True when the lowest bit is set. Zero is even.
    #[must_use]
    pub fn is_odd(&self) -> bool {
        self.digits
            .first()
            .is_some_and(|&d| d & D::one() == D::one())
    }

    /// Number of significant bits; zero has bit length 0.
    #[must_use]
    pub fn bit_len(&self) -> usize {
        match self.digits.last() {
            Some(top) => self.digits.len() * D::BITS as usize - top.leading_zeros() as usize,
            None => 0,
        }
    }

    /// Add one in place.
    pub fn increment(&mut self) {
        if window::increment(&mut self.digits) {
            self.digits.push(D::one());
        }
    }

    /// Subtract one in place; zero stays zero (the borrow is absorbed
    /// by normalisation).
    pub fn decrement(&mut self) {
        window::decrement(&mut self.digits);
        self.reduce_once();
    }

    /// Re-pack the value into digits of a different width.
    #[must_use]
    pub fn cast<T: Digit>(&self) -> Nat<T> {
        let src_bits = self.digits.len() * D::BITS as usize;
        let len = src_bits.div_ceil(T::BITS as usize);
        let mut out = vec![T::zero(); len];
        window::repack(&mut out, &self.digits);
        Nat::from_digits(out)
    }

    /// The value as a `u64`, when it fits.
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> {
        if self.bit_len() > 64 {
            return None;
        }
        let mut v = 0u64;
        for &d in self.digits.iter().rev() {
            v = (v << D::BITS) | d.as_u64();
        }
        Some(v)
    }

    /// Lossy conversion to `f64`, most significant digits first.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        let shift = 2f64.powi(D::BITS as i32);
        let mut out = 0f64;
        for &d in self.digits.iter().rev() {
            out = out * shift + d.as_u64() as f64;
        }
        out
    }

    /// Decimal rendering. With `full` set the whole expansion is
    /// produced; otherwise values longer than 10 decimal digits are
    /// truncated to 10 significant figures with an `e+<exp>` tail.
    #[must_use]
    pub fn render(&self, full: bool) -> String {
        decimal::render(self, full)
    }

    pub(crate) fn reduce_once(&mut self) {
        if self.digits.last() == Some(&D::zero()) {
            self.digits.pop();
        }
    }

    pub(crate) fn full_reduce(&mut self) {
        while self.digits.last() == Some(&D::zero()) {
            self.digits.pop();
        }
    }
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {$(
        impl<D: Digit> From<$ty> for Nat<D> {
            fn from(v: $ty) -> Self {
                let mut v = v as u64;
                let mut digits = Vec::new();
                while v != 0 {
                    digits.push(D::from_u64(v));
                    v >>= D::BITS;
                }
                Self { digits }
            }
        }
    )*};
}

impl_from_unsigned!(u8, u16, u32, u64, usize);

impl<D: Digit> FromStr for Nat<D> {
    type Err = ParseNatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decimal::parse(s)
    }
}

impl<D: Digit> fmt::Display for Nat<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(true))
    }
}

impl<D: Digit> Ord for Nat<D> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Both sides normalised, so more digits means a larger value.
        self.digits
            .len()
            .cmp(&other.digits.len())
            .then_with(|| {
                for (l, r) in self.digits.iter().rev().zip(other.digits.iter().rev()) {
                    match l.cmp(r) {
                        Ordering::Equal => {}
                        ord => return ord,
                    }
                }
                Ordering::Equal
            })
    }
}

impl<D: Digit> PartialOrd for Nat<D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<D: Digit> AddAssign<&Nat<D>> for Nat<D> {
    fn add_assign(&mut self, rhs: &Nat<D>) {
        if self.digits.len() < rhs.digits.len() {
            self.digits.resize(rhs.digits.len(), D::zero());
        }
        if window::add_assign(&mut self.digits, &rhs.digits) {
            self.digits.push(D::one());
        }
    }
}

impl<D: Digit> SubAssign<&Nat<D>> for Nat<D> {
    fn sub_assign(&mut self, rhs: &Nat<D>) {
        debug_assert!(&*self >= rhs);
        window::sub_assign(&mut self.digits, &rhs.digits);
        self.full_reduce();
    }
}

impl<D: Digit> BitAndAssign<&Nat<D>> for Nat<D> {
    fn bitand_assign(&mut self, rhs: &Nat<D>) {
        let len = self.digits.len().min(rhs.digits.len());
        self.digits.truncate(len);
        window::bitand_assign(&mut self.digits, &rhs.digits[..len]);
        self.full_reduce();
    }
}

impl<D: Digit> BitOrAssign<&Nat<D>> for Nat<D> {
    fn bitor_assign(&mut self, rhs: &Nat<D>) {
        if self.digits.len() < rhs.digits.len() {
            self.digits.resize(rhs.digits.len(), D::zero());
        }
        window::bitor_assign(&mut self.digits[..rhs.digits.len()], &rhs.digits);
    }
}

impl<D: Digit> ShlAssign<usize> for Nat<D> {
    fn shl_assign(&mut self, bits: usize) {
        if self.is_zero() {
            return;
        }
        let whole = bits / D::BITS as usize;
        let partial = (bits % D::BITS as usize) as u32;
        if whole > 0 {
            let mut widened = vec![D::zero(); whole];
            widened.append(&mut self.digits);
            self.digits = widened;
        }
        let spill = window::lshift_in_place(&mut self.digits[whole..], partial);
        if spill != D::zero() {
            self.digits.push(spill);
        }
    }
}

impl<D: Digit> ShrAssign<usize> for Nat<D> {
    fn shr_assign(&mut self, bits: usize) {
        let whole = bits / D::BITS as usize;
        if self.digits.len() <= whole {
            self.digits.clear();
            return;
        }
        self.digits.drain(..whole);
        let partial = (bits % D::BITS as usize) as u32;
        window::rshift_in_place(&mut self.digits, partial);
        self.reduce_once();
    }
}

macro_rules! impl_value_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $rhs:ty) => {
        impl<D: Digit> $trait<$rhs> for &Nat<D> {
            type Output = Nat<D>;

            fn $method(self, rhs: $rhs) -> Nat<D> {
                let mut out = self.clone();
                $assign_trait::$assign_method(&mut out, rhs);
                out
            }
        }
    };
}

impl_value_op!(Add, add, AddAssign, add_assign, &Nat<D>);
impl_value_op!(Sub, sub, SubAssign, sub_assign, &Nat<D>);
impl_value_op!(BitAnd, bitand, BitAndAssign, bitand_assign, &Nat<D>);
impl_value_op!(BitOr, bitor, BitOrAssign, bitor_assign, &Nat<D>);
impl_value_op!(Shl, shl, ShlAssign, shl_assign, usize);
impl_value_op!(Shr, shr, ShrAssign, shr_assign, usize);
