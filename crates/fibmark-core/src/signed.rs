//! Signed wrapper around the unsigned big integer.
//!
//! The Strassen-reduced matrix product forms differences that go
//! negative, so its entries carry a sign. The tagged representation
//! makes "magnitude empty with a non-zero sign" unrepresentable.

use std::cmp::Ordering;
use std::ops::{Add, Neg, Sub};

use fibmark_bignum::{Digit, Multiplier, Nat};

/// A signed big integer: zero, or a strictly positive magnitude with
/// a sign.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Int<D: Digit> {
    #[default]
    Zero,
    Pos(Nat<D>),
    Neg(Nat<D>),
}

impl<D: Digit> Int<D> {
    /// Wrap an unsigned value as a non-negative signed one.
    #[must_use]
    pub fn from_nat(value: Nat<D>) -> Self {
        if value.is_zero() {
            Int::Zero
        } else {
            Int::Pos(value)
        }
    }

    /// Recover the unsigned value; `None` for negative numbers.
    #[must_use]
    pub fn into_nat(self) -> Option<Nat<D>> {
        match self {
            Int::Zero => Some(Nat::zero()),
            Int::Pos(magnitude) => Some(magnitude),
            Int::Neg(_) => None,
        }
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        matches!(self, Int::Zero)
    }

    /// Signed product through the given multiplication backend.
    #[must_use]
    pub fn mul<M: Multiplier<D>>(&self, other: &Self, m: &M) -> Self {
        match (self, other) {
            (Int::Zero, _) | (_, Int::Zero) => Int::Zero,
            (Int::Pos(a), Int::Pos(b)) | (Int::Neg(a), Int::Neg(b)) => Int::Pos(m.multiply(a, b)),
            (Int::Pos(a), Int::Neg(b)) | (Int::Neg(a), Int::Pos(b)) => Int::Neg(m.multiply(a, b)),
        }
    }
}

impl<D: Digit> From<u64> for Int<D> {
    fn from(v: u64) -> Self {
        Int::from_nat(Nat::from(v))
    }
}

impl<D: Digit> Neg for &Int<D> {
    type Output = Int<D>;

    fn neg(self) -> Int<D> {
        match self {
            Int::Zero => Int::Zero,
            Int::Pos(m) => Int::Neg(m.clone()),
            Int::Neg(m) => Int::Pos(m.clone()),
        }
    }
}

impl<D: Digit> Add<&Int<D>> for &Int<D> {
    type Output = Int<D>;

    fn add(self, rhs: &Int<D>) -> Int<D> {
        match (self, rhs) {
            (Int::Zero, x) | (x, Int::Zero) => x.clone(),
            (Int::Pos(a), Int::Pos(b)) => Int::Pos(a + b),
            (Int::Neg(a), Int::Neg(b)) => Int::Neg(a + b),
            // Mixed signs reduce to a comparison of the positive
            // magnitude p against the negative magnitude q.
            (Int::Pos(p), Int::Neg(q)) | (Int::Neg(q), Int::Pos(p)) => match p.cmp(q) {
                Ordering::Greater => Int::Pos(p - q),
                Ordering::Less => Int::Neg(q - p),
                Ordering::Equal => Int::Zero,
            },
        }
    }
}

impl<D: Digit> Sub<&Int<D>> for &Int<D> {
    type Output = Int<D>;

    fn sub(self, rhs: &Int<D>) -> Int<D> {
        self + &(-rhs)
    }
}
