//! Iterative Cooley-Tukey FFT multiplication.
//!
//! Operands are written into a power-of-two complex buffer in
//! bit-reversed index order, transformed in place with
//! decimation-in-time butterflies, multiplied pointwise, permuted
//! again (the pointwise product is in natural order and the inverse
//! pass expects bit-reversed input) and inverted.

use std::f64::consts::TAU;

use num_complex::Complex64;

use crate::nat::Nat;

use super::spectral::{fold, round_real};
use super::Multiplier;

/// O(N log N) frequency-domain multiplication over byte digits.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fft;

impl Fft {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// Smallest power of two strictly above the top bit of `x`; 0 maps
/// to 0.
fn pow2_ceil(x: usize) -> usize {
    let mut x = x;
    let mut y;
    loop {
        y = x;
        x &= x.wrapping_sub(1);
        if x == 0 {
            break;
        }
    }
    y << 1
}

/// Advance `x` through the bit-reversed ordering of `0..top`: flip
/// from the top bit downward past the set bits, then set the first
/// clear one.
fn inc_rev(x: &mut usize, top: usize) {
    let mut bit = top >> 1;
    while *x & bit != 0 {
        *x ^= bit;
        bit >>= 1;
    }
    *x |= bit;
}

/// Scatter byte digits into a length-`n` complex buffer at
/// bit-reversed indices.
fn bit_reverse_digits(digits: &[u8], n: usize) -> Vec<Complex64> {
    let mut out = vec![Complex64::new(0.0, 0.0); n];
    let mut ri = 0usize;
    for &d in digits {
        out[ri] = Complex64::new(f64::from(d), 0.0);
        inc_rev(&mut ri, n);
    }
    out
}

/// Re-apply the bit-reverse permutation to a natural-order spectrum.
fn bit_reverse_spectrum(x: &[Complex64], n: usize) -> Vec<Complex64> {
    let mut out = vec![Complex64::new(0.0, 0.0); n];
    let mut ri = 0usize;
    for &c in x {
        out[ri] = c;
        inc_rev(&mut ri, n);
    }
    out
}

/// Twiddle base for block size `m`: exp(-2*pi*i/m) forward,
/// conjugate for the inverse pass.
fn twiddle(m: usize, inverse: bool) -> Complex64 {
    let angle = TAU / m as f64;
    Complex64::from_polar(1.0, if inverse { angle } else { -angle })
}

/// In-place decimation-in-time butterflies over a bit-reverse-permuted
/// buffer. The inverse pass divides every entry by N at the end.
fn fft(x: &mut [Complex64], inverse: bool) {
    let n = x.len();
    let mut m = 2;
    while m <= n {
        let omega = twiddle(m, inverse);
        let m2 = m >> 1;
        let mut k = 0;
        while k < n {
            let mut coef = Complex64::new(1.0, 0.0);
            for j in 0..m2 {
                let t = coef * x[k + j + m2];
                let u = x[k + j];
                x[k + j] = u + t;
                x[k + j + m2] = u - t;
                coef *= omega;
            }
            k += m;
        }
        m <<= 1;
    }
    if inverse {
        let scale = n as f64;
        for xi in x.iter_mut() {
            *xi /= scale;
        }
    }
}

impl Multiplier<u8> for Fft {
    fn multiply(&self, a: &Nat<u8>, b: &Nat<u8>) -> Nat<u8> {
        let n = pow2_ceil(a.digits().len().max(b.digits().len()) << 1);
        let mut lc = bit_reverse_digits(a.digits(), n);
        let mut rc = bit_reverse_digits(b.digits(), n);

        fft(&mut lc, false);
        fft(&mut rc, false);
        for (l, r) in lc.iter_mut().zip(rc.iter()) {
            *l *= *r;
        }

        let mut conv = bit_reverse_spectrum(&lc, n);
        fft(&mut conv, true);
        Nat::from_digits(fold(&round_real(&conv)))
    }

    fn name(&self) -> &'static str {
        "Fft"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mul::Schoolbook;

    #[test]
    fn pow2_ceil_values() {
        assert_eq!(pow2_ceil(0), 0);
        assert_eq!(pow2_ceil(1), 2);
        assert_eq!(pow2_ceil(3), 4);
        assert_eq!(pow2_ceil(4), 8);
        assert_eq!(pow2_ceil(5), 8);
        assert_eq!(pow2_ceil(1000), 1024);
    }

    #[test]
    fn inc_rev_walks_reversed_order() {
        let mut x = 0usize;
        let mut seen = vec![0];
        for _ in 0..7 {
            inc_rev(&mut x, 8);
            seen.push(x);
        }
        assert_eq!(seen, vec![0, 4, 2, 6, 1, 5, 3, 7]);
    }

    #[test]
    fn transform_round_trip() {
        let digits = [5u8, 0, 0, 9, 1, 255];
        let n = 8;
        let mut x = bit_reverse_digits(&digits, n);
        fft(&mut x, false);
        let mut back = bit_reverse_spectrum(&x, n);
        fft(&mut back, true);
        for (i, c) in back.iter().enumerate() {
            let expected = digits.get(i).copied().unwrap_or(0);
            assert!((c.re - f64::from(expected)).abs() < 1e-6, "index {i}");
            assert!(c.im.abs() < 1e-6, "index {i}");
        }
    }

    #[test]
    fn agrees_with_schoolbook() {
        let fft = Fft::new();
        let school = Schoolbook::new();
        let a = Nat::<u8>::from(0xFEDC_BA98_7654_3210u64);
        let b = Nat::<u8>::from(0x0123_4567_89ABu64);
        assert_eq!(fft.multiply(&a, &b), school.multiply(&a, &b));
    }

    #[test]
    fn large_operands_stay_exact() {
        let fft = Fft::new();
        let school = Schoolbook::new();
        let a = Nat::<u8>::from_digits((0..512).map(|i| (i * 37 + 11) as u8).collect());
        let b = Nat::<u8>::from_digits((0..509).map(|i| (i * 101 + 3) as u8).collect());
        assert_eq!(fft.multiply(&a, &b), school.multiply(&a, &b));
    }

    #[test]
    fn zero_operands() {
        let fft = Fft::new();
        assert!(fft.multiply(&Nat::zero(), &Nat::zero()).is_zero());
        assert!(fft.multiply(&Nat::from(7u64), &Nat::zero()).is_zero());
    }
}
