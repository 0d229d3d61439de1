//! Shared plumbing for the frequency-domain backends.
//!
//! Both the direct DFT and the Cooley-Tukey FFT convolve byte-width
//! digits through `Complex64` vectors, round the real parts back to
//! integers and fold the wide accumulator into bytes. With 8-bit
//! digits every convolution sum stays below 2^53, so the rounded
//! doubles are exact.

use num_complex::Complex64;

/// Embed byte digits into a zero-padded complex vector of length `n`.
pub(super) fn embed(digits: &[u8], n: usize) -> Vec<Complex64> {
    let mut out: Vec<Complex64> = digits
        .iter()
        .map(|&d| Complex64::new(f64::from(d), 0.0))
        .collect();
    out.resize(n, Complex64::new(0.0, 0.0));
    out
}

/// Round the real parts to the nearest unsigned 64-bit integers.
pub(super) fn round_real(x: &[Complex64]) -> Vec<u64> {
    x.iter().map(|c| c.re.round() as u64).collect()
}

/// Carry-propagating reduction of a wide-accumulator vector into a
/// byte digit vector, appending residual carry bytes.
pub(super) fn fold(x: &[u64]) -> Vec<u8> {
    let mut out = Vec::with_capacity(x.len() + 8);
    let mut spill = 0u64;
    for &xi in x {
        let sum = xi + spill;
        out.push(sum as u8);
        spill = sum >> 8;
    }
    while spill != 0 {
        out.push(spill as u8);
        spill >>= 8;
    }
    out
}
