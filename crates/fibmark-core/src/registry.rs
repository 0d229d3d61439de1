//! Calculator factory keyed by algorithm and backend names.
//!
//! The schoolbook and Karatsuba backends run on 32-bit digits; the
//! frequency-domain backends require byte digits, so their
//! combinations are instantiated at width 8. The linear strategy
//! never multiplies and accepts any backend name.

use std::sync::Arc;

use fibmark_bignum::{Dft, Fft, Karatsuba, Schoolbook};

use crate::calculator::{Calculator, CoreCalculator, FibCalculator, FibError};
use crate::golden::GoldenRatio;
use crate::linear::LinearIteration;
use crate::matrix::MatrixExponentiation;
use crate::strassen::StrassenExponentiation;

/// Algorithm names accepted by [`core`].
pub const ALGORITHMS: [&str; 4] = ["linear", "matrix", "strassen", "golden"];

/// Backend names accepted by [`core`].
pub const BACKENDS: [&str; 4] = ["schoolbook", "karatsuba", "dft", "fft"];

/// Create the bare algorithm for a (algorithm, backend) pair.
///
/// # Errors
///
/// Returns `FibError::Config` for unknown names.
pub fn core(algo: &str, backend: &str) -> Result<Arc<dyn CoreCalculator>, FibError> {
    match algo {
        "linear" => match backend {
            "schoolbook" | "karatsuba" | "dft" | "fft" => Ok(Arc::new(LinearIteration::new())),
            _ => Err(unknown_backend(backend)),
        },
        "matrix" => match backend {
            "schoolbook" => Ok(Arc::new(MatrixExponentiation::<u32, _>::new(
                Schoolbook::new(),
            ))),
            "karatsuba" => Ok(Arc::new(MatrixExponentiation::<u32, _>::new(
                Karatsuba::new(),
            ))),
            "dft" => Ok(Arc::new(MatrixExponentiation::<u8, _>::new(Dft::new()))),
            "fft" => Ok(Arc::new(MatrixExponentiation::<u8, _>::new(Fft::new()))),
            _ => Err(unknown_backend(backend)),
        },
        "strassen" => match backend {
            "schoolbook" => Ok(Arc::new(StrassenExponentiation::<u32, _>::new(
                Schoolbook::new(),
            ))),
            "karatsuba" => Ok(Arc::new(StrassenExponentiation::<u32, _>::new(
                Karatsuba::new(),
            ))),
            "dft" => Ok(Arc::new(StrassenExponentiation::<u8, _>::new(Dft::new()))),
            "fft" => Ok(Arc::new(StrassenExponentiation::<u8, _>::new(Fft::new()))),
            _ => Err(unknown_backend(backend)),
        },
        "golden" => match backend {
            "schoolbook" => Ok(Arc::new(GoldenRatio::<u32, _>::new(Schoolbook::new()))),
            "karatsuba" => Ok(Arc::new(GoldenRatio::<u32, _>::new(Karatsuba::new()))),
            "dft" => Ok(Arc::new(GoldenRatio::<u8, _>::new(Dft::new()))),
            "fft" => Ok(Arc::new(GoldenRatio::<u8, _>::new(Fft::new()))),
            _ => Err(unknown_backend(backend)),
        },
        _ => Err(FibError::Config(format!(
            "unknown algorithm: {algo} (expected one of {ALGORITHMS:?})"
        ))),
    }
}

/// Create a decorated calculator (fast path included) for a
/// (algorithm, backend) pair.
///
/// # Errors
///
/// Returns `FibError::Config` for unknown names.
pub fn calculator(algo: &str, backend: &str) -> Result<Arc<dyn Calculator>, FibError> {
    Ok(Arc::new(FibCalculator::new(core(algo, backend)?)))
}

fn unknown_backend(backend: &str) -> FibError {
    FibError::Config(format!(
        "unknown multiplication backend: {backend} (expected one of {BACKENDS:?})"
    ))
}
