//! # fibmark-core
//!
//! Fibonacci computation strategies: linear iteration, 2x2 matrix
//! exponentiation (literal and Strassen-reduced), and golden-ratio
//! iteration in Z[sqrt(5)]/2. Every strategy is a `CoreCalculator`
//! generic over the multiplication backend it exercises.

pub mod calculator;
pub mod constants;
pub mod golden;
pub mod linear;
pub mod matrix;
pub mod observer;
pub mod observers;
pub mod progress;
pub mod registry;
pub mod signed;
pub mod strassen;

// Re-exports
pub use calculator::{Calculator, CoreCalculator, FibCalculator, FibError};
pub use constants::{exit_codes, FIB_TABLE, FIRST_MARK, MAX_FIB_U64, SECOND_MARK};
pub use observer::ProgressObserver;
pub use progress::{CancellationToken, ProgressUpdate};

use fibmark_bignum::Number;

/// Compute F(n) with the default strategy (matrix exponentiation over
/// Karatsuba multiplication).
///
/// This is a convenience function for simple use cases. For algorithm
/// and backend selection, cancellation and progress reporting, use the
/// registry and the `Calculator` trait directly.
///
/// # Example
/// ```
/// assert_eq!(fibmark_core::fibonacci(10).to_string(), "55");
/// assert_eq!(fibmark_core::fibonacci(0).to_string(), "0");
/// ```
#[must_use]
pub fn fibonacci(n: u64) -> Number {
    use observers::NoOpObserver;

    let calc = registry::calculator("matrix", "karatsuba")
        .expect("default algorithm and backend are always registered");
    let cancel = CancellationToken::new();
    let observer = NoOpObserver::new();
    calc.calculate(&cancel, &observer, &Number::from(n))
        .expect("matrix exponentiation should not fail for valid input")
}
