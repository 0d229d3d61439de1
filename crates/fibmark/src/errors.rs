//! Error handling and exit codes.

use fibmark_core::calculator::FibError;
use fibmark_core::constants::exit_codes;

/// Map an error bubbling out of the application to its exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<FibError>() {
        Some(FibError::Calculation(_)) => exit_codes::ERROR_GENERIC,
        Some(FibError::Config(_)) => exit_codes::ERROR_CONFIG,
        Some(FibError::Cancelled) => exit_codes::ERROR_CANCELED,
        Some(FibError::Timeout(_)) => exit_codes::ERROR_TIMEOUT,
        Some(FibError::Mismatch) => exit_codes::ERROR_MISMATCH,
        None => exit_codes::ERROR_GENERIC,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes() {
        assert_eq!(exit_code(&FibError::Cancelled.into()), 130);
        assert_eq!(exit_code(&FibError::Timeout("1.5s".into()).into()), 2);
        assert_eq!(exit_code(&FibError::Mismatch.into()), -1);
        assert_eq!(exit_code(&FibError::Config("bad".into()).into()), 4);
        assert_eq!(exit_code(&anyhow::anyhow!("io trouble")), 1);
    }
}
