//! Error types for the Chuck Norris cipher.
//!
//! All operations return structured errors rather than panicking.
//! A failure always rejects the whole input; no partial output is produced.

use thiserror::Error;

/// Top-level error type for all operations in the system.
///
/// Each variant corresponds to a specific failure domain:
/// - Binary: text outside the 7-bit range, or a malformed binary string
/// - Validation: an encoded string that is not well formed
/// - I/O: reading commands or writing output in the shell
/// - Config: bad command-line arguments
#[derive(Debug, Error)]
pub enum Error {
    /// Binary codec precondition failed (e.g., non-ASCII input)
    #[error("binary codec error: {0}")]
    Binary(#[from] BinaryError),

    /// Encoded input was rejected before decoding
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Terminal I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Binary codec errors.
///
/// These are the precondition violations of the 7-bit code unit format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BinaryError {
    /// Character needs more than 7 bits
    #[error("character {ch:?} at position {position} is outside the 7-bit ASCII range")]
    NonAscii { ch: char, position: usize },

    /// Binary string can't be split into whole code units
    #[error("binary length {len} is not a multiple of 7")]
    LengthNotMultiple { len: usize },

    /// Binary string contains something other than '0' or '1'
    #[error("invalid binary digit {ch:?} at position {position}")]
    InvalidDigit { ch: char, position: usize },
}

/// Malformed encoded input.
///
/// Deliberately carries no detail: any failed check is the same rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("encoded string is not valid")]
pub struct ValidationError;

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BinaryError::NonAscii { ch: 'é', position: 3 };
        assert_eq!(
            err.to_string(),
            "character 'é' at position 3 is outside the 7-bit ASCII range"
        );

        let err: Error = ValidationError.into();
        assert_eq!(err.to_string(), "encoded string is not valid");
    }

    #[test]
    fn test_from_conversions() {
        let err: Error = BinaryError::LengthNotMultiple { len: 8 }.into();
        assert!(matches!(
            err,
            Error::Binary(BinaryError::LengthNotMultiple { len: 8 })
        ));
    }
}
