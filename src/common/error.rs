use thiserror::Error;

use super::codec::Mode;

// Error
//------------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq, Copy, Clone)]
pub enum QRError {
    // Selectors
    #[error("Invalid version {0}, expected 1 to 40")]
    InvalidVersion(u8),
    #[error("Invalid mode selector {0}")]
    InvalidMode(u8),
    #[error("Mode {0:?} is not implemented, only alphanumeric text can be encoded")]
    UnsupportedMode(Mode),
    #[error("Invalid error correction level")]
    InvalidECLevel,
    #[error("Invalid masking pattern {0}")]
    InvalidMaskPattern(u8),
    #[error("Invalid breakpoint {0}")]
    InvalidBreakpoint(u8),

    // Encoding
    #[error("Invalid character {0:?} for alphanumeric mode")]
    InvalidChar(char),
    #[error("Text is too long for current matrix: {bytes} bytes, capacity {capacity} bytes")]
    DataTooLong { bytes: usize, capacity: usize },

    // Galois field arithmetic
    #[error("Divide by zero polynomial")]
    DivisionByZero,
    #[error("Zero has no multiplicative inverse")]
    ZeroHasNoInverse,
    #[error("Zero has no logarithm")]
    ZeroHasNoLogarithm,
}

pub type QRResult<T> = Result<T, QRError>;
