//! Cipher engine error types.

use thiserror::Error;

/// Result type for cipher operations.
pub type CipherResult<T> = Result<T, CipherError>;

/// Errors that can occur while encrypting or decrypting an envelope.
///
/// Length errors always state the cipher name plus the expected and actual
/// lengths; callers surface these messages verbatim to users debugging key
/// material, so the contents are part of the contract.
#[derive(Debug, Error)]
pub enum CipherError {
    #[error("unknown cipher: {0}")]
    UnknownCipher(String),

    #[error("invalid key length for cipher {cipher}: expected {expected} bytes, got {actual}")]
    InvalidKeyLength {
        cipher: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("invalid IV length for cipher {cipher}: expected {expected} bytes, got {actual}")]
    InvalidIvLength {
        cipher: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("envelope too short for cipher {cipher}: {actual} bytes cannot hold a {iv_len}-byte IV plus ciphertext")]
    EnvelopeTooShort {
        cipher: &'static str,
        iv_len: usize,
        actual: usize,
    },

    #[error("cipher init failed: {0}")]
    InitFailed(String),

    #[error("cipher update failed: {0}")]
    UpdateFailed(String),

    #[error("cipher finalize failed: {0}")]
    FinalizeFailed(String),

    #[error("random source failed: {0}")]
    RandomSourceFailed(String),
}
