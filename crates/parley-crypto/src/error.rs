//! Error types for cryptographic operations.

use thiserror::Error;

/// Result type alias for cryptographic operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Cryptographic operation errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Key pair generation failed.
    #[error("Key generation failed: {0}")]
    KeyGeneration(String),

    /// Peer public-key blob could not be imported.
    #[error("Key import failed: {0}")]
    KeyImport(String),

    /// Shared-secret derivation failed.
    #[error("Key agreement failed: {0}")]
    Derivation(String),

    /// Cipher key has the wrong length.
    #[error("Invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength {
        /// Required key length in bytes.
        expected: usize,
        /// Actual length received in bytes.
        actual: usize,
    },

    /// Envelope is shorter than one cipher block.
    #[error("Envelope too short: need at least {minimum} bytes, got {actual}")]
    EnvelopeTooShort {
        /// Minimum envelope length in bytes (one block, the IV).
        minimum: usize,
        /// Actual length received in bytes.
        actual: usize,
    },

    /// Block padding was malformed after decryption.
    #[error("Padding or integrity check failed")]
    InvalidPadding,
}

/// Coarse error classification for caller disposition.
///
/// Generation and derivation failures invalidate the session's key material;
/// import and cipher failures are recoverable (request a fresh blob from the
/// peer, or drop the single message).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Entropy or curve setup failure.
    KeyGeneration,
    /// Malformed or invalid peer public key.
    KeyImport,
    /// Invalid point or mismatched curve during key agreement.
    Derivation,
    /// Bad key length, truncated envelope, or padding failure.
    Cipher,
}

impl ErrorKind {
    /// Whether this kind invalidates the whole session rather than a single
    /// message or blob.
    pub fn is_session_fatal(self) -> bool {
        matches!(self, Self::KeyGeneration | Self::Derivation)
    }
}

impl Error {
    /// Classify this error for caller disposition.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::KeyGeneration(_) => ErrorKind::KeyGeneration,
            Self::KeyImport(_) => ErrorKind::KeyImport,
            Self::Derivation(_) => ErrorKind::Derivation,
            Self::InvalidKeyLength { .. }
            | Self::EnvelopeTooShort { .. }
            | Self::InvalidPadding => ErrorKind::Cipher,
        }
    }
}
