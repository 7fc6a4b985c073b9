//! Error types for session operations.

use thiserror::Error;

/// Result type alias for session operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Session operation errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Operation on a party whose key material has been disposed.
    #[error("Session closed")]
    SessionClosed,

    /// Cryptographic error.
    #[error("Crypto error: {0}")]
    Crypto(#[from] parley_crypto::Error),
}

impl Error {
    /// Whether the session should be abandoned rather than retried with a
    /// fresh message.
    ///
    /// Key generation and derivation failures invalidate the key material;
    /// import and cipher failures only invalidate the blob or message at
    /// hand, and a retry with fresh input (and fresh randomness) is safe.
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::SessionClosed => true,
            Self::Crypto(e) => e.kind().is_session_fatal(),
        }
    }
}
