//! Message-key derivation.
//!
//! The cipher key is a single SHA-256 digest of the raw ECDH x-coordinate,
//! which is how the exchange turns a curve-width shared secret (66 bytes on
//! P-521, 32 on P-256) into an AES-256 key both parties agree on. This is a
//! bare hash, not a salted KDF: acceptable for a demonstration-grade
//! protocol, not something to build new designs on.

use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

/// Symmetric key material for the message cipher.
pub type MessageKey = Zeroizing<[u8; 32]>;

/// Derive the 32-byte message key from a raw shared secret.
///
/// Deterministic: both parties obtain the same key from the same shared
/// x-coordinate, whichever curve produced it.
///
/// # Example
///
/// ```
/// use parley_crypto::kdf::derive_message_key;
///
/// let key = derive_message_key(&[0x42; 66]);
/// assert_eq!(key.len(), 32);
/// ```
pub fn derive_message_key(shared_secret: &[u8]) -> MessageKey {
    let digest = Sha256::digest(shared_secret);
    let key: [u8; 32] = digest.into();
    Zeroizing::new(key)
}
