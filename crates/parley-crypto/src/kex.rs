//! Key agreement implementations.
//!
//! One module per named curve:
//! - ECDH over NIST P-521 (default suite)
//! - ECDH over NIST P-256 (alternative suite)
//!
//! Both exchanges output the raw x-coordinate of the shared point; feed it
//! through [`crate::kdf::derive_message_key`] to obtain cipher key material.
//! Public keys travel between parties as a [`PublicKeyBlob`].

pub mod blob;
pub mod ecdh_p256;
pub mod ecdh_p521;

pub use self::blob::PublicKeyBlob;
pub use self::ecdh_p256::EcdhP256KeyPair;
pub use self::ecdh_p521::EcdhP521KeyPair;
