//! Cryptographic primitives for the parley confidential message exchange.
//!
//! This crate implements the operations behind a two-party confidential
//! message exchange:
//! - ECDH key agreement (NIST P-521 default suite, P-256 alternative)
//! - Transportable public-key blobs (curve id + uncompressed SEC1 point)
//! - Message-key derivation (SHA-256 over the shared x-coordinate)
//! - AES-256-CBC message envelopes (`IV || ciphertext`, PKCS#7 padding)
//!
//! Security posture:
//! - No unsafe code
//! - All secrets and decrypted plaintexts use Zeroizing wrappers
//! - No logging of key material
//! - The envelope carries no authentication tag; the exchange is
//!   confidentiality-only. See [`cipher`] for the caveats.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cipher;
pub mod error;
pub mod kdf;
pub mod kex;
pub mod suite;

pub use error::{Error, ErrorKind, Result};
pub use suite::CipherSuite;
