//! ECDH-P521 key agreement (default suite).
//!
//! Implements elliptic-curve Diffie-Hellman over NIST P-521 (secp521r1).
//! The 521-bit field makes every coordinate 66 bytes wide; public points
//! travel in uncompressed SEC1 form (0x04 || x || y, 133 bytes).
//!
//! # Security
//!
//! - Private scalars and shared secrets are wrapped so they are cleared from
//!   memory when dropped.
//! - Uses the `p521` crate from RustCrypto, which validates peer points
//!   while decoding them.
//! - The exchange output is the raw shared x-coordinate. It is not cipher
//!   key material until it has been through
//!   [`crate::kdf::derive_message_key`].
//!
//! # Example
//!
//! ```
//! use parley_crypto::kex::EcdhP521KeyPair;
//!
//! # fn example() -> Result<(), parley_crypto::Error> {
//! // Alice generates a keypair
//! let alice = EcdhP521KeyPair::generate()?;
//!
//! // Bob generates a keypair
//! let bob = EcdhP521KeyPair::generate()?;
//!
//! // Both perform key agreement with the other's exported blob
//! let alice_shared = alice.exchange(&bob.export_public())?;
//! let bob_shared = bob.exchange(&alice.export_public())?;
//!
//! // They arrive at the same shared secret
//! assert_eq!(*alice_shared, *bob_shared);
//! # Ok(())
//! # }
//! ```

use crate::kex::PublicKeyBlob;
use crate::suite::NamedCurve;
use crate::{Error, Result};
use p521::ecdh::diffie_hellman;
use p521::elliptic_curve::sec1::ToEncodedPoint;
use p521::{PublicKey, SecretKey};
use zeroize::Zeroizing;

/// Width of a P-521 field element in bytes.
pub const FIELD_LEN: usize = 66;

/// ECDH-P521 key pair for elliptic-curve Diffie-Hellman key agreement.
///
/// Holds the private scalar and its cached public point. The scalar is
/// zeroed when the pair is dropped.
pub struct EcdhP521KeyPair {
    /// Secret scalar (66 bytes), zeroed on drop.
    secret_key: SecretKey,
    /// Public key in uncompressed form (133 bytes: 0x04 || x || y), cached.
    public_key_bytes: Vec<u8>,
}

impl EcdhP521KeyPair {
    /// Generate a new random P-521 keypair using a cryptographically secure RNG.
    ///
    /// # Errors
    ///
    /// This function should not fail under normal circumstances. It returns a
    /// `Result` for consistency with the other key generation functions.
    ///
    /// # Example
    ///
    /// ```
    /// use parley_crypto::kex::EcdhP521KeyPair;
    ///
    /// let keypair = EcdhP521KeyPair::generate().unwrap();
    /// assert_eq!(keypair.public_key().len(), 133); // uncompressed format
    /// assert_eq!(keypair.public_key()[0], 0x04); // uncompressed marker
    /// ```
    pub fn generate() -> Result<Self> {
        let secret_key = SecretKey::random(&mut rand::rngs::OsRng);
        let public_key = secret_key.public_key();
        let public_key_bytes = public_key.to_encoded_point(false).as_bytes().to_vec();

        Ok(Self {
            secret_key,
            public_key_bytes,
        })
    }

    /// Create a keypair from an existing 66-byte private scalar.
    ///
    /// This is useful for testing with fixed keys or for key restoration.
    ///
    /// # Errors
    ///
    /// Returns an error if the scalar is not a valid P-521 private key.
    pub fn from_private(private_key: &[u8]) -> Result<Self> {
        if private_key.len() != FIELD_LEN {
            return Err(Error::KeyGeneration(format!(
                "P-521 private key must be {} bytes, got {}",
                FIELD_LEN,
                private_key.len()
            )));
        }

        let secret_key = SecretKey::from_slice(private_key)
            .map_err(|_| Error::KeyGeneration("invalid P-521 private key".into()))?;
        let public_key = secret_key.public_key();
        let public_key_bytes = public_key.to_encoded_point(false).as_bytes().to_vec();

        Ok(Self {
            secret_key,
            public_key_bytes,
        })
    }

    /// Get the public key in uncompressed form (133 bytes: 0x04 || x || y).
    pub fn public_key(&self) -> &[u8] {
        &self.public_key_bytes
    }

    /// Export the public half as a transportable blob.
    ///
    /// A pure function of the key pair's public point; leaks no private
    /// material.
    pub fn export_public(&self) -> PublicKeyBlob {
        PublicKeyBlob::from_own_point(NamedCurve::P521, self.public_key_bytes.clone())
    }

    /// Perform P-521 ECDH key agreement with a peer's public-key blob.
    ///
    /// Computes the shared point from this keypair's private scalar and the
    /// peer's point, and returns the raw x-coordinate (66 bytes) wrapped in
    /// `Zeroizing`. Nothing is cached: calling this repeatedly with the same
    /// peer always returns the same value.
    ///
    /// # Errors
    ///
    /// Returns `Error::Derivation` if:
    /// - The peer's blob is on a different curve than this key
    /// - The peer's point fails to decode or is not a valid P-521 point
    ///
    /// # Example
    ///
    /// ```
    /// use parley_crypto::kex::EcdhP521KeyPair;
    ///
    /// let alice = EcdhP521KeyPair::generate().unwrap();
    /// let bob = EcdhP521KeyPair::generate().unwrap();
    ///
    /// let shared_secret = alice.exchange(&bob.export_public()).unwrap();
    /// assert_eq!(shared_secret.len(), 66);
    /// ```
    pub fn exchange(&self, peer_public: &PublicKeyBlob) -> Result<Zeroizing<[u8; FIELD_LEN]>> {
        if peer_public.curve() != NamedCurve::P521 {
            return Err(Error::Derivation(format!(
                "peer key is on {}, local key is on P-521",
                peer_public.curve().name()
            )));
        }

        let peer_key = PublicKey::from_sec1_bytes(peer_public.point())
            .map_err(|_| Error::Derivation("invalid P-521 public key point".into()))?;

        let shared_secret = diffie_hellman(
            self.secret_key.to_nonzero_scalar(),
            peer_key.as_affine(),
        );

        // Extract the shared secret bytes (x-coordinate)
        let shared_bytes = shared_secret.raw_secret_bytes();

        let mut result = [0u8; FIELD_LEN];
        result.copy_from_slice(shared_bytes.as_slice());

        Ok(Zeroizing::new(result))
    }
}
