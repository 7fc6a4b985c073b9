//! ECDH-P256 key agreement (alternative suite).
//!
//! Implements ECDH using the NIST P-256 (secp256r1) elliptic curve as
//! specified in NIST SP 800-56A. Both parties must use the same curve; mixing
//! a P-256 key with a P-521 peer fails during derivation.
//!
//! Public keys are encoded in uncompressed form (0x04 || x || y) per SEC 1.

use crate::kex::PublicKeyBlob;
use crate::suite::NamedCurve;
use crate::{Error, Result};
use p256::ecdh::diffie_hellman;
use p256::elliptic_curve::sec1::ToEncodedPoint;
use p256::{PublicKey, SecretKey};
use zeroize::Zeroizing;

/// Width of a P-256 field element in bytes.
pub const FIELD_LEN: usize = 32;

/// ECDH-P256 key pair for elliptic-curve Diffie-Hellman key agreement.
///
/// The private scalar is zeroed when the pair is dropped.
pub struct EcdhP256KeyPair {
    /// Secret scalar (32 bytes), zeroed on drop.
    secret_key: SecretKey,
    /// Public key in uncompressed form (65 bytes: 0x04 || x || y), cached.
    public_key_bytes: Vec<u8>,
}

impl EcdhP256KeyPair {
    /// Generate a new random P-256 keypair using a cryptographically secure RNG.
    ///
    /// # Errors
    ///
    /// This function should not fail under normal circumstances. It returns a
    /// `Result` for consistency with the other key generation functions.
    pub fn generate() -> Result<Self> {
        let secret_key = SecretKey::random(&mut rand::rngs::OsRng);
        let public_key = secret_key.public_key();
        let public_key_bytes = public_key.to_encoded_point(false).as_bytes().to_vec();

        Ok(Self {
            secret_key,
            public_key_bytes,
        })
    }

    /// Create a keypair from an existing 32-byte private scalar.
    ///
    /// This is useful for testing with known test vectors.
    ///
    /// # Errors
    ///
    /// Returns an error if the scalar is not a valid P-256 private key.
    ///
    /// # Example
    ///
    /// ```
    /// use parley_crypto::kex::EcdhP256KeyPair;
    ///
    /// let keypair = EcdhP256KeyPair::from_private(&[0x42; 32]).unwrap();
    /// assert_eq!(keypair.public_key().len(), 65);
    /// ```
    pub fn from_private(private_key: &[u8]) -> Result<Self> {
        if private_key.len() != FIELD_LEN {
            return Err(Error::KeyGeneration(format!(
                "P-256 private key must be {} bytes, got {}",
                FIELD_LEN,
                private_key.len()
            )));
        }

        let secret_key = SecretKey::from_slice(private_key)
            .map_err(|_| Error::KeyGeneration("invalid P-256 private key".into()))?;
        let public_key = secret_key.public_key();
        let public_key_bytes = public_key.to_encoded_point(false).as_bytes().to_vec();

        Ok(Self {
            secret_key,
            public_key_bytes,
        })
    }

    /// Get the public key in uncompressed form (65 bytes: 0x04 || x || y).
    pub fn public_key(&self) -> &[u8] {
        &self.public_key_bytes
    }

    /// Export the public half as a transportable blob.
    pub fn export_public(&self) -> PublicKeyBlob {
        PublicKeyBlob::from_own_point(NamedCurve::P256, self.public_key_bytes.clone())
    }

    /// Perform P-256 ECDH key agreement with a peer's public-key blob.
    ///
    /// Returns the raw x-coordinate of the shared point (32 bytes), wrapped
    /// in `Zeroizing`. Nothing is cached between calls.
    ///
    /// # Errors
    ///
    /// Returns `Error::Derivation` if the blob is on a different curve or
    /// does not decode to a valid P-256 point.
    pub fn exchange(&self, peer_public: &PublicKeyBlob) -> Result<Zeroizing<[u8; FIELD_LEN]>> {
        if peer_public.curve() != NamedCurve::P256 {
            return Err(Error::Derivation(format!(
                "peer key is on {}, local key is on P-256",
                peer_public.curve().name()
            )));
        }

        let peer_key = PublicKey::from_sec1_bytes(peer_public.point())
            .map_err(|_| Error::Derivation("invalid P-256 public key point".into()))?;

        let shared_secret = diffie_hellman(
            self.secret_key.to_nonzero_scalar(),
            peer_key.as_affine(),
        );

        let shared_bytes = shared_secret.raw_secret_bytes();

        let mut result = [0u8; FIELD_LEN];
        result.copy_from_slice(shared_bytes.as_slice());

        Ok(Zeroizing::new(result))
    }
}
