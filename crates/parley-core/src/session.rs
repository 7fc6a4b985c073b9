//! Two-party session management.
//!
//! Each peer owns a [`Party`]: an exclusive key pair plus the suite it was
//! generated under. Blobs are exported from one party and handed to the
//! other by the caller; nothing is shared between parties. Sealing and
//! opening derive the message key fresh on every call: the raw shared
//! secret and the derived key live only for the duration of the call and
//! are zeroed as they drop.
//!
//! Log events carry lengths and suite ids only; key material is never
//! logged.

use parley_crypto::cipher::{aes256cbc_decrypt, aes256cbc_encrypt};
use parley_crypto::kdf::{derive_message_key, MessageKey};
use parley_crypto::kex::{EcdhP256KeyPair, EcdhP521KeyPair, PublicKeyBlob};
use parley_crypto::suite::{CipherSuite, NamedCurve};
use tracing::debug;
use zeroize::Zeroizing;

use crate::{Error, Result};

/// Key material for the available suites, one variant per curve.
enum KeyMaterial {
    /// ECDH-P521 (ParleyClassical1).
    P521(EcdhP521KeyPair),
    /// ECDH-P256 (ParleyClassical2).
    P256(EcdhP256KeyPair),
}

impl KeyMaterial {
    fn generate(suite: CipherSuite) -> parley_crypto::Result<Self> {
        Ok(match suite.curve() {
            NamedCurve::P521 => Self::P521(EcdhP521KeyPair::generate()?),
            NamedCurve::P256 => Self::P256(EcdhP256KeyPair::generate()?),
        })
    }

    fn export_public(&self) -> PublicKeyBlob {
        match self {
            Self::P521(keypair) => keypair.export_public(),
            Self::P256(keypair) => keypair.export_public(),
        }
    }

    fn exchange(&self, peer: &PublicKeyBlob) -> parley_crypto::Result<Zeroizing<Vec<u8>>> {
        match self {
            Self::P521(keypair) => Ok(Zeroizing::new(keypair.exchange(peer)?.to_vec())),
            Self::P256(keypair) => Ok(Zeroizing::new(keypair.exchange(peer)?.to_vec())),
        }
    }
}

/// One side of a two-party confidential exchange.
///
/// Owns its key pair exclusively; the only thing that leaves the party is
/// the public blob. Dropping or closing the party zeroes the private scalar.
///
/// # Example
///
/// ```
/// use parley_core::Party;
///
/// # fn example() -> Result<(), parley_core::Error> {
/// let alice = Party::new()?;
/// let bob = Party::new()?;
///
/// let envelope = alice.seal(&bob.public_blob()?, b"hi bob")?;
/// let plaintext = bob.open(&alice.public_blob()?, &envelope)?;
///
/// assert_eq!(&*plaintext, b"hi bob");
/// # Ok(())
/// # }
/// ```
pub struct Party {
    suite: CipherSuite,
    keys: Option<KeyMaterial>,
}

impl Party {
    /// Create a party on the default suite (ECDH-P521 + AES-256-CBC).
    ///
    /// # Errors
    ///
    /// Returns a `KeyGeneration`-kind error if the random source or curve
    /// setup is unavailable.
    pub fn new() -> Result<Self> {
        Self::with_suite(CipherSuite::ParleyClassical1)
    }

    /// Create a party on a specific suite.
    ///
    /// Both peers must pick the same suite; a mismatch surfaces later as a
    /// derivation error.
    pub fn with_suite(suite: CipherSuite) -> Result<Self> {
        let keys = KeyMaterial::generate(suite)?;
        debug!(suite = suite.to_u16(), "generated session key pair");

        Ok(Self {
            suite,
            keys: Some(keys),
        })
    }

    /// Suite this party was generated under.
    pub fn suite(&self) -> CipherSuite {
        self.suite
    }

    /// Export the public half for handoff to the peer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SessionClosed`] after [`close`](Self::close).
    pub fn public_blob(&self) -> Result<PublicKeyBlob> {
        Ok(self.keys()?.export_public())
    }

    /// Encrypt `plaintext` for the holder of `peer`'s private key.
    ///
    /// Derives the shared secret fresh, hashes it into the message key, and
    /// seals the plaintext into an `IV || ciphertext` envelope. All secret
    /// material is dropped (and zeroed) before returning; nothing is cached
    /// across messages.
    ///
    /// # Errors
    ///
    /// - [`Error::SessionClosed`] after [`close`](Self::close)
    /// - `Derivation`-kind errors when `peer` is not on this party's curve
    pub fn seal(&self, peer: &PublicKeyBlob, plaintext: &[u8]) -> Result<Vec<u8>> {
        let key = self.message_key(peer)?;
        let envelope = aes256cbc_encrypt(&key[..], plaintext)?;

        debug!(
            plaintext_len = plaintext.len(),
            envelope_len = envelope.len(),
            "sealed message"
        );
        Ok(envelope)
    }

    /// Decrypt an envelope sealed for this party by the holder of `peer`'s
    /// private key.
    ///
    /// # Errors
    ///
    /// - [`Error::SessionClosed`] after [`close`](Self::close)
    /// - `Derivation`-kind errors when `peer` is not on this party's curve
    /// - `Cipher`-kind errors for truncated envelopes or malformed padding;
    ///   these invalidate only the message, not the session
    pub fn open(&self, peer: &PublicKeyBlob, envelope: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        let key = self.message_key(peer)?;
        let plaintext = aes256cbc_decrypt(&key[..], envelope)?;

        debug!(envelope_len = envelope.len(), "opened message");
        Ok(plaintext)
    }

    /// Dispose of the key material.
    ///
    /// The private scalar is zeroed as it drops; subsequent operations fail
    /// with [`Error::SessionClosed`]. Dropping the party without calling
    /// this clears the scalar just the same.
    pub fn close(&mut self) {
        self.keys = None;
        debug!(suite = self.suite.to_u16(), "session closed");
    }

    /// Whether [`close`](Self::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.keys.is_none()
    }

    fn keys(&self) -> Result<&KeyMaterial> {
        self.keys.as_ref().ok_or(Error::SessionClosed)
    }

    fn message_key(&self, peer: &PublicKeyBlob) -> Result<MessageKey> {
        let shared = self.keys()?.exchange(peer)?;
        Ok(derive_message_key(&shared))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test seal/open between two parties on the default suite
    #[test]
    fn test_seal_open() {
        let alice = Party::new().unwrap();
        let bob = Party::new().unwrap();

        let envelope = alice.seal(&bob.public_blob().unwrap(), b"hello").unwrap();
        let plaintext = bob.open(&alice.public_blob().unwrap(), &envelope).unwrap();

        assert_eq!(&*plaintext, b"hello");
    }

    /// Test closed parties refuse every operation
    #[test]
    fn test_closed_party() {
        let mut alice = Party::new().unwrap();
        let bob_blob = Party::new().unwrap().public_blob().unwrap();

        assert!(!alice.is_closed());
        alice.close();
        assert!(alice.is_closed());

        assert!(matches!(alice.public_blob(), Err(Error::SessionClosed)));
        assert!(matches!(
            alice.seal(&bob_blob, b"late"),
            Err(Error::SessionClosed)
        ));
        assert!(matches!(
            alice.open(&bob_blob, &[0u8; 32]),
            Err(Error::SessionClosed)
        ));
    }

    /// Test suite accessors
    #[test]
    fn test_suite() {
        let party = Party::new().unwrap();
        assert_eq!(party.suite(), CipherSuite::ParleyClassical1);

        let party = Party::with_suite(CipherSuite::ParleyClassical2).unwrap();
        assert_eq!(party.suite(), CipherSuite::ParleyClassical2);
    }
}
