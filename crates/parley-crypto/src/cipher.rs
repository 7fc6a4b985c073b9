//! AES-256-CBC message envelopes.
//!
//! The envelope layout is `IV || ciphertext`: a fresh 16-byte IV per
//! encryption, AES-256 in CBC mode, PKCS#7 block padding, and no other
//! framing. There is no authentication tag: padding is the only integrity
//! signal, so a tampered envelope can decrypt to garbage without an error.
//! The exchange is confidentiality-only; layering a MAC or moving to an AEAD
//! mode would change the wire format and is a caller decision.

use crate::{Error, Result};
use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use aes::Aes256;
use rand::RngCore;
use zeroize::Zeroizing;

/// Cipher block and IV length in bytes.
pub const BLOCK_LEN: usize = 16;

/// Cipher key length in bytes (AES-256).
pub const KEY_LEN: usize = 32;

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Generate a fresh, unpredictable IV from the system CSPRNG.
pub fn generate_iv() -> [u8; BLOCK_LEN] {
    let mut iv = [0u8; BLOCK_LEN];
    rand::rngs::OsRng.fill_bytes(&mut iv);
    iv
}

/// Encrypt `plaintext` under `key` with a fresh random IV.
///
/// Returns the envelope `IV || ciphertext`. The plaintext is never modified;
/// two calls with identical inputs produce different envelopes because the
/// IV is drawn fresh on every call.
///
/// # Errors
///
/// Returns `Error::InvalidKeyLength` if `key` is not 32 bytes.
///
/// # Example
///
/// ```
/// use parley_crypto::cipher::{aes256cbc_decrypt, aes256cbc_encrypt};
///
/// let key = [0x42; 32];
///
/// let envelope = aes256cbc_encrypt(&key, b"attack at dawn").unwrap();
/// let plaintext = aes256cbc_decrypt(&key, &envelope).unwrap();
///
/// assert_eq!(&*plaintext, b"attack at dawn");
/// ```
pub fn aes256cbc_encrypt(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    if key.len() != KEY_LEN {
        return Err(Error::InvalidKeyLength {
            expected: KEY_LEN,
            actual: key.len(),
        });
    }

    let iv = generate_iv();
    aes256cbc_encrypt_with_iv(key, &iv, plaintext)
}

/// Encrypt with a caller-provided IV.
///
/// Exposed for known-answer tests; normal callers want
/// [`aes256cbc_encrypt`], which draws a fresh IV.
///
/// # Errors
///
/// Returns `Error::InvalidKeyLength` if `key` is not 32 bytes.
pub fn aes256cbc_encrypt_with_iv(
    key: &[u8],
    iv: &[u8; BLOCK_LEN],
    plaintext: &[u8],
) -> Result<Vec<u8>> {
    let cipher = Aes256CbcEnc::new_from_slices(key, iv).map_err(|_| Error::InvalidKeyLength {
        expected: KEY_LEN,
        actual: key.len(),
    })?;

    let ciphertext = cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext);

    let mut envelope = Vec::with_capacity(BLOCK_LEN + ciphertext.len());
    envelope.extend_from_slice(iv);
    envelope.extend_from_slice(&ciphertext);
    Ok(envelope)
}

/// Decrypt an `IV || ciphertext` envelope.
///
/// Returns the original plaintext, wrapped in `Zeroizing`, when `key`
/// matches the one used to encrypt and the envelope is unmodified.
///
/// # Errors
///
/// - `Error::EnvelopeTooShort` if the envelope is shorter than one block
/// - `Error::InvalidKeyLength` if `key` is not 32 bytes
/// - `Error::InvalidPadding` if the padding is malformed after decryption;
///   this is the only tamper detection the format offers
pub fn aes256cbc_decrypt(key: &[u8], envelope: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
    if envelope.len() < BLOCK_LEN {
        return Err(Error::EnvelopeTooShort {
            minimum: BLOCK_LEN,
            actual: envelope.len(),
        });
    }

    let (iv, ciphertext) = envelope.split_at(BLOCK_LEN);

    let cipher = Aes256CbcDec::new_from_slices(key, iv).map_err(|_| Error::InvalidKeyLength {
        expected: KEY_LEN,
        actual: key.len(),
    })?;

    let plaintext = cipher
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| Error::InvalidPadding)?;

    Ok(Zeroizing::new(plaintext))
}
