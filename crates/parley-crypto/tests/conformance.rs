//! Cryptographic conformance tests.
//!
//! Known-answer vectors and cross-component properties for key agreement,
//! key derivation, and the envelope cipher.

#[cfg(test)]
mod ecdh_p256_tests {
    use parley_crypto::kex::{EcdhP256KeyPair, PublicKeyBlob};
    use parley_crypto::suite::NamedCurve;

    /// ECDH-P256 conformance test using RFC 5903 §8.1 test vectors.
    ///
    /// Verifies the P-256 agreement produces the correct raw shared
    /// x-coordinate given known private and public keys.
    #[test]
    fn test_rfc5903_vectors() {
        // Alice's private key from RFC 5903 §8.1
        let alice_private_bytes =
            hex::decode("C88F01F510D9AC3F70A292DAA2316DE544E9AAB8AFE84049C62A9C57862D1433")
                .unwrap();

        // Bob's public key (uncompressed: 0x04 || x || y)
        let bob_public_x =
            hex::decode("D12DFB5289C8D4F81208B70270398C342296970A0BCCB74C736FC7554494BF63")
                .unwrap();
        let bob_public_y =
            hex::decode("56FBF3CA366CC23E8157854C13C58D6AAC23F046ADA30F8353E74F33039872AB")
                .unwrap();

        // Construct uncompressed public key: 0x04 || x || y
        let mut bob_public = vec![0x04];
        bob_public.extend_from_slice(&bob_public_x);
        bob_public.extend_from_slice(&bob_public_y);

        // Expected shared secret from RFC 5903 §8.1
        let expected_shared =
            hex::decode("D6840F6B42F6EDAFD13116E0E12565202FEF8E9ECE7DCE03812464D04B9442DE")
                .unwrap();

        // Create Alice's keypair from the known private key
        let alice = EcdhP256KeyPair::from_private(&alice_private_bytes).unwrap();

        // Perform key agreement with Bob's public key
        let bob_blob = PublicKeyBlob::new(NamedCurve::P256, bob_public).unwrap();
        let shared = alice.exchange(&bob_blob).unwrap();

        // Verify shared secret matches the expected value
        assert_eq!(
            &*shared,
            expected_shared.as_slice(),
            "ECDH-P256 shared secret must match RFC 5903 §8.1 test vector"
        );
    }
}

#[cfg(test)]
mod ecdh_p521_tests {
    use parley_crypto::kex::{EcdhP521KeyPair, PublicKeyBlob};
    use parley_crypto::suite::NamedCurve;

    /// ECDH-P521 size conformance test.
    ///
    /// Verifies the 521-bit curve produces the expected encoding widths:
    /// - Public point: 133 bytes (0x04 || x || y, 66-byte coordinates)
    /// - Blob: 135 bytes (2-byte curve id + point)
    /// - Shared secret: 66 bytes (raw x-coordinate)
    #[test]
    fn test_p521_sizes() {
        let alice = EcdhP521KeyPair::generate().unwrap();
        let bob = EcdhP521KeyPair::generate().unwrap();

        assert_eq!(
            alice.public_key().len(),
            133,
            "P-521 public point must be 133 bytes"
        );

        let blob = alice.export_public();
        assert_eq!(blob.curve(), NamedCurve::P521);
        assert_eq!(blob.to_bytes().len(), 135, "P-521 blob must be 135 bytes");

        let shared = alice.exchange(&bob.export_public()).unwrap();
        assert_eq!(shared.len(), 66, "P-521 shared secret must be 66 bytes");
    }

    /// Property: P-521 key agreement is commutative.
    ///
    /// For any two keypairs (A, B):
    /// A.exchange(B.public) == B.exchange(A.public)
    #[test]
    fn test_p521_commutativity() {
        let alice = EcdhP521KeyPair::generate().unwrap();
        let bob = EcdhP521KeyPair::generate().unwrap();

        let alice_shared = alice.exchange(&bob.export_public()).unwrap();
        let bob_shared = bob.exchange(&alice.export_public()).unwrap();

        assert_eq!(
            &*alice_shared, &*bob_shared,
            "P-521 key agreement must be commutative"
        );
    }

    /// Test a blob survives the wire and still derives the same secret
    #[test]
    fn test_blob_wire_roundtrip() {
        let alice = EcdhP521KeyPair::generate().unwrap();
        let bob = EcdhP521KeyPair::generate().unwrap();

        let wire = bob.export_public().to_bytes();
        let restored = PublicKeyBlob::from_bytes(&wire).unwrap();

        let direct = alice.exchange(&bob.export_public()).unwrap();
        let roundtripped = alice.exchange(&restored).unwrap();

        assert_eq!(&*direct, &*roundtripped);
    }
}

#[cfg(test)]
mod kdf_tests {
    use parley_crypto::kdf::derive_message_key;
    use parley_crypto::kex::EcdhP521KeyPair;

    /// Message-key derivation conformance: SHA-256 over the x-coordinate.
    ///
    /// Canonical FIPS 180-2 "abc" vector.
    #[test]
    fn test_sha256_vector() {
        let key = derive_message_key(b"abc");

        let expected =
            hex::decode("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
                .unwrap();
        assert_eq!(
            &*key,
            expected.as_slice(),
            "Message key must be the SHA-256 digest of the shared secret"
        );
    }

    /// Property: both parties derive the same 32-byte message key.
    #[test]
    fn test_message_key_agreement() {
        let alice = EcdhP521KeyPair::generate().unwrap();
        let bob = EcdhP521KeyPair::generate().unwrap();

        let alice_key = derive_message_key(&*alice.exchange(&bob.export_public()).unwrap());
        let bob_key = derive_message_key(&*bob.exchange(&alice.export_public()).unwrap());

        assert_eq!(&*alice_key, &*bob_key, "Message keys must agree");
        assert_eq!(alice_key.len(), 32, "Message key must be 32 bytes");
    }
}

#[cfg(test)]
mod cipher_tests {
    use parley_crypto::cipher::{
        aes256cbc_decrypt, aes256cbc_encrypt, aes256cbc_encrypt_with_iv, BLOCK_LEN,
    };

    /// AES-256-CBC conformance test using NIST SP 800-38A F.2.5 vectors.
    ///
    /// This test is duplicated from parley-crypto/src/cipher.rs to ensure
    /// conformance tests are tracked separately.
    #[test]
    fn test_aes256cbc_nist() {
        let key: [u8; 32] =
            hex::decode("603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4")
                .unwrap()
                .try_into()
                .unwrap();

        let iv: [u8; 16] = hex::decode("000102030405060708090a0b0c0d0e0f")
            .unwrap()
            .try_into()
            .unwrap();

        let plaintext =
            hex::decode("6bc1bee22e409f96e93d7e117393172aae2d8a571e03ac9c9eb76fac45af8e51")
                .unwrap();

        let expected_ciphertext =
            hex::decode("f58c4c04d6e5f1ba779eabfb5f7bfbd69cfc4e967edb808d679f777bc6702c7d")
                .unwrap();

        let envelope = aes256cbc_encrypt_with_iv(&key, &iv, &plaintext).unwrap();

        assert_eq!(
            &envelope[BLOCK_LEN..BLOCK_LEN + expected_ciphertext.len()],
            &expected_ciphertext[..],
            "Ciphertext must match NIST SP 800-38A test vector"
        );

        let decrypted = aes256cbc_decrypt(&key, &envelope).unwrap();
        assert_eq!(
            &*decrypted, &plaintext,
            "Decrypted plaintext must match original"
        );
    }

    /// Property: roundtrip preserves plaintexts of every size.
    #[test]
    fn test_roundtrip_sizes() {
        let key = [0x42u8; 32];

        for len in [0usize, 1, 15, 16, 17, 1024, 100_000] {
            let plaintext: Vec<u8> = (0..len).map(|i| (i % 251) as u8).collect();

            let envelope = aes256cbc_encrypt(&key, &plaintext).unwrap();
            let decrypted = aes256cbc_decrypt(&key, &envelope).unwrap();

            assert_eq!(&*decrypted, &plaintext, "roundtrip failed for len {}", len);
        }
    }

    /// Property: envelopes are always a block multiple, IV first.
    #[test]
    fn test_envelope_layout() {
        let key = [0x42u8; 32];

        let envelope = aes256cbc_encrypt(&key, b"hello").unwrap();

        // IV block plus one padded ciphertext block
        assert_eq!(envelope.len(), 2 * BLOCK_LEN);
        assert_eq!(envelope.len() % BLOCK_LEN, 0);
    }
}

#[cfg(test)]
mod property_tests {
    use parley_crypto::cipher::{aes256cbc_decrypt, aes256cbc_encrypt};
    use parley_crypto::kdf::derive_message_key;
    use parley_crypto::kex::{EcdhP256KeyPair, EcdhP521KeyPair};
    use parley_crypto::{Error, ErrorKind};

    /// End-to-end scenario: Alice seals "hello" for Bob, Bob recovers it.
    #[test]
    fn test_end_to_end_hello() {
        // Each party generates a key pair on the 521-bit curve
        let alice = EcdhP521KeyPair::generate().unwrap();
        let bob = EcdhP521KeyPair::generate().unwrap();

        // Public blobs are exchanged out of band
        let alice_blob = alice.export_public();
        let bob_blob = bob.export_public();

        // Alice derives, hashes, and encrypts
        let alice_key = derive_message_key(&*alice.exchange(&bob_blob).unwrap());
        let envelope = aes256cbc_encrypt(&alice_key[..], b"hello").unwrap();

        // Bob derives independently and decrypts
        let bob_key = derive_message_key(&*bob.exchange(&alice_blob).unwrap());
        let plaintext = aes256cbc_decrypt(&bob_key[..], &envelope).unwrap();

        assert_eq!(&*plaintext, b"hello");
    }

    /// Property: cross-curve derivation fails with the Derivation kind,
    /// which is session-fatal.
    #[test]
    fn test_cross_curve_rejection() {
        let alice = EcdhP521KeyPair::generate().unwrap();
        let p256_blob = EcdhP256KeyPair::generate().unwrap().export_public();

        let err = alice.exchange(&p256_blob).unwrap_err();
        assert!(matches!(err, Error::Derivation(_)));
        assert_eq!(err.kind(), ErrorKind::Derivation);
        assert!(err.kind().is_session_fatal());
    }

    /// Property: cipher failures are not session-fatal.
    #[test]
    fn test_cipher_errors_recoverable() {
        let key = [0x42u8; 32];

        let err = aes256cbc_decrypt(&key, &[0u8; 4]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Cipher);
        assert!(!err.kind().is_session_fatal());

        let err = aes256cbc_encrypt(&[0u8; 8], b"msg").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Cipher);
        assert!(!err.kind().is_session_fatal());
    }

    /// Property: a flipped bit anywhere in the ciphertext never reproduces
    /// the original plaintext.
    #[test]
    fn test_tamper_sensitivity() {
        let key = [0x42u8; 32];
        let plaintext = b"the eagle lands at midnight";

        let envelope = aes256cbc_encrypt(&key, plaintext).unwrap();

        // Flip one bit in every ciphertext byte position in turn
        for i in 16..envelope.len() {
            let mut tampered = envelope.clone();
            tampered[i] ^= 0x80;

            match aes256cbc_decrypt(&key, &tampered) {
                Err(Error::InvalidPadding) => {}
                Ok(decrypted) => assert_ne!(
                    &*decrypted,
                    plaintext,
                    "tampered envelope at byte {} returned the original plaintext",
                    i
                ),
                Err(e) => panic!("unexpected error at byte {}: {}", i, e),
            }
        }
    }

    /// Property: fresh IVs make identical messages unlinkable.
    #[test]
    fn test_iv_freshness() {
        let alice = EcdhP521KeyPair::generate().unwrap();
        let bob = EcdhP521KeyPair::generate().unwrap();

        let key = derive_message_key(&*alice.exchange(&bob.export_public()).unwrap());

        let envelope1 = aes256cbc_encrypt(&key[..], b"same message").unwrap();
        let envelope2 = aes256cbc_encrypt(&key[..], b"same message").unwrap();

        assert_ne!(envelope1, envelope2);
    }
}
