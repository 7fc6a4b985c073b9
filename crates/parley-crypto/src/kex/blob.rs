//! Transportable public-key encoding.
//!
//! A blob is self-describing: a 2-byte big-endian curve identifier followed
//! by the uncompressed SEC1 point (0x04 || x || y). Import validates the
//! structure and checks that the coordinates name a point on the identified
//! curve, so a blob that round-trips through [`PublicKeyBlob::from_bytes`]
//! is always usable for key agreement on that curve.

use crate::suite::NamedCurve;
use crate::{Error, Result};

/// Encoded public key, safe to hand to the peer.
///
/// Stateless and immutable; any party holding the bytes can re-import them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKeyBlob {
    curve: NamedCurve,
    point: Vec<u8>,
}

impl PublicKeyBlob {
    /// Build a blob from a curve and an uncompressed SEC1 point.
    ///
    /// # Errors
    ///
    /// Returns `Error::KeyImport` if the point has the wrong length for the
    /// curve, is not in uncompressed form, or is not on the curve.
    ///
    /// # Example
    ///
    /// ```
    /// use parley_crypto::kex::{EcdhP521KeyPair, PublicKeyBlob};
    /// use parley_crypto::suite::NamedCurve;
    ///
    /// let keypair = EcdhP521KeyPair::generate().unwrap();
    /// let blob = PublicKeyBlob::new(NamedCurve::P521, keypair.public_key().to_vec()).unwrap();
    /// assert_eq!(blob.curve(), NamedCurve::P521);
    /// ```
    pub fn new(curve: NamedCurve, point: Vec<u8>) -> Result<Self> {
        if point.len() != curve.point_len() {
            return Err(Error::KeyImport(format!(
                "{} public point must be {} bytes, got {}",
                curve.name(),
                curve.point_len(),
                point.len()
            )));
        }

        if point[0] != 0x04 {
            return Err(Error::KeyImport(
                "public point must use uncompressed form (0x04 prefix)".into(),
            ));
        }

        validate_on_curve(curve, &point)?;

        Ok(Self { curve, point })
    }

    /// Build a blob from a point we produced ourselves.
    ///
    /// Skips validation; only callable with points exported from a local
    /// key pair.
    pub(crate) fn from_own_point(curve: NamedCurve, point: Vec<u8>) -> Self {
        Self { curve, point }
    }

    /// Curve the point lives on.
    pub fn curve(&self) -> NamedCurve {
        self.curve
    }

    /// Uncompressed SEC1 point bytes.
    pub fn point(&self) -> &[u8] {
        &self.point
    }

    /// Serialize to wire form: curve id (u16, big-endian) || point.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(2 + self.point.len());
        out.extend_from_slice(&self.curve.to_u16().to_be_bytes());
        out.extend_from_slice(&self.point);
        out
    }

    /// Deserialize from wire form.
    ///
    /// # Errors
    ///
    /// Returns `Error::KeyImport` when the bytes are truncated, name an
    /// unknown curve, or do not decode to a valid point on that curve.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < 2 {
            return Err(Error::KeyImport(format!(
                "blob too short: {} bytes",
                bytes.len()
            )));
        }

        let id = u16::from_be_bytes([bytes[0], bytes[1]]);
        let curve = NamedCurve::from_u16(id)
            .ok_or_else(|| Error::KeyImport(format!("unknown curve identifier 0x{:04x}", id)))?;

        Self::new(curve, bytes[2..].to_vec())
    }
}

/// Check that the encoded point is on the given curve.
fn validate_on_curve(curve: NamedCurve, point: &[u8]) -> Result<()> {
    match curve {
        NamedCurve::P521 => {
            p521::PublicKey::from_sec1_bytes(point)
                .map_err(|_| Error::KeyImport("point is not on P-521".into()))?;
        }
        NamedCurve::P256 => {
            p256::PublicKey::from_sec1_bytes(point)
                .map_err(|_| Error::KeyImport("point is not on P-256".into()))?;
        }
    }
    Ok(())
}
