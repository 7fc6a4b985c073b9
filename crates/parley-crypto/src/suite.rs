//! Cipher suite definitions for the parley message exchange.

use crate::cipher;

/// Named elliptic curves available for key agreement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum NamedCurve {
    /// NIST P-521 (secp521r1), the reference curve.
    P521 = 0x0001,

    /// NIST P-256 (secp256r1).
    P256 = 0x0002,
}

impl NamedCurve {
    /// Convert from wire format (u16).
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            0x0001 => Some(Self::P521),
            0x0002 => Some(Self::P256),
            _ => None,
        }
    }

    /// Convert to wire format (u16).
    pub fn to_u16(self) -> u16 {
        self as u16
    }

    /// Width of one field element (and of a private scalar) in bytes.
    pub fn field_len(self) -> usize {
        match self {
            Self::P521 => 66,
            Self::P256 => 32,
        }
    }

    /// Length of an uncompressed SEC1 point encoding: 0x04 || x || y.
    pub fn point_len(self) -> usize {
        1 + 2 * self.field_len()
    }

    /// Human-readable curve name.
    pub fn name(self) -> &'static str {
        match self {
            Self::P521 => "P-521",
            Self::P256 => "P-256",
        }
    }
}

/// Point encodings supported for public-key transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointEncoding {
    /// Uncompressed SEC1 form: 0x04 || x || y.
    Uncompressed,
}

/// Cipher suites for the two-party message exchange.
///
/// Every suite pairs an ECDH curve with AES-256-CBC; both parties must use
/// the same suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum CipherSuite {
    /// ECDH-P521 + AES-256-CBC. Default suite.
    ParleyClassical1 = 0x0001,

    /// ECDH-P256 + AES-256-CBC.
    ParleyClassical2 = 0x0002,
}

impl CipherSuite {
    /// Convert from wire format (u16).
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            0x0001 => Some(Self::ParleyClassical1),
            0x0002 => Some(Self::ParleyClassical2),
            _ => None,
        }
    }

    /// Convert to wire format (u16).
    pub fn to_u16(self) -> u16 {
        self as u16
    }

    /// Key agreement curve for this suite.
    pub fn curve(&self) -> NamedCurve {
        match self {
            Self::ParleyClassical1 => NamedCurve::P521,
            Self::ParleyClassical2 => NamedCurve::P256,
        }
    }

    /// Cipher key length in bytes.
    pub fn key_len(&self) -> usize {
        cipher::KEY_LEN
    }

    /// Cipher block (and IV) length in bytes.
    pub fn block_len(&self) -> usize {
        cipher::BLOCK_LEN
    }

    /// Public-point encoding used on the wire.
    pub fn encoding(&self) -> PointEncoding {
        PointEncoding::Uncompressed
    }
}
