//! Implementation of the JSON Web Algorithms (JWA) for JWE as defined in
//! [RFC 7518]
//!
//! Every supported algorithm is a plain `Copy` descriptor. The descriptors
//! carry everything the engine needs to know about an algorithm, for example
//! key sizes, the MAC used by a CBC-HMAC composition or the algorithm family
//! that decides how the content encryption key is protected.
//!
//! [RFC 7518]: <https://datatracker.ietf.org/doc/html/rfc7518>

mod aes_cbc_hs;
mod aes_gcm;
mod aes_kw;
mod hmac;

use thiserror::Error;

use crate::crypto::cipher::Transformation;

#[doc(inline)]
pub use self::{aes_cbc_hs::AesCbcHs, aes_gcm::AesGcm, aes_kw::AesKw, hmac::Hmac};

/// The name used throughout the JWE literature for the `alg` algorithm.
pub type KeyManagementAlgorithm = JsonWebEncryptionAlgorithm;

/// The name used throughout the JWE literature for the `enc` algorithm.
pub type EncryptionMethod = JsonWebContentEncryptionAlgorithm;

/// An algorithm name that does not belong to any supported algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported algorithm `{name}`, expected {expected}")]
pub struct UnsupportedAlgorithm {
    pub(crate) name: String,
    pub(crate) expected: &'static str,
}

impl UnsupportedAlgorithm {
    /// The name that could not be resolved.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The family of a [`JsonWebEncryptionAlgorithm`], which decides how the
/// content encryption key (CEK) is produced and protected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmFamily {
    /// The CEK is encrypted to the recipient's RSA public key.
    Rsa,
    /// The CEK is wrapped with a shared symmetric key.
    AesKeyWrap,
    /// The shared symmetric key is the CEK.
    Direct,
}

/// A JSON Web Algorithm (JWA) for encryption and decryption of the Content
/// Encryption Key (CEK) as defined in [RFC 7518 section 4]
///
/// This enum covers the `alg` Header Parameter Values for JWE supported by
/// this crate, a subset of the table from [section 4.1].
///
/// [RFC 7518 section 4]: <https://datatracker.ietf.org/doc/html/rfc7518#section-4>
/// [section 4.1]: <https://datatracker.ietf.org/doc/html/rfc7518#section-4.1>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonWebEncryptionAlgorithm {
    /// Key Encryption with RSAES-PKCS1-v1_5 as defined in [section 4.2]
    ///
    /// [section 4.2]: <https://datatracker.ietf.org/doc/html/rfc7518#section-4.2>
    Rsa1_5,
    /// AES Key Wrap
    AesKw(AesKw),
    /// Direct use of a shared symmetric key as the CEK as defined in [section
    /// 4.5]
    ///
    /// [section 4.5]: <https://datatracker.ietf.org/doc/html/rfc7518#section-4.5>
    Direct,
}

impl_serde_jwa!(
    JsonWebEncryptionAlgorithm,
    [
        "RSA1_5" => Self::Rsa1_5; Self::Rsa1_5,
        "A128KW" => Self::AesKw(AesKw::Aes128); Self::AesKw(AesKw::Aes128),
        "A192KW" => Self::AesKw(AesKw::Aes192); Self::AesKw(AesKw::Aes192),
        "A256KW" => Self::AesKw(AesKw::Aes256); Self::AesKw(AesKw::Aes256),
        "dir" => Self::Direct; Self::Direct,
    ],
    legacy: [
        "RSAES_PKCS1_V1_5" => Self::Rsa1_5,
        "DIRECT" => Self::Direct,
    ],
    expected: "a JSON Web Encryption Algorithm",
);

#[allow(missing_docs)]
impl JsonWebEncryptionAlgorithm {
    pub const RSA1_5: Self = Self::Rsa1_5;
    pub const A128KW: Self = Self::AesKw(AesKw::Aes128);
    pub const A192KW: Self = Self::AesKw(AesKw::Aes192);
    pub const A256KW: Self = Self::AesKw(AesKw::Aes256);
    pub const DIR: Self = Self::Direct;
}

impl JsonWebEncryptionAlgorithm {
    /// Every algorithm supported by this crate.
    pub const ALL: [Self; 5] = [
        Self::RSA1_5,
        Self::A128KW,
        Self::A192KW,
        Self::A256KW,
        Self::DIR,
    ];

    /// The family this algorithm belongs to.
    pub const fn family(&self) -> AlgorithmFamily {
        match self {
            Self::Rsa1_5 => AlgorithmFamily::Rsa,
            Self::AesKw(_) => AlgorithmFamily::AesKeyWrap,
            Self::Direct => AlgorithmFamily::Direct,
        }
    }

    /// The size of the shared key in bytes, if this algorithm requires a key
    /// of fixed size.
    ///
    /// For [`Direct`](Self::Direct) the key size is dictated by the content
    /// encryption algorithm instead.
    pub const fn key_size(&self) -> Option<usize> {
        match self {
            Self::AesKw(kw) => Some(kw.key_size()),
            Self::Rsa1_5 | Self::Direct => None,
        }
    }
}

/// A JSON Web Algorithm (JWA) for content encryption and decryption of a JWE as
/// defined in [RFC 7518 section 5]
///
/// This enum covers the `enc` Header Parameter Values for JWE. It represents
/// the table from [section 5.1].
///
/// [RFC 7518 section 5]: <https://datatracker.ietf.org/doc/html/rfc7518#section-5>
/// [section 5.1]: <https://datatracker.ietf.org/doc/html/rfc7518#section-5.1>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonWebContentEncryptionAlgorithm {
    /// Content Encryption using AES in CBC mode with HMAC
    AesCbcHs(AesCbcHs),
    /// Content Encryption using AES GCM
    AesGcm(AesGcm),
}

impl_serde_jwa!(
    JsonWebContentEncryptionAlgorithm,
    [
        "A128CBC-HS256" => Self::AesCbcHs(AesCbcHs::Aes128CbcHs256); Self::AesCbcHs(AesCbcHs::Aes128CbcHs256),
        "A192CBC-HS384" => Self::AesCbcHs(AesCbcHs::Aes192CbcHs384); Self::AesCbcHs(AesCbcHs::Aes192CbcHs384),
        "A256CBC-HS512" => Self::AesCbcHs(AesCbcHs::Aes256CbcHs512); Self::AesCbcHs(AesCbcHs::Aes256CbcHs512),

        "A128GCM" => Self::AesGcm(AesGcm::Aes128); Self::AesGcm(AesGcm::Aes128),
        "A192GCM" => Self::AesGcm(AesGcm::Aes192); Self::AesGcm(AesGcm::Aes192),
        "A256GCM" => Self::AesGcm(AesGcm::Aes256); Self::AesGcm(AesGcm::Aes256),
    ],
    legacy: [
        "A128CBC_HS256" => Self::AesCbcHs(AesCbcHs::Aes128CbcHs256),
        "A192CBC_HS384" => Self::AesCbcHs(AesCbcHs::Aes192CbcHs384),
        "A256CBC_HS512" => Self::AesCbcHs(AesCbcHs::Aes256CbcHs512),
    ],
    expected: "a JSON Web Content Encryption Algorithm",
);

#[allow(missing_docs)]
impl JsonWebContentEncryptionAlgorithm {
    pub const A128CBC_HS256: Self = Self::AesCbcHs(AesCbcHs::Aes128CbcHs256);
    pub const A192CBC_HS384: Self = Self::AesCbcHs(AesCbcHs::Aes192CbcHs384);
    pub const A256CBC_HS512: Self = Self::AesCbcHs(AesCbcHs::Aes256CbcHs512);
    pub const A128GCM: Self = Self::AesGcm(AesGcm::Aes128);
    pub const A192GCM: Self = Self::AesGcm(AesGcm::Aes192);
    pub const A256GCM: Self = Self::AesGcm(AesGcm::Aes256);
}

impl JsonWebContentEncryptionAlgorithm {
    /// Every algorithm supported by this crate.
    pub const ALL: [Self; 6] = [
        Self::A128CBC_HS256,
        Self::A192CBC_HS384,
        Self::A256CBC_HS512,
        Self::A128GCM,
        Self::A192GCM,
        Self::A256GCM,
    ];

    /// The size of the content encryption key in bits.
    pub const fn key_size_bits(&self) -> usize {
        self.key_size() * 8
    }

    /// The size of the content encryption key in bytes.
    ///
    /// For the CBC-HMAC compositions this includes the MAC key.
    pub const fn key_size(&self) -> usize {
        match self {
            Self::AesCbcHs(cbc) => cbc.key_offset() * 2,
            Self::AesGcm(gcm) => gcm.key_size(),
        }
    }

    /// The number of leading key bytes used as the MAC key.
    ///
    /// This is `0` for AES GCM, which has no separate MAC key.
    pub const fn key_offset(&self) -> usize {
        match self {
            Self::AesCbcHs(cbc) => cbc.key_offset(),
            Self::AesGcm(_) => 0,
        }
    }

    /// The MAC of a CBC-HMAC composition.
    pub const fn mac_algorithm(&self) -> Option<Hmac> {
        match self {
            Self::AesCbcHs(cbc) => Some(cbc.mac_algorithm()),
            Self::AesGcm(_) => None,
        }
    }

    /// The block cipher transformation used to encrypt the content.
    pub const fn transformation(&self) -> Transformation {
        match self {
            Self::AesCbcHs(cbc) => Transformation::AesCbcPkcs7(cbc.aes_variant()),
            Self::AesGcm(gcm) => Transformation::AesGcm(gcm.aes_variant()),
        }
    }

    /// The size of the initialization vector in bytes.
    pub const fn iv_size(&self) -> usize {
        match self {
            Self::AesCbcHs(_) => 16,
            Self::AesGcm(_) => 12,
        }
    }

    /// The size of the authentication tag in bytes.
    pub const fn tag_size(&self) -> usize {
        match self {
            Self::AesCbcHs(cbc) => cbc.key_offset(),
            Self::AesGcm(_) => 16,
        }
    }
}

/// A compression algorithm for the `zip` header parameter as defined in
/// [section 4.1.3 of RFC 7516]
///
/// [section 4.1.3 of RFC 7516]: <https://datatracker.ietf.org/doc/html/rfc7516#section-4.1.3>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompressionAlgorithm {
    /// Raw DEFLATE as defined in [RFC 1951]
    ///
    /// [RFC 1951]: <https://datatracker.ietf.org/doc/html/rfc1951>
    Deflate,
}

impl_serde_jwa!(
    CompressionAlgorithm,
    [
        "DEF" => Self::Deflate; Self::Deflate,
    ],
    legacy: [],
    expected: "a JSON Web Encryption Compression Algorithm",
);
