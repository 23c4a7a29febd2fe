use std::{fmt, io};

use thiserror::Error;

use crate::{
    crypto::{self, cipher::CipherError},
    jwa::JsonWebEncryptionAlgorithm,
    NoBase64UrlString,
};

/// Everything that can go wrong while encrypting a JWE.
///
/// Encryption only handles data the caller already knows, so these errors
/// are descriptive.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EncryptionError {
    /// The key does not belong to the family of the key management
    /// algorithm, for example a symmetric key for `RSA1_5`.
    #[error("the given key can not be used with the `{0}` algorithm")]
    KeyMismatch(JsonWebEncryptionAlgorithm),
    /// A symmetric key has the wrong size for the chosen algorithms.
    #[error("expected a key of {expected} bytes, got {actual} bytes")]
    InvalidKeyLength {
        /// The size the algorithm requires.
        expected: usize,
        /// The size of the given key.
        actual: usize,
    },
    /// The RSA modulus is smaller than 2048 bits.
    #[error("RSA keys must be at least 2048 bits, got {bits} bits")]
    WeakRsaKey {
        /// The size of the given modulus.
        bits: usize,
    },
    /// One of the additional header parameters shadows a header field.
    #[error("the header parameter `{0}` can not be set as an additional parameter")]
    ReservedHeaderParameter(String),
    /// The header lists a critical extension, but no extensions are
    /// understood.
    #[error("the critical header parameter `{0}` is not supported")]
    Critical(String),
    /// The header or the payload could not be serialized.
    #[error("failed to serialize the header or the payload")]
    Serialize(#[from] serde_json::Error),
    /// Compressing the payload failed.
    #[error("failed to compress the payload")]
    Compress(#[source] io::Error),
    /// The random number generator failed.
    #[error("the random number generator failed")]
    Random(#[from] rand_core::Error),
    /// A cryptographic operation of the backend failed.
    #[error(transparent)]
    Crypto(#[from] crypto::Error),
    /// A block cipher operation failed.
    #[error(transparent)]
    Cipher(#[from] CipherError),
}

/// The error returned when decrypting a JWE failed.
///
/// It is the same value whatever the reason was: a broken encrypted key, an
/// authentication tag that does not match, invalid padding, a wrong key, a
/// payload that does not decompress or does not deserialize. Telling these
/// cases apart would hand an attacker an oracle.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("JWE decryption failed")]
pub struct DecryptionError {
    _private: (),
}

impl DecryptionError {
    pub(crate) const fn new() -> Self {
        Self { _private: () }
    }
}

impl fmt::Debug for DecryptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DecryptionError")
    }
}

/// A compact JWE that could not even be parsed.
///
/// Parsing happens before any key is touched, so this error may be precise.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MalformedJweError {
    /// A compact JWE consists of exactly five parts.
    #[error("expected 5 parts in compact JWE, got {0}")]
    PartCount(usize),
    /// One of the parts is not valid base64url.
    #[error(transparent)]
    Base64(#[from] NoBase64UrlString),
    /// The header is not a valid JWE header, for example because an
    /// algorithm is not supported.
    #[error("invalid JWE header: {0}")]
    Header(#[source] serde_json::Error),
    /// The header lists a critical extension, but no extensions are
    /// understood.
    #[error("the critical header parameter `{0}` is not supported")]
    Critical(String),
}
