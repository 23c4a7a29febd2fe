//! This backend implements the primitives using the [RustCrypto] ecosystem.
//!
//! [RustCrypto]: https://github.com/RustCrypto

use rand_core::RngCore as _;
use thiserror::Error;

use super::interface;

pub mod aes;
pub mod hmac;
pub mod rsa;

/// The errors that can be produced by the rust crypto backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The error returned if a key or an initialization vector has the wrong
    /// length.
    #[error("invalid key length")]
    InvalidLength,

    /// RSA operation failed.
    #[error("an RSA operation failed")]
    Rsa(#[source] ::rsa::errors::Error),

    /// An RSA private key did not consist of exactly two primes.
    #[error("only RSA keys with exactly two primes are supported")]
    RsaTwoPrimes,

    /// An RSA private key lacks its precomputed CRT values.
    #[error("the RSA key is missing its precomputed values")]
    RsaNotPrecomputed,

    /// The PKCS#7 padding of a decrypted message was malformed.
    #[error("invalid padding")]
    Unpad,

    /// AES GCM encryption or decryption failed.
    #[error("AES GCM operation failed")]
    Aead,

    /// AES key wrapping or unwrapping failed.
    #[error("AES key wrap operation failed")]
    KeyWrap,

    /// The operating system's random number generator failed.
    #[error("failed to generate random data")]
    Random(#[source] rand_core::Error),
}

impl From<digest::InvalidLength> for BackendError {
    fn from(_: digest::InvalidLength) -> Self {
        Self::InvalidLength
    }
}

impl From<::rsa::errors::Error> for BackendError {
    fn from(x: ::rsa::errors::Error) -> Self {
        Self::Rsa(x)
    }
}

impl From<cbc::cipher::block_padding::UnpadError> for BackendError {
    fn from(_: cbc::cipher::block_padding::UnpadError) -> Self {
        Self::Unpad
    }
}

impl From<aes_gcm::Error> for BackendError {
    fn from(_: aes_gcm::Error) -> Self {
        Self::Aead
    }
}

impl From<aes_kw::Error> for BackendError {
    fn from(_: aes_kw::Error) -> Self {
        Self::KeyWrap
    }
}

/// The [RustCrypto] based backend.
///
/// [RustCrypto]: https://github.com/RustCrypto
#[derive(Debug)]
pub enum Backend {}

impl interface::Backend for Backend {
    type Aes = aes::Aes;
    type Error = BackendError;
    type HmacKey = hmac::Key;
    type RsaPrivateKey = rsa::PrivateKey;
    type RsaPublicKey = rsa::PublicKey;

    fn fill_random(buf: &mut [u8]) -> Result<(), Self::Error> {
        use rand_core::OsRng;

        OsRng.try_fill_bytes(buf).map_err(BackendError::Random)
    }
}
