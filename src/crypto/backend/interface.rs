//! Common traits that define the API each backend must implement.

use std::{error, fmt};

pub(crate) mod aes;
pub(crate) mod hmac;
pub(crate) mod rsa;

/// The backend trait that all backends must implement.
///
/// This trait is used to define some commonly used operations, like generating
/// random data, and to name the key types of the backend.
pub(crate) trait Backend {
    /// The error type that is used by this backend.
    type Error: fmt::Debug + fmt::Display + error::Error;

    /// The HMAC key type.
    type HmacKey: hmac::Key;

    /// The RSA private key type.
    type RsaPrivateKey: rsa::PrivateKey<PublicKey = Self::RsaPublicKey>;

    /// The RSA public key type.
    type RsaPublicKey: rsa::PublicKey;

    /// The AES modes of operation.
    type Aes: aes::Aes;

    /// Fills the given buffer with random data.
    fn fill_random(buf: &mut [u8]) -> Result<(), Self::Error>;
}
