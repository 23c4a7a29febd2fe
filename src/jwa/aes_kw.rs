use crate::crypto::cipher::AesVariant;

/// Key Wrapping with AES Key Wrap as defined in [section 4.4 of RFC 7518]
///
/// [section 4.4 of RFC 7518]: <https://datatracker.ietf.org/doc/html/rfc7518#section-4.4>
#[derive(Debug, Clone, PartialEq, Eq, Copy, Hash)]
pub enum AesKw {
    /// AES Key Wrap with default initial value using 128-bit key
    Aes128,
    /// AES Key Wrap with default initial value using 192-bit key
    Aes192,
    /// AES Key Wrap with default initial value using 256-bit key
    Aes256,
}

impl AesKw {
    /// Size of the key encryption key in bytes.
    pub(crate) const fn key_size(self) -> usize {
        self.aes_variant().key_size()
    }

    pub(crate) const fn aes_variant(self) -> AesVariant {
        match self {
            Self::Aes128 => AesVariant::Aes128,
            Self::Aes192 => AesVariant::Aes192,
            Self::Aes256 => AesVariant::Aes256,
        }
    }
}

impl From<AesKw> for super::JsonWebEncryptionAlgorithm {
    fn from(x: AesKw) -> Self {
        Self::AesKw(x)
    }
}
