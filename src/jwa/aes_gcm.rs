use crate::crypto::cipher::AesVariant;

/// Content Encryption with AES GCM as defined in [section 5.3 of RFC 7518]
///
/// All variants use a 96 bit initialization vector and a 128 bit
/// authentication tag.
///
/// [section 5.3 of RFC 7518]: <https://datatracker.ietf.org/doc/html/rfc7518#section-5.3>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AesGcm {
    /// AES GCM using 128-bit key
    Aes128,
    /// AES GCM using 192-bit key
    Aes192,
    /// AES GCM using 256-bit key
    Aes256,
}

impl AesGcm {
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

impl From<AesGcm> for super::JsonWebContentEncryptionAlgorithm {
    fn from(x: AesGcm) -> Self {
        Self::AesGcm(x)
    }
}
