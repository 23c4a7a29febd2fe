use super::Hmac;
use crate::crypto::cipher::AesVariant;

/// Authenticated encryption algorithms built using a composition of AES in
/// Cipher Block Chaining (CBC) mode and HMAC as defined in [section 5.2 of RFC
/// 7518]
///
/// [section 5.2 of RFC 7518]: <https://datatracker.ietf.org/doc/html/rfc7518#section-5.2>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AesCbcHs {
    /// AES_128_CBC_HMAC_SHA_256 authenticated encryption as defined in [section
    /// 5.2.3]
    ///
    /// [section 5.2.3]: <https://datatracker.ietf.org/doc/html/rfc7518#section-5.2.3>
    Aes128CbcHs256,
    /// AES_192_CBC_HMAC_SHA_384 authenticated encryption algorithm as defined
    /// in [section 5.2.4]
    ///
    /// [section 5.2.4]: <https://datatracker.ietf.org/doc/html/rfc7518#section-5.2.4>
    Aes192CbcHs384,

    /// AES_256_CBC_HMAC_SHA_512 authenticated encryption algorithm as defined
    /// in [section 5.2.5]
    ///
    /// [section 5.2.5]: <https://datatracker.ietf.org/doc/html/rfc7518#section-5.2.5>
    Aes256CbcHs512,
}

impl AesCbcHs {
    /// `MAC_KEY_LEN`, which is also `ENC_KEY_LEN` and `T_LEN`.
    pub(crate) const fn key_offset(self) -> usize {
        match self {
            Self::Aes128CbcHs256 => 16,
            Self::Aes192CbcHs384 => 24,
            Self::Aes256CbcHs512 => 32,
        }
    }

    pub(crate) const fn mac_algorithm(self) -> Hmac {
        match self {
            Self::Aes128CbcHs256 => Hmac::Hs256,
            Self::Aes192CbcHs384 => Hmac::Hs384,
            Self::Aes256CbcHs512 => Hmac::Hs512,
        }
    }

    pub(crate) const fn aes_variant(self) -> AesVariant {
        match self {
            Self::Aes128CbcHs256 => AesVariant::Aes128,
            Self::Aes192CbcHs384 => AesVariant::Aes192,
            Self::Aes256CbcHs512 => AesVariant::Aes256,
        }
    }
}

impl From<AesCbcHs> for super::JsonWebContentEncryptionAlgorithm {
    fn from(x: AesCbcHs) -> Self {
        Self::AesCbcHs(x)
    }
}
