//! Shared symmetric keys, used for AES key wrapping and for direct
//! encryption.

use std::fmt;

use secrecy::{ExposeSecret as _, SecretSlice};
use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use subtle::ConstantTimeEq as _;

use super::Result;
use crate::base64_url::SecretBase64UrlBytes;

/// A shared symmetric key.
///
/// The key material is zeroized on drop and never printed. In JSON, the key
/// is represented as an `oct` JSON Web Key as defined in [section 6.4 of RFC
/// 7518].
///
/// [section 6.4 of RFC 7518]: <https://datatracker.ietf.org/doc/html/rfc7518#section-6.4>
#[derive(Clone)]
pub struct SymmetricKey {
    key: SecretSlice<u8>,
}

impl SymmetricKey {
    /// Creates a key from the given bytes.
    pub fn new(key: impl Into<Vec<u8>>) -> Self {
        Self {
            key: SecretSlice::from(key.into()),
        }
    }

    /// Generates a new random key of `len` bytes using the backend's
    /// default RNG.
    ///
    /// # Errors
    ///
    /// Returns an error if the crypto backend failed to generate random data.
    pub fn generate(len: usize) -> Result<Self> {
        let mut key = vec![0u8; len];
        super::fill_random(&mut key)?;
        Ok(Self::new(key))
    }

    /// Returns the number of bytes of this key.
    #[inline]
    pub fn len(&self) -> usize {
        self.key.expose_secret().len()
    }

    /// Returns `true` if this key has a length of zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn expose(&self) -> &[u8] {
        self.key.expose_secret()
    }
}

impl fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymmetricKey")
            .field("len", &self.len())
            .field("key", &"[REDACTED]")
            .finish()
    }
}

impl PartialEq for SymmetricKey {
    fn eq(&self, other: &Self) -> bool {
        self.expose().ct_eq(other.expose()).into()
    }
}

impl Eq for SymmetricKey {}

impl<'de> Deserialize<'de> for SymmetricKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Repr {
            kty: String,
            k: SecretBase64UrlBytes,
        }

        let repr = Repr::deserialize(deserializer)?;
        if repr.kty != "oct" {
            return Err(D::Error::custom("`kty` field is required to be `oct`"));
        }

        Ok(Self { key: repr.k.0 })
    }
}

impl Serialize for SymmetricKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        #[derive(Serialize)]
        struct Repr {
            kty: &'static str,
            k: SecretBase64UrlBytes,
        }
        Repr {
            kty: "oct",
            k: SecretBase64UrlBytes(self.key.clone()),
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jwk_representation() {
        let key: SymmetricKey =
            serde_json::from_str(r#"{"kty":"oct","k":"GawgguFyGrWKav7AX4VKUg"}"#).unwrap();
        assert_eq!(key.len(), 16);
        assert_eq!(
            serde_json::to_string(&key).unwrap(),
            r#"{"kty":"oct","k":"GawgguFyGrWKav7AX4VKUg"}"#
        );

        assert!(serde_json::from_str::<SymmetricKey>(r#"{"kty":"RSA","k":"AA"}"#).is_err());
    }

    #[test]
    fn debug_does_not_leak() {
        let key = SymmetricKey::new([0x42; 16]);
        let debug = format!("{key:?}");
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("66"));
    }

    #[test]
    fn generate() {
        let a = SymmetricKey::generate(32).unwrap();
        let b = SymmetricKey::generate(32).unwrap();
        assert_eq!(a.len(), 32);
        assert_ne!(a, b);
    }
}
