//! The primitives for working with [RSA] encryption.
//!
//! Keys are (de)serialized as `RSA` JSON Web Keys as defined in [section 6.3
//! of RFC 7518].
//!
//! [RSA]: https://en.wikipedia.org/wiki/RSA_cryptosystem
//! [section 6.3 of RFC 7518]: <https://datatracker.ietf.org/doc/html/rfc7518#section-6.3>

use std::fmt;

use rand_core::CryptoRngCore;
use serde::{de::Error as _, ser::Error as _, Deserialize, Serialize};

use super::backend::{
    interface::{
        self,
        rsa::{self, PrivateKey as _, PublicKey as _},
    },
    Backend,
};
use crate::{
    base64_url::{Base64UrlBytes, SecretBase64UrlBytes},
    crypto::Result,
};

type BackendPublicKey = <Backend as interface::Backend>::RsaPublicKey;
type BackendPrivateKey = <Backend as interface::Backend>::RsaPrivateKey;

/// The RSA public key type.
#[derive(Clone)]
pub struct PublicKey {
    inner: BackendPublicKey,
}

impl PublicKey {
    /// The size of the modulus in bits.
    pub fn bits(&self) -> usize {
        self.inner.bits()
    }

    /// Encrypts `msg` using RSAES-PKCS1-v1_5.
    pub(crate) fn encrypt_pkcs1_v1_5(
        &self,
        rng: &mut dyn CryptoRngCore,
        msg: &[u8],
    ) -> Result<Vec<u8>> {
        self.inner.encrypt_pkcs1_v1_5(rng, msg)
    }
}

impl Eq for PublicKey {}
impl PartialEq for PublicKey {
    fn eq(&self, o: &Self) -> bool {
        let (a, b) = (self.inner.components(), o.inner.components());
        a.n == b.n && a.e == b.e
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let components = self.inner.components();
        f.debug_struct("PublicKey")
            .field("bits", &self.bits())
            .field("e", &components.e)
            .finish_non_exhaustive()
    }
}

impl Serialize for PublicKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        #[derive(Serialize)]
        struct Repr {
            kty: &'static str,

            n: Base64UrlBytes,
            e: Base64UrlBytes,
        }

        let components = self.inner.components();
        Repr {
            kty: "RSA",
            n: Base64UrlBytes(components.n),
            e: Base64UrlBytes(components.e),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Repr {
            kty: String,

            n: Base64UrlBytes,
            e: Base64UrlBytes,
        }

        let repr = Repr::deserialize(deserializer)?;

        if &*repr.kty != "RSA" {
            return Err(D::Error::custom("`kty` field is required to be `RSA`"));
        }

        let components = rsa::PublicKeyComponents {
            n: repr.n.0,
            e: repr.e.0,
        };
        let key = BackendPublicKey::from_components(components)
            .map_err(|e| D::Error::custom(format!("failed to construct RSA public key: {e}")))?;
        Ok(Self { inner: key })
    }
}

/// The RSA private key type.
#[derive(Clone)]
pub struct PrivateKey {
    inner: BackendPrivateKey,
}

impl PrivateKey {
    /// Generate a new RSA key pair with a modulus of `bits` bits, using the
    /// backend's default RNG.
    ///
    /// # Errors
    ///
    /// Returns an [`Err`] if the key generation fails.
    pub fn generate(bits: usize) -> Result<Self> {
        Ok(Self {
            inner: BackendPrivateKey::generate(bits)?,
        })
    }

    /// Get the public key corresponding to this private key.
    pub fn to_public_key(&self) -> PublicKey {
        PublicKey {
            inner: self.inner.to_public_key(),
        }
    }

    /// The size of the modulus in bits.
    pub fn bits(&self) -> usize {
        self.to_public_key().bits()
    }

    /// Decrypts a message that was encrypted using RSAES-PKCS1-v1_5.
    pub(crate) fn decrypt_pkcs1_v1_5(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.inner.decrypt_pkcs1_v1_5(ciphertext)
    }
}

impl Eq for PrivateKey {}
impl PartialEq for PrivateKey {
    fn eq(&self, o: &Self) -> bool {
        self.to_public_key() == o.to_public_key()
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("public", &self.to_public_key())
            .field("primes", &"[REDACTED]")
            .finish()
    }
}

impl Serialize for PrivateKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        #[derive(Serialize)]
        struct Repr {
            kty: &'static str,

            n: Base64UrlBytes,
            e: Base64UrlBytes,

            d: SecretBase64UrlBytes,
            p: SecretBase64UrlBytes,
            q: SecretBase64UrlBytes,
            dp: SecretBase64UrlBytes,
            dq: SecretBase64UrlBytes,
            qi: SecretBase64UrlBytes,
        }

        let public = self.inner.public_components();
        let private = self
            .inner
            .private_components()
            .map_err(|e| S::Error::custom(format!("failed to export RSA private key: {e}")))?;

        let repr = Repr {
            kty: "RSA",
            n: Base64UrlBytes(public.n),
            e: Base64UrlBytes(public.e),
            d: SecretBase64UrlBytes(private.d),
            p: SecretBase64UrlBytes(private.prime.p),
            q: SecretBase64UrlBytes(private.prime.q),
            dp: SecretBase64UrlBytes(private.prime.dp),
            dq: SecretBase64UrlBytes(private.prime.dq),
            qi: SecretBase64UrlBytes(private.prime.qi),
        };

        repr.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PrivateKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Repr {
            kty: String,

            n: Base64UrlBytes,
            e: Base64UrlBytes,
            d: SecretBase64UrlBytes,

            p: Option<SecretBase64UrlBytes>,
            q: Option<SecretBase64UrlBytes>,
            dp: Option<SecretBase64UrlBytes>,
            dq: Option<SecretBase64UrlBytes>,
            qi: Option<SecretBase64UrlBytes>,

            oth: Option<serde_json::Value>,
        }

        let repr = Repr::deserialize(deserializer)?;

        if &*repr.kty != "RSA" {
            return Err(D::Error::custom("`kty` field is required to be `RSA`"));
        }

        // RFC 7518 section 6.3.2:
        //
        // The parameter "d" is REQUIRED for RSA private keys.  The others enable
        // optimizations and SHOULD be included by producers of JWKs
        // representing RSA private keys.  If the producer includes any of the
        // other private key parameters, then all of the others MUST be present,
        // with the exception of "oth", which MUST only be present when more than two
        // prime factors were used.
        if repr.oth.is_some() {
            return Err(D::Error::custom(
                "RSA private keys with `oth` field set are not supported",
            ));
        }

        let err = |field: &str| {
            D::Error::custom(format!(
                "expected `{field}` to be present, RSA private keys without their primes are not \
                 supported"
            ))
        };

        let prime = rsa::PrivateKeyPrimeComponents {
            p: repr.p.ok_or_else(|| err("p"))?.0,
            q: repr.q.ok_or_else(|| err("q"))?.0,
            dp: repr.dp.ok_or_else(|| err("dp"))?.0,
            dq: repr.dq.ok_or_else(|| err("dq"))?.0,
            qi: repr.qi.ok_or_else(|| err("qi"))?.0,
        };

        let public = rsa::PublicKeyComponents {
            n: repr.n.0,
            e: repr.e.0,
        };
        let private = rsa::PrivateKeyComponents { d: repr.d.0, prime };

        let key = BackendPrivateKey::from_components(private, public)
            .map_err(|e| D::Error::custom(format!("failed to construct RSA private key: {e}")))?;
        Ok(Self { inner: key })
    }
}
