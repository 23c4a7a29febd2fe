use ::rsa::{
    traits::{PrivateKeyParts as _, PublicKeyParts as _},
    BigUint, Pkcs1v15Encrypt, RsaPrivateKey, RsaPublicKey,
};
use rand_core::{CryptoRngCore, OsRng};
use secrecy::{ExposeSecret, SecretSlice};
use zeroize::Zeroizing;

use crate::crypto::{backend::interface::rsa, Result};

/// A low level private RSA key.
#[derive(Clone)]
#[repr(transparent)]
pub(crate) struct PrivateKey {
    // always precomputed, `private_components` relies on the CRT values
    inner: RsaPrivateKey,
}

impl rsa::PrivateKey for PrivateKey {
    type PublicKey = PublicKey;

    fn generate(bits: usize) -> Result<Self> {
        // `RsaPrivateKey::new` precomputes
        Ok(Self {
            inner: RsaPrivateKey::new(&mut OsRng, bits)?,
        })
    }

    fn from_components(
        pri: rsa::PrivateKeyComponents,
        pu: rsa::PublicKeyComponents,
    ) -> Result<Self> {
        let n = BigUint::from_bytes_be(&pu.n);
        let e = BigUint::from_bytes_be(&pu.e);

        let d = BigUint::from_bytes_be(pri.d.expose_secret());

        let p = BigUint::from_bytes_be(pri.prime.p.expose_secret());
        let q = BigUint::from_bytes_be(pri.prime.q.expose_secret());

        let mut key = RsaPrivateKey::from_components(n, e, d, vec![p, q])?;
        key.validate()?;
        key.precompute()?;
        Ok(Self { inner: key })
    }

    fn to_public_key(&self) -> Self::PublicKey {
        PublicKey {
            inner: self.inner.to_public_key(),
        }
    }

    fn private_components(&self) -> Result<rsa::PrivateKeyComponents> {
        let [p, q] = self.inner.primes() else {
            return Err(super::BackendError::RsaTwoPrimes.into());
        };

        let precomputed = |x: Option<&BigUint>| {
            x.map(|x| SecretSlice::from(x.to_bytes_be()))
                .ok_or(super::BackendError::RsaNotPrecomputed)
        };

        let qi = Zeroizing::new(self.inner.crt_coefficient());

        Ok(rsa::PrivateKeyComponents {
            d: SecretSlice::from(self.inner.d().to_bytes_be()),
            prime: rsa::PrivateKeyPrimeComponents {
                p: SecretSlice::from(p.to_bytes_be()),
                q: SecretSlice::from(q.to_bytes_be()),
                dp: precomputed(self.inner.dp())?,
                dq: precomputed(self.inner.dq())?,
                qi: precomputed(Option::as_ref(&qi))?,
            },
        })
    }

    fn public_components(&self) -> rsa::PublicKeyComponents {
        rsa::PublicKeyComponents {
            n: self.inner.n().to_bytes_be(),
            e: self.inner.e().to_bytes_be(),
        }
    }

    fn decrypt_pkcs1_v1_5(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        Ok(self
            .inner
            .decrypt_blinded(&mut OsRng, Pkcs1v15Encrypt, ciphertext)?)
    }
}

/// A low level public RSA key.
#[derive(Clone)]
#[repr(transparent)]
pub(crate) struct PublicKey {
    inner: RsaPublicKey,
}

impl rsa::PublicKey for PublicKey {
    fn from_components(c: rsa::PublicKeyComponents) -> Result<Self> {
        let n = BigUint::from_bytes_be(&c.n);
        let e = BigUint::from_bytes_be(&c.e);
        let key = RsaPublicKey::new(n, e)?;

        Ok(Self { inner: key })
    }

    fn components(&self) -> rsa::PublicKeyComponents {
        rsa::PublicKeyComponents {
            n: self.inner.n().to_bytes_be(),
            e: self.inner.e().to_bytes_be(),
        }
    }

    fn bits(&self) -> usize {
        self.inner.n().bits()
    }

    fn encrypt_pkcs1_v1_5(&self, mut rng: &mut dyn CryptoRngCore, msg: &[u8]) -> Result<Vec<u8>> {
        Ok(self.inner.encrypt(&mut rng, Pkcs1v15Encrypt, msg)?)
    }
}
