//! The lifecycle of the content encryption key (CEK).

use std::fmt;

use rand_core::CryptoRngCore;
use secrecy::{ExposeSecret as _, SecretSlice};
use subtle::{Choice, ConstantTimeEq as _};
use zeroize::Zeroizing;

use super::{DecryptionKey, EncryptionError, EncryptionKey};
use crate::{
    crypto::cipher::{self, Transformation},
    jwa::{JsonWebContentEncryptionAlgorithm, JsonWebEncryptionAlgorithm},
};

const MIN_RSA_BITS: usize = 2048;

/// The key of a single encryption or decryption, zeroized on drop.
#[derive(Clone)]
pub(crate) struct ContentEncryptionKey(SecretSlice<u8>);

impl ContentEncryptionKey {
    /// A fresh random key for `enc`.
    fn generate(
        enc: JsonWebContentEncryptionAlgorithm,
        rng: &mut dyn CryptoRngCore,
    ) -> Result<Self, EncryptionError> {
        let mut key = Zeroizing::new(vec![0u8; enc.key_size()]);
        rng.try_fill_bytes(&mut key[..])?;
        Ok(Self::from_slice(&key))
    }

    /// An all zero key of the right size for `enc`. It stands in for a key
    /// that could not be recovered.
    fn dummy(enc: JsonWebContentEncryptionAlgorithm) -> Self {
        Self(SecretSlice::from(vec![0u8; enc.key_size()]))
    }

    fn from_slice(key: &[u8]) -> Self {
        Self(SecretSlice::from(key.to_vec()))
    }

    pub(crate) fn expose(&self) -> &[u8] {
        self.0.expose_secret()
    }
}

impl fmt::Debug for ContentEncryptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ContentEncryptionKey([REDACTED])")
    }
}

/// Establishes the content encryption key for a new JWE and protects it for
/// the recipient.
///
/// Returns the key together with the content of the encrypted key part. For
/// `dir` the shared key is the content encryption key and the encrypted key
/// part is empty.
pub(crate) fn wrap(
    alg: JsonWebEncryptionAlgorithm,
    enc: JsonWebContentEncryptionAlgorithm,
    key: &EncryptionKey,
    rng: &mut dyn CryptoRngCore,
) -> Result<(ContentEncryptionKey, Vec<u8>), EncryptionError> {
    match (alg, key) {
        (JsonWebEncryptionAlgorithm::Rsa1_5, EncryptionKey::Rsa(public)) => {
            let bits = public.bits();
            if bits < MIN_RSA_BITS {
                return Err(EncryptionError::WeakRsaKey { bits });
            }

            let cek = ContentEncryptionKey::generate(enc, rng)?;
            let encrypted_key = public.encrypt_pkcs1_v1_5(rng, cek.expose())?;
            Ok((cek, encrypted_key))
        }
        (JsonWebEncryptionAlgorithm::AesKw(kw), EncryptionKey::Symmetric(kek)) => {
            check_len(kw.key_size(), kek.len())?;

            let cek = ContentEncryptionKey::generate(enc, rng)?;
            let encrypted_key = cipher::encrypt(
                Transformation::AesKeyWrap(kw.aes_variant()),
                kek.expose(),
                None,
                &[],
                cek.expose(),
            )?;
            Ok((cek, encrypted_key))
        }
        (JsonWebEncryptionAlgorithm::Direct, EncryptionKey::Symmetric(shared)) => {
            check_len(enc.key_size(), shared.len())?;
            Ok((ContentEncryptionKey::from_slice(shared.expose()), Vec::new()))
        }
        (alg, _) => Err(EncryptionError::KeyMismatch(alg)),
    }
}

fn check_len(expected: usize, actual: usize) -> Result<(), EncryptionError> {
    match expected == actual {
        true => Ok(()),
        false => Err(EncryptionError::InvalidKeyLength { expected, actual }),
    }
}

/// Recovers the content encryption key from the encrypted key part.
///
/// This never fails early. If the key can not be recovered for whatever
/// reason, an all zero key of the correct size is returned together with a
/// falsy [`Choice`], so the caller runs the content decryption exactly as it
/// would for a good key and only reports the failure at the very end.
pub(crate) fn unwrap(
    alg: JsonWebEncryptionAlgorithm,
    enc: JsonWebContentEncryptionAlgorithm,
    key: &DecryptionKey,
    encrypted_key: &[u8],
) -> (ContentEncryptionKey, Choice) {
    let recovered = match (alg, key.for_algorithm(alg)) {
        (JsonWebEncryptionAlgorithm::Rsa1_5, Some(DecryptionKey::Rsa(private))) => private
            .decrypt_pkcs1_v1_5(encrypted_key)
            .ok()
            .map(Zeroizing::new),
        (JsonWebEncryptionAlgorithm::AesKw(kw), Some(DecryptionKey::Symmetric(kek))) => cipher::decrypt(
            Transformation::AesKeyWrap(kw.aes_variant()),
            kek.expose(),
            None,
            &[],
            encrypted_key,
        )
        .ok()
        .map(Zeroizing::new),
        (JsonWebEncryptionAlgorithm::Direct, Some(DecryptionKey::Symmetric(shared))) => {
            // `dir` must not carry an encrypted key
            match encrypted_key.is_empty() {
                true => Some(Zeroizing::new(shared.expose().to_vec())),
                false => None,
            }
        }
        _ => None,
    };

    match recovered {
        Some(cek) => {
            let ok = cek.len().ct_eq(&enc.key_size());
            match bool::from(ok) {
                true => (ContentEncryptionKey::from_slice(&cek), ok),
                false => (ContentEncryptionKey::dummy(enc), ok),
            }
        }
        None => (ContentEncryptionKey::dummy(enc), Choice::from(0)),
    }
}
