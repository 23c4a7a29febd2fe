//! This backend is a dummy backend, that will return an error for all
//! methods.
//!
//! It is selected if no crypto backend feature is enabled, so the crate still
//! compiles and parsing tokens keeps working.

use rand_core::CryptoRngCore;

use super::interface;
use crate::crypto::{cipher::AesVariant, Result};

#[derive(Debug, thiserror::Error)]
#[error("the dummy crypto backend does not support any operations")]
pub(crate) struct Error;

/// The dummy backend.
#[derive(Debug)]
pub(crate) enum Backend {}

impl interface::Backend for Backend {
    type Aes = DummyKey;
    type Error = Error;
    type HmacKey = DummyKey;
    type RsaPrivateKey = DummyKey;
    type RsaPublicKey = DummyKey;

    fn fill_random(_buf: &mut [u8]) -> Result<(), Self::Error> {
        Err(Error)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DummyKey {
    _private: (),
}

impl interface::aes::Aes for DummyKey {
    fn cbc_encrypt(_: AesVariant, _: &[u8], _: &[u8], _: &[u8]) -> Result<Vec<u8>> {
        Err(Error.into())
    }

    fn cbc_decrypt(_: AesVariant, _: &[u8], _: &[u8], _: &[u8]) -> Result<Vec<u8>> {
        Err(Error.into())
    }

    fn gcm_encrypt(_: AesVariant, _: &[u8], _: &[u8], _: &[u8], _: &[u8]) -> Result<Vec<u8>> {
        Err(Error.into())
    }

    fn gcm_decrypt(_: AesVariant, _: &[u8], _: &[u8], _: &[u8], _: &[u8]) -> Result<Vec<u8>> {
        Err(Error.into())
    }

    fn key_wrap(_: AesVariant, _: &[u8], _: &[u8]) -> Result<Vec<u8>> {
        Err(Error.into())
    }

    fn key_unwrap(_: AesVariant, _: &[u8], _: &[u8]) -> Result<Vec<u8>> {
        Err(Error.into())
    }
}

impl interface::hmac::Key for DummyKey {
    type Output = Vec<u8>;

    fn new(_: crate::jwa::Hmac, _: &[u8]) -> Result<Self> {
        Err(Error.into())
    }

    fn mac(&mut self, _: &[&[u8]]) -> Result<Self::Output> {
        unreachable!()
    }
}

impl interface::rsa::PrivateKey for DummyKey {
    type PublicKey = DummyKey;

    fn generate(_: usize) -> Result<Self> {
        Err(Error.into())
    }

    fn from_components(
        _: interface::rsa::PrivateKeyComponents,
        _: interface::rsa::PublicKeyComponents,
    ) -> Result<Self> {
        Err(Error.into())
    }

    fn to_public_key(&self) -> Self::PublicKey {
        unreachable!()
    }

    fn private_components(&self) -> Result<interface::rsa::PrivateKeyComponents> {
        unreachable!()
    }

    fn public_components(&self) -> interface::rsa::PublicKeyComponents {
        unreachable!()
    }

    fn decrypt_pkcs1_v1_5(&self, _: &[u8]) -> Result<Vec<u8>> {
        unreachable!()
    }
}

impl interface::rsa::PublicKey for DummyKey {
    fn from_components(_: interface::rsa::PublicKeyComponents) -> Result<Self> {
        Err(Error.into())
    }

    fn components(&self) -> interface::rsa::PublicKeyComponents {
        unreachable!()
    }

    fn bits(&self) -> usize {
        unreachable!()
    }

    fn encrypt_pkcs1_v1_5(&self, _: &mut dyn CryptoRngCore, _: &[u8]) -> Result<Vec<u8>> {
        unreachable!()
    }
}
