use ::hmac::Hmac;
use digest::{Mac as _, Output};

use crate::{
    crypto::{backend::interface::hmac, Result},
    jwa,
};

/// Rust crypto uses generic arguments to represent the variant.
///
/// We don't to that at this level, so we have to erase the type.
enum ErasedKey {
    Hs256(Hmac<sha2::Sha256>),
    Hs384(Hmac<sha2::Sha384>),
    Hs512(Hmac<sha2::Sha512>),
}

pub enum ErasedOutput {
    Hs256(Output<Hmac<sha2::Sha256>>),
    Hs384(Output<Hmac<sha2::Sha384>>),
    Hs512(Output<Hmac<sha2::Sha512>>),
}

impl AsRef<[u8]> for ErasedOutput {
    fn as_ref(&self) -> &[u8] {
        match self {
            ErasedOutput::Hs256(mac) => mac.as_ref(),
            ErasedOutput::Hs384(mac) => mac.as_ref(),
            ErasedOutput::Hs512(mac) => mac.as_ref(),
        }
    }
}

/// Feeds every part into the MAC and resets it afterwards.
fn finalize<M: digest::Mac + digest::FixedOutputReset>(mac: &mut M, parts: &[&[u8]]) -> Output<M> {
    for part in parts {
        digest::Mac::update(mac, part);
    }
    mac.finalize_reset().into_bytes()
}

/// A low level HMAC key.
#[repr(transparent)]
pub struct Key {
    inner: ErasedKey,
}

impl hmac::Key for Key {
    type Output = ErasedOutput;

    fn new(variant: jwa::Hmac, data: &[u8]) -> Result<Self> {
        let key = match variant {
            jwa::Hmac::Hs256 => ErasedKey::Hs256(Hmac::<sha2::Sha256>::new_from_slice(data)?),
            jwa::Hmac::Hs384 => ErasedKey::Hs384(Hmac::<sha2::Sha384>::new_from_slice(data)?),
            jwa::Hmac::Hs512 => ErasedKey::Hs512(Hmac::<sha2::Sha512>::new_from_slice(data)?),
        };

        Ok(Self { inner: key })
    }

    fn mac(&mut self, parts: &[&[u8]]) -> Result<Self::Output> {
        let output = match &mut self.inner {
            ErasedKey::Hs256(mac) => ErasedOutput::Hs256(finalize(mac, parts)),
            ErasedKey::Hs384(mac) => ErasedOutput::Hs384(finalize(mac, parts)),
            ErasedKey::Hs512(mac) => ErasedOutput::Hs512(finalize(mac, parts)),
        };

        Ok(output)
    }
}
