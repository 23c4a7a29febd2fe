//! The HMAC half of the AES-CBC-HMAC-SHA2 compositions.

use std::fmt;

use super::{
    backend::{
        interface::{self, hmac::Key as _},
        Backend,
    },
    Result,
};
use crate::jwa;

type BackendHmacKey = <Backend as interface::Backend>::HmacKey;

/// The untruncated output of a MAC operation.
#[repr(transparent)]
pub(crate) struct Output {
    inner: <BackendHmacKey as interface::hmac::Key>::Output,
}

impl AsRef<[u8]> for Output {
    fn as_ref(&self) -> &[u8] {
        self.inner.as_ref()
    }
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Output([REDACTED])")
    }
}

/// An HMAC key for one of the SHA-2 variants.
pub(crate) struct Key {
    inner: BackendHmacKey,
}

impl Key {
    /// Creates a new key. HMAC accepts keys of any length.
    pub(crate) fn new(variant: jwa::Hmac, key: &[u8]) -> Result<Self> {
        Ok(Self {
            inner: BackendHmacKey::new(variant, key)?,
        })
    }

    /// Computes the MAC over the concatenation of `parts`.
    pub(crate) fn mac(&mut self, parts: &[&[u8]]) -> Result<Output> {
        Ok(Output {
            inner: self.inner.mac(parts)?,
        })
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;

    use super::*;

    // RFC 4231, test case 2
    #[test]
    fn rfc4231_known_answer() {
        let data: &[u8] = b"what do ya want for nothing?";
        let (a, b) = data.split_at(7);

        let mut key = Key::new(jwa::Hmac::Hs256, b"Jefe").unwrap();
        let expected = hex!("5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843");

        assert_eq!(key.mac(&[data]).unwrap().as_ref(), expected);
        // split input and reuse of the key give the same result
        assert_eq!(key.mac(&[a, b]).unwrap().as_ref(), expected);

        let mut key = Key::new(jwa::Hmac::Hs512, b"Jefe").unwrap();
        let expected = hex!(
            "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea250554"
            "9758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737"
        );
        assert_eq!(key.mac(&[a, b]).unwrap().as_ref(), expected);
        assert_eq!(key.mac(&[data]).unwrap().as_ref(), expected);
    }

    #[test]
    fn output_sizes() {
        for variant in [jwa::Hmac::Hs256, jwa::Hmac::Hs384, jwa::Hmac::Hs512] {
            let mut key = Key::new(variant, &[0; 16]).unwrap();
            assert_eq!(key.mac(&[b"x"]).unwrap().as_ref().len(), variant.output_size());
        }
    }
}
