//! Stateless block cipher operations.
//!
//! [`encrypt`] and [`decrypt`] are thin wrappers around the backend's AES
//! modes. Whatever goes wrong inside (a key of the wrong size, a missing
//! initialization vector, broken padding, a failed integrity check) is
//! reported as the same [`CipherError`], so callers can not learn which step
//! of a primitive failed.

use thiserror::Error;

use super::backend::{
    interface::{self, aes::Aes as _},
    Backend,
};

type BackendAes = <Backend as interface::Backend>::Aes;

/// The key sizes of AES.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AesVariant {
    /// AES with a 128 bit key
    Aes128,
    /// AES with a 192 bit key
    Aes192,
    /// AES with a 256 bit key
    Aes256,
}

impl AesVariant {
    /// The key size in bytes.
    pub const fn key_size(self) -> usize {
        match self {
            Self::Aes128 => 16,
            Self::Aes192 => 24,
            Self::Aes256 => 32,
        }
    }
}

/// A block cipher together with its mode of operation and padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transformation {
    /// AES in Cipher Block Chaining mode with PKCS#7 padding. Requires a 128
    /// bit initialization vector and does not support additional
    /// authenticated data.
    AesCbcPkcs7(AesVariant),
    /// AES in Galois/Counter Mode. Requires a 96 bit initialization vector.
    /// The 128 bit authentication tag is appended to the ciphertext.
    AesGcm(AesVariant),
    /// AES Key Wrap as defined in [RFC 3394]. Takes neither an initialization
    /// vector nor additional authenticated data.
    ///
    /// [RFC 3394]: <https://datatracker.ietf.org/doc/html/rfc3394>
    AesKeyWrap(AesVariant),
}

impl Transformation {
    /// The size of the initialization vector this transformation expects, if
    /// it takes one.
    pub const fn iv_size(&self) -> Option<usize> {
        match self {
            Self::AesCbcPkcs7(_) => Some(16),
            Self::AesGcm(_) => Some(12),
            Self::AesKeyWrap(_) => None,
        }
    }
}

/// The only error returned by the block cipher operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[non_exhaustive]
pub enum CipherError {
    /// Encryption failed.
    #[error("encryption failed")]
    Encrypt,
    /// Decryption failed.
    #[error("decryption failed")]
    Decrypt,
}

/// Encrypts `plaintext` using the given transformation.
///
/// `aad` must be empty for every transformation except
/// [`Transformation::AesGcm`].
///
/// # Errors
///
/// Returns [`CipherError::Encrypt`] if the key or the initialization vector
/// do not fit the transformation, or if the backend failed.
pub fn encrypt(
    transformation: Transformation,
    key: &[u8],
    iv: Option<&[u8]>,
    aad: &[u8],
    plaintext: &[u8],
) -> Result<Vec<u8>, CipherError> {
    let res = match (transformation, iv) {
        (Transformation::AesCbcPkcs7(variant), Some(iv)) if aad.is_empty() => {
            BackendAes::cbc_encrypt(variant, key, iv, plaintext)
        }
        (Transformation::AesGcm(variant), Some(iv)) => {
            BackendAes::gcm_encrypt(variant, key, iv, aad, plaintext)
        }
        (Transformation::AesKeyWrap(variant), None) if aad.is_empty() => {
            BackendAes::key_wrap(variant, key, plaintext)
        }
        _ => return Err(CipherError::Encrypt),
    };

    res.map_err(|_| CipherError::Encrypt)
}

/// Decrypts `ciphertext` using the given transformation.
///
/// # Errors
///
/// Returns [`CipherError::Decrypt`] for every kind of failure, including
/// invalid padding and failed integrity checks.
pub fn decrypt(
    transformation: Transformation,
    key: &[u8],
    iv: Option<&[u8]>,
    aad: &[u8],
    ciphertext: &[u8],
) -> Result<Vec<u8>, CipherError> {
    let res = match (transformation, iv) {
        (Transformation::AesCbcPkcs7(variant), Some(iv)) if aad.is_empty() => {
            BackendAes::cbc_decrypt(variant, key, iv, ciphertext)
        }
        (Transformation::AesGcm(variant), Some(iv)) => {
            BackendAes::gcm_decrypt(variant, key, iv, aad, ciphertext)
        }
        (Transformation::AesKeyWrap(variant), None) if aad.is_empty() => {
            BackendAes::key_unwrap(variant, key, ciphertext)
        }
        _ => return Err(CipherError::Decrypt),
    };

    res.map_err(|_| CipherError::Decrypt)
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;

    use super::*;

    const KEY: [u8; 32] = hex!("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f");
    const PLAINTEXT: &[u8] = b"A cipher system must not be required to be secret";
    const AAD: &[u8] = b"The second principle of Auguste Kerckhoffs";

    #[test]
    fn aes_cbc_known_answer() {
        let iv = hex!("1af38c2dc2b96ffdd86694092341bc04");
        let t = Transformation::AesCbcPkcs7(AesVariant::Aes128);

        let ciphertext = encrypt(t, &KEY[16..], Some(&iv), &[], PLAINTEXT).unwrap();
        assert_eq!(
            ciphertext,
            hex!(
                "c80edfa32ddf39d5ef00c0b468834279a2e46a1b8049f792f76bfe54b903a9c9"
                "a94ac9b47ad2655c5f10f9aef71427e205aad557a26f38b1252f6d3dcb6e3613"
            )
        );
        assert_eq!(
            decrypt(t, &KEY[16..], Some(&iv), &[], &ciphertext).unwrap(),
            PLAINTEXT
        );
    }

    #[test]
    fn aes_gcm_known_answer() {
        let iv = hex!("000102030405060708090a0b");
        let t = Transformation::AesGcm(AesVariant::Aes128);

        let sealed = encrypt(t, &KEY[..16], Some(&iv), AAD, PLAINTEXT).unwrap();
        let (ciphertext, tag) = sealed.split_at(PLAINTEXT.len());
        assert_eq!(
            ciphertext,
            hex!(
                "d24cc4a7167392266ba118f942c61d28de53699273839282c643940d6621d319"
                "ecd6be93d4f4d8c322912994a5eaa5f7b8"
            )
        );
        assert_eq!(tag, hex!("62c93dd83463cc2955a2d4e45a2125f4"));

        assert_eq!(
            decrypt(t, &KEY[..16], Some(&iv), AAD, &sealed).unwrap(),
            PLAINTEXT
        );
        assert_eq!(
            decrypt(t, &KEY[..16], Some(&iv), b"other aad", &sealed),
            Err(CipherError::Decrypt)
        );
    }

    #[test]
    fn aes_key_wrap_known_answer() {
        let t = Transformation::AesKeyWrap(AesVariant::Aes128);
        let kek = [0u8; 16];

        let wrapped = encrypt(t, &kek, None, &[], &KEY).unwrap();
        assert_eq!(
            wrapped,
            hex!(
                "c4e240a9ad78e4d865836e44058d3c826e0d578441aa536011537bca1a6c01b0"
                "1a9478c4daa5d472"
            )
        );
        assert_eq!(decrypt(t, &kek, None, &[], &wrapped).unwrap(), KEY);
    }

    #[test]
    fn misuse_is_reported_opaquely() {
        let cbc = Transformation::AesCbcPkcs7(AesVariant::Aes256);
        let iv = [0u8; 16];

        // wrong key size
        assert_eq!(
            encrypt(cbc, &KEY[..16], Some(&iv), &[], b"x"),
            Err(CipherError::Encrypt)
        );
        // missing iv
        assert_eq!(encrypt(cbc, &KEY, None, &[], b"x"), Err(CipherError::Encrypt));
        // iv for key wrap
        assert_eq!(
            encrypt(
                Transformation::AesKeyWrap(AesVariant::Aes256),
                &KEY,
                Some(&iv),
                &[],
                &KEY[..16]
            ),
            Err(CipherError::Encrypt)
        );
        // wrong gcm nonce size
        assert_eq!(
            decrypt(
                Transformation::AesGcm(AesVariant::Aes256),
                &KEY,
                Some(&iv),
                &[],
                &[0; 32]
            ),
            Err(CipherError::Decrypt)
        );
    }

    #[test]
    fn bad_padding_and_truncation_look_the_same() {
        let t = Transformation::AesCbcPkcs7(AesVariant::Aes256);
        let iv = [7u8; 16];
        let ciphertext = encrypt(t, &KEY, Some(&iv), &[], b"some plaintext").unwrap();

        let mut bad_padding = iv;
        bad_padding[15] ^= 0xff;
        let padding_err = decrypt(t, &KEY, Some(&bad_padding), &[], &ciphertext).unwrap_err();
        let length_err = decrypt(t, &KEY, Some(&iv), &[], &ciphertext[1..]).unwrap_err();

        assert_eq!(padding_err, length_err);
        assert_eq!(padding_err.to_string(), length_err.to_string());
    }
}
