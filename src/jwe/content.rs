//! The authenticated encryption of the payload.
//!
//! AES GCM is authenticated on its own. AES CBC is composed with HMAC as
//! described in [section 5.2 of RFC 7518]: the first half of the content
//! encryption key is the MAC key, the second half the encryption key, and the
//! authentication tag is the first half of
//! `HMAC(AAD || IV || ciphertext || AL)` where `AL` is the bit length of the
//! AAD as a 64 bit big endian integer.
//!
//! [section 5.2 of RFC 7518]: <https://datatracker.ietf.org/doc/html/rfc7518#section-5.2>

use rand_core::CryptoRngCore;
use subtle::{Choice, ConstantTimeEq as _};
use zeroize::Zeroizing;

use super::EncryptionError;
use crate::{
    crypto::{self, cipher, hmac},
    jwa::{AesCbcHs, JsonWebContentEncryptionAlgorithm},
};

const GCM_TAG_SIZE: usize = 16;

/// The output of a content encryption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EncryptedPayload {
    pub(crate) ciphertext: Vec<u8>,
    pub(crate) tag: Vec<u8>,
}

/// A fresh initialization vector of the size `enc` requires.
pub(crate) fn generate_iv(
    enc: JsonWebContentEncryptionAlgorithm,
    rng: &mut dyn CryptoRngCore,
) -> Result<Vec<u8>, EncryptionError> {
    let mut iv = vec![0u8; enc.iv_size()];
    rng.try_fill_bytes(&mut iv)?;
    Ok(iv)
}

pub(crate) fn encrypt(
    enc: JsonWebContentEncryptionAlgorithm,
    cek: &[u8],
    iv: &[u8],
    aad: &[u8],
    plaintext: &[u8],
) -> Result<EncryptedPayload, EncryptionError> {
    match enc {
        JsonWebContentEncryptionAlgorithm::AesCbcHs(cbc) => {
            let (mac_key, enc_key) = split_key(cbc, cek)?;

            let ciphertext = cipher::encrypt(enc.transformation(), enc_key, Some(iv), &[], plaintext)?;
            let tag = authentication_tag(cbc, mac_key, aad, iv, &ciphertext)?;

            Ok(EncryptedPayload { ciphertext, tag })
        }
        JsonWebContentEncryptionAlgorithm::AesGcm(_) => {
            let mut ciphertext = cipher::encrypt(enc.transformation(), cek, Some(iv), aad, plaintext)?;
            let at = ciphertext
                .len()
                .checked_sub(GCM_TAG_SIZE)
                .ok_or(cipher::CipherError::Encrypt)?;
            let tag = ciphertext.split_off(at);

            Ok(EncryptedPayload { ciphertext, tag })
        }
    }
}

/// Decrypts and authenticates the payload.
///
/// The returned [`Choice`] is truthy only if the payload is authentic. For
/// CBC the block cipher decryption runs even if the tag does not match, so a
/// bad tag and bad padding take the same path. The plaintext must be thrown
/// away unless the choice is truthy.
pub(crate) fn decrypt(
    enc: JsonWebContentEncryptionAlgorithm,
    cek: &[u8],
    iv: &[u8],
    aad: &[u8],
    ciphertext: &[u8],
    tag: &[u8],
) -> (Zeroizing<Vec<u8>>, Choice) {
    match enc {
        JsonWebContentEncryptionAlgorithm::AesCbcHs(cbc) => {
            // the CEK always has the right size here, see `cek::unwrap`
            let offset = cbc.key_offset().min(cek.len());
            let (mac_key, enc_key) = cek.split_at(offset);

            let tag_ok = match authentication_tag(cbc, mac_key, aad, iv, ciphertext) {
                Ok(expected) => expected.as_slice().ct_eq(tag),
                Err(_) => Choice::from(0),
            };

            let (plaintext, padding_ok) =
                match cipher::decrypt(enc.transformation(), enc_key, Some(iv), &[], ciphertext) {
                    Ok(plaintext) => (plaintext, Choice::from(1)),
                    Err(_) => (Vec::new(), Choice::from(0)),
                };

            (Zeroizing::new(plaintext), tag_ok & padding_ok)
        }
        JsonWebContentEncryptionAlgorithm::AesGcm(_) => {
            let tag_len_ok = tag.len().ct_eq(&GCM_TAG_SIZE);

            let mut sealed = Vec::with_capacity(ciphertext.len() + tag.len());
            sealed.extend_from_slice(ciphertext);
            sealed.extend_from_slice(tag);

            match cipher::decrypt(enc.transformation(), cek, Some(iv), aad, &sealed) {
                Ok(plaintext) => (Zeroizing::new(plaintext), tag_len_ok),
                Err(_) => (Zeroizing::new(Vec::new()), Choice::from(0)),
            }
        }
    }
}

fn split_key(cbc: AesCbcHs, cek: &[u8]) -> Result<(&[u8], &[u8]), EncryptionError> {
    let offset = cbc.key_offset();
    if cek.len() != offset * 2 {
        return Err(EncryptionError::InvalidKeyLength {
            expected: offset * 2,
            actual: cek.len(),
        });
    }
    Ok(cek.split_at(offset))
}

fn authentication_tag(
    cbc: AesCbcHs,
    mac_key: &[u8],
    aad: &[u8],
    iv: &[u8],
    ciphertext: &[u8],
) -> crypto::Result<Vec<u8>> {
    let al = (aad.len() as u64).wrapping_mul(8).to_be_bytes();

    let mut key = hmac::Key::new(cbc.mac_algorithm(), mac_key)?;
    let mac = key.mac(&[aad, iv, ciphertext, &al])?;

    Ok(mac.as_ref()[..cbc.key_offset()].to_vec())
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;
    use rand::{rngs::StdRng, RngCore as _, SeedableRng as _};

    use super::*;

    const KEY: [u8; 32] = hex!("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f");
    const IV: [u8; 16] = hex!("1af38c2dc2b96ffdd86694092341bc04");
    const PLAINTEXT: &[u8] = b"A cipher system must not be required to be secret";
    const AAD: &[u8] = b"The second principle of Auguste Kerckhoffs";

    const A128CBC_HS256: JsonWebContentEncryptionAlgorithm =
        JsonWebContentEncryptionAlgorithm::A128CBC_HS256;

    #[test]
    fn aes_cbc_hmac_known_answer() {
        let payload = encrypt(A128CBC_HS256, &KEY, &IV, AAD, PLAINTEXT).unwrap();

        assert_eq!(
            payload.ciphertext,
            hex!(
                "c80edfa32ddf39d5ef00c0b468834279a2e46a1b8049f792f76bfe54b903a9c9"
                "a94ac9b47ad2655c5f10f9aef71427e205aad557a26f38b1252f6d3dcb6e3613"
            )
        );
        assert_eq!(payload.tag, hex!("38a02da2d7228e1a66df552058b27699"));

        let (plaintext, ok) = decrypt(A128CBC_HS256, &KEY, &IV, AAD, &payload.ciphertext, &payload.tag);
        assert!(bool::from(ok));
        assert_eq!(&plaintext[..], PLAINTEXT);
    }

    #[test]
    fn tag_size_is_the_key_offset() {
        let mut rng = StdRng::seed_from_u64(1);
        for enc in JsonWebContentEncryptionAlgorithm::ALL {
            let mut cek = vec![0u8; enc.key_size()];
            rng.try_fill_bytes(&mut cek).unwrap();
            let iv = generate_iv(enc, &mut rng).unwrap();

            let payload = encrypt(enc, &cek, &iv, AAD, PLAINTEXT).unwrap();
            assert_eq!(payload.tag.len(), enc.tag_size());

            let (plaintext, ok) = decrypt(enc, &cek, &iv, AAD, &payload.ciphertext, &payload.tag);
            assert!(bool::from(ok), "{enc}");
            assert_eq!(&plaintext[..], PLAINTEXT);
        }
    }

    #[test]
    fn aad_is_authenticated() {
        for enc in [A128CBC_HS256, JsonWebContentEncryptionAlgorithm::A128GCM] {
            let cek = &KEY[..enc.key_size()];
            let iv = &IV[..enc.iv_size()];
            let payload = encrypt(enc, cek, iv, AAD, PLAINTEXT).unwrap();

            let (_, ok) = decrypt(enc, cek, iv, b"other", &payload.ciphertext, &payload.tag);
            assert!(!bool::from(ok), "{enc}");
        }
    }

    #[test]
    fn truncated_tag_is_rejected() {
        let payload = encrypt(A128CBC_HS256, &KEY, &IV, AAD, PLAINTEXT).unwrap();
        let (_, ok) = decrypt(A128CBC_HS256, &KEY, &IV, AAD, &payload.ciphertext, &payload.tag[..8]);
        assert!(!bool::from(ok));

        let gcm = JsonWebContentEncryptionAlgorithm::A128GCM;
        let payload = encrypt(gcm, &KEY[..16], &IV[..12], AAD, PLAINTEXT).unwrap();
        // moving tag bytes into the ciphertext keeps the concatenation intact
        let (ciphertext, tag) = {
            let mut ciphertext = payload.ciphertext.clone();
            ciphertext.extend_from_slice(&payload.tag[..4]);
            (ciphertext, payload.tag[4..].to_vec())
        };
        let (_, ok) = decrypt(gcm, &KEY[..16], &IV[..12], AAD, &ciphertext, &tag);
        assert!(!bool::from(ok));
    }

    #[test]
    fn wrong_cek_size_on_encryption() {
        assert!(matches!(
            encrypt(A128CBC_HS256, &KEY[..16], &IV, AAD, PLAINTEXT),
            Err(EncryptionError::InvalidKeyLength {
                expected: 32,
                actual: 16
            })
        ));
    }
}
