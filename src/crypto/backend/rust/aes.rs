use aes_gcm::{
    aead::{consts::U12, generic_array::GenericArray, Aead, KeyInit, Payload},
    AesGcm,
};
use cbc::cipher::{
    block_padding::Pkcs7, BlockCipher, BlockDecryptMut, BlockEncryptMut, KeyIvInit as _,
};

use super::BackendError;
use crate::crypto::{backend::interface, cipher::AesVariant, Result};

type Aes128Gcm = AesGcm<::aes::Aes128, U12>;
type Aes192Gcm = AesGcm<::aes::Aes192, U12>;
type Aes256Gcm = AesGcm<::aes::Aes256, U12>;

/// Length of the nonce for every AES GCM variant.
const GCM_NONCE_LEN: usize = 12;

/// The RustCrypto AES modes of operation.
#[derive(Debug)]
pub enum Aes {}

fn cbc_encrypt<C>(key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>>
where
    C: BlockEncryptMut + BlockCipher + KeyInit,
{
    let cipher = cbc::Encryptor::<C>::new_from_slices(key, iv)?;
    Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

fn cbc_decrypt<C>(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>>
where
    C: BlockDecryptMut + BlockCipher + KeyInit,
{
    let cipher = cbc::Decryptor::<C>::new_from_slices(key, iv)?;
    Ok(cipher.decrypt_padded_vec_mut::<Pkcs7>(ciphertext)?)
}

fn gcm_encrypt<C>(key: &[u8], iv: &[u8], aad: &[u8], plaintext: &[u8]) -> Result<Vec<u8>>
where
    C: Aead<NonceSize = U12> + KeyInit,
{
    // `GenericArray::from_slice` panics on a length mismatch
    if iv.len() != GCM_NONCE_LEN {
        return Err(BackendError::InvalidLength.into());
    }

    let cipher = C::new_from_slice(key)?;
    let payload = Payload {
        msg: plaintext,
        aad,
    };
    Ok(cipher.encrypt(GenericArray::from_slice(iv), payload)?)
}

fn gcm_decrypt<C>(key: &[u8], iv: &[u8], aad: &[u8], ciphertext_and_tag: &[u8]) -> Result<Vec<u8>>
where
    C: Aead<NonceSize = U12> + KeyInit,
{
    if iv.len() != GCM_NONCE_LEN {
        return Err(BackendError::InvalidLength.into());
    }

    let cipher = C::new_from_slice(key)?;
    let payload = Payload {
        msg: ciphertext_and_tag,
        aad,
    };
    Ok(cipher.decrypt(GenericArray::from_slice(iv), payload)?)
}

impl interface::aes::Aes for Aes {
    fn cbc_encrypt(variant: AesVariant, key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
        match variant {
            AesVariant::Aes128 => cbc_encrypt::<::aes::Aes128>(key, iv, plaintext),
            AesVariant::Aes192 => cbc_encrypt::<::aes::Aes192>(key, iv, plaintext),
            AesVariant::Aes256 => cbc_encrypt::<::aes::Aes256>(key, iv, plaintext),
        }
    }

    fn cbc_decrypt(
        variant: AesVariant,
        key: &[u8],
        iv: &[u8],
        ciphertext: &[u8],
    ) -> Result<Vec<u8>> {
        match variant {
            AesVariant::Aes128 => cbc_decrypt::<::aes::Aes128>(key, iv, ciphertext),
            AesVariant::Aes192 => cbc_decrypt::<::aes::Aes192>(key, iv, ciphertext),
            AesVariant::Aes256 => cbc_decrypt::<::aes::Aes256>(key, iv, ciphertext),
        }
    }

    fn gcm_encrypt(
        variant: AesVariant,
        key: &[u8],
        iv: &[u8],
        aad: &[u8],
        plaintext: &[u8],
    ) -> Result<Vec<u8>> {
        match variant {
            AesVariant::Aes128 => gcm_encrypt::<Aes128Gcm>(key, iv, aad, plaintext),
            AesVariant::Aes192 => gcm_encrypt::<Aes192Gcm>(key, iv, aad, plaintext),
            AesVariant::Aes256 => gcm_encrypt::<Aes256Gcm>(key, iv, aad, plaintext),
        }
    }

    fn gcm_decrypt(
        variant: AesVariant,
        key: &[u8],
        iv: &[u8],
        aad: &[u8],
        ciphertext_and_tag: &[u8],
    ) -> Result<Vec<u8>> {
        match variant {
            AesVariant::Aes128 => gcm_decrypt::<Aes128Gcm>(key, iv, aad, ciphertext_and_tag),
            AesVariant::Aes192 => gcm_decrypt::<Aes192Gcm>(key, iv, aad, ciphertext_and_tag),
            AesVariant::Aes256 => gcm_decrypt::<Aes256Gcm>(key, iv, aad, ciphertext_and_tag),
        }
    }

    fn key_wrap(variant: AesVariant, kek: &[u8], key: &[u8]) -> Result<Vec<u8>> {
        let wrapped = match variant {
            AesVariant::Aes128 => aes_kw::KekAes128::try_from(kek)?.wrap_vec(key),
            AesVariant::Aes192 => aes_kw::KekAes192::try_from(kek)?.wrap_vec(key),
            AesVariant::Aes256 => aes_kw::KekAes256::try_from(kek)?.wrap_vec(key),
        };
        Ok(wrapped?)
    }

    fn key_unwrap(variant: AesVariant, kek: &[u8], wrapped: &[u8]) -> Result<Vec<u8>> {
        let key = match variant {
            AesVariant::Aes128 => aes_kw::KekAes128::try_from(kek)?.unwrap_vec(wrapped),
            AesVariant::Aes192 => aes_kw::KekAes192::try_from(kek)?.unwrap_vec(wrapped),
            AesVariant::Aes256 => aes_kw::KekAes256::try_from(kek)?.unwrap_vec(wrapped),
        };
        Ok(key?)
    }
}
