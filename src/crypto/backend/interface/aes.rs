//! The interfaces for the AES modes of operation.

use crate::crypto::{cipher::AesVariant, Result};

/// Stateless AES operations. The key is passed on every call and its length
/// must match the given [`AesVariant`].
pub(crate) trait Aes {
    /// Encrypts `plaintext` in CBC mode with PKCS#7 padding.
    fn cbc_encrypt(variant: AesVariant, key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>>;

    /// Decrypts `ciphertext` in CBC mode and removes the PKCS#7 padding.
    fn cbc_decrypt(
        variant: AesVariant,
        key: &[u8],
        iv: &[u8],
        ciphertext: &[u8],
    ) -> Result<Vec<u8>>;

    /// Encrypts `plaintext` in GCM mode and returns the ciphertext with the
    /// 128 bit tag appended.
    fn gcm_encrypt(
        variant: AesVariant,
        key: &[u8],
        iv: &[u8],
        aad: &[u8],
        plaintext: &[u8],
    ) -> Result<Vec<u8>>;

    /// Verifies and decrypts the output of [`Aes::gcm_encrypt`].
    fn gcm_decrypt(
        variant: AesVariant,
        key: &[u8],
        iv: &[u8],
        aad: &[u8],
        ciphertext_and_tag: &[u8],
    ) -> Result<Vec<u8>>;

    /// AES Key Wrap as defined in RFC 3394.
    fn key_wrap(variant: AesVariant, kek: &[u8], key: &[u8]) -> Result<Vec<u8>>;

    /// Inverse of [`Aes::key_wrap`], including the integrity check.
    fn key_unwrap(variant: AesVariant, kek: &[u8], wrapped: &[u8]) -> Result<Vec<u8>>;
}
