//! The interfaces for RSA.

use rand_core::CryptoRngCore;
use secrecy::SecretSlice;

use crate::crypto::Result;

/// Part of the [`PrivateKeyComponents`], which includes additional information
/// about the prime numbers.
pub(crate) struct PrivateKeyPrimeComponents {
    pub p: SecretSlice<u8>,
    pub q: SecretSlice<u8>,
    pub dp: SecretSlice<u8>,
    pub dq: SecretSlice<u8>,
    pub qi: SecretSlice<u8>,
}

/// The private components of a private key.
///
/// All fields in this struct are big integers represented in big endian
/// bytes.
pub(crate) struct PrivateKeyComponents {
    pub d: SecretSlice<u8>,
    pub prime: PrivateKeyPrimeComponents,
}

/// The components of a public key.
///
/// All fields in this struct are of type `Vec<u8>` and are
/// big integers represented in big endian bytes.
pub(crate) struct PublicKeyComponents {
    pub n: Vec<u8>,
    pub e: Vec<u8>,
}

/// The common operations for an RSA private key.
pub(crate) trait PrivateKey: Sized {
    /// The public key type.
    type PublicKey: PublicKey;

    /// Generates a new key with a modulus of `bits` bits.
    fn generate(bits: usize) -> Result<Self>;

    /// Creates a new RSA private key from the given components.
    ///
    /// Only `p` and `q` of the prime components are required to be correct,
    /// the CRT values are recomputed.
    fn from_components(pri: PrivateKeyComponents, pu: PublicKeyComponents) -> Result<Self>;

    /// Creates a new public key from this private key.
    fn to_public_key(&self) -> Self::PublicKey;

    /// Returns the private components of this key.
    fn private_components(&self) -> Result<PrivateKeyComponents>;

    /// Returns the public components of this key.
    fn public_components(&self) -> PublicKeyComponents;

    /// Decrypts a message that was encrypted using RSAES-PKCS1-v1_5.
    ///
    /// Implementations must use blinding and must check the padding in
    /// constant time.
    fn decrypt_pkcs1_v1_5(&self, ciphertext: &[u8]) -> Result<Vec<u8>>;
}

/// The common operations for an RSA public key.
pub(crate) trait PublicKey: Sized {
    /// Creates a new RSA public key from the given public key components.
    fn from_components(components: PublicKeyComponents) -> Result<Self>;

    /// Returns the components of this key.
    fn components(&self) -> PublicKeyComponents;

    /// The size of the modulus in bits.
    fn bits(&self) -> usize;

    /// Encrypts `msg` using RSAES-PKCS1-v1_5.
    fn encrypt_pkcs1_v1_5(&self, rng: &mut dyn CryptoRngCore, msg: &[u8]) -> Result<Vec<u8>>;
}
