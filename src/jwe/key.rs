use crate::{
    crypto::{
        rsa::{PrivateKey, PublicKey},
        symmetric::SymmetricKey,
    },
    jwa::JsonWebEncryptionAlgorithm,
};

/// The key a JWE is encrypted to.
///
/// Which variant is required depends on the family of the key management
/// algorithm: `RSA1_5` takes the recipient's RSA public key, the AES key wrap
/// algorithms and `dir` take a shared symmetric key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncryptionKey {
    /// The recipient's RSA public key.
    Rsa(PublicKey),
    /// A key shared with the recipient.
    Symmetric(SymmetricKey),
}

impl From<PublicKey> for EncryptionKey {
    fn from(key: PublicKey) -> Self {
        Self::Rsa(key)
    }
}

impl From<&PrivateKey> for EncryptionKey {
    fn from(key: &PrivateKey) -> Self {
        Self::Rsa(key.to_public_key())
    }
}

impl From<SymmetricKey> for EncryptionKey {
    fn from(key: SymmetricKey) -> Self {
        Self::Symmetric(key)
    }
}

/// The key a JWE is decrypted with.
///
/// The `alg` of a token is chosen by the sender, and the header is not
/// authenticated before the key is used. A symmetric key therefore opens
/// both `dir` and AES key wrap tokens unless it is
/// [pinned](Self::pinned) to one algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecryptionKey {
    /// The recipient's RSA private key.
    Rsa(PrivateKey),
    /// The key shared with the sender.
    Symmetric(SymmetricKey),
    /// A key that only opens tokens using the given key management
    /// algorithm. Decrypting any other token fails.
    Pinned(JsonWebEncryptionAlgorithm, Box<DecryptionKey>),
}

impl DecryptionKey {
    /// Restricts this key to tokens using `alg`.
    pub fn pinned(self, alg: JsonWebEncryptionAlgorithm) -> Self {
        Self::Pinned(alg, Box::new(self))
    }

    /// The key to use for a token with the given `alg`, with every pin
    /// resolved. `None` if a pin does not match.
    pub(crate) fn for_algorithm(&self, alg: JsonWebEncryptionAlgorithm) -> Option<&Self> {
        match self {
            Self::Pinned(pinned, inner) if *pinned == alg => inner.for_algorithm(alg),
            Self::Pinned(..) => None,
            key => Some(key),
        }
    }
}

impl From<PrivateKey> for DecryptionKey {
    fn from(key: PrivateKey) -> Self {
        Self::Rsa(key)
    }
}

impl From<SymmetricKey> for DecryptionKey {
    fn from(key: SymmetricKey) -> Self {
        Self::Symmetric(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pins_are_resolved() {
        let key = DecryptionKey::from(SymmetricKey::new([1u8; 16]));
        let pinned = key.clone().pinned(JsonWebEncryptionAlgorithm::A128KW);

        assert_eq!(key.for_algorithm(JsonWebEncryptionAlgorithm::DIR), Some(&key));
        assert_eq!(pinned.for_algorithm(JsonWebEncryptionAlgorithm::A128KW), Some(&key));
        assert_eq!(pinned.for_algorithm(JsonWebEncryptionAlgorithm::DIR), None);

        let twice = pinned.pinned(JsonWebEncryptionAlgorithm::DIR);
        assert_eq!(twice.for_algorithm(JsonWebEncryptionAlgorithm::DIR), None);
        assert_eq!(twice.for_algorithm(JsonWebEncryptionAlgorithm::A128KW), None);
    }
}
