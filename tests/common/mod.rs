//! Common test helpers.

#![allow(dead_code)]

use std::fs;

use jose_jwe::{
    crypto::{
        rsa::{PrivateKey, PublicKey},
        symmetric::SymmetricKey,
    },
    jwa::{AlgorithmFamily, EncryptionMethod, KeyManagementAlgorithm},
    jwe::{DecryptionKey, Encrypted, EncryptionKey},
    Base64UrlString, ClaimsSet,
};
use rand::{rngs::StdRng, SeedableRng as _};
use serde::de::DeserializeOwned;

pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

fn read_vector(path: &str) -> TestResult<String> {
    let content = fs::read_to_string(format!(
        "{}/tests/vectors/{path}",
        env!("CARGO_MANIFEST_DIR"),
    ))?;
    Ok(content)
}

/// Reads a key file from the `tests/vectors/jwk` directory.
pub fn read_jwk<T: DeserializeOwned>(name: &str) -> TestResult<T> {
    let json = read_vector(&format!("jwk/{name}.json"))?;
    let key: T = serde_json::from_str(&json)?;

    Ok(key)
}

/// Reads a compact token from the `tests/vectors/jwe` directory.
pub fn read_token(name: &str) -> TestResult<Encrypted> {
    let token = read_vector(&format!("jwe/{name}.txt"))?;
    Ok(token.trim().parse()?)
}

/// The primary RSA key pair of the test vectors.
pub fn rsa_keys() -> TestResult<(EncryptionKey, DecryptionKey)> {
    let private: PrivateKey = read_jwk("rsa")?;
    let public: PublicKey = read_jwk("rsa-public")?;
    Ok((public.into(), private.into()))
}

/// A second RSA key pair unrelated to [`rsa_keys`].
pub fn other_rsa_keys() -> TestResult<(EncryptionKey, DecryptionKey)> {
    let private: PrivateKey = read_jwk("rsa-other")?;
    Ok(((&private).into(), private.into()))
}

/// A deterministic RNG, so failures can be reproduced.
pub fn rng() -> StdRng {
    StdRng::seed_from_u64(0x6a77_65)
}

/// The claims used by most tests.
pub fn test_claims() -> ClaimsSet {
    let mut claims = ClaimsSet::new();
    claims.set_claim("test1", "This is a test claim");
    claims
}

/// A matching key pair for the given algorithms.
pub fn keys_for(
    alg: KeyManagementAlgorithm,
    enc: EncryptionMethod,
) -> TestResult<(EncryptionKey, DecryptionKey)> {
    let shared = |len: usize| -> TestResult<(EncryptionKey, DecryptionKey)> {
        let key = SymmetricKey::new((0..len).map(|i| i as u8).collect::<Vec<_>>());
        Ok((key.clone().into(), key.into()))
    };

    match alg.family() {
        AlgorithmFamily::Rsa => rsa_keys(),
        AlgorithmFamily::AesKeyWrap => shared(alg.key_size().unwrap_or_default()),
        AlgorithmFamily::Direct => shared(enc.key_size()),
    }
}

/// Rebuilds `token` with the part at `idx` changed by `f`.
pub fn tamper(token: &Encrypted, idx: usize, f: impl FnOnce(&mut Vec<u8>)) -> Encrypted {
    let compact = token.encode();
    let mut parts = (0..compact.len())
        .filter_map(|i| compact.part(i))
        .map(ToString::to_string)
        .collect::<Vec<_>>();

    let mut bytes = compact.part(idx).expect("part index in range").decode();
    f(&mut bytes);
    parts[idx] = Base64UrlString::encode(bytes).to_string();

    parts.join(".").parse().expect("tampered token still parses")
}
