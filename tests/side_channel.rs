//! Decryption must not reveal why it failed.
//!
//! Every test corrupts a valid token in a systematic way, for example the
//! classic padding oracle sweep over the last byte of the initialization
//! vector, and checks that all attempts fail with the very same error.

mod common;

use std::collections::BTreeSet;

use common::{keys_for, rng, tamper, TestResult};
use jose_jwe::{
    jwa::{EncryptionMethod, KeyManagementAlgorithm},
    jwe::{DecryptionError, DecryptionKey, Encrypted},
    ClaimsSet, JsonWebEncryption,
};

const IV: usize = 2;
const ENCRYPTED_KEY: usize = 1;
const TAG: usize = 4;

#[derive(Debug, Default)]
struct Observed {
    attempts: usize,
    messages: BTreeSet<String>,
    debug: BTreeSet<String>,
}

impl Observed {
    fn record(&mut self, result: Result<Vec<u8>, DecryptionError>) {
        self.attempts += 1;
        let err = result.expect_err("corrupted token must not decrypt");
        self.messages.insert(err.to_string());
        self.debug.insert(format!("{err:?}"));
    }

    fn assert_indistinguishable(&self, expected_attempts: usize) {
        assert_eq!(self.attempts, expected_attempts);
        assert_eq!(self.messages.len(), 1, "distinct error messages: {:?}", self.messages);
        assert_eq!(self.debug.len(), 1, "distinct debug output: {:?}", self.debug);
    }
}

fn sealed(
    alg: KeyManagementAlgorithm,
    enc: EncryptionMethod,
) -> TestResult<(Encrypted, DecryptionKey)> {
    let (encryption_key, decryption_key) = keys_for(alg, enc)?;
    // `{}` fits into a single block
    let token = JsonWebEncryption::new(alg, enc, ClaimsSet::new())
        .encrypt_with_rng(&encryption_key, &mut rng())?;
    Ok((token, decryption_key))
}

/// Walks the last byte of the IV through all 256 values. With CBC this makes
/// the padding valid for some attempts and invalid for others, while the tag
/// never matches.
fn iv_sweep(alg: KeyManagementAlgorithm, enc: EncryptionMethod) -> TestResult<Observed> {
    let (token, key) = sealed(alg, enc)?;
    let mut observed = Observed::default();

    for value in 0..=255u8 {
        let tampered = tamper(&token, IV, |iv| {
            // keeps every attempt distinct from the original token
            iv[0] ^= 0x80;
            if let Some(last) = iv.last_mut() {
                *last = value;
            }
        });
        observed.record(tampered.decrypt_raw(&key));
    }

    Ok(observed)
}

#[test]
fn padding_oracle_sweep_over_cbc() -> TestResult {
    for alg in [
        KeyManagementAlgorithm::RSA1_5,
        KeyManagementAlgorithm::A128KW,
        KeyManagementAlgorithm::DIR,
    ] {
        for enc in [
            EncryptionMethod::A128CBC_HS256,
            EncryptionMethod::A192CBC_HS384,
            EncryptionMethod::A256CBC_HS512,
        ] {
            iv_sweep(alg, enc)?.assert_indistinguishable(256);
        }
    }

    Ok(())
}

#[test]
fn iv_sweep_over_gcm() -> TestResult {
    for alg in [
        KeyManagementAlgorithm::RSA1_5,
        KeyManagementAlgorithm::A128KW,
        KeyManagementAlgorithm::DIR,
    ] {
        for enc in [
            EncryptionMethod::A128GCM,
            EncryptionMethod::A192GCM,
            EncryptionMethod::A256GCM,
        ] {
            iv_sweep(alg, enc)?.assert_indistinguishable(256);
        }
    }

    Ok(())
}

#[test]
fn encrypted_key_sweep() -> TestResult {
    for alg in [
        KeyManagementAlgorithm::RSA1_5,
        KeyManagementAlgorithm::A128KW,
        KeyManagementAlgorithm::A256KW,
    ] {
        for enc in [EncryptionMethod::A128CBC_HS256, EncryptionMethod::A256GCM] {
            let (token, key) = sealed(alg, enc)?;
            let mut observed = Observed::default();

            for value in 0..=255u8 {
                let tampered = tamper(&token, ENCRYPTED_KEY, |ek| {
                    let mid = ek.len() / 2;
                    ek[mid] ^= 0x55;
                    if let Some(last) = ek.last_mut() {
                        *last ^= value;
                    }
                });
                observed.record(tampered.decrypt_raw(&key));
            }

            observed.assert_indistinguishable(256);
        }
    }

    Ok(())
}

#[test]
fn gcm_tag_length_sweep() -> TestResult {
    for enc in [
        EncryptionMethod::A128GCM,
        EncryptionMethod::A192GCM,
        EncryptionMethod::A256GCM,
    ] {
        let (token, key) = sealed(KeyManagementAlgorithm::DIR, enc)?;
        let mut observed = Observed::default();

        for len in 0..=32 {
            let tampered = tamper(&token, TAG, |tag| {
                let original = tag.clone();
                *tag = original.iter().cycle().copied().take(len).collect();
                if len == original.len() {
                    tag[0] ^= 1;
                }
            });
            observed.record(tampered.decrypt_raw(&key));
        }

        observed.assert_indistinguishable(33);
    }

    Ok(())
}

#[test]
fn all_failures_look_alike() -> TestResult {
    let mut observed = Observed::default();

    for alg in KeyManagementAlgorithm::ALL {
        for enc in EncryptionMethod::ALL {
            let (token, key) = sealed(alg, enc)?;

            for part in 1..5 {
                let tampered = tamper(&token, part, |bytes| bytes.push(0xa5));
                observed.record(tampered.decrypt_raw(&key));
            }
        }
    }

    observed.assert_indistinguishable(5 * 6 * 4);
    Ok(())
}
