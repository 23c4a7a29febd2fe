//! Implementation of JSON Web Encryption (JWE) as defined in [RFC 7516]
//!
//! Encryption goes from a [`JsonWebEncryption`] to an [`Encrypted`] token,
//! decryption parses an [`Encrypted`] token and opens it with a
//! [`DecryptionKey`].
//!
//! [RFC 7516]: <https://www.rfc-editor.org/rfc/rfc7516.html>

mod cek;
mod compression;
mod content;
mod error;
mod key;

use std::{fmt, str::FromStr};

use rand_core::{CryptoRngCore, OsRng};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::{debug, trace};
use zeroize::Zeroizing;

#[doc(inline)]
pub use self::{
    error::{DecryptionError, EncryptionError, MalformedJweError},
    key::{DecryptionKey, EncryptionKey},
};
use crate::{
    format::Compact,
    header::JweHeader,
    jwa::{CompressionAlgorithm, JsonWebContentEncryptionAlgorithm, JsonWebEncryptionAlgorithm},
    Base64UrlString, ClaimsSet,
};

/// A JWE before encryption or after successful decryption: a header and the
/// payload in plain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonWebEncryption<T = ClaimsSet> {
    header: JweHeader,
    payload: T,
}

impl JsonWebEncryption {
    /// A builder for a JWE with more header parameters.
    ///
    /// The payload type is chosen when calling
    /// [`build`](JsonWebEncryptionBuilder::build).
    pub fn builder(
        alg: JsonWebEncryptionAlgorithm,
        enc: JsonWebContentEncryptionAlgorithm,
    ) -> JsonWebEncryptionBuilder {
        JsonWebEncryptionBuilder::new(alg, enc)
    }
}

impl<T> JsonWebEncryption<T> {
    /// Creates a JWE with a minimal header.
    pub fn new(
        alg: JsonWebEncryptionAlgorithm,
        enc: JsonWebContentEncryptionAlgorithm,
        payload: T,
    ) -> Self {
        Self::with_header(JweHeader::new(alg, enc), payload)
    }

    /// Creates a JWE from a complete header.
    pub const fn with_header(header: JweHeader, payload: T) -> Self {
        Self { header, payload }
    }

    /// The header of this JWE.
    pub const fn header(&self) -> &JweHeader {
        &self.header
    }

    /// The payload of this JWE.
    pub const fn payload(&self) -> &T {
        &self.payload
    }

    /// Consumes the JWE and returns its payload.
    pub fn into_payload(self) -> T {
        self.payload
    }
}

impl<T: Serialize> JsonWebEncryption<T> {
    /// Encrypts the payload as JSON to the given key, using the operating
    /// system's random number generator.
    ///
    /// # Errors
    ///
    /// See [`encrypt_with_rng`](Self::encrypt_with_rng).
    pub fn encrypt(&self, key: &EncryptionKey) -> Result<Encrypted, EncryptionError> {
        self.encrypt_with_rng(key, &mut OsRng)
    }

    /// Encrypts the payload as JSON to the given key.
    ///
    /// The content encryption key and the initialization vector are taken
    /// from `rng`.
    ///
    /// # Errors
    ///
    /// Returns an error if the key does not fit the algorithms of the header,
    /// if the header contains parameters that can not be sent, if the payload
    /// can not be serialized, or if a cryptographic operation failed.
    pub fn encrypt_with_rng(
        &self,
        key: &EncryptionKey,
        rng: &mut dyn CryptoRngCore,
    ) -> Result<Encrypted, EncryptionError> {
        let plaintext = Zeroizing::new(serde_json::to_vec(&self.payload)?);
        Encrypted::seal(self.header.clone(), &plaintext, key, rng)
    }
}

/// Collects the header parameters of a [`JsonWebEncryption`].
#[derive(Debug, Clone)]
pub struct JsonWebEncryptionBuilder {
    header: JweHeader,
}

impl JsonWebEncryptionBuilder {
    /// Starts with the two required header parameters.
    pub fn new(alg: JsonWebEncryptionAlgorithm, enc: JsonWebContentEncryptionAlgorithm) -> Self {
        Self {
            header: JweHeader::new(alg, enc),
        }
    }

    /// Compresses the payload before encryption.
    pub fn compression(mut self, zip: CompressionAlgorithm) -> Self {
        self.header.compression_algorithm = Some(zip);
        self
    }

    /// Sets the `kid` header parameter.
    pub fn key_id(mut self, kid: impl Into<String>) -> Self {
        self.header.key_id = Some(kid.into());
        self
    }

    /// Sets the `typ` header parameter.
    pub fn media_type(mut self, typ: impl Into<String>) -> Self {
        self.header.media_type = Some(typ.into());
        self
    }

    /// Sets the `cty` header parameter.
    pub fn content_type(mut self, cty: impl Into<String>) -> Self {
        self.header.content_type = Some(cty.into());
        self
    }

    /// Adds a header parameter that has no dedicated setter.
    ///
    /// Names of parameters that do have one, like `alg` or `kid`, are
    /// rejected when the JWE is encrypted.
    pub fn additional_parameter(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.header.additional.insert(name.into(), value.into());
        self
    }

    /// The header built so far.
    pub fn into_header(self) -> JweHeader {
        self.header
    }

    /// Finishes the JWE with the given payload.
    pub fn build<T>(self, payload: T) -> JsonWebEncryption<T> {
        JsonWebEncryption::with_header(self.header, payload)
    }
}

/// A compact JWE whose payload is still encrypted.
///
/// Until [`decrypt`](Self::decrypt) succeeded, the [`header`](Self::header)
/// is untrusted input. It is only meant to select the key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encrypted {
    header: JweHeader,
    encoded_header: Base64UrlString,
    encrypted_key: Vec<u8>,
    iv: Vec<u8>,
    ciphertext: Vec<u8>,
    tag: Vec<u8>,
}

impl Encrypted {
    /// Encrypts `plaintext` as is under the given header.
    ///
    /// # Errors
    ///
    /// See [`JsonWebEncryption::encrypt_with_rng`].
    pub fn seal(
        header: JweHeader,
        plaintext: &[u8],
        key: &EncryptionKey,
        rng: &mut dyn CryptoRngCore,
    ) -> Result<Self, EncryptionError> {
        if let Some(name) = header.reserved_additional_parameter() {
            return Err(EncryptionError::ReservedHeaderParameter(name.to_owned()));
        }
        if let Some(name) = header.critical.as_deref().and_then(<[String]>::first) {
            return Err(EncryptionError::Critical(name.clone()));
        }

        let alg = header.algorithm;
        let enc = header.content_encryption_algorithm;
        debug!(
            alg = alg.name(),
            enc = enc.name(),
            zip = header.compression_algorithm.map(|zip| zip.name()),
            "encrypting JWE"
        );

        let encoded_header = Base64UrlString::encode(serde_json::to_vec(&header)?);
        let (cek, encrypted_key) = cek::wrap(alg, enc, key, rng)?;
        let iv = content::generate_iv(enc, rng)?;

        let compressed;
        let plaintext = match header.compression_algorithm {
            Some(CompressionAlgorithm::Deflate) => {
                compressed = Zeroizing::new(
                    compression::deflate(plaintext).map_err(EncryptionError::Compress)?,
                );
                &compressed[..]
            }
            None => plaintext,
        };

        let payload = content::encrypt(enc, cek.expose(), &iv, encoded_header.as_bytes(), plaintext)?;

        Ok(Self {
            header,
            encoded_header,
            encrypted_key,
            iv,
            ciphertext: payload.ciphertext,
            tag: payload.tag,
        })
    }

    /// The untrusted header of this token.
    pub const fn header(&self) -> &JweHeader {
        &self.header
    }

    /// Parses a token from its compact representation.
    ///
    /// # Errors
    ///
    /// Returns an error if `compact` does not have exactly five parts, if the
    /// header is not a valid JWE header or if it lists critical extensions.
    pub fn decode(compact: Compact) -> Result<Self, MalformedJweError> {
        if compact.len() != 5 {
            trace!(parts = compact.len(), "wrong number of parts in compact JWE");
            return Err(MalformedJweError::PartCount(compact.len()));
        }

        let mut parts = compact.into_parts().into_iter();
        let mut next = || parts.next().unwrap_or_default();
        let encoded_header = next();
        let encrypted_key = next().decode();
        let iv = next().decode();
        let ciphertext = next().decode();
        let tag = next().decode();

        let header: JweHeader = serde_json::from_slice(&encoded_header.decode()).map_err(|e| {
            trace!(error = %e, "invalid JWE header");
            MalformedJweError::Header(e)
        })?;

        if let Some(name) = header.critical.as_deref().and_then(<[String]>::first) {
            trace!(%name, "unsupported critical header parameter");
            return Err(MalformedJweError::Critical(name.clone()));
        }

        Ok(Self {
            header,
            encoded_header,
            encrypted_key,
            iv,
            ciphertext,
            tag,
        })
    }

    /// The compact representation of this token.
    pub fn encode(&self) -> Compact {
        let mut compact = Compact::with_capacity(5);
        compact.push_base64url(self.encoded_header.clone());
        compact.push(&self.encrypted_key);
        compact.push(&self.iv);
        compact.push(&self.ciphertext);
        compact.push(&self.tag);
        compact
    }

    /// Decrypts the token and deserializes the payload from JSON.
    ///
    /// # Errors
    ///
    /// Returns the one [`DecryptionError`] whatever went wrong.
    pub fn decrypt<T: DeserializeOwned>(
        &self,
        key: &DecryptionKey,
    ) -> Result<JsonWebEncryption<T>, DecryptionError> {
        let plaintext = self.open(key)?;
        let payload = serde_json::from_slice(&plaintext).map_err(|_| failed())?;
        Ok(JsonWebEncryption::with_header(self.header.clone(), payload))
    }

    /// Decrypts the token and returns the payload as is.
    ///
    /// # Errors
    ///
    /// Returns the one [`DecryptionError`] whatever went wrong.
    pub fn decrypt_raw(&self, key: &DecryptionKey) -> Result<Vec<u8>, DecryptionError> {
        let mut plaintext = self.open(key)?;
        Ok(std::mem::take(&mut *plaintext))
    }

    fn open(&self, key: &DecryptionKey) -> Result<Zeroizing<Vec<u8>>, DecryptionError> {
        let alg = self.header.algorithm;
        let enc = self.header.content_encryption_algorithm;
        debug!(
            alg = alg.name(),
            enc = enc.name(),
            zip = self.header.compression_algorithm.map(|zip| zip.name()),
            "decrypting JWE"
        );

        // every step runs, failures are only combined and reported at the end
        let (cek, cek_ok) = cek::unwrap(alg, enc, key, &self.encrypted_key);
        let (plaintext, payload_ok) = content::decrypt(
            enc,
            cek.expose(),
            &self.iv,
            self.encoded_header.as_bytes(),
            &self.ciphertext,
            &self.tag,
        );

        if !bool::from(cek_ok & payload_ok) {
            return Err(failed());
        }

        match self.header.compression_algorithm {
            Some(CompressionAlgorithm::Deflate) => {
                compression::inflate(&plaintext).map_err(|_| failed())
            }
            None => Ok(plaintext),
        }
    }
}

fn failed() -> DecryptionError {
    debug!("JWE decryption failed");
    DecryptionError::new()
}

impl FromStr for Encrypted {
    type Err = MalformedJweError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: Compact = s.parse().map_err(|e| {
            trace!("compact JWE is not valid base64url");
            MalformedJweError::Base64(e)
        })?;
        Self::decode(compact)
    }
}

impl fmt::Display for Encrypted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.encode(), f)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng as _};
    use serde_json::json;

    use super::*;
    use crate::{
        crypto::symmetric::SymmetricKey,
        jwa::{EncryptionMethod, KeyManagementAlgorithm},
    };

    fn claims() -> ClaimsSet {
        let mut claims = ClaimsSet::new();
        claims.set_claim("test1", "This is a test claim");
        claims
    }

    #[test]
    fn round_trip_through_the_compact_form() {
        let key = SymmetricKey::new([5u8; 16]);
        let jwe = JsonWebEncryption::builder(KeyManagementAlgorithm::A128KW, EncryptionMethod::A128GCM)
            .key_id("k1")
            .additional_parameter("x-trace", 42)
            .build(claims());

        let encrypted = jwe
            .encrypt_with_rng(&key.clone().into(), &mut StdRng::seed_from_u64(0))
            .unwrap();
        let token = encrypted.to_string();
        assert_eq!(token.split('.').count(), 5);

        let parsed: Encrypted = token.parse().unwrap();
        assert_eq!(parsed, encrypted);
        assert_eq!(parsed.to_string(), token);
        assert_eq!(parsed.header().key_id.as_deref(), Some("k1"));
        assert_eq!(parsed.header().additional.get("x-trace"), Some(&json!(42)));

        let decrypted = parsed.decrypt::<ClaimsSet>(&key.into()).unwrap();
        assert_eq!(decrypted.payload(), &claims());
        assert_eq!(decrypted.header(), jwe.header());
    }

    #[test]
    fn header_is_the_aad() {
        let key = SymmetricKey::new([5u8; 32]);
        let encrypted = JsonWebEncryption::new(KeyManagementAlgorithm::DIR, EncryptionMethod::A128CBC_HS256, claims())
            .encrypt(&key.clone().into())
            .unwrap();

        // same algorithms, different bytes
        let mut forged = encrypted.clone();
        forged.encoded_header =
            Base64UrlString::encode(br#"{"enc":"A128CBC-HS256","alg":"dir"}"#);
        assert_eq!(
            serde_json::from_slice::<JweHeader>(&forged.encoded_header.decode()).unwrap(),
            encrypted.header
        );
        assert!(forged.decrypt_raw(&key.into()).is_err());
    }

    #[test]
    fn reserved_and_critical_parameters_are_not_sent() {
        let key: EncryptionKey = SymmetricKey::new([5u8; 16]).into();

        let jwe = JsonWebEncryption::builder(KeyManagementAlgorithm::A128KW, EncryptionMethod::A128GCM)
            .additional_parameter("zip", "DEF")
            .build(claims());
        assert!(matches!(
            jwe.encrypt(&key),
            Err(EncryptionError::ReservedHeaderParameter(name)) if name == "zip"
        ));

        let mut header = JweHeader::new(KeyManagementAlgorithm::A128KW, EncryptionMethod::A128GCM);
        header.critical = Some(vec!["exp".into()]);
        assert!(matches!(
            Encrypted::seal(header, b"", &key, &mut OsRng),
            Err(EncryptionError::Critical(name)) if name == "exp"
        ));
    }

    #[test]
    fn received_header_can_be_sealed_again() {
        let key = SymmetricKey::new([5u8; 16]);
        let header: JweHeader = serde_json::from_value(json!({
            "alg": "dir",
            "enc": "A128GCM",
            "jku": "https://example.com/keys",
            "crit": [],
        }))
        .unwrap();

        let encrypted = Encrypted::seal(header, b"hello", &key.clone().into(), &mut OsRng).unwrap();
        let token = encrypted.to_string();
        let encoded = token.split('.').next().unwrap_or_default();
        let sent: serde_json::Map<String, Value> =
            serde_json::from_slice(&encoded.parse::<Base64UrlString>().unwrap().decode()).unwrap();
        assert_eq!(sent.get("jku"), Some(&json!("https://example.com/keys")));
        assert!(!sent.contains_key("crit"));

        let parsed: Encrypted = token.parse().unwrap();
        assert_eq!(
            parsed.header().additional.get("jku"),
            Some(&json!("https://example.com/keys"))
        );
        assert_eq!(parsed.decrypt_raw(&key.into()).unwrap(), b"hello");
    }

    #[test]
    fn critical_extensions_are_rejected_on_decode() {
        let header = Base64UrlString::encode(br#"{"alg":"dir","enc":"A128GCM","crit":["exp"],"exp":1}"#);
        let token = format!("{header}..AAAAAAAAAAAAAAAA.AA.AAAAAAAAAAAAAAAAAAAAAA");
        assert!(matches!(
            token.parse::<Encrypted>(),
            Err(MalformedJweError::Critical(name)) if name == "exp"
        ));
    }
}
