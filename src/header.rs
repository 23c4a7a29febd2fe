//! The JOSE header of a JSON Web Encryption.
//!
//! In the compact serialization the whole header is integrity protected: its
//! base64url encoding is the additional authenticated data of the content
//! encryption. Until a token has been decrypted successfully, nothing in the
//! header should be trusted.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::jwa::{CompressionAlgorithm, JsonWebContentEncryptionAlgorithm, JsonWebEncryptionAlgorithm};

/// Header parameters that have a field in [`JweHeader`].
///
/// The other names registered in [section 4.1 of RFC 7516], like `jku` or
/// `x5c`, are kept in [`JweHeader::additional`].
///
/// [section 4.1 of RFC 7516]: <https://datatracker.ietf.org/doc/html/rfc7516#section-4.1>
pub(crate) const FIELD_PARAMETERS: [&str; 7] = ["alg", "enc", "zip", "kid", "typ", "cty", "crit"];

/// The JOSE header of a JWE as defined in [section 4 of RFC 7516].
///
/// [section 4 of RFC 7516]: <https://datatracker.ietf.org/doc/html/rfc7516#section-4>
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JweHeader {
    /// The `alg` parameter, which identifies how the content encryption key
    /// is protected.
    #[serde(rename = "alg")]
    pub algorithm: JsonWebEncryptionAlgorithm,

    /// The `enc` parameter, which identifies the algorithm used to encrypt
    /// the payload.
    #[serde(rename = "enc")]
    pub content_encryption_algorithm: JsonWebContentEncryptionAlgorithm,

    /// The `zip` parameter. If set, the payload is compressed before it is
    /// encrypted.
    #[serde(rename = "zip", default, skip_serializing_if = "Option::is_none")]
    pub compression_algorithm: Option<CompressionAlgorithm>,

    /// The `kid` parameter, a hint which key was used.
    #[serde(rename = "kid", default, skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,

    /// The `typ` parameter, the media type of the complete JWE.
    #[serde(rename = "typ", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,

    /// The `cty` parameter, the media type of the payload.
    #[serde(rename = "cty", default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    /// The `crit` parameter, listing extensions the recipient must
    /// understand.
    ///
    /// This implementation understands no extensions, so tokens that carry a
    /// non-empty list are rejected. An empty list is never serialized.
    #[serde(rename = "crit", default, skip_serializing_if = "no_critical")]
    pub critical: Option<Vec<String>>,

    /// All other parameters.
    #[serde(flatten)]
    pub additional: Map<String, Value>,
}

impl JweHeader {
    /// Creates a header with only the required parameters set.
    pub fn new(
        algorithm: JsonWebEncryptionAlgorithm,
        content_encryption_algorithm: JsonWebContentEncryptionAlgorithm,
    ) -> Self {
        Self {
            algorithm,
            content_encryption_algorithm,
            compression_algorithm: None,
            key_id: None,
            media_type: None,
            content_type: None,
            critical: None,
            additional: Map::new(),
        }
    }

    /// The first parameter in [`additional`](Self::additional) that would
    /// shadow one of the header fields, if any.
    pub(crate) fn reserved_additional_parameter(&self) -> Option<&str> {
        self.additional
            .keys()
            .map(String::as_str)
            .find(|name| FIELD_PARAMETERS.contains(name))
    }
}

fn no_critical(crit: &Option<Vec<String>>) -> bool {
    crit.as_ref().is_none_or(Vec::is_empty)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::jwa::{EncryptionMethod, KeyManagementAlgorithm};

    #[test]
    fn minimal_header() {
        let header = JweHeader::new(KeyManagementAlgorithm::RSA1_5, EncryptionMethod::A128CBC_HS256);
        assert_eq!(
            serde_json::to_string(&header).unwrap(),
            r#"{"alg":"RSA1_5","enc":"A128CBC-HS256"}"#
        );
    }

    #[test]
    fn optional_and_additional_parameters() {
        let value = json!({
            "alg": "dir",
            "enc": "A256GCM",
            "zip": "DEF",
            "kid": "key-1",
            "typ": "JWT",
            "x-custom": [1, 2, 3],
        });
        let header: JweHeader = serde_json::from_value(value.clone()).unwrap();

        assert_eq!(header.algorithm, KeyManagementAlgorithm::DIR);
        assert_eq!(header.content_encryption_algorithm, EncryptionMethod::A256GCM);
        assert_eq!(header.compression_algorithm, Some(CompressionAlgorithm::Deflate));
        assert_eq!(header.key_id.as_deref(), Some("key-1"));
        assert_eq!(header.media_type.as_deref(), Some("JWT"));
        assert_eq!(header.content_type, None);
        assert_eq!(header.additional.get("x-custom"), Some(&json!([1, 2, 3])));
        assert_eq!(header.reserved_additional_parameter(), None);

        assert_eq!(serde_json::to_value(&header).unwrap(), value);
    }

    #[test]
    fn missing_or_unknown_algorithms() {
        assert!(serde_json::from_value::<JweHeader>(json!({ "alg": "dir" })).is_err());
        assert!(
            serde_json::from_value::<JweHeader>(json!({ "alg": "RSA-OAEP", "enc": "A128GCM" }))
                .is_err()
        );
        assert!(
            serde_json::from_value::<JweHeader>(json!({ "alg": "dir", "enc": "A128GCM", "zip": "GZIP" }))
                .is_err()
        );
    }

    #[test]
    fn reserved_names_in_additional_parameters() {
        let mut header = JweHeader::new(KeyManagementAlgorithm::DIR, EncryptionMethod::A128GCM);
        header.additional.insert("enc".into(), json!("A256GCM"));
        assert_eq!(header.reserved_additional_parameter(), Some("enc"));

        let mut header = JweHeader::new(KeyManagementAlgorithm::DIR, EncryptionMethod::A128GCM);
        header.additional.insert("crit".into(), json!(["exp"]));
        assert_eq!(header.reserved_additional_parameter(), Some("crit"));
    }

    #[test]
    fn other_registered_parameters_are_additional() {
        let value = json!({
            "alg": "dir",
            "enc": "A128GCM",
            "jku": "https://example.com/keys",
            "x5t#S256": "dGVzdA",
        });
        let header: JweHeader = serde_json::from_value(value.clone()).unwrap();

        assert_eq!(header.additional.len(), 2);
        assert_eq!(header.reserved_additional_parameter(), None);
        assert_eq!(serde_json::to_value(&header).unwrap(), value);
    }

    #[test]
    fn empty_critical_is_omitted() {
        let mut header = JweHeader::new(KeyManagementAlgorithm::DIR, EncryptionMethod::A128GCM);
        header.critical = Some(vec![]);
        assert_eq!(
            serde_json::to_string(&header).unwrap(),
            r#"{"alg":"dir","enc":"A128GCM"}"#
        );
    }
}
