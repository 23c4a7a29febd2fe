//! The claims set of a JSON Web Token as defined in [RFC 7519], which is the
//! default payload of a [`JsonWebEncryption`](crate::JsonWebEncryption).
//!
//! [RFC 7519]: <https://datatracker.ietf.org/doc/html/rfc7519>

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};

/// A set of claims. Every claim name is unique.
///
/// Accessors are provided for the registered claims of [section 4.1 of RFC
/// 7519]. A registered claim that holds a value of the wrong type is treated
/// as absent by its accessor, but is still available through
/// [`claim`](Self::claim).
///
/// [section 4.1 of RFC 7519]: <https://datatracker.ietf.org/doc/html/rfc7519#section-4.1>
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimsSet {
    claims: Map<String, Value>,
}

impl ClaimsSet {
    /// Creates an empty claims set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the claim `name`, replacing any previous value.
    pub fn set_claim(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.claims.insert(name.into(), value.into());
    }

    /// Returns the raw value of the claim `name`.
    pub fn claim(&self, name: &str) -> Option<&Value> {
        self.claims.get(name)
    }

    /// Deserializes the claim `name` into `T`.
    ///
    /// Returns `None` if the claim is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the claim can not be deserialized into `T`.
    pub fn claim_as<T: DeserializeOwned>(&self, name: &str) -> Option<serde_json::Result<T>> {
        self.claims
            .get(name)
            .map(|value| T::deserialize(value))
    }

    /// Removes the claim `name` and returns its value.
    pub fn remove_claim(&mut self, name: &str) -> Option<Value> {
        self.claims.remove(name)
    }

    /// Iterates over all claims.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.claims.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The number of claims.
    pub fn len(&self) -> usize {
        self.claims.len()
    }

    /// Whether there are no claims.
    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    /// Turns this claims set into the underlying JSON object.
    pub fn into_inner(self) -> Map<String, Value> {
        self.claims
    }

    fn string_claim(&self, name: &str) -> Option<&str> {
        self.claims.get(name).and_then(Value::as_str)
    }

    fn numeric_date_claim(&self, name: &str) -> Option<u64> {
        self.claims.get(name).and_then(Value::as_u64)
    }

    /// The `iss` (issuer) claim.
    pub fn issuer(&self) -> Option<&str> {
        self.string_claim("iss")
    }

    /// Sets the `iss` (issuer) claim.
    pub fn set_issuer(&mut self, issuer: impl Into<String>) {
        self.set_claim("iss", issuer.into());
    }

    /// The `sub` (subject) claim.
    pub fn subject(&self) -> Option<&str> {
        self.string_claim("sub")
    }

    /// Sets the `sub` (subject) claim.
    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.set_claim("sub", subject.into());
    }

    /// The `aud` (audience) claim.
    ///
    /// The claim may either be a single string or an array of strings, both
    /// are returned as a list.
    pub fn audience(&self) -> Vec<&str> {
        match self.claims.get("aud") {
            Some(Value::String(aud)) => vec![aud.as_str()],
            Some(Value::Array(auds)) => auds.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// Sets the `aud` (audience) claim.
    ///
    /// A single audience is stored as a plain string.
    pub fn set_audience<I, S>(&mut self, audience: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut audience = audience
            .into_iter()
            .map(|aud| Value::String(aud.into()))
            .collect::<Vec<_>>();

        let value = match audience.len() {
            1 => audience.remove(0),
            _ => Value::Array(audience),
        };
        self.set_claim("aud", value);
    }

    /// Adds an audience to the `aud` (audience) claim.
    pub fn add_audience(&mut self, audience: impl Into<String>) {
        let mut all = self
            .audience()
            .into_iter()
            .map(str::to_owned)
            .collect::<Vec<_>>();
        all.push(audience.into());
        self.set_audience(all);
    }

    /// The `jti` (JWT ID) claim.
    pub fn jwt_id(&self) -> Option<&str> {
        self.string_claim("jti")
    }

    /// Sets the `jti` (JWT ID) claim.
    pub fn set_jwt_id(&mut self, id: impl Into<String>) {
        self.set_claim("jti", id.into());
    }

    /// The `typ` claim, which some issuers put into the claims instead of
    /// the header.
    pub fn token_type(&self) -> Option<&str> {
        self.string_claim("typ")
    }

    /// Sets the `typ` claim.
    pub fn set_token_type(&mut self, typ: impl Into<String>) {
        self.set_claim("typ", typ.into());
    }

    /// The `iat` (issued at) claim in seconds since the Unix epoch.
    pub fn issued_at(&self) -> Option<u64> {
        self.numeric_date_claim("iat")
    }

    /// Sets the `iat` (issued at) claim in seconds since the Unix epoch.
    pub fn set_issued_at(&mut self, seconds: u64) {
        self.set_claim("iat", seconds);
    }

    /// The `nbf` (not before) claim in seconds since the Unix epoch.
    pub fn not_before(&self) -> Option<u64> {
        self.numeric_date_claim("nbf")
    }

    /// Sets the `nbf` (not before) claim in seconds since the Unix epoch.
    pub fn set_not_before(&mut self, seconds: u64) {
        self.set_claim("nbf", seconds);
    }

    /// The `exp` (expiration time) claim in seconds since the Unix epoch.
    pub fn expiration(&self) -> Option<u64> {
        self.numeric_date_claim("exp")
    }

    /// Sets the `exp` (expiration time) claim in seconds since the Unix epoch.
    pub fn set_expiration(&mut self, seconds: u64) {
        self.set_claim("exp", seconds);
    }
}

impl From<Map<String, Value>> for ClaimsSet {
    fn from(claims: Map<String, Value>) -> Self {
        Self { claims }
    }
}

impl FromIterator<(String, Value)> for ClaimsSet {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self {
            claims: iter.into_iter().collect(),
        }
    }
}
