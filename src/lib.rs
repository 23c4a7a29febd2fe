//! An implementation of JSON Web Encryption ([RFC 7516]) in the compact
//! serialization.
//!
//! A [`JsonWebEncryption`] bundles a [`JweHeader`](header::JweHeader) with a
//! payload, which is a [`ClaimsSet`] unless specified otherwise. Encrypting it
//! yields an [`Encrypted`](jwe::Encrypted) token, which renders to the five
//! dot separated base64url segments that make up a compact JWE.
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use jose_jwe::{
//!     crypto::symmetric::SymmetricKey,
//!     jwa::{EncryptionMethod, KeyManagementAlgorithm},
//!     jwe::{DecryptionKey, EncryptionKey, Encrypted},
//!     ClaimsSet, JsonWebEncryption,
//! };
//!
//! let key = SymmetricKey::generate(32)?;
//!
//! let mut claims = ClaimsSet::new();
//! claims.set_subject("alice");
//!
//! let jwe = JsonWebEncryption::new(
//!     KeyManagementAlgorithm::A256KW,
//!     EncryptionMethod::A128CBC_HS256,
//!     claims,
//! );
//! let token = jwe.encrypt(&EncryptionKey::from(key.clone()))?.to_string();
//!
//! let decrypted = token
//!     .parse::<Encrypted>()?
//!     .decrypt::<ClaimsSet>(&DecryptionKey::from(key))?;
//! assert_eq!(decrypted.payload().subject(), Some("alice"));
//! # Ok(())
//! # }
//! ```
//!
//! Decryption failures are deliberately opaque: whatever went wrong after the
//! token was parsed, the caller receives the same
//! [`DecryptionError`](jwe::DecryptionError).
//!
//! [RFC 7516]: <https://datatracker.ietf.org/doc/html/rfc7516>
#![warn(
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications,
    explicit_outlives_requirements,
    clippy::missing_const_for_fn,
    clippy::missing_errors_doc
)]
#![deny(
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    macro_use_extern_crate,
    non_ascii_idents,
    elided_lifetimes_in_paths
)]
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

pub(crate) mod base64_url;

pub mod crypto;
pub mod format;
pub mod header;
pub mod jwa;
pub mod jwe;
pub mod jwt;

pub use base64_url::{Base64UrlString, NoBase64UrlString};
pub use jwe::JsonWebEncryption;
pub use jwt::ClaimsSet;

/// Type alias to make `JsonWebEncryption` easier to access.
pub type JWE<T = ClaimsSet> = JsonWebEncryption<T>;
