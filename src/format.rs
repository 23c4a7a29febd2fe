//! Serialization formats for JSON Web Encryption.
//!
//! Only the [`Compact`] serialization from [section 7.1 of RFC 7516] is
//! supported.
//!
//! [section 7.1 of RFC 7516]: <https://datatracker.ietf.org/doc/html/rfc7516#section-7.1>

mod compact;

#[doc(inline)]
pub use compact::Compact;
