//! Cryptographic primitives.
//!
//! This module contains all primitives required for JSON Web Encryption. It
//! abstracts away the cryptographic library in use and provides a common
//! interface for it, so the JWE engine never talks to a library directly.
//!
//! Everything in here is stateless. Keys are immutable once constructed and
//! can be shared between threads.

pub(crate) mod backend;
pub mod cipher;
pub(crate) mod hmac;
pub mod rsa;
pub mod symmetric;

use std::{error, fmt};

use backend::interface;

use self::backend::Backend;

/// The result type used for cryptographic operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The erased error type that is used to generalize all errors that the
/// cryptographic library can return.
pub struct Error {
    inner: <Backend as interface::Backend>::Error,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        error::Error::source(&self.inner)
    }
}

impl<E> From<E> for Error
where
    <Backend as interface::Backend>::Error: From<E>,
{
    fn from(err: E) -> Self {
        Self {
            inner: <Backend as interface::Backend>::Error::from(err),
        }
    }
}

/// Fills the given buffer with random data from the operating system.
#[inline]
pub(crate) fn fill_random(buf: &mut [u8]) -> Result<()> {
    <Backend as interface::Backend>::fill_random(buf).map_err(|e| Error { inner: e })
}
