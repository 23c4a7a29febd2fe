/// HMAC with SHA-2 Functions as defined in [section 3.2 of RFC 7518]
///
/// For JWE these are only used as the MAC half of the
/// [`AesCbcHs`](super::AesCbcHs) compositions.
///
/// [section 3.2 of RFC 7518]: <https://datatracker.ietf.org/doc/html/rfc7518#section-3.2>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hmac {
    /// HMAC using SHA-256
    Hs256,
    /// HMAC using SHA-384
    Hs384,
    /// HMAC using SHA-512
    Hs512,
}

impl Hmac {
    /// Size of the untruncated MAC output in bytes.
    pub const fn output_size(&self) -> usize {
        match self {
            Self::Hs256 => 32,
            Self::Hs384 => 48,
            Self::Hs512 => 64,
        }
    }
}
