use std::{fmt, str::FromStr};

use crate::{base64_url::NoBase64UrlString, Base64UrlString};

/// The compact representation is essentially a list of Base64Url
/// strings that are separated by `.`.
///
/// # Examples
///
/// ```
/// # use jose_jwe::format::Compact;
/// # fn main() {
/// let c: Compact = "YQ.Yg..Yw".parse().unwrap();
///
/// assert_eq!(c.len(), 4);
/// assert!(c.part(2).unwrap().is_empty());
/// assert_eq!(c.part(0).unwrap().decode(), b"a");
/// assert_eq!(c.to_string(), "YQ.Yg..Yw");
/// # }
/// ```
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Compact {
    parts: Vec<Base64UrlString>,
}

impl Compact {
    pub(crate) fn with_capacity(cap: usize) -> Self {
        Compact {
            parts: Vec::with_capacity(cap),
        }
    }

    pub(crate) fn push_base64url(&mut self, part: Base64UrlString) {
        self.parts.push(part);
    }

    pub(crate) fn push(&mut self, part: impl AsRef<[u8]>) {
        self.parts.push(Base64UrlString::encode(part));
    }

    /// The part at the given index, if there is one.
    pub fn part(&self, idx: usize) -> Option<&Base64UrlString> {
        self.parts.get(idx)
    }

    /// The number of parts.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether this representation has no parts at all.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub(crate) fn into_parts(self) -> Vec<Base64UrlString> {
        self.parts
    }
}

impl FromStr for Compact {
    type Err = NoBase64UrlString;

    /// Verifies if every part of the string is valid base64url format
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .split('.')
            .map(Base64UrlString::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { parts })
    }
}

impl fmt::Display for Compact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, part) in self.parts.iter().enumerate() {
            if idx != 0 {
                f.write_str(".")?;
            }
            fmt::Display::fmt(&part, f)?;
        }

        Ok(())
    }
}
