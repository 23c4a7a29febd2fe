//! Raw DEFLATE ([RFC 1951]) for the `zip` header parameter.
//!
//! [RFC 1951]: <https://datatracker.ietf.org/doc/html/rfc1951>

use std::io::{self, Read as _, Write as _};

use flate2::{read::DeflateDecoder, write::DeflateEncoder, Compression};
use zeroize::Zeroizing;

pub(crate) fn deflate(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

/// Must only ever be called on authenticated data.
pub(crate) fn inflate(data: &[u8]) -> io::Result<Zeroizing<Vec<u8>>> {
    let mut out = Zeroizing::new(Vec::new());
    DeflateDecoder::new(data).read_to_end(&mut out)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let data = br#"{"a":"aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"}"#;
        let compressed = deflate(data).unwrap();
        assert!(compressed.len() < data.len());
        assert_eq!(&inflate(&compressed).unwrap()[..], &data[..]);
    }

    #[test]
    fn garbage_does_not_inflate() {
        assert!(inflate(&[0xff; 16]).is_err());
    }
}
