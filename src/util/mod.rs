//! Internal utility functions and helpers.
//!
//! This module contains small helper functions used throughout the crate.
//! It is an implementation detail and not part of the public API.

use bytes::Bytes;

use crate::block::Digest;

/// Appends a digest to block content, producing an augmented payload.
///
/// This is the wire layout of a non-final block: raw content immediately
/// followed by 32 raw digest bytes.
pub(crate) fn append_digest(content: &[u8], digest: &Digest) -> Bytes {
    let mut combined = Vec::with_capacity(content.len() + Digest::SIZE);
    combined.extend_from_slice(content);
    combined.extend_from_slice(digest.as_bytes());
    Bytes::from(combined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_digest_layout() {
        let payload = append_digest(b"content", &Digest::new([0x11u8; 32]));
        assert_eq!(payload.len(), 7 + 32);
        assert_eq!(&payload[..7], b"content");
        assert_eq!(&payload[7..], &[0x11u8; 32]);
    }
}
