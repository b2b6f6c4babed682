//! Favicon fingerprinting compatible with Shodan's `http.favicon.hash`.
//!
//! The fingerprint is MurmurHash3 (x86, 32-bit, seed 0) over the standard
//! base64 text of the favicon bytes, reinterpreted as a signed integer.

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Computes the fingerprint of a favicon body.
///
/// An empty body fingerprints to `0`.
pub fn fingerprint(bytes: &[u8]) -> i32 {
    let encoded = STANDARD.encode(bytes);
    murmur3_32(encoded.as_bytes(), 0) as i32
}

/// MurmurHash3 x86_32 over an in-memory buffer.
pub fn murmur3_32(data: &[u8], seed: u32) -> u32 {
    match murmur3::murmur3_32(&mut Cursor::new(data), seed) {
        Ok(h) => h,
        Err(e) => unreachable!("reading from a byte slice cannot fail: {}", e),
    }
}
