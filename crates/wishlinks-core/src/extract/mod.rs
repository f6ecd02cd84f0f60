//! Byte-level URL scanner for the browser cache blob.
//!
//! The cache is an opaque binary container, so there is no structure to
//! parse: we look for the literal `https://` and extend the match while
//! bytes stay in the URL allowlist. Insecure `http://` links are ignored.

mod allow;

pub use allow::is_url_byte;

use std::io::{self, Read};

/// Literal prefix that starts every extracted URL.
const HTTPS_PREFIX: &[u8] = b"https://";

/// Extracts every `https://` URL from `data`, in order of first byte offset.
///
/// Duplicates are kept. A prefix with nothing usable after it still yields
/// the bare 8-byte `https://`.
///
/// # Examples
///
/// - `b"\0junk/https://a.example/x?y=1 tail"` → `["https://a.example/x?y=1"]`
/// - `b"http://insecure.example"` → `[]`
pub fn extract_urls(data: &[u8]) -> Vec<String> {
    let mut out = Vec::new();
    let mut i = 0;
    while let Some(start) = find_prefix(data, i) {
        let mut end = start + HTTPS_PREFIX.len();
        while end < data.len() && is_url_byte(data[end]) {
            end += 1;
        }
        // Every allowed byte is ASCII, so widening each byte is lossless.
        out.push(data[start..end].iter().map(|&b| char::from(b)).collect());
        i = end;
    }
    out
}

/// Reads `reader` to the end and extracts URLs from its content.
pub fn extract_urls_from_reader<R: Read>(mut reader: R) -> io::Result<Vec<String>> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    Ok(extract_urls(&data))
}

/// Offset of the next `https://` at or after `from`.
fn find_prefix(data: &[u8], from: usize) -> Option<usize> {
    let mut i = from;
    while i < data.len() {
        let rel = data[i..].iter().position(|&b| b == b'h')?;
        let at = i + rel;
        if data[at..].starts_with(HTTPS_PREFIX) {
            return Some(at);
        }
        i = at + 1;
    }
    None
}
