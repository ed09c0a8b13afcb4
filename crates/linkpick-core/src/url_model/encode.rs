//! Percent-encoding for query values in generated links.

/// Percent-encodes `input` for use as a query value.
///
/// RFC 3986 unreserved characters (`A-Z a-z 0-9 - . _ ~`) are kept; every other
/// byte of the UTF-8 encoding becomes `%XX` (uppercase hex). Spaces become `%20`,
/// never `+`, so mail clients show them verbatim.
pub fn percent_encode_component(input: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    let mut out = String::with_capacity(input.len());
    for &b in input.as_bytes() {
        if b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_' | b'~') {
            out.push(b as char);
        } else {
            out.push('%');
            out.push(HEX[(b >> 4) as usize] as char);
            out.push(HEX[(b & 0x0f) as usize] as char);
        }
    }
    out
}
