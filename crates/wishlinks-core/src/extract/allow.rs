//! Byte allowlist for URL characters.

/// True if `c` may appear inside an extracted URL.
///
/// Letters, digits, RFC 3986 unreserved/reserved punctuation, plus `%` and `|`.
/// Control bytes, space, quotes, angle brackets, backtick and backslash end a URL.
pub fn is_url_byte(c: u8) -> bool {
    if c.is_ascii_alphanumeric() {
        return true;
    }
    matches!(
        c,
        b'-' | b'.'
            | b'_'
            | b'~'
            | b':'
            | b'/'
            | b'?'
            | b'#'
            | b'['
            | b']'
            | b'@'
            | b'!'
            | b'$'
            | b'&'
            | b'('
            | b')'
            | b'*'
            | b'+'
            | b','
            | b';'
            | b'='
            | b'%'
            | b'|'
    )
}
