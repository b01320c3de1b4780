//! Locale-independent case folding for identifiers and literals.

/// Upper-cases ASCII letters and leaves every other character untouched.
pub fn upcase(text: &str) -> String {
    text.to_ascii_uppercase()
}

/// Byte-wise [`upcase`] for input in an arbitrary single-byte encoding.
/// Bytes outside `a..=z` pass through unchanged.
pub fn upcase_bytes(bytes: &[u8]) -> Vec<u8> {
    bytes.to_ascii_uppercase()
}
