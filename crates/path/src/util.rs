/// Parse a property name as an array index.
///
/// Only canonical decimal integers qualify: no sign, no leading zeros
/// (except `"0"` itself).
///
/// # Example
///
/// ```
/// use glue_path::parse_index;
///
/// assert_eq!(parse_index("0"), Some(0));
/// assert_eq!(parse_index("123"), Some(123));
/// assert_eq!(parse_index("01"), None);
/// assert_eq!(parse_index("-1"), None);
/// assert_eq!(parse_index("length"), None);
/// ```
pub fn parse_index(key: &str) -> Option<usize> {
    let bytes = key.as_bytes();
    if bytes.is_empty() || (bytes.len() > 1 && bytes[0] == b'0') {
        return None;
    }
    if !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    key.parse().ok()
}
