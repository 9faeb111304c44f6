//! Windows-1252 codec helpers.
//!
//! RTF documents written by this crate declare `\ansi`, so the single-byte
//! fallback for non-ASCII characters and the template I/O both use the
//! Windows-1252 code page.

use encoding_rs::WINDOWS_1252;
use std::borrow::Cow;

/// Encode one character into its Windows-1252 byte.
///
/// Returns `None` when the code page has no representation for `c`.
///
/// # Examples
/// ```
/// use rtfkit::common::encoding::encode_windows_1252_char;
///
/// assert_eq!(encode_windows_1252_char('é'), Some(0xE9));
/// assert_eq!(encode_windows_1252_char('€'), Some(0x80));
/// assert_eq!(encode_windows_1252_char('中'), None);
/// ```
#[inline]
pub fn encode_windows_1252_char(c: char) -> Option<u8> {
    if c.is_ascii() {
        return Some(c as u8);
    }

    let mut buf = [0u8; 4];
    let (bytes, _, had_errors) = WINDOWS_1252.encode(c.encode_utf8(&mut buf));
    match (had_errors, bytes.as_ref()) {
        (false, [byte]) => Some(*byte),
        _ => None,
    }
}

/// Decode Windows-1252 bytes to UTF-8.
///
/// Every byte maps to a character, so decoding never fails.
#[inline]
pub fn decode_windows_1252(bytes: &[u8]) -> Cow<'_, str> {
    let (text, _) = WINDOWS_1252.decode_without_bom_handling(bytes);
    text
}

/// Encode UTF-8 text to Windows-1252 bytes.
///
/// Characters without a Windows-1252 mapping become `?`.
pub fn encode_windows_1252(text: &str) -> Cow<'_, [u8]> {
    if text.is_ascii() {
        return Cow::Borrowed(text.as_bytes());
    }

    let (bytes, _, had_errors) = WINDOWS_1252.encode(text);
    if !had_errors {
        return bytes;
    }

    Cow::Owned(
        text.chars()
            .map(|c| encode_windows_1252_char(c).unwrap_or(b'?'))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_char() {
        assert_eq!(encode_windows_1252_char('A'), Some(b'A'));
        assert_eq!(encode_windows_1252_char('\u{7f}'), Some(0x7F));
        assert_eq!(encode_windows_1252_char('ü'), Some(0xFC));
        assert_eq!(encode_windows_1252_char('\u{2014}'), Some(0x97));
        assert_eq!(encode_windows_1252_char('\u{03A9}'), None);
        assert_eq!(encode_windows_1252_char('\u{1F600}'), None);
    }

    #[test]
    fn test_decode_encode_round_trip() {
        let bytes: Vec<u8> = (0x20u8..=0xFF).collect();
        let text = decode_windows_1252(&bytes);
        assert_eq!(encode_windows_1252(&text).as_ref(), bytes.as_slice());
    }

    #[test]
    fn test_encode_unmappable_becomes_question_mark() {
        assert_eq!(encode_windows_1252("a\u{03A9}b").as_ref(), b"a?b");
        assert_eq!(encode_windows_1252("\u{e9}").as_ref(), &[0xE9u8]);
    }
}
