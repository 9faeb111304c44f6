//! Text escaping for RTF output.
//!
//! Every piece of caller-supplied text passes through [`escape_into`] before it
//! reaches a sink. The mapping is locale independent and deterministic:
//!
//! | input                | output                               |
//! |----------------------|--------------------------------------|
//! | `\n`                 | `\par` + newline                     |
//! | `\t`                 | `\tab` + newline                     |
//! | `\`, `{`, `}`        | backslash-escaped                    |
//! | other below U+007F   | unchanged                            |
//! | U+007F and above     | `\uN` followed by `\'xx` or `?`      |
//!
//! The `\'xx` fallback holds the Windows-1252 byte of the character. Readers
//! that skip `\u` fall back to it; characters without a Windows-1252 mapping
//! degrade to a literal `?`.

use crate::common::encoding::encode_windows_1252_char;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Escape `text` into a new string.
///
/// ```
/// use rtfkit::rtf::escape;
///
/// assert_eq!(escape("a{b}\\c"), "a\\{b\\}\\\\c");
/// assert_eq!(escape("é"), "\\u233\\'e9");
/// ```
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 2);
    escape_into(&mut out, text);
    out
}

/// Escape `text`, appending to `out`.
pub fn escape_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '\n' => out.push_str("\\par\n"),
            '\t' => out.push_str("\\tab\n"),
            '\\' => out.push_str("\\\\"),
            '{' => out.push_str("\\{"),
            '}' => out.push_str("\\}"),
            c if (c as u32) < 0x7F => out.push(c),
            c if (c as u32) <= 0xFFFF => {
                push_unicode(out, c as u32);
                push_fallback(out, c);
            },
            c => {
                // Outside the BMP: one token per UTF-16 unit, surrogates never map
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units).iter() {
                    push_unicode(out, u32::from(*unit));
                    out.push('?');
                }
            },
        }
    }
}

#[inline]
fn push_unicode(out: &mut String, code: u32) {
    let mut buf = itoa::Buffer::new();
    out.push_str("\\u");
    out.push_str(buf.format(code));
}

#[inline]
fn push_fallback(out: &mut String, c: char) {
    match encode_windows_1252_char(c) {
        Some(byte) => {
            out.push_str("\\'");
            out.push(HEX_DIGITS[(byte >> 4) as usize] as char);
            out.push(HEX_DIGITS[(byte & 0x0F) as usize] as char);
        },
        None => out.push('?'),
    }
}
