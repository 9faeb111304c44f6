//! Placeholder substitution in existing RTF documents.
//!
//! A [`Template`] holds the text of an RTF file, typically authored in a word
//! processor with placeholders like `%%NAME%%`. Values injected for a key are
//! escaped before they replace the placeholder, so caller text can never
//! break the document's group structure.
//!
//! A placeholder is the prefix, at least one non-whitespace character, and
//! the suffix. Matching is greedy: the name extends to the last suffix
//! occurrence before the next whitespace. Placeholders without a value are
//! left untouched.

use super::escape::escape_into;
use super::types::TextRun;
use super::writer::RtfWriter;
use crate::common::encoding::{decode_windows_1252, encode_windows_1252};
use crate::common::{Error, Result};
use memchr::memmem;
use std::collections::HashMap;
use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

/// Default placeholder prefix and suffix.
pub const DEFAULT_DELIMITER: &str = "%%";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Value {
    /// Escaped on substitution
    Plain(String),
    /// Already RTF, inserted as is
    Rich(String),
}

/// RTF text with placeholders and the values to fill them with.
#[derive(Debug, Clone)]
pub struct Template {
    buffer: String,
    values: HashMap<String, Value>,
    prefix: String,
    suffix: String,
}

impl Template {
    /// Create a template from RTF text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            buffer: text.into(),
            values: HashMap::new(),
            prefix: DEFAULT_DELIMITER.to_string(),
            suffix: DEFAULT_DELIMITER.to_string(),
        }
    }

    /// Drain `reader` fully and decode it as Windows-1252.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        log::debug!("read RTF template: {} bytes", bytes.len());
        Ok(Self::new(decode_windows_1252(&bytes).into_owned()))
    }

    /// Read a template file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_reader(File::open(path)?)
    }

    /// Use other placeholder delimiters.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDelimiter`] if either delimiter is empty or contains
    /// anything but ASCII punctuation.
    pub fn with_delimiters(mut self, prefix: &str, suffix: &str) -> Result<Self> {
        validate_delimiter(prefix)?;
        validate_delimiter(suffix)?;
        self.prefix = prefix.to_string();
        self.suffix = suffix.to_string();
        Ok(self)
    }

    #[inline]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[inline]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// The unmodified template text.
    #[inline]
    pub fn source(&self) -> &str {
        &self.buffer
    }

    /// Set the value for `key`, replacing any earlier one.
    pub fn inject(&mut self, key: impl Into<String>, value: impl Display) -> &mut Self {
        self.values
            .insert(key.into(), Value::Plain(value.to_string()));
        self
    }

    /// Set several values at once.
    pub fn inject_all<I, K, V>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Display,
    {
        for (key, value) in values {
            self.inject(key, value);
        }
        self
    }

    /// Set a formatted value for `key`.
    ///
    /// The run is rendered through the writer, so its text is escaped and its
    /// formatting survives.
    pub fn inject_rich(&mut self, key: impl Into<String>, run: &TextRun) -> &mut Self {
        self.values
            .insert(key.into(), Value::Rich(RtfWriter::render_run(run)));
        self
    }

    /// Forget all injected values.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Substitute all placeholders that have a value.
    ///
    /// Without any injected value the template text is returned unchanged.
    pub fn render(&self) -> String {
        if self.values.is_empty() {
            return self.buffer.clone();
        }

        let text = self.buffer.as_str();
        let bytes = text.as_bytes();
        let finder = memmem::Finder::new(self.prefix.as_bytes());
        let mut out = String::with_capacity(text.len());
        let mut copied = 0;
        let mut pos = 0;

        while let Some(offset) = finder.find(&bytes[pos..]) {
            let start = pos + offset;
            let Some((key, end)) = self.placeholder_at(start) else {
                pos = start + 1;
                continue;
            };

            if let Some(value) = self.values.get(key) {
                out.push_str(&text[copied..start]);
                match value {
                    Value::Plain(plain) => escape_into(&mut out, plain),
                    Value::Rich(rtf) => out.push_str(rtf),
                }
                copied = end;
            }
            pos = end;
        }

        out.push_str(&text[copied..]);
        out
    }

    /// Match a placeholder whose prefix starts at byte `start`.
    ///
    /// Returns the name and the end of the placeholder.
    fn placeholder_at(&self, start: usize) -> Option<(&str, usize)> {
        let name_start = start + self.prefix.len();
        let rest = &self.buffer[name_start..];
        let run_len = rest
            .bytes()
            .position(is_whitespace)
            .unwrap_or(rest.len());
        let run = &rest[..run_len];

        match run.rfind(self.suffix.as_str()) {
            Some(name_len) if name_len > 0 => Some((
                &run[..name_len],
                name_start + name_len + self.suffix.len(),
            )),
            _ => None,
        }
    }

    /// Render and write as Windows-1252 to `sink`, which is consumed.
    pub fn write_to<W: Write>(&self, mut sink: W) -> Result<()> {
        let rendered = self.render();
        let bytes = encode_windows_1252(&rendered);
        sink.write_all(&bytes)?;
        sink.flush()?;
        log::debug!("wrote RTF template: {} bytes", bytes.len());
        Ok(())
    }

    /// Render and write to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path.as_ref())?;
        self.write_to(BufWriter::new(file))
    }
}

fn validate_delimiter(delimiter: &str) -> Result<()> {
    if delimiter.is_empty() || !delimiter.bytes().all(|b| b.is_ascii_punctuation()) {
        return Err(Error::InvalidDelimiter(delimiter.to_string()));
    }
    Ok(())
}

/// Space, tab, line feed, vertical tab, form feed and carriage return.
#[inline]
fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn filled(text: &str, values: &[(&str, &str)]) -> String {
        let mut template = Template::new(text);
        template.inject_all(values.iter().copied());
        template.render()
    }

    #[test]
    fn test_passthrough_without_values() {
        let text = "{\\rtf1 %%NAME%% and %%OTHER%%}";
        assert_eq!(Template::new(text).render(), text);
    }

    #[test]
    fn test_simple_substitution() {
        assert_eq!(
            filled("{\\rtf1 Dear %%NAME%%,\\par}", &[("NAME", "Ann")]),
            "{\\rtf1 Dear Ann,\\par}"
        );
    }

    #[test]
    fn test_missing_key_left_verbatim() {
        assert_eq!(
            filled("%%A%% %%B%%", &[("A", "1")]),
            "1 %%B%%"
        );
    }

    #[test]
    fn test_injected_value_is_escaped() {
        assert_eq!(
            filled("x %%V%% y", &[("V", "a{b}\\c")]),
            "x a\\{b\\}\\\\c y"
        );
        assert_eq!(filled("%%V%%", &[("V", "ö")]), "\\u246\\'f6");
    }

    #[test]
    fn test_greedy_match_extends_to_last_suffix() {
        // The name spans up to the last suffix before whitespace
        assert_eq!(filled("%%A%%B%%", &[("A", "1")]), "%%A%%B%%");
        assert_eq!(filled("%%A%%B%%", &[("A%%B", "2")]), "2");
    }

    #[test]
    fn test_whitespace_ends_placeholder() {
        assert_eq!(filled("%%A B%%", &[("A B", "x")]), "%%A B%%");
        assert_eq!(filled("%%A\t%%B%%", &[("B", "x")]), "%%A\tx");
    }

    #[test]
    fn test_empty_name_is_not_a_placeholder() {
        assert_eq!(filled("%%%%", &[("", "x")]), "%%%%");
        assert_eq!(filled("%%%x%%", &[("%x", "y")]), "y");
    }

    #[test]
    fn test_adjacent_placeholders() {
        assert_eq!(
            filled("%%A%% %%B%%!", &[("A", "1"), ("B", "2")]),
            "1 2!"
        );
    }

    #[test]
    fn test_custom_delimiters() {
        let mut template = Template::new("Hi <<NAME>>!").with_delimiters("<<", ">>").unwrap();
        template.inject("NAME", "Bo");
        assert_eq!(template.render(), "Hi Bo!");
    }

    #[test]
    fn test_invalid_delimiters() {
        assert!(matches!(
            Template::new("").with_delimiters("", "%%"),
            Err(Error::InvalidDelimiter(_))
        ));
        assert!(Template::new("").with_delimiters("{{", "a").is_err());
        assert!(Template::new("").with_delimiters("$ ", "$").is_err());
        assert!(Template::new("").with_delimiters("\u{a7}", "$").is_err());
    }

    #[test]
    fn test_inject_replaces_and_displays() {
        let mut template = Template::new("%%N%%");
        template.inject("N", 1).inject("N", 42);
        assert_eq!(template.render(), "42");
        template.clear();
        assert_eq!(template.render(), "%%N%%");
    }

    #[test]
    fn test_inject_rich_keeps_formatting() {
        let mut template = Template::new("[%%V%%]");
        template.inject_rich("V", &TextRun::text("a}b").bold());
        assert_eq!(template.render(), "[{\\b a\\}b}]");
    }

    #[test]
    fn test_render_is_repeatable() {
        let mut template = Template::new("%%A%%");
        template.inject("A", "x");
        assert_eq!(template.render(), template.render());
        assert_eq!(template.source(), "%%A%%");
    }

    #[test]
    fn test_read_and_write_windows_1252() {
        let source: &[u8] = b"{\\rtf1 Gr\xFC\xDFe %%N%%}";
        let mut template = Template::from_reader(source).unwrap();
        assert_eq!(template.source(), "{\\rtf1 Grüße %%N%%}");
        template.inject("N", "\u{e9}");

        let mut out = Vec::new();
        template.write_to(&mut out).unwrap();
        assert_eq!(out, b"{\\rtf1 Gr\xFC\xDFe \\u233\\'e9}");
    }

    #[test]
    fn test_open_and_save() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.rtf");
        let output = dir.path().join("out.rtf");
        std::fs::write(&input, b"{\\rtf1 %%WHO%%}").unwrap();

        let mut template = Template::open(&input).unwrap();
        template.inject("WHO", "world");
        template.save(&output).unwrap();

        assert_eq!(std::fs::read(&output).unwrap(), b"{\\rtf1 world}");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn prop_no_values_is_passthrough(text in any::<String>()) {
            prop_assert_eq!(Template::new(text.clone()).render(), text);
        }

        #[test]
        fn prop_injected_braces_are_escaped(value in "[a-z{}\\\\]{0,16}") {
            let mut template = Template::new("<%%K%%>");
            template.inject("K", &value);
            let out = template.render();
            let inner = &out[1..out.len() - 1];
            prop_assert!(crate::rtf::escape::tests::is_safely_escaped(inner));
        }

        #[test]
        fn prop_text_without_prefix_is_unchanged(text in "[^%]*") {
            let mut template = Template::new(text.clone());
            template.inject("K", "v");
            prop_assert_eq!(template.render(), text);
        }
    }
}
