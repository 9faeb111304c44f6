//! RTF document representation.

use super::docfmt::DocFormat;
use super::header::Headers;
use super::info::DocumentInfo;
use super::paragraph::Paragraph;
use super::section::Section;
use super::writer::{RtfWriter, WriterOptions};
use crate::common::{Error, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// RTF Document.
///
/// A finished, immutable document tree. Build it with [`Document::builder`]
/// and serialize it with [`Document::write_to`], [`Document::save`] or
/// [`Document::to_rtf_string`].
///
/// # Examples
///
/// ```
/// use rtfkit::rtf::{Document, Paragraph, Section, TextRun};
///
/// let doc = Document::builder()
///     .section(Section::new([Paragraph::p([TextRun::text("Hello").bold()])])?)
///     .build()?;
/// assert!(doc.to_rtf_string().contains("{\\b Hello}"));
/// # Ok::<(), rtfkit::common::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    headers: Headers,
    info: Option<DocumentInfo>,
    formats: Vec<DocFormat>,
    sections: Vec<Section>,
    options: WriterOptions,
}

impl Document {
    #[inline]
    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::default()
    }

    #[inline]
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    #[inline]
    pub fn info(&self) -> Option<&DocumentInfo> {
        self.info.as_ref()
    }

    #[inline]
    pub fn formats(&self) -> &[DocFormat] {
        &self.formats
    }

    #[inline]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[inline]
    pub fn options(&self) -> &WriterOptions {
        &self.options
    }

    /// Serialize into `sink`.
    ///
    /// The sink is consumed and dropped before this returns, on success and
    /// on failure alike. Output accepted by the sink before a failure is not
    /// rolled back.
    pub fn write_to<W: Write>(&self, sink: W) -> Result<()> {
        let mut writer = RtfWriter::with_options(sink, self.options.clone());
        writer.write_document(self)?;
        writer.flush()?;
        log::debug!(
            "wrote RTF document: {} sections, {} bytes",
            self.sections.len(),
            writer.bytes_written()
        );
        Ok(())
    }

    /// Serialize to a file, replacing it if it exists.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path.as_ref())?;
        self.write_to(BufWriter::new(file))
    }

    /// Serialize to a string.
    pub fn to_rtf_string(&self) -> String {
        let mut writer = RtfWriter::with_options(Vec::with_capacity(4096), self.options.clone());
        // Vec<u8> never fails to accept bytes
        let _ = writer.write_document(self);
        String::from_utf8_lossy(&writer.into_inner()).into_owned()
    }
}

/// Collects header tables, info, formatting and sections.
#[derive(Debug, Clone, Default)]
pub struct DocumentBuilder {
    headers: Headers,
    info: Option<DocumentInfo>,
    formats: Vec<DocFormat>,
    sections: Vec<Section>,
    options: WriterOptions,
}

impl DocumentBuilder {
    #[inline]
    pub fn headers(mut self, headers: Headers) -> Self {
        self.headers = headers;
        self
    }

    #[inline]
    pub fn info(mut self, info: DocumentInfo) -> Self {
        self.info = Some(info);
        self
    }

    #[inline]
    pub fn format(mut self, format: DocFormat) -> Self {
        self.formats.push(format);
        self
    }

    pub fn formats(mut self, formats: impl IntoIterator<Item = DocFormat>) -> Self {
        self.formats.extend(formats);
        self
    }

    #[inline]
    pub fn options(mut self, options: WriterOptions) -> Self {
        self.options = options;
        self
    }

    #[inline]
    pub fn section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Append a section holding a single paragraph.
    pub fn paragraph(mut self, paragraph: impl Into<Paragraph>) -> Self {
        self.sections.push(Section::single(paragraph.into()));
        self
    }

    /// Finish the document.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyDocument`] when no section was added.
    pub fn build(self) -> Result<Document> {
        if self.sections.is_empty() {
            return Err(Error::EmptyDocument);
        }
        Ok(Document {
            headers: self.headers,
            info: self.info,
            formats: self.formats,
            sections: self.sections,
            options: self.options,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::io;
    use std::rc::Rc;

    /// Sink that records being dropped and can fail on demand.
    struct TrackedSink {
        dropped: Rc<Cell<bool>>,
        fail: bool,
        data: Vec<u8>,
    }

    impl Write for TrackedSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.fail {
                return Err(io::Error::other("sink failure"));
            }
            self.data.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for TrackedSink {
        fn drop(&mut self) {
            self.dropped.set(true);
        }
    }

    fn simple_doc() -> Document {
        Document::builder().paragraph("Hello").build().unwrap()
    }

    #[test]
    fn test_empty_document_is_rejected() {
        assert!(matches!(
            Document::builder().build(),
            Err(Error::EmptyDocument)
        ));
    }

    #[test]
    fn test_sink_closed_on_success() {
        let dropped = Rc::new(Cell::new(false));
        let sink = TrackedSink {
            dropped: dropped.clone(),
            fail: false,
            data: Vec::new(),
        };
        simple_doc().write_to(sink).unwrap();
        assert!(dropped.get());
    }

    #[test]
    fn test_sink_closed_on_failure() {
        let dropped = Rc::new(Cell::new(false));
        let sink = TrackedSink {
            dropped: dropped.clone(),
            fail: true,
            data: Vec::new(),
        };
        let result = simple_doc().write_to(sink);
        assert!(matches!(result, Err(Error::Io(_))));
        assert!(dropped.get());
    }

    #[test]
    fn test_write_to_matches_string() {
        let doc = simple_doc();
        let mut out = Vec::new();
        doc.write_to(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), doc.to_rtf_string());
    }

    #[test]
    fn test_save_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.rtf");
        simple_doc().save(&path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("{\\rtf1\\ansi\\deff0"));
        assert!(written.ends_with('}'));
    }
}
