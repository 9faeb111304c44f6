//! RTF document writer/serializer.
//!
//! The writer walks a [`Document`] strictly in order: preamble, font table,
//! color table, optional stylesheet, optional info group, document
//! formatting, then the sections. Nothing is buffered beyond the sink's own
//! buffering, so a failing sink leaves whatever it already accepted.

use super::border::{Border, TabStop};
use super::docfmt::DocFormat;
use super::document::Document;
use super::escape::escape_into;
use super::field::{Field, Hyperlink};
use super::header::{HeaderFont, Headers};
use super::info::DocumentInfo;
use super::paragraph::{LineSpacing, Paragraph, ParagraphFormat, TextParagraph};
use super::picture::Picture;
use super::section::{Section, SectionFormat};
use super::table::{Row, RowFormat};
use super::types::TextRun;
use std::io::{self, Write};

const DEFAULT_FONT_ENTRY: &str = "{\\f0 Times New Roman;}";

const BULLET_PREFIX: &str = "{\\pard{\\pntext\\bullet\\tab}{\\*\\pn\\pnlvlblt\\pnf1\\pnindent0{\\pntxtb\\bullet}}\\fi-200\\li200 ";

/// RTF writer options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterOptions {
    /// Default font index (`\deffN`)
    pub default_font: u16,
    /// Default tab width in twips (`\deftabN`), omitted when `None`
    pub default_tab_width: Option<i32>,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            default_font: 0,
            default_tab_width: None,
        }
    }
}

/// RTF document writer
pub struct RtfWriter<W: Write> {
    /// Output writer
    writer: W,
    /// Writer options
    options: WriterOptions,
    /// Reused buffer for escaped text
    scratch: String,
    /// Bytes handed to the sink so far
    written: usize,
}

impl<W: Write> RtfWriter<W> {
    /// Create a new RTF writer
    pub fn new(writer: W) -> Self {
        Self::with_options(writer, WriterOptions::default())
    }

    /// Create a new RTF writer with options
    pub fn with_options(writer: W, options: WriterOptions) -> Self {
        Self {
            writer,
            options,
            scratch: String::with_capacity(256),
            written: 0,
        }
    }

    /// Number of bytes written so far.
    #[inline]
    pub fn bytes_written(&self) -> usize {
        self.written
    }

    /// Flush the sink.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Unwrap the sink.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Write a complete RTF document
    pub fn write_document(&mut self, doc: &Document) -> io::Result<()> {
        self.write_document_header()?;
        self.write_headers(doc.headers())?;

        if let Some(info) = doc.info() {
            self.write_info(info)?;
        }

        self.write_doc_formats(doc.formats())?;

        let sections = doc.sections();
        for (i, section) in sections.iter().enumerate() {
            self.write_section(section)?;
            if i + 1 < sections.len() {
                self.write_str("\\sect\n")?;
            }
        }

        self.write_str("}")
    }

    /// Write document header
    fn write_document_header(&mut self) -> io::Result<()> {
        self.write_str("{")?;
        self.write_control_word("rtf", Some(1))?;
        self.write_control_word("ansi", None)?;
        self.write_control_word("deff", Some(i32::from(self.options.default_font)))?;
        if let Some(width) = self.options.default_tab_width {
            self.write_control_word("deftab", Some(width))?;
        }
        Ok(())
    }

    /// Write font, color and style tables followed by a line break.
    pub fn write_headers(&mut self, headers: &Headers) -> io::Result<()> {
        self.write_font_table(headers.fonts())?;
        self.write_color_table(headers)?;

        if !headers.styles().is_empty() {
            self.write_str("\n{")?;
            self.write_control_word("stylesheet", None)?;
            for style in headers.styles() {
                self.write_str("{")?;
                self.write_control_word("s", Some(i32::from(style.id())))?;
                self.write_str(" ")?;
                self.write_text(style.name())?;
                self.write_str(";}")?;
            }
            self.write_str("}")?;
        }

        self.write_str("\n")
    }

    /// Write font table
    fn write_font_table(&mut self, fonts: &[HeaderFont]) -> io::Result<()> {
        self.write_str("\n{")?;
        self.write_control_word("fonttbl", None)?;

        if fonts.is_empty() {
            self.write_str(DEFAULT_FONT_ENTRY)?;
        }

        for font in fonts {
            self.write_str("{")?;
            self.write_control_word("f", Some(i32::from(font.index)))?;
            self.write_control_word(font.family.control_word(), None)?;
            self.write_control_word("fcharset", Some(i32::from(font.charset.code())))?;
            if let Some(pitch) = font.pitch {
                self.write_control_word("fprq", Some(i32::from(pitch.code())))?;
            }
            self.write_str(" ")?;
            self.write_text(&font.name)?;
            self.write_str(";}")?;
        }

        self.write_str("}")
    }

    /// Write color table
    fn write_color_table(&mut self, headers: &Headers) -> io::Result<()> {
        self.write_str("\n{")?;
        self.write_control_word("colortbl", None)?;

        let slots = headers.color_slots();
        if slots == 0 {
            return self.write_str(";}");
        }

        for index in 0..slots {
            // slots never exceeds 256
            if let Some(color) = headers.color(index as u8) {
                self.write_control_word("red", Some(i32::from(color.red)))?;
                self.write_control_word("green", Some(i32::from(color.green)))?;
                self.write_control_word("blue", Some(i32::from(color.blue)))?;
            }
            self.write_str(";")?;
        }

        self.write_str("}")
    }

    /// Write the `{\info ...}` group, nothing if `info` is empty.
    pub fn write_info(&mut self, info: &DocumentInfo) -> io::Result<()> {
        if info.is_empty() {
            return Ok(());
        }

        self.write_str("{")?;
        self.write_control_word("info", None)?;

        for (word, value) in info.text_entries() {
            self.write_str("{")?;
            self.write_control_word(word, None)?;
            self.write_str(" ")?;
            self.write_text(value)?;
            self.write_str("}")?;
        }

        for (word, time) in info.time_entries() {
            self.write_str("{")?;
            self.write_control_word(word, None)?;
            for (part, value) in time.parts() {
                self.write_control_word(part, Some(value))?;
            }
            self.write_str("}")?;
        }

        for (word, value) in info.numeric_entries() {
            self.write_str("{")?;
            self.write_control_word(word, Some(value))?;
            self.write_str("}")?;
        }

        self.write_str("}\n")
    }

    fn write_doc_formats(&mut self, formats: &[DocFormat]) -> io::Result<()> {
        if formats.is_empty() {
            return Ok(());
        }
        for format in formats {
            for (word, value) in format.control_words() {
                self.write_control_word(word, value)?;
            }
        }
        self.write_str("\n")
    }

    /// Write one section without the trailing section break.
    pub fn write_section(&mut self, section: &Section) -> io::Result<()> {
        if !section.formats().is_empty() {
            for format in section.formats() {
                self.write_section_format(format)?;
            }
            self.write_str("\n")?;
        }

        for paragraph in section.paragraphs() {
            self.write_paragraph(paragraph, true)?;
        }
        Ok(())
    }

    fn write_section_format(&mut self, format: &SectionFormat) -> io::Result<()> {
        match format {
            SectionFormat::Reset => self.write_control_word("sectd", None),
            SectionFormat::EndnotesHere => self.write_control_word("endnhere", None),
            SectionFormat::Break(kind) => self.write_control_word(kind.control_word(), None),
            SectionFormat::Columns(n) => self.write_control_word("cols", Some(i32::from(*n))),
            SectionFormat::ColumnSpacing(twips) => self.write_control_word("colsx", Some(*twips)),
            SectionFormat::LineBetweenColumns => self.write_control_word("linebetcol", None),
            SectionFormat::StartPageNumber(n) => self.write_control_word("pgnstarts", Some(*n)),
            SectionFormat::VerticalAlign(align) => {
                self.write_control_word(align.control_word(), None)
            },
            SectionFormat::HeaderFooter(kind, content) => {
                self.write_str("{")?;
                self.write_control_word(kind.destination(), None)?;
                self.write_paragraph(content, true)?;
                self.write_str("}")
            },
        }
    }

    /// Write a paragraph.
    ///
    /// `with_par` is false inside table cells, footnotes and fields, where
    /// the trailing `\par` is suppressed.
    pub fn write_paragraph(&mut self, paragraph: &Paragraph, with_par: bool) -> io::Result<()> {
        match paragraph {
            Paragraph::Text(text) => self.write_text_paragraph(text, with_par),
            Paragraph::Row(row) => self.write_row(row),
            Paragraph::Bullet(run) => {
                self.write_str(BULLET_PREFIX)?;
                self.write_run(run)?;
                if with_par {
                    self.write_control_word("par", None)?;
                }
                self.write_str("}\n")
            },
        }
    }

    fn write_text_paragraph(&mut self, paragraph: &TextParagraph, with_par: bool) -> io::Result<()> {
        self.write_str("{")?;

        if !paragraph.inherit {
            self.write_control_word("pard", None)?;
        }
        if let Some(style) = paragraph.style {
            self.write_control_word("s", Some(i32::from(style)))?;
        }
        for border in &paragraph.borders {
            self.write_border(border)?;
        }
        for format in &paragraph.formats {
            self.write_paragraph_format(*format)?;
        }
        for tab in &paragraph.tabs {
            self.write_tab(tab)?;
        }
        if paragraph.has_preamble() {
            self.write_str(" ")?;
        }

        for run in &paragraph.runs {
            self.write_run(run)?;
        }

        if with_par {
            self.write_control_word("par", None)?;
        }
        self.write_str("}\n")
    }

    fn write_border(&mut self, border: &Border) -> io::Result<()> {
        self.write_control_word(border.side.paragraph_word(), None)?;
        self.write_control_word(border.style.control_word(), None)?;
        if let Some(width) = border.width {
            self.write_control_word("brdrw", Some(width))?;
        }
        if let Some(space) = border.space {
            self.write_control_word("brsp", Some(space))?;
        }
        if let Some(color) = border.color_ref {
            self.write_control_word("brdrcf", Some(i32::from(color)))?;
        }
        Ok(())
    }

    fn write_paragraph_format(&mut self, format: ParagraphFormat) -> io::Result<()> {
        match format {
            ParagraphFormat::HyphenationOn => self.write_control_word("hyphpar", Some(1)),
            ParagraphFormat::HyphenationOff => self.write_control_word("hyphpar", Some(0)),
            ParagraphFormat::InTable => self.write_control_word("intbl", None),
            ParagraphFormat::Keep => self.write_control_word("keep", None),
            ParagraphFormat::NoWidowControl => self.write_control_word("nowidctlpar", None),
            ParagraphFormat::KeepWithNext => self.write_control_word("keepn", None),
            ParagraphFormat::Level(level) => {
                self.write_control_word("level", Some(i32::try_from(level).unwrap_or(i32::MAX)))
            },
            ParagraphFormat::NoLineNumbering => self.write_control_word("noline", None),
            ParagraphFormat::PageBreakBefore => self.write_control_word("pagebb", None),
            ParagraphFormat::Align(alignment) => {
                self.write_control_word(alignment.control_word(), None)
            },
            ParagraphFormat::FirstLineIndent(twips) => self.write_control_word("fi", Some(twips)),
            ParagraphFormat::LeftIndent(twips) => self.write_control_word("li", Some(twips)),
            ParagraphFormat::RightIndent(twips) => self.write_control_word("ri", Some(twips)),
            ParagraphFormat::SpaceBefore(twips) => self.write_control_word("sb", Some(twips)),
            ParagraphFormat::SpaceAfter(twips) => self.write_control_word("sa", Some(twips)),
            ParagraphFormat::LineSpacing(spacing) => self.write_line_spacing(spacing),
            ParagraphFormat::RightToLeft => self.write_control_word("rtlpar", None),
            ParagraphFormat::LeftToRight => self.write_control_word("ltrpar", None),
        }
    }

    fn write_line_spacing(&mut self, spacing: LineSpacing) -> io::Result<()> {
        match spacing {
            LineSpacing::Exact(twips) => self.write_control_word("sl", Some(twips.saturating_abs())),
            LineSpacing::AtLeastOrExactly(twips) => {
                self.write_control_word("sl", Some(twips.saturating_abs()))?;
                self.write_control_word("slmult", Some(0))
            },
            LineSpacing::Multiple(twips) => {
                self.write_control_word("sl", Some(twips.saturating_abs()))?;
                self.write_control_word("slmult", Some(1))
            },
            LineSpacing::Auto => self.write_control_word("sl", Some(0)),
        }
    }

    fn write_tab(&mut self, tab: &TabStop) -> io::Result<()> {
        if let Some(word) = tab.alignment.control_word() {
            self.write_control_word(word, None)?;
        }
        if let Some(word) = tab.leader.control_word() {
            self.write_control_word(word, None)?;
        }
        self.write_control_word("tx", Some(tab.position))
    }

    /// Write a table row.
    ///
    /// All cell definitions come first, one `\cellxN` per cell with the
    /// 1-based column position, then the cell contents.
    pub fn write_row(&mut self, row: &Row) -> io::Result<()> {
        self.write_str("{")?;
        self.write_control_word("trowd", None)?;
        self.write_control_word("trautofit", Some(1))?;
        self.write_control_word("intbl", None)?;
        self.write_str("\n")?;

        for (i, cell) in row.cells().iter().enumerate() {
            for format in row.formats() {
                self.write_row_format(*format)?;
            }
            if let Some(width) = cell.width {
                self.write_control_word("clftsWidth", Some(3))?;
                self.write_control_word("clwWidth", Some(width))?;
            }
            for side in &cell.borders {
                self.write_control_word(side.cell_word(), None)?;
                self.write_control_word("brdrs", None)?;
            }
            self.write_control_word("clcbpat", Some(i32::from(cell.background)))?;
            self.write_control_word("cellx", Some(i32::try_from(i + 1).unwrap_or(i32::MAX)))?;
            self.write_str("\n")?;
        }

        for cell in row.cells() {
            self.write_paragraph(&cell.content, false)?;
            self.write_str("\\cell\n")?;
        }

        self.write_str("\\row}\n")
    }

    fn write_row_format(&mut self, format: RowFormat) -> io::Result<()> {
        match format {
            RowFormat::RightToLeft => self.write_control_word("taprtl", None),
            RowFormat::CellSpacing(twips) => self.write_control_word("trgaph", Some(twips)),
            RowFormat::Height(twips) => self.write_control_word("trrh", Some(twips)),
            RowFormat::CellBorder(side) => {
                self.write_control_word(side.cell_word(), None)?;
                self.write_control_word("brdrs", None)
            },
        }
    }

    /// Write a text run.
    pub fn write_run(&mut self, run: &TextRun) -> io::Result<()> {
        match run {
            TextRun::Text(text) => self.write_text(text),
            TextRun::Seq(runs) => {
                for run in runs {
                    self.write_run(run)?;
                }
                Ok(())
            },
            TextRun::Formatted(format, inner) => {
                let (word, value) = format.control_word();
                self.write_str("{")?;
                self.write_control_word(word, value)?;
                self.write_str(" ")?;
                self.write_run(inner)?;
                self.write_str("}")
            },
            TextRun::Special(special) => {
                self.write_str("\\")?;
                self.write_str(special.control_word())?;
                self.write_str("\n")
            },
            TextRun::Field(field) => self.write_field(field),
            TextRun::Hyperlink(link) => self.write_hyperlink(link),
            TextRun::Picture(picture) => self.write_picture(picture),
            TextRun::Footnote(paragraphs) => {
                self.write_str("\\chftn{\\footnote{\\up6\\chftn }")?;
                for paragraph in paragraphs {
                    self.write_paragraph(paragraph, false)?;
                }
                self.write_str("}\n")
            },
        }
    }

    fn write_field(&mut self, field: &Field) -> io::Result<()> {
        self.write_str("{")?;
        self.write_control_word("field", None)?;
        for word in field.modifiers().control_words() {
            self.write_control_word(word, None)?;
        }
        self.write_str("{\\*\\fldinst ")?;
        self.write_paragraph(field.instruction(), false)?;
        self.write_str("}{\\fldrslt ")?;
        if let Some(result) = field.result() {
            self.write_paragraph(result, false)?;
        }
        self.write_str("}}")
    }

    fn write_hyperlink(&mut self, link: &Hyperlink) -> io::Result<()> {
        self.write_str("{\\field{\\*\\fldinst{HYPERLINK \"")?;
        self.write_text(link.url())?;
        self.write_str("\"}}{\\fldrslt{\\ul ")?;
        self.write_paragraph(link.text(), false)?;
        self.write_str("}}}")
    }

    fn write_picture(&mut self, picture: &Picture) -> io::Result<()> {
        self.write_str("{")?;
        self.write_control_word("pict", None)?;
        self.write_control_word(picture.image_type().control_word(), None)?;
        for (word, value) in picture.size_controls() {
            self.write_control_word(word, Some(value))?;
        }
        self.write_str("\n")?;
        self.write_str(picture.hex())?;
        self.write_str("}")
    }

    /// Write a control word with optional numeric parameter
    pub fn write_control_word(&mut self, word: &str, param: Option<i32>) -> io::Result<()> {
        self.write_str("\\")?;
        self.write_str(word)?;
        if let Some(value) = param {
            let mut buf = itoa::Buffer::new();
            self.write_str(buf.format(value))?;
        }
        Ok(())
    }

    /// Write escaped text
    pub fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.scratch.clear();
        escape_into(&mut self.scratch, text);
        self.writer.write_all(self.scratch.as_bytes())?;
        self.written += self.scratch.len();
        Ok(())
    }

    /// Write raw string
    pub fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.writer.write_all(s.as_bytes())?;
        self.written += s.len();
        Ok(())
    }
}

impl RtfWriter<Vec<u8>> {
    /// Render a single run to its RTF form.
    ///
    /// ```
    /// use rtfkit::rtf::{RtfWriter, TextRun};
    ///
    /// let run = TextRun::text("{x}").bold();
    /// assert_eq!(RtfWriter::render_run(&run), "{\\b \\{x\\}}");
    /// ```
    pub fn render_run(run: &TextRun) -> String {
        let mut writer = RtfWriter::new(Vec::with_capacity(64));
        // Vec<u8> never fails to accept bytes
        let _ = writer.write_run(run);
        into_string(writer.into_inner())
    }

    /// Render a single paragraph to its RTF form.
    pub fn render_paragraph(paragraph: &Paragraph, with_par: bool) -> String {
        let mut writer = RtfWriter::new(Vec::with_capacity(128));
        let _ = writer.write_paragraph(paragraph, with_par);
        into_string(writer.into_inner())
    }
}

/// The writer only emits UTF-8 string slices, so the conversion is lossless.
fn into_string(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}
