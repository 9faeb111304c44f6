//! Paragraph model.
//!
//! [`Paragraph`] is a sum type over the block kinds a section can hold. The
//! writer matches it exhaustively; there is no dynamic dispatch.

use super::border::{Border, TabStop};
use super::header::HeaderStyle;
use super::table::Row;
use super::types::TextRun;
use smallvec::SmallVec;

/// Paragraph alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Right,
    Center,
    Justified,
}

impl Alignment {
    #[inline]
    pub fn control_word(self) -> &'static str {
        match self {
            Self::Left => "ql",
            Self::Right => "qr",
            Self::Center => "qc",
            Self::Justified => "qj",
        }
    }
}

/// Space between lines, in twips.
///
/// Magnitudes are distances, so the writer emits their absolute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSpacing {
    /// `\slN`, at least N, or exactly N when negative in the source unit
    Exact(i32),
    /// `\slN\slmult0`
    AtLeastOrExactly(i32),
    /// `\slN\slmult1`, N/240 lines
    Multiple(i32),
    /// `\sl0`, spacing chosen by the renderer
    Auto,
}

/// Paragraph formatting property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphFormat {
    HyphenationOn,
    HyphenationOff,
    /// Paragraph is part of a table
    InTable,
    /// Keep the paragraph intact on one page
    Keep,
    NoWidowControl,
    KeepWithNext,
    /// Numbering level
    Level(u32),
    NoLineNumbering,
    PageBreakBefore,
    Align(Alignment),
    /// First-line indent in twips
    FirstLineIndent(i32),
    /// Left indent in twips
    LeftIndent(i32),
    /// Right indent in twips
    RightIndent(i32),
    /// Space before in twips
    SpaceBefore(i32),
    /// Space after in twips
    SpaceAfter(i32),
    LineSpacing(LineSpacing),
    RightToLeft,
    LeftToRight,
}

/// A paragraph of inline content.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextParagraph {
    /// Keep the previous paragraph's formatting, omitting `\pard`
    pub(crate) inherit: bool,
    pub(crate) style: Option<u16>,
    pub(crate) borders: SmallVec<[Border; 4]>,
    pub(crate) formats: Vec<ParagraphFormat>,
    pub(crate) tabs: SmallVec<[TabStop; 4]>,
    pub(crate) runs: Vec<TextRun>,
}

impl TextParagraph {
    /// Paragraph that continues the formatting of its predecessor.
    pub fn inherited<I, R>(runs: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<TextRun>,
    {
        Self {
            inherit: true,
            runs: runs.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Paragraph that resets to default paragraph formatting.
    pub fn reset<I, R>(runs: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<TextRun>,
    {
        Self {
            inherit: false,
            runs: runs.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    #[inline]
    pub fn with_style(mut self, style: &HeaderStyle) -> Self {
        self.style = Some(style.id());
        self
    }

    #[inline]
    pub fn with_format(mut self, format: ParagraphFormat) -> Self {
        self.formats.push(format);
        self
    }

    #[inline]
    pub fn with_border(mut self, border: Border) -> Self {
        self.borders.push(border);
        self
    }

    #[inline]
    pub fn with_tab(mut self, tab: TabStop) -> Self {
        self.tabs.push(tab);
        self
    }

    #[inline]
    pub fn align(self, alignment: Alignment) -> Self {
        self.with_format(ParagraphFormat::Align(alignment))
    }

    #[inline]
    pub fn line_spacing(self, spacing: LineSpacing) -> Self {
        self.with_format(ParagraphFormat::LineSpacing(spacing))
    }

    #[inline]
    pub fn push(&mut self, run: impl Into<TextRun>) {
        self.runs.push(run.into());
    }

    #[inline]
    pub fn inherits(&self) -> bool {
        self.inherit
    }

    #[inline]
    pub fn style(&self) -> Option<u16> {
        self.style
    }

    #[inline]
    pub fn runs(&self) -> &[TextRun] {
        &self.runs
    }

    /// Whether any token precedes the runs besides the opening brace.
    pub(crate) fn has_preamble(&self) -> bool {
        !self.inherit
            || self.style.is_some()
            || !self.borders.is_empty()
            || !self.formats.is_empty()
            || !self.tabs.is_empty()
    }
}

/// A block-level element of a section.
#[derive(Debug, Clone, PartialEq)]
pub enum Paragraph {
    Text(TextParagraph),
    Row(Row),
    /// Single-level bullet item
    Bullet(Box<TextRun>),
}

impl Paragraph {
    /// Paragraph inheriting the previous paragraph's formatting.
    pub fn p<I, R>(runs: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<TextRun>,
    {
        Self::Text(TextParagraph::inherited(runs))
    }

    /// Paragraph starting from default paragraph formatting.
    pub fn pard<I, R>(runs: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<TextRun>,
    {
        Self::Text(TextParagraph::reset(runs))
    }

    /// Paragraph with a stylesheet style.
    pub fn styled<I, R>(style: &HeaderStyle, runs: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<TextRun>,
    {
        Self::Text(TextParagraph::inherited(runs).with_style(style))
    }

    /// Bulleted list item.
    #[inline]
    pub fn bullet(run: impl Into<TextRun>) -> Self {
        Self::Bullet(Box::new(run.into()))
    }

    /// Plain text content. Table cells are separated by tabs.
    pub fn plain_text(&self) -> String {
        match self {
            Self::Text(paragraph) => paragraph.runs.iter().map(TextRun::plain_text).collect(),
            Self::Row(row) => row
                .cells()
                .iter()
                .map(|cell| cell.content().plain_text())
                .collect::<Vec<_>>()
                .join("\t"),
            Self::Bullet(run) => run.plain_text(),
        }
    }
}

impl From<TextParagraph> for Paragraph {
    #[inline]
    fn from(paragraph: TextParagraph) -> Self {
        Self::Text(paragraph)
    }
}

impl From<Row> for Paragraph {
    #[inline]
    fn from(row: Row) -> Self {
        Self::Row(row)
    }
}

impl From<TextRun> for Paragraph {
    #[inline]
    fn from(run: TextRun) -> Self {
        Self::p([run])
    }
}

impl From<&str> for Paragraph {
    #[inline]
    fn from(text: &str) -> Self {
        Self::p([text])
    }
}

impl From<String> for Paragraph {
    #[inline]
    fn from(text: String) -> Self {
        Self::p([text])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inherit_flag() {
        assert!(TextParagraph::inherited(["a"]).inherits());
        assert!(!TextParagraph::reset(["a"]).inherits());
    }

    #[test]
    fn test_preamble_detection() {
        assert!(!TextParagraph::inherited(["a"]).has_preamble());
        assert!(TextParagraph::reset(["a"]).has_preamble());
        assert!(
            TextParagraph::inherited(["a"])
                .with_style(&HeaderStyle::HEADING_1)
                .has_preamble()
        );
        assert!(
            TextParagraph::inherited(["a"])
                .align(Alignment::Center)
                .has_preamble()
        );
    }

    #[test]
    fn test_styled_paragraph() {
        let Paragraph::Text(p) = Paragraph::styled(&HeaderStyle::HEADING_2, ["Title"]) else {
            panic!("expected text paragraph");
        };
        assert_eq!(p.style(), Some(2));
        assert_eq!(p.runs(), &[TextRun::text("Title")]);
    }

    #[test]
    fn test_plain_text() {
        let row = Row::new(["a", "b"]).unwrap();
        assert_eq!(Paragraph::from(row).plain_text(), "a\tb");
        assert_eq!(Paragraph::bullet(TextRun::text("x").bold()).plain_text(), "x");
    }
}
