//! RTF section support.
//!
//! This module provides document sections together with their formatting,
//! headers and footers.

use super::paragraph::Paragraph;
use crate::common::{Error, Result};

/// Section break type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionBreakType {
    /// Continuous section (no page break)
    Continuous,
    /// New column
    Column,
    /// New page
    #[default]
    Page,
    /// New even page
    EvenPage,
    /// New odd page
    OddPage,
}

impl SectionBreakType {
    #[inline]
    pub fn control_word(self) -> &'static str {
        match self {
            Self::Continuous => "sbknone",
            Self::Column => "sbkcol",
            Self::Page => "sbkpage",
            Self::EvenPage => "sbkeven",
            Self::OddPage => "sbkodd",
        }
    }
}

/// Vertical alignment of text within a section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAlignment {
    /// Top-aligned
    #[default]
    Top,
    /// Bottom-aligned
    Bottom,
    /// Centered
    Center,
    /// Justified (distributed)
    Justify,
}

impl VerticalAlignment {
    #[inline]
    pub fn control_word(self) -> &'static str {
        match self {
            Self::Top => "vertalt",
            Self::Bottom => "vertalb",
            Self::Center => "vertalc",
            Self::Justify => "vertalj",
        }
    }
}

/// Pages a header or footer applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderFooterKind {
    Header,
    HeaderLeft,
    HeaderRight,
    HeaderFirst,
    Footer,
}

impl HeaderFooterKind {
    #[inline]
    pub fn destination(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::HeaderLeft => "headerl",
            Self::HeaderRight => "headerr",
            Self::HeaderFirst => "headerf",
            Self::Footer => "footer",
        }
    }
}

/// Section formatting property or header/footer.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionFormat {
    /// Reset to default section properties (`\sectd`)
    Reset,
    /// Endnotes are printed at the end of this section
    EndnotesHere,
    Break(SectionBreakType),
    Columns(u16),
    /// Space between columns in twips
    ColumnSpacing(i32),
    LineBetweenColumns,
    /// Page number the section starts with
    StartPageNumber(i32),
    VerticalAlign(VerticalAlignment),
    HeaderFooter(HeaderFooterKind, Box<Paragraph>),
}

impl SectionFormat {
    /// Column count.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidColumnCount`] unless `columns >= 1`.
    pub fn columns(columns: i32) -> Result<Self> {
        match u16::try_from(columns) {
            Ok(n) if n >= 1 => Ok(Self::Columns(n)),
            _ => Err(Error::InvalidColumnCount(columns)),
        }
    }

    /// Header on all pages.
    pub fn header(content: impl Into<Paragraph>) -> Self {
        Self::HeaderFooter(HeaderFooterKind::Header, Box::new(content.into()))
    }

    /// Footer on all pages.
    pub fn footer(content: impl Into<Paragraph>) -> Self {
        Self::HeaderFooter(HeaderFooterKind::Footer, Box::new(content.into()))
    }

    pub fn header_for(kind: HeaderFooterKind, content: impl Into<Paragraph>) -> Self {
        Self::HeaderFooter(kind, Box::new(content.into()))
    }
}

/// A document section.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    formats: Vec<SectionFormat>,
    paragraphs: Vec<Paragraph>,
}

impl Section {
    /// Create a section.
    ///
    /// # Errors
    ///
    /// [`Error::EmptySection`] when `paragraphs` yields nothing.
    pub fn new<I, P>(paragraphs: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<Paragraph>,
    {
        let paragraphs: Vec<Paragraph> = paragraphs.into_iter().map(Into::into).collect();
        if paragraphs.is_empty() {
            return Err(Error::EmptySection);
        }
        Ok(Self {
            formats: Vec::new(),
            paragraphs,
        })
    }

    /// Section holding exactly one paragraph.
    pub fn single(paragraph: impl Into<Paragraph>) -> Self {
        Self {
            formats: Vec::new(),
            paragraphs: vec![paragraph.into()],
        }
    }

    #[inline]
    pub fn with_format(mut self, format: SectionFormat) -> Self {
        self.formats.push(format);
        self
    }

    #[inline]
    pub fn formats(&self) -> &[SectionFormat] {
        &self.formats
    }

    #[inline]
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_section_is_rejected() {
        assert!(matches!(
            Section::new(Vec::<Paragraph>::new()),
            Err(Error::EmptySection)
        ));
    }

    #[test]
    fn test_column_count_validation() {
        assert_eq!(SectionFormat::columns(2).unwrap(), SectionFormat::Columns(2));
        assert!(matches!(
            SectionFormat::columns(0),
            Err(Error::InvalidColumnCount(0))
        ));
        assert!(SectionFormat::columns(-3).is_err());
    }

    #[test]
    fn test_section_keeps_paragraph_order() {
        let section = Section::new(["one", "two"]).unwrap();
        assert_eq!(section.paragraphs()[1], Paragraph::p(["two"]));
    }
}
