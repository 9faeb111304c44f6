//! Inline content model.
//!
//! A [`TextRun`] is an immutable tree. Formatting never mutates a run; it
//! wraps it in a new [`TextRun::Formatted`] node, which the writer renders as
//! its own brace group. Nested formatting is therefore expressed by repeated
//! wrapping, and runs may be cloned and reused across paragraphs.

use super::field::{Field, Hyperlink};
use super::header::{ColorRef, FontRef};
use super::paragraph::Paragraph;
use super::picture::Picture;

/// Character formatting applied by a single control word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Bold,
    Italic,
    Underline,
    DottedUnderline,
    DoubleUnderline,
    /// Underline words only, not the spaces between them
    WordUnderline,
    Subscript,
    Superscript,
    Strikethrough,
    Shadow,
    SmallCaps,
    /// Text shown as revised
    Revised,
    Hidden,
    AllCaps,
    /// Font table index
    Font(FontRef),
    /// Size in half points
    FontSize(u16),
    /// Foreground color table index
    Color(ColorRef),
    /// Highlight color table index
    Highlight(ColorRef),
}

impl Format {
    /// Control word and optional numeric parameter.
    #[inline]
    pub fn control_word(self) -> (&'static str, Option<i32>) {
        match self {
            Self::Bold => ("b", None),
            Self::Italic => ("i", None),
            Self::Underline => ("ul", None),
            Self::DottedUnderline => ("uld", None),
            Self::DoubleUnderline => ("uldb", None),
            Self::WordUnderline => ("ulw", None),
            Self::Subscript => ("sub", None),
            Self::Superscript => ("super", None),
            Self::Strikethrough => ("strike", None),
            Self::Shadow => ("shad", None),
            Self::SmallCaps => ("scaps", None),
            Self::Revised => ("revised", None),
            Self::Hidden => ("v", None),
            Self::AllCaps => ("caps", None),
            Self::Font(index) => ("f", Some(i32::from(index))),
            Self::FontSize(half_points) => ("fs", Some(i32::from(half_points))),
            Self::Color(index) => ("cf", Some(i32::from(index))),
            Self::Highlight(index) => ("highlight", Some(i32::from(index))),
        }
    }
}

/// Special characters and dynamic tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialChar {
    CurrentDate,
    CurrentDateLong,
    CurrentDateAbbreviated,
    CurrentTime,
    PageNumber,
    SectionNumber,
    PageBreak,
    ColumnBreak,
    LineBreak,
    SoftPageBreak,
    SoftColumnBreak,
    SoftLineBreak,
    Tab,
    EmDash,
    EnDash,
    Bullet,
    LeftQuote,
    RightQuote,
    LeftDoubleQuote,
    RightDoubleQuote,
    NonBreakingSpace,
}

impl SpecialChar {
    /// Control word or control symbol, without the leading backslash.
    pub fn control_word(self) -> &'static str {
        match self {
            Self::CurrentDate => "chdate",
            Self::CurrentDateLong => "chdpl",
            Self::CurrentDateAbbreviated => "chdpa",
            Self::CurrentTime => "chtime",
            Self::PageNumber => "chpgn",
            Self::SectionNumber => "sectnum",
            Self::PageBreak => "page",
            Self::ColumnBreak => "column",
            Self::LineBreak => "line",
            Self::SoftPageBreak => "softpage",
            Self::SoftColumnBreak => "softcol",
            Self::SoftLineBreak => "softline",
            Self::Tab => "tab",
            Self::EmDash => "emdash",
            Self::EnDash => "endash",
            Self::Bullet => "bullet",
            Self::LeftQuote => "lquote",
            Self::RightQuote => "rquote",
            Self::LeftDoubleQuote => "ldblquote",
            Self::RightDoubleQuote => "rdblquote",
            Self::NonBreakingSpace => "~",
        }
    }
}

/// Atomic inline content of a paragraph.
#[derive(Debug, Clone, PartialEq)]
pub enum TextRun {
    /// Plain text, escaped when written
    Text(String),
    /// Runs written back to back
    Seq(Vec<TextRun>),
    /// A run inside its own formatting group
    Formatted(Format, Box<TextRun>),
    Special(SpecialChar),
    Field(Field),
    Hyperlink(Hyperlink),
    Picture(Picture),
    /// Footnote with an automatic reference mark
    Footnote(Vec<Paragraph>),
}

impl TextRun {
    /// Plain text run.
    #[inline]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Concatenate runs without separator.
    pub fn seq<I, R>(runs: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<TextRun>,
    {
        Self::Seq(runs.into_iter().map(Into::into).collect())
    }

    /// Concatenate runs, separated by a single space.
    pub fn join_with_space<I, R>(runs: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<TextRun>,
    {
        let mut out = Vec::new();
        for run in runs {
            if !out.is_empty() {
                out.push(Self::Text(" ".to_string()));
            }
            out.push(run.into());
        }
        Self::Seq(out)
    }

    /// Footnote consisting of the given paragraphs.
    pub fn footnote<I, P>(paragraphs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Paragraph>,
    {
        Self::Footnote(paragraphs.into_iter().map(Into::into).collect())
    }

    /// Wrap this run in a new formatting group.
    #[inline]
    pub fn wrap(self, format: Format) -> Self {
        Self::Formatted(format, Box::new(self))
    }

    #[inline]
    pub fn bold(self) -> Self {
        self.wrap(Format::Bold)
    }

    #[inline]
    pub fn italic(self) -> Self {
        self.wrap(Format::Italic)
    }

    #[inline]
    pub fn underline(self) -> Self {
        self.wrap(Format::Underline)
    }

    #[inline]
    pub fn dotted_underline(self) -> Self {
        self.wrap(Format::DottedUnderline)
    }

    #[inline]
    pub fn double_underline(self) -> Self {
        self.wrap(Format::DoubleUnderline)
    }

    #[inline]
    pub fn word_underline(self) -> Self {
        self.wrap(Format::WordUnderline)
    }

    #[inline]
    pub fn subscript(self) -> Self {
        self.wrap(Format::Subscript)
    }

    #[inline]
    pub fn superscript(self) -> Self {
        self.wrap(Format::Superscript)
    }

    #[inline]
    pub fn strikethrough(self) -> Self {
        self.wrap(Format::Strikethrough)
    }

    #[inline]
    pub fn shadow(self) -> Self {
        self.wrap(Format::Shadow)
    }

    #[inline]
    pub fn small_caps(self) -> Self {
        self.wrap(Format::SmallCaps)
    }

    #[inline]
    pub fn revised(self) -> Self {
        self.wrap(Format::Revised)
    }

    #[inline]
    pub fn hidden(self) -> Self {
        self.wrap(Format::Hidden)
    }

    #[inline]
    pub fn all_caps(self) -> Self {
        self.wrap(Format::AllCaps)
    }

    #[inline]
    pub fn font(self, index: FontRef) -> Self {
        self.wrap(Format::Font(index))
    }

    /// Font size in half points, `24` is 12pt.
    #[inline]
    pub fn font_size(self, half_points: u16) -> Self {
        self.wrap(Format::FontSize(half_points))
    }

    #[inline]
    pub fn color(self, index: ColorRef) -> Self {
        self.wrap(Format::Color(index))
    }

    #[inline]
    pub fn highlight(self, index: ColorRef) -> Self {
        self.wrap(Format::Highlight(index))
    }

    /// Surround with single quotation marks.
    pub fn quote(self) -> Self {
        Self::Seq(vec![
            Self::Special(SpecialChar::LeftQuote),
            self,
            Self::Special(SpecialChar::RightQuote),
        ])
    }

    /// Surround with double quotation marks.
    pub fn double_quote(self) -> Self {
        Self::Seq(vec![
            Self::Special(SpecialChar::LeftDoubleQuote),
            self,
            Self::Special(SpecialChar::RightDoubleQuote),
        ])
    }

    /// Plain text content, ignoring formatting and non-text nodes.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(text),
            Self::Seq(runs) => runs.iter().for_each(|run| run.collect_text(out)),
            Self::Formatted(_, inner) => inner.collect_text(out),
            Self::Special(SpecialChar::Tab) => out.push('\t'),
            Self::Hyperlink(link) => out.push_str(&link.text().plain_text()),
            _ => {},
        }
    }
}

impl From<&str> for TextRun {
    #[inline]
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for TextRun {
    #[inline]
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<SpecialChar> for TextRun {
    #[inline]
    fn from(special: SpecialChar) -> Self {
        Self::Special(special)
    }
}

impl From<Field> for TextRun {
    #[inline]
    fn from(field: Field) -> Self {
        Self::Field(field)
    }
}

impl From<Hyperlink> for TextRun {
    #[inline]
    fn from(link: Hyperlink) -> Self {
        Self::Hyperlink(link)
    }
}

impl From<Picture> for TextRun {
    #[inline]
    fn from(picture: Picture) -> Self {
        Self::Picture(picture)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapping_composes_by_nesting() {
        let run = TextRun::text("x").bold().italic();
        assert_eq!(
            run,
            TextRun::Formatted(
                Format::Italic,
                Box::new(TextRun::Formatted(
                    Format::Bold,
                    Box::new(TextRun::Text("x".into()))
                ))
            )
        );
    }

    #[test]
    fn test_runs_are_reusable() {
        let base = TextRun::text("shared");
        let a = base.clone().bold();
        let b = base.clone().underline();
        assert_ne!(a, b);
        assert_eq!(base, TextRun::text("shared"));
    }

    #[test]
    fn test_join_with_space() {
        let run = TextRun::join_with_space(["a", "b", "c"]);
        assert_eq!(run.plain_text(), "a b c");
        assert_eq!(TextRun::join_with_space(Vec::<TextRun>::new()).plain_text(), "");
    }

    #[test]
    fn test_format_control_words() {
        assert_eq!(Format::Bold.control_word(), ("b", None));
        assert_eq!(Format::FontSize(24).control_word(), ("fs", Some(24)));
        assert_eq!(Format::Highlight(3).control_word(), ("highlight", Some(3)));
        assert_eq!(SpecialChar::NonBreakingSpace.control_word(), "~");
    }
}
