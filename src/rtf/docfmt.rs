//! Document formatting properties.
//!
//! These control words follow the info group and apply to the whole
//! document: page size, margins, footnote placement and the like.

use crate::common::unit::LengthUnit;

/// ISO 216 paper presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paper {
    A0,
    A1,
    A2,
    A3,
    A4,
    A5,
    A6,
    A7,
    A8,
}

impl Paper {
    /// Long and short edge in centimeters.
    pub fn dimensions_cm(self) -> (f64, f64) {
        match self {
            Self::A0 => (118.9, 84.1),
            Self::A1 => (84.1, 59.4),
            Self::A2 => (59.4, 42.0),
            Self::A3 => (42.0, 29.7),
            Self::A4 => (29.7, 21.0),
            Self::A5 => (21.0, 14.8),
            Self::A6 => (14.8, 10.5),
            Self::A7 => (10.5, 7.4),
            Self::A8 => (7.4, 5.2),
        }
    }

    /// Width and height in twips, long edge first.
    pub fn twips(self) -> (i32, i32) {
        let (width, height) = self.dimensions_cm();
        (
            LengthUnit::Centimeter.to_twips(width),
            LengthUnit::Centimeter.to_twips(height),
        )
    }
}

/// Footnote numbering style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FootnoteNumbering {
    /// 1, 2, 3
    #[default]
    Arabic,
    /// A, B, C
    UpperAlpha,
    /// a, b, c
    LowerAlpha,
    /// i, ii, iii
    LowerRoman,
    /// I, II, III
    UpperRoman,
}

impl FootnoteNumbering {
    #[inline]
    pub fn control_word(self) -> &'static str {
        match self {
            Self::Arabic => "ftnnar",
            Self::UpperAlpha => "ftnnauc",
            Self::LowerAlpha => "ftnnalc",
            Self::LowerRoman => "ftnnrlc",
            Self::UpperRoman => "ftnnruc",
        }
    }
}

/// Which notes the document holds (`\fetN`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteKind {
    FootnotesOnly,
    EndnotesOnly,
    FootnotesAndEndnotes,
}

/// Document formatting property. Lengths are twips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocFormat {
    DefaultTab(i32),
    HyphenationHotZone(i32),
    PageLayoutView,
    Notes(NoteKind),
    FootnoteNumbering(FootnoteNumbering),
    PaperWidth(i32),
    PaperHeight(i32),
    Paper(Paper),
    LeftMargin(i32),
    RightMargin(i32),
    TopMargin(i32),
    BottomMargin(i32),
    FacingPages,
    /// Swap left and right margins on facing pages
    MirrorMargins,
    Landscape,
    WidowControl,
    RevisionProtected,
    RevisionMarking,
}

impl DocFormat {
    /// Control words with their optional parameters.
    pub(crate) fn control_words(self) -> impl Iterator<Item = (&'static str, Option<i32>)> {
        let (first, second) = match self {
            Self::DefaultTab(twips) => (("deftab", Some(twips)), None),
            Self::HyphenationHotZone(twips) => (("hyphhotz", Some(twips)), None),
            Self::PageLayoutView => (("viewkind", Some(1)), None),
            Self::Notes(kind) => {
                let n = match kind {
                    NoteKind::FootnotesOnly => 0,
                    NoteKind::EndnotesOnly => 1,
                    NoteKind::FootnotesAndEndnotes => 2,
                };
                (("fet", Some(n)), None)
            },
            Self::FootnoteNumbering(numbering) => ((numbering.control_word(), None), None),
            Self::PaperWidth(twips) => (("paperw", Some(twips)), None),
            Self::PaperHeight(twips) => (("paperh", Some(twips)), None),
            Self::Paper(paper) => {
                let (width, height) = paper.twips();
                (("paperw", Some(width)), Some(("paperh", Some(height))))
            },
            Self::LeftMargin(twips) => (("margl", Some(twips)), None),
            Self::RightMargin(twips) => (("margr", Some(twips)), None),
            Self::TopMargin(twips) => (("margt", Some(twips)), None),
            Self::BottomMargin(twips) => (("margb", Some(twips)), None),
            Self::FacingPages => (("facingp", None), None),
            Self::MirrorMargins => (("margmirror", None), None),
            Self::Landscape => (("landscape", None), None),
            Self::WidowControl => (("widowctrl", None), None),
            Self::RevisionProtected => (("revprot", None), None),
            Self::RevisionMarking => (("revisions", None), None),
        };
        std::iter::once(first).chain(second)
    }
}
