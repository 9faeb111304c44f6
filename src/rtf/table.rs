//! RTF table support.
//!
//! RTF has no table object. A table is a run of rows, each row declaring its
//! cell layout first and then listing the cell contents.

use super::border::BorderSide;
use super::header::ColorRef;
use super::paragraph::{Paragraph, TextParagraph};
use super::types::TextRun;
use crate::common::{Error, Result};
use smallvec::SmallVec;

/// Row formatting repeated in front of every cell definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowFormat {
    /// Cells are laid out right to left
    RightToLeft,
    /// Half the space between cells in twips (`\trgaphN`)
    CellSpacing(i32),
    /// Row height in twips (`\trrhN`)
    Height(i32),
    /// Single border on one side of every cell
    CellBorder(BorderSide),
}

/// A table cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub(crate) content: Paragraph,
    pub(crate) width: Option<i32>,
    pub(crate) borders: SmallVec<[BorderSide; 4]>,
    pub(crate) background: ColorRef,
}

impl Cell {
    /// Create a new cell with the given content.
    pub fn new(content: impl Into<Paragraph>) -> Self {
        Self {
            content: content.into(),
            width: None,
            borders: SmallVec::new(),
            background: 0,
        }
    }

    /// Preferred width in twips. Negative widths are taken as magnitudes.
    #[inline]
    pub fn with_width(mut self, twips: i32) -> Self {
        self.width = Some(twips.saturating_abs());
        self
    }

    /// Single border on `side` of this cell only.
    #[inline]
    pub fn with_border(mut self, side: BorderSide) -> Self {
        self.borders.push(side);
        self
    }

    /// Background color index, 0 means no background.
    #[inline]
    pub fn with_background(mut self, color: ColorRef) -> Self {
        self.background = color;
        self
    }

    #[inline]
    pub fn content(&self) -> &Paragraph {
        &self.content
    }

    #[inline]
    pub fn background(&self) -> ColorRef {
        self.background
    }
}

macro_rules! cell_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Cell {
                #[inline]
                fn from(content: $ty) -> Self {
                    Self::new(content)
                }
            }
        )*
    };
}

cell_from!(Paragraph, TextParagraph, TextRun, Row, String, &str);

/// A table row.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    cells: Vec<Cell>,
    formats: Vec<RowFormat>,
}

impl Row {
    /// Create a new row.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyRow`] when `cells` yields nothing.
    pub fn new<I, C>(cells: I) -> Result<Self>
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        let cells: Vec<Cell> = cells.into_iter().map(Into::into).collect();
        if cells.is_empty() {
            return Err(Error::EmptyRow);
        }
        Ok(Self {
            cells,
            formats: Vec::new(),
        })
    }

    #[inline]
    pub fn with_format(mut self, format: RowFormat) -> Self {
        self.formats.push(format);
        self
    }

    #[inline]
    pub fn right_to_left(self) -> Self {
        self.with_format(RowFormat::RightToLeft)
    }

    #[inline]
    pub fn cell_spacing(self, twips: i32) -> Self {
        self.with_format(RowFormat::CellSpacing(twips))
    }

    #[inline]
    pub fn height(self, twips: i32) -> Self {
        self.with_format(RowFormat::Height(twips))
    }

    #[inline]
    pub fn cell_border(self, side: BorderSide) -> Self {
        self.with_format(RowFormat::CellBorder(side))
    }

    /// Get the number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub fn formats(&self) -> &[RowFormat] {
        &self.formats
    }
}
