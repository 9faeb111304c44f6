//! RTF border and tab stop support.
//!
//! This module provides paragraph border definitions and tab stops. Both are
//! plain values; the writer turns them into control words.

use super::header::ColorRef;

/// Border line style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    /// Single line border
    #[default]
    Single,
    /// Double thickness border
    DoubleThickness,
    /// Shadowed border
    Shadowed,
    /// Double line border
    Double,
    /// Dotted border
    Dotted,
    /// Dashed border
    Dashed,
    /// Hairline border
    Hairline,
    /// Triple line border
    Triple,
    /// Thick-thin small gap
    ThickThinSmall,
    /// Thin-thick small gap
    ThinThickSmall,
    /// Wavy border
    Wavy,
    /// Double wavy border
    WavyDouble,
    /// Striped border
    Striped,
    /// Embossed border
    Embossed,
    /// Engraved border
    Engraved,
    /// Outset border (3D)
    Outset,
    /// Inset border (3D)
    Inset,
}

impl BorderStyle {
    #[inline]
    pub fn control_word(self) -> &'static str {
        match self {
            Self::Single => "brdrs",
            Self::DoubleThickness => "brdrth",
            Self::Shadowed => "brdrsh",
            Self::Double => "brdrdb",
            Self::Dotted => "brdrdot",
            Self::Dashed => "brdrdash",
            Self::Hairline => "brdrhair",
            Self::Triple => "brdrtriple",
            Self::ThickThinSmall => "brdrtnthsg",
            Self::ThinThickSmall => "brdrthtnsg",
            Self::Wavy => "brdrwavy",
            Self::WavyDouble => "brdrwavydb",
            Self::Striped => "brdrdashdotstr",
            Self::Embossed => "brdremboss",
            Self::Engraved => "brdrengrave",
            Self::Outset => "brdroutset",
            Self::Inset => "brdrinset",
        }
    }
}

/// Side of a paragraph or cell a border is drawn on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderSide {
    Top,
    Bottom,
    Left,
    Right,
}

impl BorderSide {
    /// Paragraph border control word (`\brdrt` etc).
    #[inline]
    pub fn paragraph_word(self) -> &'static str {
        match self {
            Self::Top => "brdrt",
            Self::Bottom => "brdrb",
            Self::Left => "brdrl",
            Self::Right => "brdrr",
        }
    }

    /// Table cell border control word (`\clbrdrt` etc).
    #[inline]
    pub fn cell_word(self) -> &'static str {
        match self {
            Self::Top => "clbrdrt",
            Self::Bottom => "clbrdrb",
            Self::Left => "clbrdrl",
            Self::Right => "clbrdrr",
        }
    }
}

/// Border definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Border {
    /// Side the border is drawn on
    pub side: BorderSide,
    /// Border style
    pub style: BorderStyle,
    /// Pen width in twips (`\brdrwN`), renderers cap it at 75
    pub width: Option<i32>,
    /// Space between border and content in twips (`\brspN`)
    pub space: Option<i32>,
    /// Border color reference (`\brdrcfN`)
    pub color_ref: Option<ColorRef>,
}

impl Border {
    /// Create a new border
    #[inline]
    pub fn new(side: BorderSide, style: BorderStyle) -> Self {
        Self {
            side,
            style,
            width: None,
            space: None,
            color_ref: None,
        }
    }

    #[inline]
    pub fn top(style: BorderStyle) -> Self {
        Self::new(BorderSide::Top, style)
    }

    #[inline]
    pub fn bottom(style: BorderStyle) -> Self {
        Self::new(BorderSide::Bottom, style)
    }

    #[inline]
    pub fn left(style: BorderStyle) -> Self {
        Self::new(BorderSide::Left, style)
    }

    #[inline]
    pub fn right(style: BorderStyle) -> Self {
        Self::new(BorderSide::Right, style)
    }

    #[inline]
    pub fn with_width(mut self, twips: i32) -> Self {
        self.width = Some(twips);
        self
    }

    #[inline]
    pub fn with_space(mut self, twips: i32) -> Self {
        self.space = Some(twips);
        self
    }

    #[inline]
    pub fn with_color(mut self, color_ref: ColorRef) -> Self {
        self.color_ref = Some(color_ref);
        self
    }
}

/// Tab stop alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabAlignment {
    /// Left-aligned tab, the RTF default with no control word
    #[default]
    Left,
    /// Right-aligned tab
    Right,
    /// Centered tab
    Center,
    /// Decimal tab (align on decimal point)
    Decimal,
}

impl TabAlignment {
    #[inline]
    pub fn control_word(self) -> Option<&'static str> {
        match self {
            Self::Left => None,
            Self::Right => Some("tqr"),
            Self::Center => Some("tqc"),
            Self::Decimal => Some("tqdec"),
        }
    }
}

/// Tab stop leader character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabLeader {
    /// No leader
    #[default]
    None,
    /// Dot leader (........)
    Dot,
    /// Hyphen leader (--------)
    Hyphen,
    /// Underscore leader (________)
    Underscore,
    /// Thick line leader
    ThickLine,
    /// Equal sign leader (========)
    Equal,
}

impl TabLeader {
    #[inline]
    pub fn control_word(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Dot => Some("tldot"),
            Self::Hyphen => Some("tlhyph"),
            Self::Underscore => Some("tlul"),
            Self::ThickLine => Some("tlth"),
            Self::Equal => Some("tleq"),
        }
    }
}

/// Tab stop definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabStop {
    /// Position (in twips from left margin)
    pub position: i32,
    /// Alignment
    pub alignment: TabAlignment,
    /// Leader character
    pub leader: TabLeader,
}

impl TabStop {
    /// Create a new left-aligned tab stop without leader
    #[inline]
    pub fn new(position: i32) -> Self {
        Self {
            position,
            alignment: TabAlignment::default(),
            leader: TabLeader::default(),
        }
    }

    /// Create a right-aligned tab stop
    #[inline]
    pub fn right(position: i32) -> Self {
        Self::new(position).with_alignment(TabAlignment::Right)
    }

    /// Create a centered tab stop
    #[inline]
    pub fn center(position: i32) -> Self {
        Self::new(position).with_alignment(TabAlignment::Center)
    }

    /// Create a decimal tab stop
    #[inline]
    pub fn decimal(position: i32) -> Self {
        Self::new(position).with_alignment(TabAlignment::Decimal)
    }

    #[inline]
    pub fn with_alignment(mut self, alignment: TabAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    #[inline]
    pub fn with_leader(mut self, leader: TabLeader) -> Self {
        self.leader = leader;
        self
    }
}
