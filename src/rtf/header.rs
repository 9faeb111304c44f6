//! RTF header tables: fonts, colors and styles.
//!
//! Header entries are collected by a [`HeadersBuilder`] and frozen into an
//! immutable [`Headers`] value. Body content references entries only by
//! index; the writer resolves nothing and emits the indices verbatim.

use crate::common::{Error, Result};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Font reference (index into font table).
pub type FontRef = u16;

/// Color reference (index into color table). Index 0 is the AUTO color.
pub type ColorRef = u8;

/// Font family categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontFamily {
    /// Unknown or default fonts
    #[default]
    Nil,
    /// Roman, proportionally spaced serif fonts, e.g. Times New Roman
    Roman,
    /// Swiss, proportionally spaced sans serif fonts, e.g. Arial
    Swiss,
    /// Fixed-pitch serif and sans serif fonts, e.g. Courier New
    Modern,
    /// Script fonts
    Script,
    /// Decorative fonts
    Decor,
    /// Technical, symbol, and mathematical fonts
    Tech,
    /// Arabic, Hebrew, or other bidirectional fonts
    Bidi,
}

impl FontFamily {
    /// Control word selecting this family in the font table.
    #[inline]
    pub fn control_word(self) -> &'static str {
        match self {
            Self::Nil => "fnil",
            Self::Roman => "froman",
            Self::Swiss => "fswiss",
            Self::Modern => "fmodern",
            Self::Script => "fscript",
            Self::Decor => "fdecor",
            Self::Tech => "ftech",
            Self::Bidi => "fbidi",
        }
    }
}

/// RTF character set of a font (`\fcharsetN`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum CharSet {
    #[default]
    Ansi = 0,
    Default = 1,
    Symbol = 2,
    Mac = 77,
    ShiftJis = 128,
    Hangul = 129,
    Johab = 130,
    Gb2312 = 134,
    Big5 = 136,
    Greek = 161,
    Turkish = 162,
    Vietnamese = 163,
    Hebrew = 177,
    Arabic = 178,
    ArabicTraditional = 179,
    ArabicUser = 180,
    HebrewUser = 181,
    Baltic = 186,
    Cyrillic = 204,
    Thai = 222,
    EasternEurope = 238,
    Pc437 = 254,
    Oem = 255,
}

impl CharSet {
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Pitch of a font (`\fprqN`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Pitch {
    #[default]
    Default = 0,
    Fixed = 1,
    Variable = 2,
}

impl Pitch {
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Font definition for the font table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderFont {
    pub(crate) index: FontRef,
    pub(crate) name: String,
    pub(crate) family: FontFamily,
    pub(crate) charset: CharSet,
    pub(crate) pitch: Option<Pitch>,
}

impl HeaderFont {
    pub const COURIER: &'static str = "Courier";
    pub const ARIAL: &'static str = "Arial";
    pub const HELVETICA: &'static str = "Arial";
    pub const SYMBOL: &'static str = "Symbol";
    pub const TIMES_ROMAN: &'static str = "Times New Roman";
    pub const WINGDINGS: &'static str = "Wingdings";

    /// Create a font definition at index 0 with ANSI charset and nil family.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            index: 0,
            name: name.into(),
            family: FontFamily::Nil,
            charset: CharSet::Ansi,
            pitch: None,
        }
    }

    #[inline]
    pub fn family(mut self, family: FontFamily) -> Self {
        self.family = family;
        self
    }

    #[inline]
    pub fn charset(mut self, charset: CharSet) -> Self {
        self.charset = charset;
        self
    }

    #[inline]
    pub fn pitch(mut self, pitch: Pitch) -> Self {
        self.pitch = Some(pitch);
        self
    }

    /// Place this font at `index` in the font table.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidFontIndex`] for negative or out-of-range numbers.
    pub fn at(mut self, index: i32) -> Result<Self> {
        self.index = FontRef::try_from(index).map_err(|_| Error::InvalidFontIndex(index))?;
        Ok(self)
    }

    #[inline]
    pub fn index(&self) -> FontRef {
        self.index
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// RTF color representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Color {
    /// Red component (0-255)
    pub red: u8,
    /// Green component (0-255)
    pub green: u8,
    /// Blue component (0-255)
    pub blue: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const RED: Color = Color::new(255, 0, 0);
    pub const GREEN: Color = Color::new(0, 255, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);

    /// Create a new color.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Place this color at `index` in the color table.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidColorIndex`] unless `1 <= index <= 255`. Index 0 is
    /// reserved for the AUTO color.
    pub fn at(self, index: i32) -> Result<HeaderColor> {
        if !(1..=255).contains(&index) {
            return Err(Error::InvalidColorIndex(index));
        }
        Ok(HeaderColor {
            index: index as ColorRef,
            color: self,
        })
    }
}

/// A color bound to a color table slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderColor {
    index: ColorRef,
    color: Color,
}

impl HeaderColor {
    #[inline]
    pub fn index(&self) -> ColorRef {
        self.index
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }
}

/// A named paragraph style for the stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HeaderStyle {
    id: u16,
    name: Cow<'static, str>,
}

impl HeaderStyle {
    pub const NORMAL: HeaderStyle = HeaderStyle::builtin(0, "Normal");
    pub const HEADING_1: HeaderStyle = HeaderStyle::builtin(1, "Heading 1");
    pub const HEADING_2: HeaderStyle = HeaderStyle::builtin(2, "Heading 2");
    pub const HEADING_3: HeaderStyle = HeaderStyle::builtin(3, "Heading 3");
    pub const HEADING_4: HeaderStyle = HeaderStyle::builtin(4, "Heading 4");
    pub const HEADING_5: HeaderStyle = HeaderStyle::builtin(5, "Heading 5");

    const fn builtin(id: u16, name: &'static str) -> Self {
        Self {
            id,
            name: Cow::Borrowed(name),
        }
    }

    /// Create a custom paragraph style.
    pub fn new(id: u16, name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    #[inline]
    pub fn id(&self) -> u16 {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Frozen header tables handed to the writer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    fonts: Vec<HeaderFont>,
    colors: BTreeMap<ColorRef, Color>,
    styles: Vec<HeaderStyle>,
}

impl Headers {
    #[inline]
    pub fn builder() -> HeadersBuilder {
        HeadersBuilder::default()
    }

    /// Fonts in insertion order.
    #[inline]
    pub fn fonts(&self) -> &[HeaderFont] {
        &self.fonts
    }

    /// Number of slots in the rendered color table.
    ///
    /// Spans index 0 through the highest registered index; 0 when no color
    /// was registered.
    pub fn color_slots(&self) -> usize {
        self.colors
            .keys()
            .next_back()
            .map_or(0, |max| usize::from(*max) + 1)
    }

    /// Color at `index`, `None` for AUTO and placeholder slots.
    #[inline]
    pub fn color(&self, index: ColorRef) -> Option<Color> {
        self.colors.get(&index).copied()
    }

    /// Styles in first-insertion order, without duplicates.
    #[inline]
    pub fn styles(&self) -> &[HeaderStyle] {
        &self.styles
    }
}

/// Accumulates header entries.
///
/// Colors registered twice at the same index keep the last value. Fonts
/// registered twice at the same index keep the first slot and the last value.
/// Styles are de-duplicated.
#[derive(Debug, Clone, Default)]
pub struct HeadersBuilder {
    headers: Headers,
}

impl HeadersBuilder {
    pub fn font(mut self, font: HeaderFont) -> Self {
        let fonts = &mut self.headers.fonts;
        match fonts.iter_mut().find(|f| f.index == font.index) {
            Some(slot) => {
                log::warn!(
                    "font {} replaces '{}' at index {}",
                    font.name,
                    slot.name,
                    font.index
                );
                *slot = font;
            },
            None => fonts.push(font),
        }
        self
    }

    pub fn fonts(self, fonts: impl IntoIterator<Item = HeaderFont>) -> Self {
        fonts.into_iter().fold(self, Self::font)
    }

    pub fn color(mut self, color: HeaderColor) -> Self {
        if let Some(previous) = self.headers.colors.insert(color.index, color.color) {
            log::warn!(
                "color {:?} replaces {:?} at index {}",
                color.color,
                previous,
                color.index
            );
        }
        self
    }

    pub fn colors(self, colors: impl IntoIterator<Item = HeaderColor>) -> Self {
        colors.into_iter().fold(self, Self::color)
    }

    pub fn style(mut self, style: HeaderStyle) -> Self {
        if !self.headers.styles.contains(&style) {
            self.headers.styles.push(style);
        }
        self
    }

    pub fn styles(self, styles: impl IntoIterator<Item = HeaderStyle>) -> Self {
        styles.into_iter().fold(self, Self::style)
    }

    #[inline]
    pub fn build(self) -> Headers {
        self.headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_index_validation() {
        assert!(HeaderFont::new("Arial").at(3).is_ok());
        assert!(matches!(
            HeaderFont::new("Arial").at(-1),
            Err(Error::InvalidFontIndex(-1))
        ));
    }

    #[test]
    fn test_color_index_validation() {
        assert!(Color::RED.at(1).is_ok());
        assert!(Color::RED.at(255).is_ok());
        assert!(matches!(Color::RED.at(0), Err(Error::InvalidColorIndex(0))));
        assert!(matches!(
            Color::RED.at(256),
            Err(Error::InvalidColorIndex(256))
        ));
        assert!(Color::RED.at(-4).is_err());
    }

    #[test]
    fn test_color_slots_span_to_max_index() {
        let headers = Headers::builder()
            .color(Color::RED.at(2).unwrap())
            .color(Color::BLUE.at(5).unwrap())
            .build();
        assert_eq!(headers.color_slots(), 6);
        assert_eq!(headers.color(0), None);
        assert_eq!(headers.color(2), Some(Color::RED));
        assert_eq!(headers.color(3), None);
        assert_eq!(headers.color(5), Some(Color::BLUE));
    }

    #[test]
    fn test_color_last_write_wins() {
        let headers = Headers::builder()
            .color(Color::RED.at(1).unwrap())
            .color(Color::GREEN.at(1).unwrap())
            .build();
        assert_eq!(headers.color_slots(), 2);
        assert_eq!(headers.color(1), Some(Color::GREEN));
    }

    #[test]
    fn test_font_collision_keeps_first_slot() {
        let headers = Headers::builder()
            .font(HeaderFont::new("Arial").at(0).unwrap())
            .font(HeaderFont::new("Courier").at(1).unwrap())
            .font(HeaderFont::new("Symbol").at(0).unwrap())
            .build();
        let names: Vec<_> = headers.fonts().iter().map(HeaderFont::name).collect();
        assert_eq!(names, ["Symbol", "Courier"]);
    }

    #[test]
    fn test_styles_deduplicated_in_insertion_order() {
        let headers = Headers::builder()
            .style(HeaderStyle::HEADING_2)
            .style(HeaderStyle::NORMAL)
            .style(HeaderStyle::HEADING_2)
            .build();
        assert_eq!(
            headers.styles(),
            &[HeaderStyle::HEADING_2, HeaderStyle::NORMAL]
        );
    }

    #[test]
    fn test_empty_headers() {
        let headers = Headers::builder().build();
        assert!(headers.fonts().is_empty());
        assert_eq!(headers.color_slots(), 0);
        assert!(headers.styles().is_empty());
    }
}
