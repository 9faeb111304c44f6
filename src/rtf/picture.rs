//! RTF picture embedding.
//!
//! Image bytes are read eagerly and kept hex-encoded, the way they appear in
//! the `\pict` group. Only PNG and JPEG blips are written.

use crate::common::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Hex characters per line in the encoded payload.
const HEX_LINE_WIDTH: usize = 40;

/// Image type of an embedded picture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageType {
    /// PNG image (`\pngblip`)
    Png,
    /// JPEG image (`\jpegblip`)
    Jpeg,
}

impl ImageType {
    #[inline]
    pub fn control_word(self) -> &'static str {
        match self {
            Self::Png => "pngblip",
            Self::Jpeg => "jpegblip",
        }
    }
}

/// Declared picture type, or a request to sniff it from the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PictureType {
    #[default]
    Automatic,
    Png,
    Jpeg,
}

/// Best-effort sniff over two fixed offsets.
///
/// A `JFIF` marker at bytes 6..10 means JPEG, a `PNG` fragment at bytes 1..4
/// means PNG. Anything else, including JPEGs without a JFIF header, is not
/// recognized.
pub fn detect_image_type(data: &[u8]) -> Option<ImageType> {
    if data.get(6..10) == Some(b"JFIF".as_slice()) {
        return Some(ImageType::Jpeg);
    }
    if data.get(1..4) == Some(b"PNG".as_slice()) {
        return Some(ImageType::Png);
    }
    None
}

/// Picture ready to be embedded as a text run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picture {
    image_type: ImageType,
    hex: String,
    /// Goal width in twips
    width: Option<i32>,
    /// Goal height in twips
    height: Option<i32>,
    /// Horizontal scaling percentage
    scale_x: Option<i32>,
    /// Vertical scaling percentage
    scale_y: Option<i32>,
}

impl Picture {
    /// Create a picture from raw image bytes.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyPicture`] for an empty payload,
    /// [`Error::UnsupportedImageType`] if `picture_type` is automatic and the
    /// payload matches no known signature.
    pub fn from_bytes(data: &[u8], picture_type: PictureType) -> Result<Self> {
        if data.is_empty() {
            return Err(Error::EmptyPicture);
        }

        let image_type = match picture_type {
            PictureType::Png => ImageType::Png,
            PictureType::Jpeg => ImageType::Jpeg,
            PictureType::Automatic => detect_image_type(data).ok_or_else(|| {
                log::warn!("no PNG or JPEG signature in {} picture bytes", data.len());
                Error::UnsupportedImageType
            })?,
        };

        Ok(Self {
            image_type,
            hex: encode_hex(data),
            width: None,
            height: None,
            scale_x: None,
            scale_y: None,
        })
    }

    /// Drain `reader` fully and create a picture from its bytes.
    pub fn from_reader<R: Read>(mut reader: R, picture_type: PictureType) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data, picture_type)
    }

    /// Read an image file.
    pub fn open<P: AsRef<Path>>(path: P, picture_type: PictureType) -> Result<Self> {
        Self::from_reader(File::open(path)?, picture_type)
    }

    /// Goal width in twips.
    #[inline]
    pub fn width(mut self, twips: i32) -> Self {
        self.width = Some(twips);
        self
    }

    /// Goal height in twips.
    #[inline]
    pub fn height(mut self, twips: i32) -> Self {
        self.height = Some(twips);
        self
    }

    #[inline]
    pub fn size(self, width: i32, height: i32) -> Self {
        self.width(width).height(height)
    }

    /// Scaling in percent.
    #[inline]
    pub fn scale(mut self, x: i32, y: i32) -> Self {
        self.scale_x = Some(x);
        self.scale_y = Some(y);
        self
    }

    #[inline]
    pub fn scale_x(mut self, percent: i32) -> Self {
        self.scale_x = Some(percent);
        self
    }

    #[inline]
    pub fn scale_y(mut self, percent: i32) -> Self {
        self.scale_y = Some(percent);
        self
    }

    #[inline]
    pub fn image_type(&self) -> ImageType {
        self.image_type
    }

    /// Hex payload, lowercase, with a line break every 40 characters.
    #[inline]
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// Numeric size and scale controls, in output order.
    pub(crate) fn size_controls(&self) -> impl Iterator<Item = (&'static str, i32)> {
        [
            ("picwgoal", self.width),
            ("pichgoal", self.height),
            ("picscalex", self.scale_x),
            ("picscaley", self.scale_y),
        ]
        .into_iter()
        .filter_map(|(word, value)| value.map(|v| (word, v)))
    }
}

fn encode_hex(data: &[u8]) -> String {
    let hex_len = data.len() * 2;
    let mut out = String::with_capacity(hex_len + hex_len / HEX_LINE_WIDTH);
    for (i, byte) in data.iter().enumerate() {
        out.push(HEX_DIGITS[(byte >> 4) as usize] as char);
        out.push(HEX_DIGITS[(byte & 0x0F) as usize] as char);
        if (i + 1) * 2 % HEX_LINE_WIDTH == 0 {
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const PNG_HEAD: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00];
    const JFIF_HEAD: &[u8] = &[
        0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00,
    ];

    #[test]
    fn test_detect_png() {
        assert_eq!(detect_image_type(PNG_HEAD), Some(ImageType::Png));
    }

    #[test]
    fn test_detect_jpeg() {
        assert_eq!(detect_image_type(JFIF_HEAD), Some(ImageType::Jpeg));
    }

    #[test]
    fn test_detect_unknown() {
        assert_eq!(detect_image_type(b"BM\x00\x00\x00\x00\x00\x00\x00\x00"), None);
        assert_eq!(detect_image_type(b"GIF89a"), None);
        assert_eq!(detect_image_type(b"x"), None);
    }

    #[test]
    fn test_automatic_type_fails_without_signature() {
        let result = Picture::from_bytes(b"GIF89a\x01\x00\x01\x00", PictureType::Automatic);
        assert!(matches!(result, Err(Error::UnsupportedImageType)));
    }

    #[test]
    fn test_declared_type_skips_detection() {
        let picture = Picture::from_bytes(b"GIF89a", PictureType::Jpeg).unwrap();
        assert_eq!(picture.image_type(), ImageType::Jpeg);
    }

    #[test]
    fn test_empty_payload() {
        assert!(matches!(
            Picture::from_bytes(&[], PictureType::Png),
            Err(Error::EmptyPicture)
        ));
    }

    #[test]
    fn test_hex_line_breaks() {
        let data: Vec<u8> = (0u8..45).collect();
        let picture = Picture::from_bytes(&data, PictureType::Png).unwrap();
        let lines: Vec<&str> = picture.hex().split('\n').collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].len(), 40);
        assert_eq!(lines[1].len(), 40);
        assert_eq!(lines[2], "28292a2b2c");
        assert!(lines[0].starts_with("000102"));
    }

    #[test]
    fn test_exact_line_ends_with_break() {
        let picture = Picture::from_bytes(&[0xAB; 20], PictureType::Png).unwrap();
        assert_eq!(picture.hex(), format!("{}\n", "ab".repeat(20)));
    }

    #[test]
    fn test_size_controls_order() {
        let picture = Picture::from_bytes(PNG_HEAD, PictureType::Automatic)
            .unwrap()
            .scale(50, 75)
            .size(1440, 720);
        let controls: Vec<_> = picture.size_controls().collect();
        assert_eq!(
            controls,
            [
                ("picwgoal", 1440),
                ("pichgoal", 720),
                ("picscalex", 50),
                ("picscaley", 75)
            ]
        );
    }

    #[test]
    fn test_open_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(JFIF_HEAD).unwrap();
        file.flush().unwrap();

        let picture = Picture::open(file.path(), PictureType::Automatic).unwrap();
        assert_eq!(picture.image_type(), ImageType::Jpeg);
        assert_eq!(picture.hex(), "ffd8ffe000104a46494600");
    }
}
