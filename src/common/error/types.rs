//! Error types for rtfkit.
//!
//! Configuration problems are reported where the offending value is built,
//! never deferred to write time. I/O failures of sources and sinks are wrapped
//! into [`Error::Io`].
use thiserror::Error;

/// Main error type for rtfkit operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error while reading a source or writing a sink
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Font numbers must not be negative
    #[error("Font number {0} is negative")]
    InvalidFontIndex(i32),

    /// Color indices must lie in 1..=255, index 0 is the AUTO color
    #[error("Color index {0} is out of range, has to be between 1 and 255")]
    InvalidColorIndex(i32),

    /// A table row needs at least one cell
    #[error("There has to be at least one cell in a row")]
    EmptyRow,

    /// A section needs at least one paragraph
    #[error("There has to be at least one paragraph in a section")]
    EmptySection,

    /// A document needs at least one section
    #[error("A document needs at least one paragraph")]
    EmptyDocument,

    /// Number of columns in a section must be positive
    #[error("Number of columns can't be <= 0, got {0}")]
    InvalidColumnCount(i32),

    /// Template delimiters must be non-empty ASCII punctuation
    #[error("Invalid template delimiter '{0}': must be non-empty ASCII punctuation")]
    InvalidDelimiter(String),

    /// Picture payload without any bytes
    #[error("Picture source is empty")]
    EmptyPicture,

    /// Automatic picture type detection found neither a PNG nor a JPEG signature
    #[error("Unsupported image type")]
    UnsupportedImageType,

    /// Unknown length unit in a parsed measurement
    #[error("Unknown length unit '{0}'")]
    UnknownUnit(String),
}

/// Result type for rtfkit operations.
pub type Result<T> = std::result::Result<T, Error>;
