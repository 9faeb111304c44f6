//! RTF (Rich Text Format) writer module.
//!
//! This module builds RTF documents from an immutable document tree and fills
//! placeholders in existing RTF files.
//!
//! # Architecture
//!
//! The writer is organized into several components:
//! - **Escape**: Turns arbitrary text into safe RTF character data
//! - **Headers**: Font, color and style tables referenced by index
//! - **Document**: Sections, paragraphs, table rows and inline runs
//! - **Writer**: Streams the tree to any [`std::io::Write`] sink in document order
//! - **Template**: Placeholder substitution on raw RTF text
//!
//! # Example
//!
//! ```rust
//! use rtfkit::rtf::{Color, Document, Headers, Paragraph, Section, TextRun};
//!
//! let headers = Headers::builder().color(Color::RED.at(1)?).build();
//! let doc = Document::builder()
//!     .headers(headers)
//!     .section(Section::new([
//!         Paragraph::p([TextRun::text("Hello "), TextRun::text("World").bold().color(1)]),
//!     ])?)
//!     .build()?;
//!
//! let rtf = doc.to_rtf_string();
//! assert!(rtf.starts_with("{\\rtf1\\ansi\\deff0"));
//! # Ok::<(), rtfkit::common::Error>(())
//! ```

mod border;
mod docfmt;
mod document;
mod escape;
mod field;
mod header;
mod info;
mod paragraph;
mod picture;
mod section;
mod table;
mod template;
mod types;
mod writer;

#[cfg(test)]
mod tests;

// Re-exports
pub use border::{Border, BorderSide, BorderStyle, TabAlignment, TabLeader, TabStop};
pub use docfmt::{DocFormat, FootnoteNumbering, NoteKind, Paper};
pub use document::{Document, DocumentBuilder};
pub use escape::{escape, escape_into};
pub use field::{DEFAULT_FIELD_RESULT, Field, FieldModifiers, Hyperlink};
pub use header::{
    CharSet, Color, ColorRef, FontFamily, FontRef, HeaderColor, HeaderFont, HeaderStyle, Headers,
    HeadersBuilder, Pitch,
};
pub use info::DocumentInfo;
pub use paragraph::{Alignment, LineSpacing, Paragraph, ParagraphFormat, TextParagraph};
pub use picture::{ImageType, Picture, PictureType, detect_image_type};
pub use section::{
    HeaderFooterKind, Section, SectionBreakType, SectionFormat, VerticalAlignment,
};
pub use table::{Cell, Row, RowFormat};
pub use template::{DEFAULT_DELIMITER, Template};
pub use types::{Format, SpecialChar, TextRun};
pub use writer::{RtfWriter, WriterOptions};
