//! rtfkit - A Rust library for writing Rich Text Format documents
//!
//! This library builds RTF documents from a typed, immutable document tree and
//! fills placeholders in existing RTF files.
//!
//! # Features
//!
//! - **Document model**: Sections, paragraphs, table rows, inline formatting,
//!   fields, hyperlinks, footnotes and pictures
//! - **Header tables**: Fonts, colors and styles referenced by index
//! - **Streaming writer**: Serializes to any [`std::io::Write`] sink in one pass
//! - **Safe escaping**: Caller text can never break the group structure
//! - **Templates**: `%%KEY%%` placeholder substitution in existing RTF files
//!
//! # Example - Writing a document
//!
//! ```no_run
//! use rtfkit::rtf::{Document, DocumentInfo, HeaderFont, Headers, Paragraph, Row, Section, TextRun};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let headers = Headers::builder()
//!     .font(HeaderFont::new(HeaderFont::ARIAL).at(1)?)
//!     .build();
//!
//! let section = Section::new([
//!     Paragraph::pard([TextRun::text("Invoice").bold().font(1).font_size(32)]),
//!     Paragraph::from(Row::new(["Item", "Qty", "Price"])?),
//! ])?;
//!
//! let doc = Document::builder()
//!     .headers(headers)
//!     .info(DocumentInfo::new().with_title("Invoice"))
//!     .section(section)
//!     .build()?;
//!
//! doc.save("invoice.rtf")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Filling a template
//!
//! ```no_run
//! use rtfkit::rtf::Template;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut template = Template::open("letter.rtf")?;
//! template.inject("NAME", "Ann").inject("DATE", "2024-05-01");
//! template.save("letter-ann.rtf")?;
//! # Ok(())
//! # }
//! ```

/// Common types and utilities
///
/// Error types, length units and the Windows-1252 codec.
pub mod common;

/// RTF document writer and template engine
pub mod rtf;

// Re-export commonly used types for convenience
pub use common::{Error, Result};
pub use rtf::{Document, Paragraph, RtfWriter, Section, Template, TextRun};
