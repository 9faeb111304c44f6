//! RTF field support (hyperlinks, page numbers, table of contents, etc.).
//!
//! RTF fields are structured as:
//! `{\field<modifiers>{\*\fldinst INSTRUCTION}{\fldrslt RESULT}}`
//!
//! The instruction is arbitrary paragraph content. The result holds the
//! last computed value that readers display until the field is refreshed.

use super::paragraph::Paragraph;
use bitflags::bitflags;

bitflags! {
    /// Field modifiers written right after `\field`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct FieldModifiers: u8 {
        /// Result must be recalculated (`\flddirty`)
        const DIRTY = 0b0001;
        /// Result was edited (`\fldedit`)
        const EDITED = 0b0010;
        /// Field is locked against updates (`\fldlock`)
        const LOCKED = 0b0100;
        /// Result is not displayable (`\fldpriv`)
        const PRIVATE = 0b1000;
    }
}

impl FieldModifiers {
    /// Control words of the set flags, in a fixed order.
    pub fn control_words(self) -> impl Iterator<Item = &'static str> {
        [
            (Self::DIRTY, "flddirty"),
            (Self::EDITED, "fldedit"),
            (Self::LOCKED, "fldlock"),
            (Self::PRIVATE, "fldpriv"),
        ]
        .into_iter()
        .filter(move |(flag, _)| self.contains(*flag))
        .map(|(_, word)| word)
    }
}

/// Result text shown until the reader updates a generated field.
pub const DEFAULT_FIELD_RESULT: &str = "Refresh 'F9'";

/// A field with instruction and optional cached result.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    instruction: Box<Paragraph>,
    result: Option<Box<Paragraph>>,
    modifiers: FieldModifiers,
}

impl Field {
    /// Create a field without cached result.
    pub fn new(instruction: impl Into<Paragraph>) -> Self {
        Self {
            instruction: Box::new(instruction.into()),
            result: None,
            modifiers: FieldModifiers::empty(),
        }
    }

    /// Create a field whose result prompts the reader to refresh it.
    pub fn with_default_result(instruction: impl Into<Paragraph>) -> Self {
        Self::new(instruction).with_result(DEFAULT_FIELD_RESULT)
    }

    #[inline]
    pub fn with_result(mut self, result: impl Into<Paragraph>) -> Self {
        self.result = Some(Box::new(result.into()));
        self
    }

    #[inline]
    pub fn with_modifiers(mut self, modifiers: FieldModifiers) -> Self {
        self.modifiers |= modifiers;
        self
    }

    /// Current time, formatted by a date-time picture such as `HH:mm`.
    pub fn time(format: &str) -> Self {
        Self::with_default_result(format!("time \\@ \"{format}\""))
    }

    /// Number of the current page.
    pub fn page_number() -> Self {
        Self::with_default_result("PAGE")
    }

    /// Number of pages in the current section.
    pub fn section_pages() -> Self {
        Self::with_default_result("SECTIONPAGES")
    }

    /// Author from the document info block.
    pub fn author() -> Self {
        Self::with_default_result("AUTHOR")
    }

    /// Table of contents built from headings 1 to 5 as hyperlinks.
    pub fn table_of_contents() -> Self {
        Self::with_default_result("TOC \\f \\h \\u \\o \"1-5\" ")
    }

    #[inline]
    pub fn instruction(&self) -> &Paragraph {
        &self.instruction
    }

    #[inline]
    pub fn result(&self) -> Option<&Paragraph> {
        self.result.as_deref()
    }

    #[inline]
    pub fn modifiers(&self) -> FieldModifiers {
        self.modifiers
    }
}

/// Hyperlink field with underlined visible text.
#[derive(Debug, Clone, PartialEq)]
pub struct Hyperlink {
    url: String,
    text: Box<Paragraph>,
}

impl Hyperlink {
    pub fn new(url: impl Into<String>, text: impl Into<Paragraph>) -> Self {
        Self {
            url: url.into(),
            text: Box::new(text.into()),
        }
    }

    #[inline]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[inline]
    pub fn text(&self) -> &Paragraph {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_order() {
        let words: Vec<_> = (FieldModifiers::LOCKED | FieldModifiers::DIRTY)
            .control_words()
            .collect();
        assert_eq!(words, ["flddirty", "fldlock"]);
        assert_eq!(FieldModifiers::empty().control_words().count(), 0);
    }

    #[test]
    fn test_helpers_carry_default_result() {
        let field = Field::page_number();
        assert_eq!(field.instruction(), &Paragraph::p(["PAGE"]));
        assert_eq!(field.result(), Some(&Paragraph::p([DEFAULT_FIELD_RESULT])));
        assert!(Field::new("PAGE").result().is_none());
    }

    #[test]
    fn test_time_instruction() {
        assert_eq!(
            Field::time("HH:mm").instruction(),
            &Paragraph::p(["time \\@ \"HH:mm\""])
        );
    }
}
