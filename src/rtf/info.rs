//! RTF document information and properties.
//!
//! This module provides the `{\info ...}` block: title, author, subject,
//! keywords, timestamps, statistics and other document properties.

use chrono::{Datelike, NaiveDateTime, Timelike};

/// Document information/metadata
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentInfo {
    /// Document title
    pub title: Option<String>,
    /// Document subject
    pub subject: Option<String>,
    /// Document author
    pub author: Option<String>,
    /// Document manager
    pub manager: Option<String>,
    /// Company name
    pub company: Option<String>,
    /// Operator (last person to modify)
    pub operator: Option<String>,
    /// Document category
    pub category: Option<String>,
    /// Keywords
    pub keywords: Option<String>,
    /// Comments
    pub comment: Option<String>,
    /// Document comment, shown as the text of the comments box
    pub doc_comment: Option<String>,
    /// Document version
    pub version: Option<i32>,
    /// Internal revision number
    pub revision: Option<i32>,
    /// Creation time
    pub creation_time: Option<NaiveDateTime>,
    /// Revision time (last modified)
    pub revision_time: Option<NaiveDateTime>,
    /// Print time (last printed)
    pub print_time: Option<NaiveDateTime>,
    /// Backup time
    pub backup_time: Option<NaiveDateTime>,
    /// Total editing time (in minutes)
    pub editing_time: Option<i32>,
    /// Number of pages
    pub pages: Option<i32>,
    /// Number of words
    pub words: Option<i32>,
    /// Number of characters
    pub characters: Option<i32>,
    /// Number of characters including spaces
    pub characters_with_spaces: Option<i32>,
    /// Document ID (internal identifier)
    pub id: Option<i32>,
}

impl DocumentInfo {
    /// Create a new document info
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title
    #[inline]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the author
    #[inline]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the subject
    #[inline]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    #[inline]
    pub fn with_manager(mut self, manager: impl Into<String>) -> Self {
        self.manager = Some(manager.into());
        self
    }

    #[inline]
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    #[inline]
    pub fn with_operator(mut self, operator: impl Into<String>) -> Self {
        self.operator = Some(operator.into());
        self
    }

    #[inline]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set keywords
    #[inline]
    pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    /// Set comments
    #[inline]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    #[inline]
    pub fn with_doc_comment(mut self, comment: impl Into<String>) -> Self {
        self.doc_comment = Some(comment.into());
        self
    }

    #[inline]
    pub fn with_version(mut self, version: i32) -> Self {
        self.version = Some(version);
        self
    }

    #[inline]
    pub fn with_revision(mut self, revision: i32) -> Self {
        self.revision = Some(revision);
        self
    }

    /// Set the creation time
    #[inline]
    pub fn with_creation_time(mut self, time: NaiveDateTime) -> Self {
        self.creation_time = Some(time);
        self
    }

    #[inline]
    pub fn with_revision_time(mut self, time: NaiveDateTime) -> Self {
        self.revision_time = Some(time);
        self
    }

    #[inline]
    pub fn with_print_time(mut self, time: NaiveDateTime) -> Self {
        self.print_time = Some(time);
        self
    }

    #[inline]
    pub fn with_backup_time(mut self, time: NaiveDateTime) -> Self {
        self.backup_time = Some(time);
        self
    }

    #[inline]
    pub fn with_editing_time(mut self, minutes: i32) -> Self {
        self.editing_time = Some(minutes);
        self
    }

    #[inline]
    pub fn with_pages(mut self, pages: i32) -> Self {
        self.pages = Some(pages);
        self
    }

    #[inline]
    pub fn with_words(mut self, words: i32) -> Self {
        self.words = Some(words);
        self
    }

    #[inline]
    pub fn with_characters(mut self, characters: i32) -> Self {
        self.characters = Some(characters);
        self
    }

    #[inline]
    pub fn with_characters_with_spaces(mut self, characters: i32) -> Self {
        self.characters_with_spaces = Some(characters);
        self
    }

    #[inline]
    pub fn with_id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    /// Text entries as `(destination, value)`, in output order.
    pub(crate) fn text_entries(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("title", &self.title),
            ("subject", &self.subject),
            ("author", &self.author),
            ("manager", &self.manager),
            ("company", &self.company),
            ("operator", &self.operator),
            ("category", &self.category),
            ("keywords", &self.keywords),
            ("comment", &self.comment),
            ("doccomm", &self.doc_comment),
        ]
        .into_iter()
        .filter_map(|(word, value)| value.as_deref().map(|v| (word, v)))
    }

    /// Timestamp entries, in output order.
    pub(crate) fn time_entries(&self) -> impl Iterator<Item = (&'static str, RtfTime)> {
        [
            ("creatim", self.creation_time),
            ("revtim", self.revision_time),
            ("printim", self.print_time),
            ("buptim", self.backup_time),
        ]
        .into_iter()
        .filter_map(|(word, value)| value.map(|v| (word, RtfTime::from(v))))
    }

    /// Numeric entries, in output order.
    pub(crate) fn numeric_entries(&self) -> impl Iterator<Item = (&'static str, i32)> {
        [
            ("version", self.version),
            ("vern", self.revision),
            ("edmins", self.editing_time),
            ("nofpages", self.pages),
            ("nofwords", self.words),
            ("nofchars", self.characters),
            ("nofcharsws", self.characters_with_spaces),
            ("id", self.id),
        ]
        .into_iter()
        .filter_map(|(word, value)| value.map(|v| (word, v)))
    }

    /// Whether no entry is set, in which case no info group is written.
    pub fn is_empty(&self) -> bool {
        self.text_entries().next().is_none()
            && self.time_entries().next().is_none()
            && self.numeric_entries().next().is_none()
    }
}

/// Timestamp split into the RTF `\yr \mo \dy \hr \min \sec` parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RtfTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl RtfTime {
    /// Control words with their values, in output order.
    pub fn parts(self) -> [(&'static str, i32); 6] {
        [
            ("yr", self.year),
            ("mo", self.month as i32),
            ("dy", self.day as i32),
            ("hr", self.hour as i32),
            ("min", self.minute as i32),
            ("sec", self.second as i32),
        ]
    }
}

impl From<NaiveDateTime> for RtfTime {
    fn from(time: NaiveDateTime) -> Self {
        Self {
            year: time.year(),
            month: time.month(),
            day: time.day(),
            hour: time.hour(),
            minute: time.minute(),
            second: time.second(),
        }
    }
}
