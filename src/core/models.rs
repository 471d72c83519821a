use chrono::{DateTime, Duration, Utc};

/// The retention boundary for one run. Computed once from the clock and
/// shared read-only across categories.
#[derive(Debug, Clone, Copy)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub now: DateTime<Utc>,
}

impl TimeWindow {
    pub fn last(duration: Duration) -> Self {
        let now = Utc::now();
        Self {
            start: now - duration,
            now,
        }
    }

    pub fn admits(&self, published: DateTime<Utc>) -> bool {
        published > self.start
    }
}

/// One category's qualifying entries, serialized as concatenated
/// fixed-field records. Empty text is a valid outcome, not an error.
#[derive(Debug, Clone)]
pub struct RawBlock {
    pub category: String,
    pub text: String,
}

impl RawBlock {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// What the digest service produced for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryDigest {
    /// Formatted digest text, ready for the composer.
    Ready(String),
    /// Nothing notable in the window; the category is left out of the
    /// document.
    Empty,
}

/// The full outbound briefing before splitting. Sections are stored without
/// separators; `render` joins them, so the composer never has to trim a
/// trailing separator and the segmenter can split without scanning text.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub header: String,
    pub sections: Vec<String>,
}

impl Document {
    pub fn render(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(self.sections.len() + 1);
        if !self.header.is_empty() {
            parts.push(&self.header);
        }
        parts.extend(self.sections.iter().map(String::as_str));
        parts.join(crate::briefing::compose::SECTION_SEPARATOR)
    }
}

/// Rendering mode of one outbound message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    /// Telegram Markdown; the endpoint interprets formatting syntax.
    Markdown,
    /// Verbatim text; formatting syntax is inert.
    Plain,
}

/// One transmission unit produced by the segmenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub text: String,
    pub mode: ParseMode,
    pub index: usize,
}
