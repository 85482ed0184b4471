//! Keys, page ranges, and unit records for the textbook data model.

use std::error::Error;
use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Deserializer, de};

/// Chapter identifier: the canonical decimal rendering of a chapter index.
///
/// Parsing is strict so that lookups stay exact-match: `"01"` and `" 1"` are
/// rejected rather than normalized to `"1"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChapterKey(u32);

impl ChapterKey {
    /// Parses the canonical decimal form: ASCII digits only, no sign, no
    /// surrounding whitespace, no leading zeros except `"0"` itself.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        parse_index(raw).map(Self)
    }

    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ChapterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lesson identifier: the composite form `chapter_<n>_lesson_<m>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LessonKey {
    pub chapter: ChapterKey,
    pub lesson: u32,
}

impl LessonKey {
    /// Parses the composite form with the same strict index rules as
    /// [`ChapterKey::parse`].
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let rest = raw.strip_prefix("chapter_")?;
        let (chapter_raw, lesson_raw) = rest.split_once("_lesson_")?;
        Some(Self {
            chapter: ChapterKey::parse(chapter_raw)?,
            lesson: parse_index(lesson_raw)?,
        })
    }
}

impl fmt::Display for LessonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "chapter_{}_lesson_{}", self.chapter, self.lesson)
    }
}

/// Strict decimal index: digits only, no leading zeros except `"0"`.
/// Guarantees that parse-then-display round-trips to the input.
pub(crate) fn parse_index(raw: &str) -> Option<u32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if raw.len() > 1 && raw.starts_with('0') {
        return None;
    }
    raw.parse().ok()
}

/// Inclusive page span. `end` absent means the unit spans only `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    start: u32,
    end: Option<u32>,
}

impl PageRange {
    /// # Errors
    /// Rejects a range whose `end` lies before its `start`.
    pub const fn new(start: u32, end: Option<u32>) -> Result<Self, InvalidPageRange> {
        match end {
            Some(last) if last < start => Err(InvalidPageRange { start, end: last }),
            _ => Ok(Self { start, end }),
        }
    }

    #[must_use]
    pub const fn start(self) -> u32 {
        self.start
    }

    #[must_use]
    pub const fn end(self) -> Option<u32> {
        self.end
    }

    /// The last page actually covered.
    #[must_use]
    pub fn last(self) -> u32 {
        self.end.unwrap_or(self.start)
    }

    /// Page numbers in ascending order.
    pub fn pages(self) -> RangeInclusive<u32> {
        self.start..=self.last()
    }

    /// Human-readable label: `"{start} - {end}"` for spans covering more
    /// than one page, `"{start}"` otherwise.
    #[must_use]
    pub fn label(self) -> String {
        let last = self.last();
        if last > self.start {
            format!("{} - {last}", self.start)
        } else {
            self.start.to_string()
        }
    }
}

impl<'de> Deserialize<'de> for PageRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Vec::<Option<u32>>::deserialize(deserializer)?;
        let (start, end) = match raw.as_slice() {
            [Some(start)] | [Some(start), None] => (*start, None),
            [Some(start), Some(end)] => (*start, Some(*end)),
            [None, ..] => return Err(de::Error::custom("page range start may not be null")),
            _ => {
                return Err(de::Error::invalid_length(
                    raw.len(),
                    &"a [start] or [start, end] pair",
                ));
            }
        };
        Self::new(start, end).map_err(de::Error::custom)
    }
}

/// Range whose `end` lies before its `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidPageRange {
    pub start: u32,
    pub end: u32,
}

impl fmt::Display for InvalidPageRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "page range ends before it starts: {} - {}",
            self.start, self.end
        )
    }
}

impl Error for InvalidPageRange {}

/// Chapter metadata as it appears in the chapters data file.
#[derive(Debug, Clone, Deserialize)]
pub struct ChapterRecord {
    pub chapter: String,
    pub title: String,
    pub description: String,
    pub pages: PageRange,
}

/// Lesson metadata as it appears in the lessons data file.
#[derive(Debug, Clone, Deserialize)]
pub struct LessonRecord {
    pub lesson: String,
    pub chapter_idx: String,
    pub title: String,
    pub description: String,
    pub pages: PageRange,
}

/// One extracted page as it appears in the pages data file. Extra fields
/// produced by the extraction pipeline are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct PageRecord {
    pub text: String,
}

/// A chapter with its eagerly assembled text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    pub key: ChapterKey,
    pub title: String,
    pub description: String,
    pub pages: PageRange,
    pub text: String,
}

/// A lesson with its owning chapter reference and eagerly assembled text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    pub key: LessonKey,
    pub chapter_idx: ChapterKey,
    pub title: String,
    pub description: String,
    pub pages: PageRange,
    pub text: String,
}
