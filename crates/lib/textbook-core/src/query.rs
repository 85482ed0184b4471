//! Read-only query operations over the assembled textbook.

use std::fmt;

use crate::model::{Chapter, ChapterKey, Lesson, LessonKey};
use crate::store::UnitStore;

/// Separator between entries in listing output.
const ENTRY_SEPARATOR: &str = "\n\n---\n\n";

/// Immutable query context: both unit stores with their derived text, built
/// once at startup and shared read-only for the process lifetime.
#[derive(Debug, Clone)]
pub struct Textbook {
    pub(crate) chapters: UnitStore<ChapterKey, Chapter>,
    pub(crate) lessons: UnitStore<LessonKey, Lesson>,
}

/// A lookup that matched nothing. This is a normal outcome, not a fault;
/// it is rendered to the transport's sentinel string only at the MCP
/// boundary so internal callers can match on it directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotFound {
    Chapter { requested: String },
    Lesson { requested: String },
    LessonsForChapter { requested: String },
}

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chapter { requested } => {
                write!(f, "Chapter {requested} not found in the textbook database.")
            }
            Self::Lesson { requested } => {
                write!(f, "Lesson {requested} not found in the textbook database.")
            }
            Self::LessonsForChapter { requested } => {
                write!(f, "No lessons found for chapter {requested}.")
            }
        }
    }
}

impl Textbook {
    pub(crate) fn new(
        chapters: UnitStore<ChapterKey, Chapter>,
        lessons: UnitStore<LessonKey, Lesson>,
    ) -> Self {
        Self { chapters, lessons }
    }

    /// Full text of one chapter: title, blank line, assembled page blocks.
    ///
    /// # Errors
    /// [`NotFound::Chapter`] when the key is unknown or not in canonical
    /// form; the reason carries the requested key verbatim.
    pub fn chapter_text(&self, chapter_number: &str) -> Result<String, NotFound> {
        let chapter = ChapterKey::parse(chapter_number)
            .and_then(|key| self.chapters.get(key))
            .ok_or_else(|| NotFound::Chapter {
                requested: chapter_number.to_string(),
            })?;
        Ok(format!("{}\n\n{}", chapter.title, chapter.text))
    }

    /// Full text of one lesson: title, description, assembled page blocks.
    /// The description is surfaced here because it is not duplicated in the
    /// lesson body.
    ///
    /// # Errors
    /// [`NotFound::Lesson`] when the key is unknown or malformed.
    pub fn lesson_text(&self, lesson_key: &str) -> Result<String, NotFound> {
        let lesson = LessonKey::parse(lesson_key)
            .and_then(|key| self.lessons.get(key))
            .ok_or_else(|| NotFound::Lesson {
                requested: lesson_key.to_string(),
            })?;
        Ok(format!(
            "{}\n\n{}\n\n{}",
            lesson.title, lesson.description, lesson.text
        ))
    }

    /// Summary of every chapter in load order; an empty store yields an
    /// empty string.
    #[must_use]
    pub fn list_chapters(&self) -> String {
        let entries: Vec<String> = self.chapters.units().map(chapter_summary).collect();
        entries.join(ENTRY_SEPARATOR)
    }

    /// Count-prefixed summary of every lesson in load order.
    #[must_use]
    pub fn list_lessons(&self) -> String {
        let entries: Vec<String> = self.lessons.units().map(lesson_summary).collect();
        format!(
            "Total lessons: {}\n\n{}",
            self.lessons.len(),
            entries.join(ENTRY_SEPARATOR)
        )
    }

    /// Summaries of the lessons tagged with exactly this chapter index.
    ///
    /// # Errors
    /// [`NotFound::LessonsForChapter`] when the filter matches nothing,
    /// which includes non-canonical indices such as `"01"` or `" 1"`.
    pub fn lessons_for_chapter(&self, chapter_idx: &str) -> Result<String, NotFound> {
        let entries: Vec<String> = ChapterKey::parse(chapter_idx).map_or_else(Vec::new, |key| {
            self.lessons
                .units()
                .filter(|lesson| lesson.chapter_idx == key)
                .map(lesson_summary)
                .collect()
        });
        if entries.is_empty() {
            return Err(NotFound::LessonsForChapter {
                requested: chapter_idx.to_string(),
            });
        }
        Ok(entries.join(ENTRY_SEPARATOR))
    }
}

fn chapter_summary(chapter: &Chapter) -> String {
    format!(
        "Chapter {}: {}\nDescription: {}\nPages: {}",
        chapter.key,
        chapter.title,
        chapter.description,
        chapter.pages.label()
    )
}

fn lesson_summary(lesson: &Lesson) -> String {
    format!(
        "Lesson {}: {}\nDescription: {}\nPages: {}",
        lesson.key,
        lesson.title,
        lesson.description,
        lesson.pages.label()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PageRange;

    fn chapter(key: u32, title: &str, start: u32, end: Option<u32>) -> (ChapterKey, Chapter) {
        let key = ChapterKey::parse(&key.to_string()).expect("canonical key");
        let pages = PageRange::new(start, end).expect("valid range");
        (
            key,
            Chapter {
                key,
                title: title.to_string(),
                description: format!("About {title}."),
                pages,
                text: format!("--- Page {start} ---\nbody of {title}"),
            },
        )
    }

    fn lesson(raw_key: &str, chapter_idx: &str, title: &str) -> (LessonKey, Lesson) {
        let key = LessonKey::parse(raw_key).expect("canonical key");
        let chapter_idx = ChapterKey::parse(chapter_idx).expect("canonical index");
        (
            key,
            Lesson {
                key,
                chapter_idx,
                title: title.to_string(),
                description: format!("About {title}."),
                pages: PageRange::new(1, None).expect("valid range"),
                text: format!("--- Page 1 ---\nbody of {title}"),
            },
        )
    }

    fn textbook() -> Textbook {
        let chapters = UnitStore::build([
            chapter(1, "New Friends", 38, Some(57)),
            chapter(10, "Winter Vacation Plans", 228, Some(249)),
        ])
        .expect("unique chapter keys");
        let lessons = UnitStore::build([
            lesson("chapter_1_lesson_1", "1", "Introducing Yourself"),
            lesson("chapter_1_lesson_2", "1", "Telling Time"),
            lesson("chapter_10_lesson_1", "10", "Comparisons"),
        ])
        .expect("unique lesson keys");
        Textbook::new(chapters, lessons)
    }

    #[test]
    fn chapter_text_is_title_then_body() {
        let text = textbook().chapter_text("1").expect("chapter exists");
        assert_eq!(text, "New Friends\n\n--- Page 38 ---\nbody of New Friends");
    }

    #[test]
    fn lesson_text_includes_description() {
        let text = textbook()
            .lesson_text("chapter_1_lesson_2")
            .expect("lesson exists");
        assert!(text.starts_with("Telling Time\n\nAbout Telling Time.\n\n--- Page 1 ---"));
    }

    #[test]
    fn unknown_chapter_reports_the_requested_key() {
        let err = textbook().chapter_text("99").expect_err("no such chapter");
        assert_eq!(
            err,
            NotFound::Chapter {
                requested: "99".to_string()
            }
        );
        assert!(err.to_string().contains("99"));
    }

    #[test]
    fn non_canonical_chapter_key_is_not_found() {
        let err = textbook().chapter_text("01").expect_err("not normalized");
        assert!(err.to_string().contains("01"));
    }

    #[test]
    fn unknown_lesson_reports_the_requested_key() {
        let err = textbook()
            .lesson_text("chapter_9_lesson_9")
            .expect_err("no such lesson");
        assert!(err.to_string().contains("chapter_9_lesson_9"));
    }

    #[test]
    fn list_chapters_joins_summaries_in_load_order() {
        let listing = textbook().list_chapters();
        let first = listing.find("Chapter 1: New Friends").expect("chapter 1");
        let second = listing
            .find("Chapter 10: Winter Vacation Plans")
            .expect("chapter 10");
        assert!(first < second);
        assert!(listing.contains("Pages: 38 - 57"));
        assert!(listing.contains(ENTRY_SEPARATOR));
    }

    #[test]
    fn list_chapters_on_empty_store_is_empty() {
        let empty = Textbook::new(
            UnitStore::build([]).expect("empty"),
            UnitStore::build([]).expect("empty"),
        );
        assert_eq!(empty.list_chapters(), "");
    }

    #[test]
    fn list_lessons_is_count_prefixed() {
        let listing = textbook().list_lessons();
        assert!(listing.starts_with("Total lessons: 3\n\n"));
        assert!(listing.contains("Lesson chapter_1_lesson_2: Telling Time"));
    }

    #[test]
    fn chapter_filter_is_exact_match() {
        let book = textbook();
        let chapter_one = book.lessons_for_chapter("1").expect("two lessons");
        assert!(chapter_one.contains("chapter_1_lesson_1"));
        assert!(chapter_one.contains("chapter_1_lesson_2"));
        assert!(!chapter_one.contains("chapter_10_lesson_1"));

        let chapter_ten = book.lessons_for_chapter("10").expect("one lesson");
        assert!(chapter_ten.contains("chapter_10_lesson_1"));
        assert!(!chapter_ten.contains("chapter_1_lesson_1"));
    }

    #[test]
    fn empty_chapter_filter_is_not_found() {
        let err = textbook()
            .lessons_for_chapter("7")
            .expect_err("no lessons tagged 7");
        assert_eq!(
            err,
            NotFound::LessonsForChapter {
                requested: "7".to_string()
            }
        );
    }

    #[test]
    fn malformed_chapter_filter_is_not_found() {
        assert!(textbook().lessons_for_chapter("01").is_err());
        assert!(textbook().lessons_for_chapter(" 1").is_err());
    }
}
