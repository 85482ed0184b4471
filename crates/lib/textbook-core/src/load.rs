//! Startup loading of the three textbook data files.
//!
//! All loading happens once, synchronously, before any query is served. Any
//! missing or malformed input is fatal: the process must not start serving
//! with partial data.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::info;

use crate::assemble;
use crate::model::{
    self, Chapter, ChapterKey, ChapterRecord, Lesson, LessonKey, LessonRecord, PageRecord,
};
use crate::query::Textbook;
use crate::store::{PageStore, UnitStore};

/// Locations of the three startup data files.
#[derive(Debug, Clone)]
pub struct TextbookPaths {
    pub pages: PathBuf,
    pub chapters: PathBuf,
    pub lessons: PathBuf,
}

/// Fatal startup failure.
#[derive(Debug)]
pub enum LoadError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    InvalidPageKey {
        key: String,
    },
    InvalidChapterKey {
        key: String,
    },
    InvalidLessonKey {
        key: String,
    },
    InvalidChapterIdx {
        lesson: String,
        chapter_idx: String,
    },
    DuplicateChapter {
        key: ChapterKey,
    },
    DuplicateLesson {
        key: LessonKey,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "failed to parse {}: {source}", path.display())
            }
            Self::InvalidPageKey { key } => write!(f, "invalid page number key: {key:?}"),
            Self::InvalidChapterKey { key } => write!(f, "invalid chapter key: {key:?}"),
            Self::InvalidLessonKey { key } => write!(f, "invalid lesson key: {key:?}"),
            Self::InvalidChapterIdx {
                lesson,
                chapter_idx,
            } => {
                write!(f, "lesson {lesson} has an invalid chapter index: {chapter_idx:?}")
            }
            Self::DuplicateChapter { key } => write!(f, "duplicate chapter key: {key}"),
            Self::DuplicateLesson { key } => write!(f, "duplicate lesson key: {key}"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Reads all three data files and assembles every unit's text.
///
/// # Errors
/// Any missing or unreadable file, unparsable content, malformed key, or
/// duplicate unit key is fatal; the error names the offending path or key.
pub fn load_textbook(paths: &TextbookPaths) -> Result<Textbook, LoadError> {
    let pages: HashMap<String, PageRecord> = read_json(&paths.pages)?;
    let chapters: Vec<ChapterRecord> = read_json(&paths.chapters)?;
    let lessons: Vec<LessonRecord> = read_json(&paths.lessons)?;
    build_textbook(pages, chapters, lessons)
}

/// Builds the immutable query context from already-parsed records,
/// validating keys and eagerly assembling each unit's text.
///
/// # Errors
/// Rejects malformed page, chapter, or lesson keys and duplicate unit keys.
pub fn build_textbook(
    pages: impl IntoIterator<Item = (String, PageRecord)>,
    chapters: Vec<ChapterRecord>,
    lessons: Vec<LessonRecord>,
) -> Result<Textbook, LoadError> {
    let mut extracted = Vec::new();
    for (key, record) in pages {
        let Some(number) = model::parse_index(&key) else {
            return Err(LoadError::InvalidPageKey { key });
        };
        extracted.push((number, record.text));
    }
    let page_store = PageStore::new(extracted);

    let chapters = build_chapters(&page_store, chapters)?;
    let lessons = build_lessons(&page_store, lessons)?;

    info!(
        pages = page_store.len(),
        chapters = chapters.len(),
        lessons = lessons.len(),
        "textbook data loaded"
    );
    Ok(Textbook::new(chapters, lessons))
}

fn build_chapters(
    page_store: &PageStore,
    records: Vec<ChapterRecord>,
) -> Result<UnitStore<ChapterKey, Chapter>, LoadError> {
    let mut entries = Vec::with_capacity(records.len());
    for record in records {
        let Some(key) = ChapterKey::parse(&record.chapter) else {
            return Err(LoadError::InvalidChapterKey { key: record.chapter });
        };
        let text = assemble::unit_text(page_store, record.pages);
        entries.push((
            key,
            Chapter {
                key,
                title: record.title,
                description: record.description,
                pages: record.pages,
                text,
            },
        ));
    }
    UnitStore::build(entries).map_err(|key| LoadError::DuplicateChapter { key })
}

fn build_lessons(
    page_store: &PageStore,
    records: Vec<LessonRecord>,
) -> Result<UnitStore<LessonKey, Lesson>, LoadError> {
    let mut entries = Vec::with_capacity(records.len());
    for record in records {
        let Some(key) = LessonKey::parse(&record.lesson) else {
            return Err(LoadError::InvalidLessonKey { key: record.lesson });
        };
        let Some(chapter_idx) = ChapterKey::parse(&record.chapter_idx) else {
            return Err(LoadError::InvalidChapterIdx {
                lesson: record.lesson,
                chapter_idx: record.chapter_idx,
            });
        };
        let text = assemble::unit_text(page_store, record.pages);
        entries.push((
            key,
            Lesson {
                key,
                chapter_idx,
                title: record.title,
                description: record.description,
                pages: record.pages,
                text,
            },
        ));
    }
    UnitStore::build(entries).map_err(|key| LoadError::DuplicateLesson { key })
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let raw = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
