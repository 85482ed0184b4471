use std::path::PathBuf;

use textbook_core::load::{self, LoadError, TextbookPaths};
use textbook_core::prompt;
use textbook_core::query::Textbook;

fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

fn fixture_paths() -> TextbookPaths {
    TextbookPaths {
        pages: data_path("pages.json"),
        chapters: data_path("chapters.json"),
        lessons: data_path("lessons.json"),
    }
}

fn load_fixture() -> Textbook {
    load::load_textbook(&fixture_paths()).expect("fixture should load")
}

#[test]
fn chapter_zero_assembles_four_pages_in_order() {
    let textbook = load_fixture();
    let text = textbook.chapter_text("0").expect("chapter 0 exists");
    assert!(text.starts_with("Genki I - Chapter 0: Greetings & Expressions\n\n"));
    assert_eq!(text.matches("--- Page").count(), 4);

    let positions: Vec<usize> = [34, 35, 36, 37]
        .iter()
        .map(|page| {
            text.find(&format!("--- Page {page} ---"))
                .expect("page block present")
        })
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn content_gap_renders_placeholder_between_intact_neighbors() {
    let textbook = load_fixture();
    let text = textbook.chapter_text("1").expect("chapter 1 exists");
    assert!(text.contains("--- Page 38 ---\nSelf-introductions: watashi wa gakusei desu."));
    assert!(text.contains("--- Page 39 ---\n[Text not found]"));
    assert!(text.contains("--- Page 40 ---\nTime expressions: ima nanji desu ka."));
}

#[test]
fn open_ended_range_yields_a_single_block() {
    let textbook = load_fixture();
    let text = textbook
        .lesson_text("chapter_12_lesson_1")
        .expect("lesson exists");
    assert_eq!(text.matches("--- Page").count(), 1);
    assert!(text.contains("--- Page 266 ---\nExplanatory predicates: n desu."));
}

#[test]
fn loading_twice_is_deterministic() {
    let first = load_fixture();
    let second = load_fixture();
    assert_eq!(first.list_chapters(), second.list_chapters());
    assert_eq!(first.list_lessons(), second.list_lessons());
    for chapter in ["0", "1", "10", "12"] {
        assert_eq!(
            first.chapter_text(chapter).expect("chapter exists"),
            second.chapter_text(chapter).expect("chapter exists"),
        );
    }
}

#[test]
fn chapter_listing_shows_ranges_and_single_pages() {
    let listing = load_fixture().list_chapters();
    assert!(listing.contains("Chapter 0: Genki I - Chapter 0: Greetings & Expressions"));
    assert!(listing.contains("Pages: 34 - 37"));
    assert!(listing.contains("Pages: 266"));
}

#[test]
fn lesson_filter_does_not_mix_chapters_one_and_ten() {
    let textbook = load_fixture();
    let chapter_one = textbook.lessons_for_chapter("1").expect("lessons exist");
    assert!(chapter_one.contains("chapter_1_lesson_1"));
    assert!(!chapter_one.contains("chapter_10_lesson_1"));

    let chapter_ten = textbook.lessons_for_chapter("10").expect("lessons exist");
    assert!(chapter_ten.contains("chapter_10_lesson_1"));
}

#[test]
fn relevance_prompt_covers_every_lesson_and_the_query() {
    let textbook = load_fixture();
    let prompt = prompt::relevance_prompt(&textbook, "how do I compare two things?");
    assert!(prompt.contains("User query: how do I compare two things?"));
    for key in [
        "chapter_1_lesson_1",
        "chapter_10_lesson_1",
        "chapter_12_lesson_1",
    ] {
        assert!(prompt.contains(key), "prompt should mention {key}");
    }
}

#[test]
fn missing_data_file_names_the_path() {
    let mut paths = fixture_paths();
    paths.pages = data_path("no_such_file.json");
    let err = load::load_textbook(&paths).expect_err("missing file is fatal");
    match err {
        LoadError::Read { path, .. } => assert!(path.ends_with("no_such_file.json")),
        other => panic!("expected a read error, got {other}"),
    }
}

#[test]
fn unparsable_data_file_names_the_path() {
    let mut paths = fixture_paths();
    paths.pages = data_path("malformed.json");
    let err = load::load_textbook(&paths).expect_err("malformed file is fatal");
    match err {
        LoadError::Parse { path, .. } => assert!(path.ends_with("malformed.json")),
        other => panic!("expected a parse error, got {other}"),
    }
}
