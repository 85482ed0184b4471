//! Prompt construction for external relevance matching.
//!
//! The matcher itself is an external language model; this module only
//! assembles its input and never filters, ranks, or truncates lessons.

use std::fmt::Write;

use crate::query::Textbook;

const PREAMBLE: &str = "You are matching a user query against the lessons of a textbook.\n\
Below is every available lesson with its key, title, and description.";

const OUTPUT_FORMAT: &str = "Reply with the keys of the lessons relevant to the query, \
one key per line (for example: chapter_1_lesson_2). \
Reply with an empty list if no lesson is relevant.";

/// Builds the directive for the external matcher: preamble, one line per
/// lesson in load order, the verbatim user query, and the output-format
/// instruction.
#[must_use]
pub fn relevance_prompt(textbook: &Textbook, query: &str) -> String {
    let mut catalogue = String::new();
    for lesson in textbook.lessons.units() {
        let _ = writeln!(
            catalogue,
            "{}: {} ({})",
            lesson.key, lesson.title, lesson.description
        );
    }
    format!("{PREAMBLE}\n\n{catalogue}\nUser query: {query}\n\n{OUTPUT_FORMAT}")
}
