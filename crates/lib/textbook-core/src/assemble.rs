//! Assembly of a unit's full text from its declared page range.

use crate::model::PageRange;
use crate::store::PageStore;

/// Body emitted for a page inside a unit's range that has no extracted text.
pub const MISSING_PAGE_PLACEHOLDER: &str = "[Text not found]";

/// Concatenates the page blocks for a unit's range in ascending order.
///
/// Each block is a `--- Page {p} ---` header followed by the page text, or
/// by [`MISSING_PAGE_PLACEHOLDER`] when the store has no entry for `p`.
/// Blocks are joined by a blank line. A missing page is a content gap, not
/// an error; it never shortens the unit or affects neighboring blocks.
#[must_use]
pub fn unit_text(pages: &PageStore, range: PageRange) -> String {
    let blocks: Vec<String> = range
        .pages()
        .map(|page| {
            let body = pages.lookup(page).unwrap_or(MISSING_PAGE_PLACEHOLDER);
            format!("--- Page {page} ---\n{body}")
        })
        .collect();
    blocks.join("\n\n")
}
