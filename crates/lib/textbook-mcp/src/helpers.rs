use rmcp::model::{CallToolResult, Content};
use textbook_core::query::NotFound;

/// Marker prefixing every not-found reply. The transport carries only
/// strings, so callers tell success from failure by this prefix alone; no
/// legitimate unit text starts with it.
pub const NOT_FOUND_MARKER: &str = "❌";

/// Renders a query outcome to the transport's string payload. A miss is a
/// normal reply carrying the sentinel, never a protocol error.
pub fn render_outcome(outcome: Result<String, NotFound>) -> String {
    outcome.unwrap_or_else(|missing| format!("{NOT_FOUND_MARKER} {missing}"))
}

pub fn text_reply(outcome: Result<String, NotFound>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(render_outcome(outcome))])
}
