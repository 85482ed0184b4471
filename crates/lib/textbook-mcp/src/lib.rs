//! MCP server implementation for textbook-mcp.
//!
//! This crate wires the textbook query context into rmcp tool handlers and
//! exposes the MCP-facing operation surface for chapter and lesson access.

mod helpers;
mod tools;
pub mod server;

use std::sync::Arc;

use rmcp::{
    ErrorData,
    ServerHandler,
    handler::server::tool::ToolRouter,
    tool,
    tool_handler,
    tool_router,
};
use rmcp::model::{CallToolResult, Content, ServerCapabilities, ServerInfo};
use textbook_core::query::Textbook;

const SERVER_INSTRUCTIONS: &str = r#"textbook-mcp provides MCP tools for reading a textbook's chapters and lessons as structured text.

Workflow:
1. Call `list_chapters` or `list_lessons` to browse what the textbook covers.
2. Fetch a unit's full text:
   - `get_chapter` with the chapter number (e.g. "3").
   - `get_lesson` with the composite lesson key (e.g. "chapter_3_lesson_1").
3. Narrow down lessons:
   - `list_lessons_for_chapter` filters lessons by their owning chapter index.
   - `build_relevance_prompt` returns a ready-made prompt for an external model to pick the lessons matching a free-text query; this server performs no matching itself.

Notes:
- All results are plain text. A reply starting with ❌ means the requested key matched nothing.
- Pages missing from the extraction output appear inline as [Text not found] blocks; the rest of the unit is unaffected.
- Chapter numbers and lesson keys are matched exactly: "1" and "01" are different keys.
- `health` returns `ok`."#;

/// MCP server wrapper around the immutable textbook context and tool routers.
#[derive(Clone)]
pub struct TextbookMcp {
    tool_router: ToolRouter<Self>,
    textbook: Arc<Textbook>,
}

impl TextbookMcp {
    /// Creates a new server owning its textbook context.
    #[must_use]
    pub fn new(textbook: Textbook) -> Self {
        Self::with_textbook(Arc::new(textbook))
    }

    /// Creates a new server using a shared textbook handle.
    #[must_use]
    pub fn with_textbook(textbook: Arc<Textbook>) -> Self {
        let tool_router = Self::tool_router_core()
            + Self::tool_router_chapters()
            + Self::tool_router_lessons()
            + Self::tool_router_relevance();
        Self {
            tool_router,
            textbook,
        }
    }

    pub(crate) fn textbook(&self) -> &Textbook {
        &self.textbook
    }
}

#[tool_router(router = tool_router_core, vis = "pub")]
impl TextbookMcp {
    #[tool(description = "Health check. Returns 'ok'.")]
    async fn health(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::text("ok")]))
    }
}

#[tool_handler]
impl ServerHandler for TextbookMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            ..Default::default()
        }
    }
}
