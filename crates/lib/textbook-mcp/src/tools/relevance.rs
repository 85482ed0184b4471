use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};
use textbook_core::prompt;

use crate::TextbookMcp;

/// Parameters for building a relevance-matching prompt.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct BuildRelevancePromptParams {
    /// The learner's free-text query, passed through verbatim.
    pub query: String,
}

#[tool_router(router = tool_router_relevance, vis = "pub")]
impl TextbookMcp {
    #[tool(
        description = "Build a prompt for an external language model to select the lessons relevant to a free-text query. The prompt contains every lesson's key, title, and description plus the verbatim query, and asks for a list of matching lesson keys. This server performs no matching itself."
    )]
    async fn build_relevance_prompt(
        &self,
        Parameters(params): Parameters<BuildRelevancePromptParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let prompt = prompt::relevance_prompt(self.textbook(), &params.query);
        Ok(CallToolResult::success(vec![Content::text(prompt)]))
    }
}
