use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};

use crate::TextbookMcp;
use crate::helpers;

/// Parameters for fetching a chapter by number.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GetChapterParams {
    /// The chapter number as a string (e.g. "1", "2", ...).
    pub chapter_number: String,
}

#[tool_router(router = tool_router_chapters, vis = "pub")]
impl TextbookMcp {
    #[tool(
        description = "Retrieve the parsed and structured text of a textbook chapter. Takes the chapter number as a string (e.g. \"1\") and returns the chapter title followed by its per-page text."
    )]
    async fn get_chapter(
        &self,
        Parameters(params): Parameters<GetChapterParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(helpers::text_reply(
            self.textbook().chapter_text(&params.chapter_number),
        ))
    }

    #[tool(
        description = "List all available chapters with chapter number, title, description, and page range."
    )]
    async fn list_chapters(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::text(
            self.textbook().list_chapters(),
        )]))
    }

    #[tool(
        description = "Retrieve the chapter that covers a learner's request, by chapter number. Use this when routing a topic to its chapter: 0 greetings, classroom expressions, and daily phrases; 1 self-introductions, time, and basic sentence structure; 2 shopping and demonstratives; 3 verb conjugation, verb types, and word order; 4 describing locations and past tense; 5 adjectives, suggestions, and counting; 6 te-form, instructions, and reasons; 7 describing appearance and counting people; 8 short forms, informal speech, and preferences; 9 past tense short forms and qualifying nouns; 10 comparisons and plans; 11 desires, listing actions, and experiences; 12 explanations, advice, and obligation. Returns the chapter title followed by its per-page text."
    )]
    async fn get_chapter_for_request(
        &self,
        Parameters(params): Parameters<GetChapterParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(helpers::text_reply(
            self.textbook().chapter_text(&params.chapter_number),
        ))
    }
}
