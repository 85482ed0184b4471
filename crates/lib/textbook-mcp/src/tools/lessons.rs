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

/// Parameters for fetching a lesson by its composite key.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GetLessonParams {
    /// The composite lesson key (e.g. "chapter_3_lesson_1").
    pub lesson_key: String,
}

/// Parameters for listing the lessons of one chapter.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ListLessonsForChapterParams {
    /// The owning chapter index as a string (e.g. "3"). Matched exactly.
    pub chapter_idx: String,
}

#[tool_router(router = tool_router_lessons, vis = "pub")]
impl TextbookMcp {
    #[tool(
        description = "Retrieve the parsed and structured text of a single lesson. Takes the composite lesson key (e.g. \"chapter_3_lesson_1\") and returns the lesson title, its description, and its per-page text."
    )]
    async fn get_lesson(
        &self,
        Parameters(params): Parameters<GetLessonParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(helpers::text_reply(
            self.textbook().lesson_text(&params.lesson_key),
        ))
    }

    #[tool(
        description = "List the lessons belonging to one chapter. Takes the chapter index as a string (e.g. \"3\"); the index is matched exactly, so \"1\" never matches lessons of chapter \"10\"."
    )]
    async fn list_lessons_for_chapter(
        &self,
        Parameters(params): Parameters<ListLessonsForChapterParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(helpers::text_reply(
            self.textbook().lessons_for_chapter(&params.chapter_idx),
        ))
    }

    #[tool(
        description = "List every lesson with key, title, description, and page range, prefixed with the total lesson count."
    )]
    async fn list_lessons(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::text(
            self.textbook().list_lessons(),
        )]))
    }
}
