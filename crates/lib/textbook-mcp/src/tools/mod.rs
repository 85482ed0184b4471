//! MCP tool modules.
//!
//! Tools are grouped by domain: chapter access, lesson access, and prompt
//! construction for external relevance matching.

pub mod chapters;
pub mod lessons;
pub mod relevance;
