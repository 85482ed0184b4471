//! Core types and services for textbook-mcp.
//!
//! This crate joins three independently maintained datasets (chapter
//! metadata, lesson metadata, per-page extracted text) into immutable
//! queryable records, eagerly assembles each unit's full text at load time,
//! and builds relevance prompts for an external matcher.

pub mod assemble;
pub mod load;
pub mod model;
pub mod prompt;
pub mod query;
pub mod store;
