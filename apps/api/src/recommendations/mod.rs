//! Recommendation endpoint — prompt assembly, upstream call, tolerant parsing.

pub mod extract;
pub mod handlers;
pub mod models;
pub mod prompt;
pub mod prompts;
