// ATS scoring pipeline.
// Implements: chunking, per-role summarization, keyword gap analysis, LLM scoring.
// All LLM calls go through the `TextGenerator` trait; nothing here talks HTTP directly.

pub mod chunker;
pub mod gap;
pub mod handlers;
pub mod keywords;
pub mod pipeline;
pub mod prompts;
pub mod scorer;
pub mod summarizer;
