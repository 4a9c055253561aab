//! Summarizer — condenses a document chunk-by-chunk through the text-generation service.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::ats::chunker::{chunk_text, DEFAULT_CHUNK_SIZE};
use crate::ats::prompts::SUMMARIZE_SYSTEM_TEMPLATE;
use crate::llm_client::{LlmError, TextGenerator};

/// Which document is being summarized. Only changes the instruction sent to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Resume,
    JobDescription,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::Resume => "resume",
            Role::JobDescription => "job description",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub struct Summarizer {
    llm: Arc<dyn TextGenerator>,
    chunk_size: usize,
}

impl Summarizer {
    pub fn new(llm: Arc<dyn TextGenerator>) -> Self {
        Self {
            llm,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Summarizes every chunk in order and joins the partial summaries with a single space.
    ///
    /// Empty text makes no external call and yields an empty summary.
    /// The first failed call aborts the whole summary; nothing partial is returned.
    pub async fn summarize(&self, text: &str, role: Role) -> Result<String, LlmError> {
        let system = SUMMARIZE_SYSTEM_TEMPLATE.replace("{role}", role.label());
        let chunks = chunk_text(text, self.chunk_size);

        let mut summaries = Vec::with_capacity(chunks.len());
        for (idx, chunk) in chunks.iter().enumerate() {
            debug!(%role, chunk = idx + 1, of = chunks.len(), "Summarizing chunk");
            summaries.push(self.llm.generate(&system, chunk).await?);
        }

        Ok(summaries.join(" "))
    }
}
