use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::ats::gap::missing_keywords;
use crate::ats::keywords::{CapitalizedTermExtractor, KeywordExtractor, KeywordSet};
use crate::ats::scorer::AtsScorer;
use crate::ats::summarizer::{Role, Summarizer};
use crate::llm_client::{LlmError, TextGenerator};

/// Combined outcome of one scoring request.
#[derive(Debug, Clone, Serialize)]
pub struct AtsReport {
    pub ats_result: String,
    pub match_percentage: u8,
    pub missing_keywords: KeywordSet,
}

/// Holds the request-independent collaborators; every run is request-local.
pub struct AtsPipeline {
    summarizer: Summarizer,
    scorer: AtsScorer,
    extractor: Arc<dyn KeywordExtractor>,
}

impl AtsPipeline {
    pub fn new(llm: Arc<dyn TextGenerator>, extractor: Arc<dyn KeywordExtractor>) -> Self {
        Self {
            summarizer: Summarizer::new(llm.clone()),
            scorer: AtsScorer::new(llm),
            extractor,
        }
    }

    /// Pipeline with the default capitalized-term keyword heuristic.
    pub fn with_default_extractor(llm: Arc<dyn TextGenerator>) -> Self {
        Self::new(llm, Arc::new(CapitalizedTermExtractor::new()))
    }

    /// resume ∥ job description summaries → score + missing keywords.
    ///
    /// Inputs are assumed validated by the caller. Any upstream failure aborts the run.
    pub async fn run(&self, resume_text: &str, job_desc: &str) -> Result<AtsReport, LlmError> {
        let (resume_summary, job_summary) = tokio::try_join!(
            self.summarizer.summarize(resume_text, Role::Resume),
            self.summarizer.summarize(job_desc, Role::JobDescription),
        )?;
        info!(
            resume_summary_chars = resume_summary.len(),
            job_summary_chars = job_summary.len(),
            "Summaries complete"
        );

        let result = self.scorer.score(&resume_summary, &job_summary).await?;
        let missing = missing_keywords(self.extractor.as_ref(), &resume_summary, &job_summary);
        info!(
            match_percentage = result.match_percentage,
            missing_keywords = missing.len(),
            "ATS scoring complete"
        );

        Ok(AtsReport {
            ats_result: result.feedback,
            match_percentage: result.match_percentage,
            missing_keywords: missing,
        })
    }
}
