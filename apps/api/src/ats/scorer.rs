//! Scorer — asks the model to evaluate both summaries and parses a match percentage
//! out of its free-form answer.

use std::sync::Arc;

use regex::Regex;
use tracing::debug;

use crate::ats::prompts::{SCORE_PROMPT_TEMPLATE, SCORE_SYSTEM};
use crate::llm_client::{LlmError, TextGenerator};

/// The requested "Match Percentage: NN%" line.
const SCORE_LINE_PATTERN: &str = r"(?i)\bmatch\s+percentage[\s*:\-]*(\d{1,3})\s*%";
/// Looser labels such as "ATS Match: NN%" or "Match - NN%".
const LABELED_PERCENT_PATTERN: &str = r"(?i)\b(?:ats\s+)?match[\s*:\-]*(\d{1,3})\s*%";
/// Any `<digits>%` anywhere in the text.
const ANY_PERCENT_PATTERN: &str = r"(\d{1,3})\s*%";

/// Model feedback plus the parsed 0–100 match percentage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtsResult {
    pub feedback: String,
    pub match_percentage: u8,
}

pub struct AtsScorer {
    llm: Arc<dyn TextGenerator>,
    score_line: Regex,
    labeled_percent: Regex,
    any_percent: Regex,
}

impl AtsScorer {
    pub fn new(llm: Arc<dyn TextGenerator>) -> Self {
        Self {
            llm,
            score_line: Regex::new(SCORE_LINE_PATTERN).expect("Invalid score line regex"),
            labeled_percent: Regex::new(LABELED_PERCENT_PATTERN)
                .expect("Invalid labeled percentage regex"),
            any_percent: Regex::new(ANY_PERCENT_PATTERN).expect("Invalid percentage regex"),
        }
    }

    /// One evaluation call. The response is returned verbatim as feedback;
    /// a response without any percentage scores 0.
    pub async fn score(
        &self,
        resume_summary: &str,
        job_summary: &str,
    ) -> Result<AtsResult, LlmError> {
        let prompt = SCORE_PROMPT_TEMPLATE
            .replace("{resume_summary}", resume_summary)
            .replace("{job_summary}", job_summary);

        let feedback = self.llm.generate(SCORE_SYSTEM, &prompt).await?;
        let match_percentage = self.parse_match_percentage(&feedback);
        debug!(match_percentage, "Parsed ATS match percentage");

        Ok(AtsResult {
            feedback,
            match_percentage,
        })
    }

    /// Tries the "Match Percentage" line, then looser match labels, then the first
    /// percentage anywhere; clamps to 100.
    pub fn parse_match_percentage(&self, text: &str) -> u8 {
        self.score_line
            .captures(text)
            .or_else(|| self.labeled_percent.captures(text))
            .or_else(|| self.any_percent.captures(text))
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<u16>().ok())
            .map(|value| value.min(100) as u8)
            .unwrap_or(0)
    }
}
