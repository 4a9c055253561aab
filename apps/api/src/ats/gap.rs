//! Job-description keywords that the resume summary never mentions.

use crate::ats::keywords::{KeywordExtractor, KeywordSet};

/// Returns `keywords(job_summary) - keywords(resume_summary)`.
pub fn missing_keywords(
    extractor: &dyn KeywordExtractor,
    resume_summary: &str,
    job_summary: &str,
) -> KeywordSet {
    let resume_keywords = extractor.extract(resume_summary);
    extractor
        .extract(job_summary)
        .into_iter()
        .filter(|k| !resume_keywords.contains(k))
        .collect()
}
