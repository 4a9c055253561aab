// All LLM prompt constants for the ATS pipeline.

/// Summarization system prompt template. Replace `{role}` before sending.
pub const SUMMARIZE_SYSTEM_TEMPLATE: &str = "Summarize this {role} text in under 200 words. \
    Focus on key skills, achievements, and qualifications.";

/// System prompt for the scoring call.
pub const SCORE_SYSTEM: &str = "You are an expert ATS evaluator.";

/// Scoring prompt template.
/// Replace: {resume_summary}, {job_summary}
pub const SCORE_PROMPT_TEMPLATE: &str = r#"Resume Summary:
{resume_summary}

Job Description Summary:
{job_summary}

Task:
1. Give an ATS match percentage (0-100). Start your answer with a line of the exact form "Match Percentage: NN%".
2. Highlight strengths and weaknesses. Use markdown bolding (e.g., **word**) to emphasize only the most critical keywords or phrases. Be selective with bolding.
3. Suggest improvements for better match."#;
