//! Keyword extraction — pluggable strategy that turns a summary into a term set.
//!
//! Default: `CapitalizedTermExtractor` (lexical, deterministic, no LLM call).
//! False positives (sentence-initial words, proper nouns) and false negatives
//! (lowercase technical terms) are accepted.

use std::collections::BTreeSet;

use regex::Regex;

/// Distinct, case-sensitive keywords. Ordered only so output is stable.
pub type KeywordSet = BTreeSet<String>;

/// Implement this to swap extraction strategies without touching the gap analyzer.
pub trait KeywordExtractor: Send + Sync {
    fn extract(&self, text: &str) -> KeywordSet;
}

/// Tokens starting with an uppercase letter and continuing over letters, digits, `#` or `+`.
const CAPITALIZED_TERM_PATTERN: &str = r"\b[A-Z][A-Za-z0-9#+]*";

/// Matches capitalized terms such as "Python", "AWS", "C++" and "C#".
pub struct CapitalizedTermExtractor {
    pattern: Regex,
}

impl Default for CapitalizedTermExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl CapitalizedTermExtractor {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(CAPITALIZED_TERM_PATTERN).expect("Invalid keyword regex"),
        }
    }
}

impl KeywordExtractor for CapitalizedTermExtractor {
    fn extract(&self, text: &str) -> KeywordSet {
        self.pattern
            .find_iter(text)
            // A match cut short by a letter outside the ASCII class or `_` is a word fragment.
            .filter(|m| {
                !text[m.end()..]
                    .chars()
                    .next()
                    .is_some_and(|c| c.is_alphanumeric() || c == '_')
            })
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> KeywordSet {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_extracts_capitalized_terms_only() {
        let keywords = CapitalizedTermExtractor::new().extract("Proficient in Python and AWS Lambda");
        assert_eq!(keywords, set(&["AWS", "Lambda", "Proficient", "Python"]));
        assert!(!keywords.contains("in"));
        assert!(!keywords.contains("and"));
    }

    #[test]
    fn test_symbol_terminated_terms_are_whole() {
        let keywords = CapitalizedTermExtractor::new().extract("Knows C++, C# and F#.");
        assert!(keywords.contains("C++"));
        assert!(keywords.contains("C#"));
        assert!(keywords.contains("F#"));
    }

    #[test]
    fn test_dotted_names_are_captured_partially() {
        let keywords = CapitalizedTermExtractor::new().extract("Built UIs with React.js");
        assert!(keywords.contains("React"));
        assert!(keywords.contains("UIs"));
        assert!(!keywords.contains("React.js"));
    }

    #[test]
    fn test_duplicates_collapse_and_case_is_kept() {
        let keywords = CapitalizedTermExtractor::new().extract("Rust Rust rust RUST");
        assert_eq!(keywords, set(&["RUST", "Rust"]));
    }

    #[test]
    fn test_mid_word_capitals_do_not_start_tokens() {
        let keywords = CapitalizedTermExtractor::new().extract("iPhone eBay");
        assert!(keywords.is_empty());
    }

    #[test]
    fn test_words_with_accents_or_underscores_are_not_fragmented() {
        let keywords = CapitalizedTermExtractor::new()
            .extract("Worked in Zürich for Müller at Café Nord, snake_Case Foo_bar");
        assert_eq!(keywords, set(&["Nord", "Worked"]));
    }

    #[test]
    fn test_symbol_terms_survive_fragment_filter() {
        let keywords = CapitalizedTermExtractor::new().extract("C++ and C# (F#) in Kraków");
        assert_eq!(keywords, set(&["C#", "C++", "F#"]));
    }

    #[test]
    fn test_empty_text_yields_empty_set() {
        assert!(CapitalizedTermExtractor::new().extract("").is_empty());
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let extractor = CapitalizedTermExtractor::new();
        let text = "Led Kubernetes migration on GCP; mentored Go and Java engineers.";
        assert_eq!(extractor.extract(text), extractor.extract(text));
    }
}
