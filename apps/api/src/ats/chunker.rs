//! Splits long documents into bounded, contiguous pieces for model consumption.

/// Maximum characters per chunk sent to the summarizer.
pub const DEFAULT_CHUNK_SIZE: usize = 2000;

/// Splits `text` into contiguous, non-overlapping slices of at most `max_chars` characters.
///
/// Lengths are counted in `char`s, so slices always fall on UTF-8 boundaries.
/// Concatenating the result in order reproduces `text` exactly; empty input yields no chunks.
///
/// # Panics
/// Panics if `max_chars` is zero.
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<&str> {
    assert!(max_chars > 0, "chunk size must be positive");

    let mut chunks = Vec::new();
    let mut start = 0usize;
    let mut count = 0usize;

    for (idx, _) in text.char_indices() {
        if count == max_chars {
            chunks.push(&text[start..idx]);
            start = idx;
            count = 0;
        }
        count += 1;
    }

    if start < text.len() {
        chunks.push(&text[start..]);
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected_count(len: usize, n: usize) -> usize {
        len.div_ceil(n)
    }

    #[test]
    fn test_empty_text_yields_no_chunks() {
        assert!(chunk_text("", 10).is_empty());
    }

    #[test]
    fn test_short_text_is_single_chunk() {
        assert_eq!(chunk_text("Rust developer", 2000), vec!["Rust developer"]);
    }

    #[test]
    fn test_exact_multiple_has_no_trailing_chunk() {
        let chunks = chunk_text("abcdef", 3);
        assert_eq!(chunks, vec!["abc", "def"]);
    }

    #[test]
    fn test_last_chunk_may_be_shorter() {
        let chunks = chunk_text("abcdefg", 3);
        assert_eq!(chunks, vec!["abc", "def", "g"]);
    }

    #[test]
    fn test_concatenation_reconstructs_input() {
        let text = "  Senior Engineer\n\tBuilt  pipelines in Rust & Go.\r\n  ";
        for n in 1..=text.len() + 1 {
            let chunks = chunk_text(text, n);
            assert_eq!(chunks.concat(), text, "chunk size {n}");
            assert_eq!(chunks.len(), expected_count(text.chars().count(), n));
        }
    }

    #[test]
    fn test_all_but_last_chunk_are_full() {
        let text = "x".repeat(4_500);
        let chunks = chunk_text(&text, DEFAULT_CHUNK_SIZE);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].chars().count(), 2000);
        assert_eq!(chunks[1].chars().count(), 2000);
        assert_eq!(chunks[2].chars().count(), 500);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let text = "héllo wörld ✓✓";
        let chunks = chunk_text(text, 4);
        assert!(chunks.iter().all(|c| c.chars().count() <= 4));
        assert_eq!(chunks.concat(), text);
        assert_eq!(chunks.len(), expected_count(text.chars().count(), 4));
        assert_eq!(chunks[0], "héll");
    }

    #[test]
    #[should_panic(expected = "chunk size must be positive")]
    fn test_zero_chunk_size_panics() {
        chunk_text("abc", 0);
    }
}
