//! PDF → plain text.

use crate::errors::AppError;

/// Extracts the text of a multi-page PDF held in memory.
///
/// Page texts are trimmed, pages without text are dropped, and the rest are
/// joined with `\n` in page order.
pub fn extract_text_from_pdf(bytes: &[u8]) -> Result<String, AppError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map_err(|e| AppError::Extraction(format!("Could not read PDF: {e}")))?;
    Ok(join_page_texts(pages.iter().map(String::as_str)))
}

fn join_page_texts<'a>(pages: impl IntoIterator<Item = &'a str>) -> String {
    pages
        .into_iter()
        .map(str::trim)
        .filter(|page| !page.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_joined_with_newline_in_order() {
        let text = join_page_texts(["Jane Doe\nEngineer", "Skills: Rust"]);
        assert_eq!(text, "Jane Doe\nEngineer\nSkills: Rust");
    }

    #[test]
    fn test_blank_pages_contribute_nothing() {
        let text = join_page_texts(["  Page one  ", "", " \n ", "Page four"]);
        assert_eq!(text, "Page one\nPage four");
    }

    #[test]
    fn test_page_boundary_keeps_words_apart() {
        let pages = vec![
            "\n\nExperience: Rust".to_string(),
            "\n\n".to_string(),
            "Kafka, Postgres\n\n".to_string(),
        ];
        assert_eq!(
            join_page_texts(pages.iter().map(String::as_str)),
            "Experience: Rust\nKafka, Postgres"
        );
    }

    #[test]
    fn test_no_pages_yields_empty_text() {
        assert_eq!(join_page_texts(Vec::<&str>::new()), "");
    }

    #[test]
    fn test_garbage_bytes_are_an_extraction_error() {
        let err = extract_text_from_pdf(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
    }
}
