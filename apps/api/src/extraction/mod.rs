// Document-text extraction adapter.
// Runs before the scoring pipeline; the client posts the extracted text to /score.

pub mod handlers;
pub mod pdf;
