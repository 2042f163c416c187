pub mod error;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod profiles;

use error::McqError;
use extraction::{pages_to_text, PdfExtractor};
use model::ParsedExam;
use parsing::clean::TextCleaner;

pub use model::{OptionLetter, ParseWarning, Question};
pub use parsing::{extract_questions, extract_questions_with, retain_numbered};

/// Main API entry point: extract questions from PDF bytes.
///
/// Fails only when the text source fails or the PDF carries no text at all
/// (scanned, image-only documents). Parsing itself never fails.
pub fn parse_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    cleaner: &TextCleaner,
) -> Result<ParsedExam, McqError> {
    let pages = extractor.extract_pages(pdf_bytes)?;
    let text = pages_to_text(&pages);

    if text.trim().is_empty() {
        return Err(McqError::NoText);
    }

    let mut parsed = parse_text(&text, cleaner);
    parsed.backend = extractor.backend_name().to_string();
    parsed.page_count = pages.len();
    Ok(parsed)
}

/// Extract questions from already-extracted text.
pub fn parse_text(text: &str, cleaner: &TextCleaner) -> ParsedExam {
    let questions = retain_numbered(extract_questions_with(text, cleaner));
    let warnings = parsing::warnings::collect_warnings(&questions);

    log::info!(
        "parsed {} question(s), {} warning(s)",
        questions.len(),
        warnings.len()
    );

    ParsedExam {
        backend: "text".to_string(),
        page_count: text.split('\x0c').count(),
        questions,
        warnings,
    }
}
