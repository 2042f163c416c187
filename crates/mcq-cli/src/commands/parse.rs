use mcq_core::error::McqError;
use mcq_core::extraction::pdftotext::PdftotextExtractor;
use mcq_core::profiles::resolve_cleaner;
use std::path::PathBuf;

use crate::output;
use crate::ProfileArgs;

pub fn run(
    input_file: PathBuf,
    output_format: &str,
    output_file: Option<PathBuf>,
    profile: &ProfileArgs,
) -> Result<(), McqError> {
    let cleaner = resolve_cleaner(profile.preset.as_deref(), profile.profile_file.as_deref())?;

    // Determine input type by extension
    let is_text = input_file
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("txt"))
        .unwrap_or(false);

    let parsed = if is_text {
        let text = std::fs::read_to_string(&input_file)?;
        mcq_core::parse_text(&text, &cleaner)
    } else {
        let pdf_bytes = std::fs::read(&input_file)?;
        let extractor = PdftotextExtractor::new();
        mcq_core::parse_pdf(&pdf_bytes, &extractor, &cleaner)?
    };

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            output::json::write(&parsed.questions, &path)?;
            eprintln!(
                "Extracted {} question(s), written to {}",
                parsed.questions.len(),
                path.display()
            );
            for w in &parsed.warnings {
                eprintln!("  warning: question {}: {}", w.question_no, w.reason);
            }
        }
        None => match output_format {
            "json" => output::json::print(&parsed.questions)?,
            "table" => println!("{}", output::table::format_parsed(&parsed)),
            other => {
                return Err(McqError::UnsupportedInput(format!(
                    "unknown output format '{}' (expected table or json)",
                    other
                )))
            }
        },
    }

    Ok(())
}
