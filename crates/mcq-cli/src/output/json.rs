use mcq_core::error::McqError;
use mcq_core::Question;
use std::path::Path;

pub fn print(questions: &[Question]) -> Result<(), McqError> {
    let json = serde_json::to_string_pretty(questions)?;
    println!("{json}");
    Ok(())
}

pub fn write(questions: &[Question], path: &Path) -> Result<(), McqError> {
    let json = serde_json::to_string_pretty(questions)?;
    std::fs::write(path, json)?;
    Ok(())
}
