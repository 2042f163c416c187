//! Line classification for exam-dump text.
//!
//! Every predicate takes a single, already trimmed line.

use crate::model::OptionLetter;

pub const QUESTION_MARKER: &str = "QUESTION NO:";
pub const ANSWER_MARKER: &str = "Answer:";
pub const EXPLANATION_MARKER: &str = "Explanation:";

/// "QUESTION NO: 126" starts a new question.
pub fn is_question_boundary(line: &str) -> bool {
    line.starts_with(QUESTION_MARKER)
}

/// Everything after the first colon, trimmed. Empty when there is no colon.
pub fn question_number(line: &str) -> &str {
    after_first_colon(line).unwrap_or("")
}

/// "A." through "D." (letter immediately followed by a period) starts an option.
pub fn option_boundary(line: &str) -> Option<OptionLetter> {
    let mut chars = line.chars();
    let letter = OptionLetter::from_char(chars.next()?)?;
    match chars.next() {
        Some('.') => Some(letter),
        _ => None,
    }
}

pub fn explanation_payload(line: &str) -> Option<&str> {
    if line.starts_with(EXPLANATION_MARKER) {
        after_first_colon(line)
    } else {
        None
    }
}

pub fn answer_payload(line: &str) -> Option<&str> {
    if line.starts_with(ANSWER_MARKER) {
        after_first_colon(line)
    } else {
        None
    }
}

/// Drop a leading "B. " style prefix.
pub fn strip_option_prefix(line: &str) -> &str {
    match option_boundary(line) {
        Some(_) => line[2..].trim_start(),
        None => line,
    }
}

/// Drop a leading "QUESTION NO:" prefix.
pub fn strip_question_prefix(line: &str) -> &str {
    line.strip_prefix(QUESTION_MARKER)
        .map(str::trim_start)
        .unwrap_or(line)
}

fn after_first_colon(line: &str) -> Option<&str> {
    line.split_once(':').map(|(_, rest)| rest.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_boundary() {
        assert!(is_question_boundary("QUESTION NO: 126"));
        assert!(!is_question_boundary("Question no: 126"));
        assert!(!is_question_boundary("See QUESTION NO: 3"));
    }

    #[test]
    fn test_question_number() {
        assert_eq!(question_number("QUESTION NO: 126"), "126");
        assert_eq!(question_number("QUESTION NO:   12a  "), "12a");
        assert_eq!(question_number("QUESTION NO:"), "");
    }

    #[test]
    fn test_option_boundary() {
        assert_eq!(option_boundary("A. Paris"), Some(OptionLetter::A));
        assert_eq!(option_boundary("D."), Some(OptionLetter::D));
        assert_eq!(option_boundary("E. Rome"), None);
        assert_eq!(option_boundary("A Paris"), None);
        assert_eq!(option_boundary("a. Paris"), None);
        assert_eq!(option_boundary(""), None);
    }

    #[test]
    fn test_payloads() {
        assert_eq!(answer_payload("Answer: B"), Some("B"));
        assert_eq!(answer_payload("Answer:"), Some(""));
        assert_eq!(answer_payload("The Answer: B"), None);
        assert_eq!(
            explanation_payload("Explanation: Note: see PMBOK"),
            Some("Note: see PMBOK")
        );
        assert_eq!(explanation_payload("Answer: B"), None);
    }

    #[test]
    fn test_strip_option_prefix() {
        assert_eq!(strip_option_prefix("C.   Gantt chart"), "Gantt chart");
        assert_eq!(strip_option_prefix("C."), "");
        assert_eq!(strip_option_prefix("continued text"), "continued text");
    }

    #[test]
    fn test_strip_question_prefix() {
        assert_eq!(strip_question_prefix("QUESTION NO: 5"), "5");
        assert_eq!(strip_question_prefix("Which one?"), "Which one?");
    }
}
