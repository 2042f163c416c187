use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Letter of a single-answer multiple-choice option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OptionLetter {
    A,
    B,
    C,
    D,
}

impl OptionLetter {
    pub const ALL: [OptionLetter; 4] = [
        OptionLetter::A,
        OptionLetter::B,
        OptionLetter::C,
        OptionLetter::D,
    ];

    pub fn from_char(c: char) -> Option<OptionLetter> {
        match c {
            'A' => Some(OptionLetter::A),
            'B' => Some(OptionLetter::B),
            'C' => Some(OptionLetter::C),
            'D' => Some(OptionLetter::D),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            OptionLetter::A => 'A',
            OptionLetter::B => 'B',
            OptionLetter::C => 'C',
            OptionLetter::D => 'D',
        }
    }
}

impl fmt::Display for OptionLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One extracted exam question.
///
/// Text fields keep the accumulation spacing of the scanner: every
/// appended line fragment is followed by a single space.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question_no: String,
    pub question: String,
    pub options: BTreeMap<OptionLetter, String>,
    pub answer: String,
    pub explanation: String,
}

impl Question {
    pub fn new(question_no: impl Into<String>) -> Self {
        Question {
            question_no: question_no.into(),
            ..Default::default()
        }
    }
}

/// Structural issue noticed while parsing. Never causes a record to be dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseWarning {
    pub question_no: String,
    pub reason: String,
}

/// Result of running the full pipeline over one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedExam {
    /// Text source used (e.g. "pdftotext", "text").
    pub backend: String,
    pub page_count: usize,
    pub questions: Vec<Question>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<ParseWarning>,
}
