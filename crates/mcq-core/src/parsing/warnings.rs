use crate::model::{ParseWarning, Question};
use std::collections::HashSet;

/// Flag structurally suspicious records. Records themselves are left untouched.
pub fn collect_warnings(questions: &[Question]) -> Vec<ParseWarning> {
    let mut warnings = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for q in questions {
        if !seen.insert(q.question_no.as_str()) {
            warnings.push(warning(q, "question number appears more than once"));
        }
        if q.question.is_empty() {
            warnings.push(warning(q, "no question text found"));
        }
        if q.options.is_empty() {
            warnings.push(warning(q, "no lettered options found"));
        }
        if q.answer.is_empty() {
            warnings.push(warning(q, "no answer found"));
        }
    }

    for w in &warnings {
        log::warn!("question {}: {}", w.question_no, w.reason);
    }

    warnings
}

fn warning(q: &Question, reason: &str) -> ParseWarning {
    ParseWarning {
        question_no: q.question_no.clone(),
        reason: reason.to_string(),
    }
}
