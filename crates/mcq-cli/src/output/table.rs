use mcq_core::model::ParsedExam;
use mcq_core::Question;
use std::fmt::Write;

/// Render parsed questions as human-readable text.
pub fn format_parsed(parsed: &ParsedExam) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} question(s) from {} page(s) [{}]\n",
        parsed.questions.len(),
        parsed.page_count,
        parsed.backend
    );

    for q in &parsed.questions {
        format_question(&mut out, q);
    }

    if !parsed.warnings.is_empty() {
        let _ = writeln!(out, "Warnings:");
        for w in &parsed.warnings {
            let _ = writeln!(out, "  - question {}: {}", w.question_no, w.reason);
        }
    }

    out.trim_end().to_string()
}

fn format_question(out: &mut String, q: &Question) {
    let _ = writeln!(out, "=== Question {} ===\n", q.question_no);
    let _ = writeln!(out, "  {}\n", q.question.trim());

    for (letter, text) in &q.options {
        let marker = if q.answer.trim() == letter.to_string() {
            " *"
        } else {
            ""
        };
        let _ = writeln!(out, "  {}. {}{}", letter, text.trim(), marker);
    }
    if !q.options.is_empty() {
        let _ = writeln!(out);
    }

    let answer = if q.answer.is_empty() { "-" } else { &q.answer };
    let _ = writeln!(out, "  Answer: {}", answer);
    if !q.explanation.is_empty() {
        let _ = writeln!(out, "  Explanation: {}", q.explanation);
    }
    let _ = writeln!(out);
}
