pub mod clean;
pub mod lines;
pub mod warnings;

use crate::model::{OptionLetter, Question};
use clean::{clean_option_text, TextCleaner};

/// Extract questions from raw PDF text using the default cleaner.
pub fn extract_questions(text: &str) -> Vec<Question> {
    extract_questions_with(text, &TextCleaner::default())
}

/// Extract questions from raw PDF text in a single forward pass.
///
/// Never fails: malformed input yields incomplete or misattributed records,
/// and records lacking a number are discarded.
pub fn extract_questions_with(text: &str, cleaner: &TextCleaner) -> Vec<Question> {
    let mut scanner = QuestionScanner::new(cleaner);
    for line in text.split('\n') {
        scanner.feed(line);
    }
    scanner.finish()
}

/// Drop records without a question number.
pub fn retain_numbered(questions: Vec<Question>) -> Vec<Question> {
    questions
        .into_iter()
        .filter(|q| !q.question_no.is_empty())
        .collect()
}

/// Scan state for one extraction call.
///
/// Line rules run in a fixed order and are not exclusive: a single line can
/// open an option and append to it, or append to an option and carry the answer.
pub struct QuestionScanner<'c> {
    cleaner: &'c TextCleaner,
    current: Option<Question>,
    option_letter: Option<OptionLetter>,
    reading_options: bool,
    // Stem accumulation ran for the current record, even if every fragment was blank.
    stem_touched: bool,
    sealed: Vec<Question>,
}

impl<'c> QuestionScanner<'c> {
    pub fn new(cleaner: &'c TextCleaner) -> Self {
        QuestionScanner {
            cleaner,
            current: None,
            option_letter: None,
            reading_options: false,
            stem_touched: false,
            sealed: Vec::new(),
        }
    }

    pub fn feed(&mut self, raw: &str) {
        let line = raw.trim();

        if lines::is_question_boundary(line) {
            self.seal();
            self.current = Some(Question::new(lines::question_number(line)));
            self.reading_options = false;
            self.option_letter = None;
        }

        if let Some(letter) = lines::option_boundary(line) {
            if let Some(q) = self.current.as_mut() {
                q.options.entry(letter).or_default();
            }
            self.option_letter = Some(letter);
            self.reading_options = true;
        }

        // Explanation lines are captured whole and feed nothing else.
        if let Some(payload) = lines::explanation_payload(line) {
            if let Some(q) = self.current.as_mut() {
                q.explanation = self.cleaner.clean(payload);
            }
            return;
        }

        match (self.reading_options, self.option_letter) {
            (true, Some(letter)) => {
                let fragment =
                    clean_option_text(&self.cleaner.clean(lines::strip_option_prefix(line)));
                if let Some(q) = self.current.as_mut() {
                    append_fragment(q.options.entry(letter).or_default(), &fragment);
                }
            }
            (false, _) => {
                if let Some(q) = self.current.as_mut().filter(|q| !q.question_no.is_empty()) {
                    let fragment = self.cleaner.clean(lines::strip_question_prefix(line));
                    append_fragment(&mut q.question, &fragment);
                    self.stem_touched = true;
                }
            }
            (true, None) => {}
        }

        if let Some(payload) = lines::answer_payload(line) {
            if let Some(q) = self.current.as_mut() {
                q.answer = self.cleaner.clean(payload);
            }
            self.reading_options = false;
        }
    }

    /// Seal the last record and return everything emitted, in input order.
    pub fn finish(mut self) -> Vec<Question> {
        self.seal();
        log::debug!("extracted {} question(s)", self.sealed.len());
        self.sealed
    }

    // A numbered record always reaches stem accumulation on its own boundary
    // line, so in practice every numbered record is sealed.
    fn seal(&mut self) {
        let stem_touched = std::mem::take(&mut self.stem_touched);
        let Some(q) = self.current.take() else {
            return;
        };
        if !q.question_no.is_empty() && (stem_touched || !q.question.is_empty()) {
            log::debug!(
                "sealed question {} ({} option(s))",
                q.question_no,
                q.options.len()
            );
            self.sealed.push(q);
        } else {
            log::debug!("discarded incomplete question '{}'", q.question_no);
        }
    }
}

// Blank fragments (boundary lines, stripped footers, inlined answers) add nothing.
fn append_fragment(target: &mut String, fragment: &str) {
    if fragment.is_empty() {
        return;
    }
    target.push_str(fragment);
    target.push(' ');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opt(q: &Question, letter: OptionLetter) -> &str {
        q.options.get(&letter).map(|s| s.as_str()).unwrap_or("<missing>")
    }

    #[test]
    fn test_no_boundary_yields_nothing() {
        let text = "Some preface\nA. dangling option\nAnswer: A\nExplanation: none";
        assert!(extract_questions(text).is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_questions("").is_empty());
    }

    #[test]
    fn test_boundary_line_does_not_leak_into_stem() {
        let qs = extract_questions("QUESTION NO: 126\nWhich document authorizes the project?");
        assert_eq!(qs.len(), 1);
        assert_eq!(qs[0].question_no, "126");
        assert_eq!(qs[0].question, "Which document authorizes the project? ");
    }

    #[test]
    fn test_multi_line_stem_is_space_joined() {
        let qs = extract_questions("QUESTION NO: 3\nA project manager is\nassigned mid-way.\nWhat first?");
        assert_eq!(qs[0].question, "A project manager is assigned mid-way. What first? ");
    }

    #[test]
    fn test_multi_line_option_keeps_order() {
        let text = "QUESTION NO: 4\nPick one\nA. first part\nsecond part\nthird part\nB. other";
        let qs = extract_questions(text);
        assert_eq!(opt(&qs[0], OptionLetter::A), "first part second part third part ");
        assert_eq!(opt(&qs[0], OptionLetter::B), "other ");
    }

    #[test]
    fn test_bare_option_line_initializes_empty_accumulator() {
        let qs = extract_questions("QUESTION NO: 5\nPick one\nA.\nAnswer: A");
        assert_eq!(opt(&qs[0], OptionLetter::A), "");
        assert_eq!(qs[0].answer, "A");
    }

    #[test]
    fn test_inline_answer_on_option_line() {
        let qs = extract_questions("QUESTION NO: 6\nPick one\nA. Alpha\nB. Beta Answer: B");
        assert_eq!(opt(&qs[0], OptionLetter::B), "Beta ");
        // the line does not start with "Answer:", so the answer field stays empty
        assert_eq!(qs[0].answer, "");
    }

    #[test]
    fn test_repeated_letter_appends() {
        let qs = extract_questions("QUESTION NO: 7\nPick\nA. one\nA. two");
        assert_eq!(opt(&qs[0], OptionLetter::A), "one two ");
    }

    #[test]
    fn test_answer_ends_option_reading() {
        let text = "QUESTION NO: 8\nPick\nA. one\nAnswer: A\ntrailing note";
        let qs = extract_questions(text);
        assert_eq!(opt(&qs[0], OptionLetter::A), "one ");
        assert_eq!(qs[0].question, "Pick trailing note ");
    }

    #[test]
    fn test_answer_without_options_lands_in_stem() {
        let qs = extract_questions("QUESTION NO: 9\nTrue or false?\nAnswer: A");
        assert_eq!(qs[0].question, "True or false? Answer: A ");
        assert_eq!(qs[0].answer, "A");
    }

    #[test]
    fn test_explanation_is_single_line() {
        let text = "QUESTION NO: 10\nPick\nA. x\nAnswer: A\nExplanation: Because x.\nmore detail";
        let qs = extract_questions(text);
        assert_eq!(qs[0].explanation, "Because x.");
        assert_eq!(qs[0].question, "Pick more detail ");
    }

    #[test]
    fn test_explanation_while_reading_options_does_not_append() {
        let qs = extract_questions("QUESTION NO: 11\nPick\nA. x\nExplanation: why");
        assert_eq!(opt(&qs[0], OptionLetter::A), "x ");
        assert_eq!(qs[0].explanation, "why");
    }

    #[test]
    fn test_question_without_stem_lines_is_kept() {
        let qs = extract_questions("QUESTION NO: 12\nQUESTION NO: 13\nStem here");
        assert_eq!(qs.len(), 2);
        assert_eq!(qs[0].question_no, "12");
        assert_eq!(qs[0].question, "");
        assert_eq!(qs[1].question_no, "13");
        assert_eq!(qs[1].question, "Stem here ");
    }

    #[test]
    fn test_missing_stem_keeps_options_and_answer() {
        let text = "QUESTION NO: 5\nA. Charter\nB. Register\nAnswer: B\nQUESTION NO: 6\nReal stem\nA. x";
        let qs = extract_questions(text);
        let numbers: Vec<&str> = qs.iter().map(|q| q.question_no.as_str()).collect();
        assert_eq!(numbers, vec!["5", "6"]);
        assert_eq!(qs[0].question, "");
        assert_eq!(opt(&qs[0], OptionLetter::A), "Charter ");
        assert_eq!(opt(&qs[0], OptionLetter::B), "Register ");
        assert_eq!(qs[0].answer, "B");
    }

    #[test]
    fn test_all_digit_stem_line_keeps_record() {
        let qs = extract_questions("QUESTION NO: 7\n2024\nA. yes\nAnswer: A");
        assert_eq!(qs.len(), 1);
        assert_eq!(qs[0].question_no, "7");
        assert_eq!(qs[0].question, "");
        assert_eq!(opt(&qs[0], OptionLetter::A), "yes ");
        assert_eq!(qs[0].answer, "A");
    }

    #[test]
    fn test_question_without_number_discarded() {
        let qs = extract_questions("QUESTION NO:\nOrphan stem\nA. x");
        assert!(qs.is_empty());
    }

    #[test]
    fn test_footer_and_page_number_removed_from_stem() {
        let text = "QUESTION NO: 14\nWhich tool\nPMI PMP Exam \"Pass Any Exam. Any Time.\" - www.actualtests.com 15\nis used?";
        let qs = extract_questions(text);
        assert_eq!(qs[0].question, "Which tool is used? ");
    }

    #[test]
    fn test_crlf_lines() {
        let qs = extract_questions("QUESTION NO: 15\r\nStem\r\nA. x\r\nAnswer: A\r\n");
        assert_eq!(qs[0].question_no, "15");
        assert_eq!(qs[0].answer, "A");
        assert_eq!(opt(&qs[0], OptionLetter::A), "x ");
    }

    #[test]
    fn test_retain_numbered() {
        let kept = retain_numbered(vec![Question::new("1"), Question::default()]);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].question_no, "1");
    }
}
