use crate::error::McqError;
use crate::parsing::lines::ANSWER_MARKER;
use crate::profiles::schema::CleanProfile;
use regex::Regex;
use std::sync::LazyLock;

/// Watermark footer printed on every page of actualtests.com exam dumps.
pub const ACTUALTESTS_FOOTER: &str =
    r#"PMI PMP Exam "Pass Any Exam\. Any Time\." - www\.actualtests\.com(?:[0-9]+)?"#;

// Anchored at end of string only, so "12 " (trailing space) is left alone.
static PAGE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+$").expect("valid page number pattern"));

static DEFAULT_CLEANER: LazyLock<TextCleaner> = LazyLock::new(TextCleaner::default);

/// Removes boilerplate (vendor footers, page numbers) from extracted PDF text.
#[derive(Debug, Clone)]
pub struct TextCleaner {
    footers: Vec<Regex>,
    strip_page_numbers: bool,
}

impl TextCleaner {
    /// Build a cleaner from a profile, compiling its footer patterns.
    pub fn from_profile(profile: &CleanProfile) -> Result<Self, McqError> {
        let footers = profile
            .footer_patterns
            .iter()
            .map(|p| {
                Regex::new(p).map_err(|e| {
                    McqError::ProfileInvalid(format!("footer pattern '{}': {}", p, e))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TextCleaner {
            footers,
            strip_page_numbers: profile.strip_page_numbers,
        })
    }

    /// Remove every footer occurrence, then a trailing digit run, then trim.
    ///
    /// The digit strip is purely positional: a line whose real content ends
    /// in a number loses that number too.
    pub fn clean(&self, text: &str) -> String {
        let mut s = text.to_string();
        for footer in &self.footers {
            s = footer.replace_all(&s, "").into_owned();
        }
        if self.strip_page_numbers {
            s = PAGE_NUMBER.replace(&s, "").into_owned();
        }
        s.trim().to_string()
    }

    pub fn footer_count(&self) -> usize {
        self.footers.len()
    }
}

impl Default for TextCleaner {
    fn default() -> Self {
        TextCleaner {
            footers: vec![Regex::new(ACTUALTESTS_FOOTER).expect("valid footer pattern")],
            strip_page_numbers: true,
        }
    }
}

/// Clean text with the default (actualtests) cleaner.
pub fn clean_text(text: &str) -> String {
    DEFAULT_CLEANER.clean(text)
}

/// Cut an option line at an inlined `Answer:` marker and trim.
pub fn clean_option_text(text: &str) -> String {
    let head = match text.find(ANSWER_MARKER) {
        Some(idx) => &text[..idx],
        None => text,
    };
    head.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOOTER: &str = r#"PMI PMP Exam "Pass Any Exam. Any Time." - www.actualtests.com"#;

    #[test]
    fn test_removes_footer() {
        let line = format!("Which process group {}", FOOTER);
        assert_eq!(clean_text(&line), "Which process group");
    }

    #[test]
    fn test_removes_footer_with_page_digits() {
        let line = format!("{}42", FOOTER);
        assert_eq!(clean_text(&line), "");
    }

    #[test]
    fn test_removes_every_footer_occurrence() {
        let line = format!("left {} middle {}7 right", FOOTER, FOOTER);
        assert_eq!(clean_text(&line), "left  middle  right");
    }

    #[test]
    fn test_strips_trailing_page_number() {
        assert_eq!(clean_text("Project charter 17"), "Project charter");
    }

    #[test]
    fn test_trailing_number_in_content_is_also_stripped() {
        assert_eq!(clean_text("What is 2+2"), "What is 2+");
    }

    #[test]
    fn test_digits_before_trailing_space_are_kept() {
        assert_eq!(clean_text("Chapter 12 "), "Chapter 12");
    }

    #[test]
    fn test_inner_digits_untouched() {
        assert_eq!(clean_text("  Step 3 of the plan  "), "Step 3 of the plan");
    }

    #[test]
    fn test_clean_text_idempotent() {
        let once = clean_text("  Identify stakeholders early.  ");
        assert_eq!(clean_text(&once), once);
    }

    #[test]
    fn test_clean_option_text_cuts_inline_answer() {
        assert_eq!(clean_option_text("Risk register Answer: C"), "Risk register");
        assert_eq!(clean_option_text("Answer: C"), "");
        assert_eq!(clean_option_text(" Scope baseline "), "Scope baseline");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_option_text(""), "");
    }

    #[test]
    fn test_profile_without_page_strip() {
        let profile = CleanProfile {
            name: "keep".into(),
            description: None,
            version: "1".into(),
            footer_patterns: vec!["CONFIDENTIAL".into()],
            strip_page_numbers: false,
        };
        let cleaner = TextCleaner::from_profile(&profile).unwrap();
        assert_eq!(cleaner.clean("Total float 12 CONFIDENTIAL"), "Total float 12");
        assert_eq!(cleaner.clean("Total float 12"), "Total float 12");
    }

    #[test]
    fn test_profile_with_bad_pattern_rejected() {
        let profile = CleanProfile {
            name: "bad".into(),
            description: None,
            version: "1".into(),
            footer_patterns: vec!["(unclosed".into()],
            strip_page_numbers: true,
        };
        assert!(TextCleaner::from_profile(&profile).is_err());
    }
}
