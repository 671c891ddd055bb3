//! Script-range line classifier

use super::bucket::{Bucket, BucketAccumulator, Buckets};
use super::{normalize_line_endings, read_raw_text, ParsedVerse, VerseParser};
use crate::error::Result;
use crate::script::detect_line_script;
use std::path::Path;

/// Splits a raw transcript into Sanskrit, Telugu and English blocks
///
/// Each line is tagged by the first script found in precedence order
/// (Telugu, Latin, Devanagari). Lines without any known script inherit the
/// bucket of the previous text line, or land in `sa` when nothing came
/// before. Blank lines and `---` rules mark paragraph breaks inside the
/// current bucket.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineClassifier;

impl LineClassifier {
    /// Create a new classifier
    pub fn new() -> Self {
        Self
    }

    /// Classify raw text into the three buckets
    pub fn classify(&self, raw_text: &str) -> Buckets {
        let text = normalize_line_endings(raw_text);
        let mut accumulator = BucketAccumulator::default();
        let mut current: Option<Bucket> = None;

        for line in text.split('\n') {
            if is_paragraph_break(line) {
                if let Some(bucket) = current {
                    accumulator.push(bucket, String::new());
                }
                continue;
            }

            let bucket = detect_line_script(line)
                .map(Bucket::from)
                .or(current)
                .unwrap_or(Bucket::Sa);
            accumulator.push(bucket, line.trim_end());
            current = Some(bucket);
        }

        accumulator.finish()
    }
}

impl VerseParser for LineClassifier {
    fn name(&self) -> &str {
        "script"
    }

    fn parse_file(&self, path: &Path) -> Result<ParsedVerse> {
        let text = read_raw_text(path)?;
        Ok(self.classify(&text).into_object())
    }
}

/// Blank lines and lines made only of three or more dashes
fn is_paragraph_break(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || (trimmed.len() >= 3 && trimmed.bytes().all(|b| b == b'-'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> Buckets {
        LineClassifier::new().classify(text)
    }

    #[test]
    fn test_separator_between_scripts() {
        let buckets = classify("नमस्ते\n---\nరామ");
        assert_eq!(buckets.sa, "नमस्ते");
        assert_eq!(buckets.te, "రామ");
        assert_eq!(buckets.en, "");
    }

    #[test]
    fn test_three_scripts() {
        let text = "शुक्लाम्बरधरं विष्णुं\nశుక్లాంబరధరం విష్ణుం\nWearing white garments, all-pervading";
        let buckets = classify(text);
        assert_eq!(buckets.sa, "शुक्लाम्बरधरं विष्णुं");
        assert_eq!(buckets.te, "శుక్లాంబరధరం విష్ణుం");
        assert_eq!(buckets.en, "Wearing white garments, all-pervading");
    }

    #[test]
    fn test_telugu_wins_over_latin_and_devanagari() {
        let buckets = classify("Rama రామ राम");
        assert_eq!(buckets.te, "Rama రామ राम");
        assert!(buckets.sa.is_empty() && buckets.en.is_empty());
    }

    #[test]
    fn test_latin_wins_over_devanagari() {
        let buckets = classify("राम (Rama)");
        assert_eq!(buckets.en, "राम (Rama)");
        assert!(buckets.sa.is_empty());
    }

    #[test]
    fn test_no_script_inherits_current_bucket() {
        let buckets = classify("రామ\n|| 1 ||\nRama\n12.");
        assert_eq!(buckets.te, "రామ\n|| 1 ||");
        assert_eq!(buckets.en, "Rama\n12.");
    }

    #[test]
    fn test_no_script_anywhere_defaults_to_sa() {
        let buckets = classify("1 2 3\n|| ||");
        assert_eq!(buckets.sa, "1 2 3\n|| ||");
        assert!(buckets.te.is_empty() && buckets.en.is_empty());
    }

    #[test]
    fn test_leading_marker_is_noop() {
        let buckets = classify("---\n\nनमः");
        assert_eq!(buckets.sa, "नमः");
    }

    #[test]
    fn test_two_dashes_are_text() {
        let buckets = classify("Rama\n--");
        assert_eq!(buckets.en, "Rama\n--");
    }

    #[test]
    fn test_padded_marker() {
        let buckets = classify("Rama\n   -----   \nKrishna");
        assert_eq!(buckets.en, "Rama\n\nKrishna");
    }

    #[test]
    fn test_paragraph_break_inside_bucket() {
        let buckets = classify("Line one\n---\nLine two");
        assert_eq!(buckets.en, "Line one\n\nLine two");
    }

    #[test]
    fn test_four_blank_lines_collapse_to_one() {
        let buckets = classify("Line one\n\n\n\n\nLine two");
        assert_eq!(buckets.en, "Line one\n\nLine two");
    }

    #[test]
    fn test_trailing_whitespace_removed() {
        let buckets = classify("  Rama   \t\nKrishna  ");
        assert_eq!(buckets.en, "Rama\nKrishna");
    }

    #[test]
    fn test_crlf_input() {
        let buckets = classify("नमस्ते\r\n---\r\nరామ\r\n");
        assert_eq!(buckets.sa, "नमस्ते");
        assert_eq!(buckets.te, "రామ");
    }

    #[test]
    fn test_break_goes_to_bucket_of_previous_line_only() {
        // The break belongs to `sa`; `te` starts clean.
        let buckets = classify("नमः\n\nరామ\nनमः");
        assert_eq!(buckets.sa, "नमः\n\nनमः");
        assert_eq!(buckets.te, "రామ");
    }

    #[test]
    fn test_empty_input() {
        assert!(classify("").is_empty());
        assert!(classify("\n\n---\n").is_empty());
    }

    #[test]
    fn test_deterministic() {
        let text = "ॐ\nఓం\nOm\n---\n॥ १ ॥";
        assert_eq!(classify(text), classify(text));
    }
}
