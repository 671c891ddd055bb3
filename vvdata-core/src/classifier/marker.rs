//! Label-prefix adapter (`sa:`, `te:`, `en:`)

use super::bucket::{Bucket, Buckets};
use super::{read_raw_text, ParsedVerse, VerseParser};
use crate::error::Result;
use std::path::Path;

/// Buckets lines by explicit language labels
///
/// A line starting with `sa:`, `te:` or `en:` (any case) opens that bucket
/// and contributes the text after the label. Unlabelled lines follow the
/// last label, or go to `sa` before the first one. Script content is not
/// inspected.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkerParser;

impl MarkerParser {
    /// Create a new marker parser
    pub fn new() -> Self {
        Self
    }

    /// Split labelled text into the three buckets
    pub fn classify(&self, raw_text: &str) -> Buckets {
        let mut blocks = [String::new(), String::new(), String::new()];
        let mut current: Option<Bucket> = None;

        for line in raw_text.trim().lines() {
            let line = line.trim();
            let (bucket, content) = match split_label(line) {
                Some((bucket, rest)) => {
                    current = Some(bucket);
                    (bucket, rest.trim())
                }
                None => (current.unwrap_or(Bucket::Sa), line),
            };

            let block = &mut blocks[bucket.index()];
            block.push_str(content);
            block.push('\n');
        }

        let [sa, te, en] = blocks.map(|block| block.trim().to_string());
        Buckets { sa, te, en }
    }
}

fn split_label(line: &str) -> Option<(Bucket, &str)> {
    let label = line.get(..3)?;
    let bucket = Bucket::ALL
        .into_iter()
        .find(|bucket| label.eq_ignore_ascii_case(&format!("{}:", bucket.key())))?;
    Some((bucket, &line[3..]))
}

impl VerseParser for MarkerParser {
    fn name(&self) -> &str {
        "marker"
    }

    fn parse_file(&self, path: &Path) -> Result<ParsedVerse> {
        let text = read_raw_text(path)?;
        Ok(self.classify(&text).into_object())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labelled_lines() {
        let buckets = MarkerParser::new().classify("sa: text1\nte: text2");
        assert_eq!(buckets.sa, "text1");
        assert_eq!(buckets.te, "text2");
        assert_eq!(buckets.en, "");
    }

    #[test]
    fn test_labels_are_case_insensitive() {
        let buckets = MarkerParser::new().classify("EN: Hello\nTe:నమస్కారం");
        assert_eq!(buckets.en, "Hello");
        assert_eq!(buckets.te, "నమస్కారం");
    }

    #[test]
    fn test_continuation_lines_follow_label() {
        let text = "sa: ॐ नमः\n  शिवाय  \nen: Salutations\nto Shiva";
        let buckets = MarkerParser::new().classify(text);
        assert_eq!(buckets.sa, "ॐ नमः\nशिवाय");
        assert_eq!(buckets.en, "Salutations\nto Shiva");
    }

    #[test]
    fn test_unlabelled_text_goes_to_sa() {
        let buckets = MarkerParser::new().classify("Rama\nరామ");
        assert_eq!(buckets.sa, "Rama\nరామ");
        assert!(buckets.te.is_empty() && buckets.en.is_empty());
    }

    #[test]
    fn test_multibyte_line_start_is_not_a_label() {
        // Non-ASCII line starts never match a label.
        let buckets = MarkerParser::new().classify("రామ\nsa: x");
        assert_eq!(buckets.sa, "రామ\nx");
    }
}
