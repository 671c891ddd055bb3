//! Output formatting module

use anyhow::Result;
use vvdata_core::classifier::ParsedVerse;
use vvdata_core::Bucket;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output the parse result of one raw file
    fn format_verse(&mut self, file: &str, verse: &ParsedVerse) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Text of one bucket, or an empty string when absent or not a string
pub(crate) fn bucket_text(verse: &ParsedVerse, bucket: Bucket) -> &str {
    verse
        .get(bucket.key())
        .and_then(|v| v.as_str())
        .unwrap_or_default()
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
