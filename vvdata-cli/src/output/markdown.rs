//! Markdown output formatter

use super::{bucket_text, OutputFormatter};
use anyhow::Result;
use std::io::Write;
use vvdata_core::classifier::ParsedVerse;
use vvdata_core::Bucket;

/// Markdown formatter - a section per file, a subsection per bucket
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    verse_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            verse_count: 0,
        }
    }
}

impl<W: Write> OutputFormatter for MarkdownFormatter<W> {
    fn format_verse(&mut self, file: &str, verse: &ParsedVerse) -> Result<()> {
        self.verse_count += 1;
        writeln!(self.writer, "## {file}")?;
        for bucket in Bucket::ALL {
            writeln!(self.writer)?;
            writeln!(self.writer, "### {bucket}")?;
            writeln!(self.writer)?;
            let text = bucket_text(verse, bucket);
            if text.is_empty() {
                writeln!(self.writer, "_(empty)_")?;
            } else {
                writeln!(self.writer, "{text}")?;
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total verses: {}*", self.verse_count)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vvdata_core::Buckets;

    #[test]
    fn test_markdown_sections() {
        let verse = Buckets {
            sa: "ॐ".to_string(),
            ..Default::default()
        }
        .into_object();

        let mut out = Vec::new();
        let mut formatter = MarkdownFormatter::new(&mut out);
        formatter.format_verse("verse-001.txt", &verse).unwrap();
        formatter.finish().unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("## verse-001.txt\n\n### sa\n\nॐ\n"));
        assert!(text.contains("### te\n\n_(empty)_"));
        assert!(text.ends_with("---\n*Total verses: 1*\n"));
    }
}
