//! Plain text output formatter

use super::{bucket_text, OutputFormatter};
use anyhow::Result;
use std::io::Write;
use vvdata_core::classifier::ParsedVerse;
use vvdata_core::Bucket;

/// Plain text formatter - one labelled block per bucket
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_verse(&mut self, file: &str, verse: &ParsedVerse) -> Result<()> {
        writeln!(self.writer, "== {file} ==")?;
        for bucket in Bucket::ALL {
            writeln!(self.writer, "[{bucket}]")?;
            let text = bucket_text(verse, bucket);
            if !text.is_empty() {
                writeln!(self.writer, "{text}")?;
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
