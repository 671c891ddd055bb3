//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use vvdata_core::classifier::ParsedVerse;

/// JSON formatter - outputs parse results as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    verses: Vec<VerseData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct VerseData {
    /// Raw file the record came from
    pub file: String,
    /// Parsed record, extra parser fields included
    pub record: ParsedVerse,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            verses: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_verse(&mut self, file: &str, verse: &ParsedVerse) -> Result<()> {
        self.verses.push(VerseData {
            file: file.to_string(),
            record: verse.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.verses)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use vvdata_core::Buckets;

    #[test]
    fn test_json_array() {
        let verse = Buckets {
            te: "రామ".to_string(),
            ..Default::default()
        }
        .into_object();

        let mut out = Vec::new();
        let mut formatter = JsonFormatter::new(&mut out);
        formatter.format_verse("a.txt", &verse).unwrap();
        formatter.format_verse("b.txt", &verse).unwrap();
        formatter.finish().unwrap();

        let value: Value = serde_json::from_slice(&out).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1]["file"], "b.txt");
        assert_eq!(items[0]["record"]["te"], "రామ");
    }
}
