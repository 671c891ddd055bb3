//! Parse command implementation

use crate::input::resolve_patterns;
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use vvdata_core::ParserSpec;

/// Arguments for the parse command
#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Parser kind (script, marker or command)
    #[arg(short, long, default_value = "script")]
    pub parser: String,

    /// Executable for the command parser
    #[arg(long, value_name = "PROGRAM")]
    pub command: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Labelled plain-text blocks
    Text,
    /// JSON array of parsed records
    Json,
    /// Markdown sections
    Markdown,
}

impl ParseArgs {
    /// Execute the parse command
    pub fn execute(&self) -> Result<()> {
        let spec = ParserSpec::from_kind(&self.parser, self.command.clone())?;
        let parser = spec.build()?;
        let files = resolve_patterns(&self.input)?;
        log::info!("Parsing {} file(s) with the {} parser", files.len(), parser.name());

        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(
                File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?,
            )),
            None => Box::new(io::stdout().lock()),
        };

        let mut formatter: Box<dyn OutputFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        };

        for path in &files {
            let verse = parser.parse_file(path)?;
            formatter.format_verse(&path.display().to_string(), &verse)?;
        }
        formatter.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_to_json_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("verse-001.txt");
        let output = dir.path().join("out.json");
        fs::write(&input, "sa: text1\nte: text2").unwrap();

        let args = ParseArgs {
            input: vec![input.display().to_string()],
            parser: "marker".to_string(),
            command: None,
            output: Some(output.clone()),
            format: OutputFormat::Json,
        };
        args.execute().unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(value[0]["record"]["sa"], "text1");
        assert_eq!(value[0]["record"]["te"], "text2");
    }

    #[test]
    fn test_unknown_parser() {
        let args = ParseArgs {
            input: vec!["verse-001.txt".to_string()],
            parser: "regex".to_string(),
            command: None,
            output: None,
            format: OutputFormat::Text,
        };
        let error = args.execute().unwrap_err();
        assert!(error.to_string().contains("regex"));
    }
}
