//! Raw verse parsers
//!
//! A parser turns one raw transcript into a loosely-typed record holding at
//! least the `sa`, `te` and `en` fields. Parsers are interchangeable behind
//! [`VerseParser`] and chosen by configuration through [`ParserSpec`].

mod bucket;
mod command;
mod marker;
mod script_lines;

pub use bucket::{Bucket, Buckets};
pub use command::CommandParser;
pub use marker::MarkerParser;
pub use script_lines::LineClassifier;

use crate::error::{Result, VvError};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Record produced by a parser, before validation
pub type ParsedVerse = serde_json::Map<String, serde_json::Value>;

/// Capability every raw-file parser provides
pub trait VerseParser: Send + Sync {
    /// Name used in configuration and diagnostics
    fn name(&self) -> &str;

    /// Parse one raw file into a record
    fn parse_file(&self, path: &Path) -> Result<ParsedVerse>;
}

/// Built-in parser kinds with a short description
pub const BUILTIN_PARSERS: [(&str, &str); 3] = [
    ("script", "Bucket lines by Unicode script (Telugu, Latin, Devanagari)"),
    ("marker", "Bucket lines by 'sa:' / 'te:' / 'en:' label prefixes"),
    ("command", "Run an external program that prints the record as JSON"),
];

/// Parser selection, as named in configuration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ParserSpec {
    /// Script-range line classifier
    #[default]
    Script,
    /// Label-prefix adapter
    Marker,
    /// External executable
    Command(PathBuf),
}

impl ParserSpec {
    /// Resolve a configured parser kind
    pub fn from_kind(kind: &str, command: Option<PathBuf>) -> Result<Self> {
        match kind.trim().to_ascii_lowercase().as_str() {
            "script" => Ok(ParserSpec::Script),
            "marker" => Ok(ParserSpec::Marker),
            "command" => command
                .map(ParserSpec::Command)
                .ok_or(VvError::ParserCommandUnset),
            _ => Err(VvError::UnknownParser(kind.to_string())),
        }
    }

    /// Instantiate the parser, failing fast when it cannot be used
    pub fn build(&self) -> Result<Box<dyn VerseParser>> {
        Ok(match self {
            ParserSpec::Script => Box::new(LineClassifier::new()),
            ParserSpec::Marker => Box::new(MarkerParser::new()),
            ParserSpec::Command(program) => Box::new(CommandParser::new(program.clone())?),
        })
    }
}

impl fmt::Display for ParserSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParserSpec::Script => f.write_str("script"),
            ParserSpec::Marker => f.write_str("marker"),
            ParserSpec::Command(program) => write!(f, "command ({})", program.display()),
        }
    }
}

/// Rewrite CRLF and lone CR line endings as LF
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Read a raw file as UTF-8 with normalized line endings
pub fn read_raw_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| VvError::io(path, e))?;
    let text = String::from_utf8(bytes).map_err(|source| VvError::InvalidUtf8 {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(normalize_line_endings(&text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_from_kind_builtins() {
        assert_eq!(ParserSpec::from_kind("script", None).unwrap(), ParserSpec::Script);
        assert_eq!(ParserSpec::from_kind(" Marker ", None).unwrap(), ParserSpec::Marker);
        assert_eq!(
            ParserSpec::from_kind("command", Some(PathBuf::from("tools/parse"))).unwrap(),
            ParserSpec::Command(PathBuf::from("tools/parse"))
        );
    }

    #[test]
    fn test_from_kind_unknown() {
        match ParserSpec::from_kind("python", None) {
            Err(VvError::UnknownParser(name)) => assert_eq!(name, "python"),
            other => panic!("Expected UnknownParser, got {other:?}"),
        }
    }

    #[test]
    fn test_command_without_path() {
        assert!(matches!(
            ParserSpec::from_kind("command", None),
            Err(VvError::ParserCommandUnset)
        ));
    }

    #[test]
    fn test_build_missing_command_fails_fast() {
        let spec = ParserSpec::Command(PathBuf::from("/nonexistent/parse-verse"));
        assert!(matches!(spec.build(), Err(VvError::ParserCommandNotFound(_))));
    }

    #[test]
    fn test_build_names() {
        assert_eq!(ParserSpec::Script.build().unwrap().name(), "script");
        assert_eq!(ParserSpec::Marker.build().unwrap().name(), "marker");
    }

    #[test]
    fn test_normalize_line_endings() {
        assert_eq!(normalize_line_endings("a\r\nb\rc\n"), "a\nb\nc\n");
    }

    #[test]
    fn test_read_raw_text_rejects_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("verse-001.txt");
        std::fs::write(&path, [0xffu8, 0xfe, 0x00]).unwrap();

        assert!(matches!(
            read_raw_text(&path),
            Err(VvError::InvalidUtf8 { .. })
        ));
    }

    #[test]
    fn test_read_raw_text_normalizes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("verse-001.txt");
        std::fs::write(&path, "नमस्ते\r\n---\r\nరామ").unwrap();

        assert_eq!(read_raw_text(&path).unwrap(), "नमस्ते\n---\nరామ");
    }
}
