//! External parser executable

use super::{ParsedVerse, VerseParser};
use crate::error::{Result, VvError};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Delegates parsing to an external program
///
/// The program receives the raw file path as its only argument and must
/// print a JSON object on stdout. Anything else is a parser failure.
#[derive(Debug, Clone)]
pub struct CommandParser {
    program: PathBuf,
}

impl CommandParser {
    /// Create a parser for `program`, which must exist
    pub fn new(program: PathBuf) -> Result<Self> {
        if !program.is_file() {
            return Err(VvError::ParserCommandNotFound(program));
        }
        Ok(Self { program })
    }

    fn failure(&self, path: &Path, reason: impl Into<String>) -> VvError {
        VvError::ParserFailed {
            parser: self.name().to_string(),
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }
}

impl VerseParser for CommandParser {
    fn name(&self) -> &str {
        "command"
    }

    fn parse_file(&self, path: &Path) -> Result<ParsedVerse> {
        log::debug!("Running {} {}", self.program.display(), path.display());

        let output = Command::new(&self.program)
            .arg(path)
            .output()
            .map_err(|e| {
                self.failure(path, format!("cannot run {}: {e}", self.program.display()))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(self.failure(
                path,
                format!("exited with {}: {}", output.status, stderr.trim()),
            ));
        }

        match serde_json::from_slice(&output.stdout) {
            Ok(serde_json::Value::Object(object)) => Ok(object),
            Ok(_) => Err(self.failure(path, "output is not a JSON object")),
            Err(e) => Err(self.failure(path, format!("invalid JSON output: {e}"))),
        }
    }
}
