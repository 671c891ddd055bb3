//! Raw verse file discovery

use crate::error::{Result, VvError};
use glob::{glob, Pattern};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// A raw transcript found under the raw-input root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFile {
    /// Absolute (or root-joined) path
    pub path: PathBuf,
    /// Path relative to the raw root, with `/` separators
    pub rel_path: String,
    /// Verse number parsed from the filename, when it fits
    pub verse: Option<u32>,
}

fn verse_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)verse[-_]?(\d+)\.(txt|md|json)$").expect("static pattern is valid")
    })
}

/// Check whether a filename looks like a raw verse file
pub fn is_verse_file_name(name: &str) -> bool {
    verse_name_pattern().is_match(name)
}

/// Extract the verse number from a raw filename
///
/// Returns `None` when the name does not match or the digits overflow.
pub fn verse_number(name: &str) -> Option<u32> {
    verse_name_pattern()
        .captures(name)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse().ok())
}

/// List raw verse files directly under `root`, sorted by path
pub fn discover_raw_files(root: &Path) -> Result<Vec<RawFile>> {
    if !root.is_dir() {
        return Err(VvError::RawDirNotFound(root.to_path_buf()));
    }

    let pattern = format!("{}/*", Pattern::escape(&root.to_string_lossy()));
    let entries = glob(&pattern).map_err(|e| VvError::Pattern(format!("{pattern}: {e}")))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| {
            let path = e.path().to_path_buf();
            VvError::io(path, e.into())
        })?;
        if !path.is_file() {
            continue;
        }

        let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };
        if !is_verse_file_name(&name) {
            log::trace!("Ignoring non-verse file {name}");
            continue;
        }

        let rel_path = path
            .strip_prefix(root)
            .unwrap_or(&path)
            .to_string_lossy()
            .replace('\\', "/");
        files.push(RawFile {
            verse: verse_number(&name),
            rel_path,
            path,
        });
    }

    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}
