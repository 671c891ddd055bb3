//! Persisted change-detection state

use crate::error::{Result, VvError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// What was recorded for one raw file on its last processing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileState {
    /// Fingerprint of the raw bytes
    pub sha256: String,
    /// Verse number parsed from the filename
    pub verse: u32,
    /// Output filename written for it
    pub target: String,
}

/// Bookkeeping that decides which raw files changed since the last run
///
/// Entries are never removed, even when the raw file disappears.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingState {
    /// Commit of the raw repository last parsed (kept as loaded)
    #[serde(default)]
    pub last_parsed_commit: String,
    /// Per raw file, keyed by path relative to the raw root
    #[serde(default)]
    pub files: BTreeMap<String, FileState>,
}

impl ProcessingState {
    /// Load state from `path`; a missing file yields an empty state
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|e| VvError::io(path, e))?;
        serde_json::from_str(&content).map_err(|e| VvError::json(path, e))
    }

    /// Write state to `path`, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        crate::artifacts::write_json(path, self)
    }

    /// Fingerprint stored for a raw file
    pub fn fingerprint(&self, rel_path: &str) -> Option<&str> {
        self.files.get(rel_path).map(|entry| entry.sha256.as_str())
    }

    /// True when the file has no entry or a different fingerprint
    pub fn is_changed(&self, rel_path: &str, sha256: &str) -> bool {
        self.fingerprint(rel_path) != Some(sha256)
    }

    /// Record the outcome of processing a raw file
    pub fn record(&mut self, rel_path: impl Into<String>, entry: FileState) {
        self.files.insert(rel_path.into(), entry);
    }

    /// Entries whose raw file is not among `present`
    pub fn stale_entries<'a, I>(&self, present: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let present: std::collections::BTreeSet<&str> = present.into_iter().collect();
        self.files
            .keys()
            .filter(|rel| !present.contains(rel.as_str()))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entry(sha: &str, verse: u32) -> FileState {
        FileState {
            sha256: sha.to_string(),
            verse,
            target: crate::record::record_file_name(verse),
        }
    }

    #[test]
    fn test_missing_file_is_empty_state() {
        let dir = TempDir::new().unwrap();
        let state = ProcessingState::load(&dir.path().join("raw_index.json")).unwrap();
        assert_eq!(state, ProcessingState::default());
        assert_eq!(state.last_parsed_commit, "");
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vv").join("state").join("raw_index.json");

        let mut state = ProcessingState::default();
        state.record("verse-001.txt", entry("abc", 1));
        state.save(&path).unwrap();

        let loaded = ProcessingState::load(&path).unwrap();
        assert_eq!(loaded, state);

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["files"]["verse-001.txt"]["target"], "verse-001.json");
        assert_eq!(raw["last_parsed_commit"], "");
    }

    #[test]
    fn test_is_changed() {
        let mut state = ProcessingState::default();
        assert!(state.is_changed("verse-001.txt", "abc"));

        state.record("verse-001.txt", entry("abc", 1));
        assert!(!state.is_changed("verse-001.txt", "abc"));
        assert!(state.is_changed("verse-001.txt", "def"));
    }

    #[test]
    fn test_stale_entries() {
        let mut state = ProcessingState::default();
        state.record("verse-001.txt", entry("a", 1));
        state.record("verse-002.txt", entry("b", 2));

        assert_eq!(state.stale_entries(["verse-001.txt"]), vec!["verse-002.txt"]);
    }

    #[test]
    fn test_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("raw_index.json");
        fs::write(&path, "{not json").unwrap();

        assert!(matches!(
            ProcessingState::load(&path),
            Err(VvError::Json { .. })
        ));
    }

    #[test]
    fn test_tolerates_missing_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("raw_index.json");
        fs::write(&path, "{}").unwrap();

        assert_eq!(ProcessingState::load(&path).unwrap(), ProcessingState::default());
    }
}
