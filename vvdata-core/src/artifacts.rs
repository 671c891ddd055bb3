//! Derived artifacts: collection index and manifest
//!
//! Both documents are rebuilt from a full scan of the output directory and
//! never patched incrementally.

use crate::error::{Result, VvError};
use crate::record::record_file_name;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Manifest schema version
pub const SCHEMA_VERSION: &str = "1.0";

/// One verse entry of the index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexItem {
    /// Output filename, e.g. `verse-007.json`
    pub file: String,
    /// Verse number
    pub verse: u32,
}

/// Collection index (`index.json`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexDocument {
    /// Collection name, e.g. `mvr/vishnu`
    pub collection: String,
    /// Number of items
    pub count: usize,
    /// Verse files in order
    pub items: Vec<IndexItem>,
}

impl IndexDocument {
    /// Build an index over the given items
    pub fn new(collection: impl Into<String>, items: Vec<IndexItem>) -> Self {
        Self {
            collection: collection.into(),
            count: items.len(),
            items,
        }
    }
}

/// Collection manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestDocument {
    /// Public base path, e.g. `/vv/data/mvr/vishnu`
    pub base: String,
    /// Number of verse records
    pub total: usize,
    /// Schema version of the records
    pub schema_version: String,
    /// When the manifest was rebuilt (ISO-8601, UTC)
    pub last_updated: String,
}

impl ManifestDocument {
    /// Build a manifest for `base` (leading slash added)
    pub fn new(base: &str, total: usize, last_updated: impl Into<String>) -> Self {
        Self {
            base: format!("/{}", base.trim_matches('/')),
            total,
            schema_version: SCHEMA_VERSION.to_string(),
            last_updated: last_updated.into(),
        }
    }
}

fn output_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^verse-(\d{3,})\.json$").expect("static pattern is valid"))
}

/// Parse an output filename into its verse number
///
/// Only names the coordinator writes are accepted: `verse-0001.json` is not
/// a second spelling of `verse-001.json`.
pub fn output_verse_number(name: &str) -> Option<u32> {
    output_name_pattern()
        .captures(name)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse().ok())
        .filter(|verse| record_file_name(*verse) == name)
}

/// Scan the output directory for every verse record file
///
/// Items are ordered by verse number, which is filename order for every
/// three-digit name. A missing directory yields no items.
pub fn scan_output_dir(dir: &Path) -> Result<Vec<IndexItem>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut items = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| VvError::io(dir, e))? {
        let entry = entry.map_err(|e| VvError::io(dir, e))?;
        if !entry.path().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if let Some(verse) = output_verse_number(&name) {
            items.push(IndexItem { file: name, verse });
        }
    }

    items.sort_by_key(|item| item.verse);
    Ok(items)
}

/// Serialize `value` as pretty JSON to `path`, creating parent directories
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| VvError::io(parent, e))?;
    }
    let content = serde_json::to_string_pretty(value).map_err(|e| VvError::json(path, e))?;
    fs::write(path, content).map_err(|e| VvError::io(path, e))
}

/// Read a JSON document from `path`
pub fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| VvError::io(path, e))?;
    serde_json::from_str(&content).map_err(|e| VvError::json(path, e))
}
