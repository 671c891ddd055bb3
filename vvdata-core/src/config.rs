//! Resolved configuration for a rebuild run

use std::path::{Path, PathBuf};

/// Immutable locations and names a coordinator works with
///
/// All paths are expected to be resolved (absolute or relative to the
/// working directory) by whoever builds the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoordinatorConfig {
    /// Directory holding the raw verse files
    pub raw_dir: PathBuf,
    /// Directory verse records are written to (`data_dir/base`)
    pub output_dir: PathBuf,
    /// Directory the manifest is written to
    pub manifests_dir: PathBuf,
    /// Manifest filename inside `manifests_dir`
    pub manifest_name: String,
    /// Index filename inside `output_dir`
    pub index_name: String,
    /// Persisted processing state
    pub state_path: PathBuf,
    /// Public base path without surrounding slashes, e.g. `vv/data/mvr/vishnu`
    pub base: String,
    /// Collection name, e.g. `mvr/vishnu`
    pub collection: String,
}

impl CoordinatorConfig {
    /// Derive the standard layout under `data_dir`
    ///
    /// Records go to `data_dir/<base>` and the manifest to
    /// `data_dir/vv/manifests`.
    pub fn with_layout(
        raw_dir: impl Into<PathBuf>,
        data_dir: &Path,
        base: &str,
        collection: impl Into<String>,
        state_path: impl Into<PathBuf>,
    ) -> Self {
        let base = base.trim_matches('/').to_string();
        Self {
            raw_dir: raw_dir.into(),
            output_dir: data_dir.join(&base),
            manifests_dir: data_dir.join("vv").join("manifests"),
            manifest_name: "vishnu.json".to_string(),
            index_name: "index.json".to_string(),
            state_path: state_path.into(),
            base,
            collection: collection.into(),
        }
    }

    /// Override the manifest filename
    pub fn manifest_name(mut self, name: impl Into<String>) -> Self {
        self.manifest_name = name.into();
        self
    }

    /// Override the index filename
    pub fn index_name(mut self, name: impl Into<String>) -> Self {
        self.index_name = name.into();
        self
    }

    /// Full path of the index document
    pub fn index_path(&self) -> PathBuf {
        self.output_dir.join(&self.index_name)
    }

    /// Full path of the manifest document
    pub fn manifest_path(&self) -> PathBuf {
        self.manifests_dir.join(&self.manifest_name)
    }

    /// Source tag written into record metadata
    pub fn source_tag(&self) -> &str {
        crate::record::source_tag(&self.collection)
    }
}
