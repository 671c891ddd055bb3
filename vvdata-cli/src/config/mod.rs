//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use vvdata_core::{CoordinatorConfig, ParserSpec, PublishPolicy};

/// Config file looked up under the repository root when none is given
pub const DEFAULT_CONFIG_PATH: &str = "tools/vvdata.toml";

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "VVDATA_CONFIG";

/// CLI configuration structure
///
/// Every field has a default, so an empty file (or no file at all) yields
/// the standard layout.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CliConfig {
    /// Directory holding the raw verse files
    pub raw_dir: PathBuf,

    /// Root of the published data tree
    pub data_dir: PathBuf,

    /// Public base path of the collection, e.g. `/vv/data/mvr/vishnu`
    pub base: String,

    /// Collection name, e.g. `mvr/vishnu`
    pub collection: String,

    /// Manifest filename under `vv/manifests`
    pub manifest_name: String,

    /// Index filename inside the collection directory
    pub index_name: String,

    /// Processing state file
    pub state_path: PathBuf,

    /// Cloudflare Pages headers file
    pub headers_path: PathBuf,

    /// Keep the headers file up to date
    pub write_headers: bool,

    /// Commit after writing
    pub git_autocommit: bool,

    /// Push after committing
    pub git_autopush: bool,

    /// Parser selection
    pub parser: ParserConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            raw_dir: PathBuf::from("../veda-vedanta-raw/raw_data/mvr/vishnu"),
            data_dir: PathBuf::from("."),
            base: "/vv/data/mvr/vishnu".to_string(),
            collection: "mvr/vishnu".to_string(),
            manifest_name: "vishnu.json".to_string(),
            index_name: "index.json".to_string(),
            state_path: PathBuf::from("vv/state/raw_index.json"),
            headers_path: PathBuf::from("_headers"),
            write_headers: true,
            git_autocommit: true,
            git_autopush: false,
            parser: ParserConfig::default(),
        }
    }
}

/// Parser-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Parser kind: `script`, `marker` or `command`
    pub kind: String,

    /// Executable for the `command` kind
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<PathBuf>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            kind: "script".to_string(),
            command: None,
        }
    }
}

/// Fully resolved settings for one invocation
#[derive(Debug, Clone)]
pub struct Settings {
    /// Repository the data tree lives in
    pub repo_root: PathBuf,
    /// Config file that was loaded, if any
    pub source: Option<PathBuf>,
    /// Locations handed to the coordinator
    pub coordinator: CoordinatorConfig,
    /// Parser to instantiate
    pub parser: ParserSpec,
    /// Cloudflare Pages headers file
    pub headers_path: PathBuf,
    /// Keep the headers file up to date
    pub write_headers: bool,
    /// Commit/push switches from the config file
    pub publish: PublishPolicy,
}

impl CliConfig {
    /// Parse a config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content).map_err(|e| {
            CliError::ConfigError(format!("{}: {}", path.display(), e.message())).into()
        })
    }

    /// Load the config for `repo_root`
    ///
    /// An explicit path must exist. Without one, the default location is
    /// tried and a missing file means defaults.
    pub fn load(explicit: Option<&Path>, repo_root: &Path) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(CliError::ConfigNotFound(path.to_path_buf()).into());
            }
            return Ok((Self::from_file(path)?, Some(path.to_path_buf())));
        }

        let default_path = repo_root.join(DEFAULT_CONFIG_PATH);
        if default_path.is_file() {
            Ok((Self::from_file(&default_path)?, Some(default_path)))
        } else {
            log::debug!("No config at {}; using defaults", default_path.display());
            Ok((Self::default(), None))
        }
    }

    /// Resolve relative paths against `repo_root` and select the parser
    pub fn resolve(&self, repo_root: &Path) -> Result<Settings> {
        let resolve = |path: &Path| -> PathBuf {
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                repo_root.join(path)
            }
        };

        let parser = ParserSpec::from_kind(
            &self.parser.kind,
            self.parser.command.as_deref().map(resolve),
        )?;

        let coordinator = CoordinatorConfig::with_layout(
            resolve(&self.raw_dir),
            &resolve(&self.data_dir),
            &self.base,
            self.collection.clone(),
            resolve(&self.state_path),
        )
        .manifest_name(self.manifest_name.clone())
        .index_name(self.index_name.clone());

        Ok(Settings {
            repo_root: repo_root.to_path_buf(),
            source: None,
            coordinator,
            parser,
            headers_path: resolve(&self.headers_path),
            write_headers: self.write_headers,
            publish: PublishPolicy {
                commit: self.git_autocommit,
                push: self.git_autopush,
            },
        })
    }
}

impl Settings {
    /// Load and resolve in one step
    pub fn load(explicit: Option<&Path>, repo_root: &Path) -> Result<Self> {
        let (config, source) = CliConfig::load(explicit, repo_root)?;
        let mut settings = config.resolve(repo_root)?;
        settings.source = source;
        Ok(settings)
    }
}
