//! Generate config command implementation

use crate::error::CliError;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Collection the template is written for
    #[arg(long, value_name = "NAME", default_value = "mvr/vishnu")]
    pub collection: String,

    /// Replace an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        if self.output.exists() && !self.force {
            return Err(CliError::OutputExists(self.output.clone()).into());
        }

        println!("Generating configuration template...");
        println!("  Collection: {}", self.collection);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        if let Some(parent) = self.output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Point raw_dir at the raw transcripts of the collection");
        println!("2. Validate your configuration:");
        println!("   vvdata validate --config {}", self.output.display());
        println!("3. Preview an update:");
        println!("   vvdata update --config {} --dry-run", self.output.display());

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        let collection = &self.collection;
        let leaf = collection.rsplit('/').next().unwrap_or(collection);

        format!(
            r#"# vvdata configuration for {collection}
#
# Relative paths resolve against the repository root (--repo-root).

# Raw verse transcripts (verse-NNN.txt / .md / .json)
raw_dir = "../veda-vedanta-raw/raw_data/{collection}"

# Root of the published data tree
data_dir = "."

# Public base path; records are written to <data_dir>/<base>
base = "/vv/data/{collection}"

collection = "{collection}"

# Written to <data_dir>/vv/manifests/<manifest_name>
manifest_name = "{leaf}.json"

# Written next to the records
index_name = "index.json"

# Fingerprints of processed raw files
state_path = "vv/state/raw_index.json"

# Cloudflare Pages headers (CORS + no-store for data and manifests)
headers_path = "_headers"
write_headers = true

# Publishing after a successful update
git_autocommit = true
git_autopush = false

[parser]
# script  - bucket lines by Unicode script
# marker  - bucket lines by sa: / te: / en: labels
# command - run an external program that prints the record as JSON
kind = "script"
# command = "tools/parse-verse"
"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use std::fs;
    use tempfile::TempDir;

    fn args(output: PathBuf, collection: &str) -> GenerateConfigArgs {
        GenerateConfigArgs {
            output,
            collection: collection.to_string(),
            force: false,
        }
    }

    #[test]
    fn test_template_parses() {
        let template = args(PathBuf::from("x.toml"), "gita/bhagavad").generate_template();
        let config: CliConfig = toml::from_str(&template).unwrap();

        assert_eq!(config.collection, "gita/bhagavad");
        assert_eq!(config.base, "/vv/data/gita/bhagavad");
        assert_eq!(config.manifest_name, "bhagavad.json");
        assert_eq!(config.parser.kind, "script");
        assert!(config.parser.command.is_none());
    }

    #[test]
    fn test_default_template_matches_defaults() {
        let template = args(PathBuf::from("x.toml"), "mvr/vishnu").generate_template();
        let config: CliConfig = toml::from_str(&template).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("tools/vvdata.toml");

        args(output.clone(), "mvr/vishnu").execute().unwrap();
        assert!(output.exists());

        let error = args(output.clone(), "mvr/vishnu").execute().unwrap_err();
        assert!(matches!(
            error.downcast_ref::<CliError>(),
            Some(CliError::OutputExists(_))
        ));

        GenerateConfigArgs {
            force: true,
            ..args(output.clone(), "gita/bhagavad")
        }
        .execute()
        .unwrap();
        assert!(fs::read_to_string(&output).unwrap().contains("gita/bhagavad"));
    }
}
