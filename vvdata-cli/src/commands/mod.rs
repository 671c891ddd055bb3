//! CLI command implementations

use crate::config::{Settings, CONFIG_ENV};
use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::PathBuf;

pub mod generate_config;
pub mod parse;
pub mod update;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Refresh verse records, index and manifest from changed raw files
    Update(update::UpdateArgs),

    /// Run a parser on raw files and print the language buckets
    Parse(parse::ParseArgs),

    /// Check a configuration without processing anything
    Validate(validate::ValidateArgs),

    /// Write a commented configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List built-in parser kinds
    Parsers,
}

/// Where to find the configuration and the repository
#[derive(Debug, Clone, Args)]
pub struct ConfigArgs {
    /// Configuration file (default: <REPO_ROOT>/tools/vvdata.toml)
    #[arg(short, long, value_name = "FILE", env = CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// Repository root that relative config paths resolve against
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub repo_root: PathBuf,
}

impl ConfigArgs {
    /// Load and resolve the settings these arguments point at
    pub fn settings(&self) -> Result<Settings> {
        Settings::load(self.config.as_deref(), &self.repo_root)
    }
}

/// Print the built-in parser kinds
pub fn list_parsers() {
    println!("Available parsers:");
    for (name, description) in vvdata_core::classifier::BUILTIN_PARSERS {
        println!("  {name:<10} {description}");
    }
}
