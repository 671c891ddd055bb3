//! Validate command implementation

use super::ConfigArgs;
use crate::config::Settings;
use anyhow::Result;
use clap::Args;
use vvdata_core::discovery::discover_raw_files;
use vvdata_core::ProcessingState;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

/// What a valid configuration points at
#[derive(Debug)]
struct Inspection {
    raw_files: usize,
    parser: String,
    tracked: usize,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        let settings = self.config.settings()?;
        match &settings.source {
            Some(path) => println!("Validating configuration: {}", path.display()),
            None => println!("Validating default configuration"),
        }

        match inspect(&settings) {
            Ok(found) => {
                let layout = &settings.coordinator;
                println!("✓ Configuration is valid!");
                println!("  Collection: {}", layout.collection);
                println!("  Source tag: {}", layout.source_tag());
                println!(
                    "  Raw dir:    {} ({} verse file(s))",
                    layout.raw_dir.display(),
                    found.raw_files
                );
                println!("  Data dir:   {}", layout.output_dir.display());
                println!("  Parser:     {}", found.parser);
                println!("  State:      {} tracked file(s)", found.tracked);
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {e}"))
            }
        }
    }
}

fn inspect(settings: &Settings) -> vvdata_core::Result<Inspection> {
    let raw_files = discover_raw_files(&settings.coordinator.raw_dir)?.len();
    let parser = settings.parser.build()?;
    let state = ProcessingState::load(&settings.coordinator.state_path)?;

    Ok(Inspection {
        raw_files,
        parser: parser.name().to_string(),
        tracked: state.files.len(),
    })
}
