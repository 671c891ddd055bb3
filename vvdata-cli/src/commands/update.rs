//! Update command implementation

use super::ConfigArgs;
use crate::config::Settings;
use crate::headers::ensure_headers;
use crate::progress::ProgressReporter;
use crate::vcs::GitCli;
use anyhow::Result;
use clap::Args;
use std::io::{self, Write};
use vvdata_core::{Coordinator, PublishPolicy, RunOptions, RunOutcome, VvError};

/// Arguments for the update command
#[derive(Debug, Args)]
pub struct UpdateArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Parse and report only; write nothing
    #[arg(long)]
    pub dry_run: bool,

    /// Reprocess every raw file, ignoring stored fingerprints
    #[arg(long)]
    pub force_all: bool,

    /// Push after committing, whatever the config says
    #[arg(long)]
    pub push: bool,
}

impl UpdateArgs {
    /// Execute the update command
    pub fn execute(&self, quiet: bool) -> Result<()> {
        let settings = self.config.settings()?;
        if let Some(source) = &settings.source {
            log::info!("Using config {}", source.display());
        }
        log::debug!("Settings: {:?}", settings);

        let layout = &settings.coordinator;
        if !layout.raw_dir.is_dir() {
            return Err(VvError::RawDirNotFound(layout.raw_dir.clone()).into());
        }
        let parser = settings.parser.build()?;

        if settings.write_headers && !self.dry_run {
            ensure_headers(&settings.headers_path)?;
        }

        let options = self.run_options(&settings);
        let coordinator = Coordinator::new(layout.clone(), parser)
            .with_version_control(Box::new(GitCli::new(&settings.repo_root)));
        log::info!(
            "Updating {} with the {} parser",
            coordinator.config().collection,
            coordinator.parser_name()
        );

        let mut progress = ProgressReporter::new(quiet);
        let outcome = coordinator.run(&options, &mut progress);
        progress.finish();

        report(&outcome?, &settings, &mut io::stdout().lock())?;
        Ok(())
    }

    /// Run switches from the flags, with `--push` layered over the config
    fn run_options(&self, settings: &Settings) -> RunOptions {
        RunOptions {
            dry_run: self.dry_run,
            force_all: self.force_all,
            publish: PublishPolicy {
                commit: settings.publish.commit,
                push: settings.publish.push || self.push,
            },
        }
    }
}

/// Print the status lines for a finished run
fn report(outcome: &RunOutcome, settings: &Settings, out: &mut impl Write) -> io::Result<()> {
    let layout = &settings.coordinator;
    let summary = match outcome {
        RunOutcome::NoCandidates => {
            return writeln!(out, "No verse files found in {}", layout.raw_dir.display());
        }
        RunOutcome::NothingToDo { .. } => {
            return writeln!(out, "No changes detected. Nothing to do.");
        }
        RunOutcome::Updated(summary) => summary,
    };

    writeln!(out, "{} file(s) to process", summary.changed.len())?;
    for rel_path in &summary.skipped {
        writeln!(out, "Skip unnumbered file: {rel_path}")?;
    }

    if summary.dry_run {
        writeln!(out, "Dry run: would write {} verse(s).", summary.processed)?;
        return Ok(());
    }

    if let Some(publish) = &summary.publish {
        if publish.committed {
            writeln!(out, "Committed changes to git.")?;
        }
        if publish.push_attempted {
            if publish.pushed {
                writeln!(out, "Pushed changes.")?;
            } else {
                writeln!(out, "Push failed or nothing to push.")?;
            }
        }
    }

    writeln!(out, "Wrote {} updated verse(s).", summary.processed)?;
    writeln!(out, "Data dir: {}", layout.output_dir.display())?;
    writeln!(out, "Manifest: {}", layout.manifest_path().display())?;
    writeln!(out, "State:    {}", layout.state_path.display())
}
