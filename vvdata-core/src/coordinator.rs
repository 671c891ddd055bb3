//! Incremental rebuild of a verse data set
//!
//! A run walks through `Discover -> Diff -> Process -> Rebuild-Derived ->
//! Persist -> Publish`. Derived documents are always recomputed from the
//! whole output directory, so a run also repairs whatever an earlier,
//! interrupted run left behind. State is written last: a crash between
//! writes makes the next run reprocess rather than skip.

use crate::artifacts::{scan_output_dir, write_json, IndexDocument, ManifestDocument};
use crate::classifier::VerseParser;
use crate::config::CoordinatorConfig;
use crate::discovery::{discover_raw_files, RawFile};
use crate::error::Result;
use crate::fingerprint::sha256_file;
use crate::record::{record_file_name, VerseRecord};
use crate::state::{FileState, ProcessingState};
use crate::vcs::{publish, NoVersionControl, PublishOutcome, PublishPolicy, VersionControl};
use std::path::PathBuf;

/// Per-invocation switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Parse and report only; write nothing
    pub dry_run: bool,
    /// Treat every candidate as changed
    pub force_all: bool,
    /// Publishing steps after a successful write phase
    pub publish: PublishPolicy,
}

/// Progress hooks; every method defaults to a no-op
pub trait RunObserver {
    /// Called once the changed set is known
    fn changes_detected(&mut self, _count: usize) {}

    /// Called after a raw file was turned into a record
    fn file_processed(&mut self, _rel_path: &str) {}

    /// Called when a changed file is skipped
    fn file_skipped(&mut self, _rel_path: &str) {}
}

/// Observer that ignores every event
#[derive(Debug, Default)]
pub struct NoopObserver;

impl RunObserver for NoopObserver {}

/// How a run ended
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// No raw verse files under the root
    NoCandidates,
    /// Every candidate matched its stored fingerprint
    NothingToDo {
        /// Number of raw files examined
        candidates: usize,
    },
    /// Changed files were processed
    Updated(UpdateSummary),
}

/// Counts and artifacts of a run that processed files
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateSummary {
    /// Number of raw files examined
    pub candidates: usize,
    /// Relative paths selected for processing
    pub changed: Vec<String>,
    /// Records produced (written unless dry-run)
    pub processed: usize,
    /// Changed files skipped for lack of a verse number
    pub skipped: Vec<String>,
    /// State entries whose raw file is gone (kept, not pruned)
    pub stale: Vec<String>,
    /// Whether this was a preview run
    pub dry_run: bool,
    /// Rebuilt index (absent in dry-run)
    pub index: Option<IndexDocument>,
    /// Rebuilt manifest (absent in dry-run)
    pub manifest: Option<ManifestDocument>,
    /// Publishing result, when enabled and not dry-run
    pub publish: Option<PublishOutcome>,
}

#[derive(Debug)]
struct Change {
    file: RawFile,
    sha256: String,
}

/// Current UTC time as ISO-8601 with seconds precision and `+00:00` offset
pub fn utc_timestamp() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, false)
}

/// Drives one rebuild of the data set
pub struct Coordinator {
    config: CoordinatorConfig,
    parser: Box<dyn VerseParser>,
    vcs: Box<dyn VersionControl>,
    clock: fn() -> String,
}

impl Coordinator {
    /// Create a coordinator without a version-control collaborator
    pub fn new(config: CoordinatorConfig, parser: Box<dyn VerseParser>) -> Self {
        Self {
            config,
            parser,
            vcs: Box::new(NoVersionControl),
            clock: utc_timestamp,
        }
    }

    /// Attach a version-control collaborator
    pub fn with_version_control(mut self, vcs: Box<dyn VersionControl>) -> Self {
        self.vcs = vcs;
        self
    }

    /// Replace the timestamp source
    pub fn with_clock(mut self, clock: fn() -> String) -> Self {
        self.clock = clock;
        self
    }

    /// Configuration in use
    pub fn config(&self) -> &CoordinatorConfig {
        &self.config
    }

    /// Name of the parser in use
    pub fn parser_name(&self) -> &str {
        self.parser.name()
    }

    /// Run the pipeline once
    pub fn run(&self, options: &RunOptions, observer: &mut dyn RunObserver) -> Result<RunOutcome> {
        let candidates = discover_raw_files(&self.config.raw_dir)?;
        if candidates.is_empty() {
            log::info!("No verse files found in {}", self.config.raw_dir.display());
            return Ok(RunOutcome::NoCandidates);
        }

        let mut state = ProcessingState::load(&self.config.state_path)?;
        let stale = state.stale_entries(candidates.iter().map(|c| c.rel_path.as_str()));
        if !stale.is_empty() {
            log::debug!("State keeps {} entries without a raw file: {:?}", stale.len(), stale);
        }

        let candidate_count = candidates.len();
        let changes = self.diff(candidates, &state, options.force_all)?;
        if changes.is_empty() {
            log::info!("No changes detected among {candidate_count} raw file(s)");
            return Ok(RunOutcome::NothingToDo {
                candidates: candidate_count,
            });
        }

        let changed: Vec<String> = changes.iter().map(|c| c.file.rel_path.clone()).collect();
        log::info!("{} file(s) to process: {:?}", changed.len(), changed);
        observer.changes_detected(changes.len());

        let (processed, skipped) = self.process(changes, &mut state, options.dry_run, observer)?;

        let mut summary = UpdateSummary {
            candidates: candidate_count,
            changed,
            processed,
            skipped,
            stale,
            dry_run: options.dry_run,
            index: None,
            manifest: None,
            publish: None,
        };

        if options.dry_run {
            return Ok(RunOutcome::Updated(summary));
        }

        let (index, manifest) = self.rebuild_derived()?;
        self.persist(&index, &manifest, &state)?;
        summary.publish = publish(self.vcs.as_ref(), &self.publish_paths(), options.publish);
        summary.index = Some(index);
        summary.manifest = Some(manifest);

        Ok(RunOutcome::Updated(summary))
    }

    fn diff(
        &self,
        candidates: Vec<RawFile>,
        state: &ProcessingState,
        force_all: bool,
    ) -> Result<Vec<Change>> {
        let mut changes = Vec::new();
        for file in candidates {
            let sha256 = sha256_file(&file.path)?;
            if force_all || state.is_changed(&file.rel_path, &sha256) {
                changes.push(Change { file, sha256 });
            }
        }
        Ok(changes)
    }

    fn process(
        &self,
        changes: Vec<Change>,
        state: &mut ProcessingState,
        dry_run: bool,
        observer: &mut dyn RunObserver,
    ) -> Result<(usize, Vec<String>)> {
        let mut processed = 0;
        let mut skipped = Vec::new();

        for Change { file, sha256 } in changes {
            let Some(verse) = file.verse else {
                log::warn!("Skip unnumbered file: {}", file.rel_path);
                observer.file_skipped(&file.rel_path);
                skipped.push(file.rel_path);
                continue;
            };

            let target = record_file_name(verse);
            let parsed = self.parser.parse_file(&file.path)?;
            let record =
                VerseRecord::from_parsed(parsed, &self.config.collection, verse, &(self.clock)())?;

            if dry_run {
                log::debug!("Would write {target} from {}", file.rel_path);
            } else {
                write_json(&self.config.output_dir.join(&target), &record)?;
                log::debug!("Wrote {target} from {}", file.rel_path);
            }

            processed += 1;
            observer.file_processed(&file.rel_path);
            state.record(
                file.rel_path,
                FileState {
                    sha256,
                    verse,
                    target,
                },
            );
        }

        Ok((processed, skipped))
    }

    fn rebuild_derived(&self) -> Result<(IndexDocument, ManifestDocument)> {
        let items = scan_output_dir(&self.config.output_dir)?;
        let total = items.len();
        let index = IndexDocument::new(self.config.collection.clone(), items);
        let manifest = ManifestDocument::new(&self.config.base, total, (self.clock)());
        Ok((index, manifest))
    }

    fn persist(
        &self,
        index: &IndexDocument,
        manifest: &ManifestDocument,
        state: &ProcessingState,
    ) -> Result<()> {
        write_json(&self.config.index_path(), index)?;
        write_json(&self.config.manifest_path(), manifest)?;
        state.save(&self.config.state_path)
    }

    fn publish_paths(&self) -> Vec<PathBuf> {
        vec![
            self.config.output_dir.clone(),
            self.config.manifests_dir.clone(),
            self.config.state_path.clone(),
        ]
    }
}
