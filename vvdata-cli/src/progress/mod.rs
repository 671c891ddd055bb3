//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use vvdata_core::RunObserver;

/// Progress reporter for file processing
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Initialize progress bar for file processing
    pub fn init_files(&mut self, total_files: u64) {
        if self.quiet {
            return;
        }

        let pb = ProgressBar::new(total_files);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} files {msg}")
        {
            pb.set_style(style.progress_chars("##-"));
        }
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Update progress for a completed file
    pub fn file_completed(&self, filename: &str) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("Processed: {filename}"));
            pb.inc(1);
        }
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_and_clear();
        }
    }
}

impl RunObserver for ProgressReporter {
    fn changes_detected(&mut self, count: usize) {
        self.init_files(count as u64);
    }

    fn file_processed(&mut self, rel_path: &str) {
        self.file_completed(rel_path);
    }

    fn file_skipped(&mut self, rel_path: &str) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("Skipped: {rel_path}"));
            pb.inc(1);
        }
    }
}
