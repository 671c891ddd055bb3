//! Verse data normalization and incremental rebuild
//!
//! Raw verse transcripts mix Sanskrit (Devanagari), Telugu and English
//! lines with little structure. This crate splits each transcript into three
//! language buckets by Unicode script and keeps a directory of per-verse
//! JSON records, plus its index and manifest, in step with the raw files.
//!
//! # Architecture
//!
//! - **Classification**: [`script`] detects scripts on a line;
//!   [`classifier`] buckets whole files and hosts the pluggable parsers.
//! - **Records**: [`record`] validates parser output and normalizes it.
//! - **Rebuild**: [`coordinator`] fingerprints raw files, diffs them against
//!   [`state`], writes changed records and recomputes [`artifacts`].
//!
//! # Example
//!
//! ```rust
//! use vvdata_core::classifier::LineClassifier;
//!
//! let buckets = LineClassifier::new().classify("नमस्ते\n---\nరామ\nRama");
//! assert_eq!(buckets.sa, "नमस्ते");
//! assert_eq!(buckets.te, "రామ");
//! assert_eq!(buckets.en, "Rama");
//! ```

#![warn(missing_docs)]

pub mod artifacts;
pub mod classifier;
pub mod config;
pub mod coordinator;
pub mod discovery;
pub mod error;
pub mod fingerprint;
pub mod record;
pub mod script;
pub mod state;
pub mod vcs;

// Re-export key types
pub use artifacts::{IndexDocument, IndexItem, ManifestDocument};
pub use classifier::{Bucket, Buckets, LineClassifier, ParserSpec, VerseParser};
pub use config::CoordinatorConfig;
pub use coordinator::{Coordinator, RunObserver, RunOptions, RunOutcome, UpdateSummary};
pub use error::{Result, VvError};
pub use record::VerseRecord;
pub use state::ProcessingState;
pub use vcs::{PublishOutcome, PublishPolicy, VersionControl};
