//! Version-control collaborator
//!
//! Publishing is best effort: every step reports success as a boolean and
//! a failure never aborts a run.

use std::path::PathBuf;

/// Commit message used for data refreshes
pub const COMMIT_MESSAGE: &str = "Parsed updates from raw";

/// Stage, commit and push operations of a repository
pub trait VersionControl {
    /// Stage the given paths
    fn stage(&self, paths: &[PathBuf]) -> bool;

    /// Commit staged changes
    fn commit(&self, message: &str) -> bool;

    /// Push to the default remote
    fn push(&self) -> bool;
}

/// Collaborator for runs without a repository; every step fails
#[derive(Debug, Clone, Copy, Default)]
pub struct NoVersionControl;

impl VersionControl for NoVersionControl {
    fn stage(&self, _paths: &[PathBuf]) -> bool {
        false
    }

    fn commit(&self, _message: &str) -> bool {
        false
    }

    fn push(&self) -> bool {
        false
    }
}

/// Which publishing steps are enabled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PublishPolicy {
    /// Commit after a successful write phase
    pub commit: bool,
    /// Push after committing
    pub push: bool,
}

impl PublishPolicy {
    /// True when any step is enabled
    pub fn is_enabled(&self) -> bool {
        self.commit || self.push
    }
}

/// What publishing achieved
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PublishOutcome {
    /// Paths were staged
    pub staged: bool,
    /// A commit was created
    pub committed: bool,
    /// Push succeeded (false when not attempted)
    pub pushed: bool,
    /// Push was attempted
    pub push_attempted: bool,
}

/// Stage `paths`, then commit and push as the policy allows
///
/// Returns `None` when the policy disables publishing.
pub fn publish(
    vcs: &dyn VersionControl,
    paths: &[PathBuf],
    policy: PublishPolicy,
) -> Option<PublishOutcome> {
    if !policy.is_enabled() {
        return None;
    }

    let staged = vcs.stage(paths);
    if !staged {
        log::debug!("Staging failed; continuing");
    }

    let committed = policy.commit && vcs.commit(COMMIT_MESSAGE);
    let pushed = policy.push && vcs.push();

    Some(PublishOutcome {
        staged,
        committed,
        pushed,
        push_attempted: policy.push,
    })
}
