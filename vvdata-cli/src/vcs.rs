//! `git` command-line collaborator

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use vvdata_core::VersionControl;

/// Runs `git -C <repo_root> ...` for each publishing step
#[derive(Debug, Clone)]
pub struct GitCli {
    repo_root: PathBuf,
}

impl GitCli {
    /// Create a collaborator for the repository at `repo_root`
    pub fn new(repo_root: impl Into<PathBuf>) -> Self {
        Self {
            repo_root: repo_root.into(),
        }
    }

    /// Repository this collaborator works on
    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }

    fn git<I, S>(&self, args: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<std::ffi::OsStr>,
    {
        let mut command = Command::new("git");
        command
            .arg("-C")
            .arg(&self.repo_root)
            .args(args)
            .stdin(Stdio::null());

        match command.output() {
            Ok(output) if output.status.success() => true,
            Ok(output) => {
                log::debug!(
                    "git exited with {}: {}",
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                );
                false
            }
            Err(e) => {
                log::debug!("Failed to run git: {e}");
                false
            }
        }
    }
}

impl VersionControl for GitCli {
    fn stage(&self, paths: &[PathBuf]) -> bool {
        let existing: Vec<&PathBuf> = paths.iter().filter(|p| p.exists()).collect();
        if existing.is_empty() {
            return false;
        }
        let mut args: Vec<&std::ffi::OsStr> = vec!["add".as_ref(), "--".as_ref()];
        args.extend(existing.iter().map(|p| p.as_os_str()));
        self.git(args)
    }

    fn commit(&self, message: &str) -> bool {
        self.git(["commit", "-m", message])
    }

    fn push(&self) -> bool {
        self.git(["push"])
    }
}
