use crate::error::Result;
use git2::{Repository, StatusOptions};
use std::path::Path;
use tracing::debug;

/// Read-only view of the repository containing the project, if any.
pub struct WorkingTree {
    repo: Repository,
}

impl WorkingTree {
    /// Discover the repository containing `path`. Returns `None` outside git.
    pub fn discover(path: &Path) -> Option<Self> {
        match Repository::discover(path) {
            Ok(repo) => Some(Self { repo }),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "not inside a git repository");
                None
            }
        }
    }

    /// Paths with uncommitted changes, untracked files included.
    pub fn dirty_files(&self) -> Result<Vec<String>> {
        let mut opts = StatusOptions::new();
        opts.include_untracked(true).include_ignored(false);

        let statuses = self.repo.statuses(Some(&mut opts))?;
        Ok(statuses
            .iter()
            .filter_map(|entry| entry.path().map(str::to_string))
            .collect())
    }
}
