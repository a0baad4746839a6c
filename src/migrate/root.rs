use std::path::{Path, PathBuf};
use tracing::debug;

/// Manifest file that marks a project root.
pub const MANIFEST_FILE_NAME: &str = "package.json";

/// Find the project root by searching up from `start` for `package.json`.
///
/// A relative `start` is resolved against the current directory first, so
/// the search always reaches the filesystem root. Falls back to `start`
/// itself when no ancestor contains a manifest, so a migration can still be
/// attempted from a bare directory.
pub fn find_project_root(start: &Path) -> PathBuf {
    match std::env::current_dir() {
        Ok(cwd) => find_project_root_from(&cwd, start),
        Err(e) => {
            debug!(error = %e, "current directory unavailable, searching from start as given");
            find_project_root_from(Path::new(""), start)
        }
    }
}

/// Like [`find_project_root`], resolving a relative `start` against `cwd`.
pub fn find_project_root_from(cwd: &Path, start: &Path) -> PathBuf {
    // join() keeps an absolute `start` as is
    let start = cwd.join(start);
    let mut current = start.clone();

    loop {
        if current.join(MANIFEST_FILE_NAME).is_file() {
            debug!(root = %current.display(), "found project manifest");
            return current;
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => {
                debug!(start = %start.display(), "no manifest found, using start directory");
                return start;
            }
        }
    }
}
