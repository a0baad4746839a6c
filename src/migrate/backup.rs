use super::detector::LegacyConfigSet;
use crate::error::MigrateError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Backup directory created under the project root.
pub const BACKUP_DIR_NAME: &str = ".eslint-prettier-backup";

/// What happened when backing up legacy config files.
///
/// Only paths listed in `copied` may be deleted later.
#[derive(Debug)]
pub struct BackupRecord {
    pub backup_dir: PathBuf,
    /// Files copied successfully, relative to the project root.
    pub copied: Vec<PathBuf>,
    /// Files that could not be copied, with the reason.
    pub failed: Vec<(PathBuf, MigrateError)>,
}

impl BackupRecord {
    pub fn contains(&self, file: &Path) -> bool {
        self.copied.iter().any(|c| c == file)
    }

    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Copy every standalone legacy file into the backup directory.
///
/// Embedded manifest fields are skipped; they are removed by the manifest
/// rewrite instead. A failure on one file never stops the others.
pub fn backup_legacy_files(root: &Path, legacy: &LegacyConfigSet) -> BackupRecord {
    let backup_dir = root.join(BACKUP_DIR_NAME);
    let mut record = BackupRecord {
        backup_dir: backup_dir.clone(),
        copied: Vec::new(),
        failed: Vec::new(),
    };

    if let Err(e) = fs::create_dir_all(&backup_dir) {
        warn!(dir = %backup_dir.display(), error = %e, "could not create backup directory");
        for file in legacy.files() {
            let err = MigrateError::write(&backup_dir, std::io::Error::new(e.kind(), e.to_string()));
            record.failed.push((file.to_path_buf(), err));
        }
        return record;
    }

    for file in legacy.files() {
        match copy_into(root, file, &backup_dir) {
            Ok(target) => {
                debug!(file = %file.display(), target = %target.display(), "backed up");
                record.copied.push(file.to_path_buf());
            }
            Err(e) => {
                warn!(file = %file.display(), error = %e, "backup failed");
                record.failed.push((file.to_path_buf(), e));
            }
        }
    }

    record
}

fn copy_into(root: &Path, file: &Path, backup_dir: &Path) -> Result<PathBuf, MigrateError> {
    let source = root.join(file);
    let name = file.file_name().ok_or_else(|| {
        MigrateError::read(
            &source,
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name"),
        )
    })?;
    let target = backup_dir.join(name);

    fs::copy(&source, &target).map_err(|e| MigrateError::read(&source, e))?;

    Ok(target)
}
