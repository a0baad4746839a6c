use super::backup::backup_legacy_files;
use super::biome_config::BiomeConfig;
use super::detector::detect_legacy_config;
use super::git::WorkingTree;
use super::manifest::{update_manifest_with, PackageManifest, LEGACY_PACKAGES};
use super::package_manager::{PackageManagerKind, BIOME_PACKAGE};
use super::report::{MigrationOutcome, MigrationState, Step, StepResult};
use super::root::{find_project_root, MANIFEST_FILE_NAME};
use super::runner::{run_checked, CommandRunner};
use crate::error::Result;
use colored::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Knobs for a migration run.
#[derive(Debug, Clone)]
pub struct MigrationOptions {
    /// Warn when the project has uncommitted git changes.
    pub check_git: bool,
}

impl Default for MigrationOptions {
    fn default() -> Self {
        Self { check_git: true }
    }
}

/// Runs the ESLint/Prettier → Biome migration step by step.
///
/// Only a failed install stops the run. Every other failure is recorded as
/// a degraded step and the remaining steps still execute.
pub struct MigrationEngine<R: CommandRunner> {
    runner: R,
    options: MigrationOptions,
    save_manifest: fn(&PackageManifest) -> Result<()>,
}

impl<R: CommandRunner> MigrationEngine<R> {
    pub fn new(runner: R, options: MigrationOptions) -> Self {
        Self {
            runner,
            options,
            save_manifest: PackageManifest::save,
        }
    }

    #[cfg(test)]
    fn with_manifest_writer(mut self, save: fn(&PackageManifest) -> Result<()>) -> Self {
        self.save_manifest = save;
        self
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Migrate the project containing `start`.
    pub fn run(&self, start: &Path) -> MigrationOutcome {
        let root = find_project_root(start);
        let mut outcome = MigrationOutcome::new(root.clone());

        println!(
            "{} Migrating {} to Biome\n",
            "🔄".cyan(),
            root.display().to_string().bold()
        );
        outcome.record(StepResult::ok(Step::Locate, root.display().to_string()));
        self.advance(&mut outcome, MigrationState::Located);

        if self.options.check_git {
            self.check_working_tree(&root, &mut outcome);
        }

        self.detect(&root, &mut outcome);
        self.backup(&root, &mut outcome);

        let pm = PackageManagerKind::probe(&root);
        outcome.package_manager = Some(pm);
        outcome.record(StepResult::ok(Step::Probe, format!("using {}", pm)));
        self.advance(&mut outcome, MigrationState::Probed);

        if !self.install(&root, pm, &mut outcome) {
            self.advance(&mut outcome, MigrationState::AbortedAtInstall);
            return outcome;
        }
        self.advance(&mut outcome, MigrationState::Installed);

        self.write_config(&root, &mut outcome);
        let manifest = self.update_manifest(&root, &mut outcome);
        self.advance(&mut outcome, MigrationState::ManifestUpdated);

        self.remove_dependencies(&root, pm, manifest.as_ref(), &mut outcome);
        self.advance(&mut outcome, MigrationState::DependenciesHandled);

        self.remove_files(&root, &mut outcome);
        self.advance(&mut outcome, MigrationState::FilesRemoved);

        outcome
    }

    fn advance(&self, outcome: &mut MigrationOutcome, state: MigrationState) {
        debug!(from = ?outcome.state, to = ?state, "migration state");
        outcome.state = state;
    }

    fn check_working_tree(&self, root: &Path, outcome: &mut MigrationOutcome) {
        let Some(tree) = WorkingTree::discover(root) else {
            return;
        };

        match tree.dirty_files() {
            Ok(files) if files.is_empty() => {}
            Ok(files) => {
                let warning = format!(
                    "{} uncommitted change(s) in the working tree; commit first to make the migration easy to review",
                    files.len()
                );
                println!("{} {}", "⚠".yellow(), warning);
                outcome.warnings.push(warning);
            }
            Err(e) => warn!(error = %e, "could not read git status"),
        }
    }

    fn detect(&self, root: &Path, outcome: &mut MigrationOutcome) {
        println!("{} Detecting ESLint and Prettier configuration...", "→".blue().bold());

        outcome.legacy = detect_legacy_config(root);
        for entry in outcome.legacy.entries() {
            println!("  • {}", entry);
        }

        let detail = if outcome.legacy.is_empty() {
            "no legacy configuration found".to_string()
        } else {
            format!(
                "{} linter and {} formatter item(s)",
                outcome.legacy.linter.len(),
                outcome.legacy.formatter.len()
            )
        };
        outcome.record(StepResult::ok(Step::Detect, detail));
        self.advance(outcome, MigrationState::Detected);
    }

    fn backup(&self, root: &Path, outcome: &mut MigrationOutcome) {
        if outcome.legacy.is_empty() {
            outcome.record(StepResult::skipped(Step::Backup, "nothing to back up"));
            self.advance(outcome, MigrationState::NoBackupNeeded);
            return;
        }

        println!("{} Backing up configuration files...", "→".blue().bold());
        let record = backup_legacy_files(root, &outcome.legacy);

        for (file, err) in &record.failed {
            println!("  {} {}: {}", "✗".red(), file.display(), err);
        }

        let result = if record.is_complete() {
            StepResult::ok(
                Step::Backup,
                format!(
                    "{} file(s) copied to {}",
                    record.copied.len(),
                    record.backup_dir.display()
                ),
            )
        } else {
            StepResult::degraded(
                Step::Backup,
                format!(
                    "{} file(s) copied, {} failed and will be kept",
                    record.copied.len(),
                    record.failed.len()
                ),
            )
        };

        outcome.record(result);
        outcome.backup = Some(record);
        self.advance(outcome, MigrationState::BackedUp);
    }

    /// Returns `false` when the migration must stop.
    fn install(&self, root: &Path, pm: PackageManagerKind, outcome: &mut MigrationOutcome) -> bool {
        let command = pm.add_dev_exact(BIOME_PACKAGE);
        println!("{} Installing {}: {}", "→".blue().bold(), BIOME_PACKAGE, command.to_string().dimmed());

        match run_checked(&self.runner, &command, root) {
            Ok(()) => {
                outcome.installed = true;
                outcome.record(StepResult::ok(Step::Install, command.to_string()));
                true
            }
            Err(e) => {
                warn!(error = %e, "install failed, aborting migration");
                println!("{} {}", "✗".red().bold(), e);
                outcome.record(StepResult::fatal(Step::Install, e.to_string()));
                false
            }
        }
    }

    fn write_config(&self, root: &Path, outcome: &mut MigrationOutcome) {
        println!("{} Writing Biome configuration...", "→".blue().bold());

        match BiomeConfig::default().write_to(root) {
            Ok(path) => {
                outcome.record(StepResult::ok(Step::GenerateConfig, path.display().to_string()));
                outcome.config_path = Some(path);
            }
            Err(e) => {
                warn!(error = %e, "could not write biome config");
                outcome.record(StepResult::degraded(Step::GenerateConfig, e.to_string()));
            }
        }
    }

    fn update_manifest(&self, root: &Path, outcome: &mut MigrationOutcome) -> Option<PackageManifest> {
        println!("{} Updating {} scripts...", "→".blue().bold(), MANIFEST_FILE_NAME);

        match update_manifest_with(root, self.save_manifest) {
            Ok(update) => {
                let mut detail = format!(
                    "{} script(s) added, {} replaced",
                    update.scripts.added.len(),
                    update.scripts.replaced.len()
                );
                if !update.removed_fields.is_empty() {
                    detail.push_str(&format!(", removed {}", update.removed_fields.join(", ")));
                }
                outcome.record(StepResult::ok(Step::UpdateManifest, detail));

                let manifest = update.manifest.clone();
                outcome.manifest = Some(update);
                Some(manifest)
            }
            Err(e) => {
                warn!(error = %e, "manifest update failed");
                outcome.record(StepResult::degraded(
                    Step::UpdateManifest,
                    format!("{}; {} was not fully migrated", e, MANIFEST_FILE_NAME),
                ));
                // Parse failures will repeat here; a write failure still leaves a readable file.
                PackageManifest::load(root).ok()
            }
        }
    }

    fn remove_dependencies(
        &self,
        root: &Path,
        pm: PackageManagerKind,
        manifest: Option<&PackageManifest>,
        outcome: &mut MigrationOutcome,
    ) {
        let Some(manifest) = manifest else {
            outcome.record(StepResult::degraded(
                Step::RemoveDependencies,
                format!("{} unreadable; legacy packages were not checked", MANIFEST_FILE_NAME),
            ));
            return;
        };

        let declared = manifest.declared_packages(LEGACY_PACKAGES);
        if declared.is_empty() {
            outcome.record(StepResult::skipped(
                Step::RemoveDependencies,
                "no legacy packages declared",
            ));
            return;
        }

        let command = pm.remove(&declared);
        println!("{} Removing legacy packages: {}", "→".blue().bold(), command.to_string().dimmed());

        match run_checked(&self.runner, &command, root) {
            Ok(()) => {
                outcome.record(StepResult::ok(Step::RemoveDependencies, declared.join(", ")));
                outcome.removed_packages = declared;
            }
            Err(e) => {
                warn!(error = %e, "uninstall failed");
                println!("{} {}", "⚠".yellow(), e);
                outcome.record(StepResult::degraded(
                    Step::RemoveDependencies,
                    format!("{}; remove {} manually", e, declared.join(" ")),
                ));
            }
        }
    }

    fn remove_files(&self, root: &Path, outcome: &mut MigrationOutcome) {
        let detected: Vec<PathBuf> = outcome.legacy.files().map(Path::to_path_buf).collect();
        if detected.is_empty() {
            outcome.record(StepResult::skipped(Step::RemoveFiles, "no legacy config files"));
            return;
        }

        println!("{} Removing legacy configuration files...", "→".blue().bold());
        let mut failures = Vec::new();

        for file in detected {
            let backed_up = outcome
                .backup
                .as_ref()
                .is_some_and(|record| record.contains(&file));
            if !backed_up {
                debug!(file = %file.display(), "not backed up, keeping");
                outcome.kept_files.push(file);
                continue;
            }

            match fs::remove_file(root.join(&file)) {
                Ok(()) => {
                    println!("  {} {}", "✓".green(), file.display());
                    outcome.removed_files.push(file);
                }
                Err(e) => {
                    warn!(file = %file.display(), error = %e, "could not remove file");
                    failures.push(format!("{}: {}", file.display(), e));
                }
            }
        }

        let result = if failures.is_empty() && outcome.kept_files.is_empty() {
            StepResult::ok(
                Step::RemoveFiles,
                format!("{} file(s) removed", outcome.removed_files.len()),
            )
        } else {
            let mut detail = format!(
                "{} file(s) removed, {} kept",
                outcome.removed_files.len(),
                outcome.kept_files.len() + failures.len()
            );
            if !failures.is_empty() {
                detail.push_str(&format!(" ({})", failures.join("; ")));
            }
            StepResult::degraded(Step::RemoveFiles, detail)
        };
        outcome.record(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MigrateError;
    use crate::migrate::backup::BACKUP_DIR_NAME;
    use crate::migrate::biome_config::BIOME_CONFIG_FILE_NAME;
    use crate::migrate::report::StepOutcome;
    use crate::migrate::runner::testing::FakeRunner;
    use crate::migrate::runner::PackageCommand;
    use git2::Repository;
    use tempfile::TempDir;

    const ESLINTRC: &str = "{\n  \"extends\": [\"eslint:recommended\"]\n}\n";
    const PRETTIER_CONFIG: &str = "module.exports = { semi: false };\n";

    fn engine(runner: FakeRunner) -> MigrationEngine<FakeRunner> {
        MigrationEngine::new(runner, MigrationOptions { check_git: false })
    }

    fn write(root: &Path, name: &str, content: &str) {
        fs::write(root.join(name), content).unwrap();
    }

    fn read_manifest(root: &Path) -> PackageManifest {
        PackageManifest::load(root).unwrap()
    }

    /// .eslintrc.json + prettier.config.js, yarn lockfile, old lint script.
    fn yarn_project() -> TempDir {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write(root, ".eslintrc.json", ESLINTRC);
        write(root, "prettier.config.js", PRETTIER_CONFIG);
        write(root, "yarn.lock", "");
        write(
            root,
            "package.json",
            r#"{
  "name": "shop",
  "scripts": {
    "lint": "old-lint",
    "test": "vitest"
  },
  "devDependencies": {
    "eslint": "8.57.0",
    "prettier": "3.2.5",
    "vitest": "1.0.0"
  }
}
"#,
        );
        temp
    }

    #[test]
    fn test_full_migration_with_yarn() {
        let temp = yarn_project();
        let root = temp.path();
        let engine = engine(FakeRunner::default());

        let outcome = engine.run(root);

        assert_eq!(outcome.state, MigrationState::FilesRemoved);
        assert!(!outcome.is_aborted());
        assert!(!outcome.is_degraded());
        assert_eq!(outcome.package_manager, Some(PackageManagerKind::Yarn));

        // Backed up with identical bytes, then removed
        let backup_dir = root.join(BACKUP_DIR_NAME);
        assert_eq!(fs::read_to_string(backup_dir.join(".eslintrc.json")).unwrap(), ESLINTRC);
        assert_eq!(
            fs::read_to_string(backup_dir.join("prettier.config.js")).unwrap(),
            PRETTIER_CONFIG
        );
        assert!(!root.join(".eslintrc.json").exists());
        assert!(!root.join("prettier.config.js").exists());

        let manifest = read_manifest(root);
        assert_eq!(manifest.script("lint"), Some("biome lint ."));
        assert_eq!(manifest.script("test"), Some("vitest"));
        assert!(root.join(BIOME_CONFIG_FILE_NAME).exists());

        assert_eq!(
            engine.runner().calls(),
            vec![
                PackageCommand::new("yarn", ["add", "--dev", "--exact", "@biomejs/biome"]),
                PackageCommand::new("yarn", ["remove", "eslint", "prettier"]),
            ]
        );
        assert_eq!(outcome.removed_packages, vec!["eslint", "prettier"]);
        assert!(engine
            .runner()
            .calls
            .borrow()
            .iter()
            .all(|(_, cwd)| cwd == root));
    }

    #[test]
    fn test_no_legacy_config_creates_no_backup() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "package.json", r#"{"name": "clean"}"#);

        let outcome = engine(FakeRunner::default()).run(temp.path());

        assert!(!temp.path().join(BACKUP_DIR_NAME).exists());
        assert_eq!(outcome.step(Step::Backup).unwrap().outcome, StepOutcome::Skipped);
        assert_eq!(outcome.step(Step::RemoveFiles).unwrap().outcome, StepOutcome::Skipped);
        assert_eq!(
            outcome.step(Step::RemoveDependencies).unwrap().outcome,
            StepOutcome::Skipped
        );
        assert!(outcome.installed);
    }

    #[test]
    fn test_install_failure_aborts_before_rewrites() {
        let temp = yarn_project();
        let root = temp.path();
        let before = fs::read_to_string(root.join("package.json")).unwrap();
        let engine = engine(FakeRunner::failing("add", Some(1)));

        let outcome = engine.run(root);

        assert!(outcome.is_aborted());
        assert_eq!(outcome.exit_code(), 1);
        assert_eq!(outcome.state, MigrationState::AbortedAtInstall);
        assert_eq!(fs::read_to_string(root.join("package.json")).unwrap(), before);
        assert!(root.join(".eslintrc.json").exists());
        assert!(root.join("prettier.config.js").exists());
        assert!(!root.join(BIOME_CONFIG_FILE_NAME).exists());
        // Only the install was attempted
        assert_eq!(engine.runner().calls().len(), 1);
        assert!(outcome.step(Step::UpdateManifest).is_none());
    }

    #[test]
    fn test_install_spawn_failure_is_fatal() {
        let temp = yarn_project();
        let runner = FakeRunner {
            spawn_fails: true,
            ..FakeRunner::default()
        };

        let outcome = engine(runner).run(temp.path());

        assert_eq!(outcome.step(Step::Install).unwrap().outcome, StepOutcome::Fatal);
        assert_eq!(outcome.exit_code(), 1);
        assert!(temp.path().join(".eslintrc.json").exists());
    }

    #[test]
    fn test_uninstall_only_declared_packages() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write(root, "pnpm-lock.yaml", "");
        write(
            root,
            "package.json",
            r#"{"devDependencies": {"eslint-config-prettier": "9.0.0", "prettier": "3.0.0", "typescript": "5.4.0"}}"#,
        );
        let engine = engine(FakeRunner::default());

        engine.run(root);

        let calls = engine.runner().calls();
        assert_eq!(
            calls.last().unwrap(),
            &PackageCommand::new("pnpm", ["remove", "prettier", "eslint-config-prettier"])
        );
    }

    #[test]
    fn test_uninstall_failure_is_degraded() {
        let temp = yarn_project();
        let outcome = engine(FakeRunner::failing("remove", Some(1))).run(temp.path());

        assert!(!outcome.is_aborted());
        assert!(outcome.is_degraded());
        assert_eq!(outcome.exit_code(), 0);
        assert!(outcome.removed_packages.is_empty());
        // Later steps still ran
        assert!(!temp.path().join(".eslintrc.json").exists());
    }

    #[test]
    fn test_malformed_manifest_degrades_but_continues() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write(root, "package.json", "{ \"name\": ");
        write(root, ".prettierrc", "{}");

        let outcome = engine(FakeRunner::default()).run(root);

        assert_eq!(outcome.exit_code(), 0);
        assert_eq!(
            outcome.step(Step::UpdateManifest).unwrap().outcome,
            StepOutcome::Degraded
        );
        assert_eq!(
            outcome.step(Step::RemoveDependencies).unwrap().outcome,
            StepOutcome::Degraded
        );
        assert!(root.join(BIOME_CONFIG_FILE_NAME).exists());
        assert!(!root.join(".prettierrc").exists());
        assert!(root.join(BACKUP_DIR_NAME).join(".prettierrc").exists());
    }

    #[test]
    fn test_failed_backup_keeps_originals() {
        let temp = yarn_project();
        let root = temp.path();
        // A file where the backup directory should go makes every copy fail
        write(root, BACKUP_DIR_NAME, "in the way");

        let outcome = engine(FakeRunner::default()).run(root);

        assert_eq!(outcome.step(Step::Backup).unwrap().outcome, StepOutcome::Degraded);
        assert_eq!(outcome.step(Step::RemoveFiles).unwrap().outcome, StepOutcome::Degraded);
        assert_eq!(fs::read_to_string(root.join(".eslintrc.json")).unwrap(), ESLINTRC);
        assert_eq!(
            fs::read_to_string(root.join("prettier.config.js")).unwrap(),
            PRETTIER_CONFIG
        );
        assert_eq!(
            outcome.kept_files,
            vec![PathBuf::from(".eslintrc.json"), PathBuf::from("prettier.config.js")]
        );
        assert!(outcome.removed_files.is_empty());
    }

    #[test]
    fn test_embedded_config_removed_from_manifest() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write(
            root,
            "package.json",
            r#"{"name": "cra", "eslintConfig": {"extends": "react-app"}, "prettier": "@company/prettier-config"}"#,
        );

        let outcome = engine(FakeRunner::default()).run(root);

        // Nothing standalone to back up, but the directory is still created
        assert!(root.join(BACKUP_DIR_NAME).is_dir());
        let update = outcome.manifest.as_ref().unwrap();
        assert_eq!(update.removed_fields, vec!["eslintConfig", "prettier"]);
        let manifest = read_manifest(root);
        assert!(manifest.get("eslintConfig").is_none());
        assert!(manifest.get("prettier").is_none());
    }

    #[test]
    fn test_rerun_is_idempotent() {
        let temp = yarn_project();
        let root = temp.path();

        let first = engine(FakeRunner::default()).run(root);
        assert!(!first.is_degraded());
        let config_after_first = fs::read_to_string(root.join(BIOME_CONFIG_FILE_NAME)).unwrap();
        let scripts_after_first = read_manifest(root).get("scripts").cloned();

        let second = engine(FakeRunner::default()).run(root);

        assert!(!second.is_aborted());
        assert!(!second.is_degraded());
        assert!(second.legacy.is_empty());
        assert_eq!(
            fs::read_to_string(root.join(BIOME_CONFIG_FILE_NAME)).unwrap(),
            config_after_first
        );
        assert_eq!(read_manifest(root).get("scripts").cloned(), scripts_after_first);
        // First run's backup is untouched
        assert_eq!(
            fs::read_to_string(root.join(BACKUP_DIR_NAME).join(".eslintrc.json")).unwrap(),
            ESLINTRC
        );
    }

    #[test]
    fn test_runs_from_nested_directory() {
        let temp = yarn_project();
        let nested = temp.path().join("src/pages");
        fs::create_dir_all(&nested).unwrap();

        let outcome = engine(FakeRunner::default()).run(&nested);

        assert_eq!(outcome.root, temp.path());
        assert!(temp.path().join(BIOME_CONFIG_FILE_NAME).exists());
        assert!(!nested.join(BIOME_CONFIG_FILE_NAME).exists());
    }

    #[test]
    fn test_dirty_working_tree_warns() {
        let temp = yarn_project();
        Repository::init(temp.path()).unwrap();
        let engine = MigrationEngine::new(FakeRunner::default(), MigrationOptions::default());

        let outcome = engine.run(temp.path());

        assert_eq!(outcome.warnings.len(), 1);
        assert!(outcome.warnings[0].contains("uncommitted"));
        assert!(!outcome.is_degraded());
    }

    #[test]
    fn test_unwritable_biome_config_degrades_but_continues() {
        let temp = yarn_project();
        let root = temp.path();
        // fs::write fails on a directory even for root
        fs::create_dir_all(root.join(BIOME_CONFIG_FILE_NAME).join("keep")).unwrap();

        let outcome = engine(FakeRunner::default()).run(root);

        assert_eq!(outcome.exit_code(), 0);
        assert_eq!(
            outcome.step(Step::GenerateConfig).unwrap().outcome,
            StepOutcome::Degraded
        );
        assert!(outcome.config_path.is_none());
        assert_eq!(outcome.step(Step::UpdateManifest).unwrap().outcome, StepOutcome::Ok);
        assert_eq!(read_manifest(root).script("lint"), Some("biome lint ."));
        assert_eq!(outcome.removed_packages, vec!["eslint", "prettier"]);
        assert!(!root.join(".eslintrc.json").exists());
        assert_eq!(outcome.state, MigrationState::FilesRemoved);
    }

    #[test]
    fn test_manifest_write_failure_degrades_but_continues() {
        let temp = yarn_project();
        let root = temp.path();
        let before = fs::read_to_string(root.join("package.json")).unwrap();
        let engine = engine(FakeRunner::default()).with_manifest_writer(|_| {
            Err(MigrateError::write(
                MANIFEST_FILE_NAME,
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            ))
        });

        let outcome = engine.run(root);

        assert_eq!(outcome.exit_code(), 0);
        let update = outcome.step(Step::UpdateManifest).unwrap();
        assert_eq!(update.outcome, StepOutcome::Degraded);
        assert!(update.detail.contains("read-only"));
        assert!(outcome.manifest.is_none());
        assert_eq!(fs::read_to_string(root.join("package.json")).unwrap(), before);

        // The unchanged manifest is reloaded, so legacy packages are still removed
        assert_eq!(
            outcome.step(Step::RemoveDependencies).unwrap().outcome,
            StepOutcome::Ok
        );
        assert_eq!(
            engine.runner().calls().last().unwrap(),
            &PackageCommand::new("yarn", ["remove", "eslint", "prettier"])
        );
        assert!(root.join(BIOME_CONFIG_FILE_NAME).exists());
        assert!(!root.join(".eslintrc.json").exists());
    }

    #[test]
    fn test_file_removal_failure_is_degraded() {
        let temp = yarn_project();
        let root = temp.path();
        // Between backup and removal, turn one backed-up file into a non-empty directory
        let runner = FakeRunner {
            on_run: Some(Box::new(|cwd: &Path| {
                let target = cwd.join(".eslintrc.json");
                if target.is_file() {
                    fs::remove_file(&target).unwrap();
                    fs::create_dir_all(target.join("nested")).unwrap();
                }
            })),
            ..FakeRunner::default()
        };

        let outcome = engine(runner).run(root);

        assert_eq!(outcome.exit_code(), 0);
        let removal = outcome.step(Step::RemoveFiles).unwrap();
        assert_eq!(removal.outcome, StepOutcome::Degraded);
        assert!(removal.detail.contains(".eslintrc.json"));
        assert_eq!(outcome.removed_files, vec![PathBuf::from("prettier.config.js")]);
        assert!(outcome.kept_files.is_empty());
        assert!(root.join(".eslintrc.json").is_dir());
        assert!(!root.join("prettier.config.js").exists());
        assert_eq!(outcome.state, MigrationState::FilesRemoved);
    }
}
