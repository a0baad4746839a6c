use super::backup::BackupRecord;
use super::detector::LegacyConfigSet;
use super::manifest::ManifestUpdate;
use super::package_manager::PackageManagerKind;
use super::root::MANIFEST_FILE_NAME;
use colored::*;
use std::fmt;
use std::path::PathBuf;

/// Pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Locate,
    Detect,
    Backup,
    Probe,
    Install,
    GenerateConfig,
    UpdateManifest,
    RemoveDependencies,
    RemoveFiles,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Step::Locate => "locate project root",
            Step::Detect => "detect legacy config",
            Step::Backup => "back up legacy config",
            Step::Probe => "probe package manager",
            Step::Install => "install Biome",
            Step::GenerateConfig => "write biome.json",
            Step::UpdateManifest => "update package.json",
            Step::RemoveDependencies => "remove legacy packages",
            Step::RemoveFiles => "remove legacy config files",
        };
        f.write_str(name)
    }
}

/// How a single step ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Ok,
    /// Nothing to do.
    Skipped,
    /// Failed, but the migration carries on.
    Degraded,
    /// Failed and the migration stops here.
    Fatal,
}

#[derive(Debug, Clone)]
pub struct StepResult {
    pub step: Step,
    pub outcome: StepOutcome,
    pub detail: String,
}

impl StepResult {
    pub fn ok(step: Step, detail: impl Into<String>) -> Self {
        Self::new(step, StepOutcome::Ok, detail)
    }

    pub fn skipped(step: Step, detail: impl Into<String>) -> Self {
        Self::new(step, StepOutcome::Skipped, detail)
    }

    pub fn degraded(step: Step, detail: impl Into<String>) -> Self {
        Self::new(step, StepOutcome::Degraded, detail)
    }

    pub fn fatal(step: Step, detail: impl Into<String>) -> Self {
        Self::new(step, StepOutcome::Fatal, detail)
    }

    fn new(step: Step, outcome: StepOutcome, detail: impl Into<String>) -> Self {
        Self {
            step,
            outcome,
            detail: detail.into(),
        }
    }
}

/// Where the pipeline got to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationState {
    NotStarted,
    Located,
    Detected,
    BackedUp,
    NoBackupNeeded,
    Probed,
    Installed,
    AbortedAtInstall,
    ManifestUpdated,
    DependenciesHandled,
    FilesRemoved,
    Reported,
}

/// Everything that happened during one run, used for the final report.
#[derive(Debug)]
pub struct MigrationOutcome {
    pub state: MigrationState,
    pub root: PathBuf,
    pub legacy: LegacyConfigSet,
    pub backup: Option<BackupRecord>,
    pub package_manager: Option<PackageManagerKind>,
    pub installed: bool,
    pub config_path: Option<PathBuf>,
    pub manifest: Option<ManifestUpdate>,
    pub removed_packages: Vec<String>,
    pub removed_files: Vec<PathBuf>,
    /// Detected files left in place because they were never backed up.
    pub kept_files: Vec<PathBuf>,
    pub warnings: Vec<String>,
    pub steps: Vec<StepResult>,
}

impl MigrationOutcome {
    pub fn new(root: PathBuf) -> Self {
        Self {
            state: MigrationState::NotStarted,
            root,
            legacy: LegacyConfigSet::default(),
            backup: None,
            package_manager: None,
            installed: false,
            config_path: None,
            manifest: None,
            removed_packages: Vec::new(),
            removed_files: Vec::new(),
            kept_files: Vec::new(),
            warnings: Vec::new(),
            steps: Vec::new(),
        }
    }

    pub fn record(&mut self, result: StepResult) {
        self.steps.push(result);
    }

    pub fn step(&self, step: Step) -> Option<&StepResult> {
        self.steps.iter().find(|r| r.step == step)
    }

    pub fn is_aborted(&self) -> bool {
        self.steps.iter().any(|r| r.outcome == StepOutcome::Fatal)
    }

    pub fn is_degraded(&self) -> bool {
        self.steps.iter().any(|r| r.outcome == StepOutcome::Degraded)
    }

    /// Process exit status: non-zero only for an aborted run.
    pub fn exit_code(&self) -> i32 {
        if self.is_aborted() {
            1
        } else {
            0
        }
    }

    /// Print the summary and close the run. An aborted run keeps its
    /// `AbortedAtInstall` state.
    pub fn report(&mut self, verbose: bool) {
        self.print_summary(verbose);
        if self.state != MigrationState::AbortedAtInstall {
            self.state = MigrationState::Reported;
        }
    }

    /// Print the human-readable end-of-run summary.
    pub fn print_summary(&self, verbose: bool) {
        println!("\n{}", "=".repeat(60));
        println!("{}", "Migration summary".bold());
        println!("{} {}", "Project:".dimmed(), self.root.display());
        if let Some(pm) = self.package_manager {
            println!("{} {}", "Package manager:".dimmed(), pm.to_string().cyan());
        }

        println!();
        for result in &self.steps {
            let marker = match result.outcome {
                StepOutcome::Ok => "✓".green().bold(),
                StepOutcome::Skipped => "-".dimmed(),
                StepOutcome::Degraded => "⚠".yellow().bold(),
                StepOutcome::Fatal => "✗".red().bold(),
            };
            println!("  {} {}: {}", marker, result.step.to_string().bold(), result.detail);
        }

        if let Some(backup) = &self.backup {
            if !backup.copied.is_empty() {
                println!(
                    "\n{} Backup of {} file(s) kept at {}",
                    "ℹ".blue(),
                    backup.copied.len(),
                    backup.backup_dir.display().to_string().dimmed()
                );
            }
        }

        if !self.kept_files.is_empty() {
            println!("\n{} Not deleted because the backup failed:", "⚠".yellow());
            for file in &self.kept_files {
                println!("  • {}", file.display());
            }
        }

        if let Some(update) = &self.manifest {
            println!("\n{} {}", "Changed:".bold(), update.diff.summary());
            for (name, old) in &update.scripts.replaced {
                println!(
                    "  {} script {} replaced (was {})",
                    "⚠".yellow(),
                    name.bold(),
                    old.dimmed()
                );
            }
            println!(
                "  {} {} was rewritten in place and is not part of the backup",
                "ℹ".blue(),
                MANIFEST_FILE_NAME
            );
            if verbose && !update.diff.is_empty() {
                println!("\n{}", update.diff.unified_diff());
            }
        }

        for warning in &self.warnings {
            println!("{} {}", "⚠".yellow(), warning);
        }

        println!();
        if self.is_aborted() {
            println!("{} Migration aborted.", "✗".red().bold());
        } else if self.is_degraded() {
            println!(
                "{} Migration finished with warnings; see the steps marked {} above.",
                "⚠".yellow().bold(),
                "⚠".yellow()
            );
        } else {
            println!("{} Migration completed successfully!", "✓".green().bold());
        }
    }
}
