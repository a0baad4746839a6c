pub mod backup;
pub mod biome_config;
pub mod detector;
pub mod diff;
pub mod engine;
pub mod git;
pub mod manifest;
pub mod package_manager;
pub mod plan;
pub mod report;
pub mod root;
pub mod runner;

pub use backup::{backup_legacy_files, BackupRecord};
pub use biome_config::BiomeConfig;
pub use detector::{detect_legacy_config, LegacyConfigSet, LegacyEntry};
pub use engine::{MigrationEngine, MigrationOptions};
pub use manifest::{update_manifest, PackageManifest};
pub use package_manager::PackageManagerKind;
pub use plan::MigrationPlan;
pub use report::{MigrationOutcome, MigrationState, Step, StepOutcome, StepResult};
pub use root::find_project_root;
pub use runner::{CommandRunner, PackageCommand, SystemRunner};

use std::path::Path;

/// Main entry point for migrations
pub struct Migrator {
    engine: MigrationEngine<SystemRunner>,
}

impl Migrator {
    pub fn new(options: MigrationOptions) -> Self {
        Self {
            engine: MigrationEngine::new(SystemRunner, options),
        }
    }

    /// Show what a migration of the project containing `path` would do
    pub fn plan(&self, path: &Path) -> MigrationPlan {
        MigrationPlan::build(path)
    }

    /// Migrate the project containing `path` using the real package manager
    pub fn migrate(&self, path: &Path) -> MigrationOutcome {
        self.engine.run(path)
    }
}

impl Default for Migrator {
    fn default() -> Self {
        Self::new(MigrationOptions::default())
    }
}
