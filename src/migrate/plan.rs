use super::backup::BACKUP_DIR_NAME;
use super::biome_config::BIOME_CONFIG_FILE_NAME;
use super::detector::{detect_legacy_config, LegacyConfigSet};
use super::manifest::{PackageManifest, BIOME_SCRIPTS, LEGACY_PACKAGES};
use super::package_manager::{PackageManagerKind, BIOME_PACKAGE};
use super::root::{find_project_root, MANIFEST_FILE_NAME};
use super::runner::PackageCommand;
use colored::*;
use std::path::{Path, PathBuf};

/// What a migration would do, computed without touching the project.
#[derive(Debug, Clone)]
pub struct MigrationPlan {
    pub root: PathBuf,
    pub legacy: LegacyConfigSet,
    pub package_manager: PackageManagerKind,
    pub install: PackageCommand,
    /// `None` when no legacy package is declared, or the manifest is unreadable.
    pub uninstall: Option<PackageCommand>,
    /// Existing scripts that the migration would replace, with their
    /// current commands.
    pub replaced_scripts: Vec<(String, String)>,
    pub manifest_readable: bool,
}

impl MigrationPlan {
    pub fn build(start: &Path) -> Self {
        let root = find_project_root(start);
        let legacy = detect_legacy_config(&root);
        let package_manager = PackageManagerKind::probe(&root);
        let manifest = PackageManifest::load(&root).ok();

        let (uninstall, replaced_scripts) = match &manifest {
            Some(manifest) => {
                let declared = manifest.declared_packages(LEGACY_PACKAGES);
                let uninstall = (!declared.is_empty()).then(|| package_manager.remove(&declared));
                let replaced = BIOME_SCRIPTS
                    .iter()
                    .filter_map(|(name, command)| {
                        manifest
                            .script(name)
                            .filter(|current| current != command)
                            .map(|current| (name.to_string(), current.to_string()))
                    })
                    .collect();
                (uninstall, replaced)
            }
            None => (None, Vec::new()),
        };

        Self {
            install: package_manager.add_dev_exact(BIOME_PACKAGE),
            root,
            legacy,
            package_manager,
            uninstall,
            replaced_scripts,
            manifest_readable: manifest.is_some(),
        }
    }

    pub fn print(&self) {
        println!("{} {}", "Project:".bold(), self.root.display());
        println!("{} {}", "Package manager:".bold(), self.package_manager.to_string().cyan());

        if self.legacy.is_empty() {
            println!("\n{} No ESLint or Prettier configuration found", "✓".green());
        } else {
            println!(
                "\n{} Legacy configuration (backed up to {}/ before removal):",
                "→".blue().bold(),
                BACKUP_DIR_NAME
            );
            for entry in &self.legacy.linter {
                println!("  • {} {}", "[eslint]".dimmed(), entry);
            }
            for entry in &self.legacy.formatter {
                println!("  • {} {}", "[prettier]".dimmed(), entry);
            }
        }

        println!("\n{} Commands:", "→".blue().bold());
        println!("  {}", self.install.to_string().yellow());
        match &self.uninstall {
            Some(command) => println!("  {}", command.to_string().yellow()),
            None => println!("  {}", "(no legacy packages to remove)".dimmed()),
        }

        println!("\n{} Files written:", "→".blue().bold());
        println!("  • {} (overwritten if present)", BIOME_CONFIG_FILE_NAME);
        if self.manifest_readable {
            println!("  • {} scripts", MANIFEST_FILE_NAME);
        } else {
            println!(
                "  {} {} is missing or malformed and will not be updated",
                "⚠".yellow(),
                MANIFEST_FILE_NAME
            );
        }

        for (name, current) in &self.replaced_scripts {
            println!(
                "  {} script {} will be replaced (currently {})",
                "⚠".yellow(),
                name.bold(),
                current.dimmed()
            );
        }
    }
}
