use super::runner::PackageCommand;
use std::fmt;
use std::path::Path;
use tracing::debug;

/// Package installed in place of ESLint and Prettier.
pub const BIOME_PACKAGE: &str = "@biomejs/biome";

/// Package managers the migration knows how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManagerKind {
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

/// Lockfiles in probe priority order.
const LOCKFILES: &[(&str, PackageManagerKind)] = &[
    ("bun.lockb", PackageManagerKind::Bun),
    ("bun.lock", PackageManagerKind::Bun),
    ("pnpm-lock.yaml", PackageManagerKind::Pnpm),
    ("yarn.lock", PackageManagerKind::Yarn),
    ("package-lock.json", PackageManagerKind::Npm),
];

impl PackageManagerKind {
    /// Pick the package manager from the lockfile present in `root`,
    /// defaulting to npm.
    pub fn probe(root: &Path) -> Self {
        let kind = LOCKFILES
            .iter()
            .find(|(lockfile, _)| root.join(lockfile).is_file())
            .map(|(_, kind)| *kind)
            .unwrap_or(PackageManagerKind::Npm);

        debug!(manager = %kind, "probed package manager");
        kind
    }

    pub fn program(&self) -> &'static str {
        match self {
            PackageManagerKind::Npm => "npm",
            PackageManagerKind::Yarn => "yarn",
            PackageManagerKind::Pnpm => "pnpm",
            PackageManagerKind::Bun => "bun",
        }
    }

    /// Add `package` as an exact-pinned development dependency.
    pub fn add_dev_exact(&self, package: &str) -> PackageCommand {
        let args: &[&str] = match self {
            PackageManagerKind::Npm => &["install", "--save-dev", "--save-exact"],
            PackageManagerKind::Yarn => &["add", "--dev", "--exact"],
            PackageManagerKind::Pnpm => &["add", "--save-dev", "--save-exact"],
            PackageManagerKind::Bun => &["add", "--dev", "--exact"],
        };

        PackageCommand::new(
            self.program(),
            args.iter().copied().chain(std::iter::once(package)),
        )
    }

    /// Remove `packages` from the project.
    pub fn remove<S: AsRef<str>>(&self, packages: &[S]) -> PackageCommand {
        let verb = match self {
            PackageManagerKind::Npm => "uninstall",
            PackageManagerKind::Yarn | PackageManagerKind::Pnpm | PackageManagerKind::Bun => {
                "remove"
            }
        };

        PackageCommand::new(
            self.program(),
            std::iter::once(verb).chain(packages.iter().map(|package| package.as_ref())),
        )
    }
}

impl fmt::Display for PackageManagerKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.program())
    }
}
