use super::root::MANIFEST_FILE_NAME;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Standalone ESLint configuration and ignore files.
pub const LINTER_CONFIG_FILES: &[&str] = &[
    ".eslintrc",
    ".eslintrc.js",
    ".eslintrc.cjs",
    ".eslintrc.json",
    ".eslintrc.yml",
    ".eslintrc.yaml",
    "eslint.config.js",
    "eslint.config.mjs",
    "eslint.config.cjs",
    "eslint.config.ts",
    ".eslintignore",
];

/// Standalone Prettier configuration and ignore files.
pub const FORMATTER_CONFIG_FILES: &[&str] = &[
    ".prettierrc",
    ".prettierrc.json",
    ".prettierrc.json5",
    ".prettierrc.yml",
    ".prettierrc.yaml",
    ".prettierrc.js",
    ".prettierrc.cjs",
    ".prettierrc.mjs",
    ".prettierrc.toml",
    "prettier.config.js",
    "prettier.config.cjs",
    "prettier.config.mjs",
    ".prettierignore",
];

/// ESLint config embedded in `package.json`.
pub const LINTER_MANIFEST_FIELD: &str = "eslintConfig";

/// Prettier config embedded in `package.json`.
pub const FORMATTER_MANIFEST_FIELD: &str = "prettier";

/// One piece of legacy configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LegacyEntry {
    /// A standalone file, relative to the project root.
    File(PathBuf),
    /// A top-level field inside `package.json`.
    ManifestField(&'static str),
}

impl LegacyEntry {
    pub fn as_file(&self) -> Option<&Path> {
        match self {
            LegacyEntry::File(path) => Some(path),
            LegacyEntry::ManifestField(_) => None,
        }
    }
}

impl fmt::Display for LegacyEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LegacyEntry::File(path) => write!(f, "{}", path.display()),
            LegacyEntry::ManifestField(field) => {
                write!(f, "{} (\"{}\" field)", MANIFEST_FILE_NAME, field)
            }
        }
    }
}

/// Legacy configuration found in a project, split by tool.
///
/// Built once by [`detect_legacy_config`] and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegacyConfigSet {
    pub linter: Vec<LegacyEntry>,
    pub formatter: Vec<LegacyEntry>,
}

impl LegacyConfigSet {
    pub fn is_empty(&self) -> bool {
        self.linter.is_empty() && self.formatter.is_empty()
    }

    pub fn len(&self) -> usize {
        self.linter.len() + self.formatter.len()
    }

    pub fn entries(&self) -> impl Iterator<Item = &LegacyEntry> {
        self.linter.iter().chain(self.formatter.iter())
    }

    /// Standalone files, in detection order.
    pub fn files(&self) -> impl Iterator<Item = &Path> {
        self.entries().filter_map(LegacyEntry::as_file)
    }
}

/// Scan `root` for known ESLint and Prettier configuration.
///
/// Absence is the expected case, and an unreadable or malformed manifest is
/// treated as "no embedded config", so this never fails.
pub fn detect_legacy_config(root: &Path) -> LegacyConfigSet {
    let mut set = LegacyConfigSet {
        linter: existing_files(root, LINTER_CONFIG_FILES),
        formatter: existing_files(root, FORMATTER_CONFIG_FILES),
    };

    if let Some(manifest) = read_manifest_object(root) {
        if manifest.contains_key(LINTER_MANIFEST_FIELD) {
            set.linter.push(LegacyEntry::ManifestField(LINTER_MANIFEST_FIELD));
        }
        if manifest.contains_key(FORMATTER_MANIFEST_FIELD) {
            set.formatter
                .push(LegacyEntry::ManifestField(FORMATTER_MANIFEST_FIELD));
        }
    }

    debug!(
        linter = set.linter.len(),
        formatter = set.formatter.len(),
        "legacy config detection finished"
    );

    set
}

fn existing_files(root: &Path, names: &[&str]) -> Vec<LegacyEntry> {
    names
        .iter()
        .filter(|name| root.join(name).is_file())
        .map(|name| LegacyEntry::File(PathBuf::from(*name)))
        .collect()
}

fn read_manifest_object(root: &Path) -> Option<serde_json::Map<String, serde_json::Value>> {
    let path = root.join(MANIFEST_FILE_NAME);
    let content = fs::read_to_string(&path).ok()?;

    match serde_json::from_str::<serde_json::Value>(&content) {
        Ok(serde_json::Value::Object(map)) => Some(map),
        Ok(_) => None,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "manifest unreadable during detection");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_detect_empty_project() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), r#"{"name": "app"}"#).unwrap();

        let set = detect_legacy_config(temp.path());

        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_detect_standalone_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".eslintrc.json"), "{}").unwrap();
        fs::write(temp.path().join(".eslintignore"), "dist\n").unwrap();
        fs::write(temp.path().join("prettier.config.js"), "module.exports = {}").unwrap();

        let set = detect_legacy_config(temp.path());

        assert_eq!(
            set.linter,
            vec![
                LegacyEntry::File(PathBuf::from(".eslintrc.json")),
                LegacyEntry::File(PathBuf::from(".eslintignore")),
            ]
        );
        assert_eq!(
            set.formatter,
            vec![LegacyEntry::File(PathBuf::from("prettier.config.js"))]
        );
    }

    #[test]
    fn test_detect_embedded_fields() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("package.json"),
            r#"{"name": "app", "eslintConfig": {"extends": "react-app"}, "prettier": {"semi": false}}"#,
        )
        .unwrap();

        let set = detect_legacy_config(temp.path());

        assert_eq!(set.linter, vec![LegacyEntry::ManifestField("eslintConfig")]);
        assert_eq!(set.formatter, vec![LegacyEntry::ManifestField("prettier")]);
        assert_eq!(set.files().count(), 0);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_malformed_manifest_is_not_an_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), "{ not json").unwrap();
        fs::write(temp.path().join(".prettierrc"), "{}").unwrap();

        let set = detect_legacy_config(temp.path());

        assert!(set.linter.is_empty());
        assert_eq!(set.formatter, vec![LegacyEntry::File(PathBuf::from(".prettierrc"))]);
    }

    #[test]
    fn test_directories_are_not_config_files() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".eslintrc")).unwrap();

        assert!(detect_legacy_config(temp.path()).is_empty());
    }

    #[test]
    fn test_entry_display() {
        assert_eq!(
            LegacyEntry::File(PathBuf::from(".prettierrc")).to_string(),
            ".prettierrc"
        );
        assert_eq!(
            LegacyEntry::ManifestField("eslintConfig").to_string(),
            "package.json (\"eslintConfig\" field)"
        );
    }
}
