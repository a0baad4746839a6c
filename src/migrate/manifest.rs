use super::detector::{FORMATTER_MANIFEST_FIELD, LINTER_MANIFEST_FIELD};
use super::diff::FileDiff;
use super::root::MANIFEST_FILE_NAME;
use crate::error::{MigrateError, Result};
use serde_json::{Map, Value};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Embedded config fields removed from `package.json`.
pub const LEGACY_MANIFEST_FIELDS: &[&str] = &[LINTER_MANIFEST_FIELD, FORMATTER_MANIFEST_FIELD];

/// Script entries written by the migration. Existing entries with these
/// names are replaced, not merged.
pub const BIOME_SCRIPTS: &[(&str, &str)] = &[
    ("lint", "biome lint ."),
    ("format", "biome format --write ."),
    ("format:check", "biome format ."),
    ("check", "biome check ."),
    ("check:fix", "biome check --write ."),
];

/// Packages made redundant by Biome.
pub const LEGACY_PACKAGES: &[&str] = &[
    "eslint",
    "prettier",
    "eslint-config-prettier",
    "eslint-plugin-prettier",
];

const DEPENDENCY_SECTIONS: &[&str] = &["dependencies", "devDependencies"];

/// In-memory `package.json`. Key order is preserved on write.
#[derive(Debug, Clone)]
pub struct PackageManifest {
    path: PathBuf,
    fields: Map<String, Value>,
}

impl PackageManifest {
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(MANIFEST_FILE_NAME);
        let content = fs::read_to_string(&path).map_err(|e| MigrateError::read(&path, e))?;
        Self::parse(path, &content)
    }

    pub fn parse(path: PathBuf, content: &str) -> Result<Self> {
        match serde_json::from_str(content) {
            Ok(Value::Object(fields)) => Ok(Self { path, fields }),
            Ok(_) => Err(MigrateError::NotAnObject { path }),
            Err(source) => Err(MigrateError::Parse { path, source }),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn script(&self, name: &str) -> Option<&str> {
        self.fields.get("scripts")?.get(name)?.as_str()
    }

    /// Drop the given top-level fields, returning the ones that existed.
    pub fn remove_fields(&mut self, names: &[&str]) -> Vec<String> {
        names
            .iter()
            .filter(|name| self.fields.shift_remove(**name).is_some())
            .map(|name| name.to_string())
            .collect()
    }

    /// Overwrite `scripts` entries, creating the section if needed.
    ///
    /// A `scripts` value that is not an object is replaced by a fresh one and
    /// reported under the `scripts` name.
    pub fn set_scripts(&mut self, scripts: &[(&str, &str)]) -> ScriptChanges {
        let mut changes = ScriptChanges::default();
        let section = self
            .fields
            .entry("scripts")
            .or_insert_with(|| Value::Object(Map::new()));
        if !section.is_object() {
            let old = std::mem::replace(section, Value::Object(Map::new()));
            changes.replaced.push(("scripts".to_string(), old.to_string()));
        }

        if let Value::Object(map) = section {
            for (name, command) in scripts {
                match map.insert(name.to_string(), Value::from(*command)) {
                    None => changes.added.push(name.to_string()),
                    Some(Value::String(old)) if old == *command => {}
                    Some(old) => {
                        let old = old.as_str().map(str::to_string).unwrap_or_else(|| old.to_string());
                        changes.replaced.push((name.to_string(), old));
                    }
                }
            }
        }

        changes
    }

    /// Which of `packages` are declared in `dependencies` or `devDependencies`,
    /// in the order given.
    pub fn declared_packages(&self, packages: &[&str]) -> Vec<String> {
        packages
            .iter()
            .filter(|package| {
                DEPENDENCY_SECTIONS.iter().any(|section| {
                    self.fields
                        .get(*section)
                        .and_then(Value::as_object)
                        .is_some_and(|deps| deps.contains_key(**package))
                })
            })
            .map(|package| package.to_string())
            .collect()
    }

    /// Two-space indented JSON with a trailing newline.
    pub fn to_json_string(&self) -> Result<String> {
        let mut out = serde_json::to_string_pretty(&self.fields).map_err(|source| {
            MigrateError::Serialize {
                path: self.path.clone(),
                source,
            }
        })?;
        out.push('\n');
        Ok(out)
    }

    /// Replace the file on disk in one step: write a sibling temp file, then
    /// rename it over the manifest.
    pub fn save(&self) -> Result<()> {
        let content = self.to_json_string()?;
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let write_err = |e| MigrateError::write(&self.path, e);

        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
        tmp.write_all(content.as_bytes()).map_err(write_err)?;
        if let Ok(metadata) = fs::metadata(&self.path) {
            tmp.as_file()
                .set_permissions(metadata.permissions())
                .map_err(write_err)?;
        }
        tmp.persist(&self.path).map_err(|e| write_err(e.error))?;

        debug!(path = %self.path.display(), "manifest written");
        Ok(())
    }
}

/// Script entries touched by [`PackageManifest::set_scripts`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptChanges {
    pub added: Vec<String>,
    /// Name and previous command of scripts that were overwritten.
    pub replaced: Vec<(String, String)>,
}

/// Result of the manifest rewrite.
#[derive(Debug)]
pub struct ManifestUpdate {
    pub manifest: PackageManifest,
    pub removed_fields: Vec<String>,
    pub scripts: ScriptChanges,
    pub diff: FileDiff,
}

/// Remove embedded ESLint/Prettier config and install the Biome scripts,
/// writing `package.json` once.
pub fn update_manifest(root: &Path) -> Result<ManifestUpdate> {
    update_manifest_with(root, PackageManifest::save)
}

/// [`update_manifest`] with the final write delegated to `save`.
pub fn update_manifest_with<F>(root: &Path, save: F) -> Result<ManifestUpdate>
where
    F: FnOnce(&PackageManifest) -> Result<()>,
{
    let path = root.join(MANIFEST_FILE_NAME);
    let original = fs::read_to_string(&path).map_err(|e| MigrateError::read(&path, e))?;
    let mut manifest = PackageManifest::parse(path, &original)?;

    let removed_fields = manifest.remove_fields(LEGACY_MANIFEST_FIELDS);
    let scripts = manifest.set_scripts(BIOME_SCRIPTS);
    save(&manifest)?;

    let diff = FileDiff::new(MANIFEST_FILE_NAME, original, manifest.to_json_string()?);
    debug!(
        removed = ?removed_fields,
        added = ?scripts.added,
        replaced = scripts.replaced.len(),
        "manifest updated"
    );

    Ok(ManifestUpdate {
        manifest,
        removed_fields,
        scripts,
        diff,
    })
}
