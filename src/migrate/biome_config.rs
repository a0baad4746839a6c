//! Generated Biome configuration.
//!
//! The document is built from fixed defaults that approximate a typical
//! ESLint + Prettier setup. Nothing about the migrated project is read when
//! producing it, so re-running the migration always yields the same file.

use crate::error::{MigrateError, Result};
use indexmap::IndexMap;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration file name written to the project root.
pub const BIOME_CONFIG_FILE_NAME: &str = "biome.json";

/// JSON schema reference embedded in the generated file.
pub const BIOME_SCHEMA_URL: &str = "https://biomejs.dev/schemas/1.9.4/schema.json";

/// Paths Biome should never touch.
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
    "node_modules",
    "dist",
    "build",
    "coverage",
    ".next",
    "*.min.js",
];

/// Rule severity as understood by Biome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleLevel {
    Error,
    Warn,
}

/// Curated rules on top of Biome's recommended set.
const RULES: &[(&str, &[(&str, RuleLevel)])] = &[
    (
        "correctness",
        &[
            ("noUnusedVariables", RuleLevel::Error),
            ("noUnusedImports", RuleLevel::Error),
            ("useExhaustiveDependencies", RuleLevel::Warn),
        ],
    ),
    (
        "style",
        &[
            ("useConst", RuleLevel::Error),
            ("noNonNullAssertion", RuleLevel::Warn),
            ("noParameterAssign", RuleLevel::Error),
            ("useTemplate", RuleLevel::Warn),
        ],
    ),
    (
        "suspicious",
        &[
            ("noExplicitAny", RuleLevel::Warn),
            ("noConsoleLog", RuleLevel::Warn),
            ("noDoubleEquals", RuleLevel::Error),
        ],
    ),
];

/// Root of `biome.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BiomeConfig {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub vcs: VcsConfig,
    pub files: FilesConfig,
    pub formatter: FormatterConfig,
    pub organize_imports: Toggle,
    pub linter: LinterConfig,
    pub javascript: JavascriptConfig,
    pub json: JsonConfig,
}

/// Version-control integration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VcsConfig {
    pub enabled: bool,
    pub client_kind: String,
    pub use_ignore_file: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilesConfig {
    pub ignore_unknown: bool,
    pub ignore: Vec<String>,
}

/// Language-independent formatter options.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatterConfig {
    pub enabled: bool,
    pub indent_style: String,
    pub indent_width: u8,
    pub line_width: u16,
    pub line_ending: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Toggle {
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinterConfig {
    pub enabled: bool,
    pub rules: LinterRules,
}

/// Rule groups keyed by group name, then rule name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinterRules {
    pub recommended: bool,
    #[serde(flatten)]
    pub groups: IndexMap<String, IndexMap<String, RuleLevel>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JavascriptConfig {
    pub formatter: JavascriptFormatter,
}

/// Prettier-compatible JavaScript formatting choices.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JavascriptFormatter {
    pub quote_style: String,
    pub jsx_quote_style: String,
    pub trailing_commas: String,
    pub semicolons: String,
    pub bracket_spacing: bool,
    pub arrow_parentheses: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonConfig {
    pub formatter: Toggle,
    pub linter: Toggle,
}

impl Default for BiomeConfig {
    fn default() -> Self {
        Self {
            schema: BIOME_SCHEMA_URL.to_string(),
            vcs: VcsConfig {
                enabled: true,
                client_kind: "git".to_string(),
                use_ignore_file: true,
            },
            files: FilesConfig {
                ignore_unknown: false,
                ignore: DEFAULT_IGNORE_PATTERNS.iter().map(|p| p.to_string()).collect(),
            },
            formatter: FormatterConfig {
                enabled: true,
                indent_style: "space".to_string(),
                indent_width: 2,
                line_width: 100,
                line_ending: "lf".to_string(),
            },
            organize_imports: Toggle { enabled: true },
            linter: LinterConfig {
                enabled: true,
                rules: LinterRules::default(),
            },
            javascript: JavascriptConfig {
                formatter: JavascriptFormatter {
                    quote_style: "single".to_string(),
                    jsx_quote_style: "double".to_string(),
                    trailing_commas: "es5".to_string(),
                    semicolons: "always".to_string(),
                    bracket_spacing: true,
                    arrow_parentheses: "always".to_string(),
                },
            },
            json: JsonConfig {
                formatter: Toggle { enabled: true },
                linter: Toggle { enabled: true },
            },
        }
    }
}

impl Default for LinterRules {
    fn default() -> Self {
        let groups = RULES
            .iter()
            .map(|(group, rules)| {
                let rules = rules
                    .iter()
                    .map(|(name, level)| (name.to_string(), *level))
                    .collect();
                (group.to_string(), rules)
            })
            .collect();

        Self {
            recommended: true,
            groups,
        }
    }
}

impl BiomeConfig {
    /// Render as pretty JSON with a trailing newline.
    pub fn to_json_string(&self) -> Result<String> {
        let mut out = serde_json::to_string_pretty(self).map_err(|source| MigrateError::Serialize {
            path: PathBuf::from(BIOME_CONFIG_FILE_NAME),
            source,
        })?;
        out.push('\n');
        Ok(out)
    }

    /// Write `biome.json` into `root`, replacing any existing file.
    pub fn write_to(&self, root: &Path) -> Result<PathBuf> {
        let path = root.join(BIOME_CONFIG_FILE_NAME);
        let content = self.to_json_string()?;

        if path.exists() {
            debug!(path = %path.display(), "overwriting existing biome config");
        }

        fs::write(&path, content).map_err(|e| MigrateError::write(&path, e))?;
        Ok(path)
    }
}
