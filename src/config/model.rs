use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::analyzer::PatternMap;
use crate::discovery::TestNaming;

/// Supported config version. Current version is "1".
pub const CONFIG_VERSION: &str = "1";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Config format version; unset means current.
    #[serde(default)]
    pub version: Option<String>,

    #[serde(default)]
    pub header: HeaderConfig,

    #[serde(default)]
    pub tests: TestsConfig,

    #[serde(default)]
    pub patterns: PatternsConfig,
}

/// Default header to analyze when the CLI does not name one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct HeaderConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Test-directory location and filename convention.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TestsConfig {
    /// Directory holding generated test sources.
    #[serde(default)]
    pub dir: Option<PathBuf>,

    /// Filename prefix for generated tests.
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,

    /// Filename suffix before the extension.
    #[serde(default = "default_file_suffix")]
    pub file_suffix: String,

    /// Source-file extension, without the dot.
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for TestsConfig {
    fn default() -> Self {
        Self {
            dir: None,
            file_prefix: default_file_prefix(),
            file_suffix: default_file_suffix(),
            extension: default_extension(),
        }
    }
}

/// Per-category pattern-identifier overrides. The resolved mapping stays
/// total: an unset entry falls back to the built-in default.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PatternsConfig {
    #[serde(default)]
    pub modifies_reference: Option<String>,

    #[serde(default)]
    pub returns_bool: Option<String>,

    #[serde(default)]
    pub returns_value: Option<String>,
}

impl Config {
    /// Resolve the total `Category -> pattern identifier` mapping.
    #[must_use]
    pub fn pattern_map(&self) -> PatternMap {
        PatternMap::with_overrides(
            self.patterns.modifies_reference.clone(),
            self.patterns.returns_bool.clone(),
            self.patterns.returns_value.clone(),
        )
    }

    /// Resolve the test-file naming convention.
    #[must_use]
    pub fn naming(&self) -> TestNaming {
        TestNaming {
            file_prefix: self.tests.file_prefix.clone(),
            file_suffix: self.tests.file_suffix.clone(),
            extension: self.tests.extension.clone(),
        }
    }
}

fn default_file_prefix() -> String {
    "test_".to_string()
}

fn default_file_suffix() -> String {
    "_runtime".to_string()
}

fn default_extension() -> String {
    "cpp".to_string()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
