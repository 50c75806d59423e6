mod json;
mod text;

pub use json::JsonFormatter;
pub use text::{ColorMode, TextFormatter};

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::analyzer::{Category, FunctionSignature};
use crate::error::Result;

/// Result of a signature lookup against one header.
#[derive(Debug, Serialize)]
pub struct SignatureReport {
    pub header: PathBuf,
    pub function: String,
    /// `None` when a `--validate` lookup found no declaration.
    pub signature: Option<FunctionSignature>,
    /// Pattern identifier for the signature's category.
    pub pattern: Option<String>,
}

/// One enumerated function of a header index.
#[derive(Debug, Serialize)]
pub struct FunctionEntry {
    pub name: String,
    pub return_type: String,
    pub category: Category,
    pub pattern: String,
}

/// Enumeration of all declared functions in one header.
#[derive(Debug, Serialize)]
pub struct FunctionsReport {
    pub header: PathBuf,
    pub functions: Vec<FunctionEntry>,
}

/// Test-gap discovery result for one header.
#[derive(Debug, Serialize)]
pub struct DiscoverReport {
    pub header: PathBuf,
    pub declared: usize,
    pub tested: usize,
    /// Untested function names with their expected test filenames, in
    /// declaration order.
    pub untested: Vec<UntestedFunction>,
}

#[derive(Debug, Serialize)]
pub struct UntestedFunction {
    pub name: String,
    pub expected_file: String,
}

impl DiscoverReport {
    #[must_use]
    pub fn has_gaps(&self) -> bool {
        !self.untested.is_empty()
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    Signature(SignatureReport),
    Functions { headers: Vec<FunctionsReport> },
    Discover { headers: Vec<DiscoverReport> },
}

/// Trait for formatting reports into various output formats.
pub trait OutputFormatter {
    /// Format the report into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &Report) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Write formatted output to a file, or to stdout unless quiet.
///
/// # Errors
/// Returns an error if the output file cannot be written.
pub fn write_output(path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    if let Some(path) = path {
        std::fs::write(path, content)?;
    } else if !quiet {
        println!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
