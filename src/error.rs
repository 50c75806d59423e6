use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestgapError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("No declaration of `{name}` found in header")]
    FunctionNotFound { name: String },

    #[error("Found {count} structurally distinct declarations of `{name}`; overload resolution is not attempted")]
    AmbiguousOverload { name: String, count: usize },

    #[error("Malformed parameter list: `{snippet}`")]
    MalformedParameterList { snippet: String },
}

pub type Result<T> = std::result::Result<T, TestgapError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
