mod discover;
mod functions;
mod init;
mod signature;

pub use discover::run_discover;
pub use functions::run_functions;
pub use init::{generate_config_template, run_init};
pub use signature::run_signature;

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{Result, TestgapError};
use crate::output::{ColorMode, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};

fn formatter(format: OutputFormat, color: ColorMode) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(color)),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

fn read_header(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| TestgapError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// CLI headers win; otherwise the config's default header applies.
fn resolve_headers(cli_headers: &[PathBuf], config: &Config) -> Result<Vec<PathBuf>> {
    if !cli_headers.is_empty() {
        return Ok(cli_headers.to_vec());
    }
    config.header.path.clone().map(|p| vec![p]).ok_or_else(|| {
        TestgapError::Config(
            "No header file given; pass --header or set [header] path in the config".to_string(),
        )
    })
}
