use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "testgap")]
#[command(author, version, about = "C++ signature classifier - find functions lacking tests")]
#[command(long_about = "Parses C++ header declarations, classifies function signatures, and\n\
    discovers declared functions without a generated test.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - Test gaps found (or --validate miss)\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract and classify one function's signature
    Signature(SignatureArgs),

    /// Enumerate every function declared in a header
    Functions(FunctionsArgs),

    /// List declared functions lacking a test file
    Discover(DiscoverArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct SignatureArgs {
    /// Function name to look up
    pub function: String,

    /// Header file to parse (falls back to config)
    #[arg(long)]
    pub header: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Existence-checking semantics: report a missing function instead of
    /// failing with an error
    #[arg(long)]
    pub validate: bool,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct FunctionsArgs {
    /// Header files to parse (repeatable; falls back to config)
    #[arg(long = "header")]
    pub headers: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct DiscoverArgs {
    /// Header files to parse (repeatable; falls back to config)
    #[arg(long = "header")]
    pub headers: Vec<PathBuf>,

    /// Directory containing existing test sources (falls back to config)
    #[arg(long)]
    pub tests: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".testgap.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
