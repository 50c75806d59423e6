use crate::analyzer::FunctionParser;
use crate::cli::{Cli, SignatureArgs};
use crate::config::load_config;
use crate::error::{Result, TestgapError};
use crate::output::{ColorMode, Report, SignatureReport, write_output};
use crate::{EXIT_ERROR, EXIT_GAPS_FOUND, EXIT_SUCCESS};

use super::{formatter, read_header};

#[must_use]
pub fn run_signature(args: &SignatureArgs, cli: &Cli, color: ColorMode) -> i32 {
    match run_signature_impl(args, cli, color) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_ERROR
        }
    }
}

fn run_signature_impl(args: &SignatureArgs, cli: &Cli, color: ColorMode) -> Result<i32> {
    // 1. Load configuration
    let config = load_config(args.config.as_deref(), cli.no_config)?;

    // 2. Resolve the header to parse
    let header = args
        .header
        .clone()
        .or_else(|| config.header.path.clone())
        .ok_or_else(|| {
            TestgapError::Config(
                "No header file given; pass --header or set [header] path in the config"
                    .to_string(),
            )
        })?;

    // 3. Parse and classify
    let text = read_header(&header)?;
    let parser = FunctionParser::new(&text);

    let (signature, exit_code) = if args.validate {
        match parser.validate_function_exists(&args.function)? {
            Some(sig) => (Some(sig), EXIT_SUCCESS),
            None => (None, EXIT_GAPS_FOUND),
        }
    } else {
        (Some(parser.extract_signature(&args.function)?), EXIT_SUCCESS)
    };

    // 4. Attach the pattern identifier and report
    let patterns = config.pattern_map();
    let pattern = signature
        .as_ref()
        .map(|sig| patterns.get(sig.category).to_string());

    let report = Report::Signature(SignatureReport {
        header,
        function: args.function.clone(),
        signature,
        pattern,
    });

    let output = formatter(args.format, color).format(&report)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    Ok(exit_code)
}

#[cfg(test)]
#[path = "signature_tests.rs"]
mod tests;
