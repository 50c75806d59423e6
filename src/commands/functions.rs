use rayon::prelude::*;

use crate::cli::{Cli, FunctionsArgs};
use crate::config::load_config;
use crate::discovery::HeaderIndex;
use crate::error::Result;
use crate::output::{ColorMode, FunctionEntry, FunctionsReport, Report, write_output};
use crate::{EXIT_ERROR, EXIT_SUCCESS};

use super::{formatter, read_header, resolve_headers};

#[must_use]
pub fn run_functions(args: &FunctionsArgs, cli: &Cli, color: ColorMode) -> i32 {
    match run_functions_impl(args, cli, color) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_ERROR
        }
    }
}

fn run_functions_impl(args: &FunctionsArgs, cli: &Cli, color: ColorMode) -> Result<i32> {
    let config = load_config(args.config.as_deref(), cli.no_config)?;
    let headers = resolve_headers(&args.headers, &config)?;
    let patterns = config.pattern_map();

    let reports: Vec<FunctionsReport> = headers
        .par_iter()
        .map(|path| -> Result<FunctionsReport> {
            let text = read_header(path)?;
            let index = HeaderIndex::build(&text)?;
            let functions = index
                .iter()
                .map(|(name, sig)| FunctionEntry {
                    name: name.to_string(),
                    return_type: sig.return_type.clone(),
                    category: sig.category,
                    pattern: patterns.get(sig.category).to_string(),
                })
                .collect();
            Ok(FunctionsReport {
                header: path.clone(),
                functions,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let report = Report::Functions { headers: reports };
    let output = formatter(args.format, color).format(&report)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    Ok(EXIT_SUCCESS)
}

#[cfg(test)]
#[path = "functions_tests.rs"]
mod tests;
