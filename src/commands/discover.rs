use std::collections::HashSet;
use std::path::Path;

use globset::Glob;
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::cli::{Cli, DiscoverArgs};
use crate::config::load_config;
use crate::discovery::{HeaderIndex, TestNaming};
use crate::error::{Result, TestgapError};
use crate::output::{ColorMode, DiscoverReport, Report, UntestedFunction, write_output};
use crate::{EXIT_ERROR, EXIT_GAPS_FOUND, EXIT_SUCCESS};

use super::{formatter, read_header, resolve_headers};

#[must_use]
pub fn run_discover(args: &DiscoverArgs, cli: &Cli, color: ColorMode) -> i32 {
    match run_discover_impl(args, cli, color) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_ERROR
        }
    }
}

fn run_discover_impl(args: &DiscoverArgs, cli: &Cli, color: ColorMode) -> Result<i32> {
    // 1. Load configuration and resolve inputs
    let config = load_config(args.config.as_deref(), cli.no_config)?;
    let headers = resolve_headers(&args.headers, &config)?;
    let tests_dir = args
        .tests
        .clone()
        .or_else(|| config.tests.dir.clone())
        .ok_or_else(|| {
            TestgapError::Config(
                "No test directory given; pass --tests or set [tests] dir in the config"
                    .to_string(),
            )
        })?;
    let naming = config.naming();

    // 2. Gather the test-directory listing once; the core only sees filenames
    let listing = collect_test_listing(&tests_dir, &naming)?;

    // 3. Process headers in parallel
    let reports: Vec<DiscoverReport> = headers
        .par_iter()
        .map(|path| -> Result<DiscoverReport> {
            let text = read_header(path)?;
            let index = HeaderIndex::build(&text)?;
            let untested: Vec<UntestedFunction> = index
                .untested(&listing, &naming)
                .into_iter()
                .map(|name| UntestedFunction {
                    expected_file: naming.expected_filename(&name),
                    name,
                })
                .collect();
            Ok(DiscoverReport {
                header: path.clone(),
                declared: index.len(),
                tested: index.len() - untested.len(),
                untested,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let has_gaps = reports.iter().any(DiscoverReport::has_gaps);

    // 4. Format and write output
    let report = Report::Discover { headers: reports };
    let output = formatter(args.format, color).format(&report)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    Ok(if has_gaps { EXIT_GAPS_FOUND } else { EXIT_SUCCESS })
}

/// Filenames under `dir` matching the test naming convention.
///
/// A missing directory yields an empty listing: every declared function is
/// then a gap.
fn collect_test_listing(dir: &Path, naming: &TestNaming) -> Result<HashSet<String>> {
    let glob = naming.listing_glob();
    let matcher = Glob::new(&glob)
        .map_err(|source| TestgapError::InvalidPattern {
            pattern: glob.clone(),
            source,
        })?
        .compile_matcher();

    let mut listing = HashSet::new();
    for entry in WalkDir::new(dir)
        .into_iter()
        .filter_map(std::result::Result::ok)
    {
        if entry.file_type().is_file()
            && let Some(name) = entry.file_name().to_str()
            && matcher.is_match(name)
        {
            listing.insert(name.to_string());
        }
    }
    Ok(listing)
}

#[cfg(test)]
#[path = "discover_tests.rs"]
mod tests;
