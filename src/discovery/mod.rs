mod naming;

pub use naming::{TestNaming, snake_case};

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::analyzer::{FunctionParser, FunctionSignature};
use crate::error::Result;

/// Ordered map of every file-scope function declared in one header.
///
/// Built once per discovery request and dropped afterwards; declaration
/// order is preserved for deterministic output.
#[derive(Debug)]
pub struct HeaderIndex {
    functions: IndexMap<String, FunctionSignature>,
}

impl HeaderIndex {
    /// Build the index from raw header text.
    ///
    /// Declarations that cannot be confidently isolated are skipped rather
    /// than failing the whole pass.
    ///
    /// # Errors
    /// `MalformedParameterList` when the header text cannot be scanned at
    /// all (empty or all-whitespace).
    pub fn build(header_text: &str) -> Result<Self> {
        let parser = FunctionParser::new(header_text);
        Ok(Self {
            functions: parser.list_functions()?,
        })
    }

    /// Declared function names, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FunctionSignature> {
        self.functions.get(name)
    }

    /// Name/signature pairs, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FunctionSignature)> {
        self.functions.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Names whose expected test file is absent from `test_listing`, in
    /// declaration order.
    #[must_use]
    pub fn untested(&self, test_listing: &HashSet<String>, naming: &TestNaming) -> Vec<String> {
        self.names()
            .filter(|name| !test_listing.contains(&naming.expected_filename(name)))
            .map(ToString::to_string)
            .collect()
    }
}

/// Discover declared functions lacking a test file.
///
/// `test_listing` is an externally supplied set of filenames; no filesystem
/// access happens here. Running twice on the same inputs yields the same
/// ordered result.
///
/// # Errors
/// `MalformedParameterList` when the header text cannot be scanned at all.
pub fn discover_untested(
    header_text: &str,
    test_listing: &HashSet<String>,
    naming: &TestNaming,
) -> Result<Vec<String>> {
    let index = HeaderIndex::build(header_text)?;
    Ok(index.untested(test_listing, naming))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
