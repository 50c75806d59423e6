use std::fs;

use crate::cli::InitArgs;
use crate::error::{Result, TestgapError};
use crate::{EXIT_ERROR, EXIT_SUCCESS};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot
/// be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(TestgapError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    let template = generate_config_template();

    fs::write(output_path, template)?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# testgap configuration file

[header]
# Default header to analyze when --header is not given
# path = "include/bit_utils.hpp"

[tests]
# Directory containing generated test sources
# dir = "tests/bit_utils"

# Test filename convention:
#   {file_prefix}{snake_case_function_name}{file_suffix}.{extension}
# setBit -> test_set_bit_runtime.cpp under the defaults below
file_prefix = "test_"
file_suffix = "_runtime"
extension = "cpp"

[patterns]
# Reference test used as the structural template for each category.
# Unset entries keep the built-in defaults.
# modifies_reference = "test_set_bit_runtime.cpp"
# returns_bool = "test_is_bit_set_runtime.cpp"
# returns_value = "test_read_bit_runtime.cpp"
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
