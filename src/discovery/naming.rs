/// Convert a camelCase/PascalCase function name to `snake_case`.
///
/// Consecutive capitals are kept together: `parseHTTPHeader` becomes
/// `parse_http_header`. The transformation is deterministic; identical input
/// always yields identical output.
#[must_use]
pub fn snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &ch) in chars.iter().enumerate() {
        if ch.is_uppercase() {
            let prev_lower = i > 0 && (chars[i - 1].is_lowercase() || chars[i - 1].is_numeric());
            let next_lower = chars.get(i + 1).is_some_and(|c| c.is_lowercase());
            let prev_upper = i > 0 && chars[i - 1].is_uppercase();
            if prev_lower || (prev_upper && next_lower) {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }

    out
}

/// Naming convention connecting a declared function to its test file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestNaming {
    pub file_prefix: String,
    pub file_suffix: String,
    pub extension: String,
}

impl Default for TestNaming {
    fn default() -> Self {
        Self {
            file_prefix: "test_".to_string(),
            file_suffix: "_runtime".to_string(),
            extension: "cpp".to_string(),
        }
    }
}

impl TestNaming {
    /// Derive the expected test filename for a declared function:
    /// `setBit` maps to `test_set_bit_runtime.cpp` under the defaults.
    #[must_use]
    pub fn expected_filename(&self, function_name: &str) -> String {
        format!(
            "{}{}{}.{}",
            self.file_prefix,
            snake_case(function_name),
            self.file_suffix,
            self.extension
        )
    }

    /// Glob matching all test files under this convention, for filtering a
    /// test-directory listing.
    #[must_use]
    pub fn listing_glob(&self) -> String {
        format!(
            "{}*{}.{}",
            self.file_prefix, self.file_suffix, self.extension
        )
    }
}

#[cfg(test)]
#[path = "naming_tests.rs"]
mod tests;
