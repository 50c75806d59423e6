use crate::error::{Result, TestgapError};

/// Split the text between a declaration's outer parentheses into top-level
/// parameter substrings.
///
/// A comma separates parameters only at template-angle-bracket depth 0 and
/// parenthesis depth 0, so `std::pair<int, int>` and the inner list of
/// `void (*callback)(int, int)` stay intact.
///
/// An unmatched `>` is treated as a no-op rather than underflowing the
/// counter: `>>` may close two template lists or be a shift token, and this
/// scanner does not disambiguate the two. Headers relying on nested templates
/// closed with `>>` are a known limitation.
///
/// # Errors
/// `MalformedParameterList` if either depth counter is nonzero at end of
/// input.
pub fn split_parameters(raw: &str) -> Result<Vec<String>> {
    let mut params = Vec::new();
    let mut current = String::new();
    let mut template_depth: usize = 0;
    let mut paren_depth: usize = 0;

    for ch in raw.chars() {
        match ch {
            '<' => {
                template_depth += 1;
                current.push(ch);
            }
            '>' => {
                template_depth = template_depth.saturating_sub(1);
                current.push(ch);
            }
            '(' => {
                paren_depth += 1;
                current.push(ch);
            }
            ')' => {
                paren_depth = paren_depth.saturating_sub(1);
                current.push(ch);
            }
            ',' if template_depth == 0 && paren_depth == 0 => {
                params.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }

    if template_depth != 0 || paren_depth != 0 {
        return Err(TestgapError::MalformedParameterList {
            snippet: raw.trim().to_string(),
        });
    }

    if !current.trim().is_empty() {
        params.push(current);
    }

    Ok(params
        .into_iter()
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect())
}

#[cfg(test)]
#[path = "splitter_tests.rs"]
mod tests;
