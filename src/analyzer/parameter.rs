use regex::Regex;

use super::types::Parameter;
use crate::error::{Result, TestgapError};

/// Type keywords that can never be a parameter name.
const TYPE_KEYWORDS: &[&str] = &[
    "void", "bool", "char", "wchar_t", "char8_t", "char16_t", "char32_t", "short", "int", "long",
    "float", "double", "signed", "unsigned", "auto", "const", "volatile",
];

/// Parser for a single parameter-declaration substring.
pub struct ParameterParser {
    fn_ptr_name: Regex,
    trailing_name: Regex,
    const_token: Regex,
}

impl Default for ParameterParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ParameterParser {
    #[must_use]
    pub fn new() -> Self {
        Self {
            fn_ptr_name: Regex::new(r"\(\s*\*\s*([a-zA-Z_][a-zA-Z0-9_]*)\s*\)")
                .expect("Invalid regex"),
            trailing_name: Regex::new(r"([a-zA-Z_][a-zA-Z0-9_]*)\s*(\[[^\]]*\])?\s*$")
                .expect("Invalid regex"),
            const_token: Regex::new(r"\bconst\b").expect("Invalid regex"),
        }
    }

    /// Parse one substring produced by the splitter into a [`Parameter`].
    ///
    /// Trailing default-value text (`= ...` at top level) is stripped before
    /// classification. Reference detection only considers `&` at top level,
    /// so a reference inside a function-pointer's own parameter list does not
    /// mark the parameter itself as a reference.
    ///
    /// # Errors
    /// `MalformedParameterList` if the substring cannot be separated into
    /// type and name parts.
    pub fn parse(&self, raw: &str) -> Result<Parameter> {
        let collapsed = collapse_whitespace(raw);
        let text = strip_default_value(&collapsed);

        if text == "..." {
            return Ok(Parameter {
                type_text: text,
                name: None,
                by_mutable_reference: false,
                by_const_reference: false,
                is_function_pointer: false,
            });
        }

        if !text.chars().any(|c| c.is_alphanumeric() || c == '_') {
            return Err(TestgapError::MalformedParameterList {
                snippet: raw.trim().to_string(),
            });
        }

        let scan = scan_top_level(&text);
        let has_const = self.const_token.is_match(&scan.top_level_text);
        let by_const_reference = scan.is_lvalue_reference && has_const;
        let by_mutable_reference = scan.is_lvalue_reference && !has_const;

        let (type_text, name) = if scan.is_function_pointer {
            self.split_function_pointer(&text)
        } else {
            self.split_trailing_name(&text)
        };

        Ok(Parameter {
            type_text,
            name,
            by_mutable_reference,
            by_const_reference,
            is_function_pointer: scan.is_function_pointer,
        })
    }

    /// Pull the name out of a `(*name)` group, leaving `(*)` in the type.
    fn split_function_pointer(&self, text: &str) -> (String, Option<String>) {
        if let Some(caps) = self.fn_ptr_name.captures(text) {
            let name = caps.get(1).map(|m| m.as_str().to_string());
            let group = caps.get(0).expect("capture 0 always present");
            let type_text = format!("{}(*){}", &text[..group.start()], &text[group.end()..]);
            (type_text, name)
        } else {
            (text.to_string(), None)
        }
    }

    /// Take the trailing identifier as the parameter name, unless the
    /// parameter is unnamed (single token, trailing type keyword, or the
    /// tail of a qualified type name).
    fn split_trailing_name(&self, text: &str) -> (String, Option<String>) {
        let Some(caps) = self.trailing_name.captures(text) else {
            return (text.to_string(), None);
        };
        let ident = caps.get(1).expect("capture 1 matched");
        let prefix = text[..ident.start()].trim_end();

        if prefix.is_empty() || prefix.ends_with(':') || TYPE_KEYWORDS.contains(&ident.as_str()) {
            return (text.to_string(), None);
        }

        let array_suffix = caps.get(2).map_or("", |m| m.as_str());
        (
            format!("{prefix}{array_suffix}"),
            Some(ident.as_str().to_string()),
        )
    }
}

struct TopLevelScan {
    /// Characters outside both `<...>` and `(...)` spans.
    top_level_text: String,
    is_lvalue_reference: bool,
    is_function_pointer: bool,
}

/// Single depth-tracked pass over a parameter's text.
fn scan_top_level(text: &str) -> TopLevelScan {
    let chars: Vec<char> = text.chars().collect();
    let mut template_depth: usize = 0;
    let mut paren_depth: usize = 0;
    let mut top_level_text = String::new();
    let mut is_lvalue_reference = false;
    let mut is_function_pointer = false;

    for (i, &ch) in chars.iter().enumerate() {
        let at_top = template_depth == 0 && paren_depth == 0;
        match ch {
            '<' => template_depth += 1,
            '>' => template_depth = template_depth.saturating_sub(1),
            '(' => {
                if at_top {
                    let next = chars[i + 1..].iter().find(|c| !c.is_whitespace());
                    if next == Some(&'*') {
                        is_function_pointer = true;
                    }
                }
                paren_depth += 1;
            }
            ')' => paren_depth = paren_depth.saturating_sub(1),
            '&' if at_top => {
                let prev_amp = i > 0 && chars[i - 1] == '&';
                let next_amp = chars.get(i + 1) == Some(&'&');
                if !prev_amp && !next_amp {
                    is_lvalue_reference = true;
                }
            }
            _ => {}
        }
        if at_top && !matches!(ch, '<' | '(') {
            top_level_text.push(ch);
        }
    }

    TopLevelScan {
        top_level_text,
        is_lvalue_reference,
        is_function_pointer,
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cut trailing `= default-value` text at template/paren depth 0.
fn strip_default_value(text: &str) -> String {
    let mut template_depth: usize = 0;
    let mut paren_depth: usize = 0;

    for (i, ch) in text.char_indices() {
        match ch {
            '<' => template_depth += 1,
            '>' => template_depth = template_depth.saturating_sub(1),
            '(' => paren_depth += 1,
            ')' => paren_depth = paren_depth.saturating_sub(1),
            '=' if template_depth == 0 && paren_depth == 0 => {
                return text[..i].trim_end().to_string();
            }
            _ => {}
        }
    }

    text.to_string()
}

#[cfg(test)]
#[path = "parameter_tests.rs"]
mod tests;
