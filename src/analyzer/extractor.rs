use indexmap::IndexMap;

use super::comment::{strip_comments, strip_directives};
use super::parameter::ParameterParser;
use super::splitter::split_parameters;
use super::types::FunctionSignature;
use crate::error::{Result, TestgapError};

/// Names that precede `(` without being function declarations.
const NON_FUNCTION_KEYWORDS: &[&str] = &[
    "if",
    "while",
    "for",
    "switch",
    "catch",
    "return",
    "sizeof",
    "alignof",
    "alignas",
    "decltype",
    "noexcept",
    "static_assert",
    "new",
    "delete",
    "throw",
    "operator",
    "void",
    "bool",
    "char",
    "short",
    "int",
    "long",
    "float",
    "double",
    "signed",
    "unsigned",
    "auto",
];

/// Qualifier tokens preceding a return type, skipped rather than treated as
/// part of it.
const DECL_QUALIFIERS: &[&str] = &[
    "constexpr", "consteval", "inline", "static", "extern", "virtual", "explicit", "friend",
    "\"C\"",
];

/// A declaration site isolated by the scanner, before parameter parsing.
#[derive(Debug, Clone)]
struct RawDeclaration {
    name: String,
    return_type: String,
    params_raw: String,
    is_template: bool,
    template_params_raw: String,
}

/// Block kinds tracked while walking braces. Namespaces (and `extern "C"`
/// blocks) are transparent to file scope; class/struct/enum bodies and
/// function bodies are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockKind {
    Namespace,
    Opaque,
}

/// Parser for C++ function declarations in header text.
///
/// Construction cleans the text (comments, preprocessor directives) and
/// isolates every file-scope declaration candidate in one depth-tracked
/// pass. Each lookup parses parameters fresh; nothing is cached across
/// calls and no filesystem access is performed.
pub struct FunctionParser {
    cleaned: String,
    declarations: Vec<RawDeclaration>,
    params: ParameterParser,
}

impl FunctionParser {
    #[must_use]
    pub fn new(header_text: &str) -> Self {
        let cleaned = strip_directives(&strip_comments(header_text));
        let declarations = scan_declarations(&cleaned);
        Self {
            cleaned,
            declarations,
            params: ParameterParser::new(),
        }
    }

    /// Extract and classify the signature of `function_name`.
    ///
    /// # Errors
    /// `FunctionNotFound` if no declaration matches; `AmbiguousOverload` if
    /// more than one structurally distinct declaration matches (structurally
    /// identical re-declarations collapse to the first);
    /// `MalformedParameterList` if the declaration's parameters cannot be
    /// parsed.
    pub fn extract_signature(&self, function_name: &str) -> Result<FunctionSignature> {
        let matching: Vec<&RawDeclaration> = self
            .declarations
            .iter()
            .filter(|d| d.name == function_name)
            .collect();

        if matching.is_empty() {
            return Err(TestgapError::FunctionNotFound {
                name: function_name.to_string(),
            });
        }

        let signatures: Vec<FunctionSignature> = matching
            .iter()
            .map(|d| self.parse_declaration(d))
            .collect::<Result<_>>()?;

        let mut shapes: Vec<Vec<String>> = Vec::new();
        for sig in &signatures {
            let shape: Vec<String> = sig
                .parameters
                .iter()
                .map(|p| p.type_text.split_whitespace().collect::<String>())
                .collect();
            if !shapes.contains(&shape) {
                shapes.push(shape);
            }
        }
        if shapes.len() > 1 {
            return Err(TestgapError::AmbiguousOverload {
                name: function_name.to_string(),
                count: shapes.len(),
            });
        }

        Ok(signatures.into_iter().next().expect("nonempty checked"))
    }

    /// Existence-checking wrapper: `Ok(None)` instead of `FunctionNotFound`.
    ///
    /// # Errors
    /// All failure kinds other than `FunctionNotFound` still propagate.
    pub fn validate_function_exists(
        &self,
        function_name: &str,
    ) -> Result<Option<FunctionSignature>> {
        match self.extract_signature(function_name) {
            Ok(sig) => Ok(Some(sig)),
            Err(TestgapError::FunctionNotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Enumerate every file-scope function, in declaration order.
    ///
    /// Declarations whose parameters cannot be parsed are skipped, not
    /// failed: enumeration is best-effort and under-approximates. The first
    /// declaration wins when a name repeats.
    ///
    /// # Errors
    /// `MalformedParameterList` when the header text is empty or
    /// all-whitespace and cannot be scanned at all.
    pub fn list_functions(&self) -> Result<IndexMap<String, FunctionSignature>> {
        if self.cleaned.trim().is_empty() {
            return Err(TestgapError::MalformedParameterList {
                snippet: "empty header text".to_string(),
            });
        }

        let mut index = IndexMap::new();
        for decl in &self.declarations {
            if index.contains_key(&decl.name) {
                continue;
            }
            if let Ok(sig) = self.parse_declaration(decl) {
                index.insert(decl.name.clone(), sig);
            }
        }
        Ok(index)
    }

    fn parse_declaration(&self, decl: &RawDeclaration) -> Result<FunctionSignature> {
        let parameters = split_parameters(&decl.params_raw)?
            .iter()
            .map(|p| self.params.parse(p))
            .collect::<Result<Vec<_>>>()?;

        let template_parameters = if decl.is_template {
            split_parameters(&decl.template_params_raw)?
        } else {
            Vec::new()
        };

        let category = FunctionSignature::classify(&decl.return_type, &parameters);

        Ok(FunctionSignature {
            name: decl.name.clone(),
            return_type: decl.return_type.clone(),
            parameters,
            category,
            is_template: decl.is_template,
            template_parameters,
        })
    }
}

/// Walk the cleaned text once, tracking brace context, and record every
/// file-scope `name(` site that has a plausible return-type head.
fn scan_declarations(cleaned: &str) -> Vec<RawDeclaration> {
    let chars: Vec<char> = cleaned.chars().collect();
    let mut declarations = Vec::new();
    let mut stack: Vec<BlockKind> = Vec::new();
    let mut head_start = 0usize;
    let mut i = 0usize;

    while i < chars.len() {
        match chars[i] {
            ';' => head_start = i + 1,
            '{' => {
                let head: String = chars[head_start..i].iter().collect();
                stack.push(classify_block(&head));
                head_start = i + 1;
            }
            '}' => {
                stack.pop();
                head_start = i + 1;
            }
            '(' if stack.iter().all(|k| *k == BlockKind::Namespace) => {
                if let Some((decl, close)) = try_candidate(&chars, head_start, i) {
                    declarations.push(decl);
                    head_start = close + 1;
                    i = close;
                }
            }
            _ => {}
        }
        i += 1;
    }

    declarations
}

/// Decide what kind of block a `{` opens from the text since the last
/// declaration boundary.
fn classify_block(head: &str) -> BlockKind {
    let tokens: Vec<&str> = head.split_whitespace().collect();
    if tokens
        .iter()
        .any(|t| matches!(*t, "class" | "struct" | "union" | "enum"))
    {
        return BlockKind::Opaque;
    }
    if tokens.first() == Some(&"namespace")
        || (tokens.contains(&"extern") && tokens.contains(&"\"C\""))
    {
        return BlockKind::Namespace;
    }
    BlockKind::Opaque
}

/// Try to read a declaration whose parameter list opens at `open`.
/// Returns the declaration and the index of the matching `)`.
fn try_candidate(
    chars: &[char],
    head_start: usize,
    open: usize,
) -> Option<(RawDeclaration, usize)> {
    let (name, name_start) = identifier_before(chars, open)?;
    if NON_FUNCTION_KEYWORDS.contains(&name.as_str()) {
        return None;
    }
    if is_member_or_destructor(chars, name_start) {
        return None;
    }

    let head: String = chars[head_start..name_start].iter().collect();
    let (return_type, is_template, template_params_raw) = parse_head(&head)?;

    let close = matching_paren(chars, open)?;
    let params_raw: String = chars[open + 1..close].iter().collect();

    Some((
        RawDeclaration {
            name,
            return_type,
            params_raw,
            is_template,
            template_params_raw,
        },
        close,
    ))
}

/// Read the identifier immediately before `pos`, skipping whitespace.
fn identifier_before(chars: &[char], pos: usize) -> Option<(String, usize)> {
    let mut end = pos;
    while end > 0 && chars[end - 1].is_whitespace() {
        end -= 1;
    }
    let mut start = end;
    while start > 0 && (chars[start - 1].is_alphanumeric() || chars[start - 1] == '_') {
        start -= 1;
    }
    if start == end || chars[start].is_numeric() {
        return None;
    }
    Some((chars[start..end].iter().collect(), start))
}

/// Reject `obj.method(`, `ptr->method(`, `Class::method(` and `~Dtor(`.
fn is_member_or_destructor(chars: &[char], name_start: usize) -> bool {
    let mut j = name_start;
    while j > 0 && chars[j - 1].is_whitespace() {
        j -= 1;
    }
    if j == 0 {
        return false;
    }
    match chars[j - 1] {
        '.' | '~' => true,
        ':' => j >= 2 && chars[j - 2] == ':',
        '>' => j >= 2 && chars[j - 2] == '-',
        _ => false,
    }
}

/// Split a declaration head into return type and optional template header.
/// Returns `None` when the head cannot be a declaration (no return type, an
/// initializer `=`, a type alias, or a trailing `operator`).
fn parse_head(head: &str) -> Option<(String, bool, String)> {
    let head = strip_attributes(head);
    let trimmed = head.trim();

    let (is_template, template_params_raw, rest) = if let Some(after) =
        trimmed.strip_prefix("template")
        && after.trim_start().starts_with('<')
    {
        let (params, remainder) = read_angle_span(after.trim_start())?;
        (true, params, remainder)
    } else {
        (false, String::new(), trimmed.to_string())
    };

    if rest.contains('=') {
        return None;
    }

    let tokens: Vec<&str> = rest
        .split_whitespace()
        .skip_while(|t| DECL_QUALIFIERS.contains(t))
        .collect();

    if tokens.contains(&"typedef") || tokens.contains(&"using") {
        return None;
    }
    if tokens.last() == Some(&"operator") {
        return None;
    }

    let return_type = tokens.join(" ");
    if return_type.is_empty()
        || !return_type
            .chars()
            .next()
            .is_some_and(|c| c.is_alphabetic() || c == '_' || c == ':')
    {
        return None;
    }

    Some((return_type, is_template, template_params_raw))
}

/// Blank out `[[...]]` attribute spans.
fn strip_attributes(head: &str) -> String {
    let mut out = head.to_string();
    while let Some(start) = out.find("[[") {
        let Some(rel_end) = out[start..].find("]]") else {
            break;
        };
        out.replace_range(start..start + rel_end + 2, " ");
    }
    out
}

/// Read a `<...>` span with depth tracking; returns the inner text and the
/// remainder after the closing `>`.
fn read_angle_span(text: &str) -> Option<(String, String)> {
    let chars: Vec<char> = text.chars().collect();
    debug_assert_eq!(chars.first(), Some(&'<'));
    let mut depth = 0usize;
    for (i, &ch) in chars.iter().enumerate() {
        match ch {
            '<' => depth += 1,
            '>' => {
                depth -= 1;
                if depth == 0 {
                    let inner: String = chars[1..i].iter().collect();
                    let rest: String = chars[i + 1..].iter().collect();
                    return Some((inner, rest));
                }
            }
            _ => {}
        }
    }
    None
}

/// Find the `)` matching the `(` at `open`.
fn matching_paren(chars: &[char], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, &ch) in chars.iter().enumerate().skip(open) {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
#[path = "extractor_tests.rs"]
mod tests;
