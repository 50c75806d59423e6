/// Remove `//` and `/* ... */` comments from C++ source text.
///
/// String and character literals are tracked so a comment marker inside a
/// literal is left alone. Newlines inside comments are preserved to keep the
/// line structure of the input. Raw string literals (`R"(...)"`) are not
/// recognized.
#[must_use]
pub fn strip_comments(content: &str) -> String {
    #[derive(PartialEq)]
    enum State {
        Code,
        LineComment,
        BlockComment,
        StringLit,
        CharLit,
    }

    let mut out = String::with_capacity(content.len());
    let mut state = State::Code;
    let mut chars = content.chars().peekable();

    while let Some(ch) = chars.next() {
        match state {
            State::Code => match ch {
                '/' if chars.peek() == Some(&'/') => {
                    chars.next();
                    state = State::LineComment;
                }
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    state = State::BlockComment;
                    // Marker becomes a space so adjacent tokens stay separated.
                    out.push(' ');
                }
                '"' => {
                    out.push(ch);
                    state = State::StringLit;
                }
                '\'' => {
                    out.push(ch);
                    state = State::CharLit;
                }
                _ => out.push(ch),
            },
            State::LineComment => {
                if ch == '\n' {
                    out.push('\n');
                    state = State::Code;
                }
            }
            State::BlockComment => {
                if ch == '\n' {
                    out.push('\n');
                } else if ch == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    state = State::Code;
                }
            }
            State::StringLit => {
                out.push(ch);
                if ch == '\\' {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                } else if ch == '"' {
                    state = State::Code;
                }
            }
            State::CharLit => {
                out.push(ch);
                if ch == '\\' {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                } else if ch == '\'' {
                    state = State::Code;
                }
            }
        }
    }

    out
}

/// Blank out preprocessor directive lines, including `\` continuations.
///
/// Function-like macros such as `#define MAX(a, b) ...` would otherwise look
/// like declaration candidates to the scanner.
#[must_use]
pub fn strip_directives(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut continuing = false;

    for line in content.lines() {
        let is_directive = continuing || line.trim_start().starts_with('#');
        if is_directive {
            continuing = line.trim_end().ends_with('\\');
        } else {
            out.push_str(line);
            continuing = false;
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
#[path = "comment_tests.rs"]
mod tests;
