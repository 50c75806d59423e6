use std::fmt::Write;

use crate::analyzer::Parameter;
use crate::error::Result;

use super::{DiscoverReport, FunctionsReport, OutputFormatter, Report, SignatureReport};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn format_signature(&self, report: &SignatureReport, out: &mut String) {
        let Some(ref sig) = report.signature else {
            let status = self.colorize("MISSING", ansi::RED);
            let _ = writeln!(
                out,
                "✗ {status}: `{}` is not declared in {}",
                report.function,
                report.header.display()
            );
            return;
        };

        let status = self.colorize("FOUND", ansi::GREEN);
        let _ = writeln!(
            out,
            "✓ {status}: {} ({})",
            sig.name,
            self.colorize(sig.category.name(), ansi::CYAN)
        );
        let _ = writeln!(out, "  header: {}", report.header.display());
        let _ = writeln!(out, "  return type: {}", sig.return_type);
        if sig.is_template {
            let _ = writeln!(out, "  template: <{}>", sig.template_parameters.join(", "));
        }
        if sig.parameters.is_empty() {
            let _ = writeln!(out, "  parameters: (none)");
        } else {
            let _ = writeln!(out, "  parameters:");
            for param in &sig.parameters {
                let _ = writeln!(out, "    {}", describe_parameter(param));
            }
        }
        if let Some(ref pattern) = report.pattern {
            let _ = writeln!(out, "  pattern: {pattern}");
        }
    }

    fn format_functions(out: &mut String, reports: &[FunctionsReport]) {
        for report in reports {
            let _ = writeln!(out, "{}:", report.header.display());
            for entry in &report.functions {
                let _ = writeln!(
                    out,
                    "  {} -> {} ({})",
                    entry.name,
                    entry.category.name(),
                    entry.pattern
                );
            }
        }
        let total: usize = reports.iter().map(|r| r.functions.len()).sum();
        let _ = writeln!(out, "\nSummary: {total} functions declared");
    }

    fn format_discover(&self, out: &mut String, reports: &[DiscoverReport]) {
        for report in reports {
            if report.has_gaps() {
                let status = self.colorize("GAPS", ansi::RED);
                let _ = writeln!(out, "✗ {status}: {}", report.header.display());
                for gap in &report.untested {
                    let _ = writeln!(out, "    {} (expected {})", gap.name, gap.expected_file);
                }
            } else {
                let status = self.colorize("COVERED", ansi::GREEN);
                let _ = writeln!(out, "✓ {status}: {}", report.header.display());
            }
        }

        let declared: usize = reports.iter().map(|r| r.declared).sum();
        let tested: usize = reports.iter().map(|r| r.tested).sum();
        let untested: usize = reports.iter().map(|r| r.untested.len()).sum();
        let _ = writeln!(
            out,
            "\nSummary: {declared} declared, {tested} tested, {untested} untested"
        );
    }
}

fn describe_parameter(param: &Parameter) -> String {
    let shown = param.name.as_deref().map_or_else(
        || param.type_text.clone(),
        |name| format!("{} {name}", param.type_text),
    );
    let mut notes = Vec::new();
    if param.by_mutable_reference {
        notes.push("mutable reference");
    }
    if param.by_const_reference {
        notes.push("const reference");
    }
    if param.is_function_pointer {
        notes.push("function pointer");
    }
    if notes.is_empty() {
        shown
    } else {
        format!("{shown} [{}]", notes.join(", "))
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut out = String::new();
        match report {
            Report::Signature(sig) => self.format_signature(sig, &mut out),
            Report::Functions { headers } => Self::format_functions(&mut out, headers),
            Report::Discover { headers } => self.format_discover(&mut out, headers),
        }
        Ok(out.trim_end().to_string())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
