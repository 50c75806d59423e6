use crate::error::Result;

use super::{OutputFormatter, Report};

pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
