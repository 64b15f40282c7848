//! Diagnostic formatting for better error messages
//!
//! This module formats errors with colour and, when the offending input line
//! is known, a caret pointing at where the problem starts.

use super::LexError;
use colored::Colorize;

/// Diagnostic information for displaying errors with context
pub struct Diagnostic {
    error: LexError,
    source: Option<String>,
    line: Option<usize>,
}

impl Diagnostic {
    /// Create a new diagnostic from an error
    pub fn new(error: LexError) -> Self {
        Self {
            error,
            source: None,
            line: None,
        }
    }

    /// Create a diagnostic with the offending input line
    pub fn with_source(error: LexError, source: &str, line: usize) -> Self {
        Self {
            error,
            source: Some(source.to_string()),
            line: Some(line),
        }
    }

    /// Format the diagnostic with color and context
    pub fn format(&self) -> String {
        let mut output = String::new();

        let kind = self.error.kind().red().bold();
        output.push_str(&format!("{}: ", kind));
        output.push_str(&self.error.message());
        output.push('\n');

        if let (Some(source), Some(line)) = (&self.source, self.line) {
            output.push_str(&self.format_source_context(source, line));
        }

        output
    }

    fn format_source_context(&self, source: &str, line: usize) -> String {
        let mut output = String::new();
        let line_num_width = line.to_string().len();

        output.push_str(&format!(
            "  {} {}\n",
            format!("{:width$}", line, width = line_num_width).blue().bold(),
            source
        ));

        if let Some(column) = self.error.column() {
            let padding = " ".repeat(line_num_width + 3 + column - 1);
            output.push_str(&format!("{}{}\n", padding, "^".red().bold()));
        }

        output
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_without_source() {
        let err = LexError::UnknownVariant { name: "octal".to_string() };
        let formatted = Diagnostic::new(err).format();

        assert!(formatted.contains("Usage Error"));
        assert!(formatted.contains("octal"));
    }

    #[test]
    fn test_diagnostic_with_source() {
        colored::control::set_override(false);
        let err = LexError::LineTooLong { length: 7, limit: 4 };
        let formatted = Diagnostic::with_source(err, "id1 + 2", 3).format();

        assert!(formatted.contains("Input Error"));
        assert!(formatted.contains("  3 id1 + 2\n"));
        // caret sits under the fifth character of the line
        assert!(formatted.contains("\n        ^\n"));
    }
}
