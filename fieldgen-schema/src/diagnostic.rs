//! Non-fatal findings collected while parsing.

use std::fmt;

use serde::Serialize;

/// How much a diagnostic matters to the generated output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Schema text was skipped; the output misses whatever it declared.
    Warning,
    /// Nothing was lost, but the output may not be what the schema suggests.
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Info => f.write_str("info"),
        }
    }
}

/// A finding about one spot in the schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    /// `<file>:<line>` the finding refers to.
    pub location: Option<String>,
}

impl Diagnostic {
    /// A schema line that does not have the `name Type` shape.
    pub fn unparsable_field_line(line: &str, model: &str) -> Self {
        Self::new(
            Severity::Warning,
            format!("unparsable field line '{}' in model {}", line, model),
        )
    }

    /// A `model` header whose block never closes on its own.
    pub fn unclosed_block(model: &str) -> Self {
        Self::new(
            Severity::Warning,
            format!("model {} has no closing brace of its own; block skipped", model),
        )
    }

    /// A record declared more than once; the last block's fields are kept.
    pub fn redeclared_model(model: &str) -> Self {
        Self::new(
            Severity::Info,
            format!("model {} is declared again; its fields replace the earlier block", model),
        )
    }

    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    fn new(severity: Severity, message: String) -> Self {
        Self {
            severity,
            message,
            location: None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " (at {})", loc)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unparsable_field_line() {
        let diag = Diagnostic::unparsable_field_line("@map(\"x\")", "User");
        assert_eq!(diag.severity, Severity::Warning);
        assert_eq!(
            diag.to_string(),
            "warning: unparsable field line '@map(\"x\")' in model User"
        );
    }

    #[test]
    fn test_unclosed_block_with_location() {
        let diag = Diagnostic::unclosed_block("Post").at("schema.prisma:4");
        assert_eq!(
            diag.to_string(),
            "warning: model Post has no closing brace of its own; block skipped (at schema.prisma:4)"
        );
    }

    #[test]
    fn test_redeclared_model_is_info() {
        let diag = Diagnostic::redeclared_model("User");
        assert_eq!(diag.severity, Severity::Info);
        assert!(diag.to_string().starts_with("info: model User is declared again"));
    }
}
