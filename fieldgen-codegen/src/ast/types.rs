//! TypeScript type alias builders.

use crate::CodeBuilder;

/// `export type Name = keyof typeof value;`
#[derive(Debug, Clone)]
pub struct KeyofAlias {
    name: String,
    value: String,
}

impl KeyofAlias {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Render the alias to a CodeBuilder.
    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        builder.line(&format!(
            "export type {} = keyof typeof {};",
            self.name, self.value
        ))
    }
}
