//! TypeScript `as const` object builder.

use crate::CodeBuilder;

/// Builder for `export const name = { ... } as const;` declarations.
#[derive(Debug, Clone)]
pub struct ConstObject {
    name: String,
    entries: Vec<(String, String)>,
}

impl ConstObject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Add an entry with a raw expression value.
    pub fn entry(mut self, key: impl Into<String>, expr: impl Into<String>) -> Self {
        self.entries.push((key.into(), expr.into()));
        self
    }

    /// Add an entry whose value is the string literal `value`.
    pub fn string_entry(self, key: impl Into<String>, value: &str) -> Self {
        self.entry(key, format!("\"{}\"", value))
    }

    /// Add an entry typed as `ty` with no runtime value.
    pub fn typed_slot(self, key: impl Into<String>, ty: &str) -> Self {
        self.entry(key, format!("undefined as {}", ty))
    }

    /// Render the declaration to a CodeBuilder.
    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        builder.block_with_close(
            &format!("export const {} = {{", self.name),
            "} as const;",
            |b| {
                b.each(&self.entries, |b, (key, expr)| {
                    b.line(&format!("{}: {},", key, expr))
                })
            },
        )
    }

    /// Build the declaration as a string.
    pub fn build(&self) -> String {
        self.render(CodeBuilder::new()).build()
    }
}
