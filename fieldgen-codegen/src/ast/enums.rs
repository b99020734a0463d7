//! TypeScript string enum builder.

use crate::CodeBuilder;

/// Builder for `export enum` declarations with string members.
#[derive(Debug, Clone)]
pub struct TsEnum {
    name: String,
    members: Vec<(String, String)>,
}

impl TsEnum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Add a member whose value is the string literal `value`.
    pub fn member(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.members.push((key.into(), value.into()));
        self
    }

    /// Render the enum to a CodeBuilder.
    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        builder.block_with_close(&format!("export enum {} {{", self.name), "}", |b| {
            b.each(&self.members, |b, (key, value)| {
                b.line(&format!("{} = \"{}\",", key, value))
            })
        })
    }

    /// Build the enum as a string.
    pub fn build(&self) -> String {
        self.render(CodeBuilder::new()).build()
    }
}
