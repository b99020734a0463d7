//! TypeScript class builder.

use crate::CodeBuilder;

/// Builder for `export class` declarations with definitely-assigned fields.
#[derive(Debug, Clone)]
pub struct Class {
    name: String,
    fields: Vec<(String, String)>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Add a required field, emitted as `name!: ty;`.
    pub fn field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.fields.push((name.into(), ty.into()));
        self
    }

    /// Render the class to a CodeBuilder.
    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        builder.block_with_close(&format!("export class {} {{", self.name), "}", |b| {
            b.each(&self.fields, |b, (name, ty)| {
                b.line(&format!("{}!: {};", name, ty))
            })
        })
    }

    /// Build the class as a string.
    pub fn build(&self) -> String {
        self.render(CodeBuilder::new()).build()
    }
}
