//! Line-oriented code builder.

/// One indentation level in generated TypeScript.
const INDENT: &str = "  ";

/// Fluent API for building indented TypeScript.
///
/// Lines are collected in order and joined with `\n` on [`build`](Self::build),
/// so the output carries no trailing newline.
///
/// # Example
///
/// ```
/// use fieldgen_codegen::CodeBuilder;
///
/// let code = CodeBuilder::new()
///     .block_with_close("export enum Role {", "}", |b| b.line("ADMIN = \"ADMIN\","))
///     .build();
///
/// assert_eq!(code, "export enum Role {\n  ADMIN = \"ADMIN\",\n}");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent_level: usize,
    lines: Vec<String>,
}

impl CodeBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        let mut line = INDENT.repeat(self.indent_level);
        line.push_str(s);
        self.lines.push(line);
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.lines.push(String::new());
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a block with a closing line.
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.lines.join("\n")
    }
}
