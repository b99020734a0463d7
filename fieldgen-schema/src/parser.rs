//! Schema text to [`ParseResult`].

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    Diagnostic, Error, FieldDefinition, ParseResult, RecordDefinition, Result,
    scanner::{self, RawBlock},
};

/// Filename used in error reports when parsing from a string.
pub const DEFAULT_FILENAME: &str = "schema.prisma";

/// `name Type` at the start of a trimmed line; `?` and `[]` stay on the type.
static FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\w+)\s+(\w+(?:\[\])?\??)").expect("field pattern is valid")
});

/// Field-level `@map("alias")`, not the block-level `@@map`.
static FIELD_MAP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:^|[^@])@map\("([^"]+)"\)"#).expect("field map pattern is valid")
});

/// Block-level `@@map("alias")` on its own line.
static TABLE_MAP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^@@map\("([^"]+)"\)"#).expect("table map pattern is valid")
});

/// Parse schema text, reporting errors against [`DEFAULT_FILENAME`].
pub fn parse(text: &str, use_mapping: bool) -> Result<ParseResult> {
    parse_with_filename(text, DEFAULT_FILENAME, use_mapping)
}

/// Parse schema text with a custom filename for error reporting.
///
/// With `use_mapping`, `@map("...")` renames fields and `@@map("...")`
/// renames the enclosing record.
pub fn parse_with_filename(text: &str, filename: &str, use_mapping: bool) -> Result<ParseResult> {
    let mut result = ParseResult::new();

    for block in scanner::scan_blocks(text) {
        let record = parse_block(&block, filename, use_mapping, &mut result);
        tracing::debug!(
            model = block.name,
            name = %record.name,
            fields = record.fields.len(),
            "parsed record block"
        );
        if result.fields(&record.name).is_some() {
            let location = format!("{}:{}", filename, block.body_line);
            tracing::info!(name = %record.name, %location, "model declared again");
            result.push_diagnostic(Diagnostic::redeclared_model(&record.name).at(location));
        }
        result.push(record);
    }

    for header in scanner::unclosed_headers(text) {
        let location = format!("{}:{}", filename, header.line);
        tracing::warn!(model = header.name, %location, "skipping unclosed model block");
        result.push_diagnostic(Diagnostic::unclosed_block(header.name).at(location));
    }

    if result.is_empty() {
        return Err(Error::malformed(
            "no `model` blocks found",
            text,
            filename,
            scanner::first_header(text),
        ));
    }

    Ok(result)
}

fn parse_block(
    block: &RawBlock<'_>,
    filename: &str,
    use_mapping: bool,
    result: &mut ParseResult,
) -> RecordDefinition {
    let mut name = block.name.to_string();
    let mut renamed = false;
    let mut fields = Vec::new();

    for (line_no, line) in block.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with("//") {
            continue;
        }

        if line.starts_with("@@") {
            if use_mapping && !renamed {
                if let Some(alias) = TABLE_MAP.captures(line).and_then(|caps| caps.get(1)) {
                    name = alias.as_str().to_string();
                    renamed = true;
                }
            }
            continue;
        }

        match parse_field(line, use_mapping) {
            Some(field) => fields.push(field),
            None => {
                let location = format!("{}:{}", filename, line_no);
                tracing::warn!(model = block.name, %location, line, "skipping unparsable field line");
                result.push_diagnostic(
                    Diagnostic::unparsable_field_line(line, block.name).at(location),
                );
            }
        }
    }

    RecordDefinition::new(name, fields)
}

fn parse_field(line: &str, use_mapping: bool) -> Option<FieldDefinition> {
    let caps = FIELD.captures(line)?;
    let declared = caps.get(1)?.as_str();
    let raw_type = caps.get(2)?.as_str();

    let alias = if use_mapping {
        FIELD_MAP
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    } else {
        None
    };

    Some(FieldDefinition::new(alias.unwrap_or(declared), raw_type))
}
