//! In-memory schema model.

use indexmap::IndexMap;
use serde::Serialize;

use crate::Diagnostic;

/// A single field of a record, as declared in the schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDefinition {
    /// Field name, or its `@map` alias when mapping is enabled.
    pub name: String,
    /// Literal type token including `?` / `[]` markers (e.g., "String?", "Float[]").
    #[serde(rename = "type")]
    pub raw_type: String,
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, raw_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_type: raw_type.into(),
        }
    }
}

/// One record block: its name and its fields in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordDefinition {
    pub name: String,
    pub fields: Vec<FieldDefinition>,
}

impl RecordDefinition {
    pub fn new(name: impl Into<String>, fields: Vec<FieldDefinition>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }
}

/// The outcome of parsing one schema document.
///
/// `table_names` keeps every block in encounter order, repeats included.
/// `fields_by_table` holds one entry per distinct name; a repeated block
/// replaces the fields of the earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    table_names: Vec<String>,
    fields_by_table: IndexMap<String, Vec<FieldDefinition>>,
    diagnostics: Vec<Diagnostic>,
}

impl ParseResult {
    /// Create an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. The name and its fields are always inserted together.
    pub fn push(&mut self, record: RecordDefinition) {
        self.table_names.push(record.name.clone());
        self.fields_by_table.insert(record.name, record.fields);
    }

    /// Attach a diagnostic.
    pub fn push_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Record names in encounter order.
    pub fn table_names(&self) -> &[String] {
        &self.table_names
    }

    /// Fields of the named record.
    pub fn fields(&self, table: &str) -> Option<&[FieldDefinition]> {
        self.fields_by_table.get(table).map(Vec::as_slice)
    }

    /// Fields keyed by record name.
    pub fn fields_by_table(&self) -> &IndexMap<String, Vec<FieldDefinition>> {
        &self.fields_by_table
    }

    /// Records in `table_names` order, paired with their fields.
    pub fn records(&self) -> impl Iterator<Item = (&str, &[FieldDefinition])> {
        self.table_names
            .iter()
            .map(|name| (name.as_str(), self.fields(name).unwrap_or_default()))
    }

    /// Diagnostics collected while parsing.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Whether no record was found.
    pub fn is_empty(&self) -> bool {
        self.table_names.is_empty() || self.fields_by_table.is_empty()
    }

    /// Total number of fields across distinct records.
    pub fn field_count(&self) -> usize {
        self.fields_by_table.values().map(Vec::len).sum()
    }
}
