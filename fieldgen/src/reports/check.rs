//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from parsing a schema without generating anything.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the schema file.
    pub schema: PathBuf,
    /// Parser diagnostics, already formatted.
    pub warnings: Vec<String>,
    /// Records in encounter order.
    pub records: Vec<RecordSummary>,
}

/// One record and its field count.
#[derive(Debug)]
pub struct RecordSummary {
    pub name: String,
    pub field_count: usize,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }
        if !self.warnings.is_empty() {
            out.newline();
        }

        out.preformatted(&format!("✓ {} is valid", self.schema.display()));
        out.newline();

        out.section(&format!("Records ({})", self.records.len()));
        for record in &self.records {
            out.list_item(&format!(
                "{} ({} field{})",
                record.name,
                record.field_count,
                if record.field_count == 1 { "" } else { "s" }
            ));
        }
    }
}
