//! Generate command report data structures.

use std::path::PathBuf;

use fieldgen_codegen::SinkFailure;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Schema the artifacts were generated from.
    pub schema: PathBuf,
    /// Parser diagnostics, already formatted.
    pub warnings: Vec<String>,
    /// Number of records found.
    pub record_count: usize,
    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Artifacts were handed to the file system.
    Written {
        written: Vec<PathBuf>,
        failures: Vec<SinkFailure>,
    },
    /// Dry-run preview.
    Preview { files: Vec<PreviewFile> },
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written { written, failures } => {
                out.key_value("Schema", &self.schema.display().to_string());
                out.key_value("Records", &self.record_count.to_string());
                out.newline();

                out.section(&format!("Generated ({})", written.len()));
                for path in written {
                    out.added_item(&path.display().to_string());
                }

                for failure in failures {
                    out.error(&failure.to_string());
                }
            }
            GenerationResult::Preview { files } => {
                for file in files {
                    out.divider(&file.path);
                    out.preformatted(&file.content);
                }

                out.divider("Summary");
                out.preformatted(&format!("{} files would be generated", files.len()));
            }
        }
    }
}
