use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for schema operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("pass the path to a Prisma schema with --schema"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed schema: {reason}")]
    #[diagnostic(
        code(fieldgen::malformed_schema),
        help("declare at least one block of the form `model Name {{ field Type }}`")
    )]
    MalformedSchema {
        #[source_code]
        src: NamedSource<String>,
        #[label("no closed `{{ ... }}` body follows this header")]
        span: Option<SourceSpan>,
        reason: String,
    },
}

impl Error {
    /// Create a malformed schema error with source context
    pub fn malformed(
        reason: impl Into<String>,
        src: &str,
        filename: &str,
        span: Option<SourceSpan>,
    ) -> Box<Self> {
        Box::new(Error::MalformedSchema {
            src: NamedSource::new(filename, src.to_string()),
            span,
            reason: reason.into(),
        })
    }
}
