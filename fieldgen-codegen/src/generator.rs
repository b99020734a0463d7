//! Artifact generation through a write sink.

use std::path::PathBuf;

use fieldgen_core::Sink;
use fieldgen_schema::ParseResult;

use crate::{Artifact, RenderConfig, render};

/// A write the sink could not complete. `message` holds the root cause only.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to write '{}': {message}", path.display())]
pub struct SinkFailure {
    pub path: PathBuf,
    pub message: String,
}

/// Result of code generation.
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files the sink accepted, in emission order.
    pub written: Vec<PathBuf>,
    /// Files the sink rejected.
    pub failures: Vec<SinkFailure>,
}

impl GenerateResult {
    /// Whether every artifact was written.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// TypeScript generator for one parsed schema and one configuration.
pub struct Generator<'a> {
    result: &'a ParseResult,
    config: &'a RenderConfig,
}

impl<'a> Generator<'a> {
    pub fn new(result: &'a ParseResult, config: &'a RenderConfig) -> Self {
        Self { result, config }
    }

    /// Render all artifacts without writing them.
    pub fn preview(&self) -> Vec<Artifact> {
        render(self.result, self.config)
    }

    /// Render all artifacts and hand each one to `sink`.
    ///
    /// A failed write does not stop the remaining artifacts.
    pub fn generate(&self, sink: &dyn Sink) -> GenerateResult {
        let mut outcome = GenerateResult::default();

        for artifact in self.preview() {
            match sink.write(&artifact.path, &artifact.content) {
                Ok(()) => {
                    tracing::debug!(path = %artifact.path.display(), kind = %artifact.kind, "wrote artifact");
                    outcome.written.push(artifact.path);
                }
                Err(err) => {
                    tracing::error!(path = %artifact.path.display(), error = %err, "failed to write artifact");
                    outcome.failures.push(SinkFailure {
                        path: artifact.path,
                        message: err.root_cause().to_string(),
                    });
                }
            }
        }

        outcome
    }
}
