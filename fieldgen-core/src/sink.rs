//! Output sinks for generated files.

use std::path::Path;

use eyre::{Context, Result};

/// Destination for generated file contents.
///
/// The generator hands every artifact to a sink; the sink decides how the
/// bytes reach their path.
pub trait Sink {
    /// Write `content` to `path`, replacing anything already there.
    fn write(&self, path: &Path, content: &str) -> Result<()>;
}

/// Sink that writes to the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSink;

impl Sink for FsSink {
    fn write(&self, path: &Path, content: &str) -> Result<()> {
        write_file(path, content)
            .wrap_err_with(|| format!("failed to write '{}'", path.display()))
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}
