use std::path::{Path, PathBuf};

use crate::{Error, ParseResult, Result, parse_with_filename};

/// A schema file on disk together with its parsed model.
#[derive(Debug)]
pub struct SchemaFile {
    path: PathBuf,
    result: ParseResult,
}

impl SchemaFile {
    /// Read and parse a schema file.
    pub fn open(path: impl AsRef<Path>, use_mapping: bool) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let result = parse_with_filename(&content, &filename, use_mapping)?;

        Ok(Self { path, result })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the parsed model.
    pub fn result(&self) -> &ParseResult {
        &self.result
    }
}
