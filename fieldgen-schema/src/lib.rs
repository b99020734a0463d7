//! Schema parsing for the fieldgen code generator.
//!
//! Turns Prisma-style schema text into an ordered model of record blocks and
//! their fields. The parser is tolerant line by line and strict about the
//! document as a whole:
//!
//! - lines that do not look like `name Type ...`, and `model` headers whose
//!   block never closes, are skipped with a [`Diagnostic`] and parsing carries on
//! - a document without a single `model Name { ... }` block is rejected with
//!   [`Error::MalformedSchema`]
//!
//! ```
//! let result = fieldgen_schema::parse("model User {\n  id Int @id\n  name String\n}", false).unwrap();
//!
//! assert_eq!(result.table_names(), ["User"]);
//! assert_eq!(result.fields("User").unwrap()[1].raw_type, "String");
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod diagnostic;
mod error;
mod file;
mod model;
mod parser;
mod scanner;

pub use diagnostic::{Diagnostic, Severity};
pub use error::{Error, Result};
pub use file::SchemaFile;
pub use model::{FieldDefinition, ParseResult, RecordDefinition};
pub use parser::{DEFAULT_FILENAME, parse, parse_with_filename};
pub use scanner::{RawBlock, scan_blocks};
