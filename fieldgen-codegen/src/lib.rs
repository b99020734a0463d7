//! TypeScript generator for fieldgen.
//!
//! Renders a parsed schema into four kinds of TypeScript modules:
//!
//! - `field-enum/<Name>Fields.ts` - the field names of one record
//! - `dto/<Name>Dto.ts` - a DTO shape with one slot per field
//! - `entity/<Name>Entity.ts` - the same shape under the entity naming
//! - `field-enum/Tables.ts` - a registry of every record name
//!
//! Every module comes in two representations: a frozen `as const` object or
//! a nominal `enum` / `class`. See [`Representation`].
//!
//! ```
//! use fieldgen_codegen::{RenderConfig, render};
//!
//! let result = fieldgen_schema::parse("model User {\n  id Int\n}", false).unwrap();
//! let artifacts = render(&result, &RenderConfig::default());
//!
//! assert_eq!(artifacts.len(), 4);
//! assert_eq!(artifacts[0].content, "export enum UserFields {\n  id = \"id\",\n}");
//! ```

mod builder;
mod config;
mod generator;
mod naming;
mod render;

pub mod ast;
pub mod templates;

pub use builder::CodeBuilder;
pub use config::{ArtifactKind, ArtifactOptions, RenderConfig, Representation};
pub use generator::{GenerateResult, Generator, SinkFailure};
pub use naming::{RecordNames, TableNames};
pub use render::{Artifact, render, render_record, render_tables};
