//! Core utilities and types for the fieldgen code generator.
//!
//! This crate provides the string casing helpers, the file naming policy,
//! and the write sink shared by the schema parser, the renderer and the CLI.

mod naming;
mod sink;
mod utils;

// File naming policy
pub use naming::{InvalidNamingStyle, NamingStyle};
// Output
pub use sink::{FsSink, Sink};
// String utilities
pub use utils::{lower_first, to_kebab_case, upper_first};
