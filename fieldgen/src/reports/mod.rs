//! Report data structures for commands.
//!
//! Commands collect what happened into a report, then render it to an Output target.

mod check;
mod generate;
mod output;

pub use check::{CheckReport, RecordSummary};
pub use generate::{GenerateReport, GenerationResult, PreviewFile};
pub use output::{Report, TerminalOutput};
