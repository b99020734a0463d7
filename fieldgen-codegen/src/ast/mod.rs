//! TypeScript declaration builders.
//!
//! Each builder renders one exported declaration through a [`CodeBuilder`](crate::CodeBuilder).

mod class;
mod consts;
mod enums;
mod types;

pub use class::Class;
pub use consts::ConstObject;
pub use enums::TsEnum;
pub use types::KeyofAlias;
