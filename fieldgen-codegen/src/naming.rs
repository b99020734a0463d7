//! Identifier and file name derivation.

use fieldgen_core::{NamingStyle, lower_first, upper_first};

use crate::{ArtifactKind, RenderConfig};

/// Extension of every generated module.
const EXTENSION: &str = "ts";

/// Names derived for one record and one artifact kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordNames {
    /// `prefix + Record + suffix` with the record's first letter upper-cased.
    pub identifier: String,
    /// Binding used by the frozen representation (first letter lower-cased).
    pub binding: String,
    /// `prefix + record + suffix` run through the naming style, plus extension.
    pub file_name: String,
}

impl RecordNames {
    pub fn new(record: &str, kind: ArtifactKind, config: &RenderConfig) -> Self {
        let opts = config.options(kind);
        let identifier = format!("{}{}{}", opts.prefix, upper_first(record), opts.suffix);
        let stem = format!("{}{}{}", opts.prefix, record, opts.suffix);

        Self {
            binding: lower_first(&identifier),
            file_name: file_name(&stem, config.naming),
            identifier,
        }
    }
}

/// Names of the aggregate registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableNames {
    /// `prefix + "Tables"`, used by the enum and the key type alias.
    pub identifier: String,
    /// `lowercase(prefix) + "tables"`, used by the frozen object.
    pub binding: String,
    pub file_name: String,
}

impl TableNames {
    pub fn new(config: &RenderConfig) -> Self {
        let prefix = &config.options(ArtifactKind::Tables).prefix;
        let identifier = format!("{}Tables", prefix);

        Self {
            binding: format!("{}tables", prefix.to_lowercase()),
            file_name: file_name(&identifier, config.naming),
            identifier,
        }
    }
}

fn file_name(stem: &str, style: NamingStyle) -> String {
    format!("{}.{}", style.apply(stem), EXTENSION)
}
