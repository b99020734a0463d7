//! Settings resolution: command-line flags over `fieldgen.toml` over defaults.

use std::path::{Path, PathBuf};

use fieldgen_codegen::{ArtifactKind, ArtifactOptions, RenderConfig};
use fieldgen_core::{InvalidNamingStyle, NamingStyle};
use serde::Deserialize;
use thiserror::Error;

/// Config file looked up when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "fieldgen.toml";

/// Configuration the run cannot start with.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("schema file path is required: pass --schema or set `schema` in {}", config.display())]
    MissingSchema { config: PathBuf },

    #[error(transparent)]
    InvalidNamingStyle(#[from] InvalidNamingStyle),

    #[error("failed to read '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse '{}'", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Contents of `fieldgen.toml`. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub schema: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub use_const: Option<bool>,
    pub use_mapping: Option<bool>,
    pub file_naming: Option<String>,
    pub field_enum: ArtifactSection,
    pub dto: ArtifactSection,
    pub entity: ArtifactSection,
}

/// `[field_enum]`, `[dto]` or `[entity]` table.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArtifactSection {
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub dir: Option<PathBuf>,
    pub as_class: Option<bool>,
}

impl ConfigFile {
    /// Parse config file contents.
    pub fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load a config file. A missing file is only an error when it was asked for explicitly.
    pub fn load(path: &Path, explicit: bool) -> Result<Option<Self>, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content, path).map(Some),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && !explicit => Ok(None),
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

/// Values given on the command line.
#[derive(Debug, Default)]
pub struct Overrides {
    pub schema: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub use_const: bool,
    pub use_mapping: bool,
    pub file_naming: Option<String>,
    pub field_enum: ArtifactOverrides,
    pub dto: ArtifactOverrides,
    pub entity: ArtifactOverrides,
}

/// Per-kind values given on the command line.
#[derive(Debug, Default)]
pub struct ArtifactOverrides {
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub dir: Option<PathBuf>,
    pub as_class: bool,
}

/// Fully resolved settings for a run.
#[derive(Debug)]
pub struct Settings {
    pub schema: PathBuf,
    pub render: RenderConfig,
}

impl Settings {
    /// Merge command-line values, then the config file, then defaults.
    pub fn resolve(
        overrides: Overrides,
        file: Option<ConfigFile>,
        config_path: &Path,
    ) -> Result<Self, ConfigError> {
        let file = file.unwrap_or_default();

        let schema = overrides
            .schema
            .or(file.schema)
            .ok_or_else(|| ConfigError::MissingSchema {
                config: config_path.to_path_buf(),
            })?;

        let naming = match overrides.file_naming.or(file.file_naming) {
            Some(style) => style.parse::<NamingStyle>()?,
            None => NamingStyle::default(),
        };

        let defaults = RenderConfig::default();
        let render = RenderConfig {
            output_dir: overrides
                .output
                .or(file.output)
                .unwrap_or(defaults.output_dir),
            naming,
            use_const: overrides.use_const || file.use_const.unwrap_or(defaults.use_const),
            use_mapping: overrides.use_mapping || file.use_mapping.unwrap_or(defaults.use_mapping),
            field_enum: merge(ArtifactKind::FieldEnum, overrides.field_enum, file.field_enum),
            dto: merge(ArtifactKind::Dto, overrides.dto, file.dto),
            entity: merge(ArtifactKind::Entity, overrides.entity, file.entity),
        };

        Ok(Self { schema, render })
    }
}

fn merge(kind: ArtifactKind, cli: ArtifactOverrides, file: ArtifactSection) -> ArtifactOptions {
    let defaults = ArtifactOptions::for_kind(kind);
    ArtifactOptions {
        prefix: cli.prefix.or(file.prefix).unwrap_or(defaults.prefix),
        suffix: cli.suffix.or(file.suffix).unwrap_or(defaults.suffix),
        dir: cli.dir.or(file.dir),
        as_class: cli.as_class || file.as_class.unwrap_or(defaults.as_class),
    }
}
