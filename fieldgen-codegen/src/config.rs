//! Render configuration.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use fieldgen_core::NamingStyle;

/// The kinds of module the generator emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Field names of one record.
    FieldEnum,
    /// DTO shape of one record.
    Dto,
    /// Entity shape of one record.
    Entity,
    /// Registry of every record name.
    Tables,
}

impl ArtifactKind {
    /// Per-record kinds, in emission order.
    pub const PER_RECORD: [ArtifactKind; 3] =
        [ArtifactKind::FieldEnum, ArtifactKind::Dto, ArtifactKind::Entity];

    /// Directory under the output root used when no override is configured.
    pub fn default_dir(&self) -> &'static str {
        match self {
            ArtifactKind::FieldEnum | ArtifactKind::Tables => "field-enum",
            ArtifactKind::Dto => "dto",
            ArtifactKind::Entity => "entity",
        }
    }

    /// Identifier suffix used when none is configured.
    pub fn default_suffix(&self) -> &'static str {
        match self {
            ArtifactKind::FieldEnum => "Fields",
            ArtifactKind::Dto => "Dto",
            ArtifactKind::Entity => "Entity",
            ArtifactKind::Tables => "Tables",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactKind::FieldEnum => write!(f, "field enum"),
            ArtifactKind::Dto => write!(f, "dto"),
            ArtifactKind::Entity => write!(f, "entity"),
            ArtifactKind::Tables => write!(f, "tables"),
        }
    }
}

/// Output representation of a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Representation {
    /// `export const x = { ... } as const;`
    Frozen,
    /// `export enum` / `export class`.
    Nominal,
}

/// Naming and shape options for one artifact kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactOptions {
    pub prefix: String,
    pub suffix: String,
    /// Overrides `<output_dir>/<default dir>` when set.
    pub dir: Option<PathBuf>,
    /// Render DTO / entity shapes as classes. Ignored for field enums.
    pub as_class: bool,
}

impl ArtifactOptions {
    /// Default options for `kind`: no prefix, the kind's default suffix.
    pub fn for_kind(kind: ArtifactKind) -> Self {
        Self {
            prefix: String::new(),
            suffix: kind.default_suffix().to_string(),
            dir: None,
            as_class: false,
        }
    }
}

/// Everything the renderer needs to know besides the schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Root for the default `field-enum/`, `dto/` and `entity/` directories.
    pub output_dir: PathBuf,
    /// Style applied to file names.
    pub naming: NamingStyle,
    /// Frozen objects instead of enums for field enums and the registry.
    pub use_const: bool,
    /// Honor `@map` / `@@map` while parsing.
    pub use_mapping: bool,
    pub field_enum: ArtifactOptions,
    pub dto: ArtifactOptions,
    pub entity: ArtifactOptions,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("./generated"),
            naming: NamingStyle::default(),
            use_const: false,
            use_mapping: false,
            field_enum: ArtifactOptions::for_kind(ArtifactKind::FieldEnum),
            dto: ArtifactOptions::for_kind(ArtifactKind::Dto),
            entity: ArtifactOptions::for_kind(ArtifactKind::Entity),
        }
    }
}

impl RenderConfig {
    /// Options governing `kind`. The registry shares the field enum options.
    pub fn options(&self, kind: ArtifactKind) -> &ArtifactOptions {
        match kind {
            ArtifactKind::FieldEnum | ArtifactKind::Tables => &self.field_enum,
            ArtifactKind::Dto => &self.dto,
            ArtifactKind::Entity => &self.entity,
        }
    }

    /// Directory that receives artifacts of `kind`.
    pub fn dir_for(&self, kind: ArtifactKind) -> PathBuf {
        match &self.options(kind).dir {
            Some(dir) => dir.clone(),
            None => self.output_dir.join(kind.default_dir()),
        }
    }

    /// Representation chosen for `kind`.
    pub fn representation(&self, kind: ArtifactKind) -> Representation {
        let nominal = match kind {
            ArtifactKind::FieldEnum | ArtifactKind::Tables => !self.use_const,
            ArtifactKind::Dto | ArtifactKind::Entity => self.options(kind).as_class,
        };
        if nominal {
            Representation::Nominal
        } else {
            Representation::Frozen
        }
    }

    /// Set the output root.
    pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.output_dir = dir.as_ref().to_path_buf();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dirs() {
        let config = RenderConfig::default().with_output_dir("out");
        assert_eq!(config.dir_for(ArtifactKind::FieldEnum), Path::new("out/field-enum"));
        assert_eq!(config.dir_for(ArtifactKind::Tables), Path::new("out/field-enum"));
        assert_eq!(config.dir_for(ArtifactKind::Dto), Path::new("out/dto"));
        assert_eq!(config.dir_for(ArtifactKind::Entity), Path::new("out/entity"));
    }

    #[test]
    fn test_dir_override() {
        let mut config = RenderConfig::default().with_output_dir("out");
        config.dto.dir = Some(PathBuf::from("src/dto"));
        assert_eq!(config.dir_for(ArtifactKind::Dto), Path::new("src/dto"));
        assert_eq!(config.dir_for(ArtifactKind::Entity), Path::new("out/entity"));
    }

    #[test]
    fn test_default_suffixes() {
        let config = RenderConfig::default();
        assert_eq!(config.field_enum.suffix, "Fields");
        assert_eq!(config.dto.suffix, "Dto");
        assert_eq!(config.entity.suffix, "Entity");
        assert!(config.options(ArtifactKind::Tables).prefix.is_empty());
    }

    #[test]
    fn test_representation_selection() {
        let mut config = RenderConfig::default();
        assert_eq!(config.representation(ArtifactKind::FieldEnum), Representation::Nominal);
        assert_eq!(config.representation(ArtifactKind::Dto), Representation::Frozen);

        config.use_const = true;
        config.entity.as_class = true;
        assert_eq!(config.representation(ArtifactKind::FieldEnum), Representation::Frozen);
        assert_eq!(config.representation(ArtifactKind::Tables), Representation::Frozen);
        assert_eq!(config.representation(ArtifactKind::Dto), Representation::Frozen);
        assert_eq!(config.representation(ArtifactKind::Entity), Representation::Nominal);
    }
}
