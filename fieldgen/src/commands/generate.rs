use std::path::PathBuf;

use clap::Args;
use eyre::{Result, bail};
use fieldgen_codegen::Generator;
use fieldgen_core::FsSink;
use fieldgen_schema::SchemaFile;

use super::UnwrapOrExit;
use crate::{
    config::{ArtifactOverrides, ConfigFile, DEFAULT_CONFIG, Overrides, Settings},
    reports::{GenerateReport, GenerationResult, PreviewFile, Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the Prisma schema file
    #[arg(short, long)]
    pub schema: Option<PathBuf>,

    /// Output directory (defaults to ./generated)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit frozen objects instead of enums for field enums and the tables registry
    #[arg(short = 'c', long = "const")]
    pub use_const: bool,

    /// Honor @map and @@map attributes
    #[arg(short = 'm', long = "mapping")]
    pub use_mapping: bool,

    /// File naming style: camelCase or kebab-case
    #[arg(long)]
    pub file_naming: Option<String>,

    /// Prefix for field enum identifiers
    #[arg(long)]
    pub prefix_field_enum: Option<String>,

    /// Suffix for field enum identifiers (defaults to Fields)
    #[arg(long)]
    pub suffix_field_enum: Option<String>,

    /// Directory for field enums and the tables registry
    #[arg(long)]
    pub field_enum_dir: Option<PathBuf>,

    /// Prefix for DTO identifiers
    #[arg(long)]
    pub prefix_dto: Option<String>,

    /// Suffix for DTO identifiers (defaults to Dto)
    #[arg(long)]
    pub suffix_dto: Option<String>,

    /// Directory for DTOs
    #[arg(long)]
    pub dto_dir: Option<PathBuf>,

    /// Render DTOs as classes
    #[arg(long)]
    pub dto_as_class: bool,

    /// Prefix for entity identifiers
    #[arg(long)]
    pub prefix_entity: Option<String>,

    /// Suffix for entity identifiers (defaults to Entity)
    #[arg(long)]
    pub suffix_entity: Option<String>,

    /// Directory for entities
    #[arg(long)]
    pub entity_dir: Option<PathBuf>,

    /// Render entities as classes
    #[arg(long)]
    pub entity_as_class: bool,

    /// Path to the config file (defaults to ./fieldgen.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let config_path = self
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));
        let file = ConfigFile::load(&config_path, self.config.is_some())?;
        if file.is_some() {
            tracing::info!(path = %config_path.display(), "loaded config file");
        }
        let settings = Settings::resolve(self.overrides(), file, &config_path)?;

        let schema = SchemaFile::open(&settings.schema, settings.render.use_mapping).unwrap_or_exit();
        let parsed = schema.result();
        tracing::info!(
            records = parsed.table_names().len(),
            fields = parsed.field_count(),
            "parsed schema"
        );

        let generator = Generator::new(parsed, &settings.render);
        let (result, success) = if self.dry_run {
            let preview = GenerationResult::Preview {
                files: generator
                    .preview()
                    .into_iter()
                    .map(|artifact| PreviewFile {
                        path: artifact.path.display().to_string(),
                        content: artifact.content,
                    })
                    .collect(),
            };
            (preview, true)
        } else {
            let outcome = generator.generate(&FsSink);
            let success = outcome.is_success();
            let written = GenerationResult::Written {
                written: outcome.written,
                failures: outcome.failures,
            };
            (written, success)
        };

        let report = GenerateReport {
            schema: schema.path().to_path_buf(),
            warnings: parsed.diagnostics().iter().map(ToString::to_string).collect(),
            record_count: parsed.table_names().len(),
            result,
        };
        report.render(&mut TerminalOutput::new());

        if !success {
            bail!("some generated files could not be written");
        }

        Ok(())
    }

    fn overrides(&self) -> Overrides {
        Overrides {
            schema: self.schema.clone(),
            output: self.output.clone(),
            use_const: self.use_const,
            use_mapping: self.use_mapping,
            file_naming: self.file_naming.clone(),
            field_enum: ArtifactOverrides {
                prefix: self.prefix_field_enum.clone(),
                suffix: self.suffix_field_enum.clone(),
                dir: self.field_enum_dir.clone(),
                as_class: false,
            },
            dto: ArtifactOverrides {
                prefix: self.prefix_dto.clone(),
                suffix: self.suffix_dto.clone(),
                dir: self.dto_dir.clone(),
                as_class: self.dto_as_class,
            },
            entity: ArtifactOverrides {
                prefix: self.prefix_entity.clone(),
                suffix: self.suffix_entity.clone(),
                dir: self.entity_dir.clone(),
                as_class: self.entity_as_class,
            },
        }
    }
}
