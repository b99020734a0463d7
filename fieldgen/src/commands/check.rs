use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use fieldgen_schema::SchemaFile;

use super::UnwrapOrExit;
use crate::{
    config::{ConfigFile, DEFAULT_CONFIG, Overrides, Settings},
    reports::{CheckReport, RecordSummary, Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the Prisma schema file
    #[arg(short, long)]
    pub schema: Option<PathBuf>,

    /// Honor @map and @@map attributes
    #[arg(short = 'm', long = "mapping")]
    pub use_mapping: bool,

    /// Print the parse result as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to the config file (defaults to ./fieldgen.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let config_path = self
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));
        let file = ConfigFile::load(&config_path, self.config.is_some())?;
        let overrides = Overrides {
            schema: self.schema.clone(),
            use_mapping: self.use_mapping,
            ..Default::default()
        };
        let settings = Settings::resolve(overrides, file, &config_path)?;

        let schema = SchemaFile::open(&settings.schema, settings.render.use_mapping).unwrap_or_exit();
        let parsed = schema.result();

        if self.json {
            println!("{}", serde_json::to_string_pretty(parsed)?);
            return Ok(());
        }

        let report = CheckReport {
            schema: schema.path().to_path_buf(),
            warnings: parsed.diagnostics().iter().map(ToString::to_string).collect(),
            records: parsed
                .records()
                .map(|(name, fields)| RecordSummary {
                    name: name.to_string(),
                    field_count: fields.len(),
                })
                .collect(),
        };
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
