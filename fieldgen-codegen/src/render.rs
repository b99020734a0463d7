//! Parse result to artifacts.

use std::path::PathBuf;

use fieldgen_schema::{FieldDefinition, ParseResult};

use crate::{ArtifactKind, RecordNames, RenderConfig, TableNames, templates};

/// One generated module: where it goes and what it contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub content: String,
}

/// Render every artifact for `result`.
///
/// Records are visited in `table_names` order; each yields its field enum,
/// DTO and entity, and the registry comes last. The output depends only on
/// the arguments.
pub fn render(result: &ParseResult, config: &RenderConfig) -> Vec<Artifact> {
    let mut artifacts: Vec<Artifact> = result
        .records()
        .flat_map(|(name, fields)| render_record(name, fields, config))
        .collect();
    artifacts.push(render_tables(result.table_names(), config));
    artifacts
}

/// Render the field enum, DTO and entity of one record.
pub fn render_record(
    name: &str,
    fields: &[FieldDefinition],
    config: &RenderConfig,
) -> [Artifact; 3] {
    ArtifactKind::PER_RECORD.map(|kind| {
        let names = RecordNames::new(name, kind, config);
        let repr = config.representation(kind);
        let content = match kind {
            ArtifactKind::FieldEnum => templates::field_enum(&names.identifier, fields, repr),
            _ => templates::shape(&names.identifier, &names.binding, fields, repr),
        };

        Artifact {
            kind,
            path: config.dir_for(kind).join(&names.file_name),
            content,
        }
    })
}

/// Render the registry of all record names.
pub fn render_tables(names: &[String], config: &RenderConfig) -> Artifact {
    let kind = ArtifactKind::Tables;
    let table_names = TableNames::new(config);
    let content = templates::tables(
        &table_names.identifier,
        &table_names.binding,
        names,
        config.representation(kind),
    );

    Artifact {
        kind,
        path: config.dir_for(kind).join(&table_names.file_name),
        content,
    }
}
