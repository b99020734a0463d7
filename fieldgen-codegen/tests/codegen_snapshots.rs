//! Snapshot tests for TypeScript generation.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::path::Path;

use fieldgen_codegen::{Artifact, ArtifactKind, RenderConfig, render};
use fieldgen_core::NamingStyle;
use fieldgen_schema::parse;

const SCHEMA: &str = r#"
generator client {
  provider = "prisma-client-js"
}

model User {
  id        Int      @id @default(autoincrement())
  email     String   @unique
  name      String?  @map("display_name")
  posts     Post[]
  createdAt DateTime @default(now())
}

model Post {
  id       Int     @id @default(autoincrement())
  title    String
  tags     String[]
  authorId Int
  @@map("posts")
}
"#;

/// Render a schema and return its artifacts.
fn generate(schema: &str, config: &RenderConfig) -> Vec<Artifact> {
    let result = parse(schema, config.use_mapping).expect("Failed to parse schema");
    render(&result, config)
}

/// Get the artifact written to `path`.
fn get_file<'a>(artifacts: &'a [Artifact], path: &str) -> &'a str {
    artifacts
        .iter()
        .find(|a| a.path == Path::new(path))
        .map(|a| a.content.as_str())
        .unwrap_or_else(|| panic!("no artifact at {path}"))
}

fn config() -> RenderConfig {
    RenderConfig::default().with_output_dir("out")
}

#[test]
fn test_artifact_paths_and_order() {
    let artifacts = generate(SCHEMA, &config());
    let paths: Vec<_> = artifacts
        .iter()
        .map(|a| (a.kind, a.path.display().to_string()))
        .collect();

    assert_eq!(
        paths,
        [
            (ArtifactKind::FieldEnum, "out/field-enum/UserFields.ts".to_string()),
            (ArtifactKind::Dto, "out/dto/UserDto.ts".to_string()),
            (ArtifactKind::Entity, "out/entity/UserEntity.ts".to_string()),
            (ArtifactKind::FieldEnum, "out/field-enum/PostFields.ts".to_string()),
            (ArtifactKind::Dto, "out/dto/PostDto.ts".to_string()),
            (ArtifactKind::Entity, "out/entity/PostEntity.ts".to_string()),
            (ArtifactKind::Tables, "out/field-enum/Tables.ts".to_string()),
        ]
    );
}

#[test]
fn test_field_enum_nominal() {
    let artifacts = generate(SCHEMA, &config());
    insta::assert_snapshot!(get_file(&artifacts, "out/field-enum/UserFields.ts"), @r#"
export enum UserFields {
  id = "id",
  email = "email",
  name = "name",
  posts = "posts",
  createdAt = "createdAt",
}
"#);
}

#[test]
fn test_field_enum_frozen_with_mapping() {
    let mut config = config();
    config.use_const = true;
    config.use_mapping = true;

    let artifacts = generate(SCHEMA, &config);
    insta::assert_snapshot!(get_file(&artifacts, "out/field-enum/UserFields.ts"), @r#"
export const UserFields = {
  ID: "id",
  EMAIL: "email",
  DISPLAY_NAME: "display_name",
  POSTS: "posts",
  CREATEDAT: "createdAt",
} as const;
"#);
}

#[test]
fn test_dto_frozen() {
    let artifacts = generate(SCHEMA, &config());
    insta::assert_snapshot!(get_file(&artifacts, "out/dto/UserDto.ts"), @r#"
export const userDto = {
  id: undefined as Int,
  email: undefined as String,
  name: undefined as String?,
  posts: undefined as Post[],
  createdAt: undefined as DateTime,
} as const;
"#);
}

#[test]
fn test_entity_class() {
    let mut config = config();
    config.entity.as_class = true;

    let artifacts = generate(SCHEMA, &config);
    insta::assert_snapshot!(get_file(&artifacts, "out/entity/PostEntity.ts"), @r#"
export class PostEntity {
  id!: Int;
  title!: String;
  tags!: String[];
  authorId!: Int;
}
"#);
}

#[test]
fn test_tables_nominal() {
    let artifacts = generate(SCHEMA, &config());
    insta::assert_snapshot!(get_file(&artifacts, "out/field-enum/Tables.ts"), @r#"
export enum Tables {
  USER = "User",
  POST = "Post",
}
"#);
}

#[test]
fn test_tables_frozen_with_mapping() {
    let mut config = config();
    config.use_const = true;
    config.use_mapping = true;
    config.field_enum.prefix = "App".to_string();

    let artifacts = generate(SCHEMA, &config);
    insta::assert_snapshot!(get_file(&artifacts, "out/field-enum/AppTables.ts"), @r#"
export const apptables = {
  USER: "User",
  POSTS: "posts",
} as const;

export type AppTables = keyof typeof apptables;
"#);
}

#[test]
fn test_mapped_record_names() {
    let mut config = config();
    config.use_mapping = true;

    let artifacts = generate(SCHEMA, &config);
    let post_dto = get_file(&artifacts, "out/dto/postsDto.ts");
    assert!(post_dto.starts_with("export const postsDto = {"));

    let post_fields = get_file(&artifacts, "out/field-enum/postsFields.ts");
    assert!(post_fields.starts_with("export enum PostsFields {"));
}

#[test]
fn test_kebab_case_file_names() {
    let mut config = config();
    config.naming = NamingStyle::KebabCase;
    config.dto.prefix = "api".to_string();

    let artifacts = generate(SCHEMA, &config);
    let dto = get_file(&artifacts, "out/dto/api-user-dto.ts");
    assert!(dto.starts_with("export const apiUserDto = {"));
    get_file(&artifacts, "out/field-enum/user-fields.ts");
    get_file(&artifacts, "out/field-enum/tables.ts");
}

#[test]
fn test_directory_overrides() {
    let mut config = config();
    config.field_enum.dir = Some("src/enums".into());
    config.entity.dir = Some("src/entities".into());

    let artifacts = generate(SCHEMA, &config);
    get_file(&artifacts, "src/enums/UserFields.ts");
    get_file(&artifacts, "src/enums/Tables.ts");
    get_file(&artifacts, "src/entities/UserEntity.ts");
    get_file(&artifacts, "out/dto/UserDto.ts");
}

#[test]
fn test_empty_record_renders_empty_bodies() {
    let mut config = config();
    config.dto.as_class = true;

    let artifacts = generate("model Audit {\n}\n", &config);
    assert_eq!(artifacts.len(), 4);
    assert_eq!(
        get_file(&artifacts, "out/field-enum/AuditFields.ts"),
        "export enum AuditFields {\n}"
    );
    assert_eq!(get_file(&artifacts, "out/dto/AuditDto.ts"), "export class AuditDto {\n}");
    assert_eq!(
        get_file(&artifacts, "out/entity/AuditEntity.ts"),
        "export const auditEntity = {\n} as const;"
    );
}

#[test]
fn test_scenario_outputs_are_byte_exact() {
    let mut config = config();
    config.field_enum.prefix = "prefix".to_string();
    config.dto.prefix = "prefix".to_string();

    let artifacts = generate("model User { id number\n name string }", &config);

    assert_eq!(
        get_file(&artifacts, "out/field-enum/prefixUserFields.ts"),
        "export enum prefixUserFields {\n  id = \"id\",\n  name = \"name\",\n}"
    );
    assert_eq!(
        get_file(&artifacts, "out/dto/prefixUserDto.ts"),
        "export const prefixUserDto = {\n  id: undefined as number,\n  name: undefined as string,\n} as const;"
    );
}

#[test]
fn test_render_is_idempotent() {
    let mut config = config();
    config.use_const = true;
    config.naming = NamingStyle::KebabCase;

    let first = generate(SCHEMA, &config);
    let _other = generate("model Other { x Int }", &RenderConfig::default());
    let second = generate(SCHEMA, &config);

    assert_eq!(first, second);
}
