use std::{fs, path::Path, process::Command};

use tempfile::TempDir;

const SCHEMA: &str = r#"
model User {
  id    Int    @id @map("user_id")
  email String
  @@map("users")
}
"#;

fn fieldgen(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_fieldgen"));
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

fn setup() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("schema.prisma"), SCHEMA).unwrap();
    temp
}

#[test]
fn test_generate_writes_files() {
    let temp = setup();

    let output = fieldgen(temp.path())
        .args(["generate", "-s", "schema.prisma"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let generated = temp.path().join("generated");
    let fields = fs::read_to_string(generated.join("field-enum/UserFields.ts")).unwrap();
    assert_eq!(
        fields,
        "export enum UserFields {\n  id = \"id\",\n  email = \"email\",\n}"
    );
    assert!(generated.join("dto/UserDto.ts").exists());
    assert!(generated.join("entity/UserEntity.ts").exists());
    assert!(generated.join("field-enum/Tables.ts").exists());
}

#[test]
fn test_generate_with_mapping_and_kebab_case() {
    let temp = setup();

    let output = fieldgen(temp.path())
        .args([
            "generate",
            "-s",
            "schema.prisma",
            "-o",
            "out",
            "-m",
            "-c",
            "--file-naming",
            "kebab-case",
        ])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let fields = fs::read_to_string(temp.path().join("out/field-enum/users-fields.ts")).unwrap();
    assert_eq!(
        fields,
        "export const UsersFields = {\n  USER_ID: \"user_id\",\n  EMAIL: \"email\",\n} as const;"
    );
}

#[test]
fn test_generate_reads_config_file() {
    let temp = setup();
    fs::write(
        temp.path().join("fieldgen.toml"),
        "schema = \"schema.prisma\"\noutput = \"src/types\"\n\n[entity]\nas_class = true\n",
    )
    .unwrap();

    let output = fieldgen(temp.path()).arg("generate").output().unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let entity = fs::read_to_string(temp.path().join("src/types/entity/UserEntity.ts")).unwrap();
    assert!(entity.starts_with("export class UserEntity {"));
}

#[test]
fn test_dry_run_writes_nothing() {
    let temp = setup();

    let output = fieldgen(temp.path())
        .args(["generate", "-s", "schema.prisma", "--dry-run"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("export enum UserFields {"));
    assert!(stdout.contains("4 files would be generated"));
    assert!(!temp.path().join("generated").exists());
}

#[test]
fn test_invalid_naming_style_fails() {
    let temp = setup();

    let output = fieldgen(temp.path())
        .args(["generate", "-s", "schema.prisma", "--file-naming", "invalidCase"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalidCase"));
    assert!(!temp.path().join("generated").exists());
}

#[test]
fn test_missing_schema_argument_fails() {
    let temp = TempDir::new().unwrap();

    let output = fieldgen(temp.path()).arg("generate").output().unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--schema"));
}

#[test]
fn test_malformed_schema_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("schema.prisma"), "just some text").unwrap();

    let output = fieldgen(temp.path())
        .args(["generate", "-s", "schema.prisma"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("malformed schema"));
    assert!(!temp.path().join("generated").exists());
}

#[test]
fn test_check_json() {
    let temp = setup();

    let output = fieldgen(temp.path())
        .args(["check", "-s", "schema.prisma", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["table_names"], serde_json::json!(["User"]));
    assert_eq!(value["fields_by_table"]["User"][1]["name"], "email");
    assert_eq!(value["fields_by_table"]["User"][1]["type"], "String");
}

#[test]
fn test_check_reports_unclosed_block() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("schema.prisma"),
        "model User {\n  id Int\n}\n\nmodel Post {\n  id Int\n",
    )
    .unwrap();

    let output = fieldgen(temp.path())
        .args(["check", "-s", "schema.prisma"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("warning: model Post has no closing brace of its own; block skipped"));
    assert!(stderr.contains("(at schema.prisma:5)"));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Records (1):"));
}
