use clap::Parser;
use cv_render::cli::{handle_command, Cli};
use cv_render::{load_profile, EnvironmentConfig, ValidationError};
use std::path::Path;

const ALICE_JSON: &str = r#"{
  "personalInfo": { "fullName": "Alice Tran", "email": "a@x.com" },
  "experience": [
    { "company": "Acme", "position": "Engineer", "startDate": "2020-01-01", "endDate": "" }
  ],
  "skills": [ { "name": "Go", "level": "Expert" } ]
}"#;

const ALICE_YAML: &str = r#"
personalInfo:
  fullName: Alice Tran
  email: a@x.com
experience:
  - company: Acme
    position: Engineer
    startDate: "2020-01-01"
skills:
  - name: Go
    level: 5
"#;

const ALICE_TOML: &str = r#"
[personalInfo]
fullName = "Alice Tran"
email = "a@x.com"

[[experience]]
company = "Acme"
position = "Engineer"
startDate = "2020-01-01"

[[skills]]
name = "Go"
level = "expert"
"#;

async fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    tokio::fs::write(&path, content).await.unwrap();
    path
}

fn env_for(dir: &Path) -> EnvironmentConfig {
    EnvironmentConfig {
        output_path: dir.join("out"),
        ..Default::default()
    }
}

#[tokio::test]
async fn loads_profiles_in_every_supported_format() {
    let dir = tempfile::tempdir().unwrap();

    for (name, content) in [
        ("alice.json", ALICE_JSON),
        ("alice.yaml", ALICE_YAML),
        ("alice.toml", ALICE_TOML),
    ] {
        let path = write(dir.path(), name, content).await;
        let profile = load_profile(&path).await.unwrap();
        assert_eq!(profile.personal_info.full_name, "Alice Tran", "{}", name);
        assert_eq!(profile.experience.len(), 1, "{}", name);
        assert_eq!(profile.skills.len(), 1, "{}", name);
    }
}

#[tokio::test]
async fn invalid_profile_reports_issues() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "broken.json",
        r#"{"personalInfo": {"fullName": "", "email": "a@x.com"}}"#,
    )
    .await;

    let err = load_profile(&path).await.unwrap_err();
    let validation = err
        .downcast_ref::<ValidationError>()
        .expect("validation error in chain");
    assert_eq!(validation.issues().len(), 1);
    assert_eq!(validation.issues()[0].field, "personalInfo.fullName");
}

#[tokio::test]
async fn rejects_unknown_extensions() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "alice.txt", ALICE_JSON).await;
    assert!(load_profile(&path).await.is_err());
}

#[tokio::test]
async fn render_command_writes_html_to_explicit_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "alice.json", ALICE_JSON).await;
    let output = dir.path().join("nested").join("alice.html");

    let cli = Cli::try_parse_from([
        "cv-render",
        "render",
        "--input",
        input.to_str().unwrap(),
        "--template",
        "classic",
        "--output",
        output.to_str().unwrap(),
    ])
    .unwrap();
    handle_command(cli, &env_for(dir.path())).await.unwrap();

    let html = tokio::fs::read_to_string(&output).await.unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("data-section=\"experience\""));
    assert!(!html.contains("data-section=\"education\""));
}

#[tokio::test]
async fn render_command_defaults_to_output_directory() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "alice.yaml", ALICE_YAML).await;
    let env = env_for(dir.path());

    let cli = Cli::try_parse_from([
        "cv-render",
        "render",
        "--input",
        input.to_str().unwrap(),
        "--format",
        "pdf-json",
        "--locale",
        "vi",
    ])
    .unwrap();
    handle_command(cli, &env).await.unwrap();

    let mut entries = tokio::fs::read_dir(&env.output_path).await.unwrap();
    let entry = entries.next_entry().await.unwrap().expect("one rendered file");
    let name = entry.file_name().to_string_lossy().to_string();
    assert!(name.starts_with("alice_tran_modern_vi_"));
    assert!(name.ends_with(".json"));

    let json: serde_json::Value =
        serde_json::from_str(&tokio::fs::read_to_string(entry.path()).await.unwrap()).unwrap();
    assert_eq!(json["type"], "document");
    assert_eq!(json["language"], "vi");
}

#[tokio::test]
async fn validate_command_fails_on_invalid_profile() {
    let dir = tempfile::tempdir().unwrap();
    let good = write(dir.path(), "good.json", ALICE_JSON).await;
    let bad = write(
        dir.path(),
        "bad.json",
        r#"{"personalInfo": {"fullName": "X", "email": "not-an-email"}}"#,
    )
    .await;
    let env = env_for(dir.path());

    let ok =
        Cli::try_parse_from(["cv-render", "validate", "--input", good.to_str().unwrap()]).unwrap();
    assert!(handle_command(ok, &env).await.is_ok());

    let failing =
        Cli::try_parse_from(["cv-render", "validate", "--input", bad.to_str().unwrap()]).unwrap();
    assert!(handle_command(failing, &env).await.is_err());
}
