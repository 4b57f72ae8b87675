use std::fs;
use std::path::Path;
use std::time::Duration;

use studyhub::presentation::Environment;
use studyhub::presentation::config::{Settings, SettingsError};
use tempfile::TempDir;

fn write_config(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(format!("{name}.toml")), content).unwrap();
}

#[test]
fn given_only_base_file_when_loading_then_defaults_fill_missing_sections() {
    let dir = TempDir::new().unwrap();
    write_config(
        dir.path(),
        "base",
        r#"
[auth]
jwt_secret = "from-file"
"#,
    );

    let settings = Settings::load_from(dir.path(), Environment::Test).unwrap();

    assert_eq!(settings.auth.jwt_secret, "from-file");
    assert_eq!(settings.auth.access_token_ttl_secs, 300);
    assert_eq!(settings.server.port, 8000);
    assert!(!settings.database.is_configured());
    assert_eq!(settings.documents.fetch_timeout(), Duration::from_secs(15));
    assert_eq!(settings.generation.summary.merge_batch_size, 5);
    assert_eq!(settings.generation.quiz.max_lines, 500);
}

#[test]
fn given_environment_overlay_when_loading_then_overlay_wins() {
    let dir = TempDir::new().unwrap();
    write_config(
        dir.path(),
        "base",
        r#"
[auth]
jwt_secret = "base-secret"

[server]
port = 8000
"#,
    );
    write_config(
        dir.path(),
        "test",
        r#"
[server]
port = 9100
public_base_url = "http://testhost:9100"

[generation.quiz]
max_lines = 40
max_tokens = 256
temperature = 0.1
"#,
    );

    let settings = Settings::load_from(dir.path(), Environment::Test).unwrap();

    assert_eq!(settings.server.port, 9100);
    assert_eq!(settings.server.public_base_url, "http://testhost:9100");
    assert_eq!(settings.auth.jwt_secret, "base-secret");
    assert_eq!(settings.generation.quiz.max_lines, 40);
    assert_eq!(settings.generation.flashcards.max_lines, 200);
}

#[test]
fn given_empty_jwt_secret_when_loading_then_invalid() {
    let dir = TempDir::new().unwrap();
    write_config(dir.path(), "base", "[auth]\njwt_secret = \"  \"\n");

    let error = Settings::load_from(dir.path(), Environment::Test).unwrap_err();

    assert!(matches!(error, SettingsError::Invalid(msg) if msg.contains("jwt_secret")));
}

#[test]
fn given_zero_chunk_size_when_loading_then_invalid() {
    let dir = TempDir::new().unwrap();
    write_config(
        dir.path(),
        "base",
        r#"
[auth]
jwt_secret = "secret"

[generation.flashcards]
max_lines = 0
max_tokens = 512
temperature = 0.4
"#,
    );

    let error = Settings::load_from(dir.path(), Environment::Test).unwrap_err();

    assert!(matches!(error, SettingsError::Invalid(_)));
}

#[test]
fn given_malformed_value_when_loading_then_load_error() {
    let dir = TempDir::new().unwrap();
    write_config(dir.path(), "base", "[server]\nport = \"not-a-port\"\n");

    let error = Settings::load_from(dir.path(), Environment::Test).unwrap_err();

    assert!(matches!(error, SettingsError::Load(_)));
}

#[test]
fn given_repository_config_when_loading_then_valid() {
    let config_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("config");

    let settings = Settings::load_from(&config_dir, Environment::Local).unwrap();

    assert_eq!(settings.generation, Default::default());
    assert_eq!(settings.llm.request_timeout(), Duration::from_secs(120));
}
