//! Tests for config file loading.

use std::io::Write;

use pretty_assertions::assert_eq;
use relay::config::{RelayConfig, ServerConfig, DEFAULT_BIND};
use relay::engine::{ChatEngine, EngineMode};
use relay::error::RelayError;
use tempfile::{NamedTempFile, TempDir};

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn loads_yaml_with_camel_case_base_url() {
    let file = write_config("model: qwen2.5:7b\nbaseURL: http://localhost:11434/v1\n");

    let config = RelayConfig::load(file.path()).unwrap();

    assert_eq!(config.model, "qwen2.5:7b");
    assert_eq!(config.base_url, "http://localhost:11434/v1");
    assert_eq!(config.server, ServerConfig::default());
    assert!(config.has_backend());
}

#[test]
fn loads_yaml_server_section() {
    let file = write_config(
        "model: m\n\
         base_url: http://h/v1\n\
         server:\n  bind: 127.0.0.1:7000\n  request_timeout_secs: 5\n  history_ttl_secs: 3600\n",
    );

    let config = RelayConfig::load(file.path()).unwrap();

    assert_eq!(config.base_url, "http://h/v1");
    assert_eq!(config.server.bind, "127.0.0.1:7000");
    assert_eq!(config.server.request_timeout_secs, Some(5));
    assert_eq!(config.server.probe_timeout_secs, 10);
    assert_eq!(config.server.history_ttl_secs, Some(3600));
}

#[test]
fn parse_accepts_json() {
    let data = "{\n\t\"model\": \"llama3\",\n\t\"baseURL\": \"http://gpu-box:11434/v1\"\n}";

    let config = RelayConfig::parse(data).unwrap();

    assert_eq!(config.model, "llama3");
    assert_eq!(config.base_url, "http://gpu-box:11434/v1");
}

#[test]
fn unparsable_content_reports_both_formats() {
    let err = RelayConfig::parse("model: [unterminated").unwrap_err();

    match err {
        RelayError::Configuration(message) => {
            assert!(message.contains("YAML"), "{message}");
            assert!(message.contains("JSON"), "{message}");
        }
        other => panic!("expected configuration error, got {other:?}"),
    }
}

#[test]
fn missing_file_is_a_configuration_error() {
    let dir = TempDir::new().unwrap();
    let err = RelayConfig::load(dir.path().join("conf/openai.yaml")).unwrap_err();

    assert!(matches!(err, RelayError::Configuration(_)));
}

#[test]
fn load_or_default_degrades_to_no_backend() {
    let dir = TempDir::new().unwrap();

    let config = RelayConfig::load_or_default(dir.path().join("missing.yaml"));

    assert_eq!(config, RelayConfig::default());
    assert_eq!(config.server.bind, DEFAULT_BIND);
    assert!(!config.has_backend());
}

#[tokio::test]
async fn missing_config_file_starts_engine_in_mock_mode() {
    let dir = TempDir::new().unwrap();
    let config = RelayConfig::load_or_default(dir.path().join("missing.yaml"));

    let engine = ChatEngine::from_config(&config).await;

    assert_eq!(engine.mode(), EngineMode::Mock);
}
