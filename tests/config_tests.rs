// Configuration loading

use std::io::Write;
use vapi_console::Config;

#[test]
fn test_defaults_without_file() {
    let config = Config::load_file("does/not/exist").unwrap();

    assert_eq!(config.service.http.bind, "127.0.0.1");
    assert_eq!(config.service.http.port, 8501);
    assert_eq!(config.service.http.session_idle_secs, 1800);
    assert_eq!(config.vapi.base_url, "https://api.vapi.ai");
    assert!(config.vapi.api_key.is_none());
    assert!(config.vapi.request_timeout_secs.is_none());
    assert_eq!(config.assistant.first_message, "Hello! How can I help you today?");
}

#[test]
fn test_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("console.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(
        file,
        r#"
[service.http]
port = 9000
session_idle_secs = 60

[vapi]
base_url = "http://localhost:4010"
api_key = "  "
request_timeout_secs = 15

[assistant]
first_message = "Hi there"
"#
    )
    .unwrap();

    let config = Config::load_file(path.to_str().unwrap()).unwrap();

    assert_eq!(config.service.http.port, 9000);
    assert_eq!(config.service.http.bind, "127.0.0.1");
    assert_eq!(config.service.http.session_idle_secs, 60);
    assert_eq!(config.vapi.base_url, "http://localhost:4010");
    assert_eq!(config.vapi.request_timeout_secs, Some(15));
    assert!(config.vapi.api_key.is_none(), "Blank key should count as absent");
    assert_eq!(config.assistant.first_message, "Hi there");
    assert!(config.assistant.context.starts_with("You are a helpful AI assistant"));
}

#[test]
fn test_api_key_override() {
    let mut config = Config::default();
    config.apply_api_key(Some(" env-key ".to_string()));
    assert_eq!(config.vapi.api_key.as_deref(), Some("env-key"));

    config.apply_api_key(None);
    assert_eq!(config.vapi.api_key.as_deref(), Some("env-key"));
}
