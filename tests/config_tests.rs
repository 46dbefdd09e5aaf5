//! Config Tests
//!
//! Loading `EngineConfig` from files: defaults, partial overrides, typo
//! warnings and validation failures.

use std::io::Write;
use std::path::PathBuf;

use efficiency_engine::config::validation::{known_config_keys, validate_unknown_keys};
use efficiency_engine::config::{ConfigError, EngineConfig};

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn empty_file_loads_defaults() {
    let file = config_file("");
    let config = EngineConfig::load_from_file(file.path()).unwrap();
    assert_eq!(config, EngineConfig::default());
}

#[test]
fn partial_file_overrides_only_given_keys() {
    let file = config_file(
        r#"
[server]
addr = "127.0.0.1:9000"

[rates]
dir = "/srv/efficiency/rates"
"#,
    );
    let config = EngineConfig::load_from_file(file.path()).unwrap();
    assert_eq!(config.server.addr, "127.0.0.1:9000");
    assert_eq!(config.rates.dir, Some(PathBuf::from("/srv/efficiency/rates")));
    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.json);
}

#[test]
fn typo_keys_warn_but_still_load() {
    let text = r#"
[server]
adr = "127.0.0.1:9000"

[loging]
json = true
"#;
    let warnings = validate_unknown_keys(text);
    let fields: Vec<&str> = warnings.iter().map(|w| w.field.as_str()).collect();
    assert!(fields.contains(&"server.adr"));
    assert!(fields.contains(&"loging"));

    let adr = warnings.iter().find(|w| w.field == "server.adr").unwrap();
    assert_eq!(adr.suggestion.as_deref(), Some("server.addr"));
    let loging = warnings.iter().find(|w| w.field == "loging").unwrap();
    assert_eq!(loging.suggestion.as_deref(), Some("logging"));

    // Unknown keys are ignored by serde; the file still loads with defaults.
    let file = config_file(text);
    let config = EngineConfig::load_from_file(file.path()).unwrap();
    assert_eq!(config.server.addr, "0.0.0.0:5000");
    assert!(!config.logging.json);
}

#[test]
fn invalid_values_fail_validation() {
    let file = config_file("[server]\naddr = \"not-an-address\"\n[logging]\nlevel = \"\"\n");
    match EngineConfig::load_from_file(file.path()) {
        Err(ConfigError::Validation(errors)) => assert_eq!(errors.len(), 2),
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[test]
fn wrong_type_is_a_parse_error() {
    let file = config_file("[logging]\njson = \"yes\"\n");
    let err = EngineConfig::load_from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(..)));
}

#[test]
fn missing_explicit_path_is_an_error() {
    let err = EngineConfig::load_or_search(Some(std::path::Path::new("/nonexistent/efficiency.toml")))
        .unwrap_err();
    assert!(matches!(err, ConfigError::Io(..)));
}

#[test]
fn saved_config_reloads_identically() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("efficiency.toml");

    let mut config = EngineConfig::default();
    config.logging.json = true;
    config.logging.level = "efficiency_engine=debug,tower_http=info".to_string();
    config.save_to_file(&path).unwrap();

    let reloaded = EngineConfig::load_from_file(&path).unwrap();
    assert_eq!(reloaded, config);
    assert!(validate_unknown_keys(&std::fs::read_to_string(&path).unwrap()).is_empty());
}

#[test]
fn every_section_is_known() {
    let known = known_config_keys();
    for key in ["server", "server.addr", "rates", "rates.dir", "logging", "logging.level", "logging.json"] {
        assert!(known.contains(key), "missing {key}");
    }
}
