//! Tests for the config module

use super::loader::test_support;
use super::types::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.tools.ansible, "ansible");
    assert_eq!(config.tools.ansible_inventory, "ansible-inventory");
    assert_eq!(config.tools.docker, "docker");
    assert_eq!(config.output.color, ColorMode::Auto);
    assert!(config.output.unicode);
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[tools]
ansible = "/opt/ansible/bin/ansible"
docker = "podman"

[output]
color = "never"
unicode = false
"#;

    let (config, warnings) = test_support::parse(toml).unwrap();
    assert!(warnings.is_empty());
    assert_eq!(config.tools.ansible, "/opt/ansible/bin/ansible");
    assert_eq!(config.tools.ansible_inventory, "ansible-inventory");
    assert_eq!(config.tools.docker, "podman");
    assert_eq!(config.output.color, ColorMode::Never);
    assert!(!config.output.unicode);
}

#[test]
fn test_config_unknown_key_warns_with_suggestion() {
    let toml = "[tools]\ndockr = \"podman\"\n";

    let (_config, warnings) = test_support::parse(toml).unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "dockr");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("docker"));
}

#[test]
fn test_config_invalid_toml_is_error() {
    let err = test_support::parse("[tools\nansible = 1").unwrap_err();
    assert!(err.to_string().starts_with("invalid config in .preflight.toml"));
}

#[test]
fn test_suggest_key_ignores_distant_names() {
    assert_eq!(test_support::suggest("completely_unrelated"), None);
}

#[test]
fn test_env_overrides_tools_and_color() {
    let config = test_support::overrides(
        Config::default(),
        &[
            ("PREFLIGHT_ANSIBLE", "/usr/local/bin/ansible"),
            ("PREFLIGHT_DOCKER", "nerdctl"),
            ("PREFLIGHT_COLOR", "ALWAYS"),
        ],
    );

    assert_eq!(config.tools.ansible, "/usr/local/bin/ansible");
    assert_eq!(config.tools.ansible_inventory, "ansible-inventory");
    assert_eq!(config.tools.docker, "nerdctl");
    assert_eq!(config.output.color, ColorMode::Always);
}

#[test]
fn test_env_override_blank_value_is_ignored() {
    let config = test_support::overrides(Config::default(), &[("PREFLIGHT_ANSIBLE", "  ")]);
    assert_eq!(config.tools.ansible, "ansible");
}

#[test]
fn test_config_load_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".preflight.toml");
    fs::write(&path, "[tools]\nansible_inventory = \"ansible-inventory-2\"\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.tools.ansible_inventory, "ansible-inventory-2");
}

#[test]
fn test_config_load_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = Config::load(&dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, crate::error::PreflightError::Io(_)));
}
