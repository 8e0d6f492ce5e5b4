//! Tests for configuration file loading and output directory resolution
//!
//! Tests that manipulate TCM_CONFIG or TCM_OUTPUT_DIR are marked #[serial]
//! so they do not race on the process environment.

use serial_test::serial;
use std::env;
use std::path::{Path, PathBuf};
use tcm::config::{TomlConfig, CONFIG_ENV, DEFAULT_OUTPUT_DIR, OUTPUT_DIR_ENV};
use tcm::Error;
use tempfile::TempDir;

#[test]
#[serial]
fn test_output_dir_cli_takes_precedence() {
    env::set_var(OUTPUT_DIR_ENV, "/tmp/tcm-env-output");
    let config = TomlConfig {
        output_dir: Some(PathBuf::from("/tmp/tcm-toml-output")),
        ..Default::default()
    };

    let resolved = config.resolve_output_dir(Some(Path::new("/tmp/tcm-cli-output")));

    assert_eq!(resolved, PathBuf::from("/tmp/tcm-cli-output"));
    env::remove_var(OUTPUT_DIR_ENV);
}

#[test]
#[serial]
fn test_output_dir_env_over_toml() {
    env::set_var(OUTPUT_DIR_ENV, "/tmp/tcm-env-output");
    let config = TomlConfig {
        output_dir: Some(PathBuf::from("/tmp/tcm-toml-output")),
        ..Default::default()
    };

    assert_eq!(
        config.resolve_output_dir(None),
        PathBuf::from("/tmp/tcm-env-output")
    );
    env::remove_var(OUTPUT_DIR_ENV);
}

#[test]
#[serial]
fn test_output_dir_toml_then_default() {
    env::remove_var(OUTPUT_DIR_ENV);

    let config = TomlConfig {
        output_dir: Some(PathBuf::from("/tmp/tcm-toml-output")),
        ..Default::default()
    };
    assert_eq!(
        config.resolve_output_dir(None),
        PathBuf::from("/tmp/tcm-toml-output")
    );

    assert_eq!(
        TomlConfig::default().resolve_output_dir(None),
        PathBuf::from(DEFAULT_OUTPUT_DIR)
    );
}

#[test]
#[serial]
fn test_load_explicit_config_file() {
    env::remove_var(CONFIG_ENV);
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("tcm.toml");
    std::fs::write(&path, "output_dir = \"out\"\n[logging]\nlevel = \"warn\"\n").unwrap();

    let config = TomlConfig::load(Some(&path)).unwrap();

    assert_eq!(config.output_dir, Some(PathBuf::from("out")));
    assert_eq!(config.logging.level, "warn");
}

#[test]
#[serial]
fn test_load_config_from_env() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("tcm.toml");
    std::fs::write(&path, "[logging]\nlevel = \"debug\"\n").unwrap();
    env::set_var(CONFIG_ENV, &path);

    let config = TomlConfig::load(None).unwrap();

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.output_dir, None);
    env::remove_var(CONFIG_ENV);
}

#[test]
#[serial]
fn test_load_missing_explicit_config_fails() {
    env::remove_var(CONFIG_ENV);
    let temp_dir = TempDir::new().unwrap();

    let err = TomlConfig::load(Some(&temp_dir.path().join("missing.toml"))).unwrap_err();

    assert!(matches!(err, Error::Config(_)));
}
