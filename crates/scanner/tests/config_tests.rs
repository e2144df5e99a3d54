//! Integration tests for configuration parsing
//!
//! Tests scanner configuration loading, including:
//! - Minimal and full configuration files
//! - Defaults for omitted sections
//! - Invalid configuration handling
//! - Save/load through the filesystem

use scanner::config::ScannerConfig;
use std::path::PathBuf;
use usb_metadata::PathRadix;

const MINIMAL_CONFIG: &str = r#"
[scanner]
log_level = "info"
"#;

const FULL_CONFIG: &str = r#"
[scanner]
log_level = "debug"
workers = 8

[sysfs]
root = "/tmp/fake-sysfs/bus/usb/devices"
path_radix = 16
"#;

#[test]
fn test_parse_minimal_config() {
    let config = ScannerConfig::parse(MINIMAL_CONFIG).unwrap();

    assert_eq!(config.scanner.log_level, "info");
    assert_eq!(config.scanner.workers, 4);
    assert_eq!(config.sysfs.root, PathBuf::from("/sys/bus/usb/devices"));
    assert_eq!(config.sysfs.radix(), PathRadix::Decimal);
}

#[test]
fn test_parse_full_config() {
    let config = ScannerConfig::parse(FULL_CONFIG).unwrap();

    assert_eq!(config.scanner.log_level, "debug");
    assert_eq!(config.scanner.workers, 8);
    assert_eq!(
        config.sysfs.root,
        PathBuf::from("/tmp/fake-sysfs/bus/usb/devices")
    );
    assert_eq!(config.sysfs.radix(), PathRadix::Hex);
}

#[test]
fn test_missing_scanner_section_is_rejected() {
    assert!(ScannerConfig::parse("[sysfs]\npath_radix = 10\n").is_err());
}

#[test]
fn test_invalid_values_are_rejected() {
    let bad_level = "[scanner]\nlog_level = \"loud\"\n";
    assert!(ScannerConfig::parse(bad_level).is_err());

    let bad_radix = "[scanner]\nlog_level = \"info\"\n[sysfs]\npath_radix = 2\n";
    assert!(ScannerConfig::parse(bad_radix).is_err());

    let no_workers = "[scanner]\nlog_level = \"info\"\nworkers = 0\n";
    assert!(ScannerConfig::parse(no_workers).is_err());

    let empty_root = "[scanner]\nlog_level = \"info\"\n[sysfs]\nroot = \"\"\n";
    assert!(ScannerConfig::parse(empty_root).is_err());
}

#[test]
fn test_save_and_load_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = ScannerConfig::default();
    config.scanner.workers = 2;
    config.sysfs.path_radix = 16;
    config.save(&path).unwrap();

    let loaded = ScannerConfig::load(Some(path)).unwrap();
    assert_eq!(loaded.scanner.workers, 2);
    assert_eq!(loaded.sysfs.radix(), PathRadix::Hex);
}

#[test]
fn test_load_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let result = ScannerConfig::load(Some(dir.path().join("absent.toml")));
    assert!(result.is_err());
}
