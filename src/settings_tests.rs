#![allow(clippy::unwrap_used)]

use super::*;
use rust_decimal_macros::dec;
use std::io::Write;

fn write_settings(contents: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    (dir, path)
}

#[test]
fn test_load_minimal_settings() {
    let (_dir, path) = write_settings(
        r#"
[store]
base_url = "https://rowstore.example.com/api"
credential_path = "/tmp/credential.json"

[auth]
passphrase_sha256 = "abc123"
"#,
    );
    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.store.base_url, "https://rowstore.example.com/api");
    assert_eq!(settings.store.document, "fleet_records");
    assert_eq!(settings.store.timeout_seconds, 30);
    assert_eq!(settings.auth.passphrase_sha256, "abc123");
    assert_eq!(settings.log.level, "info");
    assert_eq!(settings.normalize.rules(), CorrectionRules::default());
}

#[test]
fn test_normalize_overrides() {
    let (_dir, path) = write_settings(
        r#"
[store]
base_url = "https://rowstore.example.com/api"
credential_path = "/tmp/credential.json"

[auth]
passphrase_sha256 = "abc123"

[normalize]
wash_limit = 100
hundredfold_limit = 5000
"#,
    );
    let rules = Settings::load_from(&path).unwrap().normalize.rules();
    assert_eq!(rules.wash_limit, dec!(100));
    assert_eq!(rules.tenfold_limit, dec!(300));
    assert_eq!(rules.hundredfold_limit, dec!(5000));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.toml");
    assert!(Settings::load_from(&path).is_err());
}

#[test]
fn test_credential_path_tilde_expansion() {
    let (_dir, path) = write_settings(
        r#"
[store]
base_url = "https://rowstore.example.com/api"
credential_path = "~/credential.json"

[auth]
passphrase_sha256 = "abc123"
"#,
    );
    let settings = Settings::load_from(&path).unwrap();
    assert!(!settings.store.credential_path.starts_with("~/"));
    assert!(settings.store.credential_path.ends_with("/credential.json"));
}

#[test]
fn test_shellexpand_passthrough() {
    assert_eq!(shellexpand("/abs/path"), "/abs/path");
    assert_eq!(shellexpand("relative.json"), "relative.json");
}
