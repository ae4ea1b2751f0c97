//! Integration tests for configuration loading

use apar_inspect::domain::AssetKind;
use apar_inspect::infra::Config;
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

#[test]
fn test_load_config_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();

    let config_content = r#"
[location]
timeout_ms = 5000
max_reading_age_s = 30
high_accuracy = false

[evidence]
static_assets = { photo = true, selfie = true }
mobile_assets = { photo = false, selfie = false }

[capture]
countdown_secs = 5
tick_ms = 500
"#;

    temp_file.write_all(config_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = Config::from_file(temp_file.path()).unwrap();

    let policy = config.location_policy();
    assert_eq!(policy.timeout, Duration::from_millis(5000));
    assert_eq!(policy.max_reading_age, Duration::from_secs(30));
    assert!(!policy.high_accuracy);

    let static_req = config.evidence_requirements(AssetKind::Static);
    assert!(static_req.photo);
    assert!(static_req.selfie);

    let mobile_req = config.evidence_requirements(AssetKind::Mobile);
    assert!(!mobile_req.photo);

    assert_eq!(config.countdown_secs(), 5);
    assert_eq!(config.capture_tick(), Duration::from_millis(500));
}

#[test]
fn test_partial_config_uses_section_defaults() {
    let mut temp_file = NamedTempFile::new().unwrap();

    temp_file
        .write_all(b"[capture]\ncountdown_secs = 10\n")
        .unwrap();
    temp_file.flush().unwrap();

    let config = Config::from_file(temp_file.path()).unwrap();

    assert_eq!(config.countdown_secs(), 10);
    // Untouched sections fall back to defaults
    assert_eq!(config.location_policy().timeout, Duration::from_secs(10));
    assert!(config.evidence_requirements(AssetKind::Static).photo);
}

#[test]
fn test_load_from_path_fallback() {
    let config = Config::load_from_path("/nonexistent/config.toml");

    assert_eq!(config.countdown_secs(), 3);
    assert_eq!(config.location_policy().max_reading_age, Duration::from_secs(60));
}

#[test]
fn test_broken_config_file_is_an_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[location\ntimeout_ms = oops").unwrap();
    temp_file.flush().unwrap();

    assert!(Config::from_file(temp_file.path()).is_err());
}
