//! Configuration tests
//!
//! The round-trip test is a guard: when a field is added to Config it must
//! also appear in to_toml() and FileConfig, or parsing the template breaks.

use super::*;

#[test]
fn default_config_round_trips() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );
}

#[test]
fn template_preserves_values() {
    let mut config = Config::default();
    config.theme = "nord".to_string();
    config.fade_threshold = 0.35;
    config.logging.level = "debug".to_string();
    config.logging.file_enabled = true;

    let parsed: FileConfig = toml::from_str(&config.to_toml()).expect("template parses");
    assert_eq!(parsed.theme.as_deref(), Some("nord"));
    assert_eq!(parsed.fade_threshold, Some(0.35));

    let logging = LoggingConfig::from_file(parsed.logging);
    assert_eq!(logging.level, "debug");
    assert!(logging.file_enabled);
}

#[test]
fn log_rotation_parses_known_and_unknown_values() {
    assert_eq!(LogRotation::parse("hourly"), LogRotation::Hourly);
    assert_eq!(LogRotation::parse("DAILY"), LogRotation::Daily);
    assert_eq!(LogRotation::parse("never"), LogRotation::Never);
    // Unknown values fall back to daily
    assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
}

#[test]
fn logging_config_defaults_apply_per_field() {
    let partial = FileLogging {
        level: Some("trace".to_string()),
        ..Default::default()
    };
    let logging = LoggingConfig::from_file(Some(partial));
    assert_eq!(logging.level, "trace");
    assert!(!logging.file_enabled);
    assert_eq!(logging.file_prefix, "folio");
}

#[test]
fn default_fade_threshold_matches_page_default() {
    assert_eq!(Config::default().fade_threshold, DEFAULT_FADE_THRESHOLD);
}
