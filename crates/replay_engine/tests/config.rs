use std::fs;

use replay_core::{DelayRange, PacingConfig};
use replay_engine::{ConfigError, PageConfig};
use tempfile::TempDir;

#[test]
fn missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = PageConfig::load_or_default(&dir.path().join("page.ron")).unwrap();
    assert_eq!(config, PageConfig::default());
    assert_eq!(config.pacing, PacingConfig::STANDARD);
}

#[test]
fn partial_config_keeps_other_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("page.ron");
    fs::write(
        &path,
        r#"(
            page_url: "https://replay.test/go?stale=1",
            default_engine: "duckduckgo",
        )"#,
    )
    .unwrap();

    let config = PageConfig::load(&path).unwrap();
    assert_eq!(config.default_engine, "duckduckgo");
    assert_eq!(config.pacing, PacingConfig::STANDARD);

    let state = config.initial_state().unwrap();
    assert_eq!(state.form().selected_engine, "duckduckgo");
    assert_eq!(state.share_builder().base_url(), "https://replay.test/go");
}

#[test]
fn pacing_round_trips_through_ron() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("page.ron");
    let mut config = PageConfig::default();
    config.pacing.success_hold = DelayRange::fixed(10);
    fs::write(&path, config.to_ron().unwrap()).unwrap();

    assert_eq!(PageConfig::load(&path).unwrap(), config);
}

#[test]
fn invalid_values_are_reported() {
    let unknown = PageConfig {
        default_engine: "altavista".to_string(),
        ..PageConfig::default()
    };
    assert!(matches!(
        unknown.settings(),
        Err(ConfigError::UnknownDefaultEngine(_))
    ));

    let bad_url = PageConfig {
        page_url: "not a url".to_string(),
        ..PageConfig::default()
    };
    assert!(matches!(
        bad_url.settings(),
        Err(ConfigError::InvalidPageUrl { .. })
    ));
}

#[test]
fn unparseable_file_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("page.ron");
    fs::write(&path, "(page_url: 42").unwrap();
    assert!(matches!(
        PageConfig::load_or_default(&path),
        Err(ConfigError::Parse { .. })
    ));
}
