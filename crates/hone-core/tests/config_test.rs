//! Tests for the hone configuration system.

use std::sync::Mutex;

use hone_core::config::HoneConfig;
use hone_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Clear all HONE_ env vars to prevent cross-test contamination.
fn clear_hone_env_vars() {
    for key in [
        "HONE_DISABLED_PATTERNS",
        "HONE_ESCALATION_SUGGEST_ABOVE",
        "HONE_ESCALATION_STRONG_RECOMMEND_ABOVE",
        "HONE_ESCALATION_ANSWER_FLOOR",
    ] {
        std::env::remove_var(key);
    }
}

/// Layered resolution: env overrides project file, project file
/// overrides defaults.
#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_hone_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("hone.toml"),
        r#"
[patterns]
disabled = ["strip-filler-phrases"]

[escalation]
suggest_above = 35
answer_floor = 55
"#,
    )
    .unwrap();

    std::env::set_var("HONE_ESCALATION_ANSWER_FLOOR", "60");

    let config = HoneConfig::load(dir.path()).unwrap();

    // Project file wins over defaults
    assert_eq!(config.escalation.suggest_above, Some(35));
    assert_eq!(config.patterns.disabled, vec!["strip-filler-phrases"]);
    // Env wins over project file
    assert_eq!(config.escalation.answer_floor, Some(60));
    // Untouched fields keep compiled defaults
    assert_eq!(config.escalation.effective_intent_confidence_min(), 60);

    clear_hone_env_vars();
}

/// Missing project file falls back to compiled defaults.
#[test]
fn test_load_missing_file_fallback() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_hone_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    let config = HoneConfig::load(dir.path()).unwrap();

    assert!(config.patterns.is_empty());
    assert_eq!(config.escalation.effective_suggest_above(), 40);
    assert_eq!(config.escalation.effective_answer_floor(), 50);
}

/// Threshold values above 100 are rejected.
#[test]
fn test_out_of_range_threshold_rejected() {
    let config = HoneConfig::from_toml(
        r#"
[escalation]
suggest_above = 140
"#,
    )
    .unwrap();

    match HoneConfig::validate(&config) {
        Err(ConfigError::ValidationFailed { field, .. }) => {
            assert_eq!(field, "escalation.suggest_above");
        }
        other => panic!("expected ValidationFailed, got {other:?}"),
    }
}

/// An inverted band layout (suggest above strong-recommend) is rejected.
#[test]
fn test_inverted_bands_rejected() {
    let config = HoneConfig::from_toml(
        r#"
[escalation]
suggest_above = 80
strong_recommend_above = 60
"#,
    )
    .unwrap();

    assert!(HoneConfig::validate(&config).is_err());
}

/// Invalid TOML surfaces a parse error with the offending path.
#[test]
fn test_parse_error() {
    let err = HoneConfig::from_toml("patterns = nonsense").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

/// Config round-trips through TOML serialization.
#[test]
fn test_toml_round_trip() {
    let config = HoneConfig::from_toml(
        r#"
[patterns]
disabled = ["a", "b"]

[patterns.priority_overrides]
"add-section-headers" = 9

[escalation]
suggest_above = 45
"#,
    )
    .unwrap();

    let serialized = config.to_toml().unwrap();
    let reparsed = HoneConfig::from_toml(&serialized).unwrap();
    assert_eq!(reparsed.patterns.disabled, config.patterns.disabled);
    assert_eq!(
        reparsed.patterns.priority_overrides.get("add-section-headers"),
        Some(&9)
    );
    assert_eq!(reparsed.escalation.suggest_above, Some(45));
}
