use strength_core::config::*;
use strength_core::errors::ConfigError;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = StrengthConfig::from_toml("").unwrap();

    // Scoring defaults
    assert_eq!(config.scoring.weights, FactorWeights::default());
    assert_eq!(config.scoring.weights.consistency, 0.15);
    assert_eq!(config.scoring.weights.social_engagement, 0.10);

    // Decay defaults
    assert_eq!(config.decay.grace_period_hours, 24.0);
    assert_eq!(config.decay.base_rate, 0.1);
    assert_eq!(config.decay.strength_rate, 0.2);

    // Store defaults
    assert_eq!(config.store.io_timeout_ms, 5_000);
    assert_eq!(config.store.max_cas_retries, 3);
    assert_eq!(
        config.store.activity_window,
        ActivityWindow::Recent { days: 30 }
    );
}

#[test]
fn default_weights_sum_to_one() {
    let sum = FactorWeights::default().sum();
    assert!((sum - 1.0).abs() < 1e-9, "weights sum to {sum}");
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[decay]
grace_period_hours = 48.0

[store]
max_cas_retries = 5
activity_window = { kind = "all_time" }
"#;
    let config = StrengthConfig::from_toml(toml).unwrap();
    assert_eq!(config.decay.grace_period_hours, 48.0);
    // Non-overridden fields keep defaults
    assert_eq!(config.decay.base_rate, 0.1);
    assert_eq!(config.store.max_cas_retries, 5);
    assert_eq!(config.store.io_timeout_ms, 5_000);
    assert_eq!(config.store.activity_window, ActivityWindow::AllTime);
}

#[test]
fn custom_weights_that_sum_to_one_are_accepted() {
    let toml = r#"
[scoring.weights]
consistency = 0.30
activity_count = 0.0
recent_activity = 0.0
engagement_depth = 0.15
activity_diversity = 0.10
progress_streak = 0.25
challenge_level = 0.10
social_engagement = 0.10
"#;
    let config = StrengthConfig::from_toml(toml).unwrap();
    assert_eq!(config.scoring.weights.consistency, 0.30);
    assert_eq!(config.scoring.weights.recent_activity, 0.0);
}

#[test]
fn weights_not_summing_to_one_are_rejected() {
    let toml = r#"
[scoring.weights]
consistency = 0.5
"#;
    let err = StrengthConfig::from_toml(toml).unwrap_err();
    match err {
        ConfigError::InvalidWeights { sum } => assert!((sum - 1.35).abs() < 1e-9),
        other => panic!("expected InvalidWeights, got {other:?}"),
    }
}

#[test]
fn negative_weight_is_rejected() {
    let weights = FactorWeights {
        consistency: -0.15,
        activity_count: 0.40,
        ..FactorWeights::default()
    };
    assert!(matches!(
        weights.validate(),
        Err(ConfigError::InvalidValue { .. })
    ));
}

#[test]
fn zero_timeout_is_rejected() {
    let err = StrengthConfig::from_toml("[store]\nio_timeout_ms = 0\n").unwrap_err();
    assert!(err.to_string().contains("store.io_timeout_ms"));
}

#[test]
fn empty_recent_window_is_rejected() {
    let toml = r#"
[store]
activity_window = { kind = "recent", days = 0 }
"#;
    assert!(StrengthConfig::from_toml(toml).is_err());
}

#[test]
fn negative_decay_rate_is_rejected() {
    let err = StrengthConfig::from_toml("[decay]\nbase_rate = -0.1\n").unwrap_err();
    assert!(err.to_string().contains("decay.base_rate"));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = StrengthConfig::from_toml("[store\nio_timeout_ms = ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn recent_window_lower_bound() {
    let now = chrono::Utc::now();
    let window = ActivityWindow::Recent { days: 7 };
    assert_eq!(window.since(now), Some(now - chrono::Duration::days(7)));
    assert_eq!(ActivityWindow::AllTime.since(now), None);
}
