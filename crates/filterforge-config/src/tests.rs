//! Tests for FilterForge configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        [rewrite]
        empty_collection = "match_nothing"
        replace_first_only = true

        [logging]
        level = "debug"
    "#;

    let config = FilterForgeConfig::from_toml_str(toml).unwrap();
    assert_eq!(
        config.rewrite.empty_collection,
        EmptyCollectionPolicy::MatchNothing
    );
    assert!(config.rewrite.replace_first_only);
    assert_eq!(config.logging.level.as_deref(), Some("debug"));
    assert!(config.validate().is_ok());
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        rewrite:
          empty_collection: drop
          replace_first_only: false
        logging:
          level: warn
    "#;

    let config = FilterForgeConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.rewrite.empty_collection, EmptyCollectionPolicy::Drop);
    assert_eq!(config.logging.level_or_default(), "warn");
}

#[test]
fn test_defaults_preserve_drop_policy() {
    let config = FilterForgeConfig::from_toml_str("").unwrap();
    assert_eq!(config, FilterForgeConfig::default());
    assert_eq!(config.rewrite.empty_collection, EmptyCollectionPolicy::Drop);
    assert!(!config.rewrite.replace_first_only);
    assert_eq!(config.logging.level_or_default(), "info");
}

#[test]
fn test_builder() {
    let config = FilterForgeConfig::new()
        .with_empty_collection(EmptyCollectionPolicy::MatchNothing)
        .with_replace_first_only(true)
        .with_log_level("trace");

    assert_eq!(
        config.rewrite.empty_collection,
        EmptyCollectionPolicy::MatchNothing
    );
    assert!(config.rewrite.replace_first_only);
    assert_eq!(config.logging.level.as_deref(), Some("trace"));
}

#[test]
fn test_unknown_policy_rejected() {
    let toml = r#"
        [rewrite]
        empty_collection = "explode"
    "#;
    assert!(matches!(
        FilterForgeConfig::from_toml_str(toml),
        Err(ConfigError::Toml(_))
    ));
}

#[test]
fn test_invalid_log_level() {
    let config = FilterForgeConfig::new().with_log_level("verbose");
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

    // Case does not matter
    let config = FilterForgeConfig::new().with_log_level("DEBUG");
    assert!(config.validate().is_ok());
}

#[test]
fn test_missing_file() {
    let result = FilterForgeConfig::load("/nonexistent/filterforge.toml");
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_load_validates() {
    let path = std::env::temp_dir().join(format!(
        "filterforge-config-test-{}.toml",
        std::process::id()
    ));
    std::fs::write(&path, "[logging]\nlevel = \"loud\"\n").unwrap();
    let result = FilterForgeConfig::load(&path);
    let _ = std::fs::remove_file(&path);
    assert!(matches!(result, Err(ConfigError::Invalid(_))));
}
