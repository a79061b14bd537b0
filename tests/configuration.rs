//! Tests for configuration system

use weekly_meals::config::{Config, RecipeSource};

#[test]
fn test_config_loads_from_default_toml() {
    let config = Config::load(None).expect("Failed to load config");

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 5000);
    assert_eq!(config.observability.log_level, "info");
    assert_eq!(config.planner.max_nights, 7);
    assert_eq!(config.planner.source, RecipeSource::Catalog);
    assert_eq!(config.provider.base_url, "https://api.spoonacular.com");
    assert_eq!(config.provider.timeout_secs, 10);
}

#[test]
fn test_default_config_is_valid_and_builds_app() {
    let config = Config::load(None).expect("Failed to load config");

    assert!(config.validate().is_ok());
    assert!(weekly_meals::create_app(&config).is_ok());
}
