use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use weekly_meals_mealplan::{DEFAULT_MAIN_TAG, DEFAULT_MAX_NIGHTS, DEFAULT_SIDE_TAG};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub planner: PlannerConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Where meal plans come from.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecipeSource {
    /// Built-in recipe catalog.
    #[default]
    Catalog,
    /// Remote recipe API, one main and one side per night.
    Provider,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlannerConfig {
    #[serde(default = "default_max_nights")]
    pub max_nights: u32,
    /// Only plan catalog recipes whose every ingredient is in stock
    #[serde(default)]
    pub require_stocked_ingredients: bool,
    #[serde(default)]
    pub source: RecipeSource,
    /// Fixed seed, every catalog plan becomes reproducible
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_nights: default_max_nights(),
            require_stocked_ingredients: false,
            source: RecipeSource::default(),
            seed: None,
        }
    }
}

fn default_max_nights() -> u32 {
    DEFAULT_MAX_NIGHTS
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    #[serde(default = "default_provider_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_main_tag")]
    pub main_tag: String,
    #[serde(default = "default_side_tag")]
    pub side_tag: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_provider_url(),
            api_key: String::new(),
            main_tag: default_main_tag(),
            side_tag: default_side_tag(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_provider_url() -> String {
    "https://api.spoonacular.com".to_string()
}

fn default_main_tag() -> String {
    DEFAULT_MAIN_TAG.to_string()
}

fn default_side_tag() -> String {
    DEFAULT_SIDE_TAG.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (WEEKLY_MEALS__PLANNER__SOURCE, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("WEEKLY_MEALS")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(api_key) = env::var("SPOONACULAR_API_KEY") {
            builder = builder.set_override("provider.api_key", api_key)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.planner.max_nights == 0 {
            return Err("Planner max_nights must be at least 1".to_string());
        }
        if self.planner.source == RecipeSource::Provider && self.provider.api_key.is_empty() {
            return Err(
                "Provider source needs an API key (provider.api_key or SPOONACULAR_API_KEY)"
                    .to_string(),
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 5000,
            },
            observability: ObservabilityConfig::default(),
            planner: PlannerConfig::default(),
            provider: ProviderConfig::default(),
        }
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_validation_zero_port() {
        let mut config = config();
        config.server.port = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_max_nights() {
        let mut config = config();
        config.planner.max_nights = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_provider_without_key() {
        let mut config = config();
        config.planner.source = RecipeSource::Provider;
        assert!(config.validate().is_err());

        config.provider.api_key = "secret".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_loads_toml_file() {
        let path = env::temp_dir().join(format!("weekly-meals-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            r#"
[server]
port = 8080

[planner]
max_nights = 5
source = "provider"
seed = 42

[provider]
api_key = "from-file"
main_tag = "dinner"
"#,
        )
        .unwrap();

        let config = Config::load(Some(path.to_string_lossy().into_owned())).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.planner.max_nights, 5);
        assert_eq!(config.planner.source, RecipeSource::Provider);
        assert_eq!(config.planner.seed, Some(42));
        assert_eq!(config.provider.main_tag, "dinner");
        assert_eq!(config.provider.side_tag, DEFAULT_SIDE_TAG);
        assert_eq!(config.provider.timeout_secs, 10);
        assert!(!config.planner.require_stocked_ingredients);
    }
}
