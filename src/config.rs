use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use validator::Validate;

use crate::models::Penalties;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub admin: AdminSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: Option<u32>,
    pub min_connections: Option<u32>,
    pub acquire_timeout_secs: Option<u64>,
    pub idle_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CacheSettings {
    /// Redis URL for the shared tier; the in-memory tier works without it
    pub redis_url: Option<String>,
    pub ttl_secs: Option<u64>,
    pub l1_cache_size: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchingSettings {
    #[serde(default)]
    pub penalties: PenaltiesConfig,
}

/// Points deducted per failed rule dimension
///
/// Every penalty must be at least 1 so a failed rule always lowers the score.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PenaltiesConfig {
    #[serde(default = "default_business_type_penalty")]
    #[validate(range(min = 1, max = 100))]
    pub business_type: u8,
    #[serde(default = "default_industry_penalty")]
    #[validate(range(min = 1, max = 100))]
    pub industry: u8,
    #[serde(default = "default_state_penalty")]
    #[validate(range(min = 1, max = 100))]
    pub state: u8,
    #[serde(default = "default_turnover_penalty")]
    #[validate(range(min = 1, max = 100))]
    pub turnover: u8,
    #[serde(default = "default_company_age_penalty")]
    #[validate(range(min = 1, max = 100))]
    pub company_age: u8,
}

impl Default for PenaltiesConfig {
    fn default() -> Self {
        Self {
            business_type: default_business_type_penalty(),
            industry: default_industry_penalty(),
            state: default_state_penalty(),
            turnover: default_turnover_penalty(),
            company_age: default_company_age_penalty(),
        }
    }
}

impl From<&PenaltiesConfig> for Penalties {
    fn from(config: &PenaltiesConfig) -> Self {
        Penalties {
            business_type: config.business_type,
            industry: config.industry,
            state: config.state,
            turnover: config.turnover,
            company_age: config.company_age,
        }
    }
}

fn default_business_type_penalty() -> u8 { 25 }
fn default_industry_penalty() -> u8 { 20 }
fn default_state_penalty() -> u8 { 25 }
fn default_turnover_penalty() -> u8 { 15 }
fn default_company_age_penalty() -> u8 { 15 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminSettings {
    /// Key expected in the `X-Admin-Key` header; admin routes reject everything when unset
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Configuration file (config/default.toml)
    /// 2. Local overrides (config/local.toml)
    /// 3. Environment variables (prefixed with SCHEME__)
    /// 4. DATABASE_URL, when set
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., SCHEME__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?;

        finish(apply_database_url(settings)?)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?;

        finish(apply_database_url(settings)?)
    }

    /// Reject values the matcher cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.matching
            .penalties
            .validate()
            .map_err(|e| ConfigError::Message(format!("Invalid matching.penalties: {}", e)))
    }
}

fn finish(config: Config) -> Result<Settings, ConfigError> {
    let settings: Settings = config.try_deserialize()?;
    settings.validate()?;
    Ok(settings)
}

fn env_source() -> Environment {
    Environment::with_prefix("SCHEME")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Let the conventional DATABASE_URL variable win over file settings
fn apply_database_url(settings: Config) -> Result<Config, ConfigError> {
    match std::env::var("DATABASE_URL") {
        Ok(url) if !url.is_empty() => Config::builder()
            .add_source(settings)
            .set_override("database.url", url)?
            .build(),
        _ => Ok(settings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_penalties() {
        let penalties = Penalties::from(&PenaltiesConfig::default());
        assert_eq!(penalties, Penalties::default());
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }

    fn settings_from_toml(extra: &str) -> Result<Settings, ConfigError> {
        let toml = format!(
            r#"
            [server]
            host = "127.0.0.1"
            port = 8080

            [database]
            url = "postgres://localhost/schemes"

            {}
            "#,
            extra
        );
        let config = Config::builder()
            .add_source(config::File::from_str(&toml, config::FileFormat::Toml))
            .build()?;
        finish(config)
    }

    #[test]
    fn test_partial_sections_use_defaults() {
        let settings = settings_from_toml("[matching.penalties]\nindustry = 30").unwrap();

        assert_eq!(settings.matching.penalties.industry, 30);
        assert_eq!(settings.matching.penalties.state, 25);
        assert!(settings.cache.redis_url.is_none());
        assert!(settings.admin.api_key.is_none());
    }

    #[test]
    fn test_zero_penalty_is_rejected() {
        let err = settings_from_toml("[matching.penalties]\nindustry = 0").unwrap_err();
        assert!(err.to_string().contains("industry"));
    }

    #[test]
    fn test_penalty_above_full_score_is_rejected() {
        assert!(settings_from_toml("[matching.penalties]\nstate = 101").is_err());
    }

    #[test]
    fn test_default_penalties_pass_validation() {
        assert!(PenaltiesConfig::default().validate().is_ok());
        assert!(settings_from_toml("").is_ok());
    }
}
